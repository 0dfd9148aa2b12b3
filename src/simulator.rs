//! One-shot simulation runs. Each run owns its own network; nothing is
//! shared across invocations.

use rand::Rng;
use rust_decimal::Decimal;
use tracing::info;

use crate::error::SimulationError;
use crate::export::{export_state, ImpactSimulationReport, NetworkReport};
use crate::impact::{assess, ImpactParameters};
use crate::network::{RouteNetwork, RouteStatus, TopologyRow};
use crate::projection::{project, DEFAULT_STEPS};
use crate::scenario::DisruptionScenario;

/// Single-run simulator: load the topology, apply one disruption scenario,
/// project costs, assemble the payload.
#[derive(Debug)]
pub struct SupplyChainSimulator {
    network: RouteNetwork,
    scenario: DisruptionScenario,
    base_price: Decimal,
}

impl SupplyChainSimulator {
    /// Build a simulator over the canonical scenario.
    pub fn new(rows: &[TopologyRow], base_price: Decimal) -> Result<Self, SimulationError> {
        Self::with_scenario(rows, base_price, DisruptionScenario::default())
    }

    pub fn with_scenario(
        rows: &[TopologyRow],
        base_price: Decimal,
        scenario: DisruptionScenario,
    ) -> Result<Self, SimulationError> {
        let network = RouteNetwork::load(rows)?;
        Ok(Self {
            network,
            scenario,
            base_price,
        })
    }

    pub fn network(&self) -> &RouteNetwork {
        &self.network
    }

    /// Run the network-based model with the process-wide generator.
    pub fn run(&mut self) -> NetworkReport {
        self.run_with_rng(&mut rand::thread_rng())
    }

    pub fn run_with_rng<R: Rng + ?Sized>(&mut self, rng: &mut R) -> NetworkReport {
        self.propagate();
        let cost_over_time = project(&self.network, self.base_price, DEFAULT_STEPS, rng);
        NetworkReport {
            base_oil_price: self.base_price,
            routes: export_state(&self.network),
            cost_over_time,
        }
    }

    /// Run the parametric model alongside the network snapshot. The two
    /// models stay independent: the impact figures come solely from the
    /// caller's parameters, never from graph state.
    pub fn run_parametric(&mut self, params: &ImpactParameters) -> ImpactSimulationReport {
        self.run_parametric_with_rng(params, &mut rand::thread_rng())
    }

    pub fn run_parametric_with_rng<R: Rng + ?Sized>(
        &mut self,
        params: &ImpactParameters,
        rng: &mut R,
    ) -> ImpactSimulationReport {
        let impact = assess(&params.disruption_type, &params.severity, params.duration_days);
        self.propagate();
        let cost_over_time = project(&self.network, self.base_price, DEFAULT_STEPS, rng);
        ImpactSimulationReport::assemble(impact, export_state(&self.network), cost_over_time)
    }

    fn propagate(&mut self) {
        self.scenario.apply(&mut self.network);
        info!(
            routes = self.network.route_count(),
            disrupted = self.network.count_with_status(RouteStatus::Disrupted),
            rerouted = self.network.count_with_status(RouteStatus::Rerouted),
            "scenario propagated"
        );
    }
}
