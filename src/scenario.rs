//! Disruption scenarios and their propagation over a route network.
//!
//! A scenario is plain data rather than embedded constants, so alternate
//! geopolitical scenarios can be applied to the same topology without code
//! change. The canonical default models a Gulf chokepoint closure.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::network::RouteNetwork;

/// A named disruption scenario: which hub loses its outbound routes, which
/// chokepoint closes entirely, and which alternate origins pick up traffic
/// toward a fixed destination.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisruptionScenario {
    pub hub: String,
    pub chokepoint: String,
    pub reroute_candidates: Vec<String>,
    pub destination: String,
}

impl Default for DisruptionScenario {
    fn default() -> Self {
        Self {
            hub: "Iran".to_string(),
            chokepoint: "Strait of Hormuz".to_string(),
            reroute_candidates: vec!["Saudi Arabia".to_string(), "Russia".to_string()],
            destination: "India".to_string(),
        }
    }
}

impl DisruptionScenario {
    /// Disrupt first, then reroute; reroutes override disruptions.
    pub fn apply(&self, network: &mut RouteNetwork) {
        disrupt_hub_and_chokepoint(network, &self.hub, &self.chokepoint);
        apply_reroutes(network, &self.reroute_candidates, &self.destination);
    }
}

/// Mark disrupted every route leaving `hub` and every route incident to
/// `chokepoint` in either direction. A chokepoint absent from the topology
/// is a no-op, not an error. Idempotent.
pub fn disrupt_hub_and_chokepoint(network: &mut RouteNetwork, hub: &str, chokepoint: &str) {
    let chokepoint_present = network.has_node(chokepoint);
    let mut hit = 0usize;
    for route in network.routes_mut() {
        let outbound_from_hub = route.from == hub;
        let touches_chokepoint =
            chokepoint_present && (route.from == chokepoint || route.to == chokepoint);
        if outbound_from_hub || touches_chokepoint {
            route.mark_disrupted();
            hit += 1;
        }
    }
    debug!(hub, chokepoint, routes_hit = hit, "disruption applied");
}

/// For each candidate origin, in order, promote the candidate -> destination
/// route to rerouted if it exists. Each edge is independent, so the order
/// only matters for determinism, not for the outcome.
pub fn apply_reroutes(network: &mut RouteNetwork, candidates: &[String], destination: &str) {
    for candidate in candidates {
        if let Some(route) = network.route_mut(candidate, destination) {
            route.mark_rerouted();
            debug!(from = %candidate, to = %destination, "route promoted to reroute");
        }
    }
}
