//! RouteForge - Supply-Chain Disruption Simulation Core

pub mod error;
pub mod export;
pub mod impact;
pub mod network;
pub mod price;
pub mod projection;
pub mod scenario;
pub mod simulator;
pub mod telemetry;
pub mod template;

pub use error::SimulationError;
pub use network::{RouteNetwork, RouteStatus, TopologyRow};
pub use scenario::DisruptionScenario;
pub use simulator::SupplyChainSimulator;
