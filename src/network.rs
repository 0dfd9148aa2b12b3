//! Directed route network over named locations.

use std::collections::{HashMap, HashSet};
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::SimulationError;

/// Operational state of a directed route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteStatus {
    Active,
    Disrupted,
    Rerouted,
}

/// One row of the tabular topology input. Cells arrive as raw text; numeric
/// validation happens at load time, not in the collaborator that produced
/// the rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopologyRow {
    pub from: String,
    pub to: String,
    pub capacity: String,
    pub transport_cost: String,
}

impl TopologyRow {
    pub fn new(from: &str, to: &str, capacity: &str, transport_cost: &str) -> Self {
        Self {
            from: from.to_string(),
            to: to.to_string(),
            capacity: capacity.to_string(),
            transport_cost: transport_cost.to_string(),
        }
    }
}

/// A directed edge. Capacity and unit cost are fixed at load; only the
/// status changes, and only forward (active -> disrupted -> rerouted).
#[derive(Debug, Clone)]
pub struct Route {
    pub from: String,
    pub to: String,
    pub capacity: u32,
    pub unit_cost: Decimal,
    pub status: RouteStatus,
}

impl Route {
    /// Mark disrupted unless the route was already promoted to a reroute.
    pub(crate) fn mark_disrupted(&mut self) {
        if self.status == RouteStatus::Active {
            self.status = RouteStatus::Disrupted;
        }
    }

    /// Reroutes win over disruptions unconditionally.
    pub(crate) fn mark_rerouted(&mut self) {
        self.status = RouteStatus::Rerouted;
    }
}

/// Directed graph of routes, keyed by (from, to). Edge iteration order is
/// insertion order so exports are reproducible within a run.
#[derive(Debug, Default, Clone)]
pub struct RouteNetwork {
    routes: Vec<Route>,
    index: HashMap<(String, String), usize>,
    nodes: HashSet<String>,
}

impl RouteNetwork {
    /// Build a network from tabular rows. Duplicate (from, to) pairs
    /// overwrite the earlier row's attributes in place, matching table-load
    /// semantics. Non-numeric capacity or cost aborts the load.
    pub fn load(rows: &[TopologyRow]) -> Result<Self, SimulationError> {
        let mut network = Self::default();
        for row in rows {
            let capacity = parse_capacity(row)?;
            let unit_cost = parse_cost(row)?;
            network.upsert_route(Route {
                from: row.from.clone(),
                to: row.to.clone(),
                capacity,
                unit_cost,
                status: RouteStatus::Active,
            });
        }
        Ok(network)
    }

    fn upsert_route(&mut self, route: Route) {
        self.nodes.insert(route.from.clone());
        self.nodes.insert(route.to.clone());
        let key = (route.from.clone(), route.to.clone());
        match self.index.get(&key) {
            Some(&slot) => self.routes[slot] = route,
            None => {
                self.index.insert(key, self.routes.len());
                self.routes.push(route);
            }
        }
    }

    pub fn has_node(&self, name: &str) -> bool {
        self.nodes.contains(name)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn route_count(&self) -> usize {
        self.routes.len()
    }

    /// Routes in insertion order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub(crate) fn routes_mut(&mut self) -> impl Iterator<Item = &mut Route> + '_ {
        self.routes.iter_mut()
    }

    pub fn route(&self, from: &str, to: &str) -> Option<&Route> {
        self.index
            .get(&(from.to_string(), to.to_string()))
            .map(|&slot| &self.routes[slot])
    }

    pub(crate) fn route_mut(&mut self, from: &str, to: &str) -> Option<&mut Route> {
        match self.index.get(&(from.to_string(), to.to_string())) {
            Some(&slot) => self.routes.get_mut(slot),
            None => None,
        }
    }

    pub fn count_with_status(&self, status: RouteStatus) -> usize {
        self.routes.iter().filter(|r| r.status == status).count()
    }
}

fn parse_capacity(row: &TopologyRow) -> Result<u32, SimulationError> {
    row.capacity
        .trim()
        .parse::<u32>()
        .map_err(|_| SimulationError::DataFormat {
            field: "capacity",
            from: row.from.clone(),
            to: row.to.clone(),
            value: row.capacity.clone(),
        })
}

fn parse_cost(row: &TopologyRow) -> Result<Decimal, SimulationError> {
    let cost = Decimal::from_str(row.transport_cost.trim()).map_err(|_| {
        SimulationError::DataFormat {
            field: "transport_cost",
            from: row.from.clone(),
            to: row.to.clone(),
            value: row.transport_cost.clone(),
        }
    })?;
    if cost.is_sign_negative() {
        return Err(SimulationError::DataFormat {
            field: "transport_cost",
            from: row.from.clone(),
            to: row.to.clone(),
            value: row.transport_cost.clone(),
        });
    }
    Ok(cost)
}
