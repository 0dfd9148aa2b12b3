//! Linear corridor templates: fixed-lookup rerouting and per-node
//! inventory projection for the parametric model.

use serde::{Deserialize, Serialize};

use crate::impact::normalize_severity;

/// Hub substituted into a corridor when a node is routed around.
pub const ALTERNATE_HUB: &str = "Alternate Hub";

/// A predefined shipping corridor: an ordered node chain plus its directed
/// hop list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteTemplate {
    pub id: String,
    pub name: String,
    pub nodes: Vec<String>,
    pub routes: Vec<(String, String)>,
}

impl RouteTemplate {
    /// Build a corridor whose hops follow the node chain.
    pub fn corridor(id: &str, name: &str, nodes: &[&str]) -> Self {
        let routes = nodes
            .windows(2)
            .map(|pair| (pair[0].to_string(), pair[1].to_string()))
            .collect();
        Self {
            id: id.to_string(),
            name: name.to_string(),
            nodes: nodes.iter().map(|n| n.to_string()).collect(),
            routes,
        }
    }

    fn position_of(&self, node: &str) -> Option<usize> {
        self.nodes.iter().position(|n| n == node)
    }
}

/// Route around `affected` for high and critical severities by splicing the
/// corridor through [`ALTERNATE_HUB`]. The target is a fixed lookup on the
/// neighboring nodes, not a computed path. Endpoints cannot be routed
/// around; lower severities keep the original hops.
pub fn reroute_around(
    template: &RouteTemplate,
    affected: &str,
    severity: &str,
) -> Vec<(String, String)> {
    let severity = normalize_severity(severity);
    if severity != "high" && severity != "critical" {
        return template.routes.clone();
    }
    let Some(position) = template.position_of(affected) else {
        return template.routes.clone();
    };
    if position == 0 || position + 1 >= template.nodes.len() {
        return template.routes.clone();
    }

    let prev = &template.nodes[position - 1];
    let next = &template.nodes[position + 1];
    let mut rerouted: Vec<(String, String)> = template
        .routes
        .iter()
        .filter(|(from, to)| from != prev && to != next)
        .cloned()
        .collect();
    rerouted.push((prev.clone(), ALTERNATE_HUB.to_string()));
    rerouted.push((ALTERNATE_HUB.to_string(), next.clone()));
    rerouted
}

/// Project inventory per corridor node. Baseline falls 10 points per hop
/// from the origin; nodes at or downstream of the affected node lose
/// `delay * 5 / (distance + 1)` more, floored at zero. An affected node
/// outside the corridor leaves the baseline untouched.
pub fn inventory_levels(template: &RouteTemplate, affected: &str, delay_days: i64) -> Vec<i64> {
    let affected_position = template.position_of(affected);
    template
        .nodes
        .iter()
        .enumerate()
        .map(|(i, _)| {
            let mut level = 100.0 - (i as f64) * 10.0;
            if let Some(position) = affected_position {
                if i >= position {
                    let distance = (i - position) as f64;
                    level -= (delay_days as f64 * 5.0) / (distance + 1.0);
                }
            }
            (level.floor() as i64).max(0)
        })
        .collect()
}
