//! Parametric disruption-impact model.
//!
//! Independent of the route graph: given a disruption category, a severity
//! and a duration, it derives delivery delay, cost increase and warehouse
//! congestion from a fixed factor table. Unknown categories and severities
//! degrade to defaults rather than failing; misses are logged so operators
//! can spot typo'd inputs.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Category used when a lookup misses.
pub const DEFAULT_CATEGORY: &str = "Port Closure";
/// Severity used when a lookup misses (multiplier 1).
pub const DEFAULT_SEVERITY: &str = "medium";

/// Holding cost per delayed day, as a fraction of daily goods value.
const INVENTORY_COST_PER_DAY: f64 = 0.5;
/// Notional value of the goods in transit.
const GOODS_VALUE: f64 = 10_000.0;

/// Per-category impact factors.
#[derive(Debug, Clone, Copy)]
pub struct DisruptionFactors {
    pub base_delay_days: f64,
    pub cost_multiplier: f64,
    pub congestion_multiplier: f64,
    pub lost_sales_fraction: f64,
}

const fn factors(
    base_delay_days: f64,
    cost_multiplier: f64,
    congestion_multiplier: f64,
    lost_sales_fraction: f64,
) -> DisruptionFactors {
    DisruptionFactors {
        base_delay_days,
        cost_multiplier,
        congestion_multiplier,
        lost_sales_fraction,
    }
}

static DISRUPTION_FACTORS: Lazy<HashMap<&'static str, DisruptionFactors>> = Lazy::new(|| {
    HashMap::from([
        ("Port Closure", factors(5.0, 1.5, 1.8, 0.3)),
        ("Fuel Hike", factors(1.0, 2.5, 1.1, 0.1)),
        ("Natural Disaster", factors(10.0, 1.8, 2.0, 0.4)),
        ("Labor Strike", factors(7.0, 1.2, 1.5, 0.25)),
        ("Cyber Attack", factors(3.0, 2.0, 1.3, 0.35)),
        ("Border Closure", factors(6.0, 1.6, 1.7, 0.3)),
        ("Canal Blockage", factors(8.0, 1.7, 1.9, 0.35)),
        ("Customs Delay", factors(4.0, 1.1, 1.4, 0.15)),
        ("Severe Weather", factors(3.0, 1.4, 1.6, 0.2)),
        ("Pandemic", factors(14.0, 2.2, 2.0, 0.5)),
    ])
});

static SEVERITY_MULTIPLIERS: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    HashMap::from([
        ("low", 0.5),
        ("medium", 1.0),
        ("high", 2.0),
        ("critical", 3.0),
    ])
});

/// Trim, collapse interior whitespace and title-case each word, so
/// `"  pOrT  closure "` matches the `"Port Closure"` table key.
pub fn normalize_category(raw: &str) -> String {
    raw.split_whitespace()
        .map(title_case_word)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Severity keys are plain lowercase.
pub fn normalize_severity(raw: &str) -> String {
    raw.trim().to_lowercase()
}

fn title_case_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

fn factors_for(category: &str) -> DisruptionFactors {
    match DISRUPTION_FACTORS.get(category) {
        Some(f) => *f,
        None => {
            warn!(category, fallback = DEFAULT_CATEGORY, "unknown disruption category");
            DISRUPTION_FACTORS[DEFAULT_CATEGORY]
        }
    }
}

fn severity_multiplier(severity: &str) -> f64 {
    match SEVERITY_MULTIPLIERS.get(severity) {
        Some(&m) => m,
        None => {
            warn!(severity, "unknown severity, using neutral multiplier");
            1.0
        }
    }
}

/// Caller-supplied parameters for a parametric run, with the documented
/// defaults when a field is omitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ImpactParameters {
    pub disruption_type: String,
    pub severity: String,
    pub duration_days: u32,
}

impl Default for ImpactParameters {
    fn default() -> Self {
        Self {
            disruption_type: DEFAULT_CATEGORY.to_string(),
            severity: DEFAULT_SEVERITY.to_string(),
            duration_days: 7,
        }
    }
}

/// The three derived figures reported to the caller. Intermediate cost
/// components are not part of the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImpactReport {
    pub delivery_delay_days: i64,
    pub cost_increase_percent: i64,
    pub warehouse_congestion_level: i64,
}

/// Assess the impact of one disruption. Pure: no process-wide state, safe to
/// call once per request.
pub fn assess(category: &str, severity: &str, duration_days: u32) -> ImpactReport {
    let factors = factors_for(&normalize_category(category));
    let sev = severity_multiplier(&normalize_severity(severity));
    let duration = f64::from(duration_days);

    let delay = (factors.base_delay_days * sev + duration / 3.0).floor();

    let logistics_cost = duration * factors.cost_multiplier * sev;
    let inventory_cost = delay * INVENTORY_COST_PER_DAY * sev;
    let lost_sales = GOODS_VALUE * factors.lost_sales_fraction * sev;
    let cost_increase =
        ((logistics_cost + inventory_cost + lost_sales) / GOODS_VALUE * 100.0).floor();

    let congestion = (delay * factors.congestion_multiplier * sev * 5.0)
        .floor()
        .clamp(0.0, 100.0);

    ImpactReport {
        delivery_delay_days: delay as i64,
        cost_increase_percent: cost_increase as i64,
        warehouse_congestion_level: congestion as i64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_normalization_collapses_case_and_whitespace() {
        assert_eq!(normalize_category("  pOrT   cLoSuRe "), "Port Closure");
        assert_eq!(normalize_category("fuel hike"), "Fuel Hike");
        assert_eq!(normalize_category(""), "");
    }

    #[test]
    fn severity_normalization_lowercases() {
        assert_eq!(normalize_severity(" HIGH "), "high");
    }

    #[test]
    fn all_ten_categories_resolve() {
        for key in [
            "Port Closure",
            "Fuel Hike",
            "Natural Disaster",
            "Labor Strike",
            "Cyber Attack",
            "Border Closure",
            "Canal Blockage",
            "Customs Delay",
            "Severe Weather",
            "Pandemic",
        ] {
            assert!(DISRUPTION_FACTORS.contains_key(key), "missing {key}");
        }
        assert_eq!(DISRUPTION_FACTORS.len(), 10);
    }
}
