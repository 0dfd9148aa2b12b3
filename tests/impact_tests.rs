use routeforge::impact::{assess, ImpactParameters, ImpactReport};

#[test]
fn port_closure_medium_worked_example() {
    let report = assess("port closure", "medium", 7);
    assert_eq!(
        report,
        ImpactReport {
            delivery_delay_days: 7,
            cost_increase_percent: 30,
            warehouse_congestion_level: 63,
        }
    );
}

#[test]
fn unknown_category_matches_port_closure() {
    let fallback = assess("unknown category", "medium", 7);
    let canonical = assess("Port Closure", "medium", 7);
    assert_eq!(fallback, canonical);
}

#[test]
fn category_lookup_survives_case_and_whitespace_noise() {
    let noisy = assess("  pOrT   cLoSuRe ", " MEDIUM ", 7);
    let canonical = assess("Port Closure", "medium", 7);
    assert_eq!(noisy, canonical);
}

#[test]
fn unknown_severity_uses_neutral_multiplier() {
    let unknown = assess("Fuel Hike", "galactic", 7);
    let medium = assess("Fuel Hike", "medium", 7);
    assert_eq!(unknown, medium);
}

#[test]
fn fuel_hike_medium_figures() {
    let report = assess("Fuel Hike", "medium", 7);
    // delay = floor(1*1 + 7/3) = 3
    // cost% = floor((17.5 + 1.5 + 1000) / 10000 * 100) = 10
    // congestion = floor(3 * 1.1 * 1 * 5) = 16
    assert_eq!(report.delivery_delay_days, 3);
    assert_eq!(report.cost_increase_percent, 10);
    assert_eq!(report.warehouse_congestion_level, 16);
}

#[test]
fn low_severity_halves_the_impact() {
    let report = assess("Port Closure", "low", 0);
    // delay = floor(5*0.5 + 0) = 2
    assert_eq!(report.delivery_delay_days, 2);
    // cost% = floor((0 + 0.5 + 1500) / 10000 * 100) = 15
    assert_eq!(report.cost_increase_percent, 15);
    // congestion = floor(2 * 1.8 * 0.5 * 5) = 9
    assert_eq!(report.warehouse_congestion_level, 9);
}

#[test]
fn critical_severity_clamps_congestion_at_100() {
    let report = assess("Natural Disaster", "critical", 30);
    // delay = floor(10*3 + 10) = 40; raw congestion 40*2*3*5 = 1200
    assert_eq!(report.delivery_delay_days, 40);
    assert_eq!(report.warehouse_congestion_level, 100);
    assert_eq!(report.cost_increase_percent, 122);
}

#[test]
fn zero_duration_still_reports_base_impact() {
    let report = assess("Labor Strike", "medium", 0);
    assert_eq!(report.delivery_delay_days, 7);
    assert!(report.cost_increase_percent > 0);
}

#[test]
fn parameters_default_to_the_documented_values() {
    let params = ImpactParameters::default();
    assert_eq!(params.disruption_type, "Port Closure");
    assert_eq!(params.severity, "medium");
    assert_eq!(params.duration_days, 7);
}

#[test]
fn extended_categories_differ_from_the_default() {
    let pandemic = assess("Pandemic", "medium", 7);
    let default = assess("Port Closure", "medium", 7);
    assert!(pandemic.delivery_delay_days > default.delivery_delay_days);

    let customs = assess("customs delay", "medium", 7);
    assert_ne!(customs, default);
}
