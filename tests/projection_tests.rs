use rand::rngs::StdRng;
use rand::SeedableRng;
use routeforge::network::{RouteNetwork, RouteStatus, TopologyRow};
use routeforge::projection::{project, DEFAULT_STEPS};
use routeforge::scenario::DisruptionScenario;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn disrupted_network() -> RouteNetwork {
    let rows = vec![
        TopologyRow::new("Iran", "India", "120", "14.5"),
        TopologyRow::new("Iran", "China", "100", "13.0"),
        TopologyRow::new("Saudi Arabia", "India", "90", "11.0"),
        TopologyRow::new("Russia", "India", "70", "15.0"),
        TopologyRow::new("Brazil", "USA", "60", "9.25"),
    ];
    let mut network = RouteNetwork::load(&rows).unwrap();
    DisruptionScenario::default().apply(&mut network);
    network
}

#[test]
fn five_step_series_floored_at_base_price() {
    let network = disrupted_network();
    let base = dec!(80.0);
    let mut rng = StdRng::seed_from_u64(7);

    let series = project(&network, base, DEFAULT_STEPS, &mut rng);
    assert_eq!(series.len(), 5);
    for value in &series {
        assert!(*value >= base, "{value} fell below base {base}");
    }
}

#[test]
fn series_stays_within_the_stress_band() {
    let network = disrupted_network();
    // 2 disrupted edges and 2 rerouted edges: stress = 2*2 + 3*2 = 10
    assert_eq!(network.count_with_status(RouteStatus::Disrupted), 2);
    assert_eq!(network.count_with_status(RouteStatus::Rerouted), 2);

    let base = dec!(80.0);
    let mut rng = StdRng::seed_from_u64(99);
    let ceiling = base + Decimal::from(10 + 3);

    for value in project(&network, base, 50, &mut rng) {
        assert!(value <= ceiling);
        assert!(value >= base);
    }
}

#[test]
fn seeded_rng_makes_the_series_reproducible() {
    let network = disrupted_network();
    let base = dec!(82.55);

    let mut first_rng = StdRng::seed_from_u64(42);
    let mut second_rng = StdRng::seed_from_u64(42);
    let first = project(&network, base, DEFAULT_STEPS, &mut first_rng);
    let second = project(&network, base, DEFAULT_STEPS, &mut second_rng);
    assert_eq!(first, second);
}

#[test]
fn quiet_network_hugs_the_base_price() {
    let rows = vec![TopologyRow::new("Brazil", "USA", "60", "9.25")];
    let network = RouteNetwork::load(&rows).unwrap();
    let base = dec!(80.0);
    let mut rng = StdRng::seed_from_u64(3);

    for value in project(&network, base, 50, &mut rng) {
        assert!(value >= base);
        assert!(value <= base + Decimal::from(3));
    }
}

#[test]
fn values_are_rounded_to_two_decimals() {
    let network = disrupted_network();
    let mut rng = StdRng::seed_from_u64(11);

    for value in project(&network, dec!(80.005), 20, &mut rng) {
        assert_eq!(value, value.round_dp(2));
    }
}

#[test]
fn single_step_projection_is_supported() {
    let network = disrupted_network();
    let mut rng = StdRng::seed_from_u64(1);
    assert_eq!(project(&network, dec!(80.0), 1, &mut rng).len(), 1);
}
