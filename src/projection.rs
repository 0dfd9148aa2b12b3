//! Short-horizon cost trajectory derived from network stress.

use rand::Rng;
use rust_decimal::Decimal;

use crate::network::{RouteNetwork, RouteStatus};

/// Default projection horizon in steps.
pub const DEFAULT_STEPS: usize = 5;

/// Project a per-step cost series from the current edge statuses.
///
/// Each disrupted route adds 2 to the base price, each rerouted route adds 3,
/// and every step draws an independent integer shock in [-3, 3]. Values are
/// floored at the base price and rounded to two decimals. The network is not
/// mutated, so the disruption counts are identical across steps; only the
/// shock varies. Callers that need determinism inject a seeded `Rng`.
pub fn project<R: Rng + ?Sized>(
    network: &RouteNetwork,
    base_price: Decimal,
    steps: usize,
    rng: &mut R,
) -> Vec<Decimal> {
    let disrupted = network.count_with_status(RouteStatus::Disrupted) as i64;
    let rerouted = network.count_with_status(RouteStatus::Rerouted) as i64;
    let stress = 2 * disrupted + 3 * rerouted;

    (0..steps)
        .map(|_| {
            let shock: i64 = rng.gen_range(-3..=3);
            let raw = base_price + Decimal::from(stress + shock);
            raw.max(base_price).round_dp(2)
        })
        .collect()
}
