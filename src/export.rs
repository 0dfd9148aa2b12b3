//! Result payload assembly and the numeric serialization boundary.
//!
//! Prices are `Decimal` internally; the wire format wants plain JSON
//! numbers, so every decimal field goes through a coercion adapter instead
//! of `Decimal`'s default string representation.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::impact::ImpactReport;
use crate::network::{RouteNetwork, RouteStatus};

/// One exported edge, in the network's insertion order.
#[derive(Debug, Clone, Serialize)]
pub struct RouteRecord {
    pub from: String,
    pub to: String,
    pub status: RouteStatus,
    pub capacity: u32,
    #[serde(with = "decimal_num")]
    pub cost: Decimal,
}

/// Snapshot payload for the network-based model.
#[derive(Debug, Serialize)]
pub struct NetworkReport {
    #[serde(with = "decimal_num")]
    pub base_oil_price: Decimal,
    pub routes: Vec<RouteRecord>,
    #[serde(with = "decimal_seq")]
    pub cost_over_time: Vec<Decimal>,
}

/// Payload for the parametric model; the impact figures keep the caller's
/// camelCase field names.
#[derive(Debug, Serialize)]
pub struct ImpactSimulationReport {
    #[serde(rename = "deliveryDelayDays")]
    pub delivery_delay_days: i64,
    #[serde(rename = "costIncreasePercent")]
    pub cost_increase_percent: i64,
    #[serde(rename = "warehouseCongestionLevel")]
    pub warehouse_congestion_level: i64,
    pub routes: Vec<RouteRecord>,
    #[serde(with = "decimal_seq")]
    pub cost_over_time: Vec<Decimal>,
}

impl ImpactSimulationReport {
    pub fn assemble(
        impact: ImpactReport,
        routes: Vec<RouteRecord>,
        cost_over_time: Vec<Decimal>,
    ) -> Self {
        Self {
            delivery_delay_days: impact.delivery_delay_days,
            cost_increase_percent: impact.cost_increase_percent,
            warehouse_congestion_level: impact.warehouse_congestion_level,
            routes,
            cost_over_time,
        }
    }
}

/// Export every route in insertion order. Read-only: nothing mutates the
/// network after this point.
pub fn export_state(network: &RouteNetwork) -> Vec<RouteRecord> {
    network
        .routes()
        .iter()
        .map(|route| RouteRecord {
            from: route.from.clone(),
            to: route.to.clone(),
            status: route.status,
            capacity: route.capacity,
            cost: route.unit_cost,
        })
        .collect()
}

pub(crate) mod decimal_num {
    use rust_decimal::prelude::ToPrimitive;
    use rust_decimal::Decimal;
    use serde::Serializer;

    pub fn serialize<S: Serializer>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(value.to_f64().unwrap_or_default())
    }
}

pub(crate) mod decimal_seq {
    use rust_decimal::prelude::ToPrimitive;
    use rust_decimal::Decimal;
    use serde::ser::SerializeSeq;
    use serde::Serializer;

    pub fn serialize<S: Serializer>(values: &[Decimal], serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(values.len()))?;
        for value in values {
            seq.serialize_element(&value.to_f64().unwrap_or_default())?;
        }
        seq.end()
    }
}
