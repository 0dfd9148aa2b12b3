use thiserror::Error;

/// Fatal simulation errors surfaced to the caller.
///
/// Recoverable conditions (reference price unavailable, unknown
/// category/severity) are substituted with defaults at the point of use and
/// never appear here.
#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("malformed topology field `{field}` on route {from} -> {to}: {value:?}")]
    DataFormat {
        field: &'static str,
        from: String,
        to: String,
        value: String,
    },
}
