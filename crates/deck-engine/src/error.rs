use thiserror::Error;

/// Errors raised while configuring a deck or exporting its records.
///
/// Runtime lookups never fail: unknown players or phases degrade to a
/// no-op, so this type only covers setup and JSON.
#[derive(Debug, Error)]
pub enum DeckError {
    #[error("invalid deck JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("a deck needs at least one slide")]
    NoSlides,

    #[error("deck config field `{field}` is {value}, expected {expected}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        expected: &'static str,
    },
}
