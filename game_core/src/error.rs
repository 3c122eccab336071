use thiserror::Error;

/// Rejected game configuration
///
/// Dimensions feed divisions in the spin calculation, so they must be
/// positive and must fit inside the arena.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{name} must be a positive finite number, got {value}")]
    NotPositive { name: &'static str, value: f32 },

    #[error("{name} ({value}) does not fit in arena {axis} ({limit})")]
    TooLarge {
        name: &'static str,
        value: f32,
        axis: &'static str,
        limit: f32,
    },
}
