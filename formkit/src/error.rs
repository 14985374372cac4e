//! Control error types.

use thiserror::Error;

/// Errors surfaced by control helpers.
///
/// None of these reach a render: controls log them and keep their last
/// good value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ControlError {
    /// A range input produced a value that is not an integer.
    #[error("Range '{label}' received non-integer value '{raw}'")]
    InvalidRangeValue {
        /// Label of the range control.
        label: String,
        /// The raw value received.
        raw: String,
    },

    /// A selection event carried a value that cannot be an option key.
    #[error("Value '{0}' cannot identify an option")]
    InvalidOptionKey(String),
}
