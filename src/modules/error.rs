use thiserror::Error;

/// Failures reported by the bundled transformer modules.
///
/// Transformers wrap these in [`MapError::Transformer`](crate::MapError), so
/// they reach the caller unchanged.
#[derive(Error, Debug)]
pub enum ModuleError {
    #[error("invalid timestamp text: {0}")]
    Parse(#[from] chrono::ParseError),

    #[error("timestamp out of range: {seconds}s {nanos}ns")]
    OutOfRange { seconds: i64, nanos: i64 },

    #[error("value {value} does not fit in {target}")]
    Overflow { value: String, target: &'static str },

    #[error("invalid value type: expected {expected}, found {found}")]
    UnexpectedType {
        expected: &'static str,
        found: &'static str,
    },
}
