use thiserror::Error;

pub type MapResult<T> = Result<T, MapError>;

/// Boxed error produced by transformers and scanners.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Error, Debug)]
pub enum MapError {
    /// No rule of the conversion chain applies to the pair.
    #[error("can't convert data {from} -> {to}")]
    NoViableConversion {
        from: &'static str,
        to: &'static str,
    },

    /// Failure reported by a registered transformer, surfaced as-is.
    #[error(transparent)]
    Transformer(BoxError),

    /// Failure reported by a destination's `Scan` implementation, surfaced as-is.
    #[error(transparent)]
    Scan(BoxError),

    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    /// A sequence was copied into a fixed-size array of another length.
    #[error("length mismatch: expected {expected} elements, found {found}")]
    LengthMismatch { expected: usize, found: usize },

    #[error("maximum mapping depth of {limit} exceeded while converting into {type_name}")]
    DepthExceeded {
        limit: usize,
        type_name: &'static str,
    },
}

impl MapError {
    pub fn transformer<E: Into<BoxError>>(err: E) -> Self {
        MapError::Transformer(err.into())
    }

    pub fn scan<E: Into<BoxError>>(err: E) -> Self {
        MapError::Scan(err.into())
    }

    pub fn is_no_viable_conversion(&self) -> bool {
        matches!(self, MapError::NoViableConversion { .. })
    }
}
