//! Conversions between RFC 3339 text, `DateTime<Utc>` and [`Timestamp`].

use chrono::{DateTime, SecondsFormat, Utc};

use crate::mapper::Mapper;
use crate::modules::ModuleError;
use crate::traits::module::Module;
use crate::wire::Timestamp;

/// Registers, in this order:
///
/// - `String -> Timestamp` and `Timestamp -> String`
/// - `DateTime<Utc> -> Timestamp` and `Timestamp -> DateTime<Utc>`
/// - `String -> DateTime<Utc>` and `DateTime<Utc> -> String`
///
/// Text is RFC 3339; malformed text fails with [`ModuleError::Parse`] and
/// instants outside years 1..=9999 with [`ModuleError::OutOfRange`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TimestampModule;

pub fn parse_datetime(text: &str) -> Result<DateTime<Utc>, ModuleError> {
    Ok(DateTime::parse_from_rfc3339(text)?.with_timezone(&Utc))
}

pub fn format_datetime(at: &DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

impl Module for TimestampModule {
    fn register(&self, mapper: &mut Mapper) {
        mapper
            .register_fn(|text: &String| Timestamp::parse_rfc3339(text))
            .register_fn(|ts: &Timestamp| ts.to_rfc3339())
            .register_fn(|at: &DateTime<Utc>| Timestamp::try_from(*at))
            .register_fn(|ts: &Timestamp| DateTime::<Utc>::try_from(*ts))
            .register_fn(|text: &String| parse_datetime(text))
            .register_fn(|at: &DateTime<Utc>| Ok::<_, ModuleError>(format_datetime(at)));
    }
}
