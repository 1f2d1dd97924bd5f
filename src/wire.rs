//! Wire-format value types handled by the bundled modules.
//!
//! `Timestamp` mirrors the well-known protobuf message; the wrapper messages
//! carry a single primitive and serialize as that bare primitive.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::Mappable;
use crate::modules::ModuleError;

/// Seconds of 0001-01-01T00:00:00Z.
pub const MIN_TIMESTAMP_SECONDS: i64 = -62_135_596_800;

/// Seconds of 9999-12-31T23:59:59Z.
pub const MAX_TIMESTAMP_SECONDS: i64 = 253_402_300_799;

const NANOS_PER_SECOND: i64 = 1_000_000_000;

/// A point in time as seconds and nanoseconds since the Unix epoch.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
    Mappable,
)]
pub struct Timestamp {
    pub seconds: i64,
    pub nanos: i32,
}

impl Timestamp {
    pub fn new(seconds: i64, nanos: i32) -> Self {
        Self { seconds, nanos }
    }

    /// Checks the year range 0001..=9999 and the nanosecond range.
    pub fn validate(&self) -> Result<(), ModuleError> {
        let seconds_ok = (MIN_TIMESTAMP_SECONDS..=MAX_TIMESTAMP_SECONDS).contains(&self.seconds);
        let nanos_ok = (0..NANOS_PER_SECOND).contains(&i64::from(self.nanos));
        if seconds_ok && nanos_ok {
            Ok(())
        } else {
            Err(ModuleError::OutOfRange {
                seconds: self.seconds,
                nanos: i64::from(self.nanos),
            })
        }
    }

    pub fn parse_rfc3339(text: &str) -> Result<Self, ModuleError> {
        let at = DateTime::parse_from_rfc3339(text)?.with_timezone(&Utc);
        Self::try_from(at)
    }

    pub fn to_rfc3339(&self) -> Result<String, ModuleError> {
        DateTime::<Utc>::try_from(*self).map(|at| at.to_rfc3339_opts(SecondsFormat::AutoSi, true))
    }
}

impl TryFrom<DateTime<Utc>> for Timestamp {
    type Error = ModuleError;

    fn try_from(at: DateTime<Utc>) -> Result<Self, Self::Error> {
        let nanos = i32::try_from(at.timestamp_subsec_nanos()).map_err(|_| ModuleError::OutOfRange {
            seconds: at.timestamp(),
            nanos: i64::from(at.timestamp_subsec_nanos()),
        })?;
        let timestamp = Timestamp::new(at.timestamp(), nanos);
        timestamp.validate()?;
        Ok(timestamp)
    }
}

impl TryFrom<Timestamp> for DateTime<Utc> {
    type Error = ModuleError;

    fn try_from(timestamp: Timestamp) -> Result<Self, Self::Error> {
        timestamp.validate()?;
        // validate() guarantees 0 <= nanos < 1e9
        DateTime::from_timestamp(timestamp.seconds, timestamp.nanos.unsigned_abs()).ok_or(
            ModuleError::OutOfRange {
                seconds: timestamp.seconds,
                nanos: i64::from(timestamp.nanos),
            },
        )
    }
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::From,
    derive_more::Into, Mappable,
)]
#[serde(transparent)]
pub struct Int32Value {
    pub value: i32,
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::From,
    derive_more::Into, Mappable,
)]
#[serde(transparent)]
pub struct Int64Value {
    pub value: i64,
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, derive_more::From,
    derive_more::Into, Mappable,
)]
#[serde(transparent)]
pub struct FloatValue {
    pub value: f32,
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, derive_more::From,
    derive_more::Into, Mappable,
)]
#[serde(transparent)]
pub struct DoubleValue {
    pub value: f64,
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::From,
    derive_more::Into, Mappable,
)]
#[serde(transparent)]
pub struct BoolValue {
    pub value: bool,
}

#[derive(
    Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::From,
    derive_more::Into, Mappable,
)]
#[serde(transparent)]
pub struct StringValue {
    pub value: String,
}
