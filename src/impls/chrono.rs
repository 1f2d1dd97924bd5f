use chrono::{DateTime, Utc};

crate::impl_mappable_opaque!(DateTime<Utc>);
