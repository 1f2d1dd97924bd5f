// Shared fixtures: one user in its domain, transport and persistence shapes

#![allow(dead_code)]

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use structmapper::prelude::*;
use structmapper::BoxError;

/// Initialise logging once per test binary
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A mapper with the well-known modules and the `Sex` text conversions
pub fn mapper() -> Mapper {
    init_logging();
    let mut mapper = Mapper::new();
    mapper
        .install(WellKnownModule)
        .install(TextModule::<Sex>::new());
    mapper
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Mappable, strum::Display, strum::EnumString,
)]
pub enum Sex {
    #[default]
    Unknown,
    Male,
    Female,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Mappable, derive_more::From, derive_more::Into)]
pub struct UserId(pub String);

#[derive(Debug, Clone, Default, PartialEq, Mappable)]
pub struct Address {
    pub city: String,
    pub zip: String,
}

#[derive(Debug, Clone, Default, PartialEq, Mappable)]
pub struct Audit {
    pub created_by: String,
    pub created_at: Option<DateTime<Utc>>,
}

/// Domain model
#[derive(Debug, Clone, Default, PartialEq, Mappable)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub sex: Sex,
    pub age: i32,
    pub nickname: Option<String>,
    pub address: Option<Address>,
    pub tags: Vec<String>,
    #[structmapper(embed)]
    pub audit: Audit,
}

/// Transport representation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Mappable)]
pub struct UserMessage {
    #[serde(rename = "id")]
    pub user_id: String,
    pub name: String,
    pub sex: String,
    pub age: Int64Value,
    pub nickname: Option<StringValue>,
    pub tags: Vec<String>,
    pub created_by: String,
    pub created_at: Option<Timestamp>,
}

#[derive(Debug, Clone, Default, PartialEq, Mappable)]
pub struct AddressRow {
    pub city: String,
    #[serde(rename = "zip")]
    pub postal_code: String,
}

/// Persistence representation
#[derive(Debug, Clone, Default, PartialEq, Mappable)]
pub struct UserRow {
    #[structmapper(rename = "id")]
    pub user_pk: String,
    pub name: String,
    pub sex: Option<Sex>,
    pub age: i64,
    pub nickname: Option<String>,
    pub address: Option<AddressRow>,
    pub created_at: Option<String>,
    #[structmapper(readonly)]
    pub revision: u32,
}

/// Destination type ingesting text through the scan protocol
#[derive(Debug, Clone, Default, PartialEq, Eq, Mappable)]
#[structmapper(scan)]
pub struct Email {
    pub local: String,
    pub domain: String,
}

impl Scan for Email {
    fn scan(&mut self, source: &dyn Mappable) -> Result<(), BoxError> {
        let text = source
            .downcast_ref::<String>()
            .ok_or_else(|| format!("cannot scan an email from {}", source.type_name()))?;
        let (local, domain) = text
            .split_once('@')
            .ok_or_else(|| format!("invalid email address {text:?}"))?;
        self.local = local.to_string();
        self.domain = domain.to_string();
        Ok(())
    }
}

pub fn sample_user() -> User {
    User {
        id: UserId::from("12345".to_string()),
        name: "Taro".to_string(),
        sex: Sex::Female,
        age: 32,
        nickname: Some("taro".to_string()),
        address: Some(Address {
            city: "Nairobi".to_string(),
            zip: "00100".to_string(),
        }),
        tags: vec!["admin".to_string(), "ops".to_string()],
        audit: Audit {
            created_by: "system".to_string(),
            created_at: DateTime::from_timestamp(1_704_067_200, 0),
        },
    }
}

/// Descriptor shortcut for assertions on names
pub fn type_name_of<T: Typed>() -> &'static str {
    TypeInfo::of::<T>().name()
}
