// Struct, option and sequence copying through the public API

pub mod common;

use common::{Address, AddressRow, Audit, Sex, User, UserId, UserRow, mapper, sample_user};
use structmapper::prelude::*;

/// Same fields as `User`, different type
#[derive(Debug, Clone, Default, PartialEq, Mappable)]
struct UserSnapshot {
    id: UserId,
    name: String,
    sex: Sex,
    age: i32,
    nickname: Option<String>,
    address: Option<Address>,
    tags: Vec<String>,
    #[structmapper(embed)]
    audit: Audit,
}

#[derive(Debug, Clone, Default, PartialEq, Mappable)]
struct UserSummary {
    name: String,
    age: i32,
}

#[test]
fn test_identity_projection() -> MapResult<()> {
    let mapper = mapper();
    let user = sample_user();

    let mut snapshot = UserSnapshot::default();
    mapper.from(&user).copy_to(&mut snapshot)?;

    assert_eq!(snapshot.id, user.id, "newtype field should match");
    assert_eq!(snapshot.sex, Sex::Female);
    assert_eq!(snapshot.nickname, user.nickname, "populated option should match");
    assert_eq!(snapshot.address, user.address, "nested struct should match");
    assert_eq!(snapshot.tags, user.tags, "sequence should match");
    assert_eq!(snapshot.audit, user.audit, "embedded fields should match");

    // and back again, with empty options this time
    let empty = UserSnapshot {
        name: "Hanako".to_string(),
        ..UserSnapshot::default()
    };
    let mut restored = sample_user();
    mapper.from(&empty).copy_to(&mut restored)?;
    assert_eq!(restored.nickname, None, "None should clear the destination");
    assert_eq!(restored.address, None);
    assert!(restored.tags.is_empty());
    assert_eq!(restored.audit.created_at, None);
    assert_eq!(restored.name, "Hanako");
    Ok(())
}

#[test]
fn test_same_type_copy_is_a_clone() -> MapResult<()> {
    let mapper = Mapper::new();
    let user = sample_user();
    let copy: User = mapper.convert_to(&user)?;
    assert_eq!(copy, user);
    Ok(())
}

#[test]
fn test_partial_projection() -> MapResult<()> {
    let mapper = mapper();
    let user = sample_user();

    let summary: UserSummary = mapper.convert_to(&user)?;
    assert_eq!(
        summary,
        UserSummary {
            name: "Taro".to_string(),
            age: 32
        }
    );

    // subset into superset: only the shared fields are written
    let mut target = User::default();
    mapper.from(&summary).copy_to(&mut target)?;
    assert_eq!(target.name, "Taro");
    assert_eq!(target.age, 32);
    assert_eq!(target.id, UserId::default());
    assert_eq!(target.address, None);
    Ok(())
}

#[derive(Debug, Clone, Default, Mappable)]
struct Tagged {
    #[structmapper(rename = "primary")]
    #[serde(rename = "secondary")]
    value: u8,
}

#[derive(Debug, Clone, Default, Mappable)]
struct SecondaryOnly {
    #[serde(rename = "secondary")]
    value: u8,
}

#[derive(Debug, Clone, Default, Mappable)]
struct Untagged {
    value: u8,
}

#[derive(Debug, Clone, Default, PartialEq, Mappable)]
struct ByPrimary {
    primary: u8,
}

#[derive(Debug, Clone, Default, PartialEq, Mappable)]
struct BySecondary {
    secondary: u8,
}

#[derive(Debug, Clone, Default, PartialEq, Mappable)]
struct ByName {
    value: u8,
}

#[test]
fn test_annotation_priority() -> MapResult<()> {
    let mapper = Mapper::new();

    let tagged = Tagged { value: 7 };
    assert_eq!(mapper.convert_to::<ByPrimary>(&tagged)?, ByPrimary { primary: 7 });
    assert_eq!(mapper.convert_to::<BySecondary>(&tagged)?, BySecondary { secondary: 7 });
    assert_eq!(mapper.convert_to::<ByName>(&tagged)?, ByName { value: 7 });

    let secondary = SecondaryOnly { value: 3 };
    assert_eq!(mapper.convert_to::<ByPrimary>(&secondary)?, ByPrimary::default());
    assert_eq!(mapper.convert_to::<BySecondary>(&secondary)?, BySecondary { secondary: 3 });

    let untagged = Untagged { value: 5 };
    assert_eq!(mapper.convert_to::<ByPrimary>(&untagged)?, ByPrimary::default());
    assert_eq!(mapper.convert_to::<ByName>(&untagged)?, ByName { value: 5 });
    Ok(())
}

#[derive(Debug, Clone, Default, PartialEq, Mappable)]
struct Titled {
    #[structmapper(rename = "name")]
    title: String,
    name: String,
}

#[test]
fn test_first_claim_on_a_name_wins() -> MapResult<()> {
    let mapper = Mapper::new();
    let titled: Titled = mapper.convert_to(&UserSummary {
        name: "Taro".to_string(),
        age: 1,
    })?;
    assert_eq!(titled.title, "Taro");
    assert_eq!(titled.name, "", "a name claimed earlier is not reachable");
    Ok(())
}

#[test]
fn test_skip_falls_through_to_other_names() -> MapResult<()> {
    #[derive(Debug, Clone, Default, Mappable)]
    struct Skipped {
        #[structmapper(skip)]
        #[serde(rename = "secondary")]
        value: u8,
    }

    let mapper = Mapper::new();
    let skipped = Skipped { value: 9 };
    assert_eq!(mapper.convert_to::<BySecondary>(&skipped)?, BySecondary { secondary: 9 });
    assert_eq!(mapper.convert_to::<ByName>(&skipped)?, ByName { value: 9 });
    Ok(())
}

#[test]
fn test_secondary_tags_can_be_disabled() -> MapResult<()> {
    let config = MapperConfig::builder().use_secondary_tags(false).build();
    let mapper = Mapper::with_config(config);

    let tagged = Tagged { value: 7 };
    assert_eq!(mapper.convert_to::<BySecondary>(&tagged)?, BySecondary::default());
    assert_eq!(mapper.convert_to::<ByPrimary>(&tagged)?, ByPrimary { primary: 7 });
    Ok(())
}

#[test]
fn test_nil_propagation() -> MapResult<()> {
    let mapper = mapper();

    let mut row = UserRow {
        nickname: Some("stale".to_string()),
        address: Some(AddressRow::default()),
        ..UserRow::default()
    };
    let user = User {
        nickname: None,
        address: None,
        ..sample_user()
    };
    mapper.from(&user).copy_to(&mut row)?;
    assert_eq!(row.nickname, None);
    assert_eq!(row.address, None);

    // populated sources allocate empty destinations on demand
    let mut row = UserRow::default();
    mapper.from(&sample_user()).copy_to(&mut row)?;
    assert_eq!(row.nickname.as_deref(), Some("taro"));
    assert_eq!(
        row.address,
        Some(AddressRow {
            city: "Nairobi".to_string(),
            postal_code: "00100".to_string(),
        })
    );
    assert_eq!(row.sex, Some(Sex::Female));
    Ok(())
}

#[test]
fn test_persistence_row_projection() -> MapResult<()> {
    let mapper = mapper();
    let mut row = UserRow {
        revision: 4,
        ..UserRow::default()
    };
    mapper.from(&sample_user()).copy_to(&mut row)?;

    assert_eq!(row.user_pk, "12345", "primary tag should match the source name");
    assert_eq!(row.age, 32, "i32 widens into i64");
    assert_eq!(row.created_at.as_deref(), Some("2024-01-01T00:00:00Z"));
    assert_eq!(row.revision, 4);
    Ok(())
}

#[test]
fn test_readonly_fields_are_never_written() -> MapResult<()> {
    #[derive(Debug, Clone, Default, Mappable)]
    struct Revisioned {
        revision: u32,
        name: String,
    }

    let mapper = Mapper::new();
    let mut row = UserRow {
        revision: 1,
        ..UserRow::default()
    };
    let source = Revisioned {
        revision: 99,
        name: "x".to_string(),
    };
    mapper.from(&source).copy_to(&mut row)?;
    assert_eq!(row.revision, 1);
    assert_eq!(row.name, "x");
    Ok(())
}

#[test]
fn test_embedded_fields_resolve_both_ways() -> MapResult<()> {
    #[derive(Debug, Clone, Default, PartialEq, Mappable)]
    struct FlatAudit {
        created_by: String,
        name: String,
    }

    let mapper = Mapper::new();
    let flat: FlatAudit = mapper.convert_to(&sample_user())?;
    assert_eq!(flat.created_by, "system");
    assert_eq!(flat.name, "Taro");

    let mut user = User::default();
    mapper.from(&flat).copy_to(&mut user)?;
    assert_eq!(user.audit.created_by, "system");
    Ok(())
}

#[test]
fn test_option_sources_and_sequences() -> MapResult<()> {
    let mapper = Mapper::new();

    let nested: Option<Option<u8>> = Some(Some(4));
    assert_eq!(mapper.convert_to::<u32>(&nested)?, 4);

    let absent: Option<u8> = None;
    assert_eq!(mapper.convert_to::<u32>(&absent)?, 0);

    let ids = vec![UserId::from("a".to_string()), UserId::from("b".to_string())];
    let raw: Vec<String> = mapper.convert_to(&ids)?;
    assert_eq!(raw, vec!["a", "b"]);

    let back: Vec<UserId> = mapper.convert_to(&raw)?;
    assert_eq!(back, ids);
    Ok(())
}

#[test]
fn test_failed_copy_leaves_empty_destination_unallocated() {
    #[derive(Debug, Clone, Default, Mappable)]
    struct Source {
        address: Option<Address>,
    }

    #[derive(Debug, Clone, Default, Mappable)]
    struct Target {
        address: Option<i64>,
    }

    let mapper = Mapper::new();
    let mut target = Target::default();
    let err = mapper
        .from(&Source {
            address: Some(Address::default()),
        })
        .copy_to(&mut target)
        .unwrap_err();
    assert!(err.is_no_viable_conversion());
    assert_eq!(target.address, None);
}

#[test]
fn test_newtypes_over_structs_and_sequences() -> MapResult<()> {
    #[derive(Debug, Clone, Default, PartialEq, Mappable)]
    struct HomeAddress(Address);

    #[derive(Debug, Clone, Default, PartialEq, Mappable)]
    struct Ports(Vec<u16>);

    let mapper = Mapper::new();
    let home = HomeAddress(Address {
        city: "Mombasa".to_string(),
        zip: "80100".to_string(),
    });
    let row: AddressRow = mapper.convert_to(&home)?;
    assert_eq!(row.city, "Mombasa");
    assert_eq!(row.postal_code, "80100");

    let back: HomeAddress = mapper.convert_to(&row)?;
    assert_eq!(back, home);

    let widened: Vec<u32> = mapper.convert_to(&Ports(vec![80, 443]))?;
    assert_eq!(widened, vec![80, 443]);

    let ports: Ports = mapper.convert_to(&vec![22u8, 25])?;
    assert_eq!(ports, Ports(vec![22, 25]));

    let boxed: Box<[u16]> = mapper.convert_to(&ports)?;
    assert_eq!(&*boxed, &[22, 25]);
    Ok(())
}
