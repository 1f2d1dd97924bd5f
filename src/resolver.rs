//! Field name resolution: candidate names per field, embedded-field
//! flattening and the destination name index.

use std::any::TypeId;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use crate::traits::mappable::{Mappable, ReflectMut, ReflectRef};
use crate::types::{FieldInfo, SKIP_NAME, TypeInfo};

/// A field as seen after flattening embedded structs.
#[derive(Debug, Clone)]
pub struct FieldDescriptor {
    pub info: &'static FieldInfo,
    /// Field indices from the outermost struct down to this field.
    pub path: Vec<usize>,
    /// Candidate lookup names in priority order.
    pub names: Vec<&'static str>,
}

impl FieldDescriptor {
    pub fn name(&self) -> &'static str {
        self.info.name()
    }

    pub fn is_settable(&self) -> bool {
        self.info.is_settable()
    }
}

/// Candidate names of `field`: primary tag, secondary tag, then the declared
/// name. Tags set to [`SKIP_NAME`] are left out.
pub fn names_of(field: &FieldInfo, use_secondary: bool) -> Vec<&'static str> {
    let mut names = Vec::with_capacity(3);
    if let Some(primary) = field.primary_name().filter(|name| *name != SKIP_NAME) {
        names.push(primary);
    }
    if use_secondary {
        if let Some(secondary) = field.secondary_name().filter(|name| *name != SKIP_NAME) {
            names.push(secondary);
        }
    }
    names.push(field.name());
    names
}

/// Depth-first expansion of embedded struct fields, in declaration order.
///
/// Embedded fields are replaced by their own (flattened) fields; other
/// nested structs stay a single field.
pub fn flatten_fields(ty: &TypeInfo, use_secondary: bool) -> Vec<FieldDescriptor> {
    let mut out = Vec::new();
    flatten_into(ty, &mut Vec::new(), use_secondary, &mut out);
    out
}

fn flatten_into(
    ty: &TypeInfo,
    prefix: &mut Vec<usize>,
    use_secondary: bool,
    out: &mut Vec<FieldDescriptor>,
) {
    for field in ty.fields() {
        prefix.push(field.index());
        let field_type = field.type_info();
        if field.is_embedded() && field_type.is_struct() {
            flatten_into(&field_type, prefix, use_secondary, out);
        } else {
            out.push(FieldDescriptor {
                info: field,
                path: prefix.clone(),
                names: names_of(field, use_secondary),
            });
        }
        prefix.pop();
    }
}

/// Maps every candidate name to the first field claiming it.
pub fn index_by_name(fields: &[FieldDescriptor]) -> HashMap<&'static str, usize> {
    let mut index = HashMap::new();
    for (position, field) in fields.iter().enumerate() {
        for name in &field.names {
            index.entry(*name).or_insert(position);
        }
    }
    index
}

/// Flattened fields of one struct type together with their name index.
#[derive(Debug)]
pub struct StructLayout {
    pub fields: Vec<FieldDescriptor>,
    index: HashMap<&'static str, usize>,
}

impl StructLayout {
    pub fn new(ty: &TypeInfo, use_secondary: bool) -> Self {
        let fields = flatten_fields(ty, use_secondary);
        let index = index_by_name(&fields);
        Self { fields, index }
    }

    pub fn lookup(&self, name: &str) -> Option<&FieldDescriptor> {
        self.index.get(name).map(|&position| &self.fields[position])
    }
}

/// Per-mapper cache of struct layouts, computed once per type.
#[derive(Debug, Default)]
pub struct LayoutCache {
    layouts: Mutex<HashMap<TypeId, Arc<StructLayout>>>,
}

impl LayoutCache {
    pub fn layout(&self, ty: &TypeInfo, use_secondary: bool) -> Arc<StructLayout> {
        let mut layouts = self.layouts.lock().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(
            layouts
                .entry(ty.id())
                .or_insert_with(|| Arc::new(StructLayout::new(ty, use_secondary))),
        )
    }
}

/// Follows `path` through nested structs.
pub fn field_at<'a>(value: &'a dyn Mappable, path: &[usize]) -> Option<&'a dyn Mappable> {
    let mut current = value;
    for &index in path {
        current = match current.reflect_ref() {
            ReflectRef::Struct(access) => access.field(index)?,
            _ => return None,
        };
    }
    Some(current)
}

/// Mutable counterpart of [`field_at`].
pub fn field_at_mut<'a>(value: &'a mut dyn Mappable, path: &[usize]) -> Option<&'a mut dyn Mappable> {
    let mut current = value;
    for &index in path {
        current = match current.reflect_mut() {
            ReflectMut::Struct(access) => access.field_mut(index)?,
            _ => return None,
        };
    }
    Some(current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Mappable;

    #[derive(Debug, Clone, Default, Mappable)]
    struct Audit {
        created_by: String,
        #[structmapper(rename = "id")]
        audit_id: u64,
    }

    #[derive(Debug, Clone, Default, Mappable)]
    struct Account {
        id: u64,
        #[structmapper(rename = "login")]
        #[serde(rename = "user_name")]
        name: String,
        #[structmapper(skip)]
        #[serde(rename = "mail")]
        email: String,
        #[structmapper(embed)]
        audit: Audit,
        nested: Audit,
    }

    fn account_type() -> TypeInfo {
        TypeInfo::of::<Account>()
    }

    #[test]
    fn names_follow_tag_priority() {
        let fields = account_type().fields();
        assert_eq!(names_of(&fields[0], true), vec!["id"]);
        assert_eq!(names_of(&fields[1], true), vec!["login", "user_name", "name"]);
        assert_eq!(names_of(&fields[1], false), vec!["login", "name"]);
        assert_eq!(names_of(&fields[2], true), vec!["mail", "email"]);
    }

    #[test]
    fn embedded_fields_are_flattened_depth_first() {
        let flat = flatten_fields(&account_type(), true);
        let names: Vec<_> = flat.iter().map(FieldDescriptor::name).collect();
        assert_eq!(names, vec!["id", "name", "email", "created_by", "audit_id", "nested"]);
        assert_eq!(flat[3].path, vec![3, 0]);
        assert_eq!(flat[5].path, vec![4]);
    }

    #[test]
    fn first_writer_wins_in_the_index() {
        let layout = StructLayout::new(&account_type(), true);
        assert_eq!(layout.lookup("id").map(FieldDescriptor::name), Some("id"));
        assert_eq!(layout.lookup("audit_id").map(FieldDescriptor::name), Some("audit_id"));
        assert_eq!(layout.lookup("user_name").map(FieldDescriptor::name), Some("name"));
        assert!(layout.lookup("missing").is_none());
    }

    #[test]
    fn paths_reach_embedded_values() {
        let mut account = Account::default();
        account.audit.created_by = "root".into();

        let layout = StructLayout::new(&account_type(), true);
        let path = &layout.fields[3].path;
        let read = field_at(&account, path).and_then(|v| v.downcast_ref::<String>());
        assert_eq!(read.map(String::as_str), Some("root"));

        let slot = field_at_mut(&mut account, path).unwrap();
        slot.assign(Box::new(String::from("admin"))).unwrap();
        assert_eq!(account.audit.created_by, "admin");
    }

    #[test]
    fn layouts_are_cached_per_type() {
        let cache = LayoutCache::default();
        let first = cache.layout(&account_type(), true);
        let second = cache.layout(&account_type(), true);
        assert!(Arc::ptr_eq(&first, &second));
    }
}
