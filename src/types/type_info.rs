use std::any::TypeId;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::MapResult;
use crate::traits::mappable::{Mappable, Scan, Typed};
use crate::types::scalar::ScalarKind;

/// Builds a fresh `Default` value of the described type.
pub type ConstructFn = fn() -> Box<dyn Mappable>;

/// Destination-side ingestion hook generated for types opting into [`Scan`].
pub type ScanFn = fn(&dyn Mappable) -> MapResult<Box<dyn Mappable>>;

/// Structural shape of a mappable type.
#[derive(Debug, Clone, Copy)]
pub enum TypeKind {
    Scalar(ScalarKind),
    Struct(&'static [FieldInfo]),
    /// Single-field tuple struct wrapping the given type.
    Newtype(fn() -> TypeInfo),
    /// Nullable value; `None` plays the role of a nil pointer.
    Option(fn() -> TypeInfo),
    Seq(fn() -> TypeInfo),
    /// Leaf value the engine can only clone, assign or hand to a transformer.
    Opaque,
}

/// Runtime descriptor of a mappable type.
///
/// Equality and hashing only look at the [`TypeId`].
#[derive(Clone, Copy)]
pub struct TypeInfo {
    type_id: TypeId,
    type_name: &'static str,
    kind: TypeKind,
    construct: ConstructFn,
    scanner: Option<ScanFn>,
}

fn construct_default<T: Mappable + Default>() -> Box<dyn Mappable> {
    Box::new(T::default())
}

fn scan_into<T: Typed + Scan>(source: &dyn Mappable) -> MapResult<Box<dyn Mappable>> {
    let mut value = T::default();
    value.scan(source).map_err(crate::error::MapError::Scan)?;
    Ok(Box::new(value))
}

impl TypeInfo {
    pub fn new<T: Mappable + Default>(kind: TypeKind) -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            type_name: std::any::type_name::<T>(),
            kind,
            construct: construct_default::<T>,
            scanner: None,
        }
    }

    /// Registers the [`Scan`] implementation of `T` as this type's scanner.
    pub fn with_scanner<T: Typed + Scan>(mut self) -> Self {
        self.scanner = Some(scan_into::<T>);
        self
    }

    pub fn of<T: Typed>() -> Self {
        T::type_info()
    }

    pub fn id(&self) -> TypeId {
        self.type_id
    }

    pub fn name(&self) -> &'static str {
        self.type_name
    }

    pub fn kind(&self) -> TypeKind {
        self.kind
    }

    /// Zero value of this type.
    pub fn construct(&self) -> Box<dyn Mappable> {
        (self.construct)()
    }

    pub fn scanner(&self) -> Option<ScanFn> {
        self.scanner
    }

    pub fn is<T: 'static>(&self) -> bool {
        self.type_id == TypeId::of::<T>()
    }

    pub fn is_option(&self) -> bool {
        matches!(self.kind, TypeKind::Option(_))
    }

    pub fn is_struct(&self) -> bool {
        matches!(self.kind, TypeKind::Struct(_))
    }

    /// Strips every `Option` layer.
    pub fn indirect(&self) -> TypeInfo {
        let mut current = *self;
        while let TypeKind::Option(inner) = current.kind {
            current = inner();
        }
        current
    }

    /// The wrapped type of a newtype, or the type itself.
    pub fn underlying(&self) -> TypeInfo {
        match self.kind {
            TypeKind::Newtype(inner) => inner(),
            _ => *self,
        }
    }

    /// Primitive kind of this type, looking through one newtype layer.
    pub fn scalar_kind(&self) -> Option<ScalarKind> {
        match self.underlying().kind {
            TypeKind::Scalar(kind) => Some(kind),
            _ => None,
        }
    }

    /// Declared fields of a struct type; empty for other kinds.
    pub fn fields(&self) -> &'static [FieldInfo] {
        match self.kind {
            TypeKind::Struct(fields) => fields,
            _ => &[],
        }
    }

    pub fn element(&self) -> Option<TypeInfo> {
        match self.kind {
            TypeKind::Seq(element) => Some(element()),
            _ => None,
        }
    }
}

impl PartialEq for TypeInfo {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Eq for TypeInfo {}

impl Hash for TypeInfo {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.type_id.hash(state);
    }
}

impl fmt::Debug for TypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.kind {
            TypeKind::Scalar(_) => "scalar",
            TypeKind::Struct(_) => "struct",
            TypeKind::Newtype(_) => "newtype",
            TypeKind::Option(_) => "option",
            TypeKind::Seq(_) => "seq",
            TypeKind::Opaque => "opaque",
        };
        f.debug_struct("TypeInfo")
            .field("name", &self.type_name)
            .field("kind", &kind)
            .field("scan", &self.scanner.is_some())
            .finish()
    }
}

impl fmt::Display for TypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name)
    }
}

/// Tag value excluding a field from matching by that tag.
pub const SKIP_NAME: &str = "-";

/// Static description of one declared struct field.
///
/// Tables of these are emitted by `#[derive(Mappable)]`.
#[derive(Debug, Clone, Copy)]
pub struct FieldInfo {
    name: &'static str,
    index: usize,
    primary_name: Option<&'static str>,
    secondary_name: Option<&'static str>,
    embedded: bool,
    settable: bool,
    type_info: fn() -> TypeInfo,
}

impl FieldInfo {
    pub const fn new(name: &'static str, index: usize, type_info: fn() -> TypeInfo) -> Self {
        Self {
            name,
            index,
            primary_name: None,
            secondary_name: None,
            embedded: false,
            settable: true,
            type_info,
        }
    }

    /// Name given by the mapping-specific tag.
    pub const fn with_primary_name(mut self, name: &'static str) -> Self {
        self.primary_name = Some(name);
        self
    }

    /// Name given by the serialization tag.
    pub const fn with_secondary_name(mut self, name: &'static str) -> Self {
        self.secondary_name = Some(name);
        self
    }

    pub const fn embedded(mut self) -> Self {
        self.embedded = true;
        self
    }

    pub const fn readonly(mut self) -> Self {
        self.settable = false;
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Declaration index, as understood by `StructAccess::field`.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn primary_name(&self) -> Option<&'static str> {
        self.primary_name
    }

    pub fn secondary_name(&self) -> Option<&'static str> {
        self.secondary_name
    }

    pub fn is_embedded(&self) -> bool {
        self.embedded
    }

    pub fn is_settable(&self) -> bool {
        self.settable
    }

    pub fn type_info(&self) -> TypeInfo {
        (self.type_info)()
    }
}
