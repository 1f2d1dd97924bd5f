use syn::{Data, DeriveInput, Fields, Ident, Type};

use crate::errors::{DeriveError, MacroError};
use crate::parse::attributes::{ContainerAttributes, FieldAttributes};

/// A named field together with its resolved naming options.
pub struct StructField<'a> {
    pub ident: &'a Ident,
    pub ty: &'a Type,
    pub attributes: FieldAttributes,
}

/// How a type is exposed to the mapper.
pub enum Shape<'a> {
    /// Named fields, in declaration order. Unit structs have none.
    Struct(Vec<StructField<'a>>),
    /// Single-field tuple struct over the given type.
    Newtype(&'a Type),
    /// Enums: copied as a whole value.
    Opaque,
}

pub struct MappableInput<'a> {
    pub ident: &'a Ident,
    pub container: ContainerAttributes,
    pub shape: Shape<'a>,
}

impl<'a> MappableInput<'a> {
    pub fn from_derive_input(input: &'a DeriveInput) -> syn::Result<Self> {
        if !input.generics.params.is_empty() {
            return Err(MacroError::from(DeriveError::Generic).spanned(&input.generics));
        }

        let container = ContainerAttributes::from_attributes(&input.attrs)?;
        let shape = match &input.data {
            Data::Struct(data) => match &data.fields {
                Fields::Named(named) => Shape::Struct(
                    named
                        .named
                        .iter()
                        .map(|field| -> syn::Result<StructField<'a>> {
                            Ok(StructField {
                                ident: field.ident.as_ref().ok_or_else(|| {
                                    syn::Error::new_spanned(field, "expected a named field")
                                })?,
                                ty: &field.ty,
                                attributes: FieldAttributes::from_field(field, &container)?,
                            })
                        })
                        .collect::<syn::Result<_>>()?,
                ),
                Fields::Unnamed(unnamed) => match unnamed.unnamed.len() {
                    0 => Shape::Struct(Vec::new()),
                    1 => Shape::Newtype(&unnamed.unnamed[0].ty),
                    _ => return Err(MacroError::from(DeriveError::TupleArity).spanned(unnamed)),
                },
                Fields::Unit => Shape::Struct(Vec::new()),
            },
            Data::Enum(_) => Shape::Opaque,
            Data::Union(data) => {
                return Err(MacroError::from(DeriveError::Union).spanned(data.union_token));
            }
        };

        Ok(Self {
            ident: &input.ident,
            container,
            shape,
        })
    }
}
