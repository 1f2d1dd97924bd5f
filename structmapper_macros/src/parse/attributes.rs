use proc_macro2::TokenStream;
use quote::ToTokens;
use syn::{Attribute, Field, LitStr, Token, ext::IdentExt, meta::ParseNestedMeta};

use crate::errors::{AttributeError, MacroError};
use crate::utils::attributes::attributes_named;
use crate::utils::naming::RenameRule;

/// Tag value that keeps a tag from contributing a name.
const SKIP: &str = "-";

/// Type-level options.
///
/// `#[structmapper(rename_all = "..", scan)]` and `#[serde(rename_all = "..")]`;
/// every other serde key is ignored.
#[derive(Debug, Default)]
pub struct ContainerAttributes {
    pub rename_all: Option<RenameRule>,
    pub serde_rename_all: Option<RenameRule>,
    pub scan: bool,
}

impl ContainerAttributes {
    pub fn from_attributes(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut container = Self::default();

        for attr in attributes_named(attrs, "structmapper") {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("rename_all") {
                    container.rename_all = Some(parse_rename_rule(&meta)?);
                } else if meta.path.is_ident("scan") {
                    container.scan = true;
                } else {
                    return Err(unsupported(&meta));
                }
                Ok(())
            })?;
        }

        for attr in attributes_named(attrs, "serde") {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("rename_all") && meta.input.peek(Token![=]) {
                    container.serde_rename_all = Some(parse_rename_rule(&meta)?);
                    Ok(())
                } else {
                    skip_meta(&meta)
                }
            })?;
        }

        Ok(container)
    }
}

/// Naming options of one named field, resolved against the container's
/// `rename_all` rules.
#[derive(Debug)]
pub struct FieldAttributes {
    /// Declared name, without a raw-identifier prefix.
    pub name: String,
    pub primary_name: Option<String>,
    pub secondary_name: Option<String>,
    pub embedded: bool,
    pub readonly: bool,
}

impl FieldAttributes {
    pub fn from_field(field: &Field, container: &ContainerAttributes) -> syn::Result<Self> {
        let name = field
            .ident
            .as_ref()
            .map(|ident| ident.unraw().to_string())
            .ok_or_else(|| syn::Error::new_spanned(field, "expected a named field"))?;

        let mut primary_name = None;
        let mut secondary_name = None;
        let mut embedded = false;
        let mut readonly = false;

        for attr in attributes_named(&field.attrs, "structmapper") {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("rename") {
                    let lit: LitStr = meta.value()?.parse()?;
                    primary_name = Some(lit.value());
                } else if meta.path.is_ident("skip") {
                    primary_name = Some(SKIP.to_string());
                } else if meta.path.is_ident("embed") {
                    embedded = true;
                } else if meta.path.is_ident("readonly") {
                    readonly = true;
                } else {
                    return Err(unsupported(&meta));
                }
                Ok(())
            })?;
        }

        for attr in attributes_named(&field.attrs, "serde") {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("rename") && meta.input.peek(Token![=]) {
                    let lit: LitStr = meta.value()?.parse()?;
                    secondary_name = Some(lit.value());
                    Ok(())
                } else if meta.path.is_ident("skip") {
                    secondary_name = Some(SKIP.to_string());
                    Ok(())
                } else if meta.path.is_ident("flatten") {
                    embedded = true;
                    Ok(())
                } else {
                    skip_meta(&meta)
                }
            })?;
        }

        let primary_name = primary_name.or_else(|| container.rename_all.map(|rule| rule.apply(&name)));
        let secondary_name =
            secondary_name.or_else(|| container.serde_rename_all.map(|rule| rule.apply(&name)));

        Ok(Self {
            name,
            primary_name,
            secondary_name,
            embedded,
            readonly,
        })
    }
}

fn parse_rename_rule(meta: &ParseNestedMeta) -> syn::Result<RenameRule> {
    let lit: LitStr = meta.value()?.parse()?;
    RenameRule::parse(&lit.value()).map_err(|err| MacroError::from(err).spanned(&lit))
}

fn unsupported(meta: &ParseNestedMeta) -> syn::Error {
    let name = meta.path.to_token_stream().to_string();
    MacroError::from(AttributeError::Unsupported(name)).spanned(&meta.path)
}

/// Consumes a serde key this crate does not interpret, with its value.
fn skip_meta(meta: &ParseNestedMeta) -> syn::Result<()> {
    if meta.input.peek(Token![=]) {
        meta.value()?.parse::<syn::Expr>()?;
    } else if meta.input.peek(syn::token::Paren) {
        let content;
        syn::parenthesized!(content in meta.input);
        content.parse::<TokenStream>()?;
    }
    Ok(())
}
