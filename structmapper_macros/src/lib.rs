use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod errors;
mod generate;
mod parse;
mod utils;

/// Derives `Mappable` and `Typed`, making a type usable as a copy source or
/// destination.
///
/// - Structs with named fields are copied field by field. Unit structs are
///   structs without fields.
/// - Tuple structs with exactly one field are newtypes: they convert to and
///   from anything their inner type converts to and from.
/// - Enums are copied as a whole value, or through a transformer or scanner.
///
/// The type must also implement `Clone` and `Default`. Generic types and
/// unions are rejected.
///
/// # Attributes
///
/// Field level, in `#[structmapper(..)]`:
///
/// - `rename = "name"` - **Optional**. Name used for matching, tried before
///   every other name of the field
/// - `skip` - **Optional**. This tag contributes no name; the serde name and
///   the declared name still match
/// - `embed` - **Optional**. Flattens a nested struct's fields into this one
/// - `readonly` - **Optional**. Never written as a destination
///
/// Field level, in `#[serde(..)]`:
///
/// - `rename = "name"` - second candidate name, unless
///   `MapperConfig::use_secondary_tags` is off
/// - `skip` - the serde tag contributes no name
/// - `flatten` - same as `embed`
///
/// Type level: `#[structmapper(rename_all = "..")]` and
/// `#[serde(rename_all = "..")]` derive default tag names from the field
/// names, using serde's case names. `#[structmapper(scan)]` registers the
/// type's `Scan` implementation as its scanner.
///
/// All other serde keys are ignored.
///
/// # Examples
///
/// ```rust,ignore
/// use structmapper::Mappable;
///
/// #[derive(Mappable, Clone, Default, Debug)]
/// #[serde(rename_all = "camelCase")]
/// pub struct UserRow {
///     pub id: u64,
///     #[structmapper(rename = "display_name")]
///     pub name: String,
///     pub created_at: Option<String>,
/// }
///
/// #[derive(Mappable, Clone, Default, Debug)]
/// pub struct UserId(u64);
/// ```
#[proc_macro_derive(Mappable, attributes(structmapper, serde))]
pub fn mappable_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    generate::mappable::expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
