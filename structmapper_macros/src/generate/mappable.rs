use proc_macro2::{Ident, Literal, TokenStream};
use quote::{ToTokens, quote};
use syn::DeriveInput;

use crate::parse::{MappableInput, Shape, StructField};
use crate::utils::tokens::replace_self;

/// Expands `#[derive(Mappable)]`.
pub fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    let input = MappableInput::from_derive_input(input)?;
    let ident = input.ident;

    let scanner = input
        .container
        .scan
        .then(|| quote!(.with_scanner::<Self>()));

    let (reflect_ref, reflect_mut, type_info, access) = match &input.shape {
        Shape::Struct(fields) => {
            let entries = fields
                .iter()
                .enumerate()
                .map(|(index, field)| field_info(ident, index, field));
            let len = Literal::usize_unsuffixed(fields.len());
            (
                quote!(::structmapper::ReflectRef::Struct(self)),
                quote!(::structmapper::ReflectMut::Struct(self)),
                quote! {
                    static FIELDS: [::structmapper::FieldInfo; #len] = [#(#entries),*];
                    ::structmapper::TypeInfo::new::<Self>(::structmapper::TypeKind::Struct(&FIELDS))
                        #scanner
                },
                struct_access(ident, fields),
            )
        }
        Shape::Newtype(inner) => (
            quote!(::structmapper::ReflectRef::Newtype(&self.0)),
            quote!(::structmapper::ReflectMut::Newtype(&mut self.0)),
            quote! {
                ::structmapper::TypeInfo::new::<Self>(::structmapper::TypeKind::Newtype(
                    <#inner as ::structmapper::Typed>::type_info,
                ))
                #scanner
            },
            TokenStream::new(),
        ),
        Shape::Opaque => (
            quote!(::structmapper::ReflectRef::Opaque),
            quote!(::structmapper::ReflectMut::Value),
            quote! {
                ::structmapper::TypeInfo::new::<Self>(::structmapper::TypeKind::Opaque)
                    #scanner
            },
            TokenStream::new(),
        ),
    };

    Ok(quote! {
        #[automatically_derived]
        impl ::structmapper::Mappable for #ident {
            fn reflect_type(&self) -> ::structmapper::TypeInfo {
                <Self as ::structmapper::Typed>::type_info()
            }

            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }

            fn into_any(self: ::std::boxed::Box<Self>) -> ::std::boxed::Box<dyn ::std::any::Any> {
                self
            }

            fn reflect_ref(&self) -> ::structmapper::ReflectRef<'_> {
                #reflect_ref
            }

            fn reflect_mut(&mut self) -> ::structmapper::ReflectMut<'_> {
                #reflect_mut
            }

            fn indirect_mut(&mut self) -> &mut dyn ::structmapper::Mappable {
                self
            }

            fn clone_boxed(&self) -> ::std::boxed::Box<dyn ::structmapper::Mappable> {
                ::std::boxed::Box::new(::std::clone::Clone::clone(self))
            }

            fn assign(
                &mut self,
                value: ::std::boxed::Box<dyn ::structmapper::Mappable>,
            ) -> ::structmapper::MapResult<()> {
                ::structmapper::assign(self, value)
            }
        }

        #[automatically_derived]
        impl ::structmapper::Typed for #ident {
            fn type_info() -> ::structmapper::TypeInfo {
                #type_info
            }
        }

        #access
    })
}

/// One `FieldInfo` table entry. `Self` is spelled out because the table is
/// a static.
fn field_info(owner: &Ident, index: usize, field: &StructField) -> TokenStream {
    let attributes = &field.attributes;
    let name = &attributes.name;
    let index = Literal::usize_unsuffixed(index);
    let ty = replace_self(field.ty.to_token_stream(), owner);

    let mut entry = quote! {
        ::structmapper::FieldInfo::new(#name, #index, <#ty as ::structmapper::Typed>::type_info)
    };
    if let Some(primary) = &attributes.primary_name {
        entry = quote!(#entry.with_primary_name(#primary));
    }
    if let Some(secondary) = &attributes.secondary_name {
        entry = quote!(#entry.with_secondary_name(#secondary));
    }
    if attributes.embedded {
        entry = quote!(#entry.embedded());
    }
    if attributes.readonly {
        entry = quote!(#entry.readonly());
    }
    entry
}

fn struct_access(ident: &Ident, fields: &[StructField]) -> TokenStream {
    let indices: Vec<_> = (0..fields.len()).map(Literal::usize_unsuffixed).collect();
    let members: Vec<_> = fields.iter().map(|field| field.ident).collect();

    quote! {
        #[automatically_derived]
        impl ::structmapper::StructAccess for #ident {
            fn field(&self, index: usize) -> ::std::option::Option<&dyn ::structmapper::Mappable> {
                match index {
                    #(#indices => ::std::option::Option::Some(&self.#members as &dyn ::structmapper::Mappable),)*
                    _ => ::std::option::Option::None,
                }
            }

            fn field_mut(
                &mut self,
                index: usize,
            ) -> ::std::option::Option<&mut dyn ::structmapper::Mappable> {
                match index {
                    #(#indices => ::std::option::Option::Some(&mut self.#members as &mut dyn ::structmapper::Mappable),)*
                    _ => ::std::option::Option::None,
                }
            }
        }
    }
}
