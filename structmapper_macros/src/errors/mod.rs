use quote::ToTokens;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MacroError {
    #[error("{0}")]
    Derive(#[from] DeriveError),
    #[error("{0}")]
    Attribute(#[from] AttributeError),
}

#[derive(Error, Debug)]
pub enum DeriveError {
    #[error("Mappable cannot be derived for generic types")]
    Generic,
    #[error("Mappable can only be derived for tuple structs with exactly one field")]
    TupleArity,
    #[error("Mappable cannot be derived for unions")]
    Union,
}

#[derive(Error, Debug)]
pub enum AttributeError {
    #[error("unsupported structmapper attribute `{0}`")]
    Unsupported(String),
    #[error("unknown rename rule `{0}`")]
    UnknownRenameRule(String),
}

impl MacroError {
    /// Converts into a compile error pointing at `tokens`.
    pub fn spanned<T: ToTokens>(self, tokens: T) -> syn::Error {
        syn::Error::new_spanned(tokens, self.to_string())
    }
}
