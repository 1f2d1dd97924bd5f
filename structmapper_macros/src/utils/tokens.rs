use proc_macro2::{Group, Ident, TokenStream, TokenTree};

/// Replaces every `Self` in `tokens` with `ident`.
///
/// Field tables are emitted as statics, where `Self` is not in scope.
pub fn replace_self(tokens: TokenStream, ident: &Ident) -> TokenStream {
    tokens
        .into_iter()
        .map(|tree| match tree {
            TokenTree::Ident(found) if found == "Self" => {
                let mut renamed = ident.clone();
                renamed.set_span(found.span());
                TokenTree::Ident(renamed)
            }
            TokenTree::Group(group) => {
                let mut replaced = Group::new(group.delimiter(), replace_self(group.stream(), ident));
                replaced.set_span(group.span());
                TokenTree::Group(replaced)
            }
            other => other,
        })
        .collect()
}
