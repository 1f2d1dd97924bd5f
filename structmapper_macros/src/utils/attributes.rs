use syn::Attribute;

/// Check if an attribute matches a given name
pub fn is_attribute(attr: &Attribute, name: &str) -> bool {
    attr.path().is_ident(name)
}

/// All attributes with the given name, in declaration order
pub fn attributes_named<'a>(
    attrs: &'a [Attribute],
    name: &'a str,
) -> impl Iterator<Item = &'a Attribute> + 'a {
    attrs.iter().filter(move |attr| is_attribute(attr, name))
}
