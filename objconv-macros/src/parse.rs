//! Parsing logic for `#[derive(FixedWidth)]`.
//!
//! Extracts the declared width of every annotated field. Errors for all
//! offending fields are combined so they are reported together.

use syn::ext::IdentExt;
use syn::{Data, DataStruct, DeriveInput, Error, Fields, Generics, Ident, LitInt, Result};

/// Name of the field attribute.
const ATTRIBUTE: &str = "data_width";

/// Parsed struct layout.
#[derive(Debug)]
pub struct LayoutDef {
    /// Struct name
    pub name: Ident,
    /// Struct generics, carried onto the impl
    pub generics: Generics,
    /// Annotated fields in declaration order
    pub fields: Vec<FieldDef>,
}

/// Parsed field width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDef {
    /// Field name without any `r#` prefix
    pub name: String,
    /// Declared width, always positive
    pub width: usize,
}

/// Parse a derive input into its field layout.
pub fn parse_layout(input: &DeriveInput) -> Result<LayoutDef> {
    let named = match &input.data {
        Data::Struct(DataStruct {
            fields: Fields::Named(named),
            ..
        }) => named,
        Data::Struct(_) => {
            return Err(Error::new_spanned(
                &input.ident,
                "FixedWidth can only be derived for structs with named fields",
            ));
        }
        Data::Enum(_) | Data::Union(_) => {
            return Err(Error::new_spanned(
                &input.ident,
                "FixedWidth can only be derived for structs",
            ));
        }
    };

    let mut fields = Vec::new();
    let mut errors: Option<Error> = None;
    let mut push_error = |err: Error| match errors.as_mut() {
        Some(errors) => errors.combine(err),
        None => errors = Some(err),
    };

    for field in &named.named {
        let Some(ident) = &field.ident else {
            continue;
        };

        let mut width = None;
        for attr in field.attrs.iter().filter(|a| a.path().is_ident(ATTRIBUTE)) {
            if width.is_some() {
                push_error(Error::new_spanned(
                    attr,
                    format!("duplicate `{ATTRIBUTE}` attribute on field `{ident}`"),
                ));
                continue;
            }
            match parse_width(attr) {
                Ok(parsed) => width = Some(parsed),
                Err(err) => push_error(err),
            }
        }

        if let Some(width) = width {
            fields.push(FieldDef {
                name: ident.unraw().to_string(),
                width,
            });
        }
    }

    match errors {
        Some(errors) => Err(errors),
        None => Ok(LayoutDef {
            name: input.ident.clone(),
            generics: input.generics.clone(),
            fields,
        }),
    }
}

/// Parse `#[data_width(N)]`, requiring a positive integer literal.
fn parse_width(attr: &syn::Attribute) -> Result<usize> {
    let lit: LitInt = attr.parse_args().map_err(|err| {
        Error::new(
            err.span(),
            format!("expected `#[{ATTRIBUTE}(N)]` with a positive integer literal"),
        )
    })?;
    let width: usize = lit.base10_parse()?;
    if width == 0 {
        return Err(Error::new_spanned(lit, "data width must be positive"));
    }
    Ok(width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    #[test]
    fn test_parse_named_fields() {
        let input: DeriveInput = parse_quote! {
            struct Customer {
                #[data_width(6)]
                id: String,
                notes: String,
                #[data_width(10)]
                r#type: String,
            }
        };

        let layout = parse_layout(&input).unwrap();
        assert_eq!(layout.name, "Customer");
        assert_eq!(
            layout.fields,
            vec![
                FieldDef {
                    name: "id".to_string(),
                    width: 6
                },
                FieldDef {
                    name: "type".to_string(),
                    width: 10
                },
            ]
        );
    }

    #[test]
    fn test_other_attributes_ignored() {
        let input: DeriveInput = parse_quote! {
            struct Row {
                #[serde(rename = "ID")]
                #[data_width(4)]
                id: u32,
            }
        };
        assert_eq!(parse_layout(&input).unwrap().fields.len(), 1);
    }

    #[test]
    fn test_zero_width_rejected() {
        let input: DeriveInput = parse_quote! {
            struct Row {
                #[data_width(0)]
                id: u32,
            }
        };
        let err = parse_layout(&input).unwrap_err();
        assert!(err.to_string().contains("must be positive"));
    }

    #[test]
    fn test_negative_width_rejected() {
        let input: DeriveInput = parse_quote! {
            struct Row {
                #[data_width(-3)]
                id: u32,
            }
        };
        assert!(parse_layout(&input).is_err());
    }

    #[test]
    fn test_non_literal_width_rejected() {
        let input: DeriveInput = parse_quote! {
            struct Row {
                #[data_width(WIDTH)]
                id: u32,
            }
        };
        let err = parse_layout(&input).unwrap_err();
        assert!(err.to_string().contains("positive integer literal"));
    }

    #[test]
    fn test_duplicate_attribute_rejected() {
        let input: DeriveInput = parse_quote! {
            struct Row {
                #[data_width(3)]
                #[data_width(4)]
                id: u32,
            }
        };
        let err = parse_layout(&input).unwrap_err();
        assert!(err.to_string().contains("duplicate"));
    }

    #[test]
    fn test_errors_combined() {
        let input: DeriveInput = parse_quote! {
            struct Row {
                #[data_width(0)]
                a: u32,
                #[data_width(0)]
                b: u32,
            }
        };
        let err = parse_layout(&input).unwrap_err();
        assert_eq!(err.into_iter().count(), 2);
    }

    #[test]
    fn test_tuple_struct_rejected() {
        let input: DeriveInput = parse_quote! {
            struct Row(#[data_width(3)] u32);
        };
        let err = parse_layout(&input).unwrap_err();
        assert!(err.to_string().contains("named fields"));
    }

    #[test]
    fn test_enum_rejected() {
        let input: DeriveInput = parse_quote! {
            enum Row { A, B }
        };
        assert!(parse_layout(&input).is_err());
    }
}
