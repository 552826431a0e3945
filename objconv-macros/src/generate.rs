//! Code generation for `#[derive(FixedWidth)]`.

use crate::parse::LayoutDef;
use proc_macro2::TokenStream;
use quote::quote;

/// Generate the `FixedWidth` impl for a parsed layout.
pub fn generate_fixed_width(layout: &LayoutDef) -> TokenStream {
    let name = &layout.name;
    let (impl_generics, ty_generics, where_clause) = layout.generics.split_for_impl();

    let fields = layout.fields.iter().map(|field| {
        let field_name = &field.name;
        let width = field.width;
        quote! {
            ::objconv::fixed_width::FieldWidth {
                name: #field_name,
                width: ::objconv::fixed_width::DataWidth::from_literal(#width),
            }
        }
    });

    quote! {
        impl #impl_generics ::objconv::fixed_width::FixedWidth for #name #ty_generics #where_clause {
            const FIELDS: &'static [::objconv::fixed_width::FieldWidth] = &[
                #(#fields),*
            ];
        }
    }
}
