use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Fields, Lit, LitStr, Meta};

/// Derive macro describing the columns a record produces when exported.
///
/// For each named field, extracts:
/// - Column name (respects `#[serde(rename = "...")]`)
/// - Unit (from `#[column(unit = "...")]`, empty when absent)
/// - Description (from doc comments)
///
/// Generates a `columns() -> &'static [Column]` method. A `Column` type with
/// `name`, `unit` and `description` fields must be in scope at the call site.
#[proc_macro_derive(Columns, attributes(column, serde))]
pub fn derive_columns(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let name = &input.ident;

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    name,
                    "Columns only supports structs with named fields",
                ))
            }
        },
        _ => return Err(syn::Error::new_spanned(name, "Columns only supports structs")),
    };

    let mut entries = Vec::with_capacity(fields.len());
    for field in fields {
        let Some(ident) = field.ident.as_ref() else {
            continue;
        };
        let column = serde_rename(&field.attrs)?.unwrap_or_else(|| ident.to_string());
        let unit = column_unit(&field.attrs)?.unwrap_or_default();
        let description = doc_comment(&field.attrs);

        entries.push(quote! {
            Column {
                name: #column,
                unit: #unit,
                description: #description,
            }
        });
    }

    Ok(quote! {
        impl #name {
            pub fn columns() -> &'static [Column] {
                static COLUMNS: &[Column] = &[
                    #(#entries),*
                ];
                COLUMNS
            }
        }
    })
}

fn serde_rename(attrs: &[syn::Attribute]) -> syn::Result<Option<String>> {
    let mut rename = None;
    for attr in attrs.iter().filter(|a| a.path().is_ident("serde")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename") {
                let value: LitStr = meta.value()?.parse()?;
                rename = Some(value.value());
            } else if meta.input.peek(syn::Token![=]) {
                // skip values of other serde options, e.g. skip_serializing_if = "..."
                let _: syn::Expr = meta.value()?.parse()?;
            } else if meta.input.peek(syn::token::Paren) {
                let content;
                syn::parenthesized!(content in meta.input);
                content.parse::<proc_macro2::TokenStream>()?;
            }
            Ok(())
        })?;
    }
    Ok(rename)
}

fn column_unit(attrs: &[syn::Attribute]) -> syn::Result<Option<String>> {
    let mut unit = None;
    for attr in attrs.iter().filter(|a| a.path().is_ident("column")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("unit") {
                let value: LitStr = meta.value()?.parse()?;
                unit = Some(value.value());
                Ok(())
            } else {
                Err(meta.error("unsupported column attribute, expected `unit`"))
            }
        })?;
    }
    Ok(unit)
}

fn doc_comment(attrs: &[syn::Attribute]) -> String {
    attrs
        .iter()
        .filter(|attr| attr.path().is_ident("doc"))
        .filter_map(|attr| match &attr.meta {
            Meta::NameValue(meta) => match &meta.value {
                syn::Expr::Lit(expr_lit) => match &expr_lit.lit {
                    Lit::Str(lit_str) => Some(lit_str.value().trim().to_string()),
                    _ => None,
                },
                _ => None,
            },
            _ => None,
        })
        .collect::<Vec<_>>()
        .join(" ")
}
