use proc_macro::TokenStream;
use proc_macro2::{Ident, Span, TokenStream as TokenStream2};
use proc_macro_crate::{FoundCrate, crate_name};
use quote::quote;
use syn::{Data, DeriveInput, Fields, LitStr, parse_macro_input};

#[proc_macro_derive(FieldManifest, attributes(field))]
pub fn derive_field_manifest(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    if !input.generics.params.is_empty() {
        return syn::Error::new_spanned(
            input.ident,
            "FieldManifest derive currently supports only non-generic structs",
        )
        .to_compile_error()
        .into();
    }

    let model_ident = input.ident;

    let named_fields = match input.data {
        Data::Struct(data) => match data.fields {
            Fields::Named(fields) => fields.named,
            _ => {
                return syn::Error::new(
                    Span::call_site(),
                    "FieldManifest derive requires a struct with named fields",
                )
                .to_compile_error()
                .into();
            }
        },
        _ => {
            return syn::Error::new(
                Span::call_site(),
                "FieldManifest derive is only supported on structs",
            )
            .to_compile_error()
            .into();
        }
    };

    let calmtokens = calmtokens_path();
    let mut rows = Vec::new();

    for field in named_fields {
        let Some(field_ident) = field.ident else {
            continue;
        };
        let field_name = field_ident.to_string();

        let mut label: Option<String> = None;
        let mut description: Option<String> = None;
        let mut required = false;

        for attr in &field.attrs {
            if !attr.path().is_ident("field") {
                continue;
            }
            let parsed = attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("label") {
                    label = Some(meta.value()?.parse::<LitStr>()?.value());
                    Ok(())
                } else if meta.path.is_ident("description") {
                    description = Some(meta.value()?.parse::<LitStr>()?.value());
                    Ok(())
                } else if meta.path.is_ident("required") {
                    required = true;
                    Ok(())
                } else {
                    Err(meta.error(
                        "unsupported field attribute; expected label, description, or required",
                    ))
                }
            });
            if let Err(error) = parsed {
                return error.to_compile_error().into();
            }
        }

        let label = label.unwrap_or_else(|| humanize(&field_name));
        let description = match &description {
            Some(text) => quote! { ::core::option::Option::Some(#text) },
            None => quote! { ::core::option::Option::None },
        };

        rows.push(quote! {
            #calmtokens::fields::FieldInfo {
                key: #calmtokens::fields::FieldKey::new(#field_name),
                label: #label,
                description: #description,
                required: #required,
            }
        });
    }

    quote! {
        impl #calmtokens::fields::FieldManifest for #model_ident {
            fn field_manifest() -> &'static [#calmtokens::fields::FieldInfo] {
                const ROWS: &[#calmtokens::fields::FieldInfo] = &[#(#rows),*];
                ROWS
            }
        }
    }
    .into()
}

fn calmtokens_path() -> TokenStream2 {
    match crate_name("calmtokens") {
        Ok(FoundCrate::Name(name)) => {
            let ident = Ident::new(&name, Span::call_site());
            quote!(::#ident)
        }
        Ok(FoundCrate::Itself) => quote!(crate),
        Err(_) => quote!(::calmtokens),
    }
}

fn humanize(input: &str) -> String {
    let mut out = String::new();
    for (index, segment) in input.split('_').filter(|s| !s.is_empty()).enumerate() {
        if index > 0 {
            out.push(' ');
            out.push_str(segment);
            continue;
        }
        let mut chars = segment.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    out
}
