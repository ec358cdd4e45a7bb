use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::{parse_macro_input, spanned::Spanned, ItemStruct, LitStr};

use crate::schema_extraction::{
    collect_doc_comments, ensure_named_struct, infer_description, infer_schema_name,
    parse_response_schema_args,
};

pub fn response_schema(attr: TokenStream, item: TokenStream) -> TokenStream {
    let args = match parse_response_schema_args(attr) {
        Ok(args) => args,
        Err(err) => return err.to_compile_error().into(),
    };

    let item_struct = parse_macro_input!(item as ItemStruct);

    if let Err(err) = ensure_named_struct(&item_struct) {
        return err.to_compile_error().into();
    }

    if !item_struct.generics.params.is_empty() {
        return syn::Error::new(
            item_struct.generics.span(),
            "`#[response_schema]` does not support generic structs",
        )
        .to_compile_error()
        .into();
    }

    let schema_name = infer_schema_name(&item_struct, args.name.as_ref());
    let description = infer_description(
        args.description.as_ref(),
        collect_doc_comments(&item_struct.attrs),
    );

    let description_tokens = description
        .as_ref()
        .map(|lit| quote! { Some(#lit) })
        .unwrap_or_else(|| quote! { None });

    let type_name = LitStr::new(&item_struct.ident.to_string(), Span::call_site());
    let ident = &item_struct.ident;

    let expanded = quote! {
        #item_struct

        impl vibe_pack::schema::ResponseSchema for #ident {
            fn schema() -> &'static vibe_pack::schema::SchemaHandle {
                static HANDLE: std::sync::OnceLock<vibe_pack::schema::SchemaHandle> =
                    std::sync::OnceLock::new();
                HANDLE.get_or_init(|| {
                    let mut root = vibe_pack::schema::schemars::schema_for!(Self);
                    vibe_pack::schema::apply_metadata(&mut root, #schema_name, #description_tokens);
                    vibe_pack::schema::SchemaHandle::from_root_schema::<Self>(
                        #schema_name,
                        #type_name,
                        root,
                    )
                })
            }
        }
    };

    expanded.into()
}
