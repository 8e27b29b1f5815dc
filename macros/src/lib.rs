//! # require_valid
//!
//! This crate provides a procedural macro to require valid symbols for every symbol operand of a
//! function. The operands must provide a `require_valid` method (see `biosymbols::Symbol`).

extern crate proc_macro;

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_macro_input, FnArg, ItemFn, Pat, PatIdent, PatType, Type, TypePath};

/// Check the receiver and every argument of type `Self` before running the function body.
#[proc_macro_attribute]
pub fn require_valid(_attr: TokenStream, item: TokenStream) -> TokenStream {
    // Parse the input tokens into a syntax tree
    let input_fn = parse_macro_input!(item as ItemFn);

    // Extract parts of the function
    let attrs = input_fn.attrs;
    let vis = input_fn.vis;
    let sig = input_fn.sig;
    let block = input_fn.block;

    let checks: Vec<TokenStream2> = sig
        .inputs
        .iter()
        .filter_map(|input| match input {
            FnArg::Receiver(receiver) => {
                let self_token = &receiver.self_token;
                Some(quote! { #self_token.require_valid(); })
            }
            FnArg::Typed(PatType { pat, ty, .. }) => match (pat.as_ref(), ty.as_ref()) {
                (Pat::Ident(PatIdent { ident, .. }), Type::Path(TypePath { path, .. }))
                    if path.is_ident("Self") =>
                {
                    Some(quote! { #ident.require_valid(); })
                }
                _ => None,
            },
        })
        .collect();

    // Generate the new function body
    let expanded = quote! {
        #(#attrs)*
        #vis #sig {
            #(#checks)*
            #block
        }
    };

    // Return the generated code as a TokenStream
    TokenStream::from(expanded)
}
