//! Derive macros for types which hold secret key material.
//!
//! Lattice secret keys carry short polynomials from which the whole key pair can be rebuilt, and
//! shared secrets are session keys. Neither should ever show up in logs or panic messages, so
//! their formatting impls are generated here instead of derived from the standard library.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{DeriveInput, parse_macro_input};

// SILENT DEBUG MACRO
// ================================================================================================

/// Derives a Debug implementation that elides secret values.
///
/// The generated implementation writes `<elided secret for TypeName>` instead of the field
/// values.
///
/// # Example
///
/// ```ignore
/// #[derive(SilentDebug)]
/// pub struct SharedSecret([u8; 32]);
///
/// let ss = SharedSecret([0u8; 32]);
/// assert_eq!(format!("{:?}", ss), "<elided secret for SharedSecret>");
/// ```
#[proc_macro_derive(SilentDebug)]
pub fn silent_debug(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);
    elided_formatter(&ast, quote!(::core::fmt::Debug)).into()
}

// SILENT DISPLAY MACRO
// ================================================================================================

/// Derives a Display implementation that elides secret values.
///
/// Secret keys are not meant to be displayed, but an elided implementation keeps them usable in
/// generic contexts which require `Display` (e.g., error reporting in the CLI).
///
/// # Example
///
/// ```ignore
/// #[derive(SilentDisplay)]
/// pub struct SecretKey {
///     seed: [u8; 32],
/// }
///
/// let sk = SecretKey { seed: [0u8; 32] };
/// assert_eq!(format!("{}", sk), "<elided secret for SecretKey>");
/// ```
#[proc_macro_derive(SilentDisplay)]
pub fn silent_display(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);
    elided_formatter(&ast, quote!(::core::fmt::Display)).into()
}

// HELPERS
// ================================================================================================

/// Builds an implementation of the formatting trait `fmt_trait` which never touches the fields
/// of the annotated type.
fn elided_formatter(ast: &DeriveInput, fmt_trait: TokenStream2) -> TokenStream2 {
    let name = &ast.ident;
    let (impl_generics, ty_generics, where_clause) = ast.generics.split_for_impl();

    quote! {
        impl #impl_generics #fmt_trait for #name #ty_generics #where_clause {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "<elided secret for {}>", stringify!(#name))
            }
        }
    }
}
