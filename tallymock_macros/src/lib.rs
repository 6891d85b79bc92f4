//! The tallymock procedural macros.

#![forbid(unsafe_code)]

mod describe;

extern crate proc_macro;

///
/// The `Describe` derive macro.
/// Re-exported by `tallymock`, it is documented there.
///
/// # Attributes
/// `#[describe(skip)]` on a field leaves that field out of the description.
///
#[proc_macro_derive(Describe, attributes(describe))]
pub fn derive_describe(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = syn::parse_macro_input!(input as syn::DeriveInput);

    let output = match describe::generate(input) {
        Ok(stream) => stream,
        Err(err) => err.to_compile_error(),
    };

    // println!("{output}");

    proc_macro::TokenStream::from(output)
}
