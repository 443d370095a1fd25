//! # streamgen-macros
//!
//! Procedural macro behind `#[create_async_stream]`.
//!
//! All of the work happens in `streamgen-engine`; this crate only loads the
//! caller's `streamgen.toml` and converts between `proc_macro` and
//! `proc_macro2` token streams.

use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;

use streamgen_engine::registry::CREATE_ASYNC_STREAM;
use streamgen_engine::StreamgenConfig;

/// Add an async stream accessor and its producer/consumer storage to a struct.
///
/// ```rust,ignore
/// use streamgen::create_async_stream;
///
/// #[create_async_stream(of: i32.self, named: "numbers")]
/// pub struct Counter {
///     ticks: u64,
/// }
///
/// impl Counter {
///     pub fn new() -> Self {
///         let (_numbers, numbersContinuation) = Self::make_numbers_stream();
///         Self { ticks: 0, _numbers, numbersContinuation }
///     }
/// }
/// ```
///
/// Generated members:
///
/// - `pub fn numbers(&self) -> &AsyncStream<i32>` - public accessor
/// - `_numbers: AsyncStream<i32>` - consumer end read by the accessor
/// - `numbersContinuation: Continuation<i32>` - producer end
/// - `fn make_numbers_stream()` - builds a connected pair for the constructor
///
/// ## Arguments
///
/// - `of: <Type>.self` - element type of the stream
/// - `named: "<identifier>"` - member name, a plain string literal
///
/// Invalid arguments produce exactly one compile error and leave the struct
/// as written.
#[proc_macro_attribute]
pub fn create_async_stream(attr: TokenStream, item: TokenStream) -> TokenStream {
    let options = match StreamgenConfig::load_for_manifest().and_then(|c| c.to_options()) {
        Ok(options) => options,
        Err(e) => {
            let item = proc_macro2::TokenStream::from(item);
            let error = syn::Error::new(Span::call_site(), e.to_string()).to_compile_error();
            return quote! {
                #item
                #error
            }
            .into();
        }
    };

    CREATE_ASYNC_STREAM
        .expand_attribute(attr.into(), item.into(), &options)
        .into()
}
