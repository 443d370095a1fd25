//! # streamgen
//!
//! Declare async stream members on structs.
//!
//! ## Features
//!
//! - **`macros`** (default) - the `#[create_async_stream]` attribute
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! streamgen = "0.1"
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use streamgen::prelude::*;
//!
//! #[create_async_stream(of: i32.self, named: "numbers")]
//! pub struct Counter {}
//!
//! impl Counter {
//!     pub fn new() -> Self {
//!         let (_numbers, numbersContinuation) = Self::make_numbers_stream();
//!         Self { _numbers, numbersContinuation }
//!     }
//!
//!     pub fn tick(&self, n: i32) {
//!         self.numbersContinuation.send(n);
//!     }
//! }
//!
//! # async fn run() {
//! let counter = Counter::new();
//! counter.tick(1);
//! assert_eq!(counter.numbers().next().await, Some(1));
//! # }
//! ```
//!
//! Generated code refers to `::streamgen::AsyncStream` and
//! `::streamgen::Continuation`. Crates that re-export them elsewhere set
//! `runtime_path` in their `streamgen.toml`.

mod runtime;

pub use runtime::{AsyncStream, Continuation, YieldResult};

// Re-export the attribute
#[cfg(feature = "macros")]
pub use streamgen_macros::create_async_stream;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::runtime::{AsyncStream, Continuation, YieldResult};

    #[cfg(feature = "macros")]
    pub use streamgen_macros::create_async_stream;

    pub use futures::StreamExt;
}
