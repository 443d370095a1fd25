//! The pipeline stages, in the order they run.
//!
//! Each stage is a pure function over already materialized syntax. Stages
//! report plain [`ExpansionError`](crate::error::ExpansionError)s; attaching a
//! source position is left to the pipeline driver in [`crate::expand`].

mod arguments;
mod context;
mod name;
mod synth;
mod ty;

pub use arguments::extract_arguments;
pub use context::validate_context;
pub use name::resolve_name;
pub use synth::synthesize;
pub use ty::resolve_type;
