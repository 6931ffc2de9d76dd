//! Derivation trace.
//!
//! Every computation step of a solve appends a structured [`Step`] to the
//! trace. Turning steps into human-readable text is a separate pass
//! ([`render`]) that can target different languages and precisions.

mod render;
mod step;

pub use render::{render, render_step, Language, RenderConfig};
pub use step::{Operand, Sharing, Step};
