//! # markup-forge – Layout → HTML/CSS compiler
//!
//! This crate compiles declarative page layouts into standalone HTML
//! documents with a matching stylesheet. The pipeline stages are:
//!
//! 1. **Parse** – layout JSON → [`layout::Layout`]
//! 2. **Theme** – merge color/font overrides over fixed defaults ([`theme`])
//! 3. **Classify** – props bags → the closed component sum type ([`component`])
//! 4. **Style** – build the shared stylesheet string ([`stylesheet`])
//! 5. **Render** – emit the document and component fragments ([`render`])
//!
//! The compiler is deterministic and side-effect free: equal layouts produce
//! byte-identical output, so results may be cached by input equality.

pub mod component;
pub mod layout;
pub mod pipeline;
pub mod render;
pub mod stylesheet;
pub mod templates;
pub mod theme;

// Re-exports for convenience
pub use layout::Layout;
pub use pipeline::{compile, compile_json, CompileError, MarkupOutput};
