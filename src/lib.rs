//! # hlslcc
//!
//! This is a meta crate that re-exports all the sub libraries

pub use hlslcc_ast as ast;
pub use hlslcc_glsl as glsl;
pub use hlslcc_text as text;

pub use hlslcc_glsl::{
    generate_glsl, Formatting, GeneratedGlsl, GenerateError, GlslVersion, OutputOptions,
    ShaderInput, ShaderOutput, Statistics,
};

pub use hlslcc_ast::ShaderTarget;
pub use hlslcc_text::{Diagnostic, Reporter, Severity, SourcePosition};
