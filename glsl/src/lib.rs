//! # hlslcc - GLSL Backend
//!
//! This library turns a semantically analyzed HLSL program into GLSL source
//! for a chosen shader stage and language version. Generation runs five
//! stages over the AST, strictly in order:
//!
//! 1. control path analysis ([mark_control_paths])
//! 2. conversion into an emittable shape ([convert])
//! 3. reachability marking ([mark_references_from_entry_point])
//! 4. extension analysis ([determine_required_extensions])
//! 5. text emission
//!
//! [generate_glsl] runs all five. Recoverable problems are accumulated in
//! the caller's [Reporter] so one run surfaces as many diagnostics as
//! possible; fatal problems return a [GenerateError] and the output buffer
//! is never handed out.

use hlslcc_ast as ast;
use hlslcc_ast::ShaderTarget;
use hlslcc_text::Reporter;

mod control_path;
mod converter;
mod extensions;
mod generator;
mod keywords;
mod reachability;

pub use control_path::mark_control_paths;
pub use converter::convert;
pub use extensions::determine_required_extensions;
pub use keywords::*;
pub use reachability::mark_references_from_entry_point;

/// Target GLSL language version
#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Copy, Clone)]
pub enum GlslVersion {
    Glsl110,
    Glsl120,
    Glsl130,
    Glsl140,
    Glsl150,
    Glsl330,
    Glsl400,
    Glsl410,
    Glsl420,
    Glsl430,
    Glsl440,
    Glsl450,
}

impl GlslVersion {
    /// The number written after `#version`
    pub fn number(self) -> u32 {
        match self {
            GlslVersion::Glsl110 => 110,
            GlslVersion::Glsl120 => 120,
            GlslVersion::Glsl130 => 130,
            GlslVersion::Glsl140 => 140,
            GlslVersion::Glsl150 => 150,
            GlslVersion::Glsl330 => 330,
            GlslVersion::Glsl400 => 400,
            GlslVersion::Glsl410 => 410,
            GlslVersion::Glsl420 => 420,
            GlslVersion::Glsl430 => 430,
            GlslVersion::Glsl440 => 440,
            GlslVersion::Glsl450 => 450,
        }
    }
}

impl std::fmt::Display for GlslVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// Description of the shader being generated
pub struct ShaderInput<'a> {
    pub target: ShaderTarget,
    /// Entry point name, used in the file header comment
    pub entry_point: &'a str,
}

/// Text formatting options for the generated source
pub struct Formatting {
    /// Name-mangling prefix for identifiers introduced by conversion
    pub prefix: String,
    /// Emit `#line` directives before declarations and statements
    pub line_marks: bool,
    /// One level of indentation
    pub indent: String,
    /// Timestamp line for the header comment; `None` keeps the output
    /// byte-identical between runs
    pub timestamp: Option<String>,
}

impl Default for Formatting {
    fn default() -> Self {
        Formatting {
            prefix: String::from("hc_"),
            line_marks: false,
            indent: String::from("    "),
            timestamp: None,
        }
    }
}

/// Option flags for generation
#[derive(Default)]
pub struct OutputOptions {
    /// Backfill missing core features with `#extension` directives instead
    /// of failing
    pub allow_extensions: bool,
}

/// Everything the caller specifies about the output
pub struct ShaderOutput {
    pub version: GlslVersion,
    pub formatting: Formatting,
    pub options: OutputOptions,
}

impl ShaderOutput {
    pub fn new(version: GlslVersion) -> Self {
        ShaderOutput {
            version,
            formatting: Formatting::default(),
            options: OutputOptions::default(),
        }
    }
}

/// Per-texture binding record collected during emission
#[derive(PartialEq, Debug, Clone)]
pub struct TextureBinding {
    pub ident: String,
    pub binding: Option<u32>,
}

/// Statistics collected while emitting
#[derive(PartialEq, Debug, Clone, Default)]
pub struct Statistics {
    pub textures: Vec<TextureBinding>,
}

/// Result of a successful generation
#[derive(Debug)]
pub struct GeneratedGlsl {
    pub source: String,
    pub statistics: Statistics,
}

/// Error result when generating GLSL fails
///
/// These abort generation; recoverable problems go through the [Reporter]
/// instead so emission can continue.
#[derive(PartialEq, Eq, Debug, thiserror::Error)]
pub enum GenerateError {
    /// The program carries no entry point reference
    #[error("entry point \"{0}\" not found")]
    MissingEntryPoint(String),

    /// A reachable non-void function has a control path without a return
    #[error("not all control paths in function \"{0}\" return a value")]
    NonReturnControlPath(String),

    /// A construct needs an extension but extensions are disallowed
    #[error("GLSL {version} does not support {feature} (requires {extension})")]
    ExtensionRequired {
        version: u32,
        feature: String,
        extension: String,
    },

    /// An intrinsic call has the wrong number of arguments
    #[error("invalid number of arguments in intrinsic \"{0}\"")]
    InvalidIntrinsicArgs(&'static str),
}

/// Generate GLSL source for the program
///
/// Runs the analysis and conversion passes in order and emits the result.
/// The passes annotate and restructure the AST in place; running them again
/// on the converted program is a no-op.
pub fn generate_glsl(
    program: &mut ast::Program,
    input: &ShaderInput,
    output: &ShaderOutput,
    reporter: &mut Reporter,
) -> Result<GeneratedGlsl, GenerateError> {
    if program.entry_point.is_none() {
        return Err(GenerateError::MissingEntryPoint(
            input.entry_point.to_string(),
        ));
    }

    mark_control_paths(program);
    convert(program, input.target, &output.formatting.prefix, reporter);
    mark_references_from_entry_point(program);

    let extensions = determine_required_extensions(
        program,
        output.version,
        input.target,
        output.options.allow_extensions,
    )?;

    generator::generate(program, input, output, &extensions, reporter)
}
