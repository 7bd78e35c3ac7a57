//! GLSL extension analysis
//!
//! Determines the minimal set of `#extension` directives the emitted code
//! needs for the chosen target version. Each construct consults a static
//! entry of (minimum core version, backfill extension); below the minimum
//! the extension is collected, or generation fails when extensions are
//! disallowed.

use std::collections::BTreeSet;

use hlslcc_ast as ast;
use hlslcc_ast::{Register, ShaderTarget};

use crate::{GenerateError, GlslVersion};

const FRAGMENT_COORD_CONVENTIONS: (u32, &str) = (150, "GL_ARB_fragment_coord_conventions");
const EXPLICIT_ATTRIB_LOCATION: (u32, &str) = (330, "GL_ARB_explicit_attrib_location");
const SHADING_LANGUAGE_420PACK: (u32, &str) = (420, "GL_ARB_shading_language_420pack");
const SHADER_IMAGE_LOAD_STORE: (u32, &str) = (420, "GL_ARB_shader_image_load_store");
const COMPUTE_SHADER: (u32, &str) = (430, "GL_ARB_compute_shader");
const SHADER_STORAGE_BUFFER_OBJECT: (u32, &str) = (430, "GL_ARB_shader_storage_buffer_object");

/// Collects the extensions required below the target version
struct ExtensionAgent {
    version: GlslVersion,
    allow_extensions: bool,
    required: BTreeSet<&'static str>,
}

impl ExtensionAgent {
    /// Record that `feature` needs `entry` when the target is too old
    fn require(
        &mut self,
        feature: &str,
        entry: (u32, &'static str),
    ) -> Result<(), GenerateError> {
        let (min_version, extension) = entry;
        if self.version.number() >= min_version {
            return Ok(());
        }
        if !self.allow_extensions {
            return Err(GenerateError::ExtensionRequired {
                version: self.version.number(),
                feature: feature.to_string(),
                extension: extension.to_string(),
            });
        }
        self.required.insert(extension);
        Ok(())
    }
}

/// Determine the extensions the program requires at the target version
///
/// The result is deterministic: extension names come back in lexicographic
/// order.
pub fn determine_required_extensions(
    program: &ast::Program,
    version: GlslVersion,
    target: ShaderTarget,
    allow_extensions: bool,
) -> Result<Vec<&'static str>, GenerateError> {
    let mut agent = ExtensionAgent {
        version,
        allow_extensions,
        required: BTreeSet::new(),
    };

    if target == ShaderTarget::Fragment {
        agent.require("gl_FragCoord layout qualifiers", FRAGMENT_COORD_CONVENTIONS)?;

        if let Some(entry_point) = program.entry_point_ref() {
            if !entry_point.output_semantics.var_decl_refs.is_empty() {
                agent.require("explicit output locations", EXPLICIT_ATTRIB_LOCATION)?;
            }
        }
    }

    if let Some(entry_point) = program.entry_point_ref() {
        for attribute in &entry_point.attributes {
            match attribute.ident.as_str() {
                "numthreads" => agent.require("compute shader layout", COMPUTE_SHADER)?,
                "earlydepthstencil" => {
                    agent.require("early fragment tests", SHADER_IMAGE_LOAD_STORE)?
                }
                _ => {}
            }
        }
    }

    if has_explicit_binding(program, target) {
        agent.require("explicit binding slots", SHADING_LANGUAGE_420PACK)?;
    }

    if program
        .used_intrinsics
        .iter()
        .any(|intrinsic| intrinsic.is_interlocked())
    {
        agent.require("atomic operations", SHADER_STORAGE_BUFFER_OBJECT)?;
    }

    Ok(agent.required.into_iter().collect())
}

/// Check if any reachable declaration will emit a `binding = N` qualifier
fn has_explicit_binding(program: &ast::Program, target: ShaderTarget) -> bool {
    let buffers = program
        .uniform_buffers
        .iter()
        .filter(|buffer| buffer.reachable)
        .any(|buffer| Register::get_for_target(&buffer.slot_registers, target).is_some());

    let textures = program
        .texture_decls
        .iter()
        .filter(|stmt| stmt.reachable)
        .flat_map(|stmt| &stmt.decls)
        .filter(|decl| decl.reachable)
        .any(|decl| Register::get_for_target(&decl.slot_registers, target).is_some());

    buffers || textures
}
