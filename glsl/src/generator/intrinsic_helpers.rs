//! Helper function definitions for intrinsics without a GLSL counterpart
//!
//! Emitted into the prologue before any global declaration, so calls in the
//! shader body resolve against them.

use hlslcc_ast as ast;
use hlslcc_ast::Intrinsic;

use super::Context;

/// Write the helper definitions for the intrinsics the program uses
pub(super) fn write_referenced_intrinsics(
    program: &ast::Program,
    output: &mut String,
    context: &Context,
) {
    if program.used_intrinsics.contains(&Intrinsic::Clip) {
        write_clip_intrinsics(output, context);
    }
}

/// `clip(x)` discards the fragment when any component is negative
fn write_clip_intrinsics(output: &mut String, context: &Context) {
    context.write_line(output, "void clip(float x) { if (x < 0.0) discard; }");

    for type_name in ["vec2", "vec3", "vec4"] {
        context.write_line(
            output,
            &format!(
                "void clip({0} x) {{ if (any(lessThan(x, {0}(0.0)))) discard; }}",
                type_name
            ),
        );
    }

    context.blank(output);
}
