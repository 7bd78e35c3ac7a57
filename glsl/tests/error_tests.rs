mod shared;
use shared::*;

use hlslcc_ast::*;
use hlslcc_glsl::*;
use hlslcc_text::{Reporter, Severity};

#[test]
fn check_missing_entry_point() {
    let mut program = Program::new();
    let input = ShaderInput {
        target: ShaderTarget::Vertex,
        entry_point: "main",
    };
    let output_desc = ShaderOutput::new(GlslVersion::Glsl330);
    let mut reporter = Reporter::new();

    let result = generate_glsl(&mut program, &input, &output_desc, &mut reporter);
    assert_eq!(
        result.unwrap_err(),
        GenerateError::MissingEntryPoint(String::from("main"))
    );
}

/// Helper with a control path that misses a return: `if (c) return 1.0;`
fn non_returning_function(program: &mut Program) -> FunctionId {
    let (c_stmt, c) = plain_param(program, "c", bool_ty());
    add_function(
        program,
        "f",
        float_ty(),
        vec![c_stmt],
        vec![Stmt::synthesized(StmtKind::If {
            condition: var_access("c", c),
            body: Box::new(ret(lit_f(1.0))),
            else_branch: None,
        })],
    )
}

#[test]
fn check_non_return_control_path_in_reachable_function() {
    let mut program = Program::new();
    let f = non_returning_function(&mut program);
    add_entry(
        &mut program,
        TypeDenoter::Void,
        None,
        Vec::new(),
        vec![expr_stmt(function_call("f", f, vec![lit_b(true)]))],
    );

    let input = ShaderInput {
        target: ShaderTarget::Compute,
        entry_point: "main",
    };
    let output_desc = ShaderOutput::new(GlslVersion::Glsl430);
    let mut reporter = Reporter::new();

    let result = generate_glsl(&mut program, &input, &output_desc, &mut reporter);
    assert_eq!(
        result.unwrap_err(),
        GenerateError::NonReturnControlPath(String::from("f"))
    );
}

#[test]
fn check_non_return_control_path_in_unreachable_function() {
    let mut program = Program::new();
    non_returning_function(&mut program);
    add_entry(&mut program, TypeDenoter::Void, None, Vec::new(), Vec::new());

    let (generated, reporter) = generate(&mut program, ShaderTarget::Compute, GlslVersion::Glsl430);

    // The unreferenced function is suppressed and only warned about
    assert!(!generated.source.contains("float f("));
    assert!(!reporter.has_errors());
    let warning = &reporter.diagnostics()[0];
    assert_eq!(warning.severity, Severity::Warning);
    assert_eq!(
        warning.message,
        "not all control paths in unreferenced function \"f\" return a value"
    );
}

/// Fragment entry writing a color target, which needs an explicit location
fn fragment_color_program() -> Program {
    let mut program = Program::new();
    let (c_stmt, c) = param(&mut program, "c", float4_ty(), user_semantic("COLOR"));
    add_entry(
        &mut program,
        float4_ty(),
        Some(Semantic::Target(0)),
        vec![c_stmt],
        vec![ret(var_access("c", c))],
    );
    program
}

#[test]
fn check_extension_required_error() {
    let mut program = fragment_color_program();
    let input = ShaderInput {
        target: ShaderTarget::Fragment,
        entry_point: "main",
    };
    let output_desc = ShaderOutput::new(GlslVersion::Glsl150);
    let mut reporter = Reporter::new();

    let result = generate_glsl(&mut program, &input, &output_desc, &mut reporter);
    assert_eq!(
        result.unwrap_err(),
        GenerateError::ExtensionRequired {
            version: 150,
            feature: String::from("explicit output locations"),
            extension: String::from("GL_ARB_explicit_attrib_location"),
        }
    );
}

#[test]
fn check_extension_collection_is_ordered() {
    let mut program = Program::new();
    let (_, members) = add_cbuffer(&mut program, "Globals", "b0", vec![("wvp", mat4_ty())]);
    let wvp = members[0];
    let (c_stmt, c) = param(&mut program, "c", float4_ty(), user_semantic("COLOR"));
    add_entry(
        &mut program,
        float4_ty(),
        Some(Semantic::Target(0)),
        vec![c_stmt],
        vec![ret(intrinsic_call(
            "mul",
            Intrinsic::Mul,
            vec![var_access("wvp", wvp), var_access("c", c)],
        ))],
    );

    let input = ShaderInput {
        target: ShaderTarget::Fragment,
        entry_point: "main",
    };
    let mut output_desc = ShaderOutput::new(GlslVersion::Glsl150);
    output_desc.options.allow_extensions = true;

    check_generated_with(
        &mut program,
        &input,
        &output_desc,
        "// GLSL fragment shader \"main\"
// Generated by hlslcc

#version 150

#extension GL_ARB_explicit_attrib_location : enable
#extension GL_ARB_shading_language_420pack : enable

layout(origin_upper_left) in vec4 gl_FragCoord;

in vec4 c;

layout(location = 0) out vec4 hc_SV_Target;

layout(std140, binding = 0) uniform Globals
{
    mat4 wvp;
};

void main()
{
    hc_SV_Target = (wvp * c);
}

",
    );
}

#[test]
fn check_invalid_register_prefix() {
    let mut program = Program::new();
    let (_, members) = add_cbuffer(&mut program, "Globals", "t2", vec![("wvp", mat4_ty())]);
    let wvp = members[0];
    let (p_stmt, p) = param(&mut program, "p", float4_ty(), user_semantic("POSITION"));
    add_entry(
        &mut program,
        float4_ty(),
        Some(Semantic::Position),
        vec![p_stmt],
        vec![ret(intrinsic_call(
            "mul",
            Intrinsic::Mul,
            vec![var_access("wvp", wvp), var_access("p", p)],
        ))],
    );

    let (generated, reporter) = generate(&mut program, ShaderTarget::Vertex, GlslVersion::Glsl420);

    // The binding is dropped but emission continues
    assert!(generated.source.contains("layout(std140) uniform Globals"));
    assert!(reporter.has_errors());
    assert!(reporter
        .diagnostics()
        .iter()
        .any(|d| d.message == "invalid register prefix 't' (expected 'b')"));
}

#[test]
fn check_mul_arity_is_fatal() {
    let mut program = Program::new();
    add_entry(
        &mut program,
        TypeDenoter::Void,
        None,
        Vec::new(),
        vec![expr_stmt(intrinsic_call(
            "mul",
            Intrinsic::Mul,
            vec![lit_f(1.0)],
        ))],
    );

    let input = ShaderInput {
        target: ShaderTarget::Compute,
        entry_point: "main",
    };
    let output_desc = ShaderOutput::new(GlslVersion::Glsl430);
    let mut reporter = Reporter::new();

    let result = generate_glsl(&mut program, &input, &output_desc, &mut reporter);
    assert_eq!(
        result.unwrap_err(),
        GenerateError::InvalidIntrinsicArgs("mul")
    );
}

#[test]
fn check_unmappable_intrinsic_is_reported() {
    let mut program = Program::new();
    let (t_decl, t) = local_decl(&mut program, "t", float_ty(), Some(lit_f(2.0)));
    add_entry(
        &mut program,
        TypeDenoter::Void,
        None,
        Vec::new(),
        vec![
            t_decl,
            expr_stmt(intrinsic_call(
                "log10",
                Intrinsic::Log10,
                vec![var_access("t", t)],
            )),
        ],
    );

    let (_, reporter) = generate(&mut program, ShaderTarget::Compute, GlslVersion::Glsl430);
    assert!(reporter.has_errors());
    assert!(reporter
        .diagnostics()
        .iter()
        .any(|d| d.message == "failed to map intrinsic \"log10\" to GLSL keyword"));
}

#[test]
fn check_missing_output_semantic_is_reported() {
    let mut program = Program::new();
    let (p_stmt, _) = param(&mut program, "p", float4_ty(), user_semantic("POSITION"));
    add_entry(&mut program, TypeDenoter::Void, None, vec![p_stmt], Vec::new());

    let (_, reporter) = generate(&mut program, ShaderTarget::Vertex, GlslVersion::Glsl330);
    assert!(reporter.has_errors());
    assert!(reporter
        .diagnostics()
        .iter()
        .any(|d| d.message == "missing output semantic"));
}

#[test]
fn check_missing_parameter_semantic_is_reported() {
    let mut program = Program::new();
    let (p_stmt, p) = plain_param(&mut program, "p", float4_ty());
    add_entry(
        &mut program,
        float4_ty(),
        Some(Semantic::Position),
        vec![p_stmt],
        vec![ret(var_access("p", p))],
    );

    let (_, reporter) = generate(&mut program, ShaderTarget::Vertex, GlslVersion::Glsl330);
    assert!(reporter.has_errors());
    assert!(reporter
        .diagnostics()
        .iter()
        .any(|d| d.message == "missing semantic on entry point parameter \"p\""));
}
