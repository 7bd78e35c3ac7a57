mod shared;
use shared::*;

use hlslcc_ast::*;
use hlslcc_glsl::*;
use hlslcc_text::Reporter;

#[test]
fn check_reserved_identifier_renaming() {
    let mut program = Program::new();
    let g = add_global_var(&mut program, "texture", float_ty(), Vec::new());
    let (t_decl, _) = local_decl(
        &mut program,
        "t",
        float_ty(),
        Some(var_access("texture", g)),
    );
    add_entry(&mut program, TypeDenoter::Void, None, Vec::new(), vec![t_decl]);

    check_generated(
        &mut program,
        ShaderTarget::Compute,
        GlslVersion::Glsl430,
        "// GLSL compute shader \"main\"
// Generated by hlslcc

#version 430

float hc_texture;
void main()
{
    float t = hc_texture;
}

",
    );
}

#[test]
fn check_saturate_normalization() {
    let mut program = Program::new();
    program.used_intrinsics.insert(Intrinsic::Saturate);

    let (t_decl, t) = local_decl(&mut program, "t", float_ty(), Some(lit_f(0.5)));
    add_entry(
        &mut program,
        TypeDenoter::Void,
        None,
        Vec::new(),
        vec![
            t_decl,
            expr_stmt(intrinsic_call(
                "saturate",
                Intrinsic::Saturate,
                vec![var_access("t", t)],
            )),
        ],
    );

    check_generated(
        &mut program,
        ShaderTarget::Compute,
        GlslVersion::Glsl430,
        "// GLSL compute shader \"main\"
// Generated by hlslcc

#version 430

void main()
{
    float t = 0.5;
    clamp(t, 0.0, 1.0);
}

",
    );
}

fn texture_sample_program() -> Program {
    let mut program = Program::new();
    let texture = add_texture(&mut program, TextureKind::Texture2D, "tex", "t0");

    let (uv_stmt, uv) = param(&mut program, "uv", float2_ty(), user_semantic("TEXCOORD"));

    let mut callee = VarIdent::resolved("tex", SymbolRef::Texture(texture, 0));
    callee.next = Some(Box::new(VarIdent::plain("Sample")));
    let sample_call = Expr::synthesized(ExprKind::Call(FunctionCall {
        ident: Some(callee),
        type_ctor: None,
        intrinsic: None,
        args: vec![
            Expr::synthesized(ExprKind::VarAccess {
                ident: VarIdent::plain("samp"),
                assign: None,
            }),
            var_access("uv", uv),
        ],
    }));

    add_entry(
        &mut program,
        float4_ty(),
        Some(Semantic::Target(0)),
        vec![uv_stmt],
        vec![ret(sample_call)],
    );
    program
}

#[test]
fn check_texture_sample_rewrite() {
    check_generated(
        &mut texture_sample_program(),
        ShaderTarget::Fragment,
        GlslVersion::Glsl420,
        "// GLSL fragment shader \"main\"
// Generated by hlslcc

#version 420

layout(origin_upper_left) in vec4 gl_FragCoord;

in vec2 uv;

layout(location = 0) out vec4 hc_SV_Target;

layout(binding = 0) uniform sampler2D tex;

void main()
{
    hc_SV_Target = texture(tex, uv);
}

",
    );
}

#[test]
fn check_texture_statistics() {
    let (generated, _) = generate(
        &mut texture_sample_program(),
        ShaderTarget::Fragment,
        GlslVersion::Glsl420,
    );
    assert_eq!(
        generated.statistics.textures,
        vec![TextureBinding {
            ident: String::from("tex"),
            binding: Some(0),
        }]
    );
}

#[test]
fn check_fragment_input_interface_block() {
    let mut program = Program::new();
    let (vs_out, members) = add_struct(
        &mut program,
        "VSOut",
        vec![
            ("pos", float4_ty(), Some(Semantic::Position)),
            ("uv", float2_ty(), Some(user_semantic("TEXCOORD"))),
        ],
    );
    let pos = members[0];
    let uv = members[1];

    let (inp_stmt, inp) = plain_param(&mut program, "inp", struct_ty("VSOut", vs_out));
    let (q_decl, _) = local_decl(
        &mut program,
        "q",
        float4_ty(),
        Some(member_access(("inp", inp), ("pos", pos))),
    );
    add_entry(
        &mut program,
        float4_ty(),
        Some(Semantic::Target(0)),
        vec![inp_stmt],
        vec![q_decl, ret(member_access(("inp", inp), ("uv", uv)))],
    );

    check_generated(
        &mut program,
        ShaderTarget::Fragment,
        GlslVersion::Glsl330,
        "// GLSL fragment shader \"main\"
// Generated by hlslcc

#version 330

layout(origin_upper_left) in vec4 gl_FragCoord;

layout(location = 0) out vec4 hc_SV_Target;

in VSOut
{
    vec2 uv;
}
inp;

void main()
{
    vec4 pos = gl_FragCoord;

    vec4 q = pos;
    hc_SV_Target = inp.uv;
}

",
    );
}

#[test]
fn check_vertex_input_struct_resolution() {
    let mut program = Program::new();
    let (v_in, members) = add_struct(
        &mut program,
        "VIn",
        vec![
            ("position", float4_ty(), Some(user_semantic("POSITION"))),
            ("normal", float3_ty(), Some(user_semantic("NORMAL"))),
        ],
    );
    let position = members[0];

    let (inp_stmt, inp) = plain_param(&mut program, "inp", struct_ty("VIn", v_in));
    add_entry(
        &mut program,
        float4_ty(),
        Some(Semantic::Position),
        vec![inp_stmt],
        vec![ret(member_access(("inp", inp), ("position", position)))],
    );

    check_generated(
        &mut program,
        ShaderTarget::Vertex,
        GlslVersion::Glsl330,
        "// GLSL vertex shader \"main\"
// Generated by hlslcc

#version 330

in vec4 position;
in vec3 normal;

void main()
{
    gl_Position = position;
}

",
    );
}

#[test]
fn check_struct_output_member_assignments() {
    let mut program = Program::new();
    let (vs_out, _) = add_struct(
        &mut program,
        "VSOut",
        vec![
            ("pos", float4_ty(), Some(Semantic::Position)),
            ("uv", float2_ty(), Some(user_semantic("TEXCOORD"))),
        ],
    );

    let (p_stmt, p) = param(&mut program, "p", float4_ty(), user_semantic("POSITION"));
    let (o_decl, o) = local_decl(&mut program, "o", struct_ty("VSOut", vs_out), None);
    add_entry(
        &mut program,
        struct_ty("VSOut", vs_out),
        None,
        vec![p_stmt],
        vec![
            o_decl,
            expr_stmt(Expr::synthesized(ExprKind::VarAccess {
                ident: {
                    let mut ident = VarIdent::resolved("o", SymbolRef::Variable(o));
                    ident.next = Some(Box::new(VarIdent::plain("pos")));
                    ident
                },
                assign: Some((AssignOp::Assign, Box::new(var_access("p", p)))),
            })),
            ret(var_access("o", o)),
        ],
    );

    let (generated, reporter) = generate(&mut program, ShaderTarget::Vertex, GlslVersion::Glsl330);
    assert!(
        !reporter.has_errors(),
        "unexpected errors: {:?}",
        reporter.diagnostics()
    );

    // The user member becomes an `out` global assigned from the returned
    // struct; the system value goes through its built-in
    assert!(generated.source.contains("out vec2 uv;"));
    assert!(generated.source.contains("uv = o.uv;"));
    assert!(generated.source.contains("gl_Position = o.pos;"));
}

#[test]
fn check_pass_idempotence() {
    let mut program = Program::new();
    let (_, members) = add_cbuffer(&mut program, "Globals", "b2", vec![("wvp", mat4_ty())]);
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

    let mut reporter = Reporter::new();
    mark_control_paths(&mut program);
    convert(&mut program, ShaderTarget::Vertex, "hc_", &mut reporter);
    mark_references_from_entry_point(&mut program);
    let extensions =
        determine_required_extensions(&program, GlslVersion::Glsl420, ShaderTarget::Vertex, true)
            .unwrap();

    let snapshot = program.clone();

    mark_control_paths(&mut program);
    convert(&mut program, ShaderTarget::Vertex, "hc_", &mut reporter);
    mark_references_from_entry_point(&mut program);
    let extensions_again =
        determine_required_extensions(&program, GlslVersion::Glsl420, ShaderTarget::Vertex, true)
            .unwrap();

    assert_eq!(program, snapshot);
    assert_eq!(extensions, extensions_again);
    assert!(!reporter.has_errors());
}
