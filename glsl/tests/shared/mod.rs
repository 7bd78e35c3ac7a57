//! Helpers for building analyzed programs and checking the generated GLSL
//!
//! The front end is out of scope for this crate, so these builders stand in
//! for it: they construct the same annotated AST shape semantic analysis
//! would produce.

use hlslcc_ast::*;
use hlslcc_glsl::*;
use hlslcc_text::{Reporter, SourcePosition};

/* --- Types --- */

pub fn float_ty() -> TypeDenoter {
    TypeDenoter::Base(DataType::Scalar(ScalarType::Float))
}

pub fn double_ty() -> TypeDenoter {
    TypeDenoter::Base(DataType::Scalar(ScalarType::Double))
}

pub fn int_ty() -> TypeDenoter {
    TypeDenoter::Base(DataType::Scalar(ScalarType::Int))
}

pub fn uint_ty() -> TypeDenoter {
    TypeDenoter::Base(DataType::Scalar(ScalarType::UInt))
}

pub fn bool_ty() -> TypeDenoter {
    TypeDenoter::Base(DataType::Scalar(ScalarType::Bool))
}

pub fn float2_ty() -> TypeDenoter {
    TypeDenoter::Base(DataType::Vector(ScalarType::Float, 2))
}

pub fn float3_ty() -> TypeDenoter {
    TypeDenoter::Base(DataType::Vector(ScalarType::Float, 3))
}

pub fn float4_ty() -> TypeDenoter {
    TypeDenoter::Base(DataType::Vector(ScalarType::Float, 4))
}

pub fn mat4_ty() -> TypeDenoter {
    TypeDenoter::Base(DataType::Matrix(ScalarType::Float, 4, 4))
}

pub fn user_semantic(name: &str) -> Semantic {
    Semantic::User {
        name: String::from(name),
        index: 0,
    }
}

/* --- Expressions --- */

pub fn lit_f(value: f32) -> Expr {
    Expr::synthesized(ExprKind::Literal(Literal::Float(value)))
}

pub fn lit_i(value: i64) -> Expr {
    Expr::synthesized(ExprKind::Literal(Literal::Int(value)))
}

pub fn lit_u(value: u64) -> Expr {
    Expr::synthesized(ExprKind::Literal(Literal::UInt(value)))
}

pub fn lit_b(value: bool) -> Expr {
    Expr::synthesized(ExprKind::Literal(Literal::Bool(value)))
}

pub fn var_access(name: &str, id: VarId) -> Expr {
    Expr::synthesized(ExprKind::VarAccess {
        ident: VarIdent::resolved(name, SymbolRef::Variable(id)),
        assign: None,
    })
}

/// Member access `outer.member` with both chain nodes resolved
pub fn member_access(outer: (&str, VarId), member: (&str, VarId)) -> Expr {
    let mut ident = VarIdent::resolved(outer.0, SymbolRef::Variable(outer.1));
    ident.next = Some(Box::new(VarIdent::resolved(
        member.0,
        SymbolRef::Variable(member.1),
    )));
    Expr::synthesized(ExprKind::VarAccess {
        ident,
        assign: None,
    })
}

/// Swizzle access `name.swizzle` where the swizzle has no symbol
pub fn swizzle_access(name: &str, id: VarId, swizzle: &str) -> Expr {
    let mut ident = VarIdent::resolved(name, SymbolRef::Variable(id));
    ident.next = Some(Box::new(VarIdent::plain(swizzle)));
    Expr::synthesized(ExprKind::VarAccess {
        ident,
        assign: None,
    })
}

pub fn assign(name: &str, id: VarId, value: Expr) -> Expr {
    Expr::synthesized(ExprKind::VarAccess {
        ident: VarIdent::resolved(name, SymbolRef::Variable(id)),
        assign: Some((AssignOp::Assign, Box::new(value))),
    })
}

pub fn binary(op: BinOp, lhs: Expr, rhs: Expr) -> Expr {
    Expr::synthesized(ExprKind::Binary {
        op,
        lhs: Box::new(lhs),
        rhs: Box::new(rhs),
    })
}

pub fn unary(op: UnaryOp, expr: Expr) -> Expr {
    Expr::synthesized(ExprKind::Unary {
        op,
        expr: Box::new(expr),
    })
}

pub fn intrinsic_call(name: &str, intrinsic: Intrinsic, args: Vec<Expr>) -> Expr {
    Expr::synthesized(ExprKind::Call(FunctionCall {
        ident: Some(VarIdent::plain(name)),
        type_ctor: None,
        intrinsic: Some(intrinsic),
        args,
    }))
}

pub fn function_call(name: &str, id: FunctionId, args: Vec<Expr>) -> Expr {
    Expr::synthesized(ExprKind::Call(FunctionCall {
        ident: Some(VarIdent::resolved(name, SymbolRef::Function(id))),
        type_ctor: None,
        intrinsic: None,
        args,
    }))
}

/// Scalar-with-swizzle suffix expression, e.g. `1.0.xxxx`
pub fn suffix(expr: Expr, chain: &[&str]) -> Expr {
    let mut ident: Option<VarIdent> = None;
    for part in chain.iter().rev() {
        let mut node = VarIdent::plain(*part);
        node.next = ident.map(Box::new);
        ident = Some(node);
    }
    Expr::synthesized(ExprKind::Suffix {
        expr: Box::new(expr),
        ident: ident.expect("suffix chain must not be empty"),
    })
}

/* --- Statements --- */

pub fn expr_stmt(expr: Expr) -> Stmt {
    Stmt::synthesized(StmtKind::Expr(expr))
}

pub fn ret(expr: Expr) -> Stmt {
    Stmt::synthesized(StmtKind::Return {
        expr: Some(expr),
        is_end_of_function: false,
    })
}

pub fn ret_void() -> Stmt {
    Stmt::synthesized(StmtKind::Return {
        expr: None,
        is_end_of_function: false,
    })
}

pub fn block(stmts: Vec<Stmt>) -> Stmt {
    Stmt::synthesized(StmtKind::Block(stmts))
}

/// Local variable declaration statement with a single declarator
pub fn local_decl(
    program: &mut Program,
    name: &str,
    ty: TypeDenoter,
    init: Option<Expr>,
) -> (Stmt, VarId) {
    let mut variable = VarDecl::new(name, ty.clone(), SourcePosition::UNKNOWN);
    variable.initializer = init;
    let id = program.add_variable(variable);

    let mut stmt = VarDeclStmt::new(ty, SourcePosition::UNKNOWN);
    stmt.vars.push(id);
    (Stmt::synthesized(StmtKind::VarDecl(stmt)), id)
}

/* --- Declarations --- */

/// Entry point parameter with a semantic
pub fn param(
    program: &mut Program,
    name: &str,
    ty: TypeDenoter,
    semantic: Semantic,
) -> (VarDeclStmt, VarId) {
    let mut variable = VarDecl::new(name, ty.clone(), SourcePosition::UNKNOWN);
    variable.semantic = Some(semantic);
    let id = program.add_variable(variable);

    let mut stmt = VarDeclStmt::new(ty, SourcePosition::UNKNOWN);
    stmt.vars.push(id);
    (stmt, id)
}

/// Parameter of a helper function, without a semantic
pub fn plain_param(program: &mut Program, name: &str, ty: TypeDenoter) -> (VarDeclStmt, VarId) {
    let variable = VarDecl::new(name, ty.clone(), SourcePosition::UNKNOWN);
    let id = program.add_variable(variable);

    let mut stmt = VarDeclStmt::new(ty, SourcePosition::UNKNOWN);
    stmt.vars.push(id);
    (stmt, id)
}

/// Register the entry point and append it to the global declarations
pub fn add_entry(
    program: &mut Program,
    return_type: TypeDenoter,
    return_semantic: Option<Semantic>,
    params: Vec<VarDeclStmt>,
    body: Vec<Stmt>,
) -> FunctionId {
    let mut function = FunctionDecl::new("main", return_type, SourcePosition::UNKNOWN);
    function.return_semantic = return_semantic;
    function.params = params;
    function.body = Some(body);
    let id = program.add_function(function);
    program.global_decls.push(GlobalDecl::Function(id));
    program.entry_point = Some(id);
    id
}

/// Register a helper function and append it to the global declarations
pub fn add_function(
    program: &mut Program,
    name: &str,
    return_type: TypeDenoter,
    params: Vec<VarDeclStmt>,
    body: Vec<Stmt>,
) -> FunctionId {
    let mut function = FunctionDecl::new(name, return_type, SourcePosition::UNKNOWN);
    function.params = params;
    function.body = Some(body);
    let id = program.add_function(function);
    program.global_decls.push(GlobalDecl::Function(id));
    id
}

/// Register a module-scope variable and append it to the global declarations
pub fn add_global_var(
    program: &mut Program,
    name: &str,
    ty: TypeDenoter,
    storage_classes: Vec<StorageClass>,
) -> VarId {
    let variable = VarDecl::new(name, ty.clone(), SourcePosition::UNKNOWN);
    let id = program.add_variable(variable);

    let mut stmt = VarDeclStmt::new(ty, SourcePosition::UNKNOWN);
    stmt.storage_classes = storage_classes;
    stmt.vars.push(id);
    program.global_decls.push(GlobalDecl::Variable(stmt));
    id
}

/// Register a cbuffer and append it to the global declarations
pub fn add_cbuffer(
    program: &mut Program,
    name: &str,
    register: &str,
    members: Vec<(&str, TypeDenoter)>,
) -> (BufferId, Vec<VarId>) {
    let mut member_stmts = Vec::new();
    let mut member_vars = Vec::new();
    for (member_name, ty) in members {
        let variable = VarDecl::new(member_name, ty.clone(), SourcePosition::UNKNOWN);
        let var_id = program.add_variable(variable);
        let mut stmt = VarDeclStmt::new(ty, SourcePosition::UNKNOWN);
        stmt.vars.push(var_id);
        member_stmts.push(stmt);
        member_vars.push(var_id);
    }

    let buffer = UniformBufferDecl {
        ident: String::from(name),
        members: member_stmts,
        slot_registers: vec![Register::new(register)],
        pos: SourcePosition::UNKNOWN,
        reachable: false,
    };
    let id = program.add_uniform_buffer(buffer);
    for &var_id in &member_vars {
        program.variable_mut(var_id).buffer_ref = Some(id);
    }
    program.global_decls.push(GlobalDecl::UniformBuffer(id));
    (id, member_vars)
}

/// Register a texture declaration and append it to the global declarations
pub fn add_texture(
    program: &mut Program,
    kind: TextureKind,
    name: &str,
    register: &str,
) -> TextureId {
    let stmt = TextureDeclStmt {
        texture_kind: kind,
        decls: vec![TextureDecl {
            ident: String::from(name),
            slot_registers: vec![Register::new(register)],
            pos: SourcePosition::UNKNOWN,
            reachable: false,
        }],
        pos: SourcePosition::UNKNOWN,
        reachable: false,
    };
    let id = program.add_texture_decl(stmt);
    program.global_decls.push(GlobalDecl::Texture(id));
    id
}

/// Register a struct with semantic-carrying members
pub fn add_struct(
    program: &mut Program,
    name: &str,
    members: Vec<(&str, TypeDenoter, Option<Semantic>)>,
) -> (StructId, Vec<VarId>) {
    let mut member_stmts = Vec::new();
    let mut member_vars = Vec::new();
    for (member_name, ty, semantic) in members {
        let mut variable = VarDecl::new(member_name, ty.clone(), SourcePosition::UNKNOWN);
        variable.semantic = semantic;
        let var_id = program.add_variable(variable);
        let mut stmt = VarDeclStmt::new(ty, SourcePosition::UNKNOWN);
        stmt.vars.push(var_id);
        member_stmts.push(stmt);
        member_vars.push(var_id);
    }

    let mut structure = StructDecl::new(name, SourcePosition::UNKNOWN);
    structure.members = member_stmts;
    let id = program.add_struct(structure);
    program.global_decls.push(GlobalDecl::Struct(id));
    (id, member_vars)
}

pub fn struct_ty(name: &str, id: StructId) -> TypeDenoter {
    TypeDenoter::Struct {
        ident: String::from(name),
        struct_ref: Some(id),
    }
}

/* --- Checks --- */

/// Generate and panic on a fatal error; reporter contents are returned so
/// tests can assert on warnings
#[track_caller]
pub fn generate(
    program: &mut Program,
    target: ShaderTarget,
    version: GlslVersion,
) -> (GeneratedGlsl, Reporter) {
    let input = ShaderInput {
        target,
        entry_point: "main",
    };
    let output_desc = ShaderOutput::new(version);
    let mut reporter = Reporter::new();
    match generate_glsl(program, &input, &output_desc, &mut reporter) {
        Ok(generated) => (generated, reporter),
        Err(err) => panic!("{}", err),
    }
}

#[track_caller]
pub fn check_generated_with(
    program: &mut Program,
    input: &ShaderInput,
    output_desc: &ShaderOutput,
    expected: &str,
) {
    let mut reporter = Reporter::new();
    match generate_glsl(program, input, output_desc, &mut reporter) {
        Ok(generated) => {
            let output_lines = generated.source.lines();
            let expected_lines = expected.lines();
            for (output_line, expected_line) in output_lines.zip(expected_lines) {
                assert_eq!(output_line, expected_line);
            }
            assert_eq!(generated.source, expected);
            assert!(
                !reporter.has_errors(),
                "unexpected errors: {:?}",
                reporter.diagnostics()
            );
        }
        Err(err) => panic!("{}", err),
    }
}

#[track_caller]
pub fn check_generated(
    program: &mut Program,
    target: ShaderTarget,
    version: GlslVersion,
    expected: &str,
) {
    let input = ShaderInput {
        target,
        entry_point: "main",
    };
    let output_desc = ShaderOutput::new(version);
    check_generated_with(program, &input, &output_desc, expected);
}
