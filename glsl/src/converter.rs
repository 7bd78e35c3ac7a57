//! AST conversion for GLSL code generation
//!
//! Rewrites the analyzed program into a shape the generator can emit
//! directly: the entry point loses its parameters and return value in favor
//! of stage input/output buckets, identifiers that collide with GLSL
//! keywords are mangled, stage boundary structs are resolved or turned into
//! interface blocks, and intrinsics without a direct GLSL spelling are
//! normalized into ones that have it.

use std::collections::{HashMap, HashSet};

use hlslcc_ast as ast;
use hlslcc_ast::{
    Expr, ExprKind, FunctionCall, FunctionId, Intrinsic, Literal, SemanticBuckets, ShaderTarget,
    Stmt, StmtKind, StorageClass, SymbolRef, TypeDenoter, VarDecl, VarId,
};
use hlslcc_text::{Reporter, SourcePosition};

use crate::keywords::{is_reserved_glsl_name, semantic_to_glsl_keyword};

/// Convert the program for emission as GLSL targeting the given stage
///
/// `prefix` is the name-mangling prefix for identifiers the converter
/// introduces or renames. Converting an already-converted program is a
/// no-op.
pub fn convert(
    program: &mut ast::Program,
    target: ShaderTarget,
    prefix: &str,
    reporter: &mut Reporter,
) {
    let Some(entry_id) = program.entry_point else {
        return;
    };
    if program.function(entry_id).is_entry_point {
        return;
    }

    log::debug!("converting program for {}", target);

    rename_reserved_idents(program, prefix);
    strip_static_storage(program);
    normalize_intrinsics(program);
    convert_entry_point(program, entry_id, target, prefix, reporter);
}

/// Prepend the mangling prefix to identifiers that collide with GLSL names
///
/// Uses follow automatically through symbol back-references; the generator
/// always resolves the current declaration identifier.
fn rename_reserved_idents(program: &mut ast::Program, prefix: &str) {
    for variable in &mut program.variables {
        if is_reserved_glsl_name(&variable.ident) {
            variable.ident = format!("{}{}", prefix, variable.ident);
        }
    }
    for function in &mut program.functions {
        if is_reserved_glsl_name(&function.ident) {
            function.ident = format!("{}{}", prefix, function.ident);
        }
    }
    for structure in &mut program.structs {
        if is_reserved_glsl_name(&structure.ident) {
            structure.ident = format!("{}{}", prefix, structure.ident);
        }
    }
    for buffer in &mut program.uniform_buffers {
        if is_reserved_glsl_name(&buffer.ident) {
            buffer.ident = format!("{}{}", prefix, buffer.ident);
        }
    }
    for stmt in &mut program.texture_decls {
        for decl in &mut stmt.decls {
            if is_reserved_glsl_name(&decl.ident) {
                decl.ident = format!("{}{}", prefix, decl.ident);
            }
        }
    }
}

/// Remove `static` storage classes; GLSL globals are module-private already
fn strip_static_storage(program: &mut ast::Program) {
    let strip = |stmt: &mut ast::VarDeclStmt| {
        stmt.storage_classes
            .retain(|sc| *sc != StorageClass::Static);
    };

    for decl in &mut program.global_decls {
        if let ast::GlobalDecl::Variable(stmt) = decl {
            strip(stmt);
        }
    }
    for function in &mut program.functions {
        if let Some(body) = &mut function.body {
            for stmt in body.iter_mut() {
                visit_var_decl_stmts(stmt, &strip);
            }
        }
    }
}

fn visit_var_decl_stmts(stmt: &mut Stmt, apply: &impl Fn(&mut ast::VarDeclStmt)) {
    match &mut stmt.kind {
        StmtKind::VarDecl(decl) => apply(decl),
        StmtKind::Block(stmts) => {
            for stmt in stmts {
                visit_var_decl_stmts(stmt, apply);
            }
        }
        StmtKind::If {
            body, else_branch, ..
        } => {
            visit_var_decl_stmts(body, apply);
            if let Some(else_branch) = else_branch {
                visit_var_decl_stmts(else_branch, apply);
            }
        }
        StmtKind::For { init, body, .. } => {
            visit_var_decl_stmts(init, apply);
            visit_var_decl_stmts(body, apply);
        }
        StmtKind::While { body, .. } | StmtKind::DoWhile { body, .. } => {
            visit_var_decl_stmts(body, apply)
        }
        StmtKind::Switch { cases, .. } => {
            for case in cases {
                for stmt in &mut case.stmts {
                    visit_var_decl_stmts(stmt, apply);
                }
            }
        }
        _ => {}
    }
}

/// Rewrite intrinsic calls without a direct GLSL spelling
///
/// `saturate(x)` becomes `clamp(x, 0.0, 1.0)`; method-style texture calls
/// `t.Sample(s, uv)` / `t.SampleLevel(s, uv, lod)` become the intrinsic
/// calls `texture(t, uv)` / `textureLod(t, uv, lod)` with the sampler-state
/// argument dropped.
fn normalize_intrinsics(program: &mut ast::Program) {
    let mut functions = std::mem::take(&mut program.functions);
    for function in &mut functions {
        if let Some(body) = &mut function.body {
            for stmt in body.iter_mut() {
                visit_stmt_exprs(stmt, &mut |expr| normalize_call(expr, program));
            }
        }
    }
    program.functions = functions;

    let mut variables = std::mem::take(&mut program.variables);
    for variable in &mut variables {
        if let Some(init) = &mut variable.initializer {
            visit_expr_tree(init, &mut |expr| normalize_call(expr, program));
        }
    }
    program.variables = variables;
}

fn normalize_call(expr: &mut Expr, program: &mut ast::Program) {
    let ExprKind::Call(call) = &mut expr.kind else {
        return;
    };

    match call.intrinsic {
        Some(Intrinsic::Saturate) => {
            call.intrinsic = Some(Intrinsic::Clamp);
            call.args
                .push(Expr::synthesized(ExprKind::Literal(Literal::Float(0.0))));
            call.args
                .push(Expr::synthesized(ExprKind::Literal(Literal::Float(1.0))));
            program.used_intrinsics.remove(&Intrinsic::Saturate);
            program.used_intrinsics.insert(Intrinsic::Clamp);
        }
        _ => {
            let Some(ident) = &call.ident else {
                return;
            };
            let Some(method) = &ident.next else {
                return;
            };
            if !matches!(ident.symbol, Some(SymbolRef::Texture(..))) || method.next.is_some() {
                return;
            }

            let intrinsic = match method.ident.as_str() {
                "Sample" => Intrinsic::Texture,
                "SampleLevel" => Intrinsic::TextureLod,
                _ => return,
            };

            let mut texture_node = ident.clone();
            texture_node.next = None;
            let texture_arg = Expr::new(
                ExprKind::VarAccess {
                    ident: texture_node,
                    assign: None,
                },
                expr.pos,
            );

            // Drop the HLSL sampler-state argument; GLSL samplers carry
            // their own state
            if !call.args.is_empty() {
                call.args.remove(0);
            }
            call.args.insert(0, texture_arg);
            call.intrinsic = Some(intrinsic);
            call.ident = None;
            program.used_intrinsics.insert(intrinsic);
        }
    }
}

/// How references to a rewritten entry point parameter are adjusted
struct ParamRewrite {
    /// Drop the leading chain node for every member access (resolved struct)
    drop_first_always: bool,
    /// Members that became system-value locals; accesses drop the leading
    /// node even when the struct stayed an interface block
    sv_members: HashSet<VarId>,
}

fn convert_entry_point(
    program: &mut ast::Program,
    entry_id: FunctionId,
    target: ShaderTarget,
    prefix: &str,
    reporter: &mut Reporter,
) {
    let mut input = SemanticBuckets::default();
    let mut rewrites: HashMap<VarId, ParamRewrite> = HashMap::new();

    // Lift parameters into the stage input buckets
    let params = std::mem::take(&mut program.function_mut(entry_id).params);
    for param in &params {
        if param.vars.len() != 1 {
            reporter.error(
                "invalid number of variables in entry point parameter",
                Some(param.pos),
            );
            continue;
        }
        let var_id = param.vars[0];

        if let Some(struct_id) = param.var_type.struct_ref() {
            convert_input_struct(
                program, struct_id, var_id, target, &mut input, &mut rewrites, reporter,
            );
        } else {
            let variable = program.variable(var_id);
            match &variable.semantic {
                Some(semantic) if semantic_to_glsl_keyword(semantic, target).is_some() => {
                    input.var_decl_refs_sv.push(var_id);
                }
                Some(_) => input.var_decl_refs.push(var_id),
                None => reporter.error(
                    format!(
                        "missing semantic on entry point parameter \"{}\"",
                        variable.ident
                    ),
                    Some(variable.pos),
                ),
            }
        }
    }

    // Lift the return value into the stage output buckets
    let mut output = SemanticBuckets::default();
    let return_type = program.function(entry_id).return_type.clone();
    let return_semantic = program.function(entry_id).return_semantic.clone();
    let return_pos = program.function(entry_id).pos;
    let mut output_struct = None;

    if let Some(struct_id) = return_type.struct_ref() {
        output_struct = Some(struct_id);
        for var_id in struct_member_vars(program, struct_id) {
            let variable = program.variable(var_id);
            match &variable.semantic {
                Some(semantic) if semantic_to_glsl_keyword(semantic, target).is_some() => {
                    output.var_decl_refs_sv.push(var_id);
                }
                Some(_) => output.var_decl_refs.push(var_id),
                None => reporter.error(
                    format!(
                        "missing semantic on entry point output \"{}\"",
                        variable.ident
                    ),
                    Some(variable.pos),
                ),
            }
        }
    } else if !return_type.is_void() {
        match return_semantic {
            Some(semantic) if semantic_to_glsl_keyword(&semantic, target).is_some() => {
                // Assigned straight into the built-in at each return
            }
            Some(semantic) => {
                // No built-in exists; synthesize an out variable that
                // carries the semantic, e.g. fragment color targets
                let ident = format!("{}{}", prefix, semantic.name());
                let mut variable =
                    VarDecl::new(ident, return_type.clone(), SourcePosition::UNKNOWN);
                variable.semantic = Some(semantic);
                let var_id = program.add_variable(variable);
                output.var_decl_refs.push(var_id);
            }
            None => reporter.error(
                "missing semantic on entry point return value",
                Some(return_pos),
            ),
        }
    }

    // The entry point itself becomes `void main()`
    let function = program.function_mut(entry_id);
    function.is_entry_point = true;
    function.return_type = TypeDenoter::Void;
    function.input_semantics = input;
    function.output_semantics = output;
    function.output_struct = output_struct;

    // Adjust member accesses through rewritten struct parameters; local
    // variable initializers live in the arena and are rewritten there
    let mut body = program.function_mut(entry_id).body.take();
    if let Some(stmts) = &mut body {
        for stmt in stmts.iter_mut() {
            visit_stmt_exprs(stmt, &mut |expr| rewrite_param_access(expr, &rewrites));
        }
    }
    program.function_mut(entry_id).body = body;

    for variable in &mut program.variables {
        if let Some(init) = &mut variable.initializer {
            visit_expr_tree(init, &mut |expr| rewrite_param_access(expr, &rewrites));
        }
    }
}

/// Handle a struct-typed entry point parameter
fn convert_input_struct(
    program: &mut ast::Program,
    struct_id: ast::StructId,
    param_var: VarId,
    target: ShaderTarget,
    input: &mut SemanticBuckets,
    rewrites: &mut HashMap<VarId, ParamRewrite>,
    reporter: &mut Reporter,
) {
    // Vertex inputs have no previous stage to interface with, so the struct
    // is flattened into plain `in` globals; other stages keep it as an
    // interface block whose instance name is the parameter identifier
    let must_resolve = target == ShaderTarget::Vertex;
    let alias_name = program.variable(param_var).ident.clone();

    {
        let structure = program.structure_mut(struct_id);
        structure.is_shader_input = true;
        structure.must_resolve = must_resolve;
        if !must_resolve {
            structure.alias_name = alias_name;
        }
    }

    let mut sv_members = HashSet::new();
    for var_id in struct_member_vars(program, struct_id) {
        let variable = program.variable(var_id);
        match &variable.semantic {
            Some(semantic) if semantic_to_glsl_keyword(semantic, target).is_some() => {
                input.var_decl_refs_sv.push(var_id);
                sv_members.insert(var_id);
            }
            Some(_) => {
                if must_resolve {
                    input.var_decl_refs.push(var_id);
                }
            }
            None => {
                if must_resolve {
                    reporter.error(
                        format!("missing semantic on shader input \"{}\"", variable.ident),
                        Some(variable.pos),
                    );
                }
            }
        }
    }

    program.variable_mut(param_var).disable_code_gen = true;
    rewrites.insert(
        param_var,
        ParamRewrite {
            drop_first_always: must_resolve,
            sv_members,
        },
    );
}

fn struct_member_vars(program: &ast::Program, struct_id: ast::StructId) -> Vec<VarId> {
    program
        .structure(struct_id)
        .members
        .iter()
        .flat_map(|member| member.vars.iter().copied())
        .collect()
}

/// Drop the leading chain node of accesses through rewritten parameters
fn rewrite_param_access(expr: &mut Expr, rewrites: &HashMap<VarId, ParamRewrite>) {
    let ExprKind::VarAccess { ident, .. } = &mut expr.kind else {
        return;
    };
    let Some(SymbolRef::Variable(var_id)) = ident.symbol else {
        return;
    };
    let Some(rewrite) = rewrites.get(&var_id) else {
        return;
    };
    let Some(next) = &ident.next else {
        return;
    };

    let member_is_sv = match next.symbol {
        Some(SymbolRef::Variable(member)) => rewrite.sv_members.contains(&member),
        _ => false,
    };
    if rewrite.drop_first_always || member_is_sv {
        if let Some(next) = ident.next.take() {
            *ident = *next;
        }
    }
}

/// Apply `apply` to every expression in a statement tree, innermost first
fn visit_stmt_exprs(stmt: &mut Stmt, apply: &mut impl FnMut(&mut Expr)) {
    match &mut stmt.kind {
        StmtKind::Null | StmtKind::CtrlTransfer(_) => {}
        StmtKind::Block(stmts) => {
            for stmt in stmts {
                visit_stmt_exprs(stmt, apply);
            }
        }
        StmtKind::VarDecl(_) => {}
        StmtKind::Expr(expr) => visit_expr_tree(expr, apply),
        StmtKind::If {
            condition,
            body,
            else_branch,
        } => {
            visit_expr_tree(condition, apply);
            visit_stmt_exprs(body, apply);
            if let Some(else_branch) = else_branch {
                visit_stmt_exprs(else_branch, apply);
            }
        }
        StmtKind::For {
            init,
            condition,
            iteration,
            body,
        } => {
            visit_stmt_exprs(init, apply);
            if let Some(condition) = condition {
                visit_expr_tree(condition, apply);
            }
            if let Some(iteration) = iteration {
                visit_expr_tree(iteration, apply);
            }
            visit_stmt_exprs(body, apply);
        }
        StmtKind::While { condition, body } => {
            visit_expr_tree(condition, apply);
            visit_stmt_exprs(body, apply);
        }
        StmtKind::DoWhile { body, condition } => {
            visit_stmt_exprs(body, apply);
            visit_expr_tree(condition, apply);
        }
        StmtKind::Switch { selector, cases } => {
            visit_expr_tree(selector, apply);
            for case in cases {
                if let Some(value) = &mut case.value {
                    visit_expr_tree(value, apply);
                }
                for stmt in &mut case.stmts {
                    visit_stmt_exprs(stmt, apply);
                }
            }
        }
        StmtKind::Return { expr, .. } => {
            if let Some(expr) = expr {
                visit_expr_tree(expr, apply);
            }
        }
    }
}

fn visit_expr_tree(expr: &mut Expr, apply: &mut impl FnMut(&mut Expr)) {
    match &mut expr.kind {
        ExprKind::Literal(_) | ExprKind::TypeName(_) => {}
        ExprKind::Ternary {
            condition,
            then_expr,
            else_expr,
        } => {
            visit_expr_tree(condition, apply);
            visit_expr_tree(then_expr, apply);
            visit_expr_tree(else_expr, apply);
        }
        ExprKind::Binary { lhs, rhs, .. } => {
            visit_expr_tree(lhs, apply);
            visit_expr_tree(rhs, apply);
        }
        ExprKind::Unary { expr, .. } | ExprKind::PostUnary { expr, .. } => {
            visit_expr_tree(expr, apply)
        }
        ExprKind::Call(FunctionCall { args, .. }) => {
            for arg in args {
                visit_expr_tree(arg, apply);
            }
        }
        ExprKind::Bracket(inner) => visit_expr_tree(inner, apply),
        ExprKind::Suffix { expr, .. } => visit_expr_tree(expr, apply),
        ExprKind::ArrayAccess { expr, indices } => {
            visit_expr_tree(expr, apply);
            for index in indices {
                visit_expr_tree(index, apply);
            }
        }
        ExprKind::Cast { expr, .. } => visit_expr_tree(expr, apply),
        ExprKind::VarAccess { assign, .. } => {
            if let Some((_, expr)) = assign {
                visit_expr_tree(expr, apply);
            }
        }
        ExprKind::InitializerList(exprs) => {
            for expr in exprs {
                visit_expr_tree(expr, apply);
            }
        }
        ExprKind::List { first, next } => {
            visit_expr_tree(first, apply);
            visit_expr_tree(next, apply);
        }
    }
    apply(expr);
}
