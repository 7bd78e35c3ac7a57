//! Reachability analysis
//!
//! Fixed-point traversal from the entry point that sets the `reachable`
//! flag on every transitively referenced declaration. Unreachable
//! declarations are suppressed at emission time.

use hlslcc_ast as ast;
use hlslcc_ast::{
    Expr, ExprKind, FunctionCall, FunctionId, Stmt, StmtKind, SwitchCase, SymbolRef, TypeDenoter,
    VarDeclStmt, VarId, VarIdent,
};

/// Work items for the fixed-point traversal
#[derive(Copy, Clone)]
enum Work {
    Function(ast::FunctionId),
    Struct(ast::StructId),
    Buffer(ast::BufferId),
    Texture(ast::TextureId, usize),
    Variable(ast::VarId),
}

/// Mark every declaration reachable from the entry point
///
/// Flags are cleared first, so re-running the pass on an already-marked
/// program reproduces the same result.
pub fn mark_references_from_entry_point(program: &mut ast::Program) {
    clear_marks(program);

    let Some(entry) = program.entry_point else {
        return;
    };

    let mut worklist = vec![Work::Function(entry)];

    // Stage boundary structs are part of the shader interface even after
    // conversion removed the parameter or return value that named them
    for (i, structure) in program.structs.iter().enumerate() {
        if structure.is_shader_input || structure.is_shader_output {
            worklist.push(Work::Struct(ast::StructId(i as u32)));
        }
    }
    while let Some(work) = worklist.pop() {
        match work {
            Work::Function(id) => visit_function(program, id, &mut worklist),
            Work::Struct(id) => visit_struct(program, id, &mut worklist),
            Work::Buffer(id) => visit_buffer(program, id, &mut worklist),
            Work::Texture(id, index) => visit_texture(program, id, index),
            Work::Variable(id) => visit_variable(program, id, &mut worklist),
        }
    }

    log::debug!(
        "reachability: {} of {} functions reachable",
        program.functions.iter().filter(|f| f.reachable).count(),
        program.functions.len()
    );
}

fn clear_marks(program: &mut ast::Program) {
    for function in &mut program.functions {
        function.reachable = false;
    }
    for structure in &mut program.structs {
        structure.reachable = false;
    }
    for buffer in &mut program.uniform_buffers {
        buffer.reachable = false;
    }
    for stmt in &mut program.texture_decls {
        stmt.reachable = false;
        for decl in &mut stmt.decls {
            decl.reachable = false;
        }
    }
    for variable in &mut program.variables {
        variable.reachable = false;
    }
}

fn visit_function(program: &mut ast::Program, id: FunctionId, worklist: &mut Vec<Work>) {
    if program.function(id).reachable {
        return;
    }
    program.function_mut(id).reachable = true;

    let function = program.function(id).clone();

    visit_type(&function.return_type, worklist);
    for param in &function.params {
        visit_var_decl_stmt(param, worklist);
    }
    for &var in function
        .input_semantics
        .var_decl_refs
        .iter()
        .chain(&function.input_semantics.var_decl_refs_sv)
        .chain(&function.output_semantics.var_decl_refs)
        .chain(&function.output_semantics.var_decl_refs_sv)
    {
        worklist.push(Work::Variable(var));
    }
    if let Some(body) = &function.body {
        visit_stmts(body, worklist);
    }
}

fn visit_struct(program: &mut ast::Program, id: ast::StructId, worklist: &mut Vec<Work>) {
    if program.structure(id).reachable {
        return;
    }
    program.structure_mut(id).reachable = true;

    let structure = program.structure(id).clone();
    if let Some(base) = structure.base_struct {
        worklist.push(Work::Struct(base));
    }
    for &nested in &structure.nested_structs {
        worklist.push(Work::Struct(nested));
    }
    for member in &structure.members {
        visit_var_decl_stmt(member, worklist);
        // Member layout is part of the type, so all members stay live
        for &var in &member.vars {
            worklist.push(Work::Variable(var));
        }
    }
}

fn visit_buffer(program: &mut ast::Program, id: ast::BufferId, worklist: &mut Vec<Work>) {
    if program.uniform_buffer(id).reachable {
        return;
    }
    program.uniform_buffer_mut(id).reachable = true;

    // A referenced buffer keeps every member so the std140 layout is stable
    let buffer = program.uniform_buffer(id).clone();
    for member in &buffer.members {
        visit_var_decl_stmt(member, worklist);
        for &var in &member.vars {
            worklist.push(Work::Variable(var));
        }
    }
}

fn visit_texture(program: &mut ast::Program, id: ast::TextureId, index: usize) {
    let stmt = program.texture_decl_mut(id);
    stmt.reachable = true;
    if let Some(decl) = stmt.decls.get_mut(index) {
        decl.reachable = true;
    }
}

fn visit_variable(program: &mut ast::Program, id: VarId, worklist: &mut Vec<Work>) {
    if program.variable(id).reachable {
        return;
    }
    program.variable_mut(id).reachable = true;

    let variable = program.variable(id).clone();
    visit_type(&variable.ty, worklist);
    for dim in &variable.array_dims {
        visit_expr(dim, worklist);
    }
    if let Some(init) = &variable.initializer {
        visit_expr(init, worklist);
    }
    if let Some(buffer) = variable.buffer_ref {
        worklist.push(Work::Buffer(buffer));
    }
}

fn visit_type(ty: &TypeDenoter, worklist: &mut Vec<Work>) {
    match ty {
        TypeDenoter::Void | TypeDenoter::Base(_) => {}
        TypeDenoter::Array { base, dims } => {
            visit_type(base, worklist);
            for dim in dims {
                visit_expr(dim, worklist);
            }
        }
        TypeDenoter::Struct { struct_ref, .. } => {
            if let Some(id) = struct_ref {
                worklist.push(Work::Struct(*id));
            }
        }
        TypeDenoter::Texture { texture_ref, .. } => {
            if let Some(id) = texture_ref {
                worklist.push(Work::Texture(*id, usize::MAX));
            }
        }
        TypeDenoter::Alias { target, .. } => visit_type(target, worklist),
    }
}

fn visit_var_decl_stmt(stmt: &VarDeclStmt, worklist: &mut Vec<Work>) {
    visit_type(&stmt.var_type, worklist);
    if let Some(id) = stmt.struct_decl {
        worklist.push(Work::Struct(id));
    }
}

fn visit_stmts(stmts: &[Stmt], worklist: &mut Vec<Work>) {
    for stmt in stmts {
        visit_stmt(stmt, worklist);
    }
}

fn visit_stmt(stmt: &Stmt, worklist: &mut Vec<Work>) {
    match &stmt.kind {
        StmtKind::Null | StmtKind::CtrlTransfer(_) => {}
        StmtKind::Block(stmts) => visit_stmts(stmts, worklist),
        StmtKind::VarDecl(decl) => {
            visit_var_decl_stmt(decl, worklist);
            for &var in &decl.vars {
                worklist.push(Work::Variable(var));
            }
        }
        StmtKind::Expr(expr) => visit_expr(expr, worklist),
        StmtKind::If {
            condition,
            body,
            else_branch,
        } => {
            visit_expr(condition, worklist);
            visit_stmt(body, worklist);
            if let Some(else_branch) = else_branch {
                visit_stmt(else_branch, worklist);
            }
        }
        StmtKind::For {
            init,
            condition,
            iteration,
            body,
        } => {
            visit_stmt(init, worklist);
            if let Some(condition) = condition {
                visit_expr(condition, worklist);
            }
            if let Some(iteration) = iteration {
                visit_expr(iteration, worklist);
            }
            visit_stmt(body, worklist);
        }
        StmtKind::While { condition, body } => {
            visit_expr(condition, worklist);
            visit_stmt(body, worklist);
        }
        StmtKind::DoWhile { body, condition } => {
            visit_stmt(body, worklist);
            visit_expr(condition, worklist);
        }
        StmtKind::Switch { selector, cases } => {
            visit_expr(selector, worklist);
            for SwitchCase { value, stmts } in cases {
                if let Some(value) = value {
                    visit_expr(value, worklist);
                }
                visit_stmts(stmts, worklist);
            }
        }
        StmtKind::Return { expr, .. } => {
            if let Some(expr) = expr {
                visit_expr(expr, worklist);
            }
        }
    }
}

fn visit_expr(expr: &Expr, worklist: &mut Vec<Work>) {
    match &expr.kind {
        ExprKind::Literal(_) => {}
        ExprKind::TypeName(ty) => visit_type(ty, worklist),
        ExprKind::Ternary {
            condition,
            then_expr,
            else_expr,
        } => {
            visit_expr(condition, worklist);
            visit_expr(then_expr, worklist);
            visit_expr(else_expr, worklist);
        }
        ExprKind::Binary { lhs, rhs, .. } => {
            visit_expr(lhs, worklist);
            visit_expr(rhs, worklist);
        }
        ExprKind::Unary { expr, .. } | ExprKind::PostUnary { expr, .. } => {
            visit_expr(expr, worklist)
        }
        ExprKind::Call(FunctionCall {
            ident,
            type_ctor,
            args,
            ..
        }) => {
            if let Some(ident) = ident {
                visit_var_ident(ident, worklist);
            }
            if let Some(ty) = type_ctor {
                visit_type(ty, worklist);
            }
            for arg in args {
                visit_expr(arg, worklist);
            }
        }
        ExprKind::Bracket(expr) => visit_expr(expr, worklist),
        ExprKind::Suffix { expr, ident } => {
            visit_expr(expr, worklist);
            visit_var_ident(ident, worklist);
        }
        ExprKind::ArrayAccess { expr, indices } => {
            visit_expr(expr, worklist);
            for index in indices {
                visit_expr(index, worklist);
            }
        }
        ExprKind::Cast { ty, expr } => {
            visit_type(ty, worklist);
            visit_expr(expr, worklist);
        }
        ExprKind::VarAccess { ident, assign } => {
            visit_var_ident(ident, worklist);
            if let Some((_, expr)) = assign {
                visit_expr(expr, worklist);
            }
        }
        ExprKind::InitializerList(exprs) => {
            for expr in exprs {
                visit_expr(expr, worklist);
            }
        }
        ExprKind::List { first, next } => {
            visit_expr(first, worklist);
            visit_expr(next, worklist);
        }
    }
}

fn visit_var_ident(ident: &VarIdent, worklist: &mut Vec<Work>) {
    match ident.symbol {
        Some(SymbolRef::Variable(id)) => worklist.push(Work::Variable(id)),
        Some(SymbolRef::Function(id)) => worklist.push(Work::Function(id)),
        Some(SymbolRef::Struct(id)) => worklist.push(Work::Struct(id)),
        Some(SymbolRef::UniformBuffer(id)) => worklist.push(Work::Buffer(id)),
        Some(SymbolRef::Texture(id, index)) => worklist.push(Work::Texture(id, index)),
        None => {}
    }
    for index in &ident.array_indices {
        visit_expr(index, worklist);
    }
    if let Some(next) = &ident.next {
        visit_var_ident(next, worklist);
    }
}
