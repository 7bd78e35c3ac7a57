//! Control path analysis
//!
//! Marks each function with whether every control path through its body
//! reaches a `return`, and tags the return statement that is the syntactic
//! end of a function body so the generator can drop a redundant `return;`.

use hlslcc_ast as ast;
use hlslcc_ast::{Stmt, StmtKind};

/// Annotate all functions in the program with control path information
///
/// Re-running the analysis recomputes the same annotations, so the pass is
/// idempotent on an already-analyzed program.
pub fn mark_control_paths(program: &mut ast::Program) {
    log::debug!("control path analysis over {} functions", program.functions.len());

    for function in &mut program.functions {
        let Some(body) = &mut function.body else {
            function.has_non_return_control_path = false;
            continue;
        };

        if let Some(Stmt {
            kind: StmtKind::Return {
                is_end_of_function, ..
            },
            ..
        }) = body.last_mut()
        {
            *is_end_of_function = true;
        }

        let returns = block_returns(body);
        function.has_non_return_control_path = !returns && !function.return_type.is_void();
    }
}

/// A block returns iff any statement in it returns on all paths
fn block_returns(stmts: &[Stmt]) -> bool {
    stmts.iter().any(stmt_returns)
}

/// Check if a statement returns a value on every control path through it
fn stmt_returns(stmt: &Stmt) -> bool {
    match &stmt.kind {
        StmtKind::Return { .. } => true,
        StmtKind::Block(stmts) => block_returns(stmts),
        StmtKind::If {
            body, else_branch, ..
        } => match else_branch {
            Some(else_branch) => stmt_returns(body) && stmt_returns(else_branch),
            None => false,
        },
        StmtKind::Switch { cases, .. } => {
            // A switch covers all paths only with a default label, and each
            // case must return rather than fall through or break out
            let has_default = cases.iter().any(|case| case.value.is_none());
            has_default && cases.iter().all(|case| block_returns(&case.stmts))
        }
        // Loops are conservatively treated as non-returning since we do not
        // analyze their exit conditions
        StmtKind::For { .. } | StmtKind::While { .. } | StmtKind::DoWhile { .. } => false,
        StmtKind::Null
        | StmtKind::VarDecl(_)
        | StmtKind::Expr(_)
        | StmtKind::CtrlTransfer(_) => false,
    }
}
