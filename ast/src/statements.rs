use hlslcc_text::SourcePosition;

use crate::declarations::VarDeclStmt;
use crate::expressions::Expr;

/// A statement node paired with its source position
#[derive(PartialEq, Debug, Clone)]
pub struct Stmt {
    pub kind: StmtKind,
    pub pos: SourcePosition,
}

impl Stmt {
    pub fn new(kind: StmtKind, pos: SourcePosition) -> Self {
        Stmt { kind, pos }
    }

    /// Create a statement with no source position
    pub fn synthesized(kind: StmtKind) -> Self {
        Stmt {
            kind,
            pos: SourcePosition::UNKNOWN,
        }
    }
}

#[derive(PartialEq, Debug, Clone)]
pub enum StmtKind {
    Null,
    Block(Vec<Stmt>),
    VarDecl(VarDeclStmt),
    Expr(Expr),
    If {
        condition: Expr,
        body: Box<Stmt>,
        else_branch: Option<Box<Stmt>>,
    },
    For {
        init: Box<Stmt>,
        condition: Option<Expr>,
        iteration: Option<Expr>,
        body: Box<Stmt>,
    },
    While {
        condition: Expr,
        body: Box<Stmt>,
    },
    DoWhile {
        body: Box<Stmt>,
        condition: Expr,
    },
    Switch {
        selector: Expr,
        cases: Vec<SwitchCase>,
    },
    Return {
        expr: Option<Expr>,
        /// Set by control path analysis when this is the syntactic end of
        /// the surrounding function body
        is_end_of_function: bool,
    },
    CtrlTransfer(CtrlTransfer),
}

/// One `case`/`default` label with its statement list
#[derive(PartialEq, Debug, Clone)]
pub struct SwitchCase {
    /// `None` for the `default` label
    pub value: Option<Expr>,
    pub stmts: Vec<Stmt>,
}

#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub enum CtrlTransfer {
    Break,
    Continue,
    Discard,
}
