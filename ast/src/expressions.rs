use hlslcc_text::SourcePosition;

use crate::intrinsics::Intrinsic;
use crate::program::SymbolRef;
use crate::types::TypeDenoter;

/// An expression node paired with its source position
#[derive(PartialEq, Debug, Clone)]
pub struct Expr {
    pub kind: ExprKind,
    pub pos: SourcePosition,
}

impl Expr {
    pub fn new(kind: ExprKind, pos: SourcePosition) -> Self {
        Expr { kind, pos }
    }

    /// Create an expression with no source position
    pub fn synthesized(kind: ExprKind) -> Self {
        Expr {
            kind,
            pos: SourcePosition::UNKNOWN,
        }
    }
}

#[derive(PartialEq, Debug, Clone)]
pub enum ExprKind {
    Literal(Literal),
    /// A type used in expression position, e.g. as a cast or constructor name
    TypeName(TypeDenoter),
    Ternary {
        condition: Box<Expr>,
        then_expr: Box<Expr>,
        else_expr: Box<Expr>,
    },
    Binary {
        op: BinOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
    Unary {
        op: UnaryOp,
        expr: Box<Expr>,
    },
    PostUnary {
        op: UnaryOp,
        expr: Box<Expr>,
    },
    Call(FunctionCall),
    /// Parenthesized sub-expression as written in the source
    Bracket(Box<Expr>),
    /// Member or swizzle access on a non-identifier expression
    Suffix {
        expr: Box<Expr>,
        ident: VarIdent,
    },
    ArrayAccess {
        expr: Box<Expr>,
        indices: Vec<Expr>,
    },
    Cast {
        ty: TypeDenoter,
        expr: Box<Expr>,
    },
    /// Identifier chain access, optionally the target of an assignment
    VarAccess {
        ident: VarIdent,
        assign: Option<(AssignOp, Box<Expr>)>,
    },
    InitializerList(Vec<Expr>),
    /// Comma expression
    List {
        first: Box<Expr>,
        next: Box<Expr>,
    },
}

/// A call to a function, intrinsic, or type constructor
#[derive(PartialEq, Debug, Clone)]
pub struct FunctionCall {
    /// Callee identifier chain; `None` for type constructors
    pub ident: Option<VarIdent>,
    /// Constructor type when the call is a type constructor
    pub type_ctor: Option<TypeDenoter>,
    /// Tag assigned by semantic analysis for built-in functions
    pub intrinsic: Option<Intrinsic>,
    pub args: Vec<Expr>,
}

/// A chain of identifiers with array indices: `a[0].b.c`
#[derive(PartialEq, Debug, Clone)]
pub struct VarIdent {
    pub ident: String,
    pub array_indices: Vec<Expr>,
    /// Back-reference to the declaration this name resolved to
    pub symbol: Option<SymbolRef>,
    pub next: Option<Box<VarIdent>>,
}

impl VarIdent {
    /// A single chain node with no indices and no symbol
    pub fn plain(ident: impl Into<String>) -> Self {
        VarIdent {
            ident: ident.into(),
            array_indices: Vec::new(),
            symbol: None,
            next: None,
        }
    }

    /// A single chain node resolved to a symbol
    pub fn resolved(ident: impl Into<String>, symbol: SymbolRef) -> Self {
        VarIdent {
            ident: ident.into(),
            array_indices: Vec::new(),
            symbol: Some(symbol),
            next: None,
        }
    }

    /// The last node of the chain
    pub fn last(&self) -> &VarIdent {
        match &self.next {
            Some(next) => next.last(),
            None => self,
        }
    }

    /// The dotted spelling of the whole chain, for diagnostics
    pub fn full_name(&self) -> String {
        match &self.next {
            Some(next) => format!("{}.{}", self.ident, next.full_name()),
            None => self.ident.clone(),
        }
    }
}

/// A literal constant value
#[derive(PartialEq, Debug, Clone)]
pub enum Literal {
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f32),
    Double(f64),
}

#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub enum BinOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulus,
    LeftShift,
    RightShift,
    BitwiseAnd,
    BitwiseOr,
    BitwiseXor,
    BooleanAnd,
    BooleanOr,
    LessThan,
    LessEqual,
    GreaterThan,
    GreaterEqual,
    Equality,
    Inequality,
}

#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub enum UnaryOp {
    Plus,
    Minus,
    LogicalNot,
    BitwiseNot,
    Increment,
    Decrement,
}

#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub enum AssignOp {
    Assign,
    SumAssign,
    DifferenceAssign,
    ProductAssign,
    QuotientAssign,
    RemainderAssign,
    LeftShiftAssign,
    RightShiftAssign,
    BitwiseAndAssign,
    BitwiseOrAssign,
    BitwiseXorAssign,
}
