use hlslcc_text::SourcePosition;

use crate::expressions::Expr;
use crate::program::{BufferId, StructId, VarId};
use crate::semantics::{Register, Semantic};
use crate::statements::Stmt;
use crate::types::{TextureKind, TypeDenoter};

/// A function declaration
#[derive(PartialEq, Debug, Clone)]
pub struct FunctionDecl {
    pub ident: String,
    pub return_type: TypeDenoter,
    /// Semantic annotation on the return value
    pub return_semantic: Option<Semantic>,
    /// Each parameter is a declaration statement with exactly one variable
    pub params: Vec<VarDeclStmt>,
    /// `None` for a forward declaration
    pub body: Option<Vec<Stmt>>,
    pub attributes: Vec<Attribute>,
    pub pos: SourcePosition,

    pub is_entry_point: bool,
    pub has_non_return_control_path: bool,
    pub reachable: bool,

    /// Stage inputs lifted out of the parameter list by conversion
    pub input_semantics: SemanticBuckets,
    /// Stage outputs lifted out of the return value by conversion
    pub output_semantics: SemanticBuckets,
    /// Original struct return type when the entry point returned a struct
    pub output_struct: Option<StructId>,
}

impl FunctionDecl {
    pub fn new(ident: impl Into<String>, return_type: TypeDenoter, pos: SourcePosition) -> Self {
        FunctionDecl {
            ident: ident.into(),
            return_type,
            return_semantic: None,
            params: Vec::new(),
            body: None,
            attributes: Vec::new(),
            pos,
            is_entry_point: false,
            has_non_return_control_path: false,
            reachable: false,
            input_semantics: SemanticBuckets::default(),
            output_semantics: SemanticBuckets::default(),
            output_struct: None,
        }
    }
}

/// Entry point variables partitioned by semantic kind
///
/// User-defined semantics become `in`/`out` globals; system values map to
/// GLSL built-ins and only exist as locals inside `main`.
#[derive(PartialEq, Debug, Clone, Default)]
pub struct SemanticBuckets {
    pub var_decl_refs: Vec<VarId>,
    pub var_decl_refs_sv: Vec<VarId>,
}

impl SemanticBuckets {
    pub fn is_empty(&self) -> bool {
        self.var_decl_refs.is_empty() && self.var_decl_refs_sv.is_empty()
    }
}

/// A structure declaration
#[derive(PartialEq, Debug, Clone)]
pub struct StructDecl {
    pub ident: String,
    pub members: Vec<VarDeclStmt>,
    /// Base structure whose members are inlined before this one's
    pub base_struct: Option<StructId>,
    /// Structures declared lexically inside this one, in declaration order
    pub nested_structs: Vec<StructId>,
    /// Instance name used when the struct is emitted as an interface block
    pub alias_name: String,
    pub pos: SourcePosition,

    pub is_nested: bool,
    pub is_shader_input: bool,
    pub is_shader_output: bool,
    /// Set by conversion when the struct is flattened instead of emitted
    pub must_resolve: bool,
    pub reachable: bool,
}

impl StructDecl {
    pub fn new(ident: impl Into<String>, pos: SourcePosition) -> Self {
        StructDecl {
            ident: ident.into(),
            members: Vec::new(),
            base_struct: None,
            nested_structs: Vec::new(),
            alias_name: String::new(),
            pos,
            is_nested: false,
            is_shader_input: false,
            is_shader_output: false,
            must_resolve: false,
            reachable: false,
        }
    }
}

/// A `cbuffer` declaration
#[derive(PartialEq, Debug, Clone)]
pub struct UniformBufferDecl {
    pub ident: String,
    pub members: Vec<VarDeclStmt>,
    pub slot_registers: Vec<Register>,
    pub pos: SourcePosition,
    pub reachable: bool,
}

/// A texture declaration statement: one texture type, several names
#[derive(PartialEq, Debug, Clone)]
pub struct TextureDeclStmt {
    pub texture_kind: TextureKind,
    pub decls: Vec<TextureDecl>,
    pub pos: SourcePosition,
    pub reachable: bool,
}

/// A single named texture within a [TextureDeclStmt]
#[derive(PartialEq, Debug, Clone)]
pub struct TextureDecl {
    pub ident: String,
    pub slot_registers: Vec<Register>,
    pub pos: SourcePosition,
    pub reachable: bool,
}

/// A type alias declaration
#[derive(PartialEq, Debug, Clone)]
pub struct AliasDecl {
    pub ident: String,
    pub ty: TypeDenoter,
    pub pos: SourcePosition,
}

/// A variable declaration statement: shared type, several declarators
#[derive(PartialEq, Debug, Clone)]
pub struct VarDeclStmt {
    pub storage_classes: Vec<StorageClass>,
    /// Parameter passing direction when the statement declares a parameter
    pub input_modifier: Option<InputModifier>,
    pub is_const: bool,
    pub var_type: TypeDenoter,
    /// Inline structure definition used as the declared type
    pub struct_decl: Option<StructId>,
    pub vars: Vec<VarId>,
    pub pos: SourcePosition,

    pub is_shader_input: bool,
    pub is_shader_output: bool,
}

impl VarDeclStmt {
    pub fn new(var_type: TypeDenoter, pos: SourcePosition) -> Self {
        VarDeclStmt {
            storage_classes: Vec::new(),
            input_modifier: None,
            is_const: false,
            var_type,
            struct_decl: None,
            vars: Vec::new(),
            pos,
            is_shader_input: false,
            is_shader_output: false,
        }
    }
}

/// A single named variable within a [VarDeclStmt]
#[derive(PartialEq, Debug, Clone)]
pub struct VarDecl {
    pub ident: String,
    /// Declared type, mirrored from the owning statement
    pub ty: TypeDenoter,
    pub array_dims: Vec<Expr>,
    pub initializer: Option<Expr>,
    pub semantic: Option<Semantic>,
    /// Set when the variable is a member of a uniform buffer
    pub buffer_ref: Option<BufferId>,
    pub pos: SourcePosition,

    pub disable_code_gen: bool,
    pub reachable: bool,
}

impl VarDecl {
    pub fn new(ident: impl Into<String>, ty: TypeDenoter, pos: SourcePosition) -> Self {
        VarDecl {
            ident: ident.into(),
            ty,
            array_dims: Vec::new(),
            initializer: None,
            semantic: None,
            buffer_ref: None,
            pos,
            disable_code_gen: false,
            reachable: false,
        }
    }
}

/// An attribute on a function declaration, e.g. `[numthreads(8, 8, 1)]`
#[derive(PartialEq, Debug, Clone)]
pub struct Attribute {
    pub ident: String,
    pub arguments: Vec<Expr>,
    pub pos: SourcePosition,
}

/// HLSL storage class keywords on a variable declaration
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub enum StorageClass {
    Static,
    GroupShared,
    Volatile,
    Precise,
}

/// Parameter passing direction
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub enum InputModifier {
    In,
    Out,
    InOut,
}
