use std::collections::BTreeSet;

use crate::declarations::{
    AliasDecl, FunctionDecl, StructDecl, TextureDeclStmt, UniformBufferDecl, VarDecl, VarDeclStmt,
};
use crate::intrinsics::Intrinsic;

/// Id of a function declaration within a [Program]
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Copy, Clone)]
pub struct FunctionId(pub u32);

/// Id of a structure declaration within a [Program]
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Copy, Clone)]
pub struct StructId(pub u32);

/// Id of a uniform buffer declaration within a [Program]
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Copy, Clone)]
pub struct BufferId(pub u32);

/// Id of a texture declaration statement within a [Program]
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Copy, Clone)]
pub struct TextureId(pub u32);

/// Id of a variable declaration within a [Program]
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Copy, Clone)]
pub struct VarId(pub u32);

/// Back-reference from a use site to the declaration it resolved to
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub enum SymbolRef {
    Variable(VarId),
    Function(FunctionId),
    Struct(StructId),
    UniformBuffer(BufferId),
    /// Texture declaration statement and the index of the name within it
    Texture(TextureId, usize),
}

/// A global declaration in program order
#[derive(PartialEq, Debug, Clone)]
pub enum GlobalDecl {
    Function(FunctionId),
    Struct(StructId),
    UniformBuffer(BufferId),
    Texture(TextureId),
    Variable(VarDeclStmt),
    Alias(AliasDecl),
}

/// Root of a semantically analyzed shader program
///
/// Declarations live in registries indexed by the id newtypes; the ordered
/// [GlobalDecl] list drives emission order. Statement and expression trees
/// are owned directly since they never form cycles.
#[derive(PartialEq, Debug, Clone, Default)]
pub struct Program {
    pub global_decls: Vec<GlobalDecl>,
    pub functions: Vec<FunctionDecl>,
    pub structs: Vec<StructDecl>,
    pub uniform_buffers: Vec<UniformBufferDecl>,
    pub texture_decls: Vec<TextureDeclStmt>,
    pub variables: Vec<VarDecl>,

    /// The shader entry point, if semantic analysis found one
    pub entry_point: Option<FunctionId>,
    /// Intrinsics referenced anywhere in the program
    pub used_intrinsics: BTreeSet<Intrinsic>,
    /// Shader-model-3 screen space semantics were requested
    pub has_sm3_screen_space: bool,
}

impl Program {
    pub fn new() -> Self {
        Program::default()
    }

    pub fn function(&self, id: FunctionId) -> &FunctionDecl {
        &self.functions[id.0 as usize]
    }

    pub fn function_mut(&mut self, id: FunctionId) -> &mut FunctionDecl {
        &mut self.functions[id.0 as usize]
    }

    pub fn structure(&self, id: StructId) -> &StructDecl {
        &self.structs[id.0 as usize]
    }

    pub fn structure_mut(&mut self, id: StructId) -> &mut StructDecl {
        &mut self.structs[id.0 as usize]
    }

    pub fn uniform_buffer(&self, id: BufferId) -> &UniformBufferDecl {
        &self.uniform_buffers[id.0 as usize]
    }

    pub fn uniform_buffer_mut(&mut self, id: BufferId) -> &mut UniformBufferDecl {
        &mut self.uniform_buffers[id.0 as usize]
    }

    pub fn texture_decl(&self, id: TextureId) -> &TextureDeclStmt {
        &self.texture_decls[id.0 as usize]
    }

    pub fn texture_decl_mut(&mut self, id: TextureId) -> &mut TextureDeclStmt {
        &mut self.texture_decls[id.0 as usize]
    }

    pub fn variable(&self, id: VarId) -> &VarDecl {
        &self.variables[id.0 as usize]
    }

    pub fn variable_mut(&mut self, id: VarId) -> &mut VarDecl {
        &mut self.variables[id.0 as usize]
    }

    /// The entry point declaration, if one was found
    pub fn entry_point_ref(&self) -> Option<&FunctionDecl> {
        self.entry_point.map(|id| self.function(id))
    }

    pub fn add_function(&mut self, decl: FunctionDecl) -> FunctionId {
        let id = FunctionId(self.functions.len() as u32);
        self.functions.push(decl);
        id
    }

    pub fn add_struct(&mut self, decl: StructDecl) -> StructId {
        let id = StructId(self.structs.len() as u32);
        self.structs.push(decl);
        id
    }

    pub fn add_uniform_buffer(&mut self, decl: UniformBufferDecl) -> BufferId {
        let id = BufferId(self.uniform_buffers.len() as u32);
        self.uniform_buffers.push(decl);
        id
    }

    pub fn add_texture_decl(&mut self, decl: TextureDeclStmt) -> TextureId {
        let id = TextureId(self.texture_decls.len() as u32);
        self.texture_decls.push(decl);
        id
    }

    pub fn add_variable(&mut self, decl: VarDecl) -> VarId {
        let id = VarId(self.variables.len() as u32);
        self.variables.push(decl);
        id
    }
}
