use crate::expressions::Expr;
use crate::program::{StructId, TextureId};

/// Basic scalar types
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub enum ScalarType {
    Bool,
    Int,
    UInt,
    Half,
    Float,
    Double,
}

/// Numeric layout of a base type
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub enum DataType {
    Scalar(ScalarType),
    Vector(ScalarType, u32),
    Matrix(ScalarType, u32, u32),
}

impl DataType {
    /// Check if the layout is a single component
    pub fn is_scalar(&self) -> bool {
        matches!(self, DataType::Scalar(_))
    }

    /// The component type of the layout
    pub fn scalar_type(&self) -> ScalarType {
        match *self {
            DataType::Scalar(st) | DataType::Vector(st, _) | DataType::Matrix(st, _, _) => st,
        }
    }

    /// Replace double-precision components with single precision
    pub fn demote_double(self) -> DataType {
        let demote = |st| {
            if st == ScalarType::Double {
                ScalarType::Float
            } else {
                st
            }
        };
        match self {
            DataType::Scalar(st) => DataType::Scalar(demote(st)),
            DataType::Vector(st, n) => DataType::Vector(demote(st), n),
            DataType::Matrix(st, r, c) => DataType::Matrix(demote(st), r, c),
        }
    }
}

/// HLSL texture object types
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub enum TextureKind {
    Texture1D,
    Texture1DArray,
    Texture2D,
    Texture2DArray,
    Texture2DMS,
    Texture3D,
    TextureCube,
    TextureCubeArray,
    Buffer,
    RWTexture2D,
}

impl TextureKind {
    /// Check if the texture is an unordered access view
    pub fn is_rw(&self) -> bool {
        matches!(self, TextureKind::RWTexture2D)
    }
}

/// The type of an expression, variable, or function return
#[derive(PartialEq, Debug, Clone)]
pub enum TypeDenoter {
    Void,
    Base(DataType),
    Array {
        base: Box<TypeDenoter>,
        dims: Vec<Expr>,
    },
    Struct {
        ident: String,
        struct_ref: Option<StructId>,
    },
    Texture {
        kind: TextureKind,
        texture_ref: Option<TextureId>,
    },
    Alias {
        ident: String,
        target: Box<TypeDenoter>,
    },
}

impl TypeDenoter {
    pub fn is_void(&self) -> bool {
        matches!(self.get_aliased(), TypeDenoter::Void)
    }

    pub fn is_base(&self) -> bool {
        matches!(self.get_aliased(), TypeDenoter::Base(_))
    }

    /// Check if the type is a single scalar component
    pub fn is_scalar(&self) -> bool {
        matches!(self.get_aliased(), TypeDenoter::Base(dt) if dt.is_scalar())
    }

    pub fn is_struct(&self) -> bool {
        matches!(self.get_aliased(), TypeDenoter::Struct { .. })
    }

    pub fn is_alias(&self) -> bool {
        matches!(self, TypeDenoter::Alias { .. })
    }

    /// Resolve through alias declarations to the underlying type
    pub fn get_aliased(&self) -> &TypeDenoter {
        match self {
            TypeDenoter::Alias { target, .. } => target.get_aliased(),
            other => other,
        }
    }

    /// The base data type when the (aliased) type has one
    pub fn base_data_type(&self) -> Option<DataType> {
        match self.get_aliased() {
            TypeDenoter::Base(dt) => Some(*dt),
            _ => None,
        }
    }

    /// The referenced struct when the (aliased) type names one
    pub fn struct_ref(&self) -> Option<StructId> {
        match self.get_aliased() {
            TypeDenoter::Struct { struct_ref, .. } => *struct_ref,
            _ => None,
        }
    }
}
