//! Static lookup tables from HLSL constructs to GLSL keywords
//!
//! All tables are pure functions over the AST enums; a `None` result means
//! the construct has no GLSL spelling and the caller reports an error.

use hlslcc_ast as ast;

/// Map a base data type to its GLSL keyword
///
/// `half` maps to `float`; GLSL has no half-precision storage type outside
/// of extensions we do not target.
pub fn data_type_to_glsl_keyword(data_type: ast::DataType) -> Option<String> {
    use ast::ScalarType::*;
    match data_type {
        ast::DataType::Scalar(st) => {
            let keyword = match st {
                Bool => "bool",
                Int => "int",
                UInt => "uint",
                Half | Float => "float",
                Double => "double",
            };
            Some(String::from(keyword))
        }
        ast::DataType::Vector(st, n) if (2..=4).contains(&n) => {
            let prefix = match st {
                Bool => "bvec",
                Int => "ivec",
                UInt => "uvec",
                Half | Float => "vec",
                Double => "dvec",
            };
            Some(format!("{}{}", prefix, n))
        }
        ast::DataType::Vector(st, 1) => data_type_to_glsl_keyword(ast::DataType::Scalar(st)),
        ast::DataType::Matrix(st, rows, cols)
            if (2..=4).contains(&rows) && (2..=4).contains(&cols) =>
        {
            let prefix = match st {
                Half | Float => "mat",
                Double => "dmat",
                // GLSL has no integer or boolean matrices
                Bool | Int | UInt => return None,
            };
            if rows == cols {
                Some(format!("{}{}", prefix, rows))
            } else {
                Some(format!("{}{}x{}", prefix, rows, cols))
            }
        }
        _ => None,
    }
}

/// Map an HLSL texture type to the GLSL sampler (or image) keyword
pub fn texture_kind_to_glsl_keyword(kind: ast::TextureKind) -> Option<&'static str> {
    use ast::TextureKind::*;
    let keyword = match kind {
        Texture1D => "sampler1D",
        Texture1DArray => "sampler1DArray",
        Texture2D => "sampler2D",
        Texture2DArray => "sampler2DArray",
        Texture2DMS => "sampler2DMS",
        Texture3D => "sampler3D",
        TextureCube => "samplerCube",
        TextureCubeArray => "samplerCubeArray",
        Buffer => "samplerBuffer",
        RWTexture2D => "image2D",
    };
    Some(keyword)
}

/// Map a system-value semantic to the GLSL built-in variable for a stage
///
/// `SV_Position` reads as `gl_FragCoord` inside a fragment shader and
/// writes as `gl_Position` everywhere else. Semantics without a built-in
/// (color targets, user varyings) return `None` and are handled through
/// `in`/`out` globals instead.
pub fn semantic_to_glsl_keyword(
    semantic: &ast::Semantic,
    target: ast::ShaderTarget,
) -> Option<&'static str> {
    use ast::Semantic::*;
    match semantic {
        Position if target == ast::ShaderTarget::Fragment => Some("gl_FragCoord"),
        Position => Some("gl_Position"),
        Depth => Some("gl_FragDepth"),
        VertexId => Some("gl_VertexID"),
        InstanceId => Some("gl_InstanceID"),
        PrimitiveId => Some("gl_PrimitiveID"),
        IsFrontFace => Some("gl_FrontFacing"),
        DispatchThreadId => Some("gl_GlobalInvocationID"),
        GroupId => Some("gl_WorkGroupID"),
        GroupThreadId => Some("gl_LocalInvocationID"),
        GroupIndex => Some("gl_LocalInvocationIndex"),
        Target(_) | User { .. } => None,
    }
}

/// Map an intrinsic to the GLSL function that implements it
///
/// `Mul`, `Rcp`, and the interlocked family are absent on purpose; the
/// generator lowers them structurally. `Clip` maps to the helper overloads
/// emitted in the prologue.
pub fn intrinsic_to_glsl_keyword(intrinsic: ast::Intrinsic) -> Option<&'static str> {
    use ast::Intrinsic::*;
    let keyword = match intrinsic {
        Abs => "abs",
        ACos => "acos",
        All => "all",
        Any => "any",
        AsFloat => "uintBitsToFloat",
        AsInt => "floatBitsToInt",
        AsUInt => "floatBitsToUint",
        ASin => "asin",
        ATan | ATan2 => "atan",
        Ceil => "ceil",
        Clamp => "clamp",
        Clip => "clip",
        Cos => "cos",
        CosH => "cosh",
        Cross => "cross",
        DDX => "dFdx",
        DDY => "dFdy",
        Degrees => "degrees",
        Determinant => "determinant",
        Distance => "distance",
        Dot => "dot",
        Exp => "exp",
        Exp2 => "exp2",
        Floor => "floor",
        FMod => "mod",
        Frac => "fract",
        IsInf => "isinf",
        IsNaN => "isnan",
        Length => "length",
        Lerp => "mix",
        Log => "log",
        Log2 => "log2",
        Max => "max",
        Min => "min",
        Normalize => "normalize",
        Pow => "pow",
        Radians => "radians",
        Reflect => "reflect",
        Refract => "refract",
        Round => "round",
        RSqrt => "inversesqrt",
        Sign => "sign",
        Sin => "sin",
        SinH => "sinh",
        SmoothStep => "smoothstep",
        Sqrt => "sqrt",
        Step => "step",
        Tan => "tan",
        TanH => "tanh",
        Transpose => "transpose",
        Trunc => "trunc",
        Texture => "texture",
        TextureLod => "textureLod",
        InterlockedAdd => "atomicAdd",
        InterlockedAnd => "atomicAnd",
        InterlockedExchange => "atomicExchange",
        InterlockedMax => "atomicMax",
        InterlockedMin => "atomicMin",
        InterlockedOr => "atomicOr",
        InterlockedXor => "atomicXor",
        // No GLSL counterpart; conversion rewrites these or reports
        Log10 | Mul | Rcp | Saturate => return None,
    };
    Some(keyword)
}

/// Map an HLSL storage class to a GLSL keyword
///
/// `static` is stripped during conversion; if one survives to emission it
/// reports as unmappable.
pub fn storage_class_to_glsl_keyword(storage_class: ast::StorageClass) -> Option<&'static str> {
    match storage_class {
        ast::StorageClass::GroupShared => Some("shared"),
        ast::StorageClass::Volatile => Some("volatile"),
        ast::StorageClass::Precise => Some("precise"),
        ast::StorageClass::Static => None,
    }
}

/// GLSL keywords and reserved words that HLSL identifiers may collide with
///
/// Kept sorted so lookup can binary search.
const RESERVED_GLSL_NAMES: &[&str] = &[
    "active",
    "attribute",
    "buffer",
    "coherent",
    "common",
    "filter",
    "fixed",
    "flat",
    "highp",
    "input",
    "invariant",
    "layout",
    "lowp",
    "main",
    "mediump",
    "noperspective",
    "output",
    "packed",
    "partition",
    "patch",
    "precision",
    "readonly",
    "resource",
    "restrict",
    "sample",
    "sampler1D",
    "sampler2D",
    "sampler3D",
    "samplerCube",
    "smooth",
    "subroutine",
    "superp",
    "texture",
    "union",
    "uniform",
    "varying",
    "writeonly",
];

/// Check if an identifier collides with a GLSL keyword or built-in name
pub fn is_reserved_glsl_name(ident: &str) -> bool {
    ident.starts_with("gl_") || RESERVED_GLSL_NAMES.binary_search(&ident).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use hlslcc_ast::{DataType, ScalarType, Semantic, ShaderTarget};

    #[test]
    fn reserved_names_are_sorted() {
        let mut sorted = RESERVED_GLSL_NAMES.to_vec();
        sorted.sort_unstable();
        assert_eq!(sorted, RESERVED_GLSL_NAMES);
    }

    #[test]
    fn data_type_keywords() {
        assert_eq!(
            data_type_to_glsl_keyword(DataType::Scalar(ScalarType::Float)).as_deref(),
            Some("float")
        );
        assert_eq!(
            data_type_to_glsl_keyword(DataType::Vector(ScalarType::Float, 4)).as_deref(),
            Some("vec4")
        );
        assert_eq!(
            data_type_to_glsl_keyword(DataType::Vector(ScalarType::Half, 1)).as_deref(),
            Some("float")
        );
        assert_eq!(
            data_type_to_glsl_keyword(DataType::Matrix(ScalarType::Float, 4, 4)).as_deref(),
            Some("mat4")
        );
        assert_eq!(
            data_type_to_glsl_keyword(DataType::Matrix(ScalarType::Float, 2, 3)).as_deref(),
            Some("mat2x3")
        );
        assert_eq!(
            data_type_to_glsl_keyword(DataType::Matrix(ScalarType::Int, 2, 2)),
            None
        );
    }

    #[test]
    fn position_semantic_depends_on_stage() {
        assert_eq!(
            semantic_to_glsl_keyword(&Semantic::Position, ShaderTarget::Vertex),
            Some("gl_Position")
        );
        assert_eq!(
            semantic_to_glsl_keyword(&Semantic::Position, ShaderTarget::Fragment),
            Some("gl_FragCoord")
        );
        assert_eq!(
            semantic_to_glsl_keyword(&Semantic::Target(0), ShaderTarget::Fragment),
            None
        );
    }

    #[test]
    fn reserved_lookup() {
        assert!(is_reserved_glsl_name("texture"));
        assert!(is_reserved_glsl_name("gl_Position"));
        assert!(!is_reserved_glsl_name("wvp"));
    }
}
