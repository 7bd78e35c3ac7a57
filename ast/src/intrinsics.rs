/// Built-in functions recognized by the front end
///
/// Calls into these are tagged on the [FunctionCall][crate::FunctionCall]
/// node during semantic analysis. Most map one-to-one onto a GLSL function;
/// `Mul`, `Rcp`, and the interlocked family are lowered structurally by the
/// generator instead.
#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Copy, Clone)]
pub enum Intrinsic {
    Abs,
    ACos,
    All,
    Any,
    AsFloat,
    AsInt,
    AsUInt,
    ASin,
    ATan,
    ATan2,
    Ceil,
    Clamp,
    Clip,
    Cos,
    CosH,
    Cross,
    DDX,
    DDY,
    Degrees,
    Determinant,
    Distance,
    Dot,
    Exp,
    Exp2,
    Floor,
    FMod,
    Frac,
    IsInf,
    IsNaN,
    Length,
    Lerp,
    Log,
    Log2,
    Log10,
    Max,
    Min,
    Mul,
    Normalize,
    Pow,
    Radians,
    Rcp,
    Reflect,
    Refract,
    Round,
    RSqrt,
    Saturate,
    Sign,
    Sin,
    SinH,
    SmoothStep,
    Sqrt,
    Step,
    Tan,
    TanH,
    Transpose,
    Trunc,
    Texture,
    TextureLod,
    InterlockedAdd,
    InterlockedAnd,
    InterlockedExchange,
    InterlockedMax,
    InterlockedMin,
    InterlockedOr,
    InterlockedXor,
}

impl Intrinsic {
    /// Check if this is one of the interlocked atomic operations
    pub fn is_interlocked(&self) -> bool {
        use Intrinsic::*;
        matches!(
            self,
            InterlockedAdd
                | InterlockedAnd
                | InterlockedExchange
                | InterlockedMax
                | InterlockedMin
                | InterlockedOr
                | InterlockedXor
        )
    }
}
