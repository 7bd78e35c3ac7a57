/// Shader stage a program is compiled for
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub enum ShaderTarget {
    Vertex,
    Fragment,
    Compute,
    Geometry,
    TessControl,
    TessEvaluation,
}

impl std::fmt::Display for ShaderTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let name = match self {
            ShaderTarget::Vertex => "vertex shader",
            ShaderTarget::Fragment => "fragment shader",
            ShaderTarget::Compute => "compute shader",
            ShaderTarget::Geometry => "geometry shader",
            ShaderTarget::TessControl => "tessellation control shader",
            ShaderTarget::TessEvaluation => "tessellation evaluation shader",
        };
        write!(f, "{}", name)
    }
}

/// An HLSL semantic annotation on an entry point parameter or return value
///
/// System-value semantics map onto GLSL built-in variables; user-defined
/// semantics become `in`/`out` globals at the stage boundary.
#[derive(PartialEq, Eq, Debug, Clone)]
pub enum Semantic {
    Position,
    Target(u32),
    Depth,
    VertexId,
    InstanceId,
    PrimitiveId,
    IsFrontFace,
    DispatchThreadId,
    GroupId,
    GroupThreadId,
    GroupIndex,
    User { name: String, index: u32 },
}

impl Semantic {
    /// Check if this is an `SV_*` system-value semantic
    pub fn is_system_value(&self) -> bool {
        !matches!(self, Semantic::User { .. })
    }

    /// The location index carried by the semantic
    pub fn index(&self) -> u32 {
        match self {
            Semantic::Target(i) => *i,
            Semantic::User { index, .. } => *index,
            _ => 0,
        }
    }

    /// The HLSL spelling of the semantic, used when synthesizing identifiers
    pub fn name(&self) -> String {
        match self {
            Semantic::Position => String::from("SV_Position"),
            Semantic::Target(0) => String::from("SV_Target"),
            Semantic::Target(i) => format!("SV_Target{}", i),
            Semantic::Depth => String::from("SV_Depth"),
            Semantic::VertexId => String::from("SV_VertexID"),
            Semantic::InstanceId => String::from("SV_InstanceID"),
            Semantic::PrimitiveId => String::from("SV_PrimitiveID"),
            Semantic::IsFrontFace => String::from("SV_IsFrontFace"),
            Semantic::DispatchThreadId => String::from("SV_DispatchThreadID"),
            Semantic::GroupId => String::from("SV_GroupID"),
            Semantic::GroupThreadId => String::from("SV_GroupThreadID"),
            Semantic::GroupIndex => String::from("SV_GroupIndex"),
            Semantic::User { name, index: 0 } => name.clone(),
            Semantic::User { name, index } => format!("{}{}", name, index),
        }
    }
}

/// An HLSL `register(...)` binding hint
///
/// The name keeps its textual form (`b2`, `t0`, ...) so the generator can
/// validate the prefix against the kind it expects for a declaration.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Register {
    pub name: String,
    /// Register only applies when compiling for this target
    pub target: Option<ShaderTarget>,
}

impl Register {
    pub fn new(name: impl Into<String>) -> Self {
        Register {
            name: name.into(),
            target: None,
        }
    }

    pub fn for_target(name: impl Into<String>, target: ShaderTarget) -> Self {
        Register {
            name: name.into(),
            target: Some(target),
        }
    }

    /// Select the register that applies to the given target
    pub fn get_for_target(registers: &[Register], target: ShaderTarget) -> Option<&Register> {
        registers
            .iter()
            .find(|r| r.target.is_none() || r.target == Some(target))
    }
}
