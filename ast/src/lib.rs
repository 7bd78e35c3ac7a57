//! # hlslcc - Abstract Syntax Tree
//!
//! Node types for a semantically analyzed HLSL shader program. The front end
//! builds a [Program] and the backends consume it. All cross references
//! between declarations are ids into registries owned by the [Program], so
//! cyclic references (a call graph, a struct used as its own pointer-free
//! member type, the entry point) never turn into ownership cycles.

mod program;
pub use program::*;

mod declarations;
pub use declarations::*;

mod statements;
pub use statements::*;

mod expressions;
pub use expressions::*;

mod types;
pub use types::*;

mod semantics;
pub use semantics::*;

mod intrinsics;
pub use intrinsics::*;
