//! # hlslcc - Source Text Types
//!
//! Shared types for talking about positions in the original HLSL source and
//! for carrying diagnostics out of the compiler stages.
//! * [SourcePosition] identifies a location in the front end's input.
//! * [Located] pairs an arbitrary node with a position.
//! * [Reporter] accumulates the warnings and errors a stage produced.

mod location;
pub use location::*;

mod diagnostics;
pub use diagnostics::*;
