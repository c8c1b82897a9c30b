//! Projection, recommendation, and assembly logic.
//!
//! Everything here is pure: the engines take a form and planning
//! assumptions and return values, with no hidden state between calls.

pub mod assembler;
pub mod common;
pub mod projection;
pub mod recommendations;

pub use assembler::ResultAssembler;
pub use projection::{ProjectionEngine, achievement_percent};
