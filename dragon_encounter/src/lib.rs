//! # Dragon Encounter
//!
//! Scripted dragon encounters fought by a [`slayer_rules::DragonSlayer`].
//! The same script can be replayed through each [`DispatchStyle`]; every
//! style narrates an identical transcript.

pub mod encounter;
pub mod error;
pub mod script;
pub mod style;

pub use encounter::*;
pub use error::*;
pub use script::*;
pub use style::*;
