//! # Slayer Rules
//!
//! Dragon-slaying strategies and the [`DragonSlayer`] that wields them.
//! A strategy is anything that can narrate a single finishing blow; the
//! slayer holds exactly one at a time and may swap it between battles.
//!
//! Three interchangeable representations are supported:
//!
//! - **Named**: unit structs such as [`MeleeStrategy`]
//! - **Inline**: any closure with the [`DragonSlayingStrategy`] call shape
//! - **Enumerated**: [`StrategyKind`], whose members each carry a function value

pub mod error;
pub mod slayer;
pub mod strategies;

pub use error::*;
pub use slayer::*;
pub use strategies::*;
