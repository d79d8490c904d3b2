//! Enumerated strategies - each member carries its own behavior.

use serde::{Deserialize, Serialize};
use std::io::{self, Write};
use strum::IntoEnumIterator;

use super::{DragonSlayingStrategy, MELEE_MESSAGE, PROJECTILE_MESSAGE, SPELL_MESSAGE};
use crate::error::SlayerError;

/// Function value bound to an enumerated strategy.
pub type Behavior = fn(&mut dyn Write) -> io::Result<()>;

/// The fixed set of dragon-slaying strategies.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case", try_from = "String")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum StrategyKind {
    Melee,
    Projectile,
    Spell,
}

impl StrategyKind {
    /// All strategies in encounter order.
    pub fn all() -> impl Iterator<Item = StrategyKind> {
        Self::iter()
    }

    /// The function value this member dispatches to.
    pub fn behavior(self) -> Behavior {
        match self {
            StrategyKind::Melee => |out| writeln!(out, "{}", MELEE_MESSAGE),
            StrategyKind::Projectile => |out| writeln!(out, "{}", PROJECTILE_MESSAGE),
            StrategyKind::Spell => |out| writeln!(out, "{}", SPELL_MESSAGE),
        }
    }

    /// The line this strategy narrates, without the trailing newline.
    pub fn message(self) -> &'static str {
        match self {
            StrategyKind::Melee => MELEE_MESSAGE,
            StrategyKind::Projectile => PROJECTILE_MESSAGE,
            StrategyKind::Spell => SPELL_MESSAGE,
        }
    }
}

impl DragonSlayingStrategy for StrategyKind {
    #[inline]
    fn execute(&self, out: &mut dyn Write) -> io::Result<()> {
        (self.behavior())(out)
    }
}

/// Deserialization shares the `FromStr` parser, so scripts ignore case too.
impl TryFrom<String> for StrategyKind {
    type Error = SlayerError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        name.parse().map_err(|_| SlayerError::UnknownStrategy(name))
    }
}
