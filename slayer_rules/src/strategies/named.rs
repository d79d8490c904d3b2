//! Named strategy implementations.

use std::io::{self, Write};

use super::{DragonSlayingStrategy, MELEE_MESSAGE, PROJECTILE_MESSAGE, SPELL_MESSAGE};

/// Close combat with Excalibur.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MeleeStrategy;

impl DragonSlayingStrategy for MeleeStrategy {
    fn execute(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{}", MELEE_MESSAGE)
    }
}

/// Ranged attack with the magical crossbow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProjectileStrategy;

impl DragonSlayingStrategy for ProjectileStrategy {
    fn execute(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{}", PROJECTILE_MESSAGE)
    }
}

/// The spell of disintegration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpellStrategy;

impl DragonSlayingStrategy for SpellStrategy {
    fn execute(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{}", SPELL_MESSAGE)
    }
}
