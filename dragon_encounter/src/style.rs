//! Dispatch styles - the three ways a strategy can be handed to the slayer.

use strum::IntoEnumIterator;

use slayer_rules::{
    inline, DragonSlayingStrategy, MeleeStrategy, ProjectileStrategy, SpellStrategy,
    StrategyKind, MELEE_MESSAGE, PROJECTILE_MESSAGE, SPELL_MESSAGE,
};

/// How a [`StrategyKind`] is materialized before the slayer receives it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum DispatchStyle {
    /// Discrete named types, one per strategy.
    Named,
    /// Anonymous closures written at the call site.
    Inline,
    /// Members of the strategy enum, each bound to a function value.
    Enumerated,
}

impl DispatchStyle {
    /// All styles in demonstration order.
    pub fn all() -> impl Iterator<Item = DispatchStyle> {
        Self::iter()
    }

    /// Build the strategy for `kind` in this style.
    pub fn strategy_for(self, kind: StrategyKind) -> Box<dyn DragonSlayingStrategy> {
        match self {
            DispatchStyle::Named => match kind {
                StrategyKind::Melee => Box::new(MeleeStrategy),
                StrategyKind::Projectile => Box::new(ProjectileStrategy),
                StrategyKind::Spell => Box::new(SpellStrategy),
            },
            DispatchStyle::Inline => match kind {
                StrategyKind::Melee => Box::new(inline(|out| writeln!(out, "{}", MELEE_MESSAGE))),
                StrategyKind::Projectile => {
                    Box::new(inline(|out| writeln!(out, "{}", PROJECTILE_MESSAGE)))
                }
                StrategyKind::Spell => Box::new(inline(|out| writeln!(out, "{}", SPELL_MESSAGE))),
            },
            DispatchStyle::Enumerated => Box::new(kind),
        }
    }
}
