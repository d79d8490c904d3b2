//! The dragon-slaying strategy abstraction and its variants.

mod kind;
mod named;

pub use kind::*;
pub use named::*;

use std::io::{self, Write};

/// Narration for the melee variant.
pub const MELEE_MESSAGE: &str = "With your Excalibur you sever the dragon's head!";

/// Narration for the projectile variant.
pub const PROJECTILE_MESSAGE: &str =
    "You shoot the dragon with the magical crossbow and it falls dead on the ground!";

/// Narration for the spell variant.
pub const SPELL_MESSAGE: &str =
    "You cast the spell of disintegration and the dragon vaporizes in a pile of dust!";

/// A way of slaying a dragon.
///
/// Implementations are stateless: executing a strategy writes exactly one
/// line of narration to `out` and nothing else. The only failure is an I/O
/// error from the sink itself.
pub trait DragonSlayingStrategy {
    /// Narrate the finishing blow.
    fn execute(&self, out: &mut dyn Write) -> io::Result<()>;
}

/// Closures with the right call shape are strategies too.
impl<F> DragonSlayingStrategy for F
where
    F: Fn(&mut dyn Write) -> io::Result<()>,
{
    #[inline]
    fn execute(&self, out: &mut dyn Write) -> io::Result<()> {
        self(out)
    }
}

impl DragonSlayingStrategy for Box<dyn DragonSlayingStrategy> {
    #[inline]
    fn execute(&self, out: &mut dyn Write) -> io::Result<()> {
        (**self).execute(out)
    }
}

/// Pin a closure to the strategy call shape so its argument type is inferred.
///
/// ```
/// use std::io::Write;
/// use slayer_rules::{inline, DragonSlayer};
///
/// let slayer = DragonSlayer::new(inline(|out| writeln!(out, "A swift kick.")));
/// let mut out = Vec::new();
/// slayer.go_to_battle(&mut out).unwrap();
/// assert_eq!(out, b"A swift kick.\n");
/// ```
pub fn inline<F>(behavior: F) -> F
where
    F: Fn(&mut dyn Write) -> io::Result<()>,
{
    behavior
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_is_strategy() {
        let strategy = inline(|out| writeln!(out, "{}", SPELL_MESSAGE));
        let mut out = Vec::new();
        strategy.execute(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), format!("{SPELL_MESSAGE}\n"));
    }

    fn narrate<S: DragonSlayingStrategy>(strategy: S) -> String {
        let mut out = Vec::new();
        strategy.execute(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_boxed_strategy_is_strategy() {
        let boxed: Box<dyn DragonSlayingStrategy> = Box::new(MeleeStrategy);
        assert_eq!(narrate(boxed), format!("{MELEE_MESSAGE}\n"));

        let boxed: Box<dyn DragonSlayingStrategy> = Box::new(StrategyKind::Projectile);
        assert_eq!(narrate(boxed), format!("{PROJECTILE_MESSAGE}\n"));
    }

    #[test]
    fn test_messages_are_distinct() {
        assert_ne!(MELEE_MESSAGE, PROJECTILE_MESSAGE);
        assert_ne!(PROJECTILE_MESSAGE, SPELL_MESSAGE);
        assert_ne!(MELEE_MESSAGE, SPELL_MESSAGE);
    }
}
