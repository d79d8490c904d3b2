//! The dragon slayer - the context that wields a strategy.

use std::io::Write;
use tracing::debug;

use crate::error::Result;
use crate::strategies::DragonSlayingStrategy;

/// A hero who fights dragons with whichever strategy is currently equipped.
///
/// The slayer always holds exactly one strategy; it can only be replaced,
/// never removed.
pub struct DragonSlayer {
    strategy: Box<dyn DragonSlayingStrategy>,
}

impl DragonSlayer {
    /// Create a slayer equipped with the given strategy.
    pub fn new(strategy: impl DragonSlayingStrategy + 'static) -> Self {
        Self {
            strategy: Box::new(strategy),
        }
    }

    /// Replace the current strategy. Takes effect on the next battle.
    pub fn change_strategy(&mut self, strategy: impl DragonSlayingStrategy + 'static) {
        debug!("dragon slayer changed strategy");
        self.strategy = Box::new(strategy);
    }

    /// Fight using the current strategy, narrating to `out`.
    pub fn go_to_battle(&self, out: &mut dyn Write) -> Result<()> {
        debug!("dragon slayer goes to battle");
        self.strategy.execute(out)?;
        Ok(())
    }
}

impl std::fmt::Debug for DragonSlayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DragonSlayer").finish_non_exhaustive()
    }
}
