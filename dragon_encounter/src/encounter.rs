//! Running encounters against a dragon slayer.

use std::io::Write;
use tracing::info;

use slayer_rules::DragonSlayer;

use crate::error::{EncounterError, Result};
use crate::script::EncounterScript;
use crate::style::DispatchStyle;

/// Fight every stage of `script`, materializing strategies in `style`.
///
/// The slayer is created with the first stage's strategy and re-equipped for
/// each later stage. Each stage narrates its announcement, then the battle.
pub fn run_encounter(
    script: &EncounterScript,
    style: DispatchStyle,
    out: &mut dyn Write,
) -> Result<()> {
    info!(%style, stages = script.stages.len(), "starting encounter");

    let (first, rest) = script
        .stages
        .split_first()
        .ok_or(EncounterError::EmptyScript)?;

    writeln!(out, "{}", first.announcement)?;
    let mut slayer = DragonSlayer::new(style.strategy_for(first.strategy));
    slayer.go_to_battle(out)?;

    for stage in rest {
        writeln!(out, "{}", stage.announcement)?;
        slayer.change_strategy(style.strategy_for(stage.strategy));
        slayer.go_to_battle(out)?;
    }

    Ok(())
}

/// Replay the default script once per dispatch style.
pub fn run_demo(out: &mut dyn Write) -> Result<()> {
    let script = EncounterScript::default_script()?;
    for style in DispatchStyle::all() {
        run_encounter(&script, style, out)?;
    }
    Ok(())
}
