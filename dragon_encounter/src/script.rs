//! Encounter scripts: which dragon shows up, and how it is dealt with.

use serde::{Deserialize, Serialize};
use slayer_rules::StrategyKind;

use crate::error::{EncounterError, Result};

/// The script every demonstration run uses.
pub const DEFAULT_SCRIPT: &str = include_str!("../assets/default_encounter.toml");

/// One dragon sighting and the strategy used against it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncounterStage {
    /// Narrated before the battle.
    pub announcement: String,
    pub strategy: StrategyKind,
}

impl EncounterStage {
    pub fn new(announcement: impl Into<String>, strategy: StrategyKind) -> Self {
        Self {
            announcement: announcement.into(),
            strategy,
        }
    }
}

/// An ordered, non-empty list of stages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncounterScript {
    pub stages: Vec<EncounterStage>,
}

impl EncounterScript {
    /// Build a script, rejecting an empty stage list.
    pub fn new(stages: Vec<EncounterStage>) -> Result<Self> {
        if stages.is_empty() {
            return Err(EncounterError::EmptyScript);
        }
        Ok(Self { stages })
    }

    /// Parse a script from TOML.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let script: EncounterScript = toml::from_str(source)?;
        Self::new(script.stages)
    }

    /// The embedded green/red/black dragon script.
    pub fn default_script() -> Result<Self> {
        Self::from_toml_str(DEFAULT_SCRIPT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_script() {
        let script = EncounterScript::default_script().unwrap();
        assert_eq!(
            script.stages,
            vec![
                EncounterStage::new("Green dragon spotted ahead!", StrategyKind::Melee),
                EncounterStage::new("Red dragon emerges.", StrategyKind::Projectile),
                EncounterStage::new("Black dragon lands before you.", StrategyKind::Spell),
            ]
        );
    }

    #[test]
    fn test_empty_script_rejected() {
        let err = EncounterScript::from_toml_str("stages = []").unwrap_err();
        assert!(matches!(err, EncounterError::EmptyScript));

        assert!(matches!(
            EncounterScript::new(Vec::new()),
            Err(EncounterError::EmptyScript)
        ));
    }

    #[test]
    fn test_unknown_strategy_rejected() {
        let source = r#"
            [[stages]]
            announcement = "A wyvern circles overhead."
            strategy = "catapult"
        "#;
        let err = EncounterScript::from_toml_str(source).unwrap_err();
        assert!(matches!(err, EncounterError::Parse(_)));
        assert!(err.to_string().contains("unknown strategy `catapult`"));
    }

    #[test]
    fn test_missing_stages_rejected() {
        let err = EncounterScript::from_toml_str("title = \"nothing here\"").unwrap_err();
        assert!(matches!(err, EncounterError::Parse(_)));
    }

    #[test]
    fn test_strategy_names_ignore_case() {
        let source = r#"
            [[stages]]
            announcement = "Green dragon spotted ahead!"
            strategy = "Melee"

            [[stages]]
            announcement = "Red dragon emerges."
            strategy = "PROJECTILE"
        "#;
        let script = EncounterScript::from_toml_str(source).unwrap();
        assert_eq!(script.stages[0].strategy, "Melee".parse::<StrategyKind>().unwrap());
        assert_eq!(script.stages[0].strategy, StrategyKind::Melee);
        assert_eq!(script.stages[1].strategy, StrategyKind::Projectile);
    }
}
