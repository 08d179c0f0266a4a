// Scenario: a scripted sequence of forests to plant, loaded from TOML.
//
// Each phase gets a fresh factory (optionally preloaded) and one forest on top
// of it. The forest is dropped before its factory when the phase ends.

use crate::factory::TreeTypeFactory;
use crate::forest::Forest;
use crate::stats::CacheStats;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

const BUILTIN: &str = include_str!("scenarios/default.toml");

#[derive(Error, Debug)]
pub enum ScenarioError {
    #[error("Failed to parse scenario: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Scenario defines no phases")]
    NoPhases,

    #[error("Phase #{index} has an empty name")]
    EmptyPhaseName { index: usize },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TreeSpec {
    pub location: i32,
    pub age: i32,
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Phase {
    pub name: String,
    #[serde(default)]
    pub preload: Vec<String>,
    #[serde(default)]
    pub trees: Vec<TreeSpec>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Scenario {
    pub phases: Vec<Phase>,
}

/// What a single phase left behind, captured just before teardown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhaseReport {
    pub name: String,
    pub forest_size: usize,
    pub cache_size: usize,
    pub type_names: Vec<String>,
    pub stats: CacheStats,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioReport {
    pub phases: Vec<PhaseReport>,
}

impl Scenario {
    /// The two-phase demonstration shipped with the crate.
    pub fn builtin() -> Result<Self, ScenarioError> {
        Self::from_toml_str(BUILTIN)
    }

    pub fn from_toml_str(source: &str) -> Result<Self, ScenarioError> {
        let scenario: Scenario = toml::from_str(source)?;
        scenario.validate()?;
        Ok(scenario)
    }

    fn validate(&self) -> Result<(), ScenarioError> {
        if self.phases.is_empty() {
            return Err(ScenarioError::NoPhases);
        }
        if let Some(index) = self.phases.iter().position(|p| p.name.trim().is_empty()) {
            return Err(ScenarioError::EmptyPhaseName { index });
        }
        Ok(())
    }

    pub fn run(&self) -> ScenarioReport {
        let phases = self.phases.iter().map(Phase::run).collect();
        ScenarioReport { phases }
    }
}

impl Phase {
    fn run(&self) -> PhaseReport {
        info!("phase '{}'", self.name);
        let factory = if self.preload.is_empty() {
            TreeTypeFactory::new()
        } else {
            TreeTypeFactory::with_types(&self.preload)
        };

        let mut forest = Forest::new(&factory);
        for spec in &self.trees {
            forest.add_tree(spec.location, spec.age, &spec.kind);
        }

        let report = PhaseReport {
            name: self.name.clone(),
            forest_size: forest.len(),
            cache_size: factory.len(),
            type_names: factory.type_names(),
            stats: factory.stats(),
        };

        drop(forest);
        drop(factory);
        report
    }
}
