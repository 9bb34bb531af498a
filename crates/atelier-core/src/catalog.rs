//! Stage catalog: the fixed eight-stage breakdown of a project.
//!
//! Every project runs through the same eight stages. The catalog supplies
//! their display names and duration weights; names can be overridden through
//! the `stage_names` store while weights are fixed. The catalog is always an
//! explicit value passed into the engine so tests can substitute catalogs
//! freely.

use std::collections::HashMap;

use crate::{
    error::{PlanError, Result},
    models::StageDefinition,
};

/// Number of stages every project is divided into.
pub const STAGE_COUNT: u8 = 8;

/// Built-in stage names and duration weights, indexed by stage number.
///
/// Weights sum to 1.0 and express each stage's share of the total estimated
/// duration.
const DEFAULT_STAGES: [(&str, f64); STAGE_COUNT as usize] = [
    ("Site Survey", 0.03),
    ("Case Study", 0.05),
    ("Layout Staking", 0.03),
    ("Floor Plan", 0.10),
    ("Floor System Plan", 0.20),
    ("Elevation Framing", 0.15),
    ("Elevation Drawings", 0.32),
    ("Construction Drawings", 0.12),
];

/// An ordered, validated set of stage definitions.
#[derive(Debug, Clone, PartialEq)]
pub struct StageCatalog {
    stages: Vec<StageDefinition>,
}

impl StageCatalog {
    /// Builds the catalog from the built-in stage names and weights.
    pub fn builtin() -> Self {
        Self::with_names(&HashMap::new())
    }

    /// Builds the catalog with display-name overrides merged over the
    /// built-in names. Weights always come from the built-in table.
    pub fn with_names(overrides: &HashMap<u8, String>) -> Self {
        let stages = DEFAULT_STAGES
            .iter()
            .enumerate()
            .map(|(idx, (name, weight))| {
                let number = idx as u8 + 1;
                StageDefinition {
                    number,
                    name: overrides
                        .get(&number)
                        .cloned()
                        .unwrap_or_else(|| (*name).to_string()),
                    weight: *weight,
                }
            })
            .collect();
        Self { stages }
    }

    /// Builds a catalog from arbitrary stage definitions, validating them.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::InvalidCatalog` when the list is empty, a weight
    /// is negative or not finite, or the stage numbers are not exactly
    /// 1..=len each appearing once.
    pub fn from_stages(stages: Vec<StageDefinition>) -> Result<Self> {
        if stages.is_empty() {
            return Err(PlanError::invalid_catalog("catalog contains no stages"));
        }

        let mut seen = vec![false; stages.len()];
        for stage in &stages {
            if !stage.weight.is_finite() || stage.weight < 0.0 {
                return Err(PlanError::invalid_catalog(format!(
                    "stage {} has invalid weight {}",
                    stage.number, stage.weight
                )));
            }
            let idx = stage.number as usize;
            if idx == 0 || idx > stages.len() || seen[idx - 1] {
                return Err(PlanError::invalid_catalog(format!(
                    "stage numbers must be 1..={} each exactly once, got {}",
                    stages.len(),
                    stage.number
                )));
            }
            seen[idx - 1] = true;
        }

        let mut stages = stages;
        stages.sort_by_key(|s| s.number);
        Ok(Self { stages })
    }

    /// The stage definitions in ascending stage-number order.
    pub fn stages(&self) -> &[StageDefinition] {
        &self.stages
    }

    /// Number of stages in the catalog.
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Whether the catalog is empty. Valid catalogs never are.
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}

impl Default for StageCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_has_eight_stages_in_order() {
        let catalog = StageCatalog::builtin();
        assert_eq!(catalog.len(), 8);
        for (idx, stage) in catalog.stages().iter().enumerate() {
            assert_eq!(stage.number as usize, idx + 1);
        }
    }

    #[test]
    fn builtin_weights_sum_to_one() {
        let total: f64 = StageCatalog::builtin()
            .stages()
            .iter()
            .map(|s| s.weight)
            .sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn name_overrides_replace_defaults() {
        let mut overrides = HashMap::new();
        overrides.insert(1, "Measurement".to_string());
        let catalog = StageCatalog::with_names(&overrides);
        assert_eq!(catalog.stages()[0].name, "Measurement");
        assert_eq!(catalog.stages()[1].name, "Case Study");
        // Weights are never overridden
        assert!((catalog.stages()[0].weight - 0.03).abs() < 1e-12);
    }

    #[test]
    fn from_stages_rejects_empty() {
        let result = StageCatalog::from_stages(vec![]);
        assert!(matches!(result, Err(PlanError::InvalidCatalog { .. })));
    }

    #[test]
    fn from_stages_rejects_duplicate_numbers() {
        let stage = |number| StageDefinition {
            number,
            name: format!("Stage {number}"),
            weight: 0.5,
        };
        let result = StageCatalog::from_stages(vec![stage(1), stage(1)]);
        assert!(matches!(result, Err(PlanError::InvalidCatalog { .. })));
    }

    #[test]
    fn from_stages_rejects_negative_weight() {
        let result = StageCatalog::from_stages(vec![StageDefinition {
            number: 1,
            name: "Bad".to_string(),
            weight: -0.1,
        }]);
        assert!(matches!(result, Err(PlanError::InvalidCatalog { .. })));
    }

    #[test]
    fn from_stages_sorts_by_number() {
        let stage = |number, weight| StageDefinition {
            number,
            name: format!("Stage {number}"),
            weight,
        };
        let catalog =
            StageCatalog::from_stages(vec![stage(2, 0.5), stage(1, 0.5)]).expect("valid catalog");
        assert_eq!(catalog.stages()[0].number, 1);
        assert_eq!(catalog.stages()[1].number, 2);
    }
}
