//! TOML-serializable configuration types.
//!
//! Every field is optional so partial files can be layered on top of each
//! other before being applied to [`EvalConfig`] defaults.

use serde::{Deserialize, Serialize};
use turncheck_eval::EvalConfig;

/// Root configuration structure for the turncheck.toml file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
#[non_exhaustive]
pub struct TurncheckConfig {
    /// Scoring configuration
    pub evaluation: Option<EvaluationToml>,
}

impl TurncheckConfig {
    /// Merge another config into this one (other takes precedence).
    pub fn merge(&mut self, other: TurncheckConfig) {
        if let Some(eval) = other.evaluation {
            match &mut self.evaluation {
                Some(existing) => existing.merge(eval),
                None => self.evaluation = Some(eval),
            }
        }
    }

    /// Check if this config is empty.
    pub fn is_empty(&self) -> bool {
        self.evaluation.is_none()
    }

    /// Apply the file settings onto the default [`EvalConfig`].
    pub fn to_eval_config(&self) -> EvalConfig {
        self.evaluation
            .as_ref()
            .map(EvaluationToml::to_eval_config)
            .unwrap_or_default()
    }
}

/// TOML-serializable `[evaluation]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
#[non_exhaustive]
pub struct EvaluationToml {
    /// Relevance below which a response is flagged
    pub hallucination_threshold: Option<f64>,

    /// USD per whitespace token for the cost proxy
    pub cost_per_token_usd: Option<f64>,
}

impl EvaluationToml {
    /// Merge another section into this one (other takes precedence for Some values).
    pub fn merge(&mut self, other: EvaluationToml) {
        if other.hallucination_threshold.is_some() {
            self.hallucination_threshold = other.hallucination_threshold;
        }
        if other.cost_per_token_usd.is_some() {
            self.cost_per_token_usd = other.cost_per_token_usd;
        }
    }

    /// Convert to EvalConfig, applying overrides to defaults.
    pub fn to_eval_config(&self) -> EvalConfig {
        let mut config = EvalConfig::default();

        if let Some(v) = self.hallucination_threshold {
            config = config.with_hallucination_threshold(v);
        }
        if let Some(v) = self.cost_per_token_usd {
            config = config.with_cost_per_token_usd(v);
        }

        config
    }
}
