use serde::{Deserialize, Serialize};

use crate::input::InputFormat;
use crate::rank::{Damping, DanglingPolicy, RankConfig, DEFAULT_EPSILON, DEFAULT_MAX_ITERATIONS};

/// `[rank]` table of `edgerank.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankSettings {
    #[serde(default = "default_epsilon")]
    pub epsilon: f64,
    /// 0 disables the cap.
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,
    /// Fixed damping; absent means `1 - 1/N`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub damping: Option<f64>,
    #[serde(default)]
    pub dangling: DanglingPolicy,
}

impl Default for RankSettings {
    fn default() -> Self {
        Self {
            epsilon: default_epsilon(),
            max_iterations: default_max_iterations(),
            damping: None,
            dangling: DanglingPolicy::default(),
        }
    }
}

impl RankSettings {
    /// Converts to the engine's config format.
    #[must_use]
    pub fn to_rank_config(&self) -> RankConfig {
        RankConfig {
            epsilon: self.epsilon,
            max_iterations: (self.max_iterations > 0).then_some(self.max_iterations),
            damping: Damping::from_option(self.damping),
            dangling: self.dangling,
        }
    }
}

/// `[output]` table of `edgerank.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputSettings {
    #[serde(default = "default_precision")]
    pub precision: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top: Option<usize>,
    #[serde(default)]
    pub format: InputFormat,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            precision: default_precision(),
            top: None,
            format: InputFormat::default(),
        }
    }
}

const fn default_epsilon() -> f64 { DEFAULT_EPSILON }
const fn default_max_iterations() -> usize { DEFAULT_MAX_ITERATIONS }
const fn default_precision() -> usize { 15 }

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub rank: RankSettings,
    #[serde(default)]
    pub output: OutputSettings,
}
