use serde::Deserialize;
use std::fs;
use std::path::Path;

use anyhow::Context;
use tour_concurrency::DemoTimings;
use tour_exercises::ExerciseConfig;
use tour_runtime::RuntimeConfig;

/// Contents of a `--config` file. Every section and key is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TourConfig {
    pub runtime: RuntimeConfig,
    pub timings: DemoTimings,
    pub exercises: ExerciseConfig,
}

impl TourConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("invalid config {}", path.display()))?;
        Ok(config)
    }

    /// Defaults when no file is given.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }
}
