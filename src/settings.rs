use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
    sync::RwLock,
};

const NO_DELAY_ENV: &str = "SENTIMENT_ENGINE_NO_DELAY";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EngineSettings {
    /// Suspend each operation for its simulated round-trip time
    pub simulate_latency: bool,
    pub default_page_size: usize,
    /// How many marker words the trend report lists
    pub marker_limit: usize,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            simulate_latency: true,
            default_page_size: 10,
            marker_limit: 5,
        }
    }
}

impl EngineSettings {
    /// Latency stays on unless the settings file or `SENTIMENT_ENGINE_NO_DELAY`
    /// turns it off.
    pub fn latency_enabled(&self) -> bool {
        self.latency_enabled_with(std::env::var(NO_DELAY_ENV).ok().as_deref())
    }

    fn latency_enabled_with(&self, no_delay: Option<&str>) -> bool {
        self.simulate_latency && !no_delay.is_some_and(requests_no_delay)
    }
}

fn requests_no_delay(value: &str) -> bool {
    let value = value.trim();
    value == "1" || value.eq_ignore_ascii_case("true")
}

pub struct SettingsStore {
    path: PathBuf,
    data: RwLock<EngineSettings>,
}

impl SettingsStore {
    pub fn new(path: PathBuf) -> Result<Self> {
        let data = if path.exists() {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read settings from {}", path.display()))?;
            serde_json::from_str(&contents).unwrap_or_else(|err| {
                log::warn!("Ignoring malformed settings at {}: {err}", path.display());
                EngineSettings::default()
            })
        } else {
            EngineSettings::default()
        };

        Ok(Self {
            path,
            data: RwLock::new(data),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn current(&self) -> EngineSettings {
        match self.data.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn update(&self, settings: EngineSettings) -> Result<()> {
        let mut guard = match self.data.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        *guard = settings;
        self.persist(&guard)
    }

    fn persist(&self, data: &EngineSettings) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let serialized = serde_json::to_string_pretty(data)?;
        fs::write(&self.path, serialized)
            .with_context(|| format!("Failed to write settings to {}", self.path.display()))
    }
}
