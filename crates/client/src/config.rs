//! Client configuration loaded from the process environment.
use std::env;
use std::path::PathBuf;

use runtime::RuntimeConfig;

/// Settings for one run of the terminal client.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Seed for deterministic replay; unset plays with system entropy.
    pub seed: Option<u64>,
    pub session_id: Option<String>,
    pub log_dir: Option<PathBuf>,
    /// Style outcome lines and the stats table.
    pub color: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            seed: None,
            session_id: None,
            log_dir: None,
            color: true,
        }
    }
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `BATTLE_SEED` - u64 seed for a replayable battle (default: entropy)
    /// - `GAME_SESSION_ID` - Session identifier for the log directory (default: timestamp)
    /// - `BATTLE_LOG_DIR` - Directory for log files (default: platform cache dir)
    /// - `BATTLE_COLOR` - Colored output (default: true)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        config.seed = read_var(&lookup, "BATTLE_SEED");
        config.session_id = lookup("GAME_SESSION_ID").filter(|id| !id.trim().is_empty());
        config.log_dir = lookup("BATTLE_LOG_DIR").map(PathBuf::from);

        if let Some(color) = read_var::<bool>(&lookup, "BATTLE_COLOR") {
            config.color = color;
        }

        config
    }

    pub fn runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            seed: self.seed,
            ..RuntimeConfig::default()
        }
    }
}

fn read_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    lookup(key)?.trim().parse().ok()
}
