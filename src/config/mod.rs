mod settings;

use crate::config::settings::PartialSettings;
use crate::utils::Result;
use config::{Config, Environment, File};

pub use settings::{ClusterSettings, LogSettings, NodeSettings, Settings};

/// Prefix of environment overrides, e.g. `SUBLEDGER_CLUSTER__SNAPSHOT_INTERVAL_MS`.
const ENV_PREFIX: &str = "SUBLEDGER";

/// Loads `config/default` (if present) and environment overrides.
pub fn load_config() -> Result<Settings> {
    load_config_from("config/default")
}

/// Loads the configuration file at `path` (extension optional, file optional)
/// followed by environment variables, merged over default values.
pub fn load_config_from(path: &str) -> Result<Settings> {
    let builder = Config::builder()
        .add_source(File::with_name(path).required(false))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

    let config = builder.build()?;

    // Try to deserialize what is available
    let partial: PartialSettings = config.try_deserialize()?;

    Ok(merge(partial, Settings::default()))
}

fn merge(partial: PartialSettings, default: Settings) -> Settings {
    Settings {
        node: NodeSettings {
            name: partial
                .node
                .as_ref()
                .and_then(|n| n.name.clone())
                .unwrap_or(default.node.name),
            contract: partial
                .node
                .as_ref()
                .and_then(|n| n.contract)
                .unwrap_or(default.node.contract),
        },
        cluster: ClusterSettings {
            snapshot_interval_ms: partial
                .cluster
                .as_ref()
                .and_then(|c| c.snapshot_interval_ms)
                .unwrap_or(default.cluster.snapshot_interval_ms),
        },
        logging: LogSettings {
            level: partial
                .logging
                .as_ref()
                .and_then(|l| l.level.clone())
                .unwrap_or(default.logging.level),
        },
    }
}
