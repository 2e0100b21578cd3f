use serde::Deserialize;

/// Top-level configuration settings for a node.
#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub node: NodeSettings,
    pub cluster: ClusterSettings,
    pub logging: LogSettings,
}

/// Identity of this node. `contract` is the tenant the node reports under
/// in its logs; subscription ids take their contract from each request.
#[derive(Debug, Deserialize, Clone)]
pub struct NodeSettings {
    pub name: String,
    pub contract: u32,
}

/// Controls how often the subscription snapshot is handed to replication.
#[derive(Debug, Deserialize, Clone)]
pub struct ClusterSettings {
    pub snapshot_interval_ms: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LogSettings {
    pub level: String,
}

/// Partial configuration settings loaded from files or environment.
///
/// Missing values are filled from `Settings::default()`.
#[derive(Debug, Deserialize)]
pub struct PartialSettings {
    pub node: Option<PartialNodeSettings>,
    pub cluster: Option<PartialClusterSettings>,
    pub logging: Option<PartialLogSettings>,
}

#[derive(Debug, Deserialize)]
pub struct PartialNodeSettings {
    pub name: Option<String>,
    pub contract: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct PartialClusterSettings {
    pub snapshot_interval_ms: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub struct PartialLogSettings {
    pub level: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            node: NodeSettings {
                name: "local".to_string(),
                contract: 1,
            },
            cluster: ClusterSettings {
                snapshot_interval_ms: 1000,
            },
            logging: LogSettings {
                level: "info".to_string(),
            },
        }
    }
}
