use std::sync::Arc;
use std::time::Duration;

use subledger::broker::SubscriptionCounters;
use subledger::cluster::run_snapshot_loop;
use subledger::config::load_config;
use subledger::utils::logging;
use tokio::sync::mpsc;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            logging::init("info");
            error!("Failed to load configuration: {e}");
            return;
        }
    };
    logging::init(&config.logging.level);

    let counters = Arc::new(SubscriptionCounters::new());
    let (tx, mut rx) = mpsc::channel(4);
    let every = Duration::from_millis(config.cluster.snapshot_interval_ms.max(1));

    tokio::spawn(run_snapshot_loop(counters, every, tx));
    info!(
        node = %config.node.name,
        contract = config.node.contract,
        "Node started, replicating every {every:?}"
    );

    loop {
        tokio::select! {
            snapshot = rx.recv() => match snapshot {
                Some(snapshot) => {
                    info!(subscriptions = snapshot.len(), taken_at = snapshot.taken_at, "snapshot ready");
                }
                None => {
                    error!("Snapshot loop exited unexpectedly.");
                    break;
                }
            },
            _ = tokio::signal::ctrl_c() => {
                info!("Shutdown signal received. Exiting gracefully.");
                break;
            }
        }
    }
}
