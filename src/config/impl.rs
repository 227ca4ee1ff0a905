use std::sync::{Arc, OnceLock};

use arc_swap::ArcSwap;

use super::StaticConfig;

static CONFIG: OnceLock<ArcSwap<StaticConfig>> = OnceLock::new();

/// Get the global configuration instance
///
/// Defaults until `update_config` is called.
pub fn get_config() -> Arc<StaticConfig> {
    CONFIG
        .get_or_init(|| ArcSwap::from_pointee(StaticConfig::default()))
        .load_full()
}

/// Swap in a new configuration and return it
pub fn update_config(config: StaticConfig) -> Arc<StaticConfig> {
    let config = Arc::new(config);
    match CONFIG.get() {
        Some(current) => current.store(config.clone()),
        None => {
            let slot = CONFIG.get_or_init(|| ArcSwap::new(config.clone()));
            slot.store(config.clone());
        }
    }
    config
}
