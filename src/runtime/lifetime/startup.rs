//! Startup: configuration, logging and the flow repository

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{debug, info};
use tracing_appender::non_blocking::WorkerGuard;

use crate::config::{DEFAULT_CONFIG_PATH, StaticConfig, update_config};
use crate::repository::{FlowRepository, RepositoryFactory};
use crate::system::logging::init_logging;

/// 配置通过 `get_config()` 读取
pub struct StartupContext {
    pub repository: Box<dyn FlowRepository>,
    /// 必须持有到进程退出，否则文件日志会丢失尾部
    pub log_guard: WorkerGuard,
}

/// `--flow` 覆盖 `storage.flow_file`
pub fn apply_flow_override(
    mut config: StaticConfig,
    flow_override: Option<PathBuf>,
) -> StaticConfig {
    if let Some(flow_file) = flow_override {
        config.storage.flow_file = flow_file.to_string_lossy().into_owned();
    }
    config
}

/// 加载配置并应用命令行覆盖
pub fn load_config(
    config_path: Option<&Path>,
    flow_override: Option<PathBuf>,
) -> Arc<StaticConfig> {
    let path = config_path.unwrap_or(Path::new(DEFAULT_CONFIG_PATH));
    update_config(apply_flow_override(StaticConfig::load_from(path), flow_override))
}

/// CLI / TUI 共用的启动流程
pub fn prepare_startup(
    config_path: Option<&Path>,
    flow_override: Option<PathBuf>,
    tui_mode: bool,
) -> Result<StartupContext> {
    let config = load_config(config_path, flow_override);
    config.validate().context("Invalid configuration")?;

    let log_guard =
        init_logging(&config.logging, tui_mode).context("Failed to initialize logging")?;
    debug!("Configuration loaded: {:?}", config);

    let repository =
        RepositoryFactory::create(&config).context("Failed to create flow repository")?;
    info!("Using flow repository: {}", repository.describe());

    Ok(StartupContext {
        repository,
        log_guard,
    })
}
