use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::errors::{FlowError, Result};
use crate::flow::StoreOptions;

/// 默认配置文件路径
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 环境变量前缀，例如 `CF__EDITOR__SELECT_ON_CREATE=false`
pub const ENV_PREFIX: &str = "CF";

/// 静态配置（从 TOML 加载，启动时使用）
///
/// - storage: flow 文件与存储后端
/// - editor: 编辑器行为开关
/// - media: 媒体上传限制
/// - logging: 日志配置
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct StaticConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub editor: EditorConfig,
    #[serde(default)]
    pub media: MediaConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl StaticConfig {
    /// 从 `config.toml` 和环境变量加载配置
    pub fn load() -> Self {
        Self::load_from(DEFAULT_CONFIG_PATH)
    }

    /// 从指定 TOML 文件和环境变量加载配置
    ///
    /// 优先级：ENV > 文件 > 默认值。文件不存在时忽略；解析失败时回退到默认值。
    pub fn load_from<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match Self::try_load_from(path) {
            Ok(config) => {
                if path.exists() {
                    eprintln!("[INFO] Configuration loaded from: {}", path.display());
                }
                config
            }
            Err(e) => {
                eprintln!("[ERROR] {}", e.message());
                Self::default()
            }
        }
    }

    /// Like [`StaticConfig::load_from`] but surfaces the failure
    pub fn try_load_from(path: &Path) -> Result<Self> {
        use config::{Config, Environment, File};

        let settings = Config::builder()
            .add_source(File::from(path).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| FlowError::config(format!("Failed to build config: {}", e)))?;

        let config: StaticConfig = settings
            .try_deserialize()
            .map_err(|e| FlowError::config(format!("Failed to deserialize config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        match self.storage.backend.as_str() {
            "file" | "memory" => {}
            other => {
                return Err(FlowError::config(format!(
                    "Unknown storage backend: {}. Supported: file, memory",
                    other
                )));
            }
        }
        match self.logging.format.as_str() {
            "text" | "json" => {}
            other => {
                return Err(FlowError::config(format!(
                    "Unknown log format: {}. Supported: text, json",
                    other
                )));
            }
        }
        if self.media.max_upload_bytes == 0 {
            return Err(FlowError::config("media.max_upload_bytes must be positive"));
        }
        Ok(())
    }

    /// 生成示例 TOML 配置文件
    pub fn generate_sample_config() -> String {
        toml::to_string_pretty(&Self::default())
            .unwrap_or_else(|e| format!("Error generating sample config: {}", e))
    }

    /// 保存配置到 TOML 文件
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)?;

        if let Some(parent) = path.as_ref().parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn store_options(&self) -> StoreOptions {
        StoreOptions {
            select_on_create: self.editor.select_on_create,
            reset_analytics_on_duplicate: self.editor.reset_analytics_on_duplicate,
        }
    }
}

/// 存储配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StorageConfig {
    /// `file` 或 `memory`
    #[serde(default = "default_storage_backend")]
    pub backend: String,
    #[serde(default = "default_flow_file")]
    pub flow_file: String,
}

/// 编辑器行为配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EditorConfig {
    #[serde(default = "default_true")]
    pub select_on_create: bool,
    #[serde(default = "default_true")]
    pub reset_analytics_on_duplicate: bool,
    #[serde(default = "default_max_delay_seconds")]
    pub max_delay_seconds: u32,
}

/// 媒体上传配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MediaConfig {
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: u64,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
    #[serde(default)]
    pub file: Option<String>,
    #[serde(default = "default_max_backups")]
    pub max_backups: u32,
    #[serde(default = "default_true")]
    pub enable_rotation: bool,
}

// ============================================================
// Default value functions
// ============================================================

fn default_storage_backend() -> String {
    "file".to_string()
}

fn default_flow_file() -> String {
    "flow.json".to_string()
}

fn default_true() -> bool {
    true
}

fn default_max_delay_seconds() -> u32 {
    crate::services::MAX_DELAY_SECONDS
}

fn default_max_upload_bytes() -> u64 {
    crate::services::media::DEFAULT_MAX_UPLOAD_BYTES
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

fn default_max_backups() -> u32 {
    5
}

// ============================================================
// Default implementations
// ============================================================

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: default_storage_backend(),
            flow_file: default_flow_file(),
        }
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            select_on_create: true,
            reset_analytics_on_duplicate: true,
            max_delay_seconds: default_max_delay_seconds(),
        }
    }
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            max_upload_bytes: default_max_upload_bytes(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: None,
            max_backups: default_max_backups(),
            enable_rotation: true,
        }
    }
}
