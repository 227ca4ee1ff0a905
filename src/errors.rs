use std::fmt;

#[derive(Debug, Clone)]
pub enum FlowError {
    FileOperation(String),
    Serialization(String),
    Validation(String),
    NotFound(String),
    Upload(String),
    Config(String),
}

impl FlowError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            FlowError::FileOperation(_) => "E001",
            FlowError::Serialization(_) => "E002",
            FlowError::Validation(_) => "E003",
            FlowError::NotFound(_) => "E004",
            FlowError::Upload(_) => "E005",
            FlowError::Config(_) => "E006",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            FlowError::FileOperation(_) => "File Operation Error",
            FlowError::Serialization(_) => "Serialization Error",
            FlowError::Validation(_) => "Validation Error",
            FlowError::NotFound(_) => "Resource Not Found",
            FlowError::Upload(_) => "Media Upload Error",
            FlowError::Config(_) => "Configuration Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            FlowError::FileOperation(msg) => msg,
            FlowError::Serialization(msg) => msg,
            FlowError::Validation(msg) => msg,
            FlowError::NotFound(msg) => msg,
            FlowError::Upload(msg) => msg,
            FlowError::Config(msg) => msg,
        }
    }

    /// 格式化为彩色输出（用于 CLI 模式）
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    /// 格式化为简洁输出（用于 TUI 状态栏）
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for FlowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for FlowError {}

// 便捷的构造函数
impl FlowError {
    pub fn file_operation<T: Into<String>>(msg: T) -> Self {
        FlowError::FileOperation(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        FlowError::Serialization(msg.into())
    }

    pub fn validation<T: Into<String>>(msg: T) -> Self {
        FlowError::Validation(msg.into())
    }

    pub fn not_found<T: Into<String>>(msg: T) -> Self {
        FlowError::NotFound(msg.into())
    }

    pub fn upload<T: Into<String>>(msg: T) -> Self {
        FlowError::Upload(msg.into())
    }

    pub fn config<T: Into<String>>(msg: T) -> Self {
        FlowError::Config(msg.into())
    }
}

impl From<std::io::Error> for FlowError {
    fn from(err: std::io::Error) -> Self {
        FlowError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for FlowError {
    fn from(err: serde_json::Error) -> Self {
        FlowError::Serialization(err.to_string())
    }
}

impl From<toml::ser::Error> for FlowError {
    fn from(err: toml::ser::Error) -> Self {
        FlowError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, FlowError>;
