use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 文档获取错误
    #[error("文档获取错误: {0}")]
    Fetch(#[from] FetchError),
    /// Markdown 渲染错误
    #[error("渲染错误: {0}")]
    Render(#[from] RenderError),
    /// 目录错误
    #[error("目录错误: {0}")]
    Catalog(#[from] CatalogError),
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
}

impl AppError {
    /// 面向读者的简短说明，用于错误提示框
    pub fn summary(&self) -> String {
        match self {
            AppError::Fetch(e) => e.summary(),
            AppError::Render(e) => e.to_string(),
            other => other.to_string(),
        }
    }
}

/// 文档获取错误
#[derive(Debug, Error)]
pub enum FetchError {
    /// 网络请求失败
    #[error("请求失败 ({locator}): {source}")]
    RequestFailed {
        locator: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 服务器返回非成功状态
    #[error("服务器返回状态 {status} ({locator})")]
    BadStatus { locator: String, status: u16 },
    /// 请求超时
    #[error("请求超时 ({locator})")]
    Timeout { locator: String },
    /// 文档不存在
    #[error("文档不存在: {locator}")]
    NotFound { locator: String },
    /// 读取本地文件失败
    #[error("读取文件失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// 内容不是 UTF-8
    #[error("文档不是有效的 UTF-8: {locator}")]
    InvalidUtf8 { locator: String },
    /// 地址非法（绝对路径、`..` 或无法拼接的 URL）
    #[error("无效的文档地址: {locator}")]
    InvalidLocator { locator: String },
    /// HTTP 客户端初始化失败
    #[error("HTTP 客户端初始化失败: {source}")]
    ClientInit {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl FetchError {
    /// HTTP 状态码（如果有）
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::BadStatus { status, .. } => Some(*status),
            FetchError::NotFound { .. } => Some(404),
            _ => None,
        }
    }

    /// 与页面提示一致的简短说明
    pub fn summary(&self) -> String {
        match self {
            FetchError::BadStatus { status, .. } => {
                format!("Failed to load document: {}", status)
            }
            FetchError::NotFound { .. } => "Failed to load document: 404".to_string(),
            FetchError::Timeout { .. } => "Request timed out".to_string(),
            FetchError::RequestFailed { source, .. } => format!("Network error: {}", source),
            FetchError::ReadFailed { source, .. } => format!("Failed to read document: {}", source),
            FetchError::InvalidUtf8 { .. } => "Document is not valid UTF-8".to_string(),
            FetchError::InvalidLocator { locator } => format!("Invalid document path: {}", locator),
            FetchError::ClientInit { source } => format!("HTTP client unavailable: {}", source),
        }
    }
}

/// Markdown 渲染错误
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Markdown 渲染失败: {0}")]
    Markdown(String),
}

/// 目录错误
#[derive(Debug, Error)]
pub enum CatalogError {
    /// 读取目录文件失败
    #[error("读取目录文件失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// TOML 解析失败
    #[error("TOML解析失败 ({path}): {source}")]
    TomlParseFailed {
        path: String,
        #[source]
        source: toml::de::Error,
    },
    /// 题目正则非法
    #[error("分组 {group} 的题目正则非法: {source}")]
    InvalidPattern {
        group: String,
        #[source]
        source: regex::Error,
    },
    /// 未知的内置目录
    #[error("未知的内置目录: {name}")]
    UnknownBuiltin { name: String },
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 环境变量解析失败
    #[error("环境变量 {var_name} 解析失败: 值 '{value}' 无法转换为 {expected_type}")]
    EnvVarParseFailed {
        var_name: String,
        value: String,
        expected_type: String,
    },
    /// 必填项为空
    #[error("配置项 {name} 不能为空")]
    MissingValue { name: String },
}

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
