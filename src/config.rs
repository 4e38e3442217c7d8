use crate::error::ConfigError;
use tracing::warn;

/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    /// 目录文件（TOML），设置后优先于内置目录
    pub catalog_file: Option<String>,
    /// 内置目录名称
    pub builtin_catalog: String,
    /// 文档根：`http(s)://` 开头时走 HTTP，否则视为本地目录
    pub docs_base: String,
    /// 输出的 HTML 页面
    pub output_html: String,
    /// HTTP 请求超时（秒）
    pub fetch_timeout_secs: u64,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 是否把事件以 JSON 行输出到标准输出
    pub events_json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_file: None,
            builtin_catalog: "javascript".to_string(),
            docs_base: ".".to_string(),
            output_html: "navigator.html".to_string(),
            fetch_timeout_secs: 30,
            verbose_logging: false,
            events_json: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            catalog_file: std::env::var("CATALOG_FILE").ok().filter(|v| !v.is_empty()),
            builtin_catalog: std::env::var("BUILTIN_CATALOG").unwrap_or(default.builtin_catalog),
            docs_base: std::env::var("DOCS_BASE").unwrap_or(default.docs_base),
            output_html: std::env::var("OUTPUT_HTML").unwrap_or(default.output_html),
            fetch_timeout_secs: parse_env("FETCH_TIMEOUT_SECS").unwrap_or(default.fetch_timeout_secs),
            verbose_logging: parse_env("VERBOSE_LOGGING").unwrap_or(default.verbose_logging),
            events_json: parse_env("EVENTS_JSON").unwrap_or(default.events_json),
        }
    }

    /// 检查必填项
    pub fn validate(&self) -> Result<(), ConfigError> {
        let required = [
            ("DOCS_BASE", &self.docs_base),
            ("OUTPUT_HTML", &self.output_html),
        ];
        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(ConfigError::MissingValue {
                    name: name.to_string(),
                });
            }
        }
        if self.catalog_file.is_none() && self.builtin_catalog.trim().is_empty() {
            return Err(ConfigError::MissingValue {
                name: "BUILTIN_CATALOG".to_string(),
            });
        }
        Ok(())
    }

    /// 文档根是否为 HTTP 地址
    pub fn is_remote(&self) -> bool {
        self.docs_base.starts_with("http://") || self.docs_base.starts_with("https://")
    }
}

/// 读取并解析环境变量，解析失败时记录警告并返回 None
fn parse_env<T: std::str::FromStr>(var_name: &str) -> Option<T> {
    let value = std::env::var(var_name).ok()?;
    match value.parse() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            let err = ConfigError::EnvVarParseFailed {
                var_name: var_name.to_string(),
                value,
                expected_type: std::any::type_name::<T>().to_string(),
            };
            warn!("{}，使用默认值", err);
            None
        }
    }
}
