use crate::models::Tier;

/// 程序配置文件
#[derive(Clone, Debug, serde::Deserialize)]
#[serde(default)]
pub struct Config {
    /// 源文档路径
    pub source_path: String,
    /// 输出目录
    pub output_dir: String,
    /// 模型标识（传给 ollama run）
    pub model_name: String,
    /// 单个文本块的最大字符数
    pub chunk_size: usize,
    /// 单个文本块的最大生成尝试次数
    pub max_retries: u32,
    /// 单次生成的超时时间（秒）
    pub generation_timeout_secs: u64,
    /// 两次尝试之间的等待时间（秒）
    pub retry_backoff_secs: u64,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 输出日志文件
    pub output_log_file: String,
    /// 外部测评推荐的阅读层级（可选）
    pub recommended_tier: Option<Tier>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_path: "document.txt".to_string(),
            output_dir: "guides".to_string(),
            model_name: "llama3.2".to_string(),
            chunk_size: 3000,
            max_retries: 3,
            generation_timeout_secs: 120,
            retry_backoff_secs: 3,
            verbose_logging: false,
            output_log_file: "output.txt".to_string(),
            recommended_tier: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            source_path: std::env::var("SOURCE_PATH").unwrap_or(default.source_path),
            output_dir: std::env::var("OUTPUT_DIR").unwrap_or(default.output_dir),
            model_name: std::env::var("MODEL_NAME").unwrap_or(default.model_name),
            chunk_size: std::env::var("CHUNK_SIZE").ok().and_then(|v| v.parse().ok()).unwrap_or(default.chunk_size),
            max_retries: std::env::var("MAX_RETRIES").ok().and_then(|v| v.parse().ok()).unwrap_or(default.max_retries),
            generation_timeout_secs: std::env::var("GENERATION_TIMEOUT_SECS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.generation_timeout_secs),
            retry_backoff_secs: std::env::var("RETRY_BACKOFF_SECS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.retry_backoff_secs),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
            output_log_file: std::env::var("OUTPUT_LOG_FILE").unwrap_or(default.output_log_file),
            recommended_tier: std::env::var("RECOMMENDED_TIER").ok().and_then(|v| Tier::find(&v)),
        }
    }

    /// 从 TOML 配置文件加载（缺省字段取默认值）
    pub async fn from_toml_file(path: &std::path::Path) -> anyhow::Result<Self> {
        use anyhow::Context;

        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("无法读取配置文件: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("无法解析配置文件: {}", path.display()))?;

        Ok(config)
    }
}
