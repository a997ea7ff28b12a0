use std::fmt;

/// 应用程序错误类型
#[derive(Debug)]
pub enum AppError {
    /// 文档提取错误
    Extraction(ExtractionError),
    /// 文本生成错误
    Generation(GenerationError),
    /// 文档渲染错误
    Render(RenderError),
    /// 配置错误
    Config(ConfigError),
    /// 其他错误（用于包装第三方库错误）
    Other(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Extraction(e) => write!(f, "提取错误: {}", e),
            AppError::Generation(e) => write!(f, "生成错误: {}", e),
            AppError::Render(e) => write!(f, "渲染错误: {}", e),
            AppError::Config(e) => write!(f, "配置错误: {}", e),
            AppError::Other(msg) => write!(f, "错误: {}", msg),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Extraction(e) => Some(e),
            AppError::Generation(e) => Some(e),
            AppError::Render(e) => Some(e),
            AppError::Config(e) => Some(e),
            AppError::Other(_) => None,
        }
    }
}

/// 文档提取错误
///
/// 源文档不可用属于致命错误，直接终止整次运行
#[derive(Debug)]
pub enum ExtractionError {
    /// 源文件不存在
    NotFound {
        path: String,
    },
    /// 读取源文件失败
    ReadFailed {
        path: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl fmt::Display for ExtractionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractionError::NotFound { path } => write!(f, "源文件不存在: {}", path),
            ExtractionError::ReadFailed { path, source } => {
                write!(f, "读取源文件失败 ({}): {}", path, source)
            }
        }
    }
}

impl std::error::Error for ExtractionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExtractionError::ReadFailed { source, .. } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
            _ => None,
        }
    }
}

/// 文本生成错误
///
/// 描述单次模型进程调用的失败原因；重试和兜底由 GenerationService 负责
#[derive(Debug)]
pub enum GenerationError {
    /// 无法启动模型进程
    SpawnFailed {
        command: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 模型进程以非零状态退出
    ModelFailed {
        code: Option<i32>,
        stderr: String,
    },
    /// 等待模型进程输出失败
    WaitFailed {
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 模型进程超时（进程已被强制结束）
    Timeout {
        limit_secs: u64,
    },
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerationError::SpawnFailed { command, source } => {
                write!(f, "无法启动模型进程 ({}): {}", command, source)
            }
            GenerationError::ModelFailed { code, stderr } => {
                write!(f, "模型进程退出异常 (状态码: {:?}): {}", code, stderr)
            }
            GenerationError::WaitFailed { source } => {
                write!(f, "等待模型进程失败: {}", source)
            }
            GenerationError::Timeout { limit_secs } => {
                write!(f, "模型进程超时 (限制: {}秒)", limit_secs)
            }
        }
    }
}

impl std::error::Error for GenerationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GenerationError::SpawnFailed { source, .. }
            | GenerationError::WaitFailed { source } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
            _ => None,
        }
    }
}

/// 文档渲染错误
///
/// 只影响单个层级的输出文档，不终止整次运行
#[derive(Debug)]
pub enum RenderError {
    /// 创建输出目录失败
    CreateDirFailed {
        path: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 写入输出文件失败
    WriteFailed {
        path: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::CreateDirFailed { path, source } => {
                write!(f, "创建输出目录失败 ({}): {}", path, source)
            }
            RenderError::WriteFailed { path, source } => {
                write!(f, "写入输出文件失败 ({}): {}", path, source)
            }
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::CreateDirFailed { source, .. }
            | RenderError::WriteFailed { source, .. } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
        }
    }
}

/// 配置错误
#[derive(Debug)]
pub enum ConfigError {
    /// 环境变量解析失败
    EnvVarParseFailed {
        var_name: String,
        value: String,
        expected_type: String,
    },
    /// 配置文件解析失败
    FileParseFailed {
        path: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EnvVarParseFailed {
                var_name,
                value,
                expected_type,
            } => {
                write!(
                    f,
                    "环境变量 {} 解析失败: 值 '{}' 无法转换为 {}",
                    var_name, value, expected_type
                )
            }
            ConfigError::FileParseFailed { path, source } => {
                write!(f, "配置文件解析失败 ({}): {}", path, source)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::FileParseFailed { source, .. } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
            _ => None,
        }
    }
}

// ========== 从常见错误类型转换 ==========
// 注意：不需要手动实现 From<AppError> for anyhow::Error，
// 因为 anyhow 已经为所有实现了 std::error::Error 的类型提供了自动实现

impl From<ExtractionError> for AppError {
    fn from(err: ExtractionError) -> Self {
        AppError::Extraction(err)
    }
}

impl From<GenerationError> for AppError {
    fn from(err: GenerationError) -> Self {
        AppError::Generation(err)
    }
}

impl From<RenderError> for AppError {
    fn from(err: RenderError) -> Self {
        AppError::Render(err)
    }
}

impl From<ConfigError> for AppError {
    fn from(err: ConfigError) -> Self {
        AppError::Config(err)
    }
}

impl From<toml::de::Error> for AppError {
    fn from(err: toml::de::Error) -> Self {
        AppError::Config(ConfigError::FileParseFailed {
            path: String::new(), // TOML错误通常不包含路径信息
            source: Box::new(err),
        })
    }
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建源文件读取错误
    pub fn extraction_failed(
        path: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::Extraction(ExtractionError::ReadFailed {
            path: path.into(),
            source: Box::new(source),
        })
    }

    /// 创建输出文件写入错误
    pub fn render_write_failed(
        path: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::Render(RenderError::WriteFailed {
            path: path.into(),
            source: Box::new(source),
        })
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
