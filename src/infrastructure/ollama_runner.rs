//! 模型进程执行器 - 基础设施层
//!
//! 唯一会启动外部进程的模块，只暴露"单次生成"的能力

use crate::error::GenerationError;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tracing::{debug, warn};

/// 单次模型调用能力
///
/// 一次调用对应一次外部进程的完整生命周期；
/// 重试、退避、兜底都不在这一层，由 GenerationService 负责，
/// 因此测试可以用确定性的替身实现替换真实进程
pub trait ModelRunner {
    /// 执行一次生成尝试，成功时返回去除首尾空白的输出文本
    fn run_once(
        &self,
        prompt: &str,
    ) -> impl std::future::Future<Output = Result<String, GenerationError>> + Send;
}

/// Ollama 模型执行器
///
/// 职责：
/// - 以 `ollama run <model> <prompt>` 方式启动模型进程
/// - 限制单次调用的等待时间
/// - 超时后强制结束进程，保证不泄漏子进程
/// - 不认识 Tier / Category
/// - 不处理重试流程
pub struct OllamaRunner {
    model_name: String,
    timeout: Duration,
}

impl OllamaRunner {
    /// 创建新的模型执行器
    pub fn new(model_name: impl Into<String>, timeout: Duration) -> Self {
        Self {
            model_name: model_name.into(),
            timeout,
        }
    }

    /// 获取模型标识
    pub fn model_name(&self) -> &str {
        &self.model_name
    }
}

impl ModelRunner for OllamaRunner {
    async fn run_once(&self, prompt: &str) -> Result<String, GenerationError> {
        debug!(
            "启动模型进程: ollama run {} (提示词长度: {} 字符)",
            self.model_name,
            prompt.chars().count()
        );

        // kill_on_drop 保证任何一条退出路径（包括超时丢弃句柄）都会结束子进程
        let child = Command::new("ollama")
            .arg("run")
            .arg(&self.model_name)
            .arg(prompt)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| GenerationError::SpawnFailed {
                command: format!("ollama run {}", self.model_name),
                source: Box::new(e),
            })?;

        let output = match tokio::time::timeout(self.timeout, child.wait_with_output()).await {
            Ok(Ok(output)) => output,
            Ok(Err(e)) => {
                return Err(GenerationError::WaitFailed {
                    source: Box::new(e),
                });
            }
            Err(_) => {
                warn!("模型进程超时 ({}秒)，已强制结束", self.timeout.as_secs());
                return Err(GenerationError::Timeout {
                    limit_secs: self.timeout.as_secs(),
                });
            }
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            warn!(
                "模型进程退出异常 (状态码: {:?}): {}",
                output.status.code(),
                stderr
            );
            return Err(GenerationError::ModelFailed {
                code: output.status.code(),
                stderr,
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
        debug!("模型进程完成 (输出长度: {} 字符)", stdout.chars().count());

        Ok(stdout)
    }
}
