//! 文本生成服务 - 业务能力层
//!
//! 在单次调用能力（ModelRunner）之上负责重试、退避和兜底；
//! 只处理单个提示词，不认识块序号和层级，不关心流程顺序

use crate::infrastructure::ModelRunner;
use std::time::Duration;
use tracing::{debug, warn};

/// 生成失败的哨兵文本
///
/// 与任何真实生成内容可区分；聚合端据此剔除失败块
pub const GENERATION_FAILED: &str = "Failed to generate explanation after multiple attempts.";

/// 判断一段文本是否为失败哨兵
pub fn is_failure(text: &str) -> bool {
    text == GENERATION_FAILED
}

/// 文本生成服务
///
/// 职责：
/// - 对一个提示词最多尝试 max_retries 次
/// - 两次尝试之间等待固定退避时间（最后一次之后不等待）
/// - 所有尝试失败后返回哨兵文本而不是错误：
///   单个块的失败不能中断其他块和其他层级的生成
pub struct GenerationService<R: ModelRunner> {
    runner: R,
    max_retries: u32,
    backoff: Duration,
}

impl<R: ModelRunner> GenerationService<R> {
    /// 创建新的生成服务
    pub fn new(runner: R, max_retries: u32, backoff: Duration) -> Self {
        Self {
            runner,
            max_retries,
            backoff,
        }
    }

    /// 对一个提示词执行生成，返回生成文本或失败哨兵
    pub async fn generate(&self, prompt: &str) -> String {
        for attempt in 1..=self.max_retries {
            match self.runner.run_once(prompt).await {
                Ok(text) => {
                    debug!("第 {}/{} 次尝试成功", attempt, self.max_retries);
                    return text;
                }
                Err(e) => {
                    warn!("第 {}/{} 次尝试失败: {}", attempt, self.max_retries, e);
                }
            }

            if attempt < self.max_retries {
                debug!("等待 {:?} 后重试", self.backoff);
                tokio::time::sleep(self.backoff).await;
            }
        }

        warn!("已达最大尝试次数 ({})，放弃本次生成", self.max_retries);
        GENERATION_FAILED.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GenerationError;
    use std::sync::atomic::{AtomicU32, Ordering};

    /// 先失败 fail_times 次、之后成功的测试替身
    struct FlakyRunner {
        fail_times: u32,
        calls: AtomicU32,
    }

    impl FlakyRunner {
        fn new(fail_times: u32) -> Self {
            Self {
                fail_times,
                calls: AtomicU32::new(0),
            }
        }

        fn call_count(&self) -> u32 {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl ModelRunner for FlakyRunner {
        async fn run_once(&self, _prompt: &str) -> Result<String, GenerationError> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
            if call <= self.fail_times {
                Err(GenerationError::ModelFailed {
                    code: Some(1),
                    stderr: format!("simulated failure {}", call),
                })
            } else {
                Ok("generated text".to_string())
            }
        }
    }

    #[tokio::test]
    async fn test_succeeds_after_retries() {
        // 失败 2 次后成功，max_retries = 3 时应拿到成功输出
        let runner = FlakyRunner::new(2);
        let service = GenerationService::new(runner, 3, Duration::from_millis(0));

        let result = service.generate("prompt").await;

        assert_eq!(result, "generated text");
        assert_eq!(service.runner.call_count(), 3);
    }

    #[tokio::test]
    async fn test_exhausted_retries_return_sentinel() {
        // 失败 2 次后才会成功，但 max_retries = 2，只允许 2 次尝试
        let runner = FlakyRunner::new(2);
        let service = GenerationService::new(runner, 2, Duration::from_millis(0));

        let result = service.generate("prompt").await;

        assert!(is_failure(&result));
        assert_eq!(service.runner.call_count(), 2);
    }

    #[tokio::test]
    async fn test_backoff_waits_between_attempts() {
        // 3 次尝试有 2 个退避间隔，耗时下界是 2 * backoff
        let runner = FlakyRunner::new(3);
        let service = GenerationService::new(runner, 3, Duration::from_millis(30));

        let started = std::time::Instant::now();
        let result = service.generate("prompt").await;

        assert!(is_failure(&result));
        assert!(started.elapsed() >= Duration::from_millis(60));
    }

    #[tokio::test]
    async fn test_zero_retries_never_invokes_runner() {
        let runner = FlakyRunner::new(0);
        let service = GenerationService::new(runner, 0, Duration::from_millis(0));

        let result = service.generate("prompt").await;

        assert!(is_failure(&result));
        assert_eq!(service.runner.call_count(), 0);
    }

    #[test]
    fn test_sentinel_recognition() {
        assert!(is_failure(GENERATION_FAILED));
        assert!(!is_failure("ordinary text"));
        assert!(!is_failure(""));
    }
}
