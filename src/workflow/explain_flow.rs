//! 讲解生成流程 - 流程层
//!
//! 核心职责：定义"一份正文"到"三个层级讲解"的完整处理流程
//!
//! 流程顺序：
//! 1. 正文按固定宽度切块（一次切分，三个层级共用）
//! 2. 逐层级、逐块调用生成服务
//! 3. 剔除失败块，按原块顺序拼接成该层级的讲解

use crate::config::Config;
use crate::infrastructure::{ModelRunner, OllamaRunner};
use crate::models::Tier;
use crate::services::generation_service::{self, GenerationService};
use crate::services::TierPrompts;
use crate::utils::logging::truncate_text;
use crate::workflow::explain_ctx::ExplainCtx;
use std::time::Duration;
use tracing::{debug, info, warn};

/// 某个层级全部块都失败时的兜底讲解文本
pub const NO_EXPLANATION: &str = "No explanation generated.";

/// 把正文切分为固定宽度的块
///
/// 按字符（Unicode 标量值）计数，保证不会切开 UTF-8 编码单元；
/// 不感知词边界和句边界，可能从词中间切开。
/// 所有块按序拼接可以原样还原正文，除最后一块外每块恰好 chunk_size 字符
pub fn split_chunks(text: &str, chunk_size: usize) -> Vec<String> {
    if chunk_size == 0 || text.is_empty() {
        return Vec::new();
    }

    let chars: Vec<char> = text.chars().collect();
    chars
        .chunks(chunk_size)
        .map(|chunk| chunk.iter().collect())
        .collect()
}

/// 讲解生成流程
///
/// 职责：
/// - 编排 层级 × 块 的顺序生成（一次一块，一次一个层级）
/// - 剔除哨兵结果，保持块顺序聚合
/// - 不持有进程资源
/// - 不做重试，失败处理完全委托给 GenerationService
pub struct ExplainFlow<R: ModelRunner> {
    generation: GenerationService<R>,
    chunk_size: usize,
    verbose_logging: bool,
}

impl ExplainFlow<OllamaRunner> {
    /// 创建基于本机 ollama 的讲解流程
    pub fn new(config: &Config) -> Self {
        let runner = OllamaRunner::new(
            config.model_name.as_str(),
            Duration::from_secs(config.generation_timeout_secs),
        );
        Self::with_runner(config, runner)
    }
}

impl<R: ModelRunner> ExplainFlow<R> {
    /// 使用自定义执行器创建（测试时注入确定性替身）
    pub fn with_runner(config: &Config, runner: R) -> Self {
        Self {
            generation: GenerationService::new(
                runner,
                config.max_retries,
                Duration::from_secs(config.retry_backoff_secs),
            ),
            chunk_size: config.chunk_size,
            verbose_logging: config.verbose_logging,
        }
    }

    /// 为全部层级生成讲解
    ///
    /// 返回 (层级, 讲解文本) 列表，顺序与 Tier::ALL 一致
    pub async fn explain_document(
        &self,
        text: &str,
        prompts: &TierPrompts,
    ) -> Vec<(Tier, String)> {
        let chunks = split_chunks(text, self.chunk_size);
        info!(
            "✂️ 正文已切分为 {} 块 (每块至多 {} 字符)",
            chunks.len(),
            self.chunk_size
        );

        let mut explanations = Vec::with_capacity(Tier::ALL.len());
        for tier in Tier::ALL {
            let explanation = self.explain_tier(&chunks, prompts.get(tier), tier).await;
            explanations.push((tier, explanation));
        }

        explanations
    }

    /// 为单个层级生成讲解
    ///
    /// 失败块只被剔除，不会中断剩余块的生成；
    /// 没有任何块成功（或块数为零）时返回兜底文本
    pub async fn explain_tier(&self, chunks: &[String], prefix: &str, tier: Tier) -> String {
        info!("🧠 开始生成 {} 层级讲解...", tier);

        let mut parts: Vec<String> = Vec::new();

        for (index, chunk) in chunks.iter().enumerate() {
            let ctx = ExplainCtx::new(tier, index + 1, chunks.len());

            if self.verbose_logging {
                debug!("{} 块预览: {}", ctx, truncate_text(chunk, 80));
            }

            let prompt = format!("{}\n\n{}", prefix, chunk);
            let result = self.generation.generate(&prompt).await;

            if generation_service::is_failure(&result) {
                warn!("{} ⚠️ 生成失败，剔除该块", ctx);
                continue;
            }

            info!("{} ✓ 生成完成", ctx);
            parts.push(result);
        }

        if parts.is_empty() {
            warn!("层级 {} 没有任何成功的块，使用兜底文本", tier);
            NO_EXPLANATION.to_string()
        } else {
            parts.join("\n\n")
        }
    }
}
