//! 单个文档处理器 - 编排层
//!
//! ## 职责
//!
//! 本模块负责把一个层级的讲解文本变成落盘的文档。
//!
//! ## 核心功能
//!
//! 1. **排版**：调用渲染服务产出块序列
//! 2. **落盘**：委托文档写入服务
//! 3. **降级识别**：全部块失败的层级仍然出文档，但打上降级标记
//! 4. **错误隔离**：写入失败只记录并计入统计，不中断其他层级

use crate::models::{Category, Tier};
use crate::services::{renderer, GuideWriter};
use crate::workflow::NO_EXPLANATION;
use tracing::{error, info, warn};

/// 单个层级文档的处理结果
#[derive(Debug, Clone, serde::Serialize)]
pub struct GuideResult {
    /// 难度层级
    pub tier: Tier,
    /// 写入的文件路径（写入失败时为 None）
    pub path: Option<String>,
    /// 是否为降级文档（该层级所有块都生成失败）
    pub degraded: bool,
    /// 是否成功落盘
    pub rendered: bool,
}

/// 处理单个层级的文档
///
/// # 参数
/// - `writer`: 文档写入服务
/// - `title`: 工作标题
/// - `tier`: 难度层级
/// - `category`: 内容类别
/// - `explanation`: 该层级的讲解文本（可能是兜底文本）
///
/// # 返回
/// 返回该层级的处理结果，写入失败不向上传播
pub async fn process_guide(
    writer: &GuideWriter,
    title: &str,
    tier: Tier,
    category: Category,
    explanation: &str,
) -> GuideResult {
    log_guide_start(tier, explanation.chars().count());

    let degraded = explanation == NO_EXPLANATION;
    if degraded {
        warn!("⚠️ 层级 {} 为兜底文本，文档仍会生成", tier);
    }

    let blocks = renderer::layout_blocks(explanation, title, tier, category);

    match writer.write(tier, &blocks).await {
        Ok(path) => {
            info!("✓ 已生成 {}", path.display());
            GuideResult {
                tier,
                path: Some(path.to_string_lossy().to_string()),
                degraded,
                rendered: true,
            }
        }
        Err(e) => {
            error!("❌ 层级 {} 文档写入失败: {}", tier, e);
            GuideResult {
                tier,
                path: None,
                degraded,
                rendered: false,
            }
        }
    }
}

// ========== 日志辅助函数 ==========

fn log_guide_start(tier: Tier, explanation_chars: usize) {
    info!("\n{}", "─".repeat(30));
    info!(
        "📄 开始排版 {} 层级文档 (讲解长度: {} 字符)",
        tier, explanation_chars
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_writer(name: &str) -> (GuideWriter, std::path::PathBuf) {
        let dir = std::env::temp_dir().join(format!("{}_{}", name, std::process::id()));
        (GuideWriter::with_dir(&dir), dir)
    }

    #[tokio::test]
    async fn test_process_guide_writes_document() {
        let (writer, dir) = temp_writer("guide_processor_ok");

        let result = process_guide(
            &writer,
            "Scheduling",
            Tier::Intermediate,
            Category::Technical,
            "CONCEPTS\n\nexplained body",
        )
        .await;

        assert!(result.rendered);
        assert!(!result.degraded);
        let path = result.path.unwrap();
        assert!(path.ends_with("intermediate_guide.md"));
        let content = tokio::fs::read_to_string(&path).await.unwrap();
        assert!(content.starts_with("# Scheduling\n"));

        tokio::fs::remove_dir_all(&dir).await.unwrap();
    }

    #[tokio::test]
    async fn test_degraded_guide_is_still_rendered() {
        let (writer, dir) = temp_writer("guide_processor_degraded");

        let result = process_guide(
            &writer,
            "Scheduling",
            Tier::Beginner,
            Category::Scientific,
            NO_EXPLANATION,
        )
        .await;

        assert!(result.degraded);
        assert!(result.rendered);

        tokio::fs::remove_dir_all(&dir).await.unwrap();
    }
}
