//! 文档写入服务 - 业务能力层
//!
//! 只负责"把块序列落盘为 Markdown"能力，不关心流程；
//! 对应外部文档写入端，本实现的原生格式是 Markdown

use crate::config::Config;
use crate::error::RenderError;
use crate::models::{Block, Tier};
use std::path::{Path, PathBuf};
use tracing::debug;

/// 文档写入服务
///
/// 职责：
/// - 把一个层级的块序列渲染为 `<tier>_guide.md`
/// - 输出目录不存在时创建
/// - 只处理单个文档，失败只影响该层级
pub struct GuideWriter {
    output_dir: PathBuf,
}

impl GuideWriter {
    /// 创建新的文档写入服务
    pub fn new(config: &Config) -> Self {
        Self {
            output_dir: PathBuf::from(&config.output_dir),
        }
    }

    /// 使用自定义输出目录创建
    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: dir.into(),
        }
    }

    /// 某个层级的输出文件路径
    pub fn guide_path(&self, tier: Tier) -> PathBuf {
        self.output_dir.join(format!("{}.md", tier.guide_stem()))
    }

    /// 渲染并写入一个层级的文档，返回写入的路径
    pub async fn write(&self, tier: Tier, blocks: &[Block]) -> Result<PathBuf, RenderError> {
        tokio::fs::create_dir_all(&self.output_dir)
            .await
            .map_err(|e| RenderError::CreateDirFailed {
                path: self.output_dir.display().to_string(),
                source: Box::new(e),
            })?;

        let path = self.guide_path(tier);
        let content = render_markdown(blocks);

        debug!(
            "写入文档: {} ({} 块, {} 字符)",
            path.display(),
            blocks.len(),
            content.chars().count()
        );

        tokio::fs::write(&path, content)
            .await
            .map_err(|e| RenderError::WriteFailed {
                path: path.display().to_string(),
                source: Box::new(e),
            })?;

        Ok(path)
    }
}

/// 把块序列渲染为 Markdown 文本
pub fn render_markdown(blocks: &[Block]) -> String {
    let mut out = String::new();

    for block in blocks {
        match block {
            Block::Title(text) => {
                out.push_str("# ");
                out.push_str(text);
                out.push('\n');
            }
            Block::Subtitle(text) => {
                out.push_str("## ");
                out.push_str(text);
                out.push('\n');
            }
            Block::Heading(text) => {
                out.push_str("### ");
                out.push_str(text);
                out.push('\n');
            }
            Block::Paragraph(text) => {
                out.push_str(text);
                out.push('\n');
            }
            Block::Spacer => out.push('\n'),
        }
    }

    out
}
