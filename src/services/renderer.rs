//! 讲解渲染服务 - 业务能力层
//!
//! 把一个层级的讲解文本转换为有序的块序列，纯函数；
//! 具体落盘由 GuideWriter 负责，两者解耦便于单独测试

use crate::models::{Block, Category, Tier};

/// 短标题片段的长度上限（字符数）
pub const HEADING_MAX_CHARS: usize = 100;

/// 把讲解文本排版为块序列
///
/// 顺序：标题、副标题、间隔，然后是按空行切分的正文块。
/// 每个非空正文块：长度小于阈值且含大写字母 → 标题片段；
/// 否则为普通段落，段内换行折叠为空格，段后补一个间隔。
/// 结构启发式只是尽力猜测，对无结构或畸形输入不报错
pub fn layout_blocks(
    explanation: &str,
    title: &str,
    tier: Tier,
    category: Category,
) -> Vec<Block> {
    let mut blocks = Vec::new();

    blocks.push(Block::Title(title.to_string()));
    blocks.push(Block::Subtitle(format!(
        "{} - {} Content",
        tier.label(),
        category.title_name()
    )));
    blocks.push(Block::Spacer);

    for raw_section in explanation.split("\n\n") {
        let section = raw_section.trim();
        if section.is_empty() {
            continue;
        }

        if is_heading(section) {
            blocks.push(Block::Heading(section.to_string()));
        } else {
            blocks.push(Block::Paragraph(section.replace('\n', " ")));
            blocks.push(Block::Spacer);
        }
    }

    blocks
}

/// 短标题判定：长度（按字符数）低于阈值且至少含一个大写字母
fn is_heading(section: &str) -> bool {
    section.chars().count() < HEADING_MAX_CHARS && section.chars().any(|c| c.is_uppercase())
}
