//! 提示词服务 - 业务能力层
//!
//! 只负责"类别 + 层级 → 提示词前缀"的查表能力，纯函数，无副作用

use crate::models::{Category, Tier};

/// 教育类提示词行（缺键时的防御性兜底，闭合枚举下正常不会触发）
const EDUCATIONAL_PROMPTS: [&str; 3] = [
    "Please explain this educational material in student-friendly terms: ",
    "Please provide a comprehensive educational explanation of: ",
    "Please provide an in-depth educational analysis of: ",
];

/// 类别 → [入门, 进阶, 高级] 提示词前缀静态表
static PROMPT_PREFIXES: phf::Map<&'static str, [&'static str; 3]> = phf::phf_map! {
    "technical" => [
        "Please explain this technical content in simple terms for beginners: ",
        "Please provide a detailed technical explanation of: ",
        "Please provide an in-depth technical analysis of: ",
    ],
    "scientific" => [
        "Please explain this scientific content in accessible terms: ",
        "Please provide a detailed scientific explanation of: ",
        "Please provide an in-depth scientific analysis of: ",
    ],
    "theoretical" => [
        "Please explain these theoretical concepts in simple terms: ",
        "Please provide a detailed theoretical explanation of: ",
        "Please provide an in-depth theoretical analysis of: ",
    ],
    "educational" => EDUCATIONAL_PROMPTS,
    "business" => [
        "Please explain this business content in simple terms: ",
        "Please provide a detailed business analysis of: ",
        "Please provide an in-depth business analysis of: ",
    ],
};

/// 一个类别下三个层级的提示词前缀
#[derive(Debug, Clone, Copy)]
pub struct TierPrompts {
    beginner: &'static str,
    intermediate: &'static str,
    advanced: &'static str,
}

impl TierPrompts {
    /// 获取指定层级的提示词前缀
    pub fn get(&self, tier: Tier) -> &'static str {
        match tier {
            Tier::Beginner => self.beginner,
            Tier::Intermediate => self.intermediate,
            Tier::Advanced => self.advanced,
        }
    }
}

/// 根据内容类别取出三个层级的提示词前缀
pub fn prompts_for(category: Category) -> TierPrompts {
    let row = PROMPT_PREFIXES
        .get(category.as_str())
        .copied()
        .unwrap_or(EDUCATIONAL_PROMPTS);

    TierPrompts {
        beginner: row[0],
        intermediate: row[1],
        advanced: row[2],
    }
}
