//! 内容分类服务 - 业务能力层
//!
//! 只负责"判断内容类别"能力，纯函数，无副作用

use crate::models::Category;
use tracing::debug;

/// 类别 → 关键词静态表
///
/// 键是 Category::as_str() 的标识名；打分只做字面量匹配，不做词干归一
static CATEGORY_KEYWORDS: phf::Map<&'static str, &'static [&'static str]> = phf::phf_map! {
    "technical" => &[
        "algorithm",
        "implementation",
        "system",
        "process",
        "technical",
        "architecture",
    ],
    "scientific" => &[
        "experiment",
        "research",
        "study",
        "analysis",
        "data",
        "methodology",
    ],
    "theoretical" => &[
        "theory",
        "concept",
        "principle",
        "framework",
        "model",
        "approach",
    ],
    "educational" => &[
        "learn",
        "understand",
        "explain",
        "example",
        "practice",
        "exercise",
    ],
    "business" => &[
        "strategy",
        "market",
        "business",
        "management",
        "organization",
        "planning",
    ],
};

/// 获取某个类别的关键词集合
pub fn keywords(category: Category) -> &'static [&'static str] {
    CATEGORY_KEYWORDS
        .get(category.as_str())
        .copied()
        .unwrap_or(&[])
}

/// 计算某个类别在文本中的关键词总分（忽略大小写，非重叠字面量计数）
pub fn keyword_score(text: &str, category: Category) -> usize {
    score_lowered(&text.to_lowercase(), category)
}

fn score_lowered(lowered: &str, category: Category) -> usize {
    keywords(category)
        .iter()
        .map(|kw| lowered.matches(kw).count())
        .sum()
}

/// 判断文本的主导类别
///
/// 按固定检测顺序遍历所有类别，取总分最高者；
/// 平局（包括空文本的全零平局）由先声明的类别胜出，保证结果可复现
pub fn classify(text: &str) -> Category {
    let lowered = text.to_lowercase();

    let mut best = Category::ALL[0];
    let mut best_score = 0usize;

    for category in Category::ALL {
        let score = score_lowered(&lowered, category);
        debug!("类别 {} 得分: {}", category, score);

        if score > best_score {
            best = category;
            best_score = score;
        }
    }

    debug!("主导类别: {} (得分: {})", best, best_score);
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scientific_text() {
        let text = "The experiment produced data. Our methodology guided the analysis.";
        assert_eq!(classify(text), Category::Scientific);
    }

    #[test]
    fn test_business_text() {
        let text = "Market strategy and management planning drive the organization.";
        assert_eq!(classify(text), Category::Business);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(
            classify("ALGORITHM ARCHITECTURE Implementation"),
            Category::Technical
        );
    }

    #[test]
    fn test_empty_text_falls_back_to_first_category() {
        // 全零平局：先声明的类别胜出
        assert_eq!(classify(""), Category::Technical);
    }

    #[test]
    fn test_no_keyword_text_falls_back_to_first_category() {
        assert_eq!(classify("xyz qwerty asdf"), Category::Technical);
    }

    #[test]
    fn test_winner_score_dominates() {
        // 返回的类别得分不低于任何其他类别
        let text = "theory of learning: a concept framework to understand and practice";
        let winner = classify(text);
        let winner_score = keyword_score(text, winner);
        for category in Category::ALL {
            assert!(winner_score >= keyword_score(text, category));
        }
    }

    #[test]
    fn test_non_overlapping_count() {
        // "datadata" 含两个非重叠的 "data"
        assert_eq!(keyword_score("datadata", Category::Scientific), 2);
    }

    #[test]
    fn test_every_category_has_keywords() {
        for category in Category::ALL {
            assert_eq!(keywords(category).len(), 6);
        }
    }
}
