/// 内容类别枚举
///
/// 声明顺序即固定的检测顺序：打分遍历和全零平局的兜底都依赖它，
/// 保证同一输入永远得到同一类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// 技术
    Technical,
    /// 科学
    Scientific,
    /// 理论
    Theoretical,
    /// 教育
    Educational,
    /// 商业
    Business,
}

impl Category {
    /// 全部类别（固定检测顺序）
    pub const ALL: [Category; 5] = [
        Category::Technical,
        Category::Scientific,
        Category::Theoretical,
        Category::Educational,
        Category::Business,
    ];

    /// 获取标识名（小写，用作静态表的键）
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Technical => "technical",
            Category::Scientific => "scientific",
            Category::Theoretical => "theoretical",
            Category::Educational => "educational",
            Category::Business => "business",
        }
    }

    /// 获取副标题用的首字母大写名称
    pub fn title_name(self) -> &'static str {
        match self {
            Category::Technical => "Technical",
            Category::Scientific => "Scientific",
            Category::Theoretical => "Theoretical",
            Category::Educational => "Educational",
            Category::Business => "Business",
        }
    }

    /// 尝试从字符串解析类别（精确匹配）
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "technical" => Some(Category::Technical),
            "scientific" => Some(Category::Scientific),
            "theoretical" => Some(Category::Theoretical),
            "educational" => Some(Category::Educational),
            "business" => Some(Category::Business),
            _ => None,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
