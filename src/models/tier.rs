/// 难度层级枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    /// 入门
    Beginner,
    /// 进阶
    Intermediate,
    /// 高级
    Advanced,
}

impl Tier {
    /// 全部层级（固定顺序，决定生成和输出顺序）
    pub const ALL: [Tier; 3] = [Tier::Beginner, Tier::Intermediate, Tier::Advanced];

    /// 获取标识名（小写，用于文件名和配置）
    pub fn as_str(self) -> &'static str {
        match self {
            Tier::Beginner => "beginner",
            Tier::Intermediate => "intermediate",
            Tier::Advanced => "advanced",
        }
    }

    /// 获取输出文档的副标题前缀
    pub fn label(self) -> &'static str {
        match self {
            Tier::Beginner => "Beginner-Friendly Guide",
            Tier::Intermediate => "Comprehensive Guide",
            Tier::Advanced => "Advanced Analysis",
        }
    }

    /// 获取输出文档的文件名主干（扩展名由写入端决定）
    pub fn guide_stem(self) -> String {
        format!("{}_guide", self.as_str())
    }

    /// 尝试从字符串解析层级（精确匹配）
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "beginner" => Some(Tier::Beginner),
            "intermediate" => Some(Tier::Intermediate),
            "advanced" => Some(Tier::Advanced),
            _ => None,
        }
    }

    /// 智能查找层级（忽略大小写和前后空白）
    pub fn find(s: &str) -> Option<Self> {
        Self::from_str(s.trim().to_lowercase().as_str())
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
