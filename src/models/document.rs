/// 源文档
///
/// 由文档读取端产出：标题可能为空（纯文本没有元数据），
/// 此时由调用方用正文第一行兜底
#[derive(Debug, Clone)]
pub struct SourceDocument {
    /// 文档标题（可能为空）
    pub title: String,
    /// 文档正文
    pub text: String,
    /// 来源文件路径（由加载器回填）
    pub file_path: Option<String>,
}

impl SourceDocument {
    /// 计算工作标题：优先用元数据标题，为空时取正文第一个非空行
    pub fn working_title(&self) -> String {
        if !self.title.trim().is_empty() {
            return self.title.trim().to_string();
        }

        self.text
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .unwrap_or("Untitled Document")
            .to_string()
    }
}

/// 渲染输出的块变体
///
/// 渲染器产出有序的块序列，由文档写入端消费；
/// 分类启发式与具体的落盘格式解耦，便于单独测试
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "lowercase")]
pub enum Block {
    /// 文档标题
    Title(String),
    /// 层级副标题
    Subtitle(String),
    /// 短标题片段
    Heading(String),
    /// 普通段落
    Paragraph(String),
    /// 空行间隔
    Spacer,
}
