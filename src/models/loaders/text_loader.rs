use crate::error::ExtractionError;
use crate::models::SourceDocument;
use std::path::Path;

/// 从纯文本文件加载源文档
///
/// 提取失败对整次运行是致命的，由调用方向上传播；
/// 纯文本没有元数据标题，标题留空，由调用方兜底
pub async fn load_text_document(path: &Path) -> Result<SourceDocument, ExtractionError> {
    if !path.exists() {
        return Err(ExtractionError::NotFound {
            path: path.display().to_string(),
        });
    }

    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| ExtractionError::ReadFailed {
            path: path.display().to_string(),
            source: Box::new(e),
        })?;

    tracing::info!(
        "已加载源文档: {} ({} 字符)",
        path.file_name().unwrap_or_default().to_string_lossy(),
        text.chars().count()
    );

    Ok(SourceDocument {
        title: String::new(),
        text,
        file_path: Some(path.to_string_lossy().to_string()),
    })
}
