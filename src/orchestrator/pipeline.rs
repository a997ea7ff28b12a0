//! 讲解流水线 - 编排层
//!
//! ## 职责
//!
//! 本模块是整个应用的入口，负责一份源文档的完整处理。
//!
//! ## 核心功能
//!
//! 1. **应用初始化**：启动日志文件、创建讲解流程和文档写入服务
//! 2. **文档加载**：读取源文档（提取失败对整次运行是致命的）
//! 3. **类别检测**：对正文做一次关键词打分
//! 4. **顺序生成**：一次一个层级、一次一块，向下委托 ExplainFlow
//! 5. **文档产出**：三个层级各出一份文档，向下委托 guide_processor
//! 6. **运行摘要**：把类别、产物路径和降级标记写入 run_summary.json
//!
//! ## 设计特点
//!
//! - **顶层编排**：不处理单个层级的细节
//! - **顺序执行**：无并发、无共享可变状态
//! - **错误分级**：提取错误致命；单层级写入失败只计入统计

use crate::config::Config;
use crate::infrastructure::{ModelRunner, OllamaRunner};
use crate::models::{load_text_document, Category, Tier};
use crate::orchestrator::guide_processor::{self, GuideResult};
use crate::services::{classifier, prompt_service, GuideWriter};
use crate::utils::logging::{init_log_file, truncate_text};
use crate::workflow::ExplainFlow;
use anyhow::Result;
use std::path::Path;
use tracing::{info, warn};

/// 应用主结构
pub struct App<R: ModelRunner = OllamaRunner> {
    config: Config,
    flow: ExplainFlow<R>,
    writer: GuideWriter,
}

/// 一次运行的摘要
#[derive(Debug, Clone, serde::Serialize)]
pub struct RunSummary {
    /// 源文档路径
    pub source: String,
    /// 工作标题
    pub title: String,
    /// 检测到的内容类别
    pub category: Category,
    /// 每个层级的产出结果
    pub guides: Vec<GuideResult>,
    /// 外部测评推荐的阅读层级（可选）
    pub recommended_tier: Option<Tier>,
}

impl RunSummary {
    /// 成功落盘的文档数
    pub fn rendered_count(&self) -> usize {
        self.guides.iter().filter(|g| g.rendered).count()
    }

    /// 降级（全部块失败）的文档数
    pub fn degraded_count(&self) -> usize {
        self.guides.iter().filter(|g| g.degraded).count()
    }
}

impl App<OllamaRunner> {
    /// 初始化应用（基于本机 ollama）
    pub async fn initialize(config: Config) -> Result<Self> {
        // 初始化日志文件
        init_log_file(&config.output_log_file)?;

        log_startup(&config);

        let flow = ExplainFlow::new(&config);
        let writer = GuideWriter::new(&config);

        Ok(Self {
            config,
            flow,
            writer,
        })
    }
}

impl<R: ModelRunner> App<R> {
    /// 使用自定义执行器创建（测试时注入确定性替身，不触碰日志文件）
    pub fn with_runner(config: Config, runner: R) -> Self {
        let flow = ExplainFlow::with_runner(&config, runner);
        let writer = GuideWriter::new(&config);

        Self {
            config,
            flow,
            writer,
        }
    }

    /// 运行应用主逻辑
    pub async fn run(&self) -> Result<RunSummary> {
        // 加载源文档（提取错误向上传播，终止整次运行）
        let document = load_text_document(Path::new(&self.config.source_path)).await?;

        // 标题为空时用正文第一行兜底
        let title = document.working_title();
        info!("📖 工作标题: {}", truncate_text(&title, 60));

        // 类别检测（一次运行只做一次）
        let category = classifier::classify(&document.text);
        info!("🔍 检测到内容类别: {}", category);

        // 逐层级生成讲解
        let prompts = prompt_service::prompts_for(category);
        let explanations = self.flow.explain_document(&document.text, &prompts).await;

        // 逐层级排版落盘
        let mut guides = Vec::with_capacity(explanations.len());
        for (tier, explanation) in &explanations {
            let result =
                guide_processor::process_guide(&self.writer, &title, *tier, category, explanation)
                    .await;
            guides.push(result);
        }

        let summary = RunSummary {
            source: self.config.source_path.clone(),
            title,
            category,
            guides,
            recommended_tier: self.config.recommended_tier,
        };

        self.write_summary(&summary).await;
        print_final_stats(&summary, &self.config);

        Ok(summary)
    }

    /// 写入运行摘要
    ///
    /// 摘要属于附加产物，写入失败只记录，不影响运行结果
    async fn write_summary(&self, summary: &RunSummary) {
        let path = Path::new(&self.config.output_dir).join("run_summary.json");

        let json = match serde_json::to_string_pretty(summary) {
            Ok(json) => json,
            Err(e) => {
                warn!("⚠️ 运行摘要序列化失败: {}", e);
                return;
            }
        };

        if let Err(e) = tokio::fs::create_dir_all(&self.config.output_dir).await {
            warn!("⚠️ 创建输出目录失败: {}", e);
            return;
        }

        match tokio::fs::write(&path, json).await {
            Ok(_) => info!("📝 运行摘要已写入: {}", path.display()),
            Err(e) => warn!("⚠️ 运行摘要写入失败: {}", e),
        }
    }
}

// ========== 日志辅助函数 ==========

fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 分层讲解生成模式");
    info!("📄 源文档: {}", config.source_path);
    info!("🤖 模型: {}", config.model_name);
    info!(
        "⚙️ 块大小: {} 字符 | 重试: {} 次 | 超时: {} 秒",
        config.chunk_size, config.max_retries, config.generation_timeout_secs
    );
    info!("{}", "=".repeat(60));
}

fn print_final_stats(summary: &RunSummary, config: &Config) {
    info!("\n{}", "=".repeat(60));
    info!("📊 全部处理完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("内容类别: {}", summary.category);
    info!(
        "✅ 成功文档: {}/{}",
        summary.rendered_count(),
        summary.guides.len()
    );
    if summary.degraded_count() > 0 {
        info!("⚠️ 降级文档: {}", summary.degraded_count());
    }
    if let Some(tier) = summary.recommended_tier {
        info!("📖 根据测评结果，推荐阅读: {}.md", tier.guide_stem());
    }
    info!("{}", "=".repeat(60));
    info!("\n日志已保存至: {}", config.output_log_file);
}
