//! # Content Explainer
//!
//! 一个把源文档转写成分层讲解文档的 Rust 应用程序
//!
//! ## 架构设计
//!
//! 本系统采用严格的四层架构：
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 持有稀缺资源（模型进程），只暴露能力
//! - `OllamaRunner` - 唯一的进程 owner，提供 run_once() 能力
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，只处理单个输入
//! - `classifier` - 内容类别检测能力
//! - `prompt_service` - 提示词查表能力
//! - `GenerationService` - 带重试兜底的文本生成能力
//! - `renderer` - 讲解排版能力
//! - `GuideWriter` - 写 Markdown 文档能力
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"一份正文"的完整生成流程
//! - `ExplainCtx` - 上下文封装（tier + chunk_index）
//! - `ExplainFlow` - 流程编排（切块 → 逐层级生成 → 聚合）
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/pipeline` - 讲解流水线，管理整次运行和统计
//! - `orchestrator/guide_processor` - 单个层级文档的排版与落盘
//!
//! ## 模块结构

pub mod config;
pub mod error;
pub mod infrastructure;

pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult};
pub use infrastructure::{ModelRunner, OllamaRunner};
pub use models::{Block, Category, SourceDocument, Tier};
pub use orchestrator::{App, GuideResult, RunSummary};
pub use workflow::{split_chunks, ExplainCtx, ExplainFlow, NO_EXPLANATION};
