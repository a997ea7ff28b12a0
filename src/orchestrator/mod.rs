//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 本层负责整次运行的调度和统计，是整个系统的"指挥中心"。
//!
//! ## 模块划分
//!
//! ### `pipeline` - 讲解流水线
//! - 管理应用生命周期（初始化、运行、摘要）
//! - 加载源文档并解析工作标题
//! - 触发类别检测和逐层级生成
//! - 输出运行摘要和全局统计信息
//!
//! ### `guide_processor` - 单个文档处理器
//! - 排版单个层级的讲解（块序列）
//! - 委托文档写入服务落盘
//! - 识别降级文档
//! - 隔离单层级的写入失败
//!
//! ## 层次关系
//!
//! ```text
//! pipeline (处理一份源文档)
//!     ↓
//! guide_processor (处理单个 Tier 的文档)
//!     ↓
//! workflow::ExplainFlow (处理 层级 × 块 的生成)
//!     ↓
//! services (能力层：classify / prompt / generate / render / write)
//!     ↓
//! infrastructure (基础设施：OllamaRunner)
//! ```
//!
//! ## 设计原则
//!
//! 1. **单一职责**：pipeline 管整次运行，guide_processor 管单个文档
//! 2. **顺序执行**：一次一块、一次一个层级，无并发状态
//! 3. **向下依赖**：编排层 → workflow → services → infrastructure
//! 4. **无业务逻辑**：只做调度和统计，不做具体业务判断

pub mod guide_processor;
pub mod pipeline;

// 重新导出主要类型
pub use guide_processor::{process_guide, GuideResult};
pub use pipeline::{App, RunSummary};
