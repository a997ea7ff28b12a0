use content_explainer::error::GenerationError;
use content_explainer::orchestrator::App;
use content_explainer::services::prompt_service;
use content_explainer::utils::logging;
use content_explainer::{Config, ModelRunner, Tier, NO_EXPLANATION};
use std::path::PathBuf;

/// 确定性的模型替身：回显提示词里的正文块
struct EchoRunner;

impl ModelRunner for EchoRunner {
    async fn run_once(&self, prompt: &str) -> Result<String, GenerationError> {
        // 提示词格式固定为 "{前缀}\n\n{块}"
        let chunk = prompt.split("\n\n").nth(1).unwrap_or("");
        Ok(format!("OVERVIEW\n\nExplained: {}", chunk))
    }
}

/// 永远失败的模型替身
struct BrokenRunner;

impl ModelRunner for BrokenRunner {
    async fn run_once(&self, _prompt: &str) -> Result<String, GenerationError> {
        Err(GenerationError::ModelFailed {
            code: Some(1),
            stderr: "model unavailable".to_string(),
        })
    }
}

/// 为单个测试准备隔离的源文件和输出目录
async fn setup(test_name: &str, source_text: &str) -> (Config, PathBuf) {
    let base = std::env::temp_dir().join(format!(
        "content_explainer_{}_{}",
        test_name,
        std::process::id()
    ));
    tokio::fs::create_dir_all(&base).await.expect("创建测试目录失败");

    let source_path = base.join("source.txt");
    tokio::fs::write(&source_path, source_text)
        .await
        .expect("写入测试源文件失败");

    let config = Config {
        source_path: source_path.to_string_lossy().to_string(),
        output_dir: base.join("guides").to_string_lossy().to_string(),
        max_retries: 2,
        retry_backoff_secs: 0,
        chunk_size: 3000,
        ..Config::default()
    };

    (config, base)
}

#[tokio::test]
async fn test_end_to_end_scientific_document() {
    logging::init();

    let source_text = "Measurement Notes\n\n\
        The experiment collected data under a strict methodology. \
        Further experiment rounds produced more data, and the methodology was refined.";
    let (config, base) = setup("e2e", source_text).await;
    let output_dir = PathBuf::from(&config.output_dir);

    let summary = App::with_runner(config, EchoRunner)
        .run()
        .await
        .expect("流水线应该运行成功");

    // 类别：纯科学关键词文本
    assert_eq!(summary.category.as_str(), "scientific");

    // 三个层级的提示词都包含 scientific
    let prompts = prompt_service::prompts_for(summary.category);
    for tier in Tier::ALL {
        assert!(prompts.get(tier).contains("scientific"));
    }

    // 三个文档各一份，都以同一个标题段开头
    assert_eq!(summary.rendered_count(), 3);
    assert_eq!(summary.degraded_count(), 0);
    for tier in Tier::ALL {
        let path = output_dir.join(format!("{}.md", tier.guide_stem()));
        let content = tokio::fs::read_to_string(&path)
            .await
            .expect("文档应该已经落盘");
        assert!(content.starts_with("# Measurement Notes\n"));
    }

    // 运行摘要已写入
    let summary_json = tokio::fs::read_to_string(output_dir.join("run_summary.json"))
        .await
        .expect("运行摘要应该已经落盘");
    assert!(summary_json.contains("\"scientific\""));

    tokio::fs::remove_dir_all(&base).await.unwrap();
}

#[tokio::test]
async fn test_rerun_produces_identical_guides() {
    logging::init();

    let source_text = "Queueing theory is a concept framework. The model uses a principle approach.";
    let (config, base) = setup("idempotent", source_text).await;
    let output_dir = PathBuf::from(&config.output_dir);

    App::with_runner(config.clone(), EchoRunner)
        .run()
        .await
        .expect("第一次运行应该成功");

    let mut first_contents = Vec::new();
    for tier in Tier::ALL {
        let path = output_dir.join(format!("{}.md", tier.guide_stem()));
        first_contents.push(tokio::fs::read(&path).await.unwrap());
    }

    App::with_runner(config, EchoRunner)
        .run()
        .await
        .expect("第二次运行应该成功");

    for (tier, first) in Tier::ALL.iter().zip(&first_contents) {
        let path = output_dir.join(format!("{}.md", tier.guide_stem()));
        let second = tokio::fs::read(&path).await.unwrap();
        assert_eq!(&second, first, "层级 {} 的文档应该逐字节一致", tier);
    }

    tokio::fs::remove_dir_all(&base).await.unwrap();
}

#[tokio::test]
async fn test_total_generation_failure_still_renders_guides() {
    logging::init();

    let (config, base) = setup("degraded", "some ordinary text").await;
    let output_dir = PathBuf::from(&config.output_dir);

    let summary = App::with_runner(config, BrokenRunner)
        .run()
        .await
        .expect("生成全挂也不该让运行失败");

    // 全部层级降级，但文档仍然产出
    assert_eq!(summary.degraded_count(), 3);
    assert_eq!(summary.rendered_count(), 3);
    for tier in Tier::ALL {
        let path = output_dir.join(format!("{}.md", tier.guide_stem()));
        let content = tokio::fs::read_to_string(&path).await.unwrap();
        assert!(content.contains(NO_EXPLANATION));
    }

    tokio::fs::remove_dir_all(&base).await.unwrap();
}

#[tokio::test]
async fn test_missing_source_is_fatal() {
    logging::init();

    let config = Config {
        source_path: "definitely_missing_8472.txt".to_string(),
        ..Config::default()
    };

    let result = App::with_runner(config, EchoRunner).run().await;

    assert!(result.is_err(), "提取错误应该终止整次运行");
}

/// 真实调用本机 ollama 的端到端测试，默认忽略
///
/// 运行方式：cargo test -- --ignored
#[tokio::test]
#[ignore]
async fn test_end_to_end_with_local_ollama() {
    logging::init();

    let source_text = "The scheduling algorithm manages process queues in the system.";
    let (config, base) = setup("live", source_text).await;

    let summary = App::initialize(config)
        .await
        .expect("初始化失败")
        .run()
        .await
        .expect("流水线运行失败");

    assert_eq!(summary.rendered_count(), 3);
    println!("检测到类别: {}", summary.category);

    tokio::fs::remove_dir_all(&base).await.unwrap();
}
