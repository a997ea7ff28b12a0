use anyhow::Result;
use content_explainer::orchestrator::App;
use content_explainer::utils::logging;
use content_explainer::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // 初始化日志
    logging::init();

    // 加载配置（命令行参数优先于环境变量）
    let mut config = Config::from_env();
    if let Some(path) = std::env::args().nth(1) {
        config.source_path = path;
    }

    // 初始化并运行应用
    let _summary = App::initialize(config).await?.run().await?;

    Ok(())
}
