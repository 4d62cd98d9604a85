use anyhow::Result;
use question_import::utils::logging;
use question_import::{App, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // 加载配置
    let config = Config::from_env()?;

    // 初始化日志
    logging::init(config.verbose_logging);

    // 初始化并运行应用
    let summary = App::initialize(config)?.run().await?;

    if summary.failed > 0 {
        tracing::warn!("有 {} 个文档未能解析出题目，详见警告文件", summary.failed);
    }

    Ok(())
}
