use build_runner::utils::logger;
use build_runner::{BuildConfig, BuildRunner, ProcessBundler};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 初始化日誌
    logger::init_cli_logger();

    tracing::info!("Starting build-runner");

    // 固定的設定檔路徑，不接受命令列參數
    let config = BuildConfig::default();
    let bundler = ProcessBundler::vite();
    let runner = BuildRunner::new(bundler, config);

    match runner.run().await {
        Ok(()) => {
            tracing::info!("✅ Build completed successfully!");
            println!("✅ Build completed successfully!");
        }
        Err(e) => {
            tracing::error!("❌ Build failed: {}", e);
            eprintln!("❌ Build failed: {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
