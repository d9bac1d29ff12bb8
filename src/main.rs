use thali_server::utils::logger::init_logger_with_file;
use thali_server::{Config, Server, ServerState, print_banner};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. 环境变量 (.env 可选)
    dotenv::dotenv().ok();

    // 2. 加载配置并确保工作目录结构存在
    let config = Config::from_env();
    config.ensure_work_dir_structure()?;

    // 3. 日志 (级别来自 LOG_LEVEL，RUST_LOG 可覆盖；按日滚动写入 work_dir/logs)
    let log_dir = config.log_dir();
    init_logger_with_file(&config.log_level, Some(&log_dir.to_string_lossy()));

    print_banner();
    tracing::info!("Thali Server starting ({})", config.environment);

    // 4. 初始化服务器状态 (数据库)
    let state = ServerState::initialize(&config).await?;

    // 5. 启动 HTTP 服务器
    let server = Server::with_state(config, state);

    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
