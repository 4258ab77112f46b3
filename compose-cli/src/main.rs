use clap::Parser;
use compose_cli::{Cli, CliApp, setup_logging};
use tracing::error;

#[tokio::main]
async fn main() {
    // 解析命令行参数
    let cli = Cli::parse();

    // 设置日志记录
    setup_logging(cli.verbose);

    let mut app = match CliApp::new(&cli) {
        Ok(app) => app,
        Err(e) => {
            error!("❌ 加载配置失败: {:#}", e);
            std::process::exit(1);
        }
    };

    // 运行命令
    if let Err(e) = app.run(cli.command).await {
        error!("❌ 操作失败: {:#}", e);
        std::process::exit(1);
    }
}
