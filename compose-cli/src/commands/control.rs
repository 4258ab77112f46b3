use super::status::status_line;
use crate::app::CliApp;
use anyhow::{Result, bail};
use compose_core::{ComposeRunner, ToggleAction};
use tracing::{error, info};

/// 启动选中的服务
pub fn start_services<R: ComposeRunner>(app: &CliApp<R>) -> Result<()> {
    info!("▶️  Starting...");
    if !app.controller.start() {
        bail!("启动服务失败");
    }
    info!("✅ {}", status_line(app.controller.get_status()));
    Ok(())
}

/// 停止选中的服务
pub fn stop_services<R: ComposeRunner>(app: &CliApp<R>) -> Result<()> {
    info!("⏹️  Stopping...");
    if !app.controller.stop() {
        bail!("停止服务失败");
    }
    info!("✅ {}", status_line(app.controller.get_status()));
    Ok(())
}

/// 运行中则停止，否则启动
pub fn toggle_services<R: ComposeRunner>(app: &CliApp<R>) -> Result<()> {
    let current = app.controller.get_status();
    match ToggleAction::for_status(current) {
        ToggleAction::Stop => info!("⏹️  Stopping..."),
        ToggleAction::Start => info!("▶️  Starting..."),
    }

    let outcome = app.controller.toggle_from(current);
    if !outcome.succeeded {
        let action = match outcome.action {
            ToggleAction::Start => "Error starting",
            ToggleAction::Stop => "Error stopping",
        };
        error!("❌ {}，当前状态: {}", action, status_line(outcome.status));
        bail!("{action}");
    }

    info!("✅ {}", status_line(outcome.status));
    Ok(())
}
