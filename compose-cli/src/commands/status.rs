use crate::app::CliApp;
use crate::utils::format_color;
use anyhow::{Result, bail};
use compose_core::{ComposeRunner, CompositeStatus};
use serde_json::json;
use std::time::Duration;
use tracing::{info, warn};

/// 状态显示行，例如 `Running (server.svg, #40C057)`
pub fn status_line(status: CompositeStatus) -> String {
    let appearance = status.appearance();
    format!(
        "{} ({}, {})",
        appearance.label,
        appearance.icon,
        format_color(appearance.background_color)
    )
}

/// 显示选中服务的聚合状态，状态为 Error 时返回错误
pub fn show_status<R: ComposeRunner>(app: &CliApp<R>, as_json: bool) -> Result<()> {
    let status = app.controller.get_status();

    if as_json {
        let output = json!({
            "status": status,
            "services": app.controller.target().service_names(),
            "appearance": status.appearance(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        info!("📊 {}", status_line(status));
    }

    if status == CompositeStatus::Error {
        // 配置问题只在这里报告一次
        if let Err(e) = app.controller.can_run() {
            bail!("无法查询服务状态: {e}");
        }
        bail!("服务状态异常");
    }
    Ok(())
}

/// 定时刷新状态，只在状态变化时输出
pub async fn watch_status<R>(
    app: &CliApp<R>,
    interval_secs: u64,
    count: Option<u64>,
) -> Result<()>
where
    R: ComposeRunner + Clone + Send + 'static,
{
    if let Err(e) = app.controller.can_run() {
        warn!("⚠️  {e}，将持续显示 Error");
    }

    let mut ticker = tokio::time::interval(Duration::from_secs(interval_secs.max(1)));
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    let mut last_status = None;
    let mut polled = 0u64;

    loop {
        tokio::select! {
            _ = ticker.tick() => {}
            _ = &mut ctrl_c => {
                info!("收到中断信号，停止监视");
                break;
            }
        }

        // 外部命令是阻塞的，放到阻塞线程池中执行
        let controller = app.controller.clone();
        let status = tokio::task::spawn_blocking(move || controller.get_status()).await?;

        if last_status != Some(status) {
            info!("📊 {}", status_line(status));
            last_status = Some(status);
        }

        polled += 1;
        if count.is_some_and(|limit| polled >= limit) {
            break;
        }
    }

    Ok(())
}
