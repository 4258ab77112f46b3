use crate::app::CliApp;
use crate::project_info::metadata;
use anyhow::Result;
use compose_core::{ComposeRunner, parse_service_list};
use std::path::Path;
use tracing::{info, warn};

/// 设置并保存 compose 文件
pub fn use_compose_file<R: ComposeRunner>(
    app: &mut CliApp<R>,
    compose_file: &Path,
) -> Result<()> {
    let absolute = app.config.set_compose_file(compose_file)?;
    app.save_config()?;
    info!("✅ 已设置 compose 文件: {}", absolute.display());

    let services = app.controller.list_services();
    if services.is_empty() {
        warn!("⚠️  未能从 compose 文件中读取到任何服务");
    } else {
        info!("📋 可选服务: {}", services.join(", "));
    }
    Ok(())
}

/// 设置并保存选中的服务
pub fn select_services<R: ComposeRunner>(
    app: &mut CliApp<R>,
    services: &[String],
) -> Result<()> {
    let selected = parse_service_list(&services.join(" "));

    // 服务名不做强制校验，只提示可能的拼写错误
    let available = app.controller.list_services();
    if !available.is_empty() {
        for name in selected.iter().filter(|name| !available.contains(name)) {
            warn!("⚠️  compose 文件中没有服务 {}，其状态将显示为 Stopped", name);
        }
    }

    app.config.compose.services = selected;
    app.save_config()?;

    if app.config.compose.services.is_empty() {
        warn!("⚠️  已清空服务选择");
    } else {
        info!("✅ 已选择服务: {}", app.config.compose.services.join(", "));
    }
    Ok(())
}

/// 列出 compose 文件中定义的服务，选中的服务带 `*` 标记
pub fn list_services<R: ComposeRunner>(app: &CliApp<R>) -> Result<()> {
    let compose_file = app.controller.compose_file_ready()?;
    info!("📁 {}", compose_file.display());

    let services = app.controller.list_services();
    if services.is_empty() {
        warn!("⚠️  没有找到任何服务");
        return Ok(());
    }

    let selected = app.controller.target().service_names();
    for service in &services {
        let mark = if selected.contains(service) { "*" } else { " " };
        info!("  {} {}", mark, service);
    }
    Ok(())
}

/// 显示当前配置和 docker 命令可用性
pub fn show_settings<R: ComposeRunner>(app: &CliApp<R>) -> Result<()> {
    let target = app.controller.target();
    let runner = app.controller.runner();

    info!("⚙️  {} 配置", metadata::display::FRIENDLY_NAME);
    info!("   配置文件: {}", app.config_path.display());
    match target.compose_file() {
        Some(path) if target.compose_file_exists() => {
            info!("   ✅ compose 文件: {}", path.display())
        }
        Some(path) => info!("   ❌ compose 文件: {} (不存在)", path.display()),
        None => info!("   ❌ compose 文件: 未设置"),
    }

    if target.service_names().is_empty() {
        info!("   ❌ 选中的服务: 未选择");
    } else {
        info!("   ✅ 选中的服务: {}", target.service_names().join(", "));
    }

    let availability = if runner.is_available() { "✅" } else { "❌" };
    info!("   {} docker 命令: {}", availability, runner.describe());
    Ok(())
}
