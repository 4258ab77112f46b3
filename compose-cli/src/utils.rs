/// # 日志配置
///
/// - 库代码只使用 `tracing` 宏，入口处调用 [`setup_logging`]
/// - `-v, --verbose`：DEBUG 级别
/// - `RUST_LOG`：标准的日志级别控制，优先于 `--verbose`
/// - `COMPOSE_TOGGLE_LOG_FILE`：设置后日志输出到文件而非终端
///
/// ```bash
/// RUST_LOG=compose_core=debug compose-cli status
/// COMPOSE_TOGGLE_LOG_FILE=toggle.log compose-cli watch
/// ```
pub fn setup_logging(verbose: bool) {
    use tracing_subscriber::{EnvFilter, fmt};

    let default_level = if verbose { "debug" } else { "info" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let log_file = std::env::var(LOG_FILE_ENV).ok().and_then(|path| {
        std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .inspect_err(|e| eprintln!("无法打开日志文件 {path}: {e}，改为输出到终端"))
            .ok()
    });

    if let Some(file) = log_file {
        // 文件输出使用详细格式便于调试
        fmt()
            .with_env_filter(env_filter)
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_target(true)
            .with_thread_names(true)
            .with_line_number(true)
            .init();
    } else {
        fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false)
            .without_time()
            .compact()
            .init();
    }
}

/// 日志文件路径环境变量
pub const LOG_FILE_ENV: &str = "COMPOSE_TOGGLE_LOG_FILE";

/// RGBA 颜色转换为 `#RRGGBB`
pub fn format_color(rgba: [u8; 4]) -> String {
    format!("#{:02X}{:02X}{:02X}", rgba[0], rgba[1], rgba[2])
}
