// 私有模块声明
mod app;
mod cli;
mod commands;
mod config;
mod error;
pub mod project_info; // 公开项目信息模块
mod utils;

// 通过 pub use 精确控制对外暴露的接口
pub use app::CliApp;
pub use cli::{Cli, Commands};
pub use commands::status_line;
pub use config::{AppConfig, ComposeConfig, DockerConfig};
pub use error::{CliError, CliResult};
pub use utils::setup_logging;
