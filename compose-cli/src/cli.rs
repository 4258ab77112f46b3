use crate::project_info::metadata;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Compose Toggle CLI - 查看并切换 docker compose 服务
#[derive(Parser, Debug)]
#[command(name = "compose-cli")]
#[command(about = metadata::PROJECT_DESCRIPTION)]
#[command(version = metadata::CLI_VERSION)]
#[command(long_about = metadata::display::DESCRIPTION_LONG)]
#[command(author = metadata::PROJECT_AUTHORS)]
pub struct Cli {
    /// 配置文件路径（默认依次查找 config.toml、compose-toggle.toml、.compose-toggle.toml）
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// 详细输出
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// 本次调用使用的 compose 文件（不写入配置）
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,

    /// 本次调用使用的服务列表，逗号或空格分隔（不写入配置）
    #[arg(short, long, global = true)]
    pub services: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// 设置并保存 compose 文件
    Use {
        /// compose 文件路径
        path: PathBuf,
    },
    /// 设置并保存选中的服务，不带参数则清空
    Select {
        /// 服务名，可以用逗号或空格分隔
        names: Vec<String>,
    },
    /// 列出 compose 文件中定义的服务
    Services,
    /// 显示选中服务的聚合状态
    Status {
        /// 以 JSON 输出
        #[arg(long)]
        json: bool,
    },
    /// 启动选中的服务
    Start,
    /// 停止选中的服务
    Stop,
    /// 运行中则停止，否则启动
    Toggle,
    /// 显示当前配置和 docker 命令可用性
    Show,
    /// 定时刷新状态，直到 Ctrl-C
    Watch {
        /// 刷新间隔（秒）
        #[arg(long, default_value_t = 2)]
        interval: u64,
        /// 刷新次数上限
        #[arg(long)]
        count: Option<u64>,
    },
}
