//! docker compose 服务状态聚合与启停核心库。
//!
//! [`ComposeController`] 持有一个 compose 文件路径和一组选中的服务，
//! 通过外部 `docker compose` 命令列出服务、查询聚合状态以及启动/停止服务。
//! 所有失败都在边界处转换为 [`CompositeStatus::Error`]、`false` 或空列表，
//! 不会向调用方抛出。
//!
//! 已知限制：外部命令没有超时和重试，命令挂起时调用线程会一直阻塞。

pub mod constants;
pub mod container;
pub mod error;

pub use container::{
    ComposeController, ComposeOutput, ComposeRunner, ComposeTarget, CompositeStatus,
    ServiceState, StatusAppearance, SystemRunner, ToggleAction, ToggleOutcome,
    parse_service_list,
};
pub use error::{ComposeError, Result};
