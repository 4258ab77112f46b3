// 模块声明
mod command;
mod display;
mod manager;
mod service;
mod status;
mod types;

// 重新导出公共API
pub use command::{ComposeRunner, SystemRunner};
pub use display::StatusAppearance;
pub use status::{PsReport, aggregate, parse_ps_output};
pub use types::{
    ComposeController, ComposeOutput, ComposeTarget, CompositeStatus, PsRecord, ServiceState,
    ToggleAction, ToggleOutcome, parse_service_list,
};
