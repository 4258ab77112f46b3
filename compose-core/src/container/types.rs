use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

use super::command::SystemRunner;

/// 单个服务的运行状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceState {
    Starting,
    Running,
    Stopping,
    Stopped,
    Error,
}

impl ServiceState {
    /// 将 `docker compose ps` 输出中的 State 字符串归类，未知值一律视为错误
    pub fn from_compose_state(state: &str) -> Self {
        match state.trim().to_lowercase().as_str() {
            "running" => ServiceState::Running,
            "exited" | "stopped" | "dead" => ServiceState::Stopped,
            "starting" | "created" => ServiceState::Starting,
            "removing" | "paused" | "restarting" => ServiceState::Stopping,
            _ => ServiceState::Error,
        }
    }
}

/// 一组服务的聚合状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CompositeStatus {
    Starting,
    Running,
    Stopping,
    Stopped,
    Error,
    /// 服务状态不一致且没有任何服务处于错误状态
    Partial,
}

impl CompositeStatus {
    /// 获取状态的显示名称
    pub fn display_name(&self) -> &'static str {
        match self {
            CompositeStatus::Starting => "Starting",
            CompositeStatus::Running => "Running",
            CompositeStatus::Stopping => "Stopping",
            CompositeStatus::Stopped => "Stopped",
            CompositeStatus::Error => "Error",
            CompositeStatus::Partial => "Partial",
        }
    }
}

impl From<ServiceState> for CompositeStatus {
    fn from(state: ServiceState) -> Self {
        match state {
            ServiceState::Starting => CompositeStatus::Starting,
            ServiceState::Running => CompositeStatus::Running,
            ServiceState::Stopping => CompositeStatus::Stopping,
            ServiceState::Stopped => CompositeStatus::Stopped,
            ServiceState::Error => CompositeStatus::Error,
        }
    }
}

impl fmt::Display for CompositeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// compose 命令执行结果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComposeOutput {
    /// 进程退出码，被信号终止时为 None
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ComposeOutput {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// `docker compose ps --format=json` 的单条记录
#[derive(Debug, Clone, Deserialize)]
pub struct PsRecord {
    #[serde(rename = "Service")]
    pub service: String,
    #[serde(rename = "State", default)]
    pub state: String,
}

/// 控制器操作的目标：compose 文件和选中的服务
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComposeTarget {
    pub(crate) compose_file: Option<PathBuf>,
    pub(crate) service_names: Vec<String>,
}

impl ComposeTarget {
    pub fn new<P: AsRef<Path>>(compose_file: P, service_names: Vec<String>) -> Self {
        Self {
            compose_file: Some(compose_file.as_ref().to_path_buf()),
            service_names,
        }
    }

    pub fn compose_file(&self) -> Option<&Path> {
        self.compose_file.as_deref()
    }

    pub fn set_compose_file<P: Into<PathBuf>>(&mut self, compose_file: Option<P>) {
        self.compose_file = compose_file.map(Into::into);
    }

    pub fn service_names(&self) -> &[String] {
        &self.service_names
    }

    pub fn set_service_names<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.service_names = names.into_iter().map(Into::into).collect();
    }

    /// 接受逗号或空白分隔的服务列表，例如 `"web, db cache"`
    pub fn set_service_names_from_str(&mut self, names: &str) {
        self.service_names = parse_service_list(names);
    }

    /// compose 文件已设置且存在
    pub fn compose_file_exists(&self) -> bool {
        self.compose_file.as_deref().is_some_and(Path::is_file)
    }
}

/// 解析逗号或空白分隔的服务名列表，忽略空项
pub fn parse_service_list(names: &str) -> Vec<String> {
    names
        .replace(',', " ")
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// 切换操作实际执行的动作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleAction {
    Start,
    Stop,
}

impl ToggleAction {
    /// 运行中则停止，其余状态（包括 Partial 和 Error）一律启动
    pub fn for_status(status: CompositeStatus) -> Self {
        if status == CompositeStatus::Running {
            ToggleAction::Stop
        } else {
            ToggleAction::Start
        }
    }
}

/// 一次切换（按键）的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleOutcome {
    pub action: ToggleAction,
    /// start/stop 命令是否成功
    pub succeeded: bool,
    /// 操作完成后重新查询到的聚合状态
    pub status: CompositeStatus,
}

/// docker compose 服务控制器
#[derive(Debug, Clone)]
pub struct ComposeController<R = SystemRunner> {
    pub(crate) target: ComposeTarget,
    pub(crate) runner: R,
}
