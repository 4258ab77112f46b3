use super::command::ComposeRunner;
use super::status::{aggregate, parse_ps_output};
use super::types::{ComposeController, CompositeStatus, ToggleAction, ToggleOutcome};
use crate::constants::compose;
use crate::{ComposeError, Result};
use std::collections::BTreeSet;
use tracing::{debug, error, info, warn};

impl<R: ComposeRunner> ComposeController<R> {
    /// 列出 compose 文件中声明的服务（已排序、去重）
    ///
    /// 查询失败时返回空列表。
    pub fn list_services(&self) -> Vec<String> {
        let compose_file = match self.compose_file_ready() {
            Ok(path) => path,
            Err(e) => {
                warn!("无法列出服务: {}", e);
                return Vec::new();
            }
        };

        let Some(output) = self.run_compose_checked(compose_file, compose::LIST_SERVICES) else {
            return Vec::new();
        };

        let services: BTreeSet<String> = output
            .stdout
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();

        debug!("compose 文件中定义的服务: {:?}", services);
        services.into_iter().collect()
    }

    /// 查询选中服务的聚合状态，任何失败都返回 [`CompositeStatus::Error`]
    pub fn get_status(&self) -> CompositeStatus {
        match self.try_get_status() {
            Ok(status) => status,
            Err(e) => {
                if e.is_configuration() {
                    debug!("无法查询服务状态: {}", e);
                } else {
                    error!("检查服务状态失败: {}", e);
                }
                CompositeStatus::Error
            }
        }
    }

    pub(crate) fn try_get_status(&self) -> Result<CompositeStatus> {
        let compose_file = self.can_run()?;

        let output = self
            .run_compose(compose_file, compose::PS_ALL_JSON)
            .ok_or_else(|| ComposeError::execution("ps 命令没有返回结果"))?;

        if !output.success() {
            return Err(ComposeError::execution(format!(
                "ps 退出码 {:?}: {}",
                output.exit_code,
                output.stderr.trim()
            )));
        }

        let report = parse_ps_output(&output.stdout);
        if report.malformed_lines > 0 {
            return Err(ComposeError::malformed(format!(
                "ps 输出中有 {} 行无法解析",
                report.malformed_lines
            )));
        }

        let status = aggregate(
            self.target
                .service_names()
                .iter()
                .map(|name| report.state_of(name)),
        );
        debug!("服务 {:?} 聚合状态: {}", self.target.service_names(), status);
        Ok(status)
    }

    /// 后台启动选中的服务
    pub fn start(&self) -> bool {
        self.run_for_selection(compose::UP_DETACHED, "启动")
    }

    /// 停止选中的服务
    pub fn stop(&self) -> bool {
        self.run_for_selection(compose::STOP, "停止")
    }

    fn run_for_selection(&self, subcommand: &[&str], action: &str) -> bool {
        let compose_file = match self.can_run() {
            Ok(path) => path,
            Err(e) => {
                warn!("无法{}服务: {}", action, e);
                return false;
            }
        };

        let services = self.target.service_names();
        info!("{}服务 {:?}...", action, services);

        let mut args: Vec<&str> = subcommand.to_vec();
        args.extend(services.iter().map(String::as_str));

        let succeeded = self.run_compose_checked(compose_file, &args).is_some();
        if !succeeded {
            error!("{}服务失败: {:?}", action, services);
        }
        succeeded
    }

    /// 按键语义：运行中则停止，否则启动，完成后重新查询状态
    pub fn toggle(&self) -> ToggleOutcome {
        self.toggle_from(self.get_status())
    }

    /// 根据已查询到的状态执行切换，不再重复查询当前状态
    pub fn toggle_from(&self, current: CompositeStatus) -> ToggleOutcome {
        let action = ToggleAction::for_status(current);
        let succeeded = match action {
            ToggleAction::Stop => self.stop(),
            ToggleAction::Start => self.start(),
        };

        ToggleOutcome {
            action,
            succeeded,
            status: self.get_status(),
        }
    }
}
