use crate::cli::{Cli, Commands};
use crate::commands;
use crate::config::AppConfig;
use anyhow::Result;
use compose_core::{ComposeController, ComposeRunner, SystemRunner};
use std::path::PathBuf;
use tracing::debug;

pub struct CliApp<R = SystemRunner> {
    pub config_path: PathBuf,
    /// 配置文件内容（不含本次调用的命令行覆盖）
    pub config: AppConfig,
    /// 已应用命令行覆盖的控制器
    pub controller: ComposeController<R>,
}

impl CliApp {
    /// 加载配置并应用 `--file` / `--services` 覆盖，使用配置中的 docker 命令
    pub fn new(cli: &Cli) -> Result<Self> {
        Self::with_runner(cli, AppConfig::runner)
    }
}

impl<R: ComposeRunner> CliApp<R> {
    /// 加载配置并应用命令行覆盖，执行层由 `make_runner` 根据配置创建
    pub fn with_runner(cli: &Cli, make_runner: impl FnOnce(&AppConfig) -> R) -> Result<Self> {
        let config_path = cli
            .config
            .clone()
            .unwrap_or_else(AppConfig::find_config_file);
        let config = AppConfig::load_or_default(&config_path)?;

        let runner = make_runner(&config);
        let mut controller = ComposeController::with_runner(config.target(), runner);
        if let Some(compose_file) = &cli.file {
            // 与 `use` 保存的路径一致，使用绝对路径
            controller.set_compose_file(Some(std::path::absolute(compose_file)?));
        }
        if let Some(services) = &cli.services {
            controller.target_mut().set_service_names_from_str(services);
        }
        debug!(
            "配置文件 {}，目标 {:?}",
            config_path.display(),
            controller.target()
        );

        Ok(Self {
            config_path,
            config,
            controller,
        })
    }

    /// 保存配置并同步到控制器
    pub(crate) fn save_config(&mut self) -> Result<()> {
        self.config.save_to_file(&self.config_path)?;
        let target = self.config.target();
        self.controller
            .set_compose_file(target.compose_file().map(|p| p.to_path_buf()));
        self.controller
            .set_service_names(target.service_names().iter().cloned());
        Ok(())
    }
}

impl<R: ComposeRunner + Clone + Send + 'static> CliApp<R> {
    /// 运行应用命令
    pub async fn run(&mut self, command: Commands) -> Result<()> {
        match command {
            Commands::Use { path } => commands::use_compose_file(self, &path),
            Commands::Select { names } => commands::select_services(self, &names),
            Commands::Services => commands::list_services(self),
            Commands::Status { json } => commands::show_status(self, json),
            Commands::Start => commands::start_services(self),
            Commands::Stop => commands::stop_services(self),
            Commands::Toggle => commands::toggle_services(self),
            Commands::Show => commands::show_settings(self),
            Commands::Watch { interval, count } => {
                commands::watch_status(self, interval, count).await
            }
        }
    }
}
