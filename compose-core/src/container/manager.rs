use super::command::ComposeRunner;
use super::types::{ComposeController, ComposeTarget};
use crate::{ComposeError, Result};
use std::path::{Path, PathBuf};

impl<R: ComposeRunner> ComposeController<R> {
    pub fn with_runner(target: ComposeTarget, runner: R) -> Self {
        Self { target, runner }
    }

    pub fn target(&self) -> &ComposeTarget {
        &self.target
    }

    pub fn target_mut(&mut self) -> &mut ComposeTarget {
        &mut self.target
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    pub fn set_compose_file<P: Into<PathBuf>>(&mut self, compose_file: Option<P>) {
        self.target.set_compose_file(compose_file);
    }

    pub fn set_service_names<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.target.set_service_names(names);
    }

    /// 检查 compose 文件是否已设置且存在，返回文件路径
    pub fn compose_file_ready(&self) -> Result<&Path> {
        let compose_file = self
            .target
            .compose_file()
            .ok_or(ComposeError::ComposeFileUnset)?;

        if !compose_file.is_file() {
            return Err(ComposeError::ComposeFileMissing(compose_file.to_path_buf()));
        }

        Ok(compose_file)
    }

    /// 检查当前配置能否执行状态查询和启停
    ///
    /// 只返回原因，不记录日志，由调用方决定如何报告。
    pub fn can_run(&self) -> Result<&Path> {
        let compose_file = self.compose_file_ready()?;

        if self.target.service_names().is_empty() {
            return Err(ComposeError::NoServicesSelected);
        }

        Ok(compose_file)
    }
}
