use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ComposeError>;

#[derive(Error, Debug)]
pub enum ComposeError {
    #[error("未设置 compose 文件")]
    ComposeFileUnset,

    #[error("compose 文件不存在: {}", .0.display())]
    ComposeFileMissing(PathBuf),

    #[error("未选择任何服务")]
    NoServicesSelected,

    #[error("compose 命令执行失败: {0}")]
    Execution(String),

    #[error("compose 输出格式无效: {0}")]
    MalformedOutput(String),
}

impl ComposeError {
    pub fn execution(msg: impl Into<String>) -> Self {
        Self::Execution(msg.into())
    }

    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedOutput(msg.into())
    }

    /// 是否属于配置类错误（未调用外部命令即失败）
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::ComposeFileUnset | Self::ComposeFileMissing(_) | Self::NoServicesSelected
        )
    }
}
