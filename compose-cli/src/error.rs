use std::path::PathBuf;
use thiserror::Error;

pub type CliResult<T> = std::result::Result<T, CliError>;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("配置文件解析失败: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("配置文件序列化失败: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("compose 文件不存在: {}", .0.display())]
    ComposeFileNotFound(PathBuf),
}
