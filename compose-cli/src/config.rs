use crate::error::{CliError, CliResult};
use compose_core::constants::docker;
use compose_core::{ComposeTarget, SystemRunner};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// 默认配置文件名
pub const DEFAULT_CONFIG_FILE: &str = "config.toml";

/// 按优先级查找的配置文件
const CONFIG_CANDIDATES: [&str; 3] = [
    DEFAULT_CONFIG_FILE,
    "compose-toggle.toml",
    ".compose-toggle.toml",
];

/// 应用配置结构
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    #[serde(default)]
    pub compose: ComposeConfig,
    #[serde(default)]
    pub docker: DockerConfig,
}

/// compose 文件和选中的服务
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct ComposeConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    #[serde(default)]
    pub services: Vec<String>,
}

/// Docker 命令相关配置
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct DockerConfig {
    #[serde(default = "default_binary")]
    pub binary: String,
    /// 未设置时根据 FLATPAK_ID 环境变量自动检测
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flatpak_spawn: Option<bool>,
}

fn default_binary() -> String {
    docker::DEFAULT_BINARY.to_string()
}

impl Default for DockerConfig {
    fn default() -> Self {
        Self {
            binary: default_binary(),
            flatpak_spawn: None,
        }
    }
}

impl AppConfig {
    /// 在当前目录按优先级查找配置文件，找不到则返回默认文件名
    pub fn find_config_file() -> PathBuf {
        Self::find_config_file_in(Path::new("."))
    }

    pub fn find_config_file_in(dir: &Path) -> PathBuf {
        CONFIG_CANDIDATES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.exists())
            .unwrap_or_else(|| dir.join(DEFAULT_CONFIG_FILE))
    }

    /// 加载配置文件，文件不存在时返回默认配置（不写入磁盘）
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> CliResult<Self> {
        let path = path.as_ref();
        if path.exists() {
            tracing::debug!("加载配置文件: {}", path.display());
            Self::load_from_file(path)
        } else {
            tracing::debug!("配置文件 {} 不存在，使用默认配置", path.display());
            Ok(Self::default())
        }
    }

    /// 从指定文件加载配置
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> CliResult<Self> {
        let content = fs::read_to_string(&path)?;
        let config: AppConfig = toml::from_str(&content)?;

        Ok(config)
    }

    /// 保存配置到文件
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> CliResult<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content)?;
        Ok(())
    }

    /// 设置 compose 文件，保存为绝对路径
    pub fn set_compose_file<P: AsRef<Path>>(&mut self, path: P) -> CliResult<PathBuf> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(CliError::ComposeFileNotFound(path.to_path_buf()));
        }

        let absolute = fs::canonicalize(path)?;
        self.compose.file = Some(absolute.clone());
        Ok(absolute)
    }

    pub fn target(&self) -> ComposeTarget {
        let mut target = ComposeTarget::default();
        target.set_compose_file(self.compose.file.clone());
        target.set_service_names(self.compose.services.iter().cloned());
        target
    }

    pub fn runner(&self) -> SystemRunner {
        let runner = SystemRunner::new().with_binary(&self.docker.binary);
        match self.docker.flatpak_spawn {
            Some(enabled) => runner.with_flatpak_spawn(enabled),
            None => runner,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_config_is_default() {
        let dir = tempdir().unwrap();
        let config = AppConfig::load_or_default(dir.path().join("config.toml")).unwrap();

        assert_eq!(config, AppConfig::default());
        assert_eq!(config.docker.binary, "docker");
        assert!(config.compose.file.is_none());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = AppConfig::default();
        config.compose.file = Some(PathBuf::from("/srv/app/docker-compose.yml"));
        config.compose.services = vec!["web".to_string(), "db".to_string()];
        config.docker.flatpak_spawn = Some(true);
        config.save_to_file(&path).unwrap();

        let loaded = AppConfig::load_from_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[compose]\nservices = [\"db\"]\n").unwrap();

        let config = AppConfig::load_from_file(&path).unwrap();
        assert_eq!(config.compose.services, vec!["db"]);
        assert_eq!(config.docker, DockerConfig::default());
    }

    #[test]
    fn test_invalid_config_is_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[compose\nfile = 1").unwrap();

        assert!(matches!(
            AppConfig::load_from_file(&path),
            Err(CliError::ConfigParse(_))
        ));
    }

    #[test]
    fn test_find_config_file_priority() {
        let dir = tempdir().unwrap();
        assert_eq!(
            AppConfig::find_config_file_in(dir.path()),
            dir.path().join("config.toml")
        );

        fs::write(dir.path().join(".compose-toggle.toml"), "").unwrap();
        assert_eq!(
            AppConfig::find_config_file_in(dir.path()),
            dir.path().join(".compose-toggle.toml")
        );

        fs::write(dir.path().join("compose-toggle.toml"), "").unwrap();
        assert_eq!(
            AppConfig::find_config_file_in(dir.path()),
            dir.path().join("compose-toggle.toml")
        );
    }

    #[test]
    fn test_set_compose_file() {
        let dir = tempdir().unwrap();
        let mut config = AppConfig::default();

        assert!(matches!(
            config.set_compose_file(dir.path().join("missing.yml")),
            Err(CliError::ComposeFileNotFound(_))
        ));

        let compose_file = dir.path().join("docker-compose.yml");
        fs::write(&compose_file, "services: {}\n").unwrap();
        let absolute = config.set_compose_file(&compose_file).unwrap();

        assert!(absolute.is_absolute());
        assert_eq!(config.compose.file, Some(absolute));
    }

    #[test]
    fn test_runner_from_config() {
        let mut config = AppConfig::default();
        config.docker.binary = "podman".to_string();
        config.docker.flatpak_spawn = Some(false);

        let runner = config.runner();
        assert_eq!(runner.binary(), "podman");
        assert!(!runner.uses_flatpak_spawn());
    }
}
