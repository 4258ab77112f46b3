use super::types::{ComposeController, ComposeOutput};
use crate::constants::{docker, flatpak};
use std::borrow::Cow;
use std::path::Path;
use std::process::{Command, Stdio};
use tracing::{debug, error, warn};

/// compose 命令执行层
///
/// 返回 `None` 表示没有结果（无法启动进程、IO 错误等），实现不得 panic。
/// 非零退出码仍然返回 `Some`，由调用方决定如何处理。
pub trait ComposeRunner {
    fn run(&self, compose_file: &Path, args: &[&str]) -> Option<ComposeOutput>;

    /// 用于显示的执行方式描述
    fn describe(&self) -> String {
        docker::DEFAULT_BINARY.to_string()
    }

    /// 外部命令是否可用
    fn is_available(&self) -> bool {
        true
    }
}

/// 通过本机进程执行 `docker compose -f <file> ...`
#[derive(Debug, Clone)]
pub struct SystemRunner {
    binary: String,
    flatpak_spawn: bool,
}

impl Default for SystemRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemRunner {
    /// 使用默认的 `docker` 命令，并根据环境自动检测是否运行在 Flatpak 中
    pub fn new() -> Self {
        Self {
            binary: docker::DEFAULT_BINARY.to_string(),
            flatpak_spawn: Self::detect_flatpak(),
        }
    }

    /// 替换编排命令，例如 `podman`
    pub fn with_binary(mut self, binary: impl Into<String>) -> Self {
        self.binary = binary.into();
        self
    }

    pub fn with_flatpak_spawn(mut self, enabled: bool) -> Self {
        self.flatpak_spawn = enabled;
        self
    }

    pub fn detect_flatpak() -> bool {
        std::env::var_os(flatpak::ID_ENV).is_some()
    }

    pub fn binary(&self) -> &str {
        &self.binary
    }

    pub fn uses_flatpak_spawn(&self) -> bool {
        self.flatpak_spawn
    }

    /// 检查实际要执行的程序是否在 PATH 中
    pub fn check_available(&self) -> bool {
        let program = if self.flatpak_spawn {
            flatpak::SPAWN_BINARY
        } else {
            self.binary.as_str()
        };
        which::which(program).is_ok()
    }

    pub(crate) fn build_command(&self, compose_file: &Path, args: &[&str]) -> Command {
        // 工作目录切换后 -f 仍须指向同一个文件，flatpak 模式下统一使用绝对路径
        let compose_file: Cow<'_, Path> = if self.flatpak_spawn {
            std::path::absolute(compose_file)
                .map(Cow::Owned)
                .unwrap_or(Cow::Borrowed(compose_file))
        } else {
            Cow::Borrowed(compose_file)
        };

        let mut cmd = if self.flatpak_spawn {
            let mut cmd = Command::new(flatpak::SPAWN_BINARY);
            cmd.arg(flatpak::HOST_FLAG).arg(&self.binary);
            // 宿主机上的相对路径以 compose 文件所在目录为准
            if let Some(dir) = compose_file.parent().filter(|d| !d.as_os_str().is_empty()) {
                cmd.current_dir(dir);
            }
            cmd
        } else {
            Command::new(&self.binary)
        };

        cmd.arg(docker::COMPOSE_SUBCOMMAND)
            .arg(docker::FILE_FLAG)
            .arg(compose_file.as_ref())
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        cmd
    }
}

impl ComposeRunner for SystemRunner {
    fn run(&self, compose_file: &Path, args: &[&str]) -> Option<ComposeOutput> {
        let mut cmd = self.build_command(compose_file, args);
        debug!("执行 compose 命令: {:?}", cmd);

        match cmd.output() {
            Ok(output) => Some(ComposeOutput {
                exit_code: output.status.code(),
                stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            }),
            Err(e) => {
                error!("无法执行 compose 命令 {:?}: {}", cmd, e);
                None
            }
        }
    }

    fn describe(&self) -> String {
        if self.flatpak_spawn {
            format!(
                "{} {} {}",
                flatpak::SPAWN_BINARY,
                flatpak::HOST_FLAG,
                self.binary
            )
        } else {
            self.binary.clone()
        }
    }

    fn is_available(&self) -> bool {
        self.check_available()
    }
}

impl<R: ComposeRunner> ComposeController<R> {
    /// 执行 compose 子命令，非零退出码也原样返回给调用方检查
    pub(crate) fn run_compose(&self, compose_file: &Path, args: &[&str]) -> Option<ComposeOutput> {
        self.runner.run(compose_file, args)
    }

    /// 执行 compose 子命令，非零退出码视为没有结果
    pub(crate) fn run_compose_checked(
        &self,
        compose_file: &Path,
        args: &[&str],
    ) -> Option<ComposeOutput> {
        let output = self.run_compose(compose_file, args)?;
        if output.success() {
            Some(output)
        } else {
            warn!(
                "compose {} 退出码 {:?}: {}",
                args.join(" "),
                output.exit_code,
                output.stderr.trim()
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsStr;
    use std::path::PathBuf;

    fn args_of(cmd: &Command) -> Vec<String> {
        cmd.get_args()
            .map(|a| a.to_string_lossy().to_string())
            .collect()
    }

    #[test]
    fn test_build_command_plain() {
        let runner = SystemRunner::new().with_flatpak_spawn(false);
        let cmd = runner.build_command(Path::new("/srv/app/compose.yml"), &["ps", "-a"]);

        assert_eq!(cmd.get_program(), OsStr::new("docker"));
        assert_eq!(
            args_of(&cmd),
            vec!["compose", "-f", "/srv/app/compose.yml", "ps", "-a"]
        );
        assert_eq!(cmd.get_current_dir(), None);
    }

    #[test]
    fn test_build_command_custom_binary() {
        let runner = SystemRunner::new()
            .with_binary("podman")
            .with_flatpak_spawn(false);
        let cmd = runner.build_command(Path::new("compose.yml"), &["stop", "web"]);

        assert_eq!(cmd.get_program(), OsStr::new("podman"));
        assert_eq!(args_of(&cmd), vec!["compose", "-f", "compose.yml", "stop", "web"]);
    }

    #[test]
    fn test_build_command_flatpak() {
        let runner = SystemRunner::new().with_flatpak_spawn(true);
        let cmd = runner.build_command(Path::new("/srv/app/compose.yml"), &["up", "-d", "db"]);

        assert_eq!(cmd.get_program(), OsStr::new("flatpak-spawn"));
        assert_eq!(
            args_of(&cmd),
            vec!["--host", "docker", "compose", "-f", "/srv/app/compose.yml", "up", "-d", "db"]
        );
        assert_eq!(cmd.get_current_dir(), Some(Path::new("/srv/app")));
    }

    #[test]
    fn test_build_command_flatpak_relative_path() {
        let runner = SystemRunner::new().with_flatpak_spawn(true);
        let cmd = runner.build_command(Path::new("app/compose.yml"), &["ps"]);

        let expected = std::env::current_dir().unwrap().join("app/compose.yml");
        let args = args_of(&cmd);
        assert_eq!(args[3], "-f");
        assert_eq!(PathBuf::from(&args[4]), expected);
        assert!(PathBuf::from(&args[4]).is_absolute());
        assert_eq!(cmd.get_current_dir(), expected.parent());
    }

    #[test]
    fn test_describe_runner() {
        let plain = SystemRunner::new().with_binary("podman").with_flatpak_spawn(false);
        assert_eq!(plain.describe(), "podman");

        let spawned = SystemRunner::new().with_flatpak_spawn(true);
        assert_eq!(spawned.describe(), "flatpak-spawn --host docker");
    }

    #[test]
    fn test_missing_binary_yields_no_result() {
        let runner = SystemRunner::new()
            .with_binary("definitely-not-a-real-compose-binary")
            .with_flatpak_spawn(false);

        assert!(!runner.check_available());
        assert!(
            runner
                .run(&PathBuf::from("compose.yml"), &["ps"])
                .is_none()
        );
    }
}
