/// Docker 命令相关常量
pub mod docker {
    /// 默认的容器编排命令
    pub const DEFAULT_BINARY: &str = "docker";

    /// compose 子命令
    pub const COMPOSE_SUBCOMMAND: &str = "compose";

    /// 指定 compose 文件的参数
    pub const FILE_FLAG: &str = "-f";
}

/// compose 子命令参数
pub mod compose {
    /// 列出 compose 文件中声明的服务
    pub const LIST_SERVICES: &[&str] = &["config", "--services"];

    /// 一次性查询所有服务容器的状态（包括已停止的）
    pub const PS_ALL_JSON: &[&str] = &["ps", "-a", "--format=json"];

    /// 后台启动服务
    pub const UP_DETACHED: &[&str] = &["up", "-d"];

    /// 停止服务
    pub const STOP: &[&str] = &["stop"];
}

/// Flatpak 沙箱相关常量
pub mod flatpak {
    /// Flatpak 运行时设置的环境变量
    pub const ID_ENV: &str = "FLATPAK_ID";

    /// 在宿主机上执行命令的包装程序
    pub const SPAWN_BINARY: &str = "flatpak-spawn";

    /// flatpak-spawn 参数
    pub const HOST_FLAG: &str = "--host";
}

/// 状态显示颜色（RGBA）
pub mod color {
    pub const GREEN: [u8; 4] = [64, 192, 87, 255];
    pub const RED: [u8; 4] = [250, 82, 82, 255];
    pub const ORANGE: [u8; 4] = [253, 126, 20, 255];
    pub const YELLOW: [u8; 4] = [250, 186, 5, 255];
}
