/// 项目元数据（自动从 Cargo.toml 同步）
pub mod metadata {
    pub const PROJECT_DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

    pub const PROJECT_AUTHORS: &str = env!("CARGO_PKG_AUTHORS");

    pub const CLI_VERSION: &str = env!("CARGO_PKG_VERSION");

    /// 用户友好的显示名称，用于 UI 显示
    pub mod display {
        pub const FRIENDLY_NAME: &str = "Compose Toggle";

        pub const DESCRIPTION_LONG: &str = "选择一个 docker compose 文件和其中的部分服务，查看这些服务的聚合运行状态，并一键启动或停止它们";
    }
}
