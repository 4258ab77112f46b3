use super::types::CompositeStatus;
use crate::constants::color;
use serde::Serialize;

/// 按钮上显示状态所需的信息
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusAppearance {
    pub label: &'static str,
    pub icon: &'static str,
    /// RGBA
    pub background_color: [u8; 4],
}

impl CompositeStatus {
    pub fn appearance(&self) -> StatusAppearance {
        let (icon, background_color) = match self {
            CompositeStatus::Starting => ("server-bolt.svg", color::ORANGE),
            CompositeStatus::Running => ("server.svg", color::GREEN),
            CompositeStatus::Stopping => ("server-bolt.svg", color::ORANGE),
            CompositeStatus::Stopped => ("server-off.svg", color::RED),
            CompositeStatus::Error => ("plug-x.svg", color::RED),
            CompositeStatus::Partial => ("server-bolt.svg", color::YELLOW),
        };

        StatusAppearance {
            label: self.display_name(),
            icon,
            background_color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_appearance_table() {
        let running = CompositeStatus::Running.appearance();
        assert_eq!(running.label, "Running");
        assert_eq!(running.icon, "server.svg");
        assert_eq!(running.background_color, [64, 192, 87, 255]);

        let partial = CompositeStatus::Partial.appearance();
        assert_eq!(partial.icon, "server-bolt.svg");
        assert_eq!(partial.background_color, [250, 186, 5, 255]);

        assert_eq!(CompositeStatus::Error.appearance().icon, "plug-x.svg");
        assert_eq!(
            CompositeStatus::Stopped.appearance().background_color,
            CompositeStatus::Error.appearance().background_color
        );
    }
}
