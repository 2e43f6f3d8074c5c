//! Sidebar collapse state.

/// Sidebar width when expanded, in CSS pixels.
pub const EXPANDED_WIDTH_PX: u32 = 160;

/// Width of the icon-only rail.
pub const COLLAPSED_WIDTH_PX: u32 = 36;

/// Two-state collapse toggle. Never persisted; a new shell starts expanded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SidebarMode {
    #[default]
    Expanded,
    Collapsed,
}

impl SidebarMode {
    /// The other state.
    pub fn toggled(self) -> Self {
        match self {
            Self::Expanded => Self::Collapsed,
            Self::Collapsed => Self::Expanded,
        }
    }

    pub fn toggle(&mut self) {
        *self = self.toggled();
    }

    pub fn is_collapsed(self) -> bool {
        self == Self::Collapsed
    }

    /// Labels render only when expanded.
    pub fn show_labels(self) -> bool {
        !self.is_collapsed()
    }

    pub fn width_px(self) -> u32 {
        match self {
            Self::Expanded => EXPANDED_WIDTH_PX,
            Self::Collapsed => COLLAPSED_WIDTH_PX,
        }
    }

    /// Left margin of the content pane; equals the sidebar width so the
    /// two never overlap.
    pub fn content_offset_px(self) -> u32 {
        self.width_px()
    }

    /// Hover title for a menu item. Only set on the icon rail.
    pub fn item_title(self, label: &str) -> Option<&str> {
        self.is_collapsed().then_some(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_expanded() {
        let mode = SidebarMode::default();
        assert_eq!(mode, SidebarMode::Expanded);
        assert!(mode.show_labels());
        assert_eq!(mode.width_px(), EXPANDED_WIDTH_PX);
    }

    #[test]
    fn test_double_toggle_round_trip() {
        let mut mode = SidebarMode::default();
        mode.toggle();
        assert_eq!(mode, SidebarMode::Collapsed);
        mode.toggle();
        assert_eq!(mode, SidebarMode::Expanded);
    }

    #[test]
    fn test_collapsed_layout() {
        let mode = SidebarMode::Collapsed;
        assert!(!mode.show_labels());
        assert_eq!(mode.width_px(), COLLAPSED_WIDTH_PX);
        assert_eq!(mode.content_offset_px(), mode.width_px());
        assert_eq!(mode.item_title("Reports"), Some("Reports"));
        assert_eq!(SidebarMode::Expanded.item_title("Reports"), None);
    }
}
