//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps menu glyphs and chrome icons to the selected theme.

use icondata::Icon;
use pmshell_core::Glyph;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuClock as TimeTracking, LuFolderKanban as Projects, LuLayoutDashboard as Dashboard,
        LuLayoutGrid as Kanban, LuListChecks as Tasks, LuMenu as Menu, LuPlus as Plus,
        LuSettings as Settings, LuTrendingUp as Reports, LuUsers as Team,
    };
}

mod bootstrap {
    pub use icondata::{
        BsBarChartLine as Reports, BsCheck2Square as Tasks, BsClock as TimeTracking,
        BsFolder2 as Projects, BsGear as Settings, BsKanban as Kanban, BsList as Menu,
        BsPeople as Team, BsPlusLg as Plus, BsSpeedometer2 as Dashboard,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(DASHBOARD, Dashboard);
themed_icon!(PROJECTS, Projects);
themed_icon!(TASKS, Tasks);
themed_icon!(KANBAN, Kanban);
themed_icon!(TIME_TRACKING, TimeTracking);
themed_icon!(REPORTS, Reports);
themed_icon!(TEAM, Team);
themed_icon!(SETTINGS, Settings);
themed_icon!(MENU, Menu);
themed_icon!(PLUS, Plus);

/// Icon for a sidebar glyph.
pub const fn glyph(glyph: Glyph) -> Icon {
    match glyph {
        Glyph::Dashboard => DASHBOARD,
        Glyph::Projects => PROJECTS,
        Glyph::Tasks => TASKS,
        Glyph::Kanban => KANBAN,
        Glyph::TimeTracking => TIME_TRACKING,
        Glyph::Reports => REPORTS,
        Glyph::Team => TEAM,
        Glyph::Settings => SETTINGS,
    }
}
