//! Sidebar menu definition and active-item derivation.

use crate::route::CurrentLocation;

/// Icon handle for a menu entry. The UI maps each glyph to a themed icon.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Glyph {
    Dashboard,
    Projects,
    Tasks,
    Kanban,
    TimeTracking,
    Reports,
    Team,
    Settings,
}

/// One static sidebar entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavigationItem {
    pub label: &'static str,
    pub glyph: Glyph,
    pub route_key: &'static str,
}

impl NavigationItem {
    pub const fn new(label: &'static str, glyph: Glyph, route_key: &'static str) -> Self {
        Self {
            label,
            glyph,
            route_key,
        }
    }
}

/// Sidebar entries, top to bottom.
pub const NAV_ITEMS: &[NavigationItem] = &[
    NavigationItem::new("Dashboard", Glyph::Dashboard, "Dashboard"),
    NavigationItem::new("Projects", Glyph::Projects, "Projects"),
    NavigationItem::new("Tasks", Glyph::Tasks, "Tasks"),
    NavigationItem::new("Kanban Board", Glyph::Kanban, "Kanban"),
    NavigationItem::new("Time Tracking", Glyph::TimeTracking, "TimeTracking"),
    NavigationItem::new("Reports", Glyph::Reports, "Reports"),
    NavigationItem::new("Team", Glyph::Team, "Team"),
    NavigationItem::new("Settings", Glyph::Settings, "Settings"),
];

/// How a route key is matched against the current location.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MatchStrategy {
    /// Active when the path contains the key anywhere.
    ///
    /// Keys that are substrings of each other (`Task` / `Tasks`) can both
    /// match the same path.
    Substring,
    /// Active when the first path segment equals the key.
    #[default]
    FirstSegment,
}

impl MatchStrategy {
    pub fn matches(self, route_key: &str, location: &CurrentLocation) -> bool {
        match self {
            Self::Substring => location.path().contains(route_key),
            Self::FirstSegment => location.first_segment() == Some(route_key),
        }
    }
}

/// A menu entry paired with its active flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavEntry<'a> {
    pub item: &'a NavigationItem,
    pub active: bool,
}

/// Menu items plus the rule that marks them active.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavigationModel {
    items: &'static [NavigationItem],
    strategy: MatchStrategy,
}

impl Default for NavigationModel {
    fn default() -> Self {
        Self::new(NAV_ITEMS, MatchStrategy::default())
    }
}

impl NavigationModel {
    pub const fn new(items: &'static [NavigationItem], strategy: MatchStrategy) -> Self {
        Self { items, strategy }
    }

    pub fn is_active(&self, item: &NavigationItem, location: &CurrentLocation) -> bool {
        self.strategy.matches(item.route_key, location)
    }

    /// Every item in declared order with its active flag. No fallback
    /// selection when nothing matches.
    pub fn entries(&self, location: &CurrentLocation) -> Vec<NavEntry<'static>> {
        self.items
            .iter()
            .map(|item| NavEntry {
                item,
                active: self.is_active(item, location),
            })
            .collect()
    }

    /// First matching item, used for page titles.
    pub fn find_active(&self, location: &CurrentLocation) -> Option<&'static NavigationItem> {
        self.items.iter().find(|item| self.is_active(item, location))
    }
}
