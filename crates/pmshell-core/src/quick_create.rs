//! Shortcuts listed under "New" in the admin bar.

/// Link to a page that can create the named record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuickCreateLink {
    pub label: &'static str,
    pub route_key: &'static str,
}

pub const QUICK_CREATE: &[QuickCreateLink] = &[
    QuickCreateLink {
        label: "Project",
        route_key: "Projects",
    },
    QuickCreateLink {
        label: "Task",
        route_key: "Tasks",
    },
    QuickCreateLink {
        label: "Time Log",
        route_key: "TimeTracking",
    },
    QuickCreateLink {
        label: "User",
        route_key: "Team",
    },
];
