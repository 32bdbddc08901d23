/// A top-level link in the navigation bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub name: &'static str,
    pub href: &'static str,
}

pub const NAV_ITEMS: [NavItem; 3] = [
    NavItem { name: "Home", href: "/" },
    NavItem { name: "Parent", href: "/parent" },
    NavItem { name: "Student", href: "/student" },
];

/// Exact path match; a trailing slash on a sub-route is ignored
pub fn is_active(current_path: &str, href: &str) -> bool {
    let trimmed = if current_path.len() > 1 {
        current_path.trim_end_matches('/')
    } else {
        current_path
    };
    trimmed == href
}
