//! # Navigation Menu
//!
//! The static navigation tree shown in the sidebar and used to derive
//! breadcrumbs and page titles.
//!
//! ```text
//! Vec<MenuNode>
//! ├── Overview            "/"
//! ├── Components Demo
//! │   └── Table & Pagination   "/table-demo"
//! ├── My Account          roles: [Admin]
//! │   ├── Account Home    "/account/home"
//! │   └── Members & Roles
//! │       └── Teams       "/account/members/teams"
//! └── Spaces              (section)
//!     └── Metrics Hub     "/spaces/metrics"
//! ```
//!
//! The tree is built once at startup and never mutated. A node is either a
//! leaf (has a path, no children) or a branch (has children, path optional).

/// How a node is presented in the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuKind {
    /// Regular entry: a link, or an expandable folder when it has children.
    #[default]
    Link,
    /// Section header with a separator above it. Children render at depth 0.
    Section,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuNode {
    pub title: String,
    pub path: Option<String>,
    pub icon: Option<char>,
    pub kind: MenuKind,
    pub children: Vec<MenuNode>,
    /// Allowed roles. Empty means visible to everyone.
    pub roles: Vec<String>,
}

impl MenuNode {
    /// A leaf that navigates to `path`.
    pub fn link(title: &str, path: &str) -> Self {
        Self {
            title: title.to_string(),
            path: Some(path.to_string()),
            icon: None,
            kind: MenuKind::Link,
            children: Vec::new(),
            roles: Vec::new(),
        }
    }

    /// An expandable folder with no path of its own.
    pub fn group(title: &str, children: Vec<MenuNode>) -> Self {
        Self {
            title: title.to_string(),
            path: None,
            icon: None,
            kind: MenuKind::Link,
            children,
            roles: Vec::new(),
        }
    }

    /// A section header grouping its children under a separator.
    pub fn section(title: &str, children: Vec<MenuNode>) -> Self {
        Self {
            kind: MenuKind::Section,
            ..Self::group(title, children)
        }
    }

    pub fn with_icon(mut self, icon: char) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn with_path(mut self, path: &str) -> Self {
        self.path = Some(path.to_string());
        self
    }

    pub fn with_roles(mut self, roles: &[&str]) -> Self {
        self.roles = roles.iter().map(|r| r.to_string()).collect();
        self
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// True if `role` may see this node.
    pub fn allows(&self, role: Option<&str>) -> bool {
        if self.roles.is_empty() {
            return true;
        }
        role.is_some_and(|r| self.roles.iter().any(|allowed| allowed == r))
    }
}

/// The dashboard's navigation tree.
pub fn default_menu() -> Vec<MenuNode> {
    vec![
        MenuNode::link("Overview", "/").with_icon('⌂'),
        MenuNode::group(
            "Components Demo",
            vec![MenuNode::link("Table & Pagination", "/table-demo")],
        )
        .with_icon('▦'),
        MenuNode::group(
            "Public Profile",
            vec![
                MenuNode::link("Profiles", "/profile/profiles"),
                MenuNode::link("Blogger", "/profile/profiles/blogger"),
                MenuNode::link("Teams", "/profile/teams"),
            ],
        )
        .with_icon('☺'),
        MenuNode::group(
            "My Account",
            vec![
                MenuNode::link("Account Home", "/account/home"),
                MenuNode::link("Billing", "/account/billing"),
                MenuNode::link("Security", "/account/security"),
                MenuNode::group(
                    "Members & Roles",
                    vec![
                        MenuNode::link("Teams Starter", "/account/members/starter"),
                        MenuNode::link("Teams", "/account/members/teams"),
                        MenuNode::link("Team Info", "/account/members/info"),
                    ],
                ),
            ],
        )
        .with_icon('⚙')
        .with_roles(&["Admin"]),
        MenuNode::group(
            "Network",
            vec![MenuNode::link("Connections", "/network/connections")],
        )
        .with_icon('☍'),
        MenuNode::group(
            "Authentication",
            vec![MenuNode::link("Logins", "/auth/logins")],
        )
        .with_icon('⛨'),
        MenuNode::group(
            "Store - Client",
            vec![MenuNode::link("Products", "/store/products")],
        )
        .with_icon('$'),
        MenuNode::section(
            "Spaces",
            vec![
                MenuNode::link("Metrics Hub", "/spaces/metrics").with_icon('▦'),
                MenuNode::link("Data Lab", "/spaces/datalab").with_icon('▥'),
                MenuNode::link("Creative Commons", "/spaces/commons").with_icon('◎'),
                MenuNode::link("KPI Monitor", "/spaces/kpi").with_icon('⛨'),
            ],
        ),
        MenuNode::section(
            "Favorites",
            vec![
                MenuNode::link("Post Date", "/favorites/post-date").with_icon('◷'),
                MenuNode::link("Creative Licenses", "/favorites/licenses").with_icon('▤'),
                MenuNode::link("Open Content", "/favorites/open-content").with_icon('☺'),
                MenuNode::link("Copyright", "/favorites/copyright").with_icon('©'),
            ],
        ),
    ]
}

/// Top-level nodes the given role may see.
///
/// Only the first level is filtered. Children of a visible node are returned
/// as-is, even if they carry their own `roles`.
pub fn visible_nodes<'a>(tree: &'a [MenuNode], role: Option<&str>) -> Vec<&'a MenuNode> {
    tree.iter().filter(|node| node.allows(role)).collect()
}

/// True if any descendant of `children` has `path`.
pub fn has_active_child(children: &[MenuNode], path: &str) -> bool {
    children.iter().any(|child| {
        child.path.as_deref() == Some(path) || has_active_child(&child.children, path)
    })
}

/// First node (depth-first, sibling order) whose path equals `path`.
pub fn find_node<'a>(tree: &'a [MenuNode], path: &str) -> Option<&'a MenuNode> {
    for node in tree {
        if node.path.as_deref() == Some(path) {
            return Some(node);
        }
        if let Some(found) = find_node(&node.children, path) {
            return Some(found);
        }
    }
    None
}

pub fn is_known_path(tree: &[MenuNode], path: &str) -> bool {
    find_node(tree, path).is_some()
}
