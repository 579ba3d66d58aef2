//! # Breadcrumbs
//!
//! Derives the page header's breadcrumb trail from the current path.
//!
//! ```text
//! "/profile/profiles"
//!        │
//!        ▼  depth-first search of the menu tree
//! [Public Profile] → [Profiles]
//!        │
//!        ▼  ensure the trail starts at Home
//! Home / Public Profile / Profiles
//! ```
//!
//! Paths that are not in the menu fall back to one crumb per path segment,
//! so resolution always produces something.

use crate::core::menu::MenuNode;

pub const HOME_LABEL: &str = "Home";
pub const HOME_HREF: &str = "/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreadcrumbItem {
    pub label: String,
    pub href: Option<String>,
}

impl BreadcrumbItem {
    pub fn new(label: impl Into<String>, href: Option<&str>) -> Self {
        Self {
            label: label.into(),
            href: href.map(str::to_string),
        }
    }

    fn home() -> Self {
        Self::new(HOME_LABEL, Some(HOME_HREF))
    }
}

/// Ancestor chain (root first) ending at the first node whose path matches.
fn find_chain<'a>(tree: &'a [MenuNode], current_path: &str) -> Option<Vec<&'a MenuNode>> {
    for node in tree {
        if node.path.as_deref() == Some(current_path) {
            return Some(vec![node]);
        }
        if let Some(mut chain) = find_chain(&node.children, current_path) {
            chain.insert(0, node);
            return Some(chain);
        }
    }
    None
}

/// `"post-date"` → `"Post Date"`. Every hyphen becomes a space.
///
/// A segment with no letters to show (e.g. `"-"`) keeps its raw text.
pub fn humanize_segment(segment: &str) -> String {
    let label = segment
        .split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ");
    if label.trim().is_empty() {
        segment.to_string()
    } else {
        label
    }
}

/// One crumb per `/`-separated prefix of the path, labels humanized.
fn segment_crumbs(current_path: &str) -> Vec<BreadcrumbItem> {
    let mut href = String::new();
    current_path
        .split('/')
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            href.push('/');
            href.push_str(segment);
            BreadcrumbItem::new(humanize_segment(segment), Some(href.as_str()))
        })
        .collect()
}

/// Resolve the breadcrumb trail for `current_path`. Never fails.
pub fn resolve(tree: &[MenuNode], current_path: &str) -> Vec<BreadcrumbItem> {
    let mut crumbs = match find_chain(tree, current_path) {
        Some(chain) => chain
            .into_iter()
            .map(|node| BreadcrumbItem::new(node.title.clone(), node.path.as_deref()))
            .collect(),
        None => {
            log::debug!("No menu entry for {current_path}, using path segments");
            segment_crumbs(current_path)
        }
    };

    match crumbs.first_mut() {
        Some(first) if first.href.as_deref() == Some(HOME_HREF) => {
            first.label = HOME_LABEL.to_string();
        }
        _ => crumbs.insert(0, BreadcrumbItem::home()),
    }

    crumbs
}

/// Page title: the matched menu entry's title, or `default_title` when the
/// path is not in the menu.
pub fn page_title(tree: &[MenuNode], current_path: &str, default_title: &str) -> String {
    match find_chain(tree, current_path) {
        Some(_) => resolve(tree, current_path)
            .pop()
            .map(|crumb| crumb.label)
            .unwrap_or_else(|| default_title.to_string()),
        None => default_title.to_string(),
    }
}
