//! Mock user directory behind the `/table-demo` page.

use chrono::NaiveDate;

use crate::core::table::{CellValue, Column, Row};

pub const DEMO_USER_COUNT: usize = 45;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserStatus {
    Active,
    Inactive,
    Pending,
}

impl UserStatus {
    pub fn label(self) -> &'static str {
        match self {
            UserStatus::Active => "Active",
            UserStatus::Inactive => "Inactive",
            UserStatus::Pending => "Pending",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoUser {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: String,
    pub status: UserStatus,
    pub last_login: NaiveDate,
}

impl Row for DemoUser {
    fn cell(&self, accessor: &str) -> CellValue {
        match accessor {
            "id" => CellValue::Int(self.id),
            "name" => CellValue::Text(self.name.clone()),
            "email" => CellValue::Text(self.email.clone()),
            "role" => CellValue::Text(self.role.clone()),
            "status" => CellValue::Text(self.status.label().to_string()),
            "last_login" => CellValue::Date(self.last_login),
            other => {
                log::warn!("Unknown column accessor '{other}' for DemoUser");
                CellValue::Text(String::new())
            }
        }
    }
}

/// Deterministic list of mock users, ids `1..=DEMO_USER_COUNT`.
pub fn demo_users() -> Vec<DemoUser> {
    (0..DEMO_USER_COUNT)
        .map(|i| {
            let role = match i % 3 {
                0 => "Admin",
                1 => "Editor",
                _ => "Viewer",
            };
            let status = if i % 4 == 0 {
                UserStatus::Inactive
            } else if i % 5 == 0 {
                UserStatus::Pending
            } else {
                UserStatus::Active
            };
            let day = (i % 30) as u32 + 1;
            DemoUser {
                id: i as i64 + 1,
                name: format!("User {}", i + 1),
                email: format!("user{}@example.com", i + 1),
                role: role.to_string(),
                status,
                last_login: NaiveDate::from_ymd_opt(2025, 1, day).unwrap_or_default(),
            }
        })
        .collect()
}

pub fn demo_columns() -> Vec<Column<DemoUser>> {
    vec![
        Column::new("ID", "id")
            .sortable()
            .describe("Unique identifier for each user in the system."),
        Column::new("User", "name")
            .sortable()
            .describe("Full name of the registered user along with their contact email.")
            .render_with(|user| format!("{} <{}>", user.name, user.email)),
        Column::new("Role", "role")
            .sortable()
            .describe("Access level assigned to the user (Admin, Editor, Viewer)."),
        Column::new("Status", "status").sortable().describe(
            "Current account status: Active (can login), Inactive (banned), or Pending (awaiting approval).",
        ),
        Column::new("Last Login", "last_login")
            .sortable()
            .describe("The date of the user's most recent successful login activity."),
        Column::new("Actions", "id")
            .describe("Manage users: Edit details or delete account.")
            .align_right()
            .render_with(|_| "✎ ✗".to_string()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::table::{SortDirection, SortState, paginate, sort_rows};

    #[test]
    fn test_demo_users_deterministic() {
        let users = demo_users();
        assert_eq!(users.len(), DEMO_USER_COUNT);
        assert_eq!(users[0].role, "Admin");
        assert_eq!(users[0].status, UserStatus::Inactive);
        assert_eq!(users[1].role, "Editor");
        assert_eq!(users[5].status, UserStatus::Pending);
        assert_eq!(users[30].last_login, NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
        assert_eq!(users, demo_users());
    }

    #[test]
    fn test_sort_by_name_is_lexicographic() {
        let sort = SortState { column: Some("name".into()), direction: SortDirection::Ascending };
        let sorted = sort_rows(&demo_users(), &sort);
        assert_eq!(sorted[0].name, "User 1");
        assert_eq!(sorted[1].name, "User 10");
    }

    #[test]
    fn test_last_page_of_demo_data() {
        let users = demo_users();
        let page = paginate(&users, 5, 10).unwrap();
        let ids: Vec<i64> = page.iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![41, 42, 43, 44, 45]);
    }

    #[test]
    fn test_actions_column_is_not_sortable() {
        let columns = demo_columns();
        let actions = columns.last().unwrap();
        assert_eq!(actions.header, "Actions");
        assert!(!actions.sortable);
        assert_eq!(actions.cell_text(&demo_users()[0]), "✎ ✗");
    }
}
