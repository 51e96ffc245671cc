use crate::{
    api::{RequestStatus, User, VisitorRequest},
    utils::time::date_part,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminStats {
    pub total_passes: usize,
    pub active_users: usize,
    pub pending_approvals: usize,
    pub approved_today: usize,
}

impl AdminStats {
    /// `approved_today` counts approved requests whose visit date is `today`.
    pub fn compute(visitors: &[VisitorRequest], users: &[User], today: NaiveDate) -> Self {
        let mut stats = AdminStats {
            total_passes: visitors.len(),
            active_users: users.iter().filter(|user| user.is_active).count(),
            ..AdminStats::default()
        };
        for visitor in visitors {
            match visitor.status_kind() {
                RequestStatus::Pending => stats.pending_approvals += 1,
                RequestStatus::Approved if date_part(&visitor.date) == Some(today) => {
                    stats.approved_today += 1
                }
                _ => {}
            }
        }
        stats
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickLink {
    pub label: &'static str,
    pub description: &'static str,
    pub href: &'static str,
}

pub const QUICK_LINKS: [QuickLink; 4] = [
    QuickLink {
        label: "Manage Users",
        description: "Create accounts and assign roles",
        href: "/users",
    },
    QuickLink {
        label: "Warehouses",
        description: "Add or disable sites",
        href: "/warehouses",
    },
    QuickLink {
        label: "Visitor Requests",
        description: "Review every submitted gate pass",
        href: "/visitor-requests",
    },
    QuickLink {
        label: "Workflows",
        description: "Configure approval chains",
        href: "/workflow-management",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn stats_are_derived_from_loaded_lists() {
        let visitors: Vec<VisitorRequest> = serde_json::from_value(json!([
            { "id": "1", "status": "pending", "date": "2030-01-10" },
            { "id": "2", "status": "approved", "date": "2030-01-10" },
            { "id": "3", "status": "approved", "date": "2030-01-11T08:00:00Z" },
            { "id": "4", "status": "rejected", "date": "2030-01-10" }
        ]))
        .unwrap();
        let users: Vec<User> = serde_json::from_value(json!([
            { "id": "a", "isActive": true },
            { "id": "b", "isActive": false },
            { "id": "c" }
        ]))
        .unwrap();
        let today = NaiveDate::from_ymd_opt(2030, 1, 10).unwrap();

        assert_eq!(
            AdminStats::compute(&visitors, &users, today),
            AdminStats {
                total_passes: 4,
                active_users: 2,
                pending_approvals: 1,
                approved_today: 1,
            }
        );
    }

    #[test]
    fn quick_links_point_at_management_routes() {
        assert!(QUICK_LINKS.iter().all(|link| link.href.starts_with('/')));
    }
}
