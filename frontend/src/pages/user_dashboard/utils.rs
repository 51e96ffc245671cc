use crate::api::{RequestStatus, VisitorRequest};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub pending: usize,
    pub approved: usize,
    pub rejected: usize,
    pub total: usize,
}

impl StatusCounts {
    pub fn from_requests(items: &[VisitorRequest]) -> Self {
        let mut counts = StatusCounts {
            total: items.len(),
            ..StatusCounts::default()
        };
        for item in items {
            match item.status_kind() {
                RequestStatus::Pending => counts.pending += 1,
                RequestStatus::Approved => counts.approved += 1,
                RequestStatus::Rejected => counts.rejected += 1,
                RequestStatus::Other => {}
            }
        }
        counts
    }
}
