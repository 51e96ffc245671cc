use crate::api::{RequestStatus, VisitorRequest};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ApprovalTab {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl ApprovalTab {
    pub const ALL: [ApprovalTab; 3] = [
        ApprovalTab::Pending,
        ApprovalTab::Approved,
        ApprovalTab::Rejected,
    ];

    pub fn status(&self) -> RequestStatus {
        match self {
            ApprovalTab::Pending => RequestStatus::Pending,
            ApprovalTab::Approved => RequestStatus::Approved,
            ApprovalTab::Rejected => RequestStatus::Rejected,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApprovalDecision {
    Approve,
    Reject,
}

impl ApprovalDecision {
    pub fn success_message(&self) -> &'static str {
        match self {
            ApprovalDecision::Approve => "Visitor request approved.",
            ApprovalDecision::Reject => "Visitor request rejected.",
        }
    }
}

/// The three disjoint request sets an approver works through.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApprovalBuckets {
    pub pending: Vec<VisitorRequest>,
    pub approved: Vec<VisitorRequest>,
    pub rejected: Vec<VisitorRequest>,
}

impl ApprovalBuckets {
    pub fn items(&self, tab: ApprovalTab) -> &[VisitorRequest] {
        match tab {
            ApprovalTab::Pending => &self.pending,
            ApprovalTab::Approved => &self.approved,
            ApprovalTab::Rejected => &self.rejected,
        }
    }

    pub fn count(&self, tab: ApprovalTab) -> usize {
        self.items(tab).len()
    }

    pub fn total(&self) -> usize {
        ApprovalTab::ALL.iter().map(|tab| self.count(*tab)).sum()
    }

    pub fn tab_label(&self, tab: ApprovalTab) -> String {
        format!("{} ({})", tab.status().label(), self.count(tab))
    }
}
