use crate::api::{CreateWorkflowPayload, UpdateWorkflowPayload, User, WorkflowStep};
use std::collections::BTreeMap;

pub const DELETE_CONFIRM_MESSAGE: &str = "Are you sure you want to delete this workflow step?";
pub const SAVE_FAILED_MESSAGE: &str = "An error occurred while saving.";

pub type WorkflowFormErrors = BTreeMap<&'static str, String>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkflowForm {
    pub id: Option<String>,
    pub visitor_type_id: String,
    pub step_no: String,
    /// Approver user id.
    pub approver: String,
}

/// Create is scoped by warehouse and visitor type; update only touches the step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkflowSave {
    Create(CreateWorkflowPayload),
    Update {
        id: String,
        payload: UpdateWorkflowPayload,
    },
}

impl WorkflowForm {
    /// Steps carry the approver's display name, so the id is recovered from
    /// the warehouse user list; no match leaves the select empty.
    pub fn from_step(step: &WorkflowStep, approvers: &[User]) -> Self {
        Self {
            id: Some(step.id.clone()),
            visitor_type_id: String::new(),
            step_no: step.step_no.to_string(),
            approver: approvers
                .iter()
                .find(|user| user.name == step.approver)
                .map(|user| user.id.clone())
                .unwrap_or_default(),
        }
    }

    pub fn is_edit(&self) -> bool {
        self.id.is_some()
    }

    pub fn title(&self) -> &'static str {
        if self.is_edit() {
            "Edit Workflow Step"
        } else {
            "Add New Workflow Step"
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_edit() {
            "Update"
        } else {
            "Create"
        }
    }

    pub fn validate(&self) -> WorkflowFormErrors {
        let mut errors = WorkflowFormErrors::new();
        if !self.is_edit() && self.visitor_type_id.trim().is_empty() {
            errors.insert("visitor_type_id", "Visitor Type is required".into());
        }
        if let Err(message) = parse_step_no(&self.step_no) {
            errors.insert("step_no", message);
        }
        if self.approver.trim().is_empty() {
            errors.insert("approver", "Approver is required".into());
        }
        errors
    }

    /// Returns `None` while validation errors remain.
    pub fn to_save(&self, warehouse_id: &str) -> Option<WorkflowSave> {
        let step_no = parse_step_no(&self.step_no).ok()?;
        if !self.validate().is_empty() {
            return None;
        }
        let approver = self.approver.trim().to_string();
        Some(match &self.id {
            Some(id) => WorkflowSave::Update {
                id: id.clone(),
                payload: UpdateWorkflowPayload { step_no, approver },
            },
            None => WorkflowSave::Create(CreateWorkflowPayload {
                warehouse_id: warehouse_id.to_string(),
                visitor_type_id: self.visitor_type_id.clone(),
                step_no,
                approver,
            }),
        })
    }
}

fn parse_step_no(raw: &str) -> Result<u32, String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err("Step Number is required".into());
    }
    match raw.parse::<i64>() {
        Ok(value) if value >= 1 => u32::try_from(value).map_err(|_| "Invalid step number".into()),
        Ok(_) => Err("Step Number must be at least 1".into()),
        Err(_) => Err("Invalid step number".into()),
    }
}
