use reqwest::Method;

use super::{
    client::{Access, ApiClient},
    types::{ApiError, CreateWorkflowPayload, UpdateWorkflowPayload, WorkflowGroup},
};

impl ApiClient {
    pub async fn get_workflows(&self, warehouse_id: &str) -> Result<Vec<WorkflowGroup>, ApiError> {
        self.get_list(
            &format!("/warehouse-workflow/{}", warehouse_id),
            Access::Authenticated,
            "Failed to load workflows.",
        )
        .await
    }

    pub async fn create_workflow_step(&self, payload: &CreateWorkflowPayload) -> Result<(), ApiError> {
        self.send_json(
            Method::POST,
            "/warehouse-workflow",
            Some(payload),
            Access::Authenticated,
            "An error occurred while saving.",
        )
        .await
        .map(|_| ())
    }

    pub async fn update_workflow_step(
        &self,
        id: &str,
        payload: &UpdateWorkflowPayload,
    ) -> Result<(), ApiError> {
        self.send_json(
            Method::PUT,
            &format!("/warehouse-workflow/{}", id),
            Some(payload),
            Access::Authenticated,
            "An error occurred while saving.",
        )
        .await
        .map(|_| ())
    }

    pub async fn delete_workflow_step(&self, id: &str) -> Result<(), ApiError> {
        self.send_json(
            Method::DELETE,
            &format!("/warehouse-workflow/{}", id),
            None::<&()>,
            Access::Authenticated,
            "Failed to delete workflow step.",
        )
        .await
        .map(|_| ())
    }
}
