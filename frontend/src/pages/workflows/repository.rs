use super::utils::WorkflowSave;
use crate::api::{ActiveFilter, ApiClient, ApiError, User, VisitorType, Warehouse, WorkflowGroup};
use std::rc::Rc;

#[derive(Clone)]
pub struct WorkflowsRepository {
    client: Rc<ApiClient>,
}

impl WorkflowsRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn warehouses(&self) -> Result<Vec<Warehouse>, ApiError> {
        self.client.get_warehouses(ActiveFilter::Active).await
    }

    pub async fn visitor_types(&self) -> Result<Vec<VisitorType>, ApiError> {
        self.client.get_visitor_types(ActiveFilter::Active).await
    }

    /// Approver candidates are the users assigned to the warehouse.
    pub async fn approvers(&self, warehouse_id: &str) -> Result<Vec<User>, ApiError> {
        self.client.get_users_by_warehouse(warehouse_id).await
    }

    pub async fn list(&self, warehouse_id: &str) -> Result<Vec<WorkflowGroup>, ApiError> {
        self.client.get_workflows(warehouse_id).await
    }

    pub async fn save(&self, request: &WorkflowSave) -> Result<(), ApiError> {
        match request {
            WorkflowSave::Create(payload) => self.client.create_workflow_step(payload).await,
            WorkflowSave::Update { id, payload } => {
                self.client.update_workflow_step(id, payload).await
            }
        }
    }

    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.client.delete_workflow_step(id).await
    }
}
