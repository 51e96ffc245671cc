use crate::api::{ActiveFilter, ApiClient, ApiError, Warehouse, WarehousePayload};
use std::rc::Rc;

#[derive(Clone)]
pub struct WarehousesRepository {
    client: Rc<ApiClient>,
}

impl WarehousesRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn list(&self, filter: ActiveFilter) -> Result<Vec<Warehouse>, ApiError> {
        self.client.get_warehouses(filter).await
    }

    /// Creates when `id` is `None`, otherwise updates.
    pub async fn save(&self, id: Option<&str>, payload: &WarehousePayload) -> Result<(), ApiError> {
        match id {
            Some(id) => self.client.update_warehouse(id, payload).await,
            None => self.client.create_warehouse(payload).await,
        }
    }

    pub async fn set_active(&self, id: &str, active: bool) -> Result<(), ApiError> {
        self.client.set_warehouse_active(id, active).await
    }
}
