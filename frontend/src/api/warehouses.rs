use reqwest::Method;

use super::{
    client::{Access, ApiClient},
    types::{ApiError, Warehouse, WarehousePayload},
    ActiveFilter,
};

impl ApiClient {
    pub async fn get_warehouses(&self, filter: ActiveFilter) -> Result<Vec<Warehouse>, ApiError> {
        let path = match filter {
            ActiveFilter::Active => "/warehouse/getall",
            ActiveFilter::Disabled => "/warehouse/disabled",
        };
        let mut warehouses: Vec<Warehouse> = self
            .get_list(path, Access::Authenticated, "Failed to load warehouses.")
            .await?;
        for warehouse in &mut warehouses {
            warehouse.is_active = filter.is_active();
        }
        Ok(warehouses)
    }

    /// Unauthenticated list used by the visitor form.
    pub async fn get_public_warehouses(&self) -> Result<Vec<Warehouse>, ApiError> {
        self.get_list("/warehouse/getall", Access::Public, "Failed to load warehouses.")
            .await
    }

    pub async fn get_warehouse(&self, id: &str) -> Result<Warehouse, ApiError> {
        self.get_json(
            &format!("/warehouse/{}", id),
            Access::Authenticated,
            "Failed to load warehouse.",
        )
        .await
    }

    pub async fn create_warehouse(&self, payload: &WarehousePayload) -> Result<(), ApiError> {
        self.send_json(
            Method::POST,
            "/warehouse/create",
            Some(payload),
            Access::Authenticated,
            "Failed to save warehouse.",
        )
        .await
        .map(|_| ())
    }

    pub async fn update_warehouse(
        &self,
        id: &str,
        payload: &WarehousePayload,
    ) -> Result<(), ApiError> {
        self.send_json(
            Method::PUT,
            &format!("/warehouse/{}", id),
            Some(payload),
            Access::Authenticated,
            "Failed to save warehouse.",
        )
        .await
        .map(|_| ())
    }

    pub async fn delete_warehouse(&self, id: &str) -> Result<(), ApiError> {
        self.send_json(
            Method::DELETE,
            &format!("/warehouse/{}", id),
            None::<&()>,
            Access::Authenticated,
            "Failed to delete warehouse.",
        )
        .await
        .map(|_| ())
    }

    pub async fn set_warehouse_active(&self, id: &str, active: bool) -> Result<(), ApiError> {
        let action = if active { "enable" } else { "disable" };
        self.send_json(
            Method::PUT,
            &format!("/warehouse/{}/{}", id, action),
            None::<&()>,
            Access::Authenticated,
            if active {
                "Failed to enable warehouse."
            } else {
                "Failed to disable warehouse."
            },
        )
        .await
        .map(|_| ())
    }
}
