use super::utils::update_payload;
use crate::api::{ActiveFilter, ApiClient, ApiError, TimeSlot, TimeSlotPayload, Warehouse};
use std::rc::Rc;

#[derive(Clone)]
pub struct TimeSlotsRepository {
    client: Rc<ApiClient>,
}

impl TimeSlotsRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn warehouses(&self) -> Result<Vec<Warehouse>, ApiError> {
        self.client.get_warehouses(ActiveFilter::Active).await
    }

    pub async fn list(&self, warehouse_id: &str) -> Result<Vec<TimeSlot>, ApiError> {
        self.client.get_time_slots_by_warehouse(warehouse_id).await
    }

    pub async fn save(
        &self,
        warehouse_id: &str,
        id: Option<&str>,
        payload: TimeSlotPayload,
    ) -> Result<(), ApiError> {
        match id {
            Some(id) => {
                self.client
                    .update_time_slot(id, &update_payload(payload, warehouse_id))
                    .await
            }
            None => self.client.create_time_slot(warehouse_id, &payload).await,
        }
    }

    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.client.delete_time_slot(id).await
    }
}
