use reqwest::Method;

use super::{
    client::{Access, ApiClient},
    types::{ApiError, TimeSlot, TimeSlotPayload, UpdateTimeSlotPayload},
};

impl ApiClient {
    pub async fn get_all_time_slots(&self) -> Result<Vec<TimeSlot>, ApiError> {
        self.get_list(
            "/warehouse-time-slots/getall",
            Access::Authenticated,
            "Failed to load time slots.",
        )
        .await
    }

    /// Slots of one warehouse. The endpoint may answer with a single object;
    /// it is normalised to a list.
    pub async fn get_time_slots_by_warehouse(
        &self,
        warehouse_id: &str,
    ) -> Result<Vec<TimeSlot>, ApiError> {
        self.get_list(
            &format!("/warehouse-time-slots/{}", warehouse_id),
            Access::Authenticated,
            "Failed to load time slots.",
        )
        .await
    }

    pub async fn get_public_time_slots(&self, warehouse_id: &str) -> Result<Vec<TimeSlot>, ApiError> {
        self.get_list(
            &format!("/warehouse-time-slots/{}", warehouse_id),
            Access::Public,
            "Failed to load time slots.",
        )
        .await
    }

    pub async fn create_time_slot(
        &self,
        warehouse_id: &str,
        payload: &TimeSlotPayload,
    ) -> Result<(), ApiError> {
        self.send_json(
            Method::POST,
            &format!("/warehouse-time-slots/warehouse/{}", warehouse_id),
            Some(payload),
            Access::Authenticated,
            "Failed to save time slot.",
        )
        .await
        .map(|_| ())
    }

    pub async fn update_time_slot(
        &self,
        id: &str,
        payload: &UpdateTimeSlotPayload,
    ) -> Result<(), ApiError> {
        self.send_json(
            Method::PUT,
            &format!("/warehouse-time-slots/{}", id),
            Some(payload),
            Access::Authenticated,
            "Failed to save time slot.",
        )
        .await
        .map(|_| ())
    }

    pub async fn delete_time_slot(&self, id: &str) -> Result<(), ApiError> {
        self.send_json(
            Method::DELETE,
            &format!("/warehouse-time-slots/{}", id),
            None::<&()>,
            Access::Authenticated,
            "Failed to delete time slot.",
        )
        .await
        .map(|_| ())
    }
}
