use super::utils::SlotLoadGuard;
use crate::api::{ApiClient, ApiError, TimeSlot, VisitorRequestPayload, VisitorType, Warehouse};
use std::rc::Rc;

/// Public (token-less) calls behind the visitor request form.
#[derive(Clone)]
pub struct LandingRepository {
    client: Rc<ApiClient>,
}

impl LandingRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn visitor_types(&self) -> Result<Vec<VisitorType>, ApiError> {
        self.client.get_public_visitor_types().await
    }

    pub async fn warehouses(&self) -> Result<Vec<Warehouse>, ApiError> {
        self.client.get_public_warehouses().await
    }

    pub async fn time_slots(&self, warehouse_id: &str) -> Result<Vec<TimeSlot>, ApiError> {
        self.client.get_public_time_slots(warehouse_id).await
    }

    /// Returns `None` when a newer warehouse selection superseded this load.
    pub async fn time_slots_for_ticket(
        &self,
        guard: &SlotLoadGuard,
        ticket: u64,
        warehouse_id: &str,
    ) -> Option<Vec<TimeSlot>> {
        let result = self.time_slots(warehouse_id).await;
        if !guard.is_current(ticket) {
            log::debug!("dropping stale time slots for warehouse {}", warehouse_id);
            return None;
        }
        Some(result.unwrap_or_else(|err| {
            log::error!("Error fetching time slots: {}", err);
            Vec::new()
        }))
    }

    pub async fn submit(&self, payload: &VisitorRequestPayload) -> Result<(), ApiError> {
        self.client.submit_visitor_request(payload).await
    }
}
