use reqwest::Method;

use super::{
    client::{Access, ApiClient},
    types::{ApiError, RequestStatus, VisitRecordPayload, VisitorRequest, VisitorRequestPayload},
};

impl ApiClient {
    pub async fn get_all_visitors(&self) -> Result<Vec<VisitorRequest>, ApiError> {
        self.get_list(
            "/visitors/getall",
            Access::Authenticated,
            "Failed to load visitor requests.",
        )
        .await
    }

    pub async fn get_visitor(&self, id: &str) -> Result<VisitorRequest, ApiError> {
        self.get_json(
            &format!("/visitors/{}", id),
            Access::Authenticated,
            "Failed to load visitor request.",
        )
        .await
    }

    /// Public submission from the landing page; never carries a token.
    pub async fn submit_visitor_request(
        &self,
        payload: &VisitorRequestPayload,
    ) -> Result<(), ApiError> {
        self.send_json(
            Method::POST,
            "/visitors/create",
            Some(payload),
            Access::Public,
            "Failed to submit request. Please try again.",
        )
        .await
        .map(|_| ())
    }

    pub async fn update_visitor(
        &self,
        id: &str,
        payload: &VisitorRequestPayload,
    ) -> Result<(), ApiError> {
        self.send_json(
            Method::PUT,
            &format!("/visitors/{}", id),
            Some(payload),
            Access::Authenticated,
            "Failed to update visitor request.",
        )
        .await
        .map(|_| ())
    }

    pub async fn delete_visitor(&self, id: &str) -> Result<(), ApiError> {
        self.send_json(
            Method::DELETE,
            &format!("/visitors/{}", id),
            None::<&()>,
            Access::Authenticated,
            "Failed to delete visitor request.",
        )
        .await
        .map(|_| ())
    }

    pub async fn approve_visitor(&self, id: &str) -> Result<(), ApiError> {
        self.send_json(
            Method::PUT,
            &format!("/visitors/{}/approve", id),
            None::<&()>,
            Access::Authenticated,
            "Failed to approve request.",
        )
        .await
        .map(|_| ())
    }

    pub async fn reject_visitor(&self, id: &str) -> Result<(), ApiError> {
        self.send_json(
            Method::PUT,
            &format!("/visitors/{}/reject", id),
            None::<&()>,
            Access::Authenticated,
            "Failed to reject request.",
        )
        .await
        .map(|_| ())
    }

    pub async fn get_visitors_by_user(&self, user_id: &str) -> Result<Vec<VisitorRequest>, ApiError> {
        self.get_list(
            &format!("/visitors/user/{}", user_id),
            Access::Authenticated,
            "Failed to load your requests.",
        )
        .await
    }

    /// Approver-scoped bucket; `RequestStatus::Other` has no endpoint.
    pub async fn get_visitors_by_user_status(
        &self,
        user_id: &str,
        status: RequestStatus,
    ) -> Result<Vec<VisitorRequest>, ApiError> {
        let segment = match status {
            RequestStatus::Pending => "pending",
            RequestStatus::Approved => "approved",
            RequestStatus::Rejected => "rejected",
            RequestStatus::Other => {
                return Err(ApiError::validation("Unsupported request status filter."))
            }
        };
        self.get_list(
            &format!("/visitors/user/{}/{}", user_id, segment),
            Access::Authenticated,
            "Failed to load visitor requests.",
        )
        .await
    }

    pub async fn get_visitors_by_warehouse(
        &self,
        warehouse_id: &str,
    ) -> Result<Vec<VisitorRequest>, ApiError> {
        self.get_list(
            &format!("/visitors/warehouse/{}", warehouse_id),
            Access::Authenticated,
            "Failed to load warehouse requests.",
        )
        .await
    }

    pub async fn get_today_visitors_by_warehouse(
        &self,
        warehouse_id: &str,
    ) -> Result<Vec<VisitorRequest>, ApiError> {
        self.get_list(
            &format!("/visitors/warehouse/{}/today", warehouse_id),
            Access::Authenticated,
            "Failed to load today's requests.",
        )
        .await
    }

    pub async fn record_visit(&self, id: &str, payload: &VisitRecordPayload) -> Result<(), ApiError> {
        self.send_json(
            Method::PUT,
            &format!("/visitors/{}/visit", id),
            Some(payload),
            Access::Authenticated,
            "Failed to record visit.",
        )
        .await
        .map(|_| ())
    }
}
