use reqwest::Method;

use super::{
    client::{Access, ApiClient},
    types::{ApiError, VisitorType, VisitorTypePayload},
    ActiveFilter,
};

impl ApiClient {
    pub async fn get_visitor_types(
        &self,
        filter: ActiveFilter,
    ) -> Result<Vec<VisitorType>, ApiError> {
        let path = match filter {
            ActiveFilter::Active => "/visitortypes/getall",
            ActiveFilter::Disabled => "/visitortypes/disabled",
        };
        let mut visitor_types: Vec<VisitorType> = self
            .get_list(path, Access::Authenticated, "Failed to load visitor types.")
            .await?;
        for visitor_type in &mut visitor_types {
            visitor_type.is_active = filter.is_active();
        }
        Ok(visitor_types)
    }

    pub async fn get_public_visitor_types(&self) -> Result<Vec<VisitorType>, ApiError> {
        self.get_list(
            "/visitortypes/getall",
            Access::Public,
            "Failed to load visitor types.",
        )
        .await
    }

    pub async fn get_visitor_type(&self, id: &str) -> Result<VisitorType, ApiError> {
        self.get_json(
            &format!("/visitortypes/{}", id),
            Access::Authenticated,
            "Failed to load visitor type.",
        )
        .await
    }

    pub async fn create_visitor_type(&self, payload: &VisitorTypePayload) -> Result<(), ApiError> {
        self.send_json(
            Method::POST,
            "/visitortypes/create",
            Some(payload),
            Access::Authenticated,
            "Failed to save visitor type.",
        )
        .await
        .map(|_| ())
    }

    pub async fn update_visitor_type(
        &self,
        id: &str,
        payload: &VisitorTypePayload,
    ) -> Result<(), ApiError> {
        self.send_json(
            Method::PUT,
            &format!("/visitortypes/{}", id),
            Some(payload),
            Access::Authenticated,
            "Failed to save visitor type.",
        )
        .await
        .map(|_| ())
    }

    pub async fn delete_visitor_type(&self, id: &str) -> Result<(), ApiError> {
        self.send_json(
            Method::DELETE,
            &format!("/visitortypes/{}", id),
            None::<&()>,
            Access::Authenticated,
            "Failed to delete visitor type.",
        )
        .await
        .map(|_| ())
    }

    pub async fn set_visitor_type_active(&self, id: &str, active: bool) -> Result<(), ApiError> {
        let action = if active { "enable" } else { "disable" };
        self.send_json(
            Method::PUT,
            &format!("/visitortypes/{}/{}", id, action),
            None::<&()>,
            Access::Authenticated,
            if active {
                "Failed to enable visitor type."
            } else {
                "Failed to disable visitor type."
            },
        )
        .await
        .map(|_| ())
    }
}
