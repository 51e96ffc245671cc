use reqwest::Method;

use super::{
    client::{Access, ApiClient},
    types::{ApiError, User, UserPayload},
    ActiveFilter,
};

impl ApiClient {
    pub async fn get_users(&self, filter: ActiveFilter) -> Result<Vec<User>, ApiError> {
        let path = match filter {
            ActiveFilter::Active => "/users/getall",
            ActiveFilter::Disabled => "/users/disabled",
        };
        let mut users: Vec<User> = self
            .get_list(path, Access::Authenticated, "Failed to load users.")
            .await?;
        for user in &mut users {
            user.is_active = filter.is_active();
        }
        Ok(users)
    }

    pub async fn get_user(&self, id: &str) -> Result<User, ApiError> {
        self.get_json(
            &format!("/users/{}", id),
            Access::Authenticated,
            "Failed to load user.",
        )
        .await
    }

    pub async fn get_users_by_warehouse(&self, warehouse_id: &str) -> Result<Vec<User>, ApiError> {
        self.get_list(
            &format!("/users/warehouse/{}", warehouse_id),
            Access::Authenticated,
            "Failed to load warehouse users.",
        )
        .await
    }

    pub async fn create_user(&self, payload: &UserPayload) -> Result<(), ApiError> {
        self.send_json(
            Method::POST,
            "/users/create",
            Some(payload),
            Access::Authenticated,
            "Failed to save user.",
        )
        .await
        .map(|_| ())
    }

    pub async fn update_user(&self, id: &str, payload: &UserPayload) -> Result<(), ApiError> {
        self.send_json(
            Method::PUT,
            &format!("/users/{}", id),
            Some(payload),
            Access::Authenticated,
            "Failed to save user.",
        )
        .await
        .map(|_| ())
    }

    pub async fn delete_user(&self, id: &str) -> Result<(), ApiError> {
        self.send_json(
            Method::DELETE,
            &format!("/users/{}", id),
            None::<&()>,
            Access::Authenticated,
            "Failed to delete user.",
        )
        .await
        .map(|_| ())
    }

    pub async fn set_user_active(&self, id: &str, active: bool) -> Result<(), ApiError> {
        let action = if active { "enable" } else { "disable" };
        self.send_json(
            Method::PUT,
            &format!("/users/{}/{}", id, action),
            None::<&()>,
            Access::Authenticated,
            if active {
                "Failed to enable user."
            } else {
                "Failed to disable user."
            },
        )
        .await
        .map(|_| ())
    }
}
