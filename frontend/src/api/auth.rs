use reqwest::Method;

use super::{
    client::{Access, ApiClient},
    types::{ApiError, LoginRequest, LoginResponse, SessionUser, User},
};

impl ApiClient {
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let body = self
            .send_json(
                Method::POST,
                "/auth/login",
                Some(request),
                Access::Public,
                "Login failed. Please check your credentials.",
            )
            .await?;
        super::client::decode_payload(body, "Login failed. Please check your credentials.")
    }

    pub async fn verify_session(&self) -> Result<User, ApiError> {
        let session: SessionUser = self
            .get_json("/auth/verify", Access::Authenticated, "Session expired.")
            .await?;
        Ok(session.user)
    }

    pub async fn get_profile(&self) -> Result<User, ApiError> {
        let session: SessionUser = self
            .get_json("/auth/profile", Access::Authenticated, "Failed to load profile.")
            .await?;
        Ok(session.user)
    }

    pub async fn logout(&self) -> Result<(), ApiError> {
        self.send_json(
            Method::POST,
            "/auth/logout",
            None::<&()>,
            Access::Authenticated,
            "Logout failed.",
        )
        .await
        .map(|_| ())
    }
}
