use serde_json::Value;

use super::{
    client::{Access, ApiClient},
    types::{flexible, ApiError},
};

impl ApiClient {
    /// Role names; the backend may send plain strings or `{ name }` objects.
    pub async fn get_roles(&self) -> Result<Vec<String>, ApiError> {
        let raw: Vec<Value> = self
            .get_list("/role/getall", Access::Authenticated, "Failed to load roles.")
            .await?;
        Ok(raw
            .iter()
            .filter_map(flexible::value_to_name)
            .filter(|name| !name.trim().is_empty())
            .collect())
    }
}
