use leptos::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
#[error("{error}")]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.error.into_view()
    }
}

impl ApiError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "VALIDATION_ERROR".to_string(),
            details: None,
        }
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "UNKNOWN".to_string(),
            details: None,
        }
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "REQUEST_FAILED".to_string(),
            details: None,
        }
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "UNAUTHORIZED".to_string(),
            details: None,
        }
    }

    pub fn http(status: u16, msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: format!("HTTP_{}", status),
            details: None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.code == "UNAUTHORIZED" || self.code == "HTTP_401"
    }
}

/// Deserializers that tolerate the loose typing of the gate-pass backend:
/// numeric ids, nested `{ id, name }` references and nullable strings.
pub(crate) mod flexible {
    use serde::{de::Error, Deserialize, Deserializer};
    use serde_json::Value;

    pub fn value_to_id(value: &Value) -> Option<String> {
        match value {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Object(map) => map.get("id").or_else(|| map.get("_id")).and_then(value_to_id),
            _ => None,
        }
    }

    pub fn value_to_name(value: &Value) -> Option<String> {
        match value {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Object(map) => map.get("name").and_then(value_to_name),
            _ => None,
        }
    }

    pub fn id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
        let value = Value::deserialize(deserializer)?;
        value_to_id(&value).ok_or_else(|| D::Error::custom("expected a string or numeric id"))
    }

    pub fn opt_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(value.as_ref().and_then(value_to_id))
    }

    /// Plain string, number, `{ name }` object or null (empty string).
    pub fn name<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(value.as_ref().and_then(value_to_name).unwrap_or_default())
    }

    pub fn opt_string<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<String>, D::Error> {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(value
            .as_ref()
            .and_then(value_to_name)
            .filter(|s| !s.is_empty()))
    }

    pub fn number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
        let value = Value::deserialize(deserializer)?;
        match &value {
            Value::Number(n) => n
                .as_u64()
                .and_then(|n| u32::try_from(n).ok())
                .ok_or_else(|| D::Error::custom("expected a positive integer")),
            Value::String(s) => s
                .trim()
                .parse()
                .map_err(|_| D::Error::custom("expected a positive integer")),
            _ => Err(D::Error::custom("expected a positive integer")),
        }
    }

    pub fn default_true() -> bool {
        true
    }
}

/// Which list a soft-delete page is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveFilter {
    #[default]
    Active,
    Disabled,
}

impl ActiveFilter {
    pub fn toggled(self) -> Self {
        match self {
            ActiveFilter::Active => ActiveFilter::Disabled,
            ActiveFilter::Disabled => ActiveFilter::Active,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ActiveFilter::Active => "Active",
            ActiveFilter::Disabled => "Disabled",
        }
    }

    /// State of every row returned by this filter's list endpoint.
    pub fn is_active(self) -> bool {
        self == ActiveFilter::Active
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Admin,
    Receptionist,
    Approver,
    User,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Admin, Role::Receptionist, Role::Approver, Role::User];

    /// Case-insensitive; anything unrecognised is treated as a plain user.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "admin" | "administrator" => Role::Admin,
            "receptionist" | "reception" => Role::Receptionist,
            "approver" => Role::Approver,
            _ => Role::User,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Receptionist => "Receptionist",
            Role::Approver => "Approver",
            Role::User => "User",
        }
    }

    pub fn dashboard_path(&self) -> &'static str {
        match self {
            Role::Admin => "/admin/admin-dashboard",
            Role::Receptionist => "/reception/reception-dashboard",
            Role::Approver => "/approver/approver-dashboard",
            Role::User => "/user/user-dashboard",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(alias = "_id", deserialize_with = "flexible::id")]
    pub id: String,
    #[serde(default, deserialize_with = "flexible::name")]
    pub name: String,
    #[serde(default, deserialize_with = "flexible::name")]
    pub email: String,
    #[serde(default, deserialize_with = "flexible::name")]
    pub phone: String,
    #[serde(default, deserialize_with = "flexible::name")]
    pub role: String,
    #[serde(
        default,
        alias = "warehouse_id",
        alias = "warehouse",
        deserialize_with = "flexible::opt_id"
    )]
    pub warehouse_id: Option<String>,
    #[serde(default, alias = "warehouse_name", deserialize_with = "flexible::opt_string")]
    pub warehouse_name: Option<String>,
    #[serde(default = "flexible::default_true", alias = "is_active")]
    pub is_active: bool,
}

impl User {
    pub fn role_kind(&self) -> Role {
        Role::parse(&self.role)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Warehouse {
    #[serde(alias = "_id", deserialize_with = "flexible::id")]
    pub id: String,
    #[serde(default, deserialize_with = "flexible::name")]
    pub name: String,
    #[serde(default, deserialize_with = "flexible::name")]
    pub location: String,
    #[serde(default = "flexible::default_true", alias = "is_active")]
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitorType {
    #[serde(alias = "_id", deserialize_with = "flexible::id")]
    pub id: String,
    #[serde(default, deserialize_with = "flexible::name")]
    pub name: String,
    #[serde(default = "flexible::default_true", alias = "is_active")]
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlot {
    #[serde(alias = "_id", deserialize_with = "flexible::id")]
    pub id: String,
    #[serde(default, deserialize_with = "flexible::name")]
    pub name: String,
    #[serde(default, deserialize_with = "flexible::name")]
    pub from: String,
    #[serde(default, deserialize_with = "flexible::name")]
    pub to: String,
    #[serde(default, alias = "warehouse_id", deserialize_with = "flexible::opt_id")]
    pub warehouse_id: Option<String>,
}

impl TimeSlot {
    pub fn label(&self) -> String {
        crate::utils::time::slot_label(&self.name, &self.from, &self.to)
    }
}

/// One `(step number, approver)` pair of a workflow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowStep {
    #[serde(alias = "_id", deserialize_with = "flexible::id")]
    pub id: String,
    #[serde(alias = "step_no", deserialize_with = "flexible::number")]
    pub step_no: u32,
    /// Approver display name.
    #[serde(default, deserialize_with = "flexible::name")]
    pub approver: String,
}

/// Steps of one visitor type within a warehouse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowGroup {
    #[serde(default, alias = "visitor_type", deserialize_with = "flexible::name")]
    pub visitor_type: String,
    #[serde(default)]
    pub steps: Vec<WorkflowStep>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestStatus {
    Pending,
    Approved,
    Rejected,
    Other,
}

impl RequestStatus {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "pending" => RequestStatus::Pending,
            "approved" => RequestStatus::Approved,
            "rejected" => RequestStatus::Rejected,
            _ => RequestStatus::Other,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "Pending",
            RequestStatus::Approved => "Approved",
            RequestStatus::Rejected => "Rejected",
            RequestStatus::Other => "Unknown",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VisitStatus {
    #[default]
    Pending,
    Visited,
    NoShow,
}

impl VisitStatus {
    pub const ALL: [VisitStatus; 3] = [VisitStatus::Pending, VisitStatus::Visited, VisitStatus::NoShow];

    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "visited" => VisitStatus::Visited,
            "no_show" | "noshow" | "no-show" => VisitStatus::NoShow,
            _ => VisitStatus::Pending,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            VisitStatus::Pending => "pending",
            VisitStatus::Visited => "visited",
            VisitStatus::NoShow => "no_show",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            VisitStatus::Pending => "Pending",
            VisitStatus::Visited => "Visited",
            VisitStatus::NoShow => "No Show",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Punctuality {
    #[default]
    OnTime,
    Late,
}

impl Punctuality {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "late" => Punctuality::Late,
            _ => Punctuality::OnTime,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Punctuality::OnTime => "on_time",
            Punctuality::Late => "late",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Punctuality::OnTime => "On Time",
            Punctuality::Late => "Late",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccompanyingPerson {
    #[serde(default, deserialize_with = "flexible::name")]
    pub name: String,
    #[serde(default, deserialize_with = "flexible::name")]
    pub phone: String,
    #[serde(default, deserialize_with = "flexible::name")]
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitorRequest {
    #[serde(alias = "_id", deserialize_with = "flexible::id")]
    pub id: String,
    #[serde(default, deserialize_with = "flexible::name")]
    pub name: String,
    #[serde(default, deserialize_with = "flexible::name")]
    pub email: String,
    #[serde(default, deserialize_with = "flexible::name")]
    pub phone: String,
    #[serde(default, deserialize_with = "flexible::name")]
    pub description: String,
    #[serde(default, deserialize_with = "flexible::name")]
    pub date: String,
    #[serde(default, deserialize_with = "flexible::name")]
    pub status: String,
    #[serde(default, alias = "visitor_type_id", deserialize_with = "flexible::opt_id")]
    pub visitor_type_id: Option<String>,
    #[serde(
        default,
        alias = "visitor_type_name",
        alias = "visitorType",
        deserialize_with = "flexible::name"
    )]
    pub visitor_type_name: String,
    #[serde(default, alias = "warehouse_id", deserialize_with = "flexible::opt_id")]
    pub warehouse_id: Option<String>,
    #[serde(
        default,
        alias = "warehouse_name",
        alias = "warehouse",
        deserialize_with = "flexible::name"
    )]
    pub warehouse_name: String,
    #[serde(
        default,
        alias = "warehouse_time_slot_id",
        deserialize_with = "flexible::opt_id"
    )]
    pub warehouse_time_slot_id: Option<String>,
    #[serde(default, alias = "time_slot_name", deserialize_with = "flexible::name")]
    pub time_slot_name: String,
    #[serde(default, deserialize_with = "flexible::name")]
    pub from: String,
    #[serde(default, deserialize_with = "flexible::name")]
    pub to: String,
    #[serde(default)]
    pub accompanying: Vec<AccompanyingPerson>,
    #[serde(default, alias = "tracking_code", deserialize_with = "flexible::opt_string")]
    pub tracking_code: Option<String>,
    #[serde(default, alias = "visit_status", deserialize_with = "flexible::opt_string")]
    pub visit_status: Option<String>,
    #[serde(default, deserialize_with = "flexible::opt_string")]
    pub punctuality: Option<String>,
    #[serde(default, alias = "arrived_at", deserialize_with = "flexible::opt_string")]
    pub arrived_at: Option<String>,
    #[serde(default, alias = "checked_out_at", deserialize_with = "flexible::opt_string")]
    pub checked_out_at: Option<String>,
}

impl VisitorRequest {
    pub fn status_kind(&self) -> RequestStatus {
        RequestStatus::parse(&self.status)
    }

    pub fn visit_status_kind(&self) -> VisitStatus {
        self.visit_status
            .as_deref()
            .map(VisitStatus::parse)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionUser {
    pub user: User,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserPayload {
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub warehouse_id: String,
    pub role: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WarehousePayload {
    pub name: String,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VisitorTypePayload {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeSlotPayload {
    pub name: String,
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTimeSlotPayload {
    pub name: String,
    pub from: String,
    pub to: String,
    pub warehouse_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateWorkflowPayload {
    pub warehouse_id: String,
    pub visitor_type_id: String,
    pub step_no: u32,
    pub approver: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateWorkflowPayload {
    pub step_no: u32,
    pub approver: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitorRequestPayload {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub visitor_type_id: String,
    pub warehouse_id: String,
    pub warehouse_time_slot_id: String,
    pub date: String,
    pub description: String,
    pub accompanying: Vec<AccompanyingPerson>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitRecordPayload {
    pub visit_status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arrived_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checked_out_at: Option<String>,
    pub punctuality: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn api_error_helpers_set_codes() {
        let validation = ApiError::validation("invalid payload");
        assert_eq!(validation.code, "VALIDATION_ERROR");
        assert_eq!(validation.error, "invalid payload");
        assert!(validation.details.is_none());

        assert_eq!(ApiError::unknown("x").code, "UNKNOWN");
        assert_eq!(ApiError::request_failed("x").code, "REQUEST_FAILED");
        assert_eq!(ApiError::http(404, "x").code, "HTTP_404");
        assert!(ApiError::http(401, "x").is_unauthorized());
        assert!(ApiError::unauthorized("x").is_unauthorized());
    }

    #[test]
    fn api_error_display_and_string_conversion_match_error_text() {
        let error = ApiError::unknown("boom");
        assert_eq!(format!("{}", error), "boom");

        let raw: String = ApiError::validation("bad input").into();
        assert_eq!(raw, "bad input");
    }

    #[test]
    fn api_error_can_be_converted_to_view() {
        let _: View = ApiError::request_failed("request failed").into_view();
    }

    #[test]
    fn active_filter_toggles_between_lists() {
        assert_eq!(ActiveFilter::default(), ActiveFilter::Active);
        assert_eq!(ActiveFilter::Active.toggled(), ActiveFilter::Disabled);
        assert_eq!(ActiveFilter::Active.toggled().toggled(), ActiveFilter::Active);
    }

    #[test]
    fn role_parsing_is_case_insensitive_with_user_fallback() {
        assert_eq!(Role::parse("ADMIN"), Role::Admin);
        assert_eq!(Role::parse("receptionist"), Role::Receptionist);
        assert_eq!(Role::parse(" Approver "), Role::Approver);
        assert_eq!(Role::parse("user"), Role::User);
        assert_eq!(Role::parse("guard"), Role::User);
        assert_eq!(Role::Receptionist.dashboard_path(), "/reception/reception-dashboard");
    }

    #[test]
    fn user_accepts_numeric_ids_and_nested_references() {
        let user: User = serde_json::from_value(json!({
            "id": 7,
            "name": "Rita",
            "email": "rita@example.com",
            "phone": 5550101,
            "role": { "id": 2, "name": "Receptionist" },
            "warehouse": { "id": 3, "name": "North" },
            "is_active": false
        }))
        .unwrap();
        assert_eq!(user.id, "7");
        assert_eq!(user.phone, "5550101");
        assert_eq!(user.role_kind(), Role::Receptionist);
        assert_eq!(user.warehouse_id.as_deref(), Some("3"));
        assert!(!user.is_active);
    }

    #[test]
    fn entities_default_to_active_when_flag_missing() {
        let warehouse: Warehouse =
            serde_json::from_value(json!({ "id": "w1", "name": "North", "location": "Dock 4" }))
                .unwrap();
        assert!(warehouse.is_active);
    }

    #[test]
    fn workflow_step_number_accepts_strings() {
        let group: WorkflowGroup = serde_json::from_value(json!({
            "visitorType": "Contractor",
            "steps": [
                { "id": 1, "stepNo": "2", "approver": "Sam" },
                { "id": 2, "step_no": 3, "approver": { "name": "Ada" } }
            ]
        }))
        .unwrap();
        assert_eq!(group.visitor_type, "Contractor");
        assert_eq!(group.steps[0].step_no, 2);
        assert_eq!(group.steps[1].approver, "Ada");
    }

    #[test]
    fn visitor_request_reads_tracking_fields() {
        let request: VisitorRequest = serde_json::from_value(json!({
            "id": "v1",
            "name": "Visitor",
            "email": "v@example.com",
            "phone": "123",
            "date": "2024-05-03",
            "status": "APPROVED",
            "trackingCode": "GP-77",
            "visitStatus": "no_show",
            "accompanying": [{ "name": "Friend", "phone": "9", "email": "f@example.com" }]
        }))
        .unwrap();
        assert_eq!(request.status_kind(), RequestStatus::Approved);
        assert_eq!(request.visit_status_kind(), VisitStatus::NoShow);
        assert_eq!(request.tracking_code.as_deref(), Some("GP-77"));
        assert_eq!(request.accompanying.len(), 1);
    }

    #[test]
    fn payloads_use_backend_field_names() {
        let workflow = serde_json::to_value(CreateWorkflowPayload {
            warehouse_id: "w1".into(),
            visitor_type_id: "t1".into(),
            step_no: 1,
            approver: "u1".into(),
        })
        .unwrap();
        assert_eq!(workflow["warehouse_id"], "w1");
        assert_eq!(workflow["step_no"], 1);

        let slot = serde_json::to_value(UpdateTimeSlotPayload {
            name: "Morning".into(),
            from: "09:00".into(),
            to: "10:00".into(),
            warehouse_id: "w1".into(),
        })
        .unwrap();
        assert_eq!(slot["warehouseId"], "w1");

        let user = serde_json::to_value(UserPayload {
            name: "A".into(),
            email: "a@example.com".into(),
            phone: "1".into(),
            password: None,
            warehouse_id: "w1".into(),
            role: "Admin".into(),
        })
        .unwrap();
        assert!(user.get("password").is_none());
        assert_eq!(user["warehouse_id"], "w1");
    }
}
