use crate::{
    api::{Role, User, UserPayload},
    pages::login::utils::MIN_PASSWORD_LEN,
    utils::{search::filter_by_term, validation},
};
use std::collections::BTreeMap;

pub type UserFormErrors = BTreeMap<&'static str, String>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserForm {
    pub id: Option<String>,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub role: String,
    pub warehouse_id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserField {
    Name,
    Email,
    Phone,
    Password,
    Role,
    Warehouse,
}

impl UserForm {
    pub fn from_user(user: &User) -> Self {
        Self {
            id: Some(user.id.clone()),
            name: user.name.clone(),
            email: user.email.clone(),
            phone: user.phone.clone(),
            password: String::new(),
            role: user.role.clone(),
            warehouse_id: user.warehouse_id.clone().unwrap_or_default(),
        }
    }

    pub fn is_edit(&self) -> bool {
        self.id.is_some()
    }

    pub fn title(&self) -> &'static str {
        if self.is_edit() {
            "Edit User"
        } else {
            "Add User"
        }
    }

    pub fn get(&self, field: UserField) -> &str {
        match field {
            UserField::Name => &self.name,
            UserField::Email => &self.email,
            UserField::Phone => &self.phone,
            UserField::Password => &self.password,
            UserField::Role => &self.role,
            UserField::Warehouse => &self.warehouse_id,
        }
    }

    pub fn set(&mut self, field: UserField, value: String) {
        match field {
            UserField::Name => self.name = value,
            UserField::Email => self.email = value,
            UserField::Phone => self.phone = value,
            UserField::Password => self.password = value,
            UserField::Role => self.role = value,
            UserField::Warehouse => self.warehouse_id = value,
        }
    }

    /// Admins may be left without a warehouse; every other role needs one.
    pub fn needs_warehouse(&self) -> bool {
        !self.role.trim().is_empty() && Role::parse(&self.role) != Role::Admin
    }

    pub fn validate(&self) -> UserFormErrors {
        let mut errors = UserFormErrors::new();
        let mut check = |key: &'static str, result: Result<(), String>| {
            if let Err(message) = result {
                errors.insert(key, message);
            }
        };

        check("name", validation::require(&self.name, "Name is required"));
        check("email", validation::require(&self.email, "Email is required"));
        check("phone", validation::require(&self.phone, "Phone is required"));
        check("role", validation::require(&self.role, "Role is required"));
        if self.needs_warehouse() {
            check(
                "warehouse_id",
                validation::require(&self.warehouse_id, "Warehouse is required"),
            );
        }

        let password = self.password.trim();
        if !self.is_edit() && password.is_empty() {
            errors.insert("password", "Password is required".to_string());
        } else if !password.is_empty() && password.chars().count() < MIN_PASSWORD_LEN {
            errors.insert(
                "password",
                format!("Password must be at least {} characters", MIN_PASSWORD_LEN),
            );
        }
        errors
    }

    /// A blank password on edit keeps the current one.
    pub fn to_payload(&self) -> UserPayload {
        let password = self.password.trim();
        UserPayload {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            password: (!password.is_empty()).then(|| password.to_string()),
            warehouse_id: self.warehouse_id.clone(),
            role: self.role.clone(),
        }
    }
}

pub fn filter_users(items: &[User], term: &str) -> Vec<User> {
    filter_by_term(items, term, |user| {
        vec![
            user.name.as_str(),
            user.email.as_str(),
            user.phone.as_str(),
            user.role.as_str(),
            user.warehouse_name.as_deref().unwrap_or_default(),
        ]
    })
}

/// Role names offered in the form; the built-in list when the server has none.
pub fn role_options(server_roles: Vec<String>) -> Vec<String> {
    if server_roles.is_empty() {
        Role::ALL.iter().map(|role| role.as_str().to_string()).collect()
    } else {
        server_roles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> UserForm {
        UserForm {
            name: "Rita".into(),
            email: "rita@example.com".into(),
            phone: "5550100".into(),
            password: "secret1".into(),
            role: "Receptionist".into(),
            warehouse_id: "w1".into(),
            ..UserForm::default()
        }
    }

    #[test]
    fn create_requires_password() {
        let mut form = filled();
        form.password.clear();
        assert_eq!(
            form.validate().get("password").map(String::as_str),
            Some("Password is required")
        );
        assert!(filled().validate().is_empty());
    }

    #[test]
    fn edit_allows_blank_password_and_omits_it() {
        let mut form = filled();
        form.id = Some("u1".into());
        form.password = "  ".into();
        assert!(form.validate().is_empty());
        assert_eq!(form.to_payload().password, None);

        form.password = "abc".into();
        assert_eq!(
            form.validate().get("password").map(String::as_str),
            Some("Password must be at least 6 characters")
        );
    }

    #[test]
    fn warehouse_required_except_for_admins() {
        let mut form = filled();
        form.warehouse_id.clear();
        assert!(form.validate().contains_key("warehouse_id"));
        form.role = "Admin".into();
        assert!(!form.validate().contains_key("warehouse_id"));
    }

    #[test]
    fn contact_fields_are_only_required() {
        let mut form = filled();
        form.phone = "0123-456 ext 7".into();
        assert!(form.validate().is_empty());
        form.email = "  ".into();
        assert_eq!(
            form.validate().get("email").map(String::as_str),
            Some("Email is required")
        );
    }

    #[test]
    fn field_accessors_round_trip() {
        let mut form = UserForm::default();
        form.set(UserField::Phone, "5550199".into());
        assert_eq!(form.get(UserField::Phone), "5550199");
    }

    #[test]
    fn role_options_fall_back_to_built_ins() {
        assert_eq!(role_options(Vec::new()).len(), 4);
        assert_eq!(role_options(vec!["Guard".into()]), vec!["Guard".to_string()]);
    }
}
