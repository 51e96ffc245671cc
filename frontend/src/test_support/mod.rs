#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::User;
    use crate::state::auth::AuthState;
    use leptos::*;

    fn user(id: &str, name: &str, role: &str, warehouse: Option<&str>) -> User {
        User {
            id: id.into(),
            name: name.into(),
            email: format!("{}@example.com", id),
            phone: "5550100".into(),
            role: role.into(),
            warehouse_id: warehouse.map(str::to_string),
            warehouse_name: warehouse.map(|_| "North Warehouse".to_string()),
            is_active: true,
        }
    }

    pub fn admin_user() -> User {
        user("u-admin", "Admin User", "Admin", None)
    }

    pub fn receptionist_user() -> User {
        user("u-reception", "Front Desk", "Receptionist", Some("w1"))
    }

    pub fn approver_user() -> User {
        user("u-approver", "Approver One", "Approver", Some("w1"))
    }

    pub fn regular_user() -> User {
        user("u-regular", "Regular User", "User", None)
    }

    pub fn provide_auth(user: Option<User>) -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
        let (auth, set_auth) = create_signal(AuthState {
            is_authenticated: user.is_some(),
            user,
            loading: false,
        });
        provide_context((auth, set_auth));
        (auth, set_auth)
    }
}
