use crate::{
    api::{self, ApiClient, ApiError, LoginRequest, Role, User},
    pages::login::repository::LoginRepository,
};
use leptos::*;
use std::rc::Rc;

type AuthContext = (ReadSignal<AuthState>, WriteSignal<AuthState>);

#[derive(Debug, Clone, Default)]
pub struct AuthState {
    pub user: Option<User>,
    pub is_authenticated: bool,
    pub loading: bool,
}

impl AuthState {
    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(User::role_kind)
    }
}

fn create_auth_context() -> AuthContext {
    let (auth_state, set_auth_state) = create_signal(AuthState {
        loading: true,
        ..AuthState::default()
    });

    let api_client = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    spawn_local(async move {
        let now = chrono::Utc::now().timestamp();
        match restore_session(&api_client, now).await {
            Ok(user) => set_auth_state.update(|state| {
                state.user = Some(user);
                state.is_authenticated = true;
                state.loading = false;
            }),
            Err(err) => {
                log::debug!("no active session: {}", err);
                set_auth_state.update(|state| {
                    state.user = None;
                    state.is_authenticated = false;
                    state.loading = false;
                })
            }
        }
    });

    (auth_state, set_auth_state)
}

#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let ctx = create_auth_context();
    provide_context::<AuthContext>(ctx);
    view! { <>{children()}</> }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| create_signal(AuthState::default()))
}

/// Resolves the stored token into a user. Expired JWTs are dropped without
/// asking the server; any failure leaves the browser signed out.
pub async fn restore_session(api_client: &ApiClient, now_secs: i64) -> Result<User, ApiError> {
    let token = api::stored_token().ok_or_else(|| ApiError::unauthorized("Not signed in."))?;
    if api::is_token_expired(&token, now_secs) {
        api::clear_session();
        return Err(ApiError::unauthorized("Session expired."));
    }
    match api_client.verify_session().await {
        Ok(user) => Ok(user),
        Err(err) => {
            api::clear_session();
            Err(err)
        }
    }
}

pub async fn login_request(
    request: LoginRequest,
    repo: &LoginRepository,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<User, ApiError> {
    set_auth_state.update(|state| state.loading = true);

    match repo.login(request).await {
        Ok(response) => {
            let user = response.user;
            set_auth_state.update(|state| {
                state.user = Some(user.clone());
                state.is_authenticated = true;
                state.loading = false;
            });
            Ok(user)
        }
        Err(error) => {
            set_auth_state.update(|state| state.loading = false);
            Err(error)
        }
    }
}

pub async fn logout(
    repo: &LoginRepository,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), ApiError> {
    let result = repo.logout().await;
    if let Err(err) = &result {
        log::warn!("server logout failed: {}", err);
    }

    set_auth_state.update(|state| {
        state.user = None;
        state.is_authenticated = false;
        state.loading = false;
    });

    result
}

pub fn use_login_action() -> Action<LoginRequest, Result<User, ApiError>> {
    let (_auth, set_auth) = use_auth();
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repo = LoginRepository::new_with_client(Rc::new(api));

    create_action(move |request: &LoginRequest| {
        let payload = request.clone();
        let repo = repo.clone();
        async move { login_request(payload, &repo, set_auth).await }
    })
}

pub fn use_logout_action() -> Action<(), Result<(), ApiError>> {
    let (_auth, set_auth) = use_auth();
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repo = LoginRepository::new_with_client(Rc::new(api));

    create_action(move |_: &()| {
        let repo = repo.clone();
        async move { logout(&repo, set_auth).await }
    })
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
    use serde_json::json;

    fn jwt_with_exp(exp: i64) -> String {
        let claims = URL_SAFE_NO_PAD.encode(format!("{{\"exp\":{}}}", exp));
        format!("h.{}.s", claims)
    }

    #[tokio::test]
    async fn login_and_logout_update_auth_state() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/api/auth/login");
            then.status(200).json_body(json!({
                "token": "tok-1",
                "user": { "id": "u1", "name": "Alice", "email": "alice@example.com", "role": "Admin" }
            }));
        });
        server.mock(|when, then| {
            when.method(POST).path("/api/auth/logout");
            then.status(200).json_body(json!({}));
        });

        let runtime = create_runtime();
        let (state, set_state) = create_signal(AuthState::default());
        let client = ApiClient::new_with_base_url(server.url("/api"));
        let repo = LoginRepository::new_with_client(Rc::new(client));

        let user = login_request(
            LoginRequest {
                email: "alice@example.com".into(),
                password: "secret1".into(),
            },
            &repo,
            set_state,
        )
        .await
        .unwrap();

        assert_eq!(user.role_kind(), Role::Admin);
        let snapshot = state.get();
        assert!(snapshot.is_authenticated);
        assert_eq!(snapshot.role(), Some(Role::Admin));
        assert_eq!(api::stored_token().as_deref(), Some("tok-1"));

        logout(&repo, set_state).await.unwrap();
        let snapshot = state.get();
        assert!(!snapshot.is_authenticated);
        assert!(snapshot.user.is_none());
        assert!(api::stored_token().is_none());
        assert_eq!(server.requests()[1].authorization.as_deref(), Some("tok-1"));
        runtime.dispose();
    }

    #[tokio::test]
    async fn expired_token_is_discarded_without_verify_call() {
        let server = MockServer::start_async().await;
        let client = ApiClient::new_with_base_url(server.url("/api"));
        api::persist_token(&jwt_with_exp(100)).unwrap();

        let err = restore_session(&client, 200).await.unwrap_err();

        assert!(err.is_unauthorized());
        assert!(server.requests().is_empty());
        assert!(api::stored_token().is_none());
    }

    #[tokio::test]
    async fn valid_token_is_verified_remotely() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/auth/verify");
            then.status(200)
                .json_body(json!({ "user": { "id": 3, "name": "Rae", "role": "receptionist" } }));
        });
        let client = ApiClient::new_with_base_url(server.url("/api"));
        api::persist_token(&jwt_with_exp(10_000)).unwrap();

        let user = restore_session(&client, 200).await.unwrap();

        assert_eq!(user.role_kind(), Role::Receptionist);
        assert_eq!(server.hits(GET, "/api/auth/verify"), 1);
        api::clear_session();
    }

    #[tokio::test]
    async fn missing_token_is_not_authenticated() {
        api::clear_session();
        let client = ApiClient::new_with_base_url("http://unused.invalid/api");
        assert!(restore_session(&client, 0).await.is_err());
    }
}
