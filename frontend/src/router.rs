use leptos::*;
use leptos_meta::provide_meta_context;
use leptos_router::*;

use crate::{
    api::{ApiClient, Role},
    components::guard::RequireRole,
    pages::{
        admin_dashboard::AdminDashboardPage,
        approver_dashboard::ApproverDashboardPage,
        fallback::{NotFoundPage, UnauthorizedPage},
        landing::LandingPage,
        login::LoginPage,
        receptionist_dashboard::ReceptionDashboardPage,
        time_slots::TimeSlotsPage,
        user_dashboard::UserDashboardPage,
        users::UsersPage,
        visitor_requests::VisitorRequestsPage,
        visitor_types::VisitorTypesPage,
        warehouses::WarehousesPage,
        workflows::WorkflowsPage,
    },
    state::auth::AuthProvider,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppRoute {
    Landing,
    Login,
    Unauthorized,
    AdminDashboard,
    ReceptionDashboard,
    ApproverDashboard,
    UserDashboard,
    Warehouses,
    Users,
    VisitorTypes,
    TimeSlots,
    VisitorRequests,
    Workflows,
}

const ADMIN_ONLY: &[Role] = &[Role::Admin];

impl AppRoute {
    pub const ALL: [AppRoute; 13] = [
        AppRoute::Landing,
        AppRoute::Login,
        AppRoute::Unauthorized,
        AppRoute::AdminDashboard,
        AppRoute::ReceptionDashboard,
        AppRoute::ApproverDashboard,
        AppRoute::UserDashboard,
        AppRoute::Warehouses,
        AppRoute::Users,
        AppRoute::VisitorTypes,
        AppRoute::TimeSlots,
        AppRoute::VisitorRequests,
        AppRoute::Workflows,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            AppRoute::Landing => "/",
            AppRoute::Login => "/login",
            AppRoute::Unauthorized => "/unauthorized",
            AppRoute::AdminDashboard => Role::Admin.dashboard_path(),
            AppRoute::ReceptionDashboard => Role::Receptionist.dashboard_path(),
            AppRoute::ApproverDashboard => Role::Approver.dashboard_path(),
            AppRoute::UserDashboard => Role::User.dashboard_path(),
            AppRoute::Warehouses => "/warehouses",
            AppRoute::Users => "/users",
            AppRoute::VisitorTypes => "/visitor-types",
            AppRoute::TimeSlots => "/warehouse-time-slots",
            AppRoute::VisitorRequests => "/visitor-requests",
            AppRoute::Workflows => "/workflow-management",
        }
    }

    /// Ignores the query string, fragment and a trailing slash.
    pub fn from_path(raw: &str) -> Option<Self> {
        let path = raw.split(['?', '#']).next().unwrap_or_default();
        let path = match path.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };
        Self::ALL.into_iter().find(|route| route.path() == path)
    }

    pub fn requires_auth(&self) -> bool {
        !matches!(
            self,
            AppRoute::Landing | AppRoute::Login | AppRoute::Unauthorized
        )
    }

    /// Roles that may open the route; Admin is let through every gate by the guard.
    pub fn allowed_roles(&self) -> &'static [Role] {
        match self {
            AppRoute::Landing | AppRoute::Login | AppRoute::Unauthorized => &[],
            AppRoute::AdminDashboard => ADMIN_ONLY,
            AppRoute::ReceptionDashboard => &[Role::Receptionist],
            AppRoute::ApproverDashboard => &[Role::Approver],
            AppRoute::UserDashboard => &[Role::User],
            AppRoute::Warehouses
            | AppRoute::Users
            | AppRoute::VisitorTypes
            | AppRoute::TimeSlots
            | AppRoute::VisitorRequests
            | AppRoute::Workflows => ADMIN_ONLY,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            AppRoute::Landing => "Visitor Request",
            AppRoute::Login => "Sign in",
            AppRoute::Unauthorized => "Unauthorized",
            AppRoute::AdminDashboard => "Admin Dashboard",
            AppRoute::ReceptionDashboard => "Reception Dashboard",
            AppRoute::ApproverDashboard => "Approvals",
            AppRoute::UserDashboard => "My Dashboard",
            AppRoute::Warehouses => "Warehouses",
            AppRoute::Users => "Users",
            AppRoute::VisitorTypes => "Visitor Types",
            AppRoute::TimeSlots => "Time Slots",
            AppRoute::VisitorRequests => "Visitor Requests",
            AppRoute::Workflows => "Workflow Management",
        }
    }

    fn roles(&self) -> Vec<Role> {
        self.allowed_roles().to_vec()
    }
}

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_context(ApiClient::new());
    provide_meta_context();
    view! {
        <AuthProvider>
            <Router>
                <Routes>
                    <Route path=AppRoute::Landing.path() view=LandingPage/>
                    <Route path=AppRoute::Login.path() view=LoginPage/>
                    <Route path=AppRoute::Unauthorized.path() view=UnauthorizedPage/>
                    <Route path=AppRoute::AdminDashboard.path() view=ProtectedAdminDashboard/>
                    <Route path=AppRoute::ReceptionDashboard.path() view=ProtectedReceptionDashboard/>
                    <Route path=AppRoute::ApproverDashboard.path() view=ProtectedApproverDashboard/>
                    <Route path=AppRoute::UserDashboard.path() view=ProtectedUserDashboard/>
                    <Route path=AppRoute::Warehouses.path() view=ProtectedWarehouses/>
                    <Route path=AppRoute::Users.path() view=ProtectedUsers/>
                    <Route path=AppRoute::VisitorTypes.path() view=ProtectedVisitorTypes/>
                    <Route path=AppRoute::TimeSlots.path() view=ProtectedTimeSlots/>
                    <Route path=AppRoute::VisitorRequests.path() view=ProtectedVisitorRequests/>
                    <Route path=AppRoute::Workflows.path() view=ProtectedWorkflows/>
                    <Route path="/*any" view=NotFoundPage/>
                </Routes>
            </Router>
        </AuthProvider>
    }
}

#[component]
fn ProtectedAdminDashboard() -> impl IntoView {
    view! { <RequireRole roles=AppRoute::AdminDashboard.roles()><AdminDashboardPage/></RequireRole> }
}

#[component]
fn ProtectedReceptionDashboard() -> impl IntoView {
    view! { <RequireRole roles=AppRoute::ReceptionDashboard.roles()><ReceptionDashboardPage/></RequireRole> }
}

#[component]
fn ProtectedApproverDashboard() -> impl IntoView {
    view! { <RequireRole roles=AppRoute::ApproverDashboard.roles()><ApproverDashboardPage/></RequireRole> }
}

#[component]
fn ProtectedUserDashboard() -> impl IntoView {
    view! { <RequireRole roles=AppRoute::UserDashboard.roles()><UserDashboardPage/></RequireRole> }
}

#[component]
fn ProtectedWarehouses() -> impl IntoView {
    view! { <RequireRole roles=AppRoute::Warehouses.roles()><WarehousesPage/></RequireRole> }
}

#[component]
fn ProtectedUsers() -> impl IntoView {
    view! { <RequireRole roles=AppRoute::Users.roles()><UsersPage/></RequireRole> }
}

#[component]
fn ProtectedVisitorTypes() -> impl IntoView {
    view! { <RequireRole roles=AppRoute::VisitorTypes.roles()><VisitorTypesPage/></RequireRole> }
}

#[component]
fn ProtectedTimeSlots() -> impl IntoView {
    view! { <RequireRole roles=AppRoute::TimeSlots.roles()><TimeSlotsPage/></RequireRole> }
}

#[component]
fn ProtectedVisitorRequests() -> impl IntoView {
    view! { <RequireRole roles=AppRoute::VisitorRequests.roles()><VisitorRequestsPage/></RequireRole> }
}

#[component]
fn ProtectedWorkflows() -> impl IntoView {
    view! { <RequireRole roles=AppRoute::Workflows.roles()><WorkflowsPage/></RequireRole> }
}
