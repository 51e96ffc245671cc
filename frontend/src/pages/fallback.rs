use leptos::*;
use leptos_meta::Title;

#[component]
fn MessageCard(
    title: &'static str,
    message: &'static str,
    link_href: &'static str,
    link_label: &'static str,
) -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center bg-surface px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full bg-surface-elevated rounded-2xl shadow-xl p-8 text-center">
                <h2 class="mt-2 text-3xl font-bold text-fg">{title}</h2>
                <p class="mt-2 text-sm text-fg-muted">{message}</p>
                <div class="mt-6">
                    <a href=link_href class="text-action-primary-bg hover:underline font-medium">
                        {link_label}
                    </a>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn UnauthorizedPage() -> impl IntoView {
    view! {
        <Title text="Unauthorized | Gate Pass" />
        <MessageCard
            title="Unauthorized Access"
            message="You do not have permission to access this page."
            link_href="/login"
            link_label="Return to Login"
        />
    }
}

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <Title text="Not Found | Gate Pass" />
        <MessageCard
            title="Page Not Found"
            message="The page you're looking for doesn't exist."
            link_href="/"
            link_label="Go to Home"
        />
    }
}
