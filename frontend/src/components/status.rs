use crate::api::{ActiveFilter, RequestStatus, VisitStatus};
use leptos::*;

const BADGE_BASE: &str = "inline-flex px-2 py-0.5 rounded-full text-xs font-semibold";

fn tone_class(tone: &str) -> String {
    format!("{} bg-status-{}-bg text-status-{}-text", BADGE_BASE, tone, tone)
}

fn request_tone(status: RequestStatus) -> &'static str {
    match status {
        RequestStatus::Pending => "warning",
        RequestStatus::Approved => "success",
        RequestStatus::Rejected => "error",
        RequestStatus::Other => "info",
    }
}

fn visit_tone(status: VisitStatus) -> &'static str {
    match status {
        VisitStatus::Pending => "warning",
        VisitStatus::Visited => "success",
        VisitStatus::NoShow => "error",
    }
}

/// Active / Disabled pill for soft-deletable entities.
#[component]
pub fn ActiveBadge(active: bool) -> impl IntoView {
    let (tone, label) = if active {
        ("success", "Active")
    } else {
        ("error", "Disabled")
    };
    view! { <span class=tone_class(tone)>{label}</span> }
}

#[component]
pub fn RequestStatusBadge(status: RequestStatus) -> impl IntoView {
    view! { <span class=tone_class(request_tone(status))>{status.label()}</span> }
}

#[component]
pub fn VisitStatusBadge(status: VisitStatus) -> impl IntoView {
    view! { <span class=tone_class(visit_tone(status))>{status.label()}</span> }
}

/// Switches a management page between its active and disabled lists.
#[component]
pub fn ActiveFilterToggle(filter: RwSignal<ActiveFilter>) -> impl IntoView {
    let button_class = move |target: ActiveFilter| {
        if filter.get() == target {
            "px-3 py-1.5 text-sm font-medium rounded-md bg-action-primary-bg text-action-primary-text"
        } else {
            "px-3 py-1.5 text-sm font-medium rounded-md text-fg-muted hover:bg-action-ghost-bg-hover"
        }
    };
    view! {
        <div class="inline-flex gap-1 rounded-lg border border-border p-1" role="group">
            {[ActiveFilter::Active, ActiveFilter::Disabled]
                .into_iter()
                .map(|target| view! {
                    <button
                        type="button"
                        class=move || button_class(target)
                        aria-pressed=move || (filter.get() == target).to_string()
                        on:click=move |_| filter.set(target)
                    >
                        {target.label()}
                    </button>
                })
                .collect_view()}
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn badges_render_labels() {
        let html = render_to_string(move || {
            view! {
                <div>
                    <ActiveBadge active=false />
                    <RequestStatusBadge status=RequestStatus::Approved />
                    <VisitStatusBadge status=VisitStatus::NoShow />
                </div>
            }
        });
        assert!(html.contains("Disabled"));
        assert!(html.contains("Approved"));
        assert!(html.contains("No Show"));
        assert!(html.contains("bg-status-success-bg"));
    }

    #[test]
    fn filter_toggle_marks_current_view() {
        let html = render_to_string(move || {
            let filter = create_rw_signal(ActiveFilter::Disabled);
            view! { <ActiveFilterToggle filter=filter /> }
        });
        assert!(html.contains("aria-pressed=\"true\""));
        assert!(html.contains("Active"));
        assert!(html.contains("Disabled"));
    }
}
