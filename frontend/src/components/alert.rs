use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Error,
    Warning,
    Info,
}

impl AlertKind {
    /// Errors stay until dismissed.
    pub fn auto_close_delay_ms(&self) -> Option<u32> {
        match self {
            AlertKind::Success | AlertKind::Info => Some(3000),
            AlertKind::Warning => Some(4000),
            AlertKind::Error => None,
        }
    }

    fn panel_class(&self) -> &'static str {
        match self {
            AlertKind::Success => {
                "bg-status-success-bg border border-status-success-border text-status-success-text"
            }
            AlertKind::Error => {
                "bg-status-error-bg border border-status-error-border text-status-error-text"
            }
            AlertKind::Warning => {
                "bg-status-warning-bg border border-status-warning-border text-status-warning-text"
            }
            AlertKind::Info => "bg-status-info-bg border border-status-info-border text-status-info-text",
        }
    }

    fn default_title(&self) -> &'static str {
        match self {
            AlertKind::Success => "Success",
            AlertKind::Error => "Error",
            AlertKind::Warning => "Warning",
            AlertKind::Info => "Notice",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertState {
    pub kind: AlertKind,
    pub title: String,
    pub message: String,
}

impl AlertState {
    pub fn new(kind: AlertKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            title: kind.default_title().to_string(),
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(AlertKind::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(AlertKind::Error, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(AlertKind::Warning, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(AlertKind::Info, message)
    }
}

#[component]
pub fn AlertDialog(alert: RwSignal<Option<AlertState>>) -> impl IntoView {
    create_effect(move |_| {
        let Some(current) = alert.get() else {
            return;
        };
        let Some(delay) = current.kind.auto_close_delay_ms() else {
            return;
        };
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(delay).await;
            // a newer alert may have replaced this one meanwhile
            if alert.get_untracked().as_ref() == Some(&current) {
                alert.set(None);
            }
        });
    });

    view! {
        {move || {
            alert
                .get()
                .map(|state| {
                    view! {
                        <div class="fixed inset-0 z-[80] flex items-center justify-center p-4">
                            <div class="absolute inset-0 bg-overlay-backdrop"></div>
                            <div
                                class=format!("relative z-[81] w-full max-w-sm rounded-lg shadow-xl p-6 space-y-3 {}", state.kind.panel_class())
                                role="alertdialog"
                                aria-modal="true"
                            >
                                <h2 class="text-lg font-semibold">{state.title.clone()}</h2>
                                <p class="text-sm">{state.message.clone()}</p>
                                <div class="flex justify-end">
                                    <button
                                        type="button"
                                        class="inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover"
                                        on:click=move |_| alert.set(None)
                                    >
                                        "OK"
                                    </button>
                                </div>
                            </div>
                        </div>
                    }
                })
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auto_close_delays_by_kind() {
        assert_eq!(AlertKind::Success.auto_close_delay_ms(), Some(3000));
        assert_eq!(AlertKind::Info.auto_close_delay_ms(), Some(3000));
        assert_eq!(AlertKind::Warning.auto_close_delay_ms(), Some(4000));
        assert_eq!(AlertKind::Error.auto_close_delay_ms(), None);
    }

    #[test]
    fn constructors_fill_default_titles() {
        let alert = AlertState::error("Failed to save warehouse.");
        assert_eq!(alert.title, "Error");
        assert_eq!(alert.kind, AlertKind::Error);
        assert_eq!(AlertState::success("ok").title, "Success");
    }
}
