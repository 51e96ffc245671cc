use crate::components::{error::FieldError, forms::INPUT_CLASS};
use crate::pages::login::utils::LoginFormState;
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn LoginForm(
    form: LoginFormState,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(into)] pending: Signal<bool>,
    on_submit: Callback<SubmitEvent>,
) -> impl IntoView {
    let email_error = Signal::derive(move || form.field_errors.get().email);
    let password_error = Signal::derive(move || form.field_errors.get().password);
    let password_type = move || {
        if form.show_password.get() {
            "text"
        } else {
            "password"
        }
    };

    view! {
        <div class="min-h-screen flex items-center justify-center bg-surface px-4 sm:px-6 lg:px-8 py-8">
            <div class="max-w-md w-full bg-surface-elevated rounded-2xl shadow-xl p-6 sm:p-8 space-y-6">
                <div class="text-center">
                    <h2 class="text-3xl font-bold text-fg">"Sign in to your account"</h2>
                    <p class="mt-2 text-sm text-fg-muted">"Welcome back! Please enter your details."</p>
                </div>

                {move || error.get().map(|message| view! {
                    <div class="bg-status-error-bg border border-status-error-border text-status-error-text rounded-md p-4" role="alert">
                        <p class="text-sm">{message}</p>
                    </div>
                })}

                <form class="space-y-4" on:submit=move |ev| on_submit.call(ev) novalidate>
                    <div>
                        <label for="email" class="block text-sm font-medium text-fg">"Email address"</label>
                        <input
                            id="email"
                            type="email"
                            autocomplete="email"
                            placeholder="Enter your email"
                            class=INPUT_CLASS
                            prop:value=move || form.email.get()
                            on:input=move |ev| form.email.set(event_target_value(&ev))
                        />
                        <FieldError message=email_error />
                    </div>
                    <div>
                        <label for="password" class="block text-sm font-medium text-fg">"Password"</label>
                        <div class="relative">
                            <input
                                id="password"
                                type=password_type
                                autocomplete="current-password"
                                placeholder="Enter your password"
                                class=INPUT_CLASS
                                prop:value=move || form.password.get()
                                on:input=move |ev| form.password.set(event_target_value(&ev))
                            />
                            <button
                                type="button"
                                class="absolute inset-y-0 right-0 pr-3 text-xs text-fg-muted hover:text-fg"
                                on:click=move |_| form.show_password.update(|show| *show = !*show)
                            >
                                {move || if form.show_password.get() { "Hide" } else { "Show" }}
                            </button>
                        </div>
                        <FieldError message=password_error />
                    </div>
                    <button
                        type="submit"
                        disabled=move || pending.get()
                        class="w-full flex justify-center py-2 px-4 rounded-md text-sm font-medium text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg-hover disabled:opacity-50"
                    >
                        {move || if pending.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
