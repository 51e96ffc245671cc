use crate::{
    api::{Punctuality, VisitStatus, VisitorRequest},
    components::forms::{Modal, INPUT_CLASS, PRIMARY_BUTTON_CLASS, SECONDARY_BUTTON_CLASS},
    pages::receptionist_dashboard::{
        utils::{qr_data_url, VisitForm},
        view_model::ReceptionViewModel,
    },
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn VisitModal(vm: ReceptionViewModel) -> impl IntoView {
    let pending = vm.record_action.pending();
    let is_open = Signal::derive(move || vm.visit_form.with(Option::is_some));
    let on_close = Callback::new(move |_| vm.close_visit());

    let current = move || -> Option<VisitorRequest> {
        let id = vm.visit_form.with(|form| form.as_ref().map(|f| f.request_id.clone()))?;
        vm.loaded().into_iter().find(|request| request.id == id)
    };
    let tracking_code = move || current().and_then(|request| request.tracking_code);

    let field = move |read: fn(&VisitForm) -> String| {
        move || vm.visit_form.with(|form| form.as_ref().map(read).unwrap_or_default())
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit_visit();
    };

    view! {
        <Modal is_open=is_open title="Record Visit" on_close=on_close>
            <form class="space-y-4" on:submit=on_submit>
                {move || current().map(|request| view! {
                    <div class="text-sm text-fg">
                        <p class="font-medium">{request.name}</p>
                        <p class="text-fg-muted">{request.visitor_type_name}" · "{request.warehouse_name}</p>
                    </div>
                })}
                {move || tracking_code().map(|code| {
                    let qr = qr_data_url(&code);
                    view! {
                        <div class="flex flex-col items-center gap-2">
                            {qr.map(|src| view! { <img src=src alt="Tracking code QR" class="h-40 w-40" /> })}
                            <span class="font-mono text-sm text-fg">{code}</span>
                        </div>
                    }
                })}
                <label class="block text-sm font-medium text-fg">
                    "Visit Status"
                    <select
                        class=INPUT_CLASS
                        prop:value=field(|f| f.visit_status.as_str().to_string())
                        on:change=move |ev| {
                            let status = VisitStatus::parse(&event_target_value(&ev));
                            vm.visit_form.update(|form| {
                                if let Some(form) = form {
                                    form.visit_status = status;
                                }
                            });
                        }
                    >
                        {VisitStatus::ALL.into_iter().map(|status| view! {
                            <option value=status.as_str()>{status.label()}</option>
                        }).collect_view()}
                    </select>
                </label>
                <label class="block text-sm font-medium text-fg">
                    "Arrived At"
                    <input
                        type="datetime-local"
                        class=INPUT_CLASS
                        prop:value=field(|f| f.arrived_at.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            vm.visit_form.update(|form| {
                                if let Some(form) = form {
                                    form.arrived_at = value;
                                }
                            });
                        }
                    />
                </label>
                <label class="block text-sm font-medium text-fg">
                    "Checked Out At"
                    <input
                        type="datetime-local"
                        class=INPUT_CLASS
                        prop:value=field(|f| f.checked_out_at.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            vm.visit_form.update(|form| {
                                if let Some(form) = form {
                                    form.checked_out_at = value;
                                }
                            });
                        }
                    />
                </label>
                <label class="block text-sm font-medium text-fg">
                    "Punctuality"
                    <select
                        class=INPUT_CLASS
                        prop:value=field(|f| f.punctuality.as_str().to_string())
                        on:change=move |ev| {
                            let punctuality = Punctuality::parse(&event_target_value(&ev));
                            vm.visit_form.update(|form| {
                                if let Some(form) = form {
                                    form.punctuality = punctuality;
                                }
                            });
                        }
                    >
                        {[Punctuality::OnTime, Punctuality::Late].into_iter().map(|p| view! {
                            <option value=p.as_str()>{p.label()}</option>
                        }).collect_view()}
                    </select>
                </label>
                <div class="flex justify-end gap-2">
                    <button type="button" class=SECONDARY_BUTTON_CLASS on:click=move |_| vm.close_visit()>
                        "Cancel"
                    </button>
                    <button type="submit" class=PRIMARY_BUTTON_CLASS disabled=move || pending.get()>
                        {move || if pending.get() { "Saving..." } else { "Save" }}
                    </button>
                </div>
            </form>
        </Modal>
    }
}
