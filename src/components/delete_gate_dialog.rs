use crate::dialog::{FormState, ModalForm};
use dioxus::prelude::*;

#[component]
pub fn DeleteGateDialog(
    gate_name: String,
    form: FormState,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    let disabled = !form.is_enabled();

    rsx! {
        div { class: "dialog-overlay",
            form {
                class: "delete-confirm-dialog",
                onsubmit: move |evt: Event<FormData>| {
                    evt.prevent_default();
                    on_confirm.call(());
                },
                h3 { "Delete Quality Gate" }
                p { "Are you sure you want to delete \"{gate_name}\"?" }

                if form.has_messages() {
                    div { class: "modal-messages",
                        for error in form.errors.iter() {
                            div { class: "message error", "{error.msg}" }
                        }
                        for warning in form.warnings.iter() {
                            div { class: "message warning", "{warning.msg}" }
                        }
                    }
                }

                div { class: "dialog-buttons",
                    button {
                        r#type: "button",
                        class: "secondary",
                        disabled: disabled,
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                    button {
                        r#type: "submit",
                        class: "primary danger",
                        disabled: disabled,
                        if disabled { "Deleting..." } else { "Delete" }
                    }
                }
            }
        }
    }
}
