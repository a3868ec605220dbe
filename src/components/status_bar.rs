use crate::state::AppState;
use dioxus::prelude::*;

#[component]
pub fn StatusBar(state: Signal<AppState>) -> Element {
    let message = state.read().message.clone();
    let gate_count = state.read().gates.gates.len();
    let is_loading = state.read().is_loading;

    rsx! {
        div { class: "status-bar",
            if let Some(msg) = message {
                div {
                    class: if msg.is_error { "message error" } else { "message success" },
                    "{msg.text}"
                }
            }

            div { class: "status-section",
                div { class: "status-label", "Quality gates:" }
                div { class: "status-value",
                    if is_loading { "Loading..." } else { "{gate_count}" }
                }
            }
        }
    }
}
