use crate::gates::QualityGate;
use crate::state::AppState;
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_action_icons::MdDelete;

#[component]
pub fn GateList(
    state: Signal<AppState>,
    on_refresh: EventHandler<()>,
    on_delete: EventHandler<QualityGate>,
) -> Element {
    let (rows, is_loading, dialog_open) = {
        let state = state.read();
        let rows = state
            .gates
            .sorted()
            .into_iter()
            .map(|g| (g.clone(), state.gates.is_default(g)))
            .collect::<Vec<_>>();
        (rows, state.is_loading, state.delete_dialog.is_some())
    };

    rsx! {
        div { class: "section",
            div { class: "section-header",
                div { class: "section-title", "Quality Gates" }
                button {
                    class: "secondary",
                    disabled: is_loading,
                    onclick: move |_| on_refresh.call(()),
                    if is_loading { "Loading..." } else { "Refresh" }
                }
            }

            if rows.is_empty() && !is_loading {
                div { class: "empty", "No quality gates" }
            }

            ul { class: "gate-list",
                for (gate, is_default) in rows {
                    li { key: "{gate.id}", class: "gate-row",
                        span { class: "gate-name", "{gate.name}" }
                        if is_default {
                            span { class: "badge", "Default" }
                        }
                        button {
                            class: "secondary danger delete-btn",
                            disabled: dialog_open,
                            onclick: {
                                let gate = gate.clone();
                                move |_| on_delete.call(gate.clone())
                            },
                            Icon {
                                width: 16,
                                height: 16,
                                icon: MdDelete
                            }
                            "Delete"
                        }
                    }
                }
            }
        }
    }
}
