use crate::components::*;
use crate::dialog::DeleteRequest;
use crate::gates::{
    ApiError, ErrorReporter, GateClient, GateStore, QualityGate, ReportingStore, RequestOptions,
    load_config,
};
use crate::state::{AppState, Message};
use dioxus::prelude::*;
use tracing::{error, info};

type Store = ReportingStore<BannerReporter>;

/// Shows failures that no request handled itself in the status bar.
#[derive(Clone, Copy)]
pub struct BannerReporter(Signal<AppState>);

impl ErrorReporter for BannerReporter {
    fn report(&self, error: &ApiError) {
        let mut state = self.0;
        state
            .write()
            .set_message(Message::error(format!("Request failed: {}", error)));
    }
}

#[allow(non_snake_case)]
pub fn App() -> Element {
    let mut state = use_signal(AppState::new);
    let store = use_signal(|| None::<Store>);

    use_effect(move || {
        spawn(async move {
            initialize_app(state, store).await;
        });
    });

    let on_refresh = move |_| {
        spawn(async move {
            refresh_gates(state, store).await;
        });
    };

    let on_delete = move |gate: QualityGate| {
        state.write().open_delete_dialog(gate);
    };

    let on_confirm = move |_| {
        // The form is disabled before the request leaves.
        let request = state.write().submit_delete_dialog();
        if let Some(request) = request {
            spawn(async move {
                delete_gate(state, store, request).await;
            });
        }
    };

    let on_cancel = move |_| {
        state.write().cancel_delete_dialog();
    };

    let server_url = state.read().config.server_url.clone();
    let dialog = state.read().delete_dialog.clone();

    rsx! {
        style { {include_str!("../assets/main.css")} }
        div { class: "app-container",
            Header { server_url: server_url }
            div { class: "content",
                GateList {
                    state: state,
                    on_refresh: on_refresh,
                    on_delete: on_delete
                }
            }
            StatusBar { state: state }
            if let Some(dialog) = dialog {
                DeleteGateDialog {
                    gate_name: dialog.gate().name.clone(),
                    form: dialog.form().clone(),
                    on_confirm: on_confirm,
                    on_cancel: on_cancel
                }
            }
        }
    }
}

async fn initialize_app(mut state: Signal<AppState>, mut store: Signal<Option<Store>>) {
    state.write().clear_message();

    match load_config() {
        Ok(config) => {
            state.write().config = config;
        }
        Err(e) => {
            state
                .write()
                .set_message(Message::error(format!("Failed to load config: {}", e)));
        }
    }

    let config = state.read().config.clone();
    match GateClient::new(&config) {
        Ok(client) => {
            info!(server = client.base_url(), "connected to quality gate service");
            store.set(Some(ReportingStore::new(client, BannerReporter(state))));
        }
        Err(e) => {
            error!(error = %e, "cannot create API client");
            state
                .write()
                .set_message(Message::error(format!("Failed to create client: {}", e)));
            return;
        }
    }

    refresh_gates(state, store).await;
}

async fn delete_gate(
    mut state: Signal<AppState>,
    store: Signal<Option<Store>>,
    request: DeleteRequest,
) {
    let api = store.read().as_ref().cloned();
    let outcome = match api {
        Some(api) => request.send(&api).await,
        None => {
            let url = state.read().config.server_url.clone();
            state
                .write()
                .set_message(Message::error("Not connected to a server"));
            Err(ApiError::InvalidUrl(url))
        }
    };

    state.write().complete_delete(outcome);
}

async fn refresh_gates(mut state: Signal<AppState>, store: Signal<Option<Store>>) {
    let Some(api) = store.read().as_ref().cloned() else {
        return;
    };

    state.write().set_loading(true);
    let result = api.list(&RequestOptions::new()).await;
    state.write().set_loading(false);

    // Failures were already reported to the status bar.
    if let Ok(gates) = result {
        info!(count = gates.gates.len(), "loaded quality gates");
        state.write().gates = gates;
    }
}
