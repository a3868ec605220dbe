use crate::dialog::confirm::{ConfirmAction, ConfirmDialog};
use crate::dialog::modal_form::ModalForm;
use crate::gates::{ApiError, GateStore, QualityGate, RequestOptions, ValidationMessage};
use tracing::info;

/// Deletes one quality gate; validation failures are rendered in the dialog.
#[derive(Clone, PartialEq, Debug)]
pub struct DeleteGate {
    gate: QualityGate,
}

impl DeleteGate {
    pub fn new(gate: QualityGate) -> Self {
        Self { gate }
    }

    pub fn gate(&self) -> &QualityGate {
        &self.gate
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct DeleteRequest {
    pub gate: QualityGate,
    pub options: RequestOptions,
}

impl DeleteRequest {
    pub async fn send<S: GateStore>(&self, store: &S) -> Result<(), ApiError> {
        store.destroy(&self.gate, &self.options).await
    }
}

impl ConfirmAction for DeleteGate {
    type Request = DeleteRequest;
    type Error = ApiError;

    fn request(&self) -> DeleteRequest {
        info!(gate_id = self.gate.id, gate = %self.gate.name, "deleting quality gate");
        DeleteRequest {
            gate: self.gate.clone(),
            // 400 responses are shown inline instead of in the global banner
            options: RequestOptions::new().suppress_status(ApiError::VALIDATION_STATUS),
        }
    }

    fn on_failure<F: ModalForm>(&self, form: &mut F, error: &ApiError) {
        form.enable_form();
        if let ApiError::Validation(body) = error {
            if body.errors.is_empty() && body.warnings.is_empty() {
                form.show_errors(&[ValidationMessage::new(error.to_string())], &[]);
            } else {
                form.show_errors(&body.errors, &body.warnings);
            }
        }
    }
}

pub type DeleteDialog<F> = ConfirmDialog<F, DeleteGate>;

impl<F: ModalForm> ConfirmDialog<F, DeleteGate> {
    pub fn for_gate(form: F, gate: QualityGate) -> Self {
        ConfirmDialog::new(form, DeleteGate::new(gate))
    }

    pub fn gate(&self) -> &QualityGate {
        self.action().gate()
    }
}
