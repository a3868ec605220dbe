pub mod confirm;
pub mod delete;
pub mod modal_form;

pub use confirm::{ConfirmAction, ConfirmDialog};
pub use delete::{DeleteDialog, DeleteGate, DeleteRequest};
pub use modal_form::{FormState, ModalForm};
