mod delete_gate_dialog;
mod gate_list;
mod header;
mod status_bar;

pub use delete_gate_dialog::DeleteGateDialog;
pub use gate_list::GateList;
pub use header::Header;
pub use status_bar::StatusBar;
