mod auth;
mod dashboard;
mod invoices;

pub use auth::{serve_login_page, handle_login, handle_logout};
pub use dashboard::{serve_dashboard, serve_invoice_list, serve_edit_invoice};
pub use invoices::{create_invoice, update_invoice, delete_invoice};
