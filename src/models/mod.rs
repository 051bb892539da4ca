mod user;
mod forms;
mod invoice;

pub use user::User;
pub use forms::{ActionState, FieldErrors, InvoiceForm, LoginForm};
pub use invoice::{Invoice, InvoiceInput, InvoiceStatus, NewInvoice};
