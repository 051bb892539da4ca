use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::StoreResult;
use crate::models::{Invoice, InvoiceInput, NewInvoice, User};

/// Parameterised access to the `invoices` relation. The datastore is the only
/// source of truth, so nothing here caches.
#[async_trait]
pub trait InvoiceStore: Send + Sync {
    async fn insert_invoice(&self, invoice: &NewInvoice) -> StoreResult<()>;

    /// Returns the number of rows touched; zero when `id` matches nothing.
    async fn update_invoice(&self, id: Uuid, input: &InvoiceInput) -> StoreResult<u64>;

    async fn delete_invoice(&self, id: Uuid) -> StoreResult<u64>;

    async fn get_invoice(&self, id: Uuid) -> StoreResult<Option<Invoice>>;

    /// Newest first.
    async fn list_invoices(&self) -> StoreResult<Vec<Invoice>>;
}

/// Read-only access to `users`.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_user_by_email(&self, email: &str) -> StoreResult<Option<User>>;
}
