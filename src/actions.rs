use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use crate::models::{ActionState, InvoiceForm, NewInvoice};
use crate::services::{InvoiceStore, ViewCache, INVOICES_PATH};
use crate::validation::validate_invoice;

pub const CREATE_INVALID: &str = "Missing fields: Failed to create invoice";
pub const UPDATE_INVALID: &str = "Missing fields: Failed to update invoice";
pub const CREATE_FAILED: &str = "Database Error: Failed to create invoice";
pub const UPDATE_FAILED: &str = "Database Error: Failed to update invoice";
pub const DELETE_FAILED: &str = "Database Error: Failed to delete invoice";

/// Result of an invoice mutation as seen by the form that submitted it.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionOutcome {
    /// The write went through and the client should move to this path.
    Navigate(&'static str),
    /// The write went through; only the cached list was refreshed.
    Refreshed,
    /// Nothing was written; the form keeps these messages.
    Failed(ActionState),
}

/// Create/update/delete commands against the invoice relation.
#[derive(Clone)]
pub struct InvoiceActions {
    store: Arc<dyn InvoiceStore>,
    views: Arc<dyn ViewCache>,
}

impl InvoiceActions {
    pub fn new(store: Arc<dyn InvoiceStore>, views: Arc<dyn ViewCache>) -> Self {
        Self { store, views }
    }

    pub async fn create(&self, form: &InvoiceForm) -> ActionOutcome {
        self.create_on(form, Utc::now().date_naive()).await
    }

    async fn create_on(&self, form: &InvoiceForm, date: NaiveDate) -> ActionOutcome {
        let input = match validate_invoice(form) {
            Ok(input) => input,
            Err(errors) => {
                tracing::debug!("Rejected invoice submission: {:?}", errors);
                return ActionOutcome::Failed(ActionState {
                    errors,
                    message: Some(CREATE_INVALID.into()),
                });
            }
        };

        let invoice = NewInvoice::from_input(input, date);
        if let Err(e) = self.store.insert_invoice(&invoice).await {
            tracing::error!("Failed to insert invoice: {}", e);
            return ActionOutcome::Failed(ActionState::message(CREATE_FAILED));
        }

        tracing::info!(
            "Created invoice for customer {} ({} cents)",
            invoice.customer_id,
            invoice.amount
        );
        self.revalidate_list().await;
        ActionOutcome::Navigate(INVOICES_PATH)
    }

    pub async fn update(&self, id: Uuid, form: &InvoiceForm) -> ActionOutcome {
        let input = match validate_invoice(form) {
            Ok(input) => input,
            Err(errors) => {
                tracing::debug!("Rejected update of invoice {}: {:?}", id, errors);
                return ActionOutcome::Failed(ActionState {
                    errors,
                    message: Some(UPDATE_INVALID.into()),
                });
            }
        };

        match self.store.update_invoice(id, &input).await {
            Ok(0) => tracing::warn!("Update matched no invoice with id {}", id),
            Ok(_) => tracing::info!("Updated invoice {}", id),
            Err(e) => {
                tracing::error!("Failed to update invoice {}: {}", id, e);
                return ActionOutcome::Failed(ActionState::message(UPDATE_FAILED));
            }
        }

        self.revalidate_list().await;
        ActionOutcome::Navigate(INVOICES_PATH)
    }

    pub async fn delete(&self, id: Uuid) -> ActionOutcome {
        match self.store.delete_invoice(id).await {
            Ok(0) => tracing::warn!("Delete matched no invoice with id {}", id),
            Ok(_) => tracing::info!("Deleted invoice {}", id),
            Err(e) => {
                tracing::error!("Failed to delete invoice {}: {}", id, e);
                return ActionOutcome::Failed(ActionState::message(DELETE_FAILED));
            }
        }

        self.revalidate_list().await;
        ActionOutcome::Refreshed
    }

    // The row is already written; a stale list only lives until its TTL.
    async fn revalidate_list(&self) {
        if let Err(e) = self.views.revalidate(INVOICES_PATH).await {
            tracing::warn!("Failed to revalidate {}: {}", INVOICES_PATH, e);
        }
    }
}
