use std::sync::Arc;

use crate::actions::InvoiceActions;
use crate::services::{InvoiceStore, UserStore, ViewCache};

/// Service handles shared by every handler, built once in `main`.
#[derive(Clone)]
pub struct AppState {
    pub actions: InvoiceActions,
    pub invoices: Arc<dyn InvoiceStore>,
    pub users: Arc<dyn UserStore>,
    pub views: Arc<dyn ViewCache>,
}

impl AppState {
    pub fn new(
        invoices: Arc<dyn InvoiceStore>,
        users: Arc<dyn UserStore>,
        views: Arc<dyn ViewCache>,
    ) -> Self {
        Self {
            actions: InvoiceActions::new(invoices.clone(), views.clone()),
            invoices,
            users,
            views,
        }
    }
}
