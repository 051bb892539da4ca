//! In-process stand-ins for the datastore and the view cache, used by tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::{CacheResult, StoreError, StoreResult};
use crate::models::{Invoice, InvoiceInput, NewInvoice, User};
use super::store::{InvoiceStore, UserStore};
use super::view_cache::ViewCache;

#[derive(Default)]
pub struct MemoryStore {
    invoices: Mutex<Vec<Invoice>>,
    users: Mutex<Vec<User>>,
    failing: AtomicBool,
}

impl MemoryStore {
    pub fn with_user(self, user: User) -> Self {
        self.users.lock().unwrap().push(user);
        self
    }

    pub fn with_invoice(self, invoice: Invoice) -> Self {
        self.invoices.lock().unwrap().push(invoice);
        self
    }

    /// Make every following call fail the way a dropped connection would.
    pub fn fail(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    pub fn invoices(&self) -> Vec<Invoice> {
        self.invoices.lock().unwrap().clone()
    }

    fn check(&self) -> StoreResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            Err(StoreError::Query(sqlx::Error::PoolTimedOut))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl InvoiceStore for MemoryStore {
    async fn insert_invoice(&self, invoice: &NewInvoice) -> StoreResult<()> {
        self.check()?;
        self.invoices.lock().unwrap().push(Invoice {
            id: Uuid::new_v4(),
            customer_id: invoice.customer_id.clone(),
            amount: invoice.amount,
            status: invoice.status,
            date: invoice.date,
        });
        Ok(())
    }

    async fn update_invoice(&self, id: Uuid, input: &InvoiceInput) -> StoreResult<u64> {
        self.check()?;
        let mut invoices = self.invoices.lock().unwrap();
        let mut touched = 0;
        for invoice in invoices.iter_mut().filter(|i| i.id == id) {
            invoice.customer_id = input.customer_id.clone();
            invoice.amount = input.amount_cents;
            invoice.status = input.status;
            touched += 1;
        }
        Ok(touched)
    }

    async fn delete_invoice(&self, id: Uuid) -> StoreResult<u64> {
        self.check()?;
        let mut invoices = self.invoices.lock().unwrap();
        let before = invoices.len();
        invoices.retain(|i| i.id != id);
        Ok((before - invoices.len()) as u64)
    }

    async fn get_invoice(&self, id: Uuid) -> StoreResult<Option<Invoice>> {
        self.check()?;
        Ok(self.invoices.lock().unwrap().iter().find(|i| i.id == id).cloned())
    }

    async fn list_invoices(&self) -> StoreResult<Vec<Invoice>> {
        self.check()?;
        let mut invoices = self.invoices();
        invoices.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(invoices)
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn find_user_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        self.check()?;
        Ok(self.users.lock().unwrap().iter().find(|u| u.email == email).cloned())
    }
}

#[derive(Default)]
pub struct MemoryViewCache {
    generations: Mutex<HashMap<String, u64>>,
    pages: Mutex<HashMap<(String, u64), String>>,
    revalidated: Mutex<Vec<String>>,
}

impl MemoryViewCache {
    pub fn revalidated(&self) -> Vec<String> {
        self.revalidated.lock().unwrap().clone()
    }

    fn current(&self, path: &str) -> u64 {
        self.generations.lock().unwrap().get(path).copied().unwrap_or(0)
    }

    /// The page a request would be served right now, if any.
    pub fn cached(&self, path: &str) -> Option<String> {
        let generation = self.current(path);
        self.pages
            .lock()
            .unwrap()
            .get(&(path.to_string(), generation))
            .cloned()
    }
}

#[async_trait]
impl ViewCache for MemoryViewCache {
    async fn generation(&self, path: &str) -> CacheResult<u64> {
        Ok(self.current(path))
    }

    async fn get(&self, path: &str, generation: u64) -> CacheResult<Option<String>> {
        Ok(self
            .pages
            .lock()
            .unwrap()
            .get(&(path.to_string(), generation))
            .cloned())
    }

    async fn put(&self, path: &str, generation: u64, html: &str) -> CacheResult<()> {
        self.pages
            .lock()
            .unwrap()
            .insert((path.to_string(), generation), html.to_string());
        Ok(())
    }

    async fn revalidate(&self, path: &str) -> CacheResult<()> {
        *self.generations.lock().unwrap().entry(path.to_string()).or_insert(0) += 1;
        self.revalidated.lock().unwrap().push(path.to_string());
        Ok(())
    }
}
