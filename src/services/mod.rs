mod postgres;
mod store;
mod view_cache;
#[cfg(test)]
pub mod memory;

pub use postgres::PgStore;
pub use store::{InvoiceStore, UserStore};
pub use view_cache::{RedisViewCache, ViewCache, INVOICES_PATH};
