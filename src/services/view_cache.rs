use async_trait::async_trait;
use redis::{AsyncCommands, Client};
use std::sync::Arc;

use crate::errors::CacheResult;

/// Path of the cached invoice list; mutations revalidate it.
pub const INVOICES_PATH: &str = "/dashboard/invoices";

/// Rendered pages keyed by view path and generation.
///
/// A renderer reads the generation before querying the store and writes its
/// page under that generation. `revalidate` moves the path to a new
/// generation, so a page rendered from rows read before a write is never
/// served after it.
#[async_trait]
pub trait ViewCache: Send + Sync {
    async fn generation(&self, path: &str) -> CacheResult<u64>;

    async fn get(&self, path: &str, generation: u64) -> CacheResult<Option<String>>;

    async fn put(&self, path: &str, generation: u64, html: &str) -> CacheResult<()>;

    /// Start a new generation so the next request re-renders from the store.
    async fn revalidate(&self, path: &str) -> CacheResult<()>;
}

pub struct RedisViewCache {
    client: Arc<Client>,
    ttl_seconds: usize,
}

impl RedisViewCache {
    pub fn new(client: Arc<Client>, ttl_seconds: usize) -> Self {
        Self { client, ttl_seconds }
    }
}

fn generation_key(path: &str) -> String {
    format!("view-gen:{}", path)
}

fn view_key(path: &str, generation: u64) -> String {
    format!("view:{}:{}", path, generation)
}

#[async_trait]
impl ViewCache for RedisViewCache {
    async fn generation(&self, path: &str) -> CacheResult<u64> {
        let mut conn = self.client.get_async_connection().await?;
        let generation: Option<u64> = conn.get(generation_key(path)).await?;
        Ok(generation.unwrap_or(0))
    }

    async fn get(&self, path: &str, generation: u64) -> CacheResult<Option<String>> {
        let mut conn = self.client.get_async_connection().await?;
        Ok(conn.get(view_key(path, generation)).await?)
    }

    async fn put(&self, path: &str, generation: u64, html: &str) -> CacheResult<()> {
        let mut conn = self.client.get_async_connection().await?;
        let _: () = conn
            .set_ex(view_key(path, generation), html, self.ttl_seconds)
            .await?;
        Ok(())
    }

    async fn revalidate(&self, path: &str) -> CacheResult<()> {
        let mut conn = self.client.get_async_connection().await?;
        let next: u64 = conn.incr(generation_key(path), 1u64).await?;
        // Pages left under older generations expire with their TTL.
        let _: () = conn.del(view_key(path, next - 1)).await?;
        Ok(())
    }
}

impl Clone for RedisViewCache {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            ttl_seconds: self.ttl_seconds,
        }
    }
}
