use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub redis: RedisConfig,
    pub cache: CacheConfig,
    pub session: SessionConfig,
    pub upload: UploadConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub run_migrations: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RedisConfig {
    pub url: String,
    pub sentinel_enabled: bool,
    pub sentinel_url: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CacheConfig {
    pub view_ttl_seconds: usize,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SessionConfig {
    pub cookie_name: String,
    pub secure: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct UploadConfig {
    pub max_body_size: usize, // form posts only, in bytes
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .build()?;

        config.try_deserialize()
    }

    /// Redis endpoint to connect to, honouring the sentinel switch.
    pub fn redis_url(&self) -> Result<&str, config::ConfigError> {
        if self.redis.sentinel_enabled {
            self.redis
                .sentinel_url
                .as_deref()
                .ok_or_else(|| config::ConfigError::NotFound("redis.sentinel_url".into()))
        } else {
            Ok(&self.redis.url)
        }
    }
}

#[cfg(test)]
impl Config {
    pub fn for_tests() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".into(),
                port: 0,
            },
            database: DatabaseConfig {
                url: "postgres://localhost/invoices_test".into(),
                max_connections: 1,
                run_migrations: false,
            },
            redis: RedisConfig {
                url: "redis://127.0.0.1/".into(),
                sentinel_enabled: false,
                sentinel_url: None,
            },
            cache: CacheConfig { view_ttl_seconds: 60 },
            session: SessionConfig {
                cookie_name: "session".into(),
                secure: false,
            },
            upload: UploadConfig {
                max_body_size: 64 * 1024,
            },
        }
    }
}
