//! Test helpers for integration tests
//!
//! Spawning test servers, making HTTP requests and seeding the catalog.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Result;
use catale_api::{create_app, create_app_state};
use catale_common::AppConfig;
use catale_db::PgPool;
use reqwest::{Client, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use crate::fixtures::unique_suffix;

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    pub pool: PgPool,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a new test server on an ephemeral port
    pub async fn start() -> Result<Self> {
        Self::start_with_config(test_config()?).await
    }

    pub async fn start_with_config(config: AppConfig) -> Result<Self> {
        let state = create_app_state(config).await?;
        let pool = state.pool().clone();
        let app = create_app(state)?;

        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        let client = Client::builder().timeout(Duration::from_secs(10)).build()?;

        Ok(Self {
            addr,
            client,
            pool,
            _handle: handle,
        })
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub async fn get(&self, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.get(&url).send().await?)
    }

    pub async fn get_auth(&self, path: &str, token: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.get(&url).bearer_auth(token).send().await?)
    }

    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.post(&url).json(body).send().await?)
    }

    pub async fn post_auth<T: Serialize>(
        &self,
        path: &str,
        token: &str,
        body: &T,
    ) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self
            .client
            .post(&url)
            .bearer_auth(token)
            .json(body)
            .send()
            .await?)
    }

    /// POST without a body, for action endpoints such as the like toggle
    pub async fn post_empty_auth(&self, path: &str, token: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.post(&url).bearer_auth(token).send().await?)
    }

    pub async fn delete_auth(&self, path: &str, token: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.delete(&url).bearer_auth(token).send().await?)
    }

    /// Insert a catalog entry directly; the API has no write path for cocktails
    pub async fn seed_cocktail(&self, emotion: (i32, i32, i32)) -> Result<i64> {
        let id = sqlx::query_scalar::<_, i64>(
            r"
            INSERT INTO cocktails (name, content, ingredients, alcohol_level, sweetness,
                                   emotion1, emotion2, emotion3)
            VALUES ($1, 'Stirred, not shaken', 'gin, vermouth', 3, 2, $2, $3, $4)
            RETURNING id
            ",
        )
        .bind(format!("Api Test Cocktail {}", unique_suffix()))
        .bind(emotion.0)
        .bind(emotion.1)
        .bind(emotion.2)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }
}

/// Configuration for a test server
///
/// `DATABASE_URL` comes from the environment (or `.env`); ports, secrets and
/// limits are fixed so parallel servers never collide.
pub fn test_config() -> Result<AppConfig> {
    dotenvy::dotenv().ok();

    let vars: HashMap<&str, String> = HashMap::from([
        ("API_PORT", "0".to_string()),
        ("JWT_SECRET", "integration-test-secret".to_string()),
        ("DATABASE_RUN_MIGRATIONS", "true".to_string()),
        ("DATABASE_MAX_CONNECTIONS", "5".to_string()),
        ("DATABASE_MIN_CONNECTIONS", "1".to_string()),
        ("RATE_LIMIT_REQUESTS_PER_SECOND", "1000".to_string()),
        ("RATE_LIMIT_BURST", "1000".to_string()),
    ]);

    AppConfig::from_lookup(|key| {
        vars.get(key)
            .cloned()
            .or_else(|| std::env::var(key).ok())
    })
    .map_err(|e| anyhow::anyhow!("Config error: {e}"))
}

/// Whether the database-backed tests can run
pub fn check_test_env() -> bool {
    if std::env::var("DATABASE_URL").is_err() {
        eprintln!("Skipping test: DATABASE_URL not set");
        return false;
    }
    true
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(
    response: Response,
    expected_status: StatusCode,
) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!("Expected status {expected_status}, got {status}. Body: {body}");
    }
    Ok(response.json().await?)
}

/// Assert response status without parsing body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!("Expected status {expected_status}, got {status}. Body: {body}");
    }
    Ok(())
}
