use std::time::Duration;

use chrono::{DateTime, Utc};
use mongodb::{
    bson::{self, doc},
    options::{ClientOptions, IndexOptions, ServerApi, ServerApiVersion},
    Client, Collection, IndexModel,
};
use serde::Serialize;

use crate::{config::Config, errors::AppResult};

pub const QUIZZES_COLLECTION: &str = "quizzes";
pub const SURVEYS_COLLECTION: &str = "surveys";
pub const TUTORIALS_COLLECTION: &str = "tutorials";

pub const APP_COLLECTIONS: [&str; 3] = [QUIZZES_COLLECTION, SURVEYS_COLLECTION, TUTORIALS_COLLECTION];

/// Handle on the configured CareHub database.
#[derive(Clone)]
pub struct Database {
    inner: mongodb::Database,
}

/// Readiness detail for `/health/ready`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseHealth {
    pub missing_collections: Vec<String>,
}

impl DatabaseHealth {
    /// Collections are created on first insert, so a missing one is reported but not fatal.
    pub fn from_existing(existing: &[String]) -> Self {
        let missing_collections = APP_COLLECTIONS
            .iter()
            .filter(|name| !existing.iter().any(|e| e == *name))
            .map(|name| name.to_string())
            .collect();
        Self { missing_collections }
    }
}

impl Database {
    pub async fn connect(config: &Config) -> AppResult<Self> {
        let mut options = ClientOptions::parse(&config.mongo_conn_string).await?;
        options.server_api = Some(ServerApi::builder().version(ServerApiVersion::V1).build());
        options.app_name = Some(env!("CARGO_PKG_NAME").to_string());
        options.max_pool_size = Some(10);
        options.connect_timeout = Some(Duration::from_secs(5));
        options.server_selection_timeout = Some(Duration::from_secs(5));

        let db = Self {
            inner: Client::with_options(options)?.database(&config.mongo_db_name),
        };
        db.ping().await?;

        log::info!("Connected to MongoDB database '{}'", db.inner.name());
        Ok(db)
    }

    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.inner.collection(name)
    }

    async fn ping(&self) -> AppResult<()> {
        self.inner.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }

    pub async fn health_check(&self) -> AppResult<DatabaseHealth> {
        self.ping().await?;
        let existing = self.inner.list_collection_names().await?;
        Ok(DatabaseHealth::from_existing(&existing))
    }
}

/// Every stored entity is addressed by its string `id`, never by `_id`.
pub async fn ensure_unique_id_index<T: Send + Sync>(collection: &Collection<T>) -> AppResult<()> {
    let index = IndexModel::builder()
        .keys(doc! { "id": 1 })
        .options(
            IndexOptions::builder()
                .unique(true)
                .name("id_unique".to_string())
                .build(),
        )
        .build();

    collection.create_index(index).await?;
    log::info!("Ensured unique id index on '{}'", collection.name());
    Ok(())
}

pub fn to_bson_datetime(value: DateTime<Utc>) -> bson::DateTime {
    bson::DateTime::from_millis(value.timestamp_millis())
}

pub fn from_bson_datetime(value: bson::DateTime) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(value.timestamp_millis()).unwrap_or_default()
}
