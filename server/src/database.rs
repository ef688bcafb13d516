//! # Postgres
//!
//! Relational storage for submitted feedback.
//!
//! ## Schema
//!
//! One `feedback` table:
//! - id (**serial**, primary key)
//! - name (**varchar 255**, not null)
//! - email (**varchar 255**, not null)
//! - phone (**varchar 20**, nullable)
//! - submission_date (**timestamptz**, defaults to insertion time)
//!
//! ## Connections
//!
//! - One connection per request, opened after validation passes and dropped
//!   before the handler returns. No pool, no reuse across requests.
//! - TLS to the backend is required regardless of what the connection string
//!   asks for.
//! - The table is created on demand so the service can run against a freshly
//!   provisioned database.

use chrono::{DateTime, Utc};
use native_tls::TlsConnector;
use postgres_native_tls::MakeTlsConnector;
use tokio_postgres::{Client, config::SslMode};
use tracing::error;

use crate::error::AppError;
use feedback::payloads::FeedbackSubmission;

pub const CREATE_TABLE: &str = "
    CREATE TABLE IF NOT EXISTS feedback (
        id SERIAL PRIMARY KEY,
        name VARCHAR(255) NOT NULL,
        email VARCHAR(255) NOT NULL,
        phone VARCHAR(20),
        submission_date TIMESTAMPTZ DEFAULT CURRENT_TIMESTAMP
    );
";

const INSERT_FEEDBACK: &str = "
    INSERT INTO feedback(name, email, phone)
    VALUES($1, $2, $3)
    RETURNING id, name, email, phone, submission_date
";

/// A stored row. Created exactly once per accepted submission, never updated
/// or deleted by this service.
pub struct FeedbackRecord {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub submission_date: DateTime<Utc>,
}

/// Opens a connection scoped to the current request. The spawned driver task
/// ends when the returned client is dropped; an error on the way down is
/// logged and nothing else.
pub async fn connect(database_url: &str) -> Result<Client, AppError> {
    let mut pg_config: tokio_postgres::Config = database_url.parse()?;
    pg_config.ssl_mode(SslMode::Require);

    let connector = MakeTlsConnector::new(TlsConnector::new()?);

    let (client, connection) = pg_config.connect(connector).await?;

    tokio::spawn(async move {
        if let Err(e) = connection.await {
            error!("Error closing database connection: {e}");
        }
    });

    Ok(client)
}

// TODO: drop the per-request create once schema management moves to external
// migrations.
pub async fn ensure_table(client: &Client) -> Result<(), tokio_postgres::Error> {
    client.batch_execute(CREATE_TABLE).await
}

pub async fn insert_feedback(
    client: &Client,
    data: &FeedbackSubmission,
) -> Result<FeedbackRecord, tokio_postgres::Error> {
    let phone = data.normalized_phone();

    let row = client
        .query_one(INSERT_FEEDBACK, &[&data.name, &data.email, &phone])
        .await?;

    Ok(FeedbackRecord {
        id: row.get(0),
        name: row.get(1),
        email: row.get(2),
        phone: row.get(3),
        submission_date: row.get(4),
    })
}
