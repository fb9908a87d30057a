//! Database connection pool management.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

/// DDL for the contacts table. Applied at startup when the table is absent.
const CREATE_CONTACTS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS contacts (
    id SERIAL PRIMARY KEY,
    first_name VARCHAR NOT NULL,
    last_name VARCHAR NOT NULL,
    email VARCHAR NOT NULL,
    phone_number VARCHAR NOT NULL,
    birth_date DATE NOT NULL,
    additional_data VARCHAR
)
"#;

/// Database configuration.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub username: String,
    pub password: String,
    pub host: String,
    pub port: u16,
    pub name: String,
}

impl DatabaseConfig {
    /// Builds the PostgreSQL connection string.
    pub fn connection_url(&self) -> String {
        format!(
            "postgresql://{}:{}@{}:{}/{}",
            self.username, self.password, self.host, self.port, self.name
        )
    }

    /// Connection string with the password masked, safe for logs.
    pub fn redacted_url(&self) -> String {
        format!(
            "postgresql://{}:****@{}:{}/{}",
            self.username, self.host, self.port, self.name
        )
    }
}

/// Creates a PostgreSQL connection pool for the given configuration.
///
/// Pool sizing and timeouts are left at the driver defaults.
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .connect(&config.connection_url())
        .await
}

/// Creates the contacts table if it does not exist yet.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_CONTACTS_TABLE).execute(pool).await?;
    info!("Contacts table ready");
    Ok(())
}
