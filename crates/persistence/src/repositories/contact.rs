//! Contact repository for database operations.

use domain::models::contact::{Contact, ContactWrite};
use shared::pagination::OffsetPage;
use sqlx::PgPool;

use crate::entities::ContactEntity;
use crate::metrics::QueryTimer;

/// Repository for contact-related database operations.
///
/// Every method checks a connection out of the pool for the duration of
/// its statement(s); the connection goes back to the pool when the method
/// returns, on success and on error.
#[derive(Clone)]
pub struct ContactRepository {
    pool: PgPool,
}

impl ContactRepository {
    /// Creates a new ContactRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a contact and return it with its generated id.
    pub async fn create(&self, input: &ContactWrite) -> Result<ContactEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_contact");
        let result = sqlx::query_as::<_, ContactEntity>(
            r#"
            INSERT INTO contacts (first_name, last_name, email, phone_number, birth_date, additional_data)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, first_name, last_name, email, phone_number, birth_date, additional_data
            "#,
        )
        .bind(&input.first_name)
        .bind(&input.last_name)
        .bind(&input.email)
        .bind(&input.phone_number)
        .bind(input.birth_date)
        .bind(input.additional_data.as_deref())
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// List one page of contacts, ordered by id.
    pub async fn list(&self, page: OffsetPage) -> Result<Vec<ContactEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_contacts");
        let result = sqlx::query_as::<_, ContactEntity>(
            r#"
            SELECT id, first_name, last_name, email, phone_number, birth_date, additional_data
            FROM contacts
            ORDER BY id ASC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Find a contact by its id.
    pub async fn find_by_id(&self, id: i64) -> Result<Option<ContactEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_contact_by_id");
        let result = sqlx::query_as::<_, ContactEntity>(
            r#"
            SELECT id, first_name, last_name, email, phone_number, birth_date, additional_data
            FROM contacts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Replace every field of a contact except its id.
    ///
    /// Returns `None` if no contact has the given id. The read and the write
    /// share one transaction, which rolls back if it is dropped before commit.
    pub async fn update(
        &self,
        id: i64,
        input: ContactWrite,
    ) -> Result<Option<ContactEntity>, sqlx::Error> {
        let timer = QueryTimer::new("update_contact");
        let mut tx = self.pool.begin().await?;

        let existing = sqlx::query_as::<_, ContactEntity>(
            r#"
            SELECT id, first_name, last_name, email, phone_number, birth_date, additional_data
            FROM contacts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;

        let mut contact: Contact = match existing {
            Some(entity) => entity.into(),
            None => {
                timer.record();
                return Ok(None);
            }
        };
        contact.replace_with(input);

        let updated = sqlx::query_as::<_, ContactEntity>(
            r#"
            UPDATE contacts
            SET first_name = $2,
                last_name = $3,
                email = $4,
                phone_number = $5,
                birth_date = $6,
                additional_data = $7
            WHERE id = $1
            RETURNING id, first_name, last_name, email, phone_number, birth_date, additional_data
            "#,
        )
        .bind(contact.id)
        .bind(&contact.first_name)
        .bind(&contact.last_name)
        .bind(&contact.email)
        .bind(&contact.phone_number)
        .bind(contact.birth_date)
        .bind(contact.additional_data.as_deref())
        .fetch_optional(&mut *tx)
        .await?;

        tx.commit().await?;
        timer.record();
        Ok(updated)
    }

    /// Delete a contact, returning the row as it was before removal.
    ///
    /// Returns `None` if no contact has the given id.
    pub async fn delete(&self, id: i64) -> Result<Option<ContactEntity>, sqlx::Error> {
        let timer = QueryTimer::new("delete_contact");
        let result = sqlx::query_as::<_, ContactEntity>(
            r#"
            DELETE FROM contacts
            WHERE id = $1
            RETURNING id, first_name, last_name, email, phone_number, birth_date, additional_data
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Count all contacts.
    pub async fn count(&self) -> Result<i64, sqlx::Error> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM contacts")
            .fetch_one(&self.pool)
            .await?;
        Ok(count.0)
    }
}
