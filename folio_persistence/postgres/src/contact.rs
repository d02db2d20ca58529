use anyhow::Context;
use folio_di::Build;
use folio_models::contact::ContactSubmission;
use folio_persistence_contracts::contact::ContactRepository;
use tracing::trace;

use crate::PostgresDatabase;

const CREATE_TABLE: &str = "create table if not exists contact_messages (
    id serial primary key,
    name varchar(100) not null,
    email varchar(100) not null,
    message text not null,
    created_at timestamp default current_timestamp
)";

const INSERT: &str = "insert into contact_messages (name, email, message) values ($1, $2, $3)";

#[derive(Debug, Clone, Build)]
pub struct PostgresContactRepository {
    db: PostgresDatabase,
}

impl PostgresContactRepository {
    pub fn new(db: PostgresDatabase) -> Self {
        Self { db }
    }

    /// Number of stored contact messages, or `None` if the table does not
    /// exist yet.
    pub async fn count(&self) -> anyhow::Result<Option<i64>> {
        let conn = self.db.connect().await?;
        let result = async {
            let exists = conn
                .client()
                .query_one("select to_regclass('contact_messages') is not null", &[])
                .await?
                .get::<_, bool>(0);
            if !exists {
                return anyhow::Ok(None);
            }
            let count = conn
                .client()
                .query_one("select count(*) from contact_messages", &[])
                .await?
                .get::<_, i64>(0);
            anyhow::Ok(Some(count))
        }
        .await;
        conn.close().await;
        result
    }
}

impl ContactRepository for PostgresContactRepository {
    async fn append(&self, submission: &ContactSubmission) -> anyhow::Result<()> {
        let conn = self.db.connect().await?;

        let result = async {
            trace!("ensure contact_messages table exists");
            conn.client()
                .batch_execute(CREATE_TABLE)
                .await
                .context("Failed to create contact_messages table")?;

            conn.client()
                .execute(
                    INSERT,
                    &[
                        &submission.name.as_str(),
                        &submission.email.as_str(),
                        &submission.message.as_str(),
                    ],
                )
                .await
                .context("Failed to insert contact message")?;

            anyhow::Ok(())
        }
        .await;

        conn.close().await;
        result
    }
}
