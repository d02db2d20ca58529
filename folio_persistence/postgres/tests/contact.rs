use folio_models::contact::ContactSubmission;
use folio_persistence_contracts::{contact::ContactRepository, Database};
use folio_persistence_postgres::{
    contact::PostgresContactRepository, PostgresDatabase, PostgresDatabaseConfig,
};

#[tokio::test]
#[ignore = "requires a running postgres instance"]
async fn ping() {
    let db = setup().await;
    db.ping().await.unwrap();
}

#[tokio::test]
#[ignore = "requires a running postgres instance"]
async fn append_creates_table() {
    let db = setup().await;
    let sut = PostgresContactRepository::new(db);
    assert_eq!(sut.count().await.unwrap(), None);

    sut.append(&submission()).await.unwrap();

    assert_eq!(sut.count().await.unwrap(), Some(1));
}

#[tokio::test]
#[ignore = "requires a running postgres instance"]
async fn append_does_not_deduplicate() {
    let db = setup().await;
    let sut = PostgresContactRepository::new(db);

    sut.append(&submission()).await.unwrap();
    sut.append(&submission()).await.unwrap();

    assert_eq!(sut.count().await.unwrap(), Some(2));
}

#[tokio::test]
#[ignore = "requires a running postgres instance"]
async fn append_rejects_long_email() {
    let db = setup().await;
    let sut = PostgresContactRepository::new(db);

    let mut submission = submission();
    submission.email = format!("{}@{}.example.com", "a".repeat(60), "b".repeat(60))
        .parse()
        .unwrap();

    sut.append(&submission).await.unwrap_err();
}

fn submission() -> ContactSubmission {
    ContactSubmission {
        name: "Al".try_into().unwrap(),
        email: "al@example.com".parse().unwrap(),
        message: "Hello there, this is a test.".try_into().unwrap(),
    }
}

async fn setup() -> PostgresDatabase {
    let config = folio_config::load().unwrap();

    let db = PostgresDatabase::new(&PostgresDatabaseConfig {
        host: config.database.host,
        port: config.database.port,
        user: config.database.user,
        password: config.database.password,
        dbname: config.database.dbname,
    });

    db.execute("drop table if exists contact_messages")
        .await
        .unwrap();
    db
}
