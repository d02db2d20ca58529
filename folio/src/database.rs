use folio_config::DatabaseConfig;
use folio_persistence_postgres::{PostgresDatabase, PostgresDatabaseConfig};

/// Create a database handle. No connection is opened until the first query.
pub fn connect(config: &DatabaseConfig) -> PostgresDatabase {
    PostgresDatabase::new(&PostgresDatabaseConfig {
        host: config.host.clone(),
        port: config.port,
        user: config.user.clone(),
        password: config.password.clone(),
        dbname: config.dbname.clone(),
    })
}
