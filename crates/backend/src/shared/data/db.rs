use once_cell::sync::OnceCell;
use sea_orm::{ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, DbErr, Statement};
use std::path::Path;

static DB_CONN: OnceCell<DatabaseConnection> = OnceCell::new();

/// Таблицы, создаваемые при старте, если их ещё нет
const TABLES: &[(&str, &str)] = &[
    (
        "a001_shop",
        r#"
        CREATE TABLE a001_shop (
            id TEXT PRIMARY KEY NOT NULL,
            name TEXT NOT NULL,
            is_deleted INTEGER NOT NULL DEFAULT 0
        );
        "#,
    ),
    (
        "a002_rental",
        r#"
        CREATE TABLE a002_rental (
            id TEXT PRIMARY KEY NOT NULL,
            shop_id TEXT NOT NULL,
            rental_state TEXT NOT NULL,
            first_name TEXT NOT NULL,
            last_name TEXT NOT NULL,
            end_date TEXT NOT NULL,
            charge_amount REAL NOT NULL DEFAULT 0,
            charge_currency TEXT
        );
        "#,
    ),
];

/// Индекс под запрос отчёта: shop_id + rental_state, сортировка по end_date
const RENTAL_REPORT_INDEX: &str = r#"
    CREATE INDEX IF NOT EXISTS idx_a002_rental_shop_state_end
    ON a002_rental (shop_id, rental_state, end_date);
"#;

fn build_sqlite_url(path: &Path) -> String {
    // Normalize path separators and ensure proper URL form on Windows
    let normalized = path.to_string_lossy().replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    format!("sqlite://{}{}?mode=rwc", prefix, normalized)
}

pub async fn initialize_database(db_file: &Path) -> anyhow::Result<()> {
    if let Some(parent) = db_file.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let absolute_path = if db_file.is_absolute() {
        db_file.to_path_buf()
    } else {
        std::env::current_dir()?.join(db_file)
    };

    let db_url = build_sqlite_url(&absolute_path);
    tracing::info!("Opening database: {}", absolute_path.display());
    let conn = Database::connect(&db_url).await?;

    ensure_schema(&conn).await?;

    DB_CONN
        .set(conn)
        .map_err(|_| anyhow::anyhow!("Failed to set DB_CONN"))?;
    Ok(())
}

/// Minimal schema bootstrap: создаёт недостающие таблицы и индекс отчёта
pub async fn ensure_schema(conn: &DatabaseConnection) -> Result<(), DbErr> {
    for (table_name, create_sql) in TABLES {
        if table_exists(conn, table_name).await? {
            tracing::debug!("Table {} already exists", table_name);
            continue;
        }

        tracing::info!("Creating {} table", table_name);
        conn.execute(Statement::from_string(
            DatabaseBackend::Sqlite,
            create_sql.to_string(),
        ))
        .await?;
    }

    conn.execute(Statement::from_string(
        DatabaseBackend::Sqlite,
        RENTAL_REPORT_INDEX.to_string(),
    ))
    .await?;

    Ok(())
}

async fn table_exists(conn: &DatabaseConnection, table_name: &str) -> Result<bool, DbErr> {
    let rows = conn
        .query_all(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "SELECT name FROM sqlite_master WHERE type='table' AND name = ?",
            [table_name.into()],
        ))
        .await?;
    Ok(!rows.is_empty())
}

pub fn get_connection() -> &'static DatabaseConnection {
    DB_CONN
        .get()
        .expect("Database connection has not been initialized")
}

/// In-memory SQLite with the full schema, for repository and handler tests
#[cfg(test)]
pub async fn connect_in_memory() -> DatabaseConnection {
    let conn = Database::connect("sqlite::memory:")
        .await
        .expect("in-memory sqlite");
    ensure_schema(&conn).await.expect("schema bootstrap");
    conn
}
