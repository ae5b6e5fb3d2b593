//! Seed data for the sqlite backed tests.

use sqlx::AnyPool;

/// Create the users table and fill it with five rows.
pub async fn seed_users(pool: &AnyPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        "CREATE TABLE users (
            id INTEGER PRIMARY KEY,
            full_name TEXT NOT NULL,
            email TEXT NOT NULL,
            age INTEGER NOT NULL,
            status TEXT NOT NULL,
            created_at TEXT NOT NULL
        )",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "INSERT INTO users (id, full_name, email, age, status, created_at) VALUES
            (1, 'Ada Lovelace', 'ada@example.com', 36, 'active', '2024-01-10T09:00:00Z'),
            (2, 'Grace Hopper', 'grace@example.com', 85, 'active', '2024-02-20T09:00:00Z'),
            (3, 'Alan Turing', 'alan@example.com', 41, 'banned', '2024-03-05T09:00:00Z'),
            (4, 'Edsger Dijkstra', 'edsger@example.com', 72, 'inactive', '2024-04-12T09:00:00Z'),
            (5, 'Barbara Liskov', 'barbara@example.com', 84, 'active', '2024-05-30T09:00:00Z')",
    )
    .execute(pool)
    .await?;

    Ok(())
}
