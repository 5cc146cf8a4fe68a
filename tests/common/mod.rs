// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Shared harness: an in-memory store with the schema applied.

use std::sync::Arc;

use potluck::SqliteStore;
use potluck_core::prelude::*;
use sqlx::sqlite::SqlitePoolOptions;

/// Open a fresh in-memory database with migrations applied.
pub async fn setup() -> Arc<SqliteStore> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("failed to open in-memory database");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("failed to run migrations");
    Arc::new(SqliteStore::new(pool))
}

pub fn person(name: &str, attending: bool) -> CreatePersonRequest {
    CreatePersonRequest {
        name: name.into(),
        attending,
    }
}

pub fn dish(name: &str, description: &str, person_id: Option<i64>) -> CreateDishRequest {
    CreateDishRequest {
        name: name.into(),
        description: description.into(),
        person_id,
    }
}
