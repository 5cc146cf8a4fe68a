// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! SQLite-backed repository implementations.
//!
//! [`SqliteStore`] is the explicit storage handle: it wraps the connection
//! pool opened at startup and is injected into handlers through axum
//! state. Uniqueness is enforced by `UNIQUE` columns; violations surface
//! as [`AppError::Conflict`] via the `From<sqlx::Error>` classification.
//! Eager loads are two bulk queries grouped by the foreign key, not
//! per-row lookups.

use std::collections::HashMap;

use async_trait::async_trait;
use potluck_core::prelude::*;
use sqlx::SqlitePool;

use crate::error::AppError;

/// Storage handle wrapping the SQLite connection pool.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Wrap an open connection pool.
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Underlying pool, for migrations and custom queries.
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

/// Database row for a Person.
#[derive(Debug, Clone, sqlx::FromRow)]
struct PersonRow {
    id: i64,
    name: String,
    attending: bool,
}

impl From<PersonRow> for Person {
    fn from(row: PersonRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            attending: row.attending,
        }
    }
}

/// Database row for a Dish.
#[derive(Debug, Clone, sqlx::FromRow)]
struct DishRow {
    id: i64,
    name: String,
    description: String,
    person_id: Option<i64>,
}

impl From<DishRow> for Dish {
    fn from(row: DishRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            description: row.description,
            person_id: row.person_id,
        }
    }
}

#[async_trait]
impl PersonRepository for SqliteStore {
    type Error = AppError;

    async fn create(&self, dto: CreatePersonRequest) -> Result<Person, Self::Error> {
        let row: PersonRow = sqlx::query_as(
            "INSERT INTO people (name, attending) VALUES (?1, ?2) \
             RETURNING id, name, attending",
        )
        .bind(dto.name)
        .bind(dto.attending)
        .fetch_one(&self.pool)
        .await?;
        Ok(Person::from(row))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Person>, Self::Error> {
        let row: Option<PersonRow> =
            sqlx::query_as("SELECT id, name, attending FROM people WHERE id = ?1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(row.map(Person::from))
    }

    async fn update(
        &self,
        id: i64,
        dto: UpdatePersonRequest,
    ) -> Result<Option<Person>, Self::Error> {
        let row: Option<PersonRow> = sqlx::query_as(
            "UPDATE people SET name = COALESCE(?1, name), \
             attending = COALESCE(?2, attending) \
             WHERE id = ?3 RETURNING id, name, attending",
        )
        .bind(dto.name)
        .bind(dto.attending)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(Person::from))
    }

    async fn delete(&self, id: i64) -> Result<bool, Self::Error> {
        let result = sqlx::query("DELETE FROM people WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn list(&self) -> Result<Vec<Person>, Self::Error> {
        let rows: Vec<PersonRow> =
            sqlx::query_as("SELECT id, name, attending FROM people ORDER BY id")
                .fetch_all(&self.pool)
                .await?;
        Ok(rows.into_iter().map(Person::from).collect())
    }

    async fn list_by_attending(&self, attending: bool) -> Result<Vec<Person>, Self::Error> {
        let rows: Vec<PersonRow> = sqlx::query_as(
            "SELECT id, name, attending FROM people WHERE attending = ?1 ORDER BY id",
        )
        .bind(attending)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(Person::from).collect())
    }

    async fn list_with_dishes(&self) -> Result<Vec<PersonWithDishes>, Self::Error> {
        let people = PersonRepository::list(self).await?;
        let rows: Vec<DishRow> = sqlx::query_as(
            "SELECT id, name, description, person_id FROM dishes \
             WHERE person_id IS NOT NULL ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        let mut by_person: HashMap<i64, Vec<Dish>> = HashMap::new();
        for row in rows {
            if let Some(person_id) = row.person_id {
                by_person.entry(person_id).or_default().push(Dish::from(row));
            }
        }

        Ok(people
            .into_iter()
            .map(|person| {
                let dishes = by_person.remove(&person.id).unwrap_or_default();
                PersonWithDishes { person, dishes }
            })
            .collect())
    }
}

#[async_trait]
impl DishRepository for SqliteStore {
    type Error = AppError;

    async fn create(&self, dto: CreateDishRequest) -> Result<Dish, Self::Error> {
        let row: DishRow = sqlx::query_as(
            "INSERT INTO dishes (name, description, person_id) VALUES (?1, ?2, ?3) \
             RETURNING id, name, description, person_id",
        )
        .bind(dto.name)
        .bind(dto.description)
        .bind(dto.person_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(Dish::from(row))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Dish>, Self::Error> {
        let row: Option<DishRow> =
            sqlx::query_as("SELECT id, name, description, person_id FROM dishes WHERE id = ?1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(row.map(Dish::from))
    }

    async fn update(&self, id: i64, dto: UpdateDishRequest) -> Result<Option<Dish>, Self::Error> {
        let row: Option<DishRow> = sqlx::query_as(
            "UPDATE dishes SET name = COALESCE(?1, name), \
             description = COALESCE(?2, description), \
             person_id = COALESCE(?3, person_id) \
             WHERE id = ?4 RETURNING id, name, description, person_id",
        )
        .bind(dto.name)
        .bind(dto.description)
        .bind(dto.person_id)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(Dish::from))
    }

    async fn delete(&self, id: i64) -> Result<bool, Self::Error> {
        let result = sqlx::query("DELETE FROM dishes WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn list(&self) -> Result<Vec<Dish>, Self::Error> {
        let rows: Vec<DishRow> =
            sqlx::query_as("SELECT id, name, description, person_id FROM dishes ORDER BY id")
                .fetch_all(&self.pool)
                .await?;
        Ok(rows.into_iter().map(Dish::from).collect())
    }

    async fn list_with_people(&self) -> Result<Vec<DishWithPerson>, Self::Error> {
        let dishes = DishRepository::list(self).await?;
        let rows: Vec<PersonRow> = sqlx::query_as("SELECT id, name, attending FROM people")
            .fetch_all(&self.pool)
            .await?;
        let people: HashMap<i64, Person> = rows
            .into_iter()
            .map(|row| (row.id, Person::from(row)))
            .collect();

        Ok(dishes
            .into_iter()
            .map(|dish| {
                let person = dish.person_id.and_then(|id| people.get(&id).cloned());
                DishWithPerson { dish, person }
            })
            .collect())
    }
}
