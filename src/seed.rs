// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Demo seed data.

use potluck_core::prelude::*;

use crate::{error::AppResult, store::SqliteStore};

/// Seed the Goth household when the store is empty.
///
/// Safe to run on every startup; does nothing once any People exist.
pub async fn run(store: &SqliteStore) -> AppResult<()> {
    if !PersonRepository::list(store).await?.is_empty() {
        return Ok(());
    }

    // Fully qualified calls: both repository traits are in scope.
    let bella = PersonRepository::create(
        store,
        CreatePersonRequest {
            name: "Bella Goth".into(),
            attending: true,
        },
    )
    .await?;
    let mortimer = PersonRepository::create(
        store,
        CreatePersonRequest {
            name: "Mortimer Goth".into(),
            attending: true,
        },
    )
    .await?;
    PersonRepository::create(
        store,
        CreatePersonRequest {
            name: "Cassandra Goth".into(),
            attending: false,
        },
    )
    .await?;

    DishRepository::create(
        store,
        CreateDishRequest {
            name: "Salmon en croute".into(),
            description: "A French classic to serve as the centre piece at special \
                          gatherings with family and friends."
                .into(),
            person_id: Some(bella.id),
        },
    )
    .await?;
    DishRepository::create(
        store,
        CreateDishRequest {
            name: "Sardines with crisp paprika crumbs".into(),
            description: "A sardine is a very small, oily fish. An after-lunch mint \
                          may be in order."
                .into(),
            person_id: Some(mortimer.id),
        },
    )
    .await?;
    DishRepository::create(
        store,
        CreateDishRequest {
            name: "Escarole, cannellini bean and tomato salad".into(),
            description: "Escarole has broad, slightly curly, pale green leaves with \
                          a nutty, bitter taste similar to curly endive."
                .into(),
            person_id: Some(mortimer.id),
        },
    )
    .await?;

    tracing::info!("seeded demo people and dishes");
    Ok(())
}
