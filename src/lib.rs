// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! # potluck
//!
//! REST data service for dinner-party People and the Dishes they bring.
//!
//! The storage-agnostic core (entities, DTOs, query shaping, repository
//! traits) lives in `potluck-core`; this crate adds the SQLite-backed
//! [`SqliteStore`], the axum HTTP surface in [`api`], the error-to-status
//! mapping in [`error`], and the server plumbing ([`config`], [`seed`]).
//!
//! # Quick Start
//!
//! ```rust,ignore
//! let pool = SqlitePoolOptions::new().connect("sqlite://potluck.db").await?;
//! sqlx::migrate!("./migrations").run(&pool).await?;
//! let store = Arc::new(SqliteStore::new(pool));
//! axum::serve(listener, potluck::api::app(store)).await?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod api;
pub mod config;
pub mod error;
pub mod seed;
pub mod store;

pub use error::{AppError, AppResult};
pub use store::SqliteStore;
