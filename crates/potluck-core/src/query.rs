// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Translation of list-query parameters into query modes.
//!
//! Exactly one mode applies per request. The selection order is fixed and
//! documented here rather than buried in handler branching: the attendance
//! filter wins over inclusion, so a request carrying both `attending` and
//! `include_dishes` applies only the attendance filter.

/// Query mode for `GET /api/people`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersonListQuery {
    /// All People, unfiltered.
    All,

    /// Only People whose `attending` field matches exactly.
    Attending(bool),

    /// All People, each with its Dishes eagerly attached.
    WithDishes,
}

impl PersonListQuery {
    /// Select the query mode for a request.
    ///
    /// Precedence: attendance filter, then inclusion, then unfiltered.
    pub const fn from_params(attending: Option<bool>, include_dishes: bool) -> Self {
        match attending {
            Some(value) => Self::Attending(value),
            None if include_dishes => Self::WithDishes,
            None => Self::All,
        }
    }
}

/// Query mode for `GET /api/dishes`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DishListQuery {
    /// All Dishes, unfiltered.
    All,

    /// All Dishes, each with its Person eagerly attached.
    WithPeople,
}

impl DishListQuery {
    /// Select the query mode for a request.
    pub const fn from_params(include_people: bool) -> Self {
        if include_people {
            Self::WithPeople
        } else {
            Self::All
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_unfiltered() {
        assert_eq!(PersonListQuery::from_params(None, false), PersonListQuery::All);
        assert_eq!(DishListQuery::from_params(false), DishListQuery::All);
    }

    #[test]
    fn attendance_filter_matches_both_values() {
        assert_eq!(
            PersonListQuery::from_params(Some(true), false),
            PersonListQuery::Attending(true)
        );
        assert_eq!(
            PersonListQuery::from_params(Some(false), false),
            PersonListQuery::Attending(false)
        );
    }

    #[test]
    fn inclusion_applies_without_attendance() {
        assert_eq!(
            PersonListQuery::from_params(None, true),
            PersonListQuery::WithDishes
        );
        assert_eq!(DishListQuery::from_params(true), DishListQuery::WithPeople);
    }

    #[test]
    fn attendance_wins_over_inclusion() {
        assert_eq!(
            PersonListQuery::from_params(Some(true), true),
            PersonListQuery::Attending(true)
        );
        assert_eq!(
            PersonListQuery::from_params(Some(false), true),
            PersonListQuery::Attending(false)
        );
    }
}
