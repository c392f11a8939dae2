//! Sorting options for listing persons.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Field to sort the person collection by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SortField {
    #[default]
    Id,
    Name,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SortingOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortField {
    /// Wire literal used in the `sortField` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Id => "ID",
            SortField::Name => "NAME",
        }
    }
}

impl SortingOrder {
    /// Wire literal used in the `sortingOrder` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortingOrder::Ascending => "ASCENDING",
            SortingOrder::Descending => "DESCENDING",
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for SortingOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ID" => Ok(SortField::Id),
            "NAME" => Ok(SortField::Name),
            other => Err(format!("unknown sort field: {}", other)),
        }
    }
}

impl FromStr for SortingOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ASCENDING" => Ok(SortingOrder::Ascending),
            "DESCENDING" => Ok(SortingOrder::Descending),
            other => Err(format!("unknown sorting order: {}", other)),
        }
    }
}

/// Sorting options for `list_all`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonSortingOptions {
    #[serde(default)]
    pub sort_field: SortField,
    #[serde(default)]
    pub sorting_order: SortingOrder,
}

impl PersonSortingOptions {
    pub fn new(sort_field: SortField, sorting_order: SortingOrder) -> Self {
        Self {
            sort_field,
            sorting_order,
        }
    }

    /// Query pairs in the order they are sent on the wire.
    pub fn query_pairs(&self) -> [(&'static str, &'static str); 2] {
        [
            ("sortField", self.sort_field.as_str()),
            ("sortingOrder", self.sorting_order.as_str()),
        ]
    }
}
