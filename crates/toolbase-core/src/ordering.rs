//! Ordering Links
//!
//! v2 lists carry `a.order_by` links whose target is `#field` or `#-field`.
//! After the list reloads with that ordering, the link is rewritten to point
//! at the opposite direction.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

impl Direction {
    pub fn flipped(self) -> Self {
        match self {
            Direction::Ascending => Direction::Descending,
            Direction::Descending => Direction::Ascending,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderKey {
    pub field: String,
    pub direction: Direction,
}

impl OrderKey {
    /// Parse a link target or parameter: `#-name`, `-name`, `#name`, `name`.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim().trim_start_matches('#');
        let (field, direction) = match raw.strip_prefix('-') {
            Some(field) => (field, Direction::Descending),
            None => (raw, Direction::Ascending),
        };
        if field.is_empty() {
            return None;
        }
        Some(Self {
            field: field.to_string(),
            direction,
        })
    }

    /// Value sent as `order_by`/`sorting`.
    pub fn param(&self) -> String {
        match self.direction {
            Direction::Ascending => self.field.clone(),
            Direction::Descending => format!("-{}", self.field),
        }
    }

    pub fn toggled(&self) -> Self {
        Self {
            field: self.field.clone(),
            direction: self.direction.flipped(),
        }
    }

    /// Id of the link for this field.
    pub fn link_id(&self) -> String {
        format!("order_by-{}", self.field)
    }

    /// Link target to install after a reload ordered by `self`.
    pub fn next_link_target(&self) -> String {
        format!("#{}", self.toggled().param())
    }
}

impl fmt::Display for OrderKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.param())
    }
}
