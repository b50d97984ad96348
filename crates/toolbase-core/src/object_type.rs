//! Object Types
//!
//! The entity category selected in the navigation. It decides which
//! endpoints a region talks to.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectType {
    Tool,
    Model,
    Category,
    Employee,
    BuildingSite,
    Container,
    Loan,
    Reservation,
    ContainerLoan,
    Event,
    Loaner,
}

/// Tabs shown in the index navigation, in display order, with their labels.
pub const NAVIGATION_TABS: &[(ObjectType, &str)] = &[
    (ObjectType::Tool, "Værktøj"),
    (ObjectType::Model, "Modeller"),
    (ObjectType::Category, "Kategorier"),
    (ObjectType::Employee, "Medarbejdere"),
    (ObjectType::BuildingSite, "Byggepladser"),
    (ObjectType::Container, "Containere"),
];

impl ObjectType {
    pub const ALL: [ObjectType; 11] = [
        ObjectType::Tool,
        ObjectType::Model,
        ObjectType::Category,
        ObjectType::Employee,
        ObjectType::BuildingSite,
        ObjectType::Container,
        ObjectType::Loan,
        ObjectType::Reservation,
        ObjectType::ContainerLoan,
        ObjectType::Event,
        ObjectType::Loaner,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ObjectType::Tool => "tool",
            ObjectType::Model => "model",
            ObjectType::Category => "category",
            ObjectType::Employee => "employee",
            ObjectType::BuildingSite => "building_site",
            ObjectType::Container => "container",
            ObjectType::Loan => "loan",
            ObjectType::Reservation => "reservation",
            ObjectType::ContainerLoan => "container_loan",
            ObjectType::Event => "event",
            ObjectType::Loaner => "loaner",
        }
    }

    pub fn list_path(self) -> String {
        format!("/{}_list/", self.as_str())
    }

    pub fn banner_path(self) -> String {
        format!("/{}_banner/", self.as_str())
    }

    pub fn form_path(self) -> String {
        format!("/{}_form/", self.as_str())
    }

    pub fn action_path(self) -> String {
        format!("/{}_action/", self.as_str())
    }

    pub fn delete_path(self) -> String {
        format!("/{}_delete/", self.as_str())
    }

    /// The list that shows the effect of submitting this type's form.
    ///
    /// Loans and reservations change tools, container loans change containers.
    pub fn list_after_submit(self) -> ObjectType {
        match self {
            ObjectType::Loan | ObjectType::Reservation | ObjectType::Event => ObjectType::Tool,
            ObjectType::ContainerLoan => ObjectType::Container,
            other => other,
        }
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ObjectType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ObjectType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| Error::UnknownObjectType(s.to_string()))
    }
}

impl Default for ObjectType {
    fn default() -> Self {
        ObjectType::Tool
    }
}
