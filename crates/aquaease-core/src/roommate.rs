//! Roommates
//!
//! A roommate row counts toward the split only when it is "active": at least
//! one of name or email is non-blank after trimming. Rows added and left
//! empty are dropped before any split computation or submission.

use serde::{Deserialize, Deserializer, Serialize};

/// A roommate sharing the subscription
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roommate {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub email: String,
}

impl Roommate {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    pub fn is_active(&self) -> bool {
        !self.name.trim().is_empty() || !self.email.trim().is_empty()
    }
}

/// Active roommates, in input order
pub fn active_roommates(roommates: &[Roommate]) -> Vec<Roommate> {
    roommates.iter().filter(|r| r.is_active()).cloned().collect()
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}
