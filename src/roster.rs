//! Roster entries and the validation gate applied before one is created.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::matcher;

/// One roster entry. The id is opaque and unique within a roster; the
/// timezone has passed [`crate::is_valid_timezone`] at creation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    pub timezone: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    #[error("member name must not be empty")]
    EmptyName,
    #[error("not a known timezone: {0}")]
    UnknownTimezone(String),
}

/// In-memory roster, kept in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Roster {
    members: Vec<TeamMember>,
}

impl Roster {
    pub fn new(members: Vec<TeamMember>) -> Self {
        Self { members }
    }

    pub fn members(&self) -> &[TeamMember] {
        &self.members
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Validate and append a new member, returning its generated id.
    ///
    /// The timezone gate is mandatory: classification downstream assumes it
    /// only ever sees identifiers that passed this check.
    pub fn add(&mut self, name: &str, timezone: &str) -> Result<String, RosterError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(RosterError::EmptyName);
        }
        if !matcher::is_valid_timezone(timezone) {
            return Err(RosterError::UnknownTimezone(timezone.to_string()));
        }

        let id = self.next_id();
        self.members.push(TeamMember { id: id.clone(), name: name.to_string(), timezone: timezone.to_string() });
        Ok(id)
    }

    /// Remove the entry with the given id. Returns whether one was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.members.len();
        self.members.retain(|member| member.id != id);
        self.members.len() != before
    }

    // Ids are creation timestamps, suffixed on the rare same-instant clash.
    fn next_id(&self) -> String {
        let base = Utc::now().format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string();
        let mut id = base.clone();
        let mut n = 1;
        while self.members.iter().any(|member| member.id == id) {
            id = format!("{base}-{n}");
            n += 1;
        }
        id
    }
}
