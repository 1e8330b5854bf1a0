//! Roster persistence: a JSON file holding the serialized member sequence.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::roster::{Roster, TeamMember};

/// File-backed roster storage.
///
/// Loading is never fatal: a missing file seeds the default roster, and
/// unreadable or corrupt contents load as an empty roster with a warning.
#[derive(Debug, Clone)]
pub struct RosterStore {
    path: PathBuf,
}

impl RosterStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Roster {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Roster::new(default_members()),
            Err(err) => {
                log::warn!("failed to read roster file {}: {err}", self.path.display());
                return Roster::default();
            }
        };

        match serde_json::from_str::<Vec<TeamMember>>(&data) {
            Ok(members) => Roster::new(members),
            Err(err) => {
                log::warn!("corrupt roster file {}: {err}", self.path.display());
                Roster::default()
            }
        }
    }

    /// Persist the full member sequence, replacing the previous contents.
    pub fn save(&self, roster: &Roster) -> io::Result<()> {
        let data = serde_json::to_string_pretty(roster.members()).map_err(io::Error::other)?;
        fs::write(&self.path, data)
    }
}

// Seed shown on first launch, before anything has been saved.
fn default_members() -> Vec<TeamMember> {
    vec![
        TeamMember { id: "1".to_string(), name: "You".to_string(), timezone: "UTC".to_string() },
        TeamMember { id: "2".to_string(), name: "Alice".to_string(), timezone: "Europe/London".to_string() },
        TeamMember { id: "3".to_string(), name: "Bob".to_string(), timezone: "America/New_York".to_string() },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> RosterStore {
        RosterStore::new(dir.path().join("roster.json"))
    }

    #[test]
    fn missing_file_seeds_the_default_roster() {
        let dir = tempfile::tempdir().unwrap();
        let roster = store_in(&dir).load();

        let names: Vec<&str> = roster.members().iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["You", "Alice", "Bob"]);
    }

    #[test]
    fn save_then_load_round_trips_field_for_field() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let mut roster = Roster::default();
        roster.add("Alice", "Europe/London").unwrap();
        roster.add("Carol", "Etc/GMT-5").unwrap();
        store.save(&roster).unwrap();

        assert_eq!(store.load(), roster);
    }

    #[test]
    fn corrupt_contents_load_as_an_empty_roster() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        fs::write(store.path(), "{not json").unwrap();
        assert!(store.load().is_empty());

        // Valid JSON of the wrong shape is corrupt too.
        fs::write(store.path(), r#"{"id": "1"}"#).unwrap();
        assert!(store.load().is_empty());
    }

    #[test]
    fn saved_shape_is_a_sequence_of_records() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let mut roster = Roster::default();
        roster.add("Alice", "Europe/London").unwrap();
        store.save(&roster).unwrap();

        let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(store.path()).unwrap()).unwrap();
        let records = value.as_array().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["name"], "Alice");
        assert_eq!(records[0]["timezone"], "Europe/London");
        assert!(records[0]["id"].is_string());
    }
}
