//! Static team-to-package registry.
//!
//! Maps a packaging team name to the set of source packages it tracks.
//! The mapping ships embedded in the binary and is parsed once at startup;
//! nothing mutates it afterwards.

use std::collections::BTreeMap;

/// Teams and their tracked packages, shipped with the binary.
const BUILTIN_TEAMS: &str = include_str!("../data/teams.yaml");

/// Immutable lookup table from team name to tracked source packages.
#[derive(Debug)]
pub struct Registry {
    teams: BTreeMap<String, Vec<String>>,
}

impl Registry {
    /// Parses the registry shipped with the binary.
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded YAML is malformed.
    pub fn builtin() -> Result<Self, String> {
        Self::from_yaml(BUILTIN_TEAMS)
    }

    /// Parses a registry from YAML mapping team names to package lists.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML cannot be parsed.
    pub fn from_yaml(yaml: &str) -> Result<Self, String> {
        let teams: BTreeMap<String, Vec<String>> = serde_yaml::from_str(yaml)
            .map_err(|e| format!("Failed to parse team registry: {e}"))?;
        Ok(Self { teams })
    }

    /// Returns true if `name` is a registered team.
    #[must_use]
    pub fn contains_team(&self, name: &str) -> bool {
        self.teams.contains_key(name)
    }

    /// Returns the packages tracked by `team`, if it is registered.
    #[must_use]
    pub fn packages_for(&self, team: &str) -> Option<&[String]> {
        self.teams.get(team).map(Vec::as_slice)
    }
}
