//! The loaded astronaut and mission collections.
//!
//! A [`Catalog`] is built once at startup by [`Catalog::load`] and then
//! handed around by shared reference. Nothing in it changes after loading.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};

use tracing::{debug, info};

use crate::bundle::{self, Bundle};
use crate::config::DataConfig;
use crate::error::{Error, Result};
use crate::model::{Astronaut, Mission, MissionId};
use crate::roster::{resolve_crew, CrewMember};

/// Astronaut records keyed by their join key.
///
/// For keyed documents the key is the JSON object key; for array documents
/// it is the record's `id`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AstronautTable {
    by_key: HashMap<String, Astronaut>,
}

impl AstronautTable {
    /// Build a table from `(key, record)` pairs in document order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateAstronaut`] if a key repeats or two records
    /// share an id.
    pub fn from_keyed(resource: &str, entries: Vec<(String, Astronaut)>) -> Result<Self> {
        let duplicate = |id: String| Error::DuplicateAstronaut {
            resource: resource.to_string(),
            id,
        };
        let mut by_key = HashMap::with_capacity(entries.len());
        let mut ids = HashSet::with_capacity(entries.len());
        for (key, astronaut) in entries {
            if !ids.insert(astronaut.id.clone()) {
                return Err(duplicate(astronaut.id));
            }
            match by_key.entry(key) {
                Entry::Occupied(slot) => return Err(duplicate(slot.key().clone())),
                Entry::Vacant(slot) => {
                    slot.insert(astronaut);
                }
            }
        }
        Ok(Self { by_key })
    }

    /// Build a table from a list of records, keyed by `id`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateAstronaut`] if two records share an id.
    pub fn from_records(resource: &str, records: Vec<Astronaut>) -> Result<Self> {
        Self::from_keyed(
            resource,
            records.into_iter().map(|a| (a.id.clone(), a)).collect(),
        )
    }

    /// Look up an astronaut by join key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Astronaut> {
        self.by_key.get(key)
    }

    /// Look up an astronaut by join key, falling back to a scan of record ids.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&Astronaut> {
        self.get(id)
            .or_else(|| self.by_key.values().find(|a| a.id == id))
    }

    /// Number of astronauts in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_key.len()
    }

    /// Check if the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_key.is_empty()
    }

    /// Iterate over `(key, astronaut)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Astronaut)> {
        self.by_key.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// All astronauts sorted by display name, then id.
    #[must_use]
    pub fn sorted_by_name(&self) -> Vec<&Astronaut> {
        let mut all: Vec<&Astronaut> = self.by_key.values().collect();
        all.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        all
    }
}

impl FromIterator<Astronaut> for AstronautTable {
    fn from_iter<I: IntoIterator<Item = Astronaut>>(iter: I) -> Self {
        Self {
            by_key: iter.into_iter().map(|a| (a.id.clone(), a)).collect(),
        }
    }
}

/// Read-only application state: every astronaut and every mission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    astronauts: AstronautTable,
    missions: Vec<Mission>,
}

impl Catalog {
    /// Assemble a catalog from already decoded collections.
    #[must_use]
    pub fn new(astronauts: AstronautTable, missions: Vec<Mission>) -> Self {
        Self {
            astronauts,
            missions,
        }
    }

    /// Decode both datasets from a bundle.
    ///
    /// # Errors
    ///
    /// Returns a bundle or schema error if either resource is missing or
    /// malformed. No partial catalog is ever produced.
    pub fn load(bundle: &Bundle, files: &DataConfig) -> Result<Self> {
        debug!("Loading catalog from {}", bundle.describe());
        let astronauts = bundle::load_astronauts(bundle, &files.astronauts_file)?;
        let missions = bundle::load_missions(bundle, &files.missions_file)?;
        info!(
            astronauts = astronauts.len(),
            missions = missions.len(),
            "Catalog loaded"
        );
        Ok(Self::new(astronauts, missions))
    }

    /// Decode the datasets compiled into the binary.
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded data is corrupt.
    pub fn embedded() -> Result<Self> {
        Self::load(&Bundle::Embedded, &DataConfig::default())
    }

    /// The astronaut lookup table.
    #[must_use]
    pub fn astronauts(&self) -> &AstronautTable {
        &self.astronauts
    }

    /// All missions in dataset order.
    #[must_use]
    pub fn missions(&self) -> &[Mission] {
        &self.missions
    }

    /// Find a mission by id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownMission`] if no mission has this id.
    pub fn mission(&self, id: &MissionId) -> Result<&Mission> {
        self.missions
            .iter()
            .find(|m| &m.id == id)
            .ok_or_else(|| Error::UnknownMission { id: id.to_string() })
    }

    /// Find an astronaut by id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownAstronaut`] if no astronaut has this id.
    pub fn astronaut(&self, id: &str) -> Result<&Astronaut> {
        self.astronauts
            .find(id)
            .ok_or_else(|| Error::UnknownAstronaut { id: id.to_string() })
    }

    /// Resolve a mission's crew against this catalog's astronauts.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingAstronaut`] if any crew entry is unresolved.
    pub fn roster<'a>(&'a self, mission: &'a Mission) -> Result<Vec<CrewMember<'a>>> {
        resolve_crew(mission, &self.astronauts)
    }

    /// Check that one mission's crew resolves, returning its size.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingAstronaut`] if any crew entry is unresolved.
    pub fn verify_mission(&self, mission: &Mission) -> Result<usize> {
        Ok(self.roster(mission)?.len())
    }

    /// Resolve every mission's crew, returning the total number of crew
    /// members resolved.
    ///
    /// # Errors
    ///
    /// Returns the first [`Error::MissingAstronaut`] encountered.
    pub fn verify(&self) -> Result<usize> {
        let mut resolved = 0;
        for mission in &self.missions {
            resolved += self.verify_mission(mission)?;
        }
        debug!(resolved, "Verified every mission roster");
        Ok(resolved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CrewRole;

    fn astronaut(id: &str, name: &str) -> Astronaut {
        Astronaut {
            id: id.to_string(),
            name: name.to_string(),
            description: format!("{name} biography"),
        }
    }

    fn mission(id: u64, crew: &[(&str, &str)]) -> Mission {
        Mission {
            id: MissionId::Number(id),
            launch_date: None,
            description: String::new(),
            crew: crew
                .iter()
                .map(|(name, role)| CrewRole {
                    name: (*name).to_string(),
                    role: (*role).to_string(),
                })
                .collect(),
        }
    }

    fn sample() -> Catalog {
        let astronauts: AstronautTable = [
            astronaut("grissom", "Virgil I. \"Gus\" Grissom"),
            astronaut("young", "John W. Young"),
        ]
        .into_iter()
        .collect();
        Catalog::new(
            astronauts,
            vec![
                mission(3, &[("grissom", "Command Pilot"), ("young", "Pilot")]),
                mission(99, &[("young", "Commander"), ("nobody", "Pilot")]),
            ],
        )
    }

    #[test]
    fn test_from_records_rejects_duplicates() {
        let result = AstronautTable::from_records(
            "astronauts.json",
            vec![astronaut("young", "John"), astronaut("young", "Also John")],
        );
        assert!(matches!(
            result,
            Err(Error::DuplicateAstronaut { ref id, .. }) if id == "young"
        ));
    }

    #[test]
    fn test_from_records_keys_by_id() {
        let table =
            AstronautTable::from_records("astronauts.json", vec![astronaut("duke", "Charlie")])
                .unwrap();
        assert_eq!(table.get("duke").unwrap().name, "Charlie");
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_from_keyed_rejects_repeated_key() {
        let result = AstronautTable::from_keyed(
            "astronauts.json",
            vec![
                ("young".to_string(), astronaut("young", "John W. Young")),
                ("young".to_string(), astronaut("john", "Imposter")),
            ],
        );
        assert!(matches!(
            result,
            Err(Error::DuplicateAstronaut { ref id, .. }) if id == "young"
        ));
    }

    #[test]
    fn test_from_keyed_rejects_shared_id() {
        let result = AstronautTable::from_keyed(
            "astronauts.json",
            vec![
                ("young".to_string(), astronaut("young", "John W. Young")),
                ("john".to_string(), astronaut("young", "John Young")),
            ],
        );
        assert!(matches!(
            result,
            Err(Error::DuplicateAstronaut { ref id, .. }) if id == "young"
        ));
    }

    #[test]
    fn test_find_falls_back_to_record_id() {
        let table = AstronautTable::from_keyed(
            "astronauts.json",
            vec![("Neil".to_string(), astronaut("armstrong", "Neil"))],
        )
        .unwrap();

        assert!(table.get("armstrong").is_none());
        assert_eq!(table.find("armstrong").unwrap().name, "Neil");
        assert_eq!(table.find("Neil").unwrap().id, "armstrong");
    }

    #[test]
    fn test_sorted_by_name() {
        let table: AstronautTable = [
            astronaut("young", "John W. Young"),
            astronaut("aldrin", "Buzz Aldrin"),
            astronaut("grissom", "Gus Grissom"),
        ]
        .into_iter()
        .collect();
        let names: Vec<&str> = table
            .sorted_by_name()
            .iter()
            .map(|a| a.name.as_str())
            .collect();
        assert_eq!(names, ["Buzz Aldrin", "Gus Grissom", "John W. Young"]);
    }

    #[test]
    fn test_mission_lookup() {
        let catalog = sample();
        assert_eq!(catalog.mission(&MissionId::Number(3)).unwrap().crew.len(), 2);
        assert!(matches!(
            catalog.mission(&MissionId::Number(4)),
            Err(Error::UnknownMission { .. })
        ));
    }

    #[test]
    fn test_astronaut_lookup() {
        let catalog = sample();
        assert_eq!(catalog.astronaut("young").unwrap().name, "John W. Young");
        assert!(catalog.astronaut("armstrong").unwrap_err().is_lookup_error());
    }

    #[test]
    fn test_roster_resolves_sample() {
        let catalog = sample();
        let mission = catalog.mission(&MissionId::Number(3)).unwrap();
        let roster = catalog.roster(mission).unwrap();
        assert_eq!(roster.len(), 2);
        assert_eq!(roster[0].role, "Command Pilot");
        assert_eq!(roster[1].astronaut.id, "young");
    }

    #[test]
    fn test_verify_reports_dangling_reference() {
        let err = sample().verify().unwrap_err();
        assert!(matches!(
            err,
            Error::MissingAstronaut { ref name, .. } if name == "nobody"
        ));
    }

    #[test]
    fn test_verify_mission() {
        let catalog = sample();
        assert_eq!(catalog.verify_mission(&catalog.missions()[0]).unwrap(), 2);
        assert!(catalog
            .verify_mission(&catalog.missions()[1])
            .unwrap_err()
            .is_data_corruption());
    }

    #[test]
    fn test_verify_counts_resolved_members() {
        let catalog = Catalog::new(
            sample().astronauts().clone(),
            vec![mission(3, &[("grissom", "Command Pilot")]), mission(4, &[])],
        );
        assert_eq!(catalog.verify().unwrap(), 1);
    }

    #[test]
    fn test_embedded_catalog_is_consistent() {
        let catalog = Catalog::embedded().unwrap();
        assert!(!catalog.astronauts().is_empty());
        assert!(!catalog.missions().is_empty());
        let crew_total: usize = catalog.missions().iter().map(|m| m.crew.len()).sum();
        assert_eq!(catalog.verify().unwrap(), crew_total);
    }

    #[test]
    fn test_embedded_keys_match_ids() {
        let catalog = Catalog::embedded().unwrap();
        for (key, astronaut) in catalog.astronauts().iter() {
            assert_eq!(key, astronaut.id);
        }
    }
}
