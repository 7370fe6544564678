//! Read-only data bundle and JSON decoding.
//!
//! A [`Bundle`] is the set of trusted data files shipped with the
//! application: either the datasets compiled into the binary or a directory
//! on disk. Decoding is all-or-nothing; a missing file, malformed JSON or a
//! missing required field fails the whole load.

use std::collections::HashSet;
use std::fmt;
use std::io::ErrorKind;
use std::path::PathBuf;

use serde::de::{self, DeserializeOwned, MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use tracing::{debug, trace};

use crate::catalog::AstronautTable;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::model::{Astronaut, Mission};

/// Default name of the astronaut dataset.
pub const ASTRONAUTS_FILE: &str = "astronauts.json";

/// Default name of the mission dataset.
pub const MISSIONS_FILE: &str = "missions.json";

/// Datasets compiled into the binary.
const EMBEDDED: &[(&str, &str)] = &[
    (ASTRONAUTS_FILE, include_str!("../data/astronauts.json")),
    (MISSIONS_FILE, include_str!("../data/missions.json")),
];

/// Where bundled resources are read from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Bundle {
    /// The datasets compiled into the binary.
    #[default]
    Embedded,
    /// A directory containing the dataset files.
    Directory(PathBuf),
}

impl Bundle {
    /// Select the bundle named by the configuration.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        config
            .data
            .dir
            .clone()
            .map_or(Self::Embedded, Self::Directory)
    }

    /// Short description for logs and status output.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Embedded => "embedded bundle".to_string(),
            Self::Directory(dir) => dir.display().to_string(),
        }
    }

    /// Read the raw text of a named resource.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ResourceNotFound`] if the bundle has no such
    /// resource, or [`Error::ResourceRead`] if the file exists but cannot be
    /// read.
    pub fn read(&self, name: &str) -> Result<String> {
        let not_found = || Error::ResourceNotFound {
            resource: name.to_string(),
            bundle: self.describe(),
        };
        match self {
            Self::Embedded => EMBEDDED
                .iter()
                .find(|(resource, _)| *resource == name)
                .map(|(_, text)| (*text).to_string())
                .ok_or_else(not_found),
            Self::Directory(dir) => {
                let path = dir.join(name);
                trace!("Reading resource from {}", path.display());
                std::fs::read_to_string(&path).map_err(|source| match source.kind() {
                    ErrorKind::NotFound => not_found(),
                    _ => Error::ResourceRead {
                        resource: name.to_string(),
                        path,
                        source,
                    },
                })
            }
        }
    }

    /// Read and decode a named resource into `T`.
    ///
    /// # Errors
    ///
    /// Returns a bundle error if the resource cannot be read, or
    /// [`Error::Schema`] if it does not decode into `T`.
    pub fn decode<T: DeserializeOwned>(&self, name: &str) -> Result<T> {
        parse(name, &self.read(name)?)
    }
}

fn parse<T: DeserializeOwned>(name: &str, text: &str) -> Result<T> {
    serde_json::from_str(text).map_err(|source| Error::schema(name, source))
}

/// Entries of a keyed astronaut document in file order.
///
/// Unlike a map, repeated keys are all kept so the table can reject them.
struct KeyedEntries(Vec<(String, Astronaut)>);

impl<'de> Deserialize<'de> for KeyedEntries {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = KeyedEntries;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object of astronauts keyed by id")
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry::<String, Astronaut>()? {
                    entries.push(entry);
                }
                Ok(KeyedEntries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}

/// Load the astronaut table from a keyed object or an array document.
///
/// # Errors
///
/// Returns a bundle or schema error if the resource is missing, malformed,
/// repeats a key or contains duplicate ids.
pub fn load_astronauts(bundle: &Bundle, name: &str) -> Result<AstronautTable> {
    let text = bundle.read(name)?;
    let table = match text.trim_start().chars().next() {
        Some('{') => {
            let KeyedEntries(entries) = parse(name, &text)?;
            AstronautTable::from_keyed(name, entries)?
        }
        Some('[') => AstronautTable::from_records(name, parse(name, &text)?)?,
        _ => {
            return Err(Error::schema(
                name,
                de::Error::custom("expected an object or array of astronauts"),
            ));
        }
    };
    debug!("Decoded {} astronauts from {name}", table.len());
    Ok(table)
}

/// Load the mission list.
///
/// # Errors
///
/// Returns a bundle or schema error if the resource is missing or malformed,
/// or [`Error::DuplicateMission`] if two missions share an id.
pub fn load_missions(bundle: &Bundle, name: &str) -> Result<Vec<Mission>> {
    let missions: Vec<Mission> = bundle.decode(name)?;
    let mut seen = HashSet::with_capacity(missions.len());
    if let Some(repeat) = missions.iter().find(|m| !seen.insert(&m.id)) {
        return Err(Error::DuplicateMission {
            resource: name.to_string(),
            id: repeat.id.to_string(),
        });
    }
    debug!("Decoded {} missions from {name}", missions.len());
    Ok(missions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::init_test_logging;
    use crate::roster::resolve_crew;

    const SAMPLE_ASTRONAUTS: &str = r#"{
        "grissom": {"id": "grissom", "name": "Virgil I. \"Gus\" Grissom", "description": "Mercury Seven."},
        "young": {"id": "young", "name": "John W. Young", "description": "Gemini 3 pilot."}
    }"#;

    const SAMPLE_MISSIONS: &str = r#"[
        {
            "id": 3,
            "launchDate": "1965-03-23",
            "description": "First crewed Gemini flight.",
            "crew": [
                {"name": "grissom", "role": "Command Pilot"},
                {"name": "young", "role": "Pilot"}
            ]
        }
    ]"#;

    fn bundle_with(files: &[(&str, &str)]) -> (tempfile::TempDir, Bundle) {
        let dir = tempfile::tempdir().unwrap();
        for (name, text) in files {
            std::fs::write(dir.path().join(name), text).unwrap();
        }
        let bundle = Bundle::Directory(dir.path().to_path_buf());
        (dir, bundle)
    }

    #[test]
    fn test_embedded_resources_decode() {
        init_test_logging();
        let astronauts = load_astronauts(&Bundle::Embedded, ASTRONAUTS_FILE).unwrap();
        let missions = load_missions(&Bundle::Embedded, MISSIONS_FILE).unwrap();
        assert_eq!(astronauts.len(), 32);
        assert_eq!(missions.len(), 12);
    }

    #[test]
    fn test_embedded_unknown_resource() {
        let err = Bundle::Embedded.read("comets.json").unwrap_err();
        assert!(matches!(err, Error::ResourceNotFound { .. }));
        assert!(err.is_data_corruption());
    }

    #[test]
    fn test_sample_resolves_two_crew_members() {
        let (_dir, bundle) = bundle_with(&[
            (ASTRONAUTS_FILE, SAMPLE_ASTRONAUTS),
            (MISSIONS_FILE, SAMPLE_MISSIONS),
        ]);
        let astronauts = load_astronauts(&bundle, ASTRONAUTS_FILE).unwrap();
        let missions = load_missions(&bundle, MISSIONS_FILE).unwrap();

        let roster = resolve_crew(&missions[0], &astronauts).unwrap();
        assert_eq!(roster.len(), 2);
        assert_eq!(roster[0].role, "Command Pilot");
        assert_eq!(roster[0].astronaut.id, "grissom");
        assert_eq!(roster[1].role, "Pilot");
        assert_eq!(roster[1].astronaut.id, "young");
    }

    #[test]
    fn test_array_document_is_accepted() {
        let (_dir, bundle) = bundle_with(&[(
            ASTRONAUTS_FILE,
            r#"[{"id": "young", "name": "John W. Young", "description": "bio"}]"#,
        )]);
        let table = load_astronauts(&bundle, ASTRONAUTS_FILE).unwrap();
        assert_eq!(table.get("young").unwrap().name, "John W. Young");
    }

    #[test]
    fn test_missing_name_fails_load() {
        let (_dir, bundle) = bundle_with(&[(
            ASTRONAUTS_FILE,
            r#"{"young": {"id": "young", "description": "bio"}}"#,
        )]);
        let err = load_astronauts(&bundle, ASTRONAUTS_FILE).unwrap_err();
        assert!(matches!(err, Error::Schema { .. }));
        assert!(err.to_string().contains("name"));
    }

    #[test]
    fn test_wrong_document_shape_fails_load() {
        let (_dir, bundle) = bundle_with(&[(ASTRONAUTS_FILE, "42")]);
        let err = load_astronauts(&bundle, ASTRONAUTS_FILE).unwrap_err();
        assert!(matches!(err, Error::Schema { .. }));
    }

    #[test]
    fn test_duplicate_ids_in_array_fail_load() {
        let (_dir, bundle) = bundle_with(&[(
            ASTRONAUTS_FILE,
            r#"[
                {"id": "young", "name": "John W. Young", "description": "a"},
                {"id": "young", "name": "John Young", "description": "b"}
            ]"#,
        )]);
        let err = load_astronauts(&bundle, ASTRONAUTS_FILE).unwrap_err();
        assert!(matches!(err, Error::DuplicateAstronaut { .. }));
    }

    #[test]
    fn test_malformed_json_fails_load() {
        let (_dir, bundle) = bundle_with(&[(MISSIONS_FILE, "[{\"id\": 1,")]);
        let err = load_missions(&bundle, MISSIONS_FILE).unwrap_err();
        assert!(matches!(err, Error::Schema { ref resource, .. } if resource == MISSIONS_FILE));
    }

    #[test]
    fn test_mission_missing_crew_fails_load() {
        let (_dir, bundle) = bundle_with(&[(MISSIONS_FILE, r#"[{"id": 1, "description": "d"}]"#)]);
        let err = load_missions(&bundle, MISSIONS_FILE).unwrap_err();
        assert!(err.to_string().contains("crew"));
    }

    #[test]
    fn test_duplicate_key_in_keyed_document_fails_load() {
        let (_dir, bundle) = bundle_with(&[(
            ASTRONAUTS_FILE,
            r#"{
                "young": {"id": "young", "name": "John W. Young", "description": "a"},
                "young": {"id": "young", "name": "Imposter", "description": "b"}
            }"#,
        )]);
        let err = load_astronauts(&bundle, ASTRONAUTS_FILE).unwrap_err();
        assert!(matches!(err, Error::DuplicateAstronaut { ref id, .. } if id == "young"));
    }

    #[test]
    fn test_duplicate_id_in_keyed_document_fails_load() {
        let (_dir, bundle) = bundle_with(&[(
            ASTRONAUTS_FILE,
            r#"{
                "young": {"id": "young", "name": "John W. Young", "description": "a"},
                "john": {"id": "young", "name": "John Young", "description": "b"}
            }"#,
        )]);
        let err = load_astronauts(&bundle, ASTRONAUTS_FILE).unwrap_err();
        assert!(matches!(err, Error::DuplicateAstronaut { ref id, .. } if id == "young"));
    }

    #[test]
    fn test_keyed_document_keeps_every_record() {
        let (_dir, bundle) = bundle_with(&[(ASTRONAUTS_FILE, SAMPLE_ASTRONAUTS)]);
        let table = load_astronauts(&bundle, ASTRONAUTS_FILE).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("young").unwrap().name, "John W. Young");
    }

    #[test]
    fn test_duplicate_mission_id_fails_load() {
        let (_dir, bundle) = bundle_with(&[(
            MISSIONS_FILE,
            r#"[
                {"id": 11, "description": "first", "crew": []},
                {"id": 12, "description": "second", "crew": []},
                {"id": 11, "description": "again", "crew": []}
            ]"#,
        )]);
        let err = load_missions(&bundle, MISSIONS_FILE).unwrap_err();
        assert!(matches!(err, Error::DuplicateMission { ref id, .. } if id == "11"));
        assert!(err.is_data_corruption());
    }

    #[test]
    fn test_missing_file_fails_load() {
        let (dir, bundle) = bundle_with(&[]);
        let err = load_missions(&bundle, MISSIONS_FILE).unwrap_err();
        assert!(matches!(
            err,
            Error::ResourceNotFound { ref resource, .. } if resource == MISSIONS_FILE
        ));
        assert!(err
            .to_string()
            .contains(&dir.path().display().to_string()));
    }

    #[test]
    fn test_unreadable_file_fails_load() {
        let (dir, bundle) = bundle_with(&[]);
        std::fs::create_dir(dir.path().join(MISSIONS_FILE)).unwrap();
        let err = load_missions(&bundle, MISSIONS_FILE).unwrap_err();
        assert!(matches!(err, Error::ResourceRead { .. }));
    }

    #[test]
    fn test_bundle_from_config() {
        let mut config = Config::default();
        assert_eq!(Bundle::from_config(&config), Bundle::Embedded);

        config.data.dir = Some(PathBuf::from("/srv/moonshot"));
        assert_eq!(
            Bundle::from_config(&config),
            Bundle::Directory(PathBuf::from("/srv/moonshot"))
        );
    }

    #[test]
    fn test_describe() {
        assert_eq!(Bundle::Embedded.describe(), "embedded bundle");
        assert_eq!(
            Bundle::Directory(PathBuf::from("/srv/moonshot")).describe(),
            "/srv/moonshot"
        );
    }
}
