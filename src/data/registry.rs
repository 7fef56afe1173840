//! City registry: the fixed mapping from city to trip file.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::Error;
use crate::io::Compression;

/// One of the three cities with trip data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

impl City {
    /// All known cities, in prompt order.
    pub const ALL: [City; 3] = [City::Chicago, City::NewYorkCity, City::Washington];

    /// Name as typed at the prompt.
    pub fn name(&self) -> &'static str {
        match self {
            City::Chicago => "chicago",
            City::NewYorkCity => "new york city",
            City::Washington => "washington",
        }
    }

    /// Trip file name inside the data directory.
    pub fn file_name(&self) -> &'static str {
        match self {
            City::Chicago => "chicago.csv",
            City::NewYorkCity => "new_york_city.csv",
            City::Washington => "washington.csv",
        }
    }
}

impl std::fmt::Display for City {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for City {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        City::ALL
            .into_iter()
            .find(|city| city.name() == normalized)
            .ok_or(Error::InvalidInput {
                field: "city",
                value: normalized,
            })
    }
}

/// Immutable city → dataset mapping, built once at startup.
#[derive(Debug, Clone)]
pub struct CityRegistry {
    data_dir: PathBuf,
}

impl CityRegistry {
    /// Create a registry resolving trip files under `data_dir`.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Directory holding the trip files.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Resolve the dataset path for a city.
    ///
    /// Prefers the plain CSV file and falls back to a gzip-compressed sibling.
    /// When neither exists the plain path is returned so the loader reports it.
    pub fn dataset_path(&self, city: City) -> PathBuf {
        let plain = self.data_dir.join(city.file_name());
        if plain.exists() {
            return plain;
        }

        if let Some(ext) = Compression::Gzip.extension() {
            let compressed = self
                .data_dir
                .join(format!("{}.{}", city.file_name(), ext));
            if compressed.exists() {
                return compressed;
            }
        }

        plain
    }
}

impl Default for CityRegistry {
    fn default() -> Self {
        Self::new(".")
    }
}
