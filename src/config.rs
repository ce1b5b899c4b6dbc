//! K-mer counting configuration.
//!
//! Values come from [`CountConfig::default`], optionally overlaid by a JSON
//! file, and finally by command-line flags.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{NucleoError, Result};

/// Largest k for which the full k-mer space fits the codec's enumeration.
pub const MAX_ENUMERABLE_K: usize = 31;

/// Source of the second k-mer counted at every window offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrandMode {
    /// Count the forward k-mer a second time. Matches the historical output,
    /// where every forward window contributes 2 to its k-mer.
    #[default]
    Forward,
    /// Count the k-mer at the same offset of the reverse-complemented sequence.
    ReverseComplement,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CountConfig {
    pub k: usize,
    /// Insert every missing k-mer of the 4^k space with count 0.
    pub exhaustive: bool,
    pub strand: StrandMode,
    /// Exhaustive mode refuses any k above this.
    pub max_exhaustive_k: usize,
}

impl Default for CountConfig {
    fn default() -> Self {
        CountConfig {
            k: 4,
            exhaustive: false,
            strand: StrandMode::Forward,
            max_exhaustive_k: 12,
        }
    }
}

impl CountConfig {
    pub fn new(k: usize) -> Self {
        CountConfig { k, ..Default::default() }
    }

    pub fn exhaustive(mut self, exhaustive: bool) -> Self {
        self.exhaustive = exhaustive;
        self
    }

    pub fn strand(mut self, strand: StrandMode) -> Self {
        self.strand = strand;
        self
    }

    /// Load a configuration from a JSON file. Missing fields take their defaults.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        let config: CountConfig = serde_json::from_reader(BufReader::new(file))
            .map_err(|e| NucleoError::Config(format!("{}: {}", path.as_ref().display(), e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.k == 0 {
            return Err(NucleoError::Config("k must be at least 1".into()));
        }
        if self.max_exhaustive_k > MAX_ENUMERABLE_K {
            return Err(NucleoError::Config(format!(
                "max_exhaustive_k must be at most {}, got {}",
                MAX_ENUMERABLE_K, self.max_exhaustive_k
            )));
        }
        Ok(())
    }
}
