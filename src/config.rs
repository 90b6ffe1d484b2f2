//! Tree Configuration
//!
//! Defines the configuration used by the `DecisionTreeClassifier`, including
//! the tie-break policy applied when several candidates rank equally.
use crate::constants::DEFAULT_MAX_DEPTH;
use crate::errors::TreeError;
use crate::utils::items_to_strings;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Policy used to order candidates with equal score.
///
/// Applies both to split attributes of equal gain and to classes of equal
/// count when a leaf falls back to its majority class.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum TieBreak {
    /// Rank `(score, name)` lexicographically, the greatest name wins.
    #[default]
    GreatestName,
    /// Keep the first candidate encountered.
    FirstSeen,
}

impl FromStr for TieBreak {
    type Err = TreeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "GreatestName" => Ok(TieBreak::GreatestName),
            "FirstSeen" => Ok(TieBreak::FirstSeen),
            _ => Err(TreeError::ParseString(
                s.to_string(),
                "TieBreak".to_string(),
                items_to_strings(vec!["GreatestName", "FirstSeen"]),
            )),
        }
    }
}

fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}
fn default_tie_break() -> TieBreak {
    TieBreak::GreatestName
}
fn default_num_threads() -> Option<usize> {
    None
}

/// Configuration for the `DecisionTreeClassifier`.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct TreeConfig {
    /// Column holding the class label.
    pub target: String,
    /// Candidate split attributes, in scan order.
    pub attributes: Vec<String>,
    /// Maximum depth of the tree, 0 keeps only the root.
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
    /// Ordering applied to equal gains and equal class counts.
    #[serde(default = "default_tie_break")]
    pub tie_break: TieBreak,
    /// Number of threads for batch prediction.
    #[serde(default = "default_num_threads")]
    pub num_threads: Option<usize>,
    /// Log a summary once the tree is built.
    #[serde(default)]
    pub verbose: bool,
}

impl TreeConfig {
    pub fn new(target: &str, attributes: &[&str]) -> Self {
        TreeConfig {
            target: target.to_string(),
            attributes: attributes.iter().map(|a| a.to_string()).collect(),
            ..Default::default()
        }
    }
}

impl Default for TreeConfig {
    fn default() -> Self {
        TreeConfig {
            target: String::new(),
            attributes: Vec::new(),
            max_depth: DEFAULT_MAX_DEPTH,
            tie_break: TieBreak::GreatestName,
            num_threads: None,
            verbose: false,
        }
    }
}

/// IO
pub trait ConfigIO: Serialize + DeserializeOwned + Sized {
    /// Save a config as a json object to a file.
    ///
    /// * `path` - Path to save the config.
    fn save_config<P: AsRef<Path>>(&self, path: P) -> Result<(), TreeError> {
        fs::write(path, self.json_dump()?).map_err(|e| TreeError::UnableToWrite(e.to_string()))
    }

    /// Dump a config as a json object
    fn json_dump(&self) -> Result<String, TreeError> {
        serde_json::to_string(self).map_err(|e| TreeError::UnableToWrite(e.to_string()))
    }

    /// Load a config from Json string
    ///
    /// * `json_str` - String object, which can be serialized to json.
    fn from_json(json_str: &str) -> Result<Self, TreeError> {
        serde_json::from_str::<Self>(json_str).map_err(|e| TreeError::UnableToRead(e.to_string()))
    }

    /// Load a config from a path to a json object.
    ///
    /// * `path` - Path to load the config from.
    fn load_config<P: AsRef<Path>>(path: P) -> Result<Self, TreeError> {
        let json_str = fs::read_to_string(path).map_err(|e| TreeError::UnableToRead(e.to_string()))?;
        Self::from_json(&json_str)
    }
}

impl ConfigIO for TreeConfig {}
