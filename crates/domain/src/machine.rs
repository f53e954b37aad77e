use std::cmp::Ordering;
use std::fmt;
use std::path::Path;

use crate::config::ConfigError;

/// A queryable host from a machines file, with optional lab annotations.
///
/// Identity is the name alone: two machines with the same name compare
/// equal regardless of annotations, and ordering is by name.
#[derive(Debug, Clone, Default)]
pub struct Machine {
    pub name: String,
    pub room: Option<String>,
    pub os: Option<String>,
    pub usage: Option<String>,
}

impl Machine {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

impl fmt::Display for Machine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.room {
            Some(room) => write!(f, "{}@{}", self.name, room),
            None => write!(f, "{}", self.name),
        }
    }
}

impl PartialEq for Machine {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Machine {}

impl PartialOrd for Machine {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Machine {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name.cmp(&other.name)
    }
}

/// Read a machines file: one machine per line, whitespace-separated
/// `name [room [os [usage]]]` fields, `#` comments and blank lines ignored.
pub fn load_machines(path: &Path) -> Result<Vec<Machine>, ConfigError> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::FileRead(path.display().to_string(), e.to_string()))?;
    Ok(parse_machines(&contents))
}

/// Parse machines-file contents; lines without a name field are skipped.
pub fn parse_machines(contents: &str) -> Vec<Machine> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| {
            let mut fields = line.split_whitespace().map(str::to_string);
            Some(Machine {
                name: fields.next()?,
                room: fields.next(),
                os: fields.next(),
                usage: fields.next(),
            })
        })
        .collect()
}
