use std::collections::BTreeSet;
use std::fmt;

/// Distinct competition names seen in an export.
///
/// Captured by the cleaner before the `Tournament` column is dropped and
/// reported in the output footer. Ordered so the footer is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tournaments {
    names: BTreeSet<String>,
}

impl Tournaments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a competition name. Blank names are ignored.
    pub fn insert(&mut self, name: &str) -> bool {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return false;
        }
        self.names.insert(trimmed.to_string())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl<'a> FromIterator<&'a str> for Tournaments {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut tournaments = Tournaments::new();
        for name in iter {
            tournaments.insert(name);
        }
        tournaments
    }
}

impl fmt::Display for Tournaments {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, name) in self.names.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            f.write_str(name)?;
        }
        Ok(())
    }
}
