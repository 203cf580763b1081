use std::fmt;

/// Outcome of scanning a build list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    // The id of the first record carrying the target build number
    Found(String),
    NotFound,
}

impl Lookup {
    pub fn id(&self) -> Option<&str> {
        match self {
            Lookup::Found(id) => Some(id.as_str()),
            Lookup::NotFound => None,
        }
    }
}

impl fmt::Display for Lookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lookup::Found(id) => write!(f, "FOUND_BUILD_ID:{}", id),
            Lookup::NotFound => f.write_str("BUILD_NOT_FOUND"),
        }
    }
}
