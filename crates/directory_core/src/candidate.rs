use std::fmt;

/// Opaque candidate identifier as issued by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CandidateId {
    Number(i64),
    Text(String),
}

impl CandidateId {
    /// Path of the backend-rendered detail page for this candidate.
    pub fn detail_path(&self) -> String {
        format!("/candidate/{self}")
    }
}

impl fmt::Display for CandidateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CandidateId::Number(n) => write!(f, "{n}"),
            CandidateId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for CandidateId {
    fn from(value: i64) -> Self {
        CandidateId::Number(value)
    }
}

impl From<&str> for CandidateId {
    fn from(value: &str) -> Self {
        CandidateId::Text(value.to_string())
    }
}

/// Profile attributes of a candidate.
///
/// `None` marks a field that was missing from the payload. Additional
/// attributes are kept in their searchable string form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Profile {
    pub full_name: Option<String>,
    pub primary_profession: Option<String>,
    pub attributes: Vec<(String, String)>,
}

impl Profile {
    pub fn new(full_name: impl Into<String>, primary_profession: impl Into<String>) -> Self {
        Self {
            full_name: Some(full_name.into()),
            primary_profession: Some(primary_profession.into()),
            attributes: Vec::new(),
        }
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// Every present profile value, in a fixed order: name, profession, attributes.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.full_name
            .as_deref()
            .into_iter()
            .chain(self.primary_profession.as_deref())
            .chain(self.attributes.iter().map(|(_, value)| value.as_str()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skill {
    pub name: String,
}

impl Skill {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub id: CandidateId,
    pub profile: Profile,
    pub skills: Vec<Skill>,
}

impl Candidate {
    pub fn new(id: impl Into<CandidateId>, profile: Profile, skills: Vec<Skill>) -> Self {
        Self {
            id: id.into(),
            profile,
            skills,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKey {
    FullName,
    PrimaryProfession,
    Skills,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortConfig {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortConfig {
    pub fn ascending(key: SortKey) -> Self {
        Self {
            key,
            direction: SortDirection::Ascending,
        }
    }

    /// Next sort after the user activates `key`.
    ///
    /// Re-activating the active key flips its direction; any other key starts ascending.
    pub fn toggled(current: Option<SortConfig>, key: SortKey) -> SortConfig {
        match current {
            Some(active) if active.key == key => SortConfig {
                key,
                direction: active.direction.flipped(),
            },
            _ => SortConfig::ascending(key),
        }
    }
}

/// Profession filter and free-text search. Empty strings disable each stage.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    pub profession: String,
    pub search: String,
}

impl FilterState {
    pub fn is_empty(&self) -> bool {
        self.profession.is_empty() && self.search.is_empty()
    }
}
