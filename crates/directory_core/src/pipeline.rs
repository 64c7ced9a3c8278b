use std::borrow::Cow;
use std::cmp::Ordering;

use crate::{Candidate, FilterState, SortConfig, SortDirection, SortKey};

/// Derives the displayed candidates: profession filter, then search, then sort.
///
/// Output borrows from `candidates` and keeps input order for ties.
pub fn derive_view<'a>(
    candidates: &'a [Candidate],
    filter: &FilterState,
    sort: Option<SortConfig>,
) -> Vec<&'a Candidate> {
    let query = filter.search.to_lowercase();

    let mut rows: Vec<&Candidate> = candidates
        .iter()
        .filter(|candidate| {
            filter.profession.is_empty() || matches_profession(candidate, &filter.profession)
        })
        .filter(|candidate| query.is_empty() || matches_lowered_query(candidate, &query))
        .collect();

    if let Some(config) = sort {
        rows.sort_by(|a, b| compare(a, b, config));
    }

    rows
}

/// Exact, case-sensitive match on the primary profession.
pub fn matches_profession(candidate: &Candidate, profession: &str) -> bool {
    candidate.profile.primary_profession.as_deref() == Some(profession)
}

/// Case-insensitive substring match across profile values and skill names.
pub fn matches_search(candidate: &Candidate, query: &str) -> bool {
    matches_lowered_query(candidate, &query.to_lowercase())
}

fn matches_lowered_query(candidate: &Candidate, query: &str) -> bool {
    candidate
        .profile
        .values()
        .chain(candidate.skills.iter().map(|skill| skill.name.as_str()))
        .any(|value| value.to_lowercase().contains(query))
}

/// Skill names joined with `", "` in their stored order.
pub fn joined_skills(candidate: &Candidate) -> String {
    candidate
        .skills
        .iter()
        .map(|skill| skill.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Value compared when sorting by `key`. Missing profile fields sort as "".
pub fn sort_value(candidate: &Candidate, key: SortKey) -> Cow<'_, str> {
    match key {
        SortKey::FullName => Cow::Borrowed(candidate.profile.full_name.as_deref().unwrap_or("")),
        SortKey::PrimaryProfession => Cow::Borrowed(
            candidate
                .profile
                .primary_profession
                .as_deref()
                .unwrap_or(""),
        ),
        SortKey::Skills => Cow::Owned(joined_skills(candidate)),
    }
}

fn compare(a: &Candidate, b: &Candidate, config: SortConfig) -> Ordering {
    let ordering = sort_value(a, config.key).cmp(&sort_value(b, config.key));
    match config.direction {
        SortDirection::Ascending => ordering,
        SortDirection::Descending => ordering.reverse(),
    }
}
