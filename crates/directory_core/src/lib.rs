//! Candidate directory core: data model, derivation pipeline, pure state machine
//! and view-model helpers.
mod candidate;
mod effect;
mod msg;
mod pipeline;
mod state;
mod update;
mod view_model;

pub use candidate::{
    Candidate, CandidateId, FilterState, Profile, Skill, SortConfig, SortDirection, SortKey,
};
pub use effect::Effect;
pub use msg::Msg;
pub use pipeline::{derive_view, joined_skills, matches_profession, matches_search, sort_value};
pub use state::{AppState, ListKind, LoadStatus};
pub use update::update;
pub use view_model::{CandidateRowView, DetailView, DirectoryViewModel};
