//! Directory engine: loading the candidate and job-title lists from the backend.
mod engine;
mod fetch;
mod types;
mod wire;

pub use engine::{EngineError, EngineHandle};
pub use fetch::{
    detail_url, DirectorySource, FetchSettings, ReqwestSource, CANDIDATES_PATH, JOBS_PATH,
};
pub use types::{EngineEvent, FailureKind, FetchError, FetchMetadata, FetchOutput};
pub use wire::{decode_candidates, decode_jobs, searchable_text, DecodeError};
