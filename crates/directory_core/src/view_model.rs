use crate::{CandidateId, LoadStatus, SortConfig};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DirectoryViewModel {
    pub rows: Vec<CandidateRowView>,
    pub job_options: Vec<String>,
    pub profession_filter: String,
    pub search_query: String,
    pub sort: Option<SortConfig>,
    pub total_count: usize,
    pub shown_count: usize,
    pub detail: Option<DetailView>,
    pub candidates_status: LoadStatus,
    pub jobs_status: LoadStatus,
    pub dirty: bool,
}

/// One table row. Missing profile strings render as empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateRowView {
    pub id: CandidateId,
    pub full_name: String,
    pub primary_profession: String,
    pub skills: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub id: CandidateId,
    pub title: String,
    pub path: String,
}
