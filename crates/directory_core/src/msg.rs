use crate::{Candidate, CandidateId, ListKind, SortKey};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// View activated (startup or reload): load both lists.
    Activated,
    /// Candidate list arrived from the backend.
    CandidatesLoaded(Vec<Candidate>),
    /// Job-title list arrived from the backend.
    JobsLoaded(Vec<String>),
    /// Loading a list failed; it is shown as empty.
    LoadFailed { list: ListKind },
    /// User picked a job title. Empty means all jobs.
    ProfessionSelected(String),
    /// User edited the search box.
    SearchChanged(String),
    /// User clicked a sortable column header.
    SortRequested(SortKey),
    /// User clicked Clear Filters.
    ClearClicked,
    /// User opened the detail view of a candidate.
    ViewClicked(CandidateId),
    /// User closed the detail view.
    DetailClosed,
    /// Fallback for placeholder wiring.
    NoOp,
}
