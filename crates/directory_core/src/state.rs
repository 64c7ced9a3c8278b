use crate::pipeline::{derive_view, joined_skills};
use crate::view_model::{CandidateRowView, DetailView, DirectoryViewModel};
use crate::{Candidate, CandidateId, FilterState, SortConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Candidates,
    Jobs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadStatus {
    #[default]
    NotLoaded,
    Loading,
    Loaded,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    candidates: Vec<Candidate>,
    jobs: Vec<String>,
    filter: FilterState,
    sort: Option<SortConfig>,
    detail: Option<CandidateId>,
    candidates_status: LoadStatus,
    jobs_status: LoadStatus,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> DirectoryViewModel {
        let rows = derive_view(&self.candidates, &self.filter, self.sort)
            .into_iter()
            .map(|candidate| CandidateRowView {
                id: candidate.id.clone(),
                full_name: candidate.profile.full_name.clone().unwrap_or_default(),
                primary_profession: candidate
                    .profile
                    .primary_profession
                    .clone()
                    .unwrap_or_default(),
                skills: joined_skills(candidate),
            })
            .collect::<Vec<_>>();

        let detail = self
            .detail
            .as_ref()
            .and_then(|id| self.find(id))
            .map(|candidate| DetailView {
                id: candidate.id.clone(),
                title: candidate.profile.full_name.clone().unwrap_or_default(),
                path: candidate.id.detail_path(),
            });

        DirectoryViewModel {
            shown_count: rows.len(),
            total_count: self.candidates.len(),
            rows,
            job_options: self.jobs.clone(),
            profession_filter: self.filter.profession.clone(),
            search_query: self.filter.search.clone(),
            sort: self.sort,
            detail,
            candidates_status: self.candidates_status,
            jobs_status: self.jobs_status,
            dirty: self.dirty,
        }
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn sort(&self) -> Option<SortConfig> {
        self.sort
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    /// Returns whether the state changed since the last call and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn find(&self, id: &CandidateId) -> Option<&Candidate> {
        self.candidates.iter().find(|candidate| &candidate.id == id)
    }

    pub(crate) fn begin_loading(&mut self) {
        self.candidates_status = LoadStatus::Loading;
        self.jobs_status = LoadStatus::Loading;
        self.dirty = true;
    }

    pub(crate) fn set_candidates(&mut self, candidates: Vec<Candidate>) {
        self.candidates = candidates;
        self.candidates_status = LoadStatus::Loaded;
        self.dirty = true;
    }

    pub(crate) fn set_jobs(&mut self, jobs: Vec<String>) {
        self.jobs = jobs;
        self.jobs_status = LoadStatus::Loaded;
        self.dirty = true;
    }

    pub(crate) fn fail_load(&mut self, list: ListKind) {
        match list {
            ListKind::Candidates => {
                self.candidates.clear();
                self.candidates_status = LoadStatus::Failed;
            }
            ListKind::Jobs => {
                self.jobs.clear();
                self.jobs_status = LoadStatus::Failed;
            }
        }
        self.dirty = true;
    }

    pub(crate) fn set_profession(&mut self, profession: String) {
        if self.filter.profession != profession {
            self.filter.profession = profession;
            self.dirty = true;
        }
    }

    pub(crate) fn set_search(&mut self, search: String) {
        if self.filter.search != search {
            self.filter.search = search;
            self.dirty = true;
        }
    }

    pub(crate) fn set_sort(&mut self, sort: SortConfig) {
        self.sort = Some(sort);
        self.dirty = true;
    }

    /// Resets filter, search and sort together.
    pub(crate) fn clear_filters(&mut self) {
        if self.filter.is_empty() && self.sort.is_none() {
            return;
        }
        self.filter = FilterState::default();
        self.sort = None;
        self.dirty = true;
    }

    pub(crate) fn open_detail(&mut self, id: CandidateId) {
        self.detail = Some(id);
        self.dirty = true;
    }

    pub(crate) fn close_detail(&mut self) {
        if self.detail.take().is_some() {
            self.dirty = true;
        }
    }
}
