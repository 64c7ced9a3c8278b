use crate::{AppState, Effect, Msg, SortConfig};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Activated => {
            state.begin_loading();
            vec![Effect::LoadCandidates, Effect::LoadJobs]
        }
        Msg::CandidatesLoaded(candidates) => {
            state.set_candidates(candidates);
            Vec::new()
        }
        Msg::JobsLoaded(jobs) => {
            state.set_jobs(jobs);
            Vec::new()
        }
        Msg::LoadFailed { list } => {
            state.fail_load(list);
            Vec::new()
        }
        Msg::ProfessionSelected(profession) => {
            state.set_profession(profession);
            Vec::new()
        }
        Msg::SearchChanged(query) => {
            state.set_search(query);
            Vec::new()
        }
        Msg::SortRequested(key) => {
            let next = SortConfig::toggled(state.sort(), key);
            state.set_sort(next);
            Vec::new()
        }
        Msg::ClearClicked => {
            state.clear_filters();
            Vec::new()
        }
        Msg::ViewClicked(id) => {
            if state.find(&id).is_none() {
                return (state, Vec::new());
            }
            state.open_detail(id);
            Vec::new()
        }
        Msg::DetailClosed => {
            state.close_detail();
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
