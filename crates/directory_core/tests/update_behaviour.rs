use std::sync::Once;

use directory_core::{
    update, AppState, Candidate, CandidateId, Msg, Profile, Skill, SortConfig,
    SortDirection, SortKey,
};
use pretty_assertions::assert_eq;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(engine_logging::initialize_for_tests);
}

fn candidate(id: i64, name: &str, profession: &str, skills: &[&str]) -> Candidate {
    Candidate::new(
        id,
        Profile::new(name, profession),
        skills.iter().map(|s| Skill::new(*s)).collect(),
    )
}

fn loaded_state() -> AppState {
    let (state, _) = update(AppState::new(), Msg::Activated);
    let (mut state, _) = update(
        state,
        Msg::CandidatesLoaded(vec![
            candidate(1, "Bob", "Engineer", &["Go"]),
            candidate(2, "Ann", "Engineer", &["Rust"]),
            candidate(3, "Cid", "Designer", &["Figma"]),
        ]),
    );
    state.consume_dirty();
    state
}

fn row_ids(state: &AppState) -> Vec<CandidateId> {
    state.view().rows.into_iter().map(|row| row.id).collect()
}

fn num(id: i64) -> CandidateId {
    CandidateId::Number(id)
}

#[test]
fn sort_twice_toggles_to_descending() {
    init_logging();
    let state = loaded_state();

    let (state, effects) = update(state, Msg::SortRequested(SortKey::FullName));
    assert!(effects.is_empty());
    assert_eq!(state.sort(), Some(SortConfig::ascending(SortKey::FullName)));
    assert_eq!(row_ids(&state), vec![num(2), num(1), num(3)]);

    let (state, _) = update(state, Msg::SortRequested(SortKey::FullName));
    assert_eq!(
        state.sort(),
        Some(SortConfig {
            key: SortKey::FullName,
            direction: SortDirection::Descending,
        })
    );
    assert_eq!(row_ids(&state), vec![num(3), num(1), num(2)]);

    let (state, _) = update(state, Msg::SortRequested(SortKey::FullName));
    assert_eq!(state.sort(), Some(SortConfig::ascending(SortKey::FullName)));
}

#[test]
fn sorting_a_different_key_resets_to_ascending() {
    init_logging();
    let state = loaded_state();
    let (state, _) = update(state, Msg::SortRequested(SortKey::FullName));
    let (state, _) = update(state, Msg::SortRequested(SortKey::FullName));
    let (state, _) = update(state, Msg::SortRequested(SortKey::Skills));

    assert_eq!(state.sort(), Some(SortConfig::ascending(SortKey::Skills)));
    assert_eq!(row_ids(&state), vec![num(3), num(1), num(2)]);
}

#[test]
fn clear_resets_everything_at_once() {
    init_logging();
    let state = loaded_state();
    let (state, _) = update(state, Msg::ProfessionSelected("Engineer".to_string()));
    let (state, _) = update(state, Msg::SearchChanged("an".to_string()));
    let (mut state, _) = update(state, Msg::SortRequested(SortKey::Skills));
    assert_eq!(row_ids(&state), vec![num(2)]);
    assert!(state.consume_dirty());

    let (mut state, effects) = update(state, Msg::ClearClicked);
    let view = state.view();

    assert!(effects.is_empty());
    assert_eq!(view.profession_filter, "");
    assert_eq!(view.search_query, "");
    assert_eq!(view.sort, None);
    assert_eq!(row_ids(&state), vec![num(1), num(2), num(3)]);
    assert!(state.consume_dirty());
}

#[test]
fn clear_when_already_clear_is_noop() {
    init_logging();
    let state = loaded_state();
    let before = state.view();

    let (mut next, effects) = update(state, Msg::ClearClicked);

    assert!(effects.is_empty());
    assert_eq!(next.view(), before);
    assert!(!next.consume_dirty());
}

#[test]
fn unchanged_search_does_not_mark_dirty() {
    init_logging();
    let state = loaded_state();
    let (mut state, _) = update(state, Msg::SearchChanged("go".to_string()));
    assert!(state.consume_dirty());

    let (mut state, _) = update(state, Msg::SearchChanged("go".to_string()));
    assert!(!state.consume_dirty());
    assert_eq!(row_ids(&state), vec![num(1)]);
}

#[test]
fn view_clicked_opens_detail() {
    init_logging();
    let state = loaded_state();

    let (mut state, effects) = update(state, Msg::ViewClicked(num(2)));

    assert!(effects.is_empty());
    let detail = state.view().detail.expect("detail open");
    assert_eq!(detail.title, "Ann");
    assert_eq!(detail.path, "/candidate/2");
    assert!(state.consume_dirty());

    let (mut state, effects) = update(state, Msg::DetailClosed);
    assert!(effects.is_empty());
    assert!(state.view().detail.is_none());
    assert!(state.consume_dirty());
}

#[test]
fn view_clicked_for_unknown_id_is_ignored() {
    init_logging();
    let state = loaded_state();

    let (mut state, effects) = update(state, Msg::ViewClicked(CandidateId::from("ghost")));

    assert!(effects.is_empty());
    assert!(state.view().detail.is_none());
    assert!(!state.consume_dirty());
}

#[test]
fn view_model_formats_rows() {
    init_logging();
    let state = loaded_state();
    let (state, _) = update(
        state,
        Msg::CandidatesLoaded(vec![candidate(7, "Ola", "Engineer", &["React", "Go"])]),
    );

    let view = state.view();
    assert_eq!(view.total_count, 1);
    assert_eq!(view.shown_count, 1);
    assert_eq!(view.rows[0].full_name, "Ola");
    assert_eq!(view.rows[0].primary_profession, "Engineer");
    assert_eq!(view.rows[0].skills, "React, Go");
}
