use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use directory_core::{Effect, ListKind, Msg};
use directory_engine::{EngineError, EngineEvent, EngineHandle, FetchSettings};
use engine_logging::{engine_debug, engine_warn};

use super::app::AppEvent;

pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(settings: FetchSettings, event_tx: mpsc::Sender<AppEvent>) -> Result<Self, EngineError> {
        let engine = EngineHandle::new(settings)?;
        let runner = Self { engine };
        runner.spawn_event_loop(event_tx);
        Ok(runner)
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::LoadCandidates => {
                    engine_debug!("LoadCandidates");
                    self.engine.load_candidates();
                }
                Effect::LoadJobs => {
                    engine_debug!("LoadJobs");
                    self.engine.load_jobs();
                }
            }
        }
    }

    fn spawn_event_loop(&self, event_tx: mpsc::Sender<AppEvent>) {
        let engine = self.engine.clone();
        thread::spawn(move || loop {
            let Some(event) = engine.recv_timeout(Duration::from_millis(100)) else {
                continue;
            };
            if event_tx.send(AppEvent::Engine(map_event(event))).is_err() {
                break;
            }
        });
    }
}

/// Failed loads become [`Msg::LoadFailed`]; the table shows the list as empty.
fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::CandidatesLoaded(Ok(candidates)) => Msg::CandidatesLoaded(candidates),
        EngineEvent::CandidatesLoaded(Err(err)) => {
            engine_warn!("Candidate list failed to load: {}", err);
            Msg::LoadFailed {
                list: ListKind::Candidates,
            }
        }
        EngineEvent::JobsLoaded(Ok(jobs)) => Msg::JobsLoaded(jobs),
        EngineEvent::JobsLoaded(Err(err)) => {
            engine_warn!("Job titles failed to load: {}", err);
            Msg::LoadFailed {
                list: ListKind::Jobs,
            }
        }
    }
}
