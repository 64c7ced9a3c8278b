use std::sync::{mpsc, Arc, Mutex};
use std::thread;
use std::time::Duration;

use engine_logging::{engine_debug, engine_info};
use thiserror::Error;

use crate::fetch::{DirectorySource, FetchSettings, ReqwestSource};
use crate::{EngineEvent, FetchError};

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("failed to start async runtime: {0}")]
    Runtime(#[from] std::io::Error),
    #[error("failed to build http client: {0}")]
    Client(#[from] FetchError),
}

enum EngineCommand {
    LoadCandidates,
    LoadJobs,
}

/// Handle to the background loader. Loads run concurrently and report in
/// completion order; there is no cancellation.
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: Arc<Mutex<mpsc::Receiver<EngineEvent>>>,
}

impl EngineHandle {
    pub fn new(settings: FetchSettings) -> Result<Self, EngineError> {
        let source = ReqwestSource::new(settings)?;
        Self::with_source(Arc::new(source))
    }

    pub fn with_source(source: Arc<dyn DirectorySource>) -> Result<Self, EngineError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Runtime::new()?;

        thread::spawn(move || {
            while let Ok(command) = cmd_rx.recv() {
                let source = source.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(source.as_ref(), command, event_tx).await;
                });
            }
            engine_debug!("Engine command channel closed");
        });

        Ok(Self {
            cmd_tx,
            event_rx: Arc::new(Mutex::new(event_rx)),
        })
    }

    pub fn load_candidates(&self) {
        let _ = self.cmd_tx.send(EngineCommand::LoadCandidates);
    }

    pub fn load_jobs(&self) {
        let _ = self.cmd_tx.send(EngineCommand::LoadJobs);
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.lock().ok()?.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.lock().ok()?.recv_timeout(timeout).ok()
    }
}

async fn handle_command(
    source: &dyn DirectorySource,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    let event = match command {
        EngineCommand::LoadCandidates => {
            let result = source.fetch_candidates().await;
            if let Ok(candidates) = &result {
                engine_info!("Loaded {} candidates", candidates.len());
            }
            EngineEvent::CandidatesLoaded(result)
        }
        EngineCommand::LoadJobs => {
            let result = source.fetch_jobs().await;
            if let Ok(jobs) = &result {
                engine_info!("Loaded {} job titles", jobs.len());
            }
            EngineEvent::JobsLoaded(result)
        }
    };
    let _ = event_tx.send(event);
}
