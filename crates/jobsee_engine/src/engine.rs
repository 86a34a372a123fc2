use std::sync::{mpsc, Arc};
use std::thread;

use jobsee_core::FetchRequest;
use jobsee_logging::{jobsee_debug, jobsee_warn};

use crate::client::{ApiSettings, ReqwestResourceClient, ResourceClient};
use crate::{EngineError, EngineEvent};

/// Receives engine events. Called from runtime worker threads.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: EngineEvent);
}

pub struct ChannelEventSink {
    tx: mpsc::Sender<EngineEvent>,
}

impl ChannelEventSink {
    pub fn new(tx: mpsc::Sender<EngineEvent>) -> Self {
        Self { tx }
    }
}

impl EventSink for ChannelEventSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.tx.send(event);
    }
}

enum EngineCommand {
    Fetch(FetchRequest),
}

/// Runs requests on a background tokio runtime.
///
/// Requests run concurrently and their completions are emitted in completion
/// order. Nothing is cancelled: deciding whether a result is still wanted is
/// left to the receiver. Dropping the handle stops the worker once the
/// command queue drains.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

impl EngineHandle {
    pub fn new(settings: ApiSettings, sink: Arc<dyn EventSink>) -> Result<Self, EngineError> {
        let client = ReqwestResourceClient::new(settings)?;
        Self::with_client(Arc::new(client), sink)
    }

    pub fn with_client(
        client: Arc<dyn ResourceClient>,
        sink: Arc<dyn EventSink>,
    ) -> Result<Self, EngineError> {
        let runtime = tokio::runtime::Runtime::new()?;
        let (cmd_tx, cmd_rx) = mpsc::channel();

        thread::spawn(move || {
            while let Ok(command) = cmd_rx.recv() {
                let client = client.clone();
                let sink = sink.clone();
                runtime.spawn(async move {
                    handle_command(client.as_ref(), command, sink.as_ref()).await;
                });
            }
            jobsee_debug!("Engine command channel closed");
        });

        Ok(Self { cmd_tx })
    }

    pub fn fetch(&self, request: FetchRequest) {
        if self.cmd_tx.send(EngineCommand::Fetch(request)).is_err() {
            jobsee_warn!("Engine worker is gone; request dropped");
        }
    }
}

async fn handle_command(client: &dyn ResourceClient, command: EngineCommand, sink: &dyn EventSink) {
    match command {
        EngineCommand::Fetch(request) => {
            let result = client.fetch(&request.descriptor).await;
            sink.emit(EngineEvent::FetchCompleted { request, result });
        }
    }
}
