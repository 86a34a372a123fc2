use std::sync::mpsc;

use jobsee_core::{Effect, ErrorInfo, Msg};
use jobsee_engine::{EngineEvent, EngineHandle, EventSink, ShareSheet};
use jobsee_logging::{jobsee_info, jobsee_warn};

use super::input::AppEvent;

/// Forwards engine completions into the event loop as core messages.
pub struct MsgSink {
    tx: mpsc::Sender<AppEvent>,
}

impl MsgSink {
    pub fn new(tx: mpsc::Sender<AppEvent>) -> Self {
        Self { tx }
    }
}

impl EventSink for MsgSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.tx.send(AppEvent::Core(map_event(event)));
    }
}

pub fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::FetchCompleted { request, result } => Msg::FetchCompleted {
            request_id: request.request_id,
            descriptor: request.descriptor,
            result: result.map_err(|err| ErrorInfo::from(&err)),
        },
    }
}

pub struct EffectRunner {
    engine: EngineHandle,
    share_sheet: Box<dyn ShareSheet>,
    msg_tx: mpsc::Sender<AppEvent>,
}

impl EffectRunner {
    pub fn new(
        engine: EngineHandle,
        share_sheet: Box<dyn ShareSheet>,
        msg_tx: mpsc::Sender<AppEvent>,
    ) -> Self {
        Self {
            engine,
            share_sheet,
            msg_tx,
        }
    }

    pub fn run(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Fetch(request) => {
                    jobsee_info!(
                        "Fetch request_id={} descriptor={}",
                        request.request_id,
                        request.descriptor
                    );
                    self.engine.fetch(request);
                }
                Effect::Share(payload) => {
                    if let Err(err) = self.share_sheet.share(&payload) {
                        jobsee_warn!("Error occurred while sharing job link: {}", err);
                        let _ = self
                            .msg_tx
                            .send(AppEvent::Core(Msg::ShareFailed(err.to_string())));
                    }
                }
            }
        }
    }
}
