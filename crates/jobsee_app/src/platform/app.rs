use std::io::{self, BufRead, Write};
use std::sync::{mpsc, Arc};
use std::thread;

use jobsee_core::{update, AppState, Effect, FetchStatus, Msg, Screen, Tab};
use jobsee_engine::{EngineError, EngineHandle, ShareSheet, WriterShareSheet};
use jobsee_logging::{jobsee_debug, jobsee_info};
use thiserror::Error;

use super::config::AppConfig;
use super::effects::{EffectRunner, MsgSink};
use super::input::{parse_command, AppEvent};
use super::ui;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Engine(#[from] EngineError),
    #[error("failed to write to terminal: {0}")]
    Terminal(#[from] io::Error),
}

pub struct RunOptions {
    pub screen: Screen,
    pub initial_tab: Option<Tab>,
    pub interactive: bool,
}

/// Drives one screen until the user quits, or until its first result lands
/// when not interactive. Returns the final fetch status.
pub fn run_app(options: RunOptions, config: &AppConfig) -> Result<FetchStatus, AppError> {
    let (event_tx, event_rx) = mpsc::channel::<AppEvent>();

    let engine = EngineHandle::new(
        config.api_settings(),
        Arc::new(MsgSink::new(event_tx.clone())),
    )?;
    let share_sheet: Box<dyn ShareSheet> = match config.share_command() {
        Some(command) => Box::new(command),
        None => Box::new(WriterShareSheet::new(io::stdout())),
    };
    let runner = EffectRunner::new(engine, share_sheet, event_tx.clone());

    if options.interactive {
        spawn_input_reader(event_tx);
    }
    event_loop(options, runner, &event_rx, &mut io::stdout())
}

fn event_loop<W: Write>(
    options: RunOptions,
    mut runner: EffectRunner,
    events: &mpsc::Receiver<AppEvent>,
    out: &mut W,
) -> Result<FetchStatus, AppError> {
    let (mut state, request) = AppState::open(options.screen);
    if let Some(tab) = options.initial_tab {
        let (next, _) = update(state, Msg::TabSelected(tab));
        state = next;
    }
    runner.run(vec![Effect::Fetch(request)]);

    if options.interactive {
        writeln!(out, "{}", ui::constants::HELP_TEXT)?;
        state.consume_dirty();
        for line in ui::render::render(&state.view()) {
            writeln!(out, "{line}")?;
        }
        write!(out, "{}", ui::constants::PROMPT)?;
        out.flush()?;
    }

    while let Ok(event) = events.recv() {
        let msg = match event {
            AppEvent::Quit => break,
            AppEvent::Help => {
                writeln!(out, "{}", ui::constants::HELP_TEXT)?;
                continue;
            }
            AppEvent::Unknown(line) => {
                writeln!(out, "Unknown command '{line}'. Type 'help' for commands.")?;
                continue;
            }
            AppEvent::Core(msg) => msg,
        };

        let (next, effects) = update(state, msg);
        state = next;
        runner.run(effects);

        if state.consume_dirty() {
            let view = state.view();
            for line in ui::render::render(&view) {
                writeln!(out, "{line}")?;
            }
            if !options.interactive && view.is_settled() {
                break;
            }
            if options.interactive {
                write!(out, "{}", ui::constants::PROMPT)?;
            }
            out.flush()?;
        }
    }

    let status = state.fetch_state().status;
    jobsee_info!("Leaving {:?} with status {:?}", state.screen(), status);
    Ok(status)
}

fn spawn_input_reader(tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if let Some(event) = parse_command(&line) {
                if tx.send(event).is_err() {
                    return;
                }
            }
        }
        jobsee_debug!("stdin closed");
        let _ = tx.send(AppEvent::Quit);
    });
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use jobsee_core::{JobRecord, QueryDescriptor, ERROR_MESSAGE};
    use jobsee_engine::{ResourceClient, ResourceError};
    use pretty_assertions::assert_eq;

    use super::*;

    /// Answers every request with the same canned result.
    struct CannedClient(Result<Vec<JobRecord>, ResourceError>);

    #[async_trait::async_trait]
    impl ResourceClient for CannedClient {
        async fn fetch(&self, _: &QueryDescriptor) -> Result<Vec<JobRecord>, ResourceError> {
            self.0.clone()
        }
    }

    fn run_once(
        result: Result<Vec<JobRecord>, ResourceError>,
        options: RunOptions,
    ) -> (FetchStatus, String) {
        let (event_tx, event_rx) = mpsc::channel();
        let engine = EngineHandle::with_client(
            Arc::new(CannedClient(result)),
            Arc::new(MsgSink::new(event_tx.clone())),
        )
        .unwrap();
        let runner = EffectRunner::new(
            engine,
            Box::new(WriterShareSheet::new(Vec::new())),
            event_tx,
        );

        let mut out = Vec::new();
        let status = event_loop(options, runner, &event_rx, &mut out).unwrap();
        (status, String::from_utf8(out).unwrap())
    }

    fn details(tab: Option<Tab>) -> RunOptions {
        RunOptions {
            screen: Screen::JobDetails {
                job_id: "abc".to_string(),
            },
            initial_tab: tab,
            interactive: false,
        }
    }

    #[test]
    fn failed_fetch_settles_with_error_status() {
        let (status, out) = run_once(Err(ResourceError::Response { status: 500 }), details(None));

        assert_eq!(status, FetchStatus::Error);
        assert!(out.contains(ERROR_MESSAGE), "{out}");
    }

    #[test]
    fn initial_tab_is_shown_in_first_settled_render() {
        let mut highlights = BTreeMap::new();
        highlights.insert("Qualifications".to_string(), vec!["Rust".to_string()]);
        let record = JobRecord {
            job_title: Some("Systems Engineer".to_string()),
            job_highlights: Some(highlights),
            ..JobRecord::default()
        };

        let (status, out) = run_once(Ok(vec![record]), details(Some(Tab::Qualifications)));

        assert_eq!(status, FetchStatus::Success);
        assert!(out.contains("[Qualifications]"), "{out}");
        assert!(out.contains("  * Rust"), "{out}");
    }
}
