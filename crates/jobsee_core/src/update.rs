use jobsee_logging::{jobsee_info, jobsee_warn};

use crate::{share_payload, AppState, Effect, Msg};

/// Shown when sharing is requested before a job has loaded.
pub const NOTHING_TO_SHARE: &str = "Job details are not loaded yet";

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::ScreenChanged(screen) => match state.change_screen(screen) {
            Some(request) => vec![Effect::Fetch(request)],
            None => Vec::new(),
        },
        Msg::RefreshRequested => vec![Effect::Fetch(state.refetch())],
        Msg::FetchCompleted {
            request_id,
            descriptor,
            result,
        } => {
            state.apply_fetch_result(request_id, &descriptor, result);
            Vec::new()
        }
        Msg::TabSelected(tab) => {
            state.select_tab(tab);
            Vec::new()
        }
        Msg::ShareRequested => match state.detail().map(share_payload) {
            Some(payload) => vec![Effect::Share(payload)],
            None => {
                jobsee_warn!("Share requested with no job loaded");
                state.show_alert(NOTHING_TO_SHARE);
                Vec::new()
            }
        },
        Msg::ShareFailed(message) => {
            jobsee_info!("Share failed: {}", message);
            state.show_alert(message);
            Vec::new()
        }
        Msg::AlertDismissed => {
            state.dismiss_alert();
            Vec::new()
        }
    };

    (state, effects)
}
