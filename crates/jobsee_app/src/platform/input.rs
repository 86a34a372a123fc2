use jobsee_core::{Msg, Screen, Tab};

/// Everything the event loop reacts to.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    Core(Msg),
    Help,
    Unknown(String),
    Quit,
}

/// Maps one line typed at the prompt to an event. Blank lines map to nothing.
pub fn parse_command(line: &str) -> Option<AppEvent> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let event = match (word.to_ascii_lowercase().as_str(), rest) {
        ("quit" | "exit", _) => AppEvent::Quit,
        ("help" | "?", _) => AppEvent::Help,
        ("refresh" | "r", _) => AppEvent::Core(Msg::RefreshRequested),
        ("share" | "s", _) => AppEvent::Core(Msg::ShareRequested),
        ("ok" | "dismiss", _) => AppEvent::Core(Msg::AlertDismissed),
        ("search", query) if !query.is_empty() => AppEvent::Core(Msg::ScreenChanged(Screen::Search {
            query: query.to_string(),
            num_pages: 1,
        })),
        ("open", job_id) if !job_id.is_empty() => {
            AppEvent::Core(Msg::ScreenChanged(Screen::JobDetails {
                job_id: job_id.to_string(),
            }))
        }
        ("tab", name) => tab_event(name, line),
        (_, "") => tab_event(word, line),
        _ => AppEvent::Unknown(line.to_string()),
    };
    Some(event)
}

fn tab_event(name: &str, line: &str) -> AppEvent {
    match name.parse::<Tab>() {
        Ok(tab) => AppEvent::Core(Msg::TabSelected(tab)),
        Err(_) => AppEvent::Unknown(line.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_lines_are_ignored() {
        assert_eq!(parse_command("   "), None);
    }

    #[test]
    fn short_commands_win_over_tab_prefixes() {
        assert_eq!(
            parse_command("r"),
            Some(AppEvent::Core(Msg::RefreshRequested))
        );
        assert_eq!(
            parse_command("tab r"),
            Some(AppEvent::Core(Msg::TabSelected(Tab::Responsibilities)))
        );
    }

    #[test]
    fn bare_tab_names_select_tabs() {
        assert_eq!(
            parse_command("Qualifications"),
            Some(AppEvent::Core(Msg::TabSelected(Tab::Qualifications)))
        );
        assert_eq!(
            parse_command("about"),
            Some(AppEvent::Core(Msg::TabSelected(Tab::About)))
        );
    }

    #[test]
    fn search_and_open_change_screen() {
        assert_eq!(
            parse_command("search  React developer "),
            Some(AppEvent::Core(Msg::ScreenChanged(Screen::Search {
                query: "React developer".to_string(),
                num_pages: 1,
            })))
        );
        assert_eq!(
            parse_command("open abc123"),
            Some(AppEvent::Core(Msg::ScreenChanged(Screen::JobDetails {
                job_id: "abc123".to_string(),
            })))
        );
    }

    #[test]
    fn unknown_input_is_reported() {
        assert_eq!(
            parse_command("search"),
            Some(AppEvent::Unknown("search".to_string()))
        );
        assert_eq!(
            parse_command("apply now"),
            Some(AppEvent::Unknown("apply now".to_string()))
        );
        assert_eq!(parse_command("exit"), Some(AppEvent::Quit));
    }
}
