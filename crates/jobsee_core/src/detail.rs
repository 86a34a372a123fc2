use std::fmt;
use std::str::FromStr;

use crate::record::{QUALIFICATIONS, RESPONSIBILITIES};
use crate::JobDetail;

/// Content tab of the detail screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    About,
    Qualifications,
    Responsibilities,
}

impl Tab {
    /// Display order of the tab strip.
    pub const ALL: [Tab; 3] = [Tab::About, Tab::Qualifications, Tab::Responsibilities];

    pub fn label(self) -> &'static str {
        match self {
            Tab::About => "About",
            Tab::Qualifications => QUALIFICATIONS,
            Tab::Responsibilities => RESPONSIBILITIES,
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTab(pub String);

impl fmt::Display for UnknownTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown tab '{}'", self.0)
    }
}

impl std::error::Error for UnknownTab {}

impl FromStr for Tab {
    type Err = UnknownTab;

    /// Case-insensitive label, or any unambiguous prefix of one.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let wanted = raw.trim().to_ascii_lowercase();
        if wanted.is_empty() {
            return Err(UnknownTab(raw.to_string()));
        }
        let mut matches = Tab::ALL
            .into_iter()
            .filter(|tab| tab.label().to_ascii_lowercase().starts_with(&wanted));
        match (matches.next(), matches.next()) {
            (Some(tab), None) => Ok(tab),
            _ => Err(UnknownTab(raw.to_string())),
        }
    }
}

/// What the body of the detail screen shows for one tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabContent {
    About { info: String },
    Points { title: String, points: Vec<String> },
}

/// Selects the slice of `detail` shown under `tab`. Depends only on its
/// arguments, so re-selecting a tab renders exactly what it rendered before.
pub fn render_for(tab: Tab, detail: &JobDetail) -> TabContent {
    match tab {
        Tab::About => TabContent::About {
            info: detail.description.clone(),
        },
        Tab::Qualifications => TabContent::Points {
            title: tab.label().to_string(),
            points: detail.qualifications.clone(),
        },
        Tab::Responsibilities => TabContent::Points {
            title: tab.label().to_string(),
            points: detail.responsibilities.clone(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_labels_and_prefixes() {
        assert_eq!("about".parse::<Tab>(), Ok(Tab::About));
        assert_eq!("Qual".parse::<Tab>(), Ok(Tab::Qualifications));
        assert_eq!(" r ".parse::<Tab>(), Ok(Tab::Responsibilities));
        assert!("".parse::<Tab>().is_err());
        assert!("benefits".parse::<Tab>().is_err());
    }

    #[test]
    fn default_tab_is_first() {
        assert_eq!(Tab::default(), Tab::ALL[0]);
    }
}
