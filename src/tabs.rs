use serde::Serialize;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tab {
    #[default]
    Weekly,
    Monthly,
    History,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Weekly, Tab::Monthly, Tab::History];

    pub fn name(self) -> &'static str {
        match self {
            Tab::Weekly => "weekly",
            Tab::Monthly => "monthly",
            Tab::History => "history",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tab::Weekly => "Weekly Reports",
            Tab::Monthly => "Monthly Reports",
            Tab::History => "History",
        }
    }
}

impl FromStr for Tab {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Tab::ALL
            .into_iter()
            .find(|tab| tab.name() == value)
            .ok_or_else(|| format!("unknown tab '{value}'"))
    }
}

/// Which tab is selected. Exactly one is active at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TabState {
    active: Tab,
}

impl TabState {
    pub fn active(&self) -> Tab {
        self.active
    }

    pub fn is_active(&self, tab: Tab) -> bool {
        self.active == tab
    }

    /// Selects `tab`. Returns `false` without touching anything when it was
    /// already selected.
    pub fn switch(&mut self, tab: Tab) -> bool {
        if self.active == tab {
            return false;
        }
        self.active = tab;
        true
    }
}
