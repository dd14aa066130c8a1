use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Success,
    Error,
    #[default]
    Info,
}

impl Severity {
    pub fn icon_class(self) -> &'static str {
        match self {
            Severity::Success => "icon-check",
            Severity::Error => "icon-alert",
            Severity::Info => "icon-info",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Severity::Success => "#10b981",
            Severity::Error => "#ef4444",
            Severity::Info => "#3b82f6",
        }
    }
}

/// The single transient message region.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
    pub visible: bool,
}

impl Notification {
    /// Overwrites text and severity and makes the region visible. Hiding is
    /// left to whoever scheduled the show.
    pub fn show(&mut self, message: impl Into<String>, severity: Severity) {
        self.message = message.into();
        self.severity = severity;
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }
}
