use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of physical event a notification reports.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    #[default]
    Mail,
    Dryer,
}

impl EventType {
    /// Notification title used when the caller supplies none.
    pub fn default_title(&self) -> &'static str {
        match self {
            EventType::Mail => "📬 You've got mail!",
            EventType::Dryer => "Dryer Notifier",
        }
    }

    /// Notification body used when the caller supplies none.
    pub fn default_body(&self, event: Option<DryerEvent>) -> &'static str {
        match self {
            EventType::Mail => "Mail was just detected in your mailbox.",
            EventType::Dryer => match event {
                Some(DryerEvent::Started) => "Your dryer is on — phone is listening.",
                _ => "Your clothes are done. Dryer has stopped.",
            },
        }
    }
}

impl From<String> for EventType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "dryer" => EventType::Dryer,
            _ => EventType::Mail,
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EventType::Mail => write!(f, "mail"),
            EventType::Dryer => write!(f, "dryer"),
        }
    }
}

/// Phase marker for sustained-activity events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DryerEvent {
    Started,
    Finished,
}

impl From<String> for DryerEvent {
    fn from(value: String) -> Self {
        match value.as_str() {
            "started" => DryerEvent::Started,
            _ => DryerEvent::Finished,
        }
    }
}

impl fmt::Display for DryerEvent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DryerEvent::Started => write!(f, "started"),
            DryerEvent::Finished => write!(f, "finished"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_type_round_trips_lowercase() {
        assert_eq!(serde_json::to_string(&EventType::Dryer).unwrap(), "\"dryer\"");
        assert_eq!(
            serde_json::from_str::<EventType>("\"mail\"").unwrap(),
            EventType::Mail
        );
    }

    #[test]
    fn dryer_defaults_depend_on_event_phase() {
        let dryer = EventType::Dryer;
        assert!(dryer.default_body(Some(DryerEvent::Started)).contains("listening"));
        assert!(dryer.default_body(Some(DryerEvent::Finished)).contains("stopped"));
        // No phase reads as a completed cycle.
        assert!(dryer.default_body(None).contains("stopped"));
    }
}
