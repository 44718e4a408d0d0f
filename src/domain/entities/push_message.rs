//! Push message payload.

use std::collections::HashMap;

use serde::Deserialize;

/// Visible part of a push message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PushNotification {
    /// Optional title line.
    #[serde(default)]
    pub title: Option<String>,
    /// Optional body text.
    #[serde(default)]
    pub body: Option<String>,
    /// Optional icon reference.
    #[serde(default)]
    pub icon: Option<String>,
    /// Optional image reference.
    #[serde(default)]
    pub image: Option<String>,
}

/// A message received from the delivery mechanism.
///
/// Transient: consumed once by the presentation step, then discarded. No
/// other payload shape is recognized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PushMessage {
    /// Visible notification content, when present.
    #[serde(default)]
    pub notification: Option<PushNotification>,
    /// Free-form data payload.
    #[serde(default)]
    pub data: HashMap<String, String>,
}

impl PushMessage {
    /// Whether the message carries a notification body.
    #[must_use]
    pub fn has_notification_body(&self) -> bool {
        self.notification
            .as_ref()
            .is_some_and(|n| n.body.as_ref().is_some_and(|b| !b.is_empty()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_payload() {
        let raw = r#"{
            "notification": {"title": "Hello", "body": "World", "icon": "bell"},
            "data": {"kind": "daily"}
        }"#;
        let message: PushMessage = serde_json::from_str(raw).unwrap();

        assert!(message.has_notification_body());
        assert_eq!(message.notification.unwrap().title.as_deref(), Some("Hello"));
        assert_eq!(message.data.get("kind").map(String::as_str), Some("daily"));
    }

    #[test]
    fn test_data_only_payload_has_no_body() {
        let message: PushMessage = serde_json::from_str(r#"{"data": {"k": "v"}}"#).unwrap();
        assert!(!message.has_notification_body());
        assert!(message.notification.is_none());
    }
}
