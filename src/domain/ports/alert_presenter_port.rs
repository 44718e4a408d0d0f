//! Alert presentation port definition.

/// Port for the visible presentation of a notification.
///
/// Contract: exactly one visible presentation per received event, never
/// duplicated, never silently dropped. The rendering mechanism is a
/// collaborator concern.
pub trait AlertPresenterPort: Send + Sync {
    /// Shows the alert to the user.
    fn present(&self, title: &str, body: &str);
}
