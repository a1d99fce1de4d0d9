// SPDX-License-Identifier: MPL-2.0
//! Core toast data structures.
//!
//! This module defines the [`Toast`] record and the closed [`Kind`] and
//! [`Position`] enumerations used throughout the crate.

use crate::config::defaults::DEFAULT_DURATION_MS;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Unique identifier for a toast.
///
/// Ids are generated from a process-wide counter and are never reused.
/// The numeric value is opaque; use [`fmt::Display`] for a stable string form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastId(u64);

impl ToastId {
    /// Creates a new unique toast ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for ToastId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "toast-{}", self.0)
    }
}

/// Kind of a toast, determining its icon and colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Kind {
    /// Operation completed successfully (green).
    #[default]
    Success,
    /// Something went wrong (red).
    Error,
    /// Something needs attention but did not fail (orange).
    Warning,
    /// Neutral informational message (blue).
    Info,
}

/// Screen corner a toast group is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Position {
    TopRight,
    TopLeft,
    BottomRight,
    BottomLeft,
}

/// A toast to be displayed to the user.
///
/// Built with the kind constructors and chained setters:
///
/// ```
/// use iced_toast::Toast;
/// use std::time::Duration;
///
/// let toast = Toast::success("Saved")
///     .with_description("Changes written to disk")
///     .duration(Duration::from_secs(3));
/// ```
#[derive(Debug, Clone)]
pub struct Toast {
    id: ToastId,
    kind: Kind,
    title: String,
    description: Option<String>,
    /// Dwell time before auto-dismissal. `Duration::ZERO` disables it.
    duration: Duration,
    /// Requested corner; `None` defers to the manager's configured default.
    position: Option<Position>,
    closable: bool,
}

impl Toast {
    /// Creates a new toast with the given kind and title.
    pub fn new(kind: Kind, title: impl Into<String>) -> Self {
        Self {
            id: ToastId::new(),
            kind,
            title: title.into(),
            description: None,
            duration: Duration::from_millis(DEFAULT_DURATION_MS),
            position: None,
            closable: true,
        }
    }

    /// Creates a success toast.
    pub fn success(title: impl Into<String>) -> Self {
        Self::new(Kind::Success, title)
    }

    /// Creates an error toast.
    pub fn error(title: impl Into<String>) -> Self {
        Self::new(Kind::Error, title)
    }

    /// Creates a warning toast.
    pub fn warning(title: impl Into<String>) -> Self {
        Self::new(Kind::Warning, title)
    }

    /// Creates an info toast.
    pub fn info(title: impl Into<String>) -> Self {
        Self::new(Kind::Info, title)
    }

    /// Adds secondary text rendered below the title.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the dwell time before auto-dismissal.
    ///
    /// `Duration::ZERO` keeps the toast on screen until explicitly hidden;
    /// [`Toast::sticky`] reads better for that case.
    #[must_use]
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Disables auto-dismissal; the toast stays until explicitly hidden.
    #[must_use]
    pub fn sticky(mut self) -> Self {
        self.duration = Duration::ZERO;
        self
    }

    /// Pins the toast to a specific corner instead of the manager default.
    #[must_use]
    pub fn position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    /// Sets whether a dismiss button is rendered. Defaults to `true`.
    #[must_use]
    pub fn closable(mut self, closable: bool) -> Self {
        self.closable = closable;
        self
    }

    /// Returns the toast's unique ID.
    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    /// Returns the kind.
    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Returns the title text.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description text, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the dwell time. `Duration::ZERO` means no auto-dismissal.
    #[must_use]
    pub fn dwell(&self) -> Duration {
        self.duration
    }

    /// Returns the explicitly requested corner, if any.
    #[must_use]
    pub fn requested_position(&self) -> Option<Position> {
        self.position
    }

    /// Returns whether a dismiss button should be rendered.
    #[must_use]
    pub fn is_closable(&self) -> bool {
        self.closable
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_ids_are_unique() {
        let a = Toast::success("test");
        let b = Toast::success("test");
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn toast_id_display_is_stable() {
        let id = ToastId::new();
        assert_eq!(format!("{id}"), format!("{id}"));
        assert!(format!("{id}").starts_with("toast-"));
    }

    #[test]
    fn constructors_set_correct_kind() {
        assert_eq!(Toast::success("").kind(), Kind::Success);
        assert_eq!(Toast::error("").kind(), Kind::Error);
        assert_eq!(Toast::warning("").kind(), Kind::Warning);
        assert_eq!(Toast::info("").kind(), Kind::Info);
    }

    #[test]
    fn defaults_match_contract() {
        let toast = Toast::info("hello");
        assert_eq!(toast.dwell(), Duration::from_millis(DEFAULT_DURATION_MS));
        assert_eq!(toast.requested_position(), None);
        assert!(toast.is_closable());
        assert!(toast.description().is_none());
    }

    #[test]
    fn builder_pattern_works() {
        let toast = Toast::warning("Low disk space")
            .with_description("Less than 1 GB remaining")
            .duration(Duration::from_secs(8))
            .position(Position::TopLeft)
            .closable(false);

        assert_eq!(toast.title(), "Low disk space");
        assert_eq!(toast.description(), Some("Less than 1 GB remaining"));
        assert_eq!(toast.dwell(), Duration::from_secs(8));
        assert_eq!(toast.requested_position(), Some(Position::TopLeft));
        assert!(!toast.is_closable());
    }

    #[test]
    fn sticky_zeroes_the_dwell() {
        let toast = Toast::error("Upload failed").sticky();
        assert_eq!(toast.dwell(), Duration::ZERO);
    }

    #[derive(Debug, Serialize, Deserialize)]
    struct PositionDoc {
        position: Position,
    }

    #[test]
    fn position_serializes_as_kebab_case() {
        let doc = PositionDoc {
            position: Position::BottomRight,
        };
        let toml = toml::to_string(&doc).unwrap();
        assert!(toml.contains("bottom-right"));
    }

    #[test]
    fn position_rejects_unknown_values() {
        let result: Result<PositionDoc, _> = toml::from_str("position = \"center\"");
        assert!(result.is_err());
    }
}
