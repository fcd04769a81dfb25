//! Theme value object with fixed light and dark variants.
//!
//! The theme is derived state: the boolean dark-mode flag held by
//! [`GlobalStore`](crate::app::GlobalStore) is the source of truth, and the
//! [`Theme`] handed to presentation is recomputed from it on every read.
//! There are exactly two variants; no partial or custom themes exist.

use serde::{Deserialize, Serialize};

/// Color scheme handed to presentation.
///
/// All colors are hex strings. Instances are always one of the two fixed
/// variants returned by [`Theme::light`] and [`Theme::dark`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    /// Screen background color.
    pub background: String,

    /// Card surface color.
    pub card_background: String,

    /// Primary text color.
    pub text: String,

    /// Dominant action color (buttons, links).
    pub dominant: String,

    /// Accent color for highlights.
    pub accent: String,
}

impl Theme {
    /// The light variant: light gray background, white cards, dark text.
    #[must_use]
    pub fn light() -> Self {
        Self {
            background: "#f7f7f7".to_string(),
            card_background: "#fff".to_string(),
            text: "#333".to_string(),
            dominant: "#007AFF".to_string(),
            accent: "#FFD700".to_string(),
        }
    }

    /// The dark variant: near-black background, slightly lighter cards, light text.
    #[must_use]
    pub fn dark() -> Self {
        Self {
            background: "#121212".to_string(),
            card_background: "#1c1c1c".to_string(),
            text: "#e0e0e0".to_string(),
            dominant: "#007AFF".to_string(),
            accent: "#FFD700".to_string(),
        }
    }

    /// Derives the variant for a dark-mode flag.
    ///
    /// # Examples
    ///
    /// ```
    /// use jobdeck::app::Theme;
    ///
    /// assert_eq!(Theme::for_mode(false), Theme::light());
    /// assert_eq!(Theme::for_mode(true), Theme::dark());
    /// ```
    #[must_use]
    pub fn for_mode(is_dark_mode: bool) -> Self {
        if is_dark_mode {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

impl Default for Theme {
    /// Returns the light variant, matching the startup default when no
    /// preference has been persisted.
    fn default() -> Self {
        Self::light()
    }
}
