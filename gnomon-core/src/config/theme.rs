//! Colour themes
//!
//! The renderer owns layout and styling; the engine only needs to know
//! which theme is selected and the hand colours it implies.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Selectable colour themes, in swipe order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ThemeKey {
    #[default]
    Warm,
    Cool,
    Nature,
    Elegant,
    Cute,
}

/// Hand and accent colours as CSS hex strings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Palette {
    pub hour_hand: &'static str,
    pub minute_hand: &'static str,
    pub second_hand: &'static str,
    pub accent: &'static str,
}

impl ThemeKey {
    /// All themes in swipe order
    pub const ALL: [ThemeKey; 5] = [
        ThemeKey::Warm,
        ThemeKey::Cool,
        ThemeKey::Nature,
        ThemeKey::Elegant,
        ThemeKey::Cute,
    ];

    fn index(self) -> usize {
        match self {
            ThemeKey::Warm => 0,
            ThemeKey::Cool => 1,
            ThemeKey::Nature => 2,
            ThemeKey::Elegant => 3,
            ThemeKey::Cute => 4,
        }
    }

    /// Following theme, wrapping after the last
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Preceding theme, wrapping before the first
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Lowercase key as used in configuration
    pub const fn name(&self) -> &'static str {
        match self {
            ThemeKey::Warm => "warm",
            ThemeKey::Cool => "cool",
            ThemeKey::Nature => "nature",
            ThemeKey::Elegant => "elegant",
            ThemeKey::Cute => "cute",
        }
    }

    /// Look a theme up by key
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|theme| theme.name() == name)
    }

    /// Hand colours
    pub const fn palette(&self) -> Palette {
        match self {
            ThemeKey::Warm => Palette {
                hour_hand: "#ef4444",
                minute_hand: "#3b82f6",
                second_hand: "#f59e0b",
                accent: "#f59e0b",
            },
            ThemeKey::Cool => Palette {
                hour_hand: "#0ea5e9",
                minute_hand: "#06b6d4",
                second_hand: "#0ea5e9",
                accent: "#0ea5e9",
            },
            ThemeKey::Nature => Palette {
                hour_hand: "#059669",
                minute_hand: "#10b981",
                second_hand: "#059669",
                accent: "#059669",
            },
            ThemeKey::Elegant => Palette {
                hour_hand: "#7c3aed",
                minute_hand: "#8b5cf6",
                second_hand: "#7c3aed",
                accent: "#7c3aed",
            },
            ThemeKey::Cute => Palette {
                hour_hand: "#ec4899",
                minute_hand: "#f472b6",
                second_hand: "#ec4899",
                accent: "#ec4899",
            },
        }
    }
}
