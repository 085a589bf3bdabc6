//! Configuration type definitions

use crate::engine::DisplayOptions;
use crate::gesture::SwipeConfig;
use crate::time::HourCycle;

use super::face::ClockFace;
use super::theme::ThemeKey;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// UI language for the renderer's strings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Language {
    #[default]
    En,
    Ja,
}

impl Language {
    /// Two-letter code
    pub const fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ja => "ja",
        }
    }

    /// Look a language up by its exact code
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Language::En),
            "ja" => Some(Language::Ja),
            _ => None,
        }
    }

    /// Read a `lang=` override from a URL fragment such as `#lang=ja`
    ///
    /// Parameters may be joined with `&`. Unknown codes are ignored.
    pub fn from_hash_fragment(fragment: &str) -> Option<Self> {
        fragment
            .trim_start_matches('#')
            .split('&')
            .filter_map(|pair| pair.strip_prefix("lang="))
            .find_map(Self::from_code)
    }

    /// Pick a language from a locale tag such as `ja-JP`
    pub fn from_locale(locale: &str) -> Self {
        if locale.starts_with("ja") {
            Language::Ja
        } else {
            Language::En
        }
    }

    /// Fragment override first, then locale, then English
    pub fn detect(fragment: Option<&str>, locale: Option<&str>) -> Self {
        fragment
            .and_then(Self::from_hash_fragment)
            .or_else(|| locale.map(Self::from_locale))
            .unwrap_or_default()
    }
}

/// Complete clock configuration
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ClockConfig {
    /// 12-hour or 24-hour readout
    pub hour_cycle: HourCycle,
    /// Include seconds in the readout
    pub show_seconds: bool,
    /// Follow the system time at mount
    pub running: bool,
    pub theme: ThemeKey,
    /// Face artwork behind the hands
    pub face: ClockFace,
    pub language: Language,
    pub swipe: SwipeConfig,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            hour_cycle: HourCycle::H12,
            show_seconds: true,
            running: true,
            theme: ThemeKey::Warm,
            face: ClockFace::None,
            language: Language::En,
            swipe: SwipeConfig::default(),
        }
    }
}

impl ClockConfig {
    /// Readout options for the engine
    pub fn display_options(&self) -> DisplayOptions {
        DisplayOptions::new(self.hour_cycle, self.show_seconds)
    }
}
