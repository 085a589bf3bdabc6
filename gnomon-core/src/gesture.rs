//! Swipe gesture classification
//!
//! Touch input on small screens doubles as a shortcut surface: a quick
//! single-finger flick across the widget is classified here into one of
//! four directions. The widget decides what each direction does.

use libm::sqrtf;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Swipe acceptance thresholds
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SwipeConfig {
    /// Minimum travel in pixels
    pub min_distance: f32,
    /// Maximum duration in milliseconds
    pub max_duration_ms: u32,
    /// Minimum speed in pixels per millisecond
    pub min_velocity: f32,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            min_distance: 50.0,
            max_duration_ms: 500,
            min_velocity: 0.1,
        }
    }
}

/// Dominant direction of a swipe (screen y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SwipeDirection {
    Up,
    Down,
    Left,
    Right,
}

/// An accepted swipe
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Swipe {
    pub direction: SwipeDirection,
    /// Straight-line travel in pixels
    pub distance: f32,
    /// Pixels per millisecond
    pub velocity: f32,
}

/// Classify a finished touch
///
/// Returns `None` when the travel is too short, the touch lasted too long,
/// or it moved too slowly. A zero duration counts as 1 ms.
pub fn classify_swipe(
    start: (f32, f32),
    end: (f32, f32),
    duration_ms: u32,
    config: &SwipeConfig,
) -> Option<Swipe> {
    let dx = end.0 - start.0;
    let dy = end.1 - start.1;
    let distance = sqrtf(dx * dx + dy * dy);
    let velocity = distance / duration_ms.max(1) as f32;

    if distance < config.min_distance
        || duration_ms > config.max_duration_ms
        || velocity < config.min_velocity
    {
        return None;
    }

    let horizontal = if dx < 0.0 { -dx } else { dx };
    let vertical = if dy < 0.0 { -dy } else { dy };
    let direction = if horizontal > vertical {
        if dx > 0.0 {
            SwipeDirection::Right
        } else {
            SwipeDirection::Left
        }
    } else if dy > 0.0 {
        SwipeDirection::Down
    } else {
        SwipeDirection::Up
    };

    Some(Swipe {
        direction,
        distance,
        velocity,
    })
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct TouchStart {
    x: f32,
    y: f32,
    at_ms: u64,
}

/// Tracks one touch sequence from start to end
#[derive(Debug, Clone, Default)]
pub struct SwipeTracker {
    config: SwipeConfig,
    start: Option<TouchStart>,
}

impl SwipeTracker {
    /// Create a tracker with the given thresholds
    pub fn new(config: SwipeConfig) -> Self {
        Self {
            config,
            start: None,
        }
    }

    /// Thresholds in use
    pub fn config(&self) -> &SwipeConfig {
        &self.config
    }

    /// Check if a touch sequence is being tracked
    pub fn is_tracking(&self) -> bool {
        self.start.is_some()
    }

    /// Touch went down; only single-finger touches are tracked
    pub fn touch_start(&mut self, x: f32, y: f32, at_ms: u64, touch_count: u8) {
        if touch_count != 1 {
            return;
        }
        self.start = Some(TouchStart { x, y, at_ms });
    }

    /// Touch lifted; returns the swipe if it qualifies
    pub fn touch_end(&mut self, x: f32, y: f32, at_ms: u64) -> Option<Swipe> {
        let start = self.start.take()?;
        let duration_ms = at_ms.saturating_sub(start.at_ms).min(u64::from(u32::MAX)) as u32;
        classify_swipe((start.x, start.y), (x, y), duration_ms, &self.config)
    }

    /// Touch sequence cancelled by the system
    pub fn touch_cancel(&mut self) {
        self.start = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directions() {
        let config = SwipeConfig::default();
        let cases = [
            ((100.0, 0.0), SwipeDirection::Right),
            ((-100.0, 0.0), SwipeDirection::Left),
            ((0.0, 100.0), SwipeDirection::Down),
            ((0.0, -100.0), SwipeDirection::Up),
            ((80.0, -60.0), SwipeDirection::Right),
            ((60.0, -80.0), SwipeDirection::Up),
        ];
        for (end, expected) in cases {
            let swipe = classify_swipe((0.0, 0.0), end, 200, &config).unwrap();
            assert_eq!(swipe.direction, expected);
        }
    }

    #[test]
    fn test_diagonal_tie_is_vertical() {
        let swipe = classify_swipe((0.0, 0.0), (60.0, 60.0), 100, &SwipeConfig::default()).unwrap();
        assert_eq!(swipe.direction, SwipeDirection::Down);
    }

    #[test]
    fn test_rejections() {
        let config = SwipeConfig::default();
        // Too short
        assert!(classify_swipe((0.0, 0.0), (30.0, 0.0), 100, &config).is_none());
        // Too long
        assert!(classify_swipe((0.0, 0.0), (300.0, 0.0), 600, &config).is_none());
        // Too slow: 60 px over 500 ms is 0.12 px/ms
        let slow = SwipeConfig {
            min_velocity: 0.2,
            ..config
        };
        assert!(classify_swipe((0.0, 0.0), (60.0, 0.0), 500, &slow).is_none());
    }

    #[test]
    fn test_distance_and_velocity() {
        // Exactly the minimum distance is accepted
        let swipe = classify_swipe((0.0, 0.0), (30.0, 40.0), 100, &SwipeConfig::default());
        assert_eq!(swipe.map(|s| s.direction), Some(SwipeDirection::Down));
        let swipe = classify_swipe((10.0, 10.0), (70.0, 90.0), 200, &SwipeConfig::default()).unwrap();
        assert_eq!(swipe.distance, 100.0);
        assert_eq!(swipe.velocity, 0.5);
    }

    #[test]
    fn test_tracker_flow() {
        let mut tracker = SwipeTracker::new(SwipeConfig::default());
        assert!(tracker.touch_end(0.0, 0.0, 0).is_none());

        tracker.touch_start(200.0, 100.0, 1_000, 1);
        assert!(tracker.is_tracking());
        let swipe = tracker.touch_end(100.0, 110.0, 1_200).unwrap();
        assert_eq!(swipe.direction, SwipeDirection::Left);
        assert!(!tracker.is_tracking());
    }

    #[test]
    fn test_tracker_ignores_multi_touch() {
        let mut tracker = SwipeTracker::default();
        tracker.touch_start(0.0, 0.0, 0, 2);
        assert!(!tracker.is_tracking());
    }

    #[test]
    fn test_tracker_cancel() {
        let mut tracker = SwipeTracker::default();
        tracker.touch_start(0.0, 0.0, 0, 1);
        tracker.touch_cancel();
        assert!(tracker.touch_end(0.0, 200.0, 100).is_none());
    }
}
