//! Input events from the rendering layer
//!
//! Every pointer, touch, keyboard and control action the widget reacts to
//! arrives as one `InputEvent`. The headless binary produces them from
//! console commands; an embedding renderer would produce them from its
//! own event handlers.

use thiserror::Error;

use gnomon_core::angle::FaceGeometry;
use gnomon_core::config::{ClockFace, Language};
use gnomon_core::state::Hand;
use gnomon_core::text::{fill_edit_text, EditText};

/// Input event values
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    // Drag input
    /// Mouse or touch went down on a hand
    GrabHand(Hand),
    /// Mouse moved
    PointerMove { x: f32, y: f32 },
    /// Mouse button released
    PointerUp,

    // Touch input on the clock container
    /// Touch began; `touches` is the number of active touch points
    TouchStart { x: f32, y: f32, at_ms: u64, touches: u8 },
    /// Touch moved
    TouchMove { x: f32, y: f32 },
    /// Last touch lifted
    TouchEnd { x: f32, y: f32, at_ms: u64 },
    /// Touch sequence cancelled by the system
    TouchCancel,

    // Inline editor
    /// Readout clicked
    BeginEdit,
    /// Edit field contents changed
    EditText(EditText),
    /// Enter pressed or focus lost
    CommitEdit,
    /// Escape pressed
    CancelEdit,

    // Controls
    ToggleRunning,
    ToggleHourCycle,
    ToggleSeconds,
    NextTheme,
    PrevTheme,
    /// Face picked from the overlay
    SetClockFace(ClockFace),
    SetLanguage(Language),
    /// Back to the system time
    Reset,
    /// Clock face moved or resized
    Resize(FaceGeometry),
}

/// Console command errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command `{0}`")]
    Unknown(String),
    #[error("`{0}` needs {1}")]
    Argument(&'static str, &'static str),
}

/// Parse one console line into an input event
///
/// `at_ms` stamps touch start and end events.
///
/// ```text
/// grab hour|minute      move X Y       up
/// touch start X Y [N]   touch move X Y touch end X Y   touch cancel
/// edit   text HH:MM[:SS]   enter   escape
/// run    24h    seconds    theme next|prev    dial none|sun|sportsCar|..
/// lang ja|#lang=ja
/// reset  face LEFT TOP WIDTH HEIGHT
/// ```
pub fn parse_command(line: &str, at_ms: u64) -> Result<InputEvent, CommandError> {
    let mut words = line.split_whitespace();
    let command = words.next().ok_or(CommandError::Empty)?;

    let event = match command {
        "grab" => match words.next() {
            Some("hour") => InputEvent::GrabHand(Hand::Hour),
            Some("minute") => InputEvent::GrabHand(Hand::Minute),
            _ => return Err(CommandError::Argument("grab", "`hour` or `minute`")),
        },
        "move" => {
            let [x, y] = numbers::<2>(&mut words).ok_or(CommandError::Argument("move", "X Y"))?;
            InputEvent::PointerMove { x, y }
        }
        "up" => InputEvent::PointerUp,
        "touch" => parse_touch(&mut words, at_ms)?,
        "edit" => InputEvent::BeginEdit,
        "text" => {
            let mut text = EditText::new();
            fill_edit_text(&mut text, words.next().unwrap_or(""));
            InputEvent::EditText(text)
        }
        "enter" => InputEvent::CommitEdit,
        "escape" => InputEvent::CancelEdit,
        "run" => InputEvent::ToggleRunning,
        "24h" => InputEvent::ToggleHourCycle,
        "seconds" => InputEvent::ToggleSeconds,
        "theme" => match words.next() {
            Some("next") => InputEvent::NextTheme,
            Some("prev") => InputEvent::PrevTheme,
            _ => return Err(CommandError::Argument("theme", "`next` or `prev`")),
        },
        "dial" => {
            let face = words
                .next()
                .and_then(ClockFace::from_name)
                .ok_or(CommandError::Argument("dial", "a face key such as `sun` or `none`"))?;
            InputEvent::SetClockFace(face)
        }
        "lang" => {
            let language = words
                .next()
                .and_then(|arg| {
                    Language::from_code(arg).or_else(|| Language::from_hash_fragment(arg))
                })
                .ok_or(CommandError::Argument("lang", "`en`, `ja` or `#lang=..`"))?;
            InputEvent::SetLanguage(language)
        }
        "reset" => InputEvent::Reset,
        "face" => {
            let [left, top, width, height] = numbers::<4>(&mut words)
                .ok_or(CommandError::Argument("face", "LEFT TOP WIDTH HEIGHT"))?;
            InputEvent::Resize(FaceGeometry::from_rect(left, top, width, height))
        }
        other => return Err(CommandError::Unknown(other.to_string())),
    };
    Ok(event)
}

fn parse_touch<'a>(
    words: &mut impl Iterator<Item = &'a str>,
    at_ms: u64,
) -> Result<InputEvent, CommandError> {
    const USAGE: &str = "`start X Y [N]`, `move X Y`, `end X Y` or `cancel`";

    let event = match words.next() {
        Some("start") => {
            let [x, y] = numbers::<2>(words).ok_or(CommandError::Argument("touch", USAGE))?;
            let touches = match words.next() {
                Some(n) => n.parse().map_err(|_| CommandError::Argument("touch", USAGE))?,
                None => 1,
            };
            InputEvent::TouchStart {
                x,
                y,
                at_ms,
                touches,
            }
        }
        Some("move") => {
            let [x, y] = numbers::<2>(words).ok_or(CommandError::Argument("touch", USAGE))?;
            InputEvent::TouchMove { x, y }
        }
        Some("end") => {
            let [x, y] = numbers::<2>(words).ok_or(CommandError::Argument("touch", USAGE))?;
            InputEvent::TouchEnd { x, y, at_ms }
        }
        Some("cancel") => InputEvent::TouchCancel,
        _ => return Err(CommandError::Argument("touch", USAGE)),
    };
    Ok(event)
}

fn numbers<'a, const N: usize>(words: &mut impl Iterator<Item = &'a str>) -> Option<[f32; N]> {
    let mut values = [0.0; N];
    for value in values.iter_mut() {
        *value = words.next()?.parse().ok()?;
    }
    Some(values)
}
