//! Remote commands and the topics they arrive on.

use core::fmt::Write;
use heapless::String;

pub const TOPIC_BRIGHTNESS: &str = "hydration-helper/brightness";
pub const TOPIC_PATTERN: &str = "hydration-helper/pattern";
pub const TOPIC_TARE: &str = "hydration-helper/tare";
pub const TOPIC_WEIGHT: &str = "hydration-helper/weight";

/// Topics to subscribe to once connected.
pub const SUBSCRIPTIONS: [&str; 3] = [TOPIC_BRIGHTNESS, TOPIC_PATTERN, TOPIC_TARE];

/// Quality of service used for the subscriptions (exactly once).
pub const SUBSCRIBE_QOS: u8 = 2;

/// Actions handled by the pattern manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LightAction {
    /// Set global brightness.
    SetBrightness(u8),
    /// Select a pattern by wire number. Validated by the manager.
    SetPattern(u8),
}

/// A parsed remote command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// Ring command.
    Light(LightAction),
    /// Re-zero the scale.
    Tare,
}

/// Errors that can occur while parsing a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CommandError {
    /// Message arrived on a topic no command listens on.
    UnknownTopic,
    /// Payload is not a decimal number in 0..=255.
    InvalidPayload,
}

impl core::fmt::Display for CommandError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CommandError::UnknownTopic => write!(f, "unexpected topic"),
            CommandError::InvalidPayload => write!(f, "payload is not a number in 0..=255"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CommandError {}

impl Command {
    /// Parses a message into a command.
    ///
    /// Brightness and pattern payloads are ASCII decimal numbers; surrounding
    /// whitespace is ignored. Tare ignores its payload.
    pub fn parse(topic: &str, payload: &[u8]) -> Result<Self, CommandError> {
        match topic {
            TOPIC_BRIGHTNESS => Ok(Command::Light(LightAction::SetBrightness(parse_u8(payload)?))),
            TOPIC_PATTERN => Ok(Command::Light(LightAction::SetPattern(parse_u8(payload)?))),
            TOPIC_TARE => Ok(Command::Tare),
            _ => Err(CommandError::UnknownTopic),
        }
    }
}

fn parse_u8(payload: &[u8]) -> Result<u8, CommandError> {
    core::str::from_utf8(payload)
        .map_err(|_| CommandError::InvalidPayload)?
        .trim()
        .parse()
        .map_err(|_| CommandError::InvalidPayload)
}

/// Formats a weight for publishing, two decimals.
pub fn format_weight(grams: f32) -> String<16> {
    let mut payload = String::new();
    // 16 bytes hold any plausible reading; anything longer reports zero.
    if write!(payload, "{:.2}", grams).is_err() {
        payload.clear();
        let _ = payload.push_str("0.00");
    }
    payload
}
