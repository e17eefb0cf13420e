//! Integration tests for remote command parsing

use hydration_lights::command::{
    self, SUBSCRIBE_QOS, SUBSCRIPTIONS, TOPIC_BRIGHTNESS, TOPIC_PATTERN, TOPIC_TARE, TOPIC_WEIGHT,
};
use hydration_lights::{Command, CommandError, LightAction};

#[test]
fn parses_brightness() {
    assert_eq!(
        Command::parse(TOPIC_BRIGHTNESS, b"200"),
        Ok(Command::Light(LightAction::SetBrightness(200)))
    );
    assert_eq!(
        Command::parse(TOPIC_BRIGHTNESS, b"0"),
        Ok(Command::Light(LightAction::SetBrightness(0)))
    );
}

#[test]
fn parses_pattern_with_surrounding_whitespace() {
    assert_eq!(
        Command::parse(TOPIC_PATTERN, b" 12\r\n"),
        Ok(Command::Light(LightAction::SetPattern(12)))
    );
}

#[test]
fn pattern_numbers_are_not_validated_here() {
    assert_eq!(
        Command::parse(TOPIC_PATTERN, b"77"),
        Ok(Command::Light(LightAction::SetPattern(77)))
    );
}

#[test]
fn tare_ignores_payload() {
    assert_eq!(Command::parse(TOPIC_TARE, b""), Ok(Command::Tare));
    assert_eq!(Command::parse(TOPIC_TARE, b"now please"), Ok(Command::Tare));
}

#[test]
fn rejects_bad_payloads() {
    let payloads: [&[u8]; 6] = [b"", b"256", b"-1", b"bright", b"1.5", &[0xff, 0xfe]];
    for payload in payloads {
        assert_eq!(
            Command::parse(TOPIC_BRIGHTNESS, payload),
            Err(CommandError::InvalidPayload),
            "payload {:?}",
            payload
        );
    }
}

#[test]
fn rejects_unknown_topics() {
    assert_eq!(
        Command::parse("hydration-helper/color", b"1"),
        Err(CommandError::UnknownTopic)
    );
    assert_eq!(Command::parse(TOPIC_WEIGHT, b"1"), Err(CommandError::UnknownTopic));
}

#[test]
fn subscription_list() {
    assert_eq!(SUBSCRIPTIONS, [TOPIC_BRIGHTNESS, TOPIC_PATTERN, TOPIC_TARE]);
    assert!(!SUBSCRIPTIONS.contains(&TOPIC_WEIGHT));
    assert_eq!(SUBSCRIBE_QOS, 2);
}

#[test]
fn weight_formatting() {
    assert_eq!(command::format_weight(0.0).as_str(), "0.00");
    assert_eq!(command::format_weight(250.0).as_str(), "250.00");
    assert_eq!(command::format_weight(1.004).as_str(), "1.00");
    assert_eq!(command::format_weight(1.0e20).as_str(), "0.00");
}

#[test]
fn errors_display() {
    assert_eq!(CommandError::UnknownTopic.to_string(), "unexpected topic");
    assert_eq!(
        CommandError::InvalidPayload.to_string(),
        "payload is not a number in 0..=255"
    );
}
