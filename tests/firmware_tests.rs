//! Integration tests for the device loop

mod common;
use common::*;

use hydration_lights::colors;
use hydration_lights::command::{TOPIC_BRIGHTNESS, TOPIC_PATTERN, TOPIC_TARE, TOPIC_WEIGHT};
use hydration_lights::config::{BOOT_BRIGHTNESS, FRAME_PERIOD_MS, REPORT_PERIOD_MS, SAMPLE_PERIOD_MS};
use hydration_lights::{
    CommandError, Firmware, FirmwareError, LightPattern, ManagerError, PatternId,
};

type TestFirmware<'t> =
    Firmware<'t, TestInstant, MockStrip, MockLoadCell, MockPublisher, MockTimeSource, 12>;

fn boot(cell: MockLoadCell, clock: &MockTimeSource) -> TestFirmware<'_> {
    Firmware::boot(MockStrip::new(), cell, MockPublisher::new(), clock)
}

fn pulse_frame(device: &TestFirmware<'_>) -> usize {
    match device.manager().pattern(PatternId::PulseWhite) {
        LightPattern::Pulse(pulse) => pulse.frame(),
        other => panic!("unexpected pattern {:?}", other),
    }
}

#[test]
fn boot_tares_then_starts_pulse() {
    let clock = MockTimeSource::new();
    let device = boot(MockLoadCell::resting_at(1_500), &clock);

    assert_eq!(device.scale().offset(), 1_500);
    assert_eq!(device.scale().cell().reads(), 10);
    assert_eq!(device.manager().ring().brightness(), BOOT_BRIGHTNESS);
    assert_eq!(device.manager().active_pattern(), Some(PatternId::PulseWhite));
    assert!(device.publisher().messages().is_empty());
}

#[test]
fn poll_runs_each_job_on_its_own_period() {
    let clock = MockTimeSource::new();
    let mut device = boot(MockLoadCell::resting_at(0), &clock);

    device.poll().unwrap();
    assert_eq!(pulse_frame(&device), 1);
    assert_eq!(device.scale().cell().reads(), 11);
    assert_eq!(device.publisher().messages().len(), 1);

    clock.advance(FRAME_PERIOD_MS - 1);
    device.poll().unwrap();
    assert_eq!(pulse_frame(&device), 1);

    clock.advance(1);
    device.poll().unwrap();
    assert_eq!(pulse_frame(&device), 2);

    while clock.now_millis() < REPORT_PERIOD_MS {
        clock.advance(FRAME_PERIOD_MS);
        device.poll().unwrap();
    }

    let elapsed = REPORT_PERIOD_MS as usize;
    assert_eq!(pulse_frame(&device), elapsed / FRAME_PERIOD_MS as usize + 1);
    assert_eq!(
        device.scale().cell().reads(),
        10 + elapsed / SAMPLE_PERIOD_MS as usize + 1
    );
    assert_eq!(device.publisher().messages().len(), 2);
}

#[test]
fn weight_is_published_on_weight_topic() {
    let clock = MockTimeSource::new();
    let mut device = boot(MockLoadCell::resting_at(1_000), &clock);

    device.poll().unwrap();
    assert_eq!(
        device.publisher().messages(),
        &[(TOPIC_WEIGHT.to_string(), "0.00".to_string())]
    );

    // About 100 g on top of the tare load
    device.scale_mut().cell_mut().set_resting(1_000 + 48_409);
    device.scale_mut().tare();
    device.scale_mut().cell_mut().set_resting(1_000 + 2 * 48_409);
    for _ in 0..5 {
        clock.advance(SAMPLE_PERIOD_MS);
        device.poll().unwrap();
    }

    let (topic, payload) = device.publisher().messages().last().unwrap();
    assert_eq!(topic, TOPIC_WEIGHT);
    assert_eq!(payload, "100.00");
}

#[test]
fn loaded_tare_shows_error_until_cleared() {
    let clock = MockTimeSource::new();
    let mut device = boot(MockLoadCell::resting_at(800_000), &clock);
    assert!(device.scale().is_offset_too_great());

    device.poll().unwrap();
    assert_eq!(device.manager().active_pattern(), Some(PatternId::SolidRed));
    assert_eq!(
        device.manager().ring().led(0),
        Some(adjusted(colors::RED, BOOT_BRIGHTNESS))
    );
    assert!(device.scale().is_offset_too_great());

    device.scale_mut().cell_mut().set_resting(2_000);
    device.poll().unwrap();
    assert_eq!(device.scale().offset(), 2_000);
    assert!(!device.scale().is_offset_too_great());

    let reads = device.scale().cell().reads();
    clock.advance(FRAME_PERIOD_MS);
    device.poll().unwrap();
    assert_eq!(device.scale().cell().reads(), reads);
}

#[test]
fn network_link_switches_status_pattern() {
    let clock = MockTimeSource::new();
    let mut device = boot(MockLoadCell::resting_at(0), &clock);

    device.on_network_up();
    assert_eq!(device.manager().active_pattern(), Some(PatternId::SolidWhite));

    device.on_network_down();
    assert_eq!(device.manager().active_pattern(), Some(PatternId::PulseWhite));
    assert_eq!(pulse_frame(&device), 0);
}

#[test]
fn messages_drive_lights() {
    let clock = MockTimeSource::new();
    let mut device = boot(MockLoadCell::resting_at(0), &clock);

    device.handle_message(TOPIC_BRIGHTNESS, b"255").unwrap();
    device.handle_message(TOPIC_PATTERN, b"3").unwrap();

    assert_eq!(device.manager().active_pattern(), Some(PatternId::SolidGreen));
    assert_eq!(
        device.manager().ring().led(0),
        Some(adjusted(colors::GREEN, 255))
    );
}

#[test]
fn rejected_messages_change_nothing() {
    let clock = MockTimeSource::new();
    let mut device = boot(MockLoadCell::resting_at(0), &clock);

    assert_eq!(
        device.handle_message(TOPIC_PATTERN, b"40"),
        Err(FirmwareError::Manager(ManagerError::UnknownPattern(40)))
    );
    assert_eq!(
        device.handle_message(TOPIC_BRIGHTNESS, b"lots"),
        Err(FirmwareError::Command(CommandError::InvalidPayload))
    );
    assert_eq!(
        device.handle_message("hydration-helper/reboot", b""),
        Err(FirmwareError::Command(CommandError::UnknownTopic))
    );

    assert_eq!(device.manager().active_pattern(), Some(PatternId::PulseWhite));
    assert_eq!(device.manager().ring().brightness(), BOOT_BRIGHTNESS);
}

#[test]
fn tare_message_rezeroes_scale() {
    let clock = MockTimeSource::new();
    let mut device = boot(MockLoadCell::resting_at(100), &clock);
    device.poll().unwrap();
    assert_eq!(device.scale().sample_count(), 1);

    device.scale_mut().cell_mut().set_resting(5_000);
    device.handle_message(TOPIC_TARE, b"").unwrap();

    assert_eq!(device.scale().offset(), 5_000);
    assert_eq!(device.scale().sample_count(), 0);
}
