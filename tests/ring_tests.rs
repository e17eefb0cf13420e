//! Integration tests for LightRing

mod common;
use common::*;

use hydration_lights::colors::{self, Hsv};
use hydration_lights::{Rgb, RingError};

#[test]
fn update_flushes_only_when_dirty() {
    let mut ring = ring::<8>();

    ring.update();
    assert_eq!(ring.strip().flush_count(), 1);

    ring.update();
    ring.update();
    assert_eq!(ring.strip().flush_count(), 1);

    ring.fill_color(colors::GREEN);
    ring.update();
    ring.update();
    assert_eq!(ring.strip().flush_count(), 2);
}

#[test]
fn fill_color_applies_brightness_once() {
    let mut ring = ring::<8>();
    ring.set_brightness(100);
    ring.fill_color(colors::LIME);

    let expected = adjusted(colors::LIME, 100);
    assert!(ring.leds().iter().all(|&led| led == expected));
    assert!(ring.is_dirty());

    ring.update();
    assert_eq!(ring.strip().last_frame(), Some(&[expected; 8][..]));
}

#[test]
fn fill_color_accepts_rgb() {
    let mut ring = ring::<4>();
    ring.set_brightness(128);
    ring.fill_color(Rgb::new(255, 0, 0));

    assert_eq!(ring.led(0), Some(adjusted(colors::RED, 128)));
    assert_eq!(ring.led(0), Some(Rgb::new(128, 0, 0)));
}

#[test]
fn set_led_writes_single_slot() {
    let mut ring = ring::<4>();
    ring.update();

    ring.set_led(2, colors::BLUE).unwrap();
    assert!(ring.is_dirty());
    assert_eq!(ring.led(2), Some(adjusted(colors::BLUE, 255)));
    assert_eq!(lit_count(&ring), 1);
}

#[test]
fn set_led_out_of_range_is_rejected() {
    let mut ring = ring::<4>();

    assert_eq!(
        ring.set_led(7, colors::WHITE),
        Err(RingError::IndexOutOfRange { index: 7, len: 4 })
    );
    assert_eq!(lit_count(&ring), 0);
}

#[test]
fn brightness_change_waits_for_next_write() {
    let mut ring = ring::<3>();
    ring.fill_color(colors::WHITE);
    ring.update();

    ring.set_brightness(10);
    ring.update();
    assert_eq!(ring.strip().flush_count(), 1);
    assert_eq!(ring.led(0), Some(Rgb::new(255, 255, 255)));

    ring.set_led(0, colors::WHITE).unwrap();
    assert_eq!(ring.led(0), Some(Rgb::new(10, 10, 10)));
    assert_eq!(ring.led(1), Some(Rgb::new(255, 255, 255)));
}

#[test]
fn clear_bypasses_buffered_flush() {
    let mut ring = ring::<5>();
    ring.fill_color(Hsv::new(40, 255, 255));

    ring.clear();
    assert_eq!(ring.strip().clear_count(), 1);
    assert_eq!(lit_count(&ring), 0);

    ring.update();
    assert_eq!(ring.strip().flush_count(), 0);
}

#[test]
fn num_leds_is_compile_time_count() {
    let ring = ring::<42>();
    assert_eq!(ring.num_leds(), 42);
    assert_eq!(ring.leds().len(), 42);
}
