//! Device main loop: boot order, periodic jobs and remote command dispatch.
//!
//! [`Firmware`] ties the pattern manager, the scale and the network publisher
//! together. Call [`Firmware::poll`] from the main loop as often as possible;
//! it decides from the time source which periodic jobs are due.

use crate::command::{self, Command, CommandError, TOPIC_WEIGHT};
use crate::config::{
    BOOT_BRIGHTNESS, BOOT_PATTERN, FRAME_PERIOD_MS, ONLINE_PATTERN, REPORT_PERIOD_MS,
    SAMPLE_PERIOD_MS, SCALE_COUNTS_PER_GRAM, SCALE_ERROR_PATTERN, SCALE_WINDOW,
};
use crate::manager::{ManagerError, PatternManager};
use crate::ring::{LedStrip, LightRing};
use crate::scale::{LoadCell, Scale};
use crate::time::{Interval, TimeInstant, TimeSource};

/// Trait for abstracting the network publisher.
pub trait Publisher {
    /// Publishes a payload on a topic. Delivery is best effort.
    fn publish(&mut self, topic: &str, payload: &str);
}

/// Errors that can occur while handling a remote message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FirmwareError {
    /// The message could not be parsed.
    Command(CommandError),
    /// The pattern manager rejected the command.
    Manager(ManagerError),
}

impl core::fmt::Display for FirmwareError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FirmwareError::Command(err) => write!(f, "command error: {}", err),
            FirmwareError::Manager(err) => write!(f, "pattern manager error: {}", err),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FirmwareError {}

impl From<CommandError> for FirmwareError {
    fn from(err: CommandError) -> Self {
        FirmwareError::Command(err)
    }
}

impl From<ManagerError> for FirmwareError {
    fn from(err: ManagerError) -> Self {
        FirmwareError::Manager(err)
    }
}

/// The device: LED ring, scale and publisher on one cooperative loop.
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `I` - Time instant type
/// * `S` - Physical strip implementation
/// * `C` - Load cell implementation
/// * `P` - Publisher implementation
/// * `T` - Time source implementation
/// * `N` - Number of LEDs on the ring
pub struct Firmware<'t, I, S, C, P, T, const N: usize>
where
    I: TimeInstant,
    S: LedStrip,
    C: LoadCell,
    P: Publisher,
    T: TimeSource<I>,
{
    manager: PatternManager<S, N>,
    scale: Scale<C, SCALE_WINDOW>,
    publisher: P,
    time_source: &'t T,
    sample_interval: Interval<I>,
    report_interval: Interval<I>,
    frame_interval: Interval<I>,
}

impl<'t, I, S, C, P, T, const N: usize> Firmware<'t, I, S, C, P, T, N>
where
    I: TimeInstant,
    S: LedStrip,
    C: LoadCell,
    P: Publisher,
    T: TimeSource<I>,
{
    /// Brings the device up: tares the scale, then starts the boot pattern
    /// at boot brightness.
    pub fn boot(strip: S, cell: C, publisher: P, time_source: &'t T) -> Self {
        let mut scale = Scale::new(cell, SCALE_COUNTS_PER_GRAM);
        scale.tare();

        let mut manager = PatternManager::new(LightRing::new(strip));
        manager.set_brightness(BOOT_BRIGHTNESS);
        manager.select(BOOT_PATTERN);

        #[cfg(feature = "defmt")]
        defmt::info!("booted");

        Self {
            manager,
            scale,
            publisher,
            time_source,
            sample_interval: Interval::from_millis(SAMPLE_PERIOD_MS),
            report_interval: Interval::from_millis(REPORT_PERIOD_MS),
            frame_interval: Interval::from_millis(FRAME_PERIOD_MS),
        }
    }

    /// Runs whatever periodic work is due.
    ///
    /// A scale tared under load switches to the error pattern and retries
    /// the tare on every poll until it succeeds.
    pub fn poll(&mut self) -> Result<(), ManagerError> {
        let now = self.time_source.now();

        if self.scale.is_offset_too_great() {
            #[cfg(feature = "defmt")]
            defmt::warn!("scale not empty when tared, retrying tare");
            self.manager.select(SCALE_ERROR_PATTERN);
            self.scale.tare();
        }

        if self.sample_interval.poll(now) {
            self.scale.take_sample();
        }

        if self.report_interval.poll(now) {
            let payload = command::format_weight(self.scale.current_weight());
            self.publisher.publish(TOPIC_WEIGHT, &payload);
        }

        if self.frame_interval.poll(now) {
            self.manager.advance_frame()?;
        }

        Ok(())
    }

    /// Parses and applies a remote message.
    ///
    /// # Errors
    /// * `Command` - Unknown topic or malformed payload; nothing changes
    /// * `Manager` - Unknown pattern number; the active pattern keeps running
    pub fn handle_message(&mut self, topic: &str, payload: &[u8]) -> Result<(), FirmwareError> {
        let command = Command::parse(topic, payload).inspect_err(|_err| {
            #[cfg(feature = "defmt")]
            defmt::warn!("rejected message: {}", _err);
        })?;

        self.handle_command(command)
    }

    /// Applies an already parsed command.
    pub fn handle_command(&mut self, command: Command) -> Result<(), FirmwareError> {
        match command {
            Command::Light(action) => self.manager.handle_action(action)?,
            Command::Tare => self.scale.tare(),
        }
        Ok(())
    }

    /// Signals that the network link came up.
    pub fn on_network_up(&mut self) {
        self.manager.select(ONLINE_PATTERN);
    }

    /// Signals that the network link was lost.
    pub fn on_network_down(&mut self) {
        self.manager.select(BOOT_PATTERN);
    }

    /// Returns a reference to the pattern manager.
    pub fn manager(&self) -> &PatternManager<S, N> {
        &self.manager
    }

    /// Returns a mutable reference to the pattern manager.
    pub fn manager_mut(&mut self) -> &mut PatternManager<S, N> {
        &mut self.manager
    }

    /// Returns a reference to the scale.
    pub fn scale(&self) -> &Scale<C, SCALE_WINDOW> {
        &self.scale
    }

    /// Returns a mutable reference to the scale.
    pub fn scale_mut(&mut self) -> &mut Scale<C, SCALE_WINDOW> {
        &mut self.scale
    }

    /// Returns a reference to the publisher.
    pub fn publisher(&self) -> &P {
        &self.publisher
    }
}
