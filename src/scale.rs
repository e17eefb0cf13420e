//! Load cell sampling with a moving average window.

use crate::config::{MAX_TARE_OFFSET, OUTLIER_TOLERANCE_GRAMS, STABILITY_LIMIT_RAW, TARE_READINGS};
use heapless::Deque;

/// Trait for abstracting load cell amplifiers (HX711 and friends).
pub trait LoadCell {
    /// Returns true if a conversion is available without blocking.
    fn is_ready(&mut self) -> bool;

    /// Reads one raw conversion, waiting for it if necessary.
    fn read(&mut self) -> i32;
}

/// A load cell with tare offset, calibration and a moving average of the
/// last `W` samples.
///
/// # Type Parameters
/// * `C` - Load cell implementation
/// * `W` - Samples in the averaging window
pub struct Scale<C: LoadCell, const W: usize> {
    cell: C,
    offset: i32,
    counts_per_gram: f32,
    samples: Deque<i32, W>,
}

impl<C: LoadCell, const W: usize> Scale<C, W> {
    /// Creates an untared scale.
    pub fn new(cell: C, counts_per_gram: f32) -> Self {
        Self {
            cell,
            offset: 0,
            counts_per_gram,
            samples: Deque::new(),
        }
    }

    /// Makes the current load the zero point.
    ///
    /// Averages `TARE_READINGS` blocking reads. The sample window is
    /// discarded since it was measured against the old zero.
    pub fn tare(&mut self) {
        let total: i64 = (0..TARE_READINGS).map(|_| self.cell.read() as i64).sum();
        self.offset = (total / TARE_READINGS as i64) as i32;
        self.samples.clear();

        #[cfg(feature = "defmt")]
        defmt::info!("scale tared, offset {=i32}", self.offset);
    }

    /// Returns the raw reading treated as zero.
    pub fn offset(&self) -> i32 {
        self.offset
    }

    /// Returns true if the scale was tared under load.
    pub fn is_offset_too_great(&self) -> bool {
        self.offset > MAX_TARE_OFFSET
    }

    /// Takes a sample if the cell has one ready, evicting the oldest sample
    /// once the window is full.
    ///
    /// Returns whether a sample was taken.
    pub fn take_sample(&mut self) -> bool {
        if !self.cell.is_ready() {
            return false;
        }

        let raw = self.cell.read();
        if self.samples.is_full() {
            self.samples.pop_front();
        }
        // Room was made above.
        let _ = self.samples.push_back(raw);
        true
    }

    /// Reads one raw conversion without touching the window or the offset.
    pub fn read_raw(&mut self) -> i32 {
        self.cell.read()
    }

    /// Returns the averaged weight in grams.
    ///
    /// Returns 0.0 while the window is empty, and while the oldest sample
    /// is more than `OUTLIER_TOLERANCE_GRAMS` away from the average, which
    /// happens whenever the load is still changing.
    pub fn current_weight(&self) -> f32 {
        let Some(&oldest) = self.samples.front() else {
            return 0.0;
        };

        let total: i64 = self.samples.iter().map(|&raw| raw as i64).sum();
        let mean = total as f32 / self.samples.len() as f32;

        let average = self.to_grams(mean);
        let settled = self.to_grams(oldest as f32);

        let delta = average - settled;
        if delta > OUTLIER_TOLERANCE_GRAMS || delta < -OUTLIER_TOLERANCE_GRAMS {
            #[cfg(feature = "defmt")]
            defmt::warn!(
                "high delta {=f32} (avg {=f32}, oldest {=f32})",
                delta,
                average,
                settled
            );
            return 0.0;
        }

        average
    }

    /// Returns the averaged weight in grams once the load has settled.
    ///
    /// The load counts as settled when the window is full and its raw
    /// samples spread by no more than `STABILITY_LIMIT_RAW`. Returns `None`
    /// otherwise.
    pub fn stable_weight(&self) -> Option<f32> {
        if !self.samples.is_full() {
            return None;
        }

        let low = self.samples.iter().copied().min()?;
        let high = self.samples.iter().copied().max()?;
        if (high as i64 - low as i64) > STABILITY_LIMIT_RAW as i64 {
            return None;
        }

        let total: i64 = self.samples.iter().map(|&raw| raw as i64).sum();
        Some(self.to_grams(total as f32 / self.samples.len() as f32))
    }

    /// Returns the number of samples in the window.
    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }

    /// Returns a reference to the load cell.
    pub fn cell(&self) -> &C {
        &self.cell
    }

    /// Returns a mutable reference to the load cell.
    pub fn cell_mut(&mut self) -> &mut C {
        &mut self.cell
    }

    fn to_grams(&self, raw: f32) -> f32 {
        (raw - self.offset as f32) / self.counts_per_gram
    }
}
