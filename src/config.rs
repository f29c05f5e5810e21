//! Runtime settings. Nothing is read from the environment; `Default` is
//! the reference setup.

use std::time::Duration;

use crate::{Error, Result};

/// Characters used to draw a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    pub border: char,
    pub alive: char,
    pub dead: char,
}

impl Default for Glyphs {
    fn default() -> Self {
        Self {
            border: '#',
            alive: 'O',
            dead: ' ',
        }
    }
}

/// What the driver does when the platform has no clear strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClearFailurePolicy {
    /// Warn once and keep drawing without clearing.
    #[default]
    Log,
    /// Stop the loop with the error.
    Fatal,
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Grid height in cells.
    pub rows: usize,

    /// Grid width in cells.
    pub cols: usize,

    /// Sleep between two frames.
    pub frame_interval: Duration,

    pub glyphs: Glyphs,

    pub clear_failure: ClearFailurePolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rows: 32,
            cols: 64,
            frame_interval: Duration::from_millis(100),
            glyphs: Glyphs::default(),
            clear_failure: ClearFailurePolicy::default(),
        }
    }
}

impl Config {
    pub fn dimensions(mut self, rows: usize, cols: usize) -> Self {
        self.rows = rows;
        self.cols = cols;
        self
    }

    pub fn frame_interval(mut self, interval: Duration) -> Self {
        self.frame_interval = interval;
        self
    }

    pub fn glyphs(mut self, glyphs: Glyphs) -> Self {
        self.glyphs = glyphs;
        self
    }

    pub fn clear_failure(mut self, policy: ClearFailurePolicy) -> Self {
        self.clear_failure = policy;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(Error::InvalidConfig("rows and cols must be > 0"));
        }
        if self.glyphs.alive == self.glyphs.dead {
            return Err(Error::InvalidConfig("alive and dead glyphs must differ"));
        }
        Ok(())
    }
}
