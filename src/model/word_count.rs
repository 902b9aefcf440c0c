use serde::{Deserialize, Serialize};

/// Bounds of the word count slider.
///
/// Valid values are `min, min + step, ..., max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCountBounds {
    #[serde(default = "default_min")]
    pub min: u32,
    #[serde(default = "default_max")]
    pub max: u32,
    #[serde(default = "default_step")]
    pub step: u32,
    #[serde(default = "default_value")]
    pub default: u32,
}

fn default_min() -> u32 {
    100
}

fn default_max() -> u32 {
    1000
}

fn default_step() -> u32 {
    50
}

fn default_value() -> u32 {
    700
}

impl Default for WordCountBounds {
    fn default() -> Self {
        WordCountBounds {
            min: default_min(),
            max: default_max(),
            step: default_step(),
            default: default_value(),
        }
    }
}

impl WordCountBounds {
    /// Whether the bounds describe a non-empty stepped range
    pub fn is_valid(&self) -> bool {
        self.step > 0 && self.min <= self.max && (self.max - self.min) % self.step == 0
    }

    /// Clamp into range, then round to the nearest step. Exact ties round down.
    pub fn normalize(&self, value: u32) -> u32 {
        if self.min > self.max {
            return self.min;
        }
        let clamped = value.clamp(self.min, self.max);
        if self.step == 0 {
            return clamped;
        }
        let offset = clamped - self.min;
        let steps = offset / self.step;
        let remainder = offset % self.step;
        let rounded = if remainder > self.step - remainder {
            steps + 1
        } else {
            steps
        };
        self.min
            .saturating_add(rounded.saturating_mul(self.step))
            .min(self.max)
    }

    /// Number of selectable positions on the slider
    pub fn positions(&self) -> u32 {
        if self.step == 0 {
            return 1;
        }
        (self.max - self.min) / self.step + 1
    }
}

/// Desired output length; always within bounds and on-step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordCount {
    value: u32,
    bounds: WordCountBounds,
}

impl WordCount {
    /// Start at the (normalized) default of the bounds
    pub fn new(bounds: WordCountBounds) -> Self {
        WordCount {
            value: bounds.normalize(bounds.default),
            bounds,
        }
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn bounds(&self) -> WordCountBounds {
        self.bounds
    }

    /// Store `value` after clamping and rounding; returns the stored value.
    pub fn set(&mut self, value: u32) -> u32 {
        self.value = self.bounds.normalize(value);
        self.value
    }

    /// Move by `steps` slider positions (negative moves down).
    pub fn step_by(&mut self, steps: i32) -> u32 {
        let delta = i64::from(steps) * i64::from(self.bounds.step);
        let target = (i64::from(self.value) + delta).clamp(0, i64::from(u32::MAX));
        self.set(target as u32)
    }

    /// Position of the current value on the slider, `0..positions()`
    pub fn position(&self) -> u32 {
        if self.bounds.step == 0 {
            return 0;
        }
        (self.value - self.bounds.min) / self.bounds.step
    }
}

impl Default for WordCount {
    fn default() -> Self {
        WordCount::new(WordCountBounds::default())
    }
}
