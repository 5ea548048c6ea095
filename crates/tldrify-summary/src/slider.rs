//! A slider paired with a free-form numeric text input.
//!
//! The text input may hold partial numbers while the user types
//! (`""`, `"-"`, `"3."`); the slider value only changes on
//! [`commit`](SliderInput::commit) or when the slider itself moves.

/// Whether `raw` looks like a number being typed: `-?\d*\.?\d*`.
#[must_use]
pub fn is_partial_number(raw: &str) -> bool {
    let digits = raw.strip_prefix('-').unwrap_or(raw);
    let (int, frac) = digits.split_once('.').unwrap_or((digits, ""));
    int.bytes().all(|b| b.is_ascii_digit()) && frac.bytes().all(|b| b.is_ascii_digit())
}

/// Format a value the way it appears in the text input.
fn display(value: f64) -> String {
    format!("{value}")
}

/// State of one slider-with-input control.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderInput {
    min: f64,
    max: f64,
    step: f64,
    default: f64,
    value: f64,
    input: String,
}

impl SliderInput {
    /// Create a control showing `initial`.
    ///
    /// A `step` that is not positive and finite turns off rounding;
    /// committed values are then only clamped.
    #[must_use]
    pub fn new(min: f64, max: f64, step: f64, default: f64, initial: f64) -> Self {
        Self {
            min,
            max,
            step,
            default,
            value: initial,
            input: display(initial),
        }
    }

    /// Current slider value.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// Current text in the input.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Lower bound.
    #[must_use]
    pub const fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound.
    #[must_use]
    pub const fn max(&self) -> f64 {
        self.max
    }

    /// Slider granularity.
    #[must_use]
    pub const fn step(&self) -> f64 {
        self.step
    }

    /// Replace both the value and the text, e.g. when the owner loads
    /// different settings.
    pub fn sync(&mut self, value: f64) {
        self.value = value;
        self.input = display(value);
    }

    /// The user typed into the input.
    ///
    /// Returns `None` when the text was taken. When it was rejected,
    /// returns the kept text, which the caller must write back into the
    /// element since the rendered value did not change.
    pub fn edit(&mut self, raw: &str) -> Option<&str> {
        if is_partial_number(raw) {
            raw.clone_into(&mut self.input);
            None
        } else {
            Some(self.input.as_str())
        }
    }

    /// Apply the typed text (on blur or Enter) and return the new value.
    ///
    /// Empty or `-` snaps to the minimum; text that is not a number
    /// reverts to the current value; anything else is clamped to the
    /// range and rounded to the nearest step.
    pub fn commit(&mut self) -> f64 {
        let raw = self.input.trim();
        if raw.is_empty() || raw == "-" {
            self.sync(self.min);
            return self.value;
        }

        let parsed = match raw.parse::<f64>() {
            Ok(parsed) if !parsed.is_nan() => parsed,
            _ => {
                tracing::debug!(input = raw, "not a number, reverting");
                self.input = display(self.value);
                return self.value;
            }
        };

        let clamped = parsed.max(self.min).min(self.max);
        let stepped = if self.step.is_finite() && self.step > 0.0 {
            // Halves round up, matching the slider widget.
            (clamped / self.step + 0.5).floor() * self.step
        } else {
            clamped
        };
        self.sync(stepped);
        self.value
    }

    /// The slider moved.
    pub fn slide(&mut self, value: f64) {
        self.sync(value);
    }

    /// Return to the default value.
    pub fn reset(&mut self) {
        self.sync(self.default);
    }

    /// Whether the reset control should be visible.
    #[must_use]
    pub fn show_reset(&self, disabled: bool) -> bool {
        #[allow(clippy::float_cmp)]
        let at_default = self.value == self.default;
        !disabled && !at_default
    }
}
