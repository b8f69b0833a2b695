// File: crates/chart-core/src/scale.rs
// Summary: Category (X) and value (Y) scale transforms plus axis tick selection.

/// Value along Y.
pub type Value = f64;

/// Headroom applied above the largest value.
pub const Y_HEADROOM: f64 = 1.1;
/// Number of intervals between Y tick labels (six labels including zero).
pub const Y_STEPS: usize = 5;

/// Horizontal category scale: `left_px + index * spacing`.
#[derive(Clone, Copy, Debug)]
pub struct CategoryScale {
    pub left_px: f64,
    pub spacing: f64,
}

impl CategoryScale {
    pub fn new(left_px: f64, spacing: f64) -> Self {
        Self { left_px, spacing }
    }

    /// Point-indexed scale: first point on the left edge, last on the right edge.
    /// A lone point stays on the left edge.
    pub fn points(left_px: f64, width_px: f64, count: usize) -> Self {
        let spacing = if count > 1 { width_px / (count - 1) as f64 } else { 0.0 };
        Self::new(left_px, spacing)
    }

    /// Slot-indexed scale: `count` equal slots across `width_px`.
    pub fn slots(left_px: f64, width_px: f64, count: usize) -> Self {
        let spacing = if count > 0 { width_px / count as f64 } else { 0.0 };
        Self::new(left_px, spacing)
    }

    #[inline]
    pub fn to_px(&self, x: f64) -> f64 {
        self.left_px + x * self.spacing
    }
}

/// Vertical value scale mapping `[vmin, vmax]` to `[bottom_px, top_px]`.
#[derive(Clone, Copy, Debug)]
pub struct ValueScale {
    pub top_px: f64,
    pub bottom_px: f64,
    pub vmin: Value,
    pub vmax: Value,
}

impl ValueScale {
    pub fn new_linear(top_px: f64, bottom_px: f64, vmin: Value, vmax: Value) -> Self {
        let mut s = Self { top_px, bottom_px, vmin, vmax };
        if !(s.vmax - s.vmin).is_finite() || (s.vmax - s.vmin).abs() < 1e-12 {
            s.vmax = s.vmin + 1.0;
        }
        s
    }

    /// Pixels per value unit.
    pub fn px_per_unit(&self) -> f64 {
        (self.bottom_px - self.top_px) / (self.vmax - self.vmin)
    }

    #[inline]
    pub fn to_px(&self, y: Value) -> f64 {
        self.bottom_px - (y - self.vmin) * self.px_per_unit()
    }
}

/// Largest value of the dataset times the headroom factor.
///
/// Falls back to `1.0` when the maximum is not a positive finite number, so the
/// scale never divides by zero.
pub fn y_max<I: IntoIterator<Item = Value>>(values: I) -> Value {
    let max = values.into_iter().fold(f64::NEG_INFINITY, f64::max);
    if max.is_finite() && max > 0.0 { max * Y_HEADROOM } else { 1.0 }
}

/// Round `max` up to `{1, 2, 5, 10} × 10^floor(log10(max))`.
pub fn nice_max(max: Value) -> Value {
    if !max.is_finite() || max <= 0.0 {
        return 1.0;
    }
    let pow10 = 10f64.powf(max.log10().floor());
    let fraction = max / pow10;
    let nice = if fraction <= 1.0 {
        1.0
    } else if fraction <= 2.0 {
        2.0
    } else if fraction <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * pow10
}

/// `Y_STEPS + 1` evenly spaced tick values from zero to `top`.
pub fn ticks(top: Value) -> Vec<Value> {
    (0..=Y_STEPS).map(|i| top * i as f64 / Y_STEPS as f64).collect()
}
