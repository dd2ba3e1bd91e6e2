/// Linear mapping from an input domain onto an output range.
///
/// Values outside the input domain are clamped to the nearest end of the
/// output range, so a card that has not entered its tracking window yet
/// stays at its resting style instead of overshooting.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InterpolationRange {
    pub input: (f64, f64),
    pub output: (f64, f64),
}

impl InterpolationRange {
    pub const fn new(input: (f64, f64), output: (f64, f64)) -> Self {
        Self { input, output }
    }

    pub fn map(&self, value: f64) -> f64 {
        let (in_start, in_end) = self.input;
        let (out_start, out_end) = self.output;

        let span = in_end - in_start;
        if span == 0.0 {
            return if value >= in_end { out_end } else { out_start };
        }

        let t = ((value - in_start) / span).clamp(0.0, 1.0);
        out_start + (out_end - out_start) * t
    }
}

pub const OPACITY: InterpolationRange = InterpolationRange::new((0.0, 1.0), (0.35, 1.0));
pub const SCALE: InterpolationRange = InterpolationRange::new((0.0, 1.0), (0.96, 1.02));
pub const TRANSLATE_Y: InterpolationRange = InterpolationRange::new((0.0, 1.0), (24.0, 0.0));

/// Presentation values a reveal card is drawn with for a given progress.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealStyle {
    pub opacity: f64,
    pub scale: f64,
    pub translate_y: f64,
}

impl RevealStyle {
    pub fn from_progress(progress: f64) -> Self {
        // NaN would poison every range below, treat it as "not entered yet"
        let progress = if progress.is_nan() { 0.0 } else { progress };
        Self {
            opacity: OPACITY.map(progress),
            scale: SCALE.map(progress),
            translate_y: TRANSLATE_Y.map(progress),
        }
    }

    /// Inline style touching only compositor-friendly properties.
    pub fn to_css(&self) -> String {
        format!(
            "opacity: {:.4}; transform: translateY({:.2}px) scale({:.4}); will-change: opacity, transform;",
            self.opacity, self.rendered_offset(), self.scale
        )
    }

    fn rendered_offset(&self) -> f64 {
        // avoid rendering "-0.00px" once the offset has settled
        if self.translate_y.abs() < 0.005 {
            0.0
        } else {
            self.translate_y
        }
    }
}

impl Default for RevealStyle {
    fn default() -> Self {
        Self::from_progress(0.0)
    }
}
