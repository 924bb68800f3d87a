use core::sync::atomic::{AtomicU64, Ordering};

use log::warn;

/// Smallest accepted wide/narrow ratio.
pub const MIN_RATIO: f64 = 1.8;
/// Largest accepted wide/narrow ratio.
pub const MAX_RATIO: f64 = 3.0;
/// Wide/narrow ratio used when nothing else is configured.
pub const DEFAULT_RATIO: f64 = 2.0;
/// Narrow element width of the fixed-width mode when none is given.
pub const DEFAULT_NARROW_WIDTH: f64 = 1.0;

// f64 bits of DEFAULT_RATIO
static GLOBAL_RATIO: AtomicU64 = AtomicU64::new(0x4000_0000_0000_0000);

/// Clamps `ratio` to [MIN_RATIO, MAX_RATIO]. NaN falls back to
/// [DEFAULT_RATIO].
pub fn clamp_ratio(ratio: f64) -> f64 {
    if ratio.is_nan() {
        warn!("wide/narrow ratio is NaN, using {DEFAULT_RATIO}");
        return DEFAULT_RATIO;
    }

    let clamped = ratio.clamp(MIN_RATIO, MAX_RATIO);
    if clamped != ratio {
        warn!("wide/narrow ratio {ratio} clamped to {clamped}");
    }
    clamped
}

/// Process-wide default ratio, snapshotted by [GeometryConfig::default].
pub fn default_ratio() -> f64 {
    f64::from_bits(GLOBAL_RATIO.load(Ordering::Acquire))
}

/// Replaces the process-wide default ratio. The value is clamped, NaN is
/// ignored.
pub fn set_default_ratio(ratio: f64) {
    if ratio.is_nan() {
        warn!("ignoring NaN default wide/narrow ratio");
        return;
    }
    GLOBAL_RATIO.store(clamp_ratio(ratio).to_bits(), Ordering::Release);
}

/// Margins between the canvas border and the bars.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Insets {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

impl Insets {
    pub const ZERO: Insets = Insets::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(top: f64, left: f64, bottom: f64, right: f64) -> Self {
        Self { top, left, bottom, right }
    }

    /// Same margin on every side.
    pub const fn uniform(margin: f64) -> Self {
        Self::new(margin, margin, margin, margin)
    }

    #[inline]
    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }

    #[inline]
    pub fn vertical(&self) -> f64 {
        self.top + self.bottom
    }

    /// Every margin is finite and non-negative.
    pub fn is_valid(&self) -> bool {
        [self.top, self.left, self.bottom, self.right]
            .iter()
            .all(|&m| m.is_finite() && m >= 0.0)
    }
}

/// What the geometry has to fit.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Target {
    /// Stretch the bars over a canvas of fixed size (auto-fit mode).
    Canvas { width: f64, height: f64 },
    /// Fixed height, the width follows from the narrow element width
    /// (fixed-width mode).
    Height(f64),
}

/// Per-call geometry parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeometryConfig {
    ratio: f64,
    narrow_width: Option<f64>,
    insets: Insets,
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self::new().ratio(default_ratio())
    }
}

impl GeometryConfig {
    /// Ratio [DEFAULT_RATIO], automatic narrow width and no insets.
    pub const fn new() -> Self {
        Self { ratio: DEFAULT_RATIO, narrow_width: None, insets: Insets::ZERO }
    }

    /// Returns the requested wide/narrow ratio, before clamping.
    #[inline]
    pub const fn get_ratio(&self) -> f64 {
        self.ratio
    }

    /// Returns the ratio the geometry is computed with.
    pub fn effective_ratio(&self) -> f64 {
        clamp_ratio(self.ratio)
    }

    #[inline]
    pub const fn get_narrow_width(&self) -> Option<f64> {
        self.narrow_width
    }

    #[inline]
    pub const fn get_insets(&self) -> Insets {
        self.insets
    }

    /// Sets the wide/narrow ratio. It is clamped to [MIN_RATIO, MAX_RATIO]
    /// when the geometry is computed.
    pub const fn ratio(mut self, ratio: f64) -> Self {
        self.ratio = ratio;
        self
    }

    /// Forces the narrow element width. Only positive widths are honored,
    /// anything else falls back to the mode's default.
    pub const fn narrow_width(mut self, width: f64) -> Self {
        self.narrow_width = Some(width);
        self
    }

    pub const fn insets(mut self, insets: Insets) -> Self {
        self.insets = insets;
        self
    }

    /// Explicit narrow width, if positive.
    pub(crate) fn explicit_narrow_width(&self) -> Option<f64> {
        self.narrow_width.filter(|&w| w > 0.0 && w.is_finite())
    }
}
