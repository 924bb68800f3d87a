use log::debug;

use crate::encoder::CodeString;
use crate::error::{Error, Result};
use crate::geometry::config::{GeometryConfig, Target, DEFAULT_NARROW_WIDTH};
use crate::geometry::segment::{Segment, Segments};

/// Physical bar widths of an encoded message, ready to be painted.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    width: f64,
    height: f64,
    origin: (f64, f64),
    bar_height: f64,
    narrow: f64,
    ratio: f64,
    segments: Vec<Segment>,
}

impl Layout {
    /// Canvas width, insets included.
    #[inline]
    pub const fn width(&self) -> f64 {
        self.width
    }

    /// Canvas height, insets included.
    #[inline]
    pub const fn height(&self) -> f64 {
        self.height
    }

    /// Top-left corner of the first bar as (left inset, top inset).
    #[inline]
    pub const fn origin(&self) -> (f64, f64) {
        self.origin
    }

    #[inline]
    pub const fn bar_height(&self) -> f64 {
        self.bar_height
    }

    #[inline]
    pub const fn narrow_width(&self) -> f64 {
        self.narrow
    }

    #[inline]
    pub fn wide_width(&self) -> f64 {
        self.narrow * self.ratio
    }

    /// Clamped ratio the widths were computed with.
    #[inline]
    pub const fn ratio(&self) -> f64 {
        self.ratio
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = Segment> + '_ {
        self.segments.iter().copied()
    }

    /// Sum of the segment widths, left to right.
    pub fn bars_width(&self) -> f64 {
        self.segments.iter().map(|s| s.width).sum()
    }

    /// Horizontal position and width of every bar, spaces skipped.
    pub fn bars(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.segments.iter()
            .scan(self.origin.0, |x, s| {
                let start = *x;
                *x += s.width;
                Some((start, *s))
            })
            .filter(|(_, s)| s.is_bar)
            .map(|(x, s)| (x, s.width))
    }
}

fn positive(value: f64, reason: &'static str) -> Result<f64> {
    if value > 0.0 && value.is_finite() {
        Ok(value)
    } else {
        Err(Error::InvalidGeometryTarget(reason))
    }
}

/// Computes the bar/space widths of `code` for `target`.
///
/// With [Target::Canvas] the narrow width is chosen so that the segments
/// exactly span the canvas width minus the horizontal insets, unless the
/// config forces a positive narrow width. With [Target::Height] the narrow
/// width defaults to [DEFAULT_NARROW_WIDTH] and the canvas width is the sum
/// of the segments plus the horizontal insets.
pub fn compute_geometry(
    code: &CodeString,
    target: Target,
    config: &GeometryConfig,
) -> Result<Layout> {
    if code.is_empty() {
        return Err(Error::EmptyInput);
    }

    let ratio = config.effective_ratio();
    let insets = config.get_insets();
    if !insets.is_valid() {
        return Err(Error::InvalidGeometryTarget("insets must be finite and non-negative"));
    }

    let (width, height, narrow) = match target {
        Target::Canvas { width, height } => {
            let width = positive(width, "canvas width must be positive")?;
            let height = positive(height, "canvas height must be positive")?;
            let available =
                positive(width - insets.horizontal(), "insets leave no horizontal room")?;

            let narrow = match config.explicit_narrow_width() {
                Some(narrow) => narrow,
                None => available / Segments::units(code.bits(), ratio),
            };
            debug!("auto-fit: {} elements over {available}, narrow width {narrow}", code.len());
            (Some(width), height, narrow)
        },
        Target::Height(height) => {
            let height = positive(height, "target height must be positive")?;
            let narrow = config.explicit_narrow_width().unwrap_or(DEFAULT_NARROW_WIDTH);
            debug!("fixed width: {} elements, narrow width {narrow}", code.len());
            (None, height, narrow)
        },
    };

    let bar_height = positive(height - insets.vertical(), "insets leave no vertical room")?;

    let segments: Vec<Segment> = Segments::new(code.bits(), narrow, narrow * ratio).collect();
    let width = match width {
        Some(width) => width,
        None => positive(
            segments.iter().map(|s| s.width).sum::<f64>() + insets.horizontal(),
            "canvas width must be positive",
        )?,
    };

    Ok(Layout {
        width,
        height,
        origin: (insets.left, insets.top),
        bar_height,
        narrow,
        ratio,
        segments,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::encode;
    use crate::geometry::config::{Insets, MAX_RATIO, MIN_RATIO};
    use pretty_assertions::assert_eq;

    const EPSILON: f64 = 1e-9;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_auto_fit_spans_canvas() {
        let code = encode("HELLO").unwrap();
        for ratio in [1.8, 2.0, 2.5, 3.0] {
            let config = GeometryConfig::new().ratio(ratio);
            let target = Target::Canvas { width: 300.0, height: 80.0 };
            let layout = compute_geometry(&code, target, &config).unwrap();
            assert!(close(layout.bars_width(), 300.0), "ratio {ratio}: {}", layout.bars_width());
            assert_eq!(layout.width(), 300.0);
            assert_eq!(layout.bar_height(), 80.0);
            assert_eq!(layout.segments().len(), code.len());
        }
    }

    #[test]
    fn test_auto_fit_with_insets() {
        let code = encode("A1").unwrap();
        let config = GeometryConfig::new().insets(Insets::new(5.0, 10.0, 15.0, 20.0));
        let target = Target::Canvas { width: 200.0, height: 100.0 };
        let layout = compute_geometry(&code, target, &config).unwrap();
        assert!(close(layout.bars_width(), 170.0));
        assert_eq!(layout.origin(), (10.0, 5.0));
        assert_eq!(layout.bar_height(), 80.0);
        assert!(close(layout.wide_width(), layout.narrow_width() * 2.0));
    }

    #[test]
    fn test_auto_fit_narrow_width() {
        // 39 elements, 12 wide: 27 + 12 * 2 = 51 units
        let code = encode("12").unwrap();
        let target = Target::Canvas { width: 102.0, height: 10.0 };
        let layout = compute_geometry(&code, target, &GeometryConfig::new()).unwrap();
        assert!(close(layout.narrow_width(), 2.0));
        assert!(close(layout.wide_width(), 4.0));
    }

    #[test]
    fn test_explicit_narrow_width_wins() {
        let code = encode("12").unwrap();
        let config = GeometryConfig::new().narrow_width(1.5);
        let target = Target::Canvas { width: 500.0, height: 10.0 };
        let layout = compute_geometry(&code, target, &config).unwrap();
        assert_eq!(layout.narrow_width(), 1.5);
        assert_eq!(layout.width(), 500.0);

        // non-positive widths are ignored
        let config = GeometryConfig::new().narrow_width(0.0);
        let target = Target::Canvas { width: 102.0, height: 10.0 };
        let layout = compute_geometry(&code, target, &config).unwrap();
        assert!(close(layout.narrow_width(), 2.0));
    }

    #[test]
    fn test_fixed_width() {
        let code = encode("12").unwrap();
        let config = GeometryConfig::new().insets(Insets::new(2.0, 3.0, 4.0, 5.0));
        let layout = compute_geometry(&code, Target::Height(50.0), &config).unwrap();
        assert_eq!(layout.narrow_width(), 1.0);
        assert_eq!(layout.wide_width(), 2.0);
        assert_eq!(layout.bars_width(), 51.0);
        assert_eq!(layout.width(), 59.0);
        assert_eq!(layout.height(), 50.0);
        assert_eq!(layout.bar_height(), 44.0);
    }

    #[test]
    fn test_fixed_width_round_trip() {
        let code = encode("ROUND TRIP").unwrap();
        let insets = Insets::new(0.0, 7.25, 0.0, 3.5);
        let config = GeometryConfig::new().ratio(2.7).narrow_width(1.3).insets(insets);
        let layout = compute_geometry(&code, Target::Height(40.0), &config).unwrap();
        assert_eq!(layout.width(), layout.bars_width() + insets.horizontal());
    }

    #[test]
    fn test_ratio_clamping() {
        let code = encode("CLAMP").unwrap();
        let target = Target::Canvas { width: 640.0, height: 48.0 };
        let geometry = |ratio| {
            compute_geometry(&code, target, &GeometryConfig::new().ratio(ratio)).unwrap()
        };

        assert_eq!(geometry(0.5), geometry(MIN_RATIO));
        assert_eq!(geometry(10.0), geometry(MAX_RATIO));
        assert_eq!(geometry(0.5).ratio(), MIN_RATIO);

        let fixed = |ratio| {
            let config = GeometryConfig::new().ratio(ratio);
            compute_geometry(&code, Target::Height(10.0), &config).unwrap()
        };
        assert_eq!(fixed(10.0).wide_width(), 3.0);
    }

    #[test]
    fn test_bars_positions() {
        let code = encode("1").unwrap();
        let config = GeometryConfig::new().insets(Insets::new(0.0, 4.0, 0.0, 0.0));
        let layout = compute_geometry(&code, Target::Height(10.0), &config).unwrap();
        let bars: Vec<(f64, f64)> = layout.bars().collect();
        // '*' = 010010100: bar 1, space 2, bar 1, space 1, bar 2, ...
        assert_eq!(&bars[..3], &[(4.0, 1.0), (7.0, 1.0), (9.0, 2.0)]);
        assert_eq!(bars.len(), (code.len() + 1) / 2);
    }

    #[test]
    fn test_invalid_targets() {
        let code = encode("X").unwrap();
        let config = GeometryConfig::new();
        for target in [
            Target::Canvas { width: 0.0, height: 10.0 },
            Target::Canvas { width: 10.0, height: -1.0 },
            Target::Canvas { width: f64::NAN, height: 10.0 },
            Target::Height(0.0),
            Target::Height(f64::INFINITY),
        ] {
            let result = compute_geometry(&code, target, &config);
            assert!(matches!(result, Err(Error::InvalidGeometryTarget(_))), "{target:?}");
        }

        let config = GeometryConfig::new().insets(Insets::new(0.0, 60.0, 0.0, 40.0));
        assert_eq!(compute_geometry(&code, Target::Canvas { width: 100.0, height: 10.0 }, &config),
            Err(Error::InvalidGeometryTarget("insets leave no horizontal room")));

        let config = GeometryConfig::new().insets(Insets::uniform(5.0));
        assert_eq!(compute_geometry(&code, Target::Height(10.0), &config),
            Err(Error::InvalidGeometryTarget("insets leave no vertical room")));
    }

    #[test]
    fn test_fixed_width_rejects_bad_insets() {
        let code = encode("A").unwrap();
        for insets in [
            Insets::new(0.0, -50.0, 0.0, -50.0),
            Insets::new(0.0, -1.0, 0.0, 0.0),
            Insets::new(0.0, f64::NAN, 0.0, 0.0),
            Insets::new(0.0, 0.0, 0.0, f64::NAN),
            Insets::new(0.0, 0.0, 0.0, f64::INFINITY),
            Insets::new(-2.0, 0.0, 0.0, 0.0),
        ] {
            let config = GeometryConfig::new().insets(insets);
            assert_eq!(compute_geometry(&code, Target::Height(10.0), &config),
                Err(Error::InvalidGeometryTarget("insets must be finite and non-negative")),
                "{insets:?}");
        }

        let config = GeometryConfig::new().insets(Insets::new(0.0, f64::NAN, 0.0, 0.0));
        let target = Target::Canvas { width: 100.0, height: 10.0 };
        assert!(matches!(compute_geometry(&code, target, &config),
            Err(Error::InvalidGeometryTarget(_))));
    }

    #[test]
    fn test_fixed_width_rejects_overflowing_canvas() {
        let code = encode("A").unwrap();
        let config = GeometryConfig::new().narrow_width(f64::MAX);
        assert_eq!(compute_geometry(&code, Target::Height(10.0), &config),
            Err(Error::InvalidGeometryTarget("canvas width must be positive")));
    }

    #[test]
    fn test_geometry_is_deterministic() {
        let code = encode("SAME").unwrap();
        let target = Target::Canvas { width: 333.0, height: 33.0 };
        let config = GeometryConfig::new().ratio(2.2);
        let first = compute_geometry(&code, target, &config);
        assert_eq!(first, compute_geometry(&code, target, &config));
    }
}
