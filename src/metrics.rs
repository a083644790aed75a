//! Perceptual and photometric measurements over colors and palettes.
//!
//! Every function validates its hex input through [`Color::parse`] and
//! fails fast with [`InvalidColorFormat`] on malformed input; no value is
//! ever silently defaulted. Palette-wide measurements are O(n²) in the
//! number of colors.

use crate::color::{parse_all, Color, Component, InvalidColorFormat};
use crate::math::almost_zero;
use crate::rgb::Rgb;

/// The minimum CIE76 delta E at which two colors read as visually
/// distinct. Pairs below this are treated as near-duplicates.
pub const MIN_DISTINCT_DIFFERENCE: Component = 15.0;

/// The largest chroma any sRGB color reaches in CIE-Lab (the blue
/// primary, `#0000FF`). Used to normalize chroma to [0, 1].
#[allow(clippy::excessive_precision)]
const MAX_SRGB_CHROMA: Component = 133.80841634911252;

impl Rgb {
    /// The WCAG 2.1 relative luminance of this color, in [0, 1].
    ///
    /// Per-channel sRGB-to-linear transform followed by the standardized
    /// weighted sum `0.2126 R + 0.7152 G + 0.0722 B`. The constants are
    /// fixed by WCAG; changing any of them breaks compatibility with the
    /// published contrast test vectors.
    pub fn relative_luminance(&self) -> Component {
        let [r, g, b] = self.to_linear_light();
        0.2126 * r + 0.7152 * g + 0.0722 * b
    }
}

impl Color {
    /// The WCAG 2.1 relative luminance of this color, in [0, 1].
    pub fn relative_luminance(&self) -> Component {
        self.rgb().relative_luminance()
    }
}

/// The WCAG contrast ratio between two already-parsed colors, in [1, 21].
pub(crate) fn contrast_ratio_of(a: &Color, b: &Color) -> Component {
    let la = a.relative_luminance();
    let lb = b.relative_luminance();
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// The WCAG 2.1 relative luminance of a hex color, in [0, 1].
pub fn relative_luminance(color: &str) -> Result<Component, InvalidColorFormat> {
    Ok(Color::parse(color)?.relative_luminance())
}

/// The WCAG contrast ratio between two hex colors, in [1, 21].
/// Symmetric in its arguments.
pub fn contrast_ratio(a: &str, b: &str) -> Result<Component, InvalidColorFormat> {
    Ok(contrast_ratio_of(&Color::parse(a)?, &Color::parse(b)?))
}

/// The perceptual difference between two hex colors: the Euclidean
/// distance between them in CIE-Lab (delta E, CIE76). Symmetric; zero only
/// when both normalize to the same color.
pub fn color_difference(a: &str, b: &str) -> Result<Component, InvalidColorFormat> {
    let a = Color::parse(a)?.to_lab();
    let b = Color::parse(b)?.to_lab();
    Ok(a.difference(&b))
}

/// True when every pairwise delta E in the palette exceeds
/// [`MIN_DISTINCT_DIFFERENCE`]. Palettes with fewer than two colors are
/// vacuously distinct.
pub fn are_colors_distinct(colors: &[impl AsRef<str>]) -> Result<bool, InvalidColorFormat> {
    let labs: Vec<_> = parse_all(colors)?.iter().map(Color::to_lab).collect();

    for (i, a) in labs.iter().enumerate() {
        for b in &labs[i + 1..] {
            if a.difference(b) <= MIN_DISTINCT_DIFFERENCE {
                return Ok(false);
            }
        }
    }

    Ok(true)
}

/// Aggregate distinctiveness of a palette in [0, 100]: the mean pairwise
/// delta E, capped at 100. Higher means more visually distinct. Palettes
/// with fewer than two colors score 100.
pub fn distinctiveness_score(colors: &[impl AsRef<str>]) -> Result<Component, InvalidColorFormat> {
    let labs: Vec<_> = parse_all(colors)?.iter().map(Color::to_lab).collect();

    let mut total = 0.0;
    let mut pairs = 0usize;
    for (i, a) in labs.iter().enumerate() {
        for b in &labs[i + 1..] {
            total += a.difference(b);
            pairs += 1;
        }
    }

    if pairs == 0 {
        return Ok(100.0);
    }

    Ok((total / pairs as Component).min(100.0))
}

/// Perceived brightness in [0, 1], using the NTSC channel weights
/// `0.299 / 0.587 / 0.114`. 0 is black, 1 is white.
pub fn brightness(color: &str) -> Result<Component, InvalidColorFormat> {
    let [r, g, b] = Color::parse(color)?.rgb().to_float();
    Ok(0.299 * r + 0.587 * g + 0.114 * b)
}

/// HSL saturation in [0, 1]. 0 is achromatic, 1 is fully saturated.
pub fn saturation(color: &str) -> Result<Component, InvalidColorFormat> {
    Ok(Color::parse(color)?.to_hsl().saturation / 100.0)
}

/// Perceived temperature in [-1, 1]: positive is warm (hues near red,
/// peaking at 0°), negative is cool (hues near cyan-blue, peaking at
/// 180°), near zero is neutral.
pub fn temperature(color: &str) -> Result<Component, InvalidColorFormat> {
    let hue = Color::parse(color)?.to_hsl().hue;
    Ok(warmth_factor(hue) - coolness_factor(hue))
}

/// Perceptual complexity in [0, 1]: the color's CIE-Lab chroma normalized
/// by the largest chroma reachable in sRGB. 0 is neutral gray, 1 is the
/// most chromatic color.
pub fn complexity(color: &str) -> Result<Component, InvalidColorFormat> {
    Ok((Color::parse(color)?.to_lab().chroma() / MAX_SRGB_CHROMA).min(1.0))
}

/// Visual weight in [0, 1]: dark, saturated colors carry the most weight.
/// Computed as `(1 - brightness) * (1 + saturation) / 2`.
pub fn weight(color: &str) -> Result<Component, InvalidColorFormat> {
    Ok((1.0 - brightness(color)?) * (1.0 + saturation(color)?) / 2.0)
}

/// Visual energy in [0, 1]: the product of HSV saturation and value.
/// Vivid, bright colors score high; grays and near-blacks score low.
pub fn energy(color: &str) -> Result<Component, InvalidColorFormat> {
    let hsv = Color::parse(color)?.to_hsv();
    Ok((hsv.saturation / 100.0) * (hsv.value / 100.0))
}

/// The color's share of the palette's total visual weight, in [0, 1].
/// A palette with no weight at all (for example, all white) yields 0.
pub fn dominance(
    color: &str,
    palette: &[impl AsRef<str>],
) -> Result<Component, InvalidColorFormat> {
    let own = weight(color)?;
    let mut total = 0.0;
    for entry in palette {
        total += weight(entry.as_ref())?;
    }

    if almost_zero(total) {
        return Ok(0.0);
    }

    Ok(own / total)
}

fn warmth_factor(hue: Component) -> Component {
    // Warm hues ramp from yellow (60°) through red (0°) and back down to
    // 300°, peaking at pure red.
    if hue <= 60.0 || hue >= 300.0 {
        1.0 - hue.min(360.0 - hue) / 60.0
    } else {
        0.0
    }
}

fn coolness_factor(hue: Component) -> Component {
    // Cool hues ramp from green (120°) through blue (240°), peaking at
    // cyan-blue (180°).
    if (120.0..=240.0).contains(&hue) {
        1.0 - (hue - 180.0).abs() / 60.0
    } else {
        0.0
    }
}
