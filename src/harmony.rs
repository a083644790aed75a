//! Harmony analysis over an ordered color palette: hue-wheel scheme
//! classification, lightness/saturation balance statistics, temperature
//! distribution, and issue flagging.

use crate::color::{parse_all, Color, Component, InvalidColorFormat};
use crate::metrics::contrast_ratio_of;

/// The hue spread below which a palette reads as a single hue family.
const MONOCHROMATIC_SPREAD: Component = 15.0;

/// The tolerance around an exact hue relationship (180° opposition,
/// 120° triad spacing).
const RELATION_TOLERANCE: Component = 30.0;

/// How far a triadic gap may deviate from 120°.
const TRIADIC_TOLERANCE: Component = 15.0;

/// The hue spread up to which a palette reads as analogous.
const ANALOGOUS_SPREAD: Component = 60.0;

/// Adjacent colors below this contrast ratio are flagged as hard to tell
/// apart.
const LOW_CONTRAST_RATIO: Component = 1.5;

/// A lightness or saturation standard deviation above this flags the
/// palette as unbalanced.
const UNBALANCED_STD_DEV: Component = 30.0;

/// How a set of colors relates on the hue wheel.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Scheme {
    /// All hues within a narrow band; variation comes from lightness and
    /// saturation only.
    Monochromatic,
    /// Two colors roughly opposite each other on the hue wheel.
    Complementary,
    /// Three colors roughly evenly spaced around the hue wheel.
    Triadic,
    /// Hues within a wider band of neighboring positions.
    Analogous,
    /// No recognized relationship.
    Custom,
}

/// The perceived temperature class of a single color.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Temperature {
    /// Hue in the red-yellow band, [0°, 60°].
    Warm,
    /// Hue in the green-blue band, [180°, 240°].
    Cool,
    /// Any other hue.
    Neutral,
}

/// Population statistics over one HSL channel of a palette, on the
/// percent scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChannelStats {
    /// The arithmetic mean.
    pub mean: Component,
    /// The population (not Bessel-corrected) standard deviation.
    pub std_dev: Component,
    /// The difference between the largest and smallest value.
    pub range: Component,
}

/// Lightness and saturation distribution of a palette.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Balance {
    /// Statistics over the colors' HSL lightness.
    pub lightness: ChannelStats,
    /// Statistics over the colors' HSL saturation.
    pub saturation: ChannelStats,
}

/// How a palette's colors distribute over the temperature classes.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TemperatureProfile {
    /// The most common class. Ties resolve warm, then cool, then neutral.
    pub dominant: Temperature,
    /// The number of warm colors.
    pub warm: usize,
    /// The number of cool colors.
    pub cool: usize,
    /// The number of neutral colors.
    pub neutral: usize,
}

/// A problem detected in a palette's composition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HarmonyIssue {
    /// Two adjacent colors are hard to tell apart.
    LowContrast {
        /// The adjacent pair, in palette order.
        colors: [Color; 2],
        /// Their WCAG contrast ratio.
        ratio: Component,
    },
    /// Lightness varies too widely across the palette.
    UnbalancedLightness {
        /// The population standard deviation of lightness.
        std_dev: Component,
    },
    /// Saturation varies too widely across the palette.
    UnbalancedSaturation {
        /// The population standard deviation of saturation.
        std_dev: Component,
    },
}

/// The combined harmony analysis of a palette.
#[derive(Clone, Debug, PartialEq)]
pub struct HarmonyReport {
    /// The detected hue-wheel scheme.
    pub scheme: Scheme,
    /// Lightness and saturation distribution.
    pub balance: Balance,
    /// Temperature distribution.
    pub temperature: TemperatureProfile,
    /// Detected composition problems, in palette order.
    pub issues: Vec<HarmonyIssue>,
}

/// Classify how the palette's colors relate on the hue wheel.
///
/// The checks run in a fixed precedence and the first match wins:
/// monochromatic, complementary, triadic, analogous, custom. Two colors
/// 170° apart are complementary even though they would also fit a looser
/// neighboring-hues reading. An empty palette is custom; a single color
/// is monochromatic.
pub fn detect_scheme(colors: &[impl AsRef<str>]) -> Result<Scheme, InvalidColorFormat> {
    let mut hues: Vec<_> = parse_all(colors)?
        .iter()
        .map(|c| c.to_hsl().hue)
        .collect();
    hues.sort_by(Component::total_cmp);

    Ok(match hues.len() {
        0 => Scheme::Custom,
        1 => Scheme::Monochromatic,
        n => {
            let spread = hue_spread(&hues);

            if spread < MONOCHROMATIC_SPREAD {
                Scheme::Monochromatic
            } else if n == 2 && (hues[1] - hues[0] - 180.0).abs() <= RELATION_TOLERANCE {
                Scheme::Complementary
            } else if n == 3
                && (hues[1] - hues[0] - 120.0).abs() <= TRIADIC_TOLERANCE
                && (hues[2] - hues[1] - 120.0).abs() <= TRIADIC_TOLERANCE
            {
                Scheme::Triadic
            } else if spread <= ANALOGOUS_SPREAD {
                Scheme::Analogous
            } else {
                Scheme::Custom
            }
        }
    })
}

/// Compute the palette's lightness and saturation distribution.
pub fn analyze_balance(colors: &[impl AsRef<str>]) -> Result<Balance, InvalidColorFormat> {
    let hsl: Vec<_> = parse_all(colors)?.iter().map(Color::to_hsl).collect();

    let lightness: Vec<_> = hsl.iter().map(|c| c.lightness).collect();
    let saturation: Vec<_> = hsl.iter().map(|c| c.saturation).collect();

    Ok(Balance {
        lightness: channel_stats(&lightness),
        saturation: channel_stats(&saturation),
    })
}

/// Classify each color as warm, cool, or neutral and report the dominant
/// class. Ties resolve warm, then cool, then neutral.
pub fn analyze_temperature(
    colors: &[impl AsRef<str>],
) -> Result<TemperatureProfile, InvalidColorFormat> {
    let mut warm = 0;
    let mut cool = 0;
    let mut neutral = 0;

    for color in parse_all(colors)? {
        match classify_temperature(color.to_hsl().hue) {
            Temperature::Warm => warm += 1,
            Temperature::Cool => cool += 1,
            Temperature::Neutral => neutral += 1,
        }
    }

    let dominant = if warm >= cool && warm >= neutral {
        Temperature::Warm
    } else if cool >= neutral {
        Temperature::Cool
    } else {
        Temperature::Neutral
    };

    Ok(TemperatureProfile {
        dominant,
        warm,
        cool,
        neutral,
    })
}

/// Run the full harmony analysis: scheme, balance, temperature, and the
/// issue scan over adjacent pairs and channel spreads.
pub fn analyze_harmony(colors: &[impl AsRef<str>]) -> Result<HarmonyReport, InvalidColorFormat> {
    let parsed = parse_all(colors)?;

    let scheme = detect_scheme(colors)?;
    let balance = analyze_balance(colors)?;
    let temperature = analyze_temperature(colors)?;

    let mut issues = Vec::new();
    for pair in parsed.windows(2) {
        let ratio = contrast_ratio_of(&pair[0], &pair[1]);
        if ratio < LOW_CONTRAST_RATIO {
            issues.push(HarmonyIssue::LowContrast {
                colors: [pair[0], pair[1]],
                ratio,
            });
        }
    }

    if balance.lightness.std_dev > UNBALANCED_STD_DEV {
        issues.push(HarmonyIssue::UnbalancedLightness {
            std_dev: balance.lightness.std_dev,
        });
    }
    if balance.saturation.std_dev > UNBALANCED_STD_DEV {
        issues.push(HarmonyIssue::UnbalancedSaturation {
            std_dev: balance.saturation.std_dev,
        });
    }

    Ok(HarmonyReport {
        scheme,
        balance,
        temperature,
        issues,
    })
}

/// The arc of the hue wheel the sorted hues occupy: 360° minus the
/// largest gap between circularly consecutive hues.
fn hue_spread(sorted: &[Component]) -> Component {
    let mut largest_gap = 360.0 - (sorted[sorted.len() - 1] - sorted[0]);
    for pair in sorted.windows(2) {
        largest_gap = largest_gap.max(pair[1] - pair[0]);
    }
    360.0 - largest_gap
}

fn classify_temperature(hue: Component) -> Temperature {
    if (0.0..=60.0).contains(&hue) {
        Temperature::Warm
    } else if (180.0..=240.0).contains(&hue) {
        Temperature::Cool
    } else {
        Temperature::Neutral
    }
}

fn channel_stats(values: &[Component]) -> ChannelStats {
    if values.is_empty() {
        return ChannelStats {
            mean: 0.0,
            std_dev: 0.0,
            range: 0.0,
        };
    }

    let n = values.len() as Component;
    let mean = values.iter().sum::<Component>() / n;
    let variance = values.iter().map(|v| (v - mean) * (v - mean)).sum::<Component>() / n;

    let min = values.iter().copied().fold(Component::INFINITY, Component::min);
    let max = values.iter().copied().fold(Component::NEG_INFINITY, Component::max);

    ChannelStats {
        mean,
        std_dev: variance.sqrt(),
        range: max - min,
    }
}
