//! Accessibility compliance checks: WCAG 2.1 contrast verdicts over color
//! pairs and palettes, contrast repair suggestions, and Section 508 checks
//! with a pluggable color-vision simulation seam.

use bitflags::bitflags;

use crate::color::{parse_all, Color, Component, InvalidColorFormat};
use crate::metrics::{contrast_ratio_of, MIN_DISTINCT_DIFFERENCE};
use crate::rgb::Rgb;

/// WCAG 2.1 minimum contrast ratio for normal text at level AA.
pub const WCAG_AA: Component = 4.5;
/// WCAG 2.1 minimum contrast ratio for large text at level AA.
pub const WCAG_AA_LARGE: Component = 3.0;
/// WCAG 2.1 minimum contrast ratio for normal text at level AAA.
pub const WCAG_AAA: Component = 7.0;
/// WCAG 2.1 minimum contrast ratio for large text at level AAA.
pub const WCAG_AAA_LARGE: Component = 4.5;

/// Section 508 minimum contrast ratio.
pub const SECTION_508_MIN: Component = 4.5;
/// Section 508 recommended contrast ratio.
pub const SECTION_508_RECOMMENDED: Component = 5.0;

/// How far the lightness of a failing foreground is nudged, in percentage
/// points, when proposing alternatives.
const SUGGESTION_LIGHTNESS_STEP: Component = 10.0;

/// The WCAG verdicts for a single foreground/background pair.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContrastResult {
    /// The contrast ratio, in [1, 21].
    pub ratio: Component,
    /// Whether the pair meets AA for normal text (ratio >= 4.5).
    pub passes_aa: bool,
    /// Whether the pair meets AA for large text (ratio >= 3.0).
    pub passes_aa_large: bool,
    /// Whether the pair meets AAA for normal text (ratio >= 7.0).
    pub passes_aaa: bool,
    /// Whether the pair meets AAA for large text (ratio >= 4.5).
    pub passes_aaa_large: bool,
}

impl ContrastResult {
    fn from_ratio(ratio: Component) -> Self {
        Self {
            ratio,
            passes_aa: ratio >= WCAG_AA,
            passes_aa_large: ratio >= WCAG_AA_LARGE,
            passes_aaa: ratio >= WCAG_AAA,
            passes_aaa_large: ratio >= WCAG_AAA_LARGE,
        }
    }
}

/// The contrast verdict for one pair of palette colors.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PairResult {
    /// The pair, in palette order.
    pub colors: [Color; 2],
    /// The WCAG verdicts for the pair.
    pub result: ContrastResult,
}

/// The WCAG verdict over an entire palette.
#[derive(Clone, Debug, PartialEq)]
pub struct PaletteReport {
    /// Every distinct pair of palette colors with its verdict. Each
    /// unordered pair appears once; the ratio is symmetric.
    pub combinations: Vec<PairResult>,
    /// Whether every pair meets AA for normal text.
    pub wcag_aa: bool,
    /// Whether every pair meets AAA for normal text.
    pub wcag_aaa: bool,
    /// Human-readable advice for each pair that fails AA.
    pub recommendations: Vec<String>,
}

/// A proposed replacement foreground with its resulting contrast.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Candidate {
    /// The adjusted foreground color.
    pub color: Color,
    /// Its contrast ratio against the unchanged background.
    pub ratio: Component,
}

/// The outcome of asking for contrast suggestions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Suggestion {
    /// The pair already meets AA; no change needed.
    Pass {
        /// The contrast ratio of the original pair.
        ratio: Component,
    },
    /// The pair fails AA; two adjusted foregrounds to pick from.
    Adjust {
        /// The foreground with its lightness lowered.
        darker: Candidate,
        /// The foreground with its lightness raised.
        lighter: Candidate,
    },
}

/// Check one foreground/background pair against the WCAG 2.1 thresholds.
pub fn check_contrast(foreground: &str, background: &str) -> Result<ContrastResult, InvalidColorFormat> {
    let fg = Color::parse(foreground)?;
    let bg = Color::parse(background)?;
    Ok(ContrastResult::from_ratio(contrast_ratio_of(&fg, &bg)))
}

/// Check every pair of palette colors against the WCAG 2.1 thresholds.
///
/// O(n²) in the palette size. The palette-wide `wcag_aa` / `wcag_aaa`
/// verdicts hold vacuously for palettes with fewer than two colors.
pub fn check_palette(palette: &[impl AsRef<str>]) -> Result<PaletteReport, InvalidColorFormat> {
    let colors = parse_all(palette)?;

    let mut combinations = Vec::new();
    let mut recommendations = Vec::new();
    let mut wcag_aa = true;
    let mut wcag_aaa = true;

    for (i, a) in colors.iter().enumerate() {
        for b in &colors[i + 1..] {
            let result = ContrastResult::from_ratio(contrast_ratio_of(a, b));
            wcag_aa &= result.passes_aa;
            wcag_aaa &= result.passes_aaa;

            if !result.passes_aa {
                recommendations.push(format!(
                    "Colors {} and {} have a contrast ratio of {:.2}, which does not meet WCAG AA requirements ({}:1)",
                    a, b, result.ratio, WCAG_AA,
                ));
            }

            combinations.push(PairResult {
                colors: [*a, *b],
                result,
            });
        }
    }

    Ok(PaletteReport {
        combinations,
        wcag_aa,
        wcag_aaa,
        recommendations,
    })
}

/// Score a palette's overall contrast in [0, 10]: the mean over all pairs
/// of `min(10, ratio / 7 * 10)`. A pair tops out once it reaches AAA;
/// higher ratios add nothing. Fewer than two colors scores 0.
pub fn palette_score(palette: &[impl AsRef<str>]) -> Result<Component, InvalidColorFormat> {
    let colors = parse_all(palette)?;

    let mut total = 0.0;
    let mut pairs = 0usize;
    for (i, a) in colors.iter().enumerate() {
        for b in &colors[i + 1..] {
            let ratio = contrast_ratio_of(a, b);
            total += (ratio / WCAG_AAA * 10.0).min(10.0);
            pairs += 1;
        }
    }

    if pairs == 0 {
        return Ok(0.0);
    }

    Ok(total / pairs as Component)
}

/// Suggest foreground adjustments for a pair that fails AA.
///
/// A passing pair is reported as-is. For a failing pair the foreground's
/// HSL lightness is nudged down and up by 10 percentage points (clamped to
/// the valid range) and both candidates are reported with their ratios
/// against the unchanged background, leaving the choice to the caller.
pub fn contrast_suggestions(
    foreground: &str,
    background: &str,
) -> Result<Suggestion, InvalidColorFormat> {
    let fg = Color::parse(foreground)?;
    let bg = Color::parse(background)?;

    let ratio = contrast_ratio_of(&fg, &bg);
    if ratio >= WCAG_AA {
        return Ok(Suggestion::Pass { ratio });
    }

    let candidate = |amount: Component| {
        let color = Color::from(fg.to_hsl().nudge_lightness(amount).to_rgb());
        Candidate {
            ratio: contrast_ratio_of(&color, &bg),
            color,
        }
    };

    Ok(Suggestion::Adjust {
        darker: candidate(-SUGGESTION_LIGHTNESS_STEP),
        lighter: candidate(SUGGESTION_LIGHTNESS_STEP),
    })
}

bitflags! {
    /// The color-vision deficiency types a Section 508 check simulates.
    #[derive(Clone, Copy, Debug, Eq, PartialEq)]
    pub struct VisionTypes: u8 {
        /// Reduced sensitivity to red light.
        const PROTANOPIA = 1 << 0;
        /// Reduced sensitivity to green light.
        const DEUTERANOPIA = 1 << 1;
        /// Reduced sensitivity to blue light.
        const TRITANOPIA = 1 << 2;
        /// Complete absence of color vision.
        const ACHROMATOPSIA = 1 << 3;
    }
}

/// A single color-vision deficiency type.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum VisionType {
    /// Reduced sensitivity to red light.
    Protanopia,
    /// Reduced sensitivity to green light.
    Deuteranopia,
    /// Reduced sensitivity to blue light.
    Tritanopia,
    /// Complete absence of color vision.
    Achromatopsia,
}

impl VisionTypes {
    fn types(self) -> impl Iterator<Item = VisionType> {
        [
            (Self::PROTANOPIA, VisionType::Protanopia),
            (Self::DEUTERANOPIA, VisionType::Deuteranopia),
            (Self::TRITANOPIA, VisionType::Tritanopia),
            (Self::ACHROMATOPSIA, VisionType::Achromatopsia),
        ]
        .into_iter()
        .filter(move |(flag, _)| self.contains(*flag))
        .map(|(_, vision)| vision)
    }
}

/// Simulates how a color appears under a color-vision deficiency.
///
/// Returning `None` means the simulator cannot model the given type; the
/// corresponding distinguishability check is skipped for that type rather
/// than failed, so an incomplete simulator never produces false
/// violations.
pub trait VisionSimulator {
    /// The given color as seen under the given deficiency, or `None` when
    /// the simulation is unavailable.
    fn simulate(&self, color: Rgb, vision: VisionType) -> Option<Rgb>;
}

/// A simulator that models nothing: every distinguishability check is
/// skipped and the Section 508 verdict rests on contrast ratios alone.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoSimulation;

impl VisionSimulator for NoSimulation {
    fn simulate(&self, _color: Rgb, _vision: VisionType) -> Option<Rgb> {
        None
    }
}

/// A coarse linear channel-mix simulation of the four deficiency types.
///
/// This is a first-order approximation, not a physiological model; it is
/// good enough to catch palettes that collapse entirely under a given
/// deficiency.
#[derive(Clone, Copy, Debug, Default)]
pub struct ChannelMixSimulator;

impl VisionSimulator for ChannelMixSimulator {
    fn simulate(&self, color: Rgb, vision: VisionType) -> Option<Rgb> {
        let [r, g, b] = color.to_float();

        let mix = |v: Component| (v.clamp(0.0, 1.0) * 255.0).round() as u8;

        Some(match vision {
            VisionType::Protanopia => {
                let merged = mix(0.567 * r + 0.433 * g);
                Rgb::new(merged, merged, color.blue)
            }
            VisionType::Deuteranopia => {
                let merged = mix(0.558 * r + 0.442 * g);
                Rgb::new(merged, merged, color.blue)
            }
            VisionType::Tritanopia => {
                let merged = mix(0.375 * g + 0.625 * b);
                Rgb::new(color.red, merged, merged)
            }
            VisionType::Achromatopsia => {
                let gray = mix(0.299 * r + 0.587 * g + 0.114 * b);
                Rgb::new(gray, gray, gray)
            }
        })
    }
}

/// A Section 508 violation for one pair of palette colors.
#[derive(Clone, Debug, PartialEq)]
pub enum Section508Violation {
    /// A pair falls below the 4.5 minimum contrast ratio.
    InsufficientContrast {
        /// The pair, in palette order.
        colors: [Color; 2],
        /// Their contrast ratio.
        ratio: Component,
    },
    /// A pair becomes indistinguishable under a simulated deficiency.
    Indistinguishable {
        /// The pair, in palette order.
        colors: [Color; 2],
        /// The deficiency under which the pair collapses.
        vision: VisionType,
        /// The perceptual difference of the simulated pair.
        difference: Component,
    },
}

/// The Section 508 verdict over a palette.
#[derive(Clone, Debug, PartialEq)]
pub struct Section508Report {
    /// Whether every pair meets the 4.5 minimum and stays distinguishable
    /// under every simulated deficiency.
    pub passes: bool,
    /// Whether every pair also meets the 5.0 recommended ratio.
    pub meets_recommended: bool,
    /// Every detected violation, in palette order.
    pub violations: Vec<Section508Violation>,
}

/// Checks palettes against Section 508: the contrast minimum plus
/// distinguishability under simulated color-vision deficiencies.
///
/// The simulator is an extension point; the default [`NoSimulation`]
/// restricts the check to contrast ratios.
#[derive(Clone, Copy, Debug)]
pub struct Section508Checker<V = NoSimulation> {
    simulator: V,
    visions: VisionTypes,
}

impl Default for Section508Checker<NoSimulation> {
    fn default() -> Self {
        Self::new()
    }
}

impl Section508Checker<NoSimulation> {
    /// A checker without color-vision simulation.
    pub fn new() -> Self {
        Self {
            simulator: NoSimulation,
            visions: VisionTypes::empty(),
        }
    }
}

impl<V: VisionSimulator> Section508Checker<V> {
    /// A checker that also tests distinguishability under the given
    /// deficiency types, as modeled by the given simulator.
    pub fn with_simulator(simulator: V, visions: VisionTypes) -> Self {
        Self { simulator, visions }
    }

    /// Check every pair of palette colors.
    pub fn check(&self, palette: &[impl AsRef<str>]) -> Result<Section508Report, InvalidColorFormat> {
        let colors = parse_all(palette)?;

        let mut violations = Vec::new();
        let mut meets_recommended = true;

        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                let ratio = contrast_ratio_of(a, b);
                meets_recommended &= ratio >= SECTION_508_RECOMMENDED;
                if ratio < SECTION_508_MIN {
                    violations.push(Section508Violation::InsufficientContrast {
                        colors: [*a, *b],
                        ratio,
                    });
                }

                for vision in self.visions.types() {
                    let (Some(sim_a), Some(sim_b)) = (
                        self.simulator.simulate(a.rgb(), vision),
                        self.simulator.simulate(b.rgb(), vision),
                    ) else {
                        continue;
                    };

                    let difference = sim_a.to_lab().difference(&sim_b.to_lab());
                    if difference <= MIN_DISTINCT_DIFFERENCE {
                        violations.push(Section508Violation::Indistinguishable {
                            colors: [*a, *b],
                            vision,
                            difference,
                        });
                    }
                }
            }
        }

        Ok(Section508Report {
            passes: violations.is_empty(),
            meets_recommended: meets_recommended && violations.is_empty(),
            violations,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn contrast_thresholds_are_exact() {
        let result = check_contrast("#000000", "#FFFFFF").unwrap();
        assert_component_eq!(result.ratio, 21.0);
        assert!(result.passes_aa);
        assert!(result.passes_aa_large);
        assert!(result.passes_aaa);
        assert!(result.passes_aaa_large);

        // #757575 on white: ~4.61, between AA (4.5) and AAA (7.0).
        let result = check_contrast("#757575", "#FFFFFF").unwrap();
        assert!(result.passes_aa);
        assert!(result.passes_aaa_large);
        assert!(!result.passes_aaa);

        // #FF0000 on #00FFFF: ~3.19, large text only.
        let result = check_contrast("#FF0000", "#00FFFF").unwrap();
        assert!(!result.passes_aa);
        assert!(result.passes_aa_large);
    }

    #[test]
    fn identical_colors_fail_everything() {
        let result = check_contrast("#ABCDEF", "#ABCDEF").unwrap();
        assert_component_eq!(result.ratio, 1.0);
        assert!(!result.passes_aa_large);
    }

    #[test]
    fn palette_report_covers_each_pair_once() {
        let report = check_palette(&["#000000", "#FFFFFF", "#FF0000"]).unwrap();
        assert_eq!(report.combinations.len(), 3);
        // Black/white and red/black pass AA; red/white (~4.0) does not.
        assert!(!report.wcag_aa);
        assert!(!report.wcag_aaa);
        assert_eq!(report.recommendations.len(), 1);
        assert!(report.recommendations[0].contains("#FF0000"));
        assert!(report.recommendations[0].contains("WCAG AA"));
    }

    #[test]
    fn all_passing_palette_has_no_recommendations() {
        let report = check_palette(&["#000000", "#FFFFFF"]).unwrap();
        assert!(report.wcag_aa);
        assert!(report.wcag_aaa);
        assert!(report.recommendations.is_empty());
    }

    #[test]
    fn degenerate_palettes_pass_vacuously() {
        let report = check_palette(&["#123456"]).unwrap();
        assert!(report.combinations.is_empty());
        assert!(report.wcag_aa);
        assert!(report.wcag_aaa);
    }

    #[test]
    fn score_saturates_at_aaa() {
        // Black/white (21.0) caps at 10 despite tripling AAA.
        assert_component_eq!(palette_score(&["#000000", "#FFFFFF"]).unwrap(), 10.0);

        // Red/cyan: ratio ~3.19 scores ~4.56.
        let score = palette_score(&["#FF0000", "#00FFFF"]).unwrap();
        approx::assert_abs_diff_eq!(score, 4.5555, epsilon = 1.0e-3);

        assert_component_eq!(palette_score(&["#123456"]).unwrap(), 0.0);
    }

    #[test]
    fn score_grows_with_contrast() {
        let low = palette_score(&["#777777", "#888888"]).unwrap();
        let high = palette_score(&["#333333", "#EEEEEE"]).unwrap();
        assert!(low < high);
    }

    #[test]
    fn passing_pair_needs_no_suggestion() {
        match contrast_suggestions("#000000", "#FFFFFF").unwrap() {
            Suggestion::Pass { ratio } => assert_component_eq!(ratio, 21.0),
            other => panic!("expected a pass, got {other:?}"),
        }
    }

    #[test]
    fn failing_pair_gets_both_candidates() {
        // #757575 barely passes on white, so nudge it to a failing gray.
        match contrast_suggestions("#8E8E8E", "#FFFFFF").unwrap() {
            Suggestion::Adjust { darker, lighter } => {
                assert!(darker.ratio > lighter.ratio);
                // Darkening by 10 points is enough to reach AA here.
                assert!(darker.ratio >= WCAG_AA);
                let base = check_contrast("#8E8E8E", "#FFFFFF").unwrap().ratio;
                assert!(lighter.ratio < base);
            }
            other => panic!("expected an adjustment, got {other:?}"),
        }
    }

    #[test]
    fn suggestion_clamps_at_the_lightness_extremes() {
        // White foreground on white: the lighter candidate cannot go
        // further and stays white.
        match contrast_suggestions("#FFFFFF", "#FFFFFF").unwrap() {
            Suggestion::Adjust { darker, lighter } => {
                assert_eq!(lighter.color.to_hex(), "#FFFFFF");
                assert!(darker.ratio > 1.0);
            }
            other => panic!("expected an adjustment, got {other:?}"),
        }
    }

    #[test]
    fn section_508_contrast_only() {
        let checker = Section508Checker::new();

        let report = checker.check(&["#000000", "#FFFFFF"]).unwrap();
        assert!(report.passes);
        assert!(report.meets_recommended);
        assert!(report.violations.is_empty());

        // #757575/white: 4.61 meets the minimum but not the 5.0
        // recommendation.
        let report = checker.check(&["#757575", "#FFFFFF"]).unwrap();
        assert!(report.passes);
        assert!(!report.meets_recommended);

        let report = checker.check(&["#777777", "#888888"]).unwrap();
        assert!(!report.passes);
        assert!(matches!(
            report.violations[0],
            Section508Violation::InsufficientContrast { .. }
        ));
    }

    #[test]
    fn channel_mix_collapses_red_green_under_protanopia() {
        let checker =
            Section508Checker::with_simulator(ChannelMixSimulator, VisionTypes::PROTANOPIA);

        // 0.567 * 180 and 0.433 * 235 both merge to channel value 102,
        // so the pair collapses to the same olive.
        let report = checker.check(&["#B40000", "#00EB00"]).unwrap();
        assert!(report
            .violations
            .iter()
            .any(|v| matches!(v, Section508Violation::Indistinguishable { vision, .. }
                if *vision == VisionType::Protanopia)));
    }

    #[test]
    fn achromatopsia_merges_equal_luma_colors() {
        let checker =
            Section508Checker::with_simulator(ChannelMixSimulator, VisionTypes::ACHROMATOPSIA);

        // #C0C0C0 and a chromatic color with the same NTSC luma.
        let report = checker.check(&["#C0C0C0", "#D2B2D2"]).unwrap();
        assert!(report
            .violations
            .iter()
            .any(|v| matches!(v, Section508Violation::Indistinguishable { vision, .. }
                if *vision == VisionType::Achromatopsia)));
    }

    #[test]
    fn no_simulation_skips_distinguishability() {
        // The same near-luma pair raises no violation without a simulator:
        // their raw contrast is fine.
        let checker = Section508Checker::new();
        let report = checker.check(&["#000000", "#FF0000", "#FFFFFF"]).unwrap();
        // Red/white (~4.0) misses the minimum; black/red and black/white
        // pass it.
        assert!(!report.passes);
        assert_eq!(report.violations.len(), 1);
        assert!(matches!(
            report.violations[0],
            Section508Violation::InsufficientContrast { .. }
        ));
    }

    #[test]
    fn malformed_input_fails_every_check() {
        assert!(check_contrast("bad", "#FFFFFF").is_err());
        assert!(check_palette(&["#FF0000", "#GG0000"]).is_err());
        assert!(palette_score(&["#1234"]).is_err());
        assert!(contrast_suggestions("#FFFFFF", "").is_err());
        assert!(Section508Checker::new().check(&["zzz"]).is_err());
    }
}
