//! Property tests over randomly drawn colors and palettes.

use palette_lab::{compliance, harmony, metrics, Color, Rgb};
use proptest::prelude::*;

/// Strategy for an arbitrary 8-bit RGB color.
fn any_rgb() -> impl Strategy<Value = Rgb> {
    (any::<u8>(), any::<u8>(), any::<u8>()).prop_map(|(r, g, b)| Rgb::new(r, g, b))
}

/// Strategy for an arbitrary `#RRGGBB` hex string.
fn any_hex() -> impl Strategy<Value = String> {
    any_rgb().prop_map(|rgb| Color::from(rgb).to_hex())
}

/// Strategy for a small palette of hex strings.
fn any_palette() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(any_hex(), 0..6)
}

proptest! {
    #[test]
    fn hex_parsing_round_trips(rgb in any_rgb()) {
        let hex = Color::from(rgb).to_hex();
        let parsed = Color::parse(&hex).unwrap();
        prop_assert_eq!(parsed.rgb(), rgb);
        prop_assert_eq!(parsed.to_hex(), hex);
    }

    #[test]
    fn hsl_and_hsv_round_trip_exactly(rgb in any_rgb()) {
        prop_assert_eq!(rgb.to_hsl().to_rgb(), rgb);
        prop_assert_eq!(rgb.to_hsv().to_rgb(), rgb);
    }

    #[test]
    fn lab_round_trip_stays_within_one_unit(rgb in any_rgb()) {
        let once = rgb.to_lab().to_rgb();
        let twice = once.to_lab().to_rgb();
        prop_assert!(once.red.abs_diff(twice.red) <= 1);
        prop_assert!(once.green.abs_diff(twice.green) <= 1);
        prop_assert!(once.blue.abs_diff(twice.blue) <= 1);
    }

    #[test]
    fn luminance_is_bounded(hex in any_hex()) {
        let luminance = metrics::relative_luminance(&hex).unwrap();
        prop_assert!((0.0..=1.0).contains(&luminance));
    }

    #[test]
    fn contrast_ratio_is_bounded_and_symmetric(a in any_hex(), b in any_hex()) {
        let forward = metrics::contrast_ratio(&a, &b).unwrap();
        let backward = metrics::contrast_ratio(&b, &a).unwrap();
        prop_assert!((1.0..=21.0).contains(&forward));
        prop_assert!((forward - backward).abs() < 1e-6);
    }

    #[test]
    fn contrast_with_self_is_one(hex in any_hex()) {
        let ratio = metrics::contrast_ratio(&hex, &hex).unwrap();
        prop_assert!((ratio - 1.0).abs() < 1e-6);
    }

    #[test]
    fn color_difference_is_symmetric_with_zero_identity(a in any_hex(), b in any_hex()) {
        let forward = metrics::color_difference(&a, &b).unwrap();
        let backward = metrics::color_difference(&b, &a).unwrap();
        prop_assert!(forward >= 0.0);
        prop_assert!((forward - backward).abs() < 1e-4);
        prop_assert!(metrics::color_difference(&a, &a).unwrap() == 0.0);
    }

    #[test]
    fn per_color_scores_stay_in_range(hex in any_hex()) {
        prop_assert!((0.0..=1.0).contains(&metrics::brightness(&hex).unwrap()));
        prop_assert!((0.0..=1.0).contains(&metrics::saturation(&hex).unwrap()));
        prop_assert!((-1.0..=1.0).contains(&metrics::temperature(&hex).unwrap()));
        prop_assert!((0.0..=1.0).contains(&metrics::complexity(&hex).unwrap()));
        prop_assert!((0.0..=1.0).contains(&metrics::weight(&hex).unwrap()));
        prop_assert!((0.0..=1.0).contains(&metrics::energy(&hex).unwrap()));
    }

    #[test]
    fn dominance_shares_sum_to_one_or_zero(palette in any_palette()) {
        let mut total = 0.0;
        for hex in &palette {
            total += metrics::dominance(hex, &palette).unwrap();
        }
        prop_assert!(total.abs() < 1e-4 || (total - 1.0).abs() < 1e-4);
    }

    #[test]
    fn palette_score_is_bounded(palette in any_palette()) {
        let score = compliance::palette_score(&palette).unwrap();
        prop_assert!((0.0..=10.0).contains(&score));
    }

    #[test]
    fn palette_report_is_consistent(palette in any_palette()) {
        let report = compliance::check_palette(&palette).unwrap();
        let n = palette.len();
        prop_assert_eq!(report.combinations.len(), n * n.saturating_sub(1) / 2);
        let all_aa = report.combinations.iter().all(|pair| pair.result.passes_aa);
        let all_aaa = report.combinations.iter().all(|pair| pair.result.passes_aaa);
        prop_assert_eq!(report.wcag_aa, all_aa);
        prop_assert_eq!(report.wcag_aaa, all_aaa);
        let failing = report
            .combinations
            .iter()
            .filter(|pair| !pair.result.passes_aa)
            .count();
        prop_assert_eq!(report.recommendations.len(), failing);
    }

    #[test]
    fn suggestions_pass_exactly_when_aa_passes(fg in any_hex(), bg in any_hex()) {
        let ratio = metrics::contrast_ratio(&fg, &bg).unwrap();
        match compliance::contrast_suggestions(&fg, &bg).unwrap() {
            compliance::Suggestion::Pass { .. } => prop_assert!(ratio >= compliance::WCAG_AA),
            compliance::Suggestion::Adjust { darker, lighter } => {
                prop_assert!(ratio < compliance::WCAG_AA);
                prop_assert!((1.0..=21.0).contains(&darker.ratio));
                prop_assert!((1.0..=21.0).contains(&lighter.ratio));
            }
        }
    }

    #[test]
    fn harmony_always_classifies(palette in any_palette()) {
        // Any valid palette gets a scheme and finite statistics.
        let report = harmony::analyze_harmony(&palette).unwrap();
        prop_assert!(report.balance.lightness.std_dev.is_finite());
        prop_assert!(report.balance.saturation.std_dev.is_finite());
        let profile = report.temperature;
        prop_assert_eq!(profile.warm + profile.cool + profile.neutral, palette.len());
    }

    #[test]
    fn malformed_hex_is_rejected_everywhere(junk in "[^0-9a-fA-F#]{1,8}") {
        prop_assert!(Color::parse(&junk).is_err());
        prop_assert!(metrics::relative_luminance(&junk).is_err());
        prop_assert!(compliance::check_contrast(&junk, "#FFFFFF").is_err());
    }
}
