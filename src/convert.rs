//! Conversions between the color models. Each model has its own type and
//! conversions are only implemented where a direct path exists, keeping the
//! conversion routes explicit.
//!
//! RGB round-trips through HSL and HSV exactly: channels are held as floats
//! until the final rounding, so `hex -> HSL -> hex` reproduces the original
//! hex for every representable color. The Lab path is lossy under 8-bit
//! rounding; two round-trips stay within 1 unit per channel.

use crate::color::Color;
use crate::hsl::Hsl;
use crate::hsv::Hsv;
use crate::lab::Lab;
use crate::rgb::Rgb;
use crate::xyz::Xyz;

impl Rgb {
    /// Convert a color specified in the sRGB color space to the HSL
    /// notation.
    pub fn to_hsl(&self) -> Hsl {
        let (hue, saturation, lightness) = util::rgb_to_hsl(self.to_float());
        Hsl::new(hue, saturation * 100.0, lightness * 100.0)
    }

    /// Convert a color specified in the sRGB color space to the HSV
    /// notation.
    pub fn to_hsv(&self) -> Hsv {
        let (hue, saturation, value) = util::rgb_to_hsv(self.to_float());
        Hsv::new(hue, saturation * 100.0, value * 100.0)
    }

    /// Convert a color specified in the sRGB color space to CIE-Lab, via
    /// linear light and CIE-XYZ.
    pub fn to_lab(&self) -> Lab {
        Xyz::from_linear_srgb(self.to_linear_light()).into()
    }
}

impl Hsl {
    /// Convert this color from the HSL notation to the sRGB color space.
    pub fn to_rgb(&self) -> Rgb {
        let components = util::hsl_to_rgb((
            self.hue,
            self.saturation / 100.0,
            self.lightness / 100.0,
        ));
        util::to_channels(components)
    }
}

impl Hsv {
    /// Convert this color from the HSV notation to the sRGB color space.
    pub fn to_rgb(&self) -> Rgb {
        let components = util::hsv_to_rgb((
            self.hue,
            self.saturation / 100.0,
            self.value / 100.0,
        ));
        util::to_channels(components)
    }
}

impl Lab {
    /// Convert this color to the sRGB color space. Out-of-gamut components
    /// are clamped to the sRGB cube.
    pub fn to_rgb(&self) -> Rgb {
        Rgb::from_linear_light(self.to_xyz().to_linear_srgb())
    }
}

impl Color {
    /// This color in the HSL notation.
    pub fn to_hsl(&self) -> Hsl {
        self.rgb().to_hsl()
    }

    /// This color in the HSV notation.
    pub fn to_hsv(&self) -> Hsv {
        self.rgb().to_hsv()
    }

    /// This color in the CIE-Lab color space.
    pub fn to_lab(&self) -> Lab {
        self.rgb().to_lab()
    }
}

mod util {
    use crate::color::Component;
    use crate::math::{almost_zero, normalize_hue};
    use crate::rgb::Rgb;

    /// Round float channels in [0, 1] to 8-bit channels.
    pub fn to_channels([red, green, blue]: [Component; 3]) -> Rgb {
        let quantize = |v: Component| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        Rgb::new(quantize(red), quantize(green), quantize(blue))
    }

    /// Calculate the hue from RGB components and return it along with the
    /// min and max RGB values. Achromatic colors get a hue of 0.
    fn rgb_to_hue_with_min_max([red, green, blue]: [Component; 3]) -> (Component, Component, Component) {
        let max = red.max(green).max(blue);
        let min = red.min(green).min(blue);

        let delta = max - min;

        let hue = if delta != 0.0 {
            let sector = if max == red {
                (green - blue) / delta + if green < blue { 6.0 } else { 0.0 }
            } else if max == green {
                (blue - red) / delta + 2.0
            } else {
                (red - green) / delta + 4.0
            };
            normalize_hue(60.0 * sector)
        } else {
            0.0
        };

        (hue, min, max)
    }

    /// Convert from RGB notation to HSL notation. Channels in [0, 1],
    /// saturation and lightness returned in [0, 1].
    pub fn rgb_to_hsl(from: [Component; 3]) -> (Component, Component, Component) {
        let (hue, min, max) = rgb_to_hue_with_min_max(from);

        let lightness = (min + max) / 2.0;
        let delta = max - min;

        let saturation =
            if almost_zero(delta) || almost_zero(lightness) || almost_zero(1.0 - lightness) {
                0.0
            } else {
                (max - lightness) / lightness.min(1.0 - lightness)
            };

        (hue, saturation, lightness)
    }

    /// Convert from HSL notation to RGB notation.
    /// <https://drafts.csswg.org/css-color-4/#hsl-to-rgb>
    pub fn hsl_to_rgb((hue, saturation, lightness): (Component, Component, Component)) -> [Component; 3] {
        if saturation <= 0.0 {
            return [lightness, lightness, lightness];
        }

        let hue = normalize_hue(hue);

        let f = |n: Component| {
            let k = (n + hue / 30.0) % 12.0;
            let a = saturation * lightness.min(1.0 - lightness);
            lightness - a * (k - 3.0).min(9.0 - k).clamp(-1.0, 1.0)
        };

        [f(0.0), f(8.0), f(4.0)]
    }

    /// Convert from RGB notation to HSV notation. Channels in [0, 1],
    /// saturation and value returned in [0, 1].
    pub fn rgb_to_hsv(from: [Component; 3]) -> (Component, Component, Component) {
        let (hue, min, max) = rgb_to_hue_with_min_max(from);

        let saturation = if almost_zero(max) {
            0.0
        } else {
            (max - min) / max
        };

        (hue, saturation, max)
    }

    /// Convert from HSV notation to RGB notation.
    pub fn hsv_to_rgb((hue, saturation, value): (Component, Component, Component)) -> [Component; 3] {
        if saturation <= 0.0 {
            return [value, value, value];
        }

        let hue = normalize_hue(hue);

        let f = |n: Component| {
            let k = (n + hue / 60.0) % 6.0;
            value - value * saturation * k.min(4.0 - k).clamp(0.0, 1.0)
        };

        [f(5.0), f(3.0), f(1.0)]
    }
}
