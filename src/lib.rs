//! palette-lab provides the color primitives and accessibility analysis
//! needed to vet generated color palettes: color space conversions,
//! perceptual metrics, harmony classification, and WCAG 2.1 / Section 508
//! compliance checks.
//!
//! Colors enter as `#RRGGBB` or `#RGB` hex strings (case-insensitive,
//! `#` optional) and every operation rejects malformed input with
//! [`InvalidColorFormat`] instead of defaulting. All operations are pure
//! functions without shared state; palette-wide checks are O(n²) in the
//! palette size.

#![deny(missing_docs)]

mod color;
mod convert;
mod hsl;
mod hsv;
mod lab;
mod math;
mod rgb;
mod xyz;

pub mod compliance;
pub mod harmony;
pub mod metrics;


pub use color::{Color, Component, InvalidColorFormat};
pub use hsl::Hsl;
pub use hsv::Hsv;
pub use lab::Lab;
pub use rgb::Rgb;
pub use xyz::Xyz;
