//! Device RGB to CIEL\*a\*b\* conversion.
//!
//! Pipeline: gamma-compressed device RGB → linear RGB → CIE XYZ →
//! CIEL\*a\*b\*, and the inverse. The device is described by its
//! linear-RGB→XYZ matrix and reference white; the standard sRGB primaries
//! under D65 are built in, and a measured device matrix can be supplied in
//! their place.
//!
//! L\*a\*b\* is the perceptually uniform space: equal Euclidean distances
//! correspond to roughly equal perceived color differences, which is what
//! lets stimulus colors be picked at controlled perceptual separations.

use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};

use crate::error::StimulusError;

/// CIE 6/29 cube-root cutoff, 216/24389.
const CIE_EPSILON: f64 = 216.0 / 24389.0;

/// CIE linear-segment slope, 24389/27.
const CIE_KAPPA: f64 = 24389.0 / 27.0;

/// D65 reference white in XYZ, scaled to Y = 100.
const D65_WHITE: [f64; 3] = [95.047, 100.0, 108.883];

/// An 8-bit-per-channel device RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Create a color from individual channels.
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Unpack a `0xRRGGBB` integer.
    pub fn from_packed(packed: u32) -> Self {
        Self {
            r: ((packed >> 16) & 0xFF) as u8,
            g: ((packed >> 8) & 0xFF) as u8,
            b: (packed & 0xFF) as u8,
        }
    }

    /// Pack into a `0xRRGGBB` integer.
    pub fn to_packed(self) -> u32 {
        (u32::from(self.r) << 16) | (u32::from(self.g) << 8) | u32::from(self.b)
    }

    fn channels(self) -> Vector3<f64> {
        Vector3::new(
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        )
    }

    fn from_channels(channels: Vector3<f64>) -> Self {
        let quantize = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self {
            r: quantize(channels.x),
            g: quantize(channels.y),
            b: quantize(channels.z),
        }
    }
}

/// A color in the CIEL\*a\*b\* space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Lab {
    /// Lightness, 0 (black) to 100 (reference white).
    pub l: f64,
    /// Green–red opponent axis.
    pub a: f64,
    /// Blue–yellow opponent axis.
    pub b: f64,
}

impl Lab {
    /// Create a L\*a\*b\* color.
    pub fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Euclidean distance to another L\*a\*b\* color (CIE ΔE\*76).
    pub fn delta_e(&self, other: &Lab) -> f64 {
        let dl = self.l - other.l;
        let da = self.a - other.a;
        let db = self.b - other.b;
        (dl * dl + da * da + db * db).sqrt()
    }
}

/// Converter between a device's RGB space and CIEL\*a\*b\*.
#[derive(Debug, Clone)]
pub struct ColorConverter {
    rgb_to_xyz: Matrix3<f64>,
    xyz_to_rgb: Matrix3<f64>,
    white: Vector3<f64>,
}

impl ColorConverter {
    /// Converter for the standard sRGB device under D65.
    pub fn srgb() -> Self {
        // Linear sRGB -> XYZ (D65, 2° observer), rows X/Y/Z.
        let rgb_to_xyz = Matrix3::new(
            0.412_456_4, 0.357_576_1, 0.180_437_5, //
            0.212_672_9, 0.715_152_2, 0.072_175_0, //
            0.019_333_9, 0.119_192_0, 0.950_304_1,
        );
        // Published inverse, kept explicit so construction cannot fail.
        let xyz_to_rgb = Matrix3::new(
            3.240_454_2, -1.537_138_5, -0.498_531_4, //
            -0.969_266_0, 1.876_010_8, 0.041_556_0, //
            0.055_643_4, -0.204_025_9, 1.057_225_2,
        );
        Self {
            rgb_to_xyz,
            xyz_to_rgb,
            white: Vector3::from_row_slice(&D65_WHITE),
        }
    }

    /// Converter for a measured device.
    ///
    /// `rgb_to_xyz` maps linear device RGB in `[0, 1]` to XYZ scaled so the
    /// device white lands on `white` (Y = 100 scale).
    ///
    /// # Errors
    ///
    /// [`StimulusError::SingularMatrix`] when the matrix cannot be
    /// inverted, since the L\*a\*b\*→RGB direction needs the inverse.
    pub fn with_matrix(
        rgb_to_xyz: Matrix3<f64>,
        white: Vector3<f64>,
    ) -> Result<Self, StimulusError> {
        let xyz_to_rgb = rgb_to_xyz
            .try_inverse()
            .ok_or(StimulusError::SingularMatrix)?;
        Ok(Self {
            rgb_to_xyz,
            xyz_to_rgb,
            white,
        })
    }

    /// Convert a device RGB color to CIEL\*a\*b\*.
    pub fn rgb_to_lab(&self, rgb: Rgb) -> Lab {
        let linear = rgb.channels().map(compressed_to_linear);
        let xyz = self.rgb_to_xyz * linear * 100.0;
        self.xyz_to_lab(xyz)
    }

    /// Convert a CIEL\*a\*b\* color to device RGB.
    ///
    /// Out-of-gamut results clamp to the displayable range channel by
    /// channel.
    pub fn lab_to_rgb(&self, lab: Lab) -> Rgb {
        let xyz = self.lab_to_xyz(lab);
        let linear = self.xyz_to_rgb * (xyz / 100.0);
        Rgb::from_channels(linear.map(linear_to_compressed))
    }

    fn xyz_to_lab(&self, xyz: Vector3<f64>) -> Lab {
        let fx = lab_f(xyz.x / self.white.x);
        let fy = lab_f(xyz.y / self.white.y);
        let fz = lab_f(xyz.z / self.white.z);
        Lab {
            l: 116.0 * fy - 16.0,
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
        }
    }

    fn lab_to_xyz(&self, lab: Lab) -> Vector3<f64> {
        let fy = (lab.l + 16.0) / 116.0;
        let fx = fy + lab.a / 500.0;
        let fz = fy - lab.b / 200.0;

        let xr = lab_f_inv(fx);
        let yr = if lab.l > CIE_KAPPA * CIE_EPSILON {
            let t = (lab.l + 16.0) / 116.0;
            t * t * t
        } else {
            lab.l / CIE_KAPPA
        };
        let zr = lab_f_inv(fz);

        Vector3::new(xr * self.white.x, yr * self.white.y, zr * self.white.z)
    }
}

/// CIE forward companding function f(t).
fn lab_f(t: f64) -> f64 {
    if t > CIE_EPSILON {
        t.cbrt()
    } else {
        (CIE_KAPPA * t + 16.0) / 116.0
    }
}

/// Inverse of [`lab_f`].
fn lab_f_inv(t: f64) -> f64 {
    let cubed = t * t * t;
    if cubed > CIE_EPSILON {
        cubed
    } else {
        (116.0 * t - 16.0) / CIE_KAPPA
    }
}

/// sRGB transfer function: gamma-compressed channel to linear light.
fn compressed_to_linear(c: f64) -> f64 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// sRGB transfer function: linear light to gamma-compressed channel.
fn linear_to_compressed(c: f64) -> f64 {
    if c <= 0.003_130_8 {
        12.92 * c
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}
