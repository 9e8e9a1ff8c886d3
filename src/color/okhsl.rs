//! Perceptually uniform OKHSL <-> sRGB conversion.
//!
//! Port of Björn Ottosson's published OKHSL pipeline: linear sRGB is mapped
//! through a 3x3 transform and cube-root nonlinearity into Oklab, the
//! lightness channel is remapped by the closed-form "toe" function, and
//! saturation is mapped to chroma through two piecewise-rational segments
//! anchored at three reference chroma values (C0, CMid, CMax) derived from
//! the sRGB gamut boundary for the hue in question.
//!
//! The gamut cusp is located with a polynomial approximation refined by a
//! single Halley step, keeping every conversion O(1) so callers can afford
//! per-pixel invocation. Downstream gamut search is numerically sensitive;
//! the matrix coefficients below must not be rearranged or truncated.

use crate::models::RgbColor;

const K1: f64 = 0.206;
const K2: f64 = 0.03;
const K3: f64 = (1.0 + K1) / (1.0 + K2);

fn srgb_transfer(a: f64) -> f64 {
    if a <= 0.003_130_8 {
        12.92 * a
    } else {
        1.055 * a.powf(1.0 / 2.4) - 0.055
    }
}

fn srgb_transfer_inv(a: f64) -> f64 {
    if a <= 0.04045 {
        a / 12.92
    } else {
        ((a + 0.055) / 1.055).powf(2.4)
    }
}

/// Converts linear sRGB channels to an Oklab (L, a, b) triple.
#[must_use]
pub fn linear_srgb_to_oklab(r: f64, g: f64, b: f64) -> [f64; 3] {
    let l = 0.412_221_470_8 * r + 0.536_332_536_3 * g + 0.051_445_992_9 * b;
    let m = 0.211_903_498_2 * r + 0.680_699_545_1 * g + 0.107_396_956_6 * b;
    let s = 0.088_302_461_9 * r + 0.281_718_837_6 * g + 0.629_978_700_5 * b;

    let l_ = l.cbrt();
    let m_ = m.cbrt();
    let s_ = s.cbrt();

    [
        0.210_454_255_3 * l_ + 0.793_617_785 * m_ - 0.004_072_046_8 * s_,
        1.977_998_495_1 * l_ - 2.428_592_205 * m_ + 0.450_593_709_9 * s_,
        0.025_904_037_1 * l_ + 0.782_771_766_2 * m_ - 0.808_675_766 * s_,
    ]
}

/// Converts an Oklab (L, a, b) triple to linear sRGB channels.
#[must_use]
pub fn oklab_to_linear_srgb(l_lab: f64, a: f64, b: f64) -> [f64; 3] {
    let l_ = l_lab + 0.396_337_777_4 * a + 0.215_803_757_3 * b;
    let m_ = l_lab - 0.105_561_345_8 * a - 0.063_854_172_8 * b;
    let s_ = l_lab - 0.089_484_177_5 * a - 1.291_485_548 * b;

    let l = l_ * l_ * l_;
    let m = m_ * m_ * m_;
    let s = s_ * s_ * s_;

    [
        4.076_741_662_1 * l - 3.307_711_591_3 * m + 0.230_969_929_2 * s,
        -1.268_438_004_6 * l + 2.609_757_401_1 * m - 0.341_319_396_5 * s,
        -0.004_196_086_3 * l - 0.703_418_614_7 * m + 1.707_614_701 * s,
    ]
}

/// Perceptual lightness remap (Oklab L -> OKHSL l).
///
/// Closed-form quadratic solution; exact inverse of [`toe_inv`] within
/// floating tolerance.
#[must_use]
pub fn toe(x: f64) -> f64 {
    0.5 * (K3 * x - K1 + ((K3 * x - K1) * (K3 * x - K1) + 4.0 * K2 * K3 * x).sqrt())
}

/// Algebraic inverse of [`toe`] (OKHSL l -> Oklab L).
#[must_use]
pub fn toe_inv(x: f64) -> f64 {
    (x * x + K1 * x) / (K3 * (x + K2))
}

/// Maximum saturation (S = C/L) representable in sRGB for a normalized
/// chroma direction. `a` and `b` must satisfy `a^2 + b^2 == 1`.
fn compute_max_saturation(a: f64, b: f64) -> f64 {
    // Max saturation is reached when one of r, g or b goes below zero.
    // Select the channel-specific polynomial coefficients first.
    let (k0, k1, k2, k3, k4, wl, wm, ws) = if -1.881_703_28 * a - 0.809_364_93 * b > 1.0 {
        // Red component
        (
            1.190_862_77,
            1.765_767_28,
            0.596_626_41,
            0.755_151_97,
            0.567_712_45,
            4.076_741_662_1,
            -3.307_711_591_3,
            0.230_969_929_2,
        )
    } else if 1.814_441_04 * a - 1.194_452_76 * b > 1.0 {
        // Green component
        (
            0.739_565_15,
            -0.459_544_04,
            0.082_854_27,
            0.125_410_7,
            0.145_032_04,
            -1.268_438_004_6,
            2.609_757_401_1,
            -0.341_319_396_5,
        )
    } else {
        // Blue component
        (
            1.357_336_52,
            -0.009_157_99,
            -1.151_302_1,
            -0.505_596_06,
            0.006_921_67,
            -0.004_196_086_3,
            -0.703_418_614_7,
            1.707_614_701,
        )
    };

    // Polynomial approximation of max saturation
    let mut sat = k0 + k1 * a + k2 * b + k3 * a * a + k4 * a * b;

    // One step of Halley's method. The approximation is least accurate at
    // the sRGB cube's edges, and this step is what keeps the cusp stable
    // there -- do not skip it, and do not iterate further.
    let kl = 0.396_337_777_4 * a + 0.215_803_757_3 * b;
    let km = -0.105_561_345_8 * a - 0.063_854_172_8 * b;
    let ks = -0.089_484_177_5 * a - 1.291_485_548 * b;

    {
        let l_ = 1.0 + sat * kl;
        let m_ = 1.0 + sat * km;
        let s_ = 1.0 + sat * ks;

        let l = l_ * l_ * l_;
        let m = m_ * m_ * m_;
        let s = s_ * s_ * s_;

        let l_ds = 3.0 * kl * l_ * l_;
        let m_ds = 3.0 * km * m_ * m_;
        let s_ds = 3.0 * ks * s_ * s_;

        let l_ds2 = 6.0 * kl * kl * l_;
        let m_ds2 = 6.0 * km * km * m_;
        let s_ds2 = 6.0 * ks * ks * s_;

        let f = wl * l + wm * m + ws * s;
        let f1 = wl * l_ds + wm * m_ds + ws * s_ds;
        let f2 = wl * l_ds2 + wm * m_ds2 + ws * s_ds2;

        sat -= (f * f1) / (f1 * f1 - 0.5 * f * f2);
    }

    sat
}

/// The gamut cusp (L, C) for a normalized chroma direction: the point of
/// maximum chroma still representable in sRGB for that hue.
fn find_cusp(a: f64, b: f64) -> (f64, f64) {
    let s_cusp = compute_max_saturation(a, b);

    // Rescale so the brightest channel touches 1
    let rgb_at_max = oklab_to_linear_srgb(1.0, s_cusp * a, s_cusp * b);
    let l_cusp = (1.0 / rgb_at_max[0].max(rgb_at_max[1]).max(rgb_at_max[2])).cbrt();
    let c_cusp = l_cusp * s_cusp;

    (l_cusp, c_cusp)
}

/// Intersection parameter of the line from (L0, 0) towards (L1, C1) with
/// the triangular approximation of the gamut boundary.
fn find_gamut_intersection(l1: f64, c1: f64, l0: f64, cusp: (f64, f64)) -> f64 {
    let (cusp_l, cusp_c) = cusp;

    if (l1 - l0) * cusp_c - (cusp_l - l0) * c1 <= 0.0 {
        // Lower half
        cusp_c * l0 / (c1 * cusp_l + cusp_c * (l0 - l1))
    } else {
        // Upper half
        cusp_c * (l0 - 1.0) / (c1 * (cusp_l - 1.0) + cusp_c * (l0 - l1))
    }
}

fn st_max(cusp: (f64, f64)) -> (f64, f64) {
    let (l, c) = cusp;
    (c / l, c / (1.0 - l))
}

/// Polynomial fit of the mid-range ST values (S = C/L, T = C/(1-L)).
fn st_mid(a: f64, b: f64) -> (f64, f64) {
    let s = 0.115_169_93
        + 1.0
            / (7.447_789_7
                + 4.159_012_4 * b
                + a * (-2.195_573_47
                    + 1.751_984_01 * b
                    + a * (-2.137_049_48 - 10.023_010_43 * b
                        + a * (-4.248_945_61 + 5.387_708_19 * b + 4.698_910_13 * a))));

    let t = 0.112_396_42
        + 1.0
            / (1.613_203_2 - 0.681_243_79 * b
                + a * (0.403_706_12
                    + 0.901_481_23 * b
                    + a * (-0.270_879_43 + 0.612_239_9 * b
                        + a * (0.002_992_15 - 0.453_995_68 * b - 0.146_618_72 * a))));

    (s, t)
}

/// The three reference chroma values (C0, CMid, CMax) that partition the
/// saturation range for a given lightness and chroma direction.
fn get_cs(l: f64, a: f64, b: f64) -> (f64, f64, f64) {
    let cusp = find_cusp(a, b);

    let c_max = find_gamut_intersection(l, 1.0, l, cusp);
    let (s_max, t_max) = st_max(cusp);
    let (s_mid, t_mid) = st_mid(a, b);

    // Scale factor to compensate for the curved part of the gamut
    let k = c_max / (l * s_max).min((1.0 - l) * t_max);

    let c_mid = {
        let c_a = l * s_mid;
        let c_b = (1.0 - l) * t_mid;
        0.9 * k * (1.0 / (1.0 / (c_a * c_a * c_a * c_a) + 1.0 / (c_b * c_b * c_b * c_b))).sqrt().sqrt()
    };

    let c_0 = {
        let c_a = l * 0.4;
        let c_b = (1.0 - l) * 0.8;
        (1.0 / (1.0 / (c_a * c_a) + 1.0 / (c_b * c_b))).sqrt()
    };

    (c_0, c_mid, c_max)
}

/// Converts an OKHSL triple (hue in turns) to sRGB.
#[must_use]
pub fn okhsl_to_srgb(h: f64, s: f64, l: f64) -> RgbColor {
    // Black and white short-circuit: the chroma-segment division becomes
    // degenerate as CMid/C0 approach zero at the endpoints.
    if l == 0.0 {
        return RgbColor::new(0, 0, 0);
    }
    if l == 1.0 {
        return RgbColor::new(255, 255, 255);
    }

    // Grayscale has no meaningful hue direction
    let (a, b) = if s == 0.0 {
        (1.0, 0.0)
    } else {
        ((2.0 * std::f64::consts::PI * h).cos(), (2.0 * std::f64::consts::PI * h).sin())
    };
    let l_lab = toe_inv(l);

    if l_lab < 1e-4 {
        return RgbColor::new(0, 0, 0);
    }

    let (c_0, c_mid, c_max) = get_cs(l_lab, a, b);

    // Two piecewise-rational segments over saturation
    let (t, k0, k1, k2) = if s < 0.8 {
        let k1 = 0.8 * c_0;
        (1.25 * s, 0.0, k1, 1.0 - k1 / c_mid)
    } else {
        let k1 = 0.2 * c_mid * c_mid * 1.25 * 1.25 / c_0;
        (5.0 * (s - 0.8), c_mid, k1, 1.0 - k1 / (c_max - c_mid))
    };

    let c = k0 + t * k1 / (1.0 - k2 * t);

    let rgb = oklab_to_linear_srgb(l_lab, c * a, c * b);
    RgbColor::from_f64(
        255.0 * srgb_transfer(rgb[0]),
        255.0 * srgb_transfer(rgb[1]),
        255.0 * srgb_transfer(rgb[2]),
    )
}

/// Converts an sRGB color to an OKHSL triple (hue in turns).
#[must_use]
pub fn srgb_to_okhsl(rgb: RgbColor) -> (f64, f64, f64) {
    // Exact endpoints report zero hue and saturation
    if rgb == RgbColor::new(0, 0, 0) {
        return (0.0, 0.0, 0.0);
    }
    if rgb == RgbColor::new(255, 255, 255) {
        return (0.0, 0.0, 1.0);
    }

    let lab = linear_srgb_to_oklab(
        srgb_transfer_inv(f64::from(rgb.r) / 255.0),
        srgb_transfer_inv(f64::from(rgb.g) / 255.0),
        srgb_transfer_inv(f64::from(rgb.b) / 255.0),
    );

    let c = (lab[1] * lab[1] + lab[2] * lab[2]).sqrt();
    let (a, b) = if c > 0.0 { (lab[1] / c, lab[2] / c) } else { (1.0, 0.0) };

    let l_lab = lab[0];
    let h = 0.5 + 0.5 * (-lab[2]).atan2(-lab[1]) / std::f64::consts::PI;

    let (c_0, c_mid, c_max) = get_cs(l_lab, a, b);

    let s = if c < c_mid {
        let k1 = 0.8 * c_0;
        let k2 = 1.0 - k1 / c_mid;
        let t = c / (k1 + k2 * c);
        t * 0.8
    } else {
        let k0 = c_mid;
        let k1 = 0.2 * c_mid * c_mid * 1.25 * 1.25 / c_0;
        let k2 = 1.0 - k1 / (c_max - c_mid);
        let t = (c - k0) / (k1 + k2 * (c - k0));
        0.8 + 0.2 * t
    };

    (h, s, toe(l_lab))
}

/// Converts an OKHSL triple directly to a canonical hex string.
#[must_use]
pub fn okhsl_to_hex(h: f64, s: f64, l: f64) -> String {
    okhsl_to_srgb(h, s, l).to_hex()
}

/// Decodes a hex string into an OKHSL triple, `None` on malformed input.
#[must_use]
pub fn hex_to_okhsl(hex: &str) -> Option<(f64, f64, f64)> {
    Some(srgb_to_okhsl(RgbColor::parse_hex(hex)?))
}
