//! Registry of OCIO v2 `BuiltinTransform` styles.
//!
//! OpenColorIO ships native implementations for a fixed set of conversions
//! into ACES2065-1. Generated configs may only reference these styles in a
//! `BuiltinTransform`; every other conversion needs a placeholder.
//!
//! Style names are matched exactly. OpenColorIO does not implement the
//! reverse styles (`ACES2065-1_to_…`), those conversions are expressed by
//! inverting the forward builtin or, during generation, by a placeholder.

// ============================================================================
// ACES color space conversions
// ============================================================================

/// Styles of the builtin transforms OpenColorIO v2 implements natively.
pub const BUILTIN_TRANSFORM_STYLES: &[&str] = &[
    "IDENTITY",
    "ACEScc_to_ACES2065-1",
    "ACEScct_to_ACES2065-1",
    "ACEScg_to_ACES2065-1",
    "ACESproxy10i_to_ACES2065-1",
    "ADX10_to_ACES2065-1",
    "ADX16_to_ACES2065-1",
    "ARRI_ALEXA-LOGC-EI800-AWG_to_ACES2065-1",
    "CANON_CLOG2-CGAMUT_to_ACES2065-1",
    "CANON_CLOG3-CGAMUT_to_ACES2065-1",
    "PANASONIC_VLOG-VGAMUT_to_ACES2065-1",
    "RED_REDLOGFILM-RWG_to_ACES2065-1",
    "RED_LOG3G10-RWG_to_ACES2065-1",
    "SONY_SLOG3-SGAMUT3_to_ACES2065-1",
    "SONY_SLOG3-SGAMUT3.CINE_to_ACES2065-1",
];

/// Returns the styles OpenColorIO implements natively.
#[inline]
pub fn builtin_transform_styles() -> &'static [&'static str] {
    BUILTIN_TRANSFORM_STYLES
}

/// Checks whether a style has a native OpenColorIO implementation.
pub fn is_builtin_style(style: &str) -> bool {
    BUILTIN_TRANSFORM_STYLES.contains(&style)
}
