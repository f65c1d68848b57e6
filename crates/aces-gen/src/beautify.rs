//! Name beautification.
//!
//! CTL file names use a compact encoding (`Rec709_100nits_dim`,
//! `RGBmonitor`) that makes for poor UI labels. Beautification rewrites
//! them into presentation names through an ordered list of regex
//! substitutions, one list per name kind:
//!
//! - **Colorspace names**: `Rec709_100nits_dim` becomes
//!   `Rec. 709 (100 nits) dim`
//! - **View names**: strip the nits qualifiers and the family prefix, so
//!   `Output - Rec. 709 (100 nits) dim` becomes `Rec. 709`
//! - **Display names**: whole genus matches, `rgbMonitor` becomes `sRGB`
//!
//! Rule order matters and is part of the output contract.

use std::sync::LazyLock;

use regex::Regex;

/// A single ordered substitution.
#[derive(Debug, Clone)]
pub struct SubstitutionRule {
    pattern: Regex,
    replacement: String,
}

impl SubstitutionRule {
    /// Compiles a substitution rule.
    pub fn new(pattern: &str, replacement: impl Into<String>) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
            replacement: replacement.into(),
        })
    }

    /// The pattern this rule matches.
    #[inline]
    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }

    /// The replacement text, may reference capture groups.
    #[inline]
    pub fn replacement(&self) -> &str {
        &self.replacement
    }
}

/// Applies an ordered list of substitutions and trims the result.
pub fn beautify_name(name: &str, rules: &[SubstitutionRule]) -> String {
    let mut current = name.to_string();
    for rule in rules {
        current = rule
            .pattern
            .replace_all(&current, rule.replacement.as_str())
            .into_owned();
    }
    current.trim().to_string()
}

fn compile_rules(pairs: &[(&str, &str)]) -> Vec<SubstitutionRule> {
    pairs
        .iter()
        .map(|(pattern, replacement)| {
            SubstitutionRule::new(pattern, *replacement).expect("substitution pattern compiles")
        })
        .collect()
}

static COLORSPACE_NAME_RULES: LazyLock<Vec<SubstitutionRule>> = LazyLock::new(|| {
    compile_rules(&[
        (r"ACES_(\d+)_(\d+)_(\d+)", "ACES $1.$2.$3"),
        (r"_7nits", ""),
        (r"_15nits", ""),
        (r"_", " "),
        (r"-raw", ""),
        (r"-", " "),
        (r"\b(\w+)limited\b", "($1 Limited)"),
        (r"\b(\d+)nits\b", "($1 nits)"),
        (r"RGBmonitor", "sRGB"),
        (r"D60sim", "D60 sim"),
        (r"D65sim", "D65 sim"),
        (r"Rec1886", "Rec. 1886"),
        (r"Rec709", "Rec. 709"),
        (r"Rec2020", "Rec. 2020"),
        (r"P3D60", "P3-D60"),
        (r"P3D65", "P3-D65"),
        (r"P3DCI", "P3-DCI"),
        (r"DolbyPQ", "Dolby PQ"),
    ])
});

static VIEW_NAME_RULES: LazyLock<Vec<SubstitutionRule>> = LazyLock::new(|| {
    compile_rules(&[
        (r"\(100 nits\) dim", ""),
        (r"\(100 nits\)", ""),
        (r"\(48 nits\)", ""),
        (r"Output - ", ""),
    ])
});

static DISPLAY_NAME_RULES: LazyLock<Vec<SubstitutionRule>> = LazyLock::new(|| {
    compile_rules(&[
        (r"(?i)^dcdm$", "DCDM"),
        (r"(?i)^p3$", "P3"),
        (r"(?i)^rec709$", "Rec.709"),
        (r"(?i)^rec2020$", "Rec.2020"),
        (r"(?i)^rgbmonitor$", "sRGB"),
        (r"(?i)^srgb$", "sRGB"),
        (r"(?i)^hdr$", "HDR"),
    ])
});

/// The ordered colorspace name substitutions.
pub fn colorspace_name_rules() -> &'static [SubstitutionRule] {
    &COLORSPACE_NAME_RULES
}

/// The ordered view name substitutions.
pub fn view_name_rules() -> &'static [SubstitutionRule] {
    &VIEW_NAME_RULES
}

/// The ordered display name substitutions.
pub fn display_name_rules() -> &'static [SubstitutionRule] {
    &DISPLAY_NAME_RULES
}

/// Beautifies a colorspace leaf name.
pub fn beautify_colorspace_name(name: &str) -> String {
    beautify_name(name, colorspace_name_rules())
}

/// Beautifies a view name derived from an output colorspace name.
pub fn beautify_view_name(name: &str) -> String {
    beautify_name(name, view_name_rules())
}

/// Beautifies a display name derived from an output transform genus.
pub fn beautify_display_name(name: &str) -> String {
    beautify_name(name, display_name_rules())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colorspace_names() {
        assert_eq!(beautify_colorspace_name("ACEScg"), "ACEScg");
        assert_eq!(
            beautify_colorspace_name("Rec709_100nits_dim"),
            "Rec. 709 (100 nits) dim"
        );
        assert_eq!(beautify_colorspace_name("ACES_0_1_1"), "ACES 0.1.1");
        assert_eq!(
            beautify_colorspace_name("RGBmonitor_100nits_dim"),
            "sRGB (100 nits) dim"
        );
        assert_eq!(beautify_colorspace_name("P3D60_48nits"), "P3-D60 (48 nits)");
        assert_eq!(
            beautify_colorspace_name("Rec2020_Rec709limited_100nits_dim"),
            "Rec. 2020 (Rec. 709 Limited) (100 nits) dim"
        );
        assert_eq!(
            beautify_colorspace_name("P3DCI_D60sim_48nits"),
            "P3-DCI D60 sim (48 nits)"
        );
    }

    #[test]
    fn test_view_names() {
        assert_eq!(
            beautify_view_name("Output - Rec. 709 (100 nits) dim"),
            "Rec. 709"
        );
        assert_eq!(beautify_view_name("Output - P3-D60 (48 nits)"), "P3-D60");
        assert_eq!(beautify_view_name("Utility - Raw"), "Utility - Raw");
    }

    #[test]
    fn test_view_names_are_idempotent() {
        let once = beautify_view_name("Output - Rec. 709 (100 nits) dim");
        assert_eq!(beautify_view_name(&once), once);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(beautify_display_name("rec709"), "Rec.709");
        assert_eq!(beautify_display_name("rgbMonitor"), "sRGB");
        assert_eq!(beautify_display_name("p3"), "P3");
        assert_eq!(beautify_display_name("dcdm"), "DCDM");
        assert_eq!(beautify_display_name("custom"), "custom");
    }

    #[test]
    fn test_custom_rules() {
        let rules = vec![
            SubstitutionRule::new(r"foo", "bar").expect("rule"),
            SubstitutionRule::new(r"\s+", " ").expect("rule"),
        ];
        assert_eq!(beautify_name("  foo   foo ", &rules), "bar bar");
    }

    #[test]
    fn test_rule_order_applies() {
        // The dim qualifier must strip before the bare nits qualifier,
        // otherwise " dim" is left behind.
        assert_eq!(
            beautify_view_name("Output - X (100 nits) dim"),
            "X"
        );
    }
}
