//! Independent format and range checks for fingerprints from any source.
//!
//! The validator only enforces the global per-field bounds. Whether a
//! fingerprint is plausible for its declared tier is a separate question,
//! answered by [`Fingerprint::has_valid_tier_characteristics`].

use crate::configs::Platform;
use crate::error::{ValidationError, ValidationErrorKind};
use crate::fingerprint::Fingerprint;
use crate::policy::{
    DEVICE_MEMORY_BOUNDS, DEVICE_PIXEL_RATIO_BOUNDS, HARDWARE_CONCURRENCY_BOUNDS, LOCALES,
    MAX_FONTS, MAX_LANGUAGES, NOISE_LEVEL_BOUNDS, SCREEN_HEIGHT_BOUNDS, SCREEN_WIDTH_BOUNDS,
    TIMEZONES,
};
use regex::Regex;
use std::fmt::Display;
use std::ops::RangeInclusive;

/// The Chromium family user-agent grammar.
pub const USER_AGENT_GRAMMAR: &str = r"^Mozilla/5\.0 \([^()]+\) AppleWebKit/\d+(?:\.\d+)* \(KHTML, like Gecko\) Chrome/\d+(?:\.\d+)* (?:Mobile )?Safari/\d+(?:\.\d+)*(?: (?:Edg|OPR)/\d+(?:\.\d+)*)?$";

lazy_static::lazy_static! {
    static ref USER_AGENT_MATCHER: Regex =
        Regex::new(USER_AGENT_GRAMMAR).expect("valid user-agent grammar");
}

/// Does the user-agent follow the browser grammar.
pub fn is_valid_user_agent(user_agent: &str) -> bool {
    USER_AGENT_MATCHER.is_match(user_agent)
}

/// The outcome of validating one fingerprint. Holds every violated rule.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationResult {
    /// No rule was violated.
    pub valid: bool,
    /// Violations in rule order.
    pub errors: Vec<ValidationError>,
}

impl ValidationResult {
    /// Build from the collected errors.
    pub fn from_errors(errors: Vec<ValidationError>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }

    /// Error messages in rule order.
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(|e| e.to_string()).collect()
    }

    /// Was a rule of this family violated.
    pub fn has_kind(&self, kind: ValidationErrorKind) -> bool {
        self.errors.iter().any(|e| e.kind() == kind)
    }
}

/// Check a fingerprint against every global rule. Never short-circuits.
pub fn validate_fingerprint(fingerprint: &Fingerprint) -> ValidationResult {
    let mut errors = Vec::new();

    if fingerprint.user_agent.is_empty() {
        errors.push(ValidationError::Empty { field: "userAgent" });
    } else if !is_valid_user_agent(&fingerprint.user_agent) {
        errors.push(ValidationError::UserAgentGrammar);
    }

    if fingerprint.platform.is_empty() {
        errors.push(ValidationError::Empty { field: "platform" });
    } else if fingerprint.platform.parse::<Platform>().is_err() {
        errors.push(ValidationError::NotAllowed {
            field: "platform",
            value: fingerprint.platform.clone(),
        });
    }

    check_range(
        "hardwareConcurrency",
        fingerprint.hardware_concurrency,
        &HARDWARE_CONCURRENCY_BOUNDS,
        &mut errors,
    );
    check_range(
        "deviceMemory",
        fingerprint.device_memory,
        &DEVICE_MEMORY_BOUNDS,
        &mut errors,
    );
    check_range(
        "screenWidth",
        fingerprint.screen_width,
        &SCREEN_WIDTH_BOUNDS,
        &mut errors,
    );
    check_range(
        "screenHeight",
        fingerprint.screen_height,
        &SCREEN_HEIGHT_BOUNDS,
        &mut errors,
    );
    check_range(
        "devicePixelRatio",
        fingerprint.device_pixel_ratio,
        &DEVICE_PIXEL_RATIO_BOUNDS,
        &mut errors,
    );

    check_allowed("timezone", &fingerprint.timezone, &TIMEZONES, &mut errors);
    check_allowed("locale", &fingerprint.locale, &LOCALES, &mut errors);

    check_sequence(
        "languages",
        fingerprint.languages.len(),
        MAX_LANGUAGES,
        &mut errors,
    );

    if fingerprint.webgl_unmasked_vendor.is_empty() {
        errors.push(ValidationError::Empty {
            field: "webGlUnmaskedVendor",
        });
    }
    if fingerprint.webgl_unmasked_renderer.is_empty() {
        errors.push(ValidationError::Empty {
            field: "webGlUnmaskedRenderer",
        });
    }

    check_range(
        "canvasNoiseLevel",
        fingerprint.canvas_noise_level,
        &NOISE_LEVEL_BOUNDS,
        &mut errors,
    );
    check_range(
        "audioNoiseLevel",
        fingerprint.audio_noise_level,
        &NOISE_LEVEL_BOUNDS,
        &mut errors,
    );

    check_sequence(
        "fontList",
        fingerprint.font_list.len(),
        MAX_FONTS,
        &mut errors,
    );

    // spoofTier needs no check: the type only admits the defined tiers.

    if !errors.is_empty() {
        log::debug!("fingerprint failed validation with {} errors", errors.len());
    }

    ValidationResult::from_errors(errors)
}

#[cfg(feature = "serde")]
/// Decode profile JSON and validate it. A decode failure is a single `InvalidFormat` error.
pub fn validate_fingerprint_json(text: &str) -> ValidationResult {
    match decode_validated(text) {
        Ok(_) => ValidationResult::from_errors(Vec::new()),
        Err(result) => result,
    }
}

#[cfg(feature = "serde")]
/// Decode profile JSON, handing back the fingerprint only when it validates.
pub fn decode_validated(text: &str) -> Result<Fingerprint, ValidationResult> {
    let fingerprint = Fingerprint::from_json(text).map_err(|e| {
        ValidationResult::from_errors(vec![ValidationError::InvalidFormat(e.to_string())])
    })?;

    let result = validate_fingerprint(&fingerprint);

    if result.valid {
        Ok(fingerprint)
    } else {
        Err(result)
    }
}

fn check_range<T: PartialOrd + Display>(
    field: &'static str,
    value: T,
    bounds: &RangeInclusive<T>,
    errors: &mut Vec<ValidationError>,
) {
    if !bounds.contains(&value) {
        errors.push(ValidationError::OutOfRange {
            field,
            value: value.to_string(),
            min: bounds.start().to_string(),
            max: bounds.end().to_string(),
        });
    }
}

fn check_allowed(
    field: &'static str,
    value: &str,
    allowlist: &phf::Set<&'static str>,
    errors: &mut Vec<ValidationError>,
) {
    if value.is_empty() {
        errors.push(ValidationError::Empty { field });
    } else if !allowlist.contains(value) {
        errors.push(ValidationError::NotAllowed {
            field,
            value: value.to_string(),
        });
    }
}

fn check_sequence(
    field: &'static str,
    len: usize,
    max: usize,
    errors: &mut Vec<ValidationError>,
) {
    if len == 0 {
        errors.push(ValidationError::Empty { field });
    } else if len > max {
        errors.push(ValidationError::TooMany { field, len, max });
    }
}
