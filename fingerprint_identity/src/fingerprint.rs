use crate::configs::SpoofTier;
use crate::policy::{TierPolicy, DEVICE_PIXEL_RATIO_BOUNDS};
use std::collections::BTreeSet;

/// One complete synthetic device fingerprint and the tier it was built for.
///
/// A fingerprint is a value: once generated it is never edited in place.
/// Replacing a profile's identity means building and validating a new one.
/// Every field but `spoofTier` defaults when absent from JSON so that a
/// missing attribute surfaces as a validation error instead of a parse error.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Fingerprint {
    /// `navigator.userAgent`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub user_agent: String,
    /// `navigator.platform`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub platform: String,
    /// `navigator.hardwareConcurrency`.
    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "decode::integer")
    )]
    pub hardware_concurrency: i64,
    /// `navigator.deviceMemory` in GB.
    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "decode::integer")
    )]
    pub device_memory: i64,
    /// `screen.width`.
    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "decode::integer")
    )]
    pub screen_width: i64,
    /// `screen.height`.
    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "decode::integer")
    )]
    pub screen_height: i64,
    /// `window.devicePixelRatio`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub device_pixel_ratio: f64,
    /// IANA timezone.
    #[cfg_attr(feature = "serde", serde(default))]
    pub timezone: String,
    /// Locale used for `Intl` and date formatting.
    #[cfg_attr(feature = "serde", serde(default))]
    pub locale: String,
    /// `navigator.languages`, most preferred first.
    #[cfg_attr(feature = "serde", serde(default))]
    pub languages: Vec<String>,
    /// `UNMASKED_VENDOR_WEBGL`.
    #[cfg_attr(
        feature = "serde",
        serde(default, rename = "webGlUnmaskedVendor")
    )]
    pub webgl_unmasked_vendor: String,
    /// `UNMASKED_RENDERER_WEBGL`.
    #[cfg_attr(
        feature = "serde",
        serde(default, rename = "webGlUnmaskedRenderer")
    )]
    pub webgl_unmasked_renderer: String,
    /// Probability a canvas pixel is perturbed on read.
    #[cfg_attr(feature = "serde", serde(default))]
    pub canvas_noise_level: f64,
    /// Width of the uniform perturbation applied to decoded audio samples.
    #[cfg_attr(feature = "serde", serde(default))]
    pub audio_noise_level: f64,
    /// Installed font families, kept sorted. Decoding rejects a list that
    /// names a family twice.
    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "decode::font_set")
    )]
    pub font_list: BTreeSet<String>,
    /// The tier the fingerprint claims.
    pub spoof_tier: SpoofTier,
}

impl Fingerprint {
    /// The policy row for the declared tier.
    pub fn policy(&self) -> &'static TierPolicy {
        TierPolicy::for_tier(self.spoof_tier)
    }

    /// The JSON keys of the attributes that fall outside the declared tier's band.
    pub fn tier_violations(&self) -> Vec<&'static str> {
        let policy = self.policy();
        let mut violations = Vec::new();

        if !policy.canvas_noise.contains(self.canvas_noise_level) {
            violations.push("canvasNoiseLevel");
        }
        if !policy.audio_noise.contains(self.audio_noise_level) {
            violations.push("audioNoiseLevel");
        }
        if !policy.languages.contains(&self.languages.len()) {
            violations.push("languages");
        }
        if !policy.fonts.contains(&self.font_list.len()) {
            violations.push("fontList");
        }
        if !(self.device_pixel_ratio >= *DEVICE_PIXEL_RATIO_BOUNDS.start()
            && self.device_pixel_ratio <= policy.max_device_pixel_ratio)
        {
            violations.push("devicePixelRatio");
        }

        violations
    }

    /// Noise, language count, font count and pixel ratio all sit in the declared tier's band.
    pub fn has_valid_tier_characteristics(&self) -> bool {
        self.tier_violations().is_empty()
    }

    /// The preferred language, falling back to the locale.
    pub fn primary_language(&self) -> &str {
        self.languages
            .first()
            .map(String::as_str)
            .unwrap_or(&self.locale)
    }

    #[cfg(feature = "serde")]
    /// Encode to the profile JSON schema.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    #[cfg(feature = "serde")]
    /// Encode to indented JSON.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    #[cfg(feature = "serde")]
    /// Decode from the profile JSON schema.
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }
}

#[cfg(feature = "serde")]
mod decode {
    use serde::de::{Deserializer, Error, SeqAccess, Unexpected, Visitor};
    use std::collections::BTreeSet;
    use std::fmt;

    /// Any JSON number without a fractional part, saturated to `i64`, so an
    /// absurd count reaches the range check instead of failing the decode.
    pub fn integer<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
        deserializer.deserialize_any(IntegerVisitor)
    }

    struct IntegerVisitor;

    impl<'de> Visitor<'de> for IntegerVisitor {
        type Value = i64;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("an integer")
        }

        fn visit_i64<E: Error>(self, v: i64) -> Result<i64, E> {
            Ok(v)
        }

        fn visit_u64<E: Error>(self, v: u64) -> Result<i64, E> {
            Ok(i64::try_from(v).unwrap_or(i64::MAX))
        }

        fn visit_f64<E: Error>(self, v: f64) -> Result<i64, E> {
            if v.is_finite() && v.fract() == 0.0 {
                Ok(v as i64)
            } else {
                Err(E::invalid_value(Unexpected::Float(v), &self))
            }
        }
    }

    /// A font array with no repeated family.
    pub fn font_set<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<BTreeSet<String>, D::Error> {
        deserializer.deserialize_seq(FontSetVisitor)
    }

    struct FontSetVisitor;

    impl<'de> Visitor<'de> for FontSetVisitor {
        type Value = BTreeSet<String>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("an array of distinct font families")
        }

        fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
            let mut fonts = BTreeSet::new();

            while let Some(font) = seq.next_element::<String>()? {
                if fonts.contains(&font) {
                    return Err(A::Error::custom(format!(
                        "fontList names `{font}` more than once"
                    )));
                }
                fonts.insert(font);
            }

            Ok(fonts)
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// A hand-built Advanced fingerprint inside every band.
    pub(crate) fn sample_fingerprint() -> Fingerprint {
        Fingerprint {
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36".into(),
            platform: "Win32".into(),
            hardware_concurrency: 8,
            device_memory: 8,
            screen_width: 1920,
            screen_height: 1080,
            device_pixel_ratio: 1.25,
            timezone: "Europe/Berlin".into(),
            locale: "de-DE".into(),
            languages: vec!["de-DE".into(), "en-US".into()],
            webgl_unmasked_vendor: "Google Inc. (NVIDIA)".into(),
            webgl_unmasked_renderer:
                "ANGLE (NVIDIA, NVIDIA GeForce RTX 3060 Direct3D11 vs_5_0 ps_5_0, D3D11)".into(),
            canvas_noise_level: 0.0125,
            audio_noise_level: 0.0007,
            font_list: crate::profiles::fonts::FONTS_WINDOWS[..50]
                .iter()
                .map(|f| f.to_string())
                .collect(),
            spoof_tier: SpoofTier::Advanced,
        }
    }

    #[test]
    fn test_sample_is_self_consistent() {
        assert!(sample_fingerprint().has_valid_tier_characteristics());
    }

    #[test]
    fn test_tier_violations_reports_each_attribute() {
        let fp = Fingerprint {
            canvas_noise_level: 0.0,
            languages: vec!["de-DE".into(), "en-US".into(), "fr-FR".into()],
            device_pixel_ratio: 2.0,
            ..sample_fingerprint()
        };
        assert_eq!(
            fp.tier_violations(),
            vec!["canvasNoiseLevel", "languages", "devicePixelRatio"]
        );
        assert!(!fp.has_valid_tier_characteristics());
    }

    #[test]
    fn test_basic_rejects_noise() {
        let fp = Fingerprint {
            spoof_tier: SpoofTier::Basic,
            languages: vec!["de-DE".into()],
            device_pixel_ratio: 1.0,
            font_list: crate::profiles::fonts::FONTS_WINDOWS[..12]
                .iter()
                .map(|f| f.to_string())
                .collect(),
            ..sample_fingerprint()
        };
        assert_eq!(fp.tier_violations(), vec!["canvasNoiseLevel", "audioNoiseLevel"]);
    }

    #[test]
    fn test_nan_pixel_ratio_is_a_violation() {
        let fp = Fingerprint {
            device_pixel_ratio: f64::NAN,
            ..sample_fingerprint()
        };
        assert_eq!(fp.tier_violations(), vec!["devicePixelRatio"]);
    }

    #[test]
    fn test_primary_language_falls_back_to_locale() {
        let fp = Fingerprint {
            languages: Vec::new(),
            ..sample_fingerprint()
        };
        assert_eq!(fp.primary_language(), "de-DE");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json_uses_camel_case_keys() {
        let json = sample_fingerprint().to_json().unwrap();
        for key in [
            "\"userAgent\"",
            "\"hardwareConcurrency\"",
            "\"webGlUnmaskedVendor\"",
            "\"webGlUnmaskedRenderer\"",
            "\"canvasNoiseLevel\"",
            "\"fontList\"",
            "\"spoofTier\":\"Advanced\"",
        ] {
            assert!(json.contains(key), "missing {key} in {json}");
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json_round_trip_is_exact() {
        let fp = Fingerprint {
            canvas_noise_level: 0.1 + 0.2,
            audio_noise_level: 0.000_123_456_789_012_345_67,
            ..sample_fingerprint()
        };
        let back = Fingerprint::from_json(&fp.to_json().unwrap()).unwrap();
        assert_eq!(back, fp);
        assert_eq!(
            back.canvas_noise_level.to_bits(),
            fp.canvas_noise_level.to_bits()
        );
        assert_eq!(
            back.audio_noise_level.to_bits(),
            fp.audio_noise_level.to_bits()
        );
    }
}
