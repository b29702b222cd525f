use crate::configs::Platform;
use crate::fingerprint::Fingerprint;
use crate::js::JsLiteral;
use crate::versions::{chrome_full_version, NOT_A_BRAND, NOT_A_BRAND_VERSION};

/// Represents a browser brand and its version, used for spoofing `userAgentData.brands`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BrandEntry {
    /// The name of the browser brand (e.g., "Chromium", "Not.A/Brand").
    pub brand: String,
    /// The full version string of the brand (e.g., "131.0.0.0").
    pub version: String,
}

impl BrandEntry {
    fn new(brand: &str, version: &str) -> Self {
        Self {
            brand: brand.into(),
            version: version.into(),
        }
    }

    /// The major part of the version, as reported by the low entropy `brands`.
    pub fn major(&self) -> &str {
        self.version.split('.').next().unwrap_or_default()
    }
}

/// Represents the values returned by `navigator.userAgentData.getHighEntropyValues()`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HighEntropyUaData {
    /// The CPU architecture of the device ("x86" or "arm").
    pub architecture: String,
    /// The device model, empty on desktop.
    pub model: String,
    /// "64" or "32".
    pub bitness: String,
    /// The client hint platform name.
    pub platform: String,
    /// The OS platform version (e.g., "15.0.0" for Windows 11).
    pub platform_version: String,
    /// The full Chrome version.
    pub ua_full_version: String,
    /// Brand and full version pairs.
    pub full_version_list: Vec<BrandEntry>,
}

/// Build the client hint data that matches the fingerprint's user-agent and platform.
pub fn build_high_entropy_data(fingerprint: &Fingerprint) -> HighEntropyUaData {
    let full_version = chrome_full_version(&fingerprint.user_agent).unwrap_or_default();

    let platform = fingerprint.platform.parse::<Platform>().ok();

    // Apple silicon reports arm even though navigator.platform stays MacIntel.
    let architecture = if fingerprint.webgl_unmasked_renderer.contains("Apple M") {
        "arm"
    } else {
        "x86"
    };

    HighEntropyUaData {
        architecture: architecture.into(),
        model: String::new(),
        bitness: platform.map_or("64", |p| p.bitness()).into(),
        platform: platform.map_or("Unknown", |p| p.client_hint_platform()).into(),
        platform_version: platform.map_or("", |p| p.platform_version()).into(),
        ua_full_version: full_version.into(),
        full_version_list: vec![
            BrandEntry::new("Google Chrome", full_version),
            BrandEntry::new("Chromium", full_version),
            BrandEntry::new(NOT_A_BRAND, &format!("{NOT_A_BRAND_VERSION}.0.0.0")),
        ],
    }
}

impl HighEntropyUaData {
    /// The low entropy `brands` list.
    pub fn brands_literal(&self) -> JsLiteral<'_> {
        JsLiteral::List(
            self.full_version_list
                .iter()
                .map(|b| {
                    JsLiteral::Object(vec![
                        ("brand", JsLiteral::Str(&b.brand)),
                        ("version", JsLiteral::Str(b.major())),
                    ])
                })
                .collect(),
        )
    }

    /// Every high entropy hint keyed the way `getHighEntropyValues` names them.
    pub fn hints_literal(&self) -> JsLiteral<'_> {
        JsLiteral::Object(vec![
            ("architecture", JsLiteral::Str(&self.architecture)),
            ("bitness", JsLiteral::Str(&self.bitness)),
            ("model", JsLiteral::Str(&self.model)),
            ("platformVersion", JsLiteral::Str(&self.platform_version)),
            ("uaFullVersion", JsLiteral::Str(&self.ua_full_version)),
            (
                "fullVersionList",
                JsLiteral::List(
                    self.full_version_list
                        .iter()
                        .map(|b| {
                            JsLiteral::Object(vec![
                                ("brand", JsLiteral::Str(&b.brand)),
                                ("version", JsLiteral::Str(&b.version)),
                            ])
                        })
                        .collect(),
                ),
            ),
            ("wow64", JsLiteral::Bool(false)),
            ("formFactors", JsLiteral::strings(["Desktop"])),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fingerprint::tests::sample_fingerprint;

    #[test]
    fn test_windows_hints() {
        let data = build_high_entropy_data(&sample_fingerprint());
        assert_eq!(data.platform, "Windows");
        assert_eq!(data.architecture, "x86");
        assert_eq!(data.bitness, "64");
        assert_eq!(data.ua_full_version, "131.0.0.0");
        assert_eq!(data.full_version_list[0].major(), "131");
    }

    #[test]
    fn test_apple_silicon_hints() {
        let fp = Fingerprint {
            platform: "MacIntel".into(),
            webgl_unmasked_renderer:
                "ANGLE (Apple, ANGLE Metal Renderer: Apple M2, Unspecified Version)".into(),
            ..sample_fingerprint()
        };
        let data = build_high_entropy_data(&fp);
        assert_eq!(data.platform, "macOS");
        assert_eq!(data.architecture, "arm");
    }

    #[test]
    fn test_brands_literal() {
        let data = build_high_entropy_data(&sample_fingerprint());
        assert_eq!(
            data.brands_literal().to_string(),
            "[{brand:'Google Chrome',version:'131'},{brand:'Chromium',version:'131'},{brand:'Not.A/Brand',version:'99'}]"
        );
        assert!(data
            .hints_literal()
            .to_string()
            .contains("uaFullVersion:'131.0.0.0'"));
    }
}
