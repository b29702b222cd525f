use std::collections::BTreeSet;
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Tier of stealth to use.
#[derive(
    PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default, Copy, Clone, Display, EnumString, EnumIter,
)]
#[strum(ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SpoofTier {
    #[default]
    /// No noise, a single language and a small font list.
    Basic,
    /// Light canvas and audio noise.
    Advanced,
    /// Strongest noise and the richest font and language lists.
    Ultra,
}

/// The `navigator.platform` values a fingerprint may carry.
#[derive(
    PartialEq, Eq, Hash, Clone, Copy, Debug, Display, EnumString, EnumIter, IntoStaticStr,
)]
pub enum Platform {
    /// 32-bit platform string reported by Chrome on every Windows build.
    #[strum(to_string = "Win32")]
    Win32,
    /// Windows 64.
    #[strum(to_string = "Win64")]
    Win64,
    /// Mac.
    #[strum(to_string = "MacIntel")]
    MacIntel,
    /// Linux 64.
    #[strum(to_string = "Linux x86_64")]
    LinuxX86_64,
    /// Linux 32.
    #[strum(to_string = "Linux i686")]
    LinuxI686,
}

impl Platform {
    /// The value reported by `navigator.platform`.
    pub fn as_str(&self) -> &'static str {
        self.into()
    }

    /// The operating system token inside the user-agent parentheses.
    pub fn os_token(&self) -> &'static str {
        match self {
            Platform::Win32 | Platform::Win64 => "Windows NT 10.0; Win64; x64",
            Platform::MacIntel => "Macintosh; Intel Mac OS X 10_15_7",
            Platform::LinuxX86_64 => "X11; Linux x86_64",
            Platform::LinuxI686 => "X11; Linux i686",
        }
    }

    /// The `sec-ch-ua-platform` / `userAgentData.platform` value.
    pub fn client_hint_platform(&self) -> &'static str {
        match self {
            Platform::Win32 | Platform::Win64 => "Windows",
            Platform::MacIntel => "macOS",
            Platform::LinuxX86_64 | Platform::LinuxI686 => "Linux",
        }
    }

    /// The high entropy platform version.
    pub fn platform_version(&self) -> &'static str {
        match self {
            Platform::Win32 | Platform::Win64 => "15.0.0",
            Platform::MacIntel => "14.6.1",
            Platform::LinuxX86_64 | Platform::LinuxI686 => "6.12.10",
        }
    }

    /// The high entropy bitness.
    pub fn bitness(&self) -> &'static str {
        match self {
            Platform::LinuxI686 => "32",
            _ => "64",
        }
    }

    /// Is this a Windows platform.
    pub fn is_windows(&self) -> bool {
        matches!(self, Platform::Win32 | Platform::Win64)
    }

    /// Is this a Mac platform.
    pub fn is_mac(&self) -> bool {
        matches!(self, Platform::MacIntel)
    }
}

/// A toggle-able section of the spoofing script, in emission order.
#[derive(
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Clone,
    Copy,
    Debug,
    Display,
    EnumString,
    EnumIter,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ScriptSection {
    /// Navigator identity, client hints, plugins and WebRTC.
    Navigator,
    /// The `window.chrome` runtime globals.
    RuntimeShim,
    /// Canvas read-path noise.
    Canvas,
    /// WebGL vendor and renderer.
    Webgl,
    /// Audio decode noise.
    Audio,
    /// Font faces and font enumeration.
    Fonts,
    /// Screen and window geometry.
    Screen,
    /// Timezone and locale.
    Timezone,
}

/// Which sections `build_spoofing_script_with_config` emits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScriptConfig {
    /// Sections left out of the script.
    #[cfg_attr(feature = "serde", serde(default))]
    pub skip: BTreeSet<ScriptSection>,
}

impl ScriptConfig {
    /// Every section enabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Leave a section out of the script.
    pub fn with_skip(mut self, section: ScriptSection) -> Self {
        self.skip.insert(section);
        self
    }

    /// Is the section emitted.
    pub fn enabled(&self, section: ScriptSection) -> bool {
        !self.skip.contains(&section)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_tier_order() {
        assert!(SpoofTier::Basic < SpoofTier::Advanced);
        assert!(SpoofTier::Advanced < SpoofTier::Ultra);
        assert_eq!(SpoofTier::from_str("ultra").unwrap(), SpoofTier::Ultra);
        assert_eq!(SpoofTier::Advanced.to_string(), "Advanced");
    }

    #[test]
    fn test_platform_strings() {
        assert_eq!(Platform::LinuxX86_64.as_str(), "Linux x86_64");
        assert_eq!(Platform::from_str("MacIntel").unwrap(), Platform::MacIntel);
        assert!(Platform::from_str("Android").is_err());
        assert_eq!(Platform::iter().count(), 5);
    }

    #[test]
    fn test_script_config_skip() {
        let config = ScriptConfig::new().with_skip(ScriptSection::Audio);
        assert!(!config.enabled(ScriptSection::Audio));
        assert!(config.enabled(ScriptSection::Canvas));
        assert_eq!(
            ScriptSection::from_str("runtime_shim").unwrap(),
            ScriptSection::RuntimeShim
        );
        assert_eq!(ScriptSection::Webgl.to_string(), "webgl");
    }
}
