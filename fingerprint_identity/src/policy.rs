//! Spoof-tier policy: the single table of legal ranges for every fingerprint
//! attribute. The generator draws from it and the tier self-check reads it.

use crate::configs::SpoofTier;
use phf::phf_set;
use rand::Rng;
use std::ops::RangeInclusive;

/// Logical cores.
pub const HARDWARE_CONCURRENCY_BOUNDS: RangeInclusive<i64> = 1..=32;
/// Device memory in GB.
pub const DEVICE_MEMORY_BOUNDS: RangeInclusive<i64> = 1..=128;
/// Chrome rounds `navigator.deviceMemory` down and never reports more than this.
pub const REPORTED_DEVICE_MEMORY_MAX: i64 = 8;
/// Screen width in CSS pixels.
pub const SCREEN_WIDTH_BOUNDS: RangeInclusive<i64> = 800..=7680;
/// Screen height in CSS pixels.
pub const SCREEN_HEIGHT_BOUNDS: RangeInclusive<i64> = 600..=4320;
/// Device pixel ratio.
pub const DEVICE_PIXEL_RATIO_BOUNDS: RangeInclusive<f64> = 0.5..=4.0;
/// Canvas and audio noise.
pub const NOISE_LEVEL_BOUNDS: RangeInclusive<f64> = 0.0..=1.0;
/// Max entries in `languages`.
pub const MAX_LANGUAGES: usize = 10;
/// Max entries in `fontList`.
pub const MAX_FONTS: usize = 200;
/// Generated screen heights are a multiple of this.
pub const SCREEN_HEIGHT_ALIGNMENT: i64 = 8;

/// A closed, or left-open, interval a noise level must fall in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoiseBand {
    /// Lower bound.
    pub min: f64,
    /// Upper bound, always inclusive.
    pub max: f64,
    /// The lower bound itself is excluded.
    pub min_exclusive: bool,
}

impl NoiseBand {
    /// Noise disabled.
    pub const ZERO: NoiseBand = NoiseBand {
        min: 0.0,
        max: 0.0,
        min_exclusive: false,
    };

    /// Is the level inside the band. NaN never is.
    pub fn contains(&self, level: f64) -> bool {
        let above = if self.min_exclusive {
            level > self.min
        } else {
            level >= self.min
        };
        above && level <= self.max
    }

    /// Draw a level inside the band.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> f64 {
        if self.max <= self.min {
            self.min
        } else if self.min_exclusive {
            // max - [0, width) lands in (min, max]
            self.max - rng.random_range(0.0..self.max - self.min)
        } else {
            rng.random_range(self.min..=self.max)
        }
    }
}

/// The bands and draw pools for one tier.
#[derive(Debug)]
pub struct TierPolicy {
    /// The tier described.
    pub tier: SpoofTier,
    /// Canvas noise band.
    pub canvas_noise: NoiseBand,
    /// Audio noise band.
    pub audio_noise: NoiseBand,
    /// Allowed `languages` length.
    pub languages: RangeInclusive<usize>,
    /// Allowed `fontList` size.
    pub fonts: RangeInclusive<usize>,
    /// Highest plausible device pixel ratio.
    pub max_device_pixel_ratio: f64,
    /// Pixel ratios the generator draws from.
    pub device_pixel_ratios: &'static [f64],
    /// Core counts the generator draws from.
    pub hardware_concurrency: &'static [i64],
    /// Memory sizes the generator draws from.
    pub device_memory: &'static [i64],
    /// Screen resolutions the generator draws from.
    pub screens: &'static [(i64, i64)],
}

/// Policy table indexed by tier.
pub static TIER_POLICIES: [TierPolicy; 3] = [
    TierPolicy {
        tier: SpoofTier::Basic,
        canvas_noise: NoiseBand::ZERO,
        audio_noise: NoiseBand::ZERO,
        languages: 1..=1,
        fonts: 10..=20,
        max_device_pixel_ratio: 1.0,
        device_pixel_ratios: &[1.0],
        hardware_concurrency: &[4, 8],
        device_memory: &[4, 8],
        screens: &[(1366, 768), (1920, 1080), (1536, 864), (1440, 900), (1280, 720)],
    },
    TierPolicy {
        tier: SpoofTier::Advanced,
        canvas_noise: NoiseBand {
            min: 0.0,
            max: 0.03,
            min_exclusive: true,
        },
        audio_noise: NoiseBand {
            min: 0.0,
            max: 0.002,
            min_exclusive: true,
        },
        languages: 1..=2,
        fonts: 40..=80,
        max_device_pixel_ratio: 1.5,
        device_pixel_ratios: &[1.0, 1.25, 1.5],
        hardware_concurrency: &[4, 6, 8, 12],
        device_memory: &[4, 8],
        screens: &[
            (1366, 768),
            (1920, 1080),
            (1536, 864),
            (1440, 900),
            (1600, 900),
            (1680, 1050),
            (1920, 1200),
            (2560, 1440),
        ],
    },
    TierPolicy {
        tier: SpoofTier::Ultra,
        canvas_noise: NoiseBand {
            min: 0.02,
            max: 0.08,
            min_exclusive: false,
        },
        audio_noise: NoiseBand {
            min: 0.0001,
            max: 0.0015,
            min_exclusive: false,
        },
        languages: 1..=4,
        fonts: 80..=140,
        max_device_pixel_ratio: 2.5,
        device_pixel_ratios: &[1.0, 1.25, 1.5, 2.0, 2.5],
        hardware_concurrency: &[4, 6, 8, 10, 12, 16, 20, 24],
        device_memory: &[4, 8],
        screens: &[
            (1920, 1080),
            (1920, 1200),
            (2560, 1440),
            (2560, 1600),
            (2880, 1800),
            (3024, 1964),
            (3440, 1440),
            (3840, 2160),
        ],
    },
];

impl TierPolicy {
    /// The policy for a tier.
    pub fn for_tier(tier: SpoofTier) -> &'static TierPolicy {
        match tier {
            SpoofTier::Basic => &TIER_POLICIES[0],
            SpoofTier::Advanced => &TIER_POLICIES[1],
            SpoofTier::Ultra => &TIER_POLICIES[2],
        }
    }
}

/// IANA zones a fingerprint may report.
pub static TIMEZONES: phf::Set<&'static str> = phf_set! {
    "UTC",
    "America/New_York",
    "America/Chicago",
    "America/Denver",
    "America/Los_Angeles",
    "America/Phoenix",
    "America/Anchorage",
    "America/Toronto",
    "America/Vancouver",
    "America/Mexico_City",
    "America/Sao_Paulo",
    "America/Argentina/Buenos_Aires",
    "America/Bogota",
    "America/Lima",
    "America/Santiago",
    "Europe/London",
    "Europe/Dublin",
    "Europe/Lisbon",
    "Europe/Paris",
    "Europe/Berlin",
    "Europe/Madrid",
    "Europe/Rome",
    "Europe/Amsterdam",
    "Europe/Brussels",
    "Europe/Zurich",
    "Europe/Vienna",
    "Europe/Stockholm",
    "Europe/Oslo",
    "Europe/Copenhagen",
    "Europe/Warsaw",
    "Europe/Prague",
    "Europe/Helsinki",
    "Europe/Athens",
    "Europe/Istanbul",
    "Europe/Kyiv",
    "Asia/Tokyo",
    "Asia/Seoul",
    "Asia/Shanghai",
    "Asia/Hong_Kong",
    "Asia/Singapore",
    "Asia/Kolkata",
    "Asia/Dubai",
    "Asia/Jakarta",
    "Asia/Manila",
    "Asia/Bangkok",
    "Australia/Sydney",
    "Australia/Melbourne",
    "Australia/Perth",
    "Pacific/Auckland",
    "Africa/Johannesburg",
    "Africa/Cairo",
    "Africa/Lagos",
};

/// BCP 47 tags a fingerprint locale may take. Also the language pool.
pub static LOCALES: phf::Set<&'static str> = phf_set! {
    "en-US",
    "en-GB",
    "en-CA",
    "en-AU",
    "en-IN",
    "de-DE",
    "de-AT",
    "de-CH",
    "fr-FR",
    "fr-CA",
    "fr-BE",
    "es-ES",
    "es-MX",
    "es-AR",
    "it-IT",
    "pt-BR",
    "pt-PT",
    "nl-NL",
    "nl-BE",
    "sv-SE",
    "nb-NO",
    "da-DK",
    "fi-FI",
    "pl-PL",
    "cs-CZ",
    "tr-TR",
    "ru-RU",
    "uk-UA",
    "ja-JP",
    "ko-KR",
    "zh-CN",
    "zh-TW",
    "id-ID",
    "th-TH",
    "vi-VN",
};

/// Round a screen height to the nearest aligned value.
pub fn align_screen_height(height: i64) -> i64 {
    let half = SCREEN_HEIGHT_ALIGNMENT / 2;
    ((height + half) / SCREEN_HEIGHT_ALIGNMENT) * SCREEN_HEIGHT_ALIGNMENT
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_policy_lookup_matches_tier() {
        for tier in SpoofTier::iter() {
            assert_eq!(TierPolicy::for_tier(tier).tier, tier);
        }
    }

    #[test]
    fn test_pools_fit_their_bands() {
        for policy in TIER_POLICIES.iter() {
            assert!(policy
                .device_pixel_ratios
                .iter()
                .all(|dpr| *dpr <= policy.max_device_pixel_ratio
                    && DEVICE_PIXEL_RATIO_BOUNDS.contains(dpr)));
            assert!(policy
                .hardware_concurrency
                .iter()
                .all(|hc| HARDWARE_CONCURRENCY_BOUNDS.contains(hc)));
            assert!(policy
                .device_memory
                .iter()
                .all(|dm| DEVICE_MEMORY_BOUNDS.contains(dm) && *dm <= REPORTED_DEVICE_MEMORY_MAX));
            assert!(policy.screens.iter().all(|(w, h)| {
                SCREEN_WIDTH_BOUNDS.contains(w)
                    && SCREEN_HEIGHT_BOUNDS.contains(&align_screen_height(*h))
            }));
            assert!(*policy.languages.end() <= MAX_LANGUAGES);
            assert!(*policy.fonts.end() <= MAX_FONTS);
            assert!(*policy.languages.end() <= LOCALES.len());
        }
    }

    #[test]
    fn test_noise_band_membership() {
        let advanced = TierPolicy::for_tier(SpoofTier::Advanced).canvas_noise;
        assert!(!advanced.contains(0.0));
        assert!(advanced.contains(0.03));
        assert!(!advanced.contains(0.031));
        assert!(!advanced.contains(f64::NAN));
        assert!(NoiseBand::ZERO.contains(0.0));
        assert!(!NoiseBand::ZERO.contains(0.001));
    }

    #[test]
    fn test_align_screen_height() {
        assert_eq!(align_screen_height(1080), 1080);
        assert_eq!(align_screen_height(900), 904);
        assert_eq!(align_screen_height(1050), 1048);
        assert_eq!(align_screen_height(1964) % SCREEN_HEIGHT_ALIGNMENT, 0);
    }
}
