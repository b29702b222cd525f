use crate::configs::{Platform, SpoofTier};
use crate::error::GenerationError;
use crate::fingerprint::Fingerprint;
use crate::policy::{align_screen_height, TierPolicy, LOCALES, TIMEZONES};
use crate::profiles::fonts::select_fonts;
use crate::profiles::gpu::select_gpu_profile;
use crate::versions::{build_user_agent, CHROME_MAJOR_VERSIONS};
use rand::distr::{weighted::WeightedIndex, Distribution};
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Platforms the generator emits, weighted toward desktop market share.
const PLATFORM_WEIGHTS: [(Platform, u32); 3] = [
    (Platform::Win32, 6),
    (Platform::MacIntel, 3),
    (Platform::LinuxX86_64, 1),
];

/// An RNG seeded from the operating system.
pub fn os_rng() -> Result<StdRng, GenerationError> {
    StdRng::try_from_os_rng().map_err(|e| GenerationError::RandomSource(e.to_string()))
}

/// Generate a fingerprint for the tier using OS randomness.
pub fn generate_fingerprint(tier: SpoofTier) -> Result<Fingerprint, GenerationError> {
    let mut rng = os_rng()?;
    Ok(generate_fingerprint_rng(tier, &mut rng))
}

/// Generate a reproducible fingerprint from a seed.
pub fn generate_fingerprint_seeded(tier: SpoofTier, seed: u64) -> Fingerprint {
    generate_fingerprint_rng(tier, &mut StdRng::seed_from_u64(seed))
}

/// Generate a fingerprint for the tier drawing from `rng`.
///
/// Every attribute is drawn from the tier's policy row, then tied together:
/// the user-agent and GPU follow the platform, the first language is the
/// locale, a Mac takes a 2x display when the tier allows it and the screen
/// height is aligned to 8px. The result always passes both the validator
/// and the tier self-check.
pub fn generate_fingerprint_rng<R: Rng>(tier: SpoofTier, rng: &mut R) -> Fingerprint {
    let policy = TierPolicy::for_tier(tier);

    let platform = random_platform(rng);
    let chrome_major = rng.random_range(CHROME_MAJOR_VERSIONS);
    let gpu = select_gpu_profile(platform, rng);

    let (screen_width, screen_height) = *policy.screens.choose(rng).unwrap_or(&(1920, 1080));

    let device_pixel_ratio = if platform.is_mac() && policy.max_device_pixel_ratio >= 2.0 {
        2.0
    } else {
        *policy.device_pixel_ratios.choose(rng).unwrap_or(&1.0)
    };

    let locale = pick_from_set(&LOCALES, "en-US", rng);
    let languages = random_languages(locale, policy, rng);
    let font_count = rng.random_range(policy.fonts.clone());

    let fingerprint = Fingerprint {
        user_agent: build_user_agent(platform.os_token(), chrome_major),
        platform: platform.as_str().into(),
        hardware_concurrency: *policy.hardware_concurrency.choose(rng).unwrap_or(&4),
        device_memory: *policy.device_memory.choose(rng).unwrap_or(&8),
        screen_width,
        screen_height: align_screen_height(screen_height),
        device_pixel_ratio,
        timezone: pick_from_set(&TIMEZONES, "UTC", rng).into(),
        locale: locale.into(),
        languages,
        webgl_unmasked_vendor: gpu.webgl_vendor.into(),
        webgl_unmasked_renderer: gpu.webgl_renderer.into(),
        canvas_noise_level: policy.canvas_noise.sample(rng),
        audio_noise_level: policy.audio_noise.sample(rng),
        font_list: select_fonts(platform, font_count, rng),
        spoof_tier: tier,
    };

    log::debug!(
        "generated {} fingerprint for {} (chrome {})",
        tier,
        platform,
        chrome_major
    );

    fingerprint
}

/// Pick a platform by market weight.
fn random_platform<R: Rng>(rng: &mut R) -> Platform {
    match WeightedIndex::new(PLATFORM_WEIGHTS.iter().map(|(_, weight)| *weight)) {
        Ok(dist) => PLATFORM_WEIGHTS[dist.sample(rng)].0,
        _ => Platform::Win32,
    }
}

/// Uniform pick from an allowlist.
fn pick_from_set<R: Rng>(
    set: &'static phf::Set<&'static str>,
    fallback: &'static str,
    rng: &mut R,
) -> &'static str {
    if set.is_empty() {
        return fallback;
    }
    let index = rng.random_range(0..set.len());
    set.iter().nth(index).copied().unwrap_or(fallback)
}

/// The locale first, then distinct extra locales drawn without replacement.
fn random_languages<R: Rng>(locale: &str, policy: &TierPolicy, rng: &mut R) -> Vec<String> {
    let count = rng.random_range(policy.languages.clone());
    let others: Vec<&str> = LOCALES.iter().copied().filter(|l| *l != locale).collect();

    let mut languages = Vec::with_capacity(count);
    languages.push(locale.to_string());

    for language in others.choose_multiple(rng, count.saturating_sub(1)) {
        if !languages.iter().any(|l| l == language) {
            languages.push(language.to_string());
        }
    }

    languages
}
