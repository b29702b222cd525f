/// Tiers, platforms and script section toggles.
pub mod configs;
/// Generation and validation errors.
pub mod error;
/// The fingerprint record.
pub mod fingerprint;
/// Tier-driven fingerprint generation.
pub mod generator;
/// Escaped script literals and templates.
pub mod js;
/// Clone-with-new-noise.
pub mod noise;
/// Tier bands and allowlists.
pub mod policy;
/// GPU profiles.
pub mod profiles;
/// Audio noise.
pub mod spoof_audio;
/// Canvas noise.
pub mod spoof_canvas;
/// Font list.
pub mod spoof_fonts;
/// Navigator identity.
pub mod spoof_navigator;
/// Screen geometry.
pub mod spoof_screen;
/// Timezone and locale.
pub mod spoof_timezone;
/// User agent client hints.
pub mod spoof_user_agent;
/// WebGL vendor and renderer.
pub mod spoof_webgl;
/// Generic spoofs.
pub mod spoofs;
/// Global format and range checks.
pub mod validator;
/// Browser versions.
pub mod versions;

pub use crate::configs::{Platform, ScriptConfig, ScriptSection, SpoofTier};
pub use crate::error::{GenerationError, ValidationError, ValidationErrorKind};
pub use crate::fingerprint::Fingerprint;
pub use crate::generator::{
    generate_fingerprint, generate_fingerprint_rng, generate_fingerprint_seeded,
};
pub use crate::js::wrap_eval_script;
pub use crate::noise::{regenerate_noise, regenerate_noise_os};
pub use crate::validator::{validate_fingerprint, ValidationResult};

#[cfg(feature = "serde")]
pub use crate::validator::{decode_validated, validate_fingerprint_json};

use strum::IntoEnumIterator;

/// The script for one section.
pub fn build_section_script(fingerprint: &Fingerprint, section: ScriptSection) -> String {
    match section {
        ScriptSection::Navigator => spoof_navigator::spoof_navigator_script(fingerprint),
        ScriptSection::RuntimeShim => spoofs::RUNTIME_SHIM.to_string(),
        ScriptSection::Canvas => spoof_canvas::spoof_canvas_script(fingerprint),
        ScriptSection::Webgl => spoof_webgl::hide_webgl_gpu_spoof(fingerprint),
        ScriptSection::Audio => spoof_audio::spoof_audio_script(fingerprint),
        ScriptSection::Fonts => spoof_fonts::spoof_fonts_script(fingerprint),
        ScriptSection::Screen => spoof_screen::spoof_screen_script(fingerprint),
        ScriptSection::Timezone => spoof_timezone::spoof_timezone_script(fingerprint),
    }
}

/// Generate the spoofing script for a validated fingerprint.
///
/// The output is one self-invoking function: the injection guard, the
/// native-looking helpers, then every section in order. It is safe to inject
/// more than once per page since a second run stops at the guard.
pub fn build_spoofing_script(fingerprint: &Fingerprint) -> String {
    build_spoofing_script_with_config(fingerprint, &ScriptConfig::default())
}

/// Generate the spoofing script leaving out the sections the config skips.
pub fn build_spoofing_script_with_config(
    fingerprint: &Fingerprint,
    config: &ScriptConfig,
) -> String {
    let mut body = String::with_capacity(16 * 1024);

    body.push_str(spoofs::INJECTION_GUARD);
    body.push_str(spoofs::NATIVE_HELPERS);

    for section in ScriptSection::iter().filter(|s| config.enabled(*s)) {
        body.push_str(&build_section_script(fingerprint, section));
    }

    let script = wrap_eval_script(&body);

    log::trace!(
        "built {} byte spoofing script for {} fingerprint",
        script.len(),
        fingerprint.spoof_tier
    );

    script
}
