use crate::error::GenerationError;
use crate::fingerprint::Fingerprint;
use crate::generator::os_rng;
use rand::Rng;

/// Rotate the canvas and audio noise of a fingerprint inside its tier's bands.
///
/// Returns a new fingerprint; the input is left untouched and every other
/// attribute carries over unchanged. Basic fingerprints keep zero noise.
pub fn regenerate_noise<R: Rng>(fingerprint: &Fingerprint, rng: &mut R) -> Fingerprint {
    let policy = fingerprint.policy();

    let rotated = Fingerprint {
        canvas_noise_level: policy.canvas_noise.sample(rng),
        audio_noise_level: policy.audio_noise.sample(rng),
        ..fingerprint.clone()
    };

    log::trace!(
        "rotated {} noise: canvas {} -> {}, audio {} -> {}",
        fingerprint.spoof_tier,
        fingerprint.canvas_noise_level,
        rotated.canvas_noise_level,
        fingerprint.audio_noise_level,
        rotated.audio_noise_level
    );

    rotated
}

/// Rotate the noise using OS randomness.
pub fn regenerate_noise_os(fingerprint: &Fingerprint) -> Result<Fingerprint, GenerationError> {
    Ok(regenerate_noise(fingerprint, &mut os_rng()?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::configs::SpoofTier;
    use crate::generator::generate_fingerprint_seeded;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use strum::IntoEnumIterator;

    #[test]
    fn test_noise_stays_in_band() {
        let mut rng = StdRng::seed_from_u64(7);
        for tier in SpoofTier::iter() {
            for seed in 0..50 {
                let fp = generate_fingerprint_seeded(tier, seed);
                let next = regenerate_noise(&fp, &mut rng);
                assert!(next.has_valid_tier_characteristics(), "{tier} seed {seed}");
                assert!(next.policy().canvas_noise.contains(next.canvas_noise_level));
                assert!(next.policy().audio_noise.contains(next.audio_noise_level));
            }
        }
    }

    #[test]
    fn test_other_attributes_are_preserved() {
        let mut rng = StdRng::seed_from_u64(11);
        let fp = generate_fingerprint_seeded(SpoofTier::Ultra, 3);
        let original = fp.clone();
        let next = regenerate_noise(&fp, &mut rng);

        assert_eq!(fp, original);
        assert_eq!(
            Fingerprint {
                canvas_noise_level: fp.canvas_noise_level,
                audio_noise_level: fp.audio_noise_level,
                ..next.clone()
            },
            fp
        );
    }

    #[test]
    fn test_basic_keeps_zero_noise() {
        let mut rng = StdRng::seed_from_u64(1);
        let fp = generate_fingerprint_seeded(SpoofTier::Basic, 9);
        let next = regenerate_noise(&fp, &mut rng);
        assert_eq!(next.canvas_noise_level, 0.0);
        assert_eq!(next.audio_noise_level, 0.0);
    }

    #[test]
    fn test_noise_actually_rotates() {
        let mut rng = StdRng::seed_from_u64(5);
        let fp = generate_fingerprint_seeded(SpoofTier::Ultra, 5);
        let changed = (0..10)
            .map(|_| regenerate_noise(&fp, &mut rng))
            .any(|next| next.canvas_noise_level != fp.canvas_noise_level);
        assert!(changed);
    }

    #[test]
    fn test_os_rotation() {
        let fp = generate_fingerprint_seeded(SpoofTier::Advanced, 8);
        let next = regenerate_noise_os(&fp).unwrap();
        assert!(next.has_valid_tier_characteristics());
        assert_eq!(next.font_list, fp.font_list);
    }
}
