use fingerprint_identity::js::escape_js_string;
use fingerprint_identity::spoofs::{GUARD_FLAG, INJECTION_GUARD};
use fingerprint_identity::{
    build_spoofing_script, generate_fingerprint, generate_fingerprint_seeded,
    regenerate_noise_os, validate_fingerprint, Fingerprint, SpoofTier,
};
use strum::IntoEnumIterator;

/// Walk the script the way a lexer would: strings must close on their line,
/// brackets must pair up and nothing may hide in comments or template literals.
fn check_well_formed(script: &str) -> Result<(), String> {
    let mut stack = Vec::new();
    let mut chars = script.chars().peekable();
    let mut quote: Option<char> = None;
    let mut offset = 0usize;

    while let Some(c) = chars.next() {
        offset += c.len_utf8();
        match quote {
            Some(q) => match c {
                '\\' => {
                    if let Some(next) = chars.next() {
                        offset += next.len_utf8();
                        if matches!(next, '\n' | '\r' | '\u{2028}' | '\u{2029}') {
                            return Err(format!("line continuation at {offset}"));
                        }
                    }
                }
                '\n' | '\r' | '\u{2028}' | '\u{2029}' => {
                    return Err(format!("line break inside string at {offset}"));
                }
                c if c == q => quote = None,
                _ => (),
            },
            None => match c {
                '\'' | '"' => quote = Some(c),
                '`' => return Err(format!("template literal at {offset}")),
                '/' if matches!(chars.peek(), Some('/') | Some('*')) => {
                    return Err(format!("comment at {offset}"));
                }
                '(' | '[' | '{' => stack.push(c),
                ')' | ']' | '}' => {
                    let open = stack.pop();
                    let expected = match c {
                        ')' => '(',
                        ']' => '[',
                        _ => '{',
                    };
                    if open != Some(expected) {
                        return Err(format!("unbalanced {c} at {offset}"));
                    }
                }
                _ => (),
            },
        }
    }

    if quote.is_some() {
        return Err("unterminated string".into());
    }
    if !stack.is_empty() {
        return Err(format!("{} unclosed brackets", stack.len()));
    }

    Ok(())
}

fn quoted(value: &str) -> String {
    format!("'{}'", escape_js_string(value))
}

#[test]
fn test_generate_validate_synthesize() {
    let fp = generate_fingerprint(SpoofTier::Ultra).unwrap();

    let result = validate_fingerprint(&fp);
    assert!(result.valid, "{:?}", result.messages());
    assert!(result.errors.is_empty());

    let script = build_spoofing_script(&fp);
    check_well_formed(&script).unwrap();

    assert_eq!(script.matches(&quoted(&fp.webgl_unmasked_vendor)).count(), 1);
    assert_eq!(script.matches(&quoted(&fp.timezone)).count(), 1);
    for font in &fp.font_list {
        assert_eq!(script.matches(&quoted(font)).count(), 1, "{font}");
    }
}

#[test]
fn test_scripts_are_well_formed_for_every_tier() {
    for tier in SpoofTier::iter() {
        for seed in 0..25 {
            let fp = generate_fingerprint_seeded(tier, seed);
            let script = build_spoofing_script(&fp);
            if let Err(e) = check_well_formed(&script) {
                panic!("{tier} seed {seed}: {e}");
            }
        }
    }
}

#[test]
fn test_hostile_user_agent_is_escaped() {
    let base = generate_fingerprint_seeded(SpoofTier::Advanced, 1);
    let hostile = "Mozilla/5.0 (X11; it's a \\ test');alert(1);//\nnext";
    let fp = Fingerprint {
        user_agent: hostile.into(),
        ..base
    };

    let script = build_spoofing_script(&fp);
    check_well_formed(&script).unwrap();

    assert!(!script.contains("it's"));
    assert!(script.contains("it\\'s a \\\\ test\\');alert(1);//\\nnext"));
    assert!(!script.contains('\n'));
    assert!(script.contains(&quoted(hostile)));
}

#[test]
fn test_hostile_fonts_and_gpu_are_escaped() {
    let base = generate_fingerprint_seeded(SpoofTier::Ultra, 2);
    let fp = Fingerprint {
        webgl_unmasked_renderer: "ANGLE (</script><script>x'\u{2028})".into(),
        font_list: ["O'Font\\".to_string(), "Plain".to_string()]
            .into_iter()
            .collect(),
        ..base
    };

    let script = build_spoofing_script(&fp);
    check_well_formed(&script).unwrap();
    assert!(!script.contains("</script>"));
    assert!(!script.contains('\u{2028}'));
    assert!(script.contains("'O\\'Font\\\\'"));
}

#[test]
fn test_guard_appears_once_before_side_effects() {
    let fp = generate_fingerprint_seeded(SpoofTier::Basic, 3);
    let script = build_spoofing_script(&fp);

    assert!(script.starts_with(&format!("(()=>{{{INJECTION_GUARD}")));
    assert_eq!(script.matches(INJECTION_GUARD).count(), 1);
    assert_eq!(script.matches(GUARD_FLAG).count(), 2);
}

#[test]
fn test_malformed_numbers_still_terminate() {
    let base = generate_fingerprint_seeded(SpoofTier::Ultra, 4);
    let fp = Fingerprint {
        device_pixel_ratio: f64::NAN,
        canvas_noise_level: f64::INFINITY,
        audio_noise_level: f64::NEG_INFINITY,
        ..base
    };

    // never handed a fingerprint like this in practice
    assert!(!validate_fingerprint(&fp).valid);

    let script = build_spoofing_script(&fp);
    check_well_formed(&script).unwrap();
    assert!(script.contains("'devicePixelRatio',NaN"));
    assert!(script.contains("const level=Infinity"));
    assert!(script.contains("const level=-Infinity"));
}

#[test]
fn test_clone_keeps_identity_and_changes_noise() {
    let fp = generate_fingerprint_seeded(SpoofTier::Ultra, 5);
    let clone = regenerate_noise_os(&fp).unwrap();

    assert!(validate_fingerprint(&clone).valid);
    assert!(clone.has_valid_tier_characteristics());
    assert_eq!(clone.user_agent, fp.user_agent);
    assert_eq!(clone.font_list, fp.font_list);
    assert_ne!(clone.canvas_noise_level, fp.canvas_noise_level);
}

#[cfg(feature = "serde")]
#[test]
fn test_stored_profile_round_trip() {
    use fingerprint_identity::{decode_validated, validate_fingerprint_json};

    for tier in SpoofTier::iter() {
        let fp = generate_fingerprint_seeded(tier, 6);
        let json = fp.to_json().unwrap();
        assert!(validate_fingerprint_json(&json).valid);

        let back = decode_validated(&json).unwrap();
        assert_eq!(back, fp);
        assert_eq!(build_spoofing_script(&back), build_spoofing_script(&fp));
    }
}

#[test]
fn test_well_formed_checker_rejects_breakage() {
    assert!(check_well_formed("(()=>{const a='x';})();").is_ok());
    assert!(check_well_formed("(()=>{const a='x';").is_err());
    assert!(check_well_formed("const a='it's';").is_err());
    assert!(check_well_formed("const a='line\nbreak';").is_err());
    assert!(check_well_formed("a();//x").is_err());
}
