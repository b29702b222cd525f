use crate::fingerprint::Fingerprint;
use crate::js::{JsLiteral, ScriptTemplate};

/// Height taken from `availHeight` for the taskbar, dock or menu bar.
pub const AVAIL_HEIGHT_OFFSET: i64 = 40;

const SCREEN_TEMPLATE: ScriptTemplate = ScriptTemplate::new(
    r#"(()=>{const sp=Screen.prototype,w=@{width},h=@{height},ah=@{avail_height},cd=@{color_depth};$g(sp,'width',w);$g(sp,'height',h);$g(sp,'availWidth',w);$g(sp,'availHeight',ah);$g(sp,'availLeft',0);$g(sp,'availTop',0);$g(sp,'colorDepth',cd);$g(sp,'pixelDepth',cd);$g(window,'outerWidth',w);$g(window,'outerHeight',ah);$g(window,'devicePixelRatio',@{device_pixel_ratio})})();"#,
);

/// The color depth a display of this size and density reports.
pub fn color_depth(screen_width: i64, device_pixel_ratio: f64) -> i64 {
    // wide high density panels are HDR capable
    if screen_width >= 2560 && device_pixel_ratio >= 2.0 {
        30
    } else {
        24
    }
}

/// Pin the screen and window geometry to the fingerprint.
pub fn spoof_screen_script(fingerprint: &Fingerprint) -> String {
    let depth = color_depth(fingerprint.screen_width, fingerprint.device_pixel_ratio);
    let avail_height = fingerprint.screen_height.saturating_sub(AVAIL_HEIGHT_OFFSET);

    SCREEN_TEMPLATE.render(&[
        ("width", JsLiteral::Int(fingerprint.screen_width)),
        ("height", JsLiteral::Int(fingerprint.screen_height)),
        ("avail_height", JsLiteral::Int(avail_height)),
        ("color_depth", JsLiteral::Int(depth)),
        (
            "device_pixel_ratio",
            JsLiteral::Num(fingerprint.device_pixel_ratio),
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fingerprint::tests::sample_fingerprint;

    #[test]
    fn test_screen_geometry() {
        let script = spoof_screen_script(&sample_fingerprint());
        assert!(script.contains("w=1920,h=1080,ah=1040,cd=24"));
        assert!(script.contains("$g(window,'devicePixelRatio',1.25)"));
    }

    #[test]
    fn test_color_depth() {
        assert_eq!(color_depth(1920, 1.0), 24);
        assert_eq!(color_depth(2560, 1.5), 24);
        assert_eq!(color_depth(3024, 2.0), 30);
    }
}
