use crate::fingerprint::Fingerprint;
use crate::js::{JsLiteral, ScriptTemplate};

/// `UNMASKED_VENDOR_WEBGL`.
pub const UNMASKED_VENDOR_WEBGL: i64 = 37445;
/// `UNMASKED_RENDERER_WEBGL`.
pub const UNMASKED_RENDERER_WEBGL: i64 = 37446;

const WEBGL_TEMPLATE: ScriptTemplate = ScriptTemplate::new(
    r#"(()=>{const v=@{vendor},r=@{renderer},f=p=>p===@{vendor_id}?v:p===@{renderer_id}?r:null;['WebGLRenderingContext','WebGL2RenderingContext'].forEach(k=>{const C=window[k],o=C&&C.prototype&&C.prototype.getParameter;if(!o)return;Object.defineProperty(C.prototype,'getParameter',{value:$n(function getParameter(p){const spoof=f(p);return spoof===null?o.call(this,p):spoof},'getParameter'),configurable:true,writable:true})})})();"#,
);

/// Report the fingerprint's unmasked vendor and renderer on WebGL and WebGL2.
pub fn hide_webgl_gpu_spoof(fingerprint: &Fingerprint) -> String {
    WEBGL_TEMPLATE.render(&[
        ("vendor", JsLiteral::Str(&fingerprint.webgl_unmasked_vendor)),
        (
            "renderer",
            JsLiteral::Str(&fingerprint.webgl_unmasked_renderer),
        ),
        ("vendor_id", JsLiteral::Int(UNMASKED_VENDOR_WEBGL)),
        ("renderer_id", JsLiteral::Int(UNMASKED_RENDERER_WEBGL)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fingerprint::tests::sample_fingerprint;

    #[test]
    fn test_webgl_spoof() {
        let script = hide_webgl_gpu_spoof(&sample_fingerprint());
        assert!(script.contains("const v='Google Inc. (NVIDIA)'"));
        assert!(script.contains("p===37445?v:p===37446?r:null"));
        assert!(script.contains("'WebGLRenderingContext','WebGL2RenderingContext'"));
    }

    #[test]
    fn test_webgl_quotes_escaped() {
        let fp = Fingerprint {
            webgl_unmasked_vendor: "Vendor's \"GPU\"".into(),
            ..sample_fingerprint()
        };
        let script = hide_webgl_gpu_spoof(&fp);
        assert!(script.contains(r#"const v='Vendor\'s \"GPU\"'"#));
    }
}
