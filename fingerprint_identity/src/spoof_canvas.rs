use crate::fingerprint::Fingerprint;
use crate::js::{JsLiteral, ScriptTemplate};

/// Largest per channel shift applied to a perturbed pixel.
pub const CANVAS_NOISE_MAGNITUDE: i64 = 4;

/// Text drawing marks a canvas. Pixel reads and exports of a marked canvas
/// perturb each pixel with probability `level` by up to `magnitude` per channel.
const CANVAS_TEMPLATE: ScriptTemplate = ScriptTemplate::new(
    r#"(()=>{const level=@{level},mag=@{magnitude};if(!(level>0))return;const marked=new WeakSet(),span=mag*2+1,jitter=d=>{for(let i=0;i<d.length;i+=4){if(Math.random()<level){for(let c=0;c<3;c++){const v=d[i+c]+Math.floor(Math.random()*span)-mag;d[i+c]=v<0?0:v>255?255:v}}}return d},patch=(proto,key,make)=>{if(!proto||typeof proto[key]!=='function')return;const orig=proto[key];Object.defineProperty(proto,key,{value:$n(make(orig),key),configurable:true,writable:true})},protos=[window.CanvasRenderingContext2D,window.OffscreenCanvasRenderingContext2D].filter(Boolean).map(C=>C.prototype);const raw=new Map();protos.forEach(p=>{raw.set(p,{read:p.getImageData,write:p.putImageData});['fillText','strokeText'].forEach(k=>patch(p,k,o=>function(...a){if(this.canvas)marked.add(this.canvas);return o.apply(this,a)}));patch(p,'getImageData',o=>function(...a){const img=o.apply(this,a);if(this.canvas&&marked.has(this.canvas))jitter(img.data);return img})});const scratch=c=>{try{const s=typeof OffscreenCanvas!=='undefined'&&!(c instanceof HTMLCanvasElement)?new OffscreenCanvas(c.width,c.height):document.createElement('canvas');s.width=c.width;s.height=c.height;const x=s.getContext('2d'),own=x&&raw.get(Object.getPrototypeOf(x));if(!own||!own.read||!own.write||!c.width||!c.height)return c;x.drawImage(c,0,0);const img=own.read.call(x,0,0,s.width,s.height);jitter(img.data);own.write.call(x,img,0,0);return s}catch(e){return c}},src=c=>marked.has(c)?scratch(c):c;if(window.HTMLCanvasElement){const p=HTMLCanvasElement.prototype;patch(p,'toDataURL',o=>function(...a){return o.apply(src(this),a)});patch(p,'toBlob',o=>function(...a){return o.apply(src(this),a)})}if(window.OffscreenCanvas){patch(OffscreenCanvas.prototype,'convertToBlob',o=>function(...a){return o.apply(src(this),a)})}})();"#,
);

/// Perturb canvas reads by the fingerprint's canvas noise level.
pub fn spoof_canvas_script(fingerprint: &Fingerprint) -> String {
    CANVAS_TEMPLATE.render(&[
        ("level", JsLiteral::Num(fingerprint.canvas_noise_level)),
        ("magnitude", JsLiteral::Int(CANVAS_NOISE_MAGNITUDE)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fingerprint::tests::sample_fingerprint;

    #[test]
    fn test_canvas_level_is_embedded() {
        let script = spoof_canvas_script(&sample_fingerprint());
        assert!(script.starts_with("(()=>{const level=0.0125,mag=4;"));
        assert!(script.contains("'fillText','strokeText'"));
        assert!(script.contains("'toDataURL'"));
        assert!(script.contains("'convertToBlob'"));
    }

    #[test]
    fn test_exports_read_through_the_copy_contexts_own_methods() {
        let script = spoof_canvas_script(&sample_fingerprint());
        assert!(script.contains("raw.set(p,{read:p.getImageData,write:p.putImageData})"));
        assert!(script.contains("own=x&&raw.get(Object.getPrototypeOf(x))"));
        assert!(script.contains("own.read.call(x,"));
        assert!(script.contains("own.write.call(x,"));
    }

    #[test]
    fn test_zero_noise_disables_the_patch() {
        let fp = Fingerprint {
            canvas_noise_level: 0.0,
            ..sample_fingerprint()
        };
        let script = spoof_canvas_script(&fp);
        assert!(script.starts_with("(()=>{const level=0,mag=4;if(!(level>0))return;"));
    }

    #[test]
    fn test_nan_level_still_renders() {
        let fp = Fingerprint {
            canvas_noise_level: f64::NAN,
            ..sample_fingerprint()
        };
        assert!(spoof_canvas_script(&fp).contains("const level=NaN"));
    }
}
