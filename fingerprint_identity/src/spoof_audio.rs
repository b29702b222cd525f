use crate::fingerprint::Fingerprint;
use crate::js::{JsLiteral, ScriptTemplate};

/// Decoded and rendered samples are shifted by a uniform value in `[-level/2, level/2]`.
const AUDIO_TEMPLATE: ScriptTemplate = ScriptTemplate::new(
    r#"(()=>{const level=@{level};if(!(level>0))return;const shake=b=>{try{for(let ch=0;ch<b.numberOfChannels;ch++){const d=b.getChannelData(ch);for(let i=0;i<d.length;i++)d[i]+=(Math.random()-0.5)*level}}catch(e){}return b};Array.from(new Set([window.AudioContext,window.webkitAudioContext,window.OfflineAudioContext].filter(Boolean))).forEach(C=>{const dec=C.prototype.decodeAudioData;if(typeof dec!=='function')return;Object.defineProperty(C.prototype,'decodeAudioData',{value:$n(function decodeAudioData(data,ok,fail){const p=dec.call(this,data,ok?b=>ok(shake(b)):undefined,fail);return ok?p:p.then(shake)},'decodeAudioData'),configurable:true,writable:true})});const O=window.OfflineAudioContext,render=O&&O.prototype.startRendering;if(typeof render==='function')Object.defineProperty(O.prototype,'startRendering',{value:$n(function startRendering(){return render.apply(this,arguments).then(shake)},'startRendering'),configurable:true,writable:true})})();"#,
);

/// Perturb decoded and rendered audio by the fingerprint's audio noise level.
pub fn spoof_audio_script(fingerprint: &Fingerprint) -> String {
    AUDIO_TEMPLATE.render(&[("level", JsLiteral::Num(fingerprint.audio_noise_level))])
}
