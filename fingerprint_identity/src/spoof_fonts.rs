use crate::fingerprint::Fingerprint;
use crate::js::{JsLiteral, ScriptTemplate};

/// Declares every font with `@font-face` and answers `queryLocalFonts` and
/// `document.fonts.check` from the list alone.
const FONTS_TEMPLATE: ScriptTemplate = ScriptTemplate::new(
    r#"(()=>{const fonts=@{fonts},allowed=new Set(fonts),generic=new Set(['serif','sans-serif','monospace','cursive','fantasy','system-ui','emoji','math','fangsong','ui-serif','ui-sans-serif','ui-monospace','ui-rounded']);try{const style=document.createElement('style');style.textContent=fonts.map(f=>'@font-face{font-family:'+JSON.stringify(f)+';src:local('+JSON.stringify(f)+')}').join('');const add=()=>(document.head||document.documentElement).appendChild(style);if(document.head||document.documentElement)add();else document.addEventListener('DOMContentLoaded',add,{once:true})}catch(e){}if(typeof window.queryLocalFonts==='function'){const data=fonts.map(f=>({family:f,fullName:f,postscriptName:f.split(' ').join(''),style:'Regular'}));try{Object.defineProperty(window,'queryLocalFonts',{value:$n(function queryLocalFonts(){return Promise.resolve(data.slice())},'queryLocalFonts'),configurable:true,writable:true})}catch(e){}}const fs=document.fonts;if(fs&&typeof fs.check==='function'){const shorthand=new RegExp('^(?:.*?[0-9.]+(?:px|pt|em|rem|%)(?:\\/[^ ]+)? +)?(.+)$'),families=q=>{const m=String(q).match(shorthand);return(m?m[1]:String(q)).split(',').map(f=>f.trim().split('"').join('').split("'").join(''))};try{Object.defineProperty(fs,'check',{value:$n(function check(font){return families(font).every(f=>allowed.has(f)||generic.has(f.toLowerCase()))},'check'),configurable:true,writable:true})}catch(e){}}})();"#,
);

/// Report exactly the fingerprint's font list.
pub fn spoof_fonts_script(fingerprint: &Fingerprint) -> String {
    FONTS_TEMPLATE.render(&[(
        "fonts",
        JsLiteral::strings(fingerprint.font_list.iter().map(String::as_str)),
    )])
}
