use crate::fingerprint::Fingerprint;
use crate::js::{JsLiteral, ScriptTemplate};

/// Forces `Intl`, the `toLocale*` family, `toString`, `toDateString`,
/// `toTimeString`, the local date getters and `getTimezoneOffset` onto one
/// timezone and locale, whatever the caller passes. Local fields come from
/// the zone's wall clock as reported by `formatToParts`.
const TIMEZONE_TEMPLATE: ScriptTemplate = ScriptTemplate::new(
    r#"(()=>{const tz=@{timezone},loc=@{locale},DTF=Intl.DateTimeFormat,zoned=o=>Object.assign({},o||{},{timeZone:tz}),wrapIntl=(k,opts)=>{const C=Intl[k];if(typeof C!=='function')return;const P=function(l,o){return new C(loc,opts(o))};P.prototype=C.prototype;P.supportedLocalesOf=C.supportedLocalesOf;try{Object.defineProperty(Intl,k,{value:$n(P,k),configurable:true,writable:true})}catch(e){}};wrapIntl('DateTimeFormat',zoned);['NumberFormat','Collator','PluralRules','RelativeTimeFormat','ListFormat','DisplayNames','Segmenter'].forEach(k=>wrapIntl(k,o=>o));const patch=(proto,key,make)=>{const orig=proto[key];if(typeof orig!=='function')return;Object.defineProperty(proto,key,{value:$n(make(orig),key),configurable:true,writable:true})};['toLocaleString','toLocaleDateString','toLocaleTimeString'].forEach(k=>patch(Date.prototype,k,o=>function(l,opts){return o.call(this,loc,zoned(opts))}));patch(Number.prototype,'toLocaleString',o=>function(l,opts){return o.call(this,loc,opts)});patch(String.prototype,'localeCompare',o=>function(that,l,opts){return o.call(this,that,loc,opts)});const parts=new DTF('en-US',{timeZone:tz,hourCycle:'h23',year:'numeric',month:'numeric',day:'numeric',hour:'numeric',minute:'numeric',second:'numeric'}),names=new DTF('en-US',{timeZone:tz,timeZoneName:'long'}),time=Date.prototype.getTime,wall=d=>{const t=time.call(d);if(isNaN(t))return null;const p={};parts.formatToParts(d).forEach(x=>{p[x.type]=x.value});const u=new Date(0);u.setUTCFullYear(+p.year,+p.month-1,+p.day);u.setUTCHours(+p.hour%24,+p.minute,+p.second,0);return{u:u,off:Math.round((t-(t%1000+1000)%1000-time.call(u))/60000),d:d}},pad=(n,l)=>String(n).padStart(l||2,'0'),DAYS=['Sun','Mon','Tue','Wed','Thu','Fri','Sat'],MONTHS=['Jan','Feb','Mar','Apr','May','Jun','Jul','Aug','Sep','Oct','Nov','Dec'],year=y=>y<0?'-'+pad(-y,6):pad(y,4),zoneName=d=>{const n=names.formatToParts(d).find(x=>x.type==='timeZoneName');return n?n.value:tz},dateText=w=>DAYS[w.u.getUTCDay()]+' '+MONTHS[w.u.getUTCMonth()]+' '+pad(w.u.getUTCDate())+' '+year(w.u.getUTCFullYear()),timeText=w=>{const a=Math.abs(w.off);return pad(w.u.getUTCHours())+':'+pad(w.u.getUTCMinutes())+':'+pad(w.u.getUTCSeconds())+' GMT'+(w.off>0?'-':'+')+pad(Math.floor(a/60))+pad(a%60)+' ('+zoneName(w.d)+')'},zonedCall=(key,f,bad)=>patch(Date.prototype,key,()=>function(){const w=wall(this);return w?f(w):bad});zonedCall('getTimezoneOffset',w=>w.off,NaN);[['getFullYear','getUTCFullYear'],['getMonth','getUTCMonth'],['getDate','getUTCDate'],['getDay','getUTCDay'],['getHours','getUTCHours'],['getMinutes','getUTCMinutes'],['getSeconds','getUTCSeconds']].forEach(([k,m])=>zonedCall(k,w=>w.u[m](),NaN));zonedCall('toString',w=>dateText(w)+' '+timeText(w),'Invalid Date');zonedCall('toDateString',dateText,'Invalid Date');zonedCall('toTimeString',timeText,'Invalid Date')})();"#,
);

/// Pin dates and `Intl` to the fingerprint's timezone and locale.
pub fn spoof_timezone_script(fingerprint: &Fingerprint) -> String {
    TIMEZONE_TEMPLATE.render(&[
        ("timezone", JsLiteral::Str(&fingerprint.timezone)),
        ("locale", JsLiteral::Str(&fingerprint.locale)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fingerprint::tests::sample_fingerprint;

    #[test]
    fn test_timezone_and_locale_embedded_once() {
        let script = spoof_timezone_script(&sample_fingerprint());
        assert!(script.starts_with("(()=>{const tz='Europe/Berlin',loc='de-DE',"));
        assert_eq!(script.matches("'Europe/Berlin'").count(), 1);
        assert!(script.contains("'getTimezoneOffset'"));
    }

    #[test]
    fn test_host_zone_entry_points_are_patched() {
        let script = spoof_timezone_script(&sample_fingerprint());
        for key in ["toString", "toDateString", "toTimeString", "getTimezoneOffset"] {
            assert!(script.contains(&format!("zonedCall('{key}',")), "{key}");
        }
        for key in [
            "getFullYear",
            "getMonth",
            "getDate",
            "getDay",
            "getHours",
            "getMinutes",
            "getSeconds",
        ] {
            assert!(script.contains(&format!("['{key}','getUTC")), "{key}");
        }
    }
}
