use crate::fingerprint::Fingerprint;
use crate::js::{JsLiteral, ScriptTemplate};
use crate::spoof_user_agent::build_high_entropy_data;

/// Navigator identity, client hints, PDF plugins and a relay-only WebRTC.
const NAVIGATOR_TEMPLATE: ScriptTemplate = ScriptTemplate::new(
    r#"(()=>{const nav=Navigator.prototype;$g(nav,'userAgent',@{user_agent});$g(nav,'appVersion',@{app_version});$g(nav,'platform',@{platform});$g(nav,'language',@{language});$g(nav,'languages',Object.freeze(@{languages}));$g(nav,'hardwareConcurrency',@{hardware_concurrency});$g(nav,'deviceMemory',@{device_memory});$g(nav,'vendor','Google Inc.');$g(nav,'webdriver',false);try{const names=['PDF Viewer','Chrome PDF Viewer','Chromium PDF Viewer','Microsoft Edge PDF Viewer','WebKit built-in PDF'],desc='Portable Document Format',mimes=['application/pdf','text/pdf'].map(t=>Object.create(MimeType.prototype,{type:{value:t},suffixes:{value:'pdf'},description:{value:desc}})),plugins=names.map(n=>{const p=Object.create(Plugin.prototype,{name:{value:n},filename:{value:'internal-pdf-viewer'},description:{value:desc},length:{value:mimes.length}});mimes.forEach((m,i)=>Object.defineProperty(p,i,{value:m}));return p}),list=(proto,items,key)=>{const a=Object.create(proto);items.forEach((x,i)=>{Object.defineProperty(a,i,{value:x,enumerable:true});Object.defineProperty(a,x[key],{value:x})});Object.defineProperties(a,{length:{value:items.length},item:{value:$n(function item(i){return items[i]||null},'item')},namedItem:{value:$n(function namedItem(n){return items.find(x=>x[key]===n)||null},'namedItem')},refresh:{value:$n(function refresh(){},'refresh')}});return a};mimes.forEach(m=>Object.defineProperty(m,'enabledPlugin',{value:plugins[0]}));$g(nav,'plugins',list(PluginArray.prototype,plugins,'name'));$g(nav,'mimeTypes',list(MimeTypeArray.prototype,mimes,'type'));$g(nav,'pdfViewerEnabled',true)}catch(e){}const brands=@{brands},hints=@{hints},ch=@{client_hint_platform};try{const proto=typeof NavigatorUAData!=='undefined'?NavigatorUAData.prototype:Object.prototype,low=()=>({brands:brands,mobile:false,platform:ch}),uad=Object.create(proto);Object.defineProperties(uad,{brands:{value:Object.freeze(brands),enumerable:true},mobile:{value:false,enumerable:true},platform:{value:ch,enumerable:true},getHighEntropyValues:{value:$n(function getHighEntropyValues(keys){const out=low();(Array.isArray(keys)?keys:[]).forEach(k=>{if(k in hints)out[k]=hints[k]});return Promise.resolve(out)},'getHighEntropyValues')},toJSON:{value:$n(function toJSON(){return low()},'toJSON')}});$g(nav,'userAgentData',uad)}catch(e){}['RTCPeerConnection','webkitRTCPeerConnection'].forEach(k=>{const O=window[k];if(typeof O!=='function')return;const relay=c=>Object.assign({},c||{},{iceTransportPolicy:'relay'}),P=function RTCPeerConnection(c,...rest){return new O(relay(c),...rest)};P.prototype=O.prototype;Object.setPrototypeOf(P,O);const set=O.prototype.setConfiguration;if(set)Object.defineProperty(O.prototype,'setConfiguration',{value:$n(function setConfiguration(c){return set.call(this,relay(c))},'setConfiguration'),configurable:true,writable:true});try{Object.defineProperty(window,k,{value:$n(P,'RTCPeerConnection'),configurable:true,writable:true})}catch(e){}})})();"#,
);

/// `navigator.appVersion`: the user-agent after its first `/`.
pub fn app_version(user_agent: &str) -> &str {
    user_agent
        .split_once('/')
        .map_or(user_agent, |(_, version)| version)
}

/// Pin the navigator identity to the fingerprint.
pub fn spoof_navigator_script(fingerprint: &Fingerprint) -> String {
    let ua_data = build_high_entropy_data(fingerprint);

    NAVIGATOR_TEMPLATE.render(&[
        ("user_agent", JsLiteral::Str(&fingerprint.user_agent)),
        ("app_version", JsLiteral::Str(app_version(&fingerprint.user_agent))),
        ("platform", JsLiteral::Str(&fingerprint.platform)),
        ("language", JsLiteral::Str(fingerprint.primary_language())),
        (
            "languages",
            JsLiteral::strings(fingerprint.languages.iter().map(String::as_str)),
        ),
        (
            "hardware_concurrency",
            JsLiteral::Int(fingerprint.hardware_concurrency),
        ),
        ("device_memory", JsLiteral::Int(fingerprint.device_memory)),
        ("brands", ua_data.brands_literal()),
        ("hints", ua_data.hints_literal()),
        ("client_hint_platform", JsLiteral::Str(&ua_data.platform)),
    ])
}
