macro_rules! guard_flag {
    () => {
        "__fingerprintIdentityApplied"
    };
}

/// The window property marking a page as already patched.
pub const GUARD_FLAG: &str = guard_flag!();

/// Bail out when the page was already patched, otherwise mark it. Must run inside a function body.
pub const INJECTION_GUARD: &str = concat!(
    "if(window.",
    guard_flag!(),
    "===true)return;Object.defineProperty(window,'",
    guard_flag!(),
    "',{value:true,enumerable:false,configurable:false,writable:false});"
);

/// `$n(fn,name)` makes `fn.toString()` look native. `$g(obj,key,value)` installs a native looking getter.
pub const NATIVE_HELPERS: &str = "const $n=(f,n)=>{try{Object.defineProperty(f,'toString',{value:()=>'function '+n+'() { [native code] }',configurable:true})}catch(e){}return f},$g=(o,k,v)=>{try{Object.defineProperty(o,k,{get:$n(()=>v,'get '+k),configurable:true,enumerable:true})}catch(e){}};";

/// Fill in the `window.chrome` globals a real desktop Chrome exposes.
pub const RUNTIME_SHIM: &str = r#"(()=>{const c=window.chrome||{};if(!c.app)c.app={isInstalled:false,InstallState:{DISABLED:'disabled',INSTALLED:'installed',NOT_INSTALLED:'not_installed'},RunningState:{CANNOT_RUN:'cannot_run',READY_TO_RUN:'ready_to_run',RUNNING:'running'},getDetails:$n(function getDetails(){return null},'getDetails'),getIsInstalled:$n(function getIsInstalled(){return false},'getIsInstalled'),runningState:$n(function runningState(){return'cannot_run'},'runningState')};if(!c.runtime)c.runtime={OnInstalledReason:{CHROME_UPDATE:'chrome_update',INSTALL:'install',SHARED_MODULE_UPDATE:'shared_module_update',UPDATE:'update'},OnRestartRequiredReason:{APP_UPDATE:'app_update',OS_UPDATE:'os_update',PERIODIC:'periodic'},PlatformArch:{ARM:'arm',ARM64:'arm64',X86_32:'x86-32',X86_64:'x86-64'},PlatformOs:{ANDROID:'android',CROS:'cros',LINUX:'linux',MAC:'mac',OPENBSD:'openbsd',WIN:'win'},RequestUpdateCheckStatus:{NO_UPDATE:'no_update',THROTTLED:'throttled',UPDATE_AVAILABLE:'update_available'},connect:$n(function connect(){return{name:'',onMessage:{addListener(){},removeListener(){}},onDisconnect:{addListener(){},removeListener(){}},postMessage(){},disconnect(){}}},'connect'),sendMessage:$n(function sendMessage(){},'sendMessage')};if(!c.csi)c.csi=$n(function csi(){const t=performance.timing;return{startE:t.navigationStart,onloadT:t.domContentLoadedEventEnd,pageT:performance.now(),tran:15}},'csi');if(!c.loadTimes)c.loadTimes=$n(function loadTimes(){const t=performance.timing,s=v=>v/1000;return{requestTime:s(t.navigationStart),startLoadTime:s(t.navigationStart),commitLoadTime:s(t.responseStart),finishDocumentLoadTime:s(t.domContentLoadedEventEnd),finishLoadTime:s(t.loadEventEnd),firstPaintTime:s(t.domContentLoadedEventEnd),firstPaintAfterLoadTime:0,navigationType:'Other',wasFetchedViaSpdy:true,wasNpnNegotiated:true,npnNegotiatedProtocol:'h2',wasAlternateProtocolAvailable:false,connectionInfo:'h2'}},'loadTimes');try{Object.defineProperty(window,'chrome',{value:c,writable:true,configurable:true,enumerable:true})}catch(e){}})();"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_checks_then_sets_the_flag() {
        let check = INJECTION_GUARD.find(&format!("window.{GUARD_FLAG}===true")).unwrap();
        let set = INJECTION_GUARD.find(&format!("'{GUARD_FLAG}'")).unwrap();
        assert!(check < set);
        assert!(INJECTION_GUARD.starts_with("if("));
        assert_eq!(INJECTION_GUARD.matches(GUARD_FLAG).count(), 2);
    }

    #[test]
    fn test_runtime_shim_fills_missing_globals_only() {
        for global in ["c.app", "c.runtime", "c.csi", "c.loadTimes"] {
            assert!(RUNTIME_SHIM.contains(&format!("if(!{global})")));
        }
    }
}
