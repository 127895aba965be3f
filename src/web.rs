//! Thin wrappers over the browser APIs the site touches.
//!
//! Only the wasm32 build talks to the DOM; native builds (unit tests) get
//! inert stand-ins so the site logic can run without a browser.

#[cfg(target_arch = "wasm32")]
mod imp {
    const PREFIX: &str = "Oxford Academy";

    pub fn log(msg: &str) {
        web_sys::console::log_1(&format!("{PREFIX}: {msg}").into());
    }

    pub fn warn(msg: &str) {
        web_sys::console::warn_1(&format!("{PREFIX}: {msg}").into());
    }

    pub fn alert(msg: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(e) = window.alert_with_message(msg) {
            warn(&format!("alert failed: {e:?}"));
        }
    }

    /// `tel:` links navigate in place; anything else opens a new tab.
    pub fn open_url(url: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let result = if url.starts_with("tel:") {
            window.location().set_href(url)
        } else {
            window.open_with_url_and_target(url, "_blank").map(|_| ())
        };
        if let Err(e) = result {
            warn(&format!("could not open {url}: {e:?}"));
        }
    }

    pub fn location_hash() -> String {
        web_sys::window()
            .and_then(|w| w.location().hash().ok())
            .unwrap_or_default()
    }

    pub fn set_location_hash(hash: &str) {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_hash(hash) {
                warn(&format!("could not update the URL: {e:?}"));
            }
        }
    }

    pub fn now_ms() -> f64 {
        web_sys::window()
            .and_then(|w| w.performance())
            .map(|p| p.now())
            .unwrap_or_else(js_sys::Date::now)
    }

    pub fn current_year() -> u32 {
        js_sys::Date::new_0().get_full_year()
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod imp {
    pub fn log(_msg: &str) {}

    pub fn warn(_msg: &str) {}

    pub fn alert(_msg: &str) {}

    pub fn open_url(_url: &str) {}

    pub fn location_hash() -> String {
        String::new()
    }

    pub fn set_location_hash(_hash: &str) {}

    pub fn now_ms() -> f64 {
        0.0
    }

    pub fn current_year() -> u32 {
        2026
    }
}

pub use imp::*;
