//! Browser side of the theme store.
//!
//! SYSTEM CONTEXT
//! ==============
//! `BrowserBackend` implements `ThemeBackend` over `localStorage`,
//! `document.cookie`, and `matchMedia`, toggling the `dark` class on `<html>`
//! only. The inline bootstrap script applies the same precedence before first
//! paint; after hydration `attach` hands ownership to the controller and wires
//! cross-tab and visibility resync.
//!
//! TRADE-OFFS
//! ==========
//! Every browser call is best-effort. SSR and native test builds compile the
//! backend as a no-op so server rendering stays deterministic.

#[cfg(test)]
#[path = "theme_dom_test.rs"]
mod theme_dom_test;

use std::sync::Arc;

use crate::state::theme::{ThemeBackend, ThemeController, ThemeError, ThemeMode, parse_mode};
#[cfg(feature = "hydrate")]
use crate::state::theme::{DARK_CLASS, THEME_KEY};

/// Controller type shared through Leptos context.
pub type SharedTheme = Arc<ThemeController<BrowserBackend>>;

/// Name of the global setter installed on `window`.
pub const GLOBAL_SETTER: &str = "__setTheme";

/// `<html>` attribute recording the mode the server rendered with. The
/// bootstrap script may change the class but never this attribute.
pub const SERVER_MODE_ATTR: &str = "data-server-theme";

/// Runs synchronously in `<head>`: stored value, then OS hint, then light.
pub const THEME_BOOTSTRAP_SCRIPT: &str = "(function(){\
var r=document.documentElement,m=null;\
try{m=window.localStorage.getItem('theme');}catch(e){}\
if(m!=='light'&&m!=='dark'){\
try{m=window.matchMedia('(prefers-color-scheme: dark)').matches?'dark':'light';}catch(e){m='light';}\
}\
r.classList.toggle('dark',m==='dark');\
})();";

/// `ThemeBackend` over the real browser APIs.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserBackend;

impl ThemeBackend for BrowserBackend {
    fn read_stored(&self) -> Result<Option<String>, ThemeError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .get_item(THEME_KEY)
                .map_err(|e| ThemeError::StorageUnavailable(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Ok(None)
        }
    }

    fn write_stored(&self, value: &str) -> Result<(), ThemeError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .set_item(THEME_KEY, value)
                .map_err(|e| ThemeError::StorageUnavailable(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = value;
            Ok(())
        }
    }

    fn write_cookie(&self, cookie: &str) -> Result<(), ThemeError> {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast as _;

            let document = web_sys::window()
                .and_then(|w| w.document())
                .ok_or_else(|| ThemeError::CookieUnavailable("no document".to_owned()))?
                .dyn_into::<web_sys::HtmlDocument>()
                .map_err(|_| ThemeError::CookieUnavailable("not an HTML document".to_owned()))?;
            document
                .set_cookie(cookie)
                .map_err(|e| ThemeError::CookieUnavailable(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = cookie;
            Ok(())
        }
    }

    fn prefers_dark(&self) -> Option<bool> {
        #[cfg(feature = "hydrate")]
        {
            web_sys::window()?
                .match_media("(prefers-color-scheme: dark)")
                .ok()
                .flatten()
                .map(|mq| mq.matches())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn apply(&self, mode: ThemeMode) {
        #[cfg(feature = "hydrate")]
        {
            let Some(root) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.document_element())
            else {
                return;
            };
            if let Err(e) = root.class_list().toggle_with_force(DARK_CLASS, mode.is_dark()) {
                log::warn!("theme: could not apply {mode}: {e:?}");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = mode;
        }
    }
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Result<web_sys::Storage, ThemeError> {
    web_sys::window()
        .ok_or_else(|| ThemeError::StorageUnavailable("no window".to_owned()))?
        .local_storage()
        .map_err(|e| ThemeError::StorageUnavailable(format!("{e:?}")))?
        .ok_or_else(|| ThemeError::StorageUnavailable("localStorage disabled".to_owned()))
}

/// Build the page's controller.
pub fn new_shared() -> SharedTheme {
    Arc::new(ThemeController::new(BrowserBackend))
}

/// Mode currently shown by `<html>`, as left by the bootstrap script.
pub fn document_mode() -> ThemeMode {
    #[cfg(feature = "hydrate")]
    {
        let dark = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
            .is_some_and(|root| root.class_list().contains(DARK_CLASS));
        ThemeMode::from_dark(dark)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        ThemeMode::Light
    }
}

/// Mode the hydrating client starts from: whatever the server rendered.
///
/// A missing or unknown attribute means a light render.
pub fn hydration_mode(server_attr: Option<&str>) -> ThemeMode {
    parse_mode(server_attr).unwrap_or_default()
}

/// Mode to render on first paint.
///
/// On the server this reads the request's `theme` cookie and color-scheme
/// client hint. In the browser it reads back the server's choice from
/// [`SERVER_MODE_ATTR`] so hydration sees identical markup; `attach`
/// publishes the resolved mode afterwards.
pub fn initial_mode() -> ThemeMode {
    #[cfg(feature = "ssr")]
    {
        use leptos::prelude::use_context;

        use crate::state::theme::{COLOR_SCHEME_HINT_HEADER, mode_from_request};

        use_context::<http::request::Parts>()
            .and_then(|parts| {
                mode_from_request(
                    header_str(&parts, http::header::COOKIE.as_str()),
                    header_str(&parts, COLOR_SCHEME_HINT_HEADER),
                )
            })
            .unwrap_or_default()
    }
    #[cfg(all(feature = "hydrate", not(feature = "ssr")))]
    {
        let attr = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
            .and_then(|root| root.get_attribute(SERVER_MODE_ATTR));
        hydration_mode(attr.as_deref())
    }
    #[cfg(not(any(feature = "hydrate", feature = "ssr")))]
    {
        document_mode()
    }
}

#[cfg(feature = "ssr")]
fn header_str<'a>(parts: &'a http::request::Parts, name: &str) -> Option<&'a str> {
    parts.headers.get(name).and_then(|value| value.to_str().ok())
}

/// Hand the document over to the controller after hydration.
///
/// Resolves the mode and publishes it to `mode` once hydration is done,
/// installs the global setter, and keeps the page in sync with other tabs
/// and with storage changes made while the tab was hidden. Listeners are
/// removed when the owner is cleaned up.
#[cfg(feature = "hydrate")]
pub fn attach(theme: SharedTheme, mode: leptos::prelude::RwSignal<ThemeMode>) {
    use leptos::ev;
    use leptos::prelude::*;

    // Effects run after hydration, so the toggle first matches the server
    // markup and then re-renders with the resolved mode.
    Effect::new({
        let theme = theme.clone();
        move |_| mode.set(theme.initialize())
    });
    install_global_setter(theme.clone(), mode);

    let storage = window_event_listener(ev::storage, {
        let theme = theme.clone();
        move |event: web_sys::StorageEvent| {
            if let Some(next) = theme.handle_storage_event(event.key().as_deref(), event.new_value().as_deref()) {
                mode.set(next);
            }
        }
    });
    let visibility = window_event_listener(ev::visibilitychange, move |_| {
        let visible = web_sys::window()
            .and_then(|w| w.document())
            .is_some_and(|d| d.visibility_state() == web_sys::VisibilityState::Visible);
        if visible {
            mode.set(theme.resync());
        }
    });

    on_cleanup(move || {
        storage.remove();
        visibility.remove();
    });
}

#[cfg(feature = "hydrate")]
fn install_global_setter(theme: SharedTheme, mode: leptos::prelude::RwSignal<ThemeMode>) {
    use leptos::prelude::Set as _;
    use wasm_bindgen::JsValue;
    use wasm_bindgen::closure::Closure;

    let Some(window) = web_sys::window() else {
        return;
    };
    let setter = Closure::<dyn Fn(JsValue)>::new(move |raw: JsValue| {
        let Some(next) = parse_mode(raw.as_string().as_deref()) else {
            log::debug!("theme: {GLOBAL_SETTER} ignored {raw:?}");
            return;
        };
        theme.set_theme(next);
        mode.set(next);
    });
    if let Err(e) = js_sys::Reflect::set(&window, &JsValue::from_str(GLOBAL_SETTER), setter.as_ref()) {
        log::warn!("theme: could not install {GLOBAL_SETTER}: {e:?}");
        return;
    }
    // Lives as long as the page.
    setter.forget();
}
