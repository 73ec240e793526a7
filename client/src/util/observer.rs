//! `IntersectionObserver` glue for the scroll trackers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages hand this module the elements they want watched and a callback that
//! feeds `SlideDeck` or `RevealSet`. The observer disconnects when dropped,
//! so parking it in an owner-scoped `StoredValue` ties its lifetime to the
//! component that created it.

/// Options shared by every observer this crate creates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObserverOptions {
    pub threshold: f64,
    pub root_margin: &'static str,
}

impl ObserverOptions {
    pub const fn new(threshold: f64, root_margin: &'static str) -> Self {
        Self { threshold, root_margin }
    }
}

/// A connected observer plus the closure it calls back into.
#[cfg(feature = "hydrate")]
pub struct Observer {
    inner: web_sys::IntersectionObserver,
    _callback: wasm_bindgen::closure::Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>,
}

#[cfg(feature = "hydrate")]
impl Observer {
    /// Create an observer rooted at `root` (the viewport when `None`).
    ///
    /// `on_entry` runs once per entry in each batch, in the order the
    /// browser reports them.
    pub fn new(
        options: ObserverOptions,
        root: Option<&web_sys::Element>,
        mut on_entry: impl FnMut(&web_sys::IntersectionObserverEntry, &web_sys::IntersectionObserver) + 'static,
    ) -> Result<Self, wasm_bindgen::JsValue> {
        use wasm_bindgen::JsCast as _;
        use wasm_bindgen::JsValue;
        use wasm_bindgen::closure::Closure;

        let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
                for entry in entries.iter() {
                    let entry = entry.unchecked_into::<web_sys::IntersectionObserverEntry>();
                    on_entry(&entry, &observer);
                }
            },
        );

        let init = web_sys::IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        init.set_root_margin(options.root_margin);
        init.set_root(root);

        let inner = web_sys::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        Ok(Self { inner, _callback: callback })
    }

    /// Watch `target`. A missing element is skipped.
    pub fn observe(&self, target: Option<&web_sys::Element>) {
        if let Some(target) = target {
            self.inner.observe(target);
        }
    }

    pub fn disconnect(&self) {
        self.inner.disconnect();
    }
}

#[cfg(feature = "hydrate")]
impl Drop for Observer {
    fn drop(&mut self) {
        self.inner.disconnect();
    }
}
