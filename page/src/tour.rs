//! ==============================================================================
//! tour.rs - first-run guided tours
//! ==============================================================================
//!
//! purpose:
//!     drives the two tutorials: the main page tour (autoplayed on the first
//!     visit, replayable from the help control) and the narrower modal tip
//!     (played the first time the modal opens). each has its own seen-flag.
//!
//! capability:
//!     the actual overlay rendering comes from an optional external library
//!     exposed as a window-global `startGuidedTour(tourId, onDone)`. the
//!     global is looked up exactly once at startup and carried around as a
//!     present/absent variant; when absent every tour operation is a no-op,
//!     never an error. `onDone` fires on completion or dismissal by any path
//!     and is what marks the flag, so an interrupted tour autoplays again.
//!
//! ==============================================================================

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

use crate::flags::{SeenFlag, MAIN_TOUR_SEEN_KEY, MODAL_TIP_SEEN_KEY};

/// name of the window global the tour library installs
const TOUR_GLOBAL: &str = "startGuidedTour";

const TOUR_MAIN: &str = "principal";
const TOUR_MODAL_TIP: &str = "dica-modal";

// ==============================================================================
// external capability
// ==============================================================================

/// binding to the external tour-rendering library
pub struct TourEngine {
    start: js_sys::Function,
}

impl TourEngine {
    /// look for the tour global; `None` simply means the library was not
    /// loaded on this page
    pub fn detect() -> Option<Self> {
        let window = web_sys::window()?;
        let value = js_sys::Reflect::get(&window, &JsValue::from_str(TOUR_GLOBAL)).ok()?;
        let start = value.dyn_into::<js_sys::Function>().ok()?;
        Some(Self { start })
    }

    fn start(&self, tour_id: &str, on_done: impl FnOnce() + 'static) {
        let done = Closure::once_into_js(on_done);
        let _ = self
            .start
            .call2(&JsValue::NULL, &JsValue::from_str(tour_id), &done);
    }
}

// ==============================================================================
// controller
// ==============================================================================

struct Tours {
    engine: Option<TourEngine>,
    main_seen: SeenFlag,
    tip_seen: SeenFlag,
}

impl Tours {
    fn play(&self, tour_id: &'static str, flag: SeenFlag) {
        if let Some(engine) = &self.engine {
            engine.start(tour_id, move || flag.set());
        }
    }
}

/// handle to the tutorial subsystem, cheap to copy into event handlers
#[derive(Clone, Copy)]
pub struct TourController {
    inner: StoredValue<Tours, LocalStorage>,
}

impl TourController {
    pub fn new(engine: Option<TourEngine>) -> Self {
        Self {
            inner: StoredValue::new_local(Tours {
                engine,
                main_seen: SeenFlag::new(MAIN_TOUR_SEEN_KEY),
                tip_seen: SeenFlag::new(MODAL_TIP_SEEN_KEY),
            }),
        }
    }

    /// play the main tour on a first visit only
    pub fn autoplay_main(&self) {
        self.inner.with_value(|tours| {
            if !tours.main_seen.is_set() {
                tours.play(TOUR_MAIN, tours.main_seen);
            }
        });
    }

    /// play the main tour unconditionally (help control)
    pub fn show_main(&self) {
        self.inner
            .with_value(|tours| tours.play(TOUR_MAIN, tours.main_seen));
    }

    /// the modal just opened; play the one-time modal tip
    pub fn modal_opened(&self) {
        self.inner.with_value(|tours| {
            if !tours.tip_seen.is_set() {
                tours.play(TOUR_MODAL_TIP, tours.tip_seen);
            }
        });
    }
}
