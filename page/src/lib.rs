//! ==============================================================================
//! lib.rs - Click Page
//! ==============================================================================
//!
//! purpose:
//!     leptos wasm front-end for the click-counter page. four buttons register
//!     clicks against the backend, a counters panel mirrors today's totals,
//!     a transient modal shows the detail of each click, and a first-run
//!     guided tour plays when an external tour library is present.
//!
//! architecture:
//!     - leptos csr (client-side rendering), compiled to wasm
//!     - calls the backend over fetch (relative paths, same origin)
//!     - all page state lives in signals built here at startup; no
//!       module-scope DOM lookups
//!     - the backend that persists clicks is not part of this repository
//!
//! ==============================================================================

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::{provide_meta_context, Title};
use shared::CountsSnapshot;
use wasm_bindgen::prelude::*;

pub mod api;
pub mod components;
pub mod flags;
pub mod modal;
pub mod tour;

use components::{ButtonPanel, ClickModal, CountersPanel, Header};
use modal::ModalController;
use tour::{TourController, TourEngine};

// ==============================================================================
// main entry point
// ==============================================================================

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}

// ==============================================================================
// app component
// ==============================================================================

#[component]
fn App() -> impl IntoView {
    provide_meta_context();

    // counters start at zero and only ever show the last good snapshot
    let counts = RwSignal::new(CountsSnapshot::default());
    let modal = ModalController::new();
    let tours = TourController::new(TourEngine::detect());

    // initial counts; a failure here leaves the defaults in place
    Effect::new(move || {
        spawn_local(async move {
            match api::fetch_today_counts().await {
                Ok(today) => counts.set(today.contagens),
                Err(_) => {}
            }
        });
    });

    // first visit plays the guided tour once
    Effect::new(move || tours.autoplay_main());

    view! {
        <Title text="Contador de Cliques"/>
        <Header tours=tours/>
        <main class="pagina">
            <ButtonPanel counts=counts modal=modal tours=tours/>
            <CountersPanel counts=counts/>
        </main>
        <ClickModal modal=modal/>
    }
}
