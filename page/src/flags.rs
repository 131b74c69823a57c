//! ==============================================================================
//! flags.rs - once-per-profile flags in localStorage
//! ==============================================================================
//!
//! purpose:
//!     the two "already seen" markers behind the first-run tutorials. a flag
//!     is just the presence of its key; a browser without storage access
//!     behaves as if nothing was ever seen.
//!
//! ==============================================================================

use web_sys::Storage;

pub const MAIN_TOUR_SEEN_KEY: &str = "contador_cliques_tour_visto";
pub const MODAL_TIP_SEEN_KEY: &str = "contador_cliques_dica_modal_vista";

/// a named boolean flag persisted in the browser profile
#[derive(Clone, Copy)]
pub struct SeenFlag {
    key: &'static str,
}

impl SeenFlag {
    pub const fn new(key: &'static str) -> Self {
        Self { key }
    }

    pub fn is_set(&self) -> bool {
        local_storage()
            .and_then(|storage| storage.get_item(self.key).ok().flatten())
            .is_some()
    }

    pub fn set(&self) {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(self.key, "1");
        }
    }
}

fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}
