//! ==============================================================================
//! modal.rs - detail modal controller
//! ==============================================================================
//!
//! purpose:
//!     owns the state of the click-detail modal: the receipt being shown and
//!     the single auto-dismiss timer. the page used to keep a global timer
//!     handle; here the controller is the only owner, so re-opening always
//!     cancels the previous timer before arming a new one.
//!
//! shape:
//!     - ModalMachine: pure open/close/timer transitions, epoch-counted so a
//!       stale timer firing after a re-open is ignored. unit-tested natively.
//!     - ModalController: leptos glue holding the receipt signal and the live
//!       gloo timeout (dropping the handle cancels the browser timer).
//!
//! ==============================================================================

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use shared::ClickReceipt;

/// how long the modal stays up without interaction
pub const MODAL_DISMISS_MS: u32 = 8_000;

// ==============================================================================
// pure state machine
// ==============================================================================

/// modal visibility transitions, independent of the DOM and of real timers.
///
/// every `open` bumps the epoch; a dismissal timer only closes the modal if
/// it carries the epoch of the open that armed it.
#[derive(Debug, Default)]
pub struct ModalMachine {
    epoch: u64,
    visible: bool,
}

impl ModalMachine {
    pub fn new() -> Self {
        Self::default()
    }

    /// transition to visible; returns the epoch the dismissal timer must carry
    pub fn open(&mut self) -> u64 {
        self.epoch += 1;
        self.visible = true;
        self.epoch
    }

    /// explicit close (close control, backdrop, escape)
    pub fn close(&mut self) {
        self.visible = false;
    }

    /// a dismissal timer fired; returns whether the modal should hide now
    pub fn timer_fired(&mut self, epoch: u64) -> bool {
        if self.visible && epoch == self.epoch {
            self.visible = false;
            true
        } else {
            false
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

// ==============================================================================
// leptos controller
// ==============================================================================

/// handle to the modal, cheap to copy into event handlers
#[derive(Clone, Copy)]
pub struct ModalController {
    receipt: RwSignal<Option<ClickReceipt>>,
    machine: StoredValue<ModalMachine>,
    timer: StoredValue<Option<Timeout>, LocalStorage>,
}

impl ModalController {
    pub fn new() -> Self {
        Self {
            receipt: RwSignal::new(None),
            machine: StoredValue::new(ModalMachine::new()),
            timer: StoredValue::new_local(None),
        }
    }

    /// show the modal for `receipt` and (re-)arm the auto-dismiss timer
    pub fn open(&self, receipt: ClickReceipt) {
        let epoch = self
            .machine
            .try_update_value(|machine| machine.open())
            .unwrap_or_default();
        self.receipt.set(Some(receipt));

        let controller = *self;
        self.timer.update_value(|slot| {
            // replacing the slot drops any previous timeout, cancelling it
            *slot = Some(Timeout::new(MODAL_DISMISS_MS, move || {
                controller.timer_fired(epoch);
            }));
        });
    }

    /// hide the modal and cancel the pending timer
    pub fn close(&self) {
        self.machine.update_value(|machine| machine.close());
        self.receipt.set(None);
        self.timer.update_value(|slot| *slot = None);
    }

    fn timer_fired(&self, epoch: u64) {
        let expired = self
            .machine
            .try_update_value(|machine| machine.timer_fired(epoch))
            .unwrap_or(false);
        if expired {
            self.receipt.set(None);
            self.timer.update_value(|slot| *slot = None);
        }
    }

    /// reactive read of the receipt on display
    pub fn receipt(&self) -> Option<ClickReceipt> {
        self.receipt.get()
    }

    /// reactive visibility check
    pub fn is_open(&self) -> bool {
        self.receipt.with(|receipt| receipt.is_some())
    }
}

impl Default for ModalController {
    fn default() -> Self {
        Self::new()
    }
}

// ==============================================================================
// tests
// ==============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_then_timer_hides() {
        let mut machine = ModalMachine::new();
        let epoch = machine.open();
        assert!(machine.is_visible());
        assert!(machine.timer_fired(epoch));
        assert!(!machine.is_visible());
    }

    #[test]
    fn test_reopen_invalidates_earlier_timer() {
        let mut machine = ModalMachine::new();
        let first = machine.open();
        let second = machine.open();

        // the first timer fires at its original deadline but must not close
        // the re-opened modal
        assert!(!machine.timer_fired(first));
        assert!(machine.is_visible());

        assert!(machine.timer_fired(second));
        assert!(!machine.is_visible());
    }

    #[test]
    fn test_explicit_close_makes_timer_a_no_op() {
        let mut machine = ModalMachine::new();
        let epoch = machine.open();
        machine.close();
        assert!(!machine.timer_fired(epoch));
        assert!(!machine.is_visible());
    }

    #[test]
    fn test_timer_before_any_open_is_ignored() {
        let mut machine = ModalMachine::new();
        assert!(!machine.timer_fired(0));
        assert!(!machine.is_visible());
    }
}
