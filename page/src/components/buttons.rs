//! Click buttons and their per-button click flow

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos::task::spawn_local;
use shared::{CountsSnapshot, BUTTON_IDS};

use crate::api;
use crate::modal::ModalController;
use crate::tour::TourController;

/// how long the thank-you message stays in the button's message slot
const THANKS_VISIBLE_MS: u32 = 2_500;

const THANKS_MESSAGE: &str = "Obrigado pelo clique!";

#[component]
pub fn ButtonPanel(
    counts: RwSignal<CountsSnapshot>,
    modal: ModalController,
    tours: TourController,
) -> impl IntoView {
    view! {
        <section class="botoes">
            {BUTTON_IDS
                .iter()
                .map(|id| view! { <ClickButton id=*id counts=counts modal=modal tours=tours/> })
                .collect::<Vec<_>>()}
        </section>
    }
}

#[component]
fn ClickButton(
    id: &'static str,
    counts: RwSignal<CountsSnapshot>,
    modal: ModalController,
    tours: TourController,
) -> impl IntoView {
    let (busy, set_busy) = signal(false);
    let (thanked, set_thanked) = signal(false);
    let thanks_timer = StoredValue::new_local(None::<Timeout>);

    let on_click = move |_| {
        if busy.get_untracked() {
            return;
        }
        set_busy.set(true);

        spawn_local(async move {
            match api::register_click(id).await {
                Ok(receipt) => {
                    // refresh every counter from a fresh snapshot; a failed
                    // refresh keeps the previous values on screen
                    match api::fetch_today_counts().await {
                        Ok(today) => counts.set(today.contagens),
                        Err(_) => {}
                    }

                    set_thanked.set(true);
                    thanks_timer.update_value(|slot| {
                        // replacing the slot cancels a still-pending hide
                        *slot = Some(Timeout::new(THANKS_VISIBLE_MS, move || {
                            set_thanked.set(false);
                        }));
                    });

                    modal.open(receipt);
                    tours.modal_opened();
                }
                Err(err) => alert(&err.to_string()),
            }
            set_busy.set(false);
        });
    };

    view! {
        <div class="botao-bloco">
            <button
                class="botao"
                data-botao=id
                disabled=move || busy.get()
                on:click=on_click
            >
                {id}
            </button>
            <p class="mensagem" data-mensagem=id>
                {move || thanked.get().then_some(THANKS_MESSAGE)}
            </p>
        </div>
    }
}

fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
