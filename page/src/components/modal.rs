//! Click-detail modal view
//!
//! The element ids are part of the page's DOM contract: `modal-fundo`
//! (backdrop), `modal-fechar` (close control) and the four data fields.

use leptos::prelude::*;
use leptos::{ev, html};

use crate::modal::ModalController;

#[component]
pub fn ClickModal(modal: ModalController) -> impl IntoView {
    let close_ref: NodeRef<html::Button> = NodeRef::new();

    // move focus to the close control whenever the modal opens
    Effect::new(move || {
        if modal.is_open() {
            if let Some(button) = close_ref.get() {
                let _ = button.focus();
            }
        }
    });

    // escape closes the modal while it is visible
    let escape = window_event_listener(ev::keydown, move |event| {
        if event.key() == "Escape" && modal.is_open() {
            modal.close();
        }
    });
    on_cleanup(move || escape.remove());

    view! {
        {move || {
            modal
                .receipt()
                .map(|receipt| {
                    view! {
                        <div
                            id="modal-fundo"
                            class="modal-fundo"
                            on:click=move |event| {
                                // only a click on the backdrop itself closes;
                                // clicks inside the content bubble up here too
                                if event.target() == event.current_target() {
                                    modal.close();
                                }
                            }
                        >
                            <div class="modal-conteudo" role="dialog" aria-modal="true">
                                <h2>"Detalhes do clique"</h2>
                                <dl>
                                    <dt>"Botão"</dt>
                                    <dd id="modal-botao">{receipt.botao.clone()}</dd>
                                    <dt>"Data"</dt>
                                    <dd id="modal-data">{receipt.data.clone()}</dd>
                                    <dt>"Hora"</dt>
                                    <dd id="modal-hora">{receipt.hora.clone()}</dd>
                                    <dt>"Total deste botão hoje"</dt>
                                    <dd id="modal-total">{receipt.total_botao_hoje}</dd>
                                </dl>
                                <button
                                    id="modal-fechar"
                                    class="modal-fechar"
                                    node_ref=close_ref
                                    on:click=move |_| modal.close()
                                >
                                    "Fechar"
                                </button>
                            </div>
                        </div>
                    }
                })
        }}
    }
}
