//! Page header with the help control

use leptos::prelude::*;

use crate::tour::TourController;

#[component]
pub fn Header(tours: TourController) -> impl IntoView {
    view! {
        <header class="cabecalho">
            <div>
                <h1>"Contador de Cliques"</h1>
                <p class="subtitulo">"Quatro botões, contagens do dia."</p>
            </div>
            <button
                id="ajuda"
                class="ajuda"
                title="Rever o tutorial"
                on:click=move |_| tours.show_main()
            >
                "Ajuda"
            </button>
        </header>
    }
}
