//! Today's per-button counters

use leptos::prelude::*;
use shared::{CountsSnapshot, BUTTON_IDS};

#[component]
pub fn CountersPanel(counts: RwSignal<CountsSnapshot>) -> impl IntoView {
    view! {
        <section class="contagens">
            <h2>"Cliques de hoje"</h2>
            <div class="contagens-grelha">
                {BUTTON_IDS
                    .iter()
                    .map(|id| {
                        let id = *id;
                        view! {
                            <div class="contagem">
                                <span class="contagem-nome">{id}</span>
                                <span class="contador" data-contador=id>
                                    {move || counts.with(|snapshot| count_for(snapshot, id))}
                                </span>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}

/// what a counter shows for `id` under the current snapshot: the fetched
/// value, or 0 when the snapshot has no entry for the button
fn count_for(snapshot: &CountsSnapshot, id: &str) -> u64 {
    snapshot.get(id).copied().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_follow_the_latest_snapshot_wholesale() {
        let mut snapshot = CountsSnapshot::new();
        snapshot.insert("Botão 1".to_string(), 4);
        snapshot.insert("Botão 2".to_string(), 9);
        assert_eq!(count_for(&snapshot, "Botão 1"), 4);
        assert_eq!(count_for(&snapshot, "Botão 2"), 9);

        // a later fetch replaces the snapshot entirely; a button missing
        // from the new one shows 0, not its previous value
        let mut replacement = CountsSnapshot::new();
        replacement.insert("Botão 1".to_string(), 5);
        snapshot = replacement;
        assert_eq!(count_for(&snapshot, "Botão 1"), 5);
        assert_eq!(count_for(&snapshot, "Botão 2"), 0);
    }

    #[test]
    fn test_empty_snapshot_shows_zero_for_every_button() {
        let snapshot = CountsSnapshot::new();
        for id in BUTTON_IDS {
            assert_eq!(count_for(&snapshot, id), 0);
        }
    }
}
