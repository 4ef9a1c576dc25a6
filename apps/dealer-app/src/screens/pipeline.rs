//! Deals pipeline: one Kanban column per stage, with move controls.

use dealer_domain::prelude::*;
use leptos::prelude::*;

#[component]
pub fn PipelineScreen() -> impl IntoView {
    let board = expect_context::<RwSignal<PipelineBoard>>();
    let open_total = Memo::new(move |_| board.with(|b| b.totals()));
    let open_count = Memo::new(move |_| {
        board.with(|b| {
            DealStage::all()
                .into_iter()
                .filter(|s| s.is_open())
                .map(|s| b.count(s))
                .sum::<usize>()
        })
    });

    view! {
        <section class="screen pipeline">
            <div class="screen-head">
                <h2>"Deals pipeline"</h2>
                <p class="screen-subtitle">
                    {move || open_count.get()}
                    " open deals worth "
                    {move || open_total.get().display()}
                </p>
            </div>
            <div class="board">
                {DealStage::all().into_iter().map(|stage| view! {
                    <PipelineColumn stage board/>
                }).collect::<Vec<_>>()}
            </div>
        </section>
    }
}

/// One stage column: header with count and value, then the deal cards.
#[component]
fn PipelineColumn(stage: DealStage, board: RwSignal<PipelineBoard>) -> impl IntoView {
    let count = Memo::new(move |_| board.with(|b| b.count(stage)));
    let total = Memo::new(move |_| board.with(|b| b.stage_total(stage)));

    view! {
        <div class="board-column" class=("closed", move || !stage.is_open())>
            <header class="column-head">
                <span class="column-stage">{stage.display_name()}</span>
                <span class="column-count">{move || count.get()}</span>
                <span class="column-total">{move || total.get().display()}</span>
            </header>
            <div class="column-cards">
                {move || board.with(|b| {
                    b.column(stage)
                        .into_iter()
                        .map(|deal| {
                            let deal = deal.clone();
                            view! { <DealCard deal board/> }
                        })
                        .collect::<Vec<_>>()
                })}
            </div>
        </div>
    }
}

#[component]
fn DealCard(deal: Deal, board: RwSignal<PipelineBoard>) -> impl IntoView {
    let stage = deal.stage;
    let advance_label = stage.next().map(|next| next.display_name());
    let back_label = stage.previous().filter(|_| stage.is_open()).map(|prev| prev.display_name());

    let on_advance = {
        let id = deal.id.clone();
        move |_| {
            board.update(|b| {
                if let Err(e) = b.advance(&id) {
                    tracing::warn!(error = %e, deal = %id, "advance rejected");
                }
            })
        }
    };
    let on_back = {
        let id = deal.id.clone();
        move |_| {
            board.update(|b| {
                if let Some(prev) = stage.previous() {
                    if let Err(e) = b.move_to(&id, prev) {
                        tracing::warn!(error = %e, deal = %id, "move rejected");
                    }
                }
            })
        }
    };

    view! {
        <article class="deal-card">
            <header class="deal-head">
                <span class="deal-customer">{deal.customer.clone()}</span>
                <span class="deal-value">{deal.value.display()}</span>
            </header>
            <p class="deal-model">{deal.model_name.clone()}</p>
            {deal.note.clone().map(|note| view! { <p class="deal-note">{note}</p> })}
            <footer class="deal-actions">
                {back_label.map(|label| view! {
                    <button class="btn btn-ghost" on:click=on_back>
                        {format!("Back to {label}")}
                    </button>
                })}
                {advance_label.map(|label| view! {
                    <button class="btn" on:click=on_advance>
                        {format!("Move to {label}")}
                    </button>
                })}
            </footer>
        </article>
    }
}
