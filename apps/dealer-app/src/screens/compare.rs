//! Side-by-side model comparison for the shortlist picked on the
//! models screen.

use crate::data;
use dealer_domain::prelude::*;
use leptos::prelude::*;

#[component]
pub fn CompareScreen() -> impl IntoView {
    let models = StoredValue::new(data::vehicle_models());
    let comparison = expect_context::<RwSignal<ComparisonSelection>>();
    let selected = Memo::new(move |_| {
        comparison.with(|c| {
            models.with_value(|all| {
                c.ids()
                    .iter()
                    .filter_map(|id| all.iter().find(|m| &m.id == id).cloned())
                    .collect::<Vec<_>>()
            })
        })
    });
    let count = Memo::new(move |_| selected.with(|s| s.len()));

    view! {
        <section class="screen compare">
            <div class="screen-head">
                <h2>"Compare"</h2>
                <p class="screen-subtitle">
                    {move || count.get()}
                    " of "
                    {MAX_COMPARE}
                    " models selected"
                </p>
                <Show when={move || count.get() > 0}>
                    <button class="btn btn-ghost" on:click=move |_| comparison.update(|c| c.clear())>
                        "Clear all"
                    </button>
                </Show>
            </div>

            {move || {
                let picked = selected.get();
                if picked.is_empty() {
                    view! {
                        <p class="empty-state">
                            "Nothing to compare yet. Pick up to "
                            {MAX_COMPARE}
                            " models from the models screen."
                        </p>
                    }
                    .into_any()
                } else {
                    view! { <CompareTable models=picked/> }.into_any()
                }
            }}
        </section>
    }
}

#[component]
fn CompareTable(models: Vec<VehicleModel>) -> impl IntoView {
    let comparison = expect_context::<RwSignal<ComparisonSelection>>();

    view! {
        <table class="compare-table">
            <thead>
                <tr>
                    <th></th>
                    {models.iter().map(|m| {
                        let on_remove = {
                            let id = m.id.clone();
                            move |_| comparison.update(|c| {
                                c.toggle(id.clone());
                            })
                        };
                        view! {
                            <th>
                                <span class="compare-brand">{m.brand.clone()}</span>
                                <span class="compare-name">{m.name.clone()}</span>
                                <button class="btn btn-ghost" on:click=on_remove>"Remove"</button>
                            </th>
                        }
                    }).collect::<Vec<_>>()}
                </tr>
            </thead>
            <tbody>
                {spec_row("Price", &models, |m| m.base_price.display())}
                {spec_row("Body", &models, |m| m.body.display_name().to_string())}
                {spec_row("Powertrain", &models, |m| m.powertrain.display_name().to_string())}
                {spec_row("Seats", &models, |m| m.seats.to_string())}
                {spec_row("Range", &models, |m| match m.range_km {
                    Some(km) => format!("{km} km"),
                    None => "-".to_string(),
                })}
                {spec_row("Availability", &models, |m| {
                    if m.in_stock { "In stock".to_string() } else { "On order".to_string() }
                })}
            </tbody>
        </table>
    }
}

fn spec_row(
    label: &'static str,
    models: &[VehicleModel],
    cell: impl Fn(&VehicleModel) -> String,
) -> impl IntoView {
    view! {
        <tr>
            <th class="row-label">{label}</th>
            {models.iter().map(|m| view! { <td>{cell(m)}</td> }).collect::<Vec<_>>()}
        </tr>
    }
}
