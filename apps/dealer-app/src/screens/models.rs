//! Model browser: search, filter chips, sorting, and compare selection.

use crate::chrome::SearchBar;
use crate::data;
use crate::SearchText;
use dealer_domain::prelude::*;
use leptos::prelude::*;

#[component]
pub fn ModelsScreen() -> impl IntoView {
    let models = StoredValue::new(data::vehicle_models());
    let search = expect_context::<SearchText>().0;

    let brand = RwSignal::new(None::<String>);
    let body = RwSignal::new(None::<BodyType>);
    let powertrain = RwSignal::new(None::<Powertrain>);
    let budget = RwSignal::new(None::<usize>);
    let in_stock_only = RwSignal::new(false);
    let sort = RwSignal::new(SortOrder::Featured);

    let results = Memo::new(move |_| {
        let mut query = ModelQuery::new().with_text(search.get()).with_sort(sort.get());
        if let Some(b) = brand.get() {
            query = query.with_filter(ModelFilter::brand(b));
        }
        if let Some(b) = body.get() {
            query = query.with_filter(ModelFilter::body(b));
        }
        if let Some(p) = powertrain.get() {
            query = query.with_filter(ModelFilter::powertrain(p));
        }
        if let Some(i) = budget.get() {
            let (_, min, max) = data::BUDGET_BRACKETS[i];
            query = query.with_filter(ModelFilter::budget(min.map(Money::krw), max.map(Money::krw)));
        }
        if in_stock_only.get() {
            query = query.with_filter(ModelFilter::in_stock());
        }
        models.with_value(|m| query.apply(m))
    });

    view! {
        <section class="screen models">
            <div class="screen-head">
                <h2>"Models"</h2>
                <SearchBar/>
            </div>

            <div class="filter-bar">
                <div class="filter-group">
                    <span class="filter-label">"Brand"</span>
                    {data::brands().into_iter().map(|name| {
                        let selected = Memo::new({
                            let name = name.clone();
                            move |_| brand.with(|b| b.as_deref() == Some(name.as_str()))
                        });
                        let on_click = {
                            let name = name.clone();
                            move |_| brand.update(|b| {
                                *b = if b.as_deref() == Some(name.as_str()) {
                                    None
                                } else {
                                    Some(name.clone())
                                };
                            })
                        };
                        view! {
                            <button class="chip" class=("selected", move || selected.get()) on:click=on_click>
                                {name.clone()}
                            </button>
                        }
                    }).collect::<Vec<_>>()}
                </div>

                <div class="filter-group">
                    <span class="filter-label">"Body"</span>
                    {BodyType::all().into_iter().map(|b| view! {
                        <button
                            class="chip"
                            class=("selected", move || body.get() == Some(b))
                            on:click=move |_| body.update(|cur| {
                                *cur = if *cur == Some(b) { None } else { Some(b) };
                            })
                        >
                            {b.display_name()}
                        </button>
                    }).collect::<Vec<_>>()}
                </div>

                <div class="filter-group">
                    <span class="filter-label">"Powertrain"</span>
                    {Powertrain::all().into_iter().map(|p| view! {
                        <button
                            class="chip"
                            class=("selected", move || powertrain.get() == Some(p))
                            on:click=move |_| powertrain.update(|cur| {
                                *cur = if *cur == Some(p) { None } else { Some(p) };
                            })
                        >
                            {p.display_name()}
                        </button>
                    }).collect::<Vec<_>>()}
                </div>

                <div class="filter-group">
                    <span class="filter-label">"Budget"</span>
                    {data::BUDGET_BRACKETS.iter().enumerate().map(|(i, (label, _, _))| view! {
                        <button
                            class="chip"
                            class=("selected", move || budget.get() == Some(i))
                            on:click=move |_| budget.update(|cur| {
                                *cur = if *cur == Some(i) { None } else { Some(i) };
                            })
                        >
                            {*label}
                        </button>
                    }).collect::<Vec<_>>()}
                </div>

                <div class="filter-group">
                    <button
                        class="chip"
                        class=("selected", move || in_stock_only.get())
                        on:click=move |_| in_stock_only.update(|v| *v = !*v)
                    >
                        "In stock"
                    </button>
                </div>

                <div class="filter-group">
                    <span class="filter-label">"Sort"</span>
                    {SortOrder::all().into_iter().map(|order| view! {
                        <button
                            class="chip"
                            class=("selected", move || sort.get() == order)
                            on:click=move |_| sort.set(order)
                        >
                            {order.display_name()}
                        </button>
                    }).collect::<Vec<_>>()}
                </div>
            </div>

            <p class="result-count">
                {move || {
                    let n = results.get().len();
                    if n == 1 { "1 model".to_string() } else { format!("{n} models") }
                }}
            </p>

            <div class="model-grid">
                {move || results.get().into_iter().map(|model| view! {
                    <ModelCard model/>
                }).collect::<Vec<_>>()}
            </div>
        </section>
    }
}

fn range_label(range_km: Option<u32>) -> String {
    match range_km {
        Some(km) => format!("{km} km"),
        None => "-".to_string(),
    }
}

#[component]
fn ModelCard(model: VehicleModel) -> impl IntoView {
    let comparison = expect_context::<RwSignal<ComparisonSelection>>();
    let in_comparison = Memo::new({
        let id = model.id.clone();
        move |_| comparison.with(|c| c.contains(&id))
    });
    let can_add = Memo::new(move |_| comparison.with(|c| c.has_room()) || in_comparison.get());
    let on_compare = {
        let id = model.id.clone();
        move |_| comparison.update(|c| {
            c.toggle(id.clone());
        })
    };

    view! {
        <article class="model-card">
            <header class="model-head">
                <span class="model-brand">{model.brand.clone()}</span>
                <h3 class="model-name">{model.name.clone()}</h3>
            </header>
            <p class="model-tagline">{model.tagline.clone()}</p>
            <dl class="model-specs">
                <div><dt>"Body"</dt><dd>{model.body.display_name()}</dd></div>
                <div><dt>"Powertrain"</dt><dd>{model.powertrain.display_name()}</dd></div>
                <div><dt>"Seats"</dt><dd>{model.seats}</dd></div>
                <div><dt>"Range"</dt><dd>{range_label(model.range_km)}</dd></div>
            </dl>
            <footer class="model-foot">
                <span class="model-price">{model.base_price.display()}</span>
                <span class="model-stock" class=("out", {
                    let out = !model.in_stock;
                    move || out
                })>
                    {if model.in_stock { "In stock" } else { "On order" }}
                </span>
                <button
                    class="btn btn-ghost"
                    class=("selected", move || in_comparison.get())
                    disabled=move || !can_add.get()
                    on:click=on_compare
                >
                    {move || if in_comparison.get() { "Remove from compare" } else { "Compare" }}
                </button>
            </footer>
        </article>
    }
}
