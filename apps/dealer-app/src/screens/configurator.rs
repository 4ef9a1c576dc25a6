//! Vehicle configurator: trim picker, option panels, live total, preview.

use crate::data;
use dealer_domain::prelude::*;
use leptos::prelude::*;

#[component]
pub fn ConfiguratorScreen() -> impl IntoView {
    let catalog = StoredValue::new(data::configurator_catalog());
    let session = RwSignal::new(catalog.with_value(|c| {
        let trim = c.trims[0].clone();
        // The mock catalogs have no empty singular category.
        ConfiguratorSession::start(trim, c).expect("mock catalog defaults")
    }));
    let total = Memo::new(move |_| catalog.with_value(|c| session.with(|s| s.total(c))));

    view! {
        <section class="screen configurator">
            <div class="screen-head">
                <h2>"Configurator"</h2>
                <div class="price-tag">
                    <span class="price-label">"Total"</span>
                    <span class="price-value">{move || total.get().display()}</span>
                </div>
            </div>

            <TrimPicker catalog session/>

            <div class="configurator-body">
                <PreviewPane catalog session/>
                <div class="option-panels">
                    {SingularCategory::all().into_iter().map(|category| view! {
                        <SingularPanel category catalog session/>
                    }).collect::<Vec<_>>()}
                    {MultiCategory::all().into_iter().map(|category| view! {
                        <MultiPanel category catalog session/>
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

/// Trim cards. Picking a different trim restarts the flow.
#[component]
fn TrimPicker(
    catalog: StoredValue<ConfiguratorCatalog>,
    session: RwSignal<ConfiguratorSession>,
) -> impl IntoView {
    let trims = catalog.with_value(|c| c.trims.clone());

    view! {
        <div class="trim-picker">
            {trims.into_iter().map(|trim| {
                let selected = Memo::new({
                    let trim_id = trim.id.clone();
                    move |_| session.with(|s| s.trim.id == trim_id)
                });
                let on_click = {
                    let trim = trim.clone();
                    move |_| {
                        catalog.with_value(|c| session.update(|s| {
                            if let Err(e) = s.restart(trim.clone(), c) {
                                tracing::warn!(error = %e, "configurator restart failed");
                            }
                        }))
                    }
                };
                view! {
                    <button class="trim-card" class=("selected", move || selected.get()) on:click=on_click>
                        <span class="trim-name">{trim.name.clone()}</span>
                        <span class="trim-price">{trim.price.display()}</span>
                        {trim.tagline.clone().map(|t| view! { <span class="trim-tagline">{t}</span> })}
                    </button>
                }
            }).collect::<Vec<_>>()}
        </div>
    }
}

/// Option chips for an exclusive category: click replaces the selection.
#[component]
fn SingularPanel(
    category: SingularCategory,
    catalog: StoredValue<ConfiguratorCatalog>,
    session: RwSignal<ConfiguratorSession>,
) -> impl IntoView {
    let options = catalog.with_value(|c| c.singular(category).options.clone());

    view! {
        <section class="option-panel">
            <h3>{category.display_name()}</h3>
            <div class="chips">
                {options.into_iter().map(|option| {
                    let selected = Memo::new({
                        let option_id = option.id.clone();
                        move |_| session.with(|s| s.config.singular(category).id == option_id)
                    });
                    let on_click = {
                        let option_id = option.id.clone();
                        move |_| {
                            catalog.with_value(|c| session.update(|s| {
                                if let Err(e) = s.config.select(category, &option_id, c) {
                                    tracing::warn!(error = %e, "singular selection rejected");
                                }
                            }))
                        }
                    };
                    view! {
                        <button class="chip" class=("selected", move || selected.get()) on:click=on_click>
                            {option.value.clone().map(|v| view! {
                                <span class="swatch" style:background-color=v></span>
                            })}
                            <span class="chip-name">{option.name.clone()}</span>
                            <span class="chip-price">{price_label(&option.price)}</span>
                        </button>
                    }
                }).collect::<Vec<_>>()}
            </div>
        </section>
    }
}

/// Option chips for a set-valued category: click toggles membership.
#[component]
fn MultiPanel(
    category: MultiCategory,
    catalog: StoredValue<ConfiguratorCatalog>,
    session: RwSignal<ConfiguratorSession>,
) -> impl IntoView {
    let options = catalog.with_value(|c| c.multi(category).options.clone());

    view! {
        <section class="option-panel">
            <h3>{category.display_name()}</h3>
            <div class="chips">
                {options.into_iter().map(|option| {
                    let selected = Memo::new({
                        let option_id = option.id.clone();
                        move |_| session.with(|s| s.config.is_selected(category, &option_id))
                    });
                    let on_click = {
                        let option_id = option.id.clone();
                        move |_| {
                            catalog.with_value(|c| session.update(|s| {
                                if let Err(e) = s.config.toggle(category, &option_id, c) {
                                    tracing::warn!(error = %e, "toggle rejected");
                                }
                            }))
                        }
                    };
                    view! {
                        <button class="chip" class=("selected", move || selected.get()) on:click=on_click>
                            <span class="chip-name">{option.name.clone()}</span>
                            <span class="chip-price">{price_label(&option.price)}</span>
                        </button>
                    }
                }).collect::<Vec<_>>()}
            </div>
        </section>
    }
}

/// Preview pane: camera, highlight overlay, and the summary drawer.
/// Everything here mutates only view state; the total never moves.
#[component]
fn PreviewPane(
    catalog: StoredValue<ConfiguratorCatalog>,
    session: RwSignal<ConfiguratorSession>,
) -> impl IntoView {
    let camera = Memo::new(move |_| session.with(|s| s.view.camera));
    let highlight = Memo::new(move |_| session.with(|s| s.view.highlight));
    let drawer_open = Memo::new(move |_| session.with(|s| s.view.options_drawer_open));
    let paint_swatch = Memo::new(move |_| {
        session.with(|s| s.config.paint.value.clone().unwrap_or_else(|| "#dde3ea".to_string()))
    });
    let summary = Memo::new(move |_| catalog.with_value(|c| session.with(|s| s.breakdown(c))));

    view! {
        <div class="preview">
            <div class="preview-stage" style:background-color=move || paint_swatch.get()>
                <span class="preview-angle">{move || camera.get().display_name()}</span>
                {move || highlight.get().map(|kind| view! {
                    <span class="preview-highlight">{kind.display_name()}" highlighted"</span>
                })}
            </div>
            <div class="preview-controls">
                <button class="btn" on:click=move |_| session.update(|s| s.view.rotate_camera())>
                    "Rotate"
                </button>
                <button class="btn" on:click=move |_| session.update(|s| s.view.set_highlight(OptionKind::Wheel))>
                    "Highlight wheels"
                </button>
                <button class="btn" on:click=move |_| session.update(|s| s.view.clear_highlight())>
                    "Clear highlight"
                </button>
                <button class="btn" on:click=move |_| session.update(|s| s.view.toggle_drawer())>
                    {move || if drawer_open.get() { "Hide summary" } else { "Show summary" }}
                </button>
            </div>
            <Show when=move || drawer_open.get()>
                <div class="summary-drawer">
                    <h4>"Your configuration"</h4>
                    {move || {
                        let b = summary.get();
                        let trim_name = session.with(|s| s.trim.name.clone());
                        view! {
                            <div class="summary-lines">
                                <p class="summary-line">
                                    <span>{trim_name}" base"</span>
                                    <span>{b.base.display()}</span>
                                </p>
                                {b.lines.iter().map(|line| view! {
                                    <p class="summary-line">
                                        <span>{line.name.clone()}</span>
                                        <span>{format!("+{}", line.price.display())}</span>
                                    </p>
                                }).collect::<Vec<_>>()}
                                <p class="summary-line summary-total">
                                    <span>"Total"</span>
                                    <span>{b.total.display()}</span>
                                </p>
                            </div>
                        }
                    }}
                </div>
            </Show>
        </div>
    }
}

fn price_label(price: &Money) -> String {
    if price.is_zero() {
        "Included".to_string()
    } else {
        format!("+{}", price.display())
    }
}
