//! Dashboard: headline metrics with a simulated refresh.

use crate::data;
use dealer_domain::prelude::*;
use leptos::prelude::*;

#[component]
pub fn DashboardScreen() -> impl IntoView {
    let metrics = RwSignal::new(data::dashboard_metrics());
    let board = expect_context::<RwSignal<PipelineBoard>>();

    // Simulated network refresh: fixed delay, then the fresh snapshot.
    let refresh_action = Action::new(|snapshot: &DashboardMetrics| {
        let snapshot = snapshot.clone();
        async move { refresh(snapshot).await }
    });
    let pending = refresh_action.pending();

    Effect::new(move |_| {
        if let Some(fresh) = refresh_action.value().get() {
            metrics.set(fresh);
        }
    });

    let open_deals = Memo::new(move |_| {
        board.with(|b| b.deals.iter().filter(|d| d.stage.is_open()).count())
    });
    let open_value = Memo::new(move |_| board.with(|b| b.totals()));

    view! {
        <section class="screen dashboard">
            <div class="screen-head">
                <h2>"Dashboard"</h2>
                <button
                    class="btn"
                    disabled=move || pending.get()
                    on:click=move |_| {
                        refresh_action.dispatch(data::dashboard_metrics());
                    }
                >
                    {move || if pending.get() { "Refreshing..." } else { "Refresh" }}
                </button>
            </div>

            <div class="metric-cards">
                <MetricCard
                    label="Monthly revenue"
                    value=Signal::derive(move || metrics.with(|m| m.monthly_revenue.display()))
                    hint=Signal::derive(move || metrics.with(|m| m.revenue_delta_display()))
                />
                <MetricCard
                    label="Vehicles sold"
                    value=Signal::derive(move || metrics.with(|m| m.vehicles_sold.to_string()))
                    hint=Signal::derive(|| "this month".to_string())
                />
                <MetricCard
                    label="Conversion"
                    value=Signal::derive(move || metrics.with(|m| m.conversion_display()))
                    hint=Signal::derive(|| "lead to delivery".to_string())
                />
                <MetricCard
                    label="Inventory"
                    value=Signal::derive(move || metrics.with(|m| m.inventory_count.to_string()))
                    hint=Signal::derive(|| "vehicles on lot".to_string())
                />
            </div>

            <div class="dashboard-pipeline">
                <h3>"Pipeline at a glance"</h3>
                <p>
                    {move || open_deals.get().to_string()}
                    " open deals worth "
                    {move || open_value.get().display()}
                </p>
                <a class="btn" href="/pipeline">"Open the board"</a>
            </div>
        </section>
    }
}

#[component]
fn MetricCard(
    label: &'static str,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] hint: Signal<String>,
) -> impl IntoView {
    view! {
        <div class="metric-card">
            <span class="metric-label">{label}</span>
            <span class="metric-value">{move || value.get()}</span>
            <span class="metric-hint">{move || hint.get()}</span>
        </div>
    }
}
