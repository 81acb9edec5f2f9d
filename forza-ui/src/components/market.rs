//! Market Section
//!
//! Searchable table of sample assets with a detail card for the selected row.

use leptos::*;

use crate::api::{self, AssetDetail, MarketAsset};
use crate::components::area_chart::AreaChart;
use crate::components::Loading;
use crate::components::sections::{SectionCta, SectionHeading};
use crate::format::{format_change, format_usd};
use crate::state::global::GlobalState;

const DEFAULT_SYMBOL: &str = "BTC";

#[component]
pub fn MarketSection(#[prop(default = false)] with_cta: bool) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (query, set_query) = create_signal(String::new());
    let assets = create_rw_signal(Vec::<MarketAsset>::new());
    let (loaded, set_loaded) = create_signal(false);
    let (selected, set_selected) = create_signal(DEFAULT_SYMBOL.to_string());
    let detail = create_rw_signal(None::<AssetDetail>);

    let state_for_rows = state.clone();
    create_effect(move |_| {
        let q = query.get();
        let state = state_for_rows.clone();
        spawn_local(async move {
            match api::fetch_market(&q).await {
                Ok(rows) => assets.set(rows),
                Err(e) => state.show_error(&format!("Failed to load market data: {}", e)),
            }
            set_loaded.set(true);
        });
    });

    create_effect(move |_| {
        let symbol = selected.get();
        let state = state.clone();
        spawn_local(async move {
            match api::fetch_asset(&symbol).await {
                Ok(found) => detail.set(Some(found)),
                Err(e) => {
                    web_sys::console::error_1(&format!("Asset {}: {}", symbol, e).into());
                    state.show_error(&e);
                }
            }
        });
    });

    let series = Signal::derive(move || detail.get().map(|d| d.series).unwrap_or_default());

    view! {
        <section id="market" class="py-20">
            <SectionHeading
                title="Real-time Market Data"
                subtitle="Stay updated with the latest cryptocurrency prices, trends, and market movements."
            />

            <div class="grid gap-6 lg:grid-cols-3">
                <div class="lg:col-span-2 bg-gray-900 border border-gray-800 rounded-xl p-4">
                    <input
                        type="search"
                        placeholder="Search cryptocurrencies"
                        prop:value=move || query.get()
                        on:input=move |ev| set_query.set(event_target_value(&ev))
                        class="w-full mb-4 bg-gray-950 rounded-lg px-4 py-2 border border-gray-700
                               focus:border-violet-500 focus:outline-none"
                    />
                    {move || if loaded.get() {
                        view! { <MarketTable assets=assets selected=selected on_select=set_selected /> }.into_view()
                    } else {
                        view! { <Loading /> }.into_view()
                    }}
                </div>

                {move || detail.get().map(|d| view! { <AssetDetailCard asset=d.asset /> })}
            </div>

            <div class="mt-6 bg-gray-900 border border-gray-800 rounded-xl p-4">
                <AreaChart series=series />
            </div>

            {with_cta.then(|| view! { <SectionCta href="/market-data" label="View Full Market Data" /> })}
        </section>
    }
}

#[component]
fn MarketTable(
    assets: RwSignal<Vec<MarketAsset>>,
    selected: ReadSignal<String>,
    on_select: WriteSignal<String>,
) -> impl IntoView {
    view! {
        <div class="overflow-x-auto">
            <table class="w-full text-sm">
                <thead class="text-gray-400 text-left">
                    <tr>
                        <th class="py-2 px-2">"#"</th>
                        <th class="py-2 px-2">"Name"</th>
                        <th class="py-2 px-2 text-right">"Price"</th>
                        <th class="py-2 px-2 text-right">"24h Change"</th>
                        <th class="py-2 px-2 text-right hidden md:table-cell">"Market Cap"</th>
                        <th class="py-2 px-2 text-right hidden md:table-cell">"Volume (24h)"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let rows = assets.get();
                        if rows.is_empty() {
                            return view! {
                                <tr>
                                    <td colspan="6" class="py-6 text-center text-gray-500">
                                        "No cryptocurrencies found"
                                    </td>
                                </tr>
                            }.into_view();
                        }

                        rows.into_iter().enumerate().map(|(i, asset)| {
                            let symbol = asset.symbol.clone();
                            let is_selected = {
                                let symbol = symbol.clone();
                                move || selected.get() == symbol
                            };
                            let row_class = move || {
                                let base = "cursor-pointer border-t border-gray-800 hover:bg-gray-800/60";
                                match (is_selected(), asset.highlight) {
                                    (true, _) => format!("{} bg-gray-800", base),
                                    (false, true) => format!("{} bg-violet-500/5", base),
                                    (false, false) => base.to_string(),
                                }
                            };
                            let (arrow, change_class) = if asset.is_up() {
                                ("▲", "text-emerald-400")
                            } else {
                                ("▼", "text-red-400")
                            };

                            view! {
                                <tr class=row_class on:click=move |_| on_select.set(symbol.clone())>
                                    <td class="py-3 px-2 text-gray-500">{i + 1}</td>
                                    <td class="py-3 px-2">
                                        <span class="font-medium">{asset.name.clone()}</span>
                                        <span class="ml-2 text-gray-500">{asset.symbol.clone()}</span>
                                    </td>
                                    <td class="py-3 px-2 text-right">{format_usd(asset.price)}</td>
                                    <td class=format!("py-3 px-2 text-right {}", change_class)>
                                        {format!("{} {}", arrow, format_change(asset.change))}
                                    </td>
                                    <td class="py-3 px-2 text-right hidden md:table-cell">{format_usd(asset.market_cap)}</td>
                                    <td class="py-3 px-2 text-right hidden md:table-cell">{format_usd(asset.volume)}</td>
                                </tr>
                            }
                        }).collect_view()
                    }}
                </tbody>
            </table>
        </div>
    }
}

#[component]
fn AssetDetailCard(asset: MarketAsset) -> impl IntoView {
    let change_class = if asset.is_up() { "text-emerald-400" } else { "text-red-400" };
    let arrow = if asset.is_up() { "▲" } else { "▼" };
    let initial = asset.symbol.chars().next().unwrap_or('?');

    view! {
        <div class="bg-gray-900 border border-gray-800 rounded-xl p-6 flex flex-col">
            <div class="flex items-start justify-between">
                <div>
                    <h3 class="text-xl font-semibold">{format!("{} ({})", asset.name, asset.symbol)}</h3>
                    <div class="text-3xl font-bold mt-1">{format_usd(asset.price)}</div>
                    <div class=format!("text-sm {}", change_class)>
                        {format!("{} {} (24h)", arrow, format_change(asset.change))}
                    </div>
                </div>
                <div class="w-12 h-12 rounded-full bg-violet-500/20 flex items-center justify-center text-xl font-bold">
                    {initial.to_string()}
                </div>
            </div>

            <div class="grid grid-cols-2 gap-4 mt-6 text-sm">
                <div>
                    <div class="text-gray-400">"Market Cap"</div>
                    <div class="font-medium">{format_usd(asset.market_cap)}</div>
                </div>
                <div>
                    <div class="text-gray-400">"Volume (24h)"</div>
                    <div class="font-medium">{format_usd(asset.volume)}</div>
                </div>
            </div>

            <button class="w-full px-4 py-3 mt-6 bg-violet-600 hover:bg-violet-700 rounded-lg font-medium transition-colors">
                {format!("Trade {}", asset.symbol)}
            </button>
        </div>
    }
}
