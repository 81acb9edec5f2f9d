//! Coin Card Component
//!
//! The mock chart attached to chart and analysis replies.

use leptos::*;

use crate::state::chat::{ChartKind, CoinSnapshot, TechnicalIndicators};

#[component]
pub fn CoinCard(coin: CoinSnapshot) -> impl IntoView {
    let change_class = if coin.is_up() { "text-emerald-400" } else { "text-red-400" };
    let footnote = coin.kind.footnote();

    let body = match coin.kind {
        ChartKind::Price => view! { <PriceBars coin=coin.clone() /> }.into_view(),
        ChartKind::Analysis => view! { <IndicatorGrid indicators=coin.indicators.clone() /> }.into_view(),
    };

    view! {
        <div class="mt-3 bg-gray-900 border border-gray-700 rounded-xl p-4 max-w-md">
            <div class="flex items-center justify-between mb-3">
                <div>
                    <div class="font-semibold">{coin.name.clone()}</div>
                    <div class="text-xs text-gray-400">{format!("${}", coin.symbol)}</div>
                </div>
                <div class="text-right">
                    <div class="font-semibold">{format!("${:.2}", coin.price)}</div>
                    <div class=format!("text-xs {}", change_class)>{coin.change_label()}</div>
                </div>
            </div>

            {body}

            <p class="mt-3 text-xs text-gray-500">{footnote}</p>
        </div>
    }
}

#[component]
fn PriceBars(coin: CoinSnapshot) -> impl IntoView {
    view! {
        <div class="flex items-end h-28 gap-1">
            {coin.bars.into_iter().map(|bar| {
                let color = if bar.positive { "bg-emerald-500/80" } else { "bg-red-500/80" };
                view! {
                    <div
                        class=format!("flex-1 rounded-t {}", color)
                        style=format!("height: {:.0}%", bar.height)
                    />
                }
            }).collect_view()}
        </div>
    }
}

#[component]
fn IndicatorGrid(indicators: TechnicalIndicators) -> impl IntoView {
    let cells = [
        ("RSI", indicators.rsi.to_string(), indicators.rsi_positive),
        ("MACD", format!("{:.2}", indicators.macd), indicators.macd_positive),
        ("Volume", format!("{:.0}", indicators.volume), true),
        ("MA50", format!("${:.2}", indicators.ma50), true),
        ("MA200", format!("${:.2}", indicators.ma200), true),
        ("Signal", indicators.signal.clone(), indicators.signal_positive),
    ];

    view! {
        <div class="grid grid-cols-3 gap-2">
            {cells.into_iter().map(|(label, value, positive)| {
                let value_class = if positive { "text-emerald-400" } else { "text-red-400" };
                view! {
                    <div class="bg-gray-800 rounded-lg p-2">
                        <div class="text-[10px] uppercase tracking-wide text-gray-500">{label}</div>
                        <div class=format!("text-sm font-medium {}", value_class)>{value}</div>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
