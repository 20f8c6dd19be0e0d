use std::{str::FromStr, sync::Arc};

use dealscope_api_types::{AnalysisResponse, DealQuality};
use leptos::prelude::*;
use leptos_icons::Icon;
use tracing::debug;

use super::{
    badge::{quality_classes, quality_icon, Badge, BadgeVariant},
    country_context::CountryContext,
    deal_card::DealCard,
    panel::{Panel, TitledPanel},
};
use crate::analysis::{relevance_rate, visible_deals, QualityFilter, QualityStats, SortMode};
use crate::error::AppError;

/// Parses a `<select>` value. Rejected values leave the current selection alone.
fn parse_selection<T>(value: &str) -> Option<T>
where
    T: FromStr<Err = AppError>,
{
    value
        .parse()
        .inspect_err(|e| debug!("ignoring selection change {e}"))
        .ok()
}

#[component]
fn NoRelevantDeals(query: String) -> impl IntoView {
    view! {
        <Panel class="w-full max-w-4xl mx-auto text-center py-12">
            <div class="flex justify-center mb-4 text-6xl text-gray-400">
                <Icon icon=icondata::BsExclamationCircle />
            </div>
            <h3 class="text-xl font-semibold text-gray-300 mb-2">"No relevant deals found"</h3>
            <p class="text-gray-400 mb-6">
                {format!(
                    "The AI couldn't find any relevant shopping results for \"{query}\".",
                )}
            </p>
            <p class="text-sm text-gray-500">
                "Try searching with more specific product names or different keywords."
            </p>
        </Panel>
    }
}

#[component]
fn StatCard(#[prop(into)] value: String, label: &'static str, color: &'static str) -> impl IntoView {
    view! {
        <div>
            <div class=format!("text-2xl font-bold {color}")>{value}</div>
            <div class="text-sm text-gray-400">{label}</div>
        </div>
    }
}

#[component]
fn QualityCountBadge(quality: DealQuality, count: usize) -> impl IntoView {
    view! {
        <Badge class=quality_classes(quality)>
            <Icon icon=quality_icon(quality) />
            {format!("{count} {}", quality.label())}
        </Badge>
    }
}

#[component]
fn AnalysisSummary(analysis: Arc<AnalysisResponse>, stats: QualityStats) -> impl IntoView {
    let relevance = relevance_rate(analysis.relevant_results, analysis.total_results)
        .map(|rate| format!("{rate}%"))
        .unwrap_or_else(|| "N/A".to_string());
    view! {
        <TitledPanel
            title=format!("AI Deal Analysis for \"{}\"", analysis.query)
            icon=icondata::FaBrainSolid
        >
            <CountryContext
                country=analysis.country.clone()
                search_engine=analysis.search_engine_used.clone()
            />
            <div class="grid grid-cols-2 md:grid-cols-4 gap-4 text-center mb-4">
                <StatCard
                    value=analysis.total_results.to_string()
                    label="Total Results"
                    color="text-blue-400"
                />
                <StatCard
                    value=analysis.relevant_results.to_string()
                    label="Relevant Deals"
                    color="text-green-400"
                />
                <StatCard value=relevance label="Relevance Rate" color="text-purple-400" />
                <StatCard
                    value=stats.excellent.to_string()
                    label="Excellent Deals"
                    color="text-orange-400"
                />
            </div>
            <div class="quality-distribution flex flex-wrap gap-2 mb-4">
                {stats
                    .non_empty()
                    .map(|(quality, count)| view! { <QualityCountBadge quality count /> })
                    .collect_view()}
            </div>
            <div class="bg-gradient-to-r from-purple-900/30 to-blue-900/30 border border-purple-700 p-4 rounded-lg">
                <div class="text-sm font-medium text-purple-300 mb-1 flex items-center gap-2">
                    <Icon icon=icondata::FaBrainSolid />
                    "AI Analysis Summary:"
                </div>
                <div class="text-sm text-purple-200">{analysis.summary.clone()}</div>
            </div>
        </TitledPanel>
    }
}

/// Summary, sort and filter controls and the grid of analyzed deals for one search.
///
/// The sort mode and quality filter live only as long as this component, the
/// input analysis is never modified.
#[component]
pub fn AnalyzedDealsList(#[prop(into)] analysis: Arc<AnalysisResponse>) -> impl IntoView {
    if analysis.relevant_results == 0 {
        return view! { <NoRelevantDeals query=analysis.query.clone() /> }.into_any();
    }

    let (sort_mode, set_sort_mode) = signal(SortMode::default());
    let (quality_filter, set_quality_filter) = signal(QualityFilter::default());

    let stats = QualityStats::from_deals(&analysis.deals);
    let input = analysis.clone();
    let shown_deals = Memo::new(move |_| {
        visible_deals(&input.deals, sort_mode.get(), quality_filter.get())
    });
    let relevant_results = analysis.relevant_results;
    let country = analysis.country.clone();

    view! {
        <div class="analyzed-deals w-full max-w-6xl mx-auto flex flex-col gap-6">
            <AnalysisSummary analysis=analysis.clone() stats />
            <Panel>
                <div class="flex flex-wrap gap-4 items-center">
                    <div class="flex items-center gap-2 text-sm font-medium text-gray-300">
                        <Icon icon=icondata::FaFilterSolid />
                        "Filters:"
                    </div>
                    <select
                        class="input w-40"
                        on:change=move |ev| {
                            if let Some(filter) = parse_selection(&event_target_value(&ev)) {
                                set_quality_filter.set(filter);
                            }
                        }
                        prop:value=move || quality_filter.get().to_string()
                    >
                        {QualityFilter::ALL
                            .into_iter()
                            .map(|filter| {
                                view! {
                                    <option
                                        value=filter.to_string()
                                        selected=move || quality_filter.get() == filter
                                    >
                                        {filter.label()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                    <div class="flex items-center gap-2 text-sm font-medium text-gray-300">
                        <Icon icon=icondata::BiSortDownRegular />
                        "Sort by:"
                    </div>
                    <select
                        class="input w-40"
                        on:change=move |ev| {
                            if let Some(mode) = parse_selection(&event_target_value(&ev)) {
                                set_sort_mode.set(mode);
                            }
                        }
                        prop:value=move || sort_mode.get().to_string()
                    >
                        {SortMode::ALL
                            .into_iter()
                            .map(|mode| {
                                view! {
                                    <option value=mode.to_string() selected=move || sort_mode.get() == mode>
                                        {mode.label()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                    <div class="ml-auto">
                        <Badge variant=BadgeVariant::Secondary>
                            {move || {
                                format!(
                                    "{} of {relevant_results} shown",
                                    shown_deals.with(|deals| deals.len()),
                                )
                            }}
                        </Badge>
                    </div>
                </div>
            </Panel>
            <div class="deals-grid grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                <For
                    each=move || shown_deals.get().into_iter().enumerate()
                    key=|(index, deal)| (deal.url.clone(), *index)
                    children=move |(index, deal)| {
                        view! { <DealCard deal rank={index + 1} country=country.clone() /> }
                    }
                />
            </div>
            <Panel>
                <div class="text-sm text-gray-400">
                    <p class="mb-2">
                        {format!("Analysis powered by: {}", analysis.search_engine_used)}
                    </p>
                    <p class="text-xs">
                        "Results are analyzed by AI for relevance and deal quality. Prices and availability should be verified on the retailer's website."
                    </p>
                </div>
            </Panel>
        </div>
    }
    .into_any()
}
