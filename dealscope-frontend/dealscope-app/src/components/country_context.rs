use dealscope_api_types::{country::get_country_info, region_mapper::get_search_domains};
use leptos::prelude::*;
use leptos_icons::Icon;
use tracing::debug;

use super::badge::{Badge, BadgeVariant};

#[component]
fn ContextField(label: &'static str, #[prop(into)] value: String) -> impl IntoView {
    view! {
        <div>
            <span class="text-purple-400 font-medium">{label}</span>
            <div class="text-purple-200 font-semibold">{value}</div>
        </div>
    }
}

/// Market metadata for the searched country. Renders nothing for unknown countries.
#[component]
pub fn CountryContext(
    #[prop(into)] country: String,
    #[prop(into)] search_engine: String,
) -> impl IntoView {
    let Some(info) = get_country_info(&country) else {
        debug!(%country, "no country info, skipping country context");
        return None;
    };
    let retailers = get_search_domains(&country).len();
    Some(view! {
        <div class="country-context bg-purple-900/30 border border-purple-700 rounded-lg p-4 mb-6">
            <div class="flex items-center justify-between mb-3">
                <h4 class="font-semibold text-purple-300 flex items-center gap-2">
                    <Icon icon=icondata::FaGlobeSolid />
                    {format!("Results for {}", info.name)}
                </h4>
                <div class="flex items-center gap-2">
                    {info
                        .popular
                        .then(|| {
                            view! {
                                <Badge variant=BadgeVariant::Solid>
                                    <Icon icon=icondata::FaStarSolid />
                                    "Major Market"
                                </Badge>
                            }
                        })}
                    <Badge class="border-purple-600 text-purple-300">
                        <Icon icon=icondata::FaLocationDotSolid />
                        {info.region.to_string()}
                    </Badge>
                </div>
            </div>
            <div class="grid grid-cols-2 md:grid-cols-4 gap-3 text-sm">
                <ContextField
                    label="Currency:"
                    value=format!("{} {}", info.currency_symbol, info.currency)
                />
                <ContextField label="Retailers:" value=format!("{retailers} sites") />
                <ContextField label="Language:" value=info.language.to_uppercase() />
                <ContextField label="Search Engine:" value=search_engine />
            </div>
        </div>
    })
}
