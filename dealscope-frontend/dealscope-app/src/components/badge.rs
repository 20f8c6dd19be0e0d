use dealscope_api_types::DealQuality;
use leptos::prelude::*;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum BadgeVariant {
    #[default]
    Outline,
    Solid,
    Secondary,
}

impl BadgeVariant {
    fn classes(&self) -> &'static str {
        match self {
            BadgeVariant::Outline => "border bg-transparent",
            BadgeVariant::Solid => "border border-transparent bg-purple-600 text-white",
            BadgeVariant::Secondary => {
                "border border-transparent bg-[color:var(--surface-color-hover)] text-[color:var(--color-text)]"
            }
        }
    }
}

/// Colors used for each quality tier, shared by the summary badges and the deal cards.
pub fn quality_classes(quality: DealQuality) -> &'static str {
    match quality {
        DealQuality::Excellent => "bg-green-900/30 border-green-600 text-green-400",
        DealQuality::Good => "bg-blue-900/30 border-blue-600 text-blue-400",
        DealQuality::Average => "bg-yellow-900/30 border-yellow-600 text-yellow-400",
        DealQuality::Poor => "bg-red-900/30 border-red-600 text-red-400",
    }
}

pub fn quality_icon(quality: DealQuality) -> icondata::Icon {
    match quality {
        DealQuality::Excellent => icondata::FaAwardSolid,
        DealQuality::Good => icondata::FaArrowTrendUpSolid,
        DealQuality::Average => icondata::FaStarSolid,
        DealQuality::Poor => icondata::BsExclamationCircle,
    }
}

#[component]
pub fn Badge(
    #[prop(optional)] variant: BadgeVariant,
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    view! {
        <span class=format!(
            "inline-flex items-center gap-1 rounded-full px-2.5 py-0.5 text-xs font-semibold {} {class}",
            variant.classes(),
        )>{children()}</span>
    }
}
