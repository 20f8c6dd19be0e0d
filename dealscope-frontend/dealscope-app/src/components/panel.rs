use leptos::prelude::*;
use leptos_icons::Icon;

#[component]
pub fn Panel(
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=format!(
            "panel rounded-xl border border-gray-800 bg-gray-900/50 p-6 {class}",
        )>{children()}</div>
    }
}

/// A panel with a heading row, the heading is prefixed with `icon`
#[component]
pub fn TitledPanel(
    #[prop(into)] title: Oco<'static, str>,
    icon: icondata::Icon,
    children: Children,
) -> impl IntoView {
    view! {
        <Panel>
            <h3 class="flex items-center gap-2 font-bold text-xl mb-4 text-white">
                <span class="text-purple-600 flex items-center">
                    <Icon icon=icon />
                </span>
                {title}
            </h3>
            {children()}
        </Panel>
    }
}
