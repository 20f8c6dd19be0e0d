use dealscope_api_types::{country::get_country_info, Deal};
use leptos::{either::Either, prelude::*};
use leptos_icons::Icon;
use url::Url;

use super::badge::{quality_classes, quality_icon, Badge};

const CARD_CLASSES: &str = "deal-card group block p-4 rounded-xl bg-gray-900/50 border border-gray-800 hover:border-purple-600 hover:shadow-lg transition-all duration-200";

/// Host of the deal's url without a leading `www.`
fn display_host(url: &Url) -> Option<String> {
    let host = url.host_str()?;
    Some(host.trim_start_matches("www.").to_string())
}

/// Only plain web links are rendered as anchors.
fn is_web_link(url: &Url) -> bool {
    matches!(url.scheme(), "http" | "https")
}

fn relevance_percent(score: f64) -> i64 {
    (score * 100.0).round() as i64
}

#[component]
pub fn DealCard(deal: Deal, rank: usize, #[prop(into)] country: String) -> impl IntoView {
    let parsed = Url::parse(&deal.url).ok();
    let host = parsed.as_ref().and_then(display_host);
    let href = parsed
        .as_ref()
        .filter(|url| is_web_link(url))
        .map(|_| deal.url.clone());
    let title = deal
        .title
        .clone()
        .or_else(|| host.clone())
        .unwrap_or_else(|| deal.url.clone());
    let title_attr = title.clone();
    let retailer = deal.retailer.clone().or(host);
    let currency = get_country_info(&country).map(|info| info.currency);
    let quality = deal.deal_quality;
    let body = view! {
        <div class="flex items-start justify-between gap-2 mb-2">
            <span class="text-xs font-mono text-gray-500">{format!("#{rank}")}</span>
            <Badge class=quality_classes(quality)>
                <Icon icon=quality_icon(quality) />
                {quality.label()}
            </Badge>
        </div>
        <h4 class="font-bold text-white truncate mb-1" title=title_attr>
            {title}
        </h4>
        {retailer.map(|retailer| view! { <div class="text-sm text-gray-400 mb-2">{retailer}</div> })}
        <div class="flex items-baseline gap-2 mb-2">
            <span class="text-2xl font-bold text-green-400">
                {deal.price.clone().unwrap_or_else(|| "Price unavailable".to_string())}
            </span>
            {currency.map(|currency| view! { <span class="text-xs text-gray-500">{currency}</span> })}
        </div>
        <div class="text-sm text-gray-400">
            {format!("{}% relevant", relevance_percent(deal.relevance_score))}
        </div>
        {deal
            .reasoning
            .clone()
            .map(|reasoning| view! { <p class="mt-2 text-sm text-gray-300">{reasoning}</p> })}
    };
    match href {
        Some(href) => Either::Left(view! {
            <a href=href target="_blank" rel="noopener noreferrer" class=CARD_CLASSES>
                {body}
            </a>
        }),
        None => Either::Right(view! { <div class=CARD_CLASSES>{body}</div> }),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn parse(url: &str) -> Url {
        Url::parse(url).unwrap()
    }

    #[test]
    fn host_without_www() {
        assert_eq!(
            display_host(&parse("https://www.bestbuy.com/site/rtx-4070")),
            Some("bestbuy.com".to_string())
        );
        assert_eq!(
            display_host(&parse("https://shop.example/item")),
            Some("shop.example".to_string())
        );
        assert_eq!(display_host(&parse("mailto:deals@shop.example")), None);
    }

    #[test]
    fn only_web_schemes_link() {
        assert!(is_web_link(&parse("https://shop.example/item")));
        assert!(is_web_link(&parse("http://shop.example/item")));
        assert!(!is_web_link(&parse("javascript:alert(document.cookie)")));
        assert!(!is_web_link(&parse("data:text/html,hi")));
    }

    #[test]
    fn relevance_as_percent() {
        assert_eq!(relevance_percent(0.924), 92);
        assert_eq!(relevance_percent(0.5), 50);
        assert_eq!(relevance_percent(0.0), 0);
    }

    #[cfg(feature = "ssr")]
    mod render {
        use super::super::*;
        use dealscope_api_types::DealQuality;
        use leptos::{reactive::owner::Owner, tachys::view::RenderHtml};

        fn render(url: &str, title: Option<&str>) -> String {
            let deal = Deal {
                url: url.to_string(),
                price: Some("$129.99".to_string()),
                relevance_score: 0.87,
                deal_quality: DealQuality::Good,
                title: title.map(str::to_string),
                retailer: None,
                reasoning: Some("Lowest price this month.".to_string()),
            };
            Owner::new().with(|| view! { <DealCard deal rank=2 country="US" /> }.to_html())
        }

        #[test]
        fn web_deal_is_an_outbound_link() {
            let html = render("https://www.newegg.com/p/123", Some("Wireless Headphones"));
            assert!(html.contains("href=\"https://www.newegg.com/p/123\""));
            assert!(html.contains("rel=\"noopener noreferrer\""));
            assert!(html.contains("title=\"Wireless Headphones\""));
            assert!(html.contains(">Wireless Headphones<"));
            assert!(html.contains("newegg.com"));
            assert!(html.contains("#2"));
            assert!(html.contains("87% relevant"));
            assert!(html.contains("USD"));
        }

        #[test]
        fn script_url_is_not_a_link() {
            let html = render("javascript:alert(document.cookie)", None);
            assert!(!html.contains("href="));
            assert!(!html.contains("<a "));
            assert!(html.contains("class=\"deal-card"));
        }
    }
}
