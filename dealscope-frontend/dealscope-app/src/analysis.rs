use std::{cmp::Reverse, fmt::Display, str::FromStr};

use dealscope_api_types::{Deal, DealQuality};

use crate::error::AppError;

#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Hash)]
pub enum SortMode {
    #[default]
    Relevance,
    Quality,
    Price,
}

impl SortMode {
    pub const ALL: [SortMode; 3] = [SortMode::Relevance, SortMode::Quality, SortMode::Price];

    pub fn label(&self) -> &'static str {
        match self {
            SortMode::Relevance => "Relevance",
            SortMode::Quality => "Deal Quality",
            SortMode::Price => "Price (Low to High)",
        }
    }
}

impl FromStr for SortMode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "relevance" => Ok(SortMode::Relevance),
            "quality" => Ok(SortMode::Quality),
            "price" => Ok(SortMode::Price),
            _ => Err(AppError::UnknownSortMode(s.to_string())),
        }
    }
}

impl Display for SortMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let val = match self {
            SortMode::Relevance => "relevance",
            SortMode::Quality => "quality",
            SortMode::Price => "price",
        };
        f.write_str(val)
    }
}

/// Single tier filter. `Poor` deals can only be seen through `All`.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Hash)]
pub enum QualityFilter {
    #[default]
    All,
    Excellent,
    Good,
    Average,
}

impl QualityFilter {
    pub const ALL: [QualityFilter; 4] = [
        QualityFilter::All,
        QualityFilter::Excellent,
        QualityFilter::Good,
        QualityFilter::Average,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            QualityFilter::All => "All Quality",
            QualityFilter::Excellent => "Excellent Only",
            QualityFilter::Good => "Good Only",
            QualityFilter::Average => "Average Only",
        }
    }

    /// The tier this filter keeps, `None` when everything passes.
    pub fn quality(&self) -> Option<DealQuality> {
        match self {
            QualityFilter::All => None,
            QualityFilter::Excellent => Some(DealQuality::Excellent),
            QualityFilter::Good => Some(DealQuality::Good),
            QualityFilter::Average => Some(DealQuality::Average),
        }
    }

    pub fn matches(&self, deal: &Deal) -> bool {
        self.quality()
            .map(|quality| deal.deal_quality == quality)
            .unwrap_or(true)
    }
}

impl FromStr for QualityFilter {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(QualityFilter::All),
            "excellent" => Ok(QualityFilter::Excellent),
            "good" => Ok(QualityFilter::Good),
            "average" => Ok(QualityFilter::Average),
            _ => Err(AppError::UnknownQualityFilter(s.to_string())),
        }
    }
}

impl Display for QualityFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.quality() {
            Some(quality) => f.write_str(quality.as_str()),
            None => f.write_str("all"),
        }
    }
}

/// Pulls a number out of scraped price text like `"$1,299.99"` or `"USD 45"`.
///
/// Everything that isn't an ascii digit or `.` is dropped, then the longest
/// leading number is read (`"1.2.3"` reads as `1.2`). Prices with no digits
/// come back as `0.0` so they sort ahead of everything else.
pub fn parse_price(price: Option<&str>) -> f64 {
    let Some(price) = price else {
        return 0.0;
    };
    let stripped: String = price
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    let mut seen_dot = false;
    let end = stripped
        .char_indices()
        .find(|(_, c)| {
            if *c == '.' {
                if seen_dot {
                    return true;
                }
                seen_dot = true;
            }
            false
        })
        .map(|(i, _)| i)
        .unwrap_or(stripped.len());
    stripped[..end].parse::<f64>().unwrap_or(0.0)
}

/// Returns a sorted copy of `deals`. Ties keep their input order but callers shouldn't rely on that.
pub fn sort_deals(deals: &[Deal], sort_mode: SortMode) -> Vec<Deal> {
    let mut sorted = deals.to_vec();
    match sort_mode {
        SortMode::Relevance => {
            sorted.sort_by(|a, b| b.relevance_score.total_cmp(&a.relevance_score))
        }
        SortMode::Quality => sorted.sort_by_key(|deal| Reverse(deal.deal_quality.rank())),
        SortMode::Price => sorted.sort_by(|a, b| {
            parse_price(a.price.as_deref()).total_cmp(&parse_price(b.price.as_deref()))
        }),
    }
    sorted
}

pub fn filter_deals(deals: Vec<Deal>, filter: QualityFilter) -> Vec<Deal> {
    if filter == QualityFilter::All {
        return deals;
    }
    deals
        .into_iter()
        .filter(|deal| filter.matches(deal))
        .collect()
}

/// Sort then filter, the order the grid is derived in.
pub fn visible_deals(deals: &[Deal], sort_mode: SortMode, filter: QualityFilter) -> Vec<Deal> {
    filter_deals(sort_deals(deals, sort_mode), filter)
}

/// Tier counts over the whole, unfiltered deal list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct QualityStats {
    pub excellent: usize,
    pub good: usize,
    pub average: usize,
    pub poor: usize,
}

impl QualityStats {
    pub fn from_deals(deals: &[Deal]) -> Self {
        deals.iter().fold(Self::default(), |mut stats, deal| {
            match deal.deal_quality {
                DealQuality::Excellent => stats.excellent += 1,
                DealQuality::Good => stats.good += 1,
                DealQuality::Average => stats.average += 1,
                DealQuality::Poor => stats.poor += 1,
            }
            stats
        })
    }

    pub fn count(&self, quality: DealQuality) -> usize {
        match quality {
            DealQuality::Excellent => self.excellent,
            DealQuality::Good => self.good,
            DealQuality::Average => self.average,
            DealQuality::Poor => self.poor,
        }
    }

    /// Tiers with at least one deal, best first.
    pub fn non_empty(&self) -> impl Iterator<Item = (DealQuality, usize)> + '_ {
        DealQuality::ALL
            .into_iter()
            .map(move |quality| (quality, self.count(quality)))
            .filter(|(_, count)| *count > 0)
    }
}

/// Percentage of results that were relevant, rounded to a whole number.
/// `None` when there were no results to begin with. Inconsistent counts are not
/// clamped, any `u32` pair fits in the result.
pub fn relevance_rate(relevant_results: u32, total_results: u32) -> Option<u64> {
    if total_results == 0 {
        return None;
    }
    Some(((relevant_results as f64 / total_results as f64) * 100.0).round() as u64)
}

#[cfg(test)]
mod test {
    use super::*;

    fn deal(quality: DealQuality, relevance: f64, price: Option<&str>) -> Deal {
        Deal {
            url: format!("https://shop.example/{}/{relevance}", quality.as_str()),
            price: price.map(str::to_string),
            relevance_score: relevance,
            deal_quality: quality,
            title: None,
            retailer: None,
            reasoning: None,
        }
    }

    fn sample_deals() -> Vec<Deal> {
        vec![
            deal(DealQuality::Average, 0.3, Some("$45.00")),
            deal(DealQuality::Excellent, 0.8, Some("$1,299.99")),
            deal(DealQuality::Poor, 0.95, Some("N/A")),
            deal(DealQuality::Good, 0.6, None),
            deal(DealQuality::Excellent, 0.1, Some("£19.50")),
            deal(DealQuality::Good, 0.6, Some("USD 5")),
        ]
    }

    #[test]
    fn parse_prices() {
        assert_eq!(parse_price(Some("$1,299.99")), 1299.99);
        assert_eq!(parse_price(Some("€ 45")), 45.0);
        assert_eq!(parse_price(Some("USD 5")), 5.0);
        assert_eq!(parse_price(Some("1.2.3")), 1.2);
        assert_eq!(parse_price(Some(".5")), 0.5);
        assert_eq!(parse_price(Some("N/A")), 0.0);
        assert_eq!(parse_price(Some(".")), 0.0);
        assert_eq!(parse_price(Some("")), 0.0);
        assert_eq!(parse_price(None), 0.0);
    }

    #[test]
    fn sort_by_relevance_is_descending() {
        let sorted = sort_deals(&sample_deals(), SortMode::Relevance);
        assert!(sorted
            .windows(2)
            .all(|w| w[0].relevance_score >= w[1].relevance_score));
        assert_eq!(sorted[0].deal_quality, DealQuality::Poor);
    }

    #[test]
    fn sort_by_quality_is_descending_rank() {
        let sorted = sort_deals(&sample_deals(), SortMode::Quality);
        assert!(sorted
            .windows(2)
            .all(|w| w[0].deal_quality.rank() >= w[1].deal_quality.rank()));
        assert_eq!(sorted.last().map(|d| d.deal_quality), Some(DealQuality::Poor));
    }

    #[test]
    fn sort_by_price_is_ascending() {
        let sorted = sort_deals(&sample_deals(), SortMode::Price);
        let prices: Vec<f64> = sorted
            .iter()
            .map(|d| parse_price(d.price.as_deref()))
            .collect();
        assert!(prices.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(prices, vec![0.0, 0.0, 5.0, 19.5, 45.0, 1299.99]);
    }

    #[test]
    fn unparseable_price_sorts_before_five_dollars() {
        let deals = vec![
            deal(DealQuality::Good, 0.5, Some("$5")),
            deal(DealQuality::Good, 0.5, Some("N/A")),
        ];
        let sorted = sort_deals(&deals, SortMode::Price);
        assert_eq!(sorted[0].price.as_deref(), Some("N/A"));
        assert_eq!(sorted[1].price.as_deref(), Some("$5"));
    }

    #[test]
    fn sorting_leaves_input_alone() {
        let deals = sample_deals();
        let before = deals.clone();
        for mode in SortMode::ALL {
            let sorted = sort_deals(&deals, mode);
            assert_eq!(sorted.len(), deals.len());
            assert!(sorted.iter().all(|d| deals.contains(d)));
        }
        assert_eq!(deals, before);
    }

    #[test]
    fn two_deal_example() {
        let good = deal(DealQuality::Good, 0.5, Some("$20"));
        let excellent = deal(DealQuality::Excellent, 0.9, Some("$10"));
        let deals = vec![good.clone(), excellent.clone()];
        for mode in SortMode::ALL {
            assert_eq!(
                sort_deals(&deals, mode),
                vec![excellent.clone(), good.clone()],
                "{mode}"
            );
        }
    }

    #[test]
    fn filter_is_exact_tier() {
        let sorted = sort_deals(&sample_deals(), SortMode::Relevance);
        let excellent = filter_deals(sorted.clone(), QualityFilter::Excellent);
        assert_eq!(excellent.len(), 2);
        assert!(excellent
            .iter()
            .all(|d| d.deal_quality == DealQuality::Excellent));

        // "Good" does not pull in excellent deals
        let good = filter_deals(sorted.clone(), QualityFilter::Good);
        assert_eq!(good.len(), 2);
        assert!(good.iter().all(|d| d.deal_quality == DealQuality::Good));

        assert_eq!(filter_deals(sorted.clone(), QualityFilter::All), sorted);
    }

    #[test]
    fn visible_deals_keep_sort_order() {
        let visible = visible_deals(&sample_deals(), SortMode::Price, QualityFilter::Excellent);
        let prices: Vec<_> = visible.iter().map(|d| d.price.as_deref()).collect();
        assert_eq!(prices, vec![Some("£19.50"), Some("$1,299.99")]);
    }

    #[test]
    fn quality_stats_count_everything() {
        let deals = sample_deals();
        let stats = QualityStats::from_deals(&deals);
        assert_eq!(
            stats,
            QualityStats {
                excellent: 2,
                good: 2,
                average: 1,
                poor: 1,
            }
        );
        assert_eq!(
            stats.non_empty().map(|(_, count)| count).sum::<usize>(),
            deals.len()
        );

        let only_good = QualityStats::from_deals(&filter_deals(deals, QualityFilter::Good));
        let tiers: Vec<_> = only_good.non_empty().collect();
        assert_eq!(tiers, vec![(DealQuality::Good, 2)]);
    }

    #[test]
    fn relevance_rate_rounding() {
        assert_eq!(relevance_rate(1, 3), Some(33));
        assert_eq!(relevance_rate(2, 3), Some(67));
        assert_eq!(relevance_rate(1, 8), Some(13));
        assert_eq!(relevance_rate(12, 12), Some(100));
        assert_eq!(relevance_rate(5, 0), None);
        assert_eq!(relevance_rate(0, 0), None);
        assert_eq!(relevance_rate(u32::MAX, 1), Some(429_496_729_500));
        assert_eq!(relevance_rate(6, 4), Some(150));
    }

    #[test]
    fn selection_round_trips_through_dom_values() {
        for mode in SortMode::ALL {
            assert_eq!(mode.to_string().parse::<SortMode>(), Ok(mode));
        }
        for filter in QualityFilter::ALL {
            assert_eq!(filter.to_string().parse::<QualityFilter>(), Ok(filter));
        }
        assert_eq!(
            "poor".parse::<QualityFilter>(),
            Err(AppError::UnknownQualityFilter("poor".to_string()))
        );
        assert!("cheapest".parse::<SortMode>().is_err());
    }
}
