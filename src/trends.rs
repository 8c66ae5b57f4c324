use serde::{Deserialize, Serialize};

const TRENDS_EXPLORE_URL: &str = "https://trends.google.com/trends/explore";

/// A keyword paired with its Google Trends exploration URL.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrendLink {
    pub keyword: String,
    pub url: String,
}

/// Build the Trends explore URL for one keyword.
pub fn trend_url(keyword: &str) -> String {
    format!("{}?q={}", TRENDS_EXPLORE_URL, urlencoding::encode(keyword))
}

/// Trend links for a sequence of keywords, in input order.
pub fn trend_links_for<'a, I>(keywords: I) -> Vec<TrendLink>
where
    I: IntoIterator<Item = &'a str>,
{
    keywords
        .into_iter()
        .map(|keyword| TrendLink {
            keyword: keyword.to_string(),
            url: trend_url(keyword),
        })
        .collect()
}
