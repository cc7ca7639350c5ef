//! Map-service search links derived from a coordinate.

use tracing::debug;

use crate::config::SearchConfig;
use crate::geo::{format_degrees, Coordinate};

/// One search link: the query term it was built from and its URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchLink {
    pub query: String,
    pub url: String,
}

impl SearchLink {
    /// Display label: first letter upper-cased, the rest lower-cased.
    pub fn label(&self) -> String {
        capitalize(&self.query)
    }
}

/// Ordered query → URL mapping. Iteration order is the order the query
/// terms were configured in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchLinks {
    entries: Vec<SearchLink>,
}

impl SearchLinks {
    pub fn iter(&self) -> impl Iterator<Item = &SearchLink> {
        self.entries.iter()
    }

    pub fn get(&self, query: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|link| link.query == query)
            .map(|link| link.url.as_str())
    }

    pub fn queries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|link| link.query.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<SearchLink> for SearchLinks {
    fn from_iter<I: IntoIterator<Item = SearchLink>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a SearchLinks {
    type Item = &'a SearchLink;
    type IntoIter = std::slice::Iter<'a, SearchLink>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Builds one link per configured query, in order. Pure; any coordinate is accepted.
pub fn build_search_links(centroid: Coordinate, search: &SearchConfig) -> SearchLinks {
    let entries = search
        .queries
        .iter()
        .map(|query| SearchLink {
            query: query.clone(),
            url: search_url(&search.base_url, centroid, query, search.zoom),
        })
        .collect::<Vec<_>>();
    debug!(links = entries.len(), "Built search links");
    SearchLinks { entries }
}

/// `<base><escaped query>/@<lat>,<lon>,<zoom>z`
pub fn search_url(base_url: &str, at: Coordinate, query: &str, zoom: u8) -> String {
    format!(
        "{}{}/@{},{},{}z",
        base_url,
        escape_path_segment(query),
        format_degrees(at.lat),
        format_degrees(at.lon),
        zoom
    )
}

/// Percent-encodes everything but unreserved characters, so the query
/// stays a single path segment.
fn escape_path_segment(segment: &str) -> String {
    urlencoding::encode(segment).into_owned()
}

pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_links_embed_coordinate_and_zoom() {
        let links = build_search_links(Coordinate::new(20.0, 30.0), &SearchConfig::default());
        assert_eq!(
            links.get("restaurants"),
            Some("https://www.google.com/maps/search/restaurants/@20.0,30.0,14z")
        );
        assert!(links.get("hotels").unwrap().contains("@20.0,30.0,14z"));
        assert_eq!(links.get("museums"), None);
    }

    #[test]
    fn order_follows_configured_queries() {
        let search = SearchConfig::default();
        let a = build_search_links(Coordinate::new(1.0, 2.0), &search);
        let b = build_search_links(Coordinate::new(-45.5, 170.25), &search);
        let a_keys: Vec<_> = a.queries().collect();
        let b_keys: Vec<_> = b.queries().collect();
        assert_eq!(a_keys, ["restaurants", "hotels", "tourist"]);
        assert_eq!(a_keys, b_keys);
        assert_eq!(a, build_search_links(Coordinate::new(1.0, 2.0), &search));
    }

    #[test]
    fn queries_are_path_escaped() {
        let url = search_url(
            "https://maps.example/search/",
            Coordinate::new(0.5, -1.0),
            "coffee & cake/bar",
            11,
        );
        assert_eq!(
            url,
            "https://maps.example/search/coffee%20%26%20cake%2Fbar/@0.5,-1.0,11z"
        );
    }

    #[test]
    fn out_of_range_coordinates_are_accepted() {
        let url = search_url("https://m/", Coordinate::new(123.0, -400.0), "x", 14);
        assert!(url.ends_with("/@123.0,-400.0,14z"));
    }

    #[test]
    fn labels_are_capitalized() {
        assert_eq!(capitalize("restaurants"), "Restaurants");
        assert_eq!(capitalize("TOURIST"), "Tourist");
        assert_eq!(capitalize(""), "");
        let link = SearchLink {
            query: "hotels".into(),
            url: String::new(),
        };
        assert_eq!(link.label(), "Hotels");
    }
}
