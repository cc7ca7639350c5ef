//! The assembled record consumed by the text writers.

use crate::geo::Coordinate;
use crate::links::SearchLinks;

/// Centroid plus its search links. Built once per run and only read afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportData {
    pub centroid: Coordinate,
    pub links: SearchLinks,
}

pub fn assemble_report(centroid: Coordinate, links: SearchLinks) -> ReportData {
    ReportData { centroid, links }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SearchConfig;
    use crate::links::build_search_links;

    #[test]
    fn report_keeps_centroid_and_link_order() {
        let centroid = Coordinate::new(20.0, 30.0);
        let links = build_search_links(centroid, &SearchConfig::default());
        let report = assemble_report(centroid, links.clone());
        assert_eq!(report.centroid, centroid);
        assert_eq!(report.links, links);
    }
}
