use crate::core::{
    criteria::{matches_address, matches_board, matches_fees},
    fees::{lower_bound, FeeRange},
};
use crate::models::{MatchedAttribute, School, SchoolQuery, ScoredSchool, SearchOutcome};
use crate::services::Catalog;
use std::collections::HashSet;
use std::sync::Arc;

/// School directory matcher
///
/// Owns a shared, immutable catalog and answers the listing and search
/// calls over it. Cloning is cheap; every clone reads the same catalog.
///
/// # Search
/// Each school is checked independently against three criteria, in
/// order: address, board, fees. Its score is the number satisfied.
/// Schools scoring zero are dropped. No ordering is applied to the rest.
#[derive(Debug, Clone)]
pub struct SchoolMatcher {
    catalog: Arc<Catalog>,
}

impl SchoolMatcher {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Distinct addresses in first-occurrence order
    pub fn addresses(&self) -> Vec<String> {
        distinct(self.catalog.schools().iter().map(|s| s.address.as_str()))
    }

    /// Distinct raw board strings in first-occurrence order
    ///
    /// Compound values such as "CBSE, ICSE" are kept whole.
    pub fn boards(&self) -> Vec<String> {
        distinct(self.catalog.schools().iter().map(|s| s.board.as_str()))
    }

    /// Distinct trimmed fee brackets, ascending by lower bound
    ///
    /// The sort is stable, so brackets with equal lower bounds keep catalog
    /// order. Brackets whose lower bound does not parse go last.
    pub fn fee_brackets(&self) -> Vec<String> {
        let mut brackets = distinct(self.catalog.schools().iter().map(|s| s.fees.trim()));

        brackets.sort_by_key(|fees| match lower_bound(fees) {
            Some(min) => (false, min),
            None => (true, 0),
        });

        brackets
    }

    /// Score every school against `query` and keep those matching at least
    /// one criterion
    pub fn search(&self, query: &SchoolQuery) -> SearchOutcome {
        let requested_fees = parse_requested_fees(&query.fees);

        let scored: Vec<ScoredSchool> = self
            .catalog
            .schools()
            .iter()
            .filter_map(|school| score_school(school, query, requested_fees.as_ref()))
            .collect();

        tracing::debug!(
            "Search over {} schools matched {}",
            self.catalog.len(),
            scored.len()
        );

        if scored.is_empty() {
            SearchOutcome::no_matches()
        } else {
            SearchOutcome::Matches(scored)
        }
    }
}

/// Evaluate the three criteria for one school
///
/// Returns `None` when nothing matched.
fn score_school(
    school: &School,
    query: &SchoolQuery,
    requested_fees: Option<&FeeRange>,
) -> Option<ScoredSchool> {
    let mut matched_attributes = Vec::with_capacity(3);

    if matches_address(school, &query.addresses) {
        matched_attributes.push(MatchedAttribute::Address);
    }
    if matches_board(school, &query.boards) {
        matched_attributes.push(MatchedAttribute::Board);
    }
    if matches_fees(school, requested_fees) {
        matched_attributes.push(MatchedAttribute::Fees);
    }

    if matched_attributes.is_empty() {
        return None;
    }

    Some(ScoredSchool {
        school: school.clone(),
        matched: matched_attributes.len() as u8,
        matched_attributes,
    })
}

fn parse_requested_fees(raw: &str) -> Option<FeeRange> {
    if raw.trim().is_empty() {
        return None;
    }

    match FeeRange::parse(raw) {
        Ok(range) => Some(range),
        Err(e) => {
            tracing::debug!("Ignoring requested fee range '{}': {}", raw, e);
            None
        }
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .filter(|v| seen.insert(*v))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_matcher() -> SchoolMatcher {
        SchoolMatcher::new(Catalog::new(vec![
            School::new("Baner", "CBSE", "10,000-20,000").with_attribute("name", "Green Valley"),
            School::new("Aundh", "ICSE, IGCSE", "30,000-40,000").with_attribute("name", "Hill Top"),
            School::new("Baner", "State Board", " 5,000-8,000 ").with_attribute("name", "Sunrise"),
            School::new("Kothrud", "CBSE", "10,000-20,000").with_attribute("name", "Lotus"),
        ]))
    }

    fn query(addresses: &[&str], boards: &[&str], fees: &str) -> SchoolQuery {
        SchoolQuery {
            addresses: addresses.iter().map(|s| s.to_string()).collect(),
            boards: boards.iter().map(|s| s.to_string()).collect(),
            fees: fees.to_string(),
        }
    }

    #[test]
    fn test_addresses_distinct_in_catalog_order() {
        let matcher = create_matcher();
        assert_eq!(matcher.addresses(), vec!["Baner", "Aundh", "Kothrud"]);
    }

    #[test]
    fn test_boards_not_split() {
        let matcher = create_matcher();
        assert_eq!(matcher.boards(), vec!["CBSE", "ICSE, IGCSE", "State Board"]);
    }

    #[test]
    fn test_fee_brackets_sorted_and_trimmed() {
        let matcher = create_matcher();
        assert_eq!(
            matcher.fee_brackets(),
            vec!["5,000-8,000", "10,000-20,000", "30,000-40,000"]
        );
    }

    #[test]
    fn test_unparseable_brackets_go_last() {
        let matcher = SchoolMatcher::new(Catalog::new(vec![
            School::new("A", "CBSE", "on request"),
            School::new("B", "CBSE", "20000-30000"),
            School::new("C", "CBSE", "1000-2000"),
        ]));

        assert_eq!(
            matcher.fee_brackets(),
            vec!["1000-2000", "20000-30000", "on request"]
        );
    }

    #[test]
    fn test_empty_catalog_views() {
        let matcher = SchoolMatcher::new(Catalog::default());

        assert!(matcher.addresses().is_empty());
        assert!(matcher.boards().is_empty());
        assert!(matcher.fee_brackets().is_empty());
        assert!(matcher.search(&query(&["Baner"], &[], "")).is_empty());
    }

    #[test]
    fn test_search_scores_all_criteria() {
        let matcher = create_matcher();
        let outcome = matcher.search(&query(&["Baner"], &["CBSE"], "0-25000"));

        let schools = outcome.schools();
        assert_eq!(schools.len(), 3);

        let green_valley = &schools[0];
        assert_eq!(green_valley.matched, 3);
        assert_eq!(
            green_valley.matched_attributes,
            vec![MatchedAttribute::Address, MatchedAttribute::Board, MatchedAttribute::Fees]
        );

        let sunrise = &schools[1];
        assert_eq!(sunrise.matched, 2);
        assert_eq!(
            sunrise.matched_attributes,
            vec![MatchedAttribute::Address, MatchedAttribute::Fees]
        );

        let lotus = &schools[2];
        assert_eq!(lotus.matched_attributes, vec![MatchedAttribute::Board, MatchedAttribute::Fees]);
    }

    #[test]
    fn test_search_no_constraints_is_no_matches() {
        let matcher = create_matcher();
        let outcome = matcher.search(&SchoolQuery::default());

        assert_eq!(outcome, SearchOutcome::no_matches());
    }

    #[test]
    fn test_malformed_requested_fees_do_not_match() {
        let matcher = create_matcher();

        assert!(matcher.search(&query(&[], &[], "cheap")).is_empty());

        let outcome = matcher.search(&query(&["Aundh"], &[], "cheap"));
        assert_eq!(outcome.schools().len(), 1);
        assert_eq!(outcome.schools()[0].matched_attributes, vec![MatchedAttribute::Address]);
    }

    #[test]
    fn test_blank_board_matches_every_school() {
        let matcher = SchoolMatcher::new(Catalog::new(vec![School::new("A", "CBSE", "1-2")]));
        let outcome = matcher.search(&query(&[], &[""], ""));

        let schools = outcome.schools();
        assert_eq!(schools.len(), 1);
        assert_eq!(schools[0].matched, 1);
        assert_eq!(schools[0].matched_attributes, vec![MatchedAttribute::Board]);
    }

    #[test]
    fn test_inverted_school_fees_never_match() {
        let matcher = SchoolMatcher::new(Catalog::new(vec![
            School::new("A", "CBSE", "30000-20000"),
            School::new("B", "CBSE", "20000-30000"),
        ]));
        let outcome = matcher.search(&query(&[], &[], "10000-40000"));

        let addresses: Vec<&str> = outcome.schools().iter().map(|s| s.school.address.as_str()).collect();
        assert_eq!(addresses, vec!["B"]);
    }

    #[test]
    fn test_inverted_requested_fees_match_nothing() {
        let matcher = create_matcher();
        assert!(matcher.search(&query(&[], &[], "40000-0")).is_empty());
    }

    #[test]
    fn test_search_keeps_pass_through_attributes() {
        let matcher = create_matcher();
        let outcome = matcher.search(&query(&["Aundh"], &[], ""));

        let school = &outcome.schools()[0].school;
        assert_eq!(school.extra.get("name"), Some(&serde_json::Value::from("Hill Top")));
    }
}
