//! Birth-year estimates used to break ordering ties.
//!
//! Members take the year from their birth date. Family nodes take the oldest (minimum) year of
//! their parents, or the mean year of their children when they have no parents.

use crate::family::FamilyGraph;
use regex::Regex;
use std::sync::OnceLock;

/// Extracts a year from free-form date text such as `"12.03.1950"` or `"um 1890"`.
///
/// The year is the first digit run greater than 31, which skips day and month components.
/// `"?"`, text without digits and text with only small numbers yield `default_year`.
pub fn year_from_date(text: &str, default_year: f64) -> f64 {
    static DIGITS: OnceLock<Regex> = OnceLock::new();
    if text == "?" {
        return default_year;
    }
    let re = DIGITS.get_or_init(|| Regex::new(r"\d+").expect("digit pattern is valid"));
    re.find_iter(text)
        .filter_map(|m| m.as_str().parse::<f64>().ok())
        .find(|&n| n > 31.0)
        .unwrap_or(default_year)
}

/// Ages per node index. `None` for family nodes with no aged parents or children.
pub fn assign_ages(graph: &FamilyGraph, default_year: f64) -> Vec<Option<f64>> {
    let mut ages: Vec<Option<f64>> = graph
        .node_ixs()
        .map(|ix| {
            graph
                .member(ix)
                .map(|record| year_from_date(&record.birth_date(), default_year))
        })
        .collect();

    for family in graph.node_ixs().filter(|&ix| !graph.is_member(ix)) {
        let oldest_parent = graph
            .parents(family)
            .iter()
            .filter_map(|p| ages[p.index()])
            .reduce(f64::min);
        if oldest_parent.is_some() {
            ages[family.index()] = oldest_parent;
            continue;
        }

        let children: Vec<f64> = graph
            .children(family)
            .iter()
            .filter_map(|c| ages[c.index()])
            .collect();
        if !children.is_empty() {
            ages[family.index()] = Some(children.iter().sum::<f64>() / children.len() as f64);
        }
    }

    tracing::debug!(
        aged = ages.iter().filter(|a| a.is_some()).count(),
        "assigned ages"
    );
    ages
}

#[cfg(test)]
mod tests {
    use super::year_from_date;

    #[test]
    fn year_skips_day_and_month() {
        assert_eq!(year_from_date("12.03.1950", 1980.0), 1950.0);
        assert_eq!(year_from_date("03/12/1875", 1980.0), 1875.0);
        assert_eq!(year_from_date("1923-04-05", 1980.0), 1923.0);
    }

    #[test]
    fn year_falls_back_to_default() {
        assert_eq!(year_from_date("?", 1980.0), 1980.0);
        assert_eq!(year_from_date("", 1980.0), 1980.0);
        assert_eq!(year_from_date("unbekannt", 1980.0), 1980.0);
        assert_eq!(year_from_date("12.03.", 1980.0), 1980.0);
    }

    #[test]
    fn year_threshold_is_strictly_above_31() {
        assert_eq!(year_from_date("31 32", 0.0), 32.0);
        assert_eq!(year_from_date("um 850", 1980.0), 850.0);
    }
}
