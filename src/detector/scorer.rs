//! Weighted multi-category scoring.
//!
//! Each category contributes its weight at most once, no matter how many of
//! its keywords appear.

use super::tables::{CRITERIA, CriteriaCategory, MAX_REPORTED_KEYWORDS};
use crate::models::CriteriaMatch;

fn category_hit(category: &CriteriaCategory, text: &str) -> bool {
    category.keywords.iter().any(|keyword| text.contains(keyword))
}

/// Sum of the weights of every category with at least one keyword in `text`.
pub fn score(text: &str) -> f64 {
    CRITERIA
        .iter()
        .filter(|category| category_hit(category, text))
        .map(|category| category.weight)
        .sum()
}

/// Matched categories in table order, each with up to three example keywords.
pub fn matched_criteria(text: &str) -> Vec<CriteriaMatch> {
    CRITERIA
        .iter()
        .filter_map(|category| {
            let matched_keywords: Vec<String> = category
                .keywords
                .iter()
                .filter(|keyword| text.contains(*keyword))
                .take(MAX_REPORTED_KEYWORDS)
                .map(|keyword| keyword.to_string())
                .collect();

            (!matched_keywords.is_empty()).then(|| CriteriaMatch {
                criterion: category.name.to_string(),
                matched_keywords,
                weight: category.weight,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_empty_text() {
        assert_eq!(score(""), 0.0);
        assert!(matched_criteria("").is_empty());
    }

    #[test]
    fn test_category_weight_added_once() {
        // Four natural_disaster keywords, one weight.
        let text = "earthquake, tsunami, landslide and flooding";
        assert_eq!(score(text), 2.5);
        let matches = matched_criteria(text);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].criterion, "natural_disaster");
    }

    #[test]
    fn test_matched_keywords_capped_at_three_in_table_order() {
        let text = "landslide, tsunami, flooding, earthquake and drought";
        let matches = matched_criteria(text);
        assert_eq!(
            matches[0].matched_keywords,
            vec!["earthquake", "flood", "flooding"]
        );
    }

    #[test]
    fn test_keyword_shared_by_two_categories_scores_both() {
        // "blackout" belongs to production_disruption and infrastructure_failure.
        let text = "a citywide blackout";
        assert_eq!(score(text), 6.0);
        let names: Vec<_> = matched_criteria(text).into_iter().map(|m| m.criterion).collect();
        assert_eq!(names, vec!["production_disruption", "infrastructure_failure"]);
    }

    #[test]
    fn test_score_matches_sum_of_reported_weights() {
        let text = "bank run triggers market crash and a historic sell-off";
        let total: f64 = matched_criteria(text).iter().map(|m| m.weight).sum();
        assert_eq!(score(text), total);
        assert_eq!(total, 3.5 + 2.0 + 1.5);
    }

    #[test]
    fn test_substring_matching_without_boundaries() {
        // "coup" inside "coupon" still hits regulatory_political_shock.
        assert_eq!(score("coupon sales"), 3.5);
    }
}
