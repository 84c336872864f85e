//! Pure search/filter predicate over in-memory idea lists. The idea list
//! endpoint loads a user's ideas newest-first and narrows them here; the
//! function is side-effect-free and preserves the order of its input.

use std::str::FromStr;

use crate::db::enums::IdeaStatus;
use crate::db::models::Idea;

/// Status dimension of the filter: everything, or one status exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    All,
    Only(IdeaStatus),
}

impl FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || s == "all" {
            Ok(StatusFilter::All)
        } else {
            IdeaStatus::from_str(s).map(StatusFilter::Only)
        }
    }
}

/// Returns the ideas matching all three predicates, in their original order:
/// - `query`: case-insensitive substring of the title OR the description;
/// - `status`: equality, unless `StatusFilter::All`;
/// - `selected_tags`: the idea carries at least one of them (OR semantics);
///   an empty selection matches everything.
pub fn filter_ideas<'a>(
    ideas: &'a [Idea],
    query: &str,
    status: StatusFilter,
    selected_tags: &[String],
) -> Vec<&'a Idea> {
    let query_lower = query.to_lowercase();
    ideas
        .iter()
        .filter(|idea| {
            let matches_search = query_lower.is_empty()
                || idea.title.to_lowercase().contains(&query_lower)
                || idea.description.to_lowercase().contains(&query_lower);
            let matches_status = match status {
                StatusFilter::All => true,
                StatusFilter::Only(s) => idea.status == s,
            };
            let matches_tags = selected_tags.is_empty()
                || selected_tags.iter().any(|tag| idea.tags.contains(tag));
            matches_search && matches_status && matches_tags
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::enums::IdeaColor;
    use chrono::Utc;
    use uuid::Uuid;

    fn idea(title: &str, description: &str, status: IdeaStatus, tags: &[&str]) -> Idea {
        let now = Utc::now();
        Idea {
            id: Uuid::new_v4(),
            user_id: 1,
            title: title.to_string(),
            description: description.to_string(),
            status,
            tags: tags.iter().map(|t| t.to_string()).collect(),
            color: IdeaColor::Gray,
            image_url: None,
            original_description: None,
            group_id: None,
            created_at: now,
            updated_at: now,
        }
    }

    fn sample_list() -> Vec<Idea> {
        vec![
            idea(
                "Recipe App",
                "Suggests recipes from photos of your fridge",
                IdeaStatus::Idea,
                &["AI", "Food"],
            ),
            idea(
                "Finance Tracker",
                "Privacy-focused expense categorization",
                IdeaStatus::Research,
                &["Finance", "Privacy"],
            ),
            idea(
                "Habit Game",
                "RPG elements for building habits",
                IdeaStatus::Launched,
                &["Gaming", "Productivity"],
            ),
        ]
    }

    #[test]
    fn test_identity_case_returns_all() {
        let ideas = sample_list();
        let result = filter_ideas(&ideas, "", StatusFilter::All, &[]);
        assert_eq!(result.len(), ideas.len());
        for (got, want) in result.iter().zip(ideas.iter()) {
            assert_eq!(got.id, want.id);
        }
    }

    #[test]
    fn test_query_matches_title_case_insensitively() {
        let ideas = sample_list();
        let result = filter_ideas(&ideas, "recipe", StatusFilter::All, &[]);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].title, "Recipe App");

        let result = filter_ideas(&ideas, "RECIPE", StatusFilter::All, &[]);
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn test_query_matches_description_too() {
        let ideas = sample_list();
        let result = filter_ideas(&ideas, "expense", StatusFilter::All, &[]);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].title, "Finance Tracker");
    }

    #[test]
    fn test_status_filter_conjoins_with_query() {
        let ideas = sample_list();
        let result = filter_ideas(&ideas, "recipe", StatusFilter::Only(IdeaStatus::Idea), &[]);
        assert_eq!(result.len(), 1);

        let result = filter_ideas(
            &ideas,
            "recipe",
            StatusFilter::Only(IdeaStatus::Launched),
            &[],
        );
        assert!(result.is_empty());
    }

    #[test]
    fn test_tag_selection_is_or_not_and() {
        let ideas = sample_list();
        let tags = vec!["Food".to_string(), "Gaming".to_string()];
        // "Recipe App" has Food but not Gaming; "Habit Game" has Gaming.
        let result = filter_ideas(&ideas, "", StatusFilter::All, &tags);
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].title, "Recipe App");
        assert_eq!(result[1].title, "Habit Game");
    }

    #[test]
    fn test_unknown_tag_matches_nothing() {
        let ideas = sample_list();
        let tags = vec!["Blockchain".to_string()];
        assert!(filter_ideas(&ideas, "", StatusFilter::All, &tags).is_empty());
    }

    #[test]
    fn test_order_is_preserved() {
        let ideas = sample_list();
        let tags = vec![
            "AI".to_string(),
            "Finance".to_string(),
            "Gaming".to_string(),
        ];
        let result = filter_ideas(&ideas, "", StatusFilter::All, &tags);
        let titles: Vec<_> = result.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["Recipe App", "Finance Tracker", "Habit Game"]);
    }

    #[test]
    fn test_status_filter_parses_query_values() {
        assert_eq!("all".parse::<StatusFilter>().unwrap(), StatusFilter::All);
        assert_eq!("".parse::<StatusFilter>().unwrap(), StatusFilter::All);
        assert_eq!(
            "launched".parse::<StatusFilter>().unwrap(),
            StatusFilter::Only(IdeaStatus::Launched)
        );
        assert!("bogus".parse::<StatusFilter>().is_err());
    }
}
