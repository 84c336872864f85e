//! Prompt assembly for the AI endpoints.

/// Image prompts carry only a bounded prefix of the idea description.
const IMAGE_PROMPT_DESCRIPTION_LIMIT: usize = 200;

pub const ENHANCEMENT_SYSTEM_PROMPT: &str = "You are an expert technical writer and app idea enhancer. Your job is to take basic app ideas and descriptions and enhance them with detailed features, technical considerations, market potential, and implementation suggestions. Make the description comprehensive, professional, and inspiring while keeping the core idea intact. Use markdown formatting for better readability.";

/// Builds the user message for a description-enhancement request.
pub fn enhancement_prompt(title: &str, description: &str) -> String {
    format!(
        "Please enhance this app idea description:\n\n\
         Title: {title}\n\
         Current Description: {description}\n\n\
         Please provide an enhanced, detailed description that includes:\n\
         - Detailed feature breakdown\n\
         - Technical implementation considerations\n\
         - Market potential and target audience\n\
         - Monetization strategies\n\
         - Development roadmap suggestions\n\
         - Competitive advantages\n\n\
         Keep the writing engaging and professional. Use markdown formatting \
         with headers, bullet points, and emphasis where appropriate."
    )
}

/// Builds the illustration prompt for an idea, truncating the description to
/// a bounded, char-boundary-safe prefix.
pub fn image_prompt(title: &str, description: &str) -> String {
    let prefix = truncate_chars(description, IMAGE_PROMPT_DESCRIPTION_LIMIT);
    format!("Create a beautiful, professional illustration for an app idea: {title}. {prefix}")
}

fn truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &s[..byte_idx],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_description_is_kept_whole() {
        let prompt = image_prompt("Recipe App", "scan your fridge");
        assert!(prompt.contains("Recipe App"));
        assert!(prompt.ends_with("scan your fridge"));
    }

    #[test]
    fn test_long_description_is_truncated() {
        let long = "x".repeat(500);
        let prompt = image_prompt("T", &long);
        let tail = prompt.rsplit(". ").next().unwrap();
        assert_eq!(tail.chars().count(), 200);
    }

    #[test]
    fn test_truncation_respects_char_boundaries() {
        let long = "é".repeat(300);
        let prompt = image_prompt("T", &long);
        assert!(prompt.chars().filter(|c| *c == 'é').count() == 200);
    }

    #[test]
    fn test_enhancement_prompt_embeds_title_and_description() {
        let prompt = enhancement_prompt("Habit Game", "gamified habits");
        assert!(prompt.contains("Title: Habit Game"));
        assert!(prompt.contains("Current Description: gamified habits"));
    }
}
