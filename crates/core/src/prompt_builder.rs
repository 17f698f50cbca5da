//! Prompt composition for page generation.
//!
//! Produces the fixed system instructions for an [`OutputProfile`] and the
//! user message embedding the page description plus prior prompts for the
//! same project.

use crate::page_output::OutputProfile;

/// Maximum number of prior prompts rendered into the user message.
pub const MAX_HISTORY_PROMPTS: usize = 20;

/// System instructions plus user message, ready for an LLM provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptPair {
    pub instructions: String,
    pub input: String,
}

const SHARED_STYLE_RULES: &str = "\
VISUAL STYLE REQUIREMENTS:
- Modern, premium SaaS-like aesthetic.
- Clear visual hierarchy: big hero section, bold headline, subcopy, primary call to action.
- Plenty of white space, rounded corners and soft shadows.
- Hover states and short transitions on buttons and cards.
- Fully responsive layout using flexbox and grid; content stacks cleanly on small screens.
- Use semantic elements: <header>, <main>, <section>, <nav>, <footer>.
- Include a hero section and at least one content section with cards or feature blocks.";

const REACT_INSTRUCTIONS: &str = "\
You are a senior product designer and front-end developer.
You generate a React + Tailwind CSS page component plus a standalone HTML preview of the same page.
Return ONLY a valid JSON object with exactly two string fields: \"reactComponent\" and \"previewHtml\".
No markdown, no backticks, no explanations, no comments outside the code.

REACT COMPONENT REQUIREMENTS:
- `reactComponent` is the source of a single file exporting one function component with `export default function`.
- Style exclusively with Tailwind utility classes; no CSS imports and no inline style objects.
- No external dependencies other than React.

PREVIEW HTML REQUIREMENTS:
- `previewHtml` is a complete HTML5 document (<!DOCTYPE html>, <html>, <head>, <body>) rendering the same page.
- Load Tailwind from its CDN script inside <head>; no other scripts and no other network requests.";

const STATIC_INSTRUCTIONS: &str = "\
You are a senior product designer and front-end developer.
You generate a COMPLETE HTML5 page plus a separate CSS stylesheet.
Return ONLY a valid JSON object with exactly two string fields: \"html\" and \"css\".
No markdown, no backticks, no explanations, no comments.

HTML REQUIREMENTS:
- `html` MUST reference the stylesheet with <link rel=\"stylesheet\" href=\"styles.css\"> inside <head>.
- Do NOT include any <script> tag.
- Do NOT include any external network requests (no remote fonts, no CDNs).

CSS REQUIREMENTS:
- `css` is valid standalone CSS starting with rules for the html element.
- Define the color system with :root variables.
- Use @media queries for small screens. No CSS comments.";

const REACT_REQUIREMENTS: &str = "\
Additional requirements:
- The preview HTML must render the same design as the React component.
- Design should feel cohesive and well thought out, not like a basic boilerplate.
- Prefer a centered layout with a comfortable max-width for content.";

const STATIC_REQUIREMENTS: &str = "\
Additional requirements:
- HTML must include <!DOCTYPE html>, <html>, <head>, and <body>.
- Use only relative paths (e.g., styles.css) for referenced assets.
- Design should feel cohesive and well thought out, not like a basic boilerplate.
- Prefer a centered layout with a comfortable max-width for content.";

/// The fixed system instructions for a profile.
///
/// Constrains the model to emit only the profile's two JSON fields. This is
/// a textual constraint; the output must still be validated.
pub fn system_instructions(profile: OutputProfile) -> String {
    let contract = match profile {
        OutputProfile::React => REACT_INSTRUCTIONS,
        OutputProfile::Static => STATIC_INSTRUCTIONS,
    };
    format!("{contract}\n\n{SHARED_STYLE_RULES}")
}

/// Compose the prompt for a page description.
///
/// `history` holds prior prompts for the same project, newest first (the
/// order the history store returns). They are rendered oldest first and
/// capped at [`MAX_HISTORY_PROMPTS`] most recent entries.
pub fn build_prompt(profile: OutputProfile, description: &str, history: &[&str]) -> PromptPair {
    let mut input = String::from(
        "Create a visually polished, responsive single-page website based on this description:\n",
    );
    input.push_str(description.trim());
    input.push_str("\n\n");

    if !history.is_empty() {
        let recent = &history[..history.len().min(MAX_HISTORY_PROMPTS)];
        input.push_str("Earlier prompts for this project, oldest first:\n");
        for (n, prompt) in recent.iter().rev().enumerate() {
            input.push_str(&format!("{}. {}\n", n + 1, prompt.trim()));
        }
        input.push_str(
            "\nThe description above refines the page those prompts produced. \
             Keep what they established unless the new description changes it.\n\n",
        );
    }

    input.push_str(match profile {
        OutputProfile::React => REACT_REQUIREMENTS,
        OutputProfile::Static => STATIC_REQUIREMENTS,
    });

    PromptPair {
        instructions: system_instructions(profile),
        input,
    }
}
