use std::sync::LazyLock;

use pulldown_cmark::{CodeBlockKind, CowStr, Event, Tag, TagEnd};
use syntect::highlighting::{Theme, ThemeSet};
use syntect::html::highlighted_html_for_string;
use syntect::parsing::SyntaxSet;

use crate::content::ContentError;

const CODE_THEME: &str = "base16-ocean.dark";

static SYNTAXES: LazyLock<SyntaxSet> = LazyLock::new(SyntaxSet::load_defaults_newlines);
static THEMES: LazyLock<ThemeSet> = LazyLock::new(ThemeSet::load_defaults);

/// Replaces every code block in a Markdown event stream with highlighted
/// HTML wrapped in a `code-block` div.
///
/// Loading syntect's syntax and theme sets is slow, so both are shared
/// across calls.
pub fn highlight<'a, It>(events: It) -> Result<Vec<Event<'a>>, ContentError>
where
    It: Iterator<Item = Event<'a>>,
{
    let theme = THEMES
        .themes
        .get(CODE_THEME)
        .ok_or_else(|| ContentError::Parse(format!("missing code theme {CODE_THEME}")))?;

    let mut code_block: Option<(String, String)> = None;
    let mut out_events = Vec::new();

    for event in events {
        match event {
            Event::Start(Tag::CodeBlock(kind)) => {
                let lang = match kind {
                    CodeBlockKind::Fenced(lang) => lang_token(&lang),
                    CodeBlockKind::Indented => String::new(),
                };
                code_block = Some((lang, String::new()));
            }
            Event::End(TagEnd::CodeBlock) => {
                if let Some((lang, code)) = code_block.take() {
                    let html = render_block(&lang, &code, theme)?;
                    out_events.push(Event::Html(CowStr::from(html)));
                }
            }
            Event::Text(text) => match code_block.as_mut() {
                Some((_, code)) => code.push_str(&text),
                None => out_events.push(Event::Text(text)),
            },
            e => out_events.push(e),
        }
    }

    Ok(out_events)
}

// first word of the fence info string, restricted to characters safe in an attribute
fn lang_token(info: &str) -> String {
    info.split_whitespace()
        .next()
        .unwrap_or_default()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '+' | '#' | '_'))
        .collect()
}

fn render_block(lang: &str, code: &str, theme: &Theme) -> Result<String, ContentError> {
    let syntax = SYNTAXES
        .find_syntax_by_token(lang)
        .unwrap_or_else(|| SYNTAXES.find_syntax_plain_text());
    let html = highlighted_html_for_string(code, &SYNTAXES, syntax, theme)
        .map_err(|e| ContentError::Parse(format!("code block ({lang}): {e}")))?;
    Ok(format!(
        "<div class=\"code-block\" data-lang=\"{lang}\">{html}</div>"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pulldown_cmark::Parser;

    fn render(md: &str) -> String {
        let events = highlight(Parser::new(md)).unwrap();
        let mut html = String::new();
        pulldown_cmark::html::push_html(&mut html, events.into_iter());
        html
    }

    #[test]
    fn test_fenced_block_is_highlighted() {
        let html = render("intro\n\n```rust\nfn main() {}\n```\n");
        assert!(html.contains("<p>intro</p>"));
        assert!(html.contains("data-lang=\"rust\""));
        assert!(html.contains("<pre style="));
        assert!(!html.contains("<code"));
    }

    #[test]
    fn test_unknown_language_falls_back_to_plain_text() {
        let html = render("```nosuchlang\nhello\n```\n");
        assert!(html.contains("hello"));
        assert!(html.contains("data-lang=\"nosuchlang\""));
    }

    #[test]
    fn test_lang_token_is_sanitized() {
        assert_eq!(lang_token("rust ignore"), "rust");
        assert_eq!(lang_token("c#"), "c#");
        assert_eq!(lang_token("\"><script>"), "script");
        assert_eq!(lang_token(""), "");
    }
}
