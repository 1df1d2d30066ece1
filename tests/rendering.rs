//! End-to-end rendering behavior across every theme.

use pretty_assertions::assert_eq;
use regex::Regex;

use mdlive::error::{Error, Result};
use mdlive::markup::{parse_spans, plain_text};
use mdlive::render::{render_fallback, LineFallback, RenderStrategy, Renderer};
use mdlive::theme::{Palette, Theme, CHECKED_GLYPH, UNCHECKED_GLYPH};

/// Stands in for a missing Markdown converter.
struct MissingConverter;

impl RenderStrategy for MissingConverter {
    fn name(&self) -> &'static str {
        "missing-converter"
    }

    fn render(&self, _text: &str, _palette: &Palette) -> Result<String> {
        Err(Error::ParseFailure("converter unavailable".to_string()))
    }
}

fn strip_tags(markup: &str) -> String {
    let tags = Regex::new(r"</?(span|s|u)( [^>]*)?>").unwrap();
    tags.replace_all(markup, "").into_owned()
}

#[test]
fn test_escaping_never_leaks_angle_brackets() {
    let text = "a < b && c > d\n\n- x <tag> y\n\n```\n<div>&</div>\n```";
    for &theme in Theme::all() {
        let markup = Renderer::new(theme).render(text);
        let bare = strip_tags(&markup);
        assert!(!bare.contains('<'), "{}: {}", theme, markup);
        assert!(!bare.contains('>'), "{}: {}", theme, markup);
        assert!(plain_text(&markup).contains("<div>&</div>"));
    }
}

#[test]
fn test_bold_span_for_every_theme() {
    for &theme in Theme::all() {
        let markup = Renderer::new(theme).render("**bold**");
        assert!(!markup.contains('*'), "{}: {}", theme, markup);

        let spans = parse_spans(&markup);
        let bold = spans
            .iter()
            .find(|span| span.text == "bold")
            .unwrap_or_else(|| panic!("{}: no span for 'bold' in {}", theme, markup));
        assert!(bold.style.weight.is_some(), "{}: {}", theme, markup);
    }
}

#[test]
fn test_italic_does_not_consume_bold_markers() {
    for &theme in Theme::all() {
        let palette = theme.palette();
        let markup = Renderer::new(theme).render("*italic* and **bold**");
        assert!(markup.contains(&palette.emphasis.wrap("italic")), "{}", markup);
        assert!(markup.contains(&palette.strong.wrap("bold")), "{}", markup);
        assert!(!markup.contains('*'));
    }
}

#[test]
fn test_fenced_code_is_verbatim() {
    for &theme in Theme::all() {
        let palette = theme.palette();
        let markup = Renderer::new(theme).render("```\n**not bold**\n```");
        assert!(markup.starts_with(&palette.code_block.open()), "{}", markup);
        assert!(markup.contains("**not bold**"));
        assert!(!markup.contains(&palette.strong.open()));
    }
}

#[test]
fn test_task_items() {
    let renderer = Renderer::new(Theme::Default);
    let markup = renderer.render("- [x] done\n- [ ] todo");
    assert!(markup.contains(CHECKED_GLYPH), "{}", markup);
    assert!(markup.contains("<s>done</s>"), "{}", markup);
    assert!(markup.contains(UNCHECKED_GLYPH), "{}", markup);
    assert!(!markup.contains("<s>todo</s>"));
    assert_eq!(plain_text(&markup), "☑ done\n☐ todo");
}

#[test]
fn test_loose_list_task_items() {
    for &theme in Theme::all() {
        let text = "- a\n\n- [x] b";
        let (markup, strategy) = Renderer::new(theme).render_traced(text);
        assert_eq!(strategy, "html-pipeline");
        assert!(markup.contains(CHECKED_GLYPH), "{}: {}", theme, markup);
        assert!(markup.contains("<s>b</s>"), "{}: {}", theme, markup);
        assert!(!markup.contains("[x]"));
        assert_eq!(
            plain_text(&markup),
            plain_text(&render_fallback(text, theme.palette()))
        );
    }
}

#[test]
fn test_checked_item_with_bold_text_is_struck() {
    let markup = Renderer::new(Theme::Default).render("- [x] **done**");
    assert!(!markup.contains("<s></s>"), "{}", markup);

    let spans = parse_spans(&markup);
    let done = spans.iter().find(|span| span.text == "done").unwrap();
    assert!(done.style.strikethrough);
    assert!(done.style.weight.is_some());
}

#[test]
fn test_blank_runs_are_collapsed() {
    let text = "# Title\n\n\n\n\nPara\n\n---\n\n\n> quote\n\n\n\n- a\n- b\n\n\n| a | b |\n|---|---|\n| 1 | 2 |\n";
    for &theme in Theme::all() {
        let markup = Renderer::new(theme).render(text);
        assert!(!markup.contains("\n\n\n"), "{}: {:?}", theme, markup);
        assert_eq!(markup, markup.trim());
    }
}

#[test]
fn test_converter_unavailable_matches_fallback() {
    let text = "# Heading\n\nSome *text* with `code`\n\n1. first\n2. second\n\n> said\n\n---";
    for &theme in Theme::all() {
        let renderer = Renderer::with_strategies(
            theme,
            vec![Box::new(MissingConverter), Box::new(LineFallback)],
        );
        let (markup, strategy) = renderer.render_traced(text);
        assert_eq!(strategy, "line-fallback");
        assert!(!markup.is_empty());
        assert_eq!(markup, render_fallback(text, theme.palette()));
    }
}

#[test]
fn test_whole_chain_failing_returns_escaped_text() {
    let renderer = Renderer::with_strategies(Theme::GitHub, vec![Box::new(MissingConverter)]);
    assert_eq!(renderer.render("x < y"), "x &lt; y");
}

#[test]
fn test_theme_switch_applies_to_next_render() {
    let mut renderer = Renderer::new(Theme::Default);
    let before = renderer.render("# Title");
    renderer.set_theme(Theme::GitHub);
    let after = renderer.render("# Title");

    assert_ne!(before, after);
    assert!(plain_text(&before).starts_with("Title\n"));
    assert!(after.contains(&Theme::GitHub.palette().heading(1).wrap("Title")));
}
