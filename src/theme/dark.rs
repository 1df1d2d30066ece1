//! Dark Theme Palettes
//!
//! Palettes for themes designed against a dark preview background.
//! Colours follow GitHub's dark mode primer tokens.

use super::Palette;
use crate::markup::SpanAttrs;

pub const GITHUB_DARK: Palette = Palette {
    heading_sizes: [32000, 26000, 18000, 16000, 14000, 12000],
    heading_weights: ["600", "600"],
    heading_colors: [Some("#f0f6fc"), Some("#f0f6fc")],
    heading_rules: ["#30363d", "#d8d8d8"],
    strong: SpanAttrs::new().weight("600").fg("#f0f6fc"),
    emphasis: SpanAttrs::new().italic().fg("#8b949e"),
    inline_code: SpanAttrs::new()
        .family("SFMono-Regular")
        .small()
        .fg("#ff7b72")
        .bg("#6e768166"),
    inline_code_padded: true,
    code_block: SpanAttrs::new()
        .family("SFMono-Regular,Consolas")
        .fg("#e6edf3")
        .bg("#161b22"),
    link: SpanAttrs::new().fg("#58a6ff").underline(),
    quote: SpanAttrs::new().italic().fg("#8b949e").bg("#161b22"),
    quote_prefix: "▎ ",
    quote_suffix: "",
    rule_color: Some("#30363d"),
    rule_glyph: '─',
    list_glyph_color: Some("#f0f6fc"),
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dark_palette_uses_light_text() {
        assert_eq!(GITHUB_DARK.heading(1).foreground, Some("#f0f6fc"));
        assert_eq!(GITHUB_DARK.code_block.background, Some("#161b22"));
    }
}
