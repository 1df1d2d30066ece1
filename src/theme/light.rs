//! Light Theme Palettes
//!
//! Palettes for themes designed against a light preview background. Every
//! table is a `const`, so a theme lookup never allocates.

use super::Palette;
use crate::markup::SpanAttrs;

/// Quote marker shared by the GitHub-family themes.
const BAR_PREFIX: &str = "▎ ";

// ─────────────────────────────────────────────────────────────────────────────
// Default
// ─────────────────────────────────────────────────────────────────────────────

/// Plain styling with no heading colours and quoted blockquotes.
pub const DEFAULT: Palette = Palette {
    heading_sizes: [24000, 20000, 18000, 16000, 14000, 12000],
    heading_weights: ["bold", "bold"],
    heading_colors: [None, None],
    heading_rules: ["#c9c9c9", "#d8d8d8"],
    strong: SpanAttrs::new().weight("bold"),
    emphasis: SpanAttrs::new().italic(),
    inline_code: SpanAttrs::new().family("monospace").bg("#e0e0e0"),
    inline_code_padded: false,
    code_block: SpanAttrs::new().family("monospace").bg("#e3e3e3"),
    link: SpanAttrs::new().fg("blue").underline(),
    quote: SpanAttrs::new().italic().fg("#666666"),
    quote_prefix: "\" ",
    quote_suffix: " \"",
    rule_color: None,
    rule_glyph: '─',
    list_glyph_color: None,
};

// ─────────────────────────────────────────────────────────────────────────────
// GitHub
// ─────────────────────────────────────────────────────────────────────────────

pub const GITHUB: Palette = Palette {
    heading_sizes: [28000, 24000, 20000, 18000, 16000, 14000],
    heading_weights: ["bold", "bold"],
    heading_colors: [Some("#1f2328"), Some("#1f2328")],
    heading_rules: ["#d0d7de", "#d8d8d8"],
    strong: SpanAttrs::new().weight("bold").fg("#1f2328"),
    emphasis: SpanAttrs::new().italic().fg("#656d76"),
    inline_code: SpanAttrs::new()
        .family("SFMono-Regular")
        .small()
        .fg("#d1242f")
        .bg("#f6f8fa"),
    inline_code_padded: true,
    code_block: SpanAttrs::new()
        .family("SFMono-Regular,Consolas")
        .fg("#24292f")
        .bg("#f6f8fa"),
    link: SpanAttrs::new().fg("#0969da").underline(),
    quote: SpanAttrs::new().italic().fg("#656d76").bg("#f6f8fa"),
    quote_prefix: BAR_PREFIX,
    quote_suffix: "",
    rule_color: Some("#d1d9e0"),
    rule_glyph: '─',
    list_glyph_color: Some("#1f2328"),
};

pub const GITHUB_LIGHT: Palette = Palette {
    heading_sizes: [32000, 26000, 18000, 16000, 14000, 12000],
    heading_weights: ["600", "600"],
    heading_colors: [Some("#1f2328"), Some("#1f2328")],
    heading_rules: ["#c9c9c9", "#d8d8d8"],
    strong: SpanAttrs::new().weight("bold").fg("#1f2328"),
    emphasis: SpanAttrs::new().italic().fg("#656d76"),
    inline_code: SpanAttrs::new()
        .family("SFMono-Regular")
        .small()
        .fg("#d1242f")
        .bg("#afb8c133"),
    inline_code_padded: true,
    code_block: SpanAttrs::new()
        .family("SFMono-Regular,Consolas")
        .fg("#24292f")
        .bg("#f6f8fa"),
    link: SpanAttrs::new().fg("#0969da").underline(),
    quote: SpanAttrs::new().italic().fg("#656d76").bg("#f6f8fa"),
    quote_prefix: BAR_PREFIX,
    quote_suffix: "",
    rule_color: Some("#d1d9e0"),
    rule_glyph: '─',
    list_glyph_color: Some("#1f2328"),
};

// ─────────────────────────────────────────────────────────────────────────────
// GitLab
// ─────────────────────────────────────────────────────────────────────────────

pub const GITLAB: Palette = Palette {
    heading_sizes: [28000, 24000, 19000, 17000, 15000, 13000],
    heading_weights: ["bold", "bold"],
    heading_colors: [Some("#303030"), Some("#303030")],
    heading_rules: ["#c9c9c9", "#d8d8d8"],
    strong: SpanAttrs::new().weight("bold").fg("#303030"),
    emphasis: SpanAttrs::new().italic().fg("#525252"),
    inline_code: SpanAttrs::new()
        .family("JetBrains Mono")
        .small()
        .fg("#c73e1d")
        .bg("#fdf2f2"),
    inline_code_padded: true,
    code_block: SpanAttrs::new()
        .family("JetBrains Mono,Consolas")
        .fg("#303030")
        .bg("#fbfafd"),
    link: SpanAttrs::new().weight("medium").fg("#1f75cb").underline(),
    quote: SpanAttrs::new().italic().fg("#6b4fbb").bg("#fbfafd"),
    quote_prefix: BAR_PREFIX,
    quote_suffix: "",
    rule_color: Some("#6b4fbb"),
    rule_glyph: '─',
    list_glyph_color: Some("#303030"),
};

// ─────────────────────────────────────────────────────────────────────────────
// Document Themes
// ─────────────────────────────────────────────────────────────────────────────

pub const SPLENDOR: Palette = Palette {
    heading_sizes: [36000, 28000, 18000, 16000, 14000, 12000],
    heading_weights: ["300", "400"],
    heading_colors: [Some("#2c3e50"), Some("#34495e")],
    heading_rules: ["#c9c9c9", "#d8d8d8"],
    strong: SpanAttrs::new().weight("600").fg("#2c3e50"),
    emphasis: SpanAttrs::new().italic().fg("#7f8c8d"),
    inline_code: SpanAttrs::new()
        .family("Consolas")
        .small()
        .fg("#e74c3c")
        .bg("#ecf0f1"),
    inline_code_padded: true,
    code_block: SpanAttrs::new()
        .family("Consolas,Monaco")
        .fg("#333")
        .bg("#fafafa"),
    link: SpanAttrs::new().fg("#3498db").underline(),
    quote: SpanAttrs::new().italic().fg("#7f8c8d").bg("#ecf0f1"),
    quote_prefix: "\" ",
    quote_suffix: "",
    rule_color: Some("#bdc3c7"),
    rule_glyph: '╌',
    list_glyph_color: Some("#2c3e50"),
};

pub const MODEST: Palette = Palette {
    heading_sizes: [28000, 24000, 18000, 16000, 14000, 12000],
    heading_weights: ["bold", "bold"],
    heading_colors: [Some("#333"), Some("#444")],
    heading_rules: ["#c9c9c9", "#d8d8d8"],
    strong: SpanAttrs::new().weight("bold").fg("#333"),
    emphasis: SpanAttrs::new().italic().fg("#666"),
    inline_code: SpanAttrs::new()
        .family("Menlo")
        .small()
        .fg("#d14")
        .bg("#f5f5f5"),
    inline_code_padded: true,
    code_block: SpanAttrs::new()
        .family("Menlo,Monaco")
        .fg("#333")
        .bg("#f5f5f5"),
    link: SpanAttrs::new().fg("#337ab7").underline(),
    quote: SpanAttrs::new().italic().fg("#777").bg("#f9f9f9"),
    quote_prefix: "│ ",
    quote_suffix: "",
    rule_color: None,
    rule_glyph: '─',
    list_glyph_color: Some("#333"),
};

pub const RETRO: Palette = Palette {
    heading_sizes: [30000, 26000, 18000, 16000, 14000, 12000],
    heading_weights: ["bold", "bold"],
    heading_colors: [Some("#8b4513"), Some("#a0522d")],
    heading_rules: ["#c9c9c9", "#d8d8d8"],
    strong: SpanAttrs::new().weight("bold").fg("#8b4513"),
    emphasis: SpanAttrs::new().italic().fg("#8b7355"),
    inline_code: SpanAttrs::new()
        .family("Courier New")
        .small()
        .fg("#b58900")
        .bg("#eee8d5"),
    inline_code_padded: true,
    code_block: SpanAttrs::new()
        .family("Courier New,monospace")
        .fg("#657b83")
        .bg("#eee8d5"),
    link: SpanAttrs::new().fg("#268bd2").underline(),
    quote: SpanAttrs::new().italic().fg("#8b7355").bg("#f5f5dc"),
    quote_prefix: "▌ ",
    quote_suffix: "",
    rule_color: Some("#cd853f"),
    rule_glyph: '╌',
    list_glyph_color: Some("#8b4513"),
};

pub const AIR: Palette = Palette {
    heading_sizes: [32000, 26000, 18000, 16000, 14000, 12000],
    heading_weights: ["300", "400"],
    heading_colors: [Some("#2aa198"), Some("#268bd2")],
    heading_rules: ["#c9c9c9", "#d8d8d8"],
    strong: SpanAttrs::new().weight("600").fg("#2aa198"),
    emphasis: SpanAttrs::new().italic().fg("#586e75"),
    inline_code: SpanAttrs::new()
        .family("Source Code Pro")
        .small()
        .fg("#cb4b16")
        .bg("#eee8d5"),
    inline_code_padded: true,
    code_block: SpanAttrs::new()
        .family("Source Code Pro,monospace")
        .fg("#586e75")
        .bg("#fafafa"),
    link: SpanAttrs::new().fg("#268bd2").underline(),
    quote: SpanAttrs::new().italic().fg("#93a1a1").bg("#fdf6e3"),
    quote_prefix: "  ",
    quote_suffix: "",
    rule_color: None,
    rule_glyph: '─',
    list_glyph_color: Some("#268bd2"),
};
