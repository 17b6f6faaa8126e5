//! Design-token rules.
//!
//! Five families of line-level rules: spacing, color, typography, legacy
//! design-system references, and shadow/radius. Every rule tests one source
//! line as text. Matches inside comments or strings count the same as matches
//! in markup.

use std::sync::LazyLock;

use regex::Regex;

use crate::report::ViolationKind;

/// Spacing values on the 8px grid (Tailwind units of 4px, even values only).
pub const ALLOWED_SPACING_VALUES: &[&str] = &[
    "0", "2", "4", "6", "8", "10", "12", "14", "16", "20", "24", "28", "32", "36", "40", "44",
    "48", "52", "56", "60", "64", "72", "80", "96",
];

/// Spacing utility prefixes (padding, margin, gap, space, inset, offsets).
const SPACING_UTILITIES: &str =
    r"(?:p[xytrbl]?|m[xytrbl]?|gap(?:-[xy])?|space-[xy]|inset(?:-[xy])?|top|right|bottom|left)";

const PALETTE: &str = r"(?:slate|gray|zinc|neutral|stone|red|orange|amber|yellow|lime|green|emerald|teal|cyan|sky|blue|indigo|violet|purple|fuchsia|pink|rose)";

const COLOR_UTILITIES: &str = r"(?:text|bg|border(?:-[xytrbl])?|ring|ring-offset|outline|divide|fill|stroke|from|via|to|decoration|placeholder|caret|accent|shadow)";

fn compile(pattern: &str) -> Regex {
    match Regex::new(pattern) {
        Ok(regex) => regex,
        Err(err) => panic!("Invalid design rule regex: {err}"),
    }
}

/// How a rule decides that a line violates it.
#[derive(Debug)]
enum Matcher {
    /// Any match of the pattern is a violation.
    Forbidden(Regex),
    /// Class tokens matching `token` are violations unless their `value`
    /// capture is in the allow-list.
    AllowList {
        token: Regex,
        allowed: &'static [&'static str],
    },
}

/// A single policy rule.
#[derive(Debug)]
pub struct Rule {
    /// Stable identifier reported with each violation.
    pub id: &'static str,
    pub kind: ViolationKind,
    /// Advisory fix text.
    pub suggestion: &'static str,
    matcher: Matcher,
}

impl Rule {
    fn forbidden(
        id: &'static str,
        kind: ViolationKind,
        pattern: &str,
        suggestion: &'static str,
    ) -> Self {
        Self {
            id,
            kind,
            suggestion,
            matcher: Matcher::Forbidden(compile(pattern)),
        }
    }

    /// Whether `line` violates this rule.
    #[must_use]
    pub fn is_violated_by(&self, line: &str) -> bool {
        match &self.matcher {
            Matcher::Forbidden(pattern) => pattern.is_match(line),
            Matcher::AllowList { token, allowed } => class_tokens(line).any(|candidate| {
                token
                    .captures(candidate)
                    .and_then(|caps| caps.name("value"))
                    .is_some_and(|value| !allowed.contains(&value.as_str()))
            }),
        }
    }
}

/// Split a line into utility-class-shaped tokens.
///
/// Variant prefixes (`md:`, `hover:`) and the important marker (`!`) are
/// stripped so `md:!py-5` yields `py-5`.
fn class_tokens(line: &str) -> impl Iterator<Item = &str> {
    line.split(|c: char| {
        c.is_whitespace() || matches!(c, '"' | '\'' | '`' | '{' | '}' | '(' | ')' | ',' | '=' | ';')
    })
    .filter(|token| !token.is_empty())
    .map(|token| {
        let base = token.rsplit(':').next().unwrap_or(token);
        base.trim_start_matches('!')
    })
}

/// All rules in reporting order.
pub static RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    vec![
        // Spacing
        Rule {
            id: "spacing-off-grid",
            kind: ViolationKind::Spacing,
            suggestion: "Use a spacing value on the 8px grid (0, 2, 4, 6, 8, 12, 16, 20, 24, ...)",
            matcher: Matcher::AllowList {
                token: compile(&format!(
                    r"^-?{SPACING_UTILITIES}-(?P<value>[0-9]+(?:\.[0-9]+)?)$"
                )),
                allowed: ALLOWED_SPACING_VALUES,
            },
        },
        Rule::forbidden(
            "spacing-arbitrary",
            ViolationKind::Spacing,
            &format!(r"(?:^|[^\w-])-?{SPACING_UTILITIES}-\[[^\]]+\]"),
            "Replace the arbitrary spacing value with a grid step",
        ),
        Rule::forbidden(
            "spacing-inline-style",
            ViolationKind::Spacing,
            r#"\b(?:padding|margin|gap)(?:Top|Right|Bottom|Left|Inline|Block|-top|-right|-bottom|-left)?\s*:\s*["'`]?[0-9]+(?:\.[0-9]+)?px"#,
            "Use spacing utility classes instead of inline pixel values",
        ),
        // Color
        Rule::forbidden(
            "color-palette",
            ViolationKind::Color,
            &format!(r"\b{COLOR_UTILITIES}-{PALETTE}-(?:50|[1-9]00|950)\b"),
            "Use semantic color tokens (text-foreground, bg-background, text-muted-foreground, border-border, bg-primary)",
        ),
        Rule::forbidden(
            "color-absolute",
            ViolationKind::Color,
            r"\b(?:text|bg|border|ring|fill|stroke|from|via|to)-(?:white|black)\b",
            "Use bg-background / text-foreground instead of absolute white or black",
        ),
        Rule::forbidden(
            "color-arbitrary",
            ViolationKind::Color,
            &format!(r"\b{COLOR_UTILITIES}-\[(?:#|rgb|hsl|oklch|color:)"),
            "Replace the arbitrary color with a palette CSS variable token",
        ),
        Rule::forbidden(
            "color-inline-style",
            ViolationKind::Color,
            r#"\b(?:color|background|backgroundColor|borderColor|fill|stroke)\s*:\s*["'`](?:#[0-9a-fA-F]{3,8}|rgba?\(|hsla?\()"#,
            "Reference hsl(var(--token)) colors through classes instead of inline literals",
        ),
        // Typography
        Rule::forbidden(
            "typography-arbitrary",
            ViolationKind::Typography,
            r"\b(?:text|leading|tracking)-\[[0-9.]+(?:px|rem|em)\]",
            "Use the type scale (text-sm, text-base, text-lg, text-xl, ... text-6xl)",
        ),
        Rule::forbidden(
            "typography-off-scale",
            ViolationKind::Typography,
            r"\b(?:text-[7-9]xl|font-(?:thin|extralight|black))\b",
            "Stay within text-xs..text-6xl and font-light..font-extrabold",
        ),
        Rule::forbidden(
            "typography-inline-style",
            ViolationKind::Typography,
            r"\b(?:fontSize|font-size|lineHeight|line-height|fontFamily|font-family|letterSpacing|letter-spacing)\s*:",
            "Use typography utility classes instead of inline font styles",
        ),
        // Legacy design system
        Rule::forbidden(
            "system-legacy-import",
            ViolationKind::System,
            r#"\bfrom\s+["'][^"']*(?:legacy|old-design-system|design-system-v1|styles/old)[^"']*["']"#,
            "Import components from @/components/ui and tokens from the current design system",
        ),
        Rule::forbidden(
            "system-legacy-token",
            ViolationKind::System,
            r"(?:\blegacy-[a-z0-9]|--(?:legacy|old)-[a-z0-9])",
            "Replace legacy classes and CSS variables with current design tokens",
        ),
        // Shadow and radius
        Rule::forbidden(
            "shadow-arbitrary",
            ViolationKind::Shadow,
            r"\bshadow-\[",
            "Use the shadow tokens (shadow-sm, shadow, shadow-md, shadow-lg)",
        ),
        Rule::forbidden(
            "shadow-off-scale",
            ViolationKind::Shadow,
            r"\bshadow-(?:xl|2xl|inner)\b",
            "Use the shadow tokens (shadow-sm, shadow, shadow-md, shadow-lg)",
        ),
        Rule::forbidden(
            "shadow-inline-style",
            ViolationKind::Shadow,
            r"\b(?:boxShadow|box-shadow)\s*:",
            "Use shadow utility classes instead of inline box shadows",
        ),
        Rule::forbidden(
            "radius-arbitrary",
            ViolationKind::Shadow,
            r"\brounded(?:-[a-z]{1,2})?-\[",
            "Use the radius tokens (rounded-sm, rounded-md, rounded-lg, rounded-full)",
        ),
    ]
});
