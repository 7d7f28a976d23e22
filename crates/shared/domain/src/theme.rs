//! Design tokens for the storefront, shipped to web clients as JSON.
//!
//! String-valued tokens (colors, shadows, font stacks) are CSS literals.
//! Numeric scales keep their unit out of the stored value so ordering stays
//! checkable; the unit lives in the scale's accessor.

use serde::Serialize;

/// One labelled step of a numeric scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Step {
    pub label: &'static str,
    pub value: f32,
}

const fn step(label: &'static str, value: f32) -> Step {
    Step { label, value }
}

fn lookup(steps: &[Step], label: &str) -> Option<f32> {
    steps.iter().find(|s| s.label == label).map(|s| s.value)
}

/// The complete token set.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub colors: Colors,
    pub fonts: Fonts,
    /// Type scale, in rem.
    pub font_sizes: &'static [Step],
    /// Weight scale (CSS `font-weight` values).
    pub font_weights: &'static [Step],
    /// Spacing scale, in rem.
    pub spacing: &'static [Step],
    /// Corner radii, in px (`full` is the 9999px pill radius).
    pub radii: &'static [Step],
    pub shadows: Shadows,
    /// Responsive breakpoints, in px.
    pub breakpoints: &'static [Step],
    pub transitions: &'static [Transition],
    /// Stacking layers, lowest first.
    pub z_index: &'static [Step],
}

/// Color tokens. Brand colors follow the bakery-warmth palette.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Colors {
    pub primary: &'static str,
    pub primary_light: &'static str,
    pub primary_dark: &'static str,

    pub secondary: &'static str,
    pub secondary_light: &'static str,
    pub secondary_dark: &'static str,

    pub background: &'static str,
    pub background_light: &'static str,
    pub background_card: &'static str,

    pub text: &'static str,
    pub text_secondary: &'static str,
    pub text_muted: &'static str,

    pub black: &'static str,
    pub white: &'static str,
    /// Grayscale ramp, keyed 50..900.
    pub gray: &'static [(u16, &'static str)],

    pub success: &'static str,
    pub warning: &'static str,
    pub error: &'static str,
    pub info: &'static str,

    pub border: &'static str,
    pub divider: &'static str,
    pub overlay: &'static str,
    pub shadow: &'static str,
}

/// Font family stacks.
#[derive(Debug, Clone, Serialize)]
pub struct Fonts {
    pub primary: &'static str,
    pub heading: &'static str,
    pub mono: &'static str,
}

/// Box shadow presets (CSS `box-shadow` literals).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Shadows {
    pub sm: &'static str,
    pub base: &'static str,
    pub md: &'static str,
    pub lg: &'static str,
    pub xl: &'static str,
    #[serde(rename = "2xl")]
    pub xxl: &'static str,
    pub inner: &'static str,
    /// Hard offset shadow used on product cards.
    pub product: &'static str,
}

/// One labelled transition preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Transition {
    pub label: &'static str,
    pub duration_ms: u32,
    pub easing: &'static str,
}

impl Transition {
    /// Renders the CSS `transition` shorthand value.
    #[must_use]
    pub fn css(&self) -> String {
        format!("{}ms {}", self.duration_ms, self.easing)
    }
}

const FONT_SIZES: &[Step] = &[
    step("xs", 0.75),
    step("sm", 0.875),
    step("base", 1.0),
    step("lg", 1.125),
    step("xl", 1.25),
    step("2xl", 1.5),
    step("3xl", 1.875),
    step("4xl", 2.25),
    step("5xl", 3.0),
    step("6xl", 3.75),
];

const FONT_WEIGHTS: &[Step] = &[
    step("light", 300.0),
    step("regular", 400.0),
    step("medium", 500.0),
    step("semibold", 600.0),
    step("bold", 700.0),
    step("extrabold", 800.0),
];

const SPACING: &[Step] = &[
    step("xs", 0.25),
    step("sm", 0.5),
    step("md", 1.0),
    step("lg", 1.5),
    step("xl", 2.0),
    step("2xl", 3.0),
    step("3xl", 4.0),
    step("4xl", 6.0),
    step("5xl", 8.0),
];

const RADII: &[Step] = &[
    step("none", 0.0),
    step("sm", 4.0),
    step("base", 8.0),
    step("md", 12.0),
    step("lg", 16.0),
    step("xl", 24.0),
    step("2xl", 32.0),
    step("full", 9999.0),
];

const BREAKPOINTS: &[Step] = &[
    step("xs", 320.0),
    step("sm", 640.0),
    step("md", 768.0),
    step("lg", 1024.0),
    step("xl", 1280.0),
    step("2xl", 1536.0),
];

const Z_INDEX: &[Step] = &[
    step("dropdown", 1000.0),
    step("sticky", 1020.0),
    step("fixed", 1030.0),
    step("modal_backdrop", 1040.0),
    step("modal", 1050.0),
    step("popover", 1060.0),
    step("tooltip", 1070.0),
];

const TRANSITIONS: &[Transition] = &[
    Transition { label: "fast", duration_ms: 150, easing: "ease-in-out" },
    Transition { label: "base", duration_ms: 200, easing: "ease-in-out" },
    Transition { label: "slow", duration_ms: 300, easing: "ease-in-out" },
    Transition { label: "slower", duration_ms: 500, easing: "ease-in-out" },
];

impl Default for Theme {
    fn default() -> Self {
        Self {
            colors: Colors {
                primary: "#FDC500",
                primary_light: "#FFD633",
                primary_dark: "#E5B200",

                secondary: "#E31837",
                secondary_light: "#FF3D5C",
                secondary_dark: "#B31229",

                background: "#150F0F",
                background_light: "#1F1A1A",
                background_card: "#2A2424",

                text: "#FFFFFF",
                text_secondary: "#B8B8B8",
                text_muted: "#8A8A8A",

                black: "#000000",
                white: "#FFFFFF",
                gray: &[
                    (50, "#F9F9F9"),
                    (100, "#F0F0F0"),
                    (200, "#E0E0E0"),
                    (300, "#C4C4C4"),
                    (400, "#A0A0A0"),
                    (500, "#7A7A7A"),
                    (600, "#5A5A5A"),
                    (700, "#3A3A3A"),
                    (800, "#2A2A2A"),
                    (900, "#1A1A1A"),
                ],

                success: "#10B981",
                warning: "#F59E0B",
                error: "#EF4444",
                info: "#3B82F6",

                border: "#3A3A3A",
                divider: "#2A2A2A",
                overlay: "rgba(0, 0, 0, 0.7)",
                shadow: "rgba(0, 0, 0, 0.5)",
            },
            fonts: Fonts {
                primary: "'Inter', -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif",
                heading: "'Poppins', 'Inter', sans-serif",
                mono: "'Fira Code', 'Courier New', monospace",
            },
            font_sizes: FONT_SIZES,
            font_weights: FONT_WEIGHTS,
            spacing: SPACING,
            radii: RADII,
            shadows: Shadows {
                sm: "0 1px 2px 0 rgba(0, 0, 0, 0.05)",
                base: "0 1px 3px 0 rgba(0, 0, 0, 0.1), 0 1px 2px 0 rgba(0, 0, 0, 0.06)",
                md: "0 4px 6px -1px rgba(0, 0, 0, 0.1), 0 2px 4px -1px rgba(0, 0, 0, 0.06)",
                lg: "0 10px 15px -3px rgba(0, 0, 0, 0.1), 0 4px 6px -2px rgba(0, 0, 0, 0.05)",
                xl: "0 20px 25px -5px rgba(0, 0, 0, 0.1), 0 10px 10px -5px rgba(0, 0, 0, 0.04)",
                xxl: "0 25px 50px -12px rgba(0, 0, 0, 0.25)",
                inner: "inset 0 2px 4px 0 rgba(0, 0, 0, 0.06)",
                product: "8px 8px #FDC500",
            },
            breakpoints: BREAKPOINTS,
            transitions: TRANSITIONS,
            z_index: Z_INDEX,
        }
    }
}

impl Theme {
    /// Looks up a named color token, including `gray.<key>` ramp entries.
    #[must_use]
    pub fn color(&self, name: &str) -> Option<&'static str> {
        if let Some(key) = name.strip_prefix("gray.") {
            let key: u16 = key.parse().ok()?;
            return self.colors.gray.iter().find(|(k, _)| *k == key).map(|(_, v)| *v);
        }

        let c = &self.colors;
        let value = match name {
            "primary" => c.primary,
            "primary_light" => c.primary_light,
            "primary_dark" => c.primary_dark,
            "secondary" => c.secondary,
            "secondary_light" => c.secondary_light,
            "secondary_dark" => c.secondary_dark,
            "background" => c.background,
            "background_light" => c.background_light,
            "background_card" => c.background_card,
            "text" => c.text,
            "text_secondary" => c.text_secondary,
            "text_muted" => c.text_muted,
            "black" => c.black,
            "white" => c.white,
            "success" => c.success,
            "warning" => c.warning,
            "error" => c.error,
            "info" => c.info,
            "border" => c.border,
            "divider" => c.divider,
            "overlay" => c.overlay,
            "shadow" => c.shadow,
            _ => return None,
        };
        Some(value)
    }

    /// Font size for a scale label, in rem.
    #[must_use]
    pub fn font_size(&self, label: &str) -> Option<f32> {
        lookup(self.font_sizes, label)
    }

    /// Font weight for a scale label.
    #[must_use]
    pub fn font_weight(&self, label: &str) -> Option<f32> {
        lookup(self.font_weights, label)
    }

    /// Spacing for a scale label, in rem.
    #[must_use]
    pub fn spacing(&self, label: &str) -> Option<f32> {
        lookup(self.spacing, label)
    }

    /// Corner radius for a scale label, in px.
    #[must_use]
    pub fn radius(&self, label: &str) -> Option<f32> {
        lookup(self.radii, label)
    }

    /// Breakpoint for a scale label, in px.
    #[must_use]
    pub fn breakpoint(&self, label: &str) -> Option<f32> {
        lookup(self.breakpoints, label)
    }

    /// Stacking layer value for a label.
    #[must_use]
    pub fn z_index(&self, label: &str) -> Option<f32> {
        lookup(self.z_index, label)
    }

    /// Transition preset for a label.
    #[must_use]
    pub fn transition(&self, label: &str) -> Option<&'static Transition> {
        self.transitions.iter().find(|t| t.label == label)
    }
}
