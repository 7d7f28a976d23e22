use lbites_domain::theme::{Step, Theme};

fn assert_strictly_increasing(steps: &[Step], what: &str) {
    assert!(!steps.is_empty(), "{what} scale is empty");
    for pair in steps.windows(2) {
        assert!(
            pair[0].value < pair[1].value,
            "{what} scale is not increasing: {} ({}) >= {} ({})",
            pair[0].label,
            pair[0].value,
            pair[1].label,
            pair[1].value
        );
    }
}

fn is_hex_color(value: &str) -> bool {
    value.len() == 7
        && value.starts_with('#')
        && value[1..].chars().all(|c| c.is_ascii_hexdigit())
}

#[test]
fn numeric_scales_are_monotonic() {
    let theme = Theme::default();
    assert_strictly_increasing(theme.font_sizes, "font size");
    assert_strictly_increasing(theme.font_weights, "font weight");
    assert_strictly_increasing(theme.spacing, "spacing");
    assert_strictly_increasing(theme.radii, "radius");
    assert_strictly_increasing(theme.breakpoints, "breakpoint");
    assert_strictly_increasing(theme.z_index, "z-index");
}

#[test]
fn gray_ramp_is_ordered_and_hex() {
    let theme = Theme::default();
    let gray = theme.colors.gray;
    assert!(!gray.is_empty());
    assert!(gray.windows(2).all(|w| w[0].0 < w[1].0), "gray ramp keys are not ascending");
    for (key, value) in gray {
        assert!(is_hex_color(value), "gray.{key} is not a hex literal: {value}");
    }
}

#[test]
fn named_colors_are_css_literals() {
    let theme = Theme::default();
    for name in [
        "primary",
        "primary_light",
        "primary_dark",
        "secondary",
        "secondary_light",
        "secondary_dark",
        "background",
        "background_light",
        "background_card",
        "text",
        "text_secondary",
        "text_muted",
        "black",
        "white",
        "success",
        "warning",
        "error",
        "info",
        "border",
        "divider",
        "overlay",
        "shadow",
    ] {
        let value = theme.color(name).unwrap_or_else(|| panic!("color {name} does not resolve"));
        assert!(
            is_hex_color(value) || value.starts_with("rgba("),
            "color {name} is not a CSS literal: {value}"
        );
    }
}

#[test]
fn every_scale_label_resolves() {
    let theme = Theme::default();

    for s in theme.font_sizes {
        assert_eq!(theme.font_size(s.label), Some(s.value));
    }
    for s in theme.spacing {
        assert_eq!(theme.spacing(s.label), Some(s.value));
    }
    for s in theme.radii {
        assert_eq!(theme.radius(s.label), Some(s.value));
    }
    for s in theme.breakpoints {
        assert_eq!(theme.breakpoint(s.label), Some(s.value));
    }
    for s in theme.z_index {
        assert_eq!(theme.z_index(s.label), Some(s.value));
    }
    for t in theme.transitions {
        assert_eq!(theme.transition(t.label).map(|t| t.duration_ms), Some(t.duration_ms));
    }
    assert_eq!(theme.color("gray.500"), Some("#7A7A7A"));
    assert_eq!(theme.color("gray.999"), None);
}

#[test]
fn transitions_render_css_shorthand() {
    let theme = Theme::default();
    let fast = theme.transition("fast").expect("fast transition");
    assert_eq!(fast.css(), "150ms ease-in-out");
}

#[test]
fn theme_serializes_for_clients() {
    let json = serde_json::to_value(Theme::default()).expect("theme to json");
    assert_eq!(json["colors"]["primary"], "#FDC500");
    assert_eq!(json["fontSizes"][0]["label"], "xs");
    assert!(json["zIndex"].is_array());
}
