//! Row overlay rule: opacity, gradient or fill, and blend mode.

use crate::block::{AttrValue, Attributes};
use crate::css::{Declaration, Rule};

use super::tables::{push_declarations, OVERLAY_FILL};

/// Keys that cause the overlay rule to be emitted.
pub const OVERLAY_GOVERNING: &[&str] = &["overlay", "overlayBgImg", "overlaySecond"];

const DEFAULT_GRAD_TYPE: &str = "linear";
const DEFAULT_RADIAL_POSITION: &str = "center center";
const DEFAULT_GRAD_ANGLE: &str = "180";
const DEFAULT_FIRST_COLOR: &str = "transparent";
const DEFAULT_FIRST_LOC: &str = "0";
const DEFAULT_SECOND_COLOR: &str = "#00B5E2";
const DEFAULT_SECOND_LOC: &str = "100";

/// Format a 0-100 opacity attribute as a CSS opacity.
///
/// The stored value is spliced after `0.` or `0.0`; no rescaling happens, so
/// `50` becomes `0.50` and `5` becomes `0.05`.
pub fn format_opacity(value: &AttrValue) -> String {
    let n = value.as_f64();
    if n < 10.0 {
        format!("0.0{}", value)
    } else if n >= 100.0 {
        "1".to_string()
    } else {
        format!("0.{}", value)
    }
}

fn text_or(attrs: &Attributes, key: &str, fallback: &str) -> String {
    attrs
        .get(key)
        .map(|v| v.to_string())
        .unwrap_or_else(|| fallback.to_string())
}

/// `{type}-gradient({term}, {c1} {l1}%, {c2} {l2}%)`
pub fn gradient(attrs: &Attributes) -> String {
    let kind = text_or(attrs, "overlayGradType", DEFAULT_GRAD_TYPE);
    let term = if kind == "radial" {
        format!(
            "at {}",
            text_or(attrs, "overlayBgImgPosition", DEFAULT_RADIAL_POSITION)
        )
    } else {
        format!("{}deg", text_or(attrs, "overlayGradAngle", DEFAULT_GRAD_ANGLE))
    };
    format!(
        "{}-gradient({}, {} {}%, {} {}%)",
        kind,
        term,
        text_or(attrs, "overlay", DEFAULT_FIRST_COLOR),
        text_or(attrs, "overlayGradLoc", DEFAULT_FIRST_LOC),
        text_or(attrs, "overlaySecond", DEFAULT_SECOND_COLOR),
        text_or(attrs, "overlayGradLocSecond", DEFAULT_SECOND_LOC),
    )
}

fn is_gradient_tab(attrs: &Attributes) -> bool {
    matches!(attrs.get("currentOverlayTab"), Some(AttrValue::Text(tab)) if tab == "grad")
}

pub fn overlay_rule(selector: &str, attrs: &Attributes) -> Option<Rule> {
    if !attrs.any_of(OVERLAY_GOVERNING) {
        return None;
    }
    let mut rule = Rule::new(selector);
    if let Some(opacity) = attrs.get("overlayOpacity") {
        rule.push(Declaration::new("opacity", format_opacity(opacity)));
    }
    if is_gradient_tab(attrs) {
        rule.push(Declaration::spaced("background-image", gradient(attrs)));
    } else {
        push_declarations(&mut rule, OVERLAY_FILL, attrs);
    }
    if let Some(mode) = attrs.get("overlayBlendMode") {
        rule.push(Declaration::new("mix-blend-mode", mode.to_string()));
    }
    Some(rule)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs<const N: usize>(pairs: [(&str, AttrValue); N]) -> Attributes {
        pairs.into_iter().collect()
    }

    #[test]
    fn opacity_formatting() {
        assert_eq!(format_opacity(&AttrValue::from(5)), "0.05");
        assert_eq!(format_opacity(&AttrValue::from(0)), "0.00");
        assert_eq!(format_opacity(&AttrValue::from(50)), "0.50");
        assert_eq!(format_opacity(&AttrValue::from(99)), "0.99");
        assert_eq!(format_opacity(&AttrValue::from(100)), "1");
        assert_eq!(format_opacity(&AttrValue::from(130)), "1");
    }

    #[test]
    fn radial_gradient_uses_position_term() {
        let a = attrs([
            ("currentOverlayTab", "grad".into()),
            ("overlayGradType", "radial".into()),
            ("overlayBgImgPosition", "top left".into()),
            ("overlay", "#fff".into()),
            ("overlaySecond", "#000".into()),
        ]);
        assert_eq!(gradient(&a), "radial-gradient(at top left, #fff 0%, #000 100%)");
    }

    #[test]
    fn linear_gradient_defaults() {
        let a = attrs([("overlaySecond", "#123".into())]);
        assert_eq!(gradient(&a), "linear-gradient(180deg, transparent 0%, #123 100%)");

        let a = attrs([
            ("overlayGradAngle", 45.into()),
            ("overlayGradLoc", 10.into()),
            ("overlayGradLocSecond", 80.into()),
        ]);
        assert_eq!(
            gradient(&a),
            "linear-gradient(45deg, transparent 10%, #00B5E2 80%)"
        );
    }

    #[test]
    fn overlay_rule_needs_a_governing_key() {
        let a = attrs([("overlayOpacity", 40.into()), ("overlayBlendMode", "multiply".into())]);
        assert!(overlay_rule(".o", &a).is_none());
    }

    #[test]
    fn gradient_branch_skips_fill_declarations() {
        let a = attrs([
            ("currentOverlayTab", "grad".into()),
            ("overlay", "#fff".into()),
            ("overlayBgImg", "x.png".into()),
            ("overlayOpacity", 30.into()),
            ("overlayBlendMode", "screen".into()),
        ]);
        let rule = overlay_rule(".o", &a).unwrap();
        assert_eq!(
            rule.to_string(),
            ".o {opacity:0.30;background-image: linear-gradient(180deg, #fff 0%, #00B5E2 100%);mix-blend-mode:screen;}"
        );
    }

    #[test]
    fn fill_branch_emits_color_and_image() {
        let a = attrs([
            ("currentOverlayTab", "normal".into()),
            ("overlay", "#222".into()),
            ("overlayBgImg", "o.png".into()),
            ("overlayBgImgSize", "contain".into()),
        ]);
        let rule = overlay_rule(".o", &a).unwrap();
        assert_eq!(
            rule.to_string(),
            ".o {background-color:#222;background-image:url(o.png);background-size:contain;background-position:center center;background-attachment:scroll;background-repeat:no-repeat;}"
        );
    }

    #[test]
    fn second_color_alone_opens_an_empty_fill_rule() {
        let a = attrs([("overlaySecond", "#000".into())]);
        assert_eq!(overlay_rule(".o", &a).unwrap().to_string(), ".o {}");
    }
}
