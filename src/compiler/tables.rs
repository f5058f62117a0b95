//! Declarative attribute-to-CSS tables.
//!
//! Each rule is a list of [`DeclSpec`]s in emission order. A rule is emitted
//! when any of its keys is set; each set key contributes its declaration plus
//! any companions.

use crate::block::Attributes;
use crate::css::{Declaration, Rule};

/// How an attribute value becomes a CSS value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueFormat {
    /// `{value}px`
    Px,
    /// `{value}` as stored
    Raw,
    /// `url({value})`
    Url,
}

impl ValueFormat {
    pub fn apply(self, raw: &str) -> String {
        match self {
            ValueFormat::Px => format!("{}px", raw),
            ValueFormat::Raw => raw.to_string(),
            ValueFormat::Url => format!("url({})", raw),
        }
    }
}

/// Extra declaration emitted right after its parent declaration.
#[derive(Debug, Clone, Copy)]
pub enum Companion {
    /// Read `key`, falling back to `fallback` when unset
    Fallback {
        key: &'static str,
        property: &'static str,
        fallback: &'static str,
    },
    /// Always `property:value`
    Fixed {
        property: &'static str,
        value: &'static str,
    },
}

impl Companion {
    fn declaration(&self, attrs: &Attributes) -> Declaration {
        match *self {
            Companion::Fallback {
                key,
                property,
                fallback,
            } => {
                let value = attrs
                    .get(key)
                    .map(|v| v.to_string())
                    .unwrap_or_else(|| fallback.to_string());
                Declaration::new(property, value)
            }
            Companion::Fixed { property, value } => Declaration::new(property, value),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct DeclSpec {
    pub key: &'static str,
    pub property: &'static str,
    pub format: ValueFormat,
    pub companions: &'static [Companion],
}

const fn px(key: &'static str, property: &'static str) -> DeclSpec {
    DeclSpec {
        key,
        property,
        format: ValueFormat::Px,
        companions: &[],
    }
}

const fn raw(key: &'static str, property: &'static str) -> DeclSpec {
    DeclSpec {
        key,
        property,
        format: ValueFormat::Raw,
        companions: &[],
    }
}

/// True when any key in `specs` is set.
pub fn any_present(specs: &[DeclSpec], attrs: &Attributes) -> bool {
    specs.iter().any(|s| attrs.contains(s.key))
}

/// Append the declarations of every set key, in table order.
pub fn push_declarations(rule: &mut Rule, specs: &[DeclSpec], attrs: &Attributes) {
    for spec in specs {
        if let Some(value) = attrs.get(spec.key) {
            rule.push(Declaration::new(
                spec.property,
                spec.format.apply(&value.to_string()),
            ));
            for companion in spec.companions {
                rule.push(companion.declaration(attrs));
            }
        }
    }
}

/// Build the rule for `selector`, or `None` when no governing key is set.
pub fn emit_rule(selector: &str, specs: &[DeclSpec], attrs: &Attributes) -> Option<Rule> {
    if !any_present(specs, attrs) {
        return None;
    }
    let mut rule = Rule::new(selector);
    push_declarations(&mut rule, specs, attrs);
    Some(rule)
}

pub const BG_IMAGE_COMPANIONS: &[Companion] = &[
    Companion::Fallback {
        key: "bgImgSize",
        property: "background-size",
        fallback: "cover",
    },
    Companion::Fallback {
        key: "bgImgPosition",
        property: "background-position",
        fallback: "center center",
    },
    Companion::Fallback {
        key: "bgImgAttachment",
        property: "background-attachment",
        fallback: "scroll",
    },
    Companion::Fallback {
        key: "bgImgRepeat",
        property: "background-repeat",
        fallback: "no-repeat",
    },
];

pub const OVERLAY_IMAGE_COMPANIONS: &[Companion] = &[
    Companion::Fallback {
        key: "overlayBgImgSize",
        property: "background-size",
        fallback: "cover",
    },
    Companion::Fallback {
        key: "overlayBgImgPosition",
        property: "background-position",
        fallback: "center center",
    },
    Companion::Fallback {
        key: "overlayBgImgAttachment",
        property: "background-attachment",
        fallback: "scroll",
    },
    Companion::Fallback {
        key: "overlayBgImgRepeat",
        property: "background-repeat",
        fallback: "no-repeat",
    },
];

const CENTERED: &[Companion] = &[
    Companion::Fixed {
        property: "margin-left",
        value: "auto",
    },
    Companion::Fixed {
        property: "margin-right",
        value: "auto",
    },
];

/// Row root: margins and background.
pub const ROW_ROOT: &[DeclSpec] = &[
    px("topMargin", "margin-top"),
    px("bottomMargin", "margin-bottom"),
    raw("bgColor", "background-color"),
    DeclSpec {
        key: "bgImg",
        property: "background-image",
        format: ValueFormat::Url,
        companions: BG_IMAGE_COMPANIONS,
    },
];

/// Row column wrap: padding, height and centered max width.
pub const ROW_COLUMN_WRAP: &[DeclSpec] = &[
    px("topPadding", "padding-top"),
    px("bottomPadding", "padding-bottom"),
    px("leftPadding", "padding-left"),
    px("rightPadding", "padding-right"),
    px("minHeight", "min-height"),
    DeclSpec {
        key: "maxWidth",
        property: "max-width",
        format: ValueFormat::Px,
        companions: CENTERED,
    },
];

/// Overlay color/image when not drawing a gradient.
pub const OVERLAY_FILL: &[DeclSpec] = &[
    raw("overlay", "background-color"),
    DeclSpec {
        key: "overlayBgImg",
        property: "background-image",
        format: ValueFormat::Url,
        companions: OVERLAY_IMAGE_COMPANIONS,
    },
];

pub const ROW_MOBILE_MARGIN: &[DeclSpec] = &[
    px("topMarginM", "margin-top"),
    px("bottomMarginM", "margin-bottom"),
];

pub const ROW_MOBILE_PADDING: &[DeclSpec] = &[
    px("topPaddingM", "padding-top"),
    px("bottomPaddingM", "padding-bottom"),
    px("leftPaddingM", "padding-left"),
    px("rightPaddingM", "padding-right"),
];

pub const COLUMN_DESKTOP: &[DeclSpec] = &[
    px("topPadding", "padding-top"),
    px("bottomPadding", "padding-bottom"),
    px("leftPadding", "padding-left"),
    px("rightPadding", "padding-right"),
    px("topMargin", "margin-top"),
    px("bottomMargin", "margin-bottom"),
];

pub const COLUMN_MOBILE: &[DeclSpec] = &[
    px("topPaddingM", "padding-top"),
    px("bottomPaddingM", "padding-bottom"),
    px("leftPaddingM", "padding-left"),
    px("rightPaddingM", "padding-right"),
    px("topMarginM", "margin-top"),
    px("bottomMarginM", "margin-bottom"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_keys_emit_nothing() {
        let attrs: Attributes = [("unrelated", 3)].into_iter().collect();
        assert!(emit_rule(".x", ROW_ROOT, &attrs).is_none());
        assert!(emit_rule(".x", COLUMN_MOBILE, &attrs).is_none());
    }

    #[test]
    fn declarations_follow_table_order_not_input_order() {
        let attrs: Attributes = [("bottomMargin", 5), ("topMargin", 9)].into_iter().collect();
        let rule = emit_rule(".x", ROW_ROOT, &attrs).unwrap();
        assert_eq!(rule.to_string(), ".x {margin-top:9px;margin-bottom:5px;}");
    }

    #[test]
    fn companions_fall_back_when_unset() {
        let attrs: Attributes = [("bgImg", "a.jpg"), ("bgImgRepeat", "repeat-x")]
            .into_iter()
            .collect();
        let rule = emit_rule(".x", ROW_ROOT, &attrs).unwrap();
        assert_eq!(
            rule.to_string(),
            ".x {background-image:url(a.jpg);background-size:cover;background-position:center center;background-attachment:scroll;background-repeat:repeat-x;}"
        );
    }

    #[test]
    fn companion_keys_alone_do_not_trigger_a_rule() {
        let attrs: Attributes = [("bgImgSize", "contain")].into_iter().collect();
        assert!(emit_rule(".x", ROW_ROOT, &attrs).is_none());
    }

    #[test]
    fn max_width_forces_auto_side_margins() {
        let attrs: Attributes = [("maxWidth", 900)].into_iter().collect();
        let rule = emit_rule(".w", ROW_COLUMN_WRAP, &attrs).unwrap();
        assert_eq!(
            rule.to_string(),
            ".w {max-width:900px;margin-left:auto;margin-right:auto;}"
        );
    }
}
