//! Owned CSS output model.
//!
//! Rules render in the compact form the frontend stylesheet has always used:
//! `selector {prop:value;prop:value;}` with no whitespace between rules.

use std::fmt;

use sha2::{Digest, Sha256};

/// A single `property:value;` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub property: String,
    pub value: String,
    /// Render as `property: value;` instead of `property:value;`
    pub spaced: bool,
}

impl Declaration {
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
            spaced: false,
        }
    }

    pub fn spaced(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            spaced: true,
            ..Self::new(property, value)
        }
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.spaced {
            write!(f, "{}: {};", self.property, self.value)
        } else {
            write!(f, "{}:{};", self.property, self.value)
        }
    }
}

/// A selector with its declarations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub selector: String,
    pub declarations: Vec<Declaration>,
}

impl Rule {
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            declarations: Vec::new(),
        }
    }

    pub fn push(&mut self, declaration: Declaration) {
        self.declarations.push(declaration);
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {{", self.selector)?;
        for d in &self.declarations {
            write!(f, "{}", d)?;
        }
        f.write_str("}")
    }
}

/// An `@media` block wrapping plain rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaBlock {
    /// Condition text inside `@media ...`, e.g. `(max-width: 767px)`
    pub query: String,
    pub rules: Vec<Rule>,
}

impl MediaBlock {
    pub fn max_width(px: u32) -> Self {
        Self {
            query: format!("(max-width: {}px)", px),
            rules: Vec::new(),
        }
    }
}

impl fmt::Display for MediaBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@media {} {{", self.query)?;
        for r in &self.rules {
            write!(f, "{}", r)?;
        }
        f.write_str("}")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CssItem {
    Rule(Rule),
    Media(MediaBlock),
}

impl fmt::Display for CssItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CssItem::Rule(r) => write!(f, "{}", r),
            CssItem::Media(m) => write!(f, "{}", m),
        }
    }
}

/// An ordered list of CSS items, in emission order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stylesheet {
    pub items: Vec<CssItem>,
}

impl Stylesheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_rule(&mut self, rule: Rule) {
        self.items.push(CssItem::Rule(rule));
    }

    pub fn push_media(&mut self, media: MediaBlock) {
        self.items.push(CssItem::Media(media));
    }

    pub fn extend(&mut self, other: Stylesheet) {
        self.items.extend(other.items);
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// All selectors in output order, descending into media blocks.
    pub fn selectors(&self) -> Vec<&str> {
        let mut out = Vec::new();
        for item in &self.items {
            match item {
                CssItem::Rule(r) => out.push(r.selector.as_str()),
                CssItem::Media(m) => out.extend(m.rules.iter().map(|r| r.selector.as_str())),
            }
        }
        out
    }

    /// SHA-256 of the rendered CSS, hex encoded.
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.to_string().as_bytes());
        hex::encode(hasher.finalize())
    }
}

impl fmt::Display for Stylesheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for item in &self.items {
            write!(f, "{}", item)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rules_render_compactly() {
        let mut rule = Rule::new("#kt-layout-id_a");
        rule.push(Declaration::new("margin-top", "10px"));
        rule.push(Declaration::spaced("background-image", "linear-gradient(180deg, red 0%, blue 100%)"));
        assert_eq!(
            rule.to_string(),
            "#kt-layout-id_a {margin-top:10px;background-image: linear-gradient(180deg, red 0%, blue 100%);}"
        );
    }

    #[test]
    fn media_blocks_wrap_rules() {
        let mut media = MediaBlock::max_width(767);
        let mut rule = Rule::new(".x");
        rule.push(Declaration::new("padding-top", "0px"));
        media.rules.push(rule);
        assert_eq!(media.to_string(), "@media (max-width: 767px) {.x {padding-top:0px;}}");
    }

    #[test]
    fn fingerprint_tracks_content() {
        let empty = Stylesheet::new();
        assert_eq!(
            empty.fingerprint(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );

        let mut a = Stylesheet::new();
        a.push_rule(Rule::new(".a"));
        let mut b = Stylesheet::new();
        b.push_rule(Rule::new(".b"));
        assert_ne!(a.fingerprint(), b.fingerprint());
        assert_eq!(a.fingerprint(), a.clone().fingerprint());
        assert_eq!(a.selectors(), vec![".a"]);
    }
}
