//! The style compiler: row and column attribute sets to CSS.
//!
//! [`row_stylesheet`] and [`column_stylesheet`] are pure functions of their
//! arguments. [`StyleCompiler`] walks a block tree and concatenates their
//! output in document order.

pub mod overlay;
pub mod selector;
pub mod tables;
mod walk;

use crate::block::{Attributes, Block};
use crate::css::{MediaBlock, Stylesheet};
use crate::CompilerConfig;

pub use selector::RowSelectors;

/// Breakpoint for the mobile media query when no config is given.
pub const DEFAULT_MOBILE_BREAKPOINT: u32 = 767;

/// CSS for a row block, using the default breakpoint.
pub fn compile_row_css(attrs: &Attributes, unique_id: &str) -> String {
    row_stylesheet(attrs, unique_id, DEFAULT_MOBILE_BREAKPOINT).to_string()
}

/// CSS for the `column_index`-th (1-based) column of a row.
pub fn compile_column_css(attrs: &Attributes, unique_id: &str, column_index: usize) -> String {
    column_stylesheet(attrs, unique_id, column_index, DEFAULT_MOBILE_BREAKPOINT).to_string()
}

pub fn row_stylesheet(attrs: &Attributes, unique_id: &str, mobile_breakpoint: u32) -> Stylesheet {
    let sel = RowSelectors::new(unique_id);
    let wrap = sel.column_wrap();
    let mut sheet = Stylesheet::new();

    if let Some(rule) = tables::emit_rule(sel.root(), tables::ROW_ROOT, attrs) {
        sheet.push_rule(rule);
    }
    if let Some(rule) = tables::emit_rule(&wrap, tables::ROW_COLUMN_WRAP, attrs) {
        sheet.push_rule(rule);
    }
    if let Some(rule) = overlay::overlay_rule(&sel.overlay(), attrs) {
        sheet.push_rule(rule);
    }

    let mut media = MediaBlock::max_width(mobile_breakpoint);
    if let Some(rule) = tables::emit_rule(sel.root(), tables::ROW_MOBILE_MARGIN, attrs) {
        media.rules.push(rule);
    }
    if let Some(rule) = tables::emit_rule(&wrap, tables::ROW_MOBILE_PADDING, attrs) {
        media.rules.push(rule);
    }
    if !media.rules.is_empty() {
        sheet.push_media(media);
    }

    sheet
}

pub fn column_stylesheet(
    attrs: &Attributes,
    unique_id: &str,
    column_index: usize,
    mobile_breakpoint: u32,
) -> Stylesheet {
    let selector = RowSelectors::new(unique_id).column(column_index);
    let mut sheet = Stylesheet::new();

    if let Some(rule) = tables::emit_rule(&selector, tables::COLUMN_DESKTOP, attrs) {
        sheet.push_rule(rule);
    }
    if let Some(rule) = tables::emit_rule(&selector, tables::COLUMN_MOBILE, attrs) {
        let mut media = MediaBlock::max_width(mobile_breakpoint);
        media.rules.push(rule);
        sheet.push_media(media);
    }

    sheet
}

/// Compiles whole block documents according to a [`CompilerConfig`].
#[derive(Debug, Clone, Default)]
pub struct StyleCompiler {
    config: CompilerConfig,
}

impl StyleCompiler {
    pub fn new(config: CompilerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CompilerConfig {
        &self.config
    }

    /// Walk `blocks` depth-first and collect every row and column rule.
    pub fn compile_document(&self, blocks: &[Block]) -> Stylesheet {
        walk::Walker::new(&self.config).run(blocks)
    }

    /// The frontend `<style>` element for `blocks`.
    ///
    /// A document with no blocks produces no element at all.
    pub fn render_style_element(&self, blocks: &[Block]) -> String {
        if blocks.is_empty() {
            return String::new();
        }
        let css = self.compile_document(blocks);
        format!(
            "<style type=\"text/css\" media=\"{}\" id=\"{}\">{}</style>",
            self.config.style_media, self.config.style_element_id, css
        )
    }
}
