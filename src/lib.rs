//! Kadence Styles
//!
//! Compiles the attributes stored on Kadence row/layout and column blocks
//! into the single inline stylesheet emitted in the page `<head>`.
//!
//! # Features
//!
//! - **Tolerant input**: reads block-parser JSON and skips malformed nodes
//!   instead of failing the page
//! - **Declarative rules**: every CSS rule is driven by a key table, emitted
//!   only when one of its keys is set
//! - **Deterministic output**: the same tree always yields byte-identical CSS
//!
//! # Example
//!
//! ```
//! use kadence_styles::{parse_document, CompilerConfig, StyleCompiler};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let blocks = parse_document(
//!     r#"[{"blockName": "kadence/rowlayout", "attrs": {"uniqueID": "_a1", "topMargin": 20}}]"#,
//! )?;
//! let compiler = StyleCompiler::new(CompilerConfig::default());
//! let css = compiler.compile_document(&blocks).to_string();
//! assert_eq!(css, "#kt-layout-id_a1 {margin-top:20px;}");
//! # Ok(())
//! # }
//! ```

pub mod error;
pub use error::{Error, Result};

pub mod block;
pub mod compiler;
pub mod css;

// Editor-side collaborators: stored defaults and unique-ID allocation
pub mod defaults;
pub mod ids;

pub use block::{parse_document, AttrValue, Attributes, Block, BlockKind};
pub use compiler::{compile_column_css, compile_row_css, StyleCompiler};
pub use css::Stylesheet;
pub use defaults::BlockDefaults;
pub use ids::{IdAssignment, UniqueIdRegistry};

/// Configuration for the style compiler
///
/// The defaults reproduce the stylesheet the plugin has always printed:
/// - mobile rules apply below 768px (`max-width: 767px`)
/// - the element is `<style type="text/css" media="all" id="kadence-blocks-frontend">`
///
/// # Examples
///
/// ```
/// let cfg = kadence_styles::CompilerConfig::default();
/// assert_eq!(cfg.mobile_breakpoint_px, 767);
/// ```
#[derive(Debug, Clone)]
pub struct CompilerConfig {
    /// Upper bound of the mobile media query, in px
    pub mobile_breakpoint_px: u32,
    /// `id` attribute of the emitted style element
    pub style_element_id: String,
    /// `media` attribute of the emitted style element
    pub style_media: String,
    /// Log a warning when two rows in one document share a uniqueID
    pub warn_on_duplicate_ids: bool,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            mobile_breakpoint_px: compiler::DEFAULT_MOBILE_BREAKPOINT,
            style_element_id: "kadence-blocks-frontend".to_string(),
            style_media: "all".to_string(),
            warn_on_duplicate_ids: true,
        }
    }
}
