//! Tree walk that collects row and column styles in document order.

use log::{debug, warn};

use crate::block::{Block, BlockKind};
use crate::css::Stylesheet;
use crate::ids::UniqueIdRegistry;
use crate::CompilerConfig;

use super::{column_stylesheet, row_stylesheet};

/// Depth-first, pre-order walk over one document.
pub(super) struct Walker<'a> {
    config: &'a CompilerConfig,
    seen_ids: UniqueIdRegistry,
    out: Stylesheet,
}

impl<'a> Walker<'a> {
    pub(super) fn new(config: &'a CompilerConfig) -> Self {
        Self {
            config,
            seen_ids: UniqueIdRegistry::new(),
            out: Stylesheet::new(),
        }
    }

    pub(super) fn run(mut self, blocks: &[Block]) -> Stylesheet {
        for block in blocks {
            self.visit(block);
        }
        self.out
    }

    fn visit(&mut self, block: &Block) {
        if block.kind == BlockKind::Row {
            self.emit_row(block);
        }
        // Rows can sit under any block type, so always descend.
        for child in &block.children {
            self.visit(child);
        }
    }

    fn emit_row(&mut self, row: &Block) {
        let attrs = match row.attributes.as_ref() {
            Some(a) => a,
            None => {
                debug!("row without attribute mapping; no styles");
                return;
            }
        };
        let unique_id = match row.unique_id() {
            Some(id) => id,
            None => {
                debug!("row without uniqueID; no styles");
                return;
            }
        };
        if !self.seen_ids.record(&unique_id) && self.config.warn_on_duplicate_ids {
            warn!("duplicate row uniqueID {}; selectors will collide", unique_id);
        }

        debug!("compiling row {}", unique_id);
        self.out.extend(row_stylesheet(
            attrs,
            &unique_id,
            self.config.mobile_breakpoint_px,
        ));

        // Malformed columns still take their position.
        let columns = row.children.iter().filter(|c| c.kind == BlockKind::Column);
        for (i, column) in columns.enumerate() {
            let index = i + 1;
            match column.attributes.as_ref() {
                Some(col_attrs) => {
                    self.out.extend(column_stylesheet(
                        col_attrs,
                        &unique_id,
                        index,
                        self.config.mobile_breakpoint_px,
                    ));
                }
                None => warn!(
                    "column {} of row {} has malformed attributes; skipped",
                    index, unique_id
                ),
            }
        }
    }
}
