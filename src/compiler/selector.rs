/// Selectors scoped to one row instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowSelectors {
    root: String,
}

impl RowSelectors {
    pub fn new(unique_id: &str) -> Self {
        Self {
            root: format!("#kt-layout-id{}", unique_id),
        }
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    pub fn column_wrap(&self) -> String {
        format!("{} > .kt-row-column-wrap", self.root)
    }

    pub fn overlay(&self) -> String {
        format!("{} > .kt-row-layout-overlay", self.root)
    }

    /// `index` is 1-based among the row's column children.
    pub fn column(&self, index: usize) -> String {
        format!("{} > .kt-row-column-wrap > .inner-column-{}", self.root, index)
    }
}
