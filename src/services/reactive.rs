use crate::domain::catalog::InvalidDimension;
use crate::domain::models::{CrosstabReport, RenderTable};
use crate::domain::records::Dataset;
use crate::services::aggregation::{aggregate, to_long_form};

/// Recomputes the grouped-bar table whenever the selection changes.
///
/// Holds nothing but a borrow of the loaded dataset; every call starts from
/// scratch, so interleaved selections cannot observe each other.
pub struct ReactiveBinding<'a> {
    dataset: &'a Dataset,
}

impl<'a> ReactiveBinding<'a> {
    pub fn new(dataset: &'a Dataset) -> Self {
        Self { dataset }
    }

    pub fn on_selection_change(
        &self,
        feature_attribute: &str,
        group_attribute: &str,
    ) -> Result<RenderTable, InvalidDimension> {
        let table = aggregate(self.dataset, feature_attribute, group_attribute)?;
        let long = to_long_form(&table);
        tracing::debug!(
            feature = feature_attribute,
            group = group_attribute,
            cells = long.rows.len(),
            total = table.total(),
            "selection recomputed"
        );
        Ok(long)
    }

    /// `on_selection_change` plus what the renderer needs around the table.
    pub fn report(
        &self,
        feature_attribute: &str,
        group_attribute: &str,
    ) -> Result<CrosstabReport, InvalidDimension> {
        let table = self.on_selection_change(feature_attribute, group_attribute)?;
        let records = self.dataset.len();
        Ok(CrosstabReport {
            feature_label: table.feature.question().to_string(),
            records,
            dropped: (records as u64).saturating_sub(table.total()),
            chart: table.chart(),
            table,
        })
    }
}
