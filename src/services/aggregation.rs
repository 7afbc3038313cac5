use crate::domain::catalog::{Catalog, FeatureDimension, GroupDimension, InvalidDimension};
use crate::domain::models::{LongFormRow, RenderTable};
use crate::domain::records::Dataset;
use std::collections::BTreeMap;

/// Record counts per occurring (feature value, group value) pair.
///
/// Only pairs that occur are stored; a missing pair means zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContingencyTable {
    feature: FeatureDimension,
    group: GroupDimension,
    cells: BTreeMap<(String, String), u64>,
}

impl ContingencyTable {
    pub fn feature(&self) -> FeatureDimension {
        self.feature
    }

    pub fn group(&self) -> GroupDimension {
        self.group
    }

    pub fn cells(&self) -> impl Iterator<Item = (&str, &str, u64)> {
        self.cells
            .iter()
            .map(|((f, g), n)| (f.as_str(), g.as_str(), *n))
    }

    pub fn total(&self) -> u64 {
        self.cells.values().sum()
    }
}

/// Validates both names against their catalogs, then cross-tabulates.
pub fn aggregate(
    dataset: &Dataset,
    feature_attribute: &str,
    group_attribute: &str,
) -> Result<ContingencyTable, InvalidDimension> {
    let feature = FeatureDimension::lookup(feature_attribute)?;
    let group = GroupDimension::lookup(group_attribute)?;
    Ok(cross_tabulate(dataset, feature, group))
}

/// Records with a null on either side are dropped, not bucketed.
pub fn cross_tabulate(
    dataset: &Dataset,
    feature: FeatureDimension,
    group: GroupDimension,
) -> ContingencyTable {
    let mut cells: BTreeMap<(String, String), u64> = BTreeMap::new();
    for record in dataset.records() {
        let (Some(f), Some(g)) = (record.feature_value(feature), record.group_value(group)) else {
            continue;
        };
        *cells.entry((f.to_string(), g.into_owned())).or_insert(0) += 1;
    }
    ContingencyTable {
        feature,
        group,
        cells,
    }
}

/// Melts the table into group-major, feature-minor rows.
pub fn to_long_form(table: &ContingencyTable) -> RenderTable {
    let mut rows: Vec<LongFormRow> = table
        .cells()
        .map(|(f, g, count)| LongFormRow {
            feature_value: f.to_string(),
            group_value: g.to_string(),
            count,
        })
        .collect();
    rows.sort_by(|a, b| {
        a.group_value
            .cmp(&b.group_value)
            .then_with(|| a.feature_value.cmp(&b.feature_value))
    });
    RenderTable {
        feature: table.feature(),
        group: table.group(),
        rows,
    }
}
