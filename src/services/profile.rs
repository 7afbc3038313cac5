use crate::domain::catalog::{Catalog, FeatureDimension, GroupDimension};
use crate::domain::models::{ColumnProfile, DatasetProfile, LevelCount};
use crate::domain::records::{Dataset, NumericColumn};
use std::collections::BTreeMap;

pub fn describe(dataset: &Dataset, source: &str) -> DatasetProfile {
    let total = dataset.len();
    let mut columns = Vec::new();

    for g in GroupDimension::ALL {
        let values = dataset.records().iter().map(|r| r.group_value(*g));
        columns.push(categorical(g.column(), total, values));
    }
    for f in FeatureDimension::ALL {
        let values = dataset.records().iter().map(|r| r.feature_value(*f));
        columns.push(categorical(f.column(), total, values));
    }
    for n in NumericColumn::ALL {
        // profiled above as a grouping dimension
        if *n == NumericColumn::Education {
            continue;
        }
        let non_null = dataset
            .records()
            .iter()
            .filter(|r| r.numeric(*n).is_some())
            .count();
        columns.push(ColumnProfile {
            name: n.column().to_string(),
            kind: "numeric".to_string(),
            non_null,
            nulls: total - non_null,
            levels: None,
        });
    }

    DatasetProfile {
        source: source.to_string(),
        records: total,
        columns,
    }
}

fn categorical<S: AsRef<str>>(
    name: &str,
    total: usize,
    values: impl Iterator<Item = Option<S>>,
) -> ColumnProfile {
    let mut levels: BTreeMap<String, usize> = BTreeMap::new();
    for v in values.flatten() {
        *levels.entry(v.as_ref().to_string()).or_insert(0) += 1;
    }
    let non_null = levels.values().sum();
    ColumnProfile {
        name: name.to_string(),
        kind: "categorical".to_string(),
        non_null,
        nulls: total - non_null,
        levels: Some(
            levels
                .into_iter()
                .map(|(level, count)| LevelCount { level, count })
                .collect(),
        ),
    }
}
