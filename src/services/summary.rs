use crate::domain::models::SummaryRow;
use crate::domain::records::{Dataset, Record};
use crate::services::stats::mean_present;
use std::collections::BTreeMap;

/// Groups respondents with a known sex, ascending by sex label.
pub fn by_sex<'a>(
    records: impl IntoIterator<Item = &'a Record>,
) -> BTreeMap<&'a str, Vec<&'a Record>> {
    let mut groups: BTreeMap<&str, Vec<&Record>> = BTreeMap::new();
    for record in records {
        if let Some(sex) = record.sex.as_deref() {
            groups.entry(sex).or_default().push(record);
        }
    }
    groups
}

pub fn means_by_sex(dataset: &Dataset) -> Vec<SummaryRow> {
    by_sex(dataset.records())
        .into_iter()
        .map(|(sex, records)| SummaryRow {
            sex: sex.to_string(),
            respondents: records.len(),
            income: mean_present(records.iter().map(|r| r.income)),
            job_prestige: mean_present(records.iter().map(|r| r.job_prestige)),
            socioeconomic_index: mean_present(records.iter().map(|r| r.socioeconomic_index)),
            education: mean_present(records.iter().map(|r| r.education)),
        })
        .collect()
}
