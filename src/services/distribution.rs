use crate::cli::Metric;
use crate::domain::models::{BoxPlotReport, BoxStats};
use crate::domain::records::{Dataset, Record};
use crate::services::stats::box_stats;
use crate::services::summary::by_sex;

pub fn metric_by_sex(dataset: &Dataset, metric: Metric) -> BoxPlotReport {
    BoxPlotReport {
        metric: metric.column().to_string(),
        label: metric.label().to_string(),
        boxes: boxes_by_sex(dataset.records(), metric),
    }
}

/// Box statistics per sex over the given records, skipping null values.
pub fn boxes_by_sex<'a>(
    records: impl IntoIterator<Item = &'a Record>,
    metric: Metric,
) -> Vec<BoxStats> {
    by_sex(records)
        .into_iter()
        .filter_map(|(sex, group)| {
            let values = group.iter().filter_map(|r| metric.value(r)).collect();
            box_stats(sex, values)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person(sex: &str, income: Option<f64>, prestige: Option<f64>) -> Record {
        Record {
            sex: Some(sex.to_string()),
            income,
            job_prestige: prestige,
            ..Default::default()
        }
    }

    #[test]
    fn boxes_are_per_sex_and_skip_nulls() {
        let ds = Dataset::new(vec![
            person("male", Some(40000.0), Some(50.0)),
            person("male", Some(60000.0), None),
            person("female", Some(20000.0), Some(30.0)),
            person("female", Some(30000.0), Some(20.0)),
            person("female", None, Some(40.0)),
        ]);
        let income = metric_by_sex(&ds, Metric::Income);
        assert_eq!(income.label, "Income");
        assert_eq!(income.boxes.len(), 2);
        assert_eq!(income.boxes[0].sex, "female");
        assert_eq!(income.boxes[0].n, 2);
        assert_eq!(income.boxes[0].q1, 22500.0);
        assert_eq!(income.boxes[0].median, 25000.0);

        let prestige = metric_by_sex(&ds, Metric::JobPrestige);
        assert_eq!(prestige.metric, "job_prestige");
        assert_eq!(prestige.boxes[0].n, 3);
        assert_eq!(prestige.boxes[1].n, 1);
    }

    #[test]
    fn sex_without_values_has_no_box() {
        let ds = Dataset::new(vec![
            person("male", None, Some(50.0)),
            person("female", Some(1.0), None),
        ]);
        let report = metric_by_sex(&ds, Metric::Income);
        assert_eq!(report.boxes.len(), 1);
        assert_eq!(report.boxes[0].sex, "female");
    }
}
