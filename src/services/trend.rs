use crate::domain::models::{ScatterPoint, ScatterReport, ScatterSeries};
use crate::domain::records::Dataset;
use crate::services::stats::ols;
use crate::services::summary::by_sex;

pub fn prestige_income_scatter(dataset: &Dataset, with_points: bool) -> ScatterReport {
    let series = by_sex(dataset.records())
        .into_iter()
        .map(|(sex, records)| {
            let points: Vec<ScatterPoint> = records
                .iter()
                .filter_map(|r| {
                    Some(ScatterPoint {
                        job_prestige: r.job_prestige?,
                        income: r.income?,
                        education: r.education,
                        socioeconomic_index: r.socioeconomic_index,
                    })
                })
                .collect();
            let xy: Vec<(f64, f64)> = points.iter().map(|p| (p.job_prestige, p.income)).collect();
            ScatterSeries {
                sex: sex.to_string(),
                trend: ols(&xy),
                points: with_points.then_some(points),
            }
        })
        .collect();

    ScatterReport {
        x: "job_prestige".to_string(),
        y: "income".to_string(),
        x_label: "Occupational Prestige".to_string(),
        y_label: "Income".to_string(),
        series,
    }
}
