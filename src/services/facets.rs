use crate::cli::Metric;
use crate::domain::models::{Facet, FacetsReport};
use crate::domain::records::{Dataset, Record};
use crate::services::distribution::boxes_by_sex;

/// Equal-width, right-closed bin edges over `values`.
///
/// The lowest edge is pulled down by 0.1% of the range so the minimum lands
/// in the first bin. A zero-width range is widened on both sides instead.
pub fn equal_width_edges(values: &[f64], bins: usize) -> Option<Vec<f64>> {
    if values.is_empty() || bins == 0 {
        return None;
    }
    let mut lo = values.iter().copied().fold(f64::INFINITY, f64::min);
    let mut hi = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let degenerate = lo == hi;
    if degenerate {
        let pad = if lo == 0.0 { 0.001 } else { 0.001 * lo.abs() };
        lo -= pad;
        hi += pad;
    }
    let step = (hi - lo) / bins as f64;
    let mut edges: Vec<f64> = (0..=bins).map(|i| lo + step * i as f64).collect();
    edges[bins] = hi;
    if !degenerate {
        edges[0] -= (hi - lo) * 0.001;
    }
    Some(edges)
}

/// Index of the `(edges[i], edges[i + 1]]` bin holding `x`.
pub fn bin_index(edges: &[f64], x: f64) -> Option<usize> {
    if edges.len() < 2 || x <= edges[0] {
        return None;
    }
    edges[1..].iter().position(|e| x <= *e)
}

pub fn interval_label(lower: f64, upper: f64) -> String {
    format!(
        "Job Prestige Range ({}, {}]",
        edge_text(lower),
        edge_text(upper)
    )
}

fn edge_text(edge: f64) -> String {
    let rounded = (edge * 1000.0).round() / 1000.0;
    if rounded.fract() == 0.0 {
        format!("{:.1}", rounded)
    } else {
        format!("{}", rounded)
    }
}

/// Income by sex within occupational prestige bins.
///
/// Edges come from every respondent with a prestige score; respondents
/// missing income or sex are dropped afterwards, and bins left empty are
/// not reported.
pub fn prestige_facets(dataset: &Dataset, bins: usize) -> FacetsReport {
    let prestige: Vec<f64> = dataset
        .records()
        .iter()
        .filter_map(|r| r.job_prestige)
        .collect();
    let Some(edges) = equal_width_edges(&prestige, bins) else {
        return FacetsReport {
            bins,
            edges: vec![],
            facets: vec![],
        };
    };

    let mut members: Vec<Vec<&Record>> = vec![Vec::new(); bins];
    for record in dataset.records() {
        let (Some(p), Some(_), Some(_)) = (record.job_prestige, record.income, &record.sex) else {
            continue;
        };
        if let Some(i) = bin_index(&edges, p) {
            members[i].push(record);
        }
    }

    let facets = members
        .into_iter()
        .enumerate()
        .filter(|(_, m)| !m.is_empty())
        .map(|(i, m)| Facet {
            label: interval_label(edges[i], edges[i + 1]),
            lower: edges[i],
            upper: edges[i + 1],
            boxes: boxes_by_sex(m, Metric::Income),
        })
        .collect();

    FacetsReport {
        bins,
        edges,
        facets,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn edges_extend_the_lowest_bound() {
        let edges = equal_width_edges(&[20.0, 30.0, 60.0], 4).unwrap();
        assert_eq!(edges.len(), 5);
        assert!(close(edges[0], 19.96));
        assert!(close(edges[1], 30.0));
        assert!(close(edges[4], 60.0));
    }

    #[test]
    fn degenerate_range_is_widened() {
        let edges = equal_width_edges(&[10.0, 10.0], 2).unwrap();
        assert!(close(edges[0], 9.99));
        assert!(close(edges[1], 10.0));
        assert!(close(edges[2], 10.01));
        assert_eq!(bin_index(&edges, 10.0), Some(0));
    }

    #[test]
    fn bins_are_right_closed() {
        let edges = vec![0.0, 10.0, 20.0];
        assert_eq!(bin_index(&edges, 10.0), Some(0));
        assert_eq!(bin_index(&edges, 10.5), Some(1));
        assert_eq!(bin_index(&edges, 0.0), None);
        assert_eq!(bin_index(&edges, 20.5), None);
    }

    #[test]
    fn labels_round_to_three_decimals() {
        assert_eq!(
            interval_label(19.96, 26.666666666),
            "Job Prestige Range (19.96, 26.667]"
        );
        assert_eq!(interval_label(40.0, 46.6666), "Job Prestige Range (40.0, 46.667]");
    }

    fn person(sex: Option<&str>, prestige: Option<f64>, income: Option<f64>) -> Record {
        Record {
            sex: sex.map(str::to_string),
            job_prestige: prestige,
            income,
            ..Default::default()
        }
    }

    #[test]
    fn facets_skip_empty_bins_and_incomplete_rows() {
        let ds = Dataset::new(vec![
            person(Some("male"), Some(20.0), Some(10.0)),
            person(Some("female"), Some(21.0), Some(30.0)),
            person(Some("female"), Some(60.0), None),
            person(None, Some(45.0), Some(5.0)),
            person(Some("male"), Some(59.0), Some(70.0)),
        ]);
        let report = prestige_facets(&ds, 4);
        assert_eq!(report.edges.len(), 5);
        assert_eq!(report.facets.len(), 2);
        assert_eq!(report.facets[0].boxes.len(), 2);
        assert_eq!(report.facets[1].boxes.len(), 1);
        assert_eq!(report.facets[1].boxes[0].sex, "male");
        assert!(report.facets[0].label.starts_with("Job Prestige Range (19.96"));
    }

    #[test]
    fn no_prestige_means_no_facets() {
        let ds = Dataset::new(vec![person(Some("male"), None, Some(1.0))]);
        let report = prestige_facets(&ds, 6);
        assert!(report.facets.is_empty());
        assert!(report.edges.is_empty());
    }
}
