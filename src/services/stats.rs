use crate::domain::models::{BoxStats, TrendLine};

pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Mean of the non-null values, `None` when there are none.
pub fn mean_present(values: impl Iterator<Item = Option<f64>>) -> Option<f64> {
    let present: Vec<f64> = values.flatten().collect();
    mean(&present)
}

/// Linear interpolation between order statistics. `sorted` must be ascending
/// and non-empty.
pub fn quantile_sorted(sorted: &[f64], q: f64) -> f64 {
    let pos = q.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}

pub fn box_stats(label: &str, mut values: Vec<f64>) -> Option<BoxStats> {
    if values.is_empty() {
        return None;
    }
    values.sort_by(f64::total_cmp);
    let q1 = quantile_sorted(&values, 0.25);
    let median = quantile_sorted(&values, 0.5);
    let q3 = quantile_sorted(&values, 0.75);
    let reach = 1.5 * (q3 - q1);
    let (lo_limit, hi_limit) = (q1 - reach, q3 + reach);

    let inside = || values.iter().copied().filter(|v| *v >= lo_limit && *v <= hi_limit);
    let lower_fence = inside().fold(f64::INFINITY, f64::min);
    let upper_fence = inside().fold(f64::NEG_INFINITY, f64::max);
    let outliers = values
        .iter()
        .copied()
        .filter(|v| *v < lo_limit || *v > hi_limit)
        .collect();

    Some(BoxStats {
        sex: label.to_string(),
        n: values.len(),
        min: values[0],
        q1,
        median,
        q3,
        max: values[values.len() - 1],
        mean: mean(&values).unwrap_or(median),
        lower_fence,
        upper_fence,
        outliers,
    })
}

/// Ordinary least squares `y = intercept + slope * x`.
pub fn ols(points: &[(f64, f64)]) -> Option<TrendLine> {
    let n = points.len();
    if n < 2 {
        return None;
    }
    let nf = n as f64;
    let mx = points.iter().map(|p| p.0).sum::<f64>() / nf;
    let my = points.iter().map(|p| p.1).sum::<f64>() / nf;
    let sxx: f64 = points.iter().map(|p| (p.0 - mx).powi(2)).sum();
    let sxy: f64 = points.iter().map(|p| (p.0 - mx) * (p.1 - my)).sum();
    let syy: f64 = points.iter().map(|p| (p.1 - my).powi(2)).sum();
    if sxx == 0.0 {
        return None;
    }
    let slope = sxy / sxx;
    let intercept = my - slope * mx;
    let r_squared = if syy == 0.0 {
        1.0
    } else {
        (sxy * sxy) / (sxx * syy)
    };
    Some(TrendLine {
        slope,
        intercept,
        r_squared,
        n,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn mean_skips_nulls() {
        assert_eq!(mean_present([Some(1.0), None, Some(3.0)].into_iter()), Some(2.0));
        assert_eq!(mean_present([None, None].into_iter()), None);
    }

    #[test]
    fn quantiles_interpolate_linearly() {
        let v = [1.0, 2.0, 3.0, 4.0];
        assert!(close(quantile_sorted(&v, 0.25), 1.75));
        assert!(close(quantile_sorted(&v, 0.5), 2.5));
        assert!(close(quantile_sorted(&v, 0.75), 3.25));
        assert!(close(quantile_sorted(&[7.0], 0.5), 7.0));
    }

    #[test]
    fn box_stats_flags_outliers_beyond_fences() {
        let stats = box_stats("male", vec![5.0, 1.0, 2.0, 3.0, 4.0, 100.0]).unwrap();
        assert_eq!(stats.n, 6);
        assert_eq!(stats.min, 1.0);
        assert_eq!(stats.max, 100.0);
        assert!(close(stats.median, 3.5));
        assert_eq!(stats.outliers, vec![100.0]);
        assert_eq!(stats.lower_fence, 1.0);
        assert_eq!(stats.upper_fence, 5.0);
    }

    #[test]
    fn box_stats_of_nothing_is_none() {
        assert!(box_stats("female", vec![]).is_none());
    }

    #[test]
    fn ols_recovers_exact_line() {
        let t = ols(&[(50.0, 40000.0), (60.0, 60000.0), (55.0, 50000.0)]).unwrap();
        assert!(close(t.slope, 2000.0));
        assert!(close(t.intercept, -60000.0));
        assert!(close(t.r_squared, 1.0));
        assert_eq!(t.n, 3);
    }

    #[test]
    fn ols_needs_spread_in_x() {
        assert!(ols(&[(1.0, 2.0)]).is_none());
        assert!(ols(&[(1.0, 2.0), (1.0, 3.0)]).is_none());
    }
}
