use crate::domain::catalog::{DimensionRole, FeatureDimension, GroupDimension};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

#[derive(Serialize, Debug)]
pub struct ErrorOut {
    pub ok: bool,
    pub error: ErrorBody,
}

#[derive(Serialize, Debug)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

/// One (feature value, group value, count) triple of the long form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LongFormRow {
    pub feature_value: String,
    pub group_value: String,
    pub count: u64,
}

/// Long-form cross-tabulation handed to the chart renderer.
///
/// Serializes each row as a map keyed by the selected column names plus
/// `value`, so a renderer can bind `x = <feature>`, `color = <group>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderTable {
    pub feature: FeatureDimension,
    pub group: GroupDimension,
    pub rows: Vec<LongFormRow>,
}

impl RenderTable {
    pub fn total(&self) -> u64 {
        self.rows.iter().map(|r| r.count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn chart(&self) -> BarChartSpec {
        let x = self.feature.to_string();
        let color = self.group.to_string();
        BarChartSpec {
            kind: "bar".to_string(),
            barmode: "group".to_string(),
            hover_data: vec![x.clone(), VALUE_COLUMN.to_string(), color.clone()],
            x,
            y: VALUE_COLUMN.to_string(),
            color,
        }
    }
}

pub const VALUE_COLUMN: &str = "value";

impl Serialize for RenderTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;
        let mut st = serializer.serialize_struct("RenderTable", 4)?;
        st.serialize_field("feature", &self.feature)?;
        st.serialize_field("group", &self.group)?;
        st.serialize_field("total", &self.total())?;
        st.serialize_field("rows", &LabeledRows(self))?;
        st.end()
    }
}

struct LabeledRows<'a>(&'a RenderTable);

impl Serialize for LabeledRows<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let feature = self.0.feature.to_string();
        let group = self.0.group.to_string();
        serializer.collect_seq(self.0.rows.iter().map(|row| LabeledRow {
            feature: &feature,
            group: &group,
            row,
        }))
    }
}

struct LabeledRow<'a> {
    feature: &'a str,
    group: &'a str,
    row: &'a LongFormRow,
}

impl Serialize for LabeledRow<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(3))?;
        map.serialize_entry(self.feature, &self.row.feature_value)?;
        map.serialize_entry(self.group, &self.row.group_value)?;
        map.serialize_entry(VALUE_COLUMN, &self.row.count)?;
        map.end()
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct BarChartSpec {
    pub kind: String,
    pub barmode: String,
    pub x: String,
    pub y: String,
    pub color: String,
    pub hover_data: Vec<String>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CrosstabReport {
    pub feature_label: String,
    pub records: usize,
    pub dropped: u64,
    pub chart: BarChartSpec,
    pub table: RenderTable,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CatalogEntry {
    pub role: DimensionRole,
    pub column: String,
    pub question: String,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CatalogReport {
    pub features: Vec<CatalogEntry>,
    pub groups: Vec<CatalogEntry>,
    pub default_feature: String,
    pub default_group: String,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct SummaryRow {
    pub sex: String,
    pub respondents: usize,
    pub income: Option<f64>,
    pub job_prestige: Option<f64>,
    pub socioeconomic_index: Option<f64>,
    pub education: Option<f64>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ScatterPoint {
    pub job_prestige: f64,
    pub income: f64,
    pub education: Option<f64>,
    pub socioeconomic_index: Option<f64>,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct TrendLine {
    pub slope: f64,
    pub intercept: f64,
    pub r_squared: f64,
    pub n: usize,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ScatterSeries {
    pub sex: String,
    pub trend: Option<TrendLine>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points: Option<Vec<ScatterPoint>>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ScatterReport {
    pub x: String,
    pub y: String,
    pub x_label: String,
    pub y_label: String,
    pub series: Vec<ScatterSeries>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct BoxStats {
    pub sex: String,
    pub n: usize,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
    pub mean: f64,
    pub lower_fence: f64,
    pub upper_fence: f64,
    pub outliers: Vec<f64>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct BoxPlotReport {
    pub metric: String,
    pub label: String,
    pub boxes: Vec<BoxStats>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Facet {
    pub label: String,
    pub lower: f64,
    pub upper: f64,
    pub boxes: Vec<BoxStats>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct FacetsReport {
    pub bins: usize,
    pub edges: Vec<f64>,
    pub facets: Vec<Facet>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct LevelCount {
    pub level: String,
    pub count: usize,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ColumnProfile {
    pub name: String,
    pub kind: String,
    pub non_null: usize,
    pub nulls: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub levels: Option<Vec<LevelCount>>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct DatasetProfile {
    pub source: String,
    pub records: usize,
    pub columns: Vec<ColumnProfile>,
}

#[derive(Serialize, Debug)]
pub struct FetchReport {
    pub source: String,
    pub status: String,
    pub cache_path: Option<String>,
    pub bytes: usize,
}

#[derive(Serialize, Debug)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TabView {
    Table { rows: Vec<SummaryRow> },
    Reactive {
        catalog: CatalogReport,
        initial: CrosstabReport,
    },
    Scatter(ScatterReport),
    BoxPlot(BoxPlotReport),
    Facets(FacetsReport),
}

#[derive(Serialize, Debug)]
pub struct Tab {
    pub label: String,
    pub heading: String,
    pub view: TabView,
}

#[derive(Serialize, Debug)]
pub struct DashboardReport {
    pub title: String,
    pub intro: String,
    pub tabs: Vec<Tab>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> RenderTable {
        RenderTable {
            feature: FeatureDimension::Satjob,
            group: GroupDimension::Sex,
            rows: vec![
                LongFormRow {
                    feature_value: "A".to_string(),
                    group_value: "female".to_string(),
                    count: 1,
                },
                LongFormRow {
                    feature_value: "B".to_string(),
                    group_value: "male".to_string(),
                    count: 2,
                },
            ],
        }
    }

    #[test]
    fn render_table_rows_are_keyed_by_selected_columns() {
        let v = serde_json::to_value(table()).unwrap();
        assert_eq!(v["feature"], "satjob");
        assert_eq!(v["group"], "sex");
        assert_eq!(v["total"], 3);
        assert_eq!(
            v["rows"][1],
            serde_json::json!({"satjob": "B", "sex": "male", "value": 2})
        );
    }

    #[test]
    fn chart_binds_axes_to_selection() {
        let chart = table().chart();
        assert_eq!(chart.x, "satjob");
        assert_eq!(chart.color, "sex");
        assert_eq!(chart.y, "value");
        assert_eq!(chart.hover_data, vec!["satjob", "value", "sex"]);
    }
}
