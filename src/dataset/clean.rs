use crate::domain::records::Record;
use serde::Deserialize;
use std::collections::HashSet;

#[derive(thiserror::Error, Debug)]
pub enum DatasetError {
    #[error("unknown text encoding: {0}")]
    UnknownEncoding(String),
    #[error("malformed csv: {0}")]
    Csv(#[from] csv::Error),
    #[error("row {row}: column {column} has non-numeric value {value:?}")]
    InvalidNumber {
        row: usize,
        column: &'static str,
        value: String,
    },
    #[error("row {row}: missing respondent id")]
    MissingId { row: usize },
}

/// Raw GSS columns, keyed by their survey names. Other columns are ignored.
#[derive(Debug, Deserialize)]
struct RawRecord {
    id: Option<String>,
    wtss: Option<String>,
    sex: Option<String>,
    educ: Option<String>,
    region: Option<String>,
    age: Option<String>,
    coninc: Option<String>,
    prestg10: Option<String>,
    mapres10: Option<String>,
    papres10: Option<String>,
    sei10: Option<String>,
    satjob: Option<String>,
    fechld: Option<String>,
    fefam: Option<String>,
    fepol: Option<String>,
    fepresch: Option<String>,
    meovrwrk: Option<String>,
}

const TOP_CODED_AGE: &str = "89 or older";

/// Null spellings recognized in addition to the configured markers when
/// `keep_default_na` is on. Same list pandas' csv reader uses.
pub const DEFAULT_NA_VALUES: &[&str] = &[
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

pub fn decode(bytes: &[u8], label: &str) -> Result<String, DatasetError> {
    let encoding = encoding_rs::Encoding::for_label(label.as_bytes())
        .ok_or_else(|| DatasetError::UnknownEncoding(label.to_string()))?;
    let (text, _, had_errors) = encoding.decode(bytes);
    if had_errors {
        tracing::warn!(encoding = encoding.name(), "replaced undecodable bytes");
    }
    Ok(text.into_owned())
}

struct Cleaner<'a> {
    na_values: HashSet<&'a str>,
}

impl Cleaner<'_> {
    fn text(&self, raw: Option<String>) -> Option<String> {
        let raw = raw?;
        let v = raw.trim();
        if v.is_empty() || self.na_values.contains(v) {
            None
        } else {
            Some(v.to_string())
        }
    }

    fn number(
        &self,
        row: usize,
        column: &'static str,
        raw: Option<String>,
    ) -> Result<Option<f64>, DatasetError> {
        let Some(v) = self.text(raw) else {
            return Ok(None);
        };
        match v.parse::<f64>() {
            Ok(x) if x.is_finite() => Ok(Some(x)),
            Ok(_) => {
                tracing::debug!(row, column, value = %v, "non-finite number read as null");
                Ok(None)
            }
            Err(_) => Err(DatasetError::InvalidNumber { row, column, value: v }),
        }
    }
}

/// Parses GSS csv text into cleaned, renamed records.
///
/// `row` in errors is the 1-based data row (header excluded).
pub fn parse_records(
    text: &str,
    na_values: &[String],
    keep_default_na: bool,
) -> Result<Vec<Record>, DatasetError> {
    let mut markers: HashSet<&str> = na_values.iter().map(|s| s.trim()).collect();
    if keep_default_na {
        markers.extend(DEFAULT_NA_VALUES.iter().copied());
    }
    let cleaner = Cleaner { na_values: markers };
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::Headers)
        .from_reader(text.as_bytes());

    let mut records = Vec::new();
    for (i, raw) in reader.deserialize::<RawRecord>().enumerate() {
        let row = i + 1;
        let raw = raw?;

        let id_text = cleaner
            .text(raw.id)
            .ok_or(DatasetError::MissingId { row })?;
        let id = match id_text.parse::<u64>() {
            Ok(id) => id,
            Err(_) => {
                return Err(DatasetError::InvalidNumber {
                    row,
                    column: "id",
                    value: id_text,
                })
            }
        };

        let age = match cleaner.text(raw.age) {
            Some(a) if a == TOP_CODED_AGE => Some(89.0),
            other => cleaner.number(row, "age", other)?,
        };

        records.push(Record {
            id,
            weight: cleaner.number(row, "weight", raw.wtss)?,
            sex: cleaner.text(raw.sex),
            education: cleaner.number(row, "education", raw.educ)?,
            region: cleaner.text(raw.region),
            age,
            income: cleaner.number(row, "income", raw.coninc)?,
            job_prestige: cleaner.number(row, "job_prestige", raw.prestg10)?,
            mother_job_prestige: cleaner.number(row, "mother_job_prestige", raw.mapres10)?,
            father_job_prestige: cleaner.number(row, "father_job_prestige", raw.papres10)?,
            socioeconomic_index: cleaner.number(row, "socioeconomic_index", raw.sei10)?,
            satjob: cleaner.text(raw.satjob),
            relationship: cleaner.text(raw.fechld),
            male_breadwinner: cleaner.text(raw.fefam),
            men_bettersuited: cleaner.text(raw.fepol),
            child_suffer: cleaner.text(raw.fepresch),
            men_overwork: cleaner.text(raw.meovrwrk),
        });
    }
    Ok(records)
}
