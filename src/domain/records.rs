use crate::domain::catalog::{FeatureDimension, GroupDimension};
use serde::Serialize;
use std::borrow::Cow;

/// One cleaned survey respondent.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Record {
    pub id: u64,
    pub weight: Option<f64>,
    pub sex: Option<String>,
    pub education: Option<f64>,
    pub region: Option<String>,
    pub age: Option<f64>,
    pub income: Option<f64>,
    pub job_prestige: Option<f64>,
    pub mother_job_prestige: Option<f64>,
    pub father_job_prestige: Option<f64>,
    pub socioeconomic_index: Option<f64>,
    pub satjob: Option<String>,
    pub relationship: Option<String>,
    pub male_breadwinner: Option<String>,
    pub men_bettersuited: Option<String>,
    pub child_suffer: Option<String>,
    pub men_overwork: Option<String>,
}

impl Record {
    pub fn feature_value(&self, feature: FeatureDimension) -> Option<&str> {
        let value = match feature {
            FeatureDimension::Satjob => &self.satjob,
            FeatureDimension::Relationship => &self.relationship,
            FeatureDimension::MaleBreadwinner => &self.male_breadwinner,
            FeatureDimension::MenBettersuited => &self.men_bettersuited,
            FeatureDimension::ChildSuffer => &self.child_suffer,
            FeatureDimension::MenOverwork => &self.men_overwork,
        };
        value.as_deref()
    }

    /// Education is numeric, so it is rendered as a category label on demand.
    pub fn group_value(&self, group: GroupDimension) -> Option<Cow<'_, str>> {
        match group {
            GroupDimension::Sex => self.sex.as_deref().map(Cow::Borrowed),
            GroupDimension::Region => self.region.as_deref().map(Cow::Borrowed),
            GroupDimension::Education => self.education.map(|e| Cow::Owned(category_label(e))),
        }
    }

    pub fn numeric(&self, column: NumericColumn) -> Option<f64> {
        match column {
            NumericColumn::Weight => self.weight,
            NumericColumn::Education => self.education,
            NumericColumn::Age => self.age,
            NumericColumn::Income => self.income,
            NumericColumn::JobPrestige => self.job_prestige,
            NumericColumn::MotherJobPrestige => self.mother_job_prestige,
            NumericColumn::FatherJobPrestige => self.father_job_prestige,
            NumericColumn::SocioeconomicIndex => self.socioeconomic_index,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NumericColumn {
    Weight,
    Education,
    Age,
    Income,
    JobPrestige,
    MotherJobPrestige,
    FatherJobPrestige,
    SocioeconomicIndex,
}

impl NumericColumn {
    pub const ALL: &'static [NumericColumn] = &[
        NumericColumn::Weight,
        NumericColumn::Education,
        NumericColumn::Age,
        NumericColumn::Income,
        NumericColumn::JobPrestige,
        NumericColumn::MotherJobPrestige,
        NumericColumn::FatherJobPrestige,
        NumericColumn::SocioeconomicIndex,
    ];

    pub fn column(self) -> &'static str {
        match self {
            NumericColumn::Weight => "weight",
            NumericColumn::Education => "education",
            NumericColumn::Age => "age",
            NumericColumn::Income => "income",
            NumericColumn::JobPrestige => "job_prestige",
            NumericColumn::MotherJobPrestige => "mother_job_prestige",
            NumericColumn::FatherJobPrestige => "father_job_prestige",
            NumericColumn::SocioeconomicIndex => "socioeconomic_index",
        }
    }
}

/// Shortest decimal text for a numeric category (`12.0` -> `"12"`).
pub fn category_label(value: f64) -> String {
    format!("{}", value)
}

/// The cleaned survey table. Never mutated after load.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn education_renders_as_integer_label() {
        let r = Record {
            education: Some(12.0),
            ..Default::default()
        };
        assert_eq!(
            r.group_value(GroupDimension::Education).as_deref(),
            Some("12")
        );
        assert_eq!(category_label(12.5), "12.5");
    }

    #[test]
    fn null_categories_stay_null() {
        let r = Record::default();
        assert!(r.feature_value(FeatureDimension::Satjob).is_none());
        assert!(r.group_value(GroupDimension::Sex).is_none());
        assert!(r.group_value(GroupDimension::Education).is_none());
    }
}
