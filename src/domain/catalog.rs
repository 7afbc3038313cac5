use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DimensionRole {
    Feature,
    Group,
}

impl fmt::Display for DimensionRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DimensionRole::Feature => f.write_str("feature"),
            DimensionRole::Group => f.write_str("group"),
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid {role} dimension: {name} (expected one of: {})", .expected.join(", "))]
pub struct InvalidDimension {
    pub role: DimensionRole,
    pub name: String,
    pub expected: Vec<&'static str>,
}

/// A fixed, finite set of selectable column names.
pub trait Catalog: Copy + Sized + 'static {
    const ROLE: DimensionRole;
    const ALL: &'static [Self];

    fn column(self) -> &'static str;

    fn columns() -> Vec<&'static str> {
        Self::ALL.iter().map(|d| d.column()).collect()
    }

    fn lookup(name: &str) -> Result<Self, InvalidDimension> {
        Self::ALL
            .iter()
            .copied()
            .find(|d| d.column() == name)
            .ok_or_else(|| InvalidDimension {
                role: Self::ROLE,
                name: name.to_string(),
                expected: Self::columns(),
            })
    }
}

/// Opinion questions offered on the x axis of the reactive view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FeatureDimension {
    Satjob,
    Relationship,
    MaleBreadwinner,
    MenBettersuited,
    ChildSuffer,
    MenOverwork,
}

impl Catalog for FeatureDimension {
    const ROLE: DimensionRole = DimensionRole::Feature;
    const ALL: &'static [Self] = &[
        FeatureDimension::Satjob,
        FeatureDimension::Relationship,
        FeatureDimension::MaleBreadwinner,
        FeatureDimension::MenBettersuited,
        FeatureDimension::ChildSuffer,
        FeatureDimension::MenOverwork,
    ];

    fn column(self) -> &'static str {
        match self {
            FeatureDimension::Satjob => "satjob",
            FeatureDimension::Relationship => "relationship",
            FeatureDimension::MaleBreadwinner => "male_breadwinner",
            FeatureDimension::MenBettersuited => "men_bettersuited",
            FeatureDimension::ChildSuffer => "child_suffer",
            FeatureDimension::MenOverwork => "men_overwork",
        }
    }
}

impl FeatureDimension {
    pub fn question(self) -> &'static str {
        match self {
            FeatureDimension::Satjob => "Satisfaction with the work you do",
            FeatureDimension::Relationship => {
                "A working mother can establish just as warm and secure a relationship with her children"
            }
            FeatureDimension::MaleBreadwinner => {
                "Better for the man to achieve outside the home and the woman to take care of the family"
            }
            FeatureDimension::MenBettersuited => {
                "Most men are better suited emotionally for politics than most women"
            }
            FeatureDimension::ChildSuffer => "A preschool child is likely to suffer if the mother works",
            FeatureDimension::MenOverwork => {
                "Family life often suffers because men concentrate too much on their work"
            }
        }
    }
}

/// Demographic categories offered as bar colors in the reactive view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GroupDimension {
    Sex,
    Region,
    Education,
}

impl Catalog for GroupDimension {
    const ROLE: DimensionRole = DimensionRole::Group;
    const ALL: &'static [Self] = &[
        GroupDimension::Sex,
        GroupDimension::Region,
        GroupDimension::Education,
    ];

    fn column(self) -> &'static str {
        match self {
            GroupDimension::Sex => "sex",
            GroupDimension::Region => "region",
            GroupDimension::Education => "education",
        }
    }
}

impl GroupDimension {
    pub fn question(self) -> &'static str {
        match self {
            GroupDimension::Sex => "Respondent's sex",
            GroupDimension::Region => "Region of interview",
            GroupDimension::Education => "Highest year of school completed",
        }
    }
}

impl FromStr for FeatureDimension {
    type Err = InvalidDimension;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s)
    }
}

impl FromStr for GroupDimension {
    type Err = InvalidDimension;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s)
    }
}

impl fmt::Display for FeatureDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

impl fmt::Display for GroupDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

impl Serialize for FeatureDimension {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.column())
    }
}

impl Serialize for GroupDimension {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.column())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_resolves_every_catalog_column() {
        for f in FeatureDimension::ALL {
            assert_eq!(FeatureDimension::lookup(f.column()), Ok(*f));
        }
        for g in GroupDimension::ALL {
            assert_eq!(g.column().parse::<GroupDimension>(), Ok(*g));
        }
    }

    #[test]
    fn catalogs_do_not_accept_each_others_columns() {
        let err = FeatureDimension::lookup("sex").unwrap_err();
        assert_eq!(err.role, DimensionRole::Feature);
        assert_eq!(err.name, "sex");

        let err = GroupDimension::lookup("satjob").unwrap_err();
        assert_eq!(err.role, DimensionRole::Group);
    }

    #[test]
    fn invalid_dimension_message_lists_expected_columns() {
        let err = GroupDimension::lookup("not_a_column").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid group dimension: not_a_column (expected one of: sex, region, education)"
        );
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert!(FeatureDimension::lookup("SATJOB").is_err());
    }
}
