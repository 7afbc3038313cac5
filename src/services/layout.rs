use crate::cli::Metric;
use crate::config::Config;
use crate::domain::catalog::{Catalog, FeatureDimension, GroupDimension};
use crate::domain::models::{CatalogEntry, CatalogReport, DashboardReport, Tab, TabView};
use crate::domain::records::Dataset;
use crate::services::distribution::metric_by_sex;
use crate::services::facets::prestige_facets;
use crate::services::reactive::ReactiveBinding;
use crate::services::summary::means_by_sex;
use crate::services::trend::prestige_income_scatter;

pub const TITLE: &str = "Exploring the American Gender Income Gap";

pub const INTRO: &str = "\
According to analysis by the Pew Research Center in 2023, the gender wage gap has stayed \
fairly steady over the last two decades: women earn roughly 80 percent of what men earn on \
average, although the gap is much narrower for workers between 25 and 34. A 2023 report from \
the U.S. Department of Labor found that education, age and hours explain only part of the \
difference; about 70 percent of it remains unexplained, and at least some of that is related \
to discrimination.

Since 1972 the General Social Survey (GSS), run by NORC at the University of Chicago, has \
asked demographic, behavioral and attitudinal questions to monitor and explain trends in \
opinions, attitudes and behaviors in American society.";

pub fn catalog_report(config: &Config) -> CatalogReport {
    CatalogReport {
        features: FeatureDimension::ALL
            .iter()
            .map(|f| CatalogEntry {
                role: FeatureDimension::ROLE,
                column: f.column().to_string(),
                question: f.question().to_string(),
            })
            .collect(),
        groups: GroupDimension::ALL
            .iter()
            .map(|g| CatalogEntry {
                role: GroupDimension::ROLE,
                column: g.column().to_string(),
                question: g.question().to_string(),
            })
            .collect(),
        default_feature: config.explore.default_feature.clone(),
        default_group: config.explore.default_group.clone(),
    }
}

/// Every tab of the dashboard, the reactive one at its default selection.
pub fn dashboard(dataset: &Dataset, config: &Config) -> anyhow::Result<DashboardReport> {
    let initial = ReactiveBinding::new(dataset).report(
        &config.explore.default_feature,
        &config.explore.default_group,
    )?;

    let tabs = vec![
        Tab {
            label: "Average Metrics by Gender".to_string(),
            heading: "Average Income, Occupational Prestige, Education, and Socioeconomic Index by Gender".to_string(),
            view: TabView::Table {
                rows: means_by_sex(dataset),
            },
        },
        Tab {
            label: "Opinions on Gender Work Roles".to_string(),
            heading: "Opinions Regarding Traditional Gender Work Roles".to_string(),
            view: TabView::Reactive {
                catalog: catalog_report(config),
                initial,
            },
        },
        Tab {
            label: "Income by Occupational Prestige".to_string(),
            heading: "Male and Female Income By Occupational Prestige".to_string(),
            view: TabView::Scatter(prestige_income_scatter(dataset, true)),
        },
        Tab {
            label: "Distribution of Incomes By Gender".to_string(),
            heading: "Male and Female Income".to_string(),
            view: TabView::BoxPlot(metric_by_sex(dataset, Metric::Income)),
        },
        Tab {
            label: "Distribution of Occupational Prestige By Gender".to_string(),
            heading: "Male and Female Occupational Prestige".to_string(),
            view: TabView::BoxPlot(metric_by_sex(dataset, Metric::JobPrestige)),
        },
        Tab {
            label: "Sub-Categories of Occupational Prestige by Gender".to_string(),
            heading: "Exploring Sub-categories of Occupational Prestige by Gender".to_string(),
            view: TabView::Facets(prestige_facets(dataset, config.facets.bins)),
        },
    ];

    Ok(DashboardReport {
        title: TITLE.to_string(),
        intro: INTRO.to_string(),
        tabs,
    })
}
