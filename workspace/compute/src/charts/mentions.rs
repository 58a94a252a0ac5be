use common::{AxisBinding, ChartKind, ChartSpec, Datum, Record, Series, Theme};

use super::{palette, ChartBuilder, CENTERED_TITLE};
use crate::schema::{self, ColumnDef};

pub const TITLE: &str = "¿Cuáles fueron las menciones positivas y negativas por mes?";

/// Positive and negative mentions per month, as side-by-side bars.
#[derive(Debug, Clone, Copy, Default)]
pub struct MentionsBarChart;

/// Value columns, one bar series each
fn value_columns() -> [(ColumnDef, fn(&Record) -> i64); 2] {
    [
        (schema::POSITIVE_MENTIONS, |r: &Record| r.positive_mentions),
        (schema::NEGATIVE_MENTIONS, |r: &Record| r.negative_mentions),
    ]
}

impl ChartBuilder for MentionsBarChart {
    fn id(&self) -> &'static str {
        "mentions-by-month"
    }

    fn build(&self, dataset: &[Record]) -> ChartSpec {
        let color_scale = palette::safe();
        let months: Vec<Datum> = dataset.iter().map(|r| Datum::from(r.month.as_str())).collect();

        let series = value_columns()
            .iter()
            .enumerate()
            .map(|(i, (def, value))| Series {
                name: def.header.to_string(),
                color: color_scale.color_at(i).to_string(),
                x: months.clone(),
                y: dataset.iter().map(|r| value(r) as f64).collect(),
                size: None,
            })
            .collect();

        ChartSpec {
            id: self.id().to_string(),
            kind: ChartKind::GroupedBar,
            title: TITLE.to_string(),
            title_x: CENTERED_TITLE,
            x: AxisBinding::new(schema::MONTH.field, schema::MONTH.header),
            // long-format naming: one shared value axis, series split by variable
            y: AxisBinding::new("value", "value"),
            color: Some(AxisBinding::new("variable", "variable")),
            size: None,
            markers: false,
            color_scale,
            theme: Theme::Ggplot2,
            series,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::forecast_records;
    use common::ScaleKind;

    #[test]
    fn test_two_series_one_bar_per_month_each() {
        let spec = MentionsBarChart.build(&forecast_records());

        assert_eq!(spec.kind, ChartKind::GroupedBar);
        assert_eq!(spec.series.len(), 2);

        let positive = spec.series_named("menciones_positivas").unwrap();
        let negative = spec.series_named("menciones_negativas").unwrap();
        assert_eq!(positive.y, vec![9000.0, 5950.0, 6000.0]);
        assert_eq!(negative.y, vec![6000.0, 11050.0, 6000.0]);
        assert_eq!(positive.x, negative.x);
        assert_eq!(positive.x[1], Datum::from("2024-02"));
    }

    #[test]
    fn test_series_take_distinct_qualitative_colors() {
        let spec = MentionsBarChart.build(&forecast_records());

        assert_eq!(spec.color_scale.kind, ScaleKind::Qualitative);
        assert_eq!(spec.color_scale.name, "Safe");
        assert_ne!(spec.series[0].color, spec.series[1].color);
        assert_eq!(spec.title_x, 0.5);
    }
}
