use common::{AxisBinding, ChartKind, ChartSpec, Datum, Record, Series, Theme};

use super::{palette, ChartBuilder, CENTERED_TITLE};
use crate::schema;

pub const TITLE: &str = "¿Cómo ha evolucionado la confianza ciudadana en el tiempo?";

/// Trust index over months, drawn as a line with markers.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrustTrendChart;

impl ChartBuilder for TrustTrendChart {
    fn id(&self) -> &'static str {
        "trust-trend"
    }

    fn build(&self, dataset: &[Record]) -> ChartSpec {
        let color_scale = palette::plasma();
        let series = Series {
            name: schema::CITIZEN_TRUST_INDEX.header.to_string(),
            color: color_scale.color_at(0).to_string(),
            x: dataset.iter().map(|r| Datum::from(r.month.as_str())).collect(),
            y: dataset.iter().map(|r| r.citizen_trust_index).collect(),
            size: None,
        };

        ChartSpec {
            id: self.id().to_string(),
            kind: ChartKind::Line,
            title: TITLE.to_string(),
            title_x: CENTERED_TITLE,
            x: AxisBinding::new(schema::MONTH.field, schema::MONTH.header),
            y: AxisBinding::new(
                schema::CITIZEN_TRUST_INDEX.field,
                schema::CITIZEN_TRUST_INDEX.header,
            ),
            color: None,
            size: None,
            markers: true,
            color_scale,
            theme: Theme::Ggplot2,
            series: vec![series],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::forecast_records;
    use crate::testing::sample_record;
    use common::ScaleKind;

    #[test]
    fn test_trend_follows_dataset_order() {
        let mut dataset = vec![sample_record("2023-12", 50.0)];
        dataset.extend(forecast_records());

        let spec = TrustTrendChart.build(&dataset);

        assert_eq!(spec.series.len(), 1);
        let series = &spec.series[0];
        let months: Vec<Datum> = ["2023-12", "2024-01", "2024-02", "2024-03"]
            .iter()
            .map(|m| Datum::from(*m))
            .collect();
        assert_eq!(series.x, months);
        assert_eq!(series.y, vec![50.0, 64.85, 55.18, 61.28]);
    }

    #[test]
    fn test_trend_presentation() {
        let spec = TrustTrendChart.build(&forecast_records());

        assert_eq!(spec.kind, ChartKind::Line);
        assert!(spec.markers);
        assert_eq!(spec.title, TITLE);
        assert_eq!(spec.title_x, 0.5);
        assert_eq!(spec.color_scale.kind, ScaleKind::Sequential);
        assert_eq!(spec.series[0].color, "#0d0887");
        assert_eq!(spec.x.field, "month");
        assert_eq!(spec.y.field, "citizen_trust_index");
    }
}
