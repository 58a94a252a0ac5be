use common::{
    AxisBinding, ChartKind, ChartSpec, CrisisFlag, Datum, Record, Series, SizeEncoding, Theme,
};

use super::{palette, ChartBuilder, CENTERED_TITLE};
use crate::schema;

pub const TITLE: &str = "¿Cómo influye el tiempo de respuesta y las crisis en la confianza?";

/// Largest marker diameter in pixels when none is configured.
pub const DEFAULT_MAX_DIAMETER: f64 = 20.0;

/// Response time against trust index, one series per crisis flag, point area
/// proportional to the mention volume.
#[derive(Debug, Clone, Copy)]
pub struct ResponseScatterChart {
    max_diameter: f64,
}

impl Default for ResponseScatterChart {
    fn default() -> Self {
        Self {
            max_diameter: DEFAULT_MAX_DIAMETER,
        }
    }
}

impl ResponseScatterChart {
    pub fn with_max_diameter(max_diameter: f64) -> Self {
        Self { max_diameter }
    }

    /// Area sizing reference: the largest value is drawn `max_diameter` wide.
    fn size_reference(&self, dataset: &[Record]) -> f64 {
        let max = dataset
            .iter()
            .map(|r| r.mention_volume as f64)
            .fold(0.0_f64, f64::max);
        if max > 0.0 {
            2.0 * max / (self.max_diameter * self.max_diameter)
        } else {
            1.0
        }
    }
}

/// Crisis flags in order of first appearance.
fn crisis_groups(dataset: &[Record]) -> Vec<CrisisFlag> {
    let mut groups = Vec::new();
    for record in dataset {
        if !groups.contains(&record.crisis_detected) {
            groups.push(record.crisis_detected);
        }
    }
    groups
}

impl ChartBuilder for ResponseScatterChart {
    fn id(&self) -> &'static str {
        "response-vs-trust"
    }

    fn build(&self, dataset: &[Record]) -> ChartSpec {
        let color_scale = palette::safe();

        let series = crisis_groups(dataset)
            .into_iter()
            .enumerate()
            .map(|(i, flag)| {
                let members: Vec<&Record> = dataset
                    .iter()
                    .filter(|r| r.crisis_detected == flag)
                    .collect();
                Series {
                    name: flag.label().to_string(),
                    color: color_scale.color_at(i).to_string(),
                    x: members
                        .iter()
                        .map(|r| Datum::from(r.response_time_hours))
                        .collect(),
                    y: members.iter().map(|r| r.citizen_trust_index).collect(),
                    size: Some(members.iter().map(|r| r.mention_volume as f64).collect()),
                }
            })
            .collect();

        ChartSpec {
            id: self.id().to_string(),
            kind: ChartKind::Scatter,
            title: TITLE.to_string(),
            title_x: CENTERED_TITLE,
            x: AxisBinding::new(
                schema::RESPONSE_TIME_HOURS.field,
                schema::RESPONSE_TIME_HOURS.header,
            ),
            y: AxisBinding::new(
                schema::CITIZEN_TRUST_INDEX.field,
                schema::CITIZEN_TRUST_INDEX.header,
            ),
            color: Some(AxisBinding::new(
                schema::CRISIS_DETECTED.field,
                schema::CRISIS_DETECTED.header,
            )),
            size: Some(SizeEncoding {
                binding: AxisBinding::new(
                    schema::MENTION_VOLUME.field,
                    schema::MENTION_VOLUME.header,
                ),
                max_diameter: self.max_diameter,
                reference: self.size_reference(dataset),
            }),
            markers: true,
            color_scale,
            theme: Theme::Ggplot2,
            series,
        }
    }
}
