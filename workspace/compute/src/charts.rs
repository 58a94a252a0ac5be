pub mod mentions;
pub mod palette;
pub mod scatter;
pub mod trend;

use common::{ChartSpec, Record};
use tracing::{debug, instrument};

pub use mentions::MentionsBarChart;
pub use scatter::ResponseScatterChart;
pub use trend::TrustTrendChart;

/// Horizontal position that centers a chart title.
pub const CENTERED_TITLE: f64 = 0.5;

/// Maps the Working Dataset to one chart specification.
///
/// Builders are pure: they only read the records and never depend on each other.
pub trait ChartBuilder: Send + Sync {
    /// Identifier of the produced chart
    fn id(&self) -> &'static str;

    /// Builds the chart for the given records, one mark per record per series.
    fn build(&self, dataset: &[Record]) -> ChartSpec;
}

/// The dashboard charts, in page order.
pub fn default_builders() -> Vec<Box<dyn ChartBuilder>> {
    vec![
        Box::new(TrustTrendChart),
        Box::new(MentionsBarChart),
        Box::new(ResponseScatterChart::default()),
    ]
}

/// Runs every builder over the dataset.
#[instrument(skip(builders, dataset), fields(records = dataset.len()))]
pub fn build_charts(builders: &[Box<dyn ChartBuilder>], dataset: &[Record]) -> Vec<ChartSpec> {
    builders
        .iter()
        .map(|builder| {
            let spec = builder.build(dataset);
            debug!("Built chart {} with {} marks", spec.id, spec.mark_count());
            spec
        })
        .collect()
}
