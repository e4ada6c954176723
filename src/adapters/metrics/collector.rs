//! Prometheus Collector Bridge
//!
//! Adapts `FileCollector` to `prometheus::core::Collector` so it can be
//! registered in a `Registry`. Each `collect` call builds a fresh
//! `MetricFamily`; nothing is cached between scrapes, so concurrent
//! scrapes never observe each other's samples.

use std::collections::HashMap;
use std::sync::Arc;

use prometheus::core::{Collector, Desc};
use prometheus::proto::{Gauge, LabelPair, Metric, MetricFamily, MetricType};

use crate::domain::Sample;
use crate::ports::FileStat;
use crate::usecases::FileCollector;

/// `prometheus` view of a [`FileCollector`].
pub struct FileMtimeCollector<S: FileStat> {
    inner: Arc<FileCollector<S>>,
    desc: Desc,
}

impl<S: FileStat> FileMtimeCollector<S> {
    /// Build the `Desc` from the collector's descriptor.
    ///
    /// # Errors
    /// Fails if the metric or label name is not a valid Prometheus name.
    pub fn new(inner: Arc<FileCollector<S>>) -> prometheus::Result<Self> {
        let descriptor = inner.describe();
        let desc = Desc::new(
            descriptor.name.to_string(),
            descriptor.help.to_string(),
            vec![descriptor.label.to_string()],
            HashMap::new(),
        )?;
        Ok(Self { inner, desc })
    }

    fn gauge(&self, sample: Sample) -> Metric {
        let mut label = LabelPair::default();
        label.set_name(self.inner.describe().label.to_string());
        label.set_value(sample.filename);

        let mut gauge = Gauge::default();
        #[allow(clippy::cast_precision_loss)]
        gauge.set_value(sample.value as f64);

        let mut metric = Metric::default();
        metric.mut_label().push(label);
        metric.set_gauge(gauge);
        metric
    }
}

impl<S: FileStat> Collector for FileMtimeCollector<S> {
    fn desc(&self) -> Vec<&Desc> {
        vec![&self.desc]
    }

    fn collect(&self) -> Vec<MetricFamily> {
        let mut family = MetricFamily::default();
        family.set_name(self.desc.fq_name.clone());
        family.set_help(self.desc.help.clone());
        family.set_field_type(MetricType::GAUGE);

        for sample in self.inner.collect() {
            let metric = self.gauge(sample);
            family.mut_metric().push(metric);
        }

        vec![family]
    }
}
