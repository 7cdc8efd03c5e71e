//! Calendar-month averages over the raw laboratory history.

use std::collections::BTreeMap;

use chrono::Datelike;
use tracing::debug;

use super::{MonthlyAggregator, MonthlyRecord};
use crate::models::{Analyte, LabSample, LaboratoriosData};

/// Groups `historial` by calendar month and averages each analyte.
///
/// Months come out in ascending order. An analyte no sample reported in a
/// month is `None` for that month.
#[derive(Debug, Clone, Default)]
pub struct CalendarMonthAverages {
    max_months: Option<usize>,
}

impl CalendarMonthAverages {
    /// Create an aggregator covering the whole history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep only the most recent `months` months.
    pub fn with_max_months(mut self, months: usize) -> Self {
        self.max_months = Some(months);
        self
    }
}

impl MonthlyAggregator for CalendarMonthAverages {
    fn aggregate(&self, labs: &LaboratoriosData) -> Vec<MonthlyRecord> {
        let mut buckets: BTreeMap<(i32, u32), MonthBucket> = BTreeMap::new();

        for sample in &labs.historial {
            buckets
                .entry((sample.fecha.year(), sample.fecha.month()))
                .or_default()
                .add(sample);
        }

        let mut records: Vec<MonthlyRecord> = buckets
            .into_iter()
            .map(|((year, month), bucket)| bucket.finish(year, month))
            .collect();

        if let Some(max) = self.max_months {
            if records.len() > max {
                let dropped = records.len() - max;
                records.drain(..dropped);
                debug!(dropped, max, "trimmed monthly series to window");
            }
        }

        records
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct RunningMean {
    sum: f64,
    count: usize,
}

impl RunningMean {
    fn mean(&self) -> Option<f64> {
        (self.count > 0).then(|| self.sum / self.count as f64)
    }
}

#[derive(Debug, Default)]
struct MonthBucket {
    samples: usize,
    analytes: [RunningMean; 8],
}

impl MonthBucket {
    fn add(&mut self, sample: &LabSample) {
        self.samples += 1;
        for analyte in Analyte::ALL {
            if let Some(value) = sample.value(analyte) {
                let slot = &mut self.analytes[analyte.index()];
                slot.sum += value;
                slot.count += 1;
            }
        }
    }

    fn finish(self, year: i32, month: u32) -> MonthlyRecord {
        let mean = |analyte: Analyte| self.analytes[analyte.index()].mean();
        MonthlyRecord {
            mes: format!("{:04}-{:02}", year, month),
            muestras: self.samples,
            hemoglobina: mean(Analyte::Hemoglobina),
            hematocrito: mean(Analyte::Hematocrito),
            glicemia: mean(Analyte::Glicemia),
            urea: mean(Analyte::Urea),
            creatinina: mean(Analyte::Creatinina),
            albumina: mean(Analyte::Albumina),
            calcio: mean(Analyte::Calcio),
            fosforo: mean(Analyte::Fosforo),
        }
    }
}
