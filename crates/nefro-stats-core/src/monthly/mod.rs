//! Monthly historical aggregation of laboratory results.
//!
//! The report embeds whatever a [`MonthlyAggregator`] returns under
//! `datosMensuales`. [`CalendarMonthAverages`] is the default; tests and
//! callers with their own series can plug in anything else, including a
//! plain closure.

mod averages;

pub use averages::*;

use serde::{Deserialize, Serialize};

use crate::models::{Analyte, LaboratoriosData};

/// Aggregated laboratory values for one calendar month.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MonthlyRecord {
    /// Month key, `YYYY-MM`
    pub mes: String,
    /// Number of samples that fell in the month
    pub muestras: usize,
    pub hemoglobina: Option<f64>,
    pub hematocrito: Option<f64>,
    pub glicemia: Option<f64>,
    pub urea: Option<f64>,
    pub creatinina: Option<f64>,
    pub albumina: Option<f64>,
    pub calcio: Option<f64>,
    pub fosforo: Option<f64>,
}

impl MonthlyRecord {
    /// Monthly mean for an analyte.
    pub fn value(&self, analyte: Analyte) -> Option<f64> {
        match analyte {
            Analyte::Hemoglobina => self.hemoglobina,
            Analyte::Hematocrito => self.hematocrito,
            Analyte::Glicemia => self.glicemia,
            Analyte::Urea => self.urea,
            Analyte::Creatinina => self.creatinina,
            Analyte::Albumina => self.albumina,
            Analyte::Calcio => self.calcio,
            Analyte::Fosforo => self.fosforo,
        }
    }
}

/// Collaborator that derives the monthly series from the laboratory payload.
pub trait MonthlyAggregator {
    fn aggregate(&self, labs: &LaboratoriosData) -> Vec<MonthlyRecord>;
}

impl<F> MonthlyAggregator for F
where
    F: Fn(&LaboratoriosData) -> Vec<MonthlyRecord>,
{
    fn aggregate(&self, labs: &LaboratoriosData) -> Vec<MonthlyRecord> {
        self(labs)
    }
}
