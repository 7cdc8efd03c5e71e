//! Laboratory payload (`/laboratorios`).

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Number;

/// The analytes tracked by the department.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Analyte {
    Hemoglobina,
    Hematocrito,
    Glicemia,
    Urea,
    Creatinina,
    Albumina,
    Calcio,
    Fosforo,
}

impl Analyte {
    /// All analytes in report order.
    pub const ALL: [Analyte; 8] = [
        Analyte::Hemoglobina,
        Analyte::Hematocrito,
        Analyte::Glicemia,
        Analyte::Urea,
        Analyte::Creatinina,
        Analyte::Albumina,
        Analyte::Calcio,
        Analyte::Fosforo,
    ];

    /// Field name used by the API and the report.
    pub fn name(&self) -> &'static str {
        match self {
            Analyte::Hemoglobina => "hemoglobina",
            Analyte::Hematocrito => "hematocrito",
            Analyte::Glicemia => "glicemia",
            Analyte::Urea => "urea",
            Analyte::Creatinina => "creatinina",
            Analyte::Albumina => "albumina",
            Analyte::Calcio => "calcio",
            Analyte::Fosforo => "fosforo",
        }
    }

    /// Position in [`Analyte::ALL`].
    pub fn index(&self) -> usize {
        *self as usize
    }
}

/// Department-wide average for one analyte.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LabAverage {
    #[serde(default)]
    pub promedio: Option<Number>,
}

/// One dated laboratory sample from the raw history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LabSample {
    /// Accepts `YYYY-MM-DD`, RFC 3339, or a naive `YYYY-MM-DDTHH:MM:SS` timestamp
    #[serde(deserialize_with = "deserialize_fecha")]
    pub fecha: NaiveDate,
    #[serde(default)]
    pub hemoglobina: Option<f64>,
    #[serde(default)]
    pub hematocrito: Option<f64>,
    #[serde(default)]
    pub glicemia: Option<f64>,
    #[serde(default)]
    pub urea: Option<f64>,
    #[serde(default)]
    pub creatinina: Option<f64>,
    #[serde(default)]
    pub albumina: Option<f64>,
    #[serde(default)]
    pub calcio: Option<f64>,
    #[serde(default)]
    pub fosforo: Option<f64>,
}

impl LabSample {
    /// Create an empty sample for a date.
    pub fn new(fecha: NaiveDate) -> Self {
        Self {
            fecha,
            hemoglobina: None,
            hematocrito: None,
            glicemia: None,
            urea: None,
            creatinina: None,
            albumina: None,
            calcio: None,
            fosforo: None,
        }
    }

    /// Builder-style setter for one analyte.
    pub fn with(mut self, analyte: Analyte, value: f64) -> Self {
        *self.slot_mut(analyte) = Some(value);
        self
    }

    /// Reported value for an analyte.
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

    fn slot_mut(&mut self, analyte: Analyte) -> &mut Option<f64> {
        match analyte {
            Analyte::Hemoglobina => &mut self.hemoglobina,
            Analyte::Hematocrito => &mut self.hematocrito,
            Analyte::Glicemia => &mut self.glicemia,
            Analyte::Urea => &mut self.urea,
            Analyte::Creatinina => &mut self.creatinina,
            Analyte::Albumina => &mut self.albumina,
            Analyte::Calcio => &mut self.calcio,
            Analyte::Fosforo => &mut self.fosforo,
        }
    }
}

fn deserialize_fecha<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
    let raw = String::deserialize(deserializer)?;
    parse_fecha(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid sample date: {}", raw)))
}

fn parse_fecha(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|dt| dt.date())
        })
}

/// Payload of the laboratory endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LaboratoriosData {
    pub hemoglobina: LabAverage,
    pub hematocrito: LabAverage,
    pub glicemia: LabAverage,
    pub urea: LabAverage,
    pub creatinina: LabAverage,
    pub albumina: LabAverage,
    pub calcio: LabAverage,
    pub fosforo: LabAverage,
    /// Raw time series consumed by the monthly aggregation
    #[serde(default)]
    pub historial: Vec<LabSample>,
}

impl LaboratoriosData {
    /// Department average for an analyte.
    pub fn average(&self, analyte: Analyte) -> &LabAverage {
        match analyte {
            Analyte::Hemoglobina => &self.hemoglobina,
            Analyte::Hematocrito => &self.hematocrito,
            Analyte::Glicemia => &self.glicemia,
            Analyte::Urea => &self.urea,
            Analyte::Creatinina => &self.creatinina,
            Analyte::Albumina => &self.albumina,
            Analyte::Calcio => &self.calcio,
            Analyte::Fosforo => &self.fosforo,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fecha_formats() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();

        assert_eq!(parse_fecha("2024-03-15"), Some(expected));
        assert_eq!(parse_fecha("2024-03-15T08:30:00Z"), Some(expected));
        assert_eq!(parse_fecha("2024-03-15T08:30:00.123"), Some(expected));
        assert_eq!(parse_fecha("15/03/2024"), None);
    }

    #[test]
    fn test_sample_accessors() {
        let fecha = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        let sample = LabSample::new(fecha).with(Analyte::Urea, 48.5);

        assert_eq!(sample.value(Analyte::Urea), Some(48.5));
        assert_eq!(sample.value(Analyte::Calcio), None);
    }

    #[test]
    fn test_historial_defaults_to_empty() {
        let json = r#"{
            "hemoglobina": {"promedio": 11.2}, "hematocrito": {"promedio": 33},
            "glicemia": {"promedio": 102}, "urea": {"promedio": 45},
            "creatinina": {"promedio": 6.1}, "albumina": {"promedio": 3.8},
            "calcio": {"promedio": 9.1}, "fosforo": {"promedio": 4.9}
        }"#;

        let labs: LaboratoriosData = serde_json::from_str(json).unwrap();

        assert!(labs.historial.is_empty());
        assert_eq!(labs.average(Analyte::Hematocrito).promedio, Some(33.into()));
    }

    #[test]
    fn test_analyte_order_matches_index() {
        for (i, analyte) in Analyte::ALL.iter().enumerate() {
            assert_eq!(analyte.index(), i);
        }
    }
}
