//! The canonical report consumed by the spreadsheet export.

use serde::{Deserialize, Serialize};
use serde_json::Number;

use super::{Analyte, NumericValue, ParsedInt};
use crate::monthly::MonthlyRecord;

/// Flat, fixed-shape statistics report.
///
/// Field order here is the serialized key order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsReport {
    pub pacientes_activos: CohortReport,
    pub pacientes_hipertensos: CohortReport,
    pub pacientes_diabeticos: CohortReport,
    pub estado: EstadoCounts,
    pub tipo: TipoDialisisCounts,
    pub acceso_vascular: AccesoVascularCounts,
    pub etnias: EtniaShares,
    pub distribucion_edad: EdadShares,
    pub distribucion_sexo: SexoShares,
    pub laboratorio: LaboratorioPromedios,
    pub datos_mensuales: Vec<MonthlyRecord>,
}

/// Top-level keys of the serialized report, in order.
pub const REPORT_KEYS: [&str; 11] = [
    "pacientesActivos",
    "pacientesHipertensos",
    "pacientesDiabeticos",
    "estado",
    "tipo",
    "accesoVascular",
    "etnias",
    "distribucionEdad",
    "distribucionSexo",
    "laboratorio",
    "datosMensuales",
];

/// Cohort summary with report naming.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CohortReport {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edad_promedio: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hombres: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mujeres: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variacion: Option<Number>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct EstadoCounts {
    pub critico: ParsedInt,
    pub estable: ParsedInt,
    pub mejorando: ParsedInt,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TipoDialisisCounts {
    pub hemodialisis: ParsedInt,
    pub peritoneal: ParsedInt,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccesoVascularCounts {
    #[serde(rename = "cateterPerVA")]
    pub cateter_per_va: ParsedInt,
    #[serde(rename = "cateterTemVA")]
    pub cateter_tem_va: ParsedInt,
    #[serde(rename = "fistulaVA")]
    pub fistula_va: ParsedInt,
}

/// Count and formatted percentage for one demographic category.
///
/// `cantidad` is passed through untouched; `porcentaje` is always a
/// `"<value>%"` string.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DemographicShare {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cantidad: Option<NumericValue>,
    pub porcentaje: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EtniaShares {
    pub caucasico: DemographicShare,
    pub afro: DemographicShare,
    pub asiatico: DemographicShare,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EdadShares {
    #[serde(rename = "rango0a18")]
    pub rango_0_18: DemographicShare,
    #[serde(rename = "rango19a30")]
    pub rango_19_30: DemographicShare,
    #[serde(rename = "rango31a45")]
    pub rango_31_45: DemographicShare,
    #[serde(rename = "rango46a60")]
    pub rango_46_60: DemographicShare,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SexoShares {
    pub hombre: DemographicShare,
    pub mujer: DemographicShare,
}

/// Department averages per analyte.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LaboratorioPromedios {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hemoglobina: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hematocrito: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub glicemia: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub urea: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creatinina: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub albumina: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calcio: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fosforo: Option<Number>,
}

impl LaboratorioPromedios {
    /// Average reported for an analyte.
    pub fn promedio(&self, analyte: Analyte) -> Option<&Number> {
        let value = match analyte {
            Analyte::Hemoglobina => &self.hemoglobina,
            Analyte::Hematocrito => &self.hematocrito,
            Analyte::Glicemia => &self.glicemia,
            Analyte::Urea => &self.urea,
            Analyte::Creatinina => &self.creatinina,
            Analyte::Albumina => &self.albumina,
            Analyte::Calcio => &self.calcio,
            Analyte::Fosforo => &self.fosforo,
        };
        value.as_ref()
    }
}
