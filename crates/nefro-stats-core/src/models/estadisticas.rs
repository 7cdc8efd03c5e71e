//! Cohort summary payload (`/estadisticas`).

use serde::{Deserialize, Serialize};
use serde_json::Number;

/// Summary statistics for one patient cohort.
///
/// The API always sends every field; a missing one stays `None` and is
/// dropped from the exported report rather than replaced.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CohortSummary {
    #[serde(default)]
    pub total: Option<Number>,
    #[serde(default)]
    pub edad_promedio: Option<Number>,
    #[serde(default)]
    pub hombres: Option<Number>,
    #[serde(default)]
    pub mujeres: Option<Number>,
    /// Change in cohort size over the reporting period
    #[serde(default)]
    pub aumento_periodo: Option<Number>,
}

/// Payload of the statistics endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EstadisticasData {
    pub pacientes_activos: CohortSummary,
    pub hipertensos: CohortSummary,
    pub diabeticos: CohortSummary,
}
