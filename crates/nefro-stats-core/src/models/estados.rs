//! Clinical state payload (`/estados`).

use serde::{Deserialize, Serialize};

use super::NumericValue;

/// An entry in one of the unordered category/count lists.
pub trait CategoryEntry {
    /// The category tag this entry is keyed by.
    fn category(&self) -> &str;

    /// The raw count, if the API sent one.
    fn cantidad(&self) -> Option<&NumericValue>;
}

/// Patients per clinical status (`Critico`, `Estable`, `Mejorando`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EstadoClinicoEntry {
    pub estado: String,
    #[serde(default)]
    pub cantidad: Option<NumericValue>,
}

/// Patients per dialysis modality (`Hemodialisis`, `Peritoneal`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TipoDialisisEntry {
    pub tipo: String,
    #[serde(default)]
    pub cantidad: Option<NumericValue>,
}

/// Patients per vascular access (`cateter-per`, `cateter-tem`, `fistula`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AccesoVascularEntry {
    pub acceso: String,
    #[serde(default)]
    pub cantidad: Option<NumericValue>,
}

impl CategoryEntry for EstadoClinicoEntry {
    fn category(&self) -> &str {
        &self.estado
    }

    fn cantidad(&self) -> Option<&NumericValue> {
        self.cantidad.as_ref()
    }
}

impl CategoryEntry for TipoDialisisEntry {
    fn category(&self) -> &str {
        &self.tipo
    }

    fn cantidad(&self) -> Option<&NumericValue> {
        self.cantidad.as_ref()
    }
}

impl CategoryEntry for AccesoVascularEntry {
    fn category(&self) -> &str {
        &self.acceso
    }

    fn cantidad(&self) -> Option<&NumericValue> {
        self.cantidad.as_ref()
    }
}

/// Payload of the clinical-state endpoint.
///
/// All three lists are required; an empty list is fine, a missing one is
/// malformed input.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct EstadosData {
    pub estados_clinicos: Vec<EstadoClinicoEntry>,
    pub tipo_dialisis: Vec<TipoDialisisEntry>,
    pub accesos_vasculares: Vec<AccesoVascularEntry>,
}
