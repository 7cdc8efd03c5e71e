//! Demographics payload (`/demograficos`).

use serde::{Deserialize, Serialize};

use super::{CategoryEntry, NumericValue};

/// A category entry that also carries a percentage share.
pub trait DemographicEntry: CategoryEntry {
    fn porcentaje(&self) -> Option<&NumericValue>;
}

/// Ethnic composition (`Caucasico`, `Afro`, `Asiatico`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EtniaEntry {
    pub etnia: String,
    #[serde(default)]
    pub cantidad: Option<NumericValue>,
    #[serde(default)]
    pub porcentaje: Option<NumericValue>,
}

/// Age bucket (`0-18`, `19-30`, `31-45`, `46-60`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GrupoEdadEntry {
    pub grupo: String,
    #[serde(default)]
    pub cantidad: Option<NumericValue>,
    #[serde(default)]
    pub porcentaje: Option<NumericValue>,
}

/// Sex distribution (`Hombre`, `Mujer`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SexoEntry {
    pub sexo: String,
    #[serde(default)]
    pub cantidad: Option<NumericValue>,
    #[serde(default)]
    pub porcentaje: Option<NumericValue>,
}

macro_rules! demographic_entry {
    ($entry:ty, $key:ident) => {
        impl CategoryEntry for $entry {
            fn category(&self) -> &str {
                &self.$key
            }

            fn cantidad(&self) -> Option<&NumericValue> {
                self.cantidad.as_ref()
            }
        }

        impl DemographicEntry for $entry {
            fn porcentaje(&self) -> Option<&NumericValue> {
                self.porcentaje.as_ref()
            }
        }
    };
}

demographic_entry!(EtniaEntry, etnia);
demographic_entry!(GrupoEdadEntry, grupo);
demographic_entry!(SexoEntry, sexo);

/// Payload of the demographics endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DemograficosData {
    pub composicion_etnica: Vec<EtniaEntry>,
    pub distribucion_edad: Vec<GrupoEdadEntry>,
    pub distribucion_sexo: Vec<SexoEntry>,
}
