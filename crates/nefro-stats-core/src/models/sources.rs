//! The four fetched payloads a report is built from.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::{DemograficosData, Envelope, EstadisticasData, EstadosData, LaboratoriosData};
use crate::{ReportError, ReportResult};

/// Inputs to [`crate::transform::build_report`], unwrapped from their envelopes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportSources {
    pub estadisticas: EstadisticasData,
    pub estados: EstadosData,
    pub demograficos: DemograficosData,
    pub laboratorios: LaboratoriosData,
}

impl ReportSources {
    /// Parse the four raw `{ "data": ... }` response bodies.
    ///
    /// Any structural problem, including a missing or `null` category list,
    /// is reported as [`ReportError::MalformedInput`] naming the envelope.
    pub fn from_json_strs(
        estadisticas: &str,
        estados: &str,
        demograficos: &str,
        laboratorios: &str,
    ) -> ReportResult<Self> {
        Ok(Self {
            estadisticas: parse_envelope("estadisticas", estadisticas)?,
            estados: parse_envelope("estados", estados)?,
            demograficos: parse_envelope("demograficos", demograficos)?,
            laboratorios: parse_envelope("laboratorios", laboratorios)?,
        })
    }

    /// Same as [`ReportSources::from_json_strs`] for already-decoded bodies.
    pub fn from_values(
        estadisticas: serde_json::Value,
        estados: serde_json::Value,
        demograficos: serde_json::Value,
        laboratorios: serde_json::Value,
    ) -> ReportResult<Self> {
        Ok(Self {
            estadisticas: unwrap_envelope("estadisticas", estadisticas)?,
            estados: unwrap_envelope("estados", estados)?,
            demograficos: unwrap_envelope("demograficos", demograficos)?,
            laboratorios: unwrap_envelope("laboratorios", laboratorios)?,
        })
    }
}

fn parse_envelope<T: DeserializeOwned>(envelope: &'static str, body: &str) -> ReportResult<T> {
    serde_json::from_str::<Envelope<T>>(body)
        .map(|e| e.data)
        .map_err(|e| ReportError::MalformedInput {
            envelope,
            message: e.to_string(),
        })
}

fn unwrap_envelope<T: DeserializeOwned>(
    envelope: &'static str,
    body: serde_json::Value,
) -> ReportResult<T> {
    serde_json::from_value::<Envelope<T>>(body)
        .map(|e| e.data)
        .map_err(|e| ReportError::MalformedInput {
            envelope,
            message: e.to_string(),
        })
}
