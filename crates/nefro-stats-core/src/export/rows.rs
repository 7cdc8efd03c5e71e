//! Flattening the report into spreadsheet rows.

use serde::{Deserialize, Serialize};
use serde_json::Number;

use crate::models::{
    Analyte, CohortReport, DemographicShare, NumericValue, ParsedInt, StatisticsReport,
};

/// One cell triple of the exported sheet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SpreadsheetRow {
    /// Top-level report key (e.g. `pacientesActivos`)
    pub seccion: String,
    /// Leaf path inside the section (e.g. `edadPromedio`, `afro.porcentaje`)
    pub indicador: String,
    /// Rendered value; empty when the source omitted it
    pub valor: String,
}

impl StatisticsReport {
    /// Flatten into one row per leaf value, in report key order.
    pub fn to_rows(&self) -> Vec<SpreadsheetRow> {
        let mut sheet = RowSink::default();

        sheet.cohort("pacientesActivos", &self.pacientes_activos);
        sheet.cohort("pacientesHipertensos", &self.pacientes_hipertensos);
        sheet.cohort("pacientesDiabeticos", &self.pacientes_diabeticos);

        sheet.count("estado", "critico", self.estado.critico);
        sheet.count("estado", "estable", self.estado.estable);
        sheet.count("estado", "mejorando", self.estado.mejorando);

        sheet.count("tipo", "hemodialisis", self.tipo.hemodialisis);
        sheet.count("tipo", "peritoneal", self.tipo.peritoneal);

        let acceso = &self.acceso_vascular;
        sheet.count("accesoVascular", "cateterPerVA", acceso.cateter_per_va);
        sheet.count("accesoVascular", "cateterTemVA", acceso.cateter_tem_va);
        sheet.count("accesoVascular", "fistulaVA", acceso.fistula_va);

        sheet.share("etnias", "caucasico", &self.etnias.caucasico);
        sheet.share("etnias", "afro", &self.etnias.afro);
        sheet.share("etnias", "asiatico", &self.etnias.asiatico);

        let edad = &self.distribucion_edad;
        sheet.share("distribucionEdad", "rango0a18", &edad.rango_0_18);
        sheet.share("distribucionEdad", "rango19a30", &edad.rango_19_30);
        sheet.share("distribucionEdad", "rango31a45", &edad.rango_31_45);
        sheet.share("distribucionEdad", "rango46a60", &edad.rango_46_60);

        sheet.share("distribucionSexo", "hombre", &self.distribucion_sexo.hombre);
        sheet.share("distribucionSexo", "mujer", &self.distribucion_sexo.mujer);

        for analyte in Analyte::ALL {
            sheet.push(
                "laboratorio",
                analyte.name(),
                number_text(self.laboratorio.promedio(analyte)),
            );
        }

        for record in &self.datos_mensuales {
            sheet.push(
                "datosMensuales",
                format!("{}.muestras", record.mes),
                record.muestras.to_string(),
            );
            for analyte in Analyte::ALL {
                let value = record.value(analyte).and_then(Number::from_f64);
                sheet.push(
                    "datosMensuales",
                    format!("{}.{}", record.mes, analyte.name()),
                    number_text(value.as_ref()),
                );
            }
        }

        sheet.rows
    }
}

#[derive(Default)]
struct RowSink {
    rows: Vec<SpreadsheetRow>,
}

impl RowSink {
    fn push(&mut self, seccion: &str, indicador: impl Into<String>, valor: impl Into<String>) {
        self.rows.push(SpreadsheetRow {
            seccion: seccion.to_string(),
            indicador: indicador.into(),
            valor: valor.into(),
        });
    }

    fn cohort(&mut self, seccion: &str, cohort: &CohortReport) {
        self.push(seccion, "total", number_text(cohort.total.as_ref()));
        self.push(seccion, "edadPromedio", number_text(cohort.edad_promedio.as_ref()));
        self.push(seccion, "hombres", number_text(cohort.hombres.as_ref()));
        self.push(seccion, "mujeres", number_text(cohort.mujeres.as_ref()));
        self.push(seccion, "variacion", number_text(cohort.variacion.as_ref()));
    }

    fn count(&mut self, seccion: &str, indicador: &str, value: ParsedInt) {
        self.push(seccion, indicador, value.to_string());
    }

    fn share(&mut self, seccion: &str, categoria: &str, share: &DemographicShare) {
        let cantidad = share
            .cantidad
            .as_ref()
            .map(NumericValue::to_display_string)
            .unwrap_or_default();
        self.push(seccion, format!("{}.cantidad", categoria), cantidad);
        self.push(seccion, format!("{}.porcentaje", categoria), share.porcentaje.clone());
    }
}

fn number_text(value: Option<&Number>) -> String {
    value
        .map(|n| NumericValue::Number(n.clone()).to_display_string())
        .unwrap_or_default()
}
