//! Statistics aggregation transform.
//!
//! Reshapes the four source payloads into one [`StatisticsReport`]. The
//! transform is pure: it does no I/O and never fails. Category lists are
//! unordered and may lack any expected category; lookups take the first
//! matching entry and fall back to `0` / `"0%"` at each call site.

mod lookup;

pub use lookup::*;

use tracing::debug;

use crate::models::{
    AccesoVascularCounts, Analyte, CategoryEntry, CohortReport, CohortSummary, DemographicEntry,
    DemographicShare, EdadShares, EstadoCounts, EtniaShares, LaboratorioPromedios,
    LaboratoriosData, NumericValue, ParsedInt, ReportSources, SexoShares, StatisticsReport,
    TipoDialisisCounts,
};
use crate::monthly::MonthlyAggregator;

/// Build the canonical report from already-fetched sources.
pub fn build_report<M>(sources: &ReportSources, monthly: &M) -> StatisticsReport
where
    M: MonthlyAggregator + ?Sized,
{
    let estadisticas = &sources.estadisticas;
    let estados = &sources.estados;
    let demograficos = &sources.demograficos;

    StatisticsReport {
        pacientes_activos: cohort(&estadisticas.pacientes_activos),
        pacientes_hipertensos: cohort(&estadisticas.hipertensos),
        pacientes_diabeticos: cohort(&estadisticas.diabeticos),
        estado: EstadoCounts {
            critico: count_for("estados_clinicos", &estados.estados_clinicos, "Critico"),
            estable: count_for("estados_clinicos", &estados.estados_clinicos, "Estable"),
            mejorando: count_for("estados_clinicos", &estados.estados_clinicos, "Mejorando"),
        },
        tipo: TipoDialisisCounts {
            hemodialisis: count_for("tipo_dialisis", &estados.tipo_dialisis, "Hemodialisis"),
            peritoneal: count_for("tipo_dialisis", &estados.tipo_dialisis, "Peritoneal"),
        },
        acceso_vascular: AccesoVascularCounts {
            cateter_per_va: count_for(
                "accesos_vasculares",
                &estados.accesos_vasculares,
                "cateter-per",
            ),
            cateter_tem_va: count_for(
                "accesos_vasculares",
                &estados.accesos_vasculares,
                "cateter-tem",
            ),
            fistula_va: count_for("accesos_vasculares", &estados.accesos_vasculares, "fistula"),
        },
        etnias: EtniaShares {
            caucasico: share_for(
                "composicion_etnica",
                &demograficos.composicion_etnica,
                "Caucasico",
            ),
            afro: share_for("composicion_etnica", &demograficos.composicion_etnica, "Afro"),
            asiatico: share_for(
                "composicion_etnica",
                &demograficos.composicion_etnica,
                "Asiatico",
            ),
        },
        distribucion_edad: EdadShares {
            rango_0_18: share_for("distribucion_edad", &demograficos.distribucion_edad, "0-18"),
            rango_19_30: share_for("distribucion_edad", &demograficos.distribucion_edad, "19-30"),
            rango_31_45: share_for("distribucion_edad", &demograficos.distribucion_edad, "31-45"),
            rango_46_60: share_for("distribucion_edad", &demograficos.distribucion_edad, "46-60"),
        },
        distribucion_sexo: SexoShares {
            hombre: share_for("distribucion_sexo", &demograficos.distribucion_sexo, "Hombre"),
            mujer: share_for("distribucion_sexo", &demograficos.distribucion_sexo, "Mujer"),
        },
        laboratorio: laboratorio(&sources.laboratorios),
        datos_mensuales: monthly.aggregate(&sources.laboratorios),
    }
}

fn cohort(summary: &CohortSummary) -> CohortReport {
    CohortReport {
        total: summary.total.clone(),
        edad_promedio: summary.edad_promedio.clone(),
        hombres: summary.hombres.clone(),
        mujeres: summary.mujeres.clone(),
        variacion: summary.aumento_periodo.clone(),
    }
}

/// Truncating integer count for `category`, or `0` when the list lacks it
/// or the entry carries no `cantidad`.
fn count_for<E: CategoryEntry>(list_name: &str, list: &[E], category: &str) -> ParsedInt {
    let Some(entry) = find_category(list, |entry| entry.category() == category) else {
        debug!(list = list_name, category, "category missing, counting as 0");
        return ParsedInt::Int(0);
    };

    match entry.cantidad() {
        Some(cantidad) => {
            let parsed = parse_int_truncating(cantidad);
            if parsed.is_nan() {
                debug!(list = list_name, category, "cantidad is not a number");
            }
            parsed
        }
        None => ParsedInt::Int(0),
    }
}

/// Count and percentage for `category`, or `0` / `"0%"` when the list lacks it.
/// A present entry falls back per field.
fn share_for<E: DemographicEntry>(
    list_name: &str,
    list: &[E],
    category: &str,
) -> DemographicShare {
    match find_category(list, |entry| entry.category() == category) {
        Some(entry) => DemographicShare {
            cantidad: entry.cantidad().cloned().or(Some(NumericValue::from(0i64))),
            porcentaje: format_percentage(entry.porcentaje()),
        },
        None => {
            debug!(list = list_name, category, "category missing, using 0 / 0%");
            DemographicShare {
                cantidad: Some(NumericValue::from(0i64)),
                porcentaje: ZERO_PERCENT.to_string(),
            }
        }
    }
}

fn laboratorio(labs: &LaboratoriosData) -> LaboratorioPromedios {
    let promedio = |analyte| labs.average(analyte).promedio.clone();

    LaboratorioPromedios {
        hemoglobina: promedio(Analyte::Hemoglobina),
        hematocrito: promedio(Analyte::Hematocrito),
        glicemia: promedio(Analyte::Glicemia),
        urea: promedio(Analyte::Urea),
        creatinina: promedio(Analyte::Creatinina),
        albumina: promedio(Analyte::Albumina),
        calcio: promedio(Analyte::Calcio),
        fosforo: promedio(Analyte::Fosforo),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EstadoClinicoEntry, SexoEntry};

    fn estado(name: &str, cantidad: Option<NumericValue>) -> EstadoClinicoEntry {
        EstadoClinicoEntry {
            estado: name.to_string(),
            cantidad,
        }
    }

    fn sexo(name: &str, cantidad: NumericValue, porcentaje: NumericValue) -> SexoEntry {
        SexoEntry {
            sexo: name.to_string(),
            cantidad: Some(cantidad),
            porcentaje: Some(porcentaje),
        }
    }

    #[test]
    fn test_count_for_missing_category_is_zero() {
        let list = vec![estado("Estable", Some("5".into()))];
        assert_eq!(count_for("estados_clinicos", &list, "Critico"), ParsedInt::Int(0));
    }

    #[test]
    fn test_count_for_entry_without_cantidad_is_zero() {
        let list = vec![estado("Critico", None)];
        assert_eq!(count_for("estados_clinicos", &list, "Critico"), ParsedInt::Int(0));
    }

    #[test]
    fn test_count_for_non_numeric_cantidad_is_nan() {
        let list = vec![estado("Critico", Some("n/d".into()))];
        assert_eq!(count_for("estados_clinicos", &list, "Critico"), ParsedInt::NotANumber);
    }

    #[test]
    fn test_count_for_uses_first_duplicate() {
        let list = vec![
            estado("Critico", Some(2i64.into())),
            estado("Critico", Some(9i64.into())),
        ];
        assert_eq!(count_for("estados_clinicos", &list, "Critico"), ParsedInt::Int(2));
    }

    #[test]
    fn test_share_for_missing_and_zero_are_identical() {
        let present = vec![sexo("Mujer", 0i64.into(), 0i64.into())];
        let absent: Vec<SexoEntry> = Vec::new();

        let from_zero = share_for("distribucion_sexo", &present, "Mujer");
        let from_missing = share_for("distribucion_sexo", &absent, "Mujer");

        assert_eq!(from_zero, from_missing);
        assert_eq!(from_zero.porcentaje, "0%");
        assert_eq!(from_zero.cantidad, Some(NumericValue::from(0i64)));
    }

    #[test]
    fn test_share_for_keeps_cantidad_as_is() {
        let list = vec![sexo("Hombre", "31".into(), "62.5".into())];
        let share = share_for("distribucion_sexo", &list, "Hombre");

        assert_eq!(share.cantidad, Some(NumericValue::from("31")));
        assert_eq!(share.porcentaje, "62.5%");
    }

    #[test]
    fn test_share_for_entry_without_porcentaje_is_zero_percent() {
        let list = vec![SexoEntry {
            sexo: "Hombre".to_string(),
            cantidad: Some(3i64.into()),
            porcentaje: None,
        }];
        let share = share_for("distribucion_sexo", &list, "Hombre");

        assert_eq!(share.cantidad, Some(NumericValue::from(3i64)));
        assert_eq!(share.porcentaje, "0%");
    }

    #[test]
    fn test_share_for_entry_without_cantidad_is_zero() {
        let list = vec![SexoEntry {
            sexo: "Mujer".to_string(),
            cantidad: None,
            porcentaje: Some("45".into()),
        }];
        let share = share_for("distribucion_sexo", &list, "Mujer");

        assert_eq!(share.cantidad, Some(NumericValue::from(0i64)));
        assert_eq!(share.porcentaje, "45%");
    }
}
