//! Report dispatch: a report token selects one stored procedure taking (start, end).

use crate::backend::{Backend, BindValue, Row};
use crate::error::AppError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReportProcedure {
    /// Path segment that selects the report.
    pub token: &'static str,
    pub procedure: &'static str,
    pub arity: usize,
}

pub const REPORTS: &[ReportProcedure] = &[
    // Sold pets between two dates.
    ReportProcedure {
        token: "IzvjestajProdanihLjubimaca",
        procedure: "IzvjestajProdanihLjubimaca",
        arity: 2,
    },
    // Acquired pets grouped by supplier.
    ReportProcedure {
        token: "PregledNabavljenihLjubimacaPoDobavljacu",
        procedure: "PregledNabavljenihLjubimacaPoDobavljacu",
        arity: 2,
    },
    // Sales summary.
    ReportProcedure {
        token: "ZbirniPregledProdajeLjubimaca",
        procedure: "ZbirniPregledProdajeLjubimaca",
        arity: 2,
    },
];

pub struct ReportDispatcher;

impl ReportDispatcher {
    pub fn resolve(token: &str) -> Result<&'static ReportProcedure, AppError> {
        REPORTS
            .iter()
            .find(|r| r.token == token)
            .ok_or_else(|| AppError::InvalidInput("Invalid report type".into()))
    }

    /// Run the report selected by `token`. Bounds go through untouched; a missing
    /// bound is passed as NULL and left for the procedure to judge.
    pub async fn run(
        backend: &dyn Backend,
        token: &str,
        start: Option<String>,
        end: Option<String>,
    ) -> Result<Vec<Row>, AppError> {
        let report = Self::resolve(token)?;
        let params = [BindValue::from(start), BindValue::from(end)];
        debug_assert_eq!(params.len(), report.arity);
        tracing::debug!(report = report.token, procedure = report.procedure, "running report");
        backend.call_procedure(report.procedure, &params).await
    }
}
