use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;
use crate::core::library::LoanStatus;
use crate::utils::date::opt_serializer;

// LoanDto is a data transfer object for Loan service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct LoanDto {
    pub loan_id: String,
    pub isbn: String,
    pub title: String,
    pub reader_id: String,
    pub reader_name: String,
    pub loan_status: LoanStatus,
    pub loan_date: NaiveDate,
    pub due_date: NaiveDate,
    #[serde(default, with = "opt_serializer")]
    pub returned_at: Option<NaiveDateTime>,
}

impl Identifiable for LoanDto {
    fn id(&self) -> String {
        self.loan_id.to_string()
    }
}
