//! Suicide Record
//! A cleaned table row and its bound parameter values.

use crate::store::SqlValue;
use serde::Serialize;

/// One cleaned row of the suicide statistics table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SuicideRecord {
    pub country: String,
    pub year: i32,
    pub sex: String,
    pub age: String,
    pub suicides_no: i32,
    pub population: i32,
    pub suicides_100k_pop: f64,
    pub country_year: String,
    pub hdi_for_year: f64,
    pub gdp_for_year: i64,
    pub gdp_per_capita: f64,
    pub generation: String,
}

impl SuicideRecord {
    /// Append this row's values in table column order.
    pub fn bind(&self, params: &mut Vec<SqlValue>) {
        params.extend([
            SqlValue::Varchar(self.country.clone()),
            SqlValue::Integer(self.year),
            SqlValue::Varchar(self.sex.clone()),
            SqlValue::Varchar(self.age.clone()),
            SqlValue::Integer(self.suicides_no),
            SqlValue::Integer(self.population),
            SqlValue::Double(self.suicides_100k_pop),
            SqlValue::Varchar(self.country_year.clone()),
            SqlValue::Double(self.hdi_for_year),
            SqlValue::BigInt(self.gdp_for_year),
            SqlValue::Double(self.gdp_per_capita),
            SqlValue::Varchar(self.generation.clone()),
        ]);
    }
}
