//! Request parameter rules
//!
//! Rules run in declaration order and every failed rule yields one
//! [`FieldError`]; nothing short-circuits. A missing parameter therefore
//! reports both "required" and "numeric", in that order.

use serde::Serialize;

use crate::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    Params,
    Query,
}

/// One violated rule, as rendered inside `{ "errores": [...] }`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    #[serde(rename = "type")]
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    pub msg: String,
    pub path: String,
    pub location: Location,
}

impl FieldError {
    fn new(field: &str, value: Option<&str>, location: Location, msg: String) -> Self {
        Self {
            kind: "field",
            value: value.map(str::to_string),
            msg,
            path: field.to_string(),
            location,
        }
    }
}

/// `[+-]?([0-9]*\.)?[0-9]+`: optional sign, optional integer part with a
/// dot, at least one trailing digit.
pub fn is_numeric(value: &str) -> bool {
    let unsigned = value
        .strip_prefix(|c: char| c == '+' || c == '-')
        .unwrap_or(value);
    let (integer, fraction) = unsigned.split_once('.').unwrap_or(("", unsigned));

    !fraction.is_empty()
        && integer.bytes().all(|b| b.is_ascii_digit())
        && fraction.bytes().all(|b| b.is_ascii_digit())
}

#[derive(Debug, Default)]
struct Rules {
    errors: Vec<FieldError>,
}

impl Rules {
    fn required(&mut self, field: &str, value: Option<&str>, location: Location) -> &mut Self {
        if value.map_or(true, str::is_empty) {
            self.errors.push(FieldError::new(
                field,
                value,
                location,
                format!("El parámetro {field} es requerido."),
            ));
        }
        self
    }

    fn numeric(&mut self, field: &str, value: Option<&str>, location: Location) -> &mut Self {
        if !value.is_some_and(is_numeric) {
            self.errors.push(FieldError::new(
                field,
                value,
                location,
                format!("El parámetro {field} debe ser un número."),
            ));
        }
        self
    }

    fn finish(self) -> Result<(), AppError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(self.errors))
        }
    }
}

/// A parameter the extractor could not decode at all (e.g. invalid UTF-8).
/// Reported like a failed numeric rule, without echoing the value.
pub fn unreadable_param(field: &str, location: Location) -> AppError {
    AppError::Validation(vec![FieldError::new(
        field,
        None,
        location,
        format!("El parámetro {field} debe ser un número."),
    )])
}

/// `GET /products/:id` — the id must look numeric.
pub fn validate_get_product_by_id(id: &str) -> Result<(), AppError> {
    let mut rules = Rules::default();
    rules.numeric("id", Some(id), Location::Params);
    rules.finish()
}

/// `GET /products/compare` — both ids required and numeric, id1 first.
pub fn validate_compare_products(id1: Option<&str>, id2: Option<&str>) -> Result<(), AppError> {
    let mut rules = Rules::default();
    rules
        .required("id1", id1, Location::Query)
        .numeric("id1", id1, Location::Query)
        .required("id2", id2, Location::Query)
        .numeric("id2", id2, Location::Query);
    rules.finish()
}
