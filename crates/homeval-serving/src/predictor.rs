//! The inference pipeline.
//!
//! [`predict`] is a pure function of the loaded bundle and one request:
//! coerce, encode, assemble in training column order, scale with the
//! training-time statistics, predict. No side effects, safe to call
//! concurrently, identical inputs give identical outputs.

use crate::error::{ServingError, ServingResult};
use homeval_data::FEATURE_COLUMNS;
use homeval_training::model::Regressor;
use homeval_training::ArtifactBundle;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One raw prediction request, already coerced to semantic types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRequest {
    /// Building class code.
    #[serde(rename = "MSSubClass")]
    pub ms_sub_class: i64,
    /// Lot size in square feet.
    #[serde(rename = "LotArea")]
    pub lot_area: f64,
    /// Dwelling style label.
    #[serde(rename = "HouseStyle")]
    pub house_style: String,
    /// Roof style label.
    #[serde(rename = "RoofStyle")]
    pub roof_style: String,
    /// Basement area in square feet.
    #[serde(rename = "TotalBsmtSF")]
    pub total_bsmt_sf: f64,
    /// Full bathrooms above grade.
    #[serde(rename = "FullBath")]
    pub full_bath: i64,
    /// Bedrooms above grade.
    #[serde(rename = "BedroomAbvGr")]
    pub bedroom_abv_gr: i64,
    /// Garage capacity in cars.
    #[serde(rename = "GarageCars")]
    pub garage_cars: i64,
}

impl PredictionRequest {
    /// Coerce raw form/query fields into a typed request.
    ///
    /// # Errors
    ///
    /// Returns [`ServingError::InvalidField`] naming the first field that is
    /// missing or fails type coercion. This is caller input error, not a
    /// system fault.
    pub fn from_fields(fields: &HashMap<String, String>) -> ServingResult<Self> {
        Ok(Self {
            ms_sub_class: parse_field(fields, "MSSubClass")?,
            lot_area: parse_field(fields, "LotArea")?,
            house_style: raw_field(fields, "HouseStyle")?.to_string(),
            roof_style: raw_field(fields, "RoofStyle")?.to_string(),
            total_bsmt_sf: parse_field(fields, "TotalBsmtSF")?,
            full_bath: parse_field(fields, "FullBath")?,
            bedroom_abv_gr: parse_field(fields, "BedroomAbvGr")?,
            garage_cars: parse_field(fields, "GarageCars")?,
        })
    }
}

fn raw_field<'a>(fields: &'a HashMap<String, String>, name: &str) -> ServingResult<&'a str> {
    fields
        .get(name)
        .map(String::as_str)
        .ok_or_else(|| ServingError::invalid_field(name, "missing"))
}

fn parse_field<T: std::str::FromStr>(
    fields: &HashMap<String, String>,
    name: &str,
) -> ServingResult<T>
where
    T::Err: std::fmt::Display,
{
    raw_field(fields, name)?
        .parse::<T>()
        .map_err(|e| ServingError::invalid_field(name, e.to_string()))
}

/// Run the encode -> scale -> predict sequence for one request.
///
/// # Errors
///
/// Returns [`ServingError::UnknownLabel`] when `HouseStyle` or `RoofStyle`
/// is outside the fitted vocabulary.
pub fn predict(bundle: &ArtifactBundle, request: &PredictionRequest) -> ServingResult<f64> {
    let house_style = encode_field(bundle, "HouseStyle", &request.house_style)?;
    let roof_style = encode_field(bundle, "RoofStyle", &request.roof_style)?;

    let mut row = Vec::with_capacity(FEATURE_COLUMNS.len());
    for &col in &FEATURE_COLUMNS {
        let value = match col {
            // MSSubClass was encoded through a fitted encoder at training
            // time but is passed through as the raw class code here. The
            // mismatch is inherited from the original pipeline and kept
            // as-is; see DESIGN.md.
            "MSSubClass" => request.ms_sub_class as f64,
            "LotArea" => request.lot_area,
            "HouseStyle" => house_style as f64,
            "RoofStyle" => roof_style as f64,
            "TotalBsmtSF" => request.total_bsmt_sf,
            "FullBath" => request.full_bath as f64,
            "BedroomAbvGr" => request.bedroom_abv_gr as f64,
            "GarageCars" => request.garage_cars as f64,
            other => {
                return Err(ServingError::server(format!(
                    "unmapped feature column '{other}'"
                )))
            }
        };
        // The scaler only touches the five fitted numeric fields; codes and
        // the raw class pass through unchanged.
        row.push(bundle.scaler.transform(col, value));
    }

    Ok(bundle.model.predict_row(&row))
}

fn encode_field(bundle: &ArtifactBundle, field: &str, label: &str) -> ServingResult<usize> {
    let encoder = bundle
        .encoder(field)
        .ok_or_else(|| ServingError::server(format!("no encoder loaded for '{field}'")))?;
    Ok(encoder.encode(label)?)
}
