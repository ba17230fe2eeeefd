//! The fixed feature column contract shared by training and serving.
//!
//! Column order and names are an invariant: the trainer assembles its design
//! matrix in [`FEATURE_COLUMNS`] order and the predictor assembles each
//! request row in the same order. Nothing else in the workspace is allowed
//! to hard-code column positions.

/// The eight feature columns, in the order they enter the model.
pub const FEATURE_COLUMNS: [&str; 8] = [
    "MSSubClass",
    "LotArea",
    "HouseStyle",
    "RoofStyle",
    "TotalBsmtSF",
    "FullBath",
    "BedroomAbvGr",
    "GarageCars",
];

/// Columns fitted with a [`crate::encoder::CategoryEncoder`] during training.
///
/// Note that `MSSubClass` is encoded at training time but passed through as
/// a raw integer at serving time; see the predictor for the rationale.
pub const CATEGORICAL_COLUMNS: [&str; 3] = ["MSSubClass", "HouseStyle", "RoofStyle"];

/// Columns standardized by the fitted [`crate::scaler::StandardScaler`].
/// Categorical codes are deliberately not scaled.
pub const NUMERIC_COLUMNS: [&str; 5] = [
    "LotArea",
    "TotalBsmtSF",
    "FullBath",
    "BedroomAbvGr",
    "GarageCars",
];

/// The training target column.
pub const TARGET_COLUMN: &str = "SalePrice";

/// Position of a feature column within [`FEATURE_COLUMNS`].
pub fn column_index(name: &str) -> Option<usize> {
    FEATURE_COLUMNS.iter().position(|c| *c == name)
}

/// Whether a feature column is one of the scaled numeric columns.
pub fn is_numeric(name: &str) -> bool {
    NUMERIC_COLUMNS.contains(&name)
}
