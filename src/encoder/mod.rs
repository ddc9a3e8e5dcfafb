mod coerce;
mod mapping;

use std::collections::BTreeMap;

use ndarray::{aview2, ArrayView2};
use serde::Deserialize;

pub use coerce::{
    coerce_categorical, coerce_credit_history, coerce_dependents, coerce_numeric, CODE_DEFAULT,
    NUMERIC_DEFAULT,
};
pub use mapping::{lookup, table_for, CategoryTable};

/// The amount of features the classifier was trained on.
pub const N_FEATURES: usize = 11;

/// How the raw value of a feature is coerced. Categorical features carry their table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Numeric,
    Dependents,
    CreditHistory,
    Categorical(CategoryTable),
}

/// The applicant attributes, in the order the classifier expects them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feature {
    Gender,
    Married,
    Dependents,
    Education,
    SelfEmployed,
    ApplicantIncome,
    CoapplicantIncome,
    LoanAmount,
    LoanAmountTerm,
    CreditHistory,
    PropertyArea,
}

impl Feature {
    /// Feature order. Must match the column order used during training.
    pub const ALL: [Feature; N_FEATURES] = [
        Feature::Gender,
        Feature::Married,
        Feature::Dependents,
        Feature::Education,
        Feature::SelfEmployed,
        Feature::ApplicantIncome,
        Feature::CoapplicantIncome,
        Feature::LoanAmount,
        Feature::LoanAmountTerm,
        Feature::CreditHistory,
        Feature::PropertyArea,
    ];

    /// The form field name of this feature.
    pub fn name(self) -> &'static str {
        match self {
            Feature::Gender => "Gender",
            Feature::Married => "Married",
            Feature::Dependents => "Dependents",
            Feature::Education => "Education",
            Feature::SelfEmployed => "Self_Employed",
            Feature::ApplicantIncome => "ApplicantIncome",
            Feature::CoapplicantIncome => "CoapplicantIncome",
            Feature::LoanAmount => "LoanAmount",
            Feature::LoanAmountTerm => "Loan_Amount_Term",
            Feature::CreditHistory => "Credit_History",
            Feature::PropertyArea => "Property_Area",
        }
    }

    pub fn kind(self) -> FieldKind {
        match self {
            Feature::ApplicantIncome
            | Feature::CoapplicantIncome
            | Feature::LoanAmount
            | Feature::LoanAmountTerm => FieldKind::Numeric,
            Feature::Dependents => FieldKind::Dependents,
            Feature::CreditHistory => FieldKind::CreditHistory,
            Feature::Gender => FieldKind::Categorical(mapping::GENDER),
            Feature::Married | Feature::SelfEmployed => FieldKind::Categorical(mapping::YES_NO),
            Feature::Education => FieldKind::Categorical(mapping::EDUCATION),
            Feature::PropertyArea => FieldKind::Categorical(mapping::PROPERTY_AREA),
        }
    }

    /// Encodes the raw value of this feature, applying its fallback policy.
    pub fn encode(self, raw: Option<&str>) -> f64 {
        match self.kind() {
            FieldKind::Numeric => coerce_numeric(raw),
            FieldKind::Dependents => coerce_dependents(raw) as f64,
            FieldKind::CreditHistory => coerce_credit_history(raw) as f64,
            FieldKind::Categorical(table) => coerce_categorical(raw, table) as f64,
        }
    }
}

/// The raw key/value pairs of a submitted form. A repeated field keeps its first value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "Vec<(String, String)>")]
pub struct FormSubmission(BTreeMap<String, String>);

impl FormSubmission {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.0.insert(field.into(), value.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for FormSubmission
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut fields = BTreeMap::new();
        for (k, v) in iter {
            fields.entry(k.into()).or_insert_with(|| v.into());
        }
        Self(fields)
    }
}

impl From<Vec<(String, String)>> for FormSubmission {
    fn from(pairs: Vec<(String, String)>) -> Self {
        pairs.into_iter().collect()
    }
}

/// A single inference sample in feature order. Every value is finite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector {
    values: [f64; N_FEATURES],
}

impl FeatureVector {
    /// The encoded values in feature order.
    pub fn values(&self) -> &[f64; N_FEATURES] {
        &self.values
    }

    /// Views the vector as a `(1, N_FEATURES)` matrix.
    pub fn view(&self) -> ArrayView2<'_, f64> {
        aview2(std::slice::from_ref(&self.values))
    }
}

/// Encodes a form submission into the classifier's input. Never fails, unknown fields are
/// ignored and missing or malformed ones take their fallback value.
pub fn encode(form: &FormSubmission) -> FeatureVector {
    let values = Feature::ALL.map(|feature| feature.encode(form.get(feature.name())));
    FeatureVector { values }
}
