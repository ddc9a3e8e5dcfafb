use super::{Feature, FieldKind};

/// Label to class code pairs for a single categorical feature.
pub type CategoryTable = &'static [(&'static str, i64)];

pub(super) const GENDER: CategoryTable = &[("Male", 1), ("Female", 0)];
pub(super) const YES_NO: CategoryTable = &[("Yes", 1), ("No", 0)];
pub(super) const EDUCATION: CategoryTable = &[("Graduate", 1), ("Not Graduate", 0)];
pub(super) const PROPERTY_AREA: CategoryTable = &[("Rural", 0), ("Semiurban", 1), ("Urban", 2)];

/// Returns the category table the model was trained with for `feature`, if it is categorical.
pub fn table_for(feature: Feature) -> Option<CategoryTable> {
    match feature.kind() {
        FieldKind::Categorical(table) => Some(table),
        _ => None,
    }
}

/// Exact, case-sensitive lookup of `label` in `table`.
pub fn lookup(table: CategoryTable, label: &str) -> Option<i64> {
    table
        .iter()
        .find(|(name, _)| *name == label)
        .map(|&(_, code)| code)
}
