use serde::{Deserialize, Deserializer};

/// Tri-state field for partial updates of nullable columns.
///
/// - `Unchanged` → key absent from the payload
/// - `SetToNull` → key present with `null`
/// - `SetToValue` → key present with a value
///
/// Fields using it must carry `#[serde(default)]` so an absent key
/// falls back to `Unchanged`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum OptionField<T> {
    #[default]
    Unchanged,
    SetToNull,
    SetToValue(T),
}

impl<'de, T> Deserialize<'de> for OptionField<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<T>::deserialize(deserializer)? {
            None => OptionField::SetToNull,
            Some(value) => OptionField::SetToValue(value),
        })
    }
}

impl<T> OptionField<T> {
    /// Overwrites `target` unless the field is `Unchanged`.
    pub fn apply_to(&self, target: &mut Option<T>)
    where
        T: Clone,
    {
        match self {
            Self::Unchanged => {}
            Self::SetToNull => *target = None,
            Self::SetToValue(v) => *target = Some(v.clone()),
        }
    }
}

pub type PatchString = OptionField<String>;
