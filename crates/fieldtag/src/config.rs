use serde::{Deserialize, Serialize};

///
/// TagConfig
///
/// Which tag keys carry identity, and how default names are cased.
/// Deserializable so callers can embed it in their own configuration.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct TagConfig {
    /// Key of the marshaling attribute (`json:"name,omitempty"`).
    pub marshal_key: String,

    /// Key of the explicit name attribute; beats the marshaling attribute.
    pub name_key: String,

    /// Convention for names derived from identifiers.
    pub name_case: NameCase,
}

impl TagConfig {
    pub const DEFAULT_MARSHAL_KEY: &'static str = "json";
    pub const DEFAULT_NAME_KEY: &'static str = "name";

    #[must_use]
    pub fn with_marshal_key(mut self, key: impl Into<String>) -> Self {
        self.marshal_key = key.into();
        self
    }

    #[must_use]
    pub fn with_name_key(mut self, key: impl Into<String>) -> Self {
        self.name_key = key.into();
        self
    }

    #[must_use]
    pub const fn with_name_case(mut self, case: NameCase) -> Self {
        self.name_case = case;
        self
    }
}

impl Default for TagConfig {
    fn default() -> Self {
        Self {
            marshal_key: Self::DEFAULT_MARSHAL_KEY.to_string(),
            name_key: Self::DEFAULT_NAME_KEY.to_string(),
            name_case: NameCase::default(),
        }
    }
}

///
/// NameCase
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NameCase {
    #[default]
    Snake,
    Kebab,
    Camel,
    Pascal,
    UpperSnake,
}
