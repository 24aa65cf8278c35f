//! Query fragments in the MongoDB filter and sort vocabulary.

use serde::{Serialize, Serializer, ser::SerializeMap};
use serde_json::{Map, Value};

pub const FIELD_NAME: &str = "name";
pub const FIELD_OWNER_NAME: &str = "owner.name";
pub const FIELD_DESCRIPTION: &str = "description";
pub const FIELD_COLORSCHEME_NAME: &str = "vimColorSchemes.name";
pub const FIELD_IS_LUA: &str = "vimColorSchemes.isLua";
pub const FIELD_BACKGROUNDS: &str = "vimColorSchemes.backgrounds";
pub const FIELD_WEEK_STARGAZERS: &str = "weekStargazersCount";
pub const FIELD_STARGAZERS: &str = "stargazersCount";
pub const FIELD_CREATED_AT: &str = "githubCreatedAt";

/// Top-level filter document. Every entry is ANDed with the others.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FilterQuery(Map<String, Value>);

impl FilterQuery {
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Set the condition on `field`, replacing any existing one.
    pub fn insert(&mut self, field: impl Into<String>, condition: impl Into<Value>) {
        self.0.insert(field.into(), condition.into());
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl From<FilterQuery> for Value {
    fn from(query: FilterQuery) -> Self {
        Value::Object(query.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_i32(&self) -> i32 {
        match self {
            SortDirection::Asc => 1,
            SortDirection::Desc => -1,
        }
    }
}

/// Single-field sort document, serialized as `{ <field>: 1 | -1 }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortQuery {
    pub field: &'static str,
    pub direction: SortDirection,
}

impl SortQuery {
    pub fn new(field: &'static str, direction: SortDirection) -> Self {
        Self { field, direction }
    }
}

impl Serialize for SortQuery {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.field, &self.direction.as_i32())?;
        map.end()
    }
}

impl From<SortQuery> for Value {
    fn from(query: SortQuery) -> Self {
        let mut map = Map::new();
        map.insert(query.field.to_string(), Value::from(query.direction.as_i32()));
        Value::Object(map)
    }
}

/// Offset and page size for a listing query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaginationQuery {
    pub skip: u64,
    pub limit: u64,
}
