use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Map, Value, json};

use crate::domain::common::ListingConfig;
use crate::domain::page_context::{Editor, Filter, SortOption};

use super::value_objects::{
    FIELD_BACKGROUNDS, FIELD_COLORSCHEME_NAME, FIELD_CREATED_AT, FIELD_DESCRIPTION, FIELD_IS_LUA,
    FIELD_NAME, FIELD_OWNER_NAME, FIELD_STARGAZERS, FIELD_WEEK_STARGAZERS, FilterQuery,
    PaginationQuery, SortDirection, SortQuery,
};

static NON_WORD_CHARACTERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_\s]").expect("search sanitizer pattern is valid"));

const SEARCH_FIELDS: [&str; 4] = [
    FIELD_NAME,
    FIELD_OWNER_NAME,
    FIELD_DESCRIPTION,
    FIELD_COLORSCHEME_NAME,
];

pub struct QueryHelper;

impl QueryHelper {
    /// Filter document for a listing. Absent filter fields add no condition.
    pub fn get_filter_query(filter: &Filter) -> FilterQuery {
        let mut query = Self::get_search_filter_query(filter.search.as_deref());

        match filter.editor {
            Some(Editor::Vim) => query.insert(FIELD_IS_LUA, false),
            Some(Editor::Neovim) => query.insert(FIELD_IS_LUA, true),
            None => {}
        }

        if let Some(background) = filter.background {
            query.insert(FIELD_BACKGROUNDS, background.as_str());
        }

        query
    }

    fn get_search_filter_query(term: Option<&str>) -> FilterQuery {
        let mut query = FilterQuery::new();
        let Some(term) = term.filter(|term| !term.is_empty()) else {
            return query;
        };

        // punctuation would otherwise be read as regex syntax
        let search = NON_WORD_CHARACTERS.replace_all(term, " ");

        let conditions = SEARCH_FIELDS
            .iter()
            .map(|field| {
                let mut condition = Map::new();
                condition.insert(
                    field.to_string(),
                    json!({ "$regex": &*search, "$options": "i" }),
                );
                Value::Object(condition)
            })
            .collect::<Vec<Value>>();
        query.insert("$or", conditions);

        query
    }

    pub fn get_sort_query(sort: SortOption) -> SortQuery {
        match sort {
            SortOption::Trending => SortQuery::new(FIELD_WEEK_STARGAZERS, SortDirection::Desc),
            SortOption::Top => SortQuery::new(FIELD_STARGAZERS, SortDirection::Desc),
            SortOption::New => SortQuery::new(FIELD_CREATED_AT, SortDirection::Desc),
            SortOption::Old => SortQuery::new(FIELD_CREATED_AT, SortDirection::Asc),
        }
    }

    /// Sort document for a raw sort name. Unknown names sort as trending.
    pub fn get_sort_query_by_name(sort: &str) -> SortQuery {
        match sort.parse::<SortOption>() {
            Ok(sort) => Self::get_sort_query(sort),
            Err(_) => Self::get_sort_query(SortOption::Trending),
        }
    }

    pub fn get_pagination_query(filter: &Filter, config: &ListingConfig) -> PaginationQuery {
        let page = u64::from(filter.page.unwrap_or(1).max(1));

        PaginationQuery {
            skip: (page - 1) * config.page_size,
            limit: config.page_size,
        }
    }
}
