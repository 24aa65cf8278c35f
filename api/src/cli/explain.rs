use serde::Serialize;
use tracing::debug;
use vimcolorschemes_core::domain::{
    common::ListingConfig,
    page_context::{PageContext, PageContextHelper},
    query::{FilterQuery, PaginationQuery, QueryHelper, SortQuery},
};

#[derive(Debug, Serialize)]
pub struct ExplainReport {
    pub context: PageContext,
    pub title: String,
    /// Canonical form of the requested path
    pub path: String,
    pub filter: FilterQuery,
    pub sort: SortQuery,
    pub pagination: PaginationQuery,
}

pub fn explain(path: &str, config: &ListingConfig) -> ExplainReport {
    let segments = path.split('/').filter(|segment| !segment.is_empty());
    let context = PageContextHelper::get(segments);
    debug!("Parsed {:?} into {:?}", path, context);

    ExplainReport {
        title: PageContextHelper::get_page_title(&context),
        path: PageContextHelper::to_path(&context),
        filter: QueryHelper::get_filter_query(&context.filter),
        sort: QueryHelper::get_sort_query(context.sort),
        pagination: QueryHelper::get_pagination_query(&context.filter, config),
        context,
    }
}
