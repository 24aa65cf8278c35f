use tracing::debug;

use crate::domain::url::URLHelper;

use super::entities::{Background, Editor, Filter, PageContext, SortOption};

const EDITOR_PREFIX: &str = "e";
const BACKGROUND_PREFIX: &str = "b";
const SEARCH_PREFIX: &str = "s";
const PAGE_PREFIX: &str = "p";

pub struct PageContextHelper;

impl PageContextHelper {
    /// Build a page context from listing path segments, e.g.
    /// `["top", "e.neovim", "b.dark", "p.2"]`.
    ///
    /// The first segment is the sort option and falls back to trending.
    /// Each remaining segment is a `<prefix>.<value>` filter; unknown
    /// prefixes and values are skipped. A later filter replaces an earlier
    /// one with the same prefix.
    pub fn get<I>(tokens: I) -> PageContext
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut tokens = tokens.into_iter();

        let sort = match tokens.next() {
            Some(token) => {
                let token = token.as_ref();
                token.parse::<SortOption>().unwrap_or_else(|_| {
                    debug!("Unknown sort option {:?}, using trending", token);
                    SortOption::default()
                })
            }
            None => SortOption::default(),
        };

        let mut filter = Filter::default();
        for token in tokens {
            Self::apply_filter_token(&mut filter, token.as_ref());
        }

        PageContext::new(sort, filter)
    }

    fn apply_filter_token(filter: &mut Filter, token: &str) {
        let Some((prefix, value)) = token.split_once('.') else {
            debug!("Ignoring path segment without filter prefix: {:?}", token);
            return;
        };

        match prefix {
            EDITOR_PREFIX => match value.parse::<Editor>() {
                Ok(editor) => filter.editor = Some(editor),
                Err(e) => debug!("Ignoring editor filter: {}", e),
            },
            BACKGROUND_PREFIX => match value.parse::<Background>() {
                Ok(background) => filter.background = Some(background),
                Err(e) => debug!("Ignoring background filter: {}", e),
            },
            SEARCH_PREFIX => {
                let search = URLHelper::decode(value).unwrap_or_else(|e| {
                    debug!("Keeping undecodable search term {:?} as is: {}", value, e);
                    value.to_string()
                });
                filter.search = Some(search);
            }
            PAGE_PREFIX => match value.parse::<u32>() {
                Ok(0) | Err(_) => debug!("Ignoring page filter {:?}", value),
                Ok(1) => filter.page = None,
                Ok(page) => filter.page = Some(page),
            },
            _ => debug!("Ignoring unknown filter prefix {:?}", prefix),
        }
    }

    /// Human readable title, e.g. `"top dark neovim colorschemes"`.
    /// Search and page never show up in the title.
    pub fn get_page_title(context: &PageContext) -> String {
        let mut parts = vec![context.sort.as_str()];

        if let Some(background) = context.filter.background {
            parts.push(background.as_str());
        }
        if let Some(editor) = context.filter.editor {
            parts.push(editor.as_str());
        }
        parts.push("colorschemes");

        parts.join(" ")
    }

    /// Path segments that [`PageContextHelper::get`] turns back into `context`.
    pub fn to_tokens(context: &PageContext) -> Vec<String> {
        let filter = &context.filter;
        let mut tokens = vec![context.sort.as_str().to_string()];

        if let Some(editor) = filter.editor {
            tokens.push(format!("{EDITOR_PREFIX}.{editor}"));
        }
        if let Some(background) = filter.background {
            tokens.push(format!("{BACKGROUND_PREFIX}.{background}"));
        }
        if let Some(search) = &filter.search {
            tokens.push(format!("{SEARCH_PREFIX}.{}", URLHelper::encode(search)));
        }
        if let Some(page) = filter.page.filter(|page| *page > 1) {
            tokens.push(format!("{PAGE_PREFIX}.{page}"));
        }

        tokens
    }

    pub fn to_path(context: &PageContext) -> String {
        format!("/{}", Self::to_tokens(context).join("/"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(sort: SortOption, filter: Filter) -> PageContext {
        PageContext::new(sort, filter)
    }

    #[test]
    fn test_get_captures_sort_option() {
        assert_eq!(
            PageContextHelper::get(&["trending"]),
            context(SortOption::Trending, Filter::default())
        );
        assert_eq!(
            PageContextHelper::get(&["new"]),
            context(SortOption::New, Filter::default())
        );
    }

    #[test]
    fn test_get_defaults_to_trending() {
        let empty: [&str; 0] = [];
        assert_eq!(PageContextHelper::get(&empty), PageContext::default());
        assert_eq!(PageContextHelper::get(&["hottest"]), PageContext::default());
        assert_eq!(
            PageContextHelper::get(&["bogus", "e.vim"]).filter.editor,
            Some(Editor::Vim)
        );
    }

    #[test]
    fn test_get_captures_editor_filter() {
        assert_eq!(
            PageContextHelper::get(&["trending", "e.vim"]),
            context(
                SortOption::Trending,
                Filter {
                    editor: Some(Editor::Vim),
                    ..Default::default()
                }
            )
        );
    }

    #[test]
    fn test_get_captures_background_filter() {
        assert_eq!(
            PageContextHelper::get(&["trending", "b.light"]),
            context(
                SortOption::Trending,
                Filter {
                    background: Some(Background::Light),
                    ..Default::default()
                }
            )
        );
    }

    #[test]
    fn test_get_captures_search_filter() {
        assert_eq!(
            PageContextHelper::get(&["trending", "s.test"]),
            context(
                SortOption::Trending,
                Filter {
                    search: Some("test".to_string()),
                    ..Default::default()
                }
            )
        );
    }

    #[test]
    fn test_get_decodes_search_filter() {
        let ctx = PageContextHelper::get(&["top", "s.tokyo%20night.nvim"]);
        assert_eq!(ctx.filter.search.as_deref(), Some("tokyo night.nvim"));

        let ctx = PageContextHelper::get(&["top", "s.100%"]);
        assert_eq!(ctx.filter.search.as_deref(), Some("100%"));
    }

    #[test]
    fn test_get_captures_page_filter() {
        assert_eq!(
            PageContextHelper::get(&["trending", "p.3"]),
            context(
                SortOption::Trending,
                Filter {
                    page: Some(3),
                    ..Default::default()
                }
            )
        );
    }

    #[test]
    fn test_get_ignores_first_page() {
        assert_eq!(
            PageContextHelper::get(&["trending", "p.1"]),
            context(SortOption::Trending, Filter::default())
        );
        assert_eq!(
            PageContextHelper::get(&["trending", "p.4", "p.1"]).filter.page,
            None
        );
    }

    #[test]
    fn test_get_ignores_invalid_page() {
        assert_eq!(PageContextHelper::get(&["top", "p.0"]).filter.page, None);
        assert_eq!(PageContextHelper::get(&["top", "p.-2"]).filter.page, None);
        assert_eq!(PageContextHelper::get(&["top", "p.two"]).filter.page, None);
        assert_eq!(
            PageContextHelper::get(&["top", "p.5", "p.x"]).filter.page,
            Some(5)
        );
    }

    #[test]
    fn test_get_captures_multiple_filters() {
        assert_eq!(
            PageContextHelper::get(&["old", "e.vim", "b.light", "p.2"]),
            context(
                SortOption::Old,
                Filter {
                    editor: Some(Editor::Vim),
                    background: Some(Background::Light),
                    page: Some(2),
                    ..Default::default()
                }
            )
        );
    }

    #[test]
    fn test_get_last_filter_wins() {
        let ctx = PageContextHelper::get(&["top", "e.vim", "b.dark", "e.neovim", "b.light"]);
        assert_eq!(ctx.filter.editor, Some(Editor::Neovim));
        assert_eq!(ctx.filter.background, Some(Background::Light));
    }

    #[test]
    fn test_get_ignores_unknown_tokens() {
        assert_eq!(
            PageContextHelper::get(&["top", "x.1", "e.emacs", "b.grey", "noprefix", ""]),
            context(SortOption::Top, Filter::default())
        );
    }

    #[test]
    fn test_get_is_idempotent() {
        let tokens = ["new", "e.neovim", "s.gruvbox", "p.7"];
        assert_eq!(PageContextHelper::get(&tokens), PageContextHelper::get(&tokens));
    }

    #[test]
    fn test_get_accepts_owned_strings() {
        let tokens = vec!["top".to_string(), "b.dark".to_string()];
        assert_eq!(
            PageContextHelper::get(&tokens).filter.background,
            Some(Background::Dark)
        );
    }

    #[test]
    fn test_page_title_without_filters() {
        assert_eq!(
            PageContextHelper::get_page_title(&context(SortOption::Trending, Filter::default())),
            "trending colorschemes"
        );
        assert_eq!(
            PageContextHelper::get_page_title(&context(SortOption::Old, Filter::default())),
            "old colorschemes"
        );
    }

    #[test]
    fn test_page_title_with_background() {
        let filter = Filter {
            background: Some(Background::Dark),
            ..Default::default()
        };
        assert_eq!(
            PageContextHelper::get_page_title(&context(SortOption::Trending, filter)),
            "trending dark colorschemes"
        );
    }

    #[test]
    fn test_page_title_with_editor() {
        let filter = Filter {
            editor: Some(Editor::Neovim),
            ..Default::default()
        };
        assert_eq!(
            PageContextHelper::get_page_title(&context(SortOption::Trending, filter)),
            "trending neovim colorschemes"
        );
    }

    #[test]
    fn test_page_title_skips_search_and_page() {
        let filter = Filter {
            background: Some(Background::Light),
            editor: Some(Editor::Neovim),
            search: Some("test".to_string()),
            page: Some(2),
        };
        assert_eq!(
            PageContextHelper::get_page_title(&context(SortOption::Trending, filter)),
            "trending light neovim colorschemes"
        );
    }

    #[test]
    fn test_to_tokens() {
        let filter = Filter {
            background: Some(Background::Dark),
            editor: Some(Editor::Vim),
            search: Some("one dark".to_string()),
            page: Some(3),
        };
        assert_eq!(
            PageContextHelper::to_tokens(&context(SortOption::Top, filter)),
            vec!["top", "e.vim", "b.dark", "s.one%20dark", "p.3"]
        );
        assert_eq!(
            PageContextHelper::to_tokens(&PageContext::default()),
            vec!["trending"]
        );
    }

    #[test]
    fn test_to_tokens_round_trip() {
        let contexts = [
            PageContext::default(),
            context(
                SortOption::Old,
                Filter {
                    editor: Some(Editor::Neovim),
                    ..Default::default()
                },
            ),
            context(
                SortOption::New,
                Filter {
                    editor: Some(Editor::Vim),
                    background: Some(Background::Light),
                    search: Some("c++ / 100% ✓.vim".to_string()),
                    page: Some(12),
                },
            ),
        ];

        for ctx in contexts {
            assert_eq!(PageContextHelper::get(&PageContextHelper::to_tokens(&ctx)), ctx);
        }
    }

    #[test]
    fn test_to_path() {
        let filter = Filter {
            background: Some(Background::Light),
            page: Some(2),
            ..Default::default()
        };
        assert_eq!(
            PageContextHelper::to_path(&context(SortOption::New, filter)),
            "/new/b.light/p.2"
        );
    }
}
