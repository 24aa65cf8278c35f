use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::common::entities::app_errors::CoreError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOption {
    #[default]
    Trending,
    Top,
    New,
    Old,
}

impl SortOption {
    pub const ALL: [SortOption; 4] = [
        SortOption::Trending,
        SortOption::Top,
        SortOption::New,
        SortOption::Old,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOption::Trending => "trending",
            SortOption::Top => "top",
            SortOption::New => "new",
            SortOption::Old => "old",
        }
    }
}

impl FromStr for SortOption {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "trending" => Ok(SortOption::Trending),
            "top" => Ok(SortOption::Top),
            "new" => Ok(SortOption::New),
            "old" => Ok(SortOption::Old),
            _ => Err(CoreError::UnknownValue {
                kind: "sort option",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Editor {
    Vim,
    Neovim,
}

impl Editor {
    pub fn as_str(&self) -> &'static str {
        match self {
            Editor::Vim => "vim",
            Editor::Neovim => "neovim",
        }
    }
}

impl FromStr for Editor {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "vim" => Ok(Editor::Vim),
            "neovim" => Ok(Editor::Neovim),
            _ => Err(CoreError::UnknownValue {
                kind: "editor",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Editor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Background {
    Light,
    Dark,
}

impl Background {
    pub fn as_str(&self) -> &'static str {
        match self {
            Background::Light => "light",
            Background::Dark => "dark",
        }
    }
}

impl FromStr for Background {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Background::Light),
            "dark" => Ok(Background::Dark),
            _ => Err(CoreError::UnknownValue {
                kind: "background",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Background {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Optional constraints narrowing a listing. A `None` field applies no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editor: Option<Editor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<Background>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// Always greater than 1 when set; page 1 is the default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
}

impl Filter {
    pub fn is_empty(&self) -> bool {
        self.editor.is_none()
            && self.background.is_none()
            && self.search.is_none()
            && self.page.is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageContext {
    pub sort: SortOption,
    pub filter: Filter,
}

impl PageContext {
    pub fn new(sort: SortOption, filter: Filter) -> Self {
        Self { sort, filter }
    }
}
