pub mod entities;

pub const DEFAULT_PAGE_SIZE: u64 = 20;
pub const MAX_PAGE_SIZE: u64 = 100;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListingConfig {
    pub page_size: u64,
}

impl ListingConfig {
    pub fn new(page_size: Option<u64>) -> Self {
        Self {
            page_size: page_size
                .unwrap_or(DEFAULT_PAGE_SIZE)
                .clamp(1, MAX_PAGE_SIZE),
        }
    }
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self::new(None)
    }
}
