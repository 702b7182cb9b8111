use serde::Deserialize;

/// One row of the paginated `/countries/` listing.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Country {
    pub id: u64,
    pub name: String,
    pub iso3: String,
    #[serde(default)]
    pub population: Option<u64>,
    #[serde(default)]
    pub site_count: Option<u64>,
}

/// Generic page envelope: `count` is the authoritative total across all
/// pages, `results` holds only the current page.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Page<T> {
    #[serde(default)]
    pub results: Vec<T>,
    #[serde(default)]
    pub count: u64,
}

impl<T> Page<T> {
    /// Total page count for the given page size, floored at 1 so an empty
    /// listing still renders as "Page 1 / 1".
    pub fn total_pages(&self, page_size: u32) -> u32 {
        total_pages(self.count, page_size)
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            results: Vec::new(),
            count: 0,
        }
    }
}

pub fn total_pages(count: u64, page_size: u32) -> u32 {
    if page_size == 0 {
        return 1;
    }
    let pages = count.div_ceil(u64::from(page_size));
    u32::try_from(pages.max(1)).unwrap_or(u32::MAX)
}
