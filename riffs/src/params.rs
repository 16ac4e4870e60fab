use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

const QUERY_VALUE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'<')
    .add(b'=')
    .add(b'>');

/// Page and limit for list endpoints.
///
/// Unset values take the endpoint's default. Values are sent as-is, the
/// backend decides what to do with negative or oversized ones.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Page {
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

impl Page {
    #[must_use]
    pub const fn new(page: i64, limit: i64) -> Self {
        Page {
            page: Some(page),
            limit: Some(limit),
        }
    }

    #[must_use]
    pub fn page(mut self, page: i64) -> Self {
        self.page = Some(page);
        self
    }

    #[must_use]
    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub(crate) fn query(self, defaults: PageDefaults) -> String {
        format!(
            "page={}&limit={}",
            self.page.unwrap_or(defaults.page),
            self.limit.unwrap_or(defaults.limit)
        )
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct PageDefaults {
    page: i64,
    limit: i64,
}

/// Profile nfts, collections and favorites.
pub(crate) const USER_LIST: PageDefaults = PageDefaults { page: 0, limit: 10 };
pub(crate) const ACTIVITY: PageDefaults = PageDefaults { page: 0, limit: 5 };
/// Marketplace pages start at 1.
pub(crate) const LISTINGS: PageDefaults = PageDefaults { page: 1, limit: 10 };

pub(crate) fn segment(value: &str) -> String {
    utf8_percent_encode(value, PATH_SEGMENT).to_string()
}

pub(crate) fn query_value(value: &str) -> String {
    utf8_percent_encode(value, QUERY_VALUE).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_page_uses_endpoint_defaults() {
        assert_eq!(Page::default().query(USER_LIST), "page=0&limit=10");
        assert_eq!(Page::default().query(ACTIVITY), "page=0&limit=5");
        assert_eq!(Page::default().query(LISTINGS), "page=1&limit=10");
    }

    #[test]
    fn test_partial_page_keeps_other_default() {
        assert_eq!(Page::default().page(3).query(ACTIVITY), "page=3&limit=5");
        assert_eq!(Page::default().limit(50).query(LISTINGS), "page=1&limit=50");
    }

    #[test]
    fn test_out_of_range_values_pass_through() {
        assert_eq!(Page::new(-1, 0).query(USER_LIST), "page=-1&limit=0");
    }

    #[test]
    fn test_segment_keeps_wallet_addresses() {
        assert_eq!(segment("0xABC"), "0xABC");
        assert_eq!(segment("7"), "7");
    }

    #[test]
    fn test_segment_escapes_separators() {
        assert_eq!(segment("a/b?c"), "a%2Fb%3Fc");
        assert_eq!(segment("two words"), "two%20words");
    }

    #[test]
    fn test_query_value_escapes_delimiters() {
        assert_eq!(query_value("created"), "created");
        assert_eq!(query_value("a&b=c"), "a%26b%3Dc");
    }
}
