use serde::Deserialize;
use vtt_core::AppError;

/// Hard ceiling on page size.
pub const MAX_PAGE_LIMIT: i64 = 100;
/// Page size when the caller does not specify one.
pub const DEFAULT_PAGE_LIMIT: i64 = 10;

/// Sort keys accepted by the world listing. A closed set: any other
/// string fails query deserialization outright, so no caller-chosen
/// value ever reaches SQL construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum SortBy {
    #[serde(rename = "name")]
    Name,
    #[serde(rename = "createdAt")]
    CreatedAt,
    #[serde(rename = "systemId")]
    SystemId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum SortOrder {
    #[serde(rename = "asc")]
    Asc,
    #[serde(rename = "desc")]
    Desc,
}

/// Filter/sort/pagination parameters for the world listing.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListWorlds {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub system_id: Option<i32>,
    pub search: Option<String>,
    pub sort_by: Option<SortBy>,
    pub sort_order: Option<SortOrder>,
}

/// Validated pagination window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub limit: i64,
    pub offset: i64,
}

impl ListWorlds {
    /// Validates page and limit. Out-of-policy values are rejected, never
    /// silently clamped.
    pub fn pagination(&self) -> Result<Page, AppError> {
        let page = self.page.unwrap_or(1);
        let limit = self.limit.unwrap_or(DEFAULT_PAGE_LIMIT);
        if page < 1 {
            return Err(AppError::bad_request("page must be a positive integer"));
        }
        if limit < 1 || limit > MAX_PAGE_LIMIT {
            return Err(AppError::bad_request("limit must be between 1 and 100"));
        }
        Ok(Page {
            limit,
            offset: (page - 1) * limit,
        })
    }

    /// Maps the sort selection onto a fixed ORDER BY fragment. Exhaustive
    /// over the closed enums, so the mapping is total and nothing the
    /// caller sends is ever spliced into SQL.
    pub fn order_by(&self) -> &'static str {
        let by = self.sort_by.unwrap_or(SortBy::CreatedAt);
        let order = self.sort_order.unwrap_or(SortOrder::Desc);
        match (by, order) {
            (SortBy::Name, SortOrder::Asc) => " ORDER BY name ASC",
            (SortBy::Name, SortOrder::Desc) => " ORDER BY name DESC",
            (SortBy::CreatedAt, SortOrder::Asc) => " ORDER BY created_at ASC",
            (SortBy::CreatedAt, SortOrder::Desc) => " ORDER BY created_at DESC",
            (SortBy::SystemId, SortOrder::Asc) => " ORDER BY system_id ASC",
            (SortBy::SystemId, SortOrder::Desc) => " ORDER BY system_id DESC",
        }
    }

    /// ILIKE pattern for the substring search, when one was requested.
    /// `%` and `_` in the needle are escaped so they match literally.
    pub fn search_pattern(&self) -> Option<String> {
        self.search
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(|s| s.replace('\\', "\\\\").replace('%', "\\%").replace('_', "\\_"))
            .map(|s| format!("%{}%", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let query = ListWorlds::default();
        let page = query.pagination().expect("valid");
        assert_eq!(page.limit, DEFAULT_PAGE_LIMIT);
        assert_eq!(page.offset, 0);
        assert_eq!(query.order_by(), " ORDER BY created_at DESC");
    }
    #[test]
    fn offset_from_page() {
        let query = ListWorlds {
            page: Some(3),
            limit: Some(25),
            ..Default::default()
        };
        let page = query.pagination().expect("valid");
        assert_eq!(page.offset, 50);
        assert_eq!(page.limit, 25);
    }
    #[test]
    fn zero_page_rejected() {
        let query = ListWorlds {
            page: Some(0),
            ..Default::default()
        };
        assert!(query.pagination().is_err());
    }
    #[test]
    fn negative_limit_rejected() {
        let query = ListWorlds {
            limit: Some(-5),
            ..Default::default()
        };
        assert!(query.pagination().is_err());
    }
    #[test]
    fn oversized_limit_rejected_not_clamped() {
        let query = ListWorlds {
            limit: Some(101),
            ..Default::default()
        };
        assert!(query.pagination().is_err());
    }
    #[test]
    fn limit_at_cap_accepted() {
        let query = ListWorlds {
            limit: Some(100),
            ..Default::default()
        };
        assert_eq!(query.pagination().expect("valid").limit, 100);
    }
    #[test]
    fn sort_mapping_is_total() {
        for by in [SortBy::Name, SortBy::CreatedAt, SortBy::SystemId] {
            for order in [SortOrder::Asc, SortOrder::Desc] {
                let query = ListWorlds {
                    sort_by: Some(by),
                    sort_order: Some(order),
                    ..Default::default()
                };
                assert!(query.order_by().starts_with(" ORDER BY "));
            }
        }
    }
    #[test]
    fn unknown_sort_key_fails_deserialization() {
        let result: Result<ListWorlds, _> =
            serde_json::from_str(r#"{"sortBy": "owner_id; DROP TABLE users"}"#);
        assert!(result.is_err());
    }
    #[test]
    fn search_pattern_escapes_wildcards() {
        let query = ListWorlds {
            search: Some("50%_off".to_string()),
            ..Default::default()
        };
        assert_eq!(query.search_pattern().expect("some"), "%50\\%\\_off%");
    }
    #[test]
    fn empty_search_is_no_filter() {
        let query = ListWorlds {
            search: Some(String::new()),
            ..Default::default()
        };
        assert!(query.search_pattern().is_none());
    }
}
