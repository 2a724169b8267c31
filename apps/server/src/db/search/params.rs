//! Search filter parsing and validation
//!
//! Handles parsing of product search query parameters:
//! - Text query (`q`) matched against name and description
//! - Category membership (`category`, repeatable)
//! - Price bounds (`minPrice`, `maxPrice`) and stock state (`inStock`)
//! - Sort controls (`sort`, `method`) and pagination (`page`, `pageSize`)

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::Result;

/// Parsed search filters.
///
/// Malformed values are rejected at parse time; out-of-range `page` and
/// `pageSize` values are not. Range rules are applied by the `effective_*`
/// accessors so that requesting page 0 or a page size of 500 clamps rather
/// than errors.
#[derive(Debug, Clone, Default)]
pub struct SearchFilters {
    /// Substring to match against product name or description.
    pub q: Option<String>,

    /// Category identifiers; a matching product belongs to at least one.
    pub categories: Vec<Uuid>,

    /// Inclusive lower price bound.
    pub min_price: Option<Decimal>,

    /// Inclusive upper price bound.
    pub max_price: Option<Decimal>,

    /// Exact stock-state match.
    pub in_stock: Option<bool>,

    /// Sort key (default: relevance).
    pub sort: SortKey,

    /// Sort direction (default: descending).
    pub direction: SortDirection,

    /// Requested 1-based page number, as provided.
    pub page: Option<i64>,

    /// Requested page size, as provided.
    pub page_size: Option<i64>,
}

/// Sort key for product search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Nominal relevance ranking. No scoring is implemented; this orders by
    /// recency (newest first) regardless of the requested direction.
    #[default]
    Relevance,
    Price,
    CreatedAt,
    Rating,
}

impl SortKey {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "relevance" => Some(Self::Relevance),
            "price" => Some(Self::Price),
            "created_at" => Some(Self::CreatedAt),
            "rating" => Some(Self::Rating),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Relevance => "relevance",
            Self::Price => "price",
            Self::CreatedAt => "created_at",
            Self::Rating => "rating",
        }
    }
}

/// Sort direction for product search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "asc" => Some(Self::Asc),
            "desc" => Some(Self::Desc),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    pub fn as_sql(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

impl SearchFilters {
    /// Parse search filters from ordered (key, value) items.
    ///
    /// Unknown parameters are ignored. Scalar parameters take their last
    /// occurrence; `category` accumulates across occurrences.
    pub fn from_items(items: &[(String, String)]) -> Result<Self> {
        let mut filters = SearchFilters::default();

        for (key, value) in items {
            match key.as_str() {
                "q" => {
                    if !value.is_empty() {
                        filters.q = Some(value.clone());
                    }
                }
                "category" => {
                    let id = Uuid::parse_str(value).map_err(|_| {
                        crate::Error::Validation(format!("Invalid category id: {}", value))
                    })?;
                    filters.categories.push(id);
                }
                "minPrice" => {
                    filters.min_price = Some(parse_price("minPrice", value)?);
                }
                "maxPrice" => {
                    filters.max_price = Some(parse_price("maxPrice", value)?);
                }
                "inStock" => {
                    filters.in_stock = Some(match value.as_str() {
                        "true" | "1" => true,
                        "false" | "0" => false,
                        _ => {
                            return Err(crate::Error::Validation(format!(
                                "Invalid inStock value: {}",
                                value
                            )));
                        }
                    });
                }
                "sort" => {
                    filters.sort = SortKey::parse(value).ok_or_else(|| {
                        crate::Error::Validation(format!("Invalid sort value: {}", value))
                    })?;
                }
                "method" => {
                    filters.direction = SortDirection::parse(value).ok_or_else(|| {
                        crate::Error::Validation(format!("Invalid method value: {}", value))
                    })?;
                }
                "page" => {
                    let parsed: i64 = value.parse().map_err(|_| {
                        crate::Error::Validation(format!("Invalid page value: {}", value))
                    })?;
                    filters.page = Some(parsed);
                }
                "pageSize" => {
                    let parsed: i64 = value.parse().map_err(|_| {
                        crate::Error::Validation(format!("Invalid pageSize value: {}", value))
                    })?;
                    filters.page_size = Some(parsed);
                }
                _ => {
                    // Unknown parameters are ignored rather than rejected.
                }
            }
        }

        Ok(filters)
    }

    /// 1-based page number with the lower bound applied.
    pub fn effective_page(&self) -> u32 {
        self.page.unwrap_or(1).clamp(1, i64::from(u32::MAX)) as u32
    }

    /// Page size with the default and bounds applied: an absent value takes
    /// `default`, anything else is clamped to `1..=max`.
    pub fn effective_page_size(&self, default: u32, max: u32) -> u32 {
        self.page_size
            .unwrap_or(i64::from(default))
            .clamp(1, i64::from(max)) as u32
    }

    /// Rows skipped before the first returned row: `(page - 1) * pageSize`.
    pub fn offset(&self, default_page_size: u32, max_page_size: u32) -> u64 {
        u64::from(self.effective_page() - 1)
            .saturating_mul(u64::from(self.effective_page_size(default_page_size, max_page_size)))
    }
}

fn parse_price(name: &str, value: &str) -> Result<Decimal> {
    let parsed: Decimal = value.parse().map_err(|_| {
        crate::Error::Validation(format!("Invalid {} value: {}", name, value))
    })?;
    if parsed < Decimal::ZERO {
        return Err(crate::Error::Validation(format!(
            "{} must not be negative: {}",
            name, value
        )));
    }
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn from_items_applies_defaults() {
        let filters = SearchFilters::from_items(&[]).unwrap();
        assert!(filters.q.is_none());
        assert!(filters.categories.is_empty());
        assert!(filters.min_price.is_none());
        assert!(filters.max_price.is_none());
        assert!(filters.in_stock.is_none());
        assert_eq!(filters.sort, SortKey::Relevance);
        assert_eq!(filters.direction, SortDirection::Desc);
        assert_eq!(filters.effective_page(), 1);
        assert_eq!(filters.effective_page_size(20, 100), 20);
    }

    #[test]
    fn empty_text_query_is_treated_as_absent() {
        let filters = SearchFilters::from_items(&items(&[("q", "")])).unwrap();
        assert!(filters.q.is_none());
    }

    #[test]
    fn category_occurrences_accumulate() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let filters = SearchFilters::from_items(&items(&[
            ("category", &a.to_string()),
            ("category", &b.to_string()),
        ]))
        .unwrap();
        assert_eq!(filters.categories, vec![a, b]);
    }

    #[test]
    fn malformed_category_id_is_rejected() {
        let err = SearchFilters::from_items(&items(&[("category", "not-a-uuid")])).unwrap_err();
        assert!(err.to_string().contains("category"));
    }

    #[test]
    fn prices_parse_as_decimals_and_reject_negatives() {
        let filters =
            SearchFilters::from_items(&items(&[("minPrice", "99.99"), ("maxPrice", "200")]))
                .unwrap();
        assert_eq!(filters.min_price, Some("99.99".parse().unwrap()));
        assert_eq!(filters.max_price, Some("200".parse().unwrap()));

        assert!(SearchFilters::from_items(&items(&[("minPrice", "-5")])).is_err());
        assert!(SearchFilters::from_items(&items(&[("maxPrice", "abc")])).is_err());
    }

    #[test]
    fn in_stock_requires_a_boolean_literal() {
        for (raw, expected) in [("true", true), ("1", true), ("false", false), ("0", false)] {
            let filters = SearchFilters::from_items(&items(&[("inStock", raw)])).unwrap();
            assert_eq!(filters.in_stock, Some(expected));
        }
        assert!(SearchFilters::from_items(&items(&[("inStock", "yes")])).is_err());
    }

    #[test]
    fn unknown_sort_and_method_values_are_rejected() {
        assert!(SearchFilters::from_items(&items(&[("sort", "popularity")])).is_err());
        assert!(SearchFilters::from_items(&items(&[("method", "up")])).is_err());

        let filters =
            SearchFilters::from_items(&items(&[("sort", "price"), ("method", "asc")])).unwrap();
        assert_eq!(filters.sort, SortKey::Price);
        assert_eq!(filters.direction, SortDirection::Asc);
    }

    #[test]
    fn non_integer_page_values_are_rejected() {
        assert!(SearchFilters::from_items(&items(&[("page", "abc")])).is_err());
        assert!(SearchFilters::from_items(&items(&[("pageSize", "2.5")])).is_err());
    }

    #[test]
    fn page_bounds_clamp_instead_of_erroring() {
        let filters = SearchFilters::from_items(&items(&[("page", "0")])).unwrap();
        assert_eq!(filters.effective_page(), 1);

        let filters = SearchFilters::from_items(&items(&[("page", "-3")])).unwrap();
        assert_eq!(filters.effective_page(), 1);

        let filters = SearchFilters::from_items(&items(&[("pageSize", "500")])).unwrap();
        assert_eq!(filters.effective_page_size(20, 100), 100);

        let filters = SearchFilters::from_items(&items(&[("pageSize", "0")])).unwrap();
        assert_eq!(filters.effective_page_size(20, 100), 1);
    }

    #[test]
    fn offset_is_page_minus_one_times_page_size() {
        let filters =
            SearchFilters::from_items(&items(&[("page", "3"), ("pageSize", "10")])).unwrap();
        assert_eq!(filters.offset(20, 100), 20);

        let filters = SearchFilters::from_items(&[]).unwrap();
        assert_eq!(filters.offset(20, 100), 0);
    }

    #[test]
    fn unknown_parameters_are_ignored() {
        let filters =
            SearchFilters::from_items(&items(&[("utm_source", "mail"), ("q", "laptop")])).unwrap();
        assert_eq!(filters.q.as_deref(), Some("laptop"));
    }
}
