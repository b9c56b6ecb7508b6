// src/domain/directory.rs
use crate::domain::errors::{DomainError, DomainResult};
use serde::Serialize;
use std::fmt;

/// Optional nationality constraint. Blank input means "unfiltered"; codes
/// are stored upper-cased so `us` and `US` describe the same query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct QueryFilter(Option<String>);

impl QueryFilter {
    pub fn unfiltered() -> Self {
        Self(None)
    }

    pub fn nationality(input: &str) -> Self {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            Self(None)
        } else {
            Self(Some(trimmed.to_uppercase()))
        }
    }

    pub fn from_optional(input: Option<&str>) -> Self {
        input.map(Self::nationality).unwrap_or_default()
    }

    pub fn code(&self) -> Option<&str> {
        self.0.as_deref()
    }

    pub fn is_unfiltered(&self) -> bool {
        self.0.is_none()
    }
}

impl fmt::Display for QueryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(code) => f.write_str(code),
            None => f.write_str("*"),
        }
    }
}

/// One-based page number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct PageNumber(u32);

impl PageNumber {
    pub const FIRST: PageNumber = PageNumber(1);

    pub fn new(value: u32) -> DomainResult<Self> {
        if value == 0 {
            Err(DomainError::Validation("page number must be at least 1".into()))
        } else {
            Ok(Self(value))
        }
    }

    pub fn get(self) -> u32 {
        self.0
    }

    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    pub fn previous(self) -> Option<Self> {
        if self.0 > 1 { Some(Self(self.0 - 1)) } else { None }
    }

    pub fn is_first(self) -> bool {
        self.0 == 1
    }
}

impl Default for PageNumber {
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Display for PageNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PageRequest {
    pub page: PageNumber,
    pub page_size: u32,
    pub filter: QueryFilter,
}

impl PageRequest {
    pub fn new(page: PageNumber, page_size: u32, filter: QueryFilter) -> DomainResult<Self> {
        if page_size == 0 {
            return Err(DomainError::Validation("page size must be positive".into()));
        }
        Ok(Self {
            page,
            page_size,
            filter,
        })
    }

    pub fn first(page_size: u32, filter: QueryFilter) -> DomainResult<Self> {
        Self::new(PageNumber::FIRST, page_size, filter)
    }

    /// Same query, different page.
    pub fn at(&self, page: PageNumber) -> Self {
        Self {
            page,
            page_size: self.page_size,
            filter: self.filter.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_filter_is_unfiltered() {
        assert!(QueryFilter::nationality("   ").is_unfiltered());
        assert!(QueryFilter::from_optional(None).is_unfiltered());
        assert_eq!(QueryFilter::nationality("").code(), None);
    }

    #[test]
    fn filter_is_trimmed_and_upper_cased() {
        assert_eq!(QueryFilter::nationality(" us ").code(), Some("US"));
        assert_eq!(QueryFilter::nationality("us"), QueryFilter::nationality("US"));
    }

    #[test]
    fn page_number_never_drops_below_one() {
        assert!(PageNumber::new(0).is_err());
        assert_eq!(PageNumber::FIRST.previous(), None);
        assert_eq!(PageNumber::new(3).unwrap().previous().map(PageNumber::get), Some(2));
        assert_eq!(PageNumber::FIRST.next().get(), 2);
    }

    #[test]
    fn page_request_requires_positive_size() {
        assert!(PageRequest::first(0, QueryFilter::unfiltered()).is_err());
        let request = PageRequest::first(10, QueryFilter::nationality("fr")).unwrap();
        let second = request.at(request.page.next());
        assert_eq!(second.page.get(), 2);
        assert_eq!(second.filter.code(), Some("FR"));
        assert_eq!(second.page_size, 10);
    }
}
