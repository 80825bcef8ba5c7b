use serde::Serialize;

use super::{selected, CriteriaError};
use crate::model::Page;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct PageCriteria {
    pub search: Option<String>,
    pub status: Option<String>,
    pub min_accessibility: Option<u8>,
}

struct PreparedPageCriteria<'a> {
    needle: Option<String>,
    status: Option<&'a str>,
    min_accessibility: Option<i64>,
}

impl PreparedPageCriteria<'_> {
    fn matches(&self, page: &Page) -> bool {
        let matches_search = match self.needle.as_deref() {
            Some(needle) => {
                page.title.to_lowercase().contains(needle)
                    || page.url.to_lowercase().contains(needle)
            }
            None => true,
        };
        let matches_status = self.status.map_or(true, |s| page.status == s);
        let matches_a11y = self
            .min_accessibility
            .map_or(true, |min| page.accessibility_score >= min);
        matches_search && matches_status && matches_a11y
    }
}

impl PageCriteria {
    fn prepare(&self) -> PreparedPageCriteria<'_> {
        let needle = self
            .search
            .as_deref()
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty());
        PreparedPageCriteria {
            needle,
            status: selected(self.status.as_deref()),
            // a zero threshold is the same as no threshold
            min_accessibility: self
                .min_accessibility
                .filter(|min| *min > 0)
                .map(i64::from),
        }
    }

    pub fn matches(&self, page: &Page) -> bool {
        self.prepare().matches(page)
    }

    pub fn is_empty(&self) -> bool {
        let prepared = self.prepare();
        prepared.needle.is_none()
            && prepared.status.is_none()
            && prepared.min_accessibility.is_none()
    }
}

/// Applies all criteria conjunctively. Relative order is preserved.
pub fn filter_pages<'a>(pages: &'a [Page], criteria: &PageCriteria) -> Vec<&'a Page> {
    let prepared = criteria.prepare();
    pages.iter().filter(|p| prepared.matches(p)).collect()
}

/// Empty input means "no threshold". Anything else must be a whole number in
/// `0..=100`; nothing is coerced.
pub fn parse_min_accessibility(raw: &str) -> Result<Option<u8>, CriteriaError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let value: i64 = trimmed
        .parse()
        .map_err(|_| CriteriaError::InvalidMinAccessibility {
            value: raw.to_string(),
        })?;
    if !(0..=100).contains(&value) {
        return Err(CriteriaError::MinAccessibilityOutOfRange { value });
    }
    Ok(Some(value as u8))
}
