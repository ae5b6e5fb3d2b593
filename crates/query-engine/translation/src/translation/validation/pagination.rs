//! Pagination bounds.

use query_engine_metadata::metadata::{PaginationSettings, MAX_OFFSET};
use query_engine_request::Pagination;

/// A page that is always within bounds: `offset` in `[0, MAX_OFFSET]`, `limit` in
/// `(0, limit_upper_bound]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidPagination {
    pub limit: u32,
    pub offset: u32,
}

/// Bring a requested page within bounds. Out of range offsets reset to 0, and out of range
/// limits, including 0, reset to the upper bound. An upper bound of 0 is treated as 1.
pub fn clamp(pagination: Pagination, settings: &PaginationSettings) -> ValidPagination {
    let upper_bound = settings.limit_upper_bound.max(1);

    let offset = u32::try_from(pagination.offset)
        .ok()
        .filter(|offset| *offset <= MAX_OFFSET)
        .unwrap_or(0);
    let limit = u32::try_from(pagination.limit)
        .ok()
        .filter(|limit| *limit > 0 && *limit <= upper_bound)
        .unwrap_or(upper_bound);

    ValidPagination { limit, offset }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(limit: i64, offset: i64) -> Pagination {
        Pagination { limit, offset }
    }

    #[test]
    fn out_of_range_values_reset() {
        let settings = PaginationSettings::default();
        assert_eq!(
            clamp(page(0, -5), &settings),
            ValidPagination {
                limit: 50,
                offset: 0
            }
        );
        assert_eq!(
            clamp(page(51, 501), &settings),
            ValidPagination {
                limit: 50,
                offset: 0
            }
        );
        assert_eq!(
            clamp(page(-1, i64::MAX), &settings),
            ValidPagination {
                limit: 50,
                offset: 0
            }
        );
    }

    #[test]
    fn in_range_values_are_kept() {
        let settings = PaginationSettings {
            limit_upper_bound: 20,
        };
        assert_eq!(
            clamp(page(20, 500), &settings),
            ValidPagination {
                limit: 20,
                offset: 500
            }
        );
        assert_eq!(
            clamp(page(1, 0), &settings),
            ValidPagination {
                limit: 1,
                offset: 0
            }
        );
    }

    #[test]
    fn a_zero_upper_bound_still_returns_rows() {
        let settings = PaginationSettings {
            limit_upper_bound: 0,
        };
        assert_eq!(
            clamp(page(10, 0), &settings),
            ValidPagination {
                limit: 1,
                offset: 0
            }
        );
    }

    #[test]
    fn clamping_is_idempotent() {
        let settings = PaginationSettings::default();
        for (limit, offset) in [(0, -5), (10, 10), (1000, 1000), (-7, 499), (50, 500)] {
            let once = clamp(page(limit, offset), &settings);
            let twice = clamp(
                page(i64::from(once.limit), i64::from(once.offset)),
                &settings,
            );
            assert_eq!(once, twice);
            assert!(once.offset <= MAX_OFFSET);
            assert!(once.limit > 0 && once.limit <= settings.limit_upper_bound);
        }
    }
}
