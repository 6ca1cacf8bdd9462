//! Adaptive pagination.
//!
//! Page size is not a constant: it is derived from the vertical space the
//! table container actually has, divided by a measured row height, and
//! recomputed when the viewport resizes. Pages are 1-based and navigation
//! is clamped at both ends.

/// Fallback row height (px) until a real row has been measured.
pub const DEFAULT_ROW_HEIGHT: f64 = 44.0;

/// Minimum meaningful change of the row-height measurement. Reloads that
/// re-render rows at sub-pixel differences should not reset the page.
const ROW_HEIGHT_EPSILON: f64 = 0.5;

pub fn total_pages(count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    ((count + page_size - 1) / page_size).max(1)
}

/// Clamp a 1-based page index into `[1, total]`.
pub fn clamp_page(page: usize, total: usize) -> usize {
    page.clamp(1, total.max(1))
}

pub fn page_slice<T: Clone>(rows: &[T], page: usize, page_size: usize) -> Vec<T> {
    if page_size == 0 {
        return Vec::new();
    }
    let page = clamp_page(page, total_pages(rows.len(), page_size));
    let start = (page - 1) * page_size;
    let end = (start + page_size).min(rows.len());
    if start >= rows.len() {
        Vec::new()
    } else {
        rows[start..end].to_vec()
    }
}

/// Rows that fit in `available_px` of vertical space. Never less than 1,
/// so a cramped viewport still shows something.
pub fn adaptive_page_size(available_px: f64, row_px: f64) -> usize {
    let row_px = if row_px > 0.0 { row_px } else { DEFAULT_ROW_HEIGHT };
    if available_px <= row_px {
        return 1;
    }
    (available_px / row_px).floor() as usize
}

/// Whether a fresh row-height measurement differs enough from the previous
/// one to warrant a page reset.
pub fn row_height_changed(previous: f64, measured: f64) -> bool {
    (previous - measured).abs() > ROW_HEIGHT_EPSILON
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(25, 10), 3);
    }

    #[test]
    fn test_clamp_page() {
        assert_eq!(clamp_page(0, 3), 1);
        assert_eq!(clamp_page(1, 3), 1);
        assert_eq!(clamp_page(3, 3), 3);
        assert_eq!(clamp_page(9, 3), 3);
        assert_eq!(clamp_page(5, 0), 1);
    }

    #[test]
    fn test_page_slice() {
        let rows: Vec<u32> = (1..=25).collect();
        assert_eq!(page_slice(&rows, 1, 10), (1..=10).collect::<Vec<_>>());
        assert_eq!(page_slice(&rows, 3, 10), (21..=25).collect::<Vec<_>>());
        // Out-of-range pages clamp rather than return nothing.
        assert_eq!(page_slice(&rows, 99, 10), (21..=25).collect::<Vec<_>>());
    }

    #[test]
    fn test_adaptive_page_size() {
        assert_eq!(adaptive_page_size(440.0, 44.0), 10);
        assert_eq!(adaptive_page_size(439.0, 44.0), 9);
        assert_eq!(adaptive_page_size(10.0, 44.0), 1);
        // Unmeasured row height falls back to the default.
        assert_eq!(adaptive_page_size(440.0, 0.0), 10);
    }

    #[test]
    fn test_row_height_changed() {
        assert!(!row_height_changed(44.0, 44.2));
        assert!(row_height_changed(44.0, 52.0));
    }
}
