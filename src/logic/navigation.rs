//! List selection logic
//!
//! Pure wrap-around cursor arithmetic shared by every screen's list.

/// Next index with wrap-around; None for an empty list, first item when
/// nothing is selected yet.
pub fn next_selection(current: Option<usize>, list_len: usize) -> Option<usize> {
    match (current, list_len) {
        (_, 0) => None,
        (None, _) => Some(0),
        (Some(i), len) => Some((i + 1) % len),
    }
}

/// Previous index with wrap-around; None for an empty list, last item when
/// nothing is selected yet.
pub fn prev_selection(current: Option<usize>, list_len: usize) -> Option<usize> {
    match (current, list_len) {
        (_, 0) => None,
        (None, len) => Some(len - 1),
        (Some(i), len) => Some(i.checked_sub(1).unwrap_or(len - 1)),
    }
}

/// Re-fit a cursor after the underlying list changed size.
pub fn clamp_selection(current: Option<usize>, list_len: usize) -> Option<usize> {
    if list_len == 0 {
        return None;
    }
    Some(current.unwrap_or(0).min(list_len - 1))
}
