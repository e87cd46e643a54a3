//! Byte-level substring scanning over the packed buffer.
//!
//! All item boundaries in the crate are re-derived from delimiter
//! positions found by these helpers; nothing maintains a separate
//! index. The searches run on bytes rather than through `str::find`
//! because `item_bounds` may be probed at an arbitrary byte offset
//! (see `StrPack::random`) that is not itself a char boundary. A match
//! of a valid UTF-8 needle always starts and ends on a char boundary
//! of the haystack, so slicing with the returned positions is safe.

use std::borrow::Cow;

/// First match of `needle` starting at or after `from`.
pub(crate) fn find_from(hay: &str, needle: &str, from: usize) -> Option<usize> {
    let hay = hay.as_bytes();
    let needle = needle.as_bytes();
    if needle.is_empty() || hay.len() < needle.len() || from > hay.len() - needle.len() {
        return None;
    }
    hay[from..]
        .windows(needle.len())
        .position(|window| window == needle)
        .map(|i| i + from)
}

/// Last match of `needle` starting at or before `upto`.
pub(crate) fn rfind_upto(hay: &str, needle: &str, upto: usize) -> Option<usize> {
    let hay = hay.as_bytes();
    let needle = needle.as_bytes();
    if needle.is_empty() || hay.len() < needle.len() {
        return None;
    }
    let last = upto.min(hay.len() - needle.len());
    hay[..last + needle.len()]
        .windows(needle.len())
        .rposition(|window| window == needle)
}

/// Boundary expansion: recovers the item enclosing byte position `pos`
/// by scanning forward to the next delimiter occurrence (or buffer
/// end) and backward to the previous one (or buffer start).
pub(crate) fn item_bounds(buf: &str, delim: &str, pos: usize) -> (usize, usize) {
    let end = find_from(buf, delim, pos).unwrap_or(buf.len());
    let start = if pos == 0 {
        0
    } else {
        match rfind_upto(buf, delim, pos - 1) {
            Some(i) => i + delim.len(),
            None => 0,
        }
    };
    (start, end)
}

/// Item count of a normalized buffer: non-overlapping delimiter
/// occurrences plus one, or zero for an empty buffer.
pub(crate) fn count_items(buf: &str, delim: &str) -> usize {
    if buf.is_empty() {
        return 0;
    }
    let mut count = 1;
    let mut pos = 0;
    while let Some(i) = find_from(buf, delim, pos) {
        count += 1;
        pos = i + delim.len();
    }
    count
}

/// Collapses runs of consecutive delimiters (the empty items between
/// them are discarded) and strips a single leading and trailing
/// delimiter. Already-clean input is borrowed as-is.
pub(crate) fn normalize<'a>(joined: &'a str, delim: &str) -> Cow<'a, str> {
    let doubled = [delim, delim].concat();
    if joined.contains(doubled.as_str())
        || joined.starts_with(delim)
        || joined.ends_with(delim)
    {
        let parts: Vec<&str> = joined.split(delim).filter(|part| !part.is_empty()).collect();
        Cow::Owned(parts.join(delim))
    } else {
        Cow::Borrowed(joined)
    }
}
