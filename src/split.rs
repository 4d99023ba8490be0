//! Segment splitting

/// Split `raw` into its non-empty segments
///
/// Runs of separators, as well as leading and trailing separators, never
/// produce empty segments.
///
/// # Examples
/// ```
/// use portable_path::split;
///
/// let segments: Vec<&str> = split("//a\\b//c/", &['/', '\\']).collect();
/// assert_eq!(segments, ["a", "b", "c"]);
/// assert_eq!(split("", &['/']).count(), 0);
/// ```
pub fn split<'a>(raw: &'a str, separators: &'a [char]) -> impl Iterator<Item = &'a str> + 'a {
    raw.split(separators).filter(|segment| !segment.is_empty())
}
