//! Flag value lookup over a raw argument slice

/// Find the value following the first flag that matches one of `names`.
///
/// Names are tried in the order given; a later name is only consulted when
/// no earlier name matches anywhere in `args`. Within one name the leftmost
/// occurrence wins. A flag in the last position has no value and never matches.
pub fn find_option<'a>(args: &'a [String], names: &[&str]) -> Option<&'a str> {
    for name in names {
        for i in 0..args.len().saturating_sub(1) {
            if args[i] == *name {
                return Some(args[i + 1].as_str());
            }
        }
    }
    None
}
