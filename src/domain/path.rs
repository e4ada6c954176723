//! Lexical path cleaning for metric labels.
//!
//! Label values must be stable across scrapes and across equivalent
//! spellings of the same path (`./a.txt`, `a.txt`, `.//a.txt`). Cleaning is
//! purely lexical: it never touches the filesystem and never resolves
//! symlinks.

const SEPARATOR: char = '/';

/// Returns the shortest lexically equivalent form of `path`.
///
/// Rules, applied element by element:
/// - repeated separators collapse into one,
/// - `.` elements are dropped,
/// - `..` removes the preceding non-`..` element,
/// - `..` directly after the root of a rooted path is dropped,
/// - trailing separators are dropped (the root stays `/`),
/// - an empty result becomes `.`.
///
/// The function is idempotent: `clean_path(&clean_path(p)) == clean_path(p)`.
pub fn clean_path(path: &str) -> String {
    let rooted = path.starts_with(SEPARATOR);
    let mut elements: Vec<&str> = Vec::new();

    for element in path.split(SEPARATOR) {
        match element {
            "" | "." => {}
            ".." => match elements.last() {
                Some(&last) if last != ".." => {
                    elements.pop();
                }
                // `/..` is `/`
                _ if rooted => {}
                _ => elements.push(".."),
            },
            name => elements.push(name),
        }
    }

    let joined = elements.join("/");
    if rooted {
        format!("/{joined}")
    } else if joined.is_empty() {
        ".".to_string()
    } else {
        joined
    }
}
