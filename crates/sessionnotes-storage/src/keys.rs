//! Generated filenames for disk artifacts.
//!
//! Format: `{unix_millis}-{random in [0, 1e9)}-{original_name}`.

use std::borrow::Cow;

use chrono::Utc;
use rand::Rng;

/// Exclusive upper bound of the random component.
pub const UNIQUE_SUFFIX_BOUND: u32 = 1_000_000_000;

/// Longest original-name component kept in a generated filename. With the
/// timestamp and random prefix the result stays under the 255-byte NAME_MAX.
pub const MAX_ORIGINAL_NAME_BYTES: usize = 200;

/// Extensions up to this length (dot included) survive truncation.
const MAX_EXTENSION_BYTES: usize = 16;

const FALLBACK_NAME: &str = "file";

/// Reduce a client-supplied name to its final `/`-separated component.
///
/// Names that reduce to nothing, `.` or `..` become `file`. Overlong names are
/// cut to `MAX_ORIGINAL_NAME_BYTES`, keeping a short extension.
pub fn safe_original_name(original: &str) -> Cow<'_, str> {
    let name = original.rsplit('/').next().unwrap_or("");
    match name {
        "" | "." | ".." => Cow::Borrowed(FALLBACK_NAME),
        other => truncate_name(other),
    }
}

fn truncate_name(name: &str) -> Cow<'_, str> {
    if name.len() <= MAX_ORIGINAL_NAME_BYTES {
        return Cow::Borrowed(name);
    }

    let (stem, extension) = match name.rfind('.') {
        Some(dot) if dot > 0 && name.len() - dot <= MAX_EXTENSION_BYTES => name.split_at(dot),
        _ => (name, ""),
    };

    let mut end = (MAX_ORIGINAL_NAME_BYTES - extension.len()).min(stem.len());
    while !stem.is_char_boundary(end) {
        end -= 1;
    }

    Cow::Owned(format!("{}{}", &stem[..end], extension))
}

/// Generate a collision-resistant filename for an upload.
pub fn generate_filename(original: &str) -> String {
    let millis = Utc::now().timestamp_millis();
    let suffix = rand::rng().random_range(0..UNIQUE_SUFFIX_BOUND);
    format!("{}-{}-{}", millis, suffix, safe_original_name(original))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn keeps_plain_names() {
        assert_eq!(safe_original_name("intake session.wav"), "intake session.wav");
        assert_eq!(safe_original_name("notes.v2.m4a"), "notes.v2.m4a");
    }

    #[test]
    fn strips_directories() {
        assert_eq!(safe_original_name("../../etc/passwd"), "passwd");
        assert_eq!(safe_original_name("/abs/path/a.ogg"), "a.ogg");
    }

    #[test]
    fn backslashes_are_ordinary_characters() {
        assert_eq!(safe_original_name("take\\1.wav"), "take\\1.wav");
    }

    #[test]
    fn overlong_names_truncated_keeping_extension() {
        let long = format!("{}.wav", "a".repeat(300));
        let name = safe_original_name(&long);
        assert_eq!(name.len(), MAX_ORIGINAL_NAME_BYTES);
        assert!(name.ends_with("aaa.wav"));

        let generated = generate_filename(&long);
        assert!(generated.len() < 255, "{}", generated.len());
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        let long = format!("{}.mp3", "é".repeat(150));
        let name = safe_original_name(&long);
        assert!(name.len() <= MAX_ORIGINAL_NAME_BYTES);
        assert!(name.ends_with("é.mp3"));
    }

    #[test]
    fn long_extension_is_not_preserved() {
        let long = format!("rec.{}", "x".repeat(250));
        assert_eq!(safe_original_name(&long).len(), MAX_ORIGINAL_NAME_BYTES);
    }

    #[test]
    fn degenerate_names_fall_back() {
        assert_eq!(safe_original_name(""), "file");
        assert_eq!(safe_original_name(".."), "file");
        assert_eq!(safe_original_name("dir/"), "file");
    }

    #[test]
    fn generated_name_has_expected_shape() {
        let name = generate_filename("rec.wav");
        let mut parts = name.splitn(3, '-');
        let millis: i64 = parts.next().unwrap().parse().unwrap();
        let suffix: u32 = parts.next().unwrap().parse().unwrap();
        assert!(millis > 0);
        assert!(suffix < UNIQUE_SUFFIX_BOUND);
        assert_eq!(parts.next(), Some("rec.wav"));
    }

    #[test]
    fn same_original_name_yields_distinct_names() {
        let names: HashSet<String> = (0..1000).map(|_| generate_filename("rec.wav")).collect();
        assert_eq!(names.len(), 1000);
    }
}
