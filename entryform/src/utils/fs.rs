//! File system utilities

/// Sanitize a slot name so it is safe to use as a file name
///
/// Replaces characters that are unsafe or problematic in filenames with underscores.
/// Preserves alphanumeric characters, hyphens, dots and underscores.
/// Collapses consecutive underscores and trims them from both ends.
pub fn sanitize_filename(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut last_was_underscore = false;

    for c in input.chars() {
        let keep = c.is_alphanumeric() || c == '-' || c == '.';
        if keep {
            result.push(c);
            last_was_underscore = false;
        } else if !last_was_underscore {
            // '_' itself and every unsafe char collapse into a single underscore
            result.push('_');
            last_was_underscore = true;
        }
    }

    result.trim_matches('_').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_filename() {
        assert_eq!(sanitize_filename("savedEntries"), "savedEntries");
        assert_eq!(sanitize_filename("saved entries"), "saved_entries");
        assert_eq!(sanitize_filename("team/feedback"), "team_feedback");
        assert_eq!(sanitize_filename("a__b"), "a_b");
        assert_eq!(sanitize_filename("form-v2.backup"), "form-v2.backup");
        assert_eq!(sanitize_filename("!@#$%^&*()"), "");
    }
}
