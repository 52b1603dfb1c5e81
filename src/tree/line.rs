use super::entry::Entry;

/// Glyph for every sibling except the last.
pub const TEE: &str = "├───";
/// Glyph for the last sibling.
pub const CORNER: &str = "└───";
/// Indentation added below a non-last sibling: an ancestor still has siblings below.
pub const CONTINUE: &str = "│\t";
/// Indentation added below the last sibling.
pub const BLANK: &str = "\t";

/// Branch glyph for a sibling.
pub fn branch_glyph(is_last: bool) -> &'static str {
    if is_last {
        CORNER
    } else {
        TEE
    }
}

/// Indentation handed to the children of a sibling.
pub fn child_indent(indent: &str, is_last: bool) -> String {
    let token = if is_last { BLANK } else { CONTINUE };
    format!("{}{}", indent, token)
}

/// Size annotation for an entry. Directories never carry one.
pub fn size_suffix(entry: &Entry) -> String {
    if entry.is_dir {
        String::new()
    } else if entry.size == 0 {
        " (empty)".to_string()
    } else {
        format!(" ({}b)", entry.size)
    }
}

/// Full output line for an entry, including the trailing newline.
///
/// Names that are not valid UTF-8 are shown lossily.
pub fn format_line(indent: &str, entry: &Entry, is_last: bool) -> String {
    format!(
        "{}{}{}{}\n",
        indent,
        branch_glyph(is_last),
        entry.name.to_string_lossy(),
        size_suffix(entry)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_branch_glyph() {
        assert_eq!(branch_glyph(true), "└───");
        assert_eq!(branch_glyph(false), "├───");
    }

    #[test]
    fn test_child_indent() {
        assert_eq!(child_indent("", true), "\t");
        assert_eq!(child_indent("", false), "│\t");
        assert_eq!(child_indent("│\t", true), "│\t\t");
        assert_eq!(child_indent("\t", false), "\t│\t");
    }

    #[test]
    fn test_size_suffix_empty_file() {
        assert_eq!(size_suffix(&Entry::file("g", 0)), " (empty)");
    }

    #[test]
    fn test_size_suffix_bytes() {
        assert_eq!(size_suffix(&Entry::file("f", 5)), " (5b)");
        assert_eq!(size_suffix(&Entry::file("f", 1048576)), " (1048576b)");
    }

    #[test]
    fn test_directory_has_no_suffix() {
        assert_eq!(size_suffix(&Entry::dir("sub")), "");
    }

    #[test]
    fn test_format_line() {
        assert_eq!(
            format_line("", &Entry::file("f.txt", 3), false),
            "├───f.txt (3b)\n"
        );
        assert_eq!(format_line("\t", &Entry::file("g", 0), true), "\t└───g (empty)\n");
        assert_eq!(format_line("│\t", &Entry::dir("sub"), true), "│\t└───sub\n");
    }
}
