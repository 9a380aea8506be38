//! Extension-keyed lookups: language mode for the editing surface and
//! display glyphs for tree rows. Both are pure functions of the
//! lowercased file extension.

/// Editing-surface language mode, chosen purely from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    JavaScript,
    Jsx,
    TypeScript,
    Tsx,
    Python,
    Html,
    Css,
    PlainText,
}

impl Language {
    /// Look up the language mode for a file path. Extensions without a
    /// mapping get the generic plain-text mode.
    pub fn from_path(path: &str) -> Language {
        match extension(path).as_str() {
            "js" => Language::JavaScript,
            "jsx" => Language::Jsx,
            "ts" => Language::TypeScript,
            "tsx" => Language::Tsx,
            "py" => Language::Python,
            "html" => Language::Html,
            "css" => Language::Css,
            _ => Language::PlainText,
        }
    }
}

/// Lowercased text after the last '.' of the final path segment.
///
/// A name without a dot yields the whole lowercased name, so dotfiles
/// like `.gitignore` still key on their trailing piece.
pub fn extension(path: &str) -> String {
    let name = path.rsplit('/').next().unwrap_or(path);
    name.rsplit('.').next().unwrap_or(name).to_lowercase()
}

/// Display glyph for a file row.
pub fn file_icon(path: &str) -> &'static str {
    match extension(path).as_str() {
        "js" => "\u{1f4dc}",        // 📜
        "py" => "\u{1f40d}",        // 🐍
        "html" => "\u{1f310}",      // 🌐
        "css" => "\u{1f3a8}",       // 🎨
        "json" => "\u{1f4cb}",      // 📋
        "md" => "\u{1f4dd}",        // 📝
        "txt" => "\u{1f4c4}",       // 📄
        "gitignore" => "\u{1f6ab}", // 🚫
        "env" => "\u{1f510}",       // 🔐
        _ => "\u{1f4c4}",           // 📄
    }
}

/// Display glyph for a folder row, open or closed.
pub fn folder_icon(expanded: bool) -> &'static str {
    if expanded {
        "\u{1f4c2}" // 📂
    } else {
        "\u{1f4c1}" // 📁
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_lowercases() {
        assert_eq!(extension("src/App.JS"), "js");
        assert_eq!(extension("INDEX.HTML"), "html");
    }

    #[test]
    fn test_extension_takes_last_dot() {
        assert_eq!(extension("bundle.test.js"), "js");
        assert_eq!(extension(".gitignore"), "gitignore");
    }

    #[test]
    fn test_extension_without_dot_is_whole_name() {
        assert_eq!(extension("Makefile"), "makefile");
        assert_eq!(extension("src/LICENSE"), "license");
    }

    #[test]
    fn test_language_lookup() {
        assert_eq!(Language::from_path("src/index.js"), Language::JavaScript);
        assert_eq!(Language::from_path("App.tsx"), Language::Tsx);
        assert_eq!(Language::from_path("main.py"), Language::Python);
        assert_eq!(Language::from_path("styles.css"), Language::Css);
    }

    #[test]
    fn test_language_default_is_plain_text() {
        assert_eq!(Language::from_path("notes.org"), Language::PlainText);
        assert_eq!(Language::from_path("Cargo.lock"), Language::PlainText);
    }

    #[test]
    fn test_file_icon_lookup() {
        assert_eq!(file_icon("main.py"), "\u{1f40d}");
        assert_eq!(file_icon(".gitignore"), "\u{1f6ab}");
        // unmatched extensions fall back to the document glyph
        assert_eq!(file_icon("photo.png"), "\u{1f4c4}");
    }

    #[test]
    fn test_folder_icon_tracks_expansion() {
        assert_ne!(folder_icon(true), folder_icon(false));
    }
}
