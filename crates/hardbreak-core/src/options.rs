//! Configuration options for markdown serialization

/// Stylistic options for markdown serialization
#[derive(Debug, Clone)]
pub struct FormatOptions {
    /// Bullet list marker
    pub bullet_marker: char,

    /// Emphasis delimiter
    pub emphasis_marker: char,

    /// Strong delimiter
    pub strong_marker: String,

    /// Fence string for fenced code blocks
    pub fence: String,

    /// Thematic break string
    pub thematic_break: String,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            bullet_marker: '-',
            emphasis_marker: '*',
            strong_marker: "**".to_string(),
            fence: "```".to_string(),
            thematic_break: "---".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = FormatOptions::default();
        assert_eq!(options.bullet_marker, '-');
        assert_eq!(options.emphasis_marker, '*');
        assert_eq!(options.strong_marker, "**");
        assert_eq!(options.fence, "```");
        assert_eq!(options.thematic_break, "---");
    }
}
