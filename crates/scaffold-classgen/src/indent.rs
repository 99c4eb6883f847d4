//! Indentation policy shared by all backends.
//!
//! One `Indent` value is built per generate call from the package's
//! `use_spaces` flag and threaded explicitly through every rendering
//! helper, so concurrent generate calls with different preferences never
//! interfere.

/// The string prepended per nesting level: a single tab, or N spaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Indent {
    unit: String,
}

impl Indent {
    /// Tab when `use_tabs`, else `width` space characters.
    pub fn new(use_tabs: bool, width: usize) -> Self {
        let unit = if use_tabs {
            "\t".to_string()
        } else {
            " ".repeat(width)
        };
        Self { unit }
    }

    /// The policy driven by a package flag: tabs unless spaces were
    /// requested, four columns wide.
    pub fn for_spaces(use_spaces: bool) -> Self {
        Self::new(!use_spaces, 4)
    }

    /// The indent unit for a single nesting level.
    pub fn unit(&self) -> &str {
        &self.unit
    }

    /// Prefix every non-empty line of `code` with `levels` indent units.
    pub fn shift(&self, code: &str, levels: usize) -> String {
        let prefix = self.unit.repeat(levels);
        let mut out = String::with_capacity(code.len());
        for (i, line) in code.split('\n').enumerate() {
            if i > 0 {
                out.push('\n');
            }
            if !line.is_empty() {
                out.push_str(&prefix);
                out.push_str(line);
            }
        }
        out
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::new(true, 4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_unit() {
        assert_eq!(Indent::new(true, 4).unit(), "\t");
    }

    #[test]
    fn space_unit_respects_width() {
        assert_eq!(Indent::new(false, 2).unit(), "  ");
        assert_eq!(Indent::new(false, 4).unit(), "    ");
    }

    #[test]
    fn for_spaces_flag() {
        assert_eq!(Indent::for_spaces(false).unit(), "\t");
        assert_eq!(Indent::for_spaces(true).unit(), "    ");
    }

    #[test]
    fn shift_skips_blank_lines() {
        let indent = Indent::new(true, 4);
        let shifted = indent.shift("a {\n\nb\n}", 1);
        assert_eq!(shifted, "\ta {\n\n\tb\n\t}");
    }

    #[test]
    fn shift_two_levels() {
        let indent = Indent::new(false, 2);
        assert_eq!(indent.shift("x", 2), "    x");
    }
}
