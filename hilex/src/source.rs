use crate::Span;

/// a named piece of source text
///
/// the scan loop relies on the text ending with a line break, so the
/// constructor appends one `\n` when the text misses it. spans of scanned
/// tokens always select into this normalized text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    file_name: String,
    text: String,
}

impl Source {
    pub fn new(file_name: impl ToString, text: impl Into<String>) -> Self {
        let mut text = text.into();
        if !text.ends_with('\n') {
            text.push('\n');
        }
        Self {
            file_name: file_name.to_string(),
            text,
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// line and column of a byte offset, both starting from 1
    pub fn locate(&self, offset: usize) -> (usize, usize) {
        let offset = offset.min(self.text.len());
        let upto = &self.text[..offset];
        let line_start = upto.rfind('\n').map(|idx| idx + 1).unwrap_or(0);
        let line = upto.matches('\n').count() + 1;
        let column = self.text[line_start..offset].chars().count() + 1;
        (line, column)
    }
}

impl std::ops::Deref for Source {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.text
    }
}

impl std::ops::Index<Span> for Source {
    type Output = str;

    fn index(&self, index: Span) -> &Self::Output {
        &self.text[index.start..index.end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn final_newline() {
        assert_eq!(Source::new("a.tex", "abc").text(), "abc\n");
        assert_eq!(Source::new("a.tex", "abc\n").text(), "abc\n");
        assert_eq!(Source::new("a.tex", "").text(), "\n");
    }

    #[test]
    fn locate() {
        let source = Source::new("a.tex", "ab\ncde\n");
        assert_eq!(source.locate(0), (1, 1));
        assert_eq!(source.locate(1), (1, 2));
        assert_eq!(source.locate(3), (2, 1));
        assert_eq!(source.locate(5), (2, 3));
    }

    #[test]
    fn select() {
        let source = Source::new("a.tex", "hello world");
        assert_eq!(&source[Span::new(6, 11)], "world");
    }
}
