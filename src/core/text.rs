//! Line-break normalization, technology-tag parsing, and the fixed HTML
//! snippets behind the formatting toolbar

/// Convert stored `<br>` markup to real newlines for an editable surface
pub fn normalize_for_edit(text: &str) -> String {
    text.replace("<br>", "\n")
}

/// The inverse of [`normalize_for_edit`]: split on newlines and rejoin
/// with `<br>` for storage.
///
/// For any text free of raw-newline/`<br>` ambiguity,
/// `normalize_for_edit(normalize_for_storage(t)) == t`.
pub fn normalize_for_storage(text: &str) -> String {
    text.split('\n').collect::<Vec<_>>().join("<br>")
}

/// Parse a comma-separated technologies field: whitespace trimmed,
/// empty tokens dropped
pub fn parse_technologies(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|tech| !tech.is_empty())
        .map(String::from)
        .collect()
}

/// Join technologies back into the comma-separated form the edit field shows
pub fn join_technologies(technologies: &[String]) -> String {
    technologies.join(", ")
}

/// Toolbar actions that wrap the current selection in a tag pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wrap {
    Bold,
    Italic,
    Underline,
}

impl Wrap {
    fn tags(self) -> (&'static str, &'static str) {
        match self {
            Wrap::Bold => ("<strong>", "</strong>"),
            Wrap::Italic => ("<em>", "</em>"),
            Wrap::Underline => ("<u>", "</u>"),
        }
    }

    /// Wrap a selection; with no selection this yields the empty tag pair
    /// for the caller to position the cursor inside
    pub fn apply(self, selection: &str) -> String {
        let (open, close) = self.tags();
        format!("{open}{selection}{close}")
    }
}

/// Toolbar actions that insert a fixed snippet at the cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Snippet {
    BulletList,
    NumberedList,
    Link,
    LineBreak,
    Paragraph,
    Heading1,
    Heading2,
    Heading3,
    Spacing,
}

impl Snippet {
    pub fn html(self) -> &'static str {
        match self {
            Snippet::BulletList => "\n<ul>\n<li>First item</li>\n<li>Second item</li>\n</ul>\n",
            Snippet::NumberedList => "\n<ol>\n<li>First item</li>\n<li>Second item</li>\n</ol>\n",
            Snippet::Link => "<a href=\"https://example.com\">Link text</a>",
            Snippet::LineBreak => "<br>",
            Snippet::Paragraph => "\n<p>Your paragraph text here</p>\n",
            Snippet::Heading1 => "\n<h1>Main Heading</h1>\n",
            Snippet::Heading2 => "\n<h2>Section Heading</h2>\n",
            Snippet::Heading3 => "\n<h3>Subsection Heading</h3>\n",
            Snippet::Spacing => "\n<br><br>\n",
        }
    }
}

/// Strip all HTML tags from a selection
pub fn clear_formatting(text: &str) -> String {
    let re = regex_lite::Regex::new(r"<[^>]+>").unwrap();
    re.replace_all(text, "").into_owned()
}

/// Render an HTML body as plain text for preview: `<br>` variants become
/// newlines, paragraph ends become blank lines, remaining tags are stripped
pub fn render_preview(html: &str) -> String {
    let re_br = regex_lite::Regex::new(r"<br/?>").unwrap();
    let text = re_br.replace_all(html, "\n");
    let text = text.replace("</p>", "\n\n");
    clear_formatting(&text)
}
