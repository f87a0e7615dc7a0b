use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineNode {
    pub text: String,
    pub style: InlineStyle,
    pub url: Option<String>,
}

impl InlineNode {
    pub fn new(text: impl Into<String>, style: InlineStyle) -> Self {
        InlineNode {
            text: text.into(),
            style,
            url: None,
        }
    }

    pub fn with_url(text: impl Into<String>, style: InlineStyle, url: impl Into<String>) -> Self {
        InlineNode {
            text: text.into(),
            style,
            url: Some(url.into()),
        }
    }

    // 空の URL は無いものとして扱う
    pub(crate) fn url(&self) -> Option<&str> {
        self.url.as_deref().filter(|url| !url.is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InlineStyle {
    Plain,
    Bold,
    Italic,
    Code,
    Link,
    Image,
}

impl fmt::Display for InlineStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            InlineStyle::Plain => "plain",
            InlineStyle::Bold => "bold",
            InlineStyle::Italic => "italic",
            InlineStyle::Code => "code",
            InlineStyle::Link => "link",
            InlineStyle::Image => "image",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockType {
    Heading,
    Code,
    Quote,
    UnorderedList,
    OrderedList,
    Paragraph,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
}

impl HeadingLevel {
    pub fn tag(&self) -> &'static str {
        match self {
            HeadingLevel::H1 => "h1",
            HeadingLevel::H2 => "h2",
            HeadingLevel::H3 => "h3",
            HeadingLevel::H4 => "h4",
            HeadingLevel::H5 => "h5",
            HeadingLevel::H6 => "h6",
        }
    }
}

impl TryFrom<usize> for HeadingLevel {
    type Error = usize;

    fn try_from(level: usize) -> Result<Self, Self::Error> {
        match level {
            1 => Ok(HeadingLevel::H1),
            2 => Ok(HeadingLevel::H2),
            3 => Ok(HeadingLevel::H3),
            4 => Ok(HeadingLevel::H4),
            5 => Ok(HeadingLevel::H5),
            6 => Ok(HeadingLevel::H6),
            _ => Err(level),
        }
    }
}
