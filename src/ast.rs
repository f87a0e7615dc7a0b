use crate::error::MarkdownError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes(Vec<(String, String)>);

impl Attributes {
    pub fn new() -> Self {
        Attributes(Vec::new())
    }

    // 既存のキーはその場で上書きする
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some((_, v)) => *v = value,
            None => self.0.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn to_html(&self) -> String {
        self.iter()
            .map(|(key, value)| format!(" {}=\"{}\"", key, value))
            .collect()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attributes = Attributes::new();
        for (key, value) in iter {
            attributes.insert(key, value);
        }

        attributes
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    Leaf {
        tag: Option<String>,
        value: Option<String>,
        attributes: Attributes,
    },
    Parent {
        tag: Option<String>,
        children: Vec<HtmlNode>,
        attributes: Attributes,
    },
}

impl HtmlNode {
    pub fn leaf(tag: Option<&str>, value: impl Into<String>) -> Self {
        HtmlNode::Leaf {
            tag: tag.map(str::to_string),
            value: Some(value.into()),
            attributes: Attributes::new(),
        }
    }

    pub fn parent(tag: &str, children: Vec<HtmlNode>) -> Self {
        HtmlNode::Parent {
            tag: Some(tag.to_string()),
            children,
            attributes: Attributes::new(),
        }
    }

    pub fn with_attributes(mut self, attrs: Attributes) -> Self {
        match &mut self {
            HtmlNode::Leaf { attributes, .. } | HtmlNode::Parent { attributes, .. } => {
                *attributes = attrs
            }
        }

        self
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf { tag, .. } | HtmlNode::Parent { tag, .. } => tag.as_deref(),
        }
    }

    pub fn attributes(&self) -> &Attributes {
        match self {
            HtmlNode::Leaf { attributes, .. } | HtmlNode::Parent { attributes, .. } => attributes,
        }
    }

    pub fn to_html(&self) -> Result<String, MarkdownError> {
        match self {
            HtmlNode::Leaf {
                tag,
                value,
                attributes,
            } => {
                let tag = tag.as_deref().filter(|t| !t.is_empty());
                let value = match (value.as_deref(), tag) {
                    (Some(value), _) => value,
                    // 画像は値を持たない
                    (None, Some("img")) => "",
                    (None, _) => return Err(MarkdownError::MissingValue),
                };

                match tag {
                    None => Ok(value.to_string()),
                    // 画像は閉じタグを持たない
                    Some("img") if value.is_empty() => {
                        Ok(format!("<img{}>", attributes.to_html()))
                    }
                    Some(tag) => Ok(format!(
                        "<{0}{1}>{2}</{0}>",
                        tag,
                        attributes.to_html(),
                        value
                    )),
                }
            }
            HtmlNode::Parent {
                tag,
                children,
                attributes,
            } => {
                let tag = match tag.as_deref() {
                    Some(tag) if !tag.is_empty() => tag,
                    _ => return Err(MarkdownError::MissingTag),
                };
                if children.is_empty() {
                    return Err(MarkdownError::MissingChildren);
                }

                let mut html = format!("<{}{}>", tag, attributes.to_html());
                for child in children {
                    html += &child.to_html()?;
                }
                html += &format!("</{}>", tag);

                Ok(html)
            }
        }
    }
}
