pub(crate) mod block_tokenizer;
mod emphasis;
mod link;

pub use self::{
    emphasis::split_nodes_delimiter,
    link::{extract_markdown_images, extract_markdown_links, split_nodes_image, split_nodes_link},
};
use crate::token::{InlineNode, InlineStyle};

const DELIMITERS: [(&str, InlineStyle); 3] = [
    ("**", InlineStyle::Bold),
    ("_", InlineStyle::Italic),
    ("`", InlineStyle::Code),
];

pub fn text_to_inline_nodes(text: &str) -> Vec<InlineNode> {
    let nodes = vec![InlineNode::new(text, InlineStyle::Plain)];
    // 画像とリンクを先に切り出し、URL を区切り文字の処理に渡さない
    let nodes = split_nodes_image(&nodes);
    let nodes = split_nodes_link(&nodes);

    DELIMITERS
        .iter()
        .fold(nodes, |nodes, &(delimiter, style)| {
            split_nodes_delimiter(&nodes, delimiter, style)
        })
}

#[cfg(test)]
mod tests {
    use crate::{
        token::{InlineNode, InlineStyle},
        tokenizer::text_to_inline_nodes,
    };

    #[test]
    fn plain_text() {
        let input = "A normal text with nothing unusual";
        assert_eq!(
            text_to_inline_nodes(input),
            vec![InlineNode::new(input, InlineStyle::Plain)]
        );
    }

    #[test]
    fn empty_text() {
        assert_eq!(text_to_inline_nodes(""), vec![]);
    }

    #[test]
    fn all_styles() {
        let input = "This is **text** with an _italic_ word and a `code block` and an ![obi wan image](https://i.imgur.com/fJRm4Vk.jpeg) and a [link](https://boot.dev)";
        assert_eq!(
            text_to_inline_nodes(input),
            vec![
                InlineNode::new("This is ", InlineStyle::Plain),
                InlineNode::new("text", InlineStyle::Bold),
                InlineNode::new(" with an ", InlineStyle::Plain),
                InlineNode::new("italic", InlineStyle::Italic),
                InlineNode::new(" word and a ", InlineStyle::Plain),
                InlineNode::new("code block", InlineStyle::Code),
                InlineNode::new(" and an ", InlineStyle::Plain),
                InlineNode::with_url(
                    "obi wan image",
                    InlineStyle::Image,
                    "https://i.imgur.com/fJRm4Vk.jpeg"
                ),
                InlineNode::new(" and a ", InlineStyle::Plain),
                InlineNode::with_url("link", InlineStyle::Link, "https://boot.dev"),
            ]
        );
    }

    #[test]
    fn urls_are_not_split_by_delimiters() {
        let input = "see [docs](https://example.com/some_long_path) and ![a](https://example.com/x_y.png)";
        assert_eq!(
            text_to_inline_nodes(input),
            vec![
                InlineNode::new("see ", InlineStyle::Plain),
                InlineNode::with_url(
                    "docs",
                    InlineStyle::Link,
                    "https://example.com/some_long_path"
                ),
                InlineNode::new(" and ", InlineStyle::Plain),
                InlineNode::with_url("a", InlineStyle::Image, "https://example.com/x_y.png"),
            ]
        );
    }

    #[test]
    fn delimited_spans_reproduce_sequence() {
        let expected = vec![
            InlineNode::new("bold", InlineStyle::Bold),
            InlineNode::new(" then ", InlineStyle::Plain),
            InlineNode::new("italic", InlineStyle::Italic),
            InlineNode::new(" then ", InlineStyle::Plain),
            InlineNode::new("code", InlineStyle::Code),
        ];
        let input = "**bold** then _italic_ then `code`";

        assert_eq!(text_to_inline_nodes(input), expected);
    }

    #[test]
    fn unterminated_delimiter() {
        // 閉じられていない強調はそのまま分割される
        assert_eq!(
            text_to_inline_nodes("a **b"),
            vec![
                InlineNode::new("a ", InlineStyle::Plain),
                InlineNode::new("b", InlineStyle::Bold),
            ]
        );
        assert_eq!(
            text_to_inline_nodes("snake_case_name_here"),
            vec![
                InlineNode::new("snake", InlineStyle::Plain),
                InlineNode::new("case", InlineStyle::Italic),
                InlineNode::new("name", InlineStyle::Plain),
                InlineNode::new("here", InlineStyle::Italic),
            ]
        );
    }
}
