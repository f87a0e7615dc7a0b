use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

use crate::{
    ast::HtmlNode,
    error::MarkdownError,
    token::{BlockType, HeadingLevel, InlineNode, InlineStyle},
    tokenizer::{
        block_tokenizer::{block_to_block_type, markdown_to_blocks, ORDERED_LIST_ITEM_REGEX},
        text_to_inline_nodes,
    },
};

static TITLE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^#\s+(\S.*)$").unwrap());

pub fn inline_to_html_node(node: &InlineNode) -> Result<HtmlNode, MarkdownError> {
    let html_node = match node.style {
        InlineStyle::Plain => HtmlNode::leaf(None, node.text.as_str()),
        InlineStyle::Bold => HtmlNode::leaf(Some("b"), node.text.as_str()),
        InlineStyle::Italic => HtmlNode::leaf(Some("i"), node.text.as_str()),
        InlineStyle::Code => HtmlNode::leaf(Some("code"), node.text.as_str()),
        InlineStyle::Link => {
            let url = node.url().ok_or(MarkdownError::MissingUrl(node.style))?;
            HtmlNode::leaf(Some("a"), node.text.as_str())
                .with_attributes([("href", url)].into_iter().collect())
        }
        InlineStyle::Image => {
            let url = node.url().ok_or(MarkdownError::MissingUrl(node.style))?;
            HtmlNode::leaf(Some("img"), "").with_attributes(
                [("src", url), ("alt", node.text.as_str())]
                    .into_iter()
                    .collect(),
            )
        }
    };

    Ok(html_node)
}

pub fn text_to_children(text: &str) -> Result<Vec<HtmlNode>, MarkdownError> {
    text_to_inline_nodes(text)
        .iter()
        .map(inline_to_html_node)
        .collect()
}

pub fn block_to_html_node(block: &str, block_type: BlockType) -> Result<HtmlNode, MarkdownError> {
    match block_type {
        BlockType::Heading => heading_to_html_node(block),
        BlockType::Code => code_to_html_node(block),
        BlockType::Quote => {
            let text = block
                .lines()
                .map(|line| line.trim_start_matches('>').trim())
                .filter(|line| !line.is_empty())
                .collect::<Vec<_>>()
                .join(" ");

            Ok(HtmlNode::parent("blockquote", text_to_children(&text)?))
        }
        BlockType::UnorderedList => list_to_html_node("ul", block, |line| {
            line.strip_prefix("- ").unwrap_or(line).to_string()
        }),
        BlockType::OrderedList => list_to_html_node("ol", block, |line| {
            ORDERED_LIST_ITEM_REGEX.replace(line, "").into_owned()
        }),
        BlockType::Paragraph => {
            let text = block
                .lines()
                .map(str::trim)
                .collect::<Vec<_>>()
                .join(" ");

            Ok(HtmlNode::parent("p", text_to_children(&text)?))
        }
    }
}

fn heading_to_html_node(block: &str) -> Result<HtmlNode, MarkdownError> {
    let level = block.chars().take_while(|&c| c == '#').count();
    let heading_level =
        HeadingLevel::try_from(level).map_err(MarkdownError::InvalidHeadingLevel)?;
    let text = block[level..].trim();

    Ok(HtmlNode::parent(heading_level.tag(), text_to_children(text)?))
}

fn code_to_html_node(block: &str) -> Result<HtmlNode, MarkdownError> {
    let text = format!("{}\n", block.trim_matches('`').trim());
    let code = inline_to_html_node(&InlineNode::new(text, InlineStyle::Code))?;

    Ok(HtmlNode::parent("pre", vec![code]))
}

fn list_to_html_node(
    tag: &str,
    block: &str,
    strip_marker: impl Fn(&str) -> String,
) -> Result<HtmlNode, MarkdownError> {
    let mut items = vec![];
    for line in block.lines().map(str::trim).filter(|l| !l.is_empty()) {
        let text = strip_marker(line);
        items.push(HtmlNode::parent("li", text_to_children(text.trim())?));
    }

    Ok(HtmlNode::parent(tag, items))
}

pub fn markdown_to_html_node(markdown: &str) -> Result<HtmlNode, MarkdownError> {
    if markdown.trim().is_empty() {
        return Ok(HtmlNode::leaf(Some("div"), ""));
    }

    let mut children = vec![];
    for block in markdown_to_blocks(markdown) {
        let block_type = block_to_block_type(&block);
        trace!(?block_type, block = %block, "classified block");

        children.push(block_to_html_node(&block, block_type)?);
    }

    Ok(HtmlNode::parent("div", children))
}

pub fn extract_title(markdown: &str) -> Result<String, MarkdownError> {
    markdown
        .lines()
        .find_map(|line| {
            TITLE_REGEX
                .captures(line.trim())
                .map(|caps| caps[1].trim().to_string())
        })
        .ok_or(MarkdownError::NoTitleFound)
}
