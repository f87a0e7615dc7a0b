use std::ops::Range;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::token::{InlineNode, InlineStyle};

static IMAGE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"!\[([^\[\]]*)\]\(([^\(\)]*)\)").unwrap());
static LINK_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\[\]]*)\]\(([^\(\)]*)\)").unwrap());

struct LinkMatch {
    range: Range<usize>,
    text: String,
    dest: String,
}

fn find_images(text: &str) -> Vec<LinkMatch> {
    IMAGE_REGEX
        .captures_iter(text)
        .map(|caps| LinkMatch {
            range: caps.get(0).map_or(0..0, |m| m.range()),
            text: caps[1].to_string(),
            dest: caps[2].to_string(),
        })
        .collect()
}

fn find_links(text: &str) -> Vec<LinkMatch> {
    LINK_REGEX
        .captures_iter(text)
        .filter_map(|caps| {
            let m = caps.get(0)?;
            // 画像はリンクとして扱わない
            if text[..m.start()].ends_with('!') {
                return None;
            }

            Some(LinkMatch {
                range: m.range(),
                text: caps[1].to_string(),
                dest: caps[2].to_string(),
            })
        })
        .collect()
}

pub fn extract_markdown_images(text: &str) -> Vec<(String, String)> {
    find_images(text)
        .into_iter()
        .map(|m| (m.text, m.dest))
        .collect()
}

pub fn extract_markdown_links(text: &str) -> Vec<(String, String)> {
    find_links(text)
        .into_iter()
        .map(|m| (m.text, m.dest))
        .collect()
}

pub fn split_nodes_image(nodes: &[InlineNode]) -> Vec<InlineNode> {
    split_nodes_by(nodes, InlineStyle::Image, find_images)
}

pub fn split_nodes_link(nodes: &[InlineNode]) -> Vec<InlineNode> {
    split_nodes_by(nodes, InlineStyle::Link, find_links)
}

fn split_nodes_by(
    nodes: &[InlineNode],
    style: InlineStyle,
    find: fn(&str) -> Vec<LinkMatch>,
) -> Vec<InlineNode> {
    let mut new_nodes = vec![];
    for node in nodes {
        if matches!(node.style, InlineStyle::Image | InlineStyle::Link) {
            new_nodes.push(node.clone());
            continue;
        }

        let mut cursor = 0;
        for m in find(&node.text) {
            push_segment(&mut new_nodes, node, &node.text[cursor..m.range.start]);
            new_nodes.push(InlineNode::with_url(m.text, style, m.dest));
            cursor = m.range.end;
        }
        push_segment(&mut new_nodes, node, &node.text[cursor..]);
    }

    new_nodes
}

fn push_segment(nodes: &mut Vec<InlineNode>, source: &InlineNode, segment: &str) {
    if segment.is_empty() {
        return;
    }

    nodes.push(InlineNode {
        text: segment.to_string(),
        style: source.style,
        url: source.url.clone(),
    });
}
