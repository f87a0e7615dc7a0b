use crate::token::{InlineNode, InlineStyle};

// 奇数番目の区間が style を持つ。空の区間は捨てる
pub fn split_nodes_delimiter(
    nodes: &[InlineNode],
    delimiter: &str,
    style: InlineStyle,
) -> Vec<InlineNode> {
    let mut new_nodes = vec![];
    for node in nodes {
        for (i, segment) in node.text.split(delimiter).enumerate() {
            if segment.is_empty() {
                continue;
            }

            if i % 2 == 0 {
                new_nodes.push(InlineNode {
                    text: segment.to_string(),
                    style: node.style,
                    url: node.url.clone(),
                });
            } else {
                new_nodes.push(InlineNode::new(segment, style));
            }
        }
    }

    new_nodes
}
