mod ast;
mod error;
mod renderer;
mod token;
mod tokenizer;

pub mod assets;
pub mod config;
pub mod page;

pub use ast::{Attributes, HtmlNode};
pub use error::{MarkdownError, PageError};
pub use renderer::{
    block_to_html_node, extract_title, inline_to_html_node, markdown_to_html_node,
    text_to_children,
};
pub use token::{BlockType, HeadingLevel, InlineNode, InlineStyle};
pub use tokenizer::{
    block_tokenizer::{block_to_block_type, markdown_to_blocks},
    extract_markdown_images, extract_markdown_links, split_nodes_delimiter, split_nodes_image,
    split_nodes_link, text_to_inline_nodes,
};
