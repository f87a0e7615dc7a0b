use once_cell::sync::Lazy;
use regex::Regex;

use crate::token::BlockType;

static BLOCK_SEPARATOR_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n\s*\n").unwrap());
static HEADING_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^#{1,6} .+").unwrap());
static CODE_BLOCK_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)^```.+```$").unwrap());
pub(crate) static ORDERED_LIST_ITEM_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+)\. ").unwrap());

pub fn markdown_to_blocks(markdown: &str) -> Vec<String> {
    BLOCK_SEPARATOR_REGEX
        .split(markdown)
        .map(|block| {
            block
                .trim()
                .lines()
                .map(str::trim)
                .collect::<Vec<_>>()
                .join("\n")
        })
        .filter(|block| !block.is_empty())
        .collect()
}

pub fn block_to_block_type(block: &str) -> BlockType {
    // 見出し
    if HEADING_REGEX.is_match(block) {
        return BlockType::Heading;
    }

    // コードブロック
    if CODE_BLOCK_REGEX.is_match(block) {
        return BlockType::Code;
    }

    // 引用
    if block.starts_with('>') {
        return BlockType::Quote;
    }

    // リスト
    if block.starts_with("- ") {
        return BlockType::UnorderedList;
    }
    if is_ordered_list(block) {
        return BlockType::OrderedList;
    }

    // 段落
    BlockType::Paragraph
}

// 全行に "n. " があり、1 から連番であること
fn is_ordered_list(block: &str) -> bool {
    let mut count = 0;
    for (i, line) in block.lines().enumerate() {
        let number = ORDERED_LIST_ITEM_REGEX
            .captures(line)
            .and_then(|caps| caps[1].parse::<usize>().ok());
        if number != Some(i + 1) {
            return false;
        }
        count += 1;
    }

    count > 0
}
