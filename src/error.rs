use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::token::InlineStyle;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MarkdownError {
    #[error("{0} node needs a url")]
    MissingUrl(InlineStyle),

    #[error("parent node has no tag")]
    MissingTag,

    #[error("parent node has no children")]
    MissingChildren,

    #[error("leaf node has no value")]
    MissingValue,

    #[error("invalid heading level: {0}")]
    InvalidHeadingLevel(usize),

    #[error("no top-level heading found")]
    NoTitleFound,
}

#[derive(Debug, Error)]
pub enum PageError {
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to render {}: {source}", .path.display())]
    Markdown {
        path: PathBuf,
        source: MarkdownError,
    },
}

impl PageError {
    pub(crate) fn io(path: &Path) -> impl FnOnce(std::io::Error) -> PageError + '_ {
        move |source| PageError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}
