use std::{fs, path::Path};

use tracing::debug;

use crate::{
    error::{MarkdownError, PageError},
    renderer::{extract_title, markdown_to_html_node},
};

const TITLE_MARKER: &str = "{{ Title }}";
const CONTENT_MARKER: &str = "{{ Content }}";

// ルート相対の href / src は base_path を起点にする
pub fn render_page(markdown: &str, template: &str, base_path: &str) -> Result<String, MarkdownError> {
    let content = markdown_to_html_node(markdown)?.to_html()?;
    let title = extract_title(markdown)?;

    Ok(template
        .replace(TITLE_MARKER, &title)
        .replace(CONTENT_MARKER, &content)
        .replace("href=\"/", &format!("href=\"{}", base_path))
        .replace("src=\"/", &format!("src=\"{}", base_path)))
}

pub fn generate_page(
    from_path: &Path,
    template_path: &Path,
    dest_path: &Path,
    base_path: &str,
) -> Result<(), PageError> {
    debug!(
        from = %from_path.display(),
        to = %dest_path.display(),
        template = %template_path.display(),
        "generating page"
    );

    let markdown = fs::read_to_string(from_path).map_err(PageError::io(from_path))?;
    let template = fs::read_to_string(template_path).map_err(PageError::io(template_path))?;
    let html =
        render_page(&markdown, &template, base_path).map_err(|source| PageError::Markdown {
            path: from_path.to_path_buf(),
            source,
        })?;

    if let Some(parent) = dest_path.parent() {
        fs::create_dir_all(parent).map_err(PageError::io(parent))?;
    }
    fs::write(dest_path, html).map_err(PageError::io(dest_path))?;

    Ok(())
}

pub fn generate_pages_recursive(
    content_dir: &Path,
    template_path: &Path,
    dest_dir: &Path,
    base_path: &str,
) -> Result<usize, PageError> {
    let mut entries = fs::read_dir(content_dir)
        .and_then(|dir| dir.collect::<Result<Vec<_>, _>>())
        .map_err(PageError::io(content_dir))?;
    entries.sort_by_key(|entry| entry.file_name());

    let mut count = 0;
    for entry in entries {
        let path = entry.path();
        let dest = dest_dir.join(entry.file_name());

        if path.is_dir() {
            count += generate_pages_recursive(&path, template_path, &dest, base_path)?;
        } else if path.extension().is_some_and(|ext| ext == "md") {
            generate_page(&path, template_path, &dest.with_extension("html"), base_path)?;
            count += 1;
        }
    }

    debug!(dir = %content_dir.display(), pages = count, "generated pages");

    Ok(count)
}

pub fn normalize_base_path(base_path: &str) -> String {
    let trimmed = base_path.trim().trim_matches('/');
    if trimmed.is_empty() {
        return "/".to_string();
    }

    format!("/{}/", trimmed)
}
