use std::{fs, path::Path};

use tracing::debug;

use crate::error::PageError;

pub fn prepare_output_dir(path: &Path) -> Result<(), PageError> {
    if path.exists() {
        debug!(dir = %path.display(), "clearing output directory");
        fs::remove_dir_all(path).map_err(PageError::io(path))?;
    }
    fs::create_dir_all(path).map_err(PageError::io(path))?;

    Ok(())
}

// コピーしたファイル数を返す
pub fn copy_static(src: &Path, dest: &Path) -> Result<usize, PageError> {
    fs::create_dir_all(dest).map_err(PageError::io(dest))?;

    let mut count = 0;
    for entry in fs::read_dir(src).map_err(PageError::io(src))? {
        let entry = entry.map_err(PageError::io(src))?;
        let from = entry.path();
        let to = dest.join(entry.file_name());

        if from.is_dir() {
            count += copy_static(&from, &to)?;
        } else {
            debug!(from = %from.display(), to = %to.display(), "copying file");
            fs::copy(&from, &to).map_err(PageError::io(&from))?;
            count += 1;
        }
    }

    Ok(count)
}
