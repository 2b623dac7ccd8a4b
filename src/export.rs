//! Static export of the whole site.

use std::path::{Path, PathBuf};

use anyhow::Result;
use log::{debug, info};

use crate::runtime::Runtime;
use crate::site::{Page, PageData, Renderer};

/// Renders every page under `out_dir` and returns the written files.
#[tracing::instrument(skip(runtime, renderer, data))]
pub fn export_site<R: Runtime>(
    runtime: &R,
    renderer: &Renderer,
    data: &PageData<'_>,
    out_dir: &Path,
) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(Page::ALL.len());

    for page in Page::ALL {
        let html = renderer.render(page, data)?;
        let target = out_dir.join(page.export_path());
        if let Some(parent) = target.parent() {
            runtime.create_dir_all(parent)?;
        }
        runtime.write(&target, html.as_bytes())?;
        debug!("Wrote {} page to {:?}", page, target);
        written.push(target);
    }

    info!("Exported {} pages to {:?}", written.len(), out_dir);
    Ok(written)
}
