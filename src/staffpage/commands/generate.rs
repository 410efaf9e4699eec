use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::publish::Publisher;
use crate::render::PageRenderer;
use crate::store::{Directory, StoreBackend};

/// Renders the directory and publishes it over the output page, backing up the old one.
pub fn run<B: StoreBackend>(
    directory: &Directory<B>,
    renderer: &PageRenderer,
    publisher: &Publisher,
) -> Result<CmdResult> {
    let page = renderer.render_page(directory);
    let report = publisher.publish(&page.html)?;

    let mut result = CmdResult::default();
    for warning in page.warnings {
        result.add_message(CmdMessage::warning(warning));
    }
    let mut paths = vec![report.output.clone()];
    if let Some(backup) = report.backup {
        result.add_message(CmdMessage::info(format!(
            "Previous page backed up to {}",
            backup.display()
        )));
        paths.push(backup);
    }
    if !report.pruned.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "Removed {} old backup(s)",
            report.pruned.len()
        )));
    }
    result.add_message(CmdMessage::success(format!(
        "Staff page generated: {}",
        report.output.display()
    )));
    Ok(result.with_paths(paths))
}

/// Renders without writing anything.
pub fn preview<B: StoreBackend>(directory: &Directory<B>, renderer: &PageRenderer) -> CmdResult {
    let page = renderer.render_page(directory);
    let mut result = CmdResult::default();
    for warning in page.warnings {
        result.add_message(CmdMessage::warning(warning));
    }
    result.with_html(page.html)
}
