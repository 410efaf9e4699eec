use crate::commands::{CmdMessage, CmdResult};
use crate::config::SiteConfig;
use crate::error::{Result, StaffError};
use crate::model::Category;
use crate::store::{Directory, StoreBackend};
use flate2::write::GzEncoder;
use flate2::Compression;
use std::collections::BTreeSet;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

/// Saves the store and writes a copy of it to `target`.
///
/// A target ending in `.tar.gz` gets a bundle instead: the store JSON plus every
/// referenced image and document that exists, under their project-relative paths.
pub fn run<B: StoreBackend>(
    directory: &mut Directory<B>,
    config: &SiteConfig,
    target: &Path,
) -> Result<CmdResult> {
    directory.save()?;
    let json = directory.to_json()?;

    if let Some(parent) = target.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(StaffError::Io)?;
        }
    }

    let mut result = CmdResult::default();
    if is_bundle(target) {
        let assets = referenced_assets(directory, config);
        let file = File::create(target).map_err(StaffError::Io)?;
        write_archive(file, config, &json, &assets)?;
        result.add_message(CmdMessage::success(format!(
            "Exported staff directory and {} asset(s) to {}",
            assets.len(),
            target.display()
        )));
    } else {
        fs::write(target, &json).map_err(StaffError::Io)?;
        result.add_message(CmdMessage::success(format!(
            "Exported staff directory to {}",
            target.display()
        )));
    }
    tracing::info!("Exported staff directory to {}", target.display());
    Ok(result.with_paths(vec![target.to_path_buf()]))
}

fn is_bundle(target: &Path) -> bool {
    target
        .file_name()
        .map(|name| name.to_string_lossy().ends_with(".tar.gz"))
        .unwrap_or(false)
}

/// Existing image and document paths referenced by any record, deduplicated.
fn referenced_assets<B: StoreBackend>(directory: &Directory<B>, config: &SiteConfig) -> BTreeSet<String> {
    let mut assets = BTreeSet::new();
    for category in Category::ALL {
        for record in directory.records(category) {
            let docs = record.documents.iter().map(|doc| doc.path.as_str());
            for path in record.image.as_deref().into_iter().chain(docs) {
                if !path.is_empty() && config.resolve(path).is_file() {
                    assets.insert(path.to_string());
                }
            }
        }
    }
    assets
}

fn write_archive<W: Write>(
    writer: W,
    config: &SiteConfig,
    json: &str,
    assets: &BTreeSet<String>,
) -> Result<()> {
    let enc = GzEncoder::new(writer, Compression::default());
    let mut tar = tar::Builder::new(enc);

    let mut header = tar::Header::new_gnu();
    header.set_size(json.len() as u64);
    header.set_mode(0o644);
    header.set_cksum();
    tar.append_data(&mut header, &config.data_path, json.as_bytes())
        .map_err(StaffError::Io)?;

    for asset in assets {
        tar.append_path_with_name(config.resolve(asset), asset)
            .map_err(StaffError::Io)?;
    }

    tar.into_inner()
        .map_err(StaffError::Io)?
        .finish()
        .map_err(StaffError::Io)?;
    Ok(())
}
