//! # API Facade
//!
//! [`StaffApi`] is the single entry point for every staff-page operation, whichever
//! editor is driving it. It owns the loaded [`Directory`] together with the
//! [`AssetImporter`], [`PageRenderer`] and [`Publisher`] built from the same
//! [`SiteConfig`], and dispatches to the functions in [`commands`].
//!
//! The facade does no business logic and no I/O of its own: no printing, no prompting.
//! It returns [`CmdResult`]s and leaves presentation to the caller.
//!
//! `StaffApi<B: StoreBackend>` is generic over where the store lives:
//! - Production: `StaffApi<JsonFileBackend>` via [`StaffApi::open`]
//! - Testing: `StaffApi<InMemoryBackend>`

use crate::assets::AssetImporter;
use crate::commands::{self, CmdResult};
use crate::config::SiteConfig;
use crate::error::Result;
use crate::form::RecordForm;
use crate::model::Category;
use crate::publish::Publisher;
use crate::render::PageRenderer;
use crate::store::fs::JsonFileBackend;
use crate::store::{Directory, StoreBackend};
use std::path::Path;

pub struct StaffApi<B: StoreBackend> {
    config: SiteConfig,
    directory: Directory<B>,
    importer: AssetImporter,
    renderer: PageRenderer,
    publisher: Publisher,
}

impl StaffApi<JsonFileBackend> {
    /// Opens the store named by `config`, creating it (and the asset folders) if needed.
    pub fn open(config: SiteConfig) -> Result<Self> {
        let backend = JsonFileBackend::new(config.data_file());
        Self::new(backend, config)
    }
}

impl<B: StoreBackend> StaffApi<B> {
    pub fn new(backend: B, config: SiteConfig) -> Result<Self> {
        let directory = Directory::load(backend, &config)?;
        let importer = AssetImporter::from_meta(&config, directory.meta());
        importer.ensure_dirs()?;
        Ok(Self {
            renderer: PageRenderer::new(&config),
            publisher: Publisher::new(&config),
            config,
            directory,
            importer,
        })
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn directory(&self) -> &Directory<B> {
        &self.directory
    }

    pub fn importer(&self) -> &AssetImporter {
        &self.importer
    }

    pub fn list_staff(&self, category: Category) -> Result<CmdResult> {
        commands::list::run(&self.directory, category)
    }

    pub fn show_staff(&self, category: Category, id: &str) -> Result<CmdResult> {
        commands::show::run(&self.directory, category, id)
    }

    pub fn add_staff(&mut self, category: Category, form: &RecordForm) -> Result<CmdResult> {
        commands::add::run(&mut self.directory, category, form)
    }

    pub fn update_staff(
        &mut self,
        category: Category,
        id: &str,
        form: &RecordForm,
    ) -> Result<CmdResult> {
        commands::update::run(&mut self.directory, category, id, form)
    }

    pub fn remove_staff(&mut self, category: Category, id: &str) -> Result<CmdResult> {
        commands::remove::run(&mut self.directory, category, id)
    }

    pub fn duplicate_staff(&mut self, category: Category, id: &str) -> Result<CmdResult> {
        commands::duplicate::run(&mut self.directory, category, id)
    }

    pub fn import_image(&self, source: &Path, id: &str) -> Result<CmdResult> {
        commands::import::image(&self.importer, source, id)
    }

    pub fn import_document(
        &self,
        source: &Path,
        id: &str,
        label: Option<&str>,
    ) -> Result<CmdResult> {
        commands::import::document(&self.importer, source, id, label)
    }

    /// Imports whatever files `form` references from outside the project.
    pub fn import_form_assets(&self, form: &mut RecordForm, id: &str) -> Result<CmdResult> {
        commands::import::form_assets(&self.importer, form, id)
    }

    pub fn attach_document(
        &mut self,
        category: Category,
        id: &str,
        label: &str,
        source: &Path,
    ) -> Result<CmdResult> {
        commands::attach::run(
            &mut self.directory,
            &self.importer,
            category,
            id,
            label,
            source,
        )
    }

    pub fn generate_page(&self) -> Result<CmdResult> {
        commands::generate::run(&self.directory, &self.renderer, &self.publisher)
    }

    pub fn preview_page(&self) -> CmdResult {
        commands::generate::preview(&self.directory, &self.renderer)
    }

    pub fn export(&mut self, target: &Path) -> Result<CmdResult> {
        commands::export::run(&mut self.directory, &self.config, target)
    }
}
