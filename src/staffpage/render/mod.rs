//! # Page Renderer
//!
//! Turns the current [`Directory`] into the complete `our-staff.html` document. Rendering
//! reads the store and probes the filesystem for referenced media; it writes nothing and
//! keeps no state between calls, so an unchanged directory renders to identical bytes.
//!
//! Missing headshots or documents never block generation. They are collected as
//! warnings and emitted as one comment block at the top of the page; a card whose
//! headshot is missing falls back to the placeholder image.

mod card;
mod page;

use crate::config::SiteConfig;
use crate::model::{Category, StaffRecord};
use crate::store::{Directory, StoreBackend};
use card::{escape, render_card, Markup};
use page::Section;
use std::path::{Path, PathBuf};

/// Depth of the section markup inside `<div class="container">`.
const SECTION_DEPTH: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    pub html: String,
    pub warnings: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct PageRenderer {
    root: PathBuf,
    placeholder_image: String,
    bio_width: usize,
}

impl PageRenderer {
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            root: config.root.clone(),
            placeholder_image: config.placeholder_image.clone(),
            bio_width: config.bio_width.max(1),
        }
    }

    /// The full HTML document for `directory`.
    pub fn render<B: StoreBackend>(&self, directory: &Directory<B>) -> String {
        self.render_page(directory).html
    }

    /// Like [`render`](Self::render), also handing back the media warnings.
    pub fn render_page<B: StoreBackend>(&self, directory: &Directory<B>) -> RenderedPage {
        let medical = directory.list(Category::Medical);
        let support = directory.list(Category::Support);

        let warnings = self.media_warnings(medical.iter().chain(support.iter()).copied());
        for warning in &warnings {
            tracing::warn!("{}", warning);
        }

        let mut out = Markup::new();
        if !warnings.is_empty() {
            out.raw("<!-- Media warnings:\n");
            for warning in &warnings {
                out.raw(&format!("  - {}\n", warning));
            }
            out.raw("-->\n");
        }
        out.raw(page::HEAD);
        out.raw(page::BODY_OPEN);
        self.render_section(&mut out, &page::MEDICAL, &medical);
        self.render_section(&mut out, &page::SUPPORT, &support);
        out.raw(page::BODY_CLOSE);
        out.raw(page::FOOTER);

        RenderedPage {
            html: out.finish(),
            warnings,
        }
    }

    /// Human-readable notes for every referenced file that does not exist.
    pub fn media_warnings<'a, I>(&self, records: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a StaffRecord>,
    {
        let mut warnings = Vec::new();
        for record in records {
            if let Some(image) = &record.image {
                if !self.exists(image) {
                    warnings.push(format!("Missing image for {}: {}", record.name, image));
                }
            }
            for doc in &record.documents {
                if !doc.path.is_empty() && !self.exists(&doc.path) {
                    warnings.push(format!(
                        "Missing document for {}: {}",
                        record.name, doc.path
                    ));
                }
            }
        }
        warnings
    }

    /// Card markup for a list of records, without the page around it.
    pub fn render_cards(&self, records: &[&StaffRecord]) -> String {
        let mut out = Markup::new();
        for record in records {
            render_card(
                &mut out,
                0,
                record,
                self.image_src(record),
                self.bio_width,
            );
        }
        out.finish()
    }

    fn render_section(&self, out: &mut Markup, section: &Section, records: &[&StaffRecord]) {
        let depth = SECTION_DEPTH;
        out.line(depth, r#"<div class="section-header">"#);
        out.line(
            depth + 1,
            &format!(r#"<span class="section-badge">{}</span>"#, section.badge),
        );
        out.line(
            depth + 1,
            &format!(r#"<h2 class="gradient-text">{}</h2>"#, section.heading),
        );
        out.line(depth + 1, &format!("<p>{}</p>", section.blurb));
        out.line(depth, "</div>");

        out.line(
            depth,
            &format!(
                r#"<div class="{}" role="list" aria-label="{}">"#,
                section.grid_class, section.aria_label
            ),
        );
        if records.is_empty() {
            out.line(
                depth + 1,
                r#"<div class="empty-state" role="status" aria-live="polite">"#,
            );
            out.line(depth + 2, &format!("<p>{}</p>", escape(page::EMPTY_STATE)));
            out.line(depth + 1, "</div>");
        } else {
            for record in records {
                render_card(
                    out,
                    depth + 1,
                    record,
                    self.image_src(record),
                    self.bio_width,
                );
            }
        }
        out.line(depth, "</div>");
    }

    fn image_src<'a>(&'a self, record: &'a StaffRecord) -> &'a str {
        match &record.image {
            Some(image) if self.exists(image) => image,
            _ => &self.placeholder_image,
        }
    }

    fn exists(&self, relative: &str) -> bool {
        self.root.join(Path::new(relative)).exists()
    }
}
