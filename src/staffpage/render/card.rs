use crate::model::{format_list, tel_target, StaffRecord};

const INDENT: &str = "    ";

/// Line-oriented HTML builder with four-space indentation.
#[derive(Default)]
pub(super) struct Markup {
    out: String,
}

impl Markup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `text` at `depth`; each line of a multi-line `text` gets the same indent.
    pub fn line(&mut self, depth: usize, text: &str) {
        for line in text.lines() {
            for _ in 0..depth {
                self.out.push_str(INDENT);
            }
            self.out.push_str(line);
            self.out.push('\n');
        }
    }

    pub fn raw(&mut self, text: &str) {
        self.out.push_str(text);
    }

    pub fn finish(self) -> String {
        self.out
    }
}

pub(super) fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// One `<article>` for a record. Optional blocks are left out entirely when empty.
pub(super) fn render_card(
    out: &mut Markup,
    depth: usize,
    record: &StaffRecord,
    image_src: &str,
    bio_width: usize,
) {
    let name = escape(&record.name);

    out.line(
        depth,
        &format!(
            r#"<article class="staff-card hover-lift shadow-soft" role="listitem" data-staff-id="{}">"#,
            escape(&record.id)
        ),
    );

    out.line(depth + 1, r#"<div class="staff-image image-zoom-container">"#);
    out.line(
        depth + 2,
        &format!(
            r#"<img src="{}" alt="Portrait of {}" loading="lazy" class="image-zoom">"#,
            escape(image_src),
            name
        ),
    );
    if let Some(contact) = contact_links(record, &name) {
        out.line(depth + 2, &contact);
    }
    out.line(depth + 1, "</div>");

    out.line(depth + 1, r#"<div class="staff-info">"#);
    let info = depth + 2;
    if record.featured {
        out.line(
            info,
            r#"<span class="staff-specialty-badge">Featured Provider</span>"#,
        );
    }
    out.line(info, &format!(r#"<h3 class="staff-name">{}</h3>"#, name));
    out.line(
        info,
        &format!(
            r#"<p class="staff-title"><i class="fa-solid fa-user-md"></i> {}</p>"#,
            escape(&record.title)
        ),
    );

    if !record.credentials.is_empty() {
        let items: String = record
            .credentials
            .iter()
            .map(|cred| {
                format!(
                    r#"<span class="credential"><i class="fa-solid fa-certificate"></i> {}</span>"#,
                    escape(cred)
                )
            })
            .collect();
        out.line(info, &format!(r#"<div class="staff-credentials">{}</div>"#, items));
    }

    if let Some(years) = record.experience_years {
        out.line(
            info,
            &format!(
                r#"<span class="experience-badge">{}+ years experience</span>"#,
                years
            ),
        );
    }
    if !record.education.is_empty() {
        out.line(
            info,
            &format!(
                r#"<p class="staff-education"><i class="fa-solid fa-graduation-cap"></i> {}</p>"#,
                escape(&record.education)
            ),
        );
    }
    if !record.locations.is_empty() {
        out.line(
            info,
            &format!(
                r#"<p class="staff-locations"><i class="fa-solid fa-location-dot"></i> {}</p>"#,
                escape(&format_list(&record.locations))
            ),
        );
    }
    if !record.languages.is_empty() {
        out.line(
            info,
            &format!(
                r#"<p class="staff-languages"><i class="fa-solid fa-language"></i> {}</p>"#,
                escape(&format_list(&record.languages))
            ),
        );
    }

    let bio = record.description.trim();
    if !bio.is_empty() {
        let wrapped = textwrap::fill(bio, bio_width);
        out.line(info, r#"<p class="staff-bio">"#);
        out.line(info + 1, &escape(&wrapped));
        out.line(info, "</p>");
    }

    if !record.specialties.is_empty() {
        let tags: String = record
            .specialties
            .iter()
            .map(|spec| format!(r#"<span class="specialty-tag">{}</span>"#, escape(spec)))
            .collect();
        out.line(
            info,
            &format!(
                r#"<div class="staff-specialties" aria-label="Specialties">{}</div>"#,
                tags
            ),
        );
    }
    if !record.tags.is_empty() {
        let tags: String = record
            .tags
            .iter()
            .map(|tag| format!(r#"<span class="staff-tag">{}</span>"#, escape(tag)))
            .collect();
        out.line(
            info,
            &format!(
                r#"<div class="staff-tags" aria-label="Highlights">{}</div>"#,
                tags
            ),
        );
    }

    if !record.documents.is_empty() {
        out.line(info, r#"<div class="staff-documents">"#);
        out.line(
            info + 1,
            r#"<p class="staff-documents-title"><i class="fa-solid fa-file-lines"></i> Featured Documents</p>"#,
        );
        out.line(info + 1, "<ul>");
        for doc in &record.documents {
            let label = escape(&doc.label);
            out.line(
                info + 2,
                &format!(
                    r#"<li><a href="{}" aria-label="{} - {}" download><i class="fa-solid fa-file-arrow-down"></i> {}</a></li>"#,
                    escape(&doc.path),
                    name,
                    label,
                    label
                ),
            );
        }
        out.line(info + 1, "</ul>");
        out.line(info, "</div>");
    }

    out.line(depth + 1, "</div>");
    out.line(depth, "</article>");
}

fn contact_links(record: &StaffRecord, name: &str) -> Option<String> {
    let mut links = Vec::new();
    if let Some(linkedin) = &record.linkedin {
        links.push(format!(
            r#"<a href="{}" class="social-link hover-scale" aria-label="LinkedIn profile for {}"><i class="fa-brands fa-linkedin-in"></i></a>"#,
            escape(linkedin),
            name
        ));
    }
    if let Some(email) = &record.email {
        links.push(format!(
            r#"<a href="mailto:{}" class="social-link hover-scale" aria-label="Email {}"><i class="fa-solid fa-envelope"></i></a>"#,
            escape(email),
            name
        ));
    }
    if let Some(phone) = &record.phone {
        links.push(format!(
            r#"<a href="tel:{}" class="social-link hover-scale" aria-label="Call {}"><i class="fa-solid fa-phone"></i></a>"#,
            escape(&tel_target(phone)),
            name
        ));
    }
    if links.is_empty() {
        return None;
    }
    Some(format!(
        r#"<div class="staff-social" role="group" aria-label="Contact links">{}</div>"#,
        links.concat()
    ))
}
