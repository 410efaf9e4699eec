//! The numbered text menu (`--cli`).

use super::print::{format_message, record_blocks, rule};
use super::prompt::Prompter;
use staffpage::api::StaffApi;
use staffpage::assets::expand_home;
use staffpage::commands::CmdResult;
use staffpage::error::{Result, StaffError};
use staffpage::form::RecordForm;
use staffpage::model::{is_valid_email, is_valid_url, Category, Document, StaffRecord};
use staffpage::store::StoreBackend;
use std::path::PathBuf;

const MENU: [&str; 7] = [
    "1) List staff",
    "2) Add staff member",
    "3) Edit staff member",
    "4) Remove staff member",
    "5) Attach documents",
    "6) Generate staff page",
    "7) Quit",
];

pub struct TextMenu<'a, B: StoreBackend, P: Prompter> {
    api: &'a mut StaffApi<B>,
    prompter: &'a mut P,
}

impl<'a, B: StoreBackend, P: Prompter> TextMenu<'a, B, P> {
    pub fn new(api: &'a mut StaffApi<B>, prompter: &'a mut P) -> Self {
        Self { api, prompter }
    }

    /// Runs until Quit or end of input. Errors from a single action are reported and
    /// the menu carries on.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.prompter.say(&rule('='));
            self.prompter.say("People First Urgent Care — Staff Page Manager");
            self.prompter.say(&rule('='));
            for entry in MENU {
                self.prompter.say(entry);
            }
            let choice = self.prompter.ask("Select an option", "")?;
            let outcome = match choice.as_str() {
                "1" => self.handle_list(),
                "2" => self.handle_add(),
                "3" => self.handle_edit(),
                "4" => self.handle_remove(),
                "5" => self.handle_attach_documents(),
                "6" => self.handle_generate(),
                "7" => {
                    self.prompter.say("Goodbye!");
                    return Ok(());
                }
                _ => {
                    self.prompter.say("Invalid selection. Please try again.");
                    Ok(())
                }
            };
            match outcome {
                Err(StaffError::Io(err)) => return Err(StaffError::Io(err)),
                Err(err) => self.prompter.say(&format!("Error: {}", err)),
                Ok(()) => {}
            }
        }
    }

    fn report(&mut self, result: &CmdResult) {
        for message in &result.messages {
            self.prompter.say(&format_message(message));
        }
    }

    fn handle_list(&mut self) -> Result<()> {
        let category = self.prompt_category()?;
        let result = self.api.list_staff(category)?;
        if result.listed_records.is_empty() {
            self.report(&result);
            return Ok(());
        }
        for line in record_blocks(&result.listed_records) {
            self.prompter.say(&line);
        }
        Ok(())
    }

    fn handle_add(&mut self) -> Result<()> {
        let category = self.prompt_category()?;
        self.prompter
            .say("Enter staff information. Leave blank to skip optional fields.");
        let form = self.prompt_details(None)?;
        if self.api.directory().contains(category, &form.slug()) {
            self.prompter
                .say("A staff member with this name already exists. Please edit instead.");
            return Ok(());
        }
        let result = self.api.add_staff(category, &form)?;
        self.report(&result);
        Ok(())
    }

    fn handle_edit(&mut self) -> Result<()> {
        let category = self.prompt_category()?;
        let Some(id) = self.prompt_member_id(category)? else {
            return Ok(());
        };
        let Some(existing) = self.api.directory().find(category, &id).cloned() else {
            self.prompter.say("Staff member not found.");
            return Ok(());
        };
        self.prompter.say(&format!(
            "Editing {}. Press Enter to keep the current value.",
            existing.name
        ));
        let form = self.prompt_details(Some(&existing))?;
        let result = self.api.update_staff(category, &id, &form)?;
        self.report(&result);
        Ok(())
    }

    fn handle_remove(&mut self) -> Result<()> {
        let category = self.prompt_category()?;
        let Some(id) = self.prompt_member_id(category)? else {
            return Ok(());
        };
        let Some(name) = self
            .api
            .directory()
            .find(category, &id)
            .map(|record| record.name.clone())
        else {
            self.prompter.say("No staff member found with that ID.");
            return Ok(());
        };
        let confirm = self
            .prompter
            .ask(&format!("Type DELETE to remove {}", name), "")?;
        if confirm != "DELETE" {
            self.prompter.say("Cancelled.");
            return Ok(());
        }
        let result = self.api.remove_staff(category, &id)?;
        self.report(&result);
        Ok(())
    }

    fn handle_attach_documents(&mut self) -> Result<()> {
        let category = self.prompt_category()?;
        let Some(id) = self.prompt_member_id(category)? else {
            return Ok(());
        };
        if !self.api.directory().contains(category, &id) {
            self.prompter.say("Staff member not found.");
            return Ok(());
        }
        loop {
            let label = self
                .prompter
                .ask("Document label (e.g., Curriculum Vitae) [blank to stop]", "")?;
            if label.is_empty() {
                return Ok(());
            }
            let Some(source) = self.prompt_file_path("Path to document file")? else {
                self.prompter.say("Skipped document.");
                continue;
            };
            let result = self
                .api
                .attach_document(category, &id, &label, &source)?;
            self.report(&result);
        }
    }

    fn handle_generate(&mut self) -> Result<()> {
        let result = self.api.generate_page()?;
        self.report(&result);
        Ok(())
    }

    fn prompt_category(&mut self) -> Result<Category> {
        loop {
            let choice = self
                .prompter
                .ask("Select category: [1] Medical, [2] Support", "")?;
            match choice.parse::<Category>() {
                Ok(category) => return Ok(category),
                Err(_) => self.prompter.say("Invalid choice. Please enter 1 or 2."),
            }
        }
    }

    /// A list number or a raw id; `None` for a blank answer or a bad number.
    fn prompt_member_id(&mut self, category: Category) -> Result<Option<String>> {
        let ids: Vec<String> = {
            let records = self.api.directory().list(category);
            if records.is_empty() {
                self.prompter.say("No staff available.");
                return Ok(None);
            }
            for (index, record) in records.iter().enumerate() {
                self.prompter
                    .say(&format!("[{}] {} ({})", index + 1, record.name, record.id));
            }
            records.iter().map(|record| record.id.clone()).collect()
        };

        let choice = self
            .prompter
            .ask("Select a staff member by number or enter an ID", "")?;
        if choice.is_empty() {
            return Ok(None);
        }
        if choice.chars().all(|c| c.is_ascii_digit()) {
            let picked = choice
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(|index| ids.get(index));
            return match picked {
                Some(id) => Ok(Some(id.clone())),
                None => {
                    self.prompter.say("Invalid number.");
                    Ok(None)
                }
            };
        }
        Ok(Some(choice))
    }

    fn prompt_file_path(&mut self, prompt: &str) -> Result<Option<PathBuf>> {
        let text = self.prompter.ask(prompt, "")?;
        if text.is_empty() {
            return Ok(None);
        }
        let path = expand_home(&text);
        if !path.exists() {
            self.prompter.say("File does not exist.");
            return Ok(None);
        }
        Ok(Some(path))
    }

    fn ask_until<F>(&mut self, prompt: &str, default: &str, valid: F, problem: &str) -> Result<String>
    where
        F: Fn(&str) -> bool,
    {
        loop {
            let answer = self.prompter.ask(prompt, default)?;
            if answer.is_empty() || valid(&answer) {
                return Ok(answer);
            }
            self.prompter.say(problem);
        }
    }

    /// Walks every field, using the current values as defaults. Headshot and document
    /// files are imported under the record's id as they are chosen.
    fn prompt_details(&mut self, existing: Option<&StaffRecord>) -> Result<RecordForm> {
        let current = existing.map(RecordForm::from).unwrap_or_default();
        let mut form = RecordForm::default();

        form.name = self.prompter.ask("Full name", &current.name)?;
        while form.name.is_empty() {
            self.prompter.say("Name is required.");
            form.name = self.prompter.ask("Full name", "")?;
        }
        form.title = self.prompter.ask("Title", &current.title)?;
        form.credentials = self
            .prompter
            .ask("Credentials (comma separated)", &current.credentials)?;
        form.specialties = self
            .prompter
            .ask("Specialties (comma separated)", &current.specialties)?;
        form.description = self
            .prompter
            .ask("Short bio/description", &current.description)?;
        form.experience = self.ask_until(
            "Years of experience",
            &current.experience,
            |text| text.chars().all(|c| c.is_ascii_digit()),
            "Please enter a whole number.",
        )?;
        form.locations = self
            .prompter
            .ask("Primary clinic locations (comma separated)", &current.locations)?;
        form.languages = self
            .prompter
            .ask("Languages (comma separated)", &current.languages)?;
        form.education = self.prompter.ask("Education", &current.education)?;
        form.email = self.ask_until("Email", &current.email, is_valid_email, "Invalid email format.")?;
        form.phone = self.prompter.ask("Phone", &current.phone)?;
        form.linkedin = self.ask_until(
            "LinkedIn URL",
            &current.linkedin,
            is_valid_url,
            "Invalid URL. Must start with http:// or https://",
        )?;
        form.tags = self
            .prompter
            .ask("Highlight tags (comma separated)", &current.tags)?;
        let featured = self.prompter.ask(
            "Feature this provider? (y/N)",
            if current.featured { "y" } else { "n" },
        )?;
        form.featured = is_yes(&featured);

        let id = existing
            .map(|record| record.id.clone())
            .unwrap_or_else(|| form.slug());
        // Nothing is copied into the assets directories for a form that cannot be saved.
        StaffRecord::from_form(Some(&id), &form)?;

        form.image = current.image.clone();
        if is_yes(&self.prompter.ask("Update headshot image? (y/N)", "n")?) {
            if let Some(source) = self.prompt_file_path("Path to image file")? {
                let result = self.api.import_image(&source, &id)?;
                if let Some(stored) = result.stored_path {
                    form.image = stored;
                }
            }
        }

        form.documents = current.documents.clone();
        if is_yes(&self.prompter.ask("Update supporting documents? (y/N)", "n")?) {
            form.documents = self.prompt_documents(&id)?;
        }
        Ok(form)
    }

    fn prompt_documents(&mut self, id: &str) -> Result<Vec<Document>> {
        let mut documents = Vec::new();
        loop {
            let label = self.prompter.ask("Document label (blank to finish)", "")?;
            if label.is_empty() {
                return Ok(documents);
            }
            let Some(source) = self.prompt_file_path("Path to document file")? else {
                self.prompter.say("No document selected, skipping.");
                continue;
            };
            let result = self.api.import_document(&source, id, Some(&label))?;
            if let Some(stored) = result.stored_path {
                self.prompter
                    .say(&format!("Stored {} ({})", label, stored));
                documents.push(Document::new(label, stored));
            }
        }
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
