//! The form editor: a list pane for the current category and a detail form for the
//! selected record, driven by a menu of actions. All state lives in [`FormSession`];
//! this module only asks questions and shows answers.

use super::print::{format_message, record_rows, rule};
use super::prompt::Prompter;
use console::style;
use staffpage::assets::expand_home;
use staffpage::commands::{CmdMessage, CmdResult};
use staffpage::error::{Result, StaffError};
use staffpage::form::RecordForm;
use staffpage::model::Category;
use staffpage::session::{FormSession, Outcome};
use staffpage::store::StoreBackend;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Select,
    New,
    Edit,
    Save,
    Delete,
    ChooseImage,
    AddDocument,
    RemoveDocument,
    Duplicate,
    Generate,
    Export,
    SwitchCategory,
    ActivityLog,
    Quit,
}

const ACTIONS: [(Action, &str); 14] = [
    (Action::Select, "Select staff member"),
    (Action::New, "New staff member"),
    (Action::Edit, "Edit fields"),
    (Action::Save, "Save"),
    (Action::Delete, "Delete"),
    (Action::ChooseImage, "Choose headshot image"),
    (Action::AddDocument, "Add document"),
    (Action::RemoveDocument, "Remove document"),
    (Action::Duplicate, "Duplicate"),
    (Action::Generate, "Generate page"),
    (Action::Export, "Export store copy"),
    (Action::SwitchCategory, "Switch category"),
    (Action::ActivityLog, "Activity log"),
    (Action::Quit, "Quit"),
];

const FIELDS: [&str; 15] = [
    "Full name",
    "Title",
    "Credentials",
    "Specialties",
    "Bio",
    "Years of experience",
    "Locations",
    "Languages",
    "Education",
    "Email",
    "Phone",
    "LinkedIn URL",
    "Highlight tags",
    "Headshot path",
    "Featured",
];

const DEFAULT_EXPORT: &str = "staff_directory.json";

/// Answer that empties a field; a blank answer keeps the current value.
const CLEAR: &str = "-";

/// Text field `index` of [`FIELDS`]; `None` for the featured flag.
fn text_field(form: &mut RecordForm, index: usize) -> Option<&mut String> {
    Some(match index {
        0 => &mut form.name,
        1 => &mut form.title,
        2 => &mut form.credentials,
        3 => &mut form.specialties,
        4 => &mut form.description,
        5 => &mut form.experience,
        6 => &mut form.locations,
        7 => &mut form.languages,
        8 => &mut form.education,
        9 => &mut form.email,
        10 => &mut form.phone,
        11 => &mut form.linkedin,
        12 => &mut form.tags,
        13 => &mut form.image,
        _ => return None,
    })
}

pub struct FormEditor<'a, B: StoreBackend, P: Prompter> {
    session: FormSession<B>,
    prompter: &'a mut P,
}

impl<'a, B: StoreBackend, P: Prompter> FormEditor<'a, B, P> {
    pub fn new(session: FormSession<B>, prompter: &'a mut P) -> Self {
        Self { session, prompter }
    }

    pub fn run(&mut self) -> Result<()> {
        let labels: Vec<String> = ACTIONS.iter().map(|(_, label)| label.to_string()).collect();
        loop {
            self.show_panes();
            let action = match self.prompter.choose("Action", &labels)? {
                Some(index) => ACTIONS[index].0,
                None => Action::Quit,
            };
            if action == Action::Quit {
                return Ok(());
            }
            match self.dispatch(action) {
                Err(StaffError::Io(err)) => return Err(StaffError::Io(err)),
                Err(err) => self
                    .prompter
                    .say(&format_message(&CmdMessage::error(format!("Error: {}", err)))),
                Ok(()) => {}
            }
        }
    }

    fn dispatch(&mut self, action: Action) -> Result<()> {
        match action {
            Action::Select => self.select_record(),
            Action::New => {
                self.session.new_record();
                Ok(())
            }
            Action::Edit => self.edit_fields(),
            Action::Save => self.save(),
            Action::Delete => self.delete(),
            Action::ChooseImage => self.choose_image(),
            Action::AddDocument => self.add_document(),
            Action::RemoveDocument => self.remove_document(),
            Action::Duplicate => {
                let outcome = self.session.duplicate()?;
                self.report_outcome(outcome);
                Ok(())
            }
            Action::Generate => {
                let result = self.session.generate()?;
                self.report(&result);
                Ok(())
            }
            Action::Export => self.export(),
            Action::SwitchCategory => self.switch_category(),
            Action::ActivityLog => {
                self.show_activity();
                Ok(())
            }
            Action::Quit => Ok(()),
        }
    }

    fn show_panes(&mut self) {
        let category = self.session.category();
        self.prompter.say(&rule('='));
        self.prompter.say(
            &style(format!("{} staff", category.label()))
                .bold()
                .to_string(),
        );
        let rows = record_rows(&self.session.records(), self.session.selected());
        if rows.is_empty() {
            self.prompter.say(&format!("  No {} staff yet.", category));
        }
        for row in rows {
            self.prompter.say(&row);
        }
        self.prompter.say(&rule('-'));

        let form = self.session.form();
        let heading = match self.session.selected() {
            Some(id) => format!("Editing {} ({})", form.name, id),
            None if form.name.trim().is_empty() => "Editing a new record".to_string(),
            None => format!("Editing {} (unsaved)", form.name),
        };
        let mut lines = vec![style(heading).cyan().to_string()];
        for doc in &form.documents {
            lines.push(format!("  Document: {} ({})", doc.label, doc.path));
        }
        for line in lines {
            self.prompter.say(&line);
        }
    }

    fn report(&mut self, result: &CmdResult) {
        for message in &result.messages {
            self.prompter.say(&format_message(message));
        }
    }

    fn report_outcome(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Done(result) => self.report(&result),
            Outcome::Cancelled => self.prompter.say("Cancelled."),
            Outcome::NothingSelected => self.prompter.say("Select a staff member first."),
        }
    }

    fn select_record(&mut self) -> Result<()> {
        let (rows, ids): (Vec<String>, Vec<String>) = {
            let records = self.session.records();
            let rows = record_rows(&records, self.session.selected());
            (rows, records.iter().map(|r| r.id.clone()).collect())
        };
        if ids.is_empty() {
            self.prompter.say("No staff available.");
            return Ok(());
        }
        if let Some(index) = self.prompter.choose("Staff member", &rows)? {
            self.session.select(&ids[index])?;
        }
        Ok(())
    }

    fn edit_fields(&mut self) -> Result<()> {
        loop {
            let mut form = self.session.form().clone();
            let mut items: Vec<String> = Vec::with_capacity(FIELDS.len() + 1);
            for (index, label) in FIELDS.iter().enumerate() {
                let value = match text_field(&mut form, index).map(|text| text.clone()) {
                    Some(text) => text,
                    None if form.featured => "yes".to_string(),
                    None => "no".to_string(),
                };
                items.push(format!("{}: {}", label, value));
            }
            items.push("Done".to_string());

            let index = match self.prompter.choose("Field", &items)? {
                Some(index) if index < FIELDS.len() => index,
                _ => return Ok(()),
            };
            match text_field(&mut form, index) {
                Some(current) => {
                    let prompt = format!("{} ('{}' to clear)", FIELDS[index], CLEAR);
                    let mut answer = self.prompter.ask(&prompt, current)?;
                    if answer == CLEAR {
                        answer.clear();
                    }
                    if let Some(text) = text_field(self.session.form_mut(), index) {
                        *text = answer;
                    }
                }
                None => {
                    let featured = self
                        .prompter
                        .confirm("Feature this provider?", form.featured)?;
                    self.session.form_mut().featured = featured;
                }
            }
        }
    }

    fn save(&mut self) -> Result<()> {
        let prompter = &mut *self.prompter;
        let mut failure = None;
        let outcome = self.session.save(|name| {
            let question = format!(
                "A staff member named {} already exists. Update the existing record?",
                name
            );
            match prompter.confirm(&question, false) {
                Ok(answer) => answer,
                Err(err) => {
                    failure = Some(err);
                    false
                }
            }
        });
        if let Some(err) = failure {
            return Err(err);
        }
        self.report_outcome(outcome?);
        Ok(())
    }

    fn delete(&mut self) -> Result<()> {
        let prompter = &mut *self.prompter;
        let mut failure = None;
        let outcome = self.session.delete(|name| {
            match prompter.confirm(&format!("Remove {} from the directory?", name), false) {
                Ok(answer) => answer,
                Err(err) => {
                    failure = Some(err);
                    false
                }
            }
        });
        if let Some(err) = failure {
            return Err(err);
        }
        self.report_outcome(outcome?);
        Ok(())
    }

    fn ask_path(&mut self, prompt: &str) -> Result<Option<PathBuf>> {
        let text = self.prompter.ask(prompt, "")?;
        Ok(if text.is_empty() {
            None
        } else {
            Some(expand_home(&text))
        })
    }

    fn choose_image(&mut self) -> Result<()> {
        let Some(source) = self.ask_path("Path to headshot image")? else {
            return Ok(());
        };
        let result = self.session.choose_image(&source)?;
        self.report(&result);
        Ok(())
    }

    fn add_document(&mut self) -> Result<()> {
        let label = self.prompter.ask("Document label", "")?;
        if label.is_empty() {
            return Ok(());
        }
        let Some(source) = self.ask_path("Path to document")? else {
            return Ok(());
        };
        let result = self.session.add_document(&label, &source)?;
        self.report(&result);
        Ok(())
    }

    fn remove_document(&mut self) -> Result<()> {
        let items: Vec<String> = self
            .session
            .form()
            .documents
            .iter()
            .map(|doc| format!("{} ({})", doc.label, doc.path))
            .collect();
        if items.is_empty() {
            self.prompter.say("This record has no documents.");
            return Ok(());
        }
        let Some(index) = self.prompter.choose("Document", &items)? else {
            return Ok(());
        };

        let prompter = &mut *self.prompter;
        let mut failure = None;
        let outcome = self.session.remove_document(index, |doc| {
            let question = format!("Remove '{}' from this staff member?", doc.label);
            match prompter.confirm(&question, false) {
                Ok(answer) => answer,
                Err(err) => {
                    failure = Some(err);
                    false
                }
            }
        });
        if let Some(err) = failure {
            return Err(err);
        }
        match outcome {
            Outcome::Done(_) => self.prompter.say("Document removed. Save to keep the change."),
            other => self.report_outcome(other),
        }
        Ok(())
    }

    fn export(&mut self) -> Result<()> {
        let target = self.prompter.ask("Export to", DEFAULT_EXPORT)?;
        let result = self.session.export(&expand_home(&target))?;
        self.report(&result);
        Ok(())
    }

    fn switch_category(&mut self) -> Result<()> {
        let labels: Vec<String> = Category::ALL
            .iter()
            .map(|category| category.label().to_string())
            .collect();
        if let Some(index) = self.prompter.choose("Category", &labels)? {
            self.session.set_category(Category::ALL[index]);
        }
        Ok(())
    }

    fn show_activity(&mut self) {
        let lines: Vec<String> = self
            .session
            .recent_activity()
            .map(|entry| entry.to_string())
            .collect();
        if lines.is_empty() {
            self.prompter.say("No activity yet.");
        }
        for line in lines {
            self.prompter.say(&line);
        }
    }
}
