use chrono::NaiveDateTime;
use colored::Colorize;
use staffpage::commands::{CmdMessage, MessageLevel};
use staffpage::model::{format_list, now, StaffRecord};
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 80;
const TIME_WIDTH: usize = 16;
const RULE_WIDTH: usize = 60;

pub(super) fn format_message(message: &CmdMessage) -> String {
    match message.level {
        MessageLevel::Info => message.content.dimmed().to_string(),
        MessageLevel::Success => message.content.green().to_string(),
        MessageLevel::Warning => message.content.yellow().to_string(),
        MessageLevel::Error => message.content.red().to_string(),
    }
}

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        println!("{}", format_message(message));
    }
}

pub(super) fn rule(c: char) -> String {
    c.to_string().repeat(RULE_WIDTH)
}

/// The text menu's listing: one block per record.
pub(super) fn record_blocks(records: &[StaffRecord]) -> Vec<String> {
    let mut lines = vec![rule('-')];
    for record in records {
        lines.push(format!("{} — {}", record.name.bold(), record.title));
        lines.push(format!("  ID: {}", record.id));
        if !record.specialties.is_empty() {
            lines.push(format!("  Specialties: {}", format_list(&record.specialties)));
        }
        if let Some(email) = &record.email {
            lines.push(format!("  Email: {}", email));
        }
        if let Some(phone) = &record.phone {
            lines.push(format!("  Phone: {}", phone));
        }
        lines.push(rule('-'));
    }
    lines
}

/// One line per record for the form editor's list pane: number, name and title,
/// and when it last changed.
pub(super) fn record_rows(records: &[&StaffRecord], selected: Option<&str>) -> Vec<String> {
    records
        .iter()
        .enumerate()
        .map(|(i, record)| {
            let marker = if Some(record.id.as_str()) == selected {
                "▸ "
            } else {
                "  "
            };
            let idx = format!("{}. ", i + 1);
            let label = if record.title.is_empty() {
                record.name.clone()
            } else {
                format!("{} — {}", record.name, record.title)
            };
            let featured = if record.featured { " ★" } else { "" };

            let fixed = marker.width() + idx.width() + featured.width() + TIME_WIDTH;
            let available = LINE_WIDTH.saturating_sub(fixed);
            let shown = truncate_to_width(&label, available);
            let padding = available.saturating_sub(shown.width());

            format!(
                "{}{}{}{}{}{}",
                marker,
                idx.yellow(),
                shown,
                featured.yellow(),
                " ".repeat(padding),
                format_time_ago(record.last_modified).dimmed()
            )
        })
        .collect()
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(timestamp: NaiveDateTime) -> String {
    let duration = now().signed_duration_since(timestamp);
    let formatter = Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
