use super::form::FormEditor;
use super::menu::TextMenu;
use super::print::print_messages;
use super::prompt::TerminalPrompter;
use super::setup::{setup_logging, Cli, Mode};
use clap::Parser;
use staffpage::api::StaffApi;
use staffpage::config::SiteConfig;
use staffpage::error::{Result, StaffError};
use staffpage::session::FormSession;
use std::io::IsTerminal;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let config = SiteConfig::load(&cli.root)?;
    tracing::debug!(root = %config.root.display(), "Loaded site configuration");
    let mut api = StaffApi::open(config)?;

    match cli.mode() {
        Mode::Generate => {
            let result = api.generate_page()?;
            print_messages(&result.messages);
        }
        Mode::Export(target) => {
            let result = api.export(&target)?;
            print_messages(&result.messages);
        }
        Mode::Menu => {
            require_terminal()?;
            let mut prompter = TerminalPrompter::new();
            TextMenu::new(&mut api, &mut prompter).run()?;
        }
        Mode::Form => {
            require_terminal()?;
            let mut prompter = TerminalPrompter::new();
            FormEditor::new(FormSession::new(api), &mut prompter).run()?;
        }
    }
    Ok(())
}

fn require_terminal() -> Result<()> {
    if std::io::stdin().is_terminal() {
        return Ok(());
    }
    Err(StaffError::NotInteractive)
}
