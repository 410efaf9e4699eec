use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "staffpage", bin_name = "staffpage", version)]
#[command(
    about = "Maintain the clinic staff directory and generate our-staff.html",
    long_about = None
)]
pub struct Cli {
    /// Project root holding the site, the staff store and staffpage.json
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub root: PathBuf,

    /// Regenerate the staff page and exit
    #[arg(long, conflicts_with_all = ["cli", "export"])]
    pub generate: bool,

    /// Use the text menu instead of the form editor
    #[arg(long)]
    pub cli: bool,

    /// Export the staff store and exit; a path ending in .tar.gz also bundles the assets
    #[arg(long, value_name = "PATH", conflicts_with = "cli")]
    pub export: Option<PathBuf>,

    /// Log more (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Generate,
    Export(PathBuf),
    Menu,
    Form,
}

impl Cli {
    pub fn mode(&self) -> Mode {
        if self.generate {
            Mode::Generate
        } else if let Some(path) = &self.export {
            Mode::Export(path.clone())
        } else if self.cli {
            Mode::Menu
        } else {
            Mode::Form
        }
    }
}

/// Logs go to stderr so they never mix with page or menu output.
pub fn setup_logging(verbosity: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = match verbosity {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_names(false)
        .with_line_number(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}
