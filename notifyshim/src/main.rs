use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use notifyshim::config::{self, NotifierConfig};
use notifyshim::native::NativeLibrary;
use notifyshim::{logging, NotificationDispatcher, NotificationProvider, NotificationRequest};

#[derive(Parser, Debug)]
#[command(name = "notifyshim", version, about = "Show a native desktop notification")]
struct Args {
    #[arg(long)]
    title: String,
    #[arg(long)]
    message: String,
    /// Image shown next to the text
    #[arg(long)]
    icon: Option<PathBuf>,
    /// TOML or JSON config file
    #[arg(long)]
    config: Option<PathBuf>,
    /// Go through the native_notifications library (with command-line
    /// fallback) instead of calling the OS directly. Pass a directory to
    /// look for the platform file name in it.
    #[arg(long)]
    library: Option<PathBuf>,
}

fn load_config(path: Option<&PathBuf>) -> NotifierConfig {
    let loaded = match path {
        Some(p) => config::load_from_file(p),
        None => config::load(),
    };
    loaded.unwrap_or_else(|e| {
        tracing::warn!(error = %e, "using default configuration");
        NotifierConfig::default()
    })
}

fn main() -> ExitCode {
    logging::init("info");
    let args = Args::parse();
    let config = load_config(args.config.as_ref());

    let delivered = match &args.library {
        Some(library) => {
            let path = if library.is_dir() {
                NativeLibrary::locate(library).unwrap_or_else(|| library.join(NativeLibrary::file_name()))
            } else {
                library.clone()
            };
            let provider = NotificationProvider::new(Some(&path), &config);
            let request = NotificationRequest::new(args.title, args.message).with_icon(args.icon);
            provider.show(&request).is_displayed()
        }
        None => {
            let dispatcher = NotificationDispatcher::from_config(config);
            let icon = args.icon.as_ref().map(|p| p.to_string_lossy().into_owned());
            dispatcher.dispatch(&args.title, &args.message, icon.as_deref())
        }
    };

    if delivered {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
