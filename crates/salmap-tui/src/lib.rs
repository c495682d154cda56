//! salmap-tui: interactive terminal surface for the salmap saliency viewer.

use salmap_core::colormap::Colormap;
use salmap_core::input::{parse_pair_list, DEMO_PAIR_LIST};

use crate::app::App;

pub mod app;
pub mod runtime;

/// Stable crate label used by bootstrap smoke tests.
pub fn crate_label() -> &'static str {
    "salmap-tui"
}

const USAGE: &str = "\
Usage: salmap-tui [FILE] [--colormap NAME]

Interactive viewer for a token-value pair list (JSON array). With no FILE
the built-in demo input is shown. When stdout is not a terminal a plain
snapshot is printed instead.
";

/// Usage text for `--help`.
#[must_use]
pub fn usage() -> &'static str {
    USAGE
}

/// Build the app from command-line arguments.
///
/// File-read and flag errors abort with a message; parse errors become app
/// state so the viewer can show them in the status strip.
pub fn build_app(args: &[String]) -> Result<App, String> {
    let mut colormap = Colormap::default();
    let mut file: Option<String> = None;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--colormap" | "-c" => {
                let Some(name) = iter.next() else {
                    return Err("--colormap requires a name".to_string());
                };
                colormap = Colormap::parse(name)
                    .ok_or_else(|| format!("unknown colormap {name:?}"))?;
            }
            other if other.starts_with("--") => {
                return Err(format!("unknown flag: {other}"));
            }
            other => {
                if file.is_some() {
                    return Err("at most one input file".to_string());
                }
                file = Some(other.to_string());
            }
        }
    }

    let source = match file {
        None => DEMO_PAIR_LIST.to_string(),
        Some(path) => {
            std::fs::read_to_string(&path).map_err(|err| format!("read {path}: {err}"))?
        }
    };

    Ok(match parse_pair_list(&source) {
        Ok(records) => App::new(records, colormap),
        Err(err) => App::with_error(err.to_string(), colormap),
    })
}
