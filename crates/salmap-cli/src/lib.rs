//! salmap-cli: command-line surface for the salmap saliency viewer.

use std::io::Read as _;
use std::sync::OnceLock;

use salmap_core::colormap::Colormap;
use salmap_core::render::RenderOutput;

use crate::ansi::ColorMode;

pub mod ansi;
pub mod colormaps;
pub mod legend;
pub mod render;
pub mod table;
pub mod text;

#[cfg(test)]
pub(crate) mod tests_common;

/// Stable crate label used by bootstrap smoke tests.
pub fn crate_label() -> &'static str {
    "salmap-cli"
}

static VERSION: OnceLock<String> = OnceLock::new();

/// Set the version string for `--version` output.
pub fn set_version(version: &str) {
    let _ = VERSION.set(version.to_string());
}

fn get_version() -> &'static str {
    VERSION.get().map(|s| s.as_str()).unwrap_or("dev")
}

fn help_text() -> String {
    "\
salmap renders token saliency values as color-coded terminal spans.

Usage:
  salmap [command]

Available Commands:
  colormaps   List available colormaps
  help        Help about any command
  legend      Print a colormap scale bar
  render      Render a token-value pair list (JSON array)
  table       Print an aligned token/value listing
  text        Render free text against a value dictionary

Flags:
  -h, --help      help for salmap
  -v, --version   version for salmap

Use \"salmap [command] --help\" for more information about a command.\n"
        .to_string()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

/// Input access for the CLI; tests substitute an in-memory mock.
pub trait SalmapBackend {
    fn read_file(&self, path: &str) -> Result<String, String>;
    fn read_stdin(&self) -> Result<String, String>;
}

pub struct FilesystemSalmapBackend;

impl SalmapBackend for FilesystemSalmapBackend {
    fn read_file(&self, path: &str) -> Result<String, String> {
        std::fs::read_to_string(path).map_err(|e| format!("read {path}: {e}"))
    }

    fn read_stdin(&self) -> Result<String, String> {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| format!("read stdin: {e}"))?;
        Ok(buffer)
    }
}

/// Read an input source argument: a path, `-` for stdin, or the built-in
/// demo pair list when absent.
pub(crate) fn read_input_source(
    source: Option<&str>,
    backend: &dyn SalmapBackend,
) -> Result<String, String> {
    match source {
        None => Ok(salmap_core::input::DEMO_PAIR_LIST.to_string()),
        Some("-") => backend.read_stdin(),
        Some(path) => backend.read_file(path),
    }
}

/// Flags shared by the rendering commands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct RenderFlags {
    pub colormap: Colormap,
    pub json: bool,
    pub mode: ColorMode,
    pub legend: bool,
    pub width: Option<usize>,
    pub positional: Vec<String>,
}

pub(crate) fn parse_render_flags(args: &[&str]) -> Result<RenderFlags, String> {
    let mut flags = RenderFlags::default();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match *arg {
            "--colormap" | "-c" => {
                let Some(name) = iter.next() else {
                    return Err("--colormap requires a name".to_string());
                };
                flags.colormap = parse_colormap_name(name)?;
            }
            "--width" => {
                let Some(value) = iter.next() else {
                    return Err("--width requires a number".to_string());
                };
                let width: usize = value
                    .parse()
                    .map_err(|_| format!("invalid width: {value}"))?;
                flags.width = Some(width);
            }
            "--json" => flags.json = true,
            "--ansi256" => flags.mode = ColorMode::Ansi256,
            "--no-color" => flags.mode = ColorMode::Plain,
            "--legend" => flags.legend = true,
            other if other.starts_with("--") => {
                return Err(format!("unknown flag: {other}"));
            }
            other => flags.positional.push(other.to_string()),
        }
    }
    Ok(flags)
}

pub(crate) fn parse_colormap_name(name: &str) -> Result<Colormap, String> {
    Colormap::parse(name).ok_or_else(|| {
        let known: Vec<&str> = Colormap::ALL.iter().map(|c| c.as_str()).collect();
        format!("unknown colormap {name:?} (known: {})", known.join(", "))
    })
}

pub(crate) fn serialize_output(output: &RenderOutput) -> Result<String, (i32, String)> {
    match serde_json::to_string_pretty(output) {
        Ok(mut json) => {
            json.push('\n');
            Ok(json)
        }
        Err(err) => Err((1, format!("serialize output: {err}"))),
    }
}

pub fn run_cli_for_test(args: &[&str], backend: &dyn SalmapBackend) -> CommandOutput {
    let mut out = CommandOutput {
        stdout: String::new(),
        stderr: String::new(),
        exit_code: 0,
    };

    let Some((cmd, rest)) = args.split_first() else {
        // No args: show help (exit 0).
        out.stdout = help_text();
        return out;
    };

    match *cmd {
        "--help" | "-h" | "help" => {
            out.stdout = help_text();
            out
        }
        "--version" | "-v" => {
            out.stdout = format!("salmap version {}\n", get_version());
            out
        }
        "render" => render::run_render_for_test(rest, backend),
        "text" => text::run_text_for_test(rest, backend),
        "table" => table::run_table_for_test(rest, backend),
        "legend" => legend::run_legend_for_test(rest),
        "colormaps" => colormaps::run_colormaps_for_test(rest),
        _ => {
            out.stderr = format!("Error: unknown command \"{cmd}\" for \"salmap\"\n");
            out.exit_code = 1;
            out
        }
    }
}

pub fn run_cli(args: &[String], backend: &dyn SalmapBackend) -> CommandOutput {
    let refs: Vec<&str> = args.iter().map(|s| s.as_str()).collect();
    run_cli_for_test(&refs, backend)
}
