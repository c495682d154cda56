//! `salmap colormaps`: list the available colormaps.

use std::io::Write as _;

use salmap_core::colormap::Colormap;
use tabwriter::TabWriter;

use crate::CommandOutput;

const COLORMAPS_HELP: &str = "\
List the colormaps accepted by --colormap.

Usage:
  salmap colormaps

Flags:
  -h, --help   help for colormaps
";

/// Run the colormaps command from test arguments.
pub fn run_colormaps_for_test(args: &[&str]) -> CommandOutput {
    match execute_colormaps(args) {
        Ok(stdout) => CommandOutput {
            stdout,
            stderr: String::new(),
            exit_code: 0,
        },
        Err((exit_code, message)) => CommandOutput {
            stdout: String::new(),
            stderr: format!("{message}\n"),
            exit_code,
        },
    }
}

fn execute_colormaps(args: &[&str]) -> Result<String, (i32, String)> {
    if args.contains(&"--help") || args.contains(&"-h") {
        return Ok(COLORMAPS_HELP.to_string());
    }
    if !args.is_empty() {
        return Err((1, "colormaps takes no arguments".to_string()));
    }

    let mut tw = TabWriter::new(Vec::new());
    let _ = writeln!(tw, "NAME\tSTOPS\tRAMP");
    for colormap in Colormap::ALL {
        let _ = writeln!(
            tw,
            "{}\t{}\t{}",
            colormap.as_str(),
            colormap.stops().len(),
            colormap.description()
        );
    }
    let _ = tw.flush();
    match tw.into_inner() {
        Ok(bytes) => {
            String::from_utf8(bytes).map_err(|err| (1, format!("colormaps output: {err}")))
        }
        Err(err) => Err((1, format!("colormaps output: {err}"))),
    }
}
