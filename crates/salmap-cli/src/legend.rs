//! `salmap legend`: standalone colormap scale bar.

use salmap_core::range::ValueRange;

use crate::ansi::render_legend;
use crate::{parse_render_flags, CommandOutput};

const DEFAULT_LEGEND_WIDTH: usize = 32;

const LEGEND_HELP: &str = "\
Print a scale bar for a colormap, sampled across its [0,1] domain.

Usage:
  salmap legend [flags]

Flags:
  -c, --colormap NAME   colormap to sample (see: salmap colormaps)
      --width N         bar width in cells (default 32)
      --ansi256         256-color output instead of truecolor
      --no-color        glyph-ramp output
  -h, --help            help for legend
";

/// Run the legend command from test arguments.
pub fn run_legend_for_test(args: &[&str]) -> CommandOutput {
    match execute_legend(args) {
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

fn execute_legend(args: &[&str]) -> Result<String, (i32, String)> {
    if args.contains(&"--help") || args.contains(&"-h") {
        return Ok(LEGEND_HELP.to_string());
    }
    let flags = parse_render_flags(args).map_err(|message| (1, message))?;
    if !flags.positional.is_empty() {
        return Err((1, "legend takes no positional arguments".to_string()));
    }
    let width = flags.width.unwrap_or(DEFAULT_LEGEND_WIDTH);
    let mut stdout = render_legend(
        flags.colormap,
        ValueRange::default(),
        width,
        flags.mode,
    );
    stdout.push('\n');
    Ok(stdout)
}
