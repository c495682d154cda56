//! `salmap render`: pair-list mode rendering.

use salmap_core::input::parse_pair_list;
use salmap_core::render::{render_pairs, RenderOptions};

use crate::ansi::{render_legend, render_segments};
use crate::{parse_render_flags, read_input_source, serialize_output, CommandOutput, SalmapBackend};

const DEFAULT_LEGEND_WIDTH: usize = 32;

const RENDER_HELP: &str = "\
Render a token-value pair list as color-coded spans.

The input is a JSON array of [token, value] pairs, order-significant.
With no FILE the built-in demo input is rendered; use - to read stdin.

Usage:
  salmap render [FILE|-] [flags]

Flags:
  -c, --colormap NAME   colormap to use (see: salmap colormaps)
      --json            emit segments as JSON instead of styled text
      --ansi256         256-color output instead of truecolor
      --no-color        plain text output
      --legend          append a scale bar spanning the input range
  -h, --help            help for render
";

/// Run the render command from test arguments.
pub fn run_render_for_test(args: &[&str], backend: &dyn SalmapBackend) -> CommandOutput {
    match execute_render(args, backend) {
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

fn execute_render(args: &[&str], backend: &dyn SalmapBackend) -> Result<String, (i32, String)> {
    if args.contains(&"--help") || args.contains(&"-h") {
        return Ok(RENDER_HELP.to_string());
    }
    let flags = parse_render_flags(args).map_err(|message| (1, message))?;
    if flags.positional.len() > 1 {
        return Err((1, "render takes at most one input file".to_string()));
    }

    let source = read_input_source(flags.positional.first().map(String::as_str), backend)
        .map_err(|message| (1, message))?;
    let records = parse_pair_list(&source).map_err(|err| (1, err.to_string()))?;
    let options = RenderOptions {
        colormap: flags.colormap,
        hovered: None,
    };
    let output = render_pairs(&records, options);

    if flags.json {
        return serialize_output(&output);
    }
    if output.segments.is_empty() {
        return Ok("No tokens to visualize. Paste your token-value pairs to get started.\n"
            .to_string());
    }

    let mut stdout = render_segments(&output.segments, flags.mode);
    if !stdout.ends_with('\n') {
        stdout.push('\n');
    }
    if flags.legend {
        let width = flags.width.unwrap_or(DEFAULT_LEGEND_WIDTH);
        stdout.push_str(&render_legend(flags.colormap, output.range, width, flags.mode));
        stdout.push('\n');
    }
    Ok(stdout)
}
