//! `salmap table`: aligned token/value/color listing.

use std::io::Write as _;

use salmap_core::input::parse_pair_list;
use salmap_core::range::ValueRange;
use tabwriter::TabWriter;

use crate::{parse_render_flags, read_input_source, CommandOutput, SalmapBackend};

const TABLE_HELP: &str = "\
Print an aligned listing of tokens, values, normalized positions, and
resolved colors for a pair-list input.

Usage:
  salmap table [FILE|-] [flags]

Flags:
  -c, --colormap NAME   colormap to resolve colors with
  -h, --help            help for table
";

/// Run the table command from test arguments.
pub fn run_table_for_test(args: &[&str], backend: &dyn SalmapBackend) -> CommandOutput {
    match execute_table(args, backend) {
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

fn execute_table(args: &[&str], backend: &dyn SalmapBackend) -> Result<String, (i32, String)> {
    if args.contains(&"--help") || args.contains(&"-h") {
        return Ok(TABLE_HELP.to_string());
    }
    let flags = parse_render_flags(args).map_err(|message| (1, message))?;
    if flags.positional.len() > 1 {
        return Err((1, "table takes at most one input file".to_string()));
    }

    let source = read_input_source(flags.positional.first().map(String::as_str), backend)
        .map_err(|message| (1, message))?;
    let records = parse_pair_list(&source).map_err(|err| (1, err.to_string()))?;
    let range = ValueRange::from_values(records.iter().filter_map(|record| record.value));

    let mut tw = TabWriter::new(Vec::new());
    let _ = writeln!(tw, "#\tTOKEN\tVALUE\tNORM\tCOLOR");
    for (index, record) in records.iter().enumerate() {
        let (value, norm, color) = match record.value {
            Some(value) => {
                let t = range.normalize(value);
                let rgb = flags.colormap.interpolate(t);
                (
                    format!("{value:.4}"),
                    format!("{t:.2}"),
                    format!("#{:02X}{:02X}{:02X}", rgb.r, rgb.g, rgb.b),
                )
            }
            None => ("-".to_string(), "-".to_string(), "-".to_string()),
        };
        let _ = writeln!(tw, "{index}\t{:?}\t{value}\t{norm}\t{color}", record.raw);
    }
    let _ = tw.flush();
    let rendered = match tw.into_inner() {
        Ok(bytes) => String::from_utf8(bytes).map_err(|err| (1, format!("table output: {err}")))?,
        Err(err) => return Err((1, format!("table output: {err}"))),
    };
    Ok(rendered)
}
