//! `salmap text`: text + value-dictionary mode rendering.

use salmap_core::input::parse_value_map;
use salmap_core::render::{render_text, RenderOptions};

use crate::ansi::{render_legend, render_segments};
use crate::{parse_render_flags, serialize_output, CommandOutput, SalmapBackend};

const DEFAULT_LEGEND_WIDTH: usize = 32;

const TEXT_HELP: &str = "\
Render free-form text against a token-value dictionary.

TEXTFILE holds the text to color (use - for stdin); VALUESFILE holds a JSON
object mapping token strings to numbers. Tokens missing from the dictionary
render uncolored, with a punctuation-stripped fallback lookup.

Usage:
  salmap text TEXTFILE|- VALUESFILE [flags]

Flags:
  -c, --colormap NAME   colormap to use (see: salmap colormaps)
      --json            emit segments as JSON instead of styled text
      --ansi256         256-color output instead of truecolor
      --no-color        plain text output
      --legend          append a scale bar spanning the dictionary range
  -h, --help            help for text
";

/// Run the text command from test arguments.
pub fn run_text_for_test(args: &[&str], backend: &dyn SalmapBackend) -> CommandOutput {
    match execute_text(args, backend) {
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

fn execute_text(args: &[&str], backend: &dyn SalmapBackend) -> Result<String, (i32, String)> {
    if args.contains(&"--help") || args.contains(&"-h") {
        return Ok(TEXT_HELP.to_string());
    }
    let flags = parse_render_flags(args).map_err(|message| (1, message))?;
    let [text_source, values_path] = flags.positional.as_slice() else {
        return Err((1, "text requires TEXTFILE and VALUESFILE".to_string()));
    };

    let text = if text_source.as_str() == "-" {
        backend.read_stdin().map_err(|message| (1, message))?
    } else {
        backend
            .read_file(text_source)
            .map_err(|message| (1, message))?
    };
    let values_json = backend
        .read_file(values_path)
        .map_err(|message| (1, message))?;
    let saliency = parse_value_map(&values_json).map_err(|err| (1, err.to_string()))?;

    let options = RenderOptions {
        colormap: flags.colormap,
        hovered: None,
    };
    let output = render_text(&text, &saliency, options);

    if flags.json {
        return serialize_output(&output);
    }
    if output.segments.is_empty() {
        return Ok("No text to visualize.\n".to_string());
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

#[cfg(test)]
mod tests {
    use super::run_text_for_test;
    use crate::tests_common::MockSalmapBackend;

    fn backend() -> MockSalmapBackend {
        MockSalmapBackend::new()
            .with_file("input.txt", "the quick brown fox.\njumps")
            .with_file(
                "values.json",
                r#"{"quick": 0.8, "fox": 0.95, "jumps": 0.4}"#,
            )
    }

    #[test]
    fn renders_text_preserving_whitespace() {
        let out = run_text_for_test(&["input.txt", "values.json", "--no-color"], &backend());
        assert_eq!(out.exit_code, 0);
        assert_eq!(out.stdout, "the quick brown fox.\njumps\n");
    }

    #[test]
    fn colors_only_dictionary_words() {
        let out = run_text_for_test(&["input.txt", "values.json"], &backend());
        assert_eq!(out.exit_code, 0);
        // "the" and "brown" are not in the dictionary: no escape before them.
        assert!(out.stdout.starts_with("the "));
        // "quick" is colored.
        assert!(out.stdout.contains("\x1b[48;2;"));
    }

    #[test]
    fn stdin_dash_reads_text_from_stdin() {
        let backend = backend().with_stdin("fox");
        let out = run_text_for_test(&["-", "values.json", "--no-color"], &backend);
        assert_eq!(out.exit_code, 0);
        assert_eq!(out.stdout, "fox\n");
    }

    #[test]
    fn missing_positionals_report_usage_error() {
        let out = run_text_for_test(&["only-one.txt"], &backend());
        assert_eq!(out.exit_code, 1);
        assert!(out.stderr.contains("TEXTFILE and VALUESFILE"));
    }

    #[test]
    fn bad_dictionary_reports_schema_error() {
        let backend = MockSalmapBackend::new()
            .with_file("input.txt", "hi")
            .with_file("values.json", r#"{"hi": "high"}"#);
        let out = run_text_for_test(&["input.txt", "values.json"], &backend);
        assert_eq!(out.exit_code, 1);
        assert!(out.stderr.contains("is not a number"));
    }

    #[test]
    fn empty_text_prints_hint() {
        let backend = MockSalmapBackend::new()
            .with_file("input.txt", "")
            .with_file("values.json", "{}");
        let out = run_text_for_test(&["input.txt", "values.json"], &backend);
        assert_eq!(out.exit_code, 0);
        assert!(out.stdout.contains("No text to visualize"));
    }

    #[test]
    fn json_flag_emits_segments_with_word_indexes() {
        let out = run_text_for_test(&["input.txt", "values.json", "--json"], &backend());
        assert_eq!(out.exit_code, 0);
        let parsed: serde_json::Value = serde_json::from_str(&out.stdout).unwrap_or_default();
        assert_eq!(parsed["segments"][0]["token_index"], 0);
        assert_eq!(parsed["segments"][0]["kind"], "text");
    }
}
