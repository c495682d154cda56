//! App state and view model for the interactive saliency viewer.
//!
//! Keyboard selection plays the role of pointer hover: the highlighted token
//! is the one whose raw string and value show in the status strip. The app
//! is pure; the crossterm runtime owns all terminal I/O.

use salmap_core::color::Rgb;
use salmap_core::colormap::Colormap;
use salmap_core::input::TokenRecord;
use salmap_core::range::ValueRange;
use salmap_core::render::{render_pairs, RenderOptions, Segment};
use salmap_core::token::{split_leading_space, token_pieces, TokenPiece};

const LEGEND_WIDTH: usize = 24;

/// Key presses the app reacts to, already decoded from the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppKey {
    Left,
    Right,
    Home,
    End,
    ClearHover,
    CycleColormap,
    CycleColormapBack,
    Quit,
}

/// A styled run of text within one display line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledSpan {
    pub text: String,
    pub foreground: Option<Rgb>,
    pub background: Option<Rgb>,
    pub underline: bool,
}

impl StyledSpan {
    fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            foreground: None,
            background: None,
            underline: false,
        }
    }
}

/// One display line of styled spans.
pub type StyledLine = Vec<StyledSpan>;

/// Interactive viewer state.
#[derive(Debug, Clone, PartialEq)]
pub struct App {
    records: Vec<TokenRecord>,
    colormap: Colormap,
    hovered: Option<usize>,
    error: Option<String>,
    quitting: bool,
}

impl App {
    #[must_use]
    pub fn new(records: Vec<TokenRecord>, colormap: Colormap) -> Self {
        Self {
            records,
            colormap,
            hovered: None,
            error: None,
            quitting: false,
        }
    }

    /// App showing a parse failure: empty render plus the message in the
    /// status strip.
    #[must_use]
    pub fn with_error(message: String, colormap: Colormap) -> Self {
        Self {
            records: Vec::new(),
            colormap,
            hovered: None,
            error: Some(message),
            quitting: false,
        }
    }

    #[must_use]
    pub fn colormap(&self) -> Colormap {
        self.colormap
    }

    #[must_use]
    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    #[must_use]
    pub fn quitting(&self) -> bool {
        self.quitting
    }

    /// The record under the highlight, if any.
    #[must_use]
    pub fn hovered_record(&self) -> Option<&TokenRecord> {
        self.hovered.and_then(|index| self.records.get(index))
    }

    /// Set the highlighted token; last write wins.
    pub fn set_hovered(&mut self, index: Option<usize>) {
        self.hovered = index;
    }

    /// Record indexes that contribute at least one visible text segment.
    /// Marker-only tokens (pure line breaks) are not hover targets.
    fn hover_targets(&self) -> Vec<usize> {
        self.records
            .iter()
            .enumerate()
            .filter(|(_, record)| {
                token_pieces(&record.raw).iter().any(|piece| match piece {
                    TokenPiece::Text(text) => {
                        let (_, visible) = split_leading_space(text);
                        !visible.is_empty()
                    }
                    TokenPiece::Newline => false,
                })
            })
            .map(|(index, _)| index)
            .collect()
    }

    pub fn update(&mut self, key: AppKey) {
        match key {
            AppKey::Quit => self.quitting = true,
            AppKey::ClearHover => self.set_hovered(None),
            AppKey::CycleColormap => self.colormap = self.colormap.cycle(1),
            AppKey::CycleColormapBack => self.colormap = self.colormap.cycle(-1),
            AppKey::Left | AppKey::Right | AppKey::Home | AppKey::End => self.move_hover(key),
        }
    }

    fn move_hover(&mut self, key: AppKey) {
        let targets = self.hover_targets();
        if targets.is_empty() {
            self.set_hovered(None);
            return;
        }
        let position = self
            .hovered
            .and_then(|current| targets.iter().position(|index| *index == current));
        let next = match key {
            AppKey::Home => 0,
            AppKey::End => targets.len() - 1,
            AppKey::Left => match position {
                Some(0) | None => targets.len() - 1,
                Some(p) => p - 1,
            },
            _ => match position {
                Some(p) if p + 1 < targets.len() => p + 1,
                _ => 0,
            },
        };
        self.set_hovered(Some(targets[next]));
    }

    /// Render the current state as styled display lines.
    #[must_use]
    pub fn render(&self) -> Vec<StyledLine> {
        let mut lines: Vec<StyledLine> = Vec::new();
        lines.push(vec![StyledSpan::plain("salmap  |  token attribution")]);
        lines.push(Vec::new());

        let options = RenderOptions {
            colormap: self.colormap,
            hovered: self.hovered,
        };
        let output = render_pairs(&self.records, options);

        let mut current: StyledLine = Vec::new();
        for segment in &output.segments {
            match segment {
                Segment::Newline => {
                    lines.push(std::mem::take(&mut current));
                }
                Segment::Space { value } => current.push(StyledSpan::plain(value.clone())),
                Segment::Text(text) => current.push(StyledSpan {
                    text: text.text.clone(),
                    foreground: text.background.map(|_| text.label.rgb()),
                    background: text.background,
                    underline: text.hovered,
                }),
            }
        }
        if !current.is_empty() {
            lines.push(current);
        }

        lines.push(Vec::new());
        lines.push(self.legend_line(output.range));
        lines.push(self.status_line());
        lines
    }

    fn legend_line(&self, range: ValueRange) -> StyledLine {
        let mut line: StyledLine = Vec::new();
        line.push(StyledSpan::plain(format!("{:.2} ", range.min)));
        for cell in 0..LEGEND_WIDTH {
            let t = cell as f64 / (LEGEND_WIDTH - 1) as f64;
            let color = self.colormap.interpolate(t);
            line.push(StyledSpan {
                text: " ".to_string(),
                foreground: None,
                background: Some(color),
                underline: false,
            });
        }
        line.push(StyledSpan::plain(format!(
            " {:.2}  [{}]",
            range.max,
            self.colormap.as_str()
        )));
        line
    }

    fn status_line(&self) -> StyledLine {
        if let Some(error) = &self.error {
            return vec![StyledSpan::plain(format!("error: {error}"))];
        }
        if self.records.is_empty() {
            return vec![StyledSpan::plain(
                "No tokens to visualize. Pass a pair-list JSON file.",
            )];
        }
        match self.hovered_record() {
            Some(record) => {
                let value = match record.value {
                    Some(value) => format!("{value:.4}"),
                    None => "not in dictionary".to_string(),
                };
                vec![StyledSpan::plain(format!(
                    "{:?}  value: {value}",
                    record.raw
                ))]
            }
            None => vec![StyledSpan::plain(
                "left/right inspect tokens, c cycles colormap, q quits",
            )],
        }
    }

    /// Plain-text render for non-interactive stdout.
    #[must_use]
    pub fn snapshot_text(&self) -> String {
        let mut out = String::new();
        for line in self.render() {
            for span in &line {
                out.push_str(&span.text);
            }
            out.push('\n');
        }
        out
    }
}
