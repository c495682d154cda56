//! Rendering projector: combines segmentation, lookup, normalization, and
//! interpolation into the final ordered segment list.

use serde::Serialize;

use crate::color::{LabelColor, Rgb};
use crate::colormap::Colormap;
use crate::input::TokenRecord;
use crate::range::ValueRange;
use crate::saliency::SaliencyMap;
use crate::token::{split_leading_space, token_pieces, TokenPiece};
use crate::tokenize::{tokenize_text, TextUnit};

/// Per-render settings supplied by the caller.
///
/// Hover state is owned by the surface and passed in fresh on every render;
/// the pipeline itself keeps no state between calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderOptions {
    pub colormap: Colormap,
    pub hovered: Option<usize>,
}

/// An interactive text run with its resolved display colors.
///
/// `background` is `None` when the token has no known saliency; the surface
/// renders it as a neutral placeholder rather than interpolating.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextSegment {
    pub text: String,
    pub token_index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<Rgb>,
    pub label: LabelColor,
    pub hovered: bool,
}

/// Minimal renderable unit handed to the presentation surface.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Segment {
    Text(TextSegment),
    Space { value: String },
    Newline,
}

/// Full projector output for one render pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderOutput {
    pub segments: Vec<Segment>,
    pub range: ValueRange,
}

/// Project decoded pair-list records into display segments.
///
/// Record order is preserved and each record contributes its text pieces and
/// line breaks exactly once. The token index used for hover correlation is
/// the record's position in the input, so duplicate tokens stay
/// independently addressable.
#[must_use]
pub fn render_pairs(records: &[TokenRecord], options: RenderOptions) -> RenderOutput {
    let range = ValueRange::from_values(records.iter().filter_map(|record| record.value));
    let mut segments = Vec::new();
    for (index, record) in records.iter().enumerate() {
        let background = record
            .value
            .map(|value| options.colormap.interpolate(range.normalize(value)));
        for piece in token_pieces(&record.raw) {
            match piece {
                TokenPiece::Newline => segments.push(Segment::Newline),
                TokenPiece::Text(text) => {
                    let (space, visible) = split_leading_space(&text);
                    if let Some(space) = space {
                        segments.push(Segment::Space {
                            value: space.to_string(),
                        });
                    }
                    if !visible.is_empty() {
                        segments.push(Segment::Text(text_segment(
                            visible, index, background, options,
                        )));
                    }
                }
            }
        }
    }
    RenderOutput { segments, range }
}

/// Project free text plus a saliency dictionary into display segments.
///
/// Whitespace runs and newlines pass through verbatim (never collapsed); the
/// token index is the word's ordinal among word units.
#[must_use]
pub fn render_text(text: &str, saliency: &SaliencyMap, options: RenderOptions) -> RenderOutput {
    let range = saliency.value_range();
    let mut segments = Vec::new();
    let mut word_index = 0usize;
    for unit in tokenize_text(text) {
        match unit {
            TextUnit::Newline => segments.push(Segment::Newline),
            TextUnit::Spaces(run) => segments.push(Segment::Space { value: run }),
            TextUnit::Word(word) => {
                let background = saliency
                    .lookup(&word)
                    .map(|value| options.colormap.interpolate(range.normalize(value)));
                segments.push(Segment::Text(text_segment(
                    &word, word_index, background, options,
                )));
                word_index += 1;
            }
        }
    }
    RenderOutput { segments, range }
}

fn text_segment(
    text: &str,
    token_index: usize,
    background: Option<Rgb>,
    options: RenderOptions,
) -> TextSegment {
    TextSegment {
        text: text.to_string(),
        token_index,
        background,
        label: background.map_or(LabelColor::Dark, LabelColor::for_background),
        hovered: options.hovered == Some(token_index),
    }
}
