//! Phase 2 of block parsing: walking classified lines into [`Block`]s.
//!
//! The walker holds one line of lookahead (needed for table separator rows)
//! and applies the fixed detection precedence: an open fence absorbs
//! everything, then fenced code, indented code, table, blockquote, list,
//! heading, paragraph. First match wins per line.

use crate::error::Warning;
use crate::options::ConversionOptions;

use super::classify::{LineClass, LineClassifier};
use super::kinds::{CodeFence, TableRow};
use super::types::{Block, CellAlign, ListItem};

/// Segments preprocessed (entity-escaped) text into an ordered block
/// sequence. Non-fatal degradations are recorded in `warnings`.
pub fn segment(text: &str, opts: &ConversionOptions, warnings: &mut Vec<Warning>) -> Vec<Block> {
    let classifier = LineClassifier;
    let lines: Vec<LineClass> = text.lines().map(|l| classifier.classify(l)).collect();
    walk(&lines, opts, warnings)
}

fn walk(lines: &[LineClass], opts: &ConversionOptions, warnings: &mut Vec<Warning>) -> Vec<Block> {
    let mut out = Vec::new();
    let mut para: Vec<String> = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        let c = &lines[i];

        if c.is_blank {
            flush_paragraph(&mut out, &mut para);
            i += 1;
            continue;
        }

        if c.quote_depth > 0 {
            flush_paragraph(&mut out, &mut para);
            i = take_quote(lines, i, &mut out, opts, warnings);
            continue;
        }

        if c.is_fence {
            flush_paragraph(&mut out, &mut para);
            i = take_fenced(lines, i, &mut out, warnings);
            continue;
        }

        // Indented code cannot interrupt an open paragraph.
        if c.indent >= 4 && para.is_empty() {
            flush_paragraph(&mut out, &mut para);
            i = take_indented(lines, i, &mut out);
            continue;
        }

        if is_table_start(lines, i) {
            flush_paragraph(&mut out, &mut para);
            i = take_table(lines, i, &mut out, warnings);
            continue;
        }

        if c.list.is_some() {
            flush_paragraph(&mut out, &mut para);
            i = take_list(lines, i, &mut out, opts);
            continue;
        }

        if let Some((level, text)) = &c.heading {
            flush_paragraph(&mut out, &mut para);
            out.push(Block::Heading {
                level: *level,
                text: text.clone(),
            });
            i += 1;
            continue;
        }

        para.push(c.remainder.trim().to_string());
        i += 1;
    }

    flush_paragraph(&mut out, &mut para);
    out
}

fn flush_paragraph(out: &mut Vec<Block>, para: &mut Vec<String>) {
    if !para.is_empty() {
        out.push(Block::Paragraph {
            lines: std::mem::take(para),
        });
    }
}

/// Consumes a fenced code block starting at `i`. An unterminated fence runs
/// to end of input and records a warning.
fn take_fenced(
    lines: &[LineClass],
    i: usize,
    out: &mut Vec<Block>,
    warnings: &mut Vec<Warning>,
) -> usize {
    let language = CodeFence::language(&lines[i].remainder);
    let mut content: Vec<&str> = Vec::new();
    let mut j = i + 1;
    let mut closed = false;

    while j < lines.len() {
        if CodeFence::is_closer(&lines[j].raw) {
            closed = true;
            j += 1;
            break;
        }
        content.push(&lines[j].raw);
        j += 1;
    }

    if !closed {
        warnings.push(Warning::UnterminatedFence);
    }

    out.push(Block::CodeBlock {
        language,
        content: content.join("\n"),
    });
    j
}

/// Consumes an indented code block: consecutive lines with 4+ leading
/// spaces. A blank line or a less-indented line closes it.
fn take_indented(lines: &[LineClass], i: usize, out: &mut Vec<Block>) -> usize {
    let mut content: Vec<&str> = Vec::new();
    let mut j = i;

    while j < lines.len() && !lines[j].is_blank && lines[j].quote_depth == 0 && lines[j].indent >= 4
    {
        content.push(&lines[j].remainder[4..]);
        j += 1;
    }

    out.push(Block::IndentedCode {
        content: content.join("\n"),
    });
    j
}

/// Table opener: a row of two or more cells whose next line is a separator
/// row. This is the one place the walker needs its line of lookahead.
fn is_table_start(lines: &[LineClass], i: usize) -> bool {
    let header_ok = lines[i].cells.as_ref().is_some_and(|c| c.len() >= 2);
    if !header_ok || i + 1 >= lines.len() {
        return false;
    }
    lines[i + 1]
        .cells
        .as_ref()
        .is_some_and(|c| c.len() >= 2 && TableRow::is_separator(c))
}

/// Consumes a table. Ragged body rows are padded with empty cells and
/// recorded as warnings rather than rejected.
fn take_table(
    lines: &[LineClass],
    i: usize,
    out: &mut Vec<Block>,
    warnings: &mut Vec<Warning>,
) -> usize {
    let headers = lines[i].cells.clone().unwrap_or_default();
    let sep = lines[i + 1].cells.clone().unwrap_or_default();

    let mut alignments: Vec<CellAlign> = sep.iter().map(|c| TableRow::alignment(c)).collect();
    alignments.resize(headers.len(), CellAlign::None);
    alignments.truncate(headers.len());

    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut j = i + 2;
    while j < lines.len() && !lines[j].is_blank && lines[j].quote_depth == 0 {
        let Some(cells) = lines[j].cells.clone() else {
            break;
        };
        let mut row = cells;
        if row.len() != headers.len() {
            warnings.push(Warning::MalformedTable { row: rows.len() + 1 });
            while row.len() < headers.len() {
                row.push(String::new());
            }
        }
        rows.push(row);
        j += 1;
    }

    out.push(Block::Table {
        headers,
        alignments,
        rows,
    });
    j
}

/// Consumes a run of blockquote lines. The run is grouped into maximal
/// sub-runs of equal (capped) depth; each sub-run's stripped content is
/// re-segmented recursively, so quotes can contain any other block kind.
fn take_quote(
    lines: &[LineClass],
    i: usize,
    out: &mut Vec<Block>,
    opts: &ConversionOptions,
    warnings: &mut Vec<Warning>,
) -> usize {
    let cap = opts.max_nesting_level.clamp(1, u8::MAX as usize) as u8;
    let classifier = LineClassifier;

    let mut j = i;
    while j < lines.len() && lines[j].quote_depth > 0 {
        j += 1;
    }

    let mut k = i;
    while k < j {
        let depth = lines[k].quote_depth.min(cap);
        let mut inner: Vec<LineClass> = Vec::new();
        while k < j && lines[k].quote_depth.min(cap) == depth {
            inner.push(classifier.classify(&lines[k].remainder));
            k += 1;
        }
        let children = walk(&inner, opts, warnings);
        out.push(Block::Blockquote { depth, children });
    }
    j
}

/// Consumes a run of list item lines and builds the nested list structure.
///
/// Nesting level policy: `level = indent / unit`, where `unit` is the first
/// item's marker width (marker plus trailing space). Levels are clamped to
/// `max_nesting_level`, and a jump of more than one level deeper than the
/// parent is treated as a single step.
fn take_list(lines: &[LineClass], i: usize, out: &mut Vec<Block>, opts: &ConversionOptions) -> usize {
    let mut entries: Vec<(usize, bool, String)> = Vec::new();
    let mut j = i;

    let unit = lines[i].list.as_ref().map_or(2, |m| m.marker_width.max(1));
    let cap = opts.max_nesting_level.max(1);

    while j < lines.len() && lines[j].quote_depth == 0 {
        let Some(m) = &lines[j].list else { break };
        entries.push(((m.indent / unit).min(cap), m.ordered, m.text.clone()));
        j += 1;
    }

    let mut pos = 0;
    while pos < entries.len() {
        out.extend(build_level(&entries, &mut pos, 0));
    }
    j
}

/// Builds the lists at `level`, recursing for deeper entries. Returns a
/// sequence because a marker-kind change at the same level starts a new
/// list block instead of merging.
fn build_level(entries: &[(usize, bool, String)], pos: &mut usize, level: usize) -> Vec<Block> {
    let mut blocks = Vec::new();

    while *pos < entries.len() && entries[*pos].0 >= level {
        let ordered = entries[*pos].1;
        let mut items: Vec<ListItem> = Vec::new();

        while *pos < entries.len() {
            let (entry_level, entry_ordered, ref text) = entries[*pos];
            if entry_level < level {
                break;
            }
            if entry_level == level || items.is_empty() {
                // An over-indented entry with no parent item clamps here.
                if entry_level == level && entry_ordered != ordered && !items.is_empty() {
                    break;
                }
                items.push(ListItem {
                    text: text.clone(),
                    children: Vec::new(),
                });
                *pos += 1;
            } else {
                let children = build_level(entries, pos, level + 1);
                if let Some(last) = items.last_mut() {
                    last.children.extend(children);
                }
            }
        }

        blocks.push(Block::List {
            ordered,
            depth: level as u8,
            items,
        });
    }
    blocks
}
