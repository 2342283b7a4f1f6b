//! mdast tree serialization.
//!
//! Re-emits a parsed mdast tree as markdown text with a fixed style:
//! ATX headings, `-` bullets, `*` emphasis, `**` strong, fenced code
//! blocks, and `---` thematic breaks. Three kinds of nodes get special
//! treatment: every `Break` emits a hard break, every `Text` goes
//! through the selective escaping policy, and every `Link` goes through
//! the autolink-aware link renderer. Everything else uses the standard
//! structural rendering below.
//!
//! Dispatch is an exhaustive `match` over the closed mdast node enum,
//! so a missing handler is a compile error rather than a runtime one.

use hardbreak_core::{escape, render_link, FormatOptions};
use markdown::mdast::{AlignKind, List, ListItem, Node, ReferenceKind, Table};

/// Transient context passed down during serialization
#[derive(Debug, Clone, Copy, Default)]
struct RenderContext {
    /// Whether the immediate parent is a link or link reference,
    /// which relaxes bracket escaping inside the label
    in_link_label: bool,
}

/// Serialize an mdast tree to markdown text.
///
/// Blocks are separated by a single blank line; non-empty output ends
/// with exactly one trailing newline. Literal bodies (code, math,
/// front matter, raw HTML) are emitted byte-for-byte: each block arm
/// manages its own spacing, so no post-pass ever rewrites their
/// interior.
pub fn serialize(tree: &Node, options: &FormatOptions) -> String {
    let mut out = String::with_capacity(4096);
    serialize_block(tree, options, &mut out);

    trim_outer_newlines(&mut out);
    if !out.is_empty() {
        out.push('\n');
    }
    out
}

fn serialize_block(node: &Node, options: &FormatOptions, out: &mut String) {
    match node {
        Node::Root(root) => serialize_blocks(&root.children, options, out),

        Node::Paragraph(paragraph) => {
            let start = out.len();
            serialize_inlines(&paragraph.children, options, RenderContext::default(), out);
            if out[start..].trim().is_empty() {
                out.truncate(start);
            } else {
                out.push_str("\n\n");
            }
        }

        Node::Heading(heading) => {
            let start = out.len();
            serialize_inlines(&heading.children, options, RenderContext::default(), out);
            if out[start..].trim().is_empty() {
                out.truncate(start);
            } else {
                let text = out[start..].to_string();
                out.truncate(start);
                for _ in 0..heading.depth {
                    out.push('#');
                }
                out.push(' ');
                out.push_str(&text);
                out.push_str("\n\n");
            }
        }

        Node::Blockquote(quote) => {
            let start = out.len();
            serialize_blocks(&quote.children, options, out);

            // Re-prefix the region we just wrote with quote markers
            let content = out[start..].trim_end().to_string();
            out.truncate(start);

            if content.is_empty() {
                out.push('>');
            }
            for (i, line) in content.lines().enumerate() {
                if i > 0 {
                    out.push('\n');
                }
                out.push('>');
                if !line.is_empty() {
                    out.push(' ');
                    out.push_str(line);
                }
            }
            out.push_str("\n\n");
        }

        Node::List(list) => serialize_list(list, options, out),

        // List items are emitted by their parent list
        Node::ListItem(_) => {}

        Node::Code(code) => {
            let fence = fence_for(&code.value, &options.fence);
            out.push_str(&fence);
            if let Some(lang) = &code.lang {
                out.push_str(lang);
                if let Some(meta) = &code.meta {
                    out.push(' ');
                    out.push_str(meta);
                }
            }
            out.push('\n');
            if !code.value.is_empty() {
                out.push_str(&code.value);
                out.push('\n');
            }
            out.push_str(&fence);
            out.push_str("\n\n");
        }

        Node::Math(math) => {
            out.push_str("$$\n");
            out.push_str(&math.value);
            out.push_str("\n$$\n\n");
        }

        Node::Yaml(yaml) => {
            out.push_str("---\n");
            out.push_str(&yaml.value);
            out.push_str("\n---\n\n");
        }

        Node::Toml(toml) => {
            out.push_str("+++\n");
            out.push_str(&toml.value);
            out.push_str("\n+++\n\n");
        }

        Node::ThematicBreak(_) => {
            out.push_str(&options.thematic_break);
            out.push_str("\n\n");
        }

        Node::Table(table) => serialize_table(table, options, out),

        // Rows and cells are emitted by their parent table
        Node::TableRow(_) | Node::TableCell(_) => {}

        Node::Html(html) => {
            out.push_str(&html.value);
            out.push_str("\n\n");
        }

        Node::FootnoteDefinition(definition) => {
            let start = out.len();
            serialize_blocks(&definition.children, options, out);

            let content = out[start..].trim_end().to_string();
            out.truncate(start);

            out.push_str("[^");
            out.push_str(&definition.identifier);
            out.push_str("]: ");
            for (i, line) in content.lines().enumerate() {
                if i > 0 {
                    out.push('\n');
                    if !line.is_empty() {
                        out.push_str("    ");
                    }
                }
                out.push_str(line);
            }
            out.push_str("\n\n");
        }

        Node::Definition(definition) => {
            out.push('[');
            out.push_str(definition.label.as_deref().unwrap_or(&definition.identifier));
            out.push_str("]: ");
            out.push_str(&definition.url);
            if let Some(title) = &definition.title {
                push_title(title, out);
            }
            out.push_str("\n\n");
        }

        // MDX constructs are disabled at parse time
        Node::MdxJsxFlowElement(_) | Node::MdxjsEsm(_) | Node::MdxFlowExpression(_) => {}

        inline @ (Node::Text(_)
        | Node::Emphasis(_)
        | Node::Strong(_)
        | Node::Delete(_)
        | Node::InlineCode(_)
        | Node::InlineMath(_)
        | Node::Break(_)
        | Node::Link(_)
        | Node::LinkReference(_)
        | Node::Image(_)
        | Node::ImageReference(_)
        | Node::FootnoteReference(_)
        | Node::MdxJsxTextElement(_)
        | Node::MdxTextExpression(_)) => {
            serialize_inline(inline, options, RenderContext::default(), out)
        }
    }
}

fn serialize_blocks(blocks: &[Node], options: &FormatOptions, out: &mut String) {
    for block in blocks {
        serialize_block(block, options, out);
    }
}

fn serialize_list(list: &List, options: &FormatOptions, out: &mut String) {
    for (i, child) in list.children.iter().enumerate() {
        let Node::ListItem(item) = child else {
            continue;
        };

        let start = out.len();
        if list.ordered {
            let number = list.start.unwrap_or(1) + i as u32;
            out.push_str(&number.to_string());
            out.push_str(". ");
        } else {
            out.push(options.bullet_marker);
            out.push(' ');
        }
        if let Some(checked) = item.checked {
            out.push_str(if checked { "[x] " } else { "[ ] " });
        }

        let prefix_len = out.len() - start;
        serialize_list_item(item, options, prefix_len, out);

        if list.spread && i + 1 < list.children.len() {
            out.push('\n');
        }
    }
    out.push('\n');
}

fn serialize_list_item(item: &ListItem, options: &FormatOptions, prefix_len: usize, out: &mut String) {
    let start = out.len();

    for (i, block) in item.children.iter().enumerate() {
        match block {
            Node::Paragraph(paragraph) => {
                serialize_inlines(&paragraph.children, options, RenderContext::default(), out);
                // A directly following nested list stays tight
                match item.children.get(i + 1) {
                    Some(Node::List(_)) => out.push('\n'),
                    Some(_) => out.push_str("\n\n"),
                    None => {}
                }
            }
            Node::List(nested) => {
                if !out.ends_with('\n') {
                    out.push('\n');
                }
                serialize_list(nested, options, out);
            }
            other => serialize_block(other, options, out),
        }
    }

    // Indent continuation lines to the marker width
    let content = out[start..].trim_end_matches('\n').to_string();
    out.truncate(start);

    if content.is_empty() {
        out.push('\n');
        return;
    }

    let continuation = " ".repeat(prefix_len);
    for (i, line) in content.lines().enumerate() {
        if i > 0 && !line.is_empty() {
            out.push_str(&continuation);
        }
        out.push_str(line);
        out.push('\n');
    }
}

fn serialize_table(table: &Table, options: &FormatOptions, out: &mut String) {
    // Render every cell up front so column widths are known
    let mut rows: Vec<Vec<String>> = Vec::new();
    for row in &table.children {
        let Node::TableRow(row) = row else {
            continue;
        };
        let mut cells = Vec::new();
        for cell in &row.children {
            let Node::TableCell(cell) = cell else {
                continue;
            };
            let mut buf = String::new();
            serialize_inlines(&cell.children, options, RenderContext::default(), &mut buf);
            cells.push(buf);
        }
        rows.push(cells);
    }

    let Some(header) = rows.first() else {
        return;
    };
    let col_count = header.len();

    // Separator needs room for 3 dashes plus any alignment colons
    let mut widths: Vec<usize> = (0..col_count)
        .map(|i| match table.align.get(i) {
            Some(AlignKind::Left) | Some(AlignKind::Right) => 4,
            Some(AlignKind::Center) => 5,
            _ => 3,
        })
        .collect();
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            if i < col_count {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }
    }

    for (row_index, row) in rows.iter().enumerate() {
        out.push('|');
        for (i, &width) in widths.iter().enumerate() {
            let cell = row.get(i).map(String::as_str).unwrap_or("");
            out.push(' ');
            out.push_str(cell);
            for _ in 0..width.saturating_sub(cell.chars().count()) {
                out.push(' ');
            }
            out.push_str(" |");
        }
        out.push('\n');

        if row_index == 0 {
            out.push('|');
            for (i, &width) in widths.iter().enumerate() {
                out.push(' ');
                out.push_str(&separator_for(table.align.get(i), width));
                out.push_str(" |");
            }
            out.push('\n');
        }
    }

    out.push('\n');
}

fn separator_for(align: Option<&AlignKind>, width: usize) -> String {
    let dashes = |n: usize| "-".repeat(n);
    match align {
        Some(AlignKind::Left) => format!(":{}", dashes(width.saturating_sub(1))),
        Some(AlignKind::Right) => format!("{}:", dashes(width.saturating_sub(1))),
        Some(AlignKind::Center) => format!(":{}:", dashes(width.saturating_sub(2))),
        Some(AlignKind::None) | None => dashes(width),
    }
}

fn serialize_inlines(inlines: &[Node], options: &FormatOptions, ctx: RenderContext, out: &mut String) {
    for inline in inlines {
        serialize_inline(inline, options, ctx, out);
    }
}

fn serialize_inline(node: &Node, options: &FormatOptions, ctx: RenderContext, out: &mut String) {
    match node {
        Node::Text(text) => out.push_str(&escape(&text.value, ctx.in_link_label)),

        Node::Emphasis(emphasis) => {
            let start = out.len();
            serialize_inlines(&emphasis.children, options, ctx, out);
            if out[start..].trim().is_empty() {
                out.truncate(start);
            } else {
                let inner = out[start..].to_string();
                out.truncate(start);
                out.push(options.emphasis_marker);
                out.push_str(&inner);
                out.push(options.emphasis_marker);
            }
        }

        Node::Strong(strong) => {
            let start = out.len();
            serialize_inlines(&strong.children, options, ctx, out);
            if out[start..].trim().is_empty() {
                out.truncate(start);
            } else {
                let inner = out[start..].to_string();
                out.truncate(start);
                out.push_str(&options.strong_marker);
                out.push_str(&inner);
                out.push_str(&options.strong_marker);
            }
        }

        Node::Delete(delete) => {
            let start = out.len();
            serialize_inlines(&delete.children, options, ctx, out);
            let inner = out[start..].to_string();
            out.truncate(start);
            out.push_str("~~");
            out.push_str(&inner);
            out.push_str("~~");
        }

        Node::InlineCode(code) => {
            if !code.value.is_empty() {
                let backticks = if code.value.contains('`') { "``" } else { "`" };
                let space = if code.value.starts_with('`') || code.value.ends_with('`') {
                    " "
                } else {
                    ""
                };
                out.push_str(backticks);
                out.push_str(space);
                out.push_str(&code.value);
                out.push_str(space);
                out.push_str(backticks);
            }
        }

        Node::InlineMath(math) => {
            out.push('$');
            out.push_str(&math.value);
            out.push('$');
        }

        // Every break becomes a hard break regardless of how the
        // original source spelled it
        Node::Break(_) => out.push_str("  \n"),

        Node::Link(link) => {
            let start = out.len();
            serialize_inlines(
                &link.children,
                options,
                RenderContext { in_link_label: true },
                out,
            );
            let label = out[start..].to_string();
            out.truncate(start);

            match &link.title {
                Some(title) => {
                    out.push('[');
                    out.push_str(&label);
                    out.push_str("](");
                    out.push_str(&link.url);
                    push_title(title, out);
                    out.push(')');
                }
                None => out.push_str(&render_link(&label, &link.url)),
            }
        }

        Node::LinkReference(reference) => {
            out.push('[');
            serialize_inlines(
                &reference.children,
                options,
                RenderContext { in_link_label: true },
                out,
            );
            out.push(']');
            reference_suffix(
                &reference.reference_kind,
                &reference.identifier,
                reference.label.as_deref(),
                out,
            );
        }

        Node::Image(image) => {
            out.push_str("![");
            out.push_str(&escape(&image.alt, false));
            out.push_str("](");
            out.push_str(&image.url);
            if let Some(title) = &image.title {
                push_title(title, out);
            }
            out.push(')');
        }

        Node::ImageReference(reference) => {
            out.push_str("![");
            out.push_str(&escape(&reference.alt, false));
            out.push(']');
            reference_suffix(
                &reference.reference_kind,
                &reference.identifier,
                reference.label.as_deref(),
                out,
            );
        }

        Node::FootnoteReference(reference) => {
            out.push_str("[^");
            out.push_str(&reference.identifier);
            out.push(']');
        }

        Node::Html(html) => out.push_str(&html.value),

        // MDX constructs are disabled at parse time
        Node::MdxJsxTextElement(_) | Node::MdxTextExpression(_) => {}

        block @ (Node::Root(_)
        | Node::Paragraph(_)
        | Node::Heading(_)
        | Node::Blockquote(_)
        | Node::List(_)
        | Node::ListItem(_)
        | Node::Code(_)
        | Node::Math(_)
        | Node::Yaml(_)
        | Node::Toml(_)
        | Node::ThematicBreak(_)
        | Node::Table(_)
        | Node::TableRow(_)
        | Node::TableCell(_)
        | Node::FootnoteDefinition(_)
        | Node::Definition(_)
        | Node::MdxJsxFlowElement(_)
        | Node::MdxjsEsm(_)
        | Node::MdxFlowExpression(_)) => serialize_block(block, options, out),
    }
}

/// Emit ` "title"` with embedded double quotes backslash-escaped
fn push_title(title: &str, out: &mut String) {
    out.push_str(" \"");
    for c in title.chars() {
        if c == '"' {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('"');
}

fn reference_suffix(kind: &ReferenceKind, identifier: &str, label: Option<&str>, out: &mut String) {
    match kind {
        ReferenceKind::Shortcut => {}
        ReferenceKind::Collapsed => out.push_str("[]"),
        ReferenceKind::Full => {
            out.push('[');
            out.push_str(label.unwrap_or(identifier));
            out.push(']');
        }
    }
}

/// Pick a fence long enough that the code body cannot close it early
fn fence_for(code: &str, fence: &str) -> String {
    let marker = fence.chars().next().unwrap_or('`');

    let mut longest = 0usize;
    let mut run = 0usize;
    for c in code.chars() {
        if c == marker {
            run += 1;
            longest = longest.max(run);
        } else {
            run = 0;
        }
    }

    let len = fence.chars().count().max(longest + 1);
    std::iter::repeat(marker).take(len).collect()
}

/// Trim the block separation left at the edges of the output
fn trim_outer_newlines(out: &mut String) {
    while out.ends_with('\n') {
        out.pop();
    }
    let leading = out.len() - out.trim_start_matches('\n').len();
    if leading > 0 {
        out.drain(..leading);
    }
}
