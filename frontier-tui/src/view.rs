//! Rendering of the resource list, side pane, bars and help overlay.

use std::time::Instant;

use crossterm::style::Color;
use frontier_lib::{ContextCard, Controller, Host, PeekContent, ScrollAlign, SectionId};
use unicode_width::UnicodeWidthStr;

use crate::host::{Flash, TuiHost};
use crate::terminal::{Frame, Span, Style};

const ACCENT: Color = Color::Rgb {
    r: 92,
    g: 207,
    b: 230,
};
const MUTED: Color = Color::Rgb {
    r: 112,
    g: 122,
    b: 140,
};
const TEXT: Color = Color::Rgb {
    r: 204,
    g: 204,
    b: 204,
};
const FOCUS_BG: Color = Color::Rgb {
    r: 36,
    g: 42,
    b: 54,
};
const FLASH_BG: Color = Color::Rgb {
    r: 28,
    g: 70,
    b: 82,
};
const PANEL_BG: Color = Color::Rgb {
    r: 20,
    g: 24,
    b: 32,
};

/// Width of the preview/author pane.
pub const SIDE_WIDTH: u16 = 38;
/// Terminal width below which the side pane is dropped.
pub const SIDE_MIN_TERMINAL_WIDTH: u16 = 100;

/// What a line of the list shows. Used for mouse hit testing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    Header(SectionId),
    Row(usize),
    Peek(usize),
}

#[derive(Debug, Clone)]
pub struct ListLine {
    pub kind: LineKind,
    pub spans: Vec<Span>,
    pub fill: Option<Color>,
}

impl ListLine {
    fn new(kind: LineKind, spans: Vec<Span>) -> Self {
        Self {
            kind,
            spans,
            fill: None,
        }
    }
}

/// Word-wrap text to `width` display columns.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            word.width()
        } else {
            current.width() + 1 + word.width()
        };
        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// First list line to show so that line `target` lands per `align`.
pub fn scroll_to(target: usize, align: ScrollAlign, viewport: usize, total: usize) -> usize {
    let max = total.saturating_sub(viewport);
    let offset = match align {
        ScrollAlign::Start => target,
        ScrollAlign::Center => target.saturating_sub(viewport / 2),
        ScrollAlign::End => (target + 1).saturating_sub(viewport),
    };
    offset.min(max)
}

/// Lay out section headers, visible rows and the open quick peek.
pub fn list_lines(
    controller: &Controller,
    host: &TuiHost,
    flash: &Flash,
    now: Instant,
    width: u16,
) -> Vec<ListLine> {
    let navigator = controller.navigator();
    let sections = controller.sections();
    let mut lines = Vec::new();

    let push_headers = |lines: &mut Vec<ListLine>, index: usize| {
        for section in sections.iter().filter(|s| s.rows.start == index) {
            let (marker, color) = if section.collapsed {
                ("▶ ", MUTED)
            } else {
                ("▼ ", ACCENT)
            };
            let mut spans = vec![
                Span::new(marker, Style::fg(color)),
                Span::new(section.title.clone(), Style::fg(color).bold()),
            ];
            if section.collapsed {
                spans.push(Span::new(
                    format!("  ({})", section.rows.len()),
                    Style::fg(MUTED),
                ));
            } else if let Some(description) = &section.description {
                spans.push(Span::new(format!("  {}", description), Style::fg(MUTED).dim()));
            }
            let mut line = ListLine::new(LineKind::Header(section.id.clone()), spans);
            if flash.section_lit(&section.id, now) {
                line.fill = Some(FLASH_BG);
            }
            lines.push(line);
        }
    };

    for (index, row) in navigator.rows().iter().enumerate() {
        push_headers(&mut lines, index);
        if !controller.is_row_visible(index, host) {
            continue;
        }

        let focused = navigator.is_focused(index);
        let mut spans = vec![
            Span::new(if focused { "  ▸ " } else { "    " }, Style::fg(ACCENT)),
            Span::new(
                row.title.clone(),
                if focused {
                    Style::fg(TEXT).bold()
                } else {
                    Style::fg(TEXT)
                },
            ),
        ];
        if let Some(author) = &row.author {
            spans.push(Span::new(format!("  {}", author), Style::fg(MUTED)));
        }
        if let Some(time) = &row.time {
            spans.push(Span::new(format!("  {}", time), Style::fg(MUTED).dim()));
        }

        let mut line = ListLine::new(LineKind::Row(index), spans);
        if flash.row_lit(index, now) {
            line.fill = Some(FLASH_BG);
        } else if focused {
            line.fill = Some(FOCUS_BG);
        }
        lines.push(line);

        if controller.peek().active_index() == Some(index)
            && let Some(content) = controller.peek().content()
        {
            lines.extend(peek_lines(index, content, width));
        }
    }
    push_headers(&mut lines, navigator.len());

    lines
}

fn peek_lines(index: usize, content: &PeekContent, width: u16) -> Vec<ListLine> {
    let inner = (width as usize).saturating_sub(8);
    let bar = || Span::new("      │ ", Style::fg(ACCENT));
    let mut lines = vec![ListLine::new(
        LineKind::Peek(index),
        vec![bar(), Span::new(content.meta.clone(), Style::fg(MUTED))],
    )];
    for text in wrap(&content.body, inner) {
        lines.push(ListLine::new(
            LineKind::Peek(index),
            vec![bar(), Span::new(text, Style::fg(TEXT))],
        ));
    }
    if let Some(url) = &content.url {
        lines.push(ListLine::new(
            LineKind::Peek(index),
            vec![bar(), Span::new(format!("Open Resource → {}", url), Style::fg(ACCENT))],
        ));
    }
    lines
}

/// Paint list lines `[scroll, scroll + height)` starting at screen line `top`.
pub fn draw_list(frame: &mut Frame, lines: &[ListLine], scroll: usize, top: u16, height: u16, width: u16) {
    for (offset, line) in lines.iter().skip(scroll).take(height as usize).enumerate() {
        let y = top + offset as u16;
        if let Some(fill) = line.fill {
            frame.put(
                0,
                y,
                width,
                Span::new(" ".repeat(width as usize), Style::default().on(fill)),
            );
        }
        let spans = line
            .spans
            .iter()
            .cloned()
            .map(|mut span| {
                if span.style.bg.is_none() {
                    span.style.bg = line.fill;
                }
                span
            })
            .collect();
        frame.put_spans(0, y, width, spans);
    }
}

pub fn draw_title(frame: &mut Frame, title: &str, rows: usize) {
    let width = frame.width();
    frame.fill_line(0, PANEL_BG);
    frame.put_spans(
        0,
        0,
        width,
        vec![
            Span::new(" ◆ ", Style::fg(ACCENT).on(PANEL_BG)),
            Span::new(title.to_string(), Style::fg(TEXT).on(PANEL_BG).bold()),
            Span::new(format!("   {} resources", rows), Style::fg(MUTED).on(PANEL_BG)),
        ],
    );
}

pub fn draw_status<H: Host>(frame: &mut Frame, controller: &Controller, host: &H, status: Option<&str>) {
    let y = frame.height().saturating_sub(1);
    let width = frame.width();
    let navigator = controller.navigator();
    let visible: Vec<usize> = (0..navigator.len())
        .filter(|&i| controller.is_row_visible(i, host))
        .collect();
    let position = navigator
        .focused_index()
        .and_then(|i| visible.iter().position(|&v| v == i))
        .map_or_else(|| "-".to_string(), |p| (p + 1).to_string());

    let mut spans = vec![
        Span::new(
            format!(" {} ", controller.status_label()),
            Style::fg(Color::Black).on(ACCENT).bold(),
        ),
        Span::new(
            format!(" {}/{} ", position, visible.len()),
            Style::fg(TEXT).on(PANEL_BG),
        ),
    ];
    if controller.input().is_pending() {
        let keys: Vec<String> = controller.input().pending().iter().map(|k| k.label()).collect();
        spans.push(Span::new(
            format!(" {}… ", keys.join(" ")),
            Style::fg(ACCENT).on(PANEL_BG),
        ));
    }
    if let Some(status) = status {
        spans.push(Span::new(format!(" {} ", status), Style::fg(MUTED).on(PANEL_BG)));
    }
    frame.fill_line(y, PANEL_BG);
    frame.put_spans(0, y, width, spans);

    let hint = "? help ";
    let hint_x = width.saturating_sub(hint.width() as u16);
    frame.put(hint_x, y, hint.width() as u16, Span::new(hint, Style::fg(MUTED).on(PANEL_BG)));
}

/// Preview of the focused resource and the hovered author's card.
pub fn draw_side(
    frame: &mut Frame,
    controller: &Controller,
    host: &TuiHost,
    card: Option<&ContextCard>,
    top: u16,
    height: u16,
) {
    let x = frame.width().saturating_sub(SIDE_WIDTH);
    let inner = SIDE_WIDTH - 2;
    frame.clear_rect(x, top, SIDE_WIDTH, height, PANEL_BG);
    let style = |s: Style| s.on(PANEL_BG);
    let mut y = top;
    let mut line = |frame: &mut Frame, span: Span| {
        if y < top + height {
            frame.put(x + 1, y, inner, span);
        }
        y += 1;
    };

    line(frame, Span::new("Preview", style(Style::fg(ACCENT).bold())));
    let previewed = host.preview.as_ref().and_then(|id| {
        controller
            .navigator()
            .rows()
            .iter()
            .find(|row| row.resource_id.as_ref() == Some(id))
    });
    match previewed {
        Some(row) => {
            line(frame, Span::new(row.title.clone(), style(Style::fg(TEXT).bold())));
            let url = row.url.clone().or_else(|| {
                row.resource_id
                    .as_ref()
                    .and_then(|id| host.resource_url(id))
            });
            if let Some(url) = url {
                line(frame, Span::new(url, style(Style::fg(ACCENT))));
            }
            if let Some(description) = row.description_text() {
                for text in wrap(description, inner as usize) {
                    line(frame, Span::new(text, style(Style::fg(TEXT))));
                }
            }
        }
        None => line(frame, Span::new("Select a resource", style(Style::fg(MUTED).dim()))),
    }

    line(frame, Span::new("", style(Style::default())));
    line(frame, Span::new("Author", style(Style::fg(ACCENT).bold())));
    match card {
        Some(card) => {
            line(frame, Span::new(card.name.clone(), style(Style::fg(TEXT).bold())));
            line(frame, Span::new(card.role.clone(), style(Style::fg(ACCENT))));
            line(frame, Span::new(card.details().join(" · "), style(Style::fg(MUTED))));
        }
        None => line(
            frame,
            Span::new("Hover an author for details", style(Style::fg(MUTED).dim())),
        ),
    }
}

/// Modal list of keyboard shortcuts, centered.
pub fn draw_help(frame: &mut Frame, controller: &Controller) {
    let sections = controller.help_sections();
    let width: u16 = 46;
    let height = sections.iter().map(|s| s.entries.len() as u16 + 2).sum::<u16>() + 4;
    let x = frame.width().saturating_sub(width) / 2;
    let y = frame.height().saturating_sub(height) / 2;
    frame.clear_rect(x, y, width, height, PANEL_BG);

    let inner = width - 4;
    let mut row = y + 1;
    frame.put(
        x + 2,
        row,
        inner,
        Span::new(frontier_lib::help::HELP_TITLE, Style::fg(ACCENT).on(PANEL_BG).bold()),
    );
    row += 2;
    for section in &sections {
        frame.put(
            x + 2,
            row,
            inner,
            Span::new(section.title, Style::fg(TEXT).on(PANEL_BG).bold()),
        );
        row += 1;
        for (keys, description) in &section.entries {
            frame.put_spans(
                x + 2,
                row,
                inner,
                vec![
                    Span::new(format!("{:<14}", keys), Style::fg(ACCENT).on(PANEL_BG)),
                    Span::new(*description, Style::fg(TEXT).on(PANEL_BG)),
                ],
            );
            row += 1;
        }
        row += 1;
    }
    frame.put(
        x + 2,
        row,
        inner,
        Span::new(frontier_lib::help::HELP_FOOTER, Style::fg(MUTED).on(PANEL_BG)),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use frontier_lib::{Catalog, Command};

    const CATALOG: &str = r#"{
      "categories": [
        { "id": "a", "name": "A", "rows": [
          { "title": "one", "description": "first row" },
          { "title": "two" }
        ] },
        { "id": "b", "name": "B", "rows": [ { "title": "three" } ] }
      ]
    }"#;

    fn setup() -> (Controller, TuiHost) {
        let catalog = Catalog::from_json(CATALOG).unwrap();
        let (rows, sections) = catalog.snapshot();
        (Controller::new(rows, sections), TuiHost::new(catalog))
    }

    fn kinds(lines: &[ListLine]) -> Vec<LineKind> {
        lines.iter().map(|l| l.kind.clone()).collect()
    }

    #[test]
    fn test_wrap() {
        assert_eq!(wrap("a bb ccc dddd", 6), vec!["a bb", "ccc", "dddd"]);
        assert_eq!(wrap("", 6), Vec::<String>::new());
        assert_eq!(wrap("overlongword", 4), vec!["overlongword"]);
    }

    #[test]
    fn test_scroll_to() {
        assert_eq!(scroll_to(10, ScrollAlign::Center, 6, 40), 7);
        assert_eq!(scroll_to(1, ScrollAlign::Center, 6, 40), 0);
        assert_eq!(scroll_to(39, ScrollAlign::Center, 6, 40), 34);
        assert_eq!(scroll_to(10, ScrollAlign::Start, 6, 40), 10);
        assert_eq!(scroll_to(10, ScrollAlign::End, 6, 40), 5);
        assert_eq!(scroll_to(3, ScrollAlign::Center, 20, 5), 0);
    }

    #[test]
    fn test_list_lines_headers_and_rows() {
        let (controller, host) = setup();
        let lines = list_lines(&controller, &host, &Flash::default(), Instant::now(), 80);
        assert_eq!(
            kinds(&lines),
            vec![
                LineKind::Header("a".into()),
                LineKind::Row(0),
                LineKind::Row(1),
                LineKind::Header("b".into()),
                LineKind::Row(2),
            ]
        );
    }

    #[test]
    fn test_list_lines_collapsed_and_peek() {
        let (mut controller, mut host) = setup();
        controller.dispatch(Command::NextRow, &mut host);
        controller.dispatch(Command::TogglePeek, &mut host);
        controller.toggle_section(&"b".into(), &mut host);

        let lines = list_lines(&controller, &host, &Flash::default(), Instant::now(), 80);
        assert_eq!(
            kinds(&lines),
            vec![
                LineKind::Header("a".into()),
                LineKind::Row(0),
                LineKind::Peek(0),
                LineKind::Peek(0),
                LineKind::Row(1),
                LineKind::Header("b".into()),
            ]
        );
        assert_eq!(lines[1].fill, Some(FOCUS_BG));
    }
}
