//! View-model to widget mapping. Reads the session view model only; all
//! state transitions happen in the core update loop.

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use apilens_core::{HighlightSpan, HighlightStyle, Mode, SessionViewModel};

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

const COLOR_ACCENT: Color = Color::Cyan;
const COLOR_DIM: Color = Color::DarkGray;
const COLOR_ERROR: Color = Color::Red;
const STYLE_MATCHED: Style = Style::new().fg(Color::Black).bg(Color::Yellow);
const STYLE_SELECTED: Style = Style::new()
    .fg(Color::Red)
    .bg(Color::Yellow)
    .add_modifier(Modifier::BOLD);

pub fn render(frame: &mut Frame, view: &SessionViewModel, spinner_frame: usize) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_url_bar(frame, chunks[0], view);
    render_content(frame, chunks[1], view, spinner_frame);
    render_footer(frame, chunks[2], view);

    match view.mode {
        Mode::ShowingHeaders => render_headers(frame, view),
        Mode::ShowingError => render_error(frame, view),
        Mode::EditingSearch => render_search_prompt(frame, chunks[1], view),
        _ => {}
    }
}

fn render_url_bar(frame: &mut Frame, area: Rect, view: &SessionViewModel) {
    let editing = view.mode == Mode::EditingUrl;
    let border_style = if editing {
        Style::default().fg(COLOR_ACCENT)
    } else {
        Style::default()
    };

    let mut spans = vec![Span::raw(view.url_input.as_str())];
    if editing {
        if let Some(suggestion) = &view.url_suggestion {
            // Ghost remainder of the history suggestion; Tab completes it.
            spans.push(Span::styled(
                &suggestion[view.url_input.len()..],
                Style::default().fg(COLOR_DIM),
            ));
        }
    }

    let field = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title("URL"),
    );
    frame.render_widget(field, area);

    if editing {
        let cursor_x = area.x + 1 + view.url_input.chars().count() as u16;
        frame.set_cursor_position(Position::new(cursor_x.min(area.right() - 2), area.y + 1));
    }
}

fn render_content(frame: &mut Frame, area: Rect, view: &SessionViewModel, spinner_frame: usize) {
    let block = Block::default().borders(Borders::ALL).title("Response");

    let paragraph = if view.mode == Mode::Fetching {
        let spinner = SPINNER_FRAMES[spinner_frame % SPINNER_FRAMES.len()];
        Paragraph::new(Line::from(vec![
            Span::styled(spinner, Style::default().fg(COLOR_ACCENT)),
            Span::raw(" fetching..."),
        ]))
        .block(block)
    } else if let Some(body) = &view.body {
        Paragraph::new(highlighted_lines(body, &view.highlights))
            .block(block)
            .wrap(Wrap { trim: false })
    } else {
        Paragraph::new(Line::from(Span::styled(
            "ctrl+l to enter a URL, enter to fetch",
            Style::default().fg(COLOR_DIM),
        )))
        .block(block)
    };

    frame.render_widget(paragraph, area);
}

/// Splits the body into lines and carves each line into plain and
/// highlighted segments. Highlight offsets are byte positions into the whole
/// body, sorted and non-overlapping.
fn highlighted_lines<'a>(body: &'a str, highlights: &[HighlightSpan]) -> Vec<Line<'a>> {
    let mut lines = Vec::new();
    let mut offset = 0usize;

    for raw in body.split('\n') {
        let line_start = offset;
        let line_end = line_start + raw.len();
        let mut spans = Vec::new();
        let mut cursor = line_start;

        for highlight in highlights {
            if highlight.end <= line_start || highlight.start >= line_end {
                continue;
            }
            let start = highlight.start.max(line_start);
            let end = highlight.end.min(line_end);
            if start > cursor {
                spans.push(Span::raw(&raw[cursor - line_start..start - line_start]));
            }
            spans.push(Span::styled(
                &raw[start - line_start..end - line_start],
                highlight_style(highlight.style),
            ));
            cursor = end;
        }
        if cursor < line_end {
            spans.push(Span::raw(&raw[cursor - line_start..]));
        }
        if spans.is_empty() {
            spans.push(Span::raw(""));
        }

        lines.push(Line::from(spans));
        offset = line_end + 1;
    }

    lines
}

fn highlight_style(style: HighlightStyle) -> Style {
    match style {
        HighlightStyle::Matched => STYLE_MATCHED,
        HighlightStyle::Selected => STYLE_SELECTED,
    }
}

fn render_footer(frame: &mut Frame, area: Rect, view: &SessionViewModel) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(24)])
        .split(area);

    let hints = match view.mode {
        Mode::EditingUrl => "enter: fetch  tab: complete  esc: back",
        Mode::EditingSearch => "enter: confirm  esc: cancel",
        Mode::Searching => "n: next match  esc: done",
        Mode::Fetching => "fetching...  ctrl+c: quit",
        _ => "ctrl+l: url  /: search  h: headers  q: quit",
    };
    let mut left = vec![Span::styled(hints, Style::default().fg(COLOR_DIM))];
    if view.mode == Mode::Searching {
        if let Some(selected) = view.selected_match {
            left.push(Span::raw("  "));
            left.push(Span::styled(
                format!("match {}/{}", selected + 1, view.match_count),
                Style::default().fg(COLOR_ACCENT),
            ));
        }
    }
    frame.render_widget(Paragraph::new(Line::from(left)), halves[0]);

    if let Some(ms) = view.response_time_ms {
        let timing = Paragraph::new(Line::from(Span::styled(
            format!("Response time: {:.2}s", ms as f64 / 1000.0),
            Style::default().fg(Color::Green),
        )))
        .alignment(Alignment::Right);
        frame.render_widget(timing, halves[1]);
    }
}

fn render_search_prompt(frame: &mut Frame, content_area: Rect, view: &SessionViewModel) {
    let area = Rect {
        x: content_area.x,
        y: content_area.bottom().saturating_sub(3),
        width: content_area.width,
        height: 3,
    };
    frame.render_widget(Clear, area);

    let count = if view.match_count > 0 {
        format!(" {} matches", view.match_count)
    } else {
        String::new()
    };
    let prompt = Paragraph::new(Line::from(vec![
        Span::raw(view.search_input.as_str()),
        Span::styled(count, Style::default().fg(COLOR_DIM)),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(COLOR_ACCENT))
            .title("Search"),
    );
    frame.render_widget(prompt, area);
    let cursor_x = area.x + 1 + view.search_input.chars().count() as u16;
    frame.set_cursor_position(Position::new(cursor_x.min(area.right() - 2), area.y + 1));
}

fn render_error(frame: &mut Frame, view: &SessionViewModel) {
    let Some(message) = &view.error else { return };
    let area = centered_rect(60, 20, frame.area());
    frame.render_widget(Clear, area);
    let popup = Paragraph::new(Line::from(Span::raw(message.as_str())))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(COLOR_ERROR))
                .title("Error"),
        );
    frame.render_widget(popup, area);
}

fn render_headers(frame: &mut Frame, view: &SessionViewModel) {
    let area = centered_rect(70, 60, frame.area());
    frame.render_widget(Clear, area);
    let lines: Vec<Line> = view
        .headers
        .iter()
        .map(|(name, value)| {
            Line::from(vec![
                Span::styled(name.as_str(), Style::default().fg(COLOR_ACCENT)),
                Span::raw(" "),
                Span::raw(value.as_str()),
            ])
        })
        .collect();
    let popup = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title("Headers"));
    frame.render_widget(popup, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);
    horizontal[1]
}
