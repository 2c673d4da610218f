use super::app::{App, Column};
use gpa_core::{format_gpa, Course, Field, MAX_COURSES};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Height of one course block: border, inputs, errors, border.
const ROW_HEIGHT: u16 = 4;

pub const BLOCKING_MESSAGE: &str = "Please resolve all validation errors to calculate GPA";

pub fn draw(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Course rows
            Constraint::Length(3), // Result
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    draw_header(f, app, chunks[0]);
    draw_courses(f, app, chunks[1]);
    draw_result(f, app, chunks[2]);
    draw_status_bar(f, app, chunks[3]);
}

fn draw_header(f: &mut Frame, app: &App, area: Rect) {
    let add_style = if app.model.can_add() {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let text = Line::from(vec![
        Span::styled("Ctrl+N", add_style),
        Span::styled(" + Add Course", add_style),
    ]);

    let header = Paragraph::new(text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Blue))
            .title(Span::styled(
                " GPA CALCULATOR ",
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            )),
    );

    f.render_widget(header, area);
}

fn draw_courses(f: &mut Frame, app: &App, area: Rect) {
    let total = app.model.len();
    let visible = usize::from((area.height / ROW_HEIGHT).max(1));
    let offset = app.selected_row.saturating_sub(visible - 1);

    let constraints: Vec<Constraint> = (0..visible)
        .map(|_| Constraint::Length(ROW_HEIGHT))
        .chain(std::iter::once(Constraint::Min(0)))
        .collect();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (slot, (index, course)) in app
        .model
        .courses()
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible)
        .enumerate()
    {
        draw_course_row(f, app, course, index, rows[slot]);
    }

    if total > visible {
        let more = format!(" {}-{} of {} ", offset + 1, (offset + visible).min(total), total);
        let hint = Paragraph::new(Line::from(Span::styled(
            more,
            Style::default().fg(Color::DarkGray),
        )));
        f.render_widget(hint, rows[visible]);
    }
}

fn draw_course_row(f: &mut Frame, app: &App, course: &Course, index: usize, area: Rect) {
    let is_selected_row = index == app.selected_row;
    let border_color = if is_selected_row {
        Color::Yellow
    } else if course.is_valid() {
        Color::DarkGray
    } else {
        Color::Red
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(format!(" Course {} ", index + 1));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40), // Name
            Constraint::Percentage(20), // Credits
            Constraint::Percentage(20), // Grade
            Constraint::Percentage(20), // Remove
        ])
        .split(inner);

    for (column, cell) in Column::all().into_iter().zip(cells.iter()) {
        let focused = is_selected_row && app.selected_column == column;
        let widget = match column.field() {
            Some(field) => field_cell(course, field, focused, cell.width),
            None => remove_cell(app.model.can_remove(), focused),
        };
        f.render_widget(widget, *cell);
    }
}

fn field_cell(course: &Course, field: Field, focused: bool, width: u16) -> Paragraph<'static> {
    let value = course.value(field);
    let error = course.errors().get(field);
    let width = usize::from(width.saturating_sub(1));

    let input_style = if focused {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    } else if error.is_some() {
        Style::default().fg(Color::LightRed)
    } else {
        Style::default().fg(Color::Gray)
    };

    let input = if value.is_empty() && !focused {
        let placeholder = match field {
            Field::Grade => "Select Grade".to_string(),
            _ => format!("({})", field.label()),
        };
        Span::styled(clip(&placeholder, width), Style::default().fg(Color::DarkGray))
    } else if field == Field::Grade {
        let shown = if value.is_empty() { "Select Grade" } else { value };
        let text = if focused {
            format!("◀ {} ▶", shown)
        } else {
            shown.to_string()
        };
        Span::styled(fit_width(&text, width), input_style)
    } else {
        let cursor = if focused { "█" } else { "" };
        Span::styled(fit_width(&format!("{}{}", value, cursor), width), input_style)
    };

    let error_line = match error {
        Some(message) => Line::from(Span::styled(
            clip(message, width),
            Style::default().fg(Color::Red),
        )),
        None => Line::from(""),
    };

    Paragraph::new(vec![Line::from(input), error_line])
}

fn remove_cell(removable: bool, focused: bool) -> Paragraph<'static> {
    let style = if !removable {
        Style::default().fg(Color::DarkGray)
    } else if focused {
        Style::default()
            .bg(Color::Red)
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Red)
    };
    let indicator = if focused { "▶ " } else { "  " };

    Paragraph::new(Line::from(vec![
        Span::raw(indicator),
        Span::styled("Remove (-)", style),
    ]))
}

fn draw_result(f: &mut Frame, app: &App, area: Rect) {
    let text = if app.model.has_validation_errors() {
        Line::from(vec![
            Span::styled("⚠ ", Style::default().fg(Color::Red)),
            Span::styled(BLOCKING_MESSAGE, Style::default().fg(Color::Red)),
        ])
    } else {
        Line::from(vec![
            Span::styled(
                "Cumulative GPA: ",
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format_gpa(app.model.gpa()),
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ),
        ])
    };

    let result = Paragraph::new(text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Blue))
            .title(" Result "),
    );
    f.render_widget(result, area);
}

fn draw_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let help_text = match app.selected_column {
        Column::Name | Column::CreditHours => {
            " Type to edit  Tab:Next field  ↑/↓:Course  Ctrl+N:Add  Ctrl+D:Remove  Esc:Quit "
        }
        Column::Grade => " ←/→ or Space:Pick grade  Tab:Next field  ↑/↓:Course  Esc:Quit ",
        Column::Remove => " Enter:Remove course  Tab:Next field  ↑/↓:Course  Esc:Quit ",
    };

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(area);

    // Left: refused-operation message, else context-sensitive help
    let help = match app.status_message {
        Some(ref message) => Paragraph::new(Line::from(vec![
            Span::styled("✗ ", Style::default().fg(Color::Yellow)),
            Span::styled(message.as_str(), Style::default().fg(Color::Yellow)),
        ])),
        None => Paragraph::new(Line::from(Span::styled(
            help_text,
            Style::default().fg(Color::Cyan),
        ))),
    }
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" Keys · {} ", app.selected_column.title())),
    );

    // Right: list size
    let info = format!(" {}/{} courses ", app.model.len(), MAX_COURSES);
    let info_widget = Paragraph::new(Line::from(Span::styled(
        info,
        Style::default().fg(Color::DarkGray),
    )))
    .block(Block::default().borders(Borders::ALL).title(" Info "));

    f.render_widget(help, chunks[0]);
    f.render_widget(info_widget, chunks[1]);
}

/// Fits `text` into `width` terminal columns, keeping the tail so a cursor at
/// the end stays visible.
pub fn fit_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut kept = Vec::new();
    let mut used = 1; // leading ellipsis
    for c in text.chars().rev() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        kept.push(c);
    }
    std::iter::once('…').chain(kept.into_iter().rev()).collect()
}

/// Cuts `text` to `width` terminal columns from the left.
pub fn clip(text: &str, width: usize) -> String {
    let mut used = 0;
    text.chars()
        .take_while(|c| {
            used += c.width().unwrap_or(0);
            used <= width
        })
        .collect()
}

#[cfg(test)]
#[path = "tests/views_tests.rs"]
mod tests;
