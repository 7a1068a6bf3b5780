use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect_by_size, layout_regions};
use crate::ui::presentation::{Control, CounterView};
use crate::ui::theme::{count_color, CONTROL_BG, GLOBAL_BORDER, HEADER_TEXT, TITLE_ACCENT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

const PANEL_MIN_WIDTH: u16 = 32;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let view = app.view();

    frame.render_widget(Header::new().widget(&view), header);
    frame.render_widget(Clear, body);

    let lines = counter_lines(&view);
    let content_width = lines.iter().map(Line::width).max().unwrap_or(0) as u16;
    let panel_width = content_width.saturating_add(4).max(PANEL_MIN_WIDTH);
    let panel_height = (lines.len() as u16).saturating_add(2);
    let panel = centered_rect_by_size(body, panel_width, panel_height);

    let block = Block::default()
        .title(Span::styled(" Count ", Style::default().fg(TITLE_ACCENT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    frame.render_widget(Paragraph::new(lines).block(block), panel);

    frame.render_widget(Footer::new().widget(footer), footer);
}

/// Text of the counter panel: current line, total line, control row.
pub fn counter_lines(view: &CounterView) -> Vec<Line<'static>> {
    let text_style = Style::default().fg(HEADER_TEXT);
    let current_style = Style::default()
        .fg(count_color(view.current_style()))
        .add_modifier(Modifier::BOLD);

    let mut controls = Vec::new();
    for control in view.visible_controls() {
        if !controls.is_empty() {
            controls.push(Span::raw("  "));
        }
        controls.push(control_span(control));
    }

    vec![
        Line::from(vec![
            Span::styled(" Current people: ", text_style),
            Span::styled(view.current.to_string(), current_style),
        ]),
        Line::from(vec![
            Span::styled(" Total people:   ", text_style),
            Span::styled(view.total.to_string(), text_style),
        ]),
        Line::from(""),
        Line::from(controls),
    ]
}

fn control_span(control: Control) -> Span<'static> {
    Span::styled(
        format!("[ {} ]", control.label()),
        Style::default().fg(HEADER_TEXT).bg(CONTROL_BG),
    )
}
