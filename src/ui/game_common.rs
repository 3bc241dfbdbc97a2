//! Shared layout and widgets for the game screen.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Screen regions for one frame of the game.
pub struct GameLayout {
    /// The scaled world: sky, walls and bird.
    pub sky: Rect,
    /// Two-line strip under the sky: headline and key hints.
    pub hud: Rect,
    /// Bordered stats column on the right.
    pub sidebar: Rect,
}

/// Frame the screen in a titled border and carve out sky, HUD and sidebar.
///
/// ```text
/// ┌─ Flappy Bird ───────────────────┬─ Info ──────┐
/// │   sky                           │  sidebar    │
/// │ hud (2 lines)                   │             │
/// └─────────────────────────────────┴─────────────┘
/// ```
pub fn create_game_layout(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    border_color: Color,
    sidebar_width: u16,
) -> GameLayout {
    frame.render_widget(Clear, area);

    let outer = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    let [left, sidebar] = split2(inner, Direction::Horizontal, Constraint::Length(sidebar_width));
    let [sky, hud] = split2(left, Direction::Vertical, Constraint::Length(HUD_HEIGHT));

    GameLayout { sky, hud, sidebar }
}

const HUD_HEIGHT: u16 = 2;

/// Split `area` into a flexible first part and a fixed second part.
fn split2(area: Rect, direction: Direction, fixed: Constraint) -> [Rect; 2] {
    let chunks = Layout::default()
        .direction(direction)
        .constraints([Constraint::Min(1), fixed])
        .split(area);
    [chunks[0], chunks[1]]
}

/// Headline on the first HUD line, `[key] action` hints on the second.
pub fn render_hud(
    frame: &mut Frame,
    area: Rect,
    headline: &str,
    headline_color: Color,
    hints: &[(&str, &str)],
) {
    if area.height == 0 {
        return;
    }

    let hint_spans = hints.iter().enumerate().flat_map(|(i, (key, action))| {
        let gap = if i == 0 { "" } else { "  " };
        [
            Span::raw(gap),
            Span::styled(*key, Style::default().fg(Color::White)),
            Span::styled(format!(" {}", action), Style::default().fg(Color::DarkGray)),
        ]
    });

    let text = vec![
        Line::styled(headline, Style::default().fg(headline_color)),
        Line::from(hint_spans.collect::<Vec<_>>()),
    ];
    frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), area);
}

/// Bordered " Info " panel. Returns the inner area.
pub fn render_info_panel_frame(frame: &mut Frame, area: Rect) -> Rect {
    let block = Block::default()
        .title(" Info ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// Banner along the bottom of `area` that leaves the play field visible.
pub fn render_banner(frame: &mut Frame, area: Rect, color: Color, title: &str, message: &str) {
    let banner_height: u16 = 3;
    if area.height < banner_height {
        return;
    }
    let banner_area = Rect {
        y: area.y + area.height - banner_height,
        height: banner_height,
        ..area
    };

    frame.render_widget(Clear, banner_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    let inner = block.inner(banner_area);
    frame.render_widget(block, banner_area);

    let line = Line::from(vec![
        Span::styled(
            title,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" - "),
        Span::styled(message, Style::default().fg(Color::White)),
    ]);
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), inner);
}
