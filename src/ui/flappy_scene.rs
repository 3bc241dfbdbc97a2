//! UI rendering for the game screen.

use super::game_common::{
    create_game_layout, render_banner, render_hud, render_info_panel_frame,
};
use super::sprites::SpriteSheet;
use crate::core::constants::{WORLD_HEIGHT, WORLD_WIDTH};
use crate::core::geometry::Rect as WorldRect;
use crate::core::snapshot::{BirdSprite, Snapshot};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// World position the score is centred on.
const COUNTER_X: i32 = 200;
const COUNTER_Y: i32 = 50;

const CONTROLS: [(&str, &str); 2] = [("[Space/Up/Click]", "Flap"), ("[Esc/Q]", "Quit")];

/// One terminal cell of the play field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub ch: char,
    pub style: Style,
}

impl Cell {
    const EMPTY: Cell = Cell {
        ch: ' ',
        style: Style::new(),
    };
}

/// Render the whole game screen.
pub fn render_flappy(
    frame: &mut Frame,
    area: Rect,
    snapshot: &Snapshot,
    sheet: &SpriteSheet,
    revivals: u32,
) {
    let border = if snapshot.dead { Color::Red } else { Color::Cyan };
    let layout = create_game_layout(frame, area, " Flappy Bird ", border, 22);

    render_play_area(frame, layout.sky, snapshot, sheet);
    render_hud_content(frame, layout.hud, snapshot);
    render_info_panel(frame, layout.sidebar, snapshot, revivals);
}

fn render_play_area(frame: &mut Frame, area: Rect, snapshot: &Snapshot, sheet: &SpriteSheet) {
    let grid = build_play_field(snapshot, sheet, area.width as usize, area.height as usize);

    let lines: Vec<Line> = grid
        .into_iter()
        .map(|row| {
            Line::from(
                row.into_iter()
                    .map(|cell| Span::styled(cell.ch.to_string(), cell.style))
                    .collect::<Vec<_>>(),
            )
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), area);

    if snapshot.dead {
        render_banner(
            frame,
            area,
            Color::Red,
            "CRASH!",
            "the run restarts once the bird leaves the sky",
        );
    }
}

/// Lay out walls, score and bird on a `width` x `height` grid.
///
/// Drawing order: walls, then the score, then the bird on top.
pub fn build_play_field(
    snapshot: &Snapshot,
    sheet: &SpriteSheet,
    width: usize,
    height: usize,
) -> Vec<Vec<Cell>> {
    let mut grid = vec![vec![Cell::EMPTY; width]; height];
    if width == 0 || height == 0 {
        return grid;
    }

    let wall_style = Style::default().fg(Color::Green);
    fill_rect(&mut grid, &snapshot.upper_wall, sheet.wall_body, wall_style);
    fill_rect(&mut grid, &snapshot.lower_wall, sheet.wall_body, wall_style);

    // Caps on the gap-facing edges
    if let Some((x0, _, x1, y1)) = to_cells(&snapshot.upper_wall, width, height) {
        paint_row(&mut grid, y1 - 1, x0, x1, sheet.wall_cap, wall_style);
    }
    if let Some((x0, y0, x1, _)) = to_cells(&snapshot.lower_wall, width, height) {
        paint_row(&mut grid, y0, x0, x1, sheet.wall_cap, wall_style);
    }

    draw_counter(&mut grid, snapshot.counter, width, height);
    draw_bird(&mut grid, snapshot, sheet, width, height);

    grid
}

fn scale(value: i32, cells: usize, world: i32) -> i64 {
    (i64::from(value) * cells as i64).div_euclid(i64::from(world))
}

/// Map a world rectangle to a clipped cell range `(x0, y0, x1, y1)`,
/// end-exclusive. Anything with area covers at least one cell.
pub fn to_cells(rect: &WorldRect, width: usize, height: usize) -> Option<(usize, usize, usize, usize)> {
    if rect.w <= 0 || rect.h <= 0 {
        return None;
    }
    let x0 = scale(rect.left(), width, WORLD_WIDTH);
    let x1 = scale(rect.right(), width, WORLD_WIDTH).max(x0 + 1);
    let y0 = scale(rect.top(), height, WORLD_HEIGHT);
    let y1 = scale(rect.bottom(), height, WORLD_HEIGHT).max(y0 + 1);

    let clip = |v: i64, max: usize| v.clamp(0, max as i64) as usize;
    let (x0, x1) = (clip(x0, width), clip(x1, width));
    let (y0, y1) = (clip(y0, height), clip(y1, height));
    (x0 < x1 && y0 < y1).then_some((x0, y0, x1, y1))
}

fn fill_rect(grid: &mut [Vec<Cell>], rect: &WorldRect, ch: char, style: Style) {
    let height = grid.len();
    let width = grid.first().map_or(0, Vec::len);
    if let Some((x0, y0, x1, y1)) = to_cells(rect, width, height) {
        for y in y0..y1 {
            paint_row(grid, y, x0, x1, ch, style);
        }
    }
}

fn paint_row(grid: &mut [Vec<Cell>], y: usize, x0: usize, x1: usize, ch: char, style: Style) {
    if let Some(row) = grid.get_mut(y) {
        for cell in row.iter_mut().take(x1).skip(x0) {
            *cell = Cell { ch, style };
        }
    }
}

fn put(grid: &mut [Vec<Cell>], x: i64, y: i64, ch: char, style: Style) {
    if x < 0 || y < 0 {
        return;
    }
    if let Some(cell) = grid
        .get_mut(y as usize)
        .and_then(|row| row.get_mut(x as usize))
    {
        *cell = Cell { ch, style };
    }
}

fn draw_counter(grid: &mut [Vec<Cell>], counter: u32, width: usize, height: usize) {
    let text = counter.to_string();
    let row = scale(COUNTER_Y, height, WORLD_HEIGHT);
    let start = scale(COUNTER_X, width, WORLD_WIDTH) - (text.len() as i64) / 2;
    let style = Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD);
    for (i, ch) in text.chars().enumerate() {
        put(grid, start + i as i64, row, ch, style);
    }
}

fn draw_bird(
    grid: &mut [Vec<Cell>],
    snapshot: &Snapshot,
    sheet: &SpriteSheet,
    width: usize,
    height: usize,
) {
    let sprite = sheet.bird(snapshot.sprite);
    let style = match snapshot.sprite {
        BirdSprite::Dead => Style::default().fg(Color::Red),
        BirdSprite::Flap => Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        BirdSprite::Glide => Style::default().fg(Color::Yellow),
    };

    let left = scale(snapshot.bird.left(), width, WORLD_WIDTH);
    let top = scale(snapshot.bird.top(), height, WORLD_HEIGHT);
    for (dy, line) in sprite.lines.iter().enumerate() {
        for (dx, ch) in line.chars().enumerate() {
            if ch != ' ' {
                put(grid, left + dx as i64, top + dy as i64, ch, style);
            }
        }
    }
}

fn render_hud_content(frame: &mut Frame, area: Rect, snapshot: &Snapshot) {
    if snapshot.dead {
        render_hud(frame, area, "Crashed!", Color::Red, &CONTROLS);
    } else {
        let headline = format!("Score: {}", snapshot.counter);
        render_hud(frame, area, &headline, Color::Green, &CONTROLS);
    }
}

fn render_info_panel(frame: &mut Frame, area: Rect, snapshot: &Snapshot, revivals: u32) {
    let inner = render_info_panel_frame(frame, area);

    if inner.height < 2 || inner.width < 4 {
        return;
    }

    let label = Style::default().fg(Color::DarkGray);
    let (state, state_color) = match snapshot.sprite {
        BirdSprite::Dead => ("Dead", Color::Red),
        BirdSprite::Flap => ("Flapping", Color::Yellow),
        BirdSprite::Glide => ("Gliding", Color::Cyan),
    };

    let lines = vec![
        Line::from(vec![
            Span::styled(" Score: ", label),
            Span::styled(
                format!("{}", snapshot.counter),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled(" Bird: ", label),
            Span::styled(state, Style::default().fg(state_color)),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled(" Gap offset: ", label),
            Span::styled(
                format!("{:+}", snapshot.gap_offset),
                Style::default().fg(Color::Green),
            ),
        ]),
        Line::from(vec![
            Span::styled(" Restarts: ", label),
            Span::styled(format!("{}", revivals), Style::default().fg(Color::White)),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}
