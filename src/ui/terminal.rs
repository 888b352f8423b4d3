//! Full-screen terminal frontend
//!
//! One loop owns everything: it redraws, waits for a key until the next
//! tick is due, then ticks. Keys and ticks never overlap.

use std::io;
use std::time::Instant;

use crossterm::{
    cursor,
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color as TermColor, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, Paragraph},
    Frame, Terminal,
};

use crate::core::error::Result;
use crate::render::colors::{self, Color};
use crate::simulation::Session;
use crate::ui::display::Dashboard;
use crate::ui::input::{command_for_key, Command};
use crate::ui::state::LogCategory;

/// Take over the terminal and play until the player quits
///
/// The terminal is handed back on every exit path. When both the game and
/// the restore fail, the game's error is the one returned.
pub fn run(session: &mut Session) -> Result<()> {
    enable_raw_mode()?;
    let played = play(session);
    let restored = restore(&mut io::stdout());
    played.and(restored)
}

fn play(session: &mut Session) -> Result<()> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    event_loop(&mut terminal, session)
}

/// Leave raw mode and the alternate screen, and show the cursor again
///
/// Every step runs even if an earlier one fails.
fn restore<W: io::Write>(out: &mut W) -> Result<()> {
    let raw = disable_raw_mode();
    let screen = execute!(out, LeaveAlternateScreen, cursor::Show);
    raw?;
    screen?;
    Ok(())
}

fn event_loop<B: Backend>(terminal: &mut Terminal<B>, session: &mut Session) -> Result<()> {
    let tick_interval = session.config().tick_interval;
    let mut next_tick = Instant::now() + tick_interval;

    loop {
        let dashboard = Dashboard::from_session(session);
        terminal.draw(|f| draw(f, &dashboard))?;

        let timeout = next_tick.saturating_duration_since(Instant::now());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                match command_for_key(key) {
                    Some(Command::Quit) => {
                        tracing::info!(tick = session.current_tick(), "Player quit");
                        break;
                    }
                    Some(Command::Perform(action)) => {
                        session.perform(action);
                    }
                    None => {}
                }
            }
        }

        if Instant::now() >= next_tick {
            session.tick();
            next_tick = Instant::now() + tick_interval;
        }
    }

    Ok(())
}

fn term_color(color: Color) -> TermColor {
    let (r, g, b) = color.to_rgb8();
    TermColor::Rgb(r, g, b)
}

/// Draw one frame of the dashboard
pub fn draw(f: &mut Frame, dashboard: &Dashboard) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(3),
        ])
        .split(f.size());

    draw_header(f, chunks[0], dashboard);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(chunks[1]);

    draw_plant(f, body[0], dashboard);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(12), Constraint::Min(3)])
        .split(body[1]);

    draw_bars(f, right[0], dashboard);
    draw_log(f, right[1], dashboard);
    draw_controls(f, chunks[2], dashboard);
}

fn draw_header(f: &mut Frame, area: Rect, dashboard: &Dashboard) {
    let status_style = if dashboard.alive {
        Style::default().fg(TermColor::White)
    } else {
        Style::default().fg(TermColor::Red).add_modifier(Modifier::BOLD)
    };

    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            dashboard.stage.clone(),
            Style::default()
                .fg(term_color(colors::LEAF_GREEN))
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  |  "),
        Span::styled(dashboard.status.clone(), status_style),
        Span::raw(format!("  |  tick {}", dashboard.tick)),
    ]))
    .block(Block::default().title(" Virtual Plant ").borders(Borders::ALL));
    f.render_widget(header, area);
}

fn draw_plant(f: &mut Frame, area: Rect, dashboard: &Dashboard) {
    let visual = &dashboard.visual;
    let leaf_style = Style::default().fg(term_color(visual.leaf_color));
    let pot_style = Style::default().fg(term_color(colors::POT));

    let art = visual.art();
    let pot_start = art.len().saturating_sub(2);
    let lines: Vec<Line> = art
        .into_iter()
        .enumerate()
        .map(|(i, row)| {
            if i >= pot_start {
                return Line::from(Span::styled(row, pot_style));
            }
            let spans: Vec<Span> = row
                .chars()
                .map(|c| {
                    let style = match c {
                        '@' | '(' | ')' => Style::default().fg(term_color(colors::BLOSSOM)),
                        '*' => Style::default().fg(term_color(colors::PEST)),
                        _ => leaf_style,
                    };
                    Span::styled(c.to_string(), style)
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    // Bottom-align the drawing inside the panel
    let inner_height = area.height.saturating_sub(2) as usize;
    let mut padded: Vec<Line> = Vec::with_capacity(inner_height.max(lines.len()));
    for _ in lines.len()..inner_height {
        padded.push(Line::from(""));
    }
    padded.extend(lines);

    let plant = Paragraph::new(padded)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Plant ").borders(Borders::ALL));
    f.render_widget(plant, area);
}

fn draw_bars(f: &mut Frame, area: Rect, dashboard: &Dashboard) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(3); dashboard.bars.len()])
        .split(area);

    for (bar, row) in dashboard.bars.iter().zip(rows.iter()) {
        let gauge = Gauge::default()
            .block(
                Block::default()
                    .title(format!(" {} ", bar.label()))
                    .borders(Borders::ALL),
            )
            .gauge_style(Style::default().fg(term_color(bar.color)))
            .ratio(bar.ratio)
            .label(bar.text.clone());
        f.render_widget(gauge, *row);
    }
}

fn draw_log(f: &mut Frame, area: Rect, dashboard: &Dashboard) {
    let items: Vec<ListItem> = dashboard
        .log
        .iter()
        .map(|entry| {
            let color = match entry.category {
                LogCategory::Action => TermColor::Cyan,
                LogCategory::Growth => TermColor::Green,
                LogCategory::Warning => TermColor::Yellow,
                LogCategory::System => TermColor::Gray,
            };
            ListItem::new(format!("[{:>4}] {}", entry.tick, entry.message))
                .style(Style::default().fg(color))
        })
        .collect();

    let log = List::new(items).block(Block::default().title(" Log ").borders(Borders::ALL));
    f.render_widget(log, area);
}

fn draw_controls(f: &mut Frame, area: Rect, dashboard: &Dashboard) {
    let mut spans = Vec::new();
    for (i, (key, label)) in dashboard.controls.iter().enumerate() {
        spans.push(Span::styled(
            format!("{}/{}", key, i + 1),
            Style::default().fg(TermColor::Cyan),
        ));
        spans.push(Span::raw(format!(" {}  ", label)));
    }
    spans.push(Span::styled("q", Style::default().fg(TermColor::Cyan)));
    spans.push(Span::raw(" Quit"));

    let controls = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(controls, area);
}
