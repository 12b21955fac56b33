//! Full-screen radical workbench. Every keystroke mutates the raw input
//! state; everything on screen is re-derived from that state before the next
//! draw. Nothing is cached across frames.

use std::io;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Terminal,
};

use crate::config::Config;
use crate::core::input::parse_int_or_zero;
use crate::core::radical;
use crate::core::tables;

// ---------- Palette ----------
fn palette() -> (Color, Color, Color, Color) {
    (
        Color::Rgb(0, 210, 190),
        Color::Rgb(0, 140, 210),
        Color::Rgb(255, 200, 0),
        Color::Rgb(190, 190, 200),
    )
}

struct App {
    input: String,
    index: u32,
}

impl App {
    fn new(radicand: Option<i64>, index: u32) -> Self {
        Self {
            input: radicand.map(|r| r.to_string()).unwrap_or_default(),
            index: index.clamp(2, 6),
        }
    }

    fn radicand(&self) -> i64 {
        parse_int_or_zero(&self.input)
    }

    fn index_up(&mut self) {
        self.index = if self.index >= 6 { 2 } else { self.index + 1 };
    }

    fn index_down(&mut self) {
        self.index = if self.index <= 2 { 6 } else { self.index - 1 };
    }
}

pub fn run(radicand: Option<i64>, index: Option<u32>, cfg: &Config) -> Result<()> {
    let mut app = App::new(radicand, index.unwrap_or(cfg.default_root_index));

    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, SetTitle("Calcforge Workbench"))?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app, cfg);

    terminal::disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, SetTitle("Calcforge"))?;
    terminal.show_cursor()?;
    res
}

// ---------- Event Loop ----------
fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    cfg: &Config,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app, cfg))?;

        if let Event::Key(key) = event::read()? {
            if !matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) {
                continue;
            }
            match key.code {
                KeyCode::Esc => break,
                KeyCode::Char('q') if key.modifiers.contains(KeyModifiers::CONTROL) => break,
                KeyCode::Char(c @ '0'..='9') => {
                    if app.input.len() < 9 {
                        app.input.push(c);
                    }
                }
                KeyCode::Char('-') if app.input.is_empty() => app.input.push('-'),
                KeyCode::Backspace => {
                    app.input.pop();
                }
                KeyCode::Delete => app.input.clear(),
                KeyCode::Up | KeyCode::Char('+') => app.index_up(),
                KeyCode::Down => app.index_down(),
                _ => {}
            }
        }
    }
    Ok(())
}

// ---------- Drawing ----------
fn ui(f: &mut ratatui::Frame<'_>, app: &App, cfg: &Config) {
    let (accent, accent_alt, yellow, dim) = palette();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(1), // header
                Constraint::Length(3), // input
                Constraint::Length(4), // result
                Constraint::Min(7),    // steps
                Constraint::Length(1), // footer
            ]
            .as_ref(),
        )
        .split(f.size());

    let symbol = radical::root_symbol(app.index);
    let radicand = app.radicand();
    let simplified = radical::simplify(radicand, app.index);

    // Header
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            " R A D I C A L   W O R K B E N C H ",
            Style::default().fg(Color::Black).bg(accent).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(format!("index: {}", app.index), Style::default().fg(yellow)),
    ]))
    .alignment(Alignment::Center);
    f.render_widget(header, rows[0]);

    // Input
    let shown = if app.input.is_empty() { "_" } else { app.input.as_str() };
    let input = Paragraph::new(Line::from(vec![
        Span::styled(symbol.clone(), Style::default().fg(accent)),
        Span::styled(shown.to_string(), Style::default().add_modifier(Modifier::BOLD)),
    ]))
    .block(Block::default().borders(Borders::ALL).title(Span::styled(
        " Radicand — digits to edit, ↑/↓ root index ",
        Style::default().fg(accent).add_modifier(Modifier::BOLD),
    )));
    f.render_widget(input, rows[1]);

    // Result: simplified form + decimal value, derived fresh each frame.
    let simplified_text = if radicand > 0 {
        format!("{symbol}{radicand} = {}", radical::format_simplified(&simplified))
    } else {
        "—".to_string()
    };
    let mut result_lines = vec![Line::from(vec![
        Span::styled("Simplified: ", Style::default().fg(dim)),
        Span::styled(simplified_text, Style::default().fg(yellow).add_modifier(Modifier::BOLD)),
    ])];
    match radical::evaluate(radicand as f64, app.index) {
        Ok(root) => {
            let rendered = match root.exact {
                Some(n) => format!("{n} (perfect root)"),
                None => format!("{:.*}", cfg.precision, root.value),
            };
            result_lines.push(Line::from(vec![
                Span::styled("Decimal:    ", Style::default().fg(dim)),
                Span::raw(rendered),
            ]));
        }
        Err(msg) => {
            result_lines.push(Line::from(Span::styled(
                format!("cannot compute: {msg}"),
                Style::default().fg(Color::Red),
            )));
        }
    }
    let result = Paragraph::new(result_lines).block(
        Block::default().borders(Borders::ALL).title(Span::styled(
            " Result ",
            Style::default().fg(accent_alt).add_modifier(Modifier::BOLD),
        )),
    );
    f.render_widget(result, rows[2]);

    // Steps beside the perfect-power reference table.
    let main_split = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(64), Constraint::Percentage(36)].as_ref())
        .split(rows[3]);

    let steps: Vec<ListItem> = simplified
        .steps
        .iter()
        .enumerate()
        .map(|(i, s)| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("{}. ", i + 1), Style::default().fg(dim)),
                Span::raw(s.clone()),
            ]))
        })
        .collect();
    f.render_widget(
        List::new(steps).block(Block::default().borders(Borders::ALL).title(Span::styled(
            " Derivation ",
            Style::default().fg(accent_alt).add_modifier(Modifier::BOLD),
        ))),
        main_split[0],
    );

    let (table_title, table): (&str, &[(i64, i64)]) = if app.index == 3 {
        (" Perfect cubes ", tables::PERFECT_CUBES)
    } else {
        (" Perfect squares ", tables::PERFECT_SQUARES)
    };
    let height = main_split[1].height.saturating_sub(2) as usize;
    let reference: Vec<ListItem> = table
        .iter()
        .take(height)
        .map(|(n, p)| ListItem::new(format!("{n} → {p}")))
        .collect();
    f.render_widget(
        List::new(reference).block(Block::default().borders(Borders::ALL).title(Span::styled(
            table_title,
            Style::default().fg(accent_alt).add_modifier(Modifier::BOLD),
        ))),
        main_split[1],
    );

    // Footer
    let footer = Paragraph::new(Span::styled(
        "digits edit • Backspace delete • Del clear • ↑/↓ root index 2–6 • Esc/Ctrl+Q quit",
        Style::default().fg(dim),
    ));
    f.render_widget(footer, rows[4]);
}
