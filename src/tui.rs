//! The terminal front end.
//!
//! One terminal cell is one unit of pixel space, so a 48x24 "window" gives
//! squares six cells wide and three tall. Mouse capture delivers press, drag
//! and release events which go through the same per-frame sampler the window
//! front end uses.

use std::io::{self, Stdout, Write};
use std::time::{Duration, Instant};

use anyhow::Context;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute, queue};
use engine::config::Config;
use engine::constants::Color as Side;
use engine::game::Game;
use engine::geometry::{position_of, square_of, Position, Square};
use engine::input::MouseSampler;
use engine::piece::Piece;
use engine::squarelist::SquareList;
use tracing::{debug, info};

const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Raw mode, the alternate screen and mouse capture for as long as it lives.
struct TerminalSession {
    out: Stdout,
}

impl TerminalSession {
    fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut out = io::stdout();
        execute!(out, EnterAlternateScreen, EnableMouseCapture, cursor::Hide)?;
        Ok(Self { out })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = execute!(self.out, cursor::Show, DisableMouseCapture, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

enum Control {
    Continue,
    NewGame,
    Quit,
}

/// Runs the main game loop for the terminal UI.
pub fn run() -> anyhow::Result<()> {
    let config = Config {
        window_width: 48,
        window_height: 24,
        ..Config::default()
    };
    let mut game = Game::new(config, Instant::now()).context("invalid board configuration")?;
    let mut session = TerminalSession::enter().context("failed to set up the terminal")?;
    let mut sampler = MouseSampler::new();
    info!("terminal board started");

    loop {
        let deadline = Instant::now() + FRAME_INTERVAL;
        while event::poll(deadline.saturating_duration_since(Instant::now()))? {
            match handle_event(event::read()?, &mut sampler) {
                Control::Continue => {}
                Control::NewGame => {
                    game.reset(Instant::now());
                    sampler = MouseSampler::new();
                }
                Control::Quit => return Ok(()),
            }
        }

        let now = Instant::now();
        if let Some(outcome) = game.update(&sampler.sample(), now) {
            debug!(?outcome, "drop resolved");
        }
        draw(&mut session.out, &game, now)?;
    }
}

fn handle_event(event: Event, sampler: &mut MouseSampler) -> Control {
    match event {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) => match code {
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => Control::Quit,
            KeyCode::Char('q') | KeyCode::Esc => Control::Quit,
            KeyCode::Char('r') => Control::NewGame,
            _ => Control::Continue,
        },
        Event::Mouse(MouseEvent { kind, column, row, .. }) => {
            let position = Position::new(column as f32, row as f32);
            match kind {
                MouseEventKind::Down(MouseButton::Left) => sampler.button_down(position),
                MouseEventKind::Up(MouseButton::Left) => sampler.button_up(position),
                MouseEventKind::Drag(MouseButton::Left) | MouseEventKind::Moved => {
                    sampler.cursor_moved(position)
                }
                _ => {}
            }
            Control::Continue
        }
        _ => Control::Continue,
    }
}

fn draw(out: &mut Stdout, game: &Game, now: Instant) -> io::Result<()> {
    let board = game.board();
    let (width, height) = board.square_size();
    let (width, height) = (width as u16, height as u16);
    let highlighted = game.highlighted();

    for square in board.squares() {
        let corner = position_of(square, board);
        queue!(out, SetBackgroundColor(tile_color(square, &highlighted)))?;
        for dy in 0..height {
            queue!(
                out,
                cursor::MoveTo(corner.x as u16, corner.y as u16 + dy),
                Print(" ".repeat(width as usize))
            )?;
        }
    }

    let grabbed = game.grabbed();
    for piece in game.pieces().iter().filter(|p| Some(p.id()) != grabbed) {
        let cell = board.square_center(piece.square(board));
        let background = tile_color(piece.square(board), &highlighted);
        draw_glyph(out, piece, cell, background)?;
    }
    if let Some(piece) = game.grabbed_piece() {
        let background = tile_color(square_of(piece.position, board), &highlighted);
        draw_glyph(out, piece, piece.position, background)?;
    }

    let status = match game.turn_remaining(now) {
        Some(left) => format!("{} to move ({}s)", game.side_to_move(), left.as_secs()),
        None => format!("{} to move", game.side_to_move()),
    };
    queue!(
        out,
        ResetColor,
        cursor::MoveTo(0, height * board.rows() as u16 + 1),
        Print(status),
        Clear(ClearType::UntilNewLine),
        cursor::MoveTo(0, height * board.rows() as u16 + 2),
        Print("drag pieces with the mouse   [r] new game   [q] quit")
    )?;
    out.flush()
}

fn tile_color(square: Square, highlighted: &SquareList) -> Color {
    if highlighted.contains(square) {
        Color::Rgb { r: 100, g: 190, b: 100 }
    } else if (square.col + square.row) % 2 == 0 {
        Color::Rgb { r: 170, g: 170, b: 170 }
    } else {
        Color::Rgb { r: 80, g: 80, b: 80 }
    }
}

fn draw_glyph(out: &mut Stdout, piece: &Piece, at: Position, background: Color) -> io::Result<()> {
    if at.x < 0.0 || at.y < 0.0 {
        return Ok(());
    }
    let foreground = match piece.color() {
        Side::White => Color::White,
        Side::Black => Color::Black,
    };
    queue!(
        out,
        cursor::MoveTo(at.x as u16, at.y as u16),
        SetBackgroundColor(background),
        SetForegroundColor(foreground),
        Print(piece.kind().glyph(piece.color()))
    )
}
