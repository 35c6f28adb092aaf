//! The windowed front end, built with Iced.
//!
//! Iced delivers mouse events as they happen; the engine wants one sample per
//! frame. Canvas events are fed into a `MouseSampler` and a timer
//! subscription ticks the game at a fixed frame rate, draining the sampler
//! each time.

use std::time::{Duration, Instant};

use engine::{
    config::Config,
    constants::Color as Side,
    game::Game,
    geometry::{position_of, Position},
    input::MouseSampler,
    piece::Piece,
};
use iced::{
    executor, mouse,
    widget::{
        canvas::{self, event, Cache, Frame, Geometry, Path, Program},
        text, Button, Column, Container, Row,
    },
    Alignment, Application, Color, Command, Element, Length, Pixels, Point, Rectangle, Renderer,
    Settings, Size, Subscription, Theme,
};
use tracing::{debug, info};

const STATUS_HEIGHT: f32 = 56.0;
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Runs the GUI application.
pub fn run(config: Config) -> iced::Result {
    let game = Game::new(config, Instant::now())
        .map_err(|err| iced::Error::WindowCreationFailed(Box::new(err)))?;
    let config = game.config();
    let scale = config.scale as f32;
    let size = Size::new(
        config.window_width as f32 * scale,
        config.window_height as f32 * scale + STATUS_HEIGHT,
    );
    info!(width = size.width, height = size.height, "opening window");

    ChessApp::run(Settings {
        window: iced::window::Settings {
            size,
            resizable: false,
            ..iced::window::Settings::default()
        },
        ..Settings::with_flags(game)
    })
}

#[derive(Debug, Clone)]
enum Message {
    Pressed(Point),
    CursorMoved(Point),
    Released(Point),
    Tick(Instant),
    NewGame,
}

struct ChessApp {
    game: Game,
    sampler: MouseSampler,
    scale: f32,
    now: Instant,
    tiles: Cache,
}

impl Application for ChessApp {
    type Executor = executor::Default;
    type Message = Message;
    type Theme = Theme;
    type Flags = Game;

    fn new(game: Game) -> (Self, Command<Message>) {
        let scale = game.config().scale as f32;
        let app = ChessApp {
            game,
            sampler: MouseSampler::new(),
            scale,
            now: Instant::now(),
            tiles: Cache::new(),
        };
        (app, Command::none())
    }

    fn title(&self) -> String {
        String::from("Chess Game")
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        match message {
            Message::Pressed(point) => self.sampler.button_down(self.to_board(point)),
            Message::CursorMoved(point) => self.sampler.cursor_moved(self.to_board(point)),
            Message::Released(point) => self.sampler.button_up(self.to_board(point)),
            Message::Tick(now) => {
                self.now = now;
                let sample = self.sampler.sample();
                if let Some(outcome) = self.game.update(&sample, now) {
                    debug!(?outcome, "drop resolved");
                }
            }
            Message::NewGame => {
                self.now = Instant::now();
                self.game.reset(self.now);
                self.sampler = MouseSampler::new();
            }
        }
        Command::none()
    }

    fn subscription(&self) -> Subscription<Message> {
        iced::time::every(FRAME_INTERVAL).map(Message::Tick)
    }

    fn view(&'_ self) -> Element<'_, Message> {
        let board = self.game.board();
        let (square_width, square_height) = board.square_size();
        let width = square_width * board.columns() as f32 * self.scale;
        let height = square_height * board.rows() as f32 * self.scale;

        let canvas = canvas::Canvas::new(BoardCanvas {
            game: &self.game,
            tiles: &self.tiles,
            scale: self.scale,
        })
        .width(Length::Fixed(width))
        .height(Length::Fixed(height));

        let status = Row::new()
            .spacing(20)
            .padding(10)
            .align_items(Alignment::Center)
            .push(text(self.status_text()).size(Pixels(22.0)))
            .push(Button::new(text("New Game")).on_press(Message::NewGame));

        let content = Column::new()
            .align_items(Alignment::Center)
            .push(status)
            .push(canvas);

        Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x()
            .into()
    }
}

impl ChessApp {
    fn to_board(&self, point: Point) -> Position {
        Position::new(point.x / self.scale, point.y / self.scale)
    }

    fn status_text(&self) -> String {
        let side = self.game.side_to_move();
        match self.game.turn_remaining(self.now) {
            Some(left) => format!("{side} to move ({}s)", left.as_secs()),
            None => format!("{side} to move"),
        }
    }
}

// --- Canvas Drawing Logic ---

struct BoardCanvas<'a> {
    game: &'a Game,
    tiles: &'a Cache,
    scale: f32,
}

impl<'a> Program<Message> for BoardCanvas<'a> {
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: event::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> (event::Status, Option<Message>) {
        // Positions relative to the canvas, even once the cursor has left it,
        // so a drag can be released anywhere.
        let Some(point) = cursor.position_from(bounds.position()) else {
            return (event::Status::Ignored, None);
        };
        match event {
            event::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left))
                if cursor.is_over(bounds) =>
            {
                (event::Status::Captured, Some(Message::Pressed(point)))
            }
            event::Event::Mouse(mouse::Event::CursorMoved { .. }) => {
                (event::Status::Ignored, Some(Message::CursorMoved(point)))
            }
            event::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                (event::Status::Captured, Some(Message::Released(point)))
            }
            _ => (event::Status::Ignored, None),
        }
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let tiles = self.tiles.draw(renderer, bounds.size(), |frame| {
            frame.scale(self.scale);
            self.draw_tiles(frame);
        });

        let mut frame = Frame::new(renderer, bounds.size());
        frame.scale(self.scale);
        self.draw_highlights(&mut frame);
        self.draw_pieces(&mut frame);

        vec![tiles, frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if self.game.grabbed().is_some() {
            mouse::Interaction::Grabbing
        } else if cursor.is_over(bounds) {
            mouse::Interaction::Pointer
        } else {
            mouse::Interaction::Idle
        }
    }
}

// --- Canvas Drawing Helper Functions ---

impl<'a> BoardCanvas<'a> {
    fn square_size(&self) -> Size {
        let (width, height) = self.game.board().square_size();
        Size::new(width, height)
    }

    fn draw_tiles(&self, frame: &mut Frame) {
        let board = self.game.board();
        for square in board.squares() {
            let corner = position_of(square, board);
            let color = if (square.col + square.row) % 2 == 0 {
                Color::from_rgb8(170, 170, 170)
            } else {
                Color::from_rgb8(80, 80, 80)
            };
            frame.fill_rectangle(Point::new(corner.x, corner.y), self.square_size(), color);
        }
    }

    fn draw_highlights(&self, frame: &mut Frame) {
        let board = self.game.board();
        let highlight = Color::from_rgba8(100, 250, 100, 80.0 / 255.0);
        for &square in &self.game.highlighted() {
            let corner = position_of(square, board);
            frame.fill_rectangle(Point::new(corner.x, corner.y), self.square_size(), highlight);
        }
    }

    fn draw_pieces(&self, frame: &mut Frame) {
        let board = self.game.board();
        let grabbed = self.game.grabbed();

        let resting = self.game.pieces().iter().filter(|p| Some(p.id()) != grabbed);
        for piece in resting {
            let center = board.square_center(piece.square(board));
            self.draw_glyph(frame, piece, center);
        }
        // The piece in hand is drawn last, centred on the cursor.
        if let Some(piece) = self.game.grabbed_piece() {
            self.draw_glyph(frame, piece, piece.position);
        }
    }

    fn draw_glyph(&self, frame: &mut Frame, piece: &Piece, center: Position) {
        let size = self.square_size();
        let color = match piece.color() {
            Side::White => Color::WHITE,
            Side::Black => Color::BLACK,
        };
        let shadow = Path::circle(Point::new(center.x + 2.0, center.y + 2.0), size.width * 0.3);
        frame.fill(&shadow, Color::from_rgba8(0, 0, 0, 0.25));
        frame.fill_text(canvas::Text {
            content: piece.kind().glyph(piece.color()).to_string(),
            position: Point::new(center.x, center.y),
            color,
            size: Pixels(size.height * 0.7),
            horizontal_alignment: iced::alignment::Horizontal::Center,
            vertical_alignment: iced::alignment::Vertical::Center,
            ..canvas::Text::default()
        });
    }
}
