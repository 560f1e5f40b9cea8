use std::io::{stdout, Stdout, Write};
use std::time::Duration;

use crossterm::event::{poll, read, Event, KeyEvent};
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute, queue, terminal};
use log::{debug, warn};

use crate::error::GameError;
use crate::game::{Presenter, Snapshot};
use crate::grid::{Grid, Position};
use crate::snake::Direction::{self, *};
use crate::{Coords, TermInt};

const SNAKE_BODY_CHAR: char = 'o';
const BORDER_CORNER_CHAR: char = '+';
const BORDER_HORIZONTAL_CHAR: char = '-';
const BORDER_VERTICAL_CHAR: char = '|';
const SCORE_COL: TermInt = 2;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Paint {
    Plain,
    Border,
    Snake,
    Food,
    Score,
    GameOver,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct Cell {
    ch: char,
    paint: Paint,
}

const BLANK: Cell = Cell { ch: ' ', paint: Paint::Plain };

/// Terminal size as (columns, rows).
pub fn terminal_size() -> crossterm::Result<Coords> {
    terminal::size()
}

pub fn ensure_fits(grid: &Grid, size: Coords) -> Result<(), GameError> {
    if size.0 >= grid.width() && size.1 >= grid.height() {
        Ok(())
    } else {
        Err(GameError::TerminalTooSmall { required: (grid.width(), grid.height()), actual: size })
    }
}

/// Screen cell of the play area's top-left corner, centering the area.
fn area_origin(grid: &Grid, size: Coords) -> Coords {
    (size.0.saturating_sub(grid.width()) / 2, size.1.saturating_sub(grid.height()) / 2)
}

/// Draws the play area centered on the alternate screen. Frames are composed
/// into `frame` and only cells that differ from `drawn` are written out.
pub struct TermManager {
    stdout: Stdout,
    grid: Grid,
    origin: Coords,
    color: bool,
    frame: Vec<Cell>,
    drawn: Vec<Option<Cell>>,
    active: bool,
}

impl TermManager {
    pub fn new(grid: Grid, size: Coords, color: bool) -> Self {
        let cells = grid.capacity();
        TermManager {
            stdout: stdout(),
            grid,
            origin: area_origin(&grid, size),
            color,
            frame: vec![BLANK; cells],
            drawn: vec![None; cells],
            active: false,
        }
    }

    pub fn setup(&mut self) -> crossterm::Result<()> {
        execute!(self.stdout, EnterAlternateScreen)?;
        self.active = true;
        terminal::enable_raw_mode()?;
        execute!(
            self.stdout,
            cursor::Hide,
            cursor::DisableBlinking,
            terminal::Clear(ClearType::All)
        )?;
        debug!("Terminal ready, play area at {:?}", self.origin);
        Ok(())
    }

    pub fn restore(&mut self) -> crossterm::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;

        terminal::disable_raw_mode()?;
        execute!(
            self.stdout,
            ResetColor,
            cursor::Show,
            cursor::EnableBlinking,
            LeaveAlternateScreen
        )
    }

    pub fn read_key_blocking(&self) -> crossterm::Result<KeyEvent> {
        loop {
            if let Event::Key(ev) = read()? {
                return Ok(ev);
            }
        }
    }

    fn compose(&mut self, snapshot: &Snapshot) {
        for cell in self.frame.iter_mut() {
            *cell = BLANK;
        }

        self.draw_borders();

        for (i, pos) in snapshot.snake.iter().enumerate() {
            let ch = if i == 0 { head_char(snapshot.heading) } else { SNAKE_BODY_CHAR };
            self.put(*pos, Cell { ch, paint: Paint::Snake });
        }

        if let Some(pos) = snapshot.food.position() {
            self.put(pos, Cell { ch: snapshot.food.glyph(), paint: Paint::Food });
        }

        self.put_text(0, SCORE_COL, &format!("Score: {}", snapshot.score), Paint::Score);
    }

    fn draw_borders(&mut self) {
        let (width, height) = (self.grid.width(), self.grid.height());
        let (end_col, end_row) = (width - 1, height - 1);

        for col in 0..width {
            let ch = if col == 0 || col == end_col {
                BORDER_CORNER_CHAR
            } else {
                BORDER_HORIZONTAL_CHAR
            };
            self.put(Position::new(0, col), Cell { ch, paint: Paint::Border });
            self.put(Position::new(end_row, col), Cell { ch, paint: Paint::Border });
        }

        let side = Cell { ch: BORDER_VERTICAL_CHAR, paint: Paint::Border };
        for row in 1..end_row {
            self.put(Position::new(row, 0), side);
            self.put(Position::new(row, end_col), side);
        }
    }

    /// Centered box over the current frame.
    fn overlay_message(&mut self, lines: &[&str]) {
        let msg_width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0) + 2;
        let msg_height = lines.len() + 2;
        let top = (self.grid.height() as usize).saturating_sub(msg_height) / 2;
        let left = (self.grid.width() as usize).saturating_sub(msg_width) / 2;

        for y in 0..msg_height {
            let text = if y == 0 || y == msg_height - 1 { "" } else { lines[y - 1] };
            let padded = format!("{line: ^width$}", line = text, width = msg_width);
            self.put_text((top + y) as TermInt, left as TermInt, &padded, Paint::GameOver);
        }
    }

    fn put(&mut self, pos: Position, cell: Cell) {
        if self.grid.contains(pos) {
            let idx = pos.row as usize * self.grid.width() as usize + pos.col as usize;
            self.frame[idx] = cell;
        }
    }

    fn put_text(&mut self, row: TermInt, col: TermInt, text: &str, paint: Paint) {
        for (i, ch) in text.chars().enumerate() {
            self.put(Position::new(row, col + i as TermInt), Cell { ch, paint });
        }
    }

    fn present(&mut self) -> crossterm::Result<()> {
        let width = self.grid.width() as usize;
        let mut current = None;

        for idx in 0..self.frame.len() {
            let cell = self.frame[idx];
            if self.drawn[idx] == Some(cell) {
                continue;
            }

            let x = self.origin.0 + (idx % width) as TermInt;
            let y = self.origin.1 + (idx / width) as TermInt;
            if current != Some(cell.paint) {
                self.apply_paint(cell.paint)?;
                current = Some(cell.paint);
            }
            queue!(self.stdout, cursor::MoveTo(x, y), Print(cell.ch))?;
            self.drawn[idx] = Some(cell);
        }

        queue!(self.stdout, SetAttribute(Attribute::Reset), ResetColor)?;
        self.stdout.flush()?;
        Ok(())
    }

    fn apply_paint(&mut self, paint: Paint) -> crossterm::Result<()> {
        queue!(self.stdout, SetAttribute(Attribute::Reset), ResetColor)?;

        if self.color {
            let color = match paint {
                Paint::Plain => return Ok(()),
                Paint::Border => Color::Blue,
                Paint::Snake => Color::Green,
                Paint::Food => Color::Red,
                Paint::Score => Color::White,
                Paint::GameOver => Color::Yellow,
            };
            queue!(self.stdout, SetForegroundColor(color))?;
            if paint == Paint::GameOver {
                queue!(self.stdout, SetAttribute(Attribute::Bold))?;
            }
        } else {
            match paint {
                Paint::Border | Paint::Food => queue!(self.stdout, SetAttribute(Attribute::Bold))?,
                Paint::Snake => queue!(self.stdout, SetAttribute(Attribute::Reverse))?,
                Paint::GameOver => queue!(
                    self.stdout,
                    SetAttribute(Attribute::Reverse),
                    SetAttribute(Attribute::Bold)
                )?,
                Paint::Plain | Paint::Score => {}
            }
        }

        Ok(())
    }
}

impl Presenter for TermManager {
    fn poll_input(&mut self, timeout: Duration) -> anyhow::Result<Option<KeyEvent>> {
        if poll(timeout)? {
            if let Event::Key(ev) = read()? {
                return Ok(Some(ev));
            }
        }

        Ok(None)
    }

    fn render(&mut self, snapshot: &Snapshot) -> anyhow::Result<()> {
        self.compose(snapshot);
        self.present()?;
        Ok(())
    }

    fn show_game_over(&mut self, final_score: u32) -> anyhow::Result<()> {
        let score_line = format!("Final Score: {}", final_score);
        self.overlay_message(&["GAME OVER", "", &score_line, "", "Press any key to exit"]);
        self.present()?;
        Ok(())
    }
}

impl Drop for TermManager {
    fn drop(&mut self) {
        if let Err(e) = self.restore() {
            warn!("Could not restore terminal: {}", e);
        }
    }
}

fn head_char(direction: Direction) -> char {
    match direction {
        Up => '^',
        Down => 'v',
        Left => '<',
        Right => '>',
    }
}
