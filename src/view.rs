use crate::consts;
use crate::util::center_rect;
use gridsnake::engine::{Direction, GameState, Phase, Point};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Margin, Position, Rect, Size},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Widget},
};

/// A snapshot of everything needed to draw the game screen
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Scene {
    pub(crate) width: u16,
    pub(crate) height: u16,
    pub(crate) wrap: bool,
    /// The snake's segments, head first
    pub(crate) snake: Vec<Point>,
    pub(crate) direction: Direction,
    pub(crate) food: Point,
    pub(crate) score: u32,
    pub(crate) phase: Phase,
    pub(crate) paused: bool,
    /// Number of terminal columns per board cell
    pub(crate) cell_width: u16,
}

impl Scene {
    pub(crate) fn new(state: &GameState, paused: bool, cell_width: u16) -> Scene {
        Scene {
            width: state.width(),
            height: state.height(),
            wrap: state.wrap(),
            snake: state.snake().segments().collect(),
            direction: state.snake().direction(),
            food: state.food(),
            score: state.score(),
            phase: state.phase(),
            paused,
            cell_width,
        }
    }

    fn head_symbol(&self) -> char {
        match self.direction {
            Direction::Up => consts::SNAKE_HEAD_UP_SYMBOL,
            Direction::Down => consts::SNAKE_HEAD_DOWN_SYMBOL,
            Direction::Left => consts::SNAKE_HEAD_LEFT_SYMBOL,
            Direction::Right => consts::SNAKE_HEAD_RIGHT_SYMBOL,
        }
    }

    /// Map a board cell to its offset from the top-left of the drawn board.
    /// Board rows count up from the bottom, terminal rows down from the top.
    fn screen_offset(&self, p: Point) -> Option<Position> {
        let x = u16::try_from(p.x).ok()?.checked_mul(self.cell_width)?;
        let y = self
            .height
            .checked_sub(1)?
            .checked_sub(u16::try_from(p.y).ok()?)?;
        Some(Position { x, y })
    }
}

impl Widget for &Scene {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [score_area, board_area, msg1_area, msg2_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area);
        Line::styled(format!(" Score: {}", self.score), consts::SCORE_BAR_STYLE)
            .render(score_area, buf);

        let block_size = Size {
            width: self.width.saturating_mul(self.cell_width).saturating_add(2),
            height: self.height.saturating_add(2),
        };
        let block_area = center_rect(board_area, block_size);
        if self.wrap {
            DottedBorder.render(block_area, buf);
        } else {
            Block::bordered().render(block_area, buf);
        }

        let mut board = Canvas {
            area: block_area.inner(Margin::new(1, 1)),
            buf,
        };
        let mut segments = self.snake.iter().copied();
        let head = segments.next();
        for p in segments {
            if let Some(pos) = self.screen_offset(p) {
                board.draw_cell(pos, consts::SNAKE_BODY_SYMBOL, consts::SNAKE_STYLE);
            }
        }
        if let Some(pos) = self.screen_offset(self.food) {
            board.draw_cell(pos, consts::FOOD_SYMBOL, consts::FOOD_STYLE);
        }
        // Draw the head last so that, if it's a collision, we overwrite
        // whatever it's colliding with
        if let Some(pos) = head.and_then(|p| self.screen_offset(p)) {
            if matches!(self.phase, Phase::GameOver(_)) {
                board.draw_cell(pos, consts::COLLISION_SYMBOL, consts::COLLISION_STYLE);
            } else {
                board.draw_cell(pos, self.head_symbol(), consts::SNAKE_STYLE);
            }
        }

        let (banner, resume) = match (self.phase, self.paused) {
            (Phase::GameOver(_), _) => (" — GAME OVER —", ("Restart", 'r')),
            (Phase::Running, true) => (" — PAUSED —", ("Resume", 'p')),
            (Phase::Running, false) => return,
        };
        Span::from(banner).render(msg1_area, buf);
        Line::from_iter([
            Span::raw(format!(" {} (", resume.0)),
            Span::styled(String::from(resume.1), consts::KEY_STYLE),
            Span::raw(") — Quit ("),
            Span::styled("q", consts::KEY_STYLE),
            Span::raw(")"),
        ])
        .render(msg2_area, buf);
    }
}

#[derive(Debug, Eq, PartialEq)]
struct Canvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    fn locate(&self, pos: Position) -> Option<Position> {
        let x = self.area.x.checked_add(pos.x)?;
        let y = self.area.y.checked_add(pos.y)?;
        let pos = Position { x, y };
        self.area.contains(pos).then_some(pos)
    }

    fn draw_char(&mut self, pos: Position, symbol: char) {
        if let Some(cell) = self.locate(pos).and_then(|p| self.buf.cell_mut(p)) {
            cell.set_char(symbol);
        }
    }

    fn draw_cell(&mut self, pos: Position, symbol: char, style: Style) {
        if let Some(cell) = self.locate(pos).and_then(|p| self.buf.cell_mut(p)) {
            cell.set_char(symbol);
            cell.set_style(Style::reset().patch(style));
        }
    }
}

/// Border drawn around boards whose edges wrap around
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct DottedBorder;

impl Widget for DottedBorder {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let max_x = area.width.saturating_sub(1);
        let max_y = area.height.saturating_sub(1);
        let mut canvas = Canvas { area, buf };
        for corner in [(0, 0), (max_x, 0), (max_x, max_y), (0, max_y)] {
            canvas.draw_char(Position::from(corner), '·');
        }
        for x in 1..max_x {
            canvas.draw_char(Position::new(x, 0), '⋯');
            canvas.draw_char(Position::new(x, max_y), '⋯');
        }
        for y in 1..max_y {
            canvas.draw_char(Position::new(0, y), '⋮');
            canvas.draw_char(Position::new(max_x, y), '⋮');
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridsnake::engine::{Collision, Engine};

    fn row_text(buffer: &Buffer, y: u16) -> String {
        (0..buffer.area.width)
            .map(|x| buffer[(x, y)].symbol())
            .collect::<String>()
            .trim_end()
            .to_owned()
    }

    #[test]
    fn running_game() {
        let scene = Scene {
            width: 5,
            height: 5,
            wrap: false,
            snake: vec![Point::new(2, 2), Point::new(1, 2), Point::new(0, 2)],
            direction: Direction::Right,
            food: Point::new(4, 0),
            score: 0,
            phase: Phase::Running,
            paused: false,
            cell_width: 1,
        };
        let area = Rect::new(0, 0, 9, 10);
        let mut buffer = Buffer::empty(area);
        scene.render(area, &mut buffer);
        let mut expected = Buffer::with_lines([
            " Score: 0",
            " ┌─────┐",
            " │     │",
            " │     │",
            " │⚬⚬<  │",
            " │     │",
            " │    ●│",
            " └─────┘",
            "",
            "",
        ]);
        expected.set_style(Rect::new(0, 0, 9, 1), consts::SCORE_BAR_STYLE);
        expected.set_style(Rect::new(2, 4, 3, 1), consts::SNAKE_STYLE);
        expected.set_style(Rect::new(6, 6, 1, 1), consts::FOOD_STYLE);
        pretty_assertions::assert_eq!(buffer, expected);
    }

    #[test]
    fn game_over_with_wraparound() {
        let scene = Scene {
            width: 5,
            height: 5,
            wrap: true,
            snake: vec![Point::new(2, 2), Point::new(2, 3), Point::new(1, 3)],
            direction: Direction::Down,
            food: Point::new(0, 0),
            score: 2,
            phase: Phase::GameOver(Collision::Body),
            paused: false,
            cell_width: 1,
        };
        let area = Rect::new(0, 0, 23, 10);
        let mut buffer = Buffer::empty(area);
        scene.render(area, &mut buffer);
        let mut expected = Buffer::with_lines([
            " Score: 2",
            "        ·⋯⋯⋯⋯⋯·",
            "        ⋮     ⋮",
            "        ⋮ ⚬⚬  ⋮",
            "        ⋮  ×  ⋮",
            "        ⋮     ⋮",
            "        ⋮●    ⋮",
            "        ·⋯⋯⋯⋯⋯·",
            " — GAME OVER —",
            " Restart (r) — Quit (q)",
        ]);
        expected.set_style(Rect::new(0, 0, 23, 1), consts::SCORE_BAR_STYLE);
        expected.set_style(Rect::new(10, 3, 2, 1), consts::SNAKE_STYLE);
        expected.set_style(Rect::new(11, 4, 1, 1), consts::COLLISION_STYLE);
        expected.set_style(Rect::new(9, 6, 1, 1), consts::FOOD_STYLE);
        expected.set_style(Rect::new(10, 9, 1, 1), consts::KEY_STYLE);
        expected.set_style(Rect::new(21, 9, 1, 1), consts::KEY_STYLE);
        pretty_assertions::assert_eq!(buffer, expected);
    }

    #[test]
    fn paused_banner() {
        let engine = Engine::new(10, 6, 3, false).expect("engine should be valid");
        let scene = Scene::new(engine.state(), true, 2);
        let area = Rect::new(0, 0, 40, 12);
        let mut buffer = Buffer::empty(area);
        scene.render(area, &mut buffer);
        assert_eq!(row_text(&buffer, 0), " Score: 0");
        assert_eq!(row_text(&buffer, 10), " — PAUSED —");
        assert_eq!(row_text(&buffer, 11), " Resume (p) — Quit (q)");
    }

    #[test]
    fn wide_cells() {
        let engine = Engine::new(10, 6, 3, false).expect("engine should be valid");
        let scene = Scene::new(engine.state(), false, 2);
        let area = Rect::new(0, 0, 40, 11);
        let mut buffer = Buffer::empty(area);
        scene.render(area, &mut buffer);
        // The 22-column board is centered in 40 columns, and the head at
        // (5, 3) is in row 6 - 1 - 3 = 2 of the board.
        assert_eq!(
            row_text(&buffer, 1),
            format!("{}┌{}┐", " ".repeat(9), "─".repeat(20))
        );
        let head_row = row_text(&buffer, 4);
        assert!(
            head_row.starts_with("         │      ⚬ ⚬ < "),
            "unexpected head row: {head_row:?}"
        );
        assert_eq!(row_text(&buffer, 9), "");
        assert_eq!(row_text(&buffer, 10), "");
    }

    #[test]
    fn scene_from_state() {
        let engine = Engine::new(10, 6, 3, true).expect("engine should be valid");
        let scene = Scene::new(engine.state(), false, 1);
        assert_eq!(
            scene.snake,
            [Point::new(5, 3), Point::new(4, 3), Point::new(3, 3)]
        );
        assert!(scene.wrap);
        assert_eq!(scene.phase, Phase::Running);
        assert_eq!(scene.food, engine.state().food());
    }
}
