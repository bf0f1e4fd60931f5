mod paused;
use self::paused::Paused;
use crate::consts;
use crate::game::{
    Cause, Cell, Collision, Ending, FinalScore, Heading, ObstacleKind, Session, Snapshot,
};
use crate::logo::Logo;
use crate::util::{center_rect, get_display_area};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Margin, Rect, Size},
    style::Style,
    text::{Line, Span, Text},
    widgets::{Block, Widget},
    Frame,
};

/// Draw the title screen or the game screen, whichever `snapshot` calls for
pub(crate) fn draw(frame: &mut Frame<'_>, snapshot: Snapshot<'_>) {
    frame.render_widget(snapshot, frame.area());
}

impl Widget for Snapshot<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let display = get_display_area(area);
        match self.session {
            None => TitleScreen { best: self.best }.render(display, buf),
            Some(session) => GameScreen {
                snapshot: self,
                session,
            }
            .render(display, buf),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct TitleScreen {
    best: u32,
}

impl Widget for TitleScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [logo_area, instructions_area, best_area, start_area, quit_area] =
            Layout::vertical([Logo::HEIGHT, Instructions::HEIGHT, 1, 1, 1])
                .flex(Flex::Start)
                .spacing(1)
                .areas(area);

        let [logo_area] = Layout::horizontal([Logo::WIDTH])
            .flex(Flex::Center)
            .areas(logo_area);
        Logo.render(logo_area, buf);

        let [instructions_area] = Layout::horizontal([Instructions::WIDTH])
            .flex(Flex::Center)
            .areas(instructions_area);
        Instructions.render(instructions_area, buf);

        if self.best > 0 {
            Line::from(format!("Best score: {}", self.best))
                .centered()
                .render(best_area, buf);
        }

        Line::from_iter([
            Span::raw("Press "),
            Span::styled("Enter", consts::KEY_STYLE),
            Span::raw(" to start"),
        ])
        .centered()
        .render(start_area, buf);

        Line::from_iter([
            Span::raw("Quit ("),
            Span::styled("q", consts::KEY_STYLE),
            Span::raw(")"),
        ])
        .centered()
        .render(quit_area, buf);
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct Instructions;

impl Instructions {
    const HEIGHT: u16 = 5;
    const WIDTH: u16 = 20;
}

impl Widget for Instructions {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let text = Text::from_iter([
            Line::from("Move the snake with:"),
            Line::from_iter([
                Span::raw("       "),
                Span::styled("←", consts::KEY_STYLE),
                Span::raw(" "),
                Span::styled("↓", consts::KEY_STYLE),
                Span::raw(" "),
                Span::styled("↑", consts::KEY_STYLE),
                Span::raw(" "),
                Span::styled("→", consts::KEY_STYLE),
            ]),
            Line::from_iter([
                Span::raw("   or: "),
                Span::styled("a", consts::KEY_STYLE),
                Span::raw(" "),
                Span::styled("s", consts::KEY_STYLE),
                Span::raw(" "),
                Span::styled("w", consts::KEY_STYLE),
                Span::raw(" "),
                Span::styled("d", consts::KEY_STYLE),
            ]),
            Line::from_iter([
                Span::raw("Pause with: "),
                Span::styled("Space", consts::KEY_STYLE),
            ]),
            Line::from("Paused: no steering"),
        ]);
        debug_assert_eq!(
            text.height(),
            usize::from(Self::HEIGHT),
            "Instructions::HEIGHT is wrong"
        );
        debug_assert_eq!(
            text.width(),
            usize::from(Self::WIDTH),
            "Instructions::WIDTH is wrong"
        );
        text.render(area, buf);
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct GameScreen<'a> {
    snapshot: Snapshot<'a>,
    session: &'a Session,
}

impl GameScreen<'_> {
    /// Size of the bordered board, borders included
    fn board_size() -> Size {
        let cells = u16::try_from(consts::GRID_SIZE).unwrap_or(u16::MAX);
        Size {
            width: cells.saturating_mul(consts::CELL_WIDTH).saturating_add(2),
            height: cells.saturating_add(2),
        }
    }
}

impl Widget for GameScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [score_area, board_area, message_area, hint_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area);

        Line::from(format!(
            " Score: {}   Best: {}   Speed: {} ms",
            self.snapshot.score,
            self.snapshot.best,
            self.session.period().as_millis(),
        ))
        .style(consts::SCORE_BAR_STYLE)
        .render(score_area, buf);

        let block_area = center_rect(board_area, Self::board_size());
        Block::bordered().render(block_area, buf);
        let mut canvas = Canvas {
            area: block_area.inner(Margin::new(1, 1)),
            buf,
        };
        for ob in self.session.obstacles() {
            let (symbol, style) = obstacle_glyph(ob.kind);
            canvas.draw_cell(ob.cell, symbol, style);
        }
        if let Some(food) = self.session.food() {
            canvas.draw_cell(food, consts::FOOD_SYMBOL, consts::FOOD_STYLE);
        }
        let snake = self.session.snake();
        for cell in snake.cells().skip(1) {
            canvas.draw_cell(cell, consts::SNAKE_BODY_SYMBOL, consts::SNAKE_STYLE);
        }
        let ending = self.snapshot.ending();
        if matches!(
            ending,
            Some(Ending {
                cause: Cause::Collision(_),
                ..
            })
        ) {
            canvas.draw_cell(
                snake.head(),
                consts::COLLISION_SYMBOL,
                consts::COLLISION_STYLE,
            );
        } else {
            canvas.draw_cell(snake.head(), head_symbol(snake.heading()), consts::SNAKE_STYLE);
        }

        if let Some(ending) = ending {
            ending_line(ending).render(message_area, buf);
            Line::from_iter([
                Span::raw(" Play again ("),
                Span::styled("Space", consts::KEY_STYLE),
                Span::raw(")   Title screen ("),
                Span::styled("Esc", consts::KEY_STYLE),
                Span::raw(")   Quit ("),
                Span::styled("q", consts::KEY_STYLE),
                Span::raw(")"),
            ])
            .render(hint_area, buf);
        } else {
            Line::from_iter([
                Span::raw(" Move ("),
                Span::styled("←↓↑→", consts::KEY_STYLE),
                Span::raw(")   Pause ("),
                Span::styled("Space", consts::KEY_STYLE),
                Span::raw(")   Quit ("),
                Span::styled("q", consts::KEY_STYLE),
                Span::raw(")"),
            ])
            .render(hint_area, buf);
            if self.snapshot.paused() {
                Paused.render(center_rect(block_area, Paused::SIZE), buf);
            }
        }
    }
}

fn head_symbol(heading: Heading) -> char {
    match heading {
        Heading::Up => consts::SNAKE_HEAD_UP_SYMBOL,
        Heading::Down => consts::SNAKE_HEAD_DOWN_SYMBOL,
        Heading::Left => consts::SNAKE_HEAD_LEFT_SYMBOL,
        Heading::Right => consts::SNAKE_HEAD_RIGHT_SYMBOL,
    }
}

fn obstacle_glyph(kind: ObstacleKind) -> (char, Style) {
    match kind {
        ObstacleKind::Rock => (consts::ROCK_SYMBOL, consts::ROCK_STYLE),
        ObstacleKind::Crate => (consts::CRATE_SYMBOL, consts::CRATE_STYLE),
        ObstacleKind::Bramble => (consts::BRAMBLE_SYMBOL, consts::BRAMBLE_STYLE),
        ObstacleKind::Pillar => (consts::PILLAR_SYMBOL, consts::PILLAR_STYLE),
    }
}

fn ending_line(ending: Ending) -> Line<'static> {
    let FinalScore { score, new_best } = ending.result;
    let reason = match ending.cause {
        Cause::Collision(Collision::Wall) => "You ran into a wall.",
        Cause::Collision(Collision::Snake) => "You ran into yourself.",
        Cause::Collision(Collision::Obstacle) => "You ran into an obstacle.",
        Cause::Exhausted => "There is no room left for food.",
    };
    let mut line = Line::from(format!(" GAME OVER: {reason}  Final score: {score}"));
    if new_best {
        line.push_span("  ");
        line.push_span(Span::styled("New best!", consts::NEW_BEST_STYLE));
    }
    line
}

#[derive(Debug, Eq, PartialEq)]
struct Canvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    fn draw_cell(&mut self, cell: Cell, symbol: char, style: Style) {
        let Some((x, y)) = self.locate(cell) else {
            return;
        };
        if let Some(c) = self.buf.cell_mut((x, y)) {
            c.set_char(symbol);
            c.set_style(style);
        }
    }

    /// Return the terminal coordinates of the left column of `cell`, or
    /// `None` if it falls outside the board
    fn locate(&self, cell: Cell) -> Option<(u16, u16)> {
        let dx = u16::try_from(cell.x)
            .ok()?
            .checked_mul(consts::CELL_WIDTH)?;
        let dy = u16::try_from(cell.y).ok()?;
        if dx >= self.area.width || dy >= self.area.height {
            return None;
        }
        Some((self.area.x.checked_add(dx)?, self.area.y.checked_add(dy)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::Command;
    use crate::game::{Game, SpeedCurve, TickOutcome};
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;
    use rstest::rstest;

    const RNG_SEED: u64 = 0x0123456789ABCDEF;

    fn new_game() -> Game<ChaCha12Rng> {
        Game::new_with_rng(SpeedCurve::default(), ChaCha12Rng::seed_from_u64(RNG_SEED))
    }

    fn render(snapshot: Snapshot<'_>) -> Buffer {
        let area = Rect::new(0, 0, 80, 24);
        let mut buffer = Buffer::empty(area);
        snapshot.render(area, &mut buffer);
        buffer
    }

    fn rows(buffer: &Buffer) -> Vec<String> {
        let area = buffer.area;
        area.rows()
            .map(|row| {
                row.columns()
                    .map(|pos| buffer[(pos.x, pos.y)].symbol())
                    .collect::<String>()
            })
            .collect()
    }

    fn count(buffer: &Buffer, symbol: char) -> usize {
        let s = symbol.to_string();
        buffer.content().iter().filter(|c| c.symbol() == s).count()
    }

    fn find(buffer: &Buffer, symbol: char) -> Option<(u16, u16)> {
        let s = symbol.to_string();
        buffer
            .area
            .positions()
            .find(|&pos| buffer[(pos.x, pos.y)].symbol() == s)
            .map(|pos| (pos.x, pos.y))
    }

    #[test]
    fn title_screen() {
        let game = new_game();
        let buffer = render(game.snapshot());
        let rows = rows(&buffer);
        assert!(rows.iter().any(|r| r.contains("Press Enter to start")));
        assert!(rows.iter().any(|r| r.contains("Move the snake with:")));
        assert!(rows.iter().any(|r| r.contains("Paused: no steering")));
        assert!(rows.iter().any(|r| r.contains("Quit (q)")));
        assert!(!rows.iter().any(|r| r.contains("Best score")));
        assert!(!rows.iter().any(|r| r.contains("Score:")));
    }

    #[test]
    fn title_screen_with_best() {
        let snapshot = Snapshot {
            session: None,
            status: None,
            score: 30,
            best: 30,
        };
        let rows = rows(&render(snapshot));
        assert!(rows.iter().any(|r| r.contains("Best score: 30")));
    }

    #[test]
    fn game_screen() {
        let mut game = new_game();
        game.handle_command(Command::Enter);
        let buffer = render(game.snapshot());
        let rows = rows(&buffer);
        assert!(rows[0].starts_with(" Score: 0   Best: 0   Speed: 200 ms"));
        assert_eq!(count(&buffer, consts::FOOD_SYMBOL), 1);
        let obstacles = [
            consts::ROCK_SYMBOL,
            consts::CRATE_SYMBOL,
            consts::BRAMBLE_SYMBOL,
            consts::PILLAR_SYMBOL,
        ]
        .into_iter()
        .map(|sym| count(&buffer, sym))
        .sum::<usize>();
        assert_eq!(obstacles, 3);
        assert_eq!(count(&buffer, consts::SNAKE_BODY_SYMBOL), 0);
        assert_eq!(count(&buffer, consts::SNAKE_HEAD_RIGHT_SYMBOL), 1);
        let (left, top) = find(&buffer, '┌').unwrap();
        assert_eq!(
            find(&buffer, consts::SNAKE_HEAD_RIGHT_SYMBOL),
            Some((left + 1 + 10 * consts::CELL_WIDTH, top + 1 + 10))
        );
        let (right, bottom) = find(&buffer, '┘').unwrap();
        assert_eq!(right - left + 1, 32);
        assert_eq!(bottom - top + 1, 17);
        assert!(rows.iter().any(|r| r.contains("Pause (Space)")));
        assert!(!rows.iter().any(|r| r.contains("PAUSED")));
    }

    #[test]
    fn paused_screen() {
        let mut game = new_game();
        game.handle_command(Command::Enter);
        game.handle_command(Command::Space);
        let rows = rows(&render(game.snapshot()));
        assert!(rows.iter().any(|r| r.contains("PAUSED")));
        assert!(rows.iter().any(|r| r.contains("Resume (Space)")));
    }

    #[test]
    fn game_over_screen() {
        let mut game = new_game();
        game.handle_command(Command::Enter);
        let outcome = loop {
            match game.tick() {
                Some(TickOutcome::Moved | TickOutcome::Ate { .. }) => (),
                r => break r,
            }
        };
        assert!(matches!(outcome, Some(TickOutcome::Collided(_))));
        let buffer = render(game.snapshot());
        let rows = rows(&buffer);
        assert!(rows.iter().any(|r| r.contains("GAME OVER")));
        assert!(rows.iter().any(|r| r.contains("Play again (Space)")));
        assert_eq!(count(&buffer, consts::COLLISION_SYMBOL), 1);
        assert_eq!(count(&buffer, consts::SNAKE_HEAD_RIGHT_SYMBOL), 0);
    }

    #[rstest]
    #[case(
        Cause::Collision(Collision::Wall),
        false,
        " GAME OVER: You ran into a wall.  Final score: 40"
    )]
    #[case(
        Cause::Collision(Collision::Snake),
        false,
        " GAME OVER: You ran into yourself.  Final score: 40"
    )]
    #[case(
        Cause::Collision(Collision::Obstacle),
        true,
        " GAME OVER: You ran into an obstacle.  Final score: 40  New best!"
    )]
    #[case(
        Cause::Exhausted,
        true,
        " GAME OVER: There is no room left for food.  Final score: 40  New best!"
    )]
    fn test_ending_line(#[case] cause: Cause, #[case] new_best: bool, #[case] text: &str) {
        let ending = Ending {
            cause,
            result: FinalScore {
                score: 40,
                new_best,
            },
        };
        assert_eq!(ending_line(ending).to_string(), text);
    }

    #[rstest]
    #[case(Heading::Up, 'v')]
    #[case(Heading::Down, '^')]
    #[case(Heading::Left, '>')]
    #[case(Heading::Right, '<')]
    fn test_head_symbol(#[case] heading: Heading, #[case] symbol: char) {
        assert_eq!(head_symbol(heading), symbol);
    }

    #[test]
    fn canvas_clips_to_board() {
        let area = Rect::new(0, 0, 10, 3);
        let mut buffer = Buffer::empty(area);
        let mut canvas = Canvas {
            area: Rect::new(1, 1, 6, 1),
            buf: &mut buffer,
        };
        canvas.draw_cell(Cell::new(0, 0), 'a', Style::new());
        canvas.draw_cell(Cell::new(2, 0), 'b', Style::new());
        canvas.draw_cell(Cell::new(3, 0), 'c', Style::new());
        canvas.draw_cell(Cell::new(-1, 0), 'd', Style::new());
        canvas.draw_cell(Cell::new(0, 1), 'e', Style::new());
        assert_eq!(
            buffer,
            Buffer::with_lines(["          ", " a   b    ", "          "])
        );
    }
}
