use crate::grid::{Grid, Position};
use Direction::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right
}

impl Direction {
    pub fn is_opposite(self, other: Direction) -> bool {
        matches!((self, other), (Up, Down) | (Down, Up) | (Right, Left) | (Left, Right))
    }

    pub fn opposite(self) -> Direction {
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    pub new_head: Position,
    pub ate_food: bool,
    /// Cell the tail left this move, `None` when the snake grew into it.
    pub vacated: Option<Position>,
}

pub struct Snake {
    body: Vec<Position>,
    capacity: usize,
    direction: Direction,
    last_moved: Direction,
}

impl Snake {
    pub fn new(head: Position, size: usize, direction: Direction, grid: &Grid) -> Self {
        let capacity = grid.capacity();
        let size = size.max(1).min(capacity);

        let mut body = Vec::with_capacity(capacity + 1);
        body.push(head);
        for _ in 1..size {
            let prev = body[body.len() - 1];
            body.push(grid.step(prev, direction.opposite()));
        }

        Snake { body, capacity, direction, last_moved: direction }
    }

    /// Requests a new heading for the next move. A request opposite to the
    /// direction of the last move is dropped.
    pub fn steer(&mut self, new_direction: Direction) -> bool {
        if new_direction.is_opposite(self.last_moved) {
            return false;
        }

        self.direction = new_direction;
        true
    }

    pub fn advance(&mut self, grid: &Grid, food: Option<Position>) -> MoveOutcome {
        let new_head = grid.step(self.head(), self.direction);
        let ate_food = food == Some(new_head);
        let grows = ate_food && self.body.len() < self.capacity;

        self.body.insert(0, new_head);
        let vacated = if grows { None } else { self.body.pop() };

        self.last_moved = self.direction;
        MoveOutcome { new_head, ate_food, vacated }
    }

    pub fn head(&self) -> Position {
        self.body[0]
    }

    pub fn body(&self) -> &[Position] {
        &self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn last_moved(&self) -> Direction {
        self.last_moved
    }

    #[cfg(test)]
    pub(crate) fn from_body(body: Vec<Position>, direction: Direction, grid: &Grid) -> Self {
        assert!(!body.is_empty());
        Snake { body, capacity: grid.capacity(), direction, last_moved: direction }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(row: u16, col: u16) -> Position {
        Position::new(row, col)
    }

    #[test]
    fn new_snake_trails_behind_its_heading() {
        let grid = Grid::new(10, 10);
        let snake = Snake::new(pos(5, 5), 3, Right, &grid);
        assert_eq!(snake.body(), &[pos(5, 5), pos(5, 4), pos(5, 3)]);
        assert_eq!(snake.direction(), Right);
    }

    #[test]
    fn new_snake_body_wraps_near_the_edge() {
        let grid = Grid::new(10, 10);
        let snake = Snake::new(pos(0, 1), 3, Right, &grid);
        assert_eq!(snake.body(), &[pos(0, 1), pos(0, 0), pos(0, 9)]);
    }

    #[test]
    fn advance_without_food_keeps_length() {
        let grid = Grid::new(10, 10);
        let mut snake = Snake::new(pos(5, 5), 3, Right, &grid);

        let outcome = snake.advance(&grid, Some(pos(0, 0)));

        assert_eq!(
            outcome,
            MoveOutcome { new_head: pos(5, 6), ate_food: false, vacated: Some(pos(5, 3)) }
        );
        assert_eq!(snake.body(), &[pos(5, 6), pos(5, 5), pos(5, 4)]);
    }

    #[test]
    fn eating_keeps_the_old_tail() {
        let grid = Grid::new(10, 10);
        let mut snake = Snake::new(pos(5, 5), 3, Right, &grid);

        let outcome = snake.advance(&grid, Some(pos(5, 6)));

        assert!(outcome.ate_food);
        assert_eq!(outcome.vacated, None);
        assert_eq!(snake.body(), &[pos(5, 6), pos(5, 5), pos(5, 4), pos(5, 3)]);
    }

    #[test]
    fn growth_is_capped_at_grid_capacity() {
        let grid = Grid::new(2, 2);
        let body = vec![pos(0, 0), pos(1, 0), pos(1, 1), pos(0, 1)];
        let mut snake = Snake::from_body(body, Right, &grid);

        let outcome = snake.advance(&grid, Some(pos(0, 1)));

        assert!(outcome.ate_food);
        assert_eq!(outcome.vacated, Some(pos(0, 1)));
        assert_eq!(snake.len(), 4);
    }

    #[test]
    fn wraps_through_the_right_edge() {
        let grid = Grid::new(10, 10);
        let mut snake = Snake::new(pos(0, 9), 3, Right, &grid);
        assert_eq!(snake.advance(&grid, None).new_head, pos(0, 0));
    }

    #[test]
    fn reversal_is_ignored() {
        let grid = Grid::new(10, 10);
        let mut snake = Snake::new(pos(5, 5), 3, Right, &grid);

        assert!(!snake.steer(Left));
        assert_eq!(snake.direction(), Right);
        assert_eq!(snake.advance(&grid, None).new_head, pos(5, 6));
    }

    #[test]
    fn same_and_perpendicular_turns_are_accepted() {
        let grid = Grid::new(10, 10);
        let mut snake = Snake::new(pos(5, 5), 3, Right, &grid);

        assert!(snake.steer(Right));
        assert!(snake.steer(Up));
        assert_eq!(snake.advance(&grid, None).new_head, pos(4, 5));
        assert_eq!(snake.last_moved(), Up);
    }

    #[test]
    fn guard_checks_the_last_move_not_the_pending_turn() {
        let grid = Grid::new(10, 10);
        let mut snake = Snake::new(pos(5, 5), 3, Right, &grid);

        // Up is pending, but the neck is still to the left.
        assert!(snake.steer(Up));
        assert!(snake.steer(Down));
        assert!(!snake.steer(Left));
        assert_eq!(snake.advance(&grid, None).new_head, pos(6, 5));
    }

    #[test]
    fn length_never_decreases() {
        let grid = Grid::new(5, 5);
        let mut snake = Snake::new(pos(2, 2), 3, Right, &grid);
        let turns = [Right, Down, Left, Down, Right, Up, Up, Left];
        let mut last_len = snake.len();

        for (i, dir) in turns.iter().cycle().take(40).enumerate() {
            snake.steer(*dir);
            let ahead = grid.step(snake.head(), snake.direction());
            let food = if i % 3 == 0 { Some(ahead) } else { None };
            snake.advance(&grid, food);
            assert!(snake.len() >= last_len);
            assert!(snake.len() <= grid.capacity());
            assert!(grid.contains(snake.head()));
            last_len = snake.len();
        }
    }
}
