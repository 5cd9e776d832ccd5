use super::action::Direction;

/// A position on the playfield, in pixels. Always a multiple of the unit size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move position one cell of side `unit` in a direction
    pub fn moved_in_direction(&self, direction: Direction, unit: i32) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx * unit, dy * unit)
    }
}

/// The snake in the game.
///
/// Segments live in a fixed buffer sized to the number of grid cells; only the
/// first `len()` entries are the body. The slot right after the tail keeps the
/// position the tail last vacated and is still looked at by [`Snake::bites_itself`].
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    segments: Vec<Position>,
    body_parts: usize,
    /// Current direction of movement
    pub direction: Direction,
}

impl Snake {
    /// Create a snake of `length` segments trailing behind `head`, opposite to
    /// `direction`, one `unit` apart.
    pub fn new(
        head: Position,
        direction: Direction,
        length: usize,
        unit: i32,
        capacity: usize,
    ) -> Self {
        debug_assert!(length <= capacity, "snake longer than the grid");
        let length = length.min(capacity);
        let mut segments = vec![Position::default(); capacity];

        let (dx, dy) = direction.delta();
        let (back_dx, back_dy) = (-dx * unit, -dy * unit);

        if length > 0 {
            segments[0] = head;
        }
        for i in 1..length {
            segments[i] = segments[i - 1].moved_by(back_dx, back_dy);
        }

        Self {
            segments,
            body_parts: length,
            direction,
        }
    }

    /// Build a snake from explicit segments, head first
    pub fn from_segments(body: &[Position], direction: Direction, capacity: usize) -> Self {
        debug_assert!(body.len() <= capacity, "snake longer than the grid");
        let length = body.len().min(capacity);
        let mut segments = vec![Position::default(); capacity];
        segments[..length].copy_from_slice(&body[..length]);

        Self {
            segments,
            body_parts: length,
            direction,
        }
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.segments[0]
    }

    /// Body segments, head first
    pub fn body(&self) -> &[Position] {
        &self.segments[..self.body_parts]
    }

    /// The slot one past the tail, if the buffer has room for it
    pub fn trailing_slot(&self) -> Option<Position> {
        self.segments.get(self.body_parts).copied()
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body_parts
    }

    /// Check if the snake is empty (should never happen in practice)
    pub fn is_empty(&self) -> bool {
        self.body_parts == 0
    }

    /// Maximum number of segments
    pub fn capacity(&self) -> usize {
        self.segments.len()
    }

    /// Shift every segment onto its predecessor, tail end first, then step the
    /// head one cell in the current direction.
    pub fn advance(&mut self, unit: i32) {
        let last = self.body_parts.min(self.segments.len() - 1);
        for i in (1..=last).rev() {
            self.segments[i] = self.segments[i - 1];
        }
        self.segments[0] = self.segments[0].moved_in_direction(self.direction, unit);
    }

    /// Extend the body by one segment; the new tail is the trailing slot
    pub fn grow(&mut self) {
        debug_assert!(self.body_parts < self.segments.len(), "snake outgrew the grid");
        self.body_parts = (self.body_parts + 1).min(self.segments.len());
    }

    /// Check whether the head overlaps a segment in `1..=len()`.
    ///
    /// The inclusive upper bound makes the trailing slot count as body.
    pub fn bites_itself(&self) -> bool {
        let head = self.head();
        let last = self.body_parts.min(self.segments.len() - 1);
        self.segments[1..=last].contains(&head)
    }
}

/// Type of collision that ended the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Snake left the playfield
    Wall,
    /// Snake hit itself
    SelfCollision,
}

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub apple: Position,
    pub screen_width: i32,
    pub screen_height: i32,
    pub score: u32,
    pub running: bool,
}

impl GameState {
    /// Create a new game state
    pub fn new(snake: Snake, apple: Position, screen_width: i32, screen_height: i32) -> Self {
        Self {
            snake,
            apple,
            screen_width,
            screen_height,
            score: 0,
            running: true,
        }
    }

    /// Check if a position is on the playfield.
    ///
    /// The far edges are inclusive: a head sitting exactly at `x == width` or
    /// `y == height` is still in play.
    pub fn is_in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x <= self.screen_width && pos.y >= 0 && pos.y <= self.screen_height
    }
}
