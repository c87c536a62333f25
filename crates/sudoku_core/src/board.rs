use crate::types::block_origin;

/// Cell value marking an empty square.
pub const EMPTY: u8 = 0;

/// A rule binding two specific adjacent cells: once both are filled,
/// their values must differ by exactly one.
///
/// The pair is ordered but the rule is symmetric; `consecutive` is
/// kept explicit so a non-binding pair can be represented without
/// removing it from the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Constraint {
    pub a: (u8, u8),
    pub b: (u8, u8),
    pub consecutive: bool,
}

impl Constraint {
    pub fn consecutive(a: (u8, u8), b: (u8, u8)) -> Self {
        Self {
            a,
            b,
            consecutive: true,
        }
    }

    /// Whether this constraint has (row, col) as one of its endpoints.
    pub fn touches(&self, row: u8, col: u8) -> bool {
        self.a == (row, col) || self.b == (row, col)
    }

    /// The endpoint opposite to (row, col). Caller must ensure
    /// `touches` holds.
    pub fn other_end(&self, row: u8, col: u8) -> (u8, u8) {
        if self.a == (row, col) { self.b } else { self.a }
    }

    /// True when the two endpoint values satisfy the rule.
    pub fn satisfied(&self, va: u8, vb: u8) -> bool {
        !self.consecutive || va.abs_diff(vb) == 1
    }
}

/// N×N grid plus the consecutive constraints attached to it.
///
/// The grid itself carries no empty-cell counters; `set` never updates
/// any bookkeeping. Callers that need fast completion checks (the
/// simulated board, the referee) maintain their own counters and
/// decrement them exactly once per cell filled. The split exists
/// because the same grid type backs both the authoritative board
/// (counters irrelevant) and search clones (counters load-bearing).
#[derive(Clone, Debug)]
pub struct Board {
    size: usize,
    block: usize,
    cells: Vec<u8>,
    constraints: Vec<Constraint>,
}

impl Board {
    /// Creates an empty board. The size must be a non-zero perfect
    /// square so that the block partition is well defined; anything
    /// else is a configuration error and is rejected outright.
    pub fn new(size: usize) -> Result<Self, String> {
        let block = (size as f64).sqrt() as usize;
        if size == 0 || block * block != size {
            return Err(format!(
                "board size must be a non-zero perfect square, got {}",
                size
            ));
        }
        Ok(Self {
            size,
            block,
            cells: vec![EMPTY; size * size],
            constraints: Vec::new(),
        })
    }

    /// Parses the prefilled-grid text format: N lines of N
    /// whitespace-separated integers in [0, N], 0 meaning empty.
    ///
    /// Any malformed input (wrong line count, wrong token count,
    /// non-integer token, out-of-range value) fails without producing
    /// a partially-filled board.
    pub fn parse(text: &str) -> Result<Self, String> {
        let lines: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();
        let size = lines.len();
        let mut board = Board::new(size)?;

        for (row, line) in lines.iter().enumerate() {
            let tokens: Vec<&str> = line.split_whitespace().collect();
            if tokens.len() != size {
                return Err(format!(
                    "line {}: expected {} values, got {}",
                    row + 1,
                    size,
                    tokens.len()
                ));
            }
            for (col, tok) in tokens.iter().enumerate() {
                let value: u8 = tok
                    .parse()
                    .map_err(|_| format!("line {}: invalid value '{}'", row + 1, tok))?;
                if value as usize > size {
                    return Err(format!(
                        "line {}: value {} out of range 0..={}",
                        row + 1,
                        value,
                        size
                    ));
                }
                board.cells[row * size + col] = value;
            }
        }
        Ok(board)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Side length of one subgrid block (√N).
    pub fn block_size(&self) -> usize {
        self.block
    }

    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.cells[row * self.size + col]
    }

    pub fn set(&mut self, row: usize, col: usize, value: u8) {
        self.cells[row * self.size + col] = value;
    }

    pub fn is_empty_cell(&self, row: usize, col: usize) -> bool {
        self.get(row, col) == EMPTY
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&v| v != EMPTY)
    }

    pub fn count_empty(&self) -> usize {
        self.cells.iter().filter(|&&v| v == EMPTY).count()
    }

    pub fn clear(&mut self) {
        self.cells.fill(EMPTY);
    }

    pub fn add_constraint(&mut self, c: Constraint) {
        self.constraints.push(c);
    }

    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    /// All constraints with (row, col) as an endpoint.
    pub fn constraints_at(&self, row: u8, col: u8) -> impl Iterator<Item = &Constraint> {
        self.constraints.iter().filter(move |c| c.touches(row, col))
    }

    pub fn block_origin(&self, row: usize, col: usize) -> (usize, usize) {
        block_origin(row, col, self.block)
    }

    /// Renders the grid for console display, one row per line.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for row in 0..self.size {
            for col in 0..self.size {
                if col > 0 {
                    out.push(' ');
                }
                let v = self.get(row, col);
                if v == EMPTY {
                    out.push('.');
                } else {
                    out.push_str(&v.to_string());
                }
            }
            out.push('\n');
        }
        out
    }
}
