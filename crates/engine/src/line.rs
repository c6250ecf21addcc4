//! Schematic rows parsed into numbers and symbols.


/// A maximal run of digits in one row, with its inclusive column span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Number {
    pub start: usize,
    pub end: usize,
    pub value: u32,
}

/// A single non-digit, non-`.` byte and the column it occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Symbol {
    pub position: usize,
    pub value: u8,
}

impl Symbol {
    /// Test if the symbol is a gear.
    #[inline]
    pub fn is_gear(&self) -> bool {
        self.value == b'*'
    }

    /// Test if the symbol is within one column of the number's span.
    ///
    /// Combined with the three-row window this is the full 8-directional
    /// neighbor relation on the grid.
    #[inline]
    pub fn is_adjacent(&self, number: &Number) -> bool {
        number.start <= self.position + 1 && number.end + 1 >= self.position
    }
}

/// One parsed schematic row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line {
    pub(crate) numbers: Vec<Number>,
    pub(crate) symbols: Vec<Symbol>,
}

impl Line {
    /// The padding row used outside of the grid.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse one raw schematic row.
    ///
    /// Any byte which is not a digit and not `.` is a symbol. A run of digits
    /// is closed by whatever follows it, or by the end of the row. A run of
    /// zeroes is still a number, so runs are tracked by length rather than by
    /// accumulated value.
    ///
    /// # Examples
    ///
    /// ```
    /// use engine::Line;
    ///
    /// let line = Line::parse(b"617*......");
    /// assert_eq!(line.numbers().len(), 1);
    /// assert_eq!(line.numbers()[0].value, 617);
    /// assert_eq!(line.symbols()[0].position, 3);
    /// ```
    pub fn parse(input: &[u8]) -> Self {
        let mut numbers = Vec::new();
        let mut symbols = Vec::new();

        let mut value = 0u32;
        let mut digits = 0;

        for (i, &b) in input.iter().enumerate() {
            if b.is_ascii_digit() {
                value = value * 10 + u32::from(b - b'0');
                digits += 1;
                continue;
            }

            if digits > 0 {
                numbers.push(Number {
                    start: i - digits,
                    end: i - 1,
                    value,
                });

                value = 0;
                digits = 0;
            }

            if b != b'.' {
                symbols.push(Symbol {
                    position: i,
                    value: b,
                });
            }
        }

        if digits > 0 {
            numbers.push(Number {
                start: input.len() - digits,
                end: input.len() - 1,
                value,
            });
        }

        Self { numbers, symbols }
    }

    /// Numbers in the row, in column order.
    #[inline]
    pub fn numbers(&self) -> &[Number] {
        &self.numbers
    }

    /// Symbols in the row, in column order.
    #[inline]
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }
}
