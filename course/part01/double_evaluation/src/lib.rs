//! Why "max" written as text substitution is a trap.
//!
//! `naive_max!` pastes each operand into both the comparison and the chosen
//! branch, so an operand with a side effect runs it twice whenever its
//! branch wins. `single_eval_max!` and [`pick_max`] evaluate each operand
//! exactly once.

use std::fmt;

/// Substitutes `$a` and `$b` into `if $a > $b { $a } else { $b }`.
///
/// Whichever operand is selected gets evaluated a second time.
#[macro_export]
macro_rules! naive_max {
    ($a:expr, $b:expr) => {
        if $a > $b {
            $a
        } else {
            $b
        }
    };
}

/// Like [`naive_max!`], but binds each operand to a local first.
#[macro_export]
macro_rules! single_eval_max {
    ($a:expr, $b:expr) => {{
        let a = $a;
        let b = $b;
        if a > b {
            a
        } else {
            b
        }
    }};
}

/// Returns the larger of `a` and `b`, or `b` when they compare equal.
pub fn pick_max<T: PartialOrd>(a: T, b: T) -> T {
    if a > b {
        a
    } else {
        b
    }
}

/// An integer whose reads can bump it, like `x++` and `++x` in C.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operand(i32);

impl Operand {
    pub fn new(value: i32) -> Self {
        Self(value)
    }

    pub fn get(self) -> i32 {
        self.0
    }

    /// Yields the current value, then adds one.
    pub fn post_inc(&mut self) -> i32 {
        let old = self.0;
        self.0 += 1;
        old
    }

    /// Adds one, then yields the new value.
    pub fn pre_inc(&mut self) -> i32 {
        self.0 += 1;
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaxOutcome {
    pub a: i32,
    pub b: i32,
    pub selected: i32,
}

impl fmt::Display for MaxOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x is {}, y is {}, z is {}", self.a, self.b, self.selected)
    }
}

/// How an operand is read when it is handed to the max.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Increment {
    /// `x++`: the old value is used.
    Post,
    /// `++x`: the bumped value is used.
    Pre,
}

impl Increment {
    pub fn read(self, operand: &mut Operand) -> i32 {
        match self {
            Increment::Post => operand.post_inc(),
            Increment::Pre => operand.pre_inc(),
        }
    }

    /// The C spelling of the two operands, for labelling output.
    pub fn notation(self) -> &'static str {
        match self {
            Increment::Post => "x++, y++",
            Increment::Pre => "++x, ++y",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaxStrategy {
    NaiveMacro,
    HygienicMacro,
    Function,
}

impl MaxStrategy {
    /// Picks the max of `a++` and `b++` for operands starting at `a` and `b`.
    pub fn evaluate(self, a: i32, b: i32) -> MaxOutcome {
        self.evaluate_with(Increment::Post, a, b)
    }

    pub fn evaluate_with(self, increment: Increment, a: i32, b: i32) -> MaxOutcome {
        let mut a = Operand::new(a);
        let mut b = Operand::new(b);
        let mut read_a = || increment.read(&mut a);
        let mut read_b = || increment.read(&mut b);

        let selected = match self {
            MaxStrategy::NaiveMacro => naive_max!(read_a(), read_b()),
            MaxStrategy::HygienicMacro => single_eval_max!(read_a(), read_b()),
            MaxStrategy::Function => pick_max(read_a(), read_b()),
        };

        MaxOutcome {
            a: a.get(),
            b: b.get(),
            selected,
        }
    }
}
