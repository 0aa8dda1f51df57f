use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    AtLeast(usize),
    Exactly(usize),
}

impl Arity {
    pub fn accepts(&self, count: usize) -> bool {
        match *self {
            Self::AtLeast(n) => count >= n,
            Self::Exactly(n) => count == n,
        }
    }
}

fn count_in_words(n: usize) -> String {
    match n {
        1 => "one argument".into(),
        2 => "two arguments".into(),
        n => format!("{} arguments", n),
    }
}

impl Display for Arity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Self::AtLeast(n) => write!(f, "at least {}", count_in_words(n)),
            Self::Exactly(n) => write!(f, "exactly {}", count_in_words(n)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("{} requires {arity}.", .operation.title())]
    InvalidArity {
        operation: Operation,
        arity: Arity,
        given: usize,
    },
    #[error("{0}")]
    InvalidArgument(&'static str),
}

/// A named numeric function over an ordered list of arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Sin,
    Atan2,
}

impl Operation {
    pub const ALL: [Operation; 6] = [
        Self::Add,
        Self::Subtract,
        Self::Multiply,
        Self::Divide,
        Self::Sin,
        Self::Atan2,
    ];

    /// Name the operation is registered under.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Sin => "sin",
            Self::Atan2 => "atan2",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Add => "Addition",
            Self::Subtract => "Subtraction",
            Self::Multiply => "Multiplication",
            Self::Divide => "Division",
            Self::Sin => "Sin function",
            Self::Atan2 => "Atan2 function",
        }
    }

    pub fn arity(&self) -> Arity {
        match self {
            Self::Add | Self::Subtract | Self::Multiply => Arity::AtLeast(2),
            Self::Divide | Self::Atan2 => Arity::Exactly(2),
            Self::Sin => Arity::Exactly(1),
        }
    }

    pub fn call(&self, args: &[f64]) -> Result<f64, Error> {
        let arity = self.arity();
        if !arity.accepts(args.len()) {
            return Err(Error::InvalidArity {
                operation: *self,
                arity,
                given: args.len(),
            });
        }
        let value = match self {
            Self::Add => fold(args, |acc, x| acc + x),
            Self::Subtract => fold(args, |acc, x| acc - x),
            Self::Multiply => fold(args, |acc, x| acc * x),
            Self::Divide => {
                if args[1] == 0.0 {
                    return Err(Error::InvalidArgument("Divisor cannot be zero."));
                }
                args[0] / args[1]
            }
            Self::Sin => args[0].sin(),
            Self::Atan2 => args[0].atan2(args[1]),
        };
        Ok(value)
    }
}

// Left to right, seeded with the first argument. Callers guarantee at least one.
fn fold(args: &[f64], f: impl Fn(f64, f64) -> f64) -> f64 {
    args[1..].iter().fold(args[0], |acc, &x| f(acc, x))
}
