//! Arithmetic questions
//!
//! Questions are kept as structured operands and operators and folded
//! left-to-right, so `5 + 3 * 2` is `(5 + 3) * 2 = 16`.

use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::{Config, GameRng};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
}

impl Operator {
    pub const ALL: [Operator; 3] = [Operator::Add, Operator::Sub, Operator::Mul];

    pub fn apply(self, lhs: i32, rhs: i32) -> i32 {
        match self {
            Operator::Add => lhs + rhs,
            Operator::Sub => lhs - rhs,
            Operator::Mul => lhs * rhs,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
        }
    }
}

/// Three operands joined by two operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    pub operands: [i32; 3],
    pub operators: [Operator; 2],
}

impl Question {
    pub fn new(operands: [i32; 3], operators: [Operator; 2]) -> Self {
        Self {
            operands,
            operators,
        }
    }

    /// Random operands in `0..=operand_max` and random operators
    pub fn random(rng: &mut GameRng, config: &Config) -> Self {
        let max = config.operand_ceiling();
        let operands = [
            rng.0.gen_range(0..=max),
            rng.0.gen_range(0..=max),
            rng.0.gen_range(0..=max),
        ];
        let operators = [
            *Operator::ALL.choose(&mut rng.0).unwrap_or(&Operator::Add),
            *Operator::ALL.choose(&mut rng.0).unwrap_or(&Operator::Add),
        ];
        Self::new(operands, operators)
    }

    /// Left-to-right evaluation, no operator precedence
    pub fn evaluate(&self) -> i32 {
        self.operators
            .iter()
            .zip(&self.operands[1..])
            .fold(self.operands[0], |acc, (op, rhs)| op.apply(acc, *rhs))
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {}",
            self.operands[0],
            self.operators[0].symbol(),
            self.operands[1],
            self.operators[1].symbol(),
            self.operands[2]
        )
    }
}

impl Default for Question {
    fn default() -> Self {
        Self::new([0, 0, 0], [Operator::Add, Operator::Add])
    }
}
