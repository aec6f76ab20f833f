use crate::{
    emit::Latex,
    expr::{Expression, Term, Variable},
    fraction::Fraction,
};
use smol_str::SmolStr;
use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

/// An equality between two expressions.
///
/// The right-hand side can be anything that converts into an expression — an
/// [`Expression`], a [`Fraction`], or a plain integer.
#[derive(Debug, Clone, PartialEq)]
pub struct Equation {
    lhs: Expression,
    rhs: Expression,
}

impl Equation {
    pub fn new<R: Into<Expression>>(lhs: Expression, rhs: R) -> Self {
        Equation {
            lhs,
            rhs: rhs.into(),
        }
    }

    pub fn lhs(&self) -> &Expression { &self.lhs }

    pub fn rhs(&self) -> &Expression { &self.rhs }

    /// Rearrange the equation to isolate `variable`.
    ///
    /// Terms of the target variable are gathered on one side and everything
    /// else on the other, flipping signs as terms cross the equals sign, and
    /// the gathered side is then normalised to a coefficient of one. The
    /// answer is a single [`Fraction`] in lowest terms when nothing else is
    /// left, or a residual [`Expression`] when the equation mentions other
    /// variables too.
    pub fn solve_for(&self, variable: &str) -> Result<Solution, SolveError> {
        if !self.rhs.has_variable(variable) && !self.lhs.has_variable(variable)
        {
            return Err(SolveError::UnknownVariable {
                name: variable.into(),
            });
        }

        let solving_for = Term::from(Variable::named(variable));
        let mut new_lhs = Expression::new();
        let mut new_rhs = Expression::new();

        for term in self.rhs.terms() {
            if term.can_combine_with(&solving_for) {
                new_lhs = new_lhs.subtract(term.clone());
            } else {
                new_rhs = new_rhs.add(term.clone());
            }
        }

        for term in self.lhs.terms() {
            if term.can_combine_with(&solving_for) {
                new_lhs = new_lhs.add(term.clone());
            } else {
                new_rhs = new_rhs.subtract(term.clone());
            }
        }

        new_rhs = new_rhs
            .subtract(self.lhs.constant())
            .add(self.rhs.constant());

        // The passes above leave at most one term behind: the target
        // variable's. It disappears entirely when its coefficients cancel
        // across the two sides.
        let coefficient = new_lhs
            .terms()
            .first()
            .map(|term| term.coefficient())
            .unwrap_or_else(|| Fraction::from(0));

        let isolated =
            new_rhs
                .divide(coefficient)
                .ok_or_else(|| SolveError::ZeroCoefficient {
                    name: variable.into(),
                })?;

        if isolated.terms().is_empty() {
            Ok(Solution::Value(isolated.constant().reduce()))
        } else {
            Ok(Solution::Partial(isolated))
        }
    }
}

impl Display for Equation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.lhs, self.rhs)
    }
}

impl Latex for Equation {
    fn tex(&self) -> String {
        format!("{} = {}", self.lhs.tex(), self.rhs.tex())
    }
}

/// What isolating a variable worked out to.
#[derive(Debug, Clone, PartialEq)]
pub enum Solution {
    /// A single number, in lowest terms.
    Value(Fraction),
    /// An expression still involving the equation's other variables. Left
    /// exactly as the rearrangement produced it, unreduced.
    Partial(Expression),
}

impl Display for Solution {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Solution::Value(value) => write!(f, "{}", value),
            Solution::Partial(expression) => write!(f, "{}", expression),
        }
    }
}

impl Latex for Solution {
    fn tex(&self) -> String {
        match self {
            Solution::Value(value) => value.tex(),
            Solution::Partial(expression) => expression.tex(),
        }
    }
}

/// Things that can go wrong while solving.
#[derive(Debug, Clone, PartialEq)]
pub enum SolveError {
    /// The variable doesn't appear on either side of the equation.
    UnknownVariable { name: SmolStr },
    /// Every occurrence of the variable cancelled out, leaving nothing to
    /// divide by.
    ZeroCoefficient { name: SmolStr },
}

impl Display for SolveError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SolveError::UnknownVariable { name } => {
                write!(f, "the equation doesn't mention \"{}\"", name)
            },
            SolveError::ZeroCoefficient { name } => {
                write!(f, "every \"{}\" term cancelled out", name)
            },
        }
    }
}

impl Error for SolveError {}
