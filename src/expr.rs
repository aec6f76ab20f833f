use crate::{emit::Latex, fraction::Fraction};
use smol_str::SmolStr;
use std::{
    fmt::{self, Display, Formatter},
    ops::{Add, Mul, Neg, Sub},
};

/// A named unknown, like the `x` in `2x + 3 = 7`.
///
/// Two variables are the same variable exactly when their names are equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variable {
    name: SmolStr,
}

impl Variable {
    pub fn named<S: Into<SmolStr>>(name: S) -> Self {
        Variable { name: name.into() }
    }

    pub fn name(&self) -> &str { &self.name }
}

impl Display for Variable {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl Latex for Variable {
    fn tex(&self) -> String { self.name.to_string() }
}

/// A coefficient multiplying at most one variable.
///
/// A term without a variable is a plain number. [`Expression`] never keeps
/// those in its term list; they end up in its standalone constant instead.
#[derive(Debug, Clone, PartialEq)]
pub struct Term {
    coefficient: Fraction,
    variable: Option<Variable>,
}

impl Term {
    pub fn new(coefficient: Fraction, variable: Variable) -> Self {
        Term {
            coefficient,
            variable: Some(variable),
        }
    }

    pub fn constant(coefficient: Fraction) -> Self {
        Term {
            coefficient,
            variable: None,
        }
    }

    pub fn coefficient(&self) -> Fraction { self.coefficient }

    pub fn variable(&self) -> Option<&Variable> { self.variable.as_ref() }

    /// Two terms can have their coefficients merged when they refer to the
    /// same variable, or both refer to none.
    pub fn can_combine_with(&self, other: &Term) -> bool {
        self.variable == other.variable
    }

    pub(crate) fn add(&self, other: &Term) -> Term {
        debug_assert!(
            self.can_combine_with(other),
            "only terms of the same variable can be merged"
        );

        Term {
            coefficient: self.coefficient.add(other.coefficient),
            variable: self.variable.clone(),
        }
    }

    fn divided_by(self, divisor: Fraction) -> Option<Term> {
        Some(Term {
            coefficient: self.coefficient.divide(divisor)?,
            variable: self.variable,
        })
    }
}

impl From<Variable> for Term {
    fn from(variable: Variable) -> Term {
        Term::new(Fraction::from(1), variable)
    }
}

impl Display for Term {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.variable {
            Some(variable) => {
                if self.coefficient == Fraction::from(1) {
                    write!(f, "{}", variable)
                } else if self.coefficient == Fraction::from(-1) {
                    write!(f, "-{}", variable)
                } else {
                    write!(f, "{}{}", self.coefficient, variable)
                }
            },
            None => write!(f, "{}", self.coefficient),
        }
    }
}

impl Latex for Term {
    fn tex(&self) -> String {
        match &self.variable {
            Some(variable) => {
                if self.coefficient == Fraction::from(1) {
                    variable.tex()
                } else if self.coefficient == Fraction::from(-1) {
                    format!("-{}", variable.tex())
                } else {
                    format!("{}{}", self.coefficient.tex(), variable.tex())
                }
            },
            None => self.coefficient.tex(),
        }
    }
}

/// Anything that can be added to or subtracted from an [`Expression`]: a
/// term, a bare constant, or another whole expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Summand {
    Term(Term),
    Constant(Fraction),
    Expression(Expression),
}

impl From<Term> for Summand {
    fn from(term: Term) -> Summand { Summand::Term(term) }
}

impl From<Variable> for Summand {
    fn from(variable: Variable) -> Summand {
        Summand::Term(Term::from(variable))
    }
}

impl From<Fraction> for Summand {
    fn from(constant: Fraction) -> Summand { Summand::Constant(constant) }
}

impl From<i64> for Summand {
    fn from(n: i64) -> Summand { Summand::Constant(Fraction::from(n)) }
}

impl From<Expression> for Summand {
    fn from(expression: Expression) -> Summand {
        Summand::Expression(expression)
    }
}

/// An ordered sum of terms plus a standalone constant.
///
/// The term list holds at most one term per variable; adding a combinable
/// term merges coefficients, and a merge that cancels to zero drops the term
/// entirely. Every operation consumes the expression and hands back a new
/// one, so a shared expression is never changed behind your back.
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    terms: Vec<Term>,
    constant: Fraction,
}

impl Expression {
    pub fn new() -> Self {
        Expression {
            terms: Vec::new(),
            constant: Fraction::from(0),
        }
    }

    pub fn terms(&self) -> &[Term] { &self.terms }

    pub fn constant(&self) -> Fraction { self.constant }

    /// Whether any term refers to a variable with this name.
    pub fn has_variable(&self, name: &str) -> bool {
        self.terms
            .iter()
            .any(|term| term.variable().map_or(false, |v| v.name() == name))
    }

    /// Add a term, constant, variable, or whole expression.
    pub fn add<T: Into<Summand>>(mut self, summand: T) -> Expression {
        match summand.into() {
            Summand::Term(term) => match term.variable {
                Some(_) => {
                    self.insert(term);
                    self
                },
                // a variable-less term is really a constant
                None => self.add(term.coefficient),
            },
            Summand::Constant(constant) => {
                self.constant = self.constant.add(constant);
                self
            },
            Summand::Expression(other) => {
                let mut combined = self;
                for term in other.terms {
                    combined = combined.add(term);
                }
                combined.add(other.constant)
            },
        }
    }

    /// Subtract a term, constant, variable, or whole expression.
    pub fn subtract<T: Into<Summand>>(mut self, summand: T) -> Expression {
        match summand.into() {
            Summand::Term(term) => self.add(-term),
            Summand::Constant(constant) => {
                self.constant = self.constant.subtract(constant);
                self
            },
            Summand::Expression(other) => {
                let mut combined = self;
                for term in other.terms {
                    combined = combined.subtract(term);
                }
                combined.subtract(other.constant)
            },
        }
    }

    /// Divide every coefficient and the constant by `divisor`.
    ///
    /// `None` when the divisor's value is zero.
    pub fn divide<T: Into<Fraction>>(self, divisor: T) -> Option<Expression> {
        let divisor = divisor.into();
        let mut terms = Vec::with_capacity(self.terms.len());

        for term in self.terms {
            terms.push(term.divided_by(divisor)?);
        }

        Some(Expression {
            terms,
            constant: self.constant.divide(divisor)?,
        })
    }

    fn insert(&mut self, term: Term) {
        match self.terms.iter().position(|t| t.can_combine_with(&term)) {
            Some(ix) => {
                let merged = Term::add(&self.terms[ix], &term);

                if merged.coefficient().is_zero() {
                    self.terms.remove(ix);
                } else {
                    self.terms[ix] = merged;
                }
            },
            None => self.terms.push(term),
        }
    }

    fn render(
        &self,
        piece: impl Fn(&Term) -> String,
        constant: impl Fn(&Fraction) -> String,
    ) -> String {
        let mut out = String::new();

        for term in &self.terms {
            if out.is_empty() {
                out.push_str(&piece(term));
            } else if term.coefficient().is_negative() {
                // fold the sign into the join
                out.push_str(" - ");
                out.push_str(&piece(&-term.clone()));
            } else {
                out.push_str(" + ");
                out.push_str(&piece(term));
            }
        }

        if self.constant.is_zero() {
            if out.is_empty() {
                out.push('0');
            }
        } else if out.is_empty() {
            out.push_str(&constant(&self.constant));
        } else if self.constant.is_negative() {
            out.push_str(" - ");
            out.push_str(&constant(&-self.constant));
        } else {
            out.push_str(" + ");
            out.push_str(&constant(&self.constant));
        }

        out
    }
}

impl Default for Expression {
    fn default() -> Self { Expression::new() }
}

impl From<Fraction> for Expression {
    fn from(constant: Fraction) -> Expression { Expression::new().add(constant) }
}

impl From<i64> for Expression {
    fn from(n: i64) -> Expression { Expression::new().add(n) }
}

impl From<Term> for Expression {
    fn from(term: Term) -> Expression { Expression::new().add(term) }
}

impl From<Variable> for Expression {
    fn from(variable: Variable) -> Expression {
        Expression::new().add(variable)
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render(|t| t.to_string(), |c| c.to_string()))
    }
}

impl Latex for Expression {
    fn tex(&self) -> String { self.render(|t| t.tex(), |c| c.tex()) }
}

// operator overloads to make building an expression easier

impl Mul<Variable> for Fraction {
    type Output = Term;

    fn mul(self, variable: Variable) -> Term { Term::new(self, variable) }
}

impl Neg for Term {
    type Output = Term;

    fn neg(self) -> Term {
        Term {
            coefficient: -self.coefficient,
            variable: self.variable,
        }
    }
}

impl<T: Into<Summand>> Add<T> for Term {
    type Output = Expression;

    fn add(self, rhs: T) -> Expression { Expression::from(self).add(rhs) }
}

impl<T: Into<Summand>> Sub<T> for Term {
    type Output = Expression;

    fn sub(self, rhs: T) -> Expression { Expression::from(self).subtract(rhs) }
}

impl<T: Into<Summand>> Add<T> for Expression {
    type Output = Expression;

    fn add(self, rhs: T) -> Expression { Expression::add(self, rhs) }
}

impl<T: Into<Summand>> Sub<T> for Expression {
    type Output = Expression;

    fn sub(self, rhs: T) -> Expression { Expression::subtract(self, rhs) }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frac(numer: i64, denom: i64) -> Fraction {
        Fraction::new(numer, denom).unwrap()
    }

    #[test]
    fn terms_combine_exactly_when_their_variables_match() {
        let x = Term::from(Variable::named("x"));
        let two_x = Term::new(frac(2, 1), Variable::named("x"));
        let y = Term::from(Variable::named("y"));
        let five = Term::constant(frac(5, 1));

        assert!(x.can_combine_with(&two_x));
        assert!(!x.can_combine_with(&y));
        assert!(!x.can_combine_with(&five));
        assert!(five.can_combine_with(&Term::constant(frac(1, 2))));
    }

    #[test]
    fn adding_a_combinable_term_merges_coefficients() {
        let expr = Expression::new()
            .add(Term::new(frac(2, 1), Variable::named("x")))
            .add(Term::new(frac(3, 1), Variable::named("x")));

        assert_eq!(expr.terms().len(), 1);
        assert_eq!(expr.terms()[0].coefficient(), frac(5, 1));
    }

    #[test]
    fn a_merge_that_cancels_drops_the_term() {
        let expr = Expression::new()
            .add(Term::new(frac(2, 1), Variable::named("x")))
            .subtract(Term::new(frac(2, 1), Variable::named("x")));

        assert!(expr.terms().is_empty());
        assert_eq!(expr.to_string(), "0");
    }

    #[test]
    fn terms_keep_their_insertion_order() {
        let expr = Expression::new()
            .add(Variable::named("y"))
            .add(Variable::named("x"))
            .add(5);

        assert_eq!(expr.to_string(), "y + x + 5");
    }

    #[test]
    fn constants_fold_into_the_standalone_slot() {
        let expr = Expression::new()
            .add(frac(1, 3))
            .add(2)
            .subtract(frac(1, 3));

        assert!(expr.terms().is_empty());
        assert_eq!(expr.constant(), frac(6, 3));
    }

    #[test]
    fn a_variable_less_term_lands_in_the_constant_slot() {
        let expr = Expression::new().add(Term::constant(frac(5, 1)));

        assert!(expr.terms().is_empty());
        assert_eq!(expr.constant(), frac(5, 1));
    }

    #[test]
    fn adding_an_expression_applies_it_term_by_term() {
        let left = Expression::new()
            .add(Term::new(frac(2, 1), Variable::named("x")))
            .add(3);
        let right = Expression::new()
            .add(Variable::named("x"))
            .add(Variable::named("y"))
            .add(1);

        let combined = left.add(right);

        assert_eq!(combined.to_string(), "3x + y + 4");
    }

    #[test]
    fn subtracting_an_expression_flips_every_sign() {
        let left = Expression::new()
            .add(Term::new(frac(2, 1), Variable::named("x")))
            .add(3);
        let right = Expression::new().add(Variable::named("x")).add(1);

        let combined = left.subtract(right);

        assert_eq!(combined.to_string(), "x + 2");
    }

    #[test]
    fn display_folds_signs_into_the_joins() {
        let x = Variable::named("x");
        let y = Variable::named("y");
        let inputs = vec![
            (frac(2, 1) * x.clone() + 3, "2x + 3"),
            (frac(2, 1) * x.clone() - 3, "2x - 3"),
            (frac(-1, 1) * x.clone() + 1, "-x + 1"),
            (frac(1, 1) * x.clone() - (frac(1, 1) * y.clone()), "x - y"),
            (frac(1, 2) * x.clone() + frac(4, 2), "1/2x + 4/2"),
        ];

        for (expr, should_be) in inputs {
            assert_eq!(expr.to_string(), should_be);
        }
    }

    #[test]
    fn latex_rendering_uses_the_fraction_macro() {
        let x = Variable::named("x");
        let expr = frac(1, 2) * x.clone() - 3;

        assert_eq!(expr.tex(), "\\frac{1}{2}x - 3");
        assert_eq!((frac(-1, 1) * x).tex(), "-x");
    }

    #[test]
    fn divide_scales_every_part_without_reducing() {
        let divided = (frac(2, 1) * Variable::named("x") + 4)
            .divide(2)
            .unwrap();

        assert_eq!(divided.terms()[0].coefficient(), frac(2, 2));
        assert_eq!(divided.constant(), frac(4, 2));
        assert_eq!(divided.to_string(), "2/2x + 4/2");
    }

    #[test]
    fn dividing_by_zero_is_undefined() {
        let expr = frac(2, 1) * Variable::named("x") + 4;

        assert_eq!(expr.clone().divide(0), None);
        assert_eq!(expr.divide(frac(0, 5)), None);
    }

    #[test]
    fn has_variable_only_looks_at_the_terms() {
        let expr = Expression::new().add(Variable::named("x")).add(5);

        assert!(expr.has_variable("x"));
        assert!(!expr.has_variable("y"));
        assert!(!Expression::new().add(5).has_variable("x"));
    }
}
