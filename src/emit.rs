//! LaTeX emission for the algebra types.

/// Render a value as LaTeX source.
///
/// The human-readable form of every type in this crate is its `Display`
/// implementation; `tex` is the same value typeset for a math renderer, e.g.
/// `\frac{1}{2}` instead of `1/2`.
pub trait Latex {
    fn tex(&self) -> String;
}
