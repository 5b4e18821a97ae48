//! Text rendering of the Newton scheme.
//!
//! This module is strictly a formatting stage: it reads a snapshot of the
//! point set, the populated divided-difference table, the coefficient
//! list, and one evaluation, and lays them out as the classical staggered
//! tableau. It never computes mathematics and never fails.

use std::fmt;

use tabula_integers::Rational;

use crate::point::SupportPoint;
use crate::table::DividedDifferenceTable;

const HEADER_X: &str = "x";
const HEADER_F: &str = "f(x)";
const MARGIN: usize = 1;
const H_SEP: &str = "═";
const X_SEP: char = '╬';
const V_SEP: char = '║';

/// Layout knobs for the rendered scheme.
#[derive(Clone, Copy, Debug)]
pub struct SchemeConfig {
    /// Minimum width reserved for a number in the two-column point table.
    /// The effective cell width is the maximum of this and the header
    /// label lengths.
    pub number_width: usize,

    /// Field width of one divided-difference expression in the diagonal.
    /// Expressions are left-padded to this width and separated by a gap
    /// of the same width; longer expressions are kept whole and push the
    /// row wider.
    pub expr_width: usize,
}

impl Default for SchemeConfig {
    fn default() -> Self {
        Self {
            number_width: 1,
            expr_width: 25,
        }
    }
}

/// A read-only snapshot of one finished evaluation, ready to render.
pub(crate) struct SchemeReport<'a> {
    pub(crate) points: &'a [SupportPoint],
    pub(crate) table: &'a DividedDifferenceTable,
    pub(crate) coefficients: &'a [Rational],
    pub(crate) x: &'a Rational,
    pub(crate) y: &'a Rational,
    pub(crate) config: &'a SchemeConfig,
}

/// Wraps negative values in parentheses so they read unambiguously
/// inside expressions; non-negative values render bare.
fn wrapped(value: &Rational) -> String {
    if value.is_negative() {
        format!("({value})")
    } else {
        value.to_string()
    }
}

impl SchemeReport<'_> {
    fn cell_width(&self) -> usize {
        self.config
            .number_width
            .max(HEADER_X.len())
            .max(HEADER_F.len())
    }

    /// One two-column row of the point table: margins, right-aligned
    /// cells, and the vertical separator.
    fn table_entry(&self, a: &str, b: &str) -> String {
        let width = self.cell_width();
        let margin = " ".repeat(MARGIN);
        format!("{margin}{a:>width$}{margin}{V_SEP}{margin}{b:>width$}{margin}")
    }

    /// The divided-difference expression displayed at position `(k, l)`:
    /// `(<d(k+1,l)> - <d(k,l-1)>) / (<x_l>-<x_k>) = <d(k,l)>`.
    fn expression(&self, k: usize, l: usize) -> String {
        let numerator = format!(
            "{} - {}",
            wrapped(self.table.at(k + 1, l)),
            wrapped(self.table.at(k, l - 1))
        );
        let denominator = format!(
            "{}-{}",
            wrapped(&self.points[l].x),
            wrapped(&self.points[k].x)
        );
        format!("({numerator}) / ({denominator}) = {}", self.table.at(k, l))
    }

    /// The diagonal content of tableau row `r`.
    ///
    /// Row `r` starts at `k = (r - 1) / 2`; even rows are offset by one
    /// expression width and start one order higher, which produces the
    /// staggered triangular layout. Entries step `k - 1, l + 1` until
    /// either index leaves the triangle.
    fn diagonal_row(&self, r: usize) -> String {
        let n = self.points.len() - 1;
        if r == 0 || r == 2 * n {
            return String::new();
        }

        let width = self.config.expr_width;
        let mut k = (r - 1) / 2;
        let mut l = k + 1;
        let mut out = String::new();

        if r % 2 == 0 {
            l = k + 2;
            out.push_str(&" ".repeat(width));
        }

        while l <= n {
            let expr = self.expression(k, l);
            out.push_str(&format!("{expr:<width$}"));
            out.push_str(&" ".repeat(width));
            if k == 0 {
                break;
            }
            k -= 1;
            l += 1;
        }

        out.trim_end().to_owned()
    }
}

impl fmt::Display for SchemeReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Header and separator rule
        let header = self.table_entry(HEADER_X, HEADER_F);
        let half = (header.chars().count() - 1) / 2;
        writeln!(f, "{}", header.trim_end())?;
        writeln!(f, "{0}{X_SEP}{0}", H_SEP.repeat(half))?;

        // Tableau: one row per point, one gap row between each pair
        let row_count = 2 * self.points.len() - 1;
        for r in 0..row_count {
            let entry = if r % 2 == 0 {
                let p = &self.points[r / 2];
                self.table_entry(&p.x.to_string(), &p.y.to_string())
            } else {
                self.table_entry("", "")
            };
            let line = format!("{entry} {}", self.diagonal_row(r));
            writeln!(f, "{}", line.trim_end())?;
        }

        // Coefficients
        writeln!(f)?;
        for (l, a) in self.coefficients.iter().enumerate() {
            writeln!(f, "a_{l} = {a}")?;
        }

        // Polynomial in Newton form
        writeln!(f)?;
        write!(f, "P(x) = ")?;
        for (l, a) in self.coefficients.iter().enumerate() {
            if l > 0 {
                if a.is_negative() {
                    write!(f, " ")?;
                } else {
                    write!(f, " + ")?;
                }
            }
            write!(f, "{a}")?;
            for p in &self.points[..l] {
                write!(f, "(x-{})", wrapped(&p.x))?;
            }
        }
        writeln!(f)?;

        // Evaluation
        writeln!(f)?;
        writeln!(f, "P({}) = {}", self.x, self.y)
    }
}
