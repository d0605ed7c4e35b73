// Copyright 2026 the Almanac Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! CLDR plural rule compilation.
//!
//! A locale's plural rules are a sequence of `(category, condition)` pairs over
//! an implicit count `n`; the first condition that matches wins and `other` is
//! the implicit catch-all. This module parses the CLDR rule grammar (both the
//! current `i = 1 and v = 0` spelling and the legacy `n mod 10 is 1` / `n in
//! 2..4` / `n within 0..2` one) into a small AST, and drives two consumers off
//! that single AST: an evaluator used by tests, and a renderer that emits the
//! `if`/`else if` chain written into each generated `locale.rs`.
//!
//! Two quirks of the grammar are load-bearing:
//!
//! - The operands `v`, `w`, `f` and `t` describe visible or significant
//!   fraction digits. The generated selectors take a bare count with no
//!   formatting context, so those operands compile to the constant `0.0`.
//! - A range test (`n = 2..4`, `n in 2..4`) only matches integral counts, so
//!   the compiled condition guards the compared expression with a truncation
//!   self-equality check before the range membership test. `within` is the one
//!   legacy relation that genuinely accepts fractional counts and skips the
//!   guard.

use core::fmt;

use almanac_data::PluralCategory;

/// One operand expression: a variable, optionally reduced modulo a constant.
#[derive(Clone, Debug, PartialEq, Eq)]
struct Operand {
    var: Var,
    modulo: Option<u64>,
}

/// The variables the rule grammar can mention.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Var {
    /// The absolute count, fractional part included.
    N,
    /// The integer part of the count.
    I,
    /// Fraction-digit operands (`v`, `w`, `f`, `t`): always zero here.
    Zero,
}

/// One entry in a relation's range list.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum RangeItem {
    Value(u64),
    Span(u64, u64),
}

/// A comparison of an operand against a range list.
#[derive(Clone, Debug, PartialEq, Eq)]
struct Relation {
    operand: Operand,
    /// Negated relations (`!=`, `is not`, `not in`, `not within`).
    negated: bool,
    /// Whether the match requires an integral compared value.
    integer_only: bool,
    ranges: Vec<RangeItem>,
}

/// A parsed rule condition.
#[derive(Clone, Debug, PartialEq, Eq)]
enum Expr {
    /// `or`-joined alternatives, each an `and`-joined run of relations.
    Or(Vec<Expr>),
    And(Vec<Expr>),
    Relation(Relation),
}

/// The ordered, compiled rules of one locale and one rule kind.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Rules {
    rules: Vec<(PluralCategory, Expr)>,
}

impl Rules {
    /// Compiles raw `(category, rule text)` pairs in source order.
    ///
    /// Each rule's `@integer`/`@decimal` sample suffix is stripped first. A
    /// rule whose condition is then empty is the implicit catch-all and
    /// compiles to nothing, as does the `other` category itself.
    pub fn parse(raw: &[(String, String)]) -> Result<Self, PluralError> {
        let mut rules = Vec::new();
        for (tag, text) in raw {
            let condition = text.split('@').next().unwrap_or_default().trim();
            if condition.is_empty() {
                continue;
            }
            let category = category_from_tag(tag)?;
            if category == PluralCategory::Other {
                continue;
            }
            rules.push((category, parse_condition(condition)?));
        }
        Ok(Self { rules })
    }

    /// True if only the implicit catch-all remains.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Selects the category for a count: first matching rule wins, else
    /// `Other`.
    pub fn select(&self, n: f64) -> PluralCategory {
        self.rules
            .iter()
            .find(|(_, expr)| expr.eval(n))
            .map_or(PluralCategory::Other, |(category, _)| *category)
    }

    /// Renders the selector as a Rust function named `name`.
    pub fn render_fn(&self, name: &str, doc: &str) -> String {
        let mut out = String::new();
        out.push_str(&format!("/// {doc}\n"));
        if self.is_empty() {
            out.push_str(&format!(
                "pub fn {name}(_n: f64) -> PluralCategory {{\n    PluralCategory::Other\n}}\n"
            ));
            return out;
        }
        out.push_str(
            "#[allow(unused_parens, clippy::eq_op, clippy::nonminimal_bool, reason = \"compiled from CLDR rule text\")]\n",
        );
        out.push_str(&format!("pub fn {name}(n: f64) -> PluralCategory {{\n"));
        for (i, (category, expr)) in self.rules.iter().enumerate() {
            let keyword = if i == 0 { "if" } else { "} else if" };
            out.push_str(&format!("    {keyword} {} {{\n", expr.render()));
            out.push_str(&format!(
                "        PluralCategory::{}\n",
                variant_name(*category)
            ));
        }
        out.push_str("    } else {\n        PluralCategory::Other\n    }\n}\n");
        out
    }
}

/// Maps a CLDR category tag onto [`PluralCategory`].
pub fn category_from_tag(tag: &str) -> Result<PluralCategory, PluralError> {
    match tag {
        "zero" => Ok(PluralCategory::Zero),
        "one" => Ok(PluralCategory::One),
        "two" => Ok(PluralCategory::Two),
        "few" => Ok(PluralCategory::Few),
        "many" => Ok(PluralCategory::Many),
        "other" => Ok(PluralCategory::Other),
        _ => Err(PluralError::UnknownCategory(tag.to_owned())),
    }
}

fn variant_name(category: PluralCategory) -> &'static str {
    match category {
        PluralCategory::Zero => "Zero",
        PluralCategory::One => "One",
        PluralCategory::Two => "Two",
        PluralCategory::Few => "Few",
        PluralCategory::Many => "Many",
        PluralCategory::Other => "Other",
    }
}

impl Expr {
    fn eval(&self, n: f64) -> bool {
        match self {
            Self::Or(parts) => parts.iter().any(|part| part.eval(n)),
            Self::And(parts) => parts.iter().all(|part| part.eval(n)),
            Self::Relation(relation) => relation.eval(n),
        }
    }

    fn render(&self) -> String {
        match self {
            // `&&` binds tighter than `||` in Rust just as `and` binds tighter
            // than `or` in the rule grammar, so the flat join needs no parens.
            Self::Or(parts) => parts
                .iter()
                .map(Self::render)
                .collect::<Vec<_>>()
                .join(" || "),
            Self::And(parts) => parts
                .iter()
                .map(Self::render)
                .collect::<Vec<_>>()
                .join(" && "),
            Self::Relation(relation) => relation.render(),
        }
    }
}

impl Operand {
    fn eval(&self, n: f64) -> f64 {
        let base = match self.var {
            Var::N => n,
            Var::I => n.trunc(),
            Var::Zero => 0.0,
        };
        match self.modulo {
            Some(m) => base % m as f64,
            None => base,
        }
    }

    fn render(&self) -> String {
        let base = match self.var {
            Var::N => "n".to_owned(),
            Var::I => "n.trunc()".to_owned(),
            Var::Zero => "0.0".to_owned(),
        };
        match self.modulo {
            Some(m) => format!("{base} % {m}.0"),
            None => base,
        }
    }
}

impl Relation {
    fn eval(&self, n: f64) -> bool {
        let x = self.operand.eval(n);
        let matched = (!self.integer_only || x == x.trunc())
            && self.ranges.iter().any(|item| match *item {
                RangeItem::Value(v) => x == v as f64,
                RangeItem::Span(lo, hi) => (lo as f64..=hi as f64).contains(&x),
            });
        matched != self.negated
    }

    fn render(&self) -> String {
        let x = self.operand.render();
        if !self.integer_only && self.ranges.len() == 1 {
            // Simple scalar comparison; `within a..b` also lands here when the
            // list is a single span.
            let op = if self.negated { "!=" } else { "==" };
            match self.ranges[0] {
                RangeItem::Value(v) => return format!("{x} {op} {v}.0"),
                RangeItem::Span(lo, hi) => {
                    let test = format!("({lo}.0..={hi}.0).contains(&({x}))");
                    return if self.negated {
                        format!("!{test}")
                    } else {
                        test
                    };
                }
            }
        }

        let alternatives = self
            .ranges
            .iter()
            .map(|item| match *item {
                RangeItem::Value(v) => format!("{x} == {v}.0"),
                RangeItem::Span(lo, hi) => format!("({lo}.0..={hi}.0).contains(&({x}))"),
            })
            .collect::<Vec<_>>()
            .join(" || ");
        let body = if self.integer_only {
            // Range tests are only meaningful for integral counts; the
            // truncation self-equality guard keeps fractional counts out.
            format!("({x} == ({x}).trunc() && ({alternatives}))")
        } else {
            format!("({alternatives})")
        };
        if self.negated {
            format!("!{body}")
        } else {
            body
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Tok {
    Ident(String),
    Num(u64),
    Percent,
    Eq,
    Neq,
    DotDot,
    Comma,
}

fn lex(s: &str) -> Result<Vec<Tok>, PluralError> {
    let mut toks = Vec::new();
    let bytes = s.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b' ' | b'\t' => i += 1,
            b'%' => {
                toks.push(Tok::Percent);
                i += 1;
            }
            b',' => {
                toks.push(Tok::Comma);
                i += 1;
            }
            b'=' => {
                toks.push(Tok::Eq);
                i += 1;
            }
            b'!' if bytes.get(i + 1) == Some(&b'=') => {
                toks.push(Tok::Neq);
                i += 2;
            }
            b'.' if bytes.get(i + 1) == Some(&b'.') => {
                toks.push(Tok::DotDot);
                i += 2;
            }
            b'0'..=b'9' => {
                let start = i;
                while i < bytes.len() && bytes[i].is_ascii_digit() {
                    i += 1;
                }
                let num = s[start..i]
                    .parse::<u64>()
                    .map_err(|_| PluralError::Unexpected(s[start..i].to_owned()))?;
                toks.push(Tok::Num(num));
            }
            b'a'..=b'z' => {
                let start = i;
                while i < bytes.len() && bytes[i].is_ascii_lowercase() {
                    i += 1;
                }
                toks.push(Tok::Ident(s[start..i].to_owned()));
            }
            other => return Err(PluralError::Unexpected((other as char).to_string())),
        }
    }
    Ok(toks)
}

struct Parser {
    toks: Vec<Tok>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Tok> {
        self.toks.get(self.pos)
    }

    fn bump(&mut self) -> Result<Tok, PluralError> {
        let tok = self.toks.get(self.pos).cloned().ok_or(PluralError::End)?;
        self.pos += 1;
        Ok(tok)
    }

    fn eat_ident(&mut self, word: &str) -> bool {
        if matches!(self.peek(), Some(Tok::Ident(id)) if id == word) {
            self.pos += 1;
            return true;
        }
        false
    }

    fn condition(&mut self) -> Result<Expr, PluralError> {
        let mut parts = vec![self.and_condition()?];
        while self.eat_ident("or") {
            parts.push(self.and_condition()?);
        }
        Ok(if parts.len() == 1 {
            parts.pop().unwrap()
        } else {
            Expr::Or(parts)
        })
    }

    fn and_condition(&mut self) -> Result<Expr, PluralError> {
        let mut parts = vec![Expr::Relation(self.relation()?)];
        while self.eat_ident("and") {
            parts.push(Expr::Relation(self.relation()?));
        }
        Ok(if parts.len() == 1 {
            parts.pop().unwrap()
        } else {
            Expr::And(parts)
        })
    }

    fn relation(&mut self) -> Result<Relation, PluralError> {
        let operand = self.operand()?;

        // Relation operator. `is [not]` takes a single value; `=`/`!=`,
        // `[not] in` and `[not] within` take a range list.
        let (negated, integer_only) = match self.bump()? {
            Tok::Eq => (false, true),
            Tok::Neq => (true, true),
            Tok::Ident(id) if id == "is" => (self.eat_ident("not"), false),
            Tok::Ident(id) if id == "in" => (false, true),
            Tok::Ident(id) if id == "within" => (false, false),
            Tok::Ident(id) if id == "not" => match self.bump()? {
                Tok::Ident(id) if id == "in" => (true, true),
                Tok::Ident(id) if id == "within" => (true, false),
                tok => return Err(PluralError::unexpected_tok(&tok)),
            },
            tok => return Err(PluralError::unexpected_tok(&tok)),
        };

        let mut ranges = vec![self.range_item()?];
        while matches!(self.peek(), Some(Tok::Comma)) {
            self.pos += 1;
            ranges.push(self.range_item()?);
        }

        // The guard only matters when a span is present; scalar comparisons
        // already reject fractional counts numerically.
        let integer_only =
            integer_only && ranges.iter().any(|r| matches!(r, RangeItem::Span(..)));

        Ok(Relation {
            operand,
            negated,
            integer_only,
            ranges,
        })
    }

    fn operand(&mut self) -> Result<Operand, PluralError> {
        let var = match self.bump()? {
            Tok::Ident(id) => match id.as_str() {
                "n" => Var::N,
                "i" => Var::I,
                "v" | "w" | "f" | "t" => Var::Zero,
                _ => return Err(PluralError::UnknownOperand(id)),
            },
            tok => return Err(PluralError::unexpected_tok(&tok)),
        };
        let modulo = if matches!(self.peek(), Some(Tok::Percent)) || self.eat_mod_keyword() {
            if matches!(self.peek(), Some(Tok::Percent)) {
                self.pos += 1;
            }
            match self.bump()? {
                Tok::Num(m) => Some(m),
                tok => return Err(PluralError::unexpected_tok(&tok)),
            }
        } else {
            None
        };
        Ok(Operand { var, modulo })
    }

    fn eat_mod_keyword(&mut self) -> bool {
        self.eat_ident("mod")
    }

    fn range_item(&mut self) -> Result<RangeItem, PluralError> {
        let lo = match self.bump()? {
            Tok::Num(lo) => lo,
            tok => return Err(PluralError::unexpected_tok(&tok)),
        };
        if matches!(self.peek(), Some(Tok::DotDot)) {
            self.pos += 1;
            match self.bump()? {
                Tok::Num(hi) => Ok(RangeItem::Span(lo, hi)),
                tok => Err(PluralError::unexpected_tok(&tok)),
            }
        } else {
            Ok(RangeItem::Value(lo))
        }
    }
}

fn parse_condition(s: &str) -> Result<Expr, PluralError> {
    let mut parser = Parser {
        toks: lex(s)?,
        pos: 0,
    };
    let expr = parser.condition()?;
    if parser.pos != parser.toks.len() {
        return Err(PluralError::unexpected_tok(&parser.toks[parser.pos]));
    }
    Ok(expr)
}

/// A rule failed to lex, parse, or name a known category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PluralError {
    /// The rule mentioned an operand outside `n i v w f t`.
    UnknownOperand(String),
    /// The rule's category tag is not a CLDR plural category.
    UnknownCategory(String),
    /// The rule text contained an unexpected token.
    Unexpected(String),
    /// The rule text ended mid-expression.
    End,
}

impl PluralError {
    fn unexpected_tok(tok: &Tok) -> Self {
        let text = match tok {
            Tok::Ident(id) => id.clone(),
            Tok::Num(n) => n.to_string(),
            Tok::Percent => "%".to_owned(),
            Tok::Eq => "=".to_owned(),
            Tok::Neq => "!=".to_owned(),
            Tok::DotDot => "..".to_owned(),
            Tok::Comma => ",".to_owned(),
        };
        Self::Unexpected(text)
    }
}

impl fmt::Display for PluralError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownOperand(id) => write!(f, "unknown operand '{id}'"),
            Self::UnknownCategory(tag) => write!(f, "unknown plural category '{tag}'"),
            Self::Unexpected(text) => write!(f, "unexpected token '{text}'"),
            Self::End => f.write_str("unexpected end of rule"),
        }
    }
}

impl std::error::Error for PluralError {}
