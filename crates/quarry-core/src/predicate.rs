//! Textual product predicates.
//!
//! Supports expressions of the form: "field OP literal" where
//! OP ∈ {==, !=, <, <=, >, >=, ~}. `~` is substring containment and only
//! applies to text fields. Literals may be wrapped in double quotes.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::product::{Price, Product, ProductField};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CmpOp {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
    Contains,
}

impl CmpOp {
    /// Longest spellings first so "<=" wins over "<" at the same position.
    const SPELLINGS: [(&'static str, CmpOp); 7] = [
        ("==", CmpOp::Eq),
        ("!=", CmpOp::Ne),
        ("<=", CmpOp::Le),
        (">=", CmpOp::Ge),
        ("<", CmpOp::Lt),
        (">", CmpOp::Gt),
        ("~", CmpOp::Contains),
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CmpOp::Eq => "==",
            CmpOp::Ne => "!=",
            CmpOp::Lt => "<",
            CmpOp::Le => "<=",
            CmpOp::Gt => ">",
            CmpOp::Ge => ">=",
            CmpOp::Contains => "~",
        }
    }

    fn holds(&self, ord: Ordering) -> bool {
        match self {
            CmpOp::Eq => ord == Ordering::Equal,
            CmpOp::Ne => ord != Ordering::Equal,
            CmpOp::Lt => ord == Ordering::Less,
            CmpOp::Le => ord != Ordering::Greater,
            CmpOp::Gt => ord == Ordering::Greater,
            CmpOp::Ge => ord != Ordering::Less,
            // Rejected for ordered literals at parse time.
            CmpOp::Contains => false,
        }
    }
}

/// Literal typed against the field it is compared with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Literal {
    Int(u32),
    Price(Price),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldPredicate {
    pub field: ProductField,
    pub op: CmpOp,
    pub literal: Literal,
}

impl FieldPredicate {
    /// Parse a predicate like "price >= 30" or "name ~ \"Alice\"".
    pub fn parse(expr: &str) -> Result<Self> {
        let (pos, op_str, op) = find_operator(expr)
            .ok_or_else(|| Error::Predicate(format!("unparseable predicate: {}", expr)))?;

        let field = expr[..pos].parse::<ProductField>().map_err(|e| match e {
            Error::Field(name) if name.is_empty() => {
                Error::Predicate(format!("missing field in predicate: {}", expr))
            }
            other => other,
        })?;
        let raw = unquote(expr[pos + op_str.len()..].trim());

        let literal = match field {
            ProductField::Id | ProductField::Stock => {
                let v = raw.parse::<u32>().map_err(|_| {
                    Error::Predicate(format!("cannot parse '{}' as integer for {}", raw, field))
                })?;
                Literal::Int(v)
            }
            ProductField::Price => {
                let v = raw.parse::<Price>().map_err(|e| {
                    Error::Predicate(format!("cannot parse '{}' as price: {}", raw, e))
                })?;
                Literal::Price(v)
            }
            ProductField::Name | ProductField::Category => Literal::Text(raw.to_string()),
        };

        if op == CmpOp::Contains && !matches!(literal, Literal::Text(_)) {
            return Err(Error::Predicate(format!(
                "unsupported op '~' for numeric field {}",
                field
            )));
        }

        Ok(Self { field, op, literal })
    }

    pub fn matches(&self, product: &Product) -> bool {
        match (&self.literal, self.field) {
            (Literal::Int(lit), ProductField::Id) => self.op.holds(product.id.cmp(lit)),
            (Literal::Int(lit), ProductField::Stock) => self.op.holds(product.stock.cmp(lit)),
            (Literal::Price(lit), ProductField::Price) => self.op.holds(product.price.cmp(lit)),
            (Literal::Text(lit), ProductField::Name) => compare_text(&product.name, self.op, lit),
            (Literal::Text(lit), ProductField::Category) => {
                compare_text(&product.category, self.op, lit)
            }
            // Only reachable for hand-built predicates with a mistyped literal.
            _ => false,
        }
    }
}

impl FromStr for FieldPredicate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for FieldPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.literal {
            Literal::Int(v) => write!(f, "{} {} {}", self.field, self.op.as_str(), v),
            Literal::Price(v) => write!(f, "{} {} {}", self.field, self.op.as_str(), v),
            Literal::Text(v) => write!(f, "{} {} \"{}\"", self.field, self.op.as_str(), v),
        }
    }
}

/// Conjunction of predicates. An empty set matches everything.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PredicateSet {
    pub predicates: Vec<FieldPredicate>,
}

impl PredicateSet {
    pub fn parse_all<I, S>(exprs: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let predicates = exprs
            .into_iter()
            .map(|e| FieldPredicate::parse(e.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { predicates })
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    pub fn matches(&self, product: &Product) -> bool {
        self.predicates.iter().all(|p| p.matches(product))
    }
}

/// Leftmost operator in `expr`, preferring the longest spelling at that position.
fn find_operator(expr: &str) -> Option<(usize, &'static str, CmpOp)> {
    let mut best: Option<(usize, &'static str, CmpOp)> = None;
    for (spelling, op) in CmpOp::SPELLINGS {
        if let Some(pos) = expr.find(spelling) {
            let better = match best {
                None => true,
                Some((bpos, bspell, _)) => {
                    pos < bpos || (pos == bpos && spelling.len() > bspell.len())
                }
            };
            if better {
                best = Some((pos, spelling, op));
            }
        }
    }
    best
}

fn unquote(s: &str) -> &str {
    s.strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .unwrap_or(s)
}

fn compare_text(value: &str, op: CmpOp, literal: &str) -> bool {
    match op {
        CmpOp::Contains => value.contains(literal),
        _ => op.holds(value.cmp(literal)),
    }
}
