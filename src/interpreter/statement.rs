//! Line tokeniser and tagged statement grammar
//!
//! Converts one trimmed source line into a [`Statement`], the
//! enumerated grammar of the supported C subset.  A tiny hand-rolled
//! scanner produces a flat [`Token`] stream first, which makes every
//! pattern whitespace-tolerant (`*p=10;` and `*p = 10 ;` classify
//! identically).
//!
//! # Match Order
//!
//! [`classify`] tries the patterns in a fixed priority order, first
//! match wins:
//!
//! 1. blank line / `//` comment → [`Statement::Skip`]
//! 2. `int x = 5;`              → [`Statement::DeclareInt`]
//! 3. `int x;`                  → [`Statement::DeclareInt`] (init 0)
//! 4. `int *p;`                 → [`Statement::DeclarePointer`]
//! 5. `p = &x;`                 → [`Statement::AssignAddress`]
//! 6. `*p = 5;`                 → [`Statement::WriteDeref`]
//! 7. `int y = *p;`             → [`Statement::DeclareFromDeref`]
//! 8. `*p = *p ± n;`            → [`Statement::PointerArith`]
//! 9. anything else             → [`ExecError::Syntax`]
//!
//! With a token stream the shapes are mutually exclusive, but the
//! match arms below are kept in grammar order so precedence stays
//! auditable.

use super::errors::ExecError;

/// Token variants produced by the line scanner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// The `int` keyword.
    KwInt,
    Ident(String),
    Number(i64),
    Star,      // *
    Amp,       // &
    Eq,        // =
    Plus,      // +
    Minus,     // -
    Semicolon, // ;
}

/// Direction of the compound pointer arithmetic pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithOp {
    Add,
    Sub,
}

impl ArithOp {
    pub fn apply(self, lhs: i64, rhs: i64) -> i64 {
        match self {
            ArithOp::Add => lhs.wrapping_add(rhs),
            ArithOp::Sub => lhs.wrapping_sub(rhs),
        }
    }

    pub fn symbol(self) -> char {
        match self {
            ArithOp::Add => '+',
            ArithOp::Sub => '-',
        }
    }
}

/// The enumerated statement grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// Blank line or `//` comment.
    Skip,
    /// `int x = 5;` or `int x;` (which default-initialises to 0).
    DeclareInt { name: String, init: Option<i64> },
    /// `int *p;` — pointer starts unset.
    DeclarePointer { name: String },
    /// `p = &x;`
    AssignAddress { pointer: String, target: String },
    /// `*p = 5;`
    WriteDeref { pointer: String, literal: i64 },
    /// `int y = *p;`
    DeclareFromDeref { name: String, pointer: String },
    /// `*p = *p ± n;` — both names are kept so the executor can reject
    /// mismatched operands.
    PointerArith {
        lhs: String,
        rhs: String,
        op: ArithOp,
        amount: i64,
    },
}

/// Scan one line into tokens.  Any character outside the subset's
/// alphabet makes the whole line a syntax error.
fn scan(line: &str) -> Result<Vec<Token>, ExecError> {
    let mut tokens = Vec::new();
    let chars: Vec<char> = line.chars().collect();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        if c.is_ascii_alphabetic() || c == '_' {
            let start = i;
            while i < chars.len() && (chars[i].is_ascii_alphanumeric() || chars[i] == '_') {
                i += 1;
            }
            let word: String = chars[start..i].iter().collect();
            tokens.push(match word.as_str() {
                "int" => Token::KwInt,
                _ => Token::Ident(word),
            });
            continue;
        }

        if c.is_ascii_digit() {
            let start = i;
            while i < chars.len() && chars[i].is_ascii_digit() {
                i += 1;
            }
            let digits: String = chars[start..i].iter().collect();
            let n = digits.parse::<i64>().map_err(|_| ExecError::Syntax {
                line: line.to_string(),
            })?;
            tokens.push(Token::Number(n));
            continue;
        }

        let token = match c {
            '*' => Token::Star,
            '&' => Token::Amp,
            '=' => Token::Eq,
            '+' => Token::Plus,
            '-' => Token::Minus,
            ';' => Token::Semicolon,
            _ => {
                return Err(ExecError::Syntax {
                    line: line.to_string(),
                })
            }
        };
        tokens.push(token);
        i += 1;
    }

    Ok(tokens)
}

/// Classify one source line against the grammar, first match wins.
///
/// Leading/trailing whitespace is insignificant; the line must be a
/// single complete statement (one trailing `;`).
pub fn classify(line: &str) -> Result<Statement, ExecError> {
    let clean = line.trim();

    // 1. Blank line or single-line comment.
    if clean.is_empty() || clean.starts_with("//") {
        return Ok(Statement::Skip);
    }

    let syntax_err = || ExecError::Syntax {
        line: clean.to_string(),
    };

    let tokens = scan(clean)?;

    use Token::*;
    let statement = match tokens.as_slice() {
        // 2. int <name> = <literal>;
        [KwInt, Ident(name), Eq, Number(n), Semicolon] => Statement::DeclareInt {
            name: name.clone(),
            init: Some(*n),
        },

        // 3. int <name>;
        [KwInt, Ident(name), Semicolon] => Statement::DeclareInt {
            name: name.clone(),
            init: None,
        },

        // 4. int *<name>;
        [KwInt, Star, Ident(name), Semicolon] => Statement::DeclarePointer { name: name.clone() },

        // 5. <name> = &<name2>;
        [Ident(pointer), Eq, Amp, Ident(target), Semicolon] => Statement::AssignAddress {
            pointer: pointer.clone(),
            target: target.clone(),
        },

        // 6. *<name> = <literal>;
        [Star, Ident(pointer), Eq, Number(n), Semicolon] => Statement::WriteDeref {
            pointer: pointer.clone(),
            literal: *n,
        },

        // 7. int <name> = *<name2>;
        [KwInt, Ident(name), Eq, Star, Ident(pointer), Semicolon] => Statement::DeclareFromDeref {
            name: name.clone(),
            pointer: pointer.clone(),
        },

        // 8. *<p> = *<p> (+|-) <literal>;
        [Star, Ident(lhs), Eq, Star, Ident(rhs), op @ (Plus | Minus), Number(n), Semicolon] => {
            Statement::PointerArith {
                lhs: lhs.clone(),
                rhs: rhs.clone(),
                op: if *op == Plus { ArithOp::Add } else { ArithOp::Sub },
                amount: *n,
            }
        }

        // 9. No pattern matched.
        _ => return Err(syntax_err()),
    };

    Ok(statement)
}
