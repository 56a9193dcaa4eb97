// src/agent/calc.rs
//! Arithmetic for calculation requests.
//!
//! Grammar, loosest binding first:
//! ```text
//! expr    := term (('+' | '-') term)*
//! term    := unary (('*' | '/' | '%') unary)*
//! unary   := ('-' | '+') unary | power
//! power   := primary ('^' unary)?
//! primary := number | '(' expr ')'
//! ```

use crate::error::CalcError;

/// Deepest nesting of signs, exponents and parentheses the parser accepts.
pub const MAX_DEPTH: usize = 256;

/// Finds the expression in a request such as `"calculate 2 + 2?"`.
///
/// The expression starts at the first digit, `.`, `(` or `-` and runs to the end
/// of the request, minus trailing `?`, `!` and `=`.
#[must_use]
pub fn extract(request: &str) -> Option<&str> {
    let start = request.find(|c: char| c.is_ascii_digit() || matches!(c, '.' | '(' | '-'))?;
    let expr = request[start..]
        .trim_end()
        .trim_end_matches(|c: char| matches!(c, '?' | '!' | '='))
        .trim_end();
    (!expr.is_empty()).then_some(expr)
}

/// Evaluates an arithmetic expression.
///
/// # Errors
/// Returns error on malformed input, division by zero or a non-finite result.
pub fn evaluate(expr: &str) -> Result<f64, CalcError> {
    let tokens = tokenize(expr)?;
    let mut parser = Parser {
        tokens,
        pos: 0,
        depth: 0,
    };
    let value = parser.expr()?;
    match parser.peek() {
        None => {}
        Some(Token::Close) => return Err(CalcError::Unbalanced),
        Some(_) => return Err(CalcError::TrailingInput),
    }
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalcError::NotFinite)
    }
}

/// Renders a result without a trailing `.0` for whole numbers.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        let text = format!("{value:.10}");
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Token {
    Num(f64),
    Op(char),
    Open,
    Close,
}

fn tokenize(expr: &str) -> Result<Vec<Token>, CalcError> {
    let mut tokens = Vec::new();
    let mut chars = expr.char_indices().peekable();

    while let Some(&(position, c)) = chars.peek() {
        match c {
            c if c.is_whitespace() => {
                chars.next();
            }
            '0'..='9' | '.' => {
                let mut literal = String::new();
                while let Some(&(_, d)) = chars.peek() {
                    if !(d.is_ascii_digit() || d == '.') {
                        break;
                    }
                    literal.push(d);
                    chars.next();
                }
                let value = literal
                    .parse::<f64>()
                    .map_err(|_| CalcError::InvalidNumber(literal.clone()))?;
                tokens.push(Token::Num(value));
            }
            '+' | '-' | '*' | '/' | '%' | '^' => {
                tokens.push(Token::Op(c));
                chars.next();
            }
            '(' => {
                tokens.push(Token::Open);
                chars.next();
            }
            ')' => {
                tokens.push(Token::Close);
                chars.next();
            }
            found => return Err(CalcError::UnexpectedChar { found, position }),
        }
    }

    if tokens.is_empty() {
        return Err(CalcError::NoExpression);
    }
    Ok(tokens)
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    depth: usize,
}

impl Parser {
    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.pos).copied()
    }

    fn next(&mut self) -> Option<Token> {
        let token = self.peek();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn eat_op(&mut self, ops: &[char]) -> Option<char> {
        match self.peek() {
            Some(Token::Op(op)) if ops.contains(&op) => {
                self.pos += 1;
                Some(op)
            }
            _ => None,
        }
    }

    fn expr(&mut self) -> Result<f64, CalcError> {
        let mut value = self.term()?;
        while let Some(op) = self.eat_op(&['+', '-']) {
            let rhs = self.term()?;
            value = if op == '+' { value + rhs } else { value - rhs };
        }
        Ok(value)
    }

    fn term(&mut self) -> Result<f64, CalcError> {
        let mut value = self.unary()?;
        while let Some(op) = self.eat_op(&['*', '/', '%']) {
            let rhs = self.unary()?;
            value = match op {
                '*' => value * rhs,
                _ if rhs == 0.0 => return Err(CalcError::DivisionByZero),
                '/' => value / rhs,
                _ => value % rhs,
            };
        }
        Ok(value)
    }

    // Every nested construct passes through here, so this bounds the recursion.
    fn unary(&mut self) -> Result<f64, CalcError> {
        if self.depth == MAX_DEPTH {
            return Err(CalcError::TooDeep);
        }
        self.depth += 1;
        let value = self.signed();
        self.depth -= 1;
        value
    }

    fn signed(&mut self) -> Result<f64, CalcError> {
        match self.eat_op(&['-', '+']) {
            Some('-') => Ok(-self.unary()?),
            Some(_) => self.unary(),
            None => self.power(),
        }
    }

    fn power(&mut self) -> Result<f64, CalcError> {
        let base = self.primary()?;
        if self.eat_op(&['^']).is_some() {
            let exponent = self.unary()?;
            return Ok(base.powf(exponent));
        }
        Ok(base)
    }

    fn primary(&mut self) -> Result<f64, CalcError> {
        match self.next() {
            Some(Token::Num(value)) => Ok(value),
            Some(Token::Open) => {
                let value = self.expr()?;
                match self.next() {
                    Some(Token::Close) => Ok(value),
                    _ => Err(CalcError::Unbalanced),
                }
            }
            Some(Token::Close) => Err(CalcError::Unbalanced),
            Some(Token::Op(_)) | None => Err(CalcError::UnexpectedEnd),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn precedence_and_grouping() {
        assert_eq!(evaluate("2+2"), Ok(4.0));
        assert_eq!(evaluate("2 + 3 * 4"), Ok(14.0));
        assert_eq!(evaluate("(2 + 3) * 4"), Ok(20.0));
        assert_eq!(evaluate("12 * (3 + 4)"), Ok(84.0));
        assert_eq!(evaluate("2 ^ 3 ^ 2"), Ok(512.0));
        assert_eq!(evaluate("-2 ^ 2"), Ok(-4.0));
        assert_eq!(evaluate("7 % 4"), Ok(3.0));
        assert_eq!(evaluate("1.5 * 2"), Ok(3.0));
    }

    #[test]
    fn malformed_expressions() {
        assert_eq!(evaluate("1 / 0"), Err(CalcError::DivisionByZero));
        assert_eq!(evaluate("(1 + 2"), Err(CalcError::Unbalanced));
        assert_eq!(evaluate("1 + 2)"), Err(CalcError::Unbalanced));
        assert_eq!(evaluate("1 +"), Err(CalcError::UnexpectedEnd));
        assert_eq!(evaluate("1..2"), Err(CalcError::InvalidNumber("1..2".into())));
        assert_eq!(
            evaluate("2 x 3"),
            Err(CalcError::UnexpectedChar { found: 'x', position: 2 })
        );
    }

    #[test]
    fn deep_nesting_is_rejected() {
        let signs = format!("{}1", "-".repeat(200_000));
        assert_eq!(evaluate(&signs), Err(CalcError::TooDeep));

        let parens = format!("{}1{}", "(".repeat(100_000), ")".repeat(100_000));
        assert_eq!(evaluate(&parens), Err(CalcError::TooDeep));

        let powers = format!("2{}", "^1".repeat(100_000));
        assert_eq!(evaluate(&powers), Err(CalcError::TooDeep));

        let nested = format!("{}7{}", "(".repeat(50), ")".repeat(50));
        assert_eq!(evaluate(&nested), Ok(7.0));
        assert_eq!(evaluate("--3"), Ok(3.0));
    }

    #[test]
    fn extracts_from_request_text() {
        assert_eq!(extract("calculate 2+2"), Some("2+2"));
        assert_eq!(extract("Compute (3 + 4) * 2?"), Some("(3 + 4) * 2"));
        assert_eq!(extract("what is 10 / 4 ="), Some("10 / 4"));
        assert_eq!(extract("calculate the sum"), None);
    }

    #[test]
    fn whole_numbers_print_without_fraction() {
        assert_eq!(format_number(4.0), "4");
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(-0.125), "-0.125");
        assert_eq!(format_number(1.0 / 3.0), "0.3333333333");
    }
}
