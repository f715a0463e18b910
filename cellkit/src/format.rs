//! Table cell values and printf-style display patterns.

use std::fmt;

/// One cell of a table row.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    Text(String),
    Int(i64),
    Float(f64),
    /// Nothing is drawn for an empty cell.
    #[default]
    Empty,
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(s) => f.write_str(s),
            CellValue::Int(n) => write!(f, "{n}"),
            CellValue::Float(n) => write!(f, "{n}"),
            CellValue::Empty => Ok(()),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<i64> for CellValue {
    fn from(n: i64) -> Self {
        CellValue::Int(n)
    }
}

impl From<i32> for CellValue {
    fn from(n: i32) -> Self {
        CellValue::Int(n.into())
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Float(n)
    }
}

/// A parsed `%[-][0][width][.precision]verb` directive.
#[derive(Debug, Clone, Copy, Default)]
struct Directive {
    left: bool,
    zero: bool,
    width: Option<usize>,
    precision: Option<usize>,
    verb: char,
}

/// Render `value` through a printf-style `pattern`.
///
/// Supported verbs are `s`, `d`, `f` and `v`; `%%` is a literal percent.
/// A verb that does not fit the value's type falls back to its natural
/// display. `None` formats like `%v`.
pub fn format_value(pattern: Option<&str>, value: &CellValue) -> String {
    if let CellValue::Empty = value {
        return String::new();
    }
    let Some(pattern) = pattern else {
        return value.to_string();
    };

    let mut out = String::with_capacity(pattern.len() + 8);
    let mut chars = pattern.char_indices().peekable();

    while let Some((start, ch)) = chars.next() {
        if ch != '%' {
            out.push(ch);
            continue;
        }
        if next_is(&mut chars, '%') {
            chars.next();
            out.push('%');
            continue;
        }

        let mut directive = Directive::default();
        while let Some(&(_, flag)) = chars.peek() {
            match flag {
                '-' => directive.left = true,
                '0' => directive.zero = true,
                _ => break,
            }
            chars.next();
        }
        directive.width = take_number(&mut chars);
        if next_is(&mut chars, '.') {
            chars.next();
            directive.precision = Some(take_number(&mut chars).unwrap_or(0));
        }
        match chars.next() {
            Some((_, verb)) => {
                directive.verb = verb;
                out.push_str(&apply(directive, value));
            }
            // Unfinished directive at the end of the pattern is kept verbatim.
            None => out.push_str(&pattern[start..]),
        }
    }

    out
}

type PatternChars<'a> = std::iter::Peekable<std::str::CharIndices<'a>>;

fn next_is(chars: &mut PatternChars<'_>, want: char) -> bool {
    matches!(chars.peek(), Some(&(_, c)) if c == want)
}

fn take_number(chars: &mut PatternChars<'_>) -> Option<usize> {
    let mut digits = String::new();
    while let Some(&(_, c)) = chars.peek() {
        if !c.is_ascii_digit() {
            break;
        }
        digits.push(c);
        chars.next();
    }
    digits.parse().ok()
}

fn apply(directive: Directive, value: &CellValue) -> String {
    let body = match (directive.verb, value) {
        ('s', CellValue::Text(s)) => match directive.precision {
            Some(p) => s.chars().take(p).collect(),
            None => s.clone(),
        },
        ('d', CellValue::Int(n)) => n.to_string(),
        ('f', CellValue::Float(n)) => format!("{:.*}", directive.precision.unwrap_or(6), n),
        ('f', CellValue::Int(n)) => format!("{:.*}", directive.precision.unwrap_or(6), *n as f64),
        _ => value.to_string(),
    };
    let numeric = matches!(value, CellValue::Int(_) | CellValue::Float(_));
    pad(body, directive, numeric)
}

fn pad(body: String, directive: Directive, numeric: bool) -> String {
    let Some(width) = directive.width else {
        return body;
    };
    let len = body.chars().count();
    if len >= width {
        return body;
    }
    let fill = width - len;

    if directive.left {
        return format!("{body}{}", " ".repeat(fill));
    }
    if directive.zero && numeric {
        // Zeros go after the sign.
        return match body.strip_prefix('-') {
            Some(digits) => format!("-{}{digits}", "0".repeat(fill)),
            None => format!("{}{body}", "0".repeat(fill)),
        };
    }
    format!("{}{body}", " ".repeat(fill))
}
