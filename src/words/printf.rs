//! Runtime printf-style formatting of stored values.
//!
//! Values come from a words source at runtime, so `format!` cannot be used.
//! This module implements the common printf verbs over a small dynamic
//! argument type.
//!
//! # Template Syntax
//! ```text
//! %[flags][width][.precision]verb
//!
//! flags      - left-justify, + always sign, 0 zero-pad, space pad positive sign,
//!            # radix prefix (0x, 0X, 0, 0b) for integers under x X o b
//! verbs      v s q d b o x X c f F e E g G t %
//! ```
//!
//! Width and precision are capped at one million. Fractional and mantissa
//! digits past what an `f64` can carry are written as zeros.
//!
//! Mismatches never fail; they are rendered inline:
//! - wrong argument type: `%!d(string=abc)`
//! - missing argument: `%!s(MISSING)`
//! - leftover arguments: `%!(EXTRA int=1, bool=true)`
//! - `%` at the end of the template: `%!(NOVERB)`
//! - width or precision over the cap: `%!(BADWIDTH)`, `%!(BADPREC)`; the
//!   directive and its argument are consumed

use std::fmt;

/// Largest accepted width or precision.
const MAX_WIDTH: usize = 1_000_000;

/// Largest precision handed to `format!`, which rejects anything above `u16::MAX`.
const MAX_FORMAT_PRECISION: usize = u16::MAX as usize;

/// A dynamically typed formatting argument.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    Str(String),
    Int(i64),
    Uint(u64),
    Float(f64),
    Bool(bool),
    Char(char),
}

impl Arg {
    fn type_name(&self) -> &'static str {
        match self {
            Arg::Str(_) => "string",
            Arg::Int(_) => "int",
            Arg::Uint(_) => "uint",
            Arg::Float(_) => "float64",
            Arg::Bool(_) => "bool",
            Arg::Char(_) => "char",
        }
    }
}

impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arg::Str(s) => f.write_str(s),
            Arg::Int(i) => write!(f, "{i}"),
            Arg::Uint(u) => write!(f, "{u}"),
            Arg::Float(x) => f.write_str(&shortest_float(*x)),
            Arg::Bool(b) => write!(f, "{b}"),
            Arg::Char(c) => write!(f, "{c}"),
        }
    }
}

impl From<&str> for Arg {
    fn from(value: &str) -> Self {
        Arg::Str(value.to_owned())
    }
}

impl From<String> for Arg {
    fn from(value: String) -> Self {
        Arg::Str(value)
    }
}

impl From<&String> for Arg {
    fn from(value: &String) -> Self {
        Arg::Str(value.clone())
    }
}

impl From<bool> for Arg {
    fn from(value: bool) -> Self {
        Arg::Bool(value)
    }
}

impl From<char> for Arg {
    fn from(value: char) -> Self {
        Arg::Char(value)
    }
}

impl From<f32> for Arg {
    fn from(value: f32) -> Self {
        Arg::Float(f64::from(value))
    }
}

impl From<f64> for Arg {
    fn from(value: f64) -> Self {
        Arg::Float(value)
    }
}

macro_rules! arg_from_int {
    ($variant:ident, $target:ty, $($t:ty),*) => {
        $(
            impl From<$t> for Arg {
                fn from(value: $t) -> Self {
                    Arg::$variant(value as $target)
                }
            }
        )*
    };
}

arg_from_int!(Int, i64, i8, i16, i32, i64, isize);
arg_from_int!(Uint, u64, u8, u16, u32, u64, usize);

/// Flags, width and precision of one directive.
#[derive(Debug, Default, Clone, Copy)]
struct Directive {
    minus: bool,
    plus: bool,
    zero: bool,
    space: bool,
    sharp: bool,
    width: Option<usize>,
    precision: Option<usize>,
}

/// Formats `template`, substituting `args` verb by verb in order.
pub fn sprintf(template: &str, args: &[Arg]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();
    let mut next_arg = 0;

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }

        let mut directive = Directive::default();
        while let Some(&flag) = chars.peek() {
            match flag {
                '-' => directive.minus = true,
                '+' => directive.plus = true,
                '0' => directive.zero = true,
                ' ' => directive.space = true,
                '#' => directive.sharp = true,
                _ => break,
            }
            chars.next();
        }
        directive.width = read_number(&mut chars);
        if chars.peek() == Some(&'.') {
            chars.next();
            directive.precision = Some(read_number(&mut chars).unwrap_or(0));
        }

        let oversized = if directive.width.is_some_and(|w| w > MAX_WIDTH) {
            Some("%!(BADWIDTH)")
        } else if directive.precision.is_some_and(|p| p > MAX_WIDTH) {
            Some("%!(BADPREC)")
        } else {
            None
        };

        let Some(verb) = chars.next() else {
            out.push_str("%!(NOVERB)");
            break;
        };
        if let Some(marker) = oversized {
            out.push_str(marker);
            if verb != '%' && next_arg < args.len() {
                next_arg += 1;
            }
            continue;
        }
        if verb == '%' {
            out.push('%');
            continue;
        }

        match args.get(next_arg) {
            Some(arg) => {
                next_arg += 1;
                match format_arg(verb, arg, &directive) {
                    Some(text) => {
                        let offset = zero_offset(verb, arg, &text, &directive);
                        out.push_str(&pad(text, &directive, offset));
                    }
                    None => out.push_str(&format!("%!{verb}({}={arg})", arg.type_name())),
                }
            }
            None => out.push_str(&format!("%!{verb}(MISSING)")),
        }
    }

    if next_arg < args.len() {
        let extra: Vec<String> = args[next_arg..]
            .iter()
            .map(|arg| format!("{}={arg}", arg.type_name()))
            .collect();
        out.push_str(&format!("%!(EXTRA {})", extra.join(", ")));
    }
    out
}

fn read_number(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> Option<usize> {
    let mut value: Option<usize> = None;
    while let Some(digit) = chars.peek().and_then(|c| c.to_digit(10)) {
        let next = value.unwrap_or(0) * 10 + digit as usize;
        value = Some(next.min(MAX_WIDTH + 1));
        chars.next();
    }
    value
}

/// Renders one argument for one verb, or `None` when the verb does not apply.
fn format_arg(verb: char, arg: &Arg, d: &Directive) -> Option<String> {
    let text = match (verb, arg) {
        ('v', Arg::Float(x)) => signed(*x < 0.0, shortest_float(x.abs()), d),
        ('v', Arg::Int(i)) | ('d', Arg::Int(i)) => signed(*i < 0, i.unsigned_abs().to_string(), d),
        ('v', Arg::Uint(u)) | ('d', Arg::Uint(u)) => signed(false, u.to_string(), d),
        ('v', Arg::Str(s)) | ('s', Arg::Str(s)) => truncate(s, d.precision),
        ('v', Arg::Char(c)) | ('s', Arg::Char(c)) | ('c', Arg::Char(c)) => c.to_string(),
        ('v', Arg::Bool(b)) | ('t', Arg::Bool(b)) => b.to_string(),
        ('d', Arg::Char(c)) => (*c as u32).to_string(),
        ('c', Arg::Int(i)) => char::from_u32(u32::try_from(*i).ok()?)?.to_string(),
        ('c', Arg::Uint(u)) => char::from_u32(u32::try_from(*u).ok()?)?.to_string(),
        ('q', Arg::Str(s)) => format!("{s:?}"),
        ('q', Arg::Char(c)) => format!("{c:?}"),
        ('x', Arg::Str(s)) => s.bytes().map(|b| format!("{b:02x}")).collect(),
        ('X', Arg::Str(s)) => s.bytes().map(|b| format!("{b:02X}")).collect(),
        ('x' | 'X' | 'o' | 'b', Arg::Int(i)) => signed(*i < 0, radix(verb, i.unsigned_abs(), d.sharp), d),
        ('x' | 'X' | 'o' | 'b', Arg::Uint(u)) => signed(false, radix(verb, *u, d.sharp), d),
        ('f' | 'F', Arg::Float(x)) => signed(*x < 0.0, fixed(x.abs(), d.precision.unwrap_or(6)), d),
        ('e' | 'E', Arg::Float(x)) => {
            let text = exponent(x.abs(), d.precision.unwrap_or(6));
            signed(*x < 0.0, if verb == 'E' { text.to_uppercase() } else { text }, d)
        }
        ('g' | 'G', Arg::Float(x)) => {
            let text = match d.precision {
                Some(p) => general(x.abs(), p.max(1)),
                None => shortest_float(x.abs()),
            };
            signed(*x < 0.0, if verb == 'G' { text.to_uppercase() } else { text }, d)
        }
        _ => return None,
    };
    Some(text)
}

fn is_numeric(verb: char, arg: &Arg) -> bool {
    matches!(arg, Arg::Int(_) | Arg::Uint(_) | Arg::Float(_)) && !matches!(verb, 'c' | 'q')
}

fn signed(negative: bool, digits: String, d: &Directive) -> String {
    if negative {
        format!("-{digits}")
    } else if d.plus {
        format!("+{digits}")
    } else if d.space {
        format!(" {digits}")
    } else {
        digits
    }
}

/// Number of leading characters the `0` flag pads after: a sign, then a two character radix prefix.
fn zero_offset(verb: char, arg: &Arg, text: &str, d: &Directive) -> usize {
    if !is_numeric(verb, arg) {
        return 0;
    }
    let sign = usize::from(text.starts_with(['-', '+', ' ']));
    let prefix = match (verb, arg) {
        ('x' | 'X' | 'b', Arg::Int(_) | Arg::Uint(_)) if d.sharp => 2,
        _ => 0,
    };
    sign + prefix
}

fn radix(verb: char, value: u64, sharp: bool) -> String {
    match (verb, sharp) {
        ('x', false) => format!("{value:x}"),
        ('x', true) => format!("{value:#x}"),
        ('X', false) => format!("{value:X}"),
        ('X', true) => format!("0X{value:X}"),
        ('o', false) => format!("{value:o}"),
        ('o', true) if value == 0 => "0".to_owned(),
        ('o', true) => format!("0{value:o}"),
        (_, false) => format!("{value:b}"),
        (_, true) => format!("{value:#b}"),
    }
}

/// `{:.N}` for any `N` up to [`MAX_WIDTH`].
fn fixed(x: f64, precision: usize) -> String {
    let exact = precision.min(MAX_FORMAT_PRECISION);
    let mut text = format!("{:.*}", exact, x);
    text.extend(std::iter::repeat('0').take(precision - exact));
    text
}

fn truncate(s: &str, precision: Option<usize>) -> String {
    match precision {
        Some(p) => s.chars().take(p).collect(),
        None => s.to_owned(),
    }
}

/// `d.dddddde±dd`, with at least two exponent digits.
fn exponent(x: f64, precision: usize) -> String {
    let exact = precision.min(MAX_FORMAT_PRECISION);
    let raw = format!("{:.*e}", exact, x);
    let (mantissa, exp) = raw.split_once('e').unwrap_or((raw.as_str(), "0"));
    let exp: i32 = exp.parse().unwrap_or(0);
    let sign = if exp < 0 { '-' } else { '+' };
    let zeros = "0".repeat(precision - exact);
    format!("{mantissa}{zeros}e{sign}{:02}", exp.abs())
}

/// `%g` with an explicit precision: significant digits, trailing zeros removed.
fn general(x: f64, precision: usize) -> String {
    if x == 0.0 {
        return "0".to_owned();
    }
    let exp = x.abs().log10().floor() as i32;
    if exp < -4 || exp >= precision as i32 {
        let text = exponent(x, precision - 1);
        let (mantissa, tail) = text.split_once('e').unwrap_or((text.as_str(), ""));
        format!("{}e{tail}", trim_fraction(mantissa))
    } else {
        let decimals = (precision as i32 - 1 - exp).max(0) as usize;
        trim_fraction(&fixed(x, decimals)).to_owned()
    }
}

/// Shortest representation, switching to exponent form for very large or small magnitudes.
fn shortest_float(x: f64) -> String {
    if x.is_finite() && x != 0.0 {
        let exp = x.abs().log10().floor() as i32;
        if !(-4..21).contains(&exp) {
            let raw = format!("{x:e}");
            let (mantissa, exp) = raw.split_once('e').unwrap_or((raw.as_str(), "0"));
            let exp: i32 = exp.parse().unwrap_or(0);
            let sign = if exp < 0 { '-' } else { '+' };
            return format!("{mantissa}e{sign}{:02}", exp.abs());
        }
    }
    if x.is_infinite() {
        return if x > 0.0 { "+Inf".to_owned() } else { "-Inf".to_owned() };
    }
    if x.is_nan() {
        return "NaN".to_owned();
    }
    format!("{x}")
}

fn trim_fraction(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}

/// Pads `text` to the directive width; zeros go after the first `offset` characters.
fn pad(text: String, d: &Directive, offset: usize) -> String {
    let Some(width) = d.width else {
        return text;
    };
    let len = text.chars().count();
    if len >= width {
        return text;
    }
    let fill = width - len;
    if d.minus {
        format!("{text}{}", " ".repeat(fill))
    } else if d.zero {
        format!("{}{}{}", &text[..offset], "0".repeat(fill), &text[offset..])
    } else {
        format!("{}{text}", " ".repeat(fill))
    }
}
