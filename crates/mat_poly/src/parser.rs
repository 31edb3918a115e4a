//! `nom` parser for expanded polynomial expressions and equations.
//!
//! Grammar (whitespace-tolerant):
//!
//! ```text
//! expression := [+|-] term ((+|-) term)*
//! term       := factor ([*] factor)*            -- `*` optional: 2x, 2*sqrt(3)*x
//! factor     := sqrt | number | variable
//! sqrt       := "sqrt" "(" [-] number ")"
//! number     := digits "." digits | "." digits | digits ["/" digits]
//! variable   := letter ["^" exponent]
//! exponent   := [-] digits | "(" [-] digits ["/" digits] ")"
//! ```
//!
//! Parsing is two-phase: the `nom` stage produces raw terms and the lowering
//! stage turns them into [`Monomial`]s, where the semantic errors live (zero
//! denominators, negative radicands, mixed variables).

use mat_num::{radical, rational, Radical, Rational};
use nom::{
    branch::alt,
    bytes::complete::{tag, take_while, take_while1},
    character::complete::{multispace0, satisfy},
    combinator::opt,
    multi::fold_many0,
    sequence::{pair, preceded},
    IResult,
};
use num_bigint::BigInt;
use num_traits::{One, Zero};

use crate::error::PolyError;
use crate::monomial::Monomial;
use crate::polynomial::{Equation, Polynomial};

// ============================================================================
// Raw parse tree
// ============================================================================

#[derive(Debug, Clone)]
enum NumberLit {
    Integer(String),
    Fraction(String, String),
    Decimal(String, String),
}

#[derive(Debug, Clone)]
enum Factor {
    Number(NumberLit),
    /// `sqrt(lit)`, sign of the radicand kept for the lowering stage to
    /// reject with a domain error.
    Sqrt(bool, NumberLit),
    Variable(String, Option<(bool, NumberLit)>),
}

#[derive(Debug, Clone)]
struct RawTerm {
    negated: bool,
    factors: Vec<Factor>,
}

impl RawTerm {
    fn negate(mut self) -> Self {
        self.negated = !self.negated;
        self
    }
}

// ============================================================================
// nom stage
// ============================================================================

fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

fn digit_error(input: &str) -> nom::Err<nom::error::Error<&str>> {
    nom::Err::Error(nom::error::Error::new(input, nom::error::ErrorKind::Digit))
}

/// `digits "." digits`, `"." digits` or `digits ["/" digits]`.
fn parse_number_lit(input: &str) -> IResult<&str, NumberLit> {
    let (rest, (int_part, maybe_frac)) = pair(
        take_while(is_digit),
        opt(pair(tag("."), take_while(is_digit))),
    )(input)?;

    if let Some((_, frac_part)) = maybe_frac {
        // Decimal point present: need digits on at least one side.
        if int_part.is_empty() && frac_part.is_empty() {
            return Err(digit_error(input));
        }
        return Ok((
            rest,
            NumberLit::Decimal(int_part.to_string(), frac_part.to_string()),
        ));
    }

    if int_part.is_empty() {
        return Err(digit_error(input));
    }

    let (rest, maybe_den) = opt(preceded(
        pair(preceded(multispace0, tag("/")), multispace0),
        take_while1(is_digit),
    ))(rest)?;
    match maybe_den {
        Some(den) => Ok((
            rest,
            NumberLit::Fraction(int_part.to_string(), den.to_string()),
        )),
        None => Ok((rest, NumberLit::Integer(int_part.to_string()))),
    }
}

fn parse_sqrt(input: &str) -> IResult<&str, Factor> {
    let (input, _) = tag("sqrt")(input)?;
    let (input, _) = multispace0(input)?;
    let (input, _) = tag("(")(input)?;
    let (input, _) = multispace0(input)?;
    let (input, sign) = opt(tag("-"))(input)?;
    let (input, _) = multispace0(input)?;
    let (input, lit) = parse_number_lit(input)?;
    let (input, _) = multispace0(input)?;
    let (input, _) = tag(")")(input)?;
    Ok((input, Factor::Sqrt(sign.is_some(), lit)))
}

/// `[-] digits` or `( [-] digits ["/" digits] )`.
fn parse_exponent(input: &str) -> IResult<&str, (bool, NumberLit)> {
    if let Ok((input, _)) = tag::<_, _, nom::error::Error<&str>>("(")(input) {
        let (input, _) = multispace0(input)?;
        let (input, sign) = opt(tag("-"))(input)?;
        let (input, _) = multispace0(input)?;
        let (input, num) = take_while1(is_digit)(input)?;
        let (input, maybe_den) = opt(preceded(
            pair(preceded(multispace0, tag("/")), multispace0),
            take_while1(is_digit),
        ))(input)?;
        let (input, _) = multispace0(input)?;
        let (input, _) = tag(")")(input)?;
        let lit = match maybe_den {
            Some(den) => NumberLit::Fraction(num.to_string(), den.to_string()),
            None => NumberLit::Integer(num.to_string()),
        };
        return Ok((input, (sign.is_some(), lit)));
    }

    let (input, sign) = opt(tag("-"))(input)?;
    let (input, num) = take_while1(is_digit)(input)?;
    Ok((input, (sign.is_some(), NumberLit::Integer(num.to_string()))))
}

fn parse_variable_factor(input: &str) -> IResult<&str, Factor> {
    let (input, name) = satisfy(|c| c.is_ascii_alphabetic())(input)?;
    let (input, exponent) = opt(preceded(
        pair(preceded(multispace0, tag("^")), multispace0),
        parse_exponent,
    ))(input)?;
    Ok((input, Factor::Variable(name.to_string(), exponent)))
}

fn parse_factor(input: &str) -> IResult<&str, Factor> {
    alt((
        parse_sqrt,
        |i| parse_number_lit(i).map(|(rest, lit)| (rest, Factor::Number(lit))),
        parse_variable_factor,
    ))(input)
}

fn parse_term(input: &str) -> IResult<&str, RawTerm> {
    let (input, first) = preceded(multispace0, parse_factor)(input)?;
    let (input, factors) = fold_many0(
        preceded(
            pair(multispace0, opt(pair(tag("*"), multispace0))),
            parse_factor,
        ),
        move || vec![first.clone()],
        |mut acc, factor| {
            acc.push(factor);
            acc
        },
    )(input)?;
    Ok((
        input,
        RawTerm {
            negated: false,
            factors,
        },
    ))
}

fn parse_expression(input: &str) -> IResult<&str, Vec<RawTerm>> {
    let (input, _) = multispace0(input)?;
    let (input, leading) = opt(alt((tag("+"), tag("-"))))(input)?;
    let (input, first) = parse_term(input)?;
    let first = if leading == Some("-") {
        first.negate()
    } else {
        first
    };
    fold_many0(
        pair(
            preceded(multispace0, alt((tag("+"), tag("-")))),
            parse_term,
        ),
        move || vec![first.clone()],
        |mut acc, (op, term)| {
            acc.push(if op == "-" { term.negate() } else { term });
            acc
        },
    )(input)
}

// ============================================================================
// Lowering stage
// ============================================================================

fn lower_digits(digits: &str) -> Result<BigInt, PolyError> {
    BigInt::parse_bytes(digits.as_bytes(), 10)
        .ok_or_else(|| PolyError::Syntax(format!("invalid number '{digits}'")))
}

fn lower_number(lit: &NumberLit) -> Result<Rational, PolyError> {
    match lit {
        NumberLit::Integer(digits) => Ok(rational::from_bigint(lower_digits(digits)?)),
        NumberLit::Fraction(num, den) => {
            Ok(rational::new(lower_digits(num)?, lower_digits(den)?)?)
        }
        NumberLit::Decimal(int_part, frac_part) => {
            Ok(rational::decimal_to_rational(int_part, frac_part)?)
        }
    }
}

fn lower_term(raw: &RawTerm) -> Result<Monomial, PolyError> {
    let mut coefficient = Radical::from_rational(Rational::one());
    let mut variable: Option<String> = None;
    let mut power = Rational::zero();

    for factor in &raw.factors {
        match factor {
            Factor::Number(lit) => {
                coefficient = coefficient.scale(&lower_number(lit)?);
            }
            Factor::Sqrt(negated, lit) => {
                let mut radicand = lower_number(lit)?;
                if *negated {
                    radicand = -radicand;
                }
                coefficient = coefficient.mul(&radical::simplify_sqrt(&radicand)?);
            }
            Factor::Variable(name, exponent) => {
                let exponent = match exponent {
                    Some((negated, lit)) => {
                        let value = lower_number(lit)?;
                        if *negated {
                            -value
                        } else {
                            value
                        }
                    }
                    None => Rational::one(),
                };
                match &variable {
                    Some(seen) if seen != name => {
                        return Err(PolyError::MultipleVariables(seen.clone(), name.clone()));
                    }
                    _ => variable = Some(name.clone()),
                }
                power += exponent;
            }
        }
    }

    if raw.negated {
        coefficient = coefficient.neg();
    }
    Ok(match &variable {
        Some(v) => Monomial::new(coefficient, v, power),
        None => Monomial::constant(coefficient),
    })
}

// ============================================================================
// Entry points
// ============================================================================

/// Parses an expanded polynomial expression such as `x^2 - 5x + 6` or
/// `2*sqrt(2)*x + 1/2`.
pub fn parse_polynomial(input: &str) -> Result<Polynomial, PolyError> {
    let (remaining, raw_terms) =
        parse_expression(input).map_err(|e| PolyError::Syntax(e.to_string()))?;
    let remaining = remaining.trim();
    if !remaining.is_empty() {
        return Err(PolyError::UnconsumedInput(remaining.to_string()));
    }
    let mut monomials = Vec::with_capacity(raw_terms.len());
    for raw in &raw_terms {
        monomials.push(lower_term(raw)?);
    }
    Polynomial::new(monomials)
}

/// Parses `lhs = rhs`; an input with no `=` is read as `input = 0`.
pub fn parse_equation(input: &str) -> Result<Equation, PolyError> {
    match input.split_once('=') {
        Some((lhs, rhs)) => {
            if rhs.contains('=') {
                return Err(PolyError::MalformedEquation);
            }
            Equation::new(parse_polynomial(lhs)?, parse_polynomial(rhs)?)
        }
        None => Equation::new(parse_polynomial(input)?, Polynomial::zero()),
    }
}
