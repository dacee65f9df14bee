//! Scanner and tokenizer for textual sum-of-products expressions.
//!
//! The accepted grammar is one line of the form
//! `Name(V1,V2,...,Vn)=Term1+Term2+...`, with whitespace ignored everywhere, variable names
//! single uppercase letters, and each term a run of declared letters optionally prefixed by
//! the inverter character `^`.
use regex::Regex;

use crate::{error::Error, function::Function, term::Term, term::INVERTER};

/// A tokenized expression: the function name, the declared variables in order, and the raw
/// term literals.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedExpr {
    name: String,
    variables: String,
    terms: Vec<String>,
}

impl ParsedExpr {
    /// Returns the function name to the left of the declaration.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the declared variable letters, concatenated in declaration order.
    pub fn variables(&self) -> &str {
        &self.variables
    }

    /// Returns the number of declared variables, which is the width of every term.
    pub fn width(&self) -> usize {
        self.variables.len()
    }

    /// Returns the raw term literals in the order they were written.
    pub fn term_literals(&self) -> &[String] {
        &self.terms
    }

    /// Builds the function by parsing every term literal against the declared variables.
    pub fn to_function(&self) -> Result<Function, Error> {
        let mut function = Function::new();
        for literal in self.terms.iter() {
            function.push(Term::from_literal(literal, &self.variables)?);
        }
        Ok(function)
    }
}

/// Scans and tokenizes one expression line.
///
/// Fails with [`Error::EmptyExpression`] when the line is blank, with
/// [`Error::MalformedExpression`] when it does not match the grammar or declares a variable
/// twice, and with [`Error::UndeclaredVariable`] when a term uses a letter that was not
/// declared.
pub fn parse_expression(line: &str) -> Result<ParsedExpr, Error> {
    let stripped: String = line.chars().filter(|ch| !ch.is_whitespace()).collect();
    if stripped.is_empty() {
        return Err(Error::EmptyExpression);
    }

    let malformed = || Error::MalformedExpression(stripped.clone());

    let grammar = Regex::new(
        r"^([A-Za-z_-]+)\(([A-Z](?:,[A-Z])*)\)=((?:\^?[A-Z])+(?:\+(?:\^?[A-Z])+)*)$",
    )
    .expect("expression grammar is a valid regex");
    let captures = grammar.captures(&stripped).ok_or_else(malformed)?;

    let name = captures[1].to_owned();
    let variables: String = captures[2].split(',').collect();
    let terms: Vec<String> = captures[3].split('+').map(str::to_owned).collect();

    for (index, var) in variables.char_indices() {
        if variables[..index].contains(var) {
            return Err(malformed());
        }
    }

    for literal in terms.iter() {
        for ch in literal.chars() {
            if ch != INVERTER && !variables.contains(ch) {
                return Err(Error::UndeclaredVariable(ch));
            }
        }
    }

    log::debug!(
        "parsed {}({}) with {} terms",
        name,
        captures[2].to_owned(),
        terms.len()
    );

    Ok(ParsedExpr {
        name,
        variables,
        terms,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenizes_declaration_and_terms() {
        let parsed = parse_expression("F(A,B)=AB+^AB").unwrap();
        assert_eq!(parsed.name(), "F");
        assert_eq!(parsed.variables(), "AB");
        assert_eq!(parsed.width(), 2);
        assert_eq!(parsed.term_literals(), ["AB", "^AB"]);
    }

    #[test]
    fn whitespace_is_ignored() {
        let parsed = parse_expression("  my-func ( A , B , C ) = A B + ^ C ").unwrap();
        assert_eq!(parsed.name(), "my-func");
        assert_eq!(parsed.variables(), "ABC");
        assert_eq!(parsed.term_literals(), ["AB", "^C"]);
    }

    #[test]
    fn empty_input() {
        assert_eq!(parse_expression(""), Err(Error::EmptyExpression));
        assert_eq!(parse_expression("   \t"), Err(Error::EmptyExpression));
    }

    #[test]
    fn rejects_bad_grammar() {
        for line in [
            "F(A,B)",
            "F(A,B)=",
            "F()=A",
            "F(a,b)=ab",
            "(A,B)=AB",
            "F(A,B)=AB++A",
            "F(A,B)=AB+",
            "F(A,B)=A^",
            "F(A;B)=AB",
        ] {
            assert!(
                matches!(parse_expression(line), Err(Error::MalformedExpression(_))),
                "line {line:?}"
            );
        }
    }

    #[test]
    fn rejects_duplicate_declaration() {
        assert!(matches!(
            parse_expression("F(A,A)=A"),
            Err(Error::MalformedExpression(_))
        ));
    }

    #[test]
    fn rejects_undeclared_variable() {
        assert_eq!(
            parse_expression("F(A,B)=AB+C"),
            Err(Error::UndeclaredVariable('C'))
        );
    }

    #[test]
    fn function_uses_declared_order() {
        let parsed = parse_expression("F(B,A)=^B+A").unwrap();
        let function = parsed.to_function().unwrap();
        assert_eq!(function.to_string(), "0X + X1");
    }
}
