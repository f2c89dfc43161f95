use std::str::FromStr;

use num_bigint::{BigInt, BigUint};
use num_rational::BigRational;
use num_traits::Zero;
use smtkit_smtlib::Constant;
use smtkit_smtlib::literal::rational_from_decimal;

use crate::error::SolverError;
use crate::model::{Model, ModelValue};
use crate::result::SolverResult;

/// Parse solver stdout into a `SolverResult`.
///
/// Expected output format:
/// - First line: `sat`, `unsat`, `unknown`, or `timeout`
/// - If `sat`: subsequent lines contain the model from `(get-model)`
pub fn parse_solver_output(stdout: &str, stderr: &str) -> Result<SolverResult, SolverError> {
    let stdout = stdout.trim();

    if stdout.is_empty() {
        if stderr.contains("timeout") {
            return Ok(SolverResult::Unknown("timeout".to_string()));
        }
        return Err(SolverError::ParseError(format!(
            "Empty solver output. stderr: {stderr}"
        )));
    }

    let first_line = stdout
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or("");

    match first_line {
        "unsat" => Ok(SolverResult::Unsat),
        "sat" => Ok(SolverResult::Sat(parse_model(stdout))),
        "unknown" => Ok(SolverResult::Unknown(extract_unknown_reason(stdout, stderr))),
        "timeout" => Ok(SolverResult::Unknown("timeout".to_string())),
        _ => Err(SolverError::ParseError(format!(
            "Unexpected solver output: {first_line}"
        ))),
    }
}

/// Extract the reason string for an "unknown" result.
fn extract_unknown_reason(stdout: &str, stderr: &str) -> String {
    // Z3 sometimes prints the reason after "unknown"
    let after_unknown = stdout
        .lines()
        .skip_while(|line| line.trim() != "unknown")
        .skip(1)
        .map(str::trim)
        .find(|line| !line.is_empty());

    if let Some(reason) = after_unknown {
        reason
            .trim_start_matches('(')
            .trim_end_matches(')')
            .to_string()
    } else if !stderr.is_empty() {
        stderr.trim().to_string()
    } else {
        "unknown".to_string()
    }
}

/// Parse a model from solver output.
///
/// Two layouts are accepted:
///
/// ```text
/// (
///   (define-fun x () Int
///     5)
/// )
/// ```
///
/// and the older
///
/// ```text
/// (model
///   (define-fun x () Int 5)
/// )
/// ```
///
/// Only nullary `define-fun` entries (declared constants) are read.
fn parse_model(output: &str) -> Option<Model> {
    if !output.contains("(define-fun ") {
        return None;
    }

    let model_text = find_model_block(output);
    let mut assignments = Vec::new();
    let mut pos = 0;

    while let Some(def_pos) = model_text[pos..].find("(define-fun ") {
        let abs_pos = pos + def_pos;
        let after_define = abs_pos + "(define-fun ".len();

        let Some(end) = find_sexp_end(model_text, abs_pos) else {
            break;
        };
        // `end` points after the closing ')'
        let body = &model_text[after_define..end - 1];
        if let Some((name, sort, value)) = parse_define_fun(body) {
            let decoded = decode_value(&sort, &value);
            if matches!(decoded, ModelValue::Raw(_)) {
                tracing::debug!(%name, %sort, %value, "Keeping undecoded model value");
            }
            assignments.push((name, decoded));
        }
        pos = end;
    }

    if assignments.is_empty() {
        None
    } else {
        Some(Model::with_assignments(assignments))
    }
}

/// Find the model block in the output text.
fn find_model_block(output: &str) -> &str {
    if let Some(start) = output.find("(model") {
        return &output[start..];
    }

    let after_sat = output.find("sat").map(|i| &output[i + 3..]).unwrap_or("");
    let trimmed = after_sat.trim();
    if trimmed.starts_with('(') {
        trimmed
    } else {
        output
    }
}

/// Find the end of an S-expression starting at `start`.
/// Returns the index AFTER the closing paren.
fn find_sexp_end(input: &str, start: usize) -> Option<usize> {
    let bytes = input.as_bytes();
    if start >= bytes.len() || bytes[start] != b'(' {
        return None;
    }

    let mut depth = 1;
    let mut i = start + 1;
    while i < bytes.len() && depth > 0 {
        match bytes[i] {
            b'(' => depth += 1,
            b')' => depth -= 1,
            _ => {}
        }
        i += 1;
    }

    if depth == 0 { Some(i) } else { None }
}

/// Parse the body of a single `define-fun` (after `(define-fun `, without
/// the closing paren) into `(name, sort, value)`.
///
/// Returns `None` for functions with parameters.
fn parse_define_fun(input: &str) -> Option<(String, String, String)> {
    let normalized: String = input.split_whitespace().collect::<Vec<_>>().join(" ");
    let input = normalized.trim();

    let name_end = input.find(char::is_whitespace)?;
    let name = input[..name_end].to_string();
    let rest = input[name_end..].trim_start();

    let rest = rest.strip_prefix("()")?.trim_start();

    let sort_end = skip_sexp(rest, 0)?;
    let sort = rest[..sort_end].to_string();
    let value = rest[sort_end..].trim().to_string();
    if value.is_empty() {
        return None;
    }
    Some((name, sort, value))
}

/// Skip one S-expression starting at `pos`.
/// Returns the position after the S-expression.
fn skip_sexp(input: &str, pos: usize) -> Option<usize> {
    let bytes = input.as_bytes();
    if pos >= bytes.len() {
        return None;
    }

    if bytes[pos] == b'(' {
        find_sexp_end(input, pos)
    } else {
        let mut i = pos;
        while i < bytes.len()
            && !bytes[i].is_ascii_whitespace()
            && bytes[i] != b'('
            && bytes[i] != b')'
        {
            i += 1;
        }
        Some(i)
    }
}

// ---------------------------------------------------------------------------
// Value decoding
// ---------------------------------------------------------------------------

/// Decode a model value printed for a constant of sort `sort`.
pub(crate) fn decode_value(sort: &str, value: &str) -> ModelValue {
    decode_constant(sort, value)
        .map(ModelValue::Constant)
        .unwrap_or_else(|| ModelValue::Raw(value.to_string()))
}

fn decode_constant(sort: &str, value: &str) -> Option<Constant> {
    match sort {
        "Int" => decode_int(value).map(Constant::Int),
        "Real" => decode_real(value).map(Constant::Real),
        "Bool" => match value {
            "true" => Some(Constant::Bool(true)),
            "false" => Some(Constant::Bool(false)),
            _ => None,
        },
        _ => decode_bitvec(value, bitvec_width(sort)?),
    }
}

/// Arguments of `(head args...)`, split into top-level S-expressions.
fn call_args<'a>(text: &'a str, head: &str) -> Option<Vec<&'a str>> {
    let inner = text.strip_prefix('(')?.strip_suffix(')')?.trim();
    let rest = inner.strip_prefix(head)?;
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }

    let mut args = Vec::new();
    let mut pos = 0;
    let bytes = rest.as_bytes();
    loop {
        while pos < bytes.len() && bytes[pos].is_ascii_whitespace() {
            pos += 1;
        }
        if pos >= bytes.len() {
            break;
        }
        let end = skip_sexp(rest, pos)?;
        if end == pos {
            return None;
        }
        args.push(&rest[pos..end]);
        pos = end;
    }
    Some(args)
}

fn decode_int(value: &str) -> Option<BigInt> {
    if let Some(args) = call_args(value, "-") {
        let [operand] = args.as_slice() else {
            return None;
        };
        return decode_int(operand).map(|n| -n);
    }
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    BigInt::from_str(value).ok()
}

fn decode_real(value: &str) -> Option<BigRational> {
    if let Some(args) = call_args(value, "-") {
        let [operand] = args.as_slice() else {
            return None;
        };
        return decode_real(operand).map(|r| -r);
    }
    if let Some(args) = call_args(value, "/") {
        let [numer, denom] = args.as_slice() else {
            return None;
        };
        let denom = decode_real(denom)?;
        if denom.is_zero() {
            return None;
        }
        return Some(decode_real(numer)? / denom);
    }
    if value.starts_with('-') {
        return None;
    }
    rational_from_decimal(value)
}

/// Width of a `(_ BitVec w)` sort.
fn bitvec_width(sort: &str) -> Option<u32> {
    let args = call_args(sort, "_")?;
    match args.as_slice() {
        ["BitVec", width] => width.parse().ok(),
        _ => None,
    }
}

fn decode_bitvec(value: &str, width: u32) -> Option<Constant> {
    let bits = if let Some(hex) = value.strip_prefix("#x") {
        BigUint::parse_bytes(hex.as_bytes(), 16)?
    } else if let Some(bin) = value.strip_prefix("#b") {
        BigUint::parse_bytes(bin.as_bytes(), 2)?
    } else {
        let args = call_args(value, "_")?;
        let [literal, w] = args.as_slice() else {
            return None;
        };
        if w.parse::<u32>().ok()? != width {
            return None;
        }
        BigUint::from_str(literal.strip_prefix("bv")?).ok()?
    };
    if bits.bits() > u64::from(width) {
        return None;
    }
    Some(Constant::BitVec { value: bits, width })
}
