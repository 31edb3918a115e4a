//! Line-safe text serialization for engine results.
//!
//! A record is a sequence of fields joined by `;`. Every field is escaped on
//! the way out (`\\`, `\;`, and `\n` for a literal newline), so a record
//! never spans lines and embedded separators survive. The first field is a
//! tag naming the record shape:
//!
//! ```text
//! scalar;3/2
//! vector;2;1;3/2
//! matrix;2;3;1;2;3;4;5;6          -- rows, cols, then row-major entries
//! solution;unique;2;2;2;1;-1      -- kind, ranks, variables, then payload
//! ```
//!
//! `deserialize_*(serialize_*(x))` reproduces `x` exactly; the exact-rational
//! entries make that equality literal, not approximate.

use mat_linalg::{Matrix, RankAnalysis, SolutionSet, SystemSolution, Vector};
use mat_num::{rational, Rational};

use crate::error::ApiError;
use crate::value::Value;

const SEPARATOR: char = ';';

/// Escape one field: backslash first, then the separator, then newlines.
pub fn escape(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    for c in field.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            SEPARATOR => out.push_str("\\;"),
            '\n' => out.push_str("\\n"),
            other => out.push(other),
        }
    }
    out
}

/// Invert [`escape`]. Rejects a dangling backslash and unknown escapes, so a
/// truncated record cannot silently round-trip.
pub fn unescape(field: &str) -> Result<String, ApiError> {
    let mut out = String::with_capacity(field.len());
    let mut chars = field.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('\\') => out.push('\\'),
            Some(';') => out.push(';'),
            Some('n') => out.push('\n'),
            Some(other) => {
                return Err(ApiError::Malformed(format!("unknown escape '\\{other}'")));
            }
            None => {
                return Err(ApiError::Malformed(
                    "dangling escape at end of field".to_string(),
                ));
            }
        }
    }
    Ok(out)
}

fn join_fields(fields: &[String]) -> String {
    fields
        .iter()
        .map(|f| escape(f))
        .collect::<Vec<_>>()
        .join(";")
}

/// Cursor over the unescaped fields of one record. Every accessor reports
/// truncation instead of panicking, and [`Fields::finish`] rejects leftovers.
struct Fields {
    items: Vec<String>,
    cursor: usize,
}

impl Fields {
    fn split(text: &str) -> Result<Self, ApiError> {
        let mut items = Vec::new();
        let mut current = String::new();
        let mut escaped = false;
        for c in text.chars() {
            if escaped {
                current.push('\\');
                current.push(c);
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == SEPARATOR {
                items.push(unescape(&current)?);
                current.clear();
            } else {
                current.push(c);
            }
        }
        if escaped {
            return Err(ApiError::Malformed(
                "dangling escape at end of record".to_string(),
            ));
        }
        items.push(unescape(&current)?);
        Ok(Fields { items, cursor: 0 })
    }

    fn next(&mut self, what: &str) -> Result<&str, ApiError> {
        let field = self
            .items
            .get(self.cursor)
            .ok_or_else(|| ApiError::Malformed(format!("record truncated before {what}")))?;
        self.cursor += 1;
        Ok(field)
    }

    fn next_usize(&mut self, what: &str) -> Result<usize, ApiError> {
        let field = self.next(what)?;
        field
            .parse()
            .map_err(|_| ApiError::Malformed(format!("{what} '{field}' is not a count")))
    }

    fn next_rational(&mut self, what: &str) -> Result<Rational, ApiError> {
        let field = self.next(what)?;
        rational::parse(field)
            .map_err(|_| ApiError::Malformed(format!("{what} '{field}' is not a rational")))
    }

    fn next_components(&mut self, len: usize, what: &str) -> Result<Vector, ApiError> {
        let mut components = Vec::with_capacity(len);
        for _ in 0..len {
            components.push(self.next_rational(what)?);
        }
        Ok(Vector::new(components)?)
    }

    fn finish(&self) -> Result<(), ApiError> {
        if self.cursor == self.items.len() {
            Ok(())
        } else {
            Err(ApiError::Malformed(format!(
                "{} trailing fields after record",
                self.items.len() - self.cursor
            )))
        }
    }
}

// ============================================================================
// Values
// ============================================================================

/// Render a value as one text record.
pub fn serialize_value(value: &Value) -> String {
    let mut fields = vec![value.kind().to_string()];
    match value {
        Value::Scalar(r) => fields.push(rational::format(r)),
        Value::Vector(v) => {
            fields.push(v.len().to_string());
            for c in v.components() {
                fields.push(rational::format(c));
            }
        }
        Value::Matrix(m) => {
            fields.push(m.rows().to_string());
            fields.push(m.cols().to_string());
            for i in 0..m.rows() {
                for j in 0..m.cols() {
                    if let Some(entry) = m.get(i, j) {
                        fields.push(rational::format(entry));
                    }
                }
            }
        }
    }
    join_fields(&fields)
}

/// Parse one text record back into a value.
pub fn deserialize_value(text: &str) -> Result<Value, ApiError> {
    let mut fields = Fields::split(text)?;
    let value = match fields.next("value tag")? {
        "scalar" => Value::Scalar(fields.next_rational("scalar")?),
        "vector" => {
            let len = fields.next_usize("vector length")?;
            Value::Vector(fields.next_components(len, "vector component")?)
        }
        "matrix" => {
            let rows = fields.next_usize("row count")?;
            let cols = fields.next_usize("column count")?;
            let mut data = Vec::with_capacity(rows.saturating_mul(cols));
            for _ in 0..rows.saturating_mul(cols) {
                data.push(fields.next_rational("matrix entry")?);
            }
            Value::Matrix(Matrix::new(rows, cols, data)?)
        }
        tag => {
            return Err(ApiError::Malformed(format!("unknown value tag '{tag}'")));
        }
    };
    fields.finish()?;
    Ok(value)
}

// ============================================================================
// System solutions
// ============================================================================

fn push_components(fields: &mut Vec<String>, vector: &Vector) {
    for c in vector.components() {
        fields.push(rational::format(c));
    }
}

/// Render a linear-system solution as one text record. The payload after the
/// rank fields depends on the kind: a unique solution stores its vector, an
/// infinite family stores the particular solution and every basis vector, and
/// the empty kinds store nothing.
pub fn serialize_solution(solution: &SystemSolution) -> String {
    let analysis = solution.analysis;
    let kind = match &solution.set {
        SolutionSet::Unique(_) => "unique",
        SolutionSet::Infinite { .. } => "infinite",
        SolutionSet::Inconsistent => "none",
        SolutionSet::Undetermined => "undetermined",
    };
    let mut fields = vec![
        "solution".to_string(),
        kind.to_string(),
        analysis.coefficient_rank.to_string(),
        analysis.augmented_rank.to_string(),
        analysis.variables.to_string(),
    ];
    match &solution.set {
        SolutionSet::Unique(vector) => push_components(&mut fields, vector),
        SolutionSet::Infinite { particular, basis } => {
            push_components(&mut fields, particular);
            fields.push(basis.len().to_string());
            for direction in basis {
                push_components(&mut fields, direction);
            }
        }
        SolutionSet::Inconsistent | SolutionSet::Undetermined => {}
    }
    join_fields(&fields)
}

/// Parse one text record back into a linear-system solution.
pub fn deserialize_solution(text: &str) -> Result<SystemSolution, ApiError> {
    let mut fields = Fields::split(text)?;
    let tag = fields.next("record tag")?;
    if tag != "solution" {
        return Err(ApiError::Malformed(format!(
            "expected a solution record, got tag '{tag}'"
        )));
    }
    let kind = fields.next("solution kind")?.to_string();
    let analysis = RankAnalysis {
        coefficient_rank: fields.next_usize("coefficient rank")?,
        augmented_rank: fields.next_usize("augmented rank")?,
        variables: fields.next_usize("variable count")?,
    };
    let set = match kind.as_str() {
        "unique" => SolutionSet::Unique(fields.next_components(analysis.variables, "solution component")?),
        "infinite" => {
            let particular =
                fields.next_components(analysis.variables, "particular component")?;
            let count = fields.next_usize("basis count")?;
            let mut basis = Vec::with_capacity(count);
            for _ in 0..count {
                basis.push(fields.next_components(analysis.variables, "basis component")?);
            }
            SolutionSet::Infinite { particular, basis }
        }
        "none" => SolutionSet::Inconsistent,
        "undetermined" => SolutionSet::Undetermined,
        other => {
            return Err(ApiError::Malformed(format!(
                "unknown solution kind '{other}'"
            )));
        }
    };
    fields.finish()?;
    Ok(SystemSolution { set, analysis })
}
