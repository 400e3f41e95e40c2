//! A small JSON command interpreter that scripts the cube list algebra.
//!
//! A script is a top-level JSON array of command objects. Each object may carry:
//!
//!  - `cmd` — the command name,
//!  - `slot` — an integer `0..8` selecting one of nine list slots (defaults to `0`),
//!  - `bcl` — a cube list, as one newline-separated string or an array of strings,
//!  - `expr` — an infix boolean expression, an alternative way to provide a list,
//!  - `label` / `label0` — keys under which diagnostic output is recorded.
//!
//! Recognised commands:
//!
//! | `cmd` | effect |
//! |---|---|
//! | `bcl2slot` | store the argument list into the slot |
//! | `show` | dump the argument list |
//! | `intersection0` | slot 0 ← slot 0 ∩ argument; records the `empty` flag |
//! | `subtract0` | slot 0 ← slot 0 \ argument; records the `empty` flag |
//! | `equal0` | records `superset`/`subset` flags comparing slot 0 to the argument |
//! | `exchange0` | swap slot 0 with the given slot |
//! | `copy0` | copy slot 0 into the given slot |
//!
//! The argument of a command is the provided `bcl` or `expr` list, falling back to
//! the content of the selected slot. Execution is two-phase: the first pass parses
//! every expression to collect variable names and infers the problem width, the
//! second pass evaluates the commands. The result is a JSON map keyed by the
//! `label`/`label0` values; with a `label`, the `show` dump goes into the map
//! instead of the standard output.

use crate::boolean_expression::{parse_boolean_expression, BooleanExpression, ExprParseError};
use crate::{CubeList, CubeProblem};
use log::{debug, warn};
use serde_json::{json, Map, Value};
use std::collections::BTreeSet;
use std::fmt;

/// Number of cube list slots available to a script.
pub const SLOT_CNT: usize = 9;

/// Errors raised while executing a JSON command script.
#[derive(Debug)]
pub enum ScriptError {
    /// The input is not valid JSON.
    Json(serde_json::Error),
    /// The top-level JSON value is not an array of command objects.
    NotAnArray,
    /// No command provides a `bcl` or an `expr`, so the problem width is unknown.
    NoWidth,
    /// An `expr` string does not parse.
    Expr {
        /// Index of the offending command in the script array.
        index: usize,
        /// The underlying parse error.
        error: ExprParseError,
    },
    /// A command needs an explicit `bcl` or `expr` argument but has none.
    MissingOperand {
        /// Index of the offending command in the script array.
        index: usize,
        /// The command name.
        cmd: String,
    },
    /// A command reads a slot that holds no list yet.
    EmptySlot {
        /// Index of the offending command in the script array.
        index: usize,
        /// The empty slot.
        slot: usize,
    },
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptError::Json(error) => write!(f, "Cannot read script: {}", error),
            ScriptError::NotAnArray => {
                write!(f, "A script must be a JSON array of command objects.")
            }
            ScriptError::NoWidth => write!(
                f,
                "Cannot size the problem: no command provides a 'bcl' or 'expr'."
            ),
            ScriptError::Expr { index, error } => {
                write!(f, "Command {}: {}", index, error)
            }
            ScriptError::MissingOperand { index, cmd } => {
                write!(f, "Command {} ('{}') needs a 'bcl' or 'expr'.", index, cmd)
            }
            ScriptError::EmptySlot { index, slot } => {
                write!(f, "Command {} reads empty slot {}.", index, slot)
            }
        }
    }
}

impl std::error::Error for ScriptError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScriptError::Json(error) => Some(error),
            ScriptError::Expr { error, .. } => Some(error),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ScriptError {
    fn from(error: serde_json::Error) -> ScriptError {
        ScriptError::Json(error)
    }
}

/// Parse `input` as JSON and execute it as a command script.
pub fn execute_script_str(input: &str) -> Result<Map<String, Value>, ScriptError> {
    let script: Value = serde_json::from_str(input)?;
    execute_script(&script)
}

/// Execute a command script, returning the JSON output map.
pub fn execute_script(script: &Value) -> Result<Map<String, Value>, ScriptError> {
    let commands = script.as_array().ok_or(ScriptError::NotAnArray)?;

    // First pass: parse the expressions, collect their variable names and infer
    // the problem width from the first cube string.
    let mut names: BTreeSet<String> = BTreeSet::new();
    let mut expressions: Vec<Option<BooleanExpression>> = Vec::with_capacity(commands.len());
    let mut bcl_width = 0usize;
    for (index, command) in commands.iter().enumerate() {
        let object = match command.as_object() {
            Some(object) => object,
            None => {
                expressions.push(None);
                continue;
            }
        };
        if let Some(expr) = object.get("expr").and_then(Value::as_str) {
            let parsed = parse_boolean_expression(expr)
                .map_err(|error| ScriptError::Expr { index, error })?;
            names.extend(parsed.variables());
            expressions.push(Some(parsed));
        } else {
            expressions.push(None);
        }
        if bcl_width == 0 {
            if let Some(first) = first_bcl_line(object.get("bcl")) {
                bcl_width = CubeProblem::infer_var_cnt(first);
            }
        }
    }

    let width = bcl_width.max(names.len());
    if width == 0 {
        return Err(ScriptError::NoWidth);
    }
    let mut var_names: Vec<String> = names.into_iter().collect();
    let mut counter = 0;
    while var_names.len() < width {
        let candidate = format!("x_{}", counter);
        counter += 1;
        if !var_names.contains(&candidate) {
            var_names.push(candidate);
        }
    }
    let var_refs: Vec<&str> = var_names.iter().map(|s| s.as_str()).collect();
    let mut problem = CubeProblem::with_variables(&var_refs);
    debug!("script: {} commands over {} variables", commands.len(), width);

    // Second pass: evaluate.
    let mut slots: Vec<Option<CubeList>> = vec![None; SLOT_CNT];
    let mut out = Map::new();
    for (index, command) in commands.iter().enumerate() {
        let object = match command.as_object() {
            Some(object) => object,
            None => continue,
        };
        let slot = object
            .get("slot")
            .and_then(Value::as_u64)
            .map(|s| s as usize)
            .filter(|&s| s < SLOT_CNT)
            .unwrap_or(0);
        let label = object.get("label").and_then(Value::as_str);

        let provided: Option<CubeList> = match object.get("bcl") {
            Some(bcl) => Some(parse_bcl(&problem, bcl)),
            None => expressions[index].as_ref().map(|expression| {
                problem
                    .safe_eval_expression(expression)
                    .expect("Expression variables were registered in the first pass.")
            }),
        };

        let cmd = match object.get("cmd").and_then(Value::as_str) {
            Some(cmd) => cmd,
            None => {
                warn!("script: command {} has no 'cmd', skipping", index);
                continue;
            }
        };

        match cmd {
            "bcl2slot" => {
                let list = provided.ok_or_else(|| ScriptError::MissingOperand {
                    index,
                    cmd: cmd.to_string(),
                })?;
                slots[slot] = Some(list);
            }
            "show" => {
                let dump = match &provided {
                    Some(list) => problem.show(list),
                    None => {
                        let list = slots[slot]
                            .as_ref()
                            .ok_or(ScriptError::EmptySlot { index, slot })?;
                        problem.show(list)
                    }
                };
                match label {
                    Some(label) => {
                        out.insert(label.to_string(), Value::String(dump));
                    }
                    None => print!("{}", dump),
                }
            }
            "intersection0" => {
                let arg = argument(&provided, &slots, slot, index)?;
                let target = slots[0]
                    .as_mut()
                    .ok_or(ScriptError::EmptySlot { index, slot: 0 })?;
                problem.intersection(target, &arg);
                if let Some(label) = label {
                    out.insert(
                        label.to_string(),
                        json!({ "empty": target.is_function_empty() }),
                    );
                }
            }
            "subtract0" => {
                let arg = argument(&provided, &slots, slot, index)?;
                let target = slots[0]
                    .as_mut()
                    .ok_or(ScriptError::EmptySlot { index, slot: 0 })?;
                problem.subtract(target, &arg, true);
                if let Some(label) = label {
                    out.insert(
                        label.to_string(),
                        json!({ "empty": target.is_function_empty() }),
                    );
                }
            }
            "equal0" => {
                let arg = argument(&provided, &slots, slot, index)?;
                let target = slots[0]
                    .as_ref()
                    .ok_or(ScriptError::EmptySlot { index, slot: 0 })?;
                let superset = problem.is_subset(target, &arg);
                let subset = problem.is_subset(&arg, target);
                if let Some(label) = label {
                    out.insert(
                        label.to_string(),
                        json!({ "superset": superset, "subset": subset }),
                    );
                }
            }
            "exchange0" => {
                slots.swap(0, slot);
            }
            "copy0" => {
                slots[slot] = slots[0].clone();
            }
            unknown => {
                warn!("script: unknown command '{}' at {}, skipping", unknown, index);
            }
        }

        if let Some(label0) = object.get("label0").and_then(Value::as_str) {
            let dump = match &slots[0] {
                Some(list) => Value::String(problem.show(list)),
                None => Value::Null,
            };
            out.insert(label0.to_string(), dump);
        }
    }

    Ok(out)
}

/// **(internal)** The first cube line of a `bcl` value, used for width inference.
fn first_bcl_line(bcl: Option<&Value>) -> Option<&str> {
    match bcl? {
        Value::String(s) => Some(s.as_str()),
        Value::Array(items) => items.iter().find_map(Value::as_str),
        _ => None,
    }
}

/// **(internal)** Parse a `bcl` value (string or array of strings) into a list.
fn parse_bcl(problem: &CubeProblem, bcl: &Value) -> CubeList {
    let mut list = problem.new_list();
    match bcl {
        Value::String(s) => problem.add_cubes_from_str(&mut list, s),
        Value::Array(items) => {
            for item in items.iter().filter_map(Value::as_str) {
                problem.add_cubes_from_str(&mut list, item);
            }
        }
        _ => {}
    }
    list
}

/// **(internal)** The argument of a command: the provided list, or a copy of the
/// selected slot.
fn argument(
    provided: &Option<CubeList>,
    slots: &[Option<CubeList>],
    slot: usize,
    index: usize,
) -> Result<CubeList, ScriptError> {
    match provided {
        Some(list) => Ok(list.clone()),
        None => slots[slot]
            .clone()
            .ok_or(ScriptError::EmptySlot { index, slot }),
    }
}
