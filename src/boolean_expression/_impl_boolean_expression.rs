use super::BooleanExpression;
use super::BooleanExpression::*;
use super::_impl_parser::parse_boolean_expression;
use crate::{CubeList, CubeProblem, CubeValue};
use std::collections::BTreeSet;
use std::convert::TryFrom;
use std::fmt::{Display, Error, Formatter};

impl TryFrom<&str> for BooleanExpression {
    type Error = super::ExprParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        parse_boolean_expression(value)
    }
}

impl Display for BooleanExpression {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        match self {
            Const(value) => write!(f, "{}", if *value { 1 } else { 0 }),
            Variable(name) => write!(f, "{}", name),
            Not(inner) => write!(f, "!{}", inner),
            And(operands) => write_operands(f, operands, " & "),
            Or(operands) => write_operands(f, operands, " | "),
        }
    }
}

fn write_operands(
    f: &mut Formatter<'_>,
    operands: &[BooleanExpression],
    separator: &str,
) -> Result<(), Error> {
    write!(f, "(")?;
    for (i, operand) in operands.iter().enumerate() {
        if i > 0 {
            write!(f, "{}", separator)?;
        }
        write!(f, "{}", operand)?;
    }
    write!(f, ")")
}

impl BooleanExpression {
    /// Collect the names of all variables mentioned in the expression, sorted and
    /// without duplicates.
    pub fn variables(&self) -> Vec<String> {
        let mut names = BTreeSet::new();
        self.collect_variables(&mut names);
        names.into_iter().collect()
    }

    fn collect_variables(&self, out: &mut BTreeSet<String>) {
        match self {
            Const(_) => {}
            Variable(name) => {
                out.insert(name.clone());
            }
            Not(inner) => inner.collect_variables(out),
            And(operands) | Or(operands) => {
                for operand in operands {
                    operand.collect_variables(out);
                }
            }
        }
    }

    /// **(internal)** Push negations down to the leaves with De Morgan's laws.
    /// In the result, `Not` only ever wraps a `Variable`.
    pub(crate) fn push_negations(self, negate: bool) -> BooleanExpression {
        match self {
            Const(value) => Const(value ^ negate),
            Variable(name) => {
                if negate {
                    Not(Box::new(Variable(name)))
                } else {
                    Variable(name)
                }
            }
            Not(inner) => inner.push_negations(!negate),
            And(operands) => {
                let operands = operands
                    .into_iter()
                    .map(|o| o.push_negations(negate))
                    .collect();
                if negate {
                    Or(operands)
                } else {
                    And(operands)
                }
            }
            Or(operands) => {
                let operands = operands
                    .into_iter()
                    .map(|o| o.push_negations(negate))
                    .collect();
                if negate {
                    And(operands)
                } else {
                    Or(operands)
                }
            }
        }
    }
}

/// Methods for evaluating boolean expressions into cube lists.
impl CubeProblem {
    /// Evaluate the given `BooleanExpression` in the context of this problem.
    /// Returns `None` if the expression mentions unknown variables.
    ///
    /// Negations are first pushed to the leaves, then the cube list is built
    /// bottom-up: a literal is a single cube, conjunction is list intersection and
    /// disjunction is union followed by single-cube containment.
    pub fn safe_eval_expression(&mut self, expression: &BooleanExpression) -> Option<CubeList> {
        let pushed = expression.clone().push_negations(false);
        self.eval_pushed(&pushed)
    }

    fn eval_pushed(&mut self, expression: &BooleanExpression) -> Option<CubeList> {
        match expression {
            Const(value) => Some(if *value {
                self.universe_list()
            } else {
                self.new_list()
            }),
            Variable(name) => self.literal_list(name, CubeValue::One),
            Not(inner) => match inner.as_ref() {
                Variable(name) => self.literal_list(name, CubeValue::Zero),
                _ => unreachable!("Negations were pushed to the leaves."),
            },
            And(operands) => {
                let mut result = self.universe_list();
                for operand in operands {
                    let part = self.eval_pushed(operand)?;
                    self.intersection(&mut result, &part);
                }
                Some(result)
            }
            Or(operands) => {
                let mut result = self.new_list();
                for operand in operands {
                    let part = self.eval_pushed(operand)?;
                    result.add_all(&part);
                }
                self.single_cube_containment(&mut result);
                Some(result)
            }
        }
    }

    fn literal_list(&self, name: &str, value: CubeValue) -> Option<CubeList> {
        let var = self.var_by_name(name)?;
        let mut list = self.new_list();
        let pos = list.push_empty();
        self.set_cube_var(&mut list, pos, var, value);
        Some(list)
    }

    /// Evaluate the given `BooleanExpression` in the context of this problem.
    ///
    /// *Panics:* all mentioned variables must exist in this problem.
    pub fn eval_expression(&mut self, expression: &BooleanExpression) -> CubeList {
        self.safe_eval_expression(expression)
            .expect("Expression contains unknown variables.")
    }

    /// Parse and evaluate an expression string.
    ///
    /// *Panics:* the string must parse and all variables must exist.
    pub fn eval_expression_string(&mut self, expression: &str) -> CubeList {
        let parsed =
            parse_boolean_expression(expression).expect("Cannot parse boolean expression.");
        self.eval_expression(&parsed)
    }
}
