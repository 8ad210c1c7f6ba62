//! # Representing linear programs
//!
//! Programs are stated in a form that doesn't depend on any optimization backend: a list of
//! bounded variables, a list of sparse linear constraints and an objective direction. Backends in
//! the `solver` module translate this description into their own model.
use crate::data::linear_program::elements::{ConstraintType, Objective, VariableType};
use crate::data::number_types::numerical_precision::binary_rounding_error;
use crate::error::Error;

pub mod elements;

/// A (column index, value) pair of a sparse row.
pub type SparseTuple = (usize, f64);

/// A variable with its objective coefficient and domain.
#[derive(Clone, Debug, PartialEq)]
pub struct Variable {
    /// Whether the variable is integer or not.
    pub variable_type: VariableType,
    /// Coefficient in the objective function.
    pub cost: f64,
    /// If it is `None`, the variable is considered to be in (-oo, upper_bound).
    pub lower_bound: Option<f64>,
    /// If it is `None`, the variable is considered to be in (lower_bound, oo).
    pub upper_bound: Option<f64>,
}

impl Variable {
    /// A continuous variable in `[0, oo)`.
    pub fn nonnegative(cost: f64) -> Self {
        Self {
            variable_type: VariableType::Continuous,
            cost,
            lower_bound: Some(0_f64),
            upper_bound: None,
        }
    }

    /// An integer variable in `{0, 1}`.
    pub fn binary(cost: f64) -> Self {
        Self {
            variable_type: VariableType::Integer,
            cost,
            lower_bound: Some(0_f64),
            upper_bound: Some(1_f64),
        }
    }

    /// Whether this is an integer variable restricted to `{0, 1}`.
    pub fn is_binary(&self) -> bool {
        self.variable_type == VariableType::Integer
            && self.lower_bound == Some(0_f64)
            && self.upper_bound == Some(1_f64)
    }

    fn contains(&self, value: f64, tolerance: f64) -> bool {
        let above = self.lower_bound.map_or(true, |bound| value >= bound - tolerance);
        let below = self.upper_bound.map_or(true, |bound| value <= bound + tolerance);
        let integral = match self.variable_type {
            VariableType::Continuous => true,
            VariableType::Integer => (value - value.round()).abs() <= tolerance,
        };

        above && below && integral
    }
}

/// A linear (in)equality `coefficients · x (<=|==|>=) rhs`.
#[derive(Clone, Debug, PartialEq)]
pub struct Constraint {
    /// Sparse row, with at most one tuple per variable.
    pub coefficients: Vec<SparseTuple>,
    #[allow(missing_docs)]
    pub constraint_type: ConstraintType,
    #[allow(missing_docs)]
    pub rhs: f64,
}

impl Constraint {
    #[allow(missing_docs)]
    pub fn new(coefficients: Vec<SparseTuple>, constraint_type: ConstraintType, rhs: f64) -> Self {
        Self { coefficients, constraint_type, rhs }
    }

    /// Left-hand side value at a point.
    pub fn evaluate(&self, x: &[f64]) -> f64 {
        self.coefficients.iter().map(|&(j, coefficient)| coefficient * x[j]).sum()
    }

    /// Whether a left-hand side value satisfies this constraint, up to a tolerance.
    pub fn is_satisfied_by(&self, lhs: f64, tolerance: f64) -> bool {
        match self.constraint_type {
            ConstraintType::Equal => (lhs - self.rhs).abs() <= tolerance,
            ConstraintType::Greater => lhs >= self.rhs - tolerance,
            ConstraintType::Less => lhs <= self.rhs + tolerance,
        }
    }
}

/// A linear program, possibly with integer variables.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct LinearProgram {
    objective: Objective,
    variables: Vec<Variable>,
    constraints: Vec<Constraint>,
}

impl LinearProgram {
    /// Create a program without variables or constraints.
    pub fn new(objective: Objective) -> Self {
        Self { objective, variables: Vec::new(), constraints: Vec::new() }
    }

    /// Add a variable.
    ///
    /// # Return value
    ///
    /// Index of the new variable, to be used in constraints.
    pub fn push_variable(&mut self, variable: Variable) -> usize {
        self.variables.push(variable);
        self.variables.len() - 1
    }

    /// Add a constraint over previously added variables.
    pub fn push_constraint(&mut self, constraint: Constraint) -> Result<(), Error> {
        if let Some(&(j, _)) = constraint.coefficients.iter().find(|&&(j, _)| j >= self.variables.len()) {
            return Err(Error::Dimension(format!(
                "constraint refers to variable {}, but there are only {} variables",
                j, self.variables.len(),
            )));
        }

        self.constraints.push(constraint);
        Ok(())
    }

    #[allow(missing_docs)]
    pub fn objective(&self) -> Objective {
        self.objective
    }

    #[allow(missing_docs)]
    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    #[allow(missing_docs)]
    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    #[allow(missing_docs)]
    pub fn nr_variables(&self) -> usize {
        self.variables.len()
    }

    #[allow(missing_docs)]
    pub fn nr_constraints(&self) -> usize {
        self.constraints.len()
    }

    /// Whether any variable is restricted to integer values.
    pub fn has_integer_variables(&self) -> bool {
        self.variables.iter().any(|variable| variable.variable_type == VariableType::Integer)
    }

    /// Objective function value at a point.
    pub fn objective_value(&self, x: &[f64]) -> f64 {
        debug_assert_eq!(x.len(), self.nr_variables());

        self.variables.iter().zip(x).map(|(variable, value)| variable.cost * value).sum()
    }

    /// Whether a point satisfies all bounds, integrality requirements and constraints.
    pub fn is_feasible(&self, x: &[f64], tolerance: f64) -> bool {
        x.len() == self.nr_variables()
            && self.variables.iter().zip(x).all(|(variable, &value)| variable.contains(value, tolerance))
            && self.constraints.iter().all(|constraint| {
                constraint.is_satisfied_by(constraint.evaluate(x), tolerance)
            })
    }

    /// Whether a constraint without coefficients has a right-hand side that can't be met.
    ///
    /// Such a constraint reads e.g. `0 <= -1` and makes the program infeasible regardless of the
    /// variables.
    pub fn trivially_infeasible(&self, tolerance: f64) -> bool {
        self.constraints.iter()
            .filter(|constraint| constraint.coefficients.iter().all(|&(_, coefficient)| coefficient == 0_f64))
            .any(|constraint| !constraint.is_satisfied_by(0_f64, tolerance))
    }

    /// Largest distance of an integer variable's value to `{0, 1}`, over all binary variables.
    pub fn binary_rounding_error(&self, x: &[f64]) -> f64 {
        self.variables.iter().zip(x)
            .filter(|(variable, _)| variable.is_binary())
            .map(|(_, &value)| binary_rounding_error(value))
            .fold(0_f64, f64::max)
    }
}

#[cfg(test)]
mod test {
    use approx::assert_abs_diff_eq;

    use crate::data::linear_program::{Constraint, LinearProgram, Variable};
    use crate::data::linear_program::elements::{ConstraintType, Objective};

    fn knapsack() -> LinearProgram {
        let mut program = LinearProgram::new(Objective::Maximize);
        let x = program.push_variable(Variable::binary(2_f64));
        let y = program.push_variable(Variable::binary(3_f64));
        program.push_constraint(Constraint::new(vec![(x, 1_f64), (y, 1_f64)], ConstraintType::Less, 1_f64)).unwrap();
        program
    }

    #[test]
    fn build() {
        let program = knapsack();
        assert_eq!(program.nr_variables(), 2);
        assert_eq!(program.nr_constraints(), 1);
        assert_eq!(program.objective(), Objective::Maximize);
        assert!(program.has_integer_variables());
        assert!(program.variables().iter().all(Variable::is_binary));
    }

    #[test]
    fn reject_unknown_variable() {
        let mut program = knapsack();
        let result = program.push_constraint(Constraint::new(vec![(2, 1_f64)], ConstraintType::Equal, 0_f64));
        assert!(result.is_err());
        assert_eq!(program.nr_constraints(), 1);
    }

    #[test]
    fn feasibility() {
        let program = knapsack();
        assert!(program.is_feasible(&[0_f64, 1_f64], 1e-9));
        assert!(program.is_feasible(&[1e-12, 1_f64], 1e-9));
        assert!(!program.is_feasible(&[1_f64, 1_f64], 1e-9));
        assert!(!program.is_feasible(&[0.5, 0_f64], 1e-9));
        assert!(!program.is_feasible(&[0_f64], 1e-9));
        assert_eq!(program.objective_value(&[0_f64, 1_f64]), 3_f64);
        assert_abs_diff_eq!(program.binary_rounding_error(&[0.1, 0.95]), 0.1);
    }

    #[test]
    fn nonnegative_continuous() {
        let mut program = LinearProgram::new(Objective::Minimize);
        program.push_variable(Variable::nonnegative(1_f64));
        assert!(!program.has_integer_variables());
        assert!(program.is_feasible(&[12.5], 0_f64));
        assert!(!program.is_feasible(&[-1_f64], 1e-9));
    }

    #[test]
    fn trivially_infeasible() {
        let mut program = knapsack();
        assert!(!program.trivially_infeasible(1e-9));
        program.push_constraint(Constraint::new(vec![], ConstraintType::Less, 0_f64)).unwrap();
        assert!(!program.trivially_infeasible(1e-9));
        program.push_constraint(Constraint::new(vec![(0, 0_f64)], ConstraintType::Less, -1_f64)).unwrap();
        assert!(program.trivially_infeasible(1e-9));
    }
}
