//! Tree-walking evaluator: a post-order walk of the AST producing values.
//!
//! `spec.md` §4.E gives an evaluation rule for every AST kind. `return` is
//! threaded as an explicit out-of-band [`Signal`] rather than a host
//! exception or panic — `spec.md` §9's "return as control flow → explicit
//! signal" guidance, applied the way `faxc-sem`'s analysis passes thread a
//! `Option<LabelId>` for loop/break resolution instead of unwinding.

use crate::error::LangError;
use crate::scope::Environment;
use crate::value::{FunctionValue, Value};
use ivy_par::ast::{BinOp, Expr, Literal, Program, Stmt, UnOp};
use ivy_util::Symbol;
use std::rc::Rc;
use tracing::trace;

/// The result of evaluating one statement: either an ordinary value, or a
/// `return` unwinding out of the current function activation.
pub enum Signal {
    Normal(Value),
    Return(Value),
}

impl Signal {
    fn into_value(self) -> Value {
        match self {
            Signal::Normal(v) | Signal::Return(v) => v,
        }
    }
}

pub struct Evaluator {
    global: Environment,
}

impl Evaluator {
    pub fn new() -> Self {
        Self { global: Environment::root() }
    }

    pub fn global(&self) -> &Environment {
        &self.global
    }

    /// Evaluates every top-level statement in order and returns the last
    /// one's value, per `spec.md` §4.E's `Program` rule. The REPL decides
    /// what to print from each statement's value via [`eval_program_steps`].
    pub fn eval_program(&mut self, program: &Program) -> Result<Value, LangError> {
        let mut last = Value::Null;
        for stmt in &program.statements {
            last = self.eval_stmt(stmt, &self.global.clone())?.into_value();
        }
        Ok(last)
    }

    /// Like [`eval_program`], but yields `(value, is_assignment_or_decl)`
    /// per top-level statement so a REPL can apply `spec.md` §4.E's "don't
    /// print assignment/declaration results" rule without re-deriving it.
    pub fn eval_program_steps(
        &mut self,
        program: &Program,
    ) -> Result<Vec<(Value, bool)>, LangError> {
        let mut out = Vec::with_capacity(program.statements.len());
        for stmt in &program.statements {
            let suppress = matches!(stmt, Stmt::Assignment { .. } | Stmt::FunctionDecl { .. });
            let value = self.eval_stmt(stmt, &self.global.clone())?.into_value();
            out.push((value, suppress));
        }
        Ok(out)
    }

    fn eval_stmt(&mut self, stmt: &Stmt, env: &Environment) -> Result<Signal, LangError> {
        match stmt {
            Stmt::Block { statements, .. } => self.eval_block(statements, env),
            Stmt::Assignment { name, value, is_declaration, .. } => {
                self.eval_assignment(*name, value, *is_declaration, env)
            }
            Stmt::If { condition, then_branch, else_branch, .. } => {
                self.eval_if(condition, then_branch, else_branch.as_deref(), env)
            }
            Stmt::While { condition, body, .. } => self.eval_while(condition, body, env),
            Stmt::For { .. } => Err(LangError::InvalidArgument(
                "'for' is reserved but has no evaluation rule".to_string(),
            )),
            Stmt::FunctionDecl { name, param_names, body, .. } => {
                self.eval_function_decl(*name, param_names, body, env)
            }
            Stmt::Return { value, .. } => self.eval_return(value.as_ref(), env),
            Stmt::Import { .. } => Err(LangError::InvalidArgument(
                "'import' is reserved but has no evaluation rule".to_string(),
            )),
            Stmt::Expression { expr, .. } => {
                Ok(Signal::Normal(self.eval_expr(expr, env)?))
            }
        }
    }

    /// Pushes a new scope whose parent is `env`, evaluates each statement in
    /// order, and yields the last statement's value (or `Null` if empty).
    /// The scope is simply dropped on every exit path — normal completion,
    /// error, or `Return` propagation — since `Environment` has no
    /// destructor to run explicitly; `spec.md` §4.E's "pop and destroy the
    /// scope on all exit paths" falls out of RAII for free.
    fn eval_block(&mut self, statements: &[Stmt], env: &Environment) -> Result<Signal, LangError> {
        let block_scope = env.create_child();
        let mut last = Value::Null;
        for stmt in statements {
            match self.eval_stmt(stmt, &block_scope)? {
                Signal::Normal(v) => last = v,
                ret @ Signal::Return(_) => return Ok(ret),
            }
        }
        Ok(Signal::Normal(last))
    }

    fn eval_assignment(
        &mut self,
        name: Symbol,
        value: &Expr,
        is_declaration: bool,
        env: &Environment,
    ) -> Result<Signal, LangError> {
        let value = self.eval_expr(value, env)?;
        if is_declaration {
            env.define(name, value.clone());
        } else if !env.assign(name, value.clone()) {
            return Err(LangError::UndefinedVariable(name.as_str().to_string()));
        }
        Ok(Signal::Normal(value))
    }

    fn eval_if(
        &mut self,
        condition: &Expr,
        then_branch: &Stmt,
        else_branch: Option<&Stmt>,
        env: &Environment,
    ) -> Result<Signal, LangError> {
        if self.eval_expr(condition, env)?.is_truthy() {
            self.eval_stmt(then_branch, env)
        } else if let Some(else_branch) = else_branch {
            self.eval_stmt(else_branch, env)
        } else {
            Ok(Signal::Normal(Value::Null))
        }
    }

    fn eval_while(
        &mut self,
        condition: &Expr,
        body: &Stmt,
        env: &Environment,
    ) -> Result<Signal, LangError> {
        let mut last = Value::Null;
        while self.eval_expr(condition, env)?.is_truthy() {
            match self.eval_stmt(body, env)? {
                Signal::Normal(v) => last = v,
                ret @ Signal::Return(_) => return Ok(ret),
            }
        }
        Ok(Signal::Normal(last))
    }

    fn eval_function_decl(
        &mut self,
        name: Symbol,
        param_names: &[Symbol],
        body: &Stmt,
        env: &Environment,
    ) -> Result<Signal, LangError> {
        let function = FunctionValue::Scripted {
            params: param_names.to_vec(),
            body: Rc::new(body.clone()),
            closure: env.clone(),
        };
        env.define(name, Value::Function(function));
        // `spec.md` §4.E: "result is the function name as a string (so a
        // REPL prints something)" — but `eval_program_steps` already
        // suppresses printing for `FunctionDecl`, so this value is mostly
        // for callers of `eval_stmt` directly (e.g. tests).
        Ok(Signal::Normal(Value::String(name.as_str().to_string())))
    }

    fn eval_return(&mut self, value: Option<&Expr>, env: &Environment) -> Result<Signal, LangError> {
        let value = match value {
            Some(expr) => self.eval_expr(expr, env)?,
            None => Value::Null,
        };
        Ok(Signal::Return(value))
    }

    fn eval_expr(&mut self, expr: &Expr, env: &Environment) -> Result<Value, LangError> {
        match expr {
            Expr::Literal { value, .. } => Ok(match value {
                Literal::Number(n) => Value::Float(*n),
                Literal::String(s) => Value::String(s.clone()),
                Literal::Boolean(b) => Value::Boolean(*b),
                Literal::Null => Value::Null,
            }),
            Expr::Variable { name, .. } => env
                .lookup(*name)
                .ok_or_else(|| LangError::UndefinedVariable(name.as_str().to_string())),
            Expr::Binary { op, left, right, .. } => self.eval_binary(*op, left, right, env),
            Expr::Unary { op, operand, .. } => self.eval_unary(*op, operand, env),
            Expr::Call { callee_name, args, .. } => self.eval_call(*callee_name, args, env),
        }
    }

    fn eval_binary(
        &mut self,
        op: BinOp,
        left: &Expr,
        right: &Expr,
        env: &Environment,
    ) -> Result<Value, LangError> {
        // Short-circuit operators evaluate the right operand only when the
        // left doesn't already determine the result (`spec.md` §3 invariant
        // 5).
        if matches!(op, BinOp::And | BinOp::Or) {
            let left_truthy = self.eval_expr(left, env)?.is_truthy();
            let determined = match op {
                BinOp::And => !left_truthy,
                BinOp::Or => left_truthy,
                _ => unreachable!(),
            };
            if determined {
                return Ok(Value::Boolean(left_truthy));
            }
            let right_truthy = self.eval_expr(right, env)?.is_truthy();
            return Ok(Value::Boolean(right_truthy));
        }

        let left_value = self.eval_expr(left, env)?;
        let right_value = self.eval_expr(right, env)?;

        match op {
            BinOp::Add | BinOp::Sub | BinOp::Mul | BinOp::Div | BinOp::Rem => {
                self.eval_arithmetic(op, &left_value, &right_value)
            }
            BinOp::Eq => Ok(Value::Boolean(left_value == right_value)),
            BinOp::NotEq => Ok(Value::Boolean(left_value != right_value)),
            BinOp::Lt | BinOp::Gt | BinOp::LtEq | BinOp::GtEq => {
                self.eval_relational(op, &left_value, &right_value)
            }
            BinOp::And | BinOp::Or => unreachable!("handled above"),
        }
    }

    fn eval_arithmetic(&self, op: BinOp, left: &Value, right: &Value) -> Result<Value, LangError> {
        let (Some(a), Some(b)) = (left.as_arithmetic_operand(), right.as_arithmetic_operand())
        else {
            return Err(LangError::TypeMismatch(format!(
                "arithmetic operator expects numeric operands, found {} and {}",
                left.type_name(),
                right.type_name()
            )));
        };
        let result = match op {
            BinOp::Add => a + b,
            BinOp::Sub => a - b,
            BinOp::Mul => a * b,
            BinOp::Div => {
                if b == 0.0 {
                    return Err(LangError::DivisionByZero);
                }
                a / b
            }
            BinOp::Rem => {
                if b == 0.0 {
                    return Err(LangError::DivisionByZero);
                }
                // `%` uses IEEE remainder on floats, per `spec.md` §4.E.
                a % b
            }
            _ => unreachable!("only arithmetic ops reach here"),
        };
        Ok(Value::Float(result))
    }

    fn eval_relational(&self, op: BinOp, left: &Value, right: &Value) -> Result<Value, LangError> {
        let (Some(a), Some(b)) = (left.as_strict_numeric(), right.as_strict_numeric()) else {
            return Err(LangError::TypeMismatch(format!(
                "relational operator expects numeric operands, found {} and {}",
                left.type_name(),
                right.type_name()
            )));
        };
        let result = match op {
            BinOp::Lt => a < b,
            BinOp::Gt => a > b,
            BinOp::LtEq => a <= b,
            BinOp::GtEq => a >= b,
            _ => unreachable!("only relational ops reach here"),
        };
        Ok(Value::Boolean(result))
    }

    fn eval_unary(&mut self, op: UnOp, operand: &Expr, env: &Environment) -> Result<Value, LangError> {
        let value = self.eval_expr(operand, env)?;
        match op {
            UnOp::Neg => {
                let n = value.as_strict_numeric().ok_or_else(|| {
                    LangError::TypeMismatch(format!("'-' expects a numeric operand, found {}", value.type_name()))
                })?;
                Ok(Value::Float(-n))
            }
            UnOp::Not => match value {
                Value::Boolean(b) => Ok(Value::Boolean(!b)),
                other => Err(LangError::TypeMismatch(format!(
                    "'!' expects a boolean operand, found {}",
                    other.type_name()
                ))),
            },
        }
    }

    fn eval_call(&mut self, callee_name: Symbol, args: &[Expr], env: &Environment) -> Result<Value, LangError> {
        let callee = env
            .lookup(callee_name)
            .ok_or_else(|| LangError::UndefinedVariable(callee_name.as_str().to_string()))?;

        let Value::Function(function) = callee else {
            return Err(LangError::TypeMismatch(format!(
                "'{}' is not callable (found {})",
                callee_name.as_str(),
                callee.type_name()
            )));
        };

        let mut arg_values = Vec::with_capacity(args.len());
        for arg in args {
            arg_values.push(self.eval_expr(arg, env)?);
        }

        match function {
            FunctionValue::Native { handler, user_data } => {
                handler(&arg_values, user_data.as_deref())
            }
            FunctionValue::Scripted { params, body, closure } => {
                if params.len() != arg_values.len() {
                    return Err(LangError::InvalidArgument(format!(
                        "'{}' expects {} argument(s), got {}",
                        callee_name.as_str(),
                        params.len(),
                        arg_values.len()
                    )));
                }
                // Activation scope's parent is the function's
                // *declaration-site* scope, giving true lexical closures
                // rather than the caller's dynamic scope (`spec.md` §9's
                // open question, resolved in `DESIGN.md`).
                let activation = closure.create_child();
                for (param, value) in params.iter().zip(arg_values) {
                    activation.define(*param, value);
                }
                trace!(function = %callee_name, "entering activation");
                match self.eval_stmt(&body, &activation)? {
                    Signal::Normal(v) | Signal::Return(v) => Ok(v),
                }
            }
        }
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ivy_par::Parser;

    fn run(src: &str) -> Value {
        let mut parser = Parser::new(src).unwrap();
        let program = parser.parse_program().unwrap();
        let mut evaluator = Evaluator::new();
        evaluator.eval_program(&program).unwrap()
    }

    fn run_err(src: &str) -> LangError {
        let mut parser = Parser::new(src).unwrap();
        let program = parser.parse_program().unwrap();
        let mut evaluator = Evaluator::new();
        evaluator.eval_program(&program).unwrap_err()
    }

    #[test]
    fn scenario_addition() {
        assert_eq!(run("10 + 5;"), Value::Float(15.0));
    }

    #[test]
    fn scenario_precedence_and_parens() {
        assert_eq!(run("2 * (10 + 3) / (5 - 2);").to_display_string(), "8.666667");
    }

    #[test]
    fn scenario_let_and_reuse() {
        assert_eq!(run("let x = 42; x * 2;"), Value::Float(84.0));
    }

    #[test]
    fn scenario_function_call() {
        let mut parser = Parser::new("function add(a, b) { return a + b; } add(3, 7);").unwrap();
        let program = parser.parse_program().unwrap();
        let mut evaluator = Evaluator::new();
        let steps = evaluator.eval_program_steps(&program).unwrap();
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[1].0, Value::Float(10.0));
    }

    #[test]
    fn scenario_while_accumulator() {
        let src = "let i = 0; let s = 0; while (i < 5) { s = s + i; i = i + 1; } s;";
        assert_eq!(run(src), Value::Float(10.0));
    }

    #[test]
    fn scenario_if_else_branch() {
        assert_eq!(run("if (1 < 2) { \"yes\"; } else { \"no\"; }"), Value::String("yes".to_string()));
    }

    #[test]
    fn scenario_recursive_fibonacci() {
        let src = "function fib(n) { if (n <= 1) { return n; } return fib(n-1) + fib(n-2); } fib(6);";
        assert_eq!(run(src), Value::Float(8.0));
    }

    #[test]
    fn scenario_division_by_zero() {
        assert_eq!(run_err("1 / 0;"), LangError::DivisionByZero);
    }

    #[test]
    fn nested_block_scoping_shadows_then_restores() {
        let src = "let x = 1; { let x = 2; x; }";
        assert_eq!(run(src), Value::Float(2.0));

        let src2 = "let x = 1; { let x = 2; } x;";
        assert_eq!(run(src2), Value::Float(1.0));
    }

    #[test]
    fn assignment_through_a_block_mutates_the_outer_binding() {
        let src = "let x = 1; { x = 2; } x;";
        assert_eq!(run(src), Value::Float(2.0));
    }

    #[test]
    fn short_circuit_or_never_evaluates_right_side() {
        let src = "let hit = 0; function mark() { hit = 1; return true; } true || mark(); hit;";
        assert_eq!(run(src), Value::Float(0.0));
    }

    #[test]
    fn short_circuit_and_never_evaluates_right_side() {
        let src = "let hit = 0; function mark() { hit = 1; return true; } false && mark(); hit;";
        assert_eq!(run(src), Value::Float(0.0));
    }

    #[test]
    fn cross_variant_equality_is_false() {
        assert_eq!(run("1 == true;"), Value::Boolean(false));
    }

    #[test]
    fn closures_capture_declaration_site_scope() {
        let src = "let x = 1; function get() { return x; } { let x = 2; get(); }";
        assert_eq!(run(src), Value::Float(1.0));
    }

    #[test]
    fn program_never_produces_return_signal_without_calls() {
        let mut parser = Parser::new("1 + 1;").unwrap();
        let program = parser.parse_program().unwrap();
        let mut evaluator = Evaluator::new();
        for stmt in &program.statements {
            let signal = evaluator.eval_stmt(stmt, &evaluator.global.clone()).unwrap();
            assert!(matches!(signal, Signal::Normal(_)));
        }
    }
}
