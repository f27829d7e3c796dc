use tracing::debug;

use crate::{
    ast::{Block, ElseBranch, Program, Statement},
    interpreter::evaluator::core::{Context, EvalResult},
};

impl Context<'_> {
    /// Executes every top-level statement of `program` in order.
    ///
    /// Execution stops at the first error. Output written by earlier
    /// statements stays written.
    ///
    /// # Errors
    /// Returns the first `RuntimeError` raised by any statement.
    pub fn run(&mut self, program: &Program) -> EvalResult<()> {
        for statement in &program.statements {
            self.execute(statement)?;
        }
        Ok(())
    }

    /// Executes a single statement.
    ///
    /// - `print` and expression statements render their value to the
    ///   output.
    /// - assignments and `var` declarations store into the global table.
    /// - `while` re-evaluates its condition before every pass over the body
    ///   and has no iteration limit.
    /// - `if` runs at most one of its branches.
    ///
    /// # Parameters
    /// - `statement`: Statement to execute.
    ///
    /// # Errors
    /// Returns the first `RuntimeError` raised while executing.
    pub fn execute(&mut self, statement: &Statement) -> EvalResult<()> {
        debug!(kind = statement.kind(),
               line = statement.line_number(),
               "executing statement");

        match statement {
            Statement::Print { expr, line } | Statement::Expression { expr, line } => {
                let value = self.eval(expr)?;
                self.emit(&value, *line)
            },
            Statement::Assignment { name, value, .. }
            | Statement::VariableDeclaration { name, value, .. } => {
                let value = self.eval(value)?;
                self.globals.assign(name, value);
                Ok(())
            },
            Statement::While { condition, body, .. } => {
                while self.eval(condition)?.is_truthy() {
                    self.execute_block(body)?;
                }
                Ok(())
            },
            Statement::If { condition,
                            then_branch,
                            else_branch,
                            .. } => {
                if self.eval(condition)?.is_truthy() {
                    self.execute_block(then_branch)
                } else {
                    match else_branch {
                        Some(ElseBranch::Block(block)) => self.execute_block(block),
                        Some(ElseBranch::If(statement)) => self.execute(statement),
                        None => Ok(()),
                    }
                }
            },
        }
    }

    /// Executes the statements of a block in order.
    ///
    /// Blocks do not introduce a scope; assignments inside them update the
    /// global table.
    ///
    /// # Errors
    /// Returns the first `RuntimeError` raised by any statement.
    pub fn execute_block(&mut self, block: &Block) -> EvalResult<()> {
        for statement in &block.statements {
            self.execute(statement)?;
        }
        Ok(())
    }
}
