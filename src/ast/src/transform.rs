//! Generic tree rewriting for plans and expressions.
//!
//! Rewrite functions are partial, returning `Ok(None)` leaves the node as is. Untouched
//! subtrees are handed back as the very same `Arc` so callers can use `Arc::ptr_eq` to tell
//! whether anything changed.
use crate::expr::Expression;
use crate::rel::logical::LogicalPlan;
use std::sync::Arc;

/// Rewrites the plan bottom up, children first then the node itself.
pub fn transform_plan<E, F>(plan: &Arc<LogicalPlan>, f: F) -> Result<Arc<LogicalPlan>, E>
where
    F: Fn(&Arc<LogicalPlan>) -> Result<Option<Arc<LogicalPlan>>, E>,
{
    transform_plan_inner(plan, &f)
}

fn transform_plan_inner<E, F>(plan: &Arc<LogicalPlan>, f: &F) -> Result<Arc<LogicalPlan>, E>
where
    F: Fn(&Arc<LogicalPlan>) -> Result<Option<Arc<LogicalPlan>>, E>,
{
    let children = plan.children();
    let mut changed = false;
    let mut new_children = Vec::with_capacity(children.len());
    for child in children {
        let new_child = transform_plan_inner(child, f)?;
        changed |= !Arc::ptr_eq(child, &new_child);
        new_children.push(new_child);
    }

    let node = if changed {
        Arc::new(plan.with_new_children(new_children))
    } else {
        Arc::clone(plan)
    };

    Ok(f(&node)?.unwrap_or(node))
}

/// Rewrites each expression owned by this one plan node top down. Children of the plan are
/// left alone.
pub fn transform_expressions_down<E, F>(plan: &Arc<LogicalPlan>, f: F) -> Result<Arc<LogicalPlan>, E>
where
    F: Fn(&Expression) -> Result<Option<Expression>, E>,
{
    rewrite_node_expressions(plan, |expr| expr.rewrite_down(&f))
}

/// Rewrites each expression owned by this one plan node bottom up. Children of the plan are
/// left alone.
pub fn transform_expressions_up<E, F>(plan: &Arc<LogicalPlan>, f: F) -> Result<Arc<LogicalPlan>, E>
where
    F: Fn(&Expression) -> Result<Option<Expression>, E>,
{
    rewrite_node_expressions(plan, |expr| expr.rewrite_up(&f))
}

/// Applies `f` bottom up to every expression of every node in the plan.
pub fn transform_all_expressions<E, F>(plan: &Arc<LogicalPlan>, f: F) -> Result<Arc<LogicalPlan>, E>
where
    F: Fn(&Expression) -> Result<Option<Expression>, E>,
{
    transform_plan(plan, |node| {
        let new_node = transform_expressions_up(node, &f)?;
        if Arc::ptr_eq(node, &new_node) {
            Ok(None)
        } else {
            Ok(Some(new_node))
        }
    })
}

fn rewrite_node_expressions<E, R>(plan: &Arc<LogicalPlan>, rewrite: R) -> Result<Arc<LogicalPlan>, E>
where
    R: Fn(&Expression) -> Result<Option<Expression>, E>,
{
    let expressions = plan.expressions();
    if expressions.is_empty() {
        return Ok(Arc::clone(plan));
    }

    let mut changed = false;
    let mut new_expressions = Vec::with_capacity(expressions.len());
    for expr in expressions {
        match rewrite(expr)? {
            Some(new_expr) => {
                changed = true;
                new_expressions.push(new_expr);
            }
            None => new_expressions.push(expr.clone()),
        }
    }

    if changed {
        Ok(Arc::new(plan.with_new_expressions(new_expressions)))
    } else {
        Ok(Arc::clone(plan))
    }
}

impl Expression {
    /// Pre-order rewrite, `f` is applied to a node before its children. The children that
    /// get visited are the children of whatever `f` returned.
    pub fn transform_down<E, F>(&self, f: F) -> Result<Expression, E>
    where
        F: Fn(&Expression) -> Result<Option<Expression>, E>,
    {
        Ok(self.rewrite_down(&f)?.unwrap_or_else(|| self.clone()))
    }

    /// Post-order rewrite, children are rewritten before `f` sees the node.
    pub fn transform_up<E, F>(&self, f: F) -> Result<Expression, E>
    where
        F: Fn(&Expression) -> Result<Option<Expression>, E>,
    {
        Ok(self.rewrite_up(&f)?.unwrap_or_else(|| self.clone()))
    }

    // None here means nothing in the subtree changed.
    pub(crate) fn rewrite_down<E, F>(&self, f: &F) -> Result<Option<Expression>, E>
    where
        F: Fn(&Expression) -> Result<Option<Expression>, E>,
    {
        match f(self)? {
            Some(new_expr) => {
                let rewritten = new_expr.rewrite_children(|child| child.rewrite_down(f))?;
                Ok(Some(rewritten.unwrap_or(new_expr)))
            }
            None => self.rewrite_children(|child| child.rewrite_down(f)),
        }
    }

    pub(crate) fn rewrite_up<E, F>(&self, f: &F) -> Result<Option<Expression>, E>
    where
        F: Fn(&Expression) -> Result<Option<Expression>, E>,
    {
        match self.rewrite_children(|child| child.rewrite_up(f))? {
            Some(new_expr) => Ok(Some(f(&new_expr)?.unwrap_or(new_expr))),
            None => f(self),
        }
    }

    fn rewrite_children<E, R>(&self, rewrite: R) -> Result<Option<Expression>, E>
    where
        R: Fn(&Expression) -> Result<Option<Expression>, E>,
    {
        let children = self.children();
        if children.is_empty() {
            return Ok(None);
        }

        let mut changed = false;
        let mut new_children = Vec::with_capacity(children.len());
        for child in children {
            match rewrite(child)? {
                Some(new_child) => {
                    changed = true;
                    new_children.push(new_child);
                }
                None => new_children.push(child.clone()),
            }
        }

        if changed {
            Ok(Some(self.with_new_children(new_children)))
        } else {
            Ok(None)
        }
    }
}
