mod logical;

use ast::expr::{AttributeReference, Expression};
use ast::rel::logical::SortOrder;
use data::DataType;
use std::fmt::{Display, Formatter};

/// A trait to be implemented by the nodes to be rendered in an explain plan
pub trait ExplainNode {
    // Returns the name of the node, ie PROJECT
    fn node_name(&self) -> String;

    // Any output expressions defined by this node. If this node is simply a pass through
    // like a limit or a filter it should be left blank.
    fn output_exprs(&self) -> Vec<&Expression>;

    // Any columns from tables, rendered the same as expressions, but without
    // the expression itself
    fn columns(&self) -> Vec<AttributeReference>;

    fn limit_offset(&self) -> Option<(u64, u64)>;

    fn predicate(&self) -> Option<&Expression>;

    fn join_condition(&self) -> Option<&Expression>;

    fn sort_orderings(&self) -> &[SortOrder];

    // The "sources" for this node, most nodes will return a single source, but things
    // like joins and unions return many sources.
    fn child_nodes(&self) -> Vec<(String, &Self)>;
}

/// Renders a plan as a table, one row per line with 4 columns:
/// tree - a textual representation of the operators.
/// col_idx - For output expressions, the index at which they appear
/// datatype - The resultant type of any expression
/// expression - The expression itself.
pub fn explain<N: ExplainNode>(node: &N) -> Vec<String> {
    let mut lines = vec![];
    let mut padding = Padding::default();
    render_node(node, &mut lines, &mut padding);

    lines
        .into_iter()
        .map(|line| {
            format!(
                "|{}|{}|{}|{}|",
                line.tree,
                line.column_idx
                    .map(|idx| idx.to_string())
                    .unwrap_or_default(),
                line.expression_type
                    .map(|dt| dt.to_string())
                    .unwrap_or_default(),
                line.expression.unwrap_or_default()
            )
        })
        .collect()
}

/// A single explain line
struct ExplainLine {
    tree: String,
    column_idx: Option<usize>,
    expression_type: Option<DataType>,
    expression: Option<String>,
}

impl ExplainLine {
    fn tree_only(padding: &Padding, tree: &str) -> Self {
        ExplainLine {
            tree: format!("{}{}", padding, tree),
            column_idx: None,
            expression_type: None,
            expression: None,
        }
    }

    fn full(
        padding: &Padding,
        tree: &str,
        column_idx: usize,
        expression_type: DataType,
        expression: String,
    ) -> Self {
        ExplainLine {
            tree: format!("{}{}", padding, tree),
            column_idx: Some(column_idx),
            expression_type: Some(expression_type),
            expression: Some(expression),
        }
    }

    fn expr_only(padding: &Padding, expression_type: DataType, expression: String) -> Self {
        ExplainLine {
            tree: padding.to_string(),
            column_idx: None,
            expression_type: Some(expression_type),
            expression: Some(expression),
        }
    }
}

fn render_node<N: ExplainNode>(node: &N, lines: &mut Vec<ExplainLine>, padding: &mut Padding) {
    lines.push(ExplainLine::tree_only(padding, &node.node_name()));
    padding.push(" |");
    // output cols
    let output_exprs = node.output_exprs();
    if !output_exprs.is_empty() {
        lines.push(ExplainLine::tree_only(padding, "output_exprs:"));
        padding.push("  ");
        for (idx, expr) in output_exprs.into_iter().enumerate() {
            // Named expressions show their name in the tree and whats being named as the expr
            let (name, inner) = match expr {
                Expression::Alias(alias) => (alias.name.clone(), alias.expr.as_ref()),
                Expression::AttributeReference(attribute) => (attribute.name.clone(), expr),
                _ => (String::new(), expr),
            };
            lines.push(ExplainLine::full(
                padding,
                &name,
                idx,
                expr.data_type(),
                inner.to_string(),
            ));
        }
        padding.pop();
    }

    // table columns
    let columns = node.columns();
    if !columns.is_empty() {
        lines.push(ExplainLine::tree_only(padding, "columns:"));
        padding.push("  ");
        for (idx, column) in columns.iter().enumerate() {
            lines.push(ExplainLine::full(
                padding,
                &column.name,
                idx,
                column.datatype,
                String::new(),
            ));
        }
        padding.pop();
    }

    // limit/offset
    if let Some((limit, offset)) = node.limit_offset() {
        lines.push(ExplainLine::tree_only(
            padding,
            &format!("limit: {}", limit),
        ));
        lines.push(ExplainLine::tree_only(
            padding,
            &format!("offset: {}", offset),
        ));
    }

    // predicate
    if let Some(expr) = node.predicate() {
        lines.push(ExplainLine::tree_only(padding, "predicate:"));
        lines.push(ExplainLine::expr_only(
            padding,
            expr.data_type(),
            expr.to_string(),
        ));
    }

    // join condition
    if let Some(expr) = node.join_condition() {
        lines.push(ExplainLine::tree_only(padding, "on:"));
        lines.push(ExplainLine::expr_only(
            padding,
            expr.data_type(),
            expr.to_string(),
        ));
    }

    // sort expressions
    if !node.sort_orderings().is_empty() {
        lines.push(ExplainLine::tree_only(padding, "sort_exprs:"));
        padding.push("  ");
        for ordering in node.sort_orderings() {
            let direction = if ordering.ascending { "ASC" } else { "DESC" };
            lines.push(ExplainLine::expr_only(
                padding,
                ordering.expression.data_type(),
                format!("{} ({})", &ordering.expression, direction),
            ));
        }
        padding.pop();
    }

    // Sources
    for (source_name, source) in &node.child_nodes() {
        lines.push(ExplainLine::tree_only(
            padding,
            &format!("{}:", source_name),
        ));
        padding.push("  ");
        render_node(*source, lines, padding);
        padding.pop();
    }

    padding.pop()
}

/// A helper class to deal with pushing and popping padding
#[derive(Default)]
struct Padding {
    pads: Vec<&'static str>,
}

impl Padding {
    fn push(&mut self, pad: &'static str) {
        self.pads.push(pad);
    }

    fn pop(&mut self) {
        self.pads.pop();
    }
}

impl Display for Padding {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for pad in &self.pads {
            f.write_str(pad)?;
        }
        Ok(())
    }
}
