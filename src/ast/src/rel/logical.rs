use crate::expr::{AttributeReference, ExprId, Expression};
use std::any::Any;
use std::collections::HashSet;
use std::fmt::Debug;
use std::sync::Arc;

/// Represents a query in the generic sense, produced by analysis and rewritten by the optimizer.
/// Plans are immutable, children are shared between the input and output of a rewrite wherever
/// they're left untouched.
#[derive(Debug, PartialEq, Clone)]
pub enum LogicalPlan {
    Filter(Filter),
    Project(Project),
    Join(Join),
    LocalRelation(LocalRelation),
    TableScan(TableScan),
    Sort(Sort),
    Limit(Limit),
    UnionAll(UnionAll),
    Extension(Extension),
}

#[derive(Debug, PartialEq, Clone)]
pub struct Filter {
    pub condition: Expression,
    pub source: Arc<LogicalPlan>,
}

/// Every field is expected to be named, ie either an attribute reference or an alias.
#[derive(Debug, PartialEq, Clone)]
pub struct Project {
    pub fields: Vec<Expression>,
    pub source: Arc<LogicalPlan>,
}

#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub enum JoinType {
    Inner,
    LeftOuter,
    RightOuter,
    FullOuter,
    LeftSemi,
}

#[derive(Debug, PartialEq, Clone)]
pub struct Join {
    pub left: Arc<LogicalPlan>,
    pub right: Arc<LogicalPlan>,
    pub join_type: JoinType,
    pub condition: Option<Expression>,
}

/// A relation materialized in the plan itself. With no rows this is how a provably empty
/// part of the plan gets represented.
#[derive(Debug, PartialEq, Clone)]
pub struct LocalRelation {
    pub output: Vec<AttributeReference>,
}

/// A base table, the attributes are assigned by analysis when the table is resolved.
#[derive(Debug, PartialEq, Clone)]
pub struct TableScan {
    pub table: String,
    pub output: Vec<AttributeReference>,
}

#[derive(Debug, PartialEq, Clone)]
pub struct SortOrder {
    pub expression: Expression,
    pub ascending: bool,
}

#[derive(Debug, PartialEq, Clone)]
pub struct Sort {
    pub orderings: Vec<SortOrder>,
    pub source: Arc<LogicalPlan>,
}

#[derive(Debug, PartialEq, Clone)]
pub struct Limit {
    pub limit: u64,
    pub offset: u64,
    pub source: Arc<LogicalPlan>,
}

/// Output attributes are taken from the first source
#[derive(Debug, PartialEq, Clone)]
pub struct UnionAll {
    pub sources: Vec<Arc<LogicalPlan>>,
}

/// A plan node defined outside of this crate
#[derive(Debug, Clone)]
pub struct Extension {
    pub node: Arc<dyn ExtensionNode>,
}

impl PartialEq for Extension {
    fn eq(&self, other: &Self) -> bool {
        self.node.dyn_eq(other.node.as_ref())
    }
}

/// The capabilities a user defined plan node has to provide so it can take part in rewrites.
pub trait ExtensionNode: Debug + Send + Sync {
    fn name(&self) -> &str;

    fn children(&self) -> Vec<&Arc<LogicalPlan>>;

    /// Expression slots owned by the node, in a stable order
    fn expressions(&self) -> Vec<&Expression> {
        vec![]
    }

    fn output(&self) -> Vec<AttributeReference>;

    fn with_new_children(&self, children: Vec<Arc<LogicalPlan>>) -> Arc<dyn ExtensionNode>;

    fn with_new_expressions(&self, expressions: Vec<Expression>) -> Arc<dyn ExtensionNode>;

    fn as_any(&self) -> &dyn Any;

    fn dyn_eq(&self, other: &dyn ExtensionNode) -> bool;
}

// Builders, these all hand back shared nodes as thats how plans are held.
impl LogicalPlan {
    pub fn filter(condition: Expression, source: Arc<LogicalPlan>) -> Arc<Self> {
        Arc::new(LogicalPlan::Filter(Filter { condition, source }))
    }

    pub fn project(fields: Vec<Expression>, source: Arc<LogicalPlan>) -> Arc<Self> {
        Arc::new(LogicalPlan::Project(Project { fields, source }))
    }

    pub fn join(
        left: Arc<LogicalPlan>,
        right: Arc<LogicalPlan>,
        join_type: JoinType,
        condition: Option<Expression>,
    ) -> Arc<Self> {
        Arc::new(LogicalPlan::Join(Join {
            left,
            right,
            join_type,
            condition,
        }))
    }

    pub fn local_relation(output: Vec<AttributeReference>) -> Arc<Self> {
        Arc::new(LogicalPlan::LocalRelation(LocalRelation { output }))
    }

    pub fn table_scan<S: Into<String>>(table: S, output: Vec<AttributeReference>) -> Arc<Self> {
        Arc::new(LogicalPlan::TableScan(TableScan {
            table: table.into(),
            output,
        }))
    }
}

impl LogicalPlan {
    /// The attributes produced by this node, in order. Always derived from the children and
    /// the node itself.
    pub fn output(&self) -> Vec<AttributeReference> {
        match self {
            LogicalPlan::Filter(filter) => filter.source.output(),
            LogicalPlan::Project(project) => project
                .fields
                .iter()
                .filter_map(Expression::to_attribute)
                .collect(),
            LogicalPlan::Join(join) => match join.join_type {
                JoinType::LeftSemi => join.left.output(),
                JoinType::Inner
                | JoinType::LeftOuter
                | JoinType::RightOuter
                | JoinType::FullOuter => {
                    let mut output = join.left.output();
                    output.extend(join.right.output());
                    output
                }
            },
            LogicalPlan::LocalRelation(relation) => relation.output.clone(),
            LogicalPlan::TableScan(scan) => scan.output.clone(),
            LogicalPlan::Sort(sort) => sort.source.output(),
            LogicalPlan::Limit(limit) => limit.source.output(),
            LogicalPlan::UnionAll(union) => union
                .sources
                .first()
                .map(|source| source.output())
                .unwrap_or_default(),
            LogicalPlan::Extension(extension) => extension.node.output(),
        }
    }

    /// The ids of the attributes produced by this node
    pub fn output_set(&self) -> HashSet<ExprId> {
        self.output().iter().map(|attribute| attribute.id).collect()
    }

    /// Iterates over the immediate child operators of this operator
    pub fn children(&self) -> Vec<&Arc<LogicalPlan>> {
        match self {
            LogicalPlan::Filter(filter) => vec![&filter.source],
            LogicalPlan::Project(project) => vec![&project.source],
            LogicalPlan::Join(join) => vec![&join.left, &join.right],
            LogicalPlan::LocalRelation(_) | LogicalPlan::TableScan(_) => vec![],
            LogicalPlan::Sort(sort) => vec![&sort.source],
            LogicalPlan::Limit(limit) => vec![&limit.source],
            LogicalPlan::UnionAll(union) => union.sources.iter().collect(),
            LogicalPlan::Extension(extension) => extension.node.children(),
        }
    }

    /// Rebuilds this node around new children.
    /// Panics if the number of children doesn't match what `children` returned.
    pub fn with_new_children(&self, children: Vec<Arc<LogicalPlan>>) -> LogicalPlan {
        let mut children = children.into_iter();
        match self {
            LogicalPlan::Filter(filter) => LogicalPlan::Filter(Filter {
                condition: filter.condition.clone(),
                source: next_child(&mut children),
            }),
            LogicalPlan::Project(project) => LogicalPlan::Project(Project {
                fields: project.fields.clone(),
                source: next_child(&mut children),
            }),
            LogicalPlan::Join(join) => {
                let left = next_child(&mut children);
                LogicalPlan::Join(Join {
                    left,
                    right: next_child(&mut children),
                    join_type: join.join_type,
                    condition: join.condition.clone(),
                })
            }
            LogicalPlan::LocalRelation(_) | LogicalPlan::TableScan(_) => self.clone(),
            LogicalPlan::Sort(sort) => LogicalPlan::Sort(Sort {
                orderings: sort.orderings.clone(),
                source: next_child(&mut children),
            }),
            LogicalPlan::Limit(limit) => LogicalPlan::Limit(Limit {
                limit: limit.limit,
                offset: limit.offset,
                source: next_child(&mut children),
            }),
            LogicalPlan::UnionAll(_) => LogicalPlan::UnionAll(UnionAll {
                sources: children.collect(),
            }),
            LogicalPlan::Extension(extension) => LogicalPlan::Extension(Extension {
                node: extension.node.with_new_children(children.collect()),
            }),
        }
    }

    /// Iterates over all expressions *owned* by this operator, not including its children.
    pub fn expressions(&self) -> Vec<&Expression> {
        match self {
            LogicalPlan::Filter(filter) => vec![&filter.condition],
            LogicalPlan::Project(project) => project.fields.iter().collect(),
            LogicalPlan::Join(join) => join.condition.iter().collect(),
            LogicalPlan::Sort(sort) => sort
                .orderings
                .iter()
                .map(|ordering| &ordering.expression)
                .collect(),
            LogicalPlan::LocalRelation(_)
            | LogicalPlan::TableScan(_)
            | LogicalPlan::Limit(_)
            | LogicalPlan::UnionAll(_) => vec![],
            LogicalPlan::Extension(extension) => extension.node.expressions(),
        }
    }

    /// Rebuilds this node with new expressions in place of those returned by `expressions`.
    /// Panics if the number of expressions doesn't match.
    pub fn with_new_expressions(&self, expressions: Vec<Expression>) -> LogicalPlan {
        let mut expressions = expressions.into_iter();
        match self {
            LogicalPlan::Filter(filter) => LogicalPlan::Filter(Filter {
                condition: next_expression(&mut expressions),
                source: Arc::clone(&filter.source),
            }),
            LogicalPlan::Project(project) => LogicalPlan::Project(Project {
                fields: expressions.collect(),
                source: Arc::clone(&project.source),
            }),
            LogicalPlan::Join(join) => LogicalPlan::Join(Join {
                left: Arc::clone(&join.left),
                right: Arc::clone(&join.right),
                join_type: join.join_type,
                condition: join
                    .condition
                    .as_ref()
                    .map(|_| next_expression(&mut expressions)),
            }),
            LogicalPlan::Sort(sort) => LogicalPlan::Sort(Sort {
                orderings: sort
                    .orderings
                    .iter()
                    .map(|ordering| SortOrder {
                        expression: next_expression(&mut expressions),
                        ascending: ordering.ascending,
                    })
                    .collect(),
                source: Arc::clone(&sort.source),
            }),
            LogicalPlan::LocalRelation(_)
            | LogicalPlan::TableScan(_)
            | LogicalPlan::Limit(_)
            | LogicalPlan::UnionAll(_) => self.clone(),
            LogicalPlan::Extension(extension) => LogicalPlan::Extension(Extension {
                node: extension.node.with_new_expressions(expressions.collect()),
            }),
        }
    }
}

fn next_child<I: Iterator<Item = Arc<LogicalPlan>>>(children: &mut I) -> Arc<LogicalPlan> {
    match children.next() {
        Some(child) => child,
        None => panic!("Rebuilt plan node with too few children"),
    }
}

fn next_expression<I: Iterator<Item = Expression>>(expressions: &mut I) -> Expression {
    match expressions.next() {
        Some(expression) => expression,
        None => panic!("Rebuilt plan node with too few expressions"),
    }
}
