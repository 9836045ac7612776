use crate::explain::ExplainNode;
use ast::expr::{AttributeReference, Expression};
use ast::rel::logical::{JoinType, LogicalPlan, SortOrder};

impl ExplainNode for LogicalPlan {
    fn node_name(&self) -> String {
        match self {
            LogicalPlan::Filter(_) => "FILTER".to_string(),
            LogicalPlan::Project(_) => "PROJECT".to_string(),
            LogicalPlan::Join(join) => {
                let join_type = match join.join_type {
                    JoinType::Inner => "INNER",
                    JoinType::LeftOuter => "LEFT_OUTER",
                    JoinType::RightOuter => "RIGHT_OUTER",
                    JoinType::FullOuter => "FULL_OUTER",
                    JoinType::LeftSemi => "LEFT_SEMI",
                };
                format!("JOIN({})", join_type)
            }
            LogicalPlan::LocalRelation(_) => "LOCAL_RELATION".to_string(),
            LogicalPlan::TableScan(scan) => format!("TABLE({})", scan.table),
            LogicalPlan::Sort(_) => "SORT".to_string(),
            LogicalPlan::Limit(_) => "LIMIT".to_string(),
            LogicalPlan::UnionAll(_) => "UNION_ALL".to_string(),
            LogicalPlan::Extension(extension) => extension.node.name().to_uppercase(),
        }
    }

    fn output_exprs(&self) -> Vec<&Expression> {
        match self {
            LogicalPlan::Project(project) => project.fields.iter().collect(),
            _ => vec![],
        }
    }

    fn columns(&self) -> Vec<AttributeReference> {
        match self {
            LogicalPlan::TableScan(scan) => scan.output.clone(),
            LogicalPlan::LocalRelation(relation) => relation.output.clone(),
            _ => vec![],
        }
    }

    fn limit_offset(&self) -> Option<(u64, u64)> {
        match self {
            LogicalPlan::Limit(limit) => Some((limit.limit, limit.offset)),
            _ => None,
        }
    }

    fn predicate(&self) -> Option<&Expression> {
        match self {
            LogicalPlan::Filter(filter) => Some(&filter.condition),
            _ => None,
        }
    }

    fn join_condition(&self) -> Option<&Expression> {
        match self {
            LogicalPlan::Join(join) => join.condition.as_ref(),
            _ => None,
        }
    }

    fn sort_orderings(&self) -> &[SortOrder] {
        match self {
            LogicalPlan::Sort(sort) => &sort.orderings,
            _ => &[],
        }
    }

    fn child_nodes(&self) -> Vec<(String, &Self)> {
        match self {
            LogicalPlan::Filter(filter) => vec![("source".to_string(), filter.source.as_ref())],
            LogicalPlan::Project(project) => {
                vec![("source".to_string(), project.source.as_ref())]
            }
            LogicalPlan::Join(join) => vec![
                ("left".to_string(), join.left.as_ref()),
                ("right".to_string(), join.right.as_ref()),
            ],
            LogicalPlan::LocalRelation(_) | LogicalPlan::TableScan(_) => vec![],
            LogicalPlan::Sort(sort) => vec![("source".to_string(), sort.source.as_ref())],
            LogicalPlan::Limit(limit) => vec![("source".to_string(), limit.source.as_ref())],
            LogicalPlan::UnionAll(union) => union
                .sources
                .iter()
                .enumerate()
                .map(|(idx, child)| (format!("source_{}", idx), child.as_ref()))
                .collect(),
            LogicalPlan::Extension(extension) => extension
                .node
                .children()
                .into_iter()
                .enumerate()
                .map(|(idx, child)| (format!("source_{}", idx), child.as_ref()))
                .collect(),
        }
    }
}
