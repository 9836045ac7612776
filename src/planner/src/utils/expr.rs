use ast::expr::Expression;
use std::iter::once;

/// Takes a boolean expression and splits it at all the "ands", depth first, left then right.
pub fn split_conjunctive_predicates(predicate: &Expression) -> Vec<Expression> {
    let mut predicates = vec![];
    collect_conjuncts(predicate, &mut predicates);
    predicates
}

fn collect_conjuncts(predicate: &Expression, predicates: &mut Vec<Expression>) {
    match predicate {
        Expression::And(left, right) => {
            collect_conjuncts(left, predicates);
            collect_conjuncts(right, predicates);
        }
        p => predicates.push(p.clone()),
    }
}

/// Takes many predicates and left folds them together with and.
/// Returns None if there were no predicates to combine.
pub fn combine_conjunctive_predicates<E: IntoIterator<Item = Expression>>(
    predicates: E,
) -> Option<Expression> {
    let mut iter = predicates.into_iter();
    iter.next()
        .map(|first| iter.fold(first, Expression::and))
}

/// Splits a filter condition and an optional join condition into one sequence of conjuncts,
/// the filters conjuncts first.
pub(crate) fn split_filter_and_join(
    filter_condition: &Expression,
    join_condition: Option<&Expression>,
) -> Vec<Expression> {
    once(filter_condition)
        .chain(join_condition)
        .flat_map(split_conjunctive_predicates)
        .collect()
}
