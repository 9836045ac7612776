use data::rust_decimal::Decimal;
use data::{DataType, Datum};
use functions::registry::{FunctionResolutionError, Registry};
use functions::{Function, FunctionSignature};
use std::collections::HashSet;
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_EXPR_ID: AtomicU64 = AtomicU64::new(1);

/// Identifies a single column producing site in a plan. Allocated once when the attribute is
/// created and carried along unchanged through every rewrite.
#[derive(Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Copy, Clone)]
pub struct ExprId(u64);

impl ExprId {
    pub fn next() -> Self {
        ExprId(NEXT_EXPR_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl Display for ExprId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("#{}", self.0))
    }
}

/// A reference to a column produced somewhere below in the plan.
/// Two references are the same column iff they share an id, the name and type are only
/// carried along for display purposes. After a self join both sides will happily have a
/// column called "id".
#[derive(Debug, Clone)]
pub struct AttributeReference {
    pub name: String,
    pub datatype: DataType,
    pub id: ExprId,
}

impl AttributeReference {
    pub fn new<S: Into<String>>(name: S, datatype: DataType) -> Self {
        AttributeReference {
            name: name.into(),
            datatype,
            id: ExprId::next(),
        }
    }
}

impl PartialEq for AttributeReference {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for AttributeReference {}

impl Hash for AttributeReference {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state)
    }
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Expression {
    Literal(Datum, DataType),
    AttributeReference(AttributeReference),
    Alias(Alias),
    And(Box<Expression>, Box<Expression>),
    Or(Box<Expression>, Box<Expression>),
    Cast(Cast),
    FunctionCall(FunctionCall),
}

/// Names an expression, ie select a + 1 as b.
/// The alias is the site that produces the attribute `b`, hence it owns the id.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Alias {
    pub expr: Box<Expression>,
    pub name: String,
    pub id: ExprId,
}

/// Represents a sql cast
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Cast {
    pub expr: Box<Expression>,
    pub datatype: DataType,
}

/// Represents a function call once its been resolved and type checked
#[derive(Debug, Clone)]
pub struct FunctionCall {
    pub function: &'static dyn Function,
    pub args: Vec<Expression>,
    // Boxed to keep size of expression down
    pub signature: Box<FunctionSignature>,
}

impl PartialEq for FunctionCall {
    fn eq(&self, other: &Self) -> bool {
        self.args == other.args && self.signature == other.signature
    }
}

impl Eq for FunctionCall {}

impl From<bool> for Expression {
    fn from(b: bool) -> Self {
        Expression::Literal(Datum::from(b), DataType::Boolean)
    }
}

impl From<i32> for Expression {
    fn from(i: i32) -> Self {
        Expression::Literal(Datum::from(i), DataType::Integer)
    }
}

impl From<i64> for Expression {
    fn from(i: i64) -> Self {
        Expression::Literal(Datum::from(i), DataType::BigInt)
    }
}

impl From<Decimal> for Expression {
    fn from(d: Decimal) -> Self {
        let datum = Datum::from(d);
        let datatype = datum.datatype();
        Expression::Literal(datum, datatype)
    }
}

impl From<&str> for Expression {
    fn from(s: &str) -> Self {
        Expression::Literal(Datum::from(s), DataType::Text)
    }
}

impl From<AttributeReference> for Expression {
    fn from(attribute: AttributeReference) -> Self {
        Expression::AttributeReference(attribute)
    }
}

impl From<&AttributeReference> for Expression {
    fn from(attribute: &AttributeReference) -> Self {
        Expression::AttributeReference(attribute.clone())
    }
}

impl Expression {
    /// A typed null, ie the result of `CAST(NULL AS BOOLEAN)`
    pub fn null(datatype: DataType) -> Self {
        Expression::Literal(Datum::Null, datatype)
    }

    pub fn and(left: Expression, right: Expression) -> Self {
        Expression::And(Box::new(left), Box::new(right))
    }

    pub fn or(left: Expression, right: Expression) -> Self {
        Expression::Or(Box::new(left), Box::new(right))
    }

    pub fn cast(expr: Expression, datatype: DataType) -> Self {
        Expression::Cast(Cast {
            expr: Box::new(expr),
            datatype,
        })
    }

    /// Wraps the expression in an alias, allocating a fresh attribute id for it.
    pub fn alias<S: Into<String>>(expr: Expression, name: S) -> Self {
        Expression::Alias(Alias {
            expr: Box::new(expr),
            name: name.into(),
            id: ExprId::next(),
        })
    }

    /// Resolves the named function against the registry using the types of the arguments
    pub fn call(
        registry: &Registry,
        name: &str,
        args: Vec<Expression>,
    ) -> Result<Self, FunctionResolutionError> {
        let arg_types: Vec<_> = args.iter().map(Expression::data_type).collect();
        let (signature, function) = registry.resolve_scalar_function(name, &arg_types)?;
        Ok(Expression::FunctionCall(FunctionCall {
            function,
            args,
            signature: Box::new(signature),
        }))
    }

    pub fn data_type(&self) -> DataType {
        match self {
            Expression::Literal(_, datatype) => *datatype,
            Expression::AttributeReference(attribute) => attribute.datatype,
            Expression::Alias(alias) => alias.expr.data_type(),
            Expression::And(..) | Expression::Or(..) => DataType::Boolean,
            Expression::Cast(cast) => cast.datatype,
            Expression::FunctionCall(function_call) => function_call.signature.ret,
        }
    }

    /// True if the value of this expression can be computed without looking at an input row.
    /// An alias is never foldable, folding it would lose the attribute it produces.
    pub fn foldable(&self) -> bool {
        match self {
            Expression::Literal(..) => true,
            Expression::AttributeReference(_) | Expression::Alias(_) => false,
            Expression::And(left, right) | Expression::Or(left, right) => {
                left.foldable() && right.foldable()
            }
            Expression::Cast(cast) => cast.expr.foldable(),
            Expression::FunctionCall(function_call) => {
                function_call.function.deterministic()
                    && function_call.args.iter().all(Expression::foldable)
            }
        }
    }

    /// The ids of all the attributes this expression depends on
    pub fn references(&self) -> HashSet<ExprId> {
        let mut references = HashSet::new();
        self.collect_references(&mut references);
        references
    }

    fn collect_references(&self, references: &mut HashSet<ExprId>) {
        if let Expression::AttributeReference(attribute) = self {
            references.insert(attribute.id);
        }
        for child in self.children() {
            child.collect_references(references);
        }
    }

    /// The attribute produced by a named expression, None for anything unnamed.
    pub fn to_attribute(&self) -> Option<AttributeReference> {
        match self {
            Expression::AttributeReference(attribute) => Some(attribute.clone()),
            Expression::Alias(alias) => Some(AttributeReference {
                name: alias.name.clone(),
                datatype: alias.expr.data_type(),
                id: alias.id,
            }),
            _ => None,
        }
    }

    /// Iterates over the immediate child expressions of this expression
    pub fn children(&self) -> Vec<&Expression> {
        match self {
            Expression::Literal(..) | Expression::AttributeReference(_) => vec![],
            Expression::Alias(alias) => vec![alias.expr.as_ref()],
            Expression::And(left, right) | Expression::Or(left, right) => {
                vec![left.as_ref(), right.as_ref()]
            }
            Expression::Cast(cast) => vec![cast.expr.as_ref()],
            Expression::FunctionCall(function_call) => function_call.args.iter().collect(),
        }
    }

    /// Rebuilds this expression around new children, everything else about the node is kept.
    /// Panics if the number of children doesn't match what `children` returned.
    pub fn with_new_children(&self, children: Vec<Expression>) -> Expression {
        let mut children = children.into_iter();
        match self {
            Expression::Literal(..) | Expression::AttributeReference(_) => self.clone(),
            Expression::Alias(alias) => Expression::Alias(Alias {
                expr: next_child(&mut children),
                name: alias.name.clone(),
                id: alias.id,
            }),
            Expression::And(..) => {
                let left = next_child(&mut children);
                Expression::And(left, next_child(&mut children))
            }
            Expression::Or(..) => {
                let left = next_child(&mut children);
                Expression::Or(left, next_child(&mut children))
            }
            Expression::Cast(cast) => Expression::Cast(Cast {
                expr: next_child(&mut children),
                datatype: cast.datatype,
            }),
            Expression::FunctionCall(function_call) => Expression::FunctionCall(FunctionCall {
                function: function_call.function,
                args: children.collect(),
                signature: function_call.signature.clone(),
            }),
        }
    }
}

fn next_child<I: Iterator<Item = Expression>>(children: &mut I) -> Box<Expression> {
    match children.next() {
        Some(child) => Box::new(child),
        None => panic!("Rebuilt expression with too few children"),
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Expression::Literal(Datum::Text(s), _) => f.write_fmt(format_args!("'{}'", s)),
            Expression::Literal(datum, _) => datum.fmt(f),
            Expression::AttributeReference(attribute) => f.write_str(&attribute.name),
            Expression::Alias(alias) => f.write_fmt(format_args!("{} AS {}", alias.expr, alias.name)),
            Expression::And(left, right) => f.write_fmt(format_args!("and({}, {})", left, right)),
            Expression::Or(left, right) => f.write_fmt(format_args!("or({}, {})", left, right)),
            Expression::Cast(cast) => {
                f.write_fmt(format_args!("cast({} as {})", cast.expr, cast.datatype))
            }
            Expression::FunctionCall(function_call) => {
                let name = function_call.signature.name;
                let is_operator = !name.chars().any(char::is_alphanumeric);
                if is_operator && function_call.args.len() == 2 {
                    f.write_fmt(format_args!(
                        "({} {} {})",
                        function_call.args[0], name, function_call.args[1]
                    ))
                } else {
                    let args = function_call
                        .args
                        .iter()
                        .map(ToString::to_string)
                        .collect::<Vec<_>>()
                        .join(", ");
                    f.write_fmt(format_args!("{}({})", name, args))
                }
            }
        }
    }
}
