use crate::runner::{call, lit, optimize, table};
use ast::expr::{AttributeReference, Expression};
use ast::rel::logical::{Extension, ExtensionNode, LogicalPlan};
use data::DataType;
use std::any::Any;
use std::sync::Arc;

/// Samples a percentage of the rows from its source
#[derive(Debug, PartialEq)]
struct Sample {
    percent: Expression,
    source: Arc<LogicalPlan>,
}

impl ExtensionNode for Sample {
    fn name(&self) -> &str {
        "sample"
    }

    fn children(&self) -> Vec<&Arc<LogicalPlan>> {
        vec![&self.source]
    }

    fn expressions(&self) -> Vec<&Expression> {
        vec![&self.percent]
    }

    fn output(&self) -> Vec<AttributeReference> {
        self.source.output()
    }

    fn with_new_children(&self, mut children: Vec<Arc<LogicalPlan>>) -> Arc<dyn ExtensionNode> {
        Arc::new(Sample {
            percent: self.percent.clone(),
            source: children.remove(0),
        })
    }

    fn with_new_expressions(&self, mut expressions: Vec<Expression>) -> Arc<dyn ExtensionNode> {
        Arc::new(Sample {
            percent: expressions.remove(0),
            source: Arc::clone(&self.source),
        })
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn dyn_eq(&self, other: &dyn ExtensionNode) -> bool {
        other
            .as_any()
            .downcast_ref::<Sample>()
            .map_or(false, |other| other == self)
    }
}

#[test]
fn rules_see_through_extensions() {
    let t = table("t", &[("x", DataType::Integer)]);
    let plan = Arc::new(LogicalPlan::Extension(Extension {
        node: Arc::new(Sample {
            percent: call("*", vec![lit(5), lit(2)]),
            source: LogicalPlan::filter(call("=", vec![lit(1), lit(1)]), Arc::clone(&t)),
        }),
    }));

    let optimized = optimize(
        &plan,
        "
        |SAMPLE||||
        | |source_0:||||
        | |  TABLE(t)||||
        | |   |columns:||||
        | |   |  x|0|INTEGER||
        ",
    );

    match optimized.as_ref() {
        LogicalPlan::Extension(extension) => {
            let sample = extension.node.as_any().downcast_ref::<Sample>().unwrap();
            assert_eq!(sample.percent, lit(10));
            assert!(Arc::ptr_eq(&sample.source, &t));
        }
        other => panic!("Expected the sample to survive, got {:?}", other),
    }
}
