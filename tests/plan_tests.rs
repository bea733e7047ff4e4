//! Pipeline plans mirror composition order.

use lazyseq::prelude::*;

#[test]
fn test_plan_mirrors_textual_order() {
    let numbers = Source::from(vec![1, 2, 3]);
    let pipeline = (&numbers)
        .filter(|n| *n > 1)
        .map(|n| n * 2)
        .order_by(|n| *n)
        .take(1);

    let plan = pipeline.plan();
    assert_eq!(plan.depth(), 5);

    let mut ops = Vec::new();
    let mut node = &plan;
    loop {
        ops.push(node.op.as_str());
        match node.inputs.first() {
            Some(next) => node = next,
            None => break,
        }
    }
    assert_eq!(ops, vec!["take", "order_by", "map", "filter", "source"]);
    assert_eq!(plan.materializing_ops(), vec!["order_by"]);
}

#[test]
fn test_plan_does_not_enumerate() {
    let numbers = Source::from(vec![1, 2, 3]);
    let grouped = (&numbers).group_by(|n| n % 2);
    let _ = grouped.plan();
    numbers.push(4);
    assert_eq!(grouped.count(), 2);
}

#[test]
fn test_evaluation_kinds() {
    assert_eq!(range(1, 2).unwrap().plan().evaluation, Evaluation::Generated);
    assert_eq!(empty::<u8>().plan().evaluation, Evaluation::Generated);
    assert_eq!(Source::from(vec![1]).plan().evaluation, Evaluation::Source);
    assert_eq!(
        Source::from(vec![1]).distinct().plan().evaluation,
        Evaluation::Lazy
    );
    assert_eq!(
        Source::from(vec![1]).except(empty()).plan().evaluation,
        Evaluation::Materializing
    );
}

#[test]
fn test_plan_json_round_trip() {
    let a = Source::from(vec![1, 2]);
    let plan = (&a).union(range(1, 3).unwrap()).plan();
    let json = plan.to_json().unwrap();

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["op"], "union");
    assert_eq!(value["evaluation"], "lazy");
    assert_eq!(value["inputs"][1]["op"], "range");
    // Empty key lists are omitted.
    assert!(value.get("keys").is_none());

    let back: OpPlan = serde_json::from_str(&json).unwrap();
    assert_eq!(back, plan);
}
