//! Property tests for sequences of `from` and `set_from` calls.
//!
//! The raw elements are checked against an ordered-set model: `from`
//! extends it, `set_from` clears it first.

#![cfg(unix)]

use super::ConfigurableFileCollection;
use crate::element::PathElement;
use crate::path::BaseDirResolver;
use indexmap::IndexSet;
use proptest::prelude::*;
use std::rc::Rc;

#[derive(Debug, Clone)]
enum Op {
    From(Vec<String>),
    SetFrom(Vec<String>),
}

fn token_strategy() -> impl Strategy<Value = String> {
    "[a-e]"
}

fn op_strategy() -> impl Strategy<Value = Op> {
    let tokens = prop::collection::vec(token_strategy(), 0..5);
    prop_oneof![
        3 => tokens.clone().prop_map(Op::From),
        1 => tokens.prop_map(Op::SetFrom),
    ]
}

fn apply(model: &mut IndexSet<String>, op: &Op) {
    match op {
        Op::From(tokens) => model.extend(tokens.iter().cloned()),
        Op::SetFrom(tokens) => {
            model.clear();
            model.extend(tokens.iter().cloned());
        }
    }
}

fn run(files: &mut ConfigurableFileCollection, op: &Op) {
    let tokens = match op {
        Op::From(tokens) | Op::SetFrom(tokens) => tokens.iter().map(String::as_str),
    };
    match op {
        Op::From(_) => files.from(tokens).unwrap(),
        Op::SetFrom(_) => files.set_from(tokens).unwrap(),
    };
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 1000,
        .. ProptestConfig::default()
    })]

    // Raw elements match the model after every call
    #[test]
    fn raw_elements_follow_model(ops in prop::collection::vec(op_strategy(), 0..20)) {
        let mut files = ConfigurableFileCollection::new(Rc::new(BaseDirResolver::new("/base")));
        let mut model = IndexSet::new();

        for op in &ops {
            run(&mut files, op);
            apply(&mut model, op);

            let expected: Vec<PathElement> =
                model.iter().map(|token| PathElement::from(token.as_str())).collect();
            let view = files.get_from();
            let actual: Vec<PathElement> = view.iter().cloned().collect();
            prop_assert_eq!(actual, expected);
        }
    }

    // Writes ignored after the lenient freeze leave the elements untouched
    #[test]
    fn lenient_freeze_stops_model(
        before in prop::collection::vec(op_strategy(), 0..10),
        after in prop::collection::vec(op_strategy(), 1..10),
    ) {
        let mut files = ConfigurableFileCollection::new(Rc::new(BaseDirResolver::new("/base")));
        let mut model = IndexSet::new();
        for op in &before {
            run(&mut files, op);
            apply(&mut model, op);
        }

        files.implicit_finalize_value();
        let frozen = files.files().unwrap();
        for op in &after {
            run(&mut files, op);
        }

        prop_assert_eq!(files.files().unwrap(), frozen);
        prop_assert_eq!(files.get_from().len(), model.len());
    }
}
