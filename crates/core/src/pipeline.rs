//! Ordered application of named stages.
//!
//! Both the block filters and the title formatters are lists of [`Stage`]s
//! folded over a value by [`transduce`]. The fold stops as soon as the value
//! becomes [`Vacant`], so an empty block list or an empty title passes
//! through the rest of the list untouched.

use tracing::debug;

use crate::config::TitleConfig;
use crate::layout::TextBlock;

/// A single `(value, config) -> value` step.
pub trait Stage<T> {
    /// Short name used in diagnostics.
    fn name(&self) -> &'static str;

    fn apply(&self, value: T, config: &TitleConfig) -> T;
}

/// The notion of "nothing left to process" for a pipeline value.
pub trait Vacant {
    fn is_vacant(&self) -> bool;

    /// Size reported in stage diagnostics.
    fn extent(&self) -> usize;
}

impl Vacant for String {
    fn is_vacant(&self) -> bool {
        self.is_empty()
    }

    fn extent(&self) -> usize {
        self.chars().count()
    }
}

impl Vacant for Vec<TextBlock> {
    fn is_vacant(&self) -> bool {
        self.is_empty()
    }

    fn extent(&self) -> usize {
        self.len()
    }
}

/// A boxed, ordered list of stages.
pub type Stages<T> = Vec<Box<dyn Stage<T>>>;

/// Apply `stages` left to right, returning early once the value is vacant.
pub fn transduce<T: Vacant>(stages: &[Box<dyn Stage<T>>], value: T, config: &TitleConfig) -> T {
    let mut value = value;
    for stage in stages {
        if value.is_vacant() {
            debug!(stage = stage.name(), "value vacant, stopping");
            break;
        }
        value = stage.apply(value, config);
        debug!(stage = stage.name(), extent = value.extent(), "stage applied");
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    struct Append(&'static str);

    impl Stage<String> for Append {
        fn name(&self) -> &'static str {
            "append"
        }

        fn apply(&self, value: String, _config: &TitleConfig) -> String {
            value + self.0
        }
    }

    struct Clear;

    impl Stage<String> for Clear {
        fn name(&self) -> &'static str {
            "clear"
        }

        fn apply(&self, _value: String, _config: &TitleConfig) -> String {
            String::new()
        }
    }

    struct Counting(Rc<Cell<usize>>);

    impl Stage<String> for Counting {
        fn name(&self) -> &'static str {
            "counting"
        }

        fn apply(&self, value: String, _config: &TitleConfig) -> String {
            self.0.set(self.0.get() + 1);
            value
        }
    }

    #[test]
    fn test_transduce_applies_in_order() {
        let stages: Stages<String> = vec![Box::new(Append("b")), Box::new(Append("c"))];
        let out = transduce(&stages, "a".to_string(), &TitleConfig::default());
        assert_eq!(out, "abc");
    }

    #[test]
    fn test_transduce_empty_stage_list() {
        let stages: Stages<String> = Vec::new();
        assert_eq!(transduce(&stages, "same".to_string(), &TitleConfig::default()), "same");
    }

    #[test]
    fn test_transduce_stops_on_vacant_value() {
        let calls = Rc::new(Cell::new(0));
        let stages: Stages<String> = vec![Box::new(Clear), Box::new(Counting(calls.clone())), Box::new(Append("x"))];
        let out = transduce(&stages, "title".to_string(), &TitleConfig::default());
        assert_eq!(out, "");
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_transduce_skips_vacant_input() {
        let calls = Rc::new(Cell::new(0));
        let stages: Stages<String> = vec![Box::new(Counting(calls.clone()))];
        assert_eq!(transduce(&stages, String::new(), &TitleConfig::default()), "");
        assert_eq!(calls.get(), 0);
    }
}
