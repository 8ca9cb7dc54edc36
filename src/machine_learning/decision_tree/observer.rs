use super::Example;
use log::{debug, trace};
use std::fmt::Debug;

/// Receives diagnostic callbacks while a tree is built or queried.
///
/// Observers are a side channel: the tree builder and the classifier never
/// read anything back from them, so an observer cannot change a learned tree
/// or a predicted label. Every method defaults to doing nothing.
pub trait TreeObserver<T> {
    /// Called before a node holding `examples` is split on `attribute_index`.
    fn node_split(&mut self, _examples: &[&Example<T>], _attribute_index: usize) {}

    /// Called when a node holding `examples` becomes a leaf predicting `label`.
    fn node_collapsed(&mut self, _examples: &[&Example<T>], _label: &T) {}

    /// Called when classification of `event` ends with `label`.
    fn event_classified(&mut self, _event: &[T], _label: &T) {}
}

/// Observer that discards every callback.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentObserver;

impl<T> TreeObserver<T> for SilentObserver {}

/// Observer that forwards every callback to the `log` facade.
///
/// Decisions are logged at `debug` level; the full example sets behind each
/// decision are logged at `trace` level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

impl<T: Debug> TreeObserver<T> for LogObserver {
    fn node_split(&mut self, examples: &[&Example<T>], attribute_index: usize) {
        debug!("{}", split_line(examples, attribute_index));
        trace!("Examples at node: {:?}", fields_of(examples));
    }

    fn node_collapsed(&mut self, examples: &[&Example<T>], label: &T) {
        debug!("{}", collapse_line(examples, label));
        trace!("Examples at node: {:?}", fields_of(examples));
    }

    fn event_classified(&mut self, event: &[T], label: &T) {
        debug!("{}", classified_line(event, label));
    }
}

/// Observer that keeps every trace line in memory.
///
/// Useful when the trace itself is the product, e.g. to print an explanation
/// of how a tree was grown.
///
/// # Example
/// ```rust
/// use id3tree::machine_learning::{Example, TraceRecorder, build};
///
/// let examples = vec![
///     Example::new(vec!["A", "yes"]).unwrap(),
///     Example::new(vec!["B", "yes"]).unwrap(),
/// ];
/// let mut recorder = TraceRecorder::default();
/// build(&examples, &mut recorder).unwrap();
/// assert_eq!(recorder.lines().len(), 1);
/// assert!(recorder.lines()[0].contains("not splitting"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct TraceRecorder {
    lines: Vec<String>,
}

impl TraceRecorder {
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

impl<T: Debug> TreeObserver<T> for TraceRecorder {
    fn node_split(&mut self, examples: &[&Example<T>], attribute_index: usize) {
        self.lines.push(split_line(examples, attribute_index));
    }

    fn node_collapsed(&mut self, examples: &[&Example<T>], label: &T) {
        self.lines.push(collapse_line(examples, label));
    }

    fn event_classified(&mut self, event: &[T], label: &T) {
        self.lines.push(classified_line(event, label));
    }
}

fn fields_of<'a, T>(examples: &[&'a Example<T>]) -> Vec<&'a [T]> {
    examples.iter().map(|example| example.fields()).collect()
}

fn split_line<T>(examples: &[&Example<T>], attribute_index: usize) -> String {
    format!(
        "Current node holds {} example(s), splitting on attribute {}",
        examples.len(),
        attribute_index
    )
}

fn collapse_line<T: Debug>(examples: &[&Example<T>], label: &T) -> String {
    format!(
        "Current node holds {} example(s), not splitting, label: {:?}",
        examples.len(),
        label
    )
}

fn classified_line<T: Debug>(event: &[T], label: &T) -> String {
    format!("Event {:?} has been labeled as {:?}", event, label)
}
