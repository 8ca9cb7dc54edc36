pub use crate::machine_learning::decision_tree::{
    AsExample, DecisionTree, DecisionTreeParams, Example, LogObserver, Node, SilentObserver,
    TraceRecorder, TreeObserver, UnseenValuePolicy, build, classify, classify_with_policy,
};
pub use crate::machine_learning::Category;
