use crate::planner::operator::Operator;
use crate::planner::PlanRef;

pub enum PatternChildrenPredicate {
    /// all descendant nodes must satisfy the root predicate
    Recursive,
    /// children nodes are matched according to patterns order
    Predicate(Vec<Pattern>),
    /// children are not inspected
    None,
}

/// The pattern tree to match a plan tree. It defined in `Rule` and used in `PatternMatcher`.
pub struct Pattern {
    /// The root node predicate, not contains the children.
    pub predicate: fn(&Operator) -> bool,
    /// Binds the matched node under this name in the [`Captures`].
    pub capture: Option<&'static str>,
    /// The children's predicate of current node.
    pub children: PatternChildrenPredicate,
}

pub trait PatternMatcher {
    /// `Some` with the bound nodes when the plan matches, `None` otherwise.
    fn match_opt_expr(&self) -> Option<Captures>;
}

/// Nodes bound by a successful match, looked up by capture name.
#[derive(Debug, Default, Clone)]
pub struct Captures {
    bindings: Vec<(&'static str, PlanRef)>,
}

impl Captures {
    pub fn empty() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, name: &'static str, plan: PlanRef) {
        self.bindings.push((name, plan));
    }

    pub fn get(&self, name: &str) -> Option<&PlanRef> {
        self.bindings
            .iter()
            .find(|(capture, _)| *capture == name)
            .map(|(_, plan)| plan)
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }
}
