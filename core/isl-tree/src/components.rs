use hecs::Entity;

/// Constituent label of an internal node ("NP", "VP", "PRP$", ...)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label(pub String);

/// Surface word held by a leaf. Leaves never carry `Children`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leaf {
    pub text: String,
}

/// Ordered child list of an internal node
#[derive(Debug, Clone, Default)]
pub struct Children(pub Vec<Entity>);

/// Back-link to the containing node. Absent on the root and on detached nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parent(pub Entity);
