use crate::arena::Handle;

/// Which child slot of its parent a node occupies.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// A struct representing an internal node of a binary search tree.
///
/// Child links own their subtree in the sense that each node is linked from exactly one child slot
/// (or the root slot of the tree). The parent link is only a back-reference used to walk upwards.
pub struct Node<T, P> {
    pub elem: T,
    pub payload: P,
    pub parent: Option<Handle>,
    pub left: Option<Handle>,
    pub right: Option<Handle>,
}

impl<T, P> Node<T, P>
where
    P: Default,
{
    pub fn new(elem: T) -> Self {
        Node {
            elem,
            payload: P::default(),
            parent: None,
            left: None,
            right: None,
        }
    }
}

impl<T, P> Node<T, P> {
    pub fn child(&self, side: Side) -> Option<Handle> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn child_mut(&mut self, side: Side) -> &mut Option<Handle> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    /// Returns the slot that holds `child`, or `None` if `child` is not a child of this node.
    pub fn side_of(&self, child: Handle) -> Option<Side> {
        if self.left == Some(child) {
            Some(Side::Left)
        } else if self.right == Some(child) {
            Some(Side::Right)
        } else {
            None
        }
    }
}
