//! Arena that owns every node of a menu tree.
//!
//! Nodes are addressed by [`NodeId`]. Child lists and parent links are plain
//! ids, so a menu may list the same node more than once and a removed child
//! stays in the arena until the whole tree is dropped.

use crate::error::{MenuError, MenuResult};

use super::node::{MenuNode, NodeId, ViewNode};

#[derive(Debug, Default)]
pub struct MenuTree {
    nodes: Vec<ViewNode>,
}

impl MenuTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a node and return its id. The node starts without a parent.
    pub fn insert(&mut self, node: ViewNode) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, id: NodeId) -> MenuResult<&ViewNode> {
        self.nodes.get(id.0).ok_or(MenuError::UnknownNode(id))
    }

    pub fn get_mut(&mut self, id: NodeId) -> MenuResult<&mut ViewNode> {
        self.nodes.get_mut(id.0).ok_or(MenuError::UnknownNode(id))
    }

    pub fn menu(&self, id: NodeId) -> MenuResult<&MenuNode> {
        let node = self.get(id)?;
        node.as_menu().ok_or_else(|| MenuError::NotAMenu {
            name: node.running_title.clone(),
        })
    }

    pub fn menu_mut(&mut self, id: NodeId) -> MenuResult<&mut MenuNode> {
        let node = self.get_mut(id)?;
        let name = node.running_title.clone();
        node.as_menu_mut().ok_or(MenuError::NotAMenu { name })
    }

    pub fn parent(&self, id: NodeId) -> MenuResult<Option<NodeId>> {
        Ok(self.get(id)?.parent)
    }

    /// Append `child` to `menu` and point the child's parent link at `menu`.
    ///
    /// A child that already had a parent is silently re-parented.
    pub fn add_child(&mut self, menu: NodeId, child: NodeId) -> MenuResult<()> {
        self.get(child)?;
        self.menu_mut(menu)?.children.push(child);
        self.nodes[child.0].parent = Some(menu);
        Ok(())
    }

    /// Insert `node` into the arena and append it to `menu` in one step
    pub fn push_child(&mut self, menu: NodeId, node: ViewNode) -> MenuResult<NodeId> {
        self.menu(menu)?;
        let id = self.insert(node);
        self.add_child(menu, id)?;
        Ok(id)
    }

    /// Remove the child at `position`, shifting later children down.
    ///
    /// Returns the removed id. Its parent link is left untouched.
    pub fn remove_child(&mut self, menu: NodeId, position: usize) -> MenuResult<NodeId> {
        let name = self.get(menu)?.running_title.clone();
        let menu = self.menu_mut(menu)?;
        if position >= menu.children.len() {
            return Err(MenuError::ChildIndexOutOfRange {
                menu: name,
                position,
                len: menu.children.len(),
            });
        }
        Ok(menu.children.remove(position))
    }

    /// Snapshot of the child list; later edits to it do not touch the tree.
    pub fn children(&self, menu: NodeId) -> MenuResult<Vec<NodeId>> {
        Ok(self.menu(menu)?.children.clone())
    }

    /// Replace the child list with a copy of `children`.
    ///
    /// Parent links of the new children are not updated.
    pub fn set_children(&mut self, menu: NodeId, children: &[NodeId]) -> MenuResult<()> {
        for &child in children {
            self.get(child)?;
        }
        self.menu_mut(menu)?.children = children.to_vec();
        Ok(())
    }
}
