//! Displayable children.
//!
//! A template never renders or inspects its children; it only holds them,
//! lists the visible ones and tags each with its grid area. Children are
//! shared: dropping a slot or the whole container leaves a child the caller
//! still holds intact.

use std::fmt;
use std::ops::Deref;
use std::sync::{Arc, RwLock};

/// Anything a template slot can hold.
pub trait Displayable: Send + Sync {
    /// Stable identifier reported in state snapshots.
    fn widget_id(&self) -> &str;

    /// Receive the grid area the child is placed in.
    fn set_grid_area(&self, area: Option<&str>);
}

/// Shared reference to a slot's child.
#[derive(Clone)]
pub struct Child(Arc<dyn Displayable>);

impl Child {
    pub fn new<D: Displayable + 'static>(widget: D) -> Self {
        Self(Arc::new(widget))
    }

    /// Wrap an already type-erased widget.
    pub fn from_shared(widget: Arc<dyn Displayable>) -> Self {
        Self(widget)
    }

    pub fn id(&self) -> &str {
        self.0.widget_id()
    }

    /// Identity comparison; two handles to the same widget are equal.
    pub fn ptr_eq(&self, other: &Child) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

}

impl<D: Displayable + 'static> From<Arc<D>> for Child {
    fn from(widget: Arc<D>) -> Self {
        Self(widget)
    }
}

impl Deref for Child {
    type Target = dyn Displayable;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

impl fmt::Debug for Child {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Child").field(&self.id()).finish()
    }
}

/// Ready-made child that remembers the area it was placed in.
#[derive(Debug, Default)]
pub struct WidgetHandle {
    id: String,
    grid_area: RwLock<Option<String>>,
}

impl WidgetHandle {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            grid_area: RwLock::new(None),
        }
    }

    /// Convenience for the common case of sharing the handle right away.
    pub fn shared(id: impl Into<String>) -> Arc<Self> {
        Arc::new(Self::new(id))
    }

    pub fn grid_area(&self) -> Option<String> {
        self.grid_area
            .read()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

impl Displayable for WidgetHandle {
    fn widget_id(&self) -> &str {
        &self.id
    }

    fn set_grid_area(&self, area: Option<&str>) {
        if let Ok(mut guard) = self.grid_area.write() {
            *guard = area.map(str::to_string);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn child_identity_follows_the_widget() {
        let button = WidgetHandle::shared("button");
        let first = Child::from(button.clone());
        let second = Child::from(button.clone());
        let other = Child::new(WidgetHandle::new("button"));

        assert!(first.ptr_eq(&second));
        assert!(!first.ptr_eq(&other));
        assert_eq!(other.id(), "button");
    }

    #[test]
    fn handle_records_area() {
        let button = WidgetHandle::shared("button");
        let child = Child::from(button.clone());
        child.set_grid_area(Some("header"));
        assert_eq!(button.grid_area().as_deref(), Some("header"));
        child.set_grid_area(None);
        assert_eq!(button.grid_area(), None);
    }

    #[test]
    fn dropping_child_keeps_widget_alive() {
        let button = WidgetHandle::shared("button");
        let child = Child::from(button.clone());
        assert_eq!(Arc::strong_count(&button), 2);
        drop(child);
        assert_eq!(Arc::strong_count(&button), 1);
    }
}
