use crate::core::BodyHandle;
use crate::error::PhysicsError;
use crate::Result;

/// Storage for physics bodies
///
/// Backed by a Vec rather than a map: iteration and collision-pair sweep
/// order must follow insertion order, since that order decides how
/// overlapping clusters resolve. Bodies are never removed, so a handle is a
/// stable index for the lifetime of the world.
pub struct BodyStorage<T> {
    items: Vec<T>,
}

impl<T> BodyStorage<T> {
    /// Creates a new empty storage
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Adds an item to the storage and returns its handle
    pub fn add(&mut self, item: T) -> BodyHandle {
        let handle = BodyHandle(self.items.len() as u32);
        self.items.push(item);
        handle
    }

    /// Gets a reference to an item by its handle
    pub fn get(&self, handle: BodyHandle) -> Option<&T> {
        self.items.get(handle.index())
    }

    /// Gets a mutable reference to an item by its handle
    pub fn get_mut(&mut self, handle: BodyHandle) -> Option<&mut T> {
        self.items.get_mut(handle.index())
    }

    /// Returns the number of items in the storage
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns whether the storage is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the items as a slice, in insertion order
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Returns the items as a mutable slice, in insertion order
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.items
    }

    /// Returns an iterator over all items in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (BodyHandle, &T)> {
        self.items
            .iter()
            .enumerate()
            .map(|(index, item)| (BodyHandle(index as u32), item))
    }

    /// Returns a mutable iterator over all items in insertion order
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (BodyHandle, &mut T)> {
        self.items
            .iter_mut()
            .enumerate()
            .map(|(index, item)| (BodyHandle(index as u32), item))
    }

    /// Gets a body by its handle, returning an error if not found
    pub fn get_body(&self, handle: BodyHandle) -> Result<&T> {
        self.get(handle).ok_or_else(|| {
            PhysicsError::ResourceNotFound(format!("Body with handle {:?} not found", handle))
        })
    }

    /// Gets a mutable reference to a body by its handle, returning an error if not found
    pub fn get_body_mut(&mut self, handle: BodyHandle) -> Result<&mut T> {
        self.get_mut(handle).ok_or_else(|| {
            PhysicsError::ResourceNotFound(format!("Body with handle {:?} not found", handle))
        })
    }
}

impl<T> Default for BodyStorage<T> {
    fn default() -> Self {
        Self::new()
    }
}
