use std::ops::{Deref, DerefMut};

use glam::Mat4;

/// Current projection and view used by draw calls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrices {
    pub projection: Mat4,
    pub view: Mat4,
}

impl Default for Matrices {
    fn default() -> Self {
        Self {
            projection: Mat4::IDENTITY,
            view: Mat4::IDENTITY,
        }
    }
}

impl Matrices {
    /// Open a scope; whatever it changes is undone when it drops.
    pub fn scope(&mut self) -> MatrixScope<'_> {
        MatrixScope {
            saved: *self,
            current: self,
        }
    }
}

/// Guard restoring the saved matrices on drop, including early returns.
pub struct MatrixScope<'a> {
    current: &'a mut Matrices,
    saved: Matrices,
}

impl Deref for MatrixScope<'_> {
    type Target = Matrices;

    fn deref(&self) -> &Matrices {
        self.current
    }
}

impl DerefMut for MatrixScope<'_> {
    fn deref_mut(&mut self) -> &mut Matrices {
        self.current
    }
}

impl Drop for MatrixScope<'_> {
    fn drop(&mut self) {
        *self.current = self.saved;
    }
}
