//! Controlled and uncontrolled value storage.

use std::fmt;

/// Callback invoked with the requested new value.
pub type ChangeHandler<T> = Box<dyn FnMut(Option<&T>)>;

/// Holds a value that is either owned here or controlled by the caller.
///
/// Uncontrolled storage applies every `set_value` itself. Controlled storage
/// only reports the request through the change handler; the caller decides
/// whether to push the value back with [`ControlledState::sync_controlled`].
pub struct ControlledState<T> {
    value: Option<T>,
    is_controlled: bool,
    on_change: Option<ChangeHandler<T>>,
}

impl<T: PartialEq> ControlledState<T> {
    pub fn uncontrolled(default_value: Option<T>) -> Self {
        Self {
            value: default_value,
            is_controlled: false,
            on_change: None,
        }
    }

    pub fn controlled(value: Option<T>) -> Self {
        Self {
            value,
            is_controlled: true,
            on_change: None,
        }
    }

    pub fn set_on_change(&mut self, handler: ChangeHandler<T>) {
        self.on_change = Some(handler);
    }

    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub fn is_controlled(&self) -> bool {
        self.is_controlled
    }

    /// Requests a new value; the handler fires only when it differs.
    pub fn set_value(&mut self, value: Option<T>) {
        if value == self.value {
            return;
        }
        if let Some(handler) = self.on_change.as_mut() {
            handler(value.as_ref());
        }
        if !self.is_controlled {
            self.value = value;
        }
    }

    /// Replaces the value from the controlling caller without notifying.
    pub fn sync_controlled(&mut self, value: Option<T>) {
        self.value = value;
    }
}

impl<T: fmt::Debug> fmt::Debug for ControlledState<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ControlledState")
            .field("value", &self.value)
            .field("is_controlled", &self.is_controlled)
            .field("has_on_change", &self.on_change.is_some())
            .finish()
    }
}
