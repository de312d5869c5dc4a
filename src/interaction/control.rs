use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

/// Callback fired after a control's value changed.
pub type ChangeHandler = Rc<dyn Fn()>;

/// Identifies a registered change handler so it can be removed again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandlerId(u64);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    #[must_use]
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    /// Option whose value and label are the same text.
    #[must_use]
    pub fn plain(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            label: value.clone(),
            value,
        }
    }
}

/// Dropdown-style input a filter binding observes.
///
/// The first option is the "All ..." sentinel and is never replaced.
pub trait SelectControl {
    /// Currently selected value; the sentinel's value is `""`.
    fn value(&self) -> String;

    /// Registers `handler` to run after every user change.
    fn on_change(&mut self, handler: ChangeHandler) -> HandlerId;

    /// Unregisters a handler. Returns `false` when `id` is not registered.
    fn remove_handler(&mut self, id: HandlerId) -> bool;

    fn options(&self) -> Vec<SelectOption>;

    /// Keeps the first option verbatim and replaces everything after it with
    /// one option per value, in order.
    fn replace_options_after_first(&mut self, values: &[String]);
}

pub type SharedControl = Rc<RefCell<dyn SelectControl>>;

/// Headless select control.
///
/// `MemorySelect::change` plays the role of a user picking an option: it
/// updates the selection and then fires every registered handler.
#[derive(Default)]
pub struct MemorySelect {
    options: Vec<SelectOption>,
    selected: usize,
    handlers: Vec<(HandlerId, ChangeHandler)>,
    next_handler: u64,
}

impl std::fmt::Debug for MemorySelect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemorySelect")
            .field("options", &self.options)
            .field("selected", &self.selected)
            .field("handlers", &self.handlers.len())
            .finish()
    }
}

impl MemorySelect {
    /// Creates a select holding only the sentinel option labelled `sentinel_label`.
    #[must_use]
    pub fn new(sentinel_label: impl Into<String>) -> Self {
        Self {
            options: vec![SelectOption::new("", sentinel_label)],
            selected: 0,
            handlers: Vec::new(),
            next_handler: 0,
        }
    }

    #[must_use]
    pub fn with_options<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options
            .extend(values.into_iter().map(SelectOption::plain));
        self
    }

    /// Selects the option whose value is `value` without notifying handlers.
    ///
    /// Returns `false` and leaves the selection alone when no option matches.
    pub fn select(&mut self, value: &str) -> bool {
        match self.options.iter().position(|option| option.value == value) {
            Some(index) => {
                self.selected = index;
                true
            }
            None => false,
        }
    }

    /// Simulates a user change: selects `value`, then fires the handlers.
    ///
    /// Handlers run after the borrow is released so they may read the control.
    pub fn change(this: &Rc<RefCell<Self>>, value: &str) -> bool {
        let handlers = {
            let mut control = this.borrow_mut();
            if !control.select(value) {
                return false;
            }
            control
                .handlers
                .iter()
                .map(|(_, handler)| Rc::clone(handler))
                .collect::<Vec<_>>()
        };
        for handler in handlers {
            handler();
        }
        true
    }

    #[must_use]
    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }
}

impl SelectControl for MemorySelect {
    fn value(&self) -> String {
        self.options
            .get(self.selected)
            .map(|option| option.value.clone())
            .unwrap_or_default()
    }

    fn on_change(&mut self, handler: ChangeHandler) -> HandlerId {
        let id = HandlerId(self.next_handler);
        self.next_handler += 1;
        self.handlers.push((id, handler));
        id
    }

    fn remove_handler(&mut self, id: HandlerId) -> bool {
        let before = self.handlers.len();
        self.handlers.retain(|(registered, _)| *registered != id);
        self.handlers.len() != before
    }

    fn options(&self) -> Vec<SelectOption> {
        self.options.clone()
    }

    fn replace_options_after_first(&mut self, values: &[String]) {
        self.options.truncate(1);
        self.options
            .extend(values.iter().cloned().map(SelectOption::plain));
        // rebuilding the option list resets the selection to the sentinel
        self.selected = 0;
    }
}
