//! Application Context
//!
//! Shared signals provided via Leptos Context API.

use leptos::prelude::*;

use crate::error::SyncError;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Last failure to show the user, if any - read
    pub error: ReadSignal<Option<String>>,
    /// Last failure to show the user, if any - write
    set_error: WriteSignal<Option<String>>,
}

impl AppContext {
    pub fn new(error: (ReadSignal<Option<String>>, WriteSignal<Option<String>>)) -> Self {
        Self {
            error: error.0,
            set_error: error.1,
        }
    }

    /// Surface a failed operation in the error banner
    pub fn report(&self, err: &SyncError) {
        self.set_error.set(Some(err.to_string()));
    }

    /// Dismiss the error banner
    pub fn clear_error(&self) {
        self.set_error.set(None);
    }
}
