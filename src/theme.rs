//! Theme Controller
//!
//! Two named visual variants persisted in localStorage. Changing the theme
//! sets the body class, and the `darker` variant additionally marks the
//! header title with a modifier class. On startup the saved choice is
//! restored and the same side effects replay.

/// localStorage key holding the current theme name.
const STORAGE_KEY: &str = "savedTheme";

/// Id of the header title element the darker theme restyles.
const TITLE_ELEMENT_ID: &str = "title";

/// Modifier class applied to the title only under the darker theme.
const DARKER_TITLE_CLASS: &str = "darker-title";

/// Named visual style variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Standard,
    Darker,
}

impl Theme {
    pub fn name(self) -> &'static str {
        match self {
            Theme::Standard => "standard",
            Theme::Darker => "darker",
        }
    }

    /// Unknown names fall back to the standard theme.
    pub fn from_name(name: &str) -> Theme {
        match name {
            "darker" => Theme::Darker,
            _ => Theme::Standard,
        }
    }

    /// Theme-dependent class for form inputs, e.g. `standard-input`.
    pub fn input_class(self) -> String {
        format!("{}-input", self.name())
    }

    /// Theme-dependent class for buttons, e.g. `darker-button`.
    pub fn button_class(self) -> String {
        format!("{}-button", self.name())
    }

    /// Class list for one todo card.
    pub fn todo_class(self, completed: bool) -> String {
        if completed {
            format!("todo {}-todo completed", self.name())
        } else {
            format!("todo {}-todo", self.name())
        }
    }
}

/// Read the saved theme from localStorage, defaulting to standard.
pub fn load_theme() -> Theme {
    let stored = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten());

    match stored {
        Some(name) => Theme::from_name(&name),
        None => Theme::Standard,
    }
}

/// Persist the theme name to localStorage.
pub fn save_theme(theme: Theme) {
    if let Some(storage) = web_sys::window().and_then(|window| window.local_storage().ok().flatten())
    {
        let _ = storage.set_item(STORAGE_KEY, theme.name());
    }
}

/// Apply the theme's DOM side effects: body class, and the title modifier
/// only when darker.
pub fn apply_theme(theme: Theme) {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };

    if let Some(body) = document.body() {
        body.set_class_name(theme.name());
    }

    if let Some(title) = document.get_element_by_id(TITLE_ELEMENT_ID) {
        let class_list = title.class_list();
        let _ = match theme {
            Theme::Darker => class_list.add_1(DARKER_TITLE_CLASS),
            Theme::Standard => class_list.remove_1(DARKER_TITLE_CLASS),
        };
    }
}

/// Persist and apply in one step — the transition triggered by the selector.
pub fn change_theme(theme: Theme) {
    web_sys::console::log_1(&format!("[THEME] switching to {}", theme.name()).into());
    save_theme(theme);
    apply_theme(theme);
}

/// Swatch entries for the header selector: one per named variant.
pub const THEME_CHOICES: [Theme; 2] = [Theme::Standard, Theme::Darker];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_name_roundtrip() {
        for theme in THEME_CHOICES {
            assert_eq!(Theme::from_name(theme.name()), theme);
        }
    }

    #[test]
    fn test_unknown_name_defaults_to_standard() {
        assert_eq!(Theme::from_name("neon"), Theme::Standard);
        assert_eq!(Theme::from_name(""), Theme::Standard);
    }

    #[test]
    fn test_default_is_standard() {
        assert_eq!(Theme::default(), Theme::Standard);
    }

    #[test]
    fn test_theme_dependent_classes() {
        assert_eq!(Theme::Standard.input_class(), "standard-input");
        assert_eq!(Theme::Darker.button_class(), "darker-button");
        assert_eq!(Theme::Darker.todo_class(true), "todo darker-todo completed");
        assert_eq!(Theme::Standard.todo_class(false), "todo standard-todo");
    }
}
