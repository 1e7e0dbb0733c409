use yew::prelude::*;

const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Theme> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

fn apply_theme(theme: Theme) {
    let root = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element());
    if let Some(root) = root {
        let classes = root.class_list();
        if classes.toggle_with_force("dark", theme == Theme::Dark).is_err() {
            log::warn!("Could not apply {} theme", theme.as_str());
        }
    }
}

fn theme_storage() -> Option<web_sys::Storage> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok())
        .flatten()
}

/// Anything missing or unrecognised in storage reads as light.
pub fn theme_from_storage(raw: Option<&str>) -> Theme {
    raw.and_then(Theme::parse).unwrap_or_default()
}

fn stored_theme() -> Theme {
    let raw = theme_storage()
        .and_then(|storage| storage.get_item(THEME_KEY).ok())
        .flatten();
    theme_from_storage(raw.as_deref())
}

/// Writes the bare theme word, not a JSON string.
fn store_theme(theme: Theme) {
    match theme_storage() {
        Some(storage) => {
            if storage.set_item(THEME_KEY, theme.as_str()).is_err() {
                log::warn!("Could not persist {} theme", theme.as_str());
            }
        }
        None => log::warn!("localStorage unavailable, {} theme not persisted", theme.as_str()),
    }
}

/// Current theme plus a callback that flips and persists it. Call once and
/// hand both to every `ThemeToggle` so they stay in step.
#[hook]
pub fn use_theme() -> (Theme, Callback<MouseEvent>) {
    let theme = use_state(stored_theme);

    use_effect_with_deps(
        move |theme| {
            apply_theme(*theme);
            || ()
        },
        *theme,
    );

    let toggle = {
        let theme = theme.clone();
        Callback::from(move |_: MouseEvent| {
            let next = theme.toggled();
            log::debug!("Switching to {} theme", next.as_str());
            store_theme(next);
            theme.set(next);
        })
    };

    (*theme, toggle)
}

#[derive(Properties, PartialEq)]
pub struct ThemeToggleProps {
    pub theme: Theme,
    pub on_toggle: Callback<MouseEvent>,
}

#[function_component(ThemeToggle)]
pub fn theme_toggle(props: &ThemeToggleProps) -> Html {
    let theme = props.theme;
    html! {
        <button
            class="theme-toggle"
            onclick={props.on_toggle.clone()}
            title={format!("Toggle {} mode", theme.toggled().as_str())}
        >
            { if theme == Theme::Light { "☀" } else { "☾" } }
            <span class="sr-only">{"Toggle theme"}</span>
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_stored_values_fall_back_to_light() {
        assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
        assert_eq!(Theme::parse("solarized"), None);
        assert_eq!(Theme::parse("solarized").unwrap_or_default(), Theme::Light);
    }

    #[test]
    fn storage_holds_the_bare_theme_word() {
        assert_eq!(theme_from_storage(Some(Theme::Dark.as_str())), Theme::Dark);
        assert_eq!(Theme::Dark.as_str(), "dark");
        assert_eq!(theme_from_storage(Some("\"dark\"")), Theme::Light);
        assert_eq!(theme_from_storage(None), Theme::Light);
    }

    #[test]
    fn toggling_twice_is_identity() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }
}
