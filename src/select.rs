//! Platform selection form state.
//!
//! Pure editable state behind the `tui` front-end: a highlighted platform
//! and a stream-key buffer, handed to a registered handler on submit.

use crate::stream::Platform;

/// What the operator confirmed: a platform and, if one was entered, a
/// stream key. An empty key field is reported as `None`, never `Some("")`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformSelection {
    pub platform: Platform,
    pub stream_key: Option<String>,
}

/// Editable selection state plus the handler invoked on submit.
pub struct PlatformForm<F: FnMut(PlatformSelection)> {
    selected: usize,
    stream_key: String,
    on_submit: F,
}

impl<F: FnMut(PlatformSelection)> PlatformForm<F> {
    pub fn new(on_submit: F) -> Self {
        Self {
            selected: 0,
            stream_key: String::new(),
            on_submit,
        }
    }

    pub fn choices(&self) -> &'static [Platform] {
        &Platform::ALL
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn platform(&self) -> Platform {
        Platform::ALL[self.selected]
    }

    pub fn set_platform(&mut self, platform: Platform) {
        self.selected = Platform::ALL
            .iter()
            .position(|p| *p == platform)
            .unwrap_or(self.selected);
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % Platform::ALL.len();
    }

    pub fn select_prev(&mut self) {
        self.selected = self
            .selected
            .checked_sub(1)
            .unwrap_or(Platform::ALL.len() - 1);
    }

    pub fn stream_key(&self) -> &str {
        &self.stream_key
    }

    pub fn push_key_char(&mut self, c: char) {
        self.stream_key.push(c);
    }

    pub fn pop_key_char(&mut self) {
        self.stream_key.pop();
    }

    /// Hand the current values to the handler. The key is not validated;
    /// an empty field is normalized to absent.
    pub fn submit(&mut self) {
        let stream_key = if self.stream_key.is_empty() {
            None
        } else {
            Some(self.stream_key.clone())
        };
        let platform = self.platform();
        (self.on_submit)(PlatformSelection {
            platform,
            stream_key,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn defaults_to_spotify_with_empty_key() {
        let form = PlatformForm::new(|_| {});
        assert_eq!(form.platform(), Platform::Spotify);
        assert_eq!(form.stream_key(), "");
    }

    #[test]
    fn submit_reports_platform_and_key() {
        let seen = RefCell::new(Vec::new());
        let mut form = PlatformForm::new(|sel| seen.borrow_mut().push(sel));

        form.set_platform(Platform::Tiktok);
        for c in "key123".chars() {
            form.push_key_char(c);
        }
        form.submit();

        assert_eq!(
            *seen.borrow(),
            vec![PlatformSelection {
                platform: Platform::Tiktok,
                stream_key: Some("key123".to_string()),
            }]
        );
    }

    #[test]
    fn empty_key_is_reported_as_absent() {
        let seen = RefCell::new(Vec::new());
        let mut form = PlatformForm::new(|sel| seen.borrow_mut().push(sel));

        form.set_platform(Platform::Youtube);
        form.submit();

        let sel = seen.borrow()[0].clone();
        assert_eq!(sel.platform, Platform::Youtube);
        assert_eq!(sel.stream_key, None);
    }

    #[test]
    fn deleting_every_key_char_is_also_absent() {
        let seen = RefCell::new(Vec::new());
        let mut form = PlatformForm::new(|sel| seen.borrow_mut().push(sel));

        form.push_key_char('k');
        form.pop_key_char();
        form.submit();

        assert_eq!(seen.borrow()[0].stream_key, None);
    }

    #[test]
    fn selection_wraps_in_both_directions() {
        let mut form = PlatformForm::new(|_| {});

        form.select_prev();
        assert_eq!(form.platform(), Platform::Liveme);

        form.select_next();
        assert_eq!(form.platform(), Platform::Spotify);

        for _ in 0..Platform::ALL.len() {
            form.select_next();
        }
        assert_eq!(form.platform(), Platform::Spotify);
    }
}
