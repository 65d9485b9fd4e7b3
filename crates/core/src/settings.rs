//! Settings - board shape and music preference, plus text-input validation.

use serde::{Deserialize, Serialize};

use crate::error::SettingsError;
use crate::types::{SettingsAction, SettingsField, DEFAULT_COLS, DEFAULT_ROWS, MAX_COLS, MAX_ROWS};

/// Maximum characters accepted by a numeric settings field.
pub const FIELD_MAX_LEN: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub rows: usize,
    pub cols: usize,
    /// Background music preference. Playback itself is not implemented.
    pub music_enabled: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            music_enabled: true,
        }
    }
}

impl Settings {
    /// Validate a shape against the settings bounds.
    pub fn check_dimensions(rows: usize, cols: usize) -> Result<(), SettingsError> {
        if rows == 0 || cols == 0 {
            return Err(SettingsError::Invalid);
        }
        if rows > MAX_ROWS || cols > MAX_COLS {
            return Err(SettingsError::TooLarge {
                max_rows: MAX_ROWS,
                max_cols: MAX_COLS,
            });
        }
        Ok(())
    }

    /// Parse the two text fields of the settings screen.
    ///
    /// Surrounding whitespace is ignored. Anything that is not a positive
    /// integer is `Invalid`; values above the bounds are `TooLarge`.
    ///
    /// ```
    /// use connect_four_core::{Settings, SettingsError};
    ///
    /// assert_eq!(Settings::parse_dimensions("8", "5"), Ok((8, 5)));
    /// assert_eq!(Settings::parse_dimensions("x", "5"), Err(SettingsError::Invalid));
    /// ```
    pub fn parse_dimensions(rows: &str, cols: &str) -> Result<(usize, usize), SettingsError> {
        let rows = parse_positive(rows)?;
        let cols = parse_positive(cols)?;
        Self::check_dimensions(rows, cols)?;
        Ok((rows, cols))
    }

    /// Copy with the board shape replaced, validated.
    pub fn with_dimensions(self, rows: usize, cols: usize) -> Result<Self, SettingsError> {
        Self::check_dimensions(rows, cols)?;
        Ok(Self { rows, cols, ..self })
    }
}

fn parse_positive(s: &str) -> Result<usize, SettingsError> {
    let s = s.trim();
    if s.is_empty() || !s.chars().all(|c| c.is_ascii_digit()) {
        return Err(SettingsError::Invalid);
    }
    // All digits: only overflow can fail here, which is certainly too large.
    match s.parse::<usize>() {
        Ok(0) => Err(SettingsError::Invalid),
        Ok(v) => Ok(v),
        Err(_) => Err(SettingsError::TooLarge {
            max_rows: MAX_ROWS,
            max_cols: MAX_COLS,
        }),
    }
}

/// Result of feeding one action to a [`SettingsForm`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormOutcome {
    Stay,
    /// Validated; the caller should store these.
    Saved(Settings),
    /// Edits discarded; these are the settings the form was opened with.
    Cancelled(Settings),
}

/// Editable copy of [`Settings`] behind the settings screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsForm {
    rows_text: String,
    cols_text: String,
    music_enabled: bool,
    focus: SettingsField,
    error: Option<SettingsError>,
    original: Settings,
}

impl SettingsForm {
    pub fn open(current: Settings) -> Self {
        Self {
            rows_text: current.rows.to_string(),
            cols_text: current.cols.to_string(),
            music_enabled: current.music_enabled,
            focus: SettingsField::Rows,
            error: None,
            original: current,
        }
    }

    pub fn apply(&mut self, action: SettingsAction) -> FormOutcome {
        match action {
            SettingsAction::NextField => self.focus = self.focus.next(),
            SettingsAction::PrevField => self.focus = self.focus.prev(),
            SettingsAction::Input(c) => {
                if let Some(text) = self.text_mut(self.focus) {
                    if text.chars().count() < FIELD_MAX_LEN && !c.is_control() {
                        text.push(c);
                    }
                }
            }
            SettingsAction::Backspace => {
                if let Some(text) = self.text_mut(self.focus) {
                    text.pop();
                }
            }
            SettingsAction::ToggleMusic => self.music_enabled = !self.music_enabled,
            SettingsAction::ResetDefaults => {
                let d = Settings::default();
                self.rows_text = d.rows.to_string();
                self.cols_text = d.cols.to_string();
                self.error = None;
            }
            SettingsAction::Save => {
                return match Settings::parse_dimensions(&self.rows_text, &self.cols_text) {
                    Ok((rows, cols)) => {
                        self.error = None;
                        FormOutcome::Saved(Settings {
                            rows,
                            cols,
                            music_enabled: self.music_enabled,
                        })
                    }
                    Err(e) => {
                        self.error = Some(e);
                        FormOutcome::Stay
                    }
                };
            }
            SettingsAction::Back => {
                self.music_enabled = self.original.music_enabled;
                return FormOutcome::Cancelled(self.original);
            }
        }
        FormOutcome::Stay
    }

    fn text_mut(&mut self, field: SettingsField) -> Option<&mut String> {
        match field {
            SettingsField::Rows => Some(&mut self.rows_text),
            SettingsField::Cols => Some(&mut self.cols_text),
            SettingsField::Music => None,
        }
    }

    pub fn rows_text(&self) -> &str {
        &self.rows_text
    }

    pub fn cols_text(&self) -> &str {
        &self.cols_text
    }

    pub fn music_enabled(&self) -> bool {
        self.music_enabled
    }

    pub fn focus(&self) -> SettingsField {
        self.focus
    }

    pub fn error(&self) -> Option<&SettingsError> {
        self.error.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_six_by_seven() {
        let s = Settings::default();
        assert_eq!((s.rows, s.cols), (6, 7));
        assert!(s.music_enabled);
    }

    #[test]
    fn parse_accepts_bounds() {
        assert_eq!(Settings::parse_dimensions("10", "7"), Ok((10, 7)));
        assert_eq!(Settings::parse_dimensions("1", "1"), Ok((1, 1)));
        assert_eq!(Settings::parse_dimensions(" 4 ", "4"), Ok((4, 4)));
    }

    #[test]
    fn parse_rejects_non_numbers_and_zero() {
        for (r, c) in [("", "7"), ("6", ""), ("a", "7"), ("0", "7"), ("6", "0"), ("-1", "7"), ("1.5", "2")] {
            assert_eq!(
                Settings::parse_dimensions(r, c),
                Err(SettingsError::Invalid),
                "{r:?} x {c:?}"
            );
        }
    }

    #[test]
    fn parse_rejects_too_large() {
        let too_large = Err(SettingsError::TooLarge {
            max_rows: 10,
            max_cols: 7,
        });
        assert_eq!(Settings::parse_dimensions("11", "7"), too_large);
        assert_eq!(Settings::parse_dimensions("6", "8"), too_large);
        assert_eq!(
            Settings::parse_dimensions("99999999999999999999999", "7"),
            too_large
        );
    }

    #[test]
    fn with_dimensions_keeps_music() {
        let s = Settings {
            music_enabled: false,
            ..Settings::default()
        };
        let s = s.with_dimensions(3, 3).unwrap();
        assert_eq!((s.rows, s.cols, s.music_enabled), (3, 3, false));
        assert!(s.with_dimensions(0, 3).is_err());
    }

    #[test]
    fn error_messages_match_settings_screen() {
        assert_eq!(
            SettingsError::Invalid.to_string(),
            "Please enter valid values for rows and columns."
        );
        assert_eq!(
            SettingsError::TooLarge {
                max_rows: 10,
                max_cols: 7
            }
            .to_string(),
            "The maximum limit for rows is 10 and columns is 7."
        );
    }

    fn type_into(form: &mut SettingsForm, s: &str) {
        for c in s.chars() {
            form.apply(SettingsAction::Input(c));
        }
    }

    #[test]
    fn form_edits_and_saves() {
        let mut form = SettingsForm::open(Settings::default());
        assert_eq!((form.rows_text(), form.cols_text()), ("6", "7"));
        form.apply(SettingsAction::Backspace);
        type_into(&mut form, "8");
        form.apply(SettingsAction::NextField);
        form.apply(SettingsAction::Backspace);
        type_into(&mut form, "5");
        form.apply(SettingsAction::ToggleMusic);
        assert_eq!(
            form.apply(SettingsAction::Save),
            FormOutcome::Saved(Settings {
                rows: 8,
                cols: 5,
                music_enabled: false
            })
        );
    }

    #[test]
    fn form_fields_hold_two_chars() {
        let mut form = SettingsForm::open(Settings::default());
        type_into(&mut form, "123");
        assert_eq!(form.rows_text(), "61");
    }

    #[test]
    fn form_save_error_stays_open() {
        let mut form = SettingsForm::open(Settings::default());
        form.apply(SettingsAction::Backspace);
        type_into(&mut form, "11");
        assert_eq!(form.apply(SettingsAction::Save), FormOutcome::Stay);
        assert!(matches!(form.error(), Some(SettingsError::TooLarge { .. })));

        form.apply(SettingsAction::Backspace);
        form.apply(SettingsAction::Backspace);
        assert_eq!(form.apply(SettingsAction::Save), FormOutcome::Stay);
        assert_eq!(form.error(), Some(&SettingsError::Invalid));

        form.apply(SettingsAction::ResetDefaults);
        assert_eq!(form.error(), None);
        assert_eq!(form.rows_text(), "6");
    }

    #[test]
    fn form_back_reverts_music() {
        let original = Settings {
            music_enabled: false,
            ..Settings::default()
        };
        let mut form = SettingsForm::open(original);
        form.apply(SettingsAction::ToggleMusic);
        assert!(form.music_enabled());
        assert_eq!(form.apply(SettingsAction::Back), FormOutcome::Cancelled(original));
        assert!(!form.music_enabled());
    }
}
