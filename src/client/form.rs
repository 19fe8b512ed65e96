// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity form state.
//!
//! Mirrors a browser form: plain text inputs for the name and price, a select
//! for the type, a checkbox for booking, and a slider for accessibility. The
//! only checks are the ones a browser would make before submitting
//! (required inputs, numeric coercion of the price).

use crate::models::{ActivityType, NewActivity};

/// Slider range and step for accessibility.
pub const ACCESSIBILITY_MIN: f64 = 0.0;
pub const ACCESSIBILITY_MAX: f64 = 1.0;
pub const ACCESSIBILITY_STEP: f64 = 0.1;
/// Slider position on a fresh form.
pub const ACCESSIBILITY_DEFAULT: f64 = 0.5;

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum FormError {
    #[error("{0} is required")]
    Required(&'static str),

    #[error("price must be a number, got {0:?}")]
    InvalidPrice(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActivityForm {
    pub activity: String,
    /// Raw text of the price input
    pub price: String,
    pub kind: ActivityType,
    pub booking_required: bool,
    accessibility: f64,
}

impl Default for ActivityForm {
    fn default() -> Self {
        Self {
            activity: String::new(),
            price: String::new(),
            kind: ActivityType::default(),
            booking_required: false,
            accessibility: ACCESSIBILITY_DEFAULT,
        }
    }
}

impl ActivityForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn accessibility(&self) -> f64 {
        self.accessibility
    }

    /// Move the accessibility slider. The value is clamped to the slider's
    /// range and snapped to the nearest step.
    pub fn set_accessibility(&mut self, value: f64) {
        if value.is_nan() {
            return;
        }
        let clamped = value.clamp(ACCESSIBILITY_MIN, ACCESSIBILITY_MAX);
        let steps = ((clamped - ACCESSIBILITY_MIN) / ACCESSIBILITY_STEP).round();
        // Round through tenths so 0.1 * 3 reads back as 0.3.
        let snapped = ACCESSIBILITY_MIN + steps * ACCESSIBILITY_STEP;
        self.accessibility = (snapped * 10.0).round() / 10.0;
    }

    /// Current field values as a create request.
    ///
    /// The name is sent exactly as typed.
    pub fn submission(&self) -> Result<NewActivity, FormError> {
        if self.activity.is_empty() {
            return Err(FormError::Required("activity"));
        }

        let price_text = self.price.trim();
        if price_text.is_empty() {
            return Err(FormError::Required("price"));
        }
        let price: f64 = price_text
            .parse()
            .ok()
            .filter(|p: &f64| p.is_finite())
            .ok_or_else(|| FormError::InvalidPrice(price_text.to_string()))?;

        Ok(NewActivity {
            activity: self.activity.clone(),
            price,
            kind: self.kind,
            booking_required: self.booking_required,
            accessibility: self.accessibility,
        })
    }

    /// Clear every field back to its initial value.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_form_defaults() {
        let form = ActivityForm::new();
        assert_eq!(form.accessibility(), 0.5);
        assert_eq!(form.kind, ActivityType::Education);
        assert!(!form.booking_required);
    }

    #[test]
    fn test_accessibility_snaps_and_clamps() {
        let mut form = ActivityForm::new();

        form.set_accessibility(0.34);
        assert_eq!(form.accessibility(), 0.3);

        form.set_accessibility(0.96);
        assert_eq!(form.accessibility(), 1.0);

        form.set_accessibility(-2.0);
        assert_eq!(form.accessibility(), 0.0);

        form.set_accessibility(7.0);
        assert_eq!(form.accessibility(), 1.0);

        form.set_accessibility(f64::NAN);
        assert_eq!(form.accessibility(), 1.0);
    }

    #[test]
    fn test_submission_requires_name_and_price() {
        let mut form = ActivityForm::new();
        assert_eq!(form.submission(), Err(FormError::Required("activity")));

        form.activity = "Hiking".to_string();
        assert_eq!(form.submission(), Err(FormError::Required("price")));

        form.price = "abc".to_string();
        assert_eq!(
            form.submission(),
            Err(FormError::InvalidPrice("abc".to_string()))
        );
    }

    #[test]
    fn test_submission_sends_name_as_typed() {
        let mut form = ActivityForm::new();
        form.activity = "   ".to_string();
        form.price = "0".to_string();

        let body = form.submission().unwrap();
        assert_eq!(body.activity, "   ");
    }

    #[test]
    fn test_submission_coerces_price() {
        let mut form = ActivityForm::new();
        form.activity = " Hiking ".to_string();
        form.price = "25.50".to_string();
        form.kind = ActivityType::Recreational;
        form.booking_required = true;
        form.set_accessibility(0.3);

        let body = form.submission().unwrap();
        assert_eq!(body.activity, " Hiking ");
        assert_eq!(body.price, 25.5);
        assert_eq!(body.kind, ActivityType::Recreational);
        assert!(body.booking_required);
        assert_eq!(body.accessibility, 0.3);
    }

    #[test]
    fn test_reset_clears_fields() {
        let mut form = ActivityForm::new();
        form.activity = "Cooking class".to_string();
        form.price = "40".to_string();
        form.booking_required = true;
        form.set_accessibility(0.9);

        form.reset();
        assert_eq!(form, ActivityForm::default());
    }
}
