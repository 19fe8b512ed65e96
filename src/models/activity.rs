// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Activity model for storage and API.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Category of an activity. Serialized in lowercase (`"diy"`, `"music"`, ...).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "lowercase")]
pub enum ActivityType {
    #[default]
    Education,
    Recreational,
    Social,
    Diy,
    Charity,
    Cooking,
    Relaxation,
    Music,
    Busywork,
}

impl ActivityType {
    /// All categories in form display order.
    pub const ALL: [ActivityType; 9] = [
        ActivityType::Education,
        ActivityType::Recreational,
        ActivityType::Social,
        ActivityType::Diy,
        ActivityType::Charity,
        ActivityType::Cooking,
        ActivityType::Relaxation,
        ActivityType::Music,
        ActivityType::Busywork,
    ];

    /// Wire value.
    pub fn as_str(self) -> &'static str {
        match self {
            ActivityType::Education => "education",
            ActivityType::Recreational => "recreational",
            ActivityType::Social => "social",
            ActivityType::Diy => "diy",
            ActivityType::Charity => "charity",
            ActivityType::Cooking => "cooking",
            ActivityType::Relaxation => "relaxation",
            ActivityType::Music => "music",
            ActivityType::Busywork => "busywork",
        }
    }

    /// Human-readable label shown in the form's select options.
    pub fn label(self) -> &'static str {
        match self {
            ActivityType::Education => "Education",
            ActivityType::Recreational => "Recreational",
            ActivityType::Social => "Social",
            ActivityType::Diy => "DIY",
            ActivityType::Charity => "Charity",
            ActivityType::Cooking => "Cooking",
            ActivityType::Relaxation => "Relaxation",
            ActivityType::Music => "Music",
            ActivityType::Busywork => "Busywork",
        }
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown activity type: {0}")]
pub struct UnknownActivityType(pub String);

impl FromStr for ActivityType {
    type Err = UnknownActivityType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        ActivityType::ALL
            .into_iter()
            .find(|t| t.as_str() == wanted)
            .ok_or_else(|| UnknownActivityType(s.to_string()))
    }
}

/// Stored activity record.
///
/// The `id` doubles as the Firestore document ID.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    /// Generated on creation, never changes
    pub id: String,
    /// Activity name
    pub activity: String,
    /// Price (RM)
    pub price: f64,
    /// Category
    #[serde(rename = "type")]
    pub kind: ActivityType,
    /// Whether a booking is needed
    #[serde(default)]
    pub booking_required: bool,
    /// Ease of participation in [0, 1]
    pub accessibility: f64,
}

impl Activity {
    /// Merge the fields present in `patch` into this record.
    ///
    /// The id is never touched.
    pub fn apply(&mut self, patch: ActivityPatch) {
        if let Some(activity) = patch.activity {
            self.activity = activity;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(kind) = patch.kind {
            self.kind = kind;
        }
        if let Some(booking_required) = patch.booking_required {
            self.booking_required = booking_required;
        }
        if let Some(accessibility) = patch.accessibility {
            self.accessibility = accessibility;
        }
    }
}

/// Request body for creating an activity.
///
/// Values are stored as sent: no name, price, or accessibility range checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewActivity {
    pub activity: String,
    pub price: f64,
    #[serde(rename = "type")]
    pub kind: ActivityType,
    #[serde(default)]
    pub booking_required: bool,
    pub accessibility: f64,
}

impl NewActivity {
    pub fn into_activity(self, id: String) -> Activity {
        Activity {
            id,
            activity: self.activity,
            price: self.price,
            kind: self.kind,
            booking_required: self.booking_required,
            accessibility: self.accessibility,
        }
    }
}

/// Request body for updating an activity. Absent fields are left unchanged.
///
/// `id` is accepted so a full record can be sent back, but it must match the
/// record being updated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ActivityPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<ActivityType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booking_required: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accessibility: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn hiking() -> Activity {
        Activity {
            id: "abc".to_string(),
            activity: "Hiking".to_string(),
            price: 25.5,
            kind: ActivityType::Recreational,
            booking_required: true,
            accessibility: 0.3,
        }
    }

    #[test]
    fn test_activity_wire_format() {
        let value = serde_json::to_value(hiking()).unwrap();
        assert_eq!(
            value,
            json!({
                "id": "abc",
                "activity": "Hiking",
                "price": 25.5,
                "type": "recreational",
                "bookingRequired": true,
                "accessibility": 0.3
            })
        );
    }

    #[test]
    fn test_new_activity_booking_defaults_to_false() {
        let body: NewActivity = serde_json::from_value(json!({
            "activity": "Pottery",
            "price": 10,
            "type": "diy",
            "accessibility": 0.5
        }))
        .unwrap();

        assert!(!body.booking_required);
        assert_eq!(body.kind, ActivityType::Diy);
        assert_eq!(body.price, 10.0);
    }

    #[test]
    fn test_new_activity_rejects_unknown_fields() {
        let result = serde_json::from_value::<NewActivity>(json!({
            "activity": "Pottery",
            "price": 10,
            "type": "diy",
            "accessibility": 0.5,
            "owner": "someone"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_new_activity_rejects_unknown_type() {
        let result = serde_json::from_value::<NewActivity>(json!({
            "activity": "Pottery",
            "price": 10,
            "type": "sports",
            "accessibility": 0.5
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_new_activity_keeps_out_of_range_values() {
        let body: NewActivity = serde_json::from_value(json!({
            "activity": "",
            "price": -3,
            "type": "relaxation",
            "accessibility": 1.5
        }))
        .unwrap();

        let record = body.into_activity("id1".to_string());
        assert_eq!(record.activity, "");
        assert_eq!(record.price, -3.0);
        assert_eq!(record.accessibility, 1.5);
    }

    #[test]
    fn test_patch_keeps_out_of_range_values() {
        let patch: ActivityPatch =
            serde_json::from_value(json!({ "accessibility": 2, "price": -1 })).unwrap();
        let mut record = hiking();
        record.apply(patch);

        assert_eq!(record.accessibility, 2.0);
        assert_eq!(record.price, -1.0);
    }

    #[test]
    fn test_apply_patch_only_touches_present_fields() {
        let mut record = hiking();
        record.apply(ActivityPatch {
            price: Some(30.0),
            ..Default::default()
        });

        assert_eq!(record.price, 30.0);
        assert_eq!(record.activity, "Hiking");
        assert_eq!(record.kind, ActivityType::Recreational);
        assert!(record.booking_required);
        assert_eq!(record.accessibility, 0.3);
        assert_eq!(record.id, "abc");
    }

    #[test]
    fn test_activity_type_from_str() {
        assert_eq!("DIY".parse::<ActivityType>().unwrap(), ActivityType::Diy);
        assert_eq!(
            " music ".parse::<ActivityType>().unwrap(),
            ActivityType::Music
        );
        assert!("hiking".parse::<ActivityType>().is_err());
    }
}
