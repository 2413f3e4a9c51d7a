use serde::{Deserialize, Serialize};

use crate::shared::core::primitives::deserialize_numeric_id;

pub type StudentId = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttendanceStatus {
    Present,
    Absent,
    Leave,
}

impl AttendanceStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Present => "Present",
            Self::Absent => "Absent",
            Self::Leave => "Leave",
        }
    }
}

impl std::fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One line of a day's roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentEntry {
    #[serde(deserialize_with = "deserialize_numeric_id")]
    pub id: StudentId,
    pub name: String,
    pub status: AttendanceStatus,
}

impl StudentEntry {
    pub fn new(id: StudentId, name: impl Into<String>, status: AttendanceStatus) -> Self {
        Self {
            id,
            name: name.into(),
            status,
        }
    }
}

/// A student identity recovered from attendance history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnownStudent {
    pub id: StudentId,
    pub name: String,
}

impl From<&StudentEntry> for KnownStudent {
    fn from(entry: &StudentEntry) -> Self {
        Self {
            id: entry.id,
            name: entry.name.clone(),
        }
    }
}

#[cfg(test)]
mod student_tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    fn it_should_decode_mockapi_shaped_entries() {
        let entry: StudentEntry =
            serde_json::from_value(json!({"id": "4", "name": "Ayesha", "status": "Leave"}))
                .unwrap();
        assert_eq!(entry, StudentEntry::new(4, "Ayesha", AttendanceStatus::Leave));
    }

    #[rstest]
    fn it_should_encode_ids_as_numbers_and_statuses_as_words() {
        let value = serde_json::to_value(StudentEntry::new(2, "Bilal", AttendanceStatus::Present))
            .unwrap();
        assert_eq!(value, json!({"id": 2, "name": "Bilal", "status": "Present"}));
    }

    #[rstest]
    fn it_should_reject_unknown_statuses() {
        let result = serde_json::from_value::<StudentEntry>(
            json!({"id": 1, "name": "Ayesha", "status": "Late"}),
        );
        assert!(result.is_err());
    }

    #[rstest]
    #[case(AttendanceStatus::Present, "Present")]
    #[case(AttendanceStatus::Absent, "Absent")]
    #[case(AttendanceStatus::Leave, "Leave")]
    fn it_should_display_the_wire_word(#[case] status: AttendanceStatus, #[case] word: &str) {
        assert_eq!(status.to_string(), word);
    }
}
