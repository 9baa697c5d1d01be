use serde::{Deserialize, Serialize};

/// Kind of custom field
///
/// The server supports exactly these eleven kinds; new ones only appear with
/// a server release, so the enum is deliberately closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// Single line of text
    String,
    /// Whole number
    Integer,
    /// Multi-line text area
    Text,
    /// Link rendered as a clickable URL
    Url,
    /// Boolean checkbox
    Checkbox,
    /// Single choice from a fixed item list
    Dropdown,
    /// User picker
    User,
    /// Date picker
    Date,
    /// Milestone picker
    Milestone,
    /// Separated test steps
    Steps,
    /// Multiple choices from a fixed item list
    Multiselect,
}

impl FieldKind {
    /// Wire name used as the `type` discriminator on creation requests
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::String => "string",
            FieldKind::Integer => "integer",
            FieldKind::Text => "text",
            FieldKind::Url => "url",
            FieldKind::Checkbox => "checkbox",
            FieldKind::Dropdown => "dropdown",
            FieldKind::User => "user",
            FieldKind::Date => "date",
            FieldKind::Milestone => "milestone",
            FieldKind::Steps => "steps",
            FieldKind::Multiselect => "multiselect",
        }
    }

    /// Parse from the wire name
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "string" => Some(FieldKind::String),
            "integer" => Some(FieldKind::Integer),
            "text" => Some(FieldKind::Text),
            "url" => Some(FieldKind::Url),
            "checkbox" => Some(FieldKind::Checkbox),
            "dropdown" => Some(FieldKind::Dropdown),
            "user" => Some(FieldKind::User),
            "date" => Some(FieldKind::Date),
            "milestone" => Some(FieldKind::Milestone),
            "steps" => Some(FieldKind::Steps),
            "multiselect" => Some(FieldKind::Multiselect),
            _ => None,
        }
    }

    /// Integer type code reported on field definitions read back from the
    /// server. Code 11 is unassigned; multiselect is 12.
    pub fn type_id(&self) -> u8 {
        match self {
            FieldKind::String => 1,
            FieldKind::Integer => 2,
            FieldKind::Text => 3,
            FieldKind::Url => 4,
            FieldKind::Checkbox => 5,
            FieldKind::Dropdown => 6,
            FieldKind::User => 7,
            FieldKind::Date => 8,
            FieldKind::Milestone => 9,
            FieldKind::Steps => 10,
            FieldKind::Multiselect => 12,
        }
    }

    /// Look up a kind from its integer type code
    pub fn from_type_id(type_id: u8) -> Option<Self> {
        match type_id {
            1 => Some(FieldKind::String),
            2 => Some(FieldKind::Integer),
            3 => Some(FieldKind::Text),
            4 => Some(FieldKind::Url),
            5 => Some(FieldKind::Checkbox),
            6 => Some(FieldKind::Dropdown),
            7 => Some(FieldKind::User),
            8 => Some(FieldKind::Date),
            9 => Some(FieldKind::Milestone),
            10 => Some(FieldKind::Steps),
            12 => Some(FieldKind::Multiselect),
            _ => None,
        }
    }

    /// All kinds in wire-code order
    pub fn all() -> [FieldKind; 11] {
        [
            FieldKind::String,
            FieldKind::Integer,
            FieldKind::Text,
            FieldKind::Url,
            FieldKind::Checkbox,
            FieldKind::Dropdown,
            FieldKind::User,
            FieldKind::Date,
            FieldKind::Milestone,
            FieldKind::Steps,
            FieldKind::Multiselect,
        ]
    }
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_inverts_as_str() {
        for kind in FieldKind::all() {
            assert_eq!(FieldKind::parse(kind.as_str()), Some(kind));
        }
        assert_eq!(FieldKind::parse("enum"), None);
        assert_eq!(FieldKind::parse("String"), None);
    }

    #[test]
    fn type_ids_skip_eleven() {
        for kind in FieldKind::all() {
            assert_eq!(FieldKind::from_type_id(kind.type_id()), Some(kind));
        }
        assert_eq!(FieldKind::Multiselect.type_id(), 12);
        assert_eq!(FieldKind::from_type_id(11), None);
        assert_eq!(FieldKind::from_type_id(0), None);
    }

    #[test]
    fn serializes_as_wire_name() {
        let json = serde_json::to_value(FieldKind::Multiselect).unwrap();
        assert_eq!(json, serde_json::json!("multiselect"));
        let kind: FieldKind = serde_json::from_value(serde_json::json!("steps")).unwrap();
        assert_eq!(kind, FieldKind::Steps);
    }

    #[test]
    fn displays_wire_name() {
        assert_eq!(FieldKind::Checkbox.to_string(), "checkbox");
    }
}
