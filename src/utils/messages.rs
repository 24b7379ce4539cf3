//! Messages shared by every field, independent of its rule

pub const EMPTY_FIELD_MESSAGE: &str = "Field cannot be empty.";

pub const SURROUNDING_SPACE_MESSAGE: &str = "Field cannot start or end with a space.";

pub const PLACEHOLDER_MESSAGE: &str = "Enter a valid value.";

pub const VALID_MESSAGE: &str = "Valid.";

pub const NO_FIELDS_MESSAGE: &str = "Fill in at least one field to validate!";
