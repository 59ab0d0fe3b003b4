/// Get the field described by `$field` if it is present and not empty.
/// Evaluates to `Option<&str>`.
#[macro_export]
macro_rules! accept {
    ($fields:expr, $field:expr) => {
        match $fields.get($field.index) {
            Some(s) if !s.is_empty() => Some(*s),
            _ => None,
        }
    };

    ($fields:expr, $field:expr, $parse:expr) => {
        match accept!($fields, $field) {
            Some(s) => Some($parse(s, $field.name)?),
            None => None,
        }
    };
}

/// Like `accept!`, but a missing or empty field fails the sentence with
/// `DecodeError::MissingField`.
#[macro_export]
macro_rules! expect {
    ($fields:expr, $field:expr) => {
        match accept!($fields, $field) {
            Some(s) => Ok(s),
            None => Err(DecodeError::MissingField($field.name)),
        }
    };
    ($fields:expr, $field:expr, $parse:expr) => {
        match accept!($fields, $field) {
            Some(s) => $parse(s, $field.name),
            None => Err(DecodeError::MissingField($field.name)),
        }
    };
}
