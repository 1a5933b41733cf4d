//! Input validation for disk scheduling runs.
//!
//! Two layers:
//! - [`sanitize_queue`] turns free-form request text into the pending
//!   list. It is lenient: malformed or out-of-range tokens are dropped,
//!   never reported as errors.
//! - [`validate_geometry`] is the strict pre-flight check a caller runs
//!   on head/capacity before invoking the engine. The engine itself never
//!   calls it.

use crate::models::Cylinder;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Capacity is zero or negative.
    NonPositiveCapacity,
    /// Head lies outside `[0, capacity]`.
    HeadOutOfRange,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Parses a comma-separated request list into pending cylinders.
///
/// Each token is trimmed and its leading integer is read: an optional
/// sign, then the longest run of digits (hex after a `0x` prefix).
/// Anything after the digits is ignored, so `"12abc"` reads as 12 and
/// `"1.5"` as 1. Tokens with no leading digits, or whose value falls
/// outside `[0, capacity]`, are dropped. Survivors keep their input order.
///
/// # Example
/// ```
/// use u_disk_schedule::validation::sanitize_queue;
///
/// assert_eq!(sanitize_queue(" 50, abc,30 ,-5, 500", 199), vec![50, 30]);
/// assert_eq!(sanitize_queue("12abc, 1.5", 199), vec![12, 1]);
/// ```
pub fn sanitize_queue(raw: &str, capacity: Cylinder) -> Vec<Cylinder> {
    raw.split(',')
        .map(str::trim)
        .filter_map(|token| match parse_leading_int(token) {
            Some(c) if (0..=capacity).contains(&c) => Some(c),
            Some(c) => {
                tracing::debug!(cylinder = c, capacity, "dropping out-of-range request");
                None
            }
            None => {
                if !token.is_empty() {
                    tracing::debug!(token, "dropping unparseable request");
                }
                None
            }
        })
        .collect()
}

/// Reads the integer prefix of `token`. `None` when there are no
/// leading digits or the value does not fit in a [`Cylinder`].
fn parse_leading_int(token: &str) -> Option<Cylinder> {
    let (negative, rest) = match token.as_bytes().first() {
        Some(b'-') => (true, &token[1..]),
        Some(b'+') => (false, &token[1..]),
        _ => (false, token),
    };
    let (radix, digits) = match rest.get(..2) {
        Some("0x") | Some("0X") => (16, &rest[2..]),
        _ => (10, rest),
    };

    let end = digits
        .find(|c: char| !c.is_digit(radix))
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let magnitude = Cylinder::from_str_radix(&digits[..end], radix).ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// Validates head and capacity before scheduling.
///
/// Checks:
/// 1. Capacity is positive
/// 2. Head lies within `[0, capacity]`
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_geometry(head: Cylinder, capacity: Cylinder) -> ValidationResult {
    let mut errors = Vec::new();

    if capacity <= 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::NonPositiveCapacity,
            format!("Capacity must be positive, got {capacity}"),
        ));
    }

    if head < 0 || head > capacity.max(0) {
        errors.push(ValidationError::new(
            ValidationErrorKind::HeadOutOfRange,
            format!("Head {head} is outside [0, {capacity}]"),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
