/// Whether an absent field is an error.
///
/// Registration and full replacement (PUT) require their fields; partial
/// updates (PATCH) treat an absent field as "leave unchanged".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    Required,
    Optional,
}
