use crate::TaskCreate;

/// Trimmed title, or `None` when the
/// draft has nothing to submit.
pub fn normalize_title(
  raw: &str
) -> Option<String> {
  let trimmed = raw.trim();
  if trimmed.is_empty() {
    None
  } else {
    Some(trimmed.to_string())
  }
}

pub fn create_request(
  raw: &str
) -> Option<TaskCreate> {
  normalize_title(raw)
    .map(|title| TaskCreate { title })
}

/// Whether the submit control should be
/// enabled for the current draft.
pub fn can_submit(
  raw: &str,
  pending: bool
) -> bool {
  !pending && !raw.trim().is_empty()
}
