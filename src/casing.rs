//! Property-name casing helpers.

/// `spdx_element_id` -> `spdxElementId`.
///
/// Input is treated case-insensitively, so `SPDX_ELEMENT_ID` yields the same.
pub fn snake_case_to_camel_case(snake: &str) -> String {
    let mut camel = String::with_capacity(snake.len());
    for (index, word) in snake.split('_').filter(|w| !w.is_empty()).enumerate() {
        let lower = word.to_lowercase();
        if index == 0 {
            camel.push_str(&lower);
            continue;
        }
        let mut chars = lower.chars();
        if let Some(first) = chars.next() {
            camel.extend(first.to_uppercase());
            camel.push_str(chars.as_str());
        }
    }
    camel
}
