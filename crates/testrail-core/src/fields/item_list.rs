//! Codec for the numbered-line text form dropdown and multiselect items
//! travel in, e.g. `"1, One\n2, Two\n3, Three"`.

/// Encodes `items` one per line, numbering lines from 1.
pub fn encode(items: &[String]) -> String {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| format!("{}, {}", index + 1, item))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Decodes the numbered-line form back into its items.
///
/// Each line must start with the 1-based number of its position followed by
/// `", "`; anything else fails the whole decode. The empty string decodes to
/// an empty list.
pub fn decode(text: &str) -> Option<Vec<String>> {
    if text.is_empty() {
        return Some(Vec::new());
    }
    text.split('\n')
        .enumerate()
        .map(|(index, line)| {
            line.strip_prefix(&format!("{}, ", index + 1))
                .map(str::to_string)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn encode_numbers_lines_from_one() {
        assert_eq!(
            encode(&items(&["One", "Two", "Three"])),
            "1, One\n2, Two\n3, Three"
        );
    }

    #[test]
    fn encode_empty_list_is_empty_string() {
        assert_eq!(encode(&[]), "");
    }

    #[test]
    fn decode_inverts_encode() {
        let list = items(&["Passed", "Blocked", "Failed"]);
        assert_eq!(decode(&encode(&list)), Some(list));
    }

    #[test]
    fn single_item_round_trips() {
        assert_eq!(decode(&encode(&items(&["only"]))), Some(items(&["only"])));
    }

    #[test]
    fn decode_empty_string_is_empty_list() {
        assert_eq!(decode(""), Some(Vec::new()));
    }

    #[test]
    fn decode_keeps_commas_inside_items() {
        assert_eq!(decode("1, Hello, world"), Some(items(&["Hello, world"])));
    }

    #[test]
    fn decode_rejects_wrong_line_number() {
        assert_eq!(decode("1, One\n3, Two"), None);
        assert_eq!(decode("0, One"), None);
    }

    #[test]
    fn decode_rejects_missing_prefix() {
        assert_eq!(decode("One\nTwo"), None);
        assert_eq!(decode("1,One"), None);
    }

    #[test]
    fn decode_rejects_trailing_newline() {
        assert_eq!(decode("1, One\n"), None);
    }
}
