/// Turn an identifier into space-separated, capitalised words
///
/// `firstName` becomes `First Name`, `ov_chipkaart-number` becomes
/// `Ov Chipkaart Number`. Only the first letter of each word is changed, so
/// acronyms stay upper case (`XMLHttpRequest` becomes `XML Http Request`).
pub fn start_case(input: &str) -> String {
    split_words(input)
        .iter()
        .map(|word| upper_first(word))
        .collect::<Vec<_>>()
        .join(" ")
}

fn split_words(input: &str) -> Vec<String> {
    let chars: Vec<char> = input.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }

        if let Some(prev) = current.chars().last() {
            let next = chars.get(i + 1).copied();
            if is_boundary(prev, c, next) {
                words.push(std::mem::take(&mut current));
            }
        }

        current.push(c);
    }

    if !current.is_empty() {
        words.push(current);
    }

    words
}

fn is_boundary(prev: char, c: char, next: Option<char>) -> bool {
    if prev.is_numeric() != c.is_numeric() {
        return true;
    }
    if prev.is_lowercase() && c.is_uppercase() {
        return true;
    }
    // end of an upper case run: "XMLHttp" splits before the "H"
    prev.is_uppercase() && c.is_uppercase() && next.is_some_and(char::is_lowercase)
}

fn upper_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_case() {
        assert_eq!(start_case("firstName"), "First Name");
        assert_eq!(start_case("ovChipkaartNumber"), "Ov Chipkaart Number");
        assert_eq!(start_case("email"), "Email");
    }

    #[test]
    fn test_separators() {
        assert_eq!(start_case("start_date"), "Start Date");
        assert_eq!(start_case("--foo-bar--"), "Foo Bar");
        assert_eq!(start_case("  end   date "), "End Date");
    }

    #[test]
    fn test_upper_case_runs() {
        assert_eq!(start_case("XMLHttpRequest"), "XML Http Request");
        assert_eq!(start_case("__FOO_BAR__"), "FOO BAR");
    }

    #[test]
    fn test_digits() {
        assert_eq!(start_case("address2"), "Address 2");
        assert_eq!(start_case("line10Text"), "Line 10 Text");
    }

    #[test]
    fn test_empty() {
        assert_eq!(start_case(""), "");
        assert_eq!(start_case("__"), "");
    }
}
