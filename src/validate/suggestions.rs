
const MAX_SUGGESTIONS: usize = 5;

/// Computes the edit distance between `input` and `option` used to rank suggestions.
///
/// A case-only difference ranks just behind an exact match, and otherwise the optimal string
/// alignment distance of the lowercased strings is used, so that a transposition counts as a
/// single edit.
fn lexical_distance(input: &str, input_lowercase: &str, option: &str) -> usize {
    if input == option {
        return 0;
    }
    let option_lowercase = option.to_lowercase();
    if input_lowercase == option_lowercase {
        1
    } else {
        strsim::osa_distance(input_lowercase, &option_lowercase)
    }
}

/// Returns the options that are similar to `input`, ordered from most to least similar.
///
/// Options are only considered similar when their distance is within 40% of the input's length,
/// and ties are broken alphabetically.
pub(crate) fn suggestion_list<'o, I>(input: &str, options: I) -> Vec<&'o str>
where
    I: IntoIterator<Item = &'o str>,
{
    let input_lowercase = input.to_lowercase();
    let threshold = input.chars().count() * 2 / 5 + 1;
    let mut suggestions: Vec<(usize, &'o str)> = options
        .into_iter()
        .filter_map(|option| {
            let distance = lexical_distance(input, &input_lowercase, option);
            (distance <= threshold).then_some((distance, option))
        })
        .collect();
    suggestions.sort_unstable();
    suggestions.dedup();
    suggestions.into_iter().map(|(_, option)| option).collect()
}

/// Formats a list of suggestions as a sentence that is appended to a diagnostic.
///
/// Returns an empty string when there's nothing to suggest, and lists at most five suggestions.
pub(crate) fn did_you_mean(sub_message: Option<&str>, suggestions: &[&str]) -> String {
    let mut message = String::new();
    if suggestions.is_empty() {
        return message;
    }
    message.push_str(" Did you mean ");
    if let Some(sub_message) = sub_message {
        message.push_str(sub_message);
        message.push(' ');
    }
    let quoted: Vec<String> = suggestions
        .iter()
        .take(MAX_SUGGESTIONS)
        .map(|suggestion| format!("'{}'", suggestion))
        .collect();
    match quoted.as_slice() {
        [only] => message.push_str(only),
        [first, second] => message.push_str(&format!("{} or {}", first, second)),
        [init @ .., last] => {
            message.push_str(&init.join(", "));
            message.push_str(&format!(", or {}", last));
        }
        [] => {}
    }
    message.push('?');
    message
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranks_similar_options() {
        assert_eq!(suggestion_list("catOrDog", ["catOrDog", "dog", "cat"]), vec!["catOrDog"]);
        assert_eq!(suggestion_list("CATORDOG", ["catOrDog", "cat"]), vec!["catOrDog"]);
        assert_eq!(suggestion_list("naem", ["nickname", "name"]), vec!["name"]);
        assert_eq!(suggestion_list("ab", ["ba", "bb", "aa"]), vec!["aa", "ba", "bb"]);
        assert!(suggestion_list("firstUnknownField", ["dog", "human", "catOrDog"]).is_empty());
    }

    #[test]
    fn formats_sentences() {
        assert_eq!(did_you_mean(None, &[]), "");
        assert_eq!(did_you_mean(None, &["a"]), " Did you mean 'a'?");
        assert_eq!(did_you_mean(None, &["a", "b"]), " Did you mean 'a' or 'b'?");
        assert_eq!(
            did_you_mean(Some("the enum value"), &["a", "b", "c"]),
            " Did you mean the enum value 'a', 'b', or 'c'?"
        );
        assert_eq!(
            did_you_mean(None, &["a", "b", "c", "d", "e", "f"]),
            " Did you mean 'a', 'b', 'c', 'd', or 'e'?"
        );
    }
}
