//! Suggestion sets offered by the search bar for each search type.

use murmur_types::{MessageDescriptor, SearchTerm, SearchType};

fn term(search_term: &str, id: &str, default_message: &str) -> SearchTerm {
    SearchTerm::new(search_term, MessageDescriptor::new(id, default_message))
}

fn shared_terms() -> Vec<SearchTerm> {
    vec![
        term("from:", "search_list_option.from", "Messages from a user"),
        term("in:", "search_list_option.in", "Messages in a channel"),
        term("on:", "search_list_option.on", "Messages on a date"),
        term("before:", "search_list_option.before", "Messages before a date"),
        term("after:", "search_list_option.after", "Messages after a date"),
    ]
}

fn modifier_terms() -> Vec<SearchTerm> {
    vec![
        term("-", "search_list_option.exclude", "Exclude search terms").with_additional_display("-term"),
        term("\"\"", "search_list_option.phrases", "Messages with phrases").with_additional_display("\"phrase\""),
    ]
}

/// Options shown for `search_type`; an unset type gets the message set.
pub fn options_for(search_type: Option<SearchType>) -> Vec<SearchTerm> {
    let mut options = shared_terms();
    if search_type == Some(SearchType::Files) {
        options.push(term("ext:", "search_list_option.ext", "File extension"));
    }
    options.extend(modifier_terms());
    options
}
