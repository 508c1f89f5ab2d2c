// src/services/list.rs

//! Record list extraction.
//!
//! Locates the outer container of a page, enumerates the record fragments
//! inside it and hands each one to a [`RecordParser`].

use scraper::Html;

use crate::error::ExtractError;
use crate::utils::tree::{self, AttrMatcher, NodeRef};

/// Parses one kind of record out of its fragment.
pub trait RecordParser {
    type Record;

    /// Record kind, used in errors and logs.
    const KIND: &'static str;

    /// Human-readable description of the outer container.
    const CONTAINER: &'static str;

    /// Matches the single outer container of the page.
    fn container() -> &'static AttrMatcher;

    /// Matches each record fragment inside the container.
    fn fragment() -> &'static AttrMatcher;

    fn parse(fragment: NodeRef<'_>) -> Result<Self::Record, ExtractError>;

    /// Whether a failed fragment is dropped instead of aborting the parse.
    fn is_skippable(_error: &ExtractError) -> bool {
        false
    }
}

/// Extract every record of kind `P` from `document`, in document order.
///
/// A missing container is an error; a container without fragments yields an
/// empty list. The first non-skippable fragment error aborts the whole
/// extraction and no partial result is returned.
pub fn extract_list<P: RecordParser>(document: &Html) -> Result<Vec<P::Record>, ExtractError> {
    let list = tree::find(tree::root(document), P::container()).ok_or(
        ExtractError::ContainerNotFound {
            record: P::KIND,
            container: P::CONTAINER,
        },
    )?;

    let fragments = tree::find_all(list, P::fragment());
    log::debug!("Found {} {} fragment(s)", fragments.len(), P::KIND);

    let mut records = Vec::with_capacity(fragments.len());
    for (index, fragment) in fragments.into_iter().enumerate() {
        match P::parse(fragment) {
            Ok(record) => records.push(record),
            Err(error) if P::is_skippable(&error) => {
                log::debug!("Skipping {} fragment #{}: {}", P::KIND, index, error);
            }
            Err(error) => return Err(error),
        }
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use std::sync::LazyLock;

    use super::*;
    use crate::error::Field;
    use crate::utils::text::extract_text;

    static LIST: LazyLock<AttrMatcher> = LazyLock::new(|| tree::with_id("list"));
    static ITEM: LazyLock<AttrMatcher> = LazyLock::new(|| tree::with_class("item"));

    /// Items whose text is a number; "skip" is tolerated, anything else fails.
    struct NumberParser;

    impl RecordParser for NumberParser {
        type Record = u32;
        const KIND: &'static str = "number";
        const CONTAINER: &'static str = "id=list";

        fn container() -> &'static AttrMatcher {
            &LIST
        }

        fn fragment() -> &'static AttrMatcher {
            &ITEM
        }

        fn parse(fragment: NodeRef<'_>) -> Result<u32, ExtractError> {
            let text = extract_text(fragment).concat();
            match text.as_str() {
                "skip" => Err(ExtractError::NoDate),
                other => other
                    .parse()
                    .map_err(|e| ExtractError::invalid("number", Field::Id, other, e)),
            }
        }

        fn is_skippable(error: &ExtractError) -> bool {
            matches!(error, ExtractError::NoDate)
        }
    }

    fn run(html: &str) -> Result<Vec<u32>, ExtractError> {
        extract_list::<NumberParser>(&Html::parse_document(html))
    }

    #[test]
    fn test_records_keep_document_order() {
        let html = r#"<ul id="list"><li class="item">3</li><li class="item">1</li>
            <li class="item">2</li></ul><li class="item">9</li>"#;
        assert_eq!(run(html).unwrap(), vec![3, 1, 2]);
    }

    #[test]
    fn test_missing_container_is_fatal() {
        let err = run(r#"<ul><li class="item">1</li></ul>"#).unwrap_err();
        assert!(matches!(err, ExtractError::ContainerNotFound { record: "number", .. }));
    }

    #[test]
    fn test_empty_container_is_success() {
        assert!(run(r#"<div id="list"><p>nothing here</p></div>"#).unwrap().is_empty());
    }

    #[test]
    fn test_skippable_errors_drop_the_fragment() {
        let html = r#"<ul id="list"><li class="item">1</li><li class="item">skip</li>
            <li class="item">2</li></ul>"#;
        assert_eq!(run(html).unwrap(), vec![1, 2]);
    }

    #[test]
    fn test_other_errors_abort_everything() {
        let html = r#"<ul id="list"><li class="item">1</li><li class="item">x</li>
            <li class="item">2</li></ul>"#;
        let err = run(html).unwrap_err();
        assert_eq!(err.field(), Some(Field::Id));
    }
}
