// src/services/interviews.rs

//! Interview extraction.
//!
//! Every interview on the page is a fragment whose `data-test` marker is
//! `Interview<id>Container`; its sections carry markers such as
//! `Interview<id>Title` or `Interview<id>Process`.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use scraper::Html;

use crate::error::{ExtractError, Field};
use crate::models::Interview;
use crate::services::list::{RecordParser, extract_list};
use crate::utils::text::Pipeline;
use crate::utils::tree::{self, AttrMatcher, NodeRef};

const RECORD: &str = "interview";

/// `<time datetime="2021-4-2">`; month and day are not zero padded.
const DATE_FORMAT: &str = "%Y-%m-%d";

static CONTAINER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^Interview(?P<id>\d+)Container$").expect("valid interview container pattern")
});

static LIST: LazyLock<AttrMatcher> = LazyLock::new(|| tree::with_data_test("InterviewList"));
static CONTAINER: LazyLock<AttrMatcher> =
    LazyLock::new(|| tree::with_data_test_re(&CONTAINER_RE));
static TITLE: LazyLock<AttrMatcher> = LazyLock::new(|| section("Title"));
static APPLICATION: LazyLock<AttrMatcher> = LazyLock::new(|| section("ApplicationDetails"));
static PROCESS: LazyLock<AttrMatcher> = LazyLock::new(|| section("Process"));
static QUESTIONS: LazyLock<AttrMatcher> = LazyLock::new(|| section("Questions"));

static TITLE_TEXT: LazyLock<Pipeline> = LazyLock::new(|| Pipeline::new().strip_and_filter(&[]));
static APPLICATION_TEXT: LazyLock<Pipeline> = LazyLock::new(|| {
    Pipeline::new()
        .flatten_by_line()
        .strip_and_filter(&["Application"])
});
static PROCESS_TEXT: LazyLock<Pipeline> = LazyLock::new(|| Pipeline::new().flatten_by_line());
static QUESTIONS_TEXT: LazyLock<Pipeline> = LazyLock::new(|| {
    Pipeline::new()
        .flatten_by_line()
        .strip_and_filter(&["Answer Question", "1 Answer"])
});

fn section(name: &str) -> AttrMatcher {
    let re = Regex::new(&format!(r"^Interview\d+{name}$")).expect("valid interview section pattern");
    tree::with_data_test_re(&re)
}

/// Parser for the interviews page.
pub struct InterviewParser;

impl RecordParser for InterviewParser {
    type Record = Interview;

    const KIND: &'static str = RECORD;
    const CONTAINER: &'static str = "data-test=InterviewList";

    fn container() -> &'static AttrMatcher {
        &LIST
    }

    fn fragment() -> &'static AttrMatcher {
        &CONTAINER
    }

    fn parse(fragment: NodeRef<'_>) -> Result<Interview, ExtractError> {
        parse_interview(fragment)
    }

    /// Featured interviews carry no date and are left out.
    fn is_skippable(error: &ExtractError) -> bool {
        matches!(error, ExtractError::NoDate)
    }
}

/// Parse every dated interview on an interviews page.
pub fn parse_interviews(html: &str) -> Result<Vec<Interview>, ExtractError> {
    let document = Html::parse_document(html);
    extract_list::<InterviewParser>(&document)
}

/// Parse a single interview fragment.
pub fn parse_interview(node: NodeRef<'_>) -> Result<Interview, ExtractError> {
    let id = parse_id(node)?;
    let date = parse_date(node)?;
    let title = parse_title(node)?;
    let application = APPLICATION_TEXT.extract(find_section(node, &APPLICATION, Field::Application)?);
    let process = PROCESS_TEXT.extract(find_section(node, &PROCESS, Field::Process)?);
    let questions = QUESTIONS_TEXT.extract(find_section(node, &QUESTIONS, Field::Questions)?);

    log::debug!("Parsed interview {id}");

    Ok(Interview {
        id,
        date,
        title,
        application,
        process,
        questions,
    })
}

fn parse_id(node: NodeRef<'_>) -> Result<String, ExtractError> {
    tree::find_capture(node, "data-test", &CONTAINER_RE, "id")
        .map(str::to_string)
        .ok_or_else(|| ExtractError::missing(RECORD, Field::Id))
}

/// Any failure here means "no date", which callers treat as a skip.
fn parse_date(node: NodeRef<'_>) -> Result<NaiveDate, ExtractError> {
    let value = tree::find(node, tree::has_attr("datetime"))
        .and_then(|n| tree::attr(n, "datetime"))
        .ok_or(ExtractError::NoDate)?;

    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|e| {
        log::debug!("Unparsable interview date '{value}': {e}");
        ExtractError::NoDate
    })
}

fn parse_title(node: NodeRef<'_>) -> Result<String, ExtractError> {
    let title = find_section(node, &TITLE, Field::Title)?;
    Ok(TITLE_TEXT.extract(title).join(","))
}

fn find_section<'a>(
    node: NodeRef<'a>,
    matcher: &AttrMatcher,
    field: Field,
) -> Result<NodeRef<'a>, ExtractError> {
    tree::find(node, matcher).ok_or_else(|| ExtractError::missing(RECORD, field))
}
