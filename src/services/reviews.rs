// src/services/reviews.rs

//! Review extraction.
//!
//! Reviews live under `#ReviewsFeed`, one `<li id="empReview_<id>">` each.

use std::sync::LazyLock;

use chrono::{DateTime, Utc, Weekday};
use regex::Regex;
use scraper::Html;

use crate::error::{ExtractError, Field};
use crate::models::Review;
use crate::services::list::{RecordParser, extract_list};
use crate::utils::text::Pipeline;
use crate::utils::tree::{self, AttrMatcher, NodeRef};

const RECORD: &str = "review";

/// `Apr 04 2021 17:00:47 +0100`, once the weekday, zone name and
/// abbreviation have been dropped.
const DATETIME_FORMAT: &str = "%b %d %Y %H:%M:%S %z";

static CONTAINER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^empReview_(?P<id>\d+)$").expect("valid review container pattern")
});

static LIST: LazyLock<AttrMatcher> = LazyLock::new(|| tree::with_id("ReviewsFeed"));
static CONTAINER: LazyLock<AttrMatcher> = LazyLock::new(|| tree::with_id_re(&CONTAINER_RE));
static TIMESTAMP: LazyLock<AttrMatcher> = LazyLock::new(|| tree::with_class("date subtle small"));
static RATING: LazyLock<AttrMatcher> = LazyLock::new(|| tree::with_class("rating"));
static TITLE: LazyLock<AttrMatcher> =
    LazyLock::new(|| tree::with_class("h2 summary strong mb-xsm mt-0"));
static PROS: LazyLock<AttrMatcher> = LazyLock::new(|| tree::with_data_test("pros"));
static CONS: LazyLock<AttrMatcher> = LazyLock::new(|| tree::with_data_test("cons"));
static ADVICE: LazyLock<AttrMatcher> = LazyLock::new(|| tree::with_data_test("advice-management"));

static LINES: LazyLock<Pipeline> = LazyLock::new(|| Pipeline::new().flatten_by_line());
static TITLE_TEXT: LazyLock<Pipeline> =
    LazyLock::new(|| Pipeline::new().flatten_by_line().strip_and_filter(&[]));

/// Parser for the reviews page.
pub struct ReviewParser;

impl RecordParser for ReviewParser {
    type Record = Review;

    const KIND: &'static str = RECORD;
    const CONTAINER: &'static str = "id=ReviewsFeed";

    fn container() -> &'static AttrMatcher {
        &LIST
    }

    fn fragment() -> &'static AttrMatcher {
        &CONTAINER
    }

    fn parse(fragment: NodeRef<'_>) -> Result<Review, ExtractError> {
        parse_review(fragment)
    }
}

/// Parse every review on a reviews page.
pub fn parse_reviews(html: &str) -> Result<Vec<Review>, ExtractError> {
    let document = Html::parse_document(html);
    extract_list::<ReviewParser>(&document)
}

/// Parse a single review fragment.
pub fn parse_review(node: NodeRef<'_>) -> Result<Review, ExtractError> {
    let id = parse_id(node)?;
    let date = parse_datetime(node)?;
    let rating = parse_rating(node)?;
    let title = parse_title(node)?;
    let pros = LINES.extract(find_section(node, &PROS, Field::Pros)?);
    let cons = LINES.extract(find_section(node, &CONS, Field::Cons)?);

    // not all reviews have advice
    let advice = tree::find(node, &*ADVICE).map(|n| LINES.extract(n));

    log::debug!("Parsed review {id}");

    Ok(Review {
        id,
        date,
        title,
        rating,
        pros,
        cons,
        advice,
    })
}

fn parse_id(node: NodeRef<'_>) -> Result<String, ExtractError> {
    tree::find_capture(node, "id", &CONTAINER_RE, "id")
        .map(str::to_string)
        .ok_or_else(|| ExtractError::missing(RECORD, Field::Id))
}

fn parse_datetime(node: NodeRef<'_>) -> Result<DateTime<Utc>, ExtractError> {
    let stamp = find_section(node, &TIMESTAMP, Field::Date)?;
    let value = nested_attr(stamp, "datetime")
        .ok_or_else(|| ExtractError::missing(RECORD, Field::Date))?;

    parse_timestamp(value)
}

/// Parse `Sun Apr 04 2021 17:00:47 GMT+0100 (British Summer Time)`.
///
/// The zone name in parentheses is redundant with the offset and dropped,
/// as is the abbreviation glued to the offset. The weekday must name a day
/// but is not checked against the date.
fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, ExtractError> {
    let invalid = |message: &str| ExtractError::invalid(RECORD, Field::Date, value, message);

    let mut parts = value.split(" (");
    let (Some(stamp), Some(_zone_name), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(invalid("expected one parenthesized zone name"));
    };

    let (weekday, stamp) = stamp
        .trim()
        .split_once(' ')
        .ok_or_else(|| invalid("missing weekday"))?;
    weekday
        .parse::<Weekday>()
        .map_err(|_| invalid("unknown weekday"))?;

    let (local, zone) = stamp
        .rsplit_once(' ')
        .ok_or_else(|| invalid("missing zone offset"))?;
    let offset = zone.trim_start_matches(|c: char| c.is_ascii_alphabetic());

    DateTime::parse_from_str(&format!("{local} {offset}"), DATETIME_FORMAT)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| invalid(&e.to_string()))
}

fn parse_rating(node: NodeRef<'_>) -> Result<f64, ExtractError> {
    let rating = find_section(node, &RATING, Field::Rating)?;
    let value = nested_attr(rating, "title")
        .ok_or_else(|| ExtractError::missing(RECORD, Field::Rating))?;

    value
        .trim()
        .parse::<f64>()
        .map_err(|e| ExtractError::invalid(RECORD, Field::Rating, value, e))
}

fn parse_title(node: NodeRef<'_>) -> Result<String, ExtractError> {
    let title = find_section(node, &TITLE, Field::Title)?;
    Ok(TITLE_TEXT.extract(title).join(","))
}

/// First value of attribute `name` in the subtree of `node`.
fn nested_attr<'a>(node: NodeRef<'a>, name: &'static str) -> Option<&'a str> {
    tree::find(node, tree::has_attr(name)).and_then(|n| tree::attr(n, name))
}

fn find_section<'a>(
    node: NodeRef<'a>,
    matcher: &AttrMatcher,
    field: Field,
) -> Result<NodeRef<'a>, ExtractError> {
    tree::find(node, matcher).ok_or_else(|| ExtractError::missing(RECORD, field))
}
