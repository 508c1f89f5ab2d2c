//! Page-level extraction against the fixtures.

use chrono::{NaiveDate, TimeZone, Utc};
use empscrape::{ExtractError, Field, parse_interviews, parse_reviews};

const INTERVIEW: &str = include_str!("fixtures/interview.html");
const REVIEW: &str = include_str!("fixtures/review.html");

/// A featured interview: same markup, no `<time datetime>`.
const FEATURED: &str = r#"
<div data-test="Interview100Container">
    <h2 data-test="Interview100Title"><a>Featured Interview</a></h2>
    <div data-test="Interview100ApplicationDetails"><strong>Application</strong><p>Referral</p></div>
    <p data-test="Interview100Process">Two rounds.</p>
    <ul data-test="Interview100Questions"><li>Why us?</li></ul>
</div>"#;

const SECOND_INTERVIEW: &str = r#"
<div data-test="Interview200Container">
    <time datetime="2020-11-30">30 Nov 2020</time>
    <h2 data-test="Interview200Title"><a>Software Engineer Interview</a></h2>
    <div data-test="Interview200ApplicationDetails">
        <strong>Application</strong>
        <p>I applied online.
The process took 2 weeks.</p>
    </div>
    <p data-test="Interview200Process">Phone screen.

Onsite with four interviews.</p>
    <ul data-test="Interview200Questions">
        <li><span>Reverse a linked list.</span><a>1 Answer</a></li>
        <li><span>Design a cache.</span><a>Answer Question</a></li>
    </ul>
</div>"#;

const ADVICE_REVIEW: &str = r#"
<li class="empReview cf" id="empReview_777">
    <time class="date subtle small" datetime="Tue Dec 01 2020 09:15:00 GMT-0500 (Eastern Standard Time)">1 Dec 2020</time>
    <h2 class="h2 summary strong mb-xsm mt-0"><a>Fast paced</a></h2>
    <span class="rating"><span title="3.5"></span></span>
    <span data-test="pros">Smart people
Good pay</span>
    <span data-test="cons">Long hours</span>
    <span data-test="advice-management">Plan ahead</span>
</li>"#;

fn interview_page(fragments: &[&str]) -> String {
    format!(
        r#"<html><body><h1>Interviews</h1><div data-test="InterviewList">{}</div></body></html>"#,
        fragments.concat()
    )
}

fn review_page(fragments: &[&str]) -> String {
    format!(
        r#"<html><body><ol id="ReviewsFeed">{}</ol></body></html>"#,
        fragments.concat()
    )
}

#[test]
fn interviews_page_skips_featured_entries() {
    let html = interview_page(&[FEATURED, INTERVIEW, SECOND_INTERVIEW]);
    let interviews = parse_interviews(&html).unwrap();

    let ids: Vec<_> = interviews.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, ["44944117", "200"]);

    let first = &interviews[0];
    assert_eq!(first.date, NaiveDate::from_ymd_opt(2021, 4, 2).unwrap());
    assert_eq!(first.title, "Mechanical Engineer Intern Interview");
    assert_eq!(first.application, ["I interviewed at Tesla"]);
    assert_eq!(first.questions, ["Why do you want to work for Tesla?"]);

    let second = &interviews[1];
    assert_eq!(second.date, NaiveDate::from_ymd_opt(2020, 11, 30).unwrap());
    assert_eq!(
        second.application,
        ["I applied online.", "The process took 2 weeks."]
    );
    assert_eq!(second.process, ["Phone screen.", "Onsite with four interviews."]);
    assert_eq!(second.questions, ["Reverse a linked list.", "Design a cache."]);
}

#[test]
fn interviews_page_without_list_fails() {
    let html = format!("<html><body>{INTERVIEW}</body></html>");
    let err = parse_interviews(&html).unwrap_err();
    assert!(matches!(err, ExtractError::ContainerNotFound { .. }));
}

#[test]
fn interviews_page_with_empty_list_is_empty() {
    assert!(parse_interviews(&interview_page(&[])).unwrap().is_empty());
}

#[test]
fn interview_missing_section_aborts_page() {
    let broken = SECOND_INTERVIEW.replace("Interview200Questions", "Interview200Other");
    let html = interview_page(&[INTERVIEW, &broken]);
    let err = parse_interviews(&html).unwrap_err();
    assert_eq!(err.field(), Some(Field::Questions));
}

#[test]
fn reviews_page_in_document_order() {
    let html = review_page(&[REVIEW, ADVICE_REVIEW]);
    let reviews = parse_reviews(&html).unwrap();
    assert_eq!(reviews.len(), 2);

    let first = &reviews[0];
    assert_eq!(first.id, "45005756");
    assert_eq!(first.date, Utc.with_ymd_and_hms(2021, 4, 4, 16, 0, 47).unwrap());
    assert_eq!(first.rating, 5.0);
    assert_eq!(
        first.pros,
        ["Amazing work, very involved in day-to-day details of the company."]
    );
    assert_eq!(first.cons, ["Work-life balance is not the best."]);
    assert_eq!(first.advice, None);

    let second = &reviews[1];
    assert_eq!(second.id, "777");
    assert_eq!(second.date, Utc.with_ymd_and_hms(2020, 12, 1, 14, 15, 0).unwrap());
    assert_eq!(second.title, "Fast paced");
    assert_eq!(second.rating, 3.5);
    assert_eq!(second.pros, ["Smart people", "Good pay"]);
    assert_eq!(second.advice(), ["Plan ahead"]);
}

#[test]
fn malformed_rating_aborts_page() {
    let broken = ADVICE_REVIEW.replace(r#"title="3.5""#, r#"title="n/a""#);
    let html = review_page(&[REVIEW, &broken]);
    let err = parse_reviews(&html).unwrap_err();
    assert!(matches!(
        err,
        ExtractError::InvalidField {
            field: Field::Rating,
            ..
        }
    ));
}

#[test]
fn review_without_date_aborts_page() {
    let broken = ADVICE_REVIEW.replace(r#" datetime="Tue Dec 01 2020 09:15:00 GMT-0500 (Eastern Standard Time)""#, "");
    let err = parse_reviews(&review_page(&[&broken])).unwrap_err();
    assert_eq!(err.field(), Some(Field::Date));
}

#[test]
fn reviews_page_without_feed_fails() {
    let err = parse_reviews("<html><body><ol></ol></body></html>").unwrap_err();
    assert!(matches!(err, ExtractError::ContainerNotFound { record: "review", .. }));
}

#[test]
fn serialized_review_has_empty_advice() {
    let reviews = parse_reviews(&review_page(&[REVIEW])).unwrap();
    let value = serde_json::to_value(&reviews).unwrap();
    assert_eq!(value[0]["advice"], serde_json::json!([]));
    assert_eq!(value[0]["date"], "2021-04-04T16:00:47Z");
}
