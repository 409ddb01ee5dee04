//! Submission flow tests against a mocked recommendation service.

use httpmock::prelude::*;
use serde_json::json;

use glowquiz_core::{
    run_submission, PhotoFile, QuizAnswers, QuizError, RecommendClient, SubmitError,
};

fn selfie() -> PhotoFile {
    PhotoFile::new("selfie.png", vec![0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A])
}

fn answers() -> QuizAnswers {
    let mut answers = QuizAnswers::default();
    answers.set(glowquiz_core::QuizField::MakeupStyle, "natural");
    answers.set(glowquiz_core::QuizField::SkinType, "oily");
    answers.set(glowquiz_core::QuizField::Finish, "matte");
    answers
}

#[tokio::test]
async fn test_happy_path_returns_tone_and_products() {
    let server = MockServer::start();

    let upload = server.mock(|when, then| {
        when.method(POST).path("/upload-image");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({ "skin_tone": "medium" }));
    });

    // The body matcher pins the exact wire field names.
    let recommend = server.mock(|when, then| {
        when.method(POST).path("/full-makeup-recommend").json_body(json!({
            "skin_tone": "medium",
            "makeupStyle": "natural",
            "skinType": "oily",
            "finish": "matte"
        }));
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({
                "recommendations": [
                    { "id": 1, "name": "Lipstick A", "link": "http://x" }
                ]
            }));
    });

    let client = RecommendClient::new(server.base_url()).unwrap();
    let results = run_submission(&client, Some(&selfie()), &answers())
        .await
        .unwrap();

    assert_eq!(results.skin_tone, "medium");
    assert_eq!(results.recommendations.len(), 1);
    assert_eq!(results.recommendations[0].name, "Lipstick A");

    upload.assert();
    recommend.assert();
}

#[tokio::test]
async fn test_missing_photo_never_touches_the_network() {
    let server = MockServer::start();

    let upload = server.mock(|when, then| {
        when.method(POST).path("/upload-image");
        then.status(200).json_body(json!({ "skin_tone": "light" }));
    });

    let client = RecommendClient::new(server.base_url()).unwrap();
    let result = run_submission(&client, None, &answers()).await;

    assert!(matches!(result, Err(SubmitError::MissingPhoto)));
    assert_eq!(upload.hits(), 0);
}

#[tokio::test]
async fn test_upload_failure_leaves_everything_unset() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(POST).path("/upload-image");
        then.status(500);
    });

    let recommend = server.mock(|when, then| {
        when.method(POST).path("/full-makeup-recommend");
        then.status(200).json_body(json!({ "recommendations": [] }));
    });

    let client = RecommendClient::new(server.base_url()).unwrap();
    let result = run_submission(&client, Some(&selfie()), &answers()).await;

    match result {
        Err(SubmitError::Detect(QuizError::UnexpectedStatus { status, .. })) => {
            assert_eq!(status, 500);
        }
        other => panic!("expected a detect failure, got {:?}", other),
    }
    // The second call must never have been issued.
    assert_eq!(recommend.hits(), 0);
}

#[tokio::test]
async fn test_recommend_failure_still_carries_the_tone() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(POST).path("/upload-image");
        then.status(200).json_body(json!({ "skin_tone": "dark" }));
    });

    server.mock(|when, then| {
        when.method(POST).path("/full-makeup-recommend");
        then.status(502);
    });

    let client = RecommendClient::new(server.base_url()).unwrap();
    let result = run_submission(&client, Some(&selfie()), &answers()).await;

    match result {
        Err(SubmitError::Recommend { skin_tone, source }) => {
            assert_eq!(skin_tone, "dark");
            assert!(matches!(source, QuizError::UnexpectedStatus { status: 502, .. }));
        }
        other => panic!("expected a recommend failure, got {:?}", other),
    }
}

#[tokio::test]
async fn test_malformed_upload_body_is_a_parse_error() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(POST).path("/upload-image");
        then.status(200)
            .header("content-type", "application/json")
            .body("not valid json");
    });

    let client = RecommendClient::new(server.base_url()).unwrap();
    let result = run_submission(&client, Some(&selfie()), &answers()).await;

    assert!(matches!(
        result,
        Err(SubmitError::Detect(QuizError::Parse { .. }))
    ));
}

#[tokio::test]
async fn test_unanswered_fields_are_sent_as_empty_strings() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(POST).path("/upload-image");
        then.status(200).json_body(json!({ "skin_tone": "light" }));
    });

    let recommend = server.mock(|when, then| {
        when.method(POST).path("/full-makeup-recommend").json_body(json!({
            "skin_tone": "light",
            "makeupStyle": "",
            "skinType": "",
            "finish": ""
        }));
        then.status(200).json_body(json!({ "recommendations": [] }));
    });

    let client = RecommendClient::new(server.base_url()).unwrap();
    let results = run_submission(&client, Some(&selfie()), &QuizAnswers::default())
        .await
        .unwrap();

    assert_eq!(results.skin_tone, "light");
    assert!(results.recommendations.is_empty());
    recommend.assert();
}
