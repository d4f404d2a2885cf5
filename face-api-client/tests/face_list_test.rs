//! Face list and large face list operations against a mock server.

mod common;

use common::{image_file, mock_client};
use face_api_client::{FaceError, FaceRectangle, ListParams, TargetFace, Trainable, Value};
use serde_json::json;
use wiremock::matchers::{any, body_bytes, body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn add_face_from_url_with_target() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/facelists/celebrities/persistedFaces"))
        .and(query_param("userData", "red carpet"))
        .and(query_param("targetFace", "10,20,100,120"))
        .and(body_json(json!({"url": "https://example.com/star.jpg"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"persistedFaceId": "pf1"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let list = mock_client(&server).face_lists().with_id("celebrities");
    let face = require_ok!(
        list.add_face(
            "https://example.com/star.jpg",
            Some("red carpet"),
            Some(FaceRectangle::new(10, 20, 100, 120).into()),
        )
        .await
    );

    assert_eq!(face.persisted_face_id.as_deref(), Some("pf1"));
    assert_eq!(face.user_data.as_deref(), Some("red carpet"));
}

#[tokio::test]
async fn add_face_from_file_to_large_list() {
    let bytes = b"\x89PNG fake image";
    let file = image_file(bytes);

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/largefacelists/big/persistedfaces"))
        .and(query_param("targetFace", "1,2,3,4"))
        .and(header("content-type", "application/octet-stream"))
        .and(body_bytes(bytes.to_vec()))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"persistedFaceId": "pf2"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let list = mock_client(&server).large_face_lists().with_id("big");
    let target = require_ok!(TargetFace::from_slice(&[1, 2, 3, 4]));
    let face = require_ok!(
        list.add_face(require_some!(file.path().to_str()), None, Some(target))
            .await
    );
    assert_eq!(face.persisted_face_id.as_deref(), Some("pf2"));
    assert!(face.user_data.is_none());
}

#[tokio::test]
async fn add_face_checks_identity_first() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = mock_client(&server)
        .face_lists()
        .add_face("https://example.com/star.jpg", None, None)
        .await
        .unwrap_err();
    assert!(matches!(err, FaceError::UninitializedResource { .. }));
}

#[tokio::test]
async fn get_face_list_hydrates_persisted_faces() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/facelists/celebrities"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "faceListId": "celebrities",
            "name": "Celebrities",
            "userData": null,
            "persistedFaces": [
                {"persistedFaceId": "pf1", "userData": "red carpet"},
                {"persistedFaceId": "pf2", "userData": null}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/facelists/celebrities/persistedFaces/pf2"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let list = require_ok!(
        mock_client(&server)
            .face_lists()
            .get("celebrities", false)
            .await
    );
    let faces = require_some!(list.record().get("persistedFaces").and_then(Value::as_records));
    assert_eq!(faces.len(), 2);
    assert!(faces.iter().all(|f| f.type_name() == "PersistedFace"));

    require_ok!(list.delete_face("pf2").await);
}

#[tokio::test]
async fn list_face_lists_with_recognition_model() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/facelists"))
        .and(query_param("returnRecognitionModel", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"faceListId": "a", "name": "A", "recognitionModel": "recognition_01"},
            {"faceListId": "b", "name": "B", "recognitionModel": "recognition_02"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let params = ListParams {
        return_recognition_model: Some(true),
        ..ListParams::default()
    };
    let lists = require_ok!(mock_client(&server).face_lists().list(&params).await);
    let models: Vec<Option<String>> = lists
        .iter()
        .map(|l| l.info().ok().and_then(|i| i.recognition_model))
        .collect();
    assert_eq!(
        models,
        [Some("recognition_01".to_string()), Some("recognition_02".to_string())]
    );
}

#[tokio::test]
async fn large_face_list_faces_and_training() {
    let server = MockServer::start().await;
    let base = "/largefacelists/big";
    Mock::given(method("GET"))
        .and(path(format!("{base}/persistedfaces")))
        .and(query_param("start", "pf0"))
        .and(query_param("top", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"persistedFaceId": "pf1", "userData": "one"},
            {"persistedFaceId": "pf2"}
        ])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path(format!("{base}/persistedfaces/pf1")))
        .and(body_json(json!({"userData": "uno"})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(format!("{base}/train")))
        .respond_with(ResponseTemplate::new(202))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("{base}/training")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "succeeded",
            "createdDateTime": "2019-03-01T10:00:00Z",
            "lastActionDateTime": "2019-03-01T10:00:05Z",
            "lastSuccessfulTrainingDateTime": "2019-03-01T10:00:05Z"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let list = mock_client(&server).large_face_lists().with_id("big");

    let faces = require_ok!(list.list_faces(Some("pf0"), Some(2)).await);
    assert_eq!(faces.len(), 2);
    assert_eq!(faces[0].user_data.as_deref(), Some("one"));

    require_ok!(list.update_face("pf1", Some("uno")).await);
    require_ok!(list.train().await);

    let status = require_ok!(list.training_status().await);
    assert!(status.is_succeeded());
    assert!(status.last_successful_training_at().is_some());
}
