// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Integration tests for the HTTP panels using wiremock.

use espanel_lib::command::{Command, DataQuery, SetColorCommand, SettingsCommand};
use espanel_lib::protocol::{HttpClient, Protocol};
use espanel_lib::types::{Channel, DisplayColor, LedColor, RgbColor};
use espanel_lib::view::{ElementId, MemoryView, Notice};
use espanel_lib::{Error, PanelBuilder, PollOutcome, ProtocolError};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn reading(temp: f64) -> serde_json::Value {
    serde_json::json!({
        "temp": temp,
        "limits": [20.0, 22.0, 25.0, 28.0, 32.0]
    })
}

/// Returns an address nothing is listening on.
fn dead_address() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}

// ============================================================================
// HttpClient Tests
// ============================================================================

mod http_client {
    use super::*;

    #[tokio::test]
    async fn executes_data_query() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/data"))
            .respond_with(ResponseTemplate::new(200).set_body_json(reading(23.4)))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = HttpClient::new(mock_server.uri()).unwrap();
        let response = client.execute(&DataQuery.to_request()).await.unwrap();

        assert!(response.is_success());
        assert!(response.body().contains("23.4"));
    }

    #[tokio::test]
    async fn posts_settings_as_json() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/settings"))
            .and(body_json(serde_json::json!({
                "limits": [18.0, 21.5, 25.0, 28.0, 31.0]
            })))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = HttpClient::new(mock_server.uri()).unwrap();
        let cmd = SettingsCommand::new([18.0, 21.5, 25.0, 28.0, 31.0]);
        let response = client.execute(&cmd.to_request()).await.unwrap();

        assert_eq!(response.status(), 200);
    }

    #[tokio::test]
    async fn sends_color_as_query_params() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/set"))
            .and(query_param("r", "255"))
            .and(query_param("g", "128"))
            .and(query_param("b", "0"))
            .respond_with(ResponseTemplate::new(200).set_body_string("OK R=255 G=128 B=0"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = HttpClient::new(mock_server.uri()).unwrap();
        let cmd = SetColorCommand::new(RgbColor::new(255, 128, 0));
        let response = client.execute(&cmd.to_request()).await.unwrap();

        assert_eq!(response.body(), "OK R=255 G=128 B=0");
    }

    #[tokio::test]
    async fn error_status_is_not_a_transport_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/data"))
            .respond_with(ResponseTemplate::new(500).set_body_string("Internal error"))
            .mount(&mock_server)
            .await;

        let client = HttpClient::new(mock_server.uri()).unwrap();
        let response = client.execute(&DataQuery.to_request()).await.unwrap();

        assert_eq!(response.status(), 500);
        let err = response.ensure_success().unwrap_err();
        assert_eq!(err.status_code(), Some(500));
    }

    #[tokio::test]
    async fn unreachable_device_is_a_transport_error() {
        let client = HttpClient::new(dead_address()).unwrap();
        let err = client.execute(&DataQuery.to_request()).await.unwrap_err();

        assert!(matches!(err, ProtocolError::Http(_)));
    }
}

// ============================================================================
// Thermostat Panel Tests
// ============================================================================

mod thermostat_panel {
    use super::*;

    #[tokio::test]
    async fn poll_renders_reading() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/data"))
            .respond_with(ResponseTemplate::new(200).set_body_json(reading(23.4)))
            .mount(&mock_server)
            .await;

        let panel = PanelBuilder::http(mock_server.uri())
            .thermostat(MemoryView::new())
            .unwrap();

        assert_eq!(panel.poll().await.unwrap(), PollOutcome::Applied);

        panel.with_view(|view| {
            assert_eq!(view.text(ElementId::CurrentTemperature), Some("23.4 °C"));
            assert_eq!(
                view.temperature_color(),
                Some(DisplayColor::Led(LedColor::Green))
            );
            assert_eq!(view.text(ElementId::Threshold(0)), Some("20.0"));
            assert_eq!(view.text(ElementId::Threshold(4)), Some("32.0"));
        });
    }

    #[tokio::test]
    async fn poll_keeps_user_edits() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/data"))
            .respond_with(ResponseTemplate::new(200).set_body_json(reading(19.0)))
            .mount(&mock_server)
            .await;

        let panel = PanelBuilder::http(mock_server.uri())
            .thermostat(MemoryView::new())
            .unwrap();

        panel.poll().await.unwrap();
        panel.edit_threshold(2, "26.5").unwrap();
        panel.poll().await.unwrap();

        assert_eq!(panel.state().field(2).unwrap(), "26.5");
        panel.with_view(|view| {
            assert_eq!(view.text(ElementId::CurrentTemperature), Some("19.0 °C"));
            assert_eq!(view.temperature_color(), Some(DisplayColor::Accent));
        });
    }

    #[tokio::test]
    async fn poll_error_status_is_reported() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/data"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&mock_server)
            .await;

        let panel = PanelBuilder::http(mock_server.uri())
            .thermostat(MemoryView::new())
            .unwrap();

        let err = panel.poll().await.unwrap_err();
        assert!(matches!(
            err,
            Error::Protocol(ProtocolError::Status { code: 503 })
        ));
        panel.with_view(|view| {
            assert_eq!(view.text(ElementId::CurrentTemperature), None);
        });
    }

    #[tokio::test]
    async fn save_posts_form_and_refreshes() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/data"))
            .respond_with(ResponseTemplate::new(200).set_body_json(reading(21.0)))
            .expect(2)
            .mount(&mock_server)
            .await;

        Mock::given(method("POST"))
            .and(path("/api/settings"))
            .and(body_json(serde_json::json!({
                "limits": [19.5, 22.0, 25.0, 28.0, 32.0]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_string("Settings updated"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let panel = PanelBuilder::http(mock_server.uri())
            .thermostat(MemoryView::new())
            .unwrap();

        panel.poll().await.unwrap();
        panel.edit_threshold(0, "19.5").unwrap();
        panel.save().await.unwrap();

        panel.with_view(|view| {
            assert_eq!(view.last_notice(), Some(&Notice::Saved));
            assert_eq!(view.last_notice().unwrap().to_string(), "Settings saved!");
        });
    }

    #[tokio::test]
    async fn save_rejected_by_device() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/settings"))
            .respond_with(ResponseTemplate::new(400).set_body_string("Invalid limits"))
            .mount(&mock_server)
            .await;

        let panel = PanelBuilder::http(mock_server.uri())
            .thermostat(MemoryView::new())
            .unwrap();

        panel.edit_threshold(0, "21").unwrap();
        let err = panel.save().await.unwrap_err();

        assert!(matches!(
            err,
            Error::Protocol(ProtocolError::Status { code: 400 })
        ));
        assert_eq!(panel.state().field(0).unwrap(), "21");
        panel.with_view(|view| {
            assert_eq!(view.last_notice(), Some(&Notice::ServerError(400)));
        });
    }

    #[tokio::test]
    async fn save_to_unreachable_device() {
        let panel = PanelBuilder::http(dead_address())
            .thermostat(MemoryView::new())
            .unwrap();

        assert!(panel.save().await.is_err());
        panel.with_view(|view| {
            assert_eq!(view.notices(), &[Notice::ConnectionError]);
        });
    }
}

// ============================================================================
// Light Panel Tests
// ============================================================================

mod light_panel {
    use super::*;

    #[tokio::test]
    async fn load_then_apply() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/get"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "r": 12, "g": 34, "b": 56
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/set"))
            .and(query_param("r", "12"))
            .and(query_param("g", "200"))
            .and(query_param("b", "56"))
            .respond_with(ResponseTemplate::new(200).set_body_string("OK R=12 G=200 B=56\n"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let panel = PanelBuilder::http(mock_server.uri())
            .light(MemoryView::new())
            .unwrap();

        let loaded = panel.load_initial().await.unwrap();
        assert_eq!(loaded, Some(RgbColor::new(12, 34, 56)));

        panel.slider_input(Channel::Green, 200);
        panel.apply().await.unwrap();

        panel.with_view(|view| {
            assert_eq!(view.text(ElementId::Hex), Some("#0CC838"));
            assert_eq!(view.text(ElementId::Status), Some("OK R=12 G=200 B=56"));
        });
    }

    #[tokio::test]
    async fn off_sends_black() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/set"))
            .and(query_param("r", "0"))
            .and(query_param("g", "0"))
            .and(query_param("b", "0"))
            .respond_with(ResponseTemplate::new(200).set_body_string(""))
            .expect(1)
            .mount(&mock_server)
            .await;

        let panel = PanelBuilder::http(mock_server.uri())
            .light(MemoryView::new())
            .unwrap();

        panel.picker_input("#FF00FF");
        panel.off().await.unwrap();

        assert_eq!(panel.state().sliders(), RgbColor::black());
        assert_eq!(panel.state().status(), "OK");
    }

    #[tokio::test]
    async fn load_failure_sets_status() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/get"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&mock_server)
            .await;

        let panel = PanelBuilder::http(mock_server.uri())
            .light(MemoryView::new())
            .unwrap();

        assert!(panel.load_initial().await.is_err());
        assert_eq!(panel.state().status(), "Failed to retrieve state");
    }

    #[tokio::test]
    async fn apply_to_unreachable_lamp() {
        let panel = PanelBuilder::http(dead_address())
            .light(MemoryView::new())
            .unwrap();

        assert!(panel.apply().await.is_err());
        panel.with_view(|view| {
            assert_eq!(view.text(ElementId::Status), Some("Connection error"));
        });
    }
}
