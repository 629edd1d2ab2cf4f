use chrono::NaiveDate;
use mockito::Matcher;
use serde_json::json;
use std::fs;
use std::time::Duration;
use tempfile::TempDir;

use invoice_cli::api::ApiClient;
use invoice_cli::error::InvoiceError;
use invoice_cli::invoice::{upload_batch, DraftItem, InvoiceDraft};

fn client(server: &mockito::Server) -> ApiClient {
    ApiClient::new(&server.url(), Duration::from_secs(5)).unwrap()
}

fn invoice_json(id: i64) -> serde_json::Value {
    json!({
        "id": id,
        "invoice_number": "20260801",
        "date": "2026-08-01",
        "party_id": 1,
        "payment_term": "30 days",
        "party": {
            "id": 1,
            "company_name": "Acme Inc."
        },
        "line_items": []
    })
}

#[test]
fn create_invoice_posts_the_exact_payload() {
    let mut server = mockito::Server::new();

    let draft = InvoiceDraft {
        party_id: Some(1),
        invoice_number: "20260801".to_string(),
        date: NaiveDate::from_ymd_opt(2026, 8, 1).unwrap(),
        payment_term: None,
        items: vec![DraftItem {
            description: "Consulting".to_string(),
            rate: 650.0,
            quantity: 3.0,
            unit: "days".to_string(),
            group_name: String::new(),
        }],
        attachments: Vec::new(),
    };

    // Blank group and absent payment term must not appear on the wire.
    let create = server
        .mock("POST", "/api/invoices")
        .match_body(Matcher::Json(json!({
            "invoice_number": "20260801",
            "date": "2026-08-01",
            "party_id": 1,
            "line_items": [
                {
                    "description": "Consulting",
                    "rate": 650.0,
                    "quantity": 3.0,
                    "unit": "days"
                }
            ]
        })))
        .with_body(invoice_json(7).to_string())
        .expect(1)
        .create();

    let api = client(&server);
    let created = api.create_invoice(&draft.payload().unwrap()).unwrap();
    assert_eq!(created.id, 7);

    create.assert();
}

#[test]
fn non_2xx_responses_carry_the_server_detail() {
    let mut server = mockito::Server::new();

    server
        .mock("GET", "/api/invoices/9")
        .with_status(404)
        .with_body(json!({ "detail": "Invoice not found" }).to_string())
        .create();

    let api = client(&server);
    match api.get_invoice(9) {
        Err(InvoiceError::Api { status, detail }) => {
            assert_eq!(status, 404);
            assert_eq!(detail, "Invoice not found");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[test]
fn non_json_error_bodies_fall_back_to_raw_text() {
    let mut server = mockito::Server::new();

    server
        .mock("GET", "/api/parties")
        .with_status(502)
        .with_body("bad gateway")
        .create();

    let api = client(&server);
    match api.list_parties() {
        Err(InvoiceError::Api { status, detail }) => {
            assert_eq!(status, 502);
            assert_eq!(detail, "bad gateway");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[test]
fn invoice_totals_are_recomputed_from_line_items() {
    let mut server = mockito::Server::new();

    let mut body = invoice_json(7);
    body["line_items"] = json!([
        { "description": "Consulting", "rate": 650.0, "quantity": 3.0, "unit": "days" },
        { "description": "Travel", "rate": 0.1, "quantity": 3.0, "unit": "flat" }
    ]);
    server
        .mock("GET", "/api/invoices/7")
        .with_body(body.to_string())
        .create();

    let api = client(&server);
    let invoice = api.get_invoice(7).unwrap();
    assert!((invoice.total() - 1950.3).abs() < 1e-9);
}

#[test]
fn upload_batch_stops_at_the_first_failure() {
    let mut server = mockito::Server::new();
    let temp_dir = TempDir::new().unwrap();

    let file_a = temp_dir.path().join("a.txt");
    let file_b = temp_dir.path().join("b.txt");
    let file_c = temp_dir.path().join("c.txt");
    fs::write(&file_a, "a").unwrap();
    fs::write(&file_b, "b").unwrap();
    fs::write(&file_c, "c").unwrap();

    let upload_a = server
        .mock("POST", "/api/invoices/7/files")
        .match_body(Matcher::Regex("a\\.txt".to_string()))
        .with_body(
            json!({
                "message": "uploaded",
                "file_id": "f-1",
                "file_url": "https://drive.example/file/f-1",
                "filename": "a.txt"
            })
            .to_string(),
        )
        .expect(1)
        .create();
    let upload_b = server
        .mock("POST", "/api/invoices/7/files")
        .match_body(Matcher::Regex("b\\.txt".to_string()))
        .with_status(500)
        .with_body(json!({ "detail": "drive unavailable" }).to_string())
        .expect(1)
        .create();
    let upload_c = server
        .mock("POST", "/api/invoices/7/files")
        .match_body(Matcher::Regex("c\\.txt".to_string()))
        .expect(0)
        .create();

    let api = client(&server);
    let report = upload_batch(&api, 7, &[file_a.clone(), file_b.clone(), file_c.clone()]);

    assert_eq!(report.uploaded, vec![file_a]);
    let (failed, reason) = report.failed.expect("second upload should fail");
    assert_eq!(failed, file_b);
    assert!(reason.contains("drive unavailable"));
    assert_eq!(report.skipped, vec![file_c]);

    upload_a.assert();
    upload_b.assert();
    upload_c.assert();
}
